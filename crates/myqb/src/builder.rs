//! Statement builder scoped to one `database`.`table`.
//!
//! A [`QueryBuilder`] holds independently settable fragments (data, where, join,
//! group, having, order, limit, offset). Terminal operations read the fragments
//! they need and return a fresh [`Statement`]; the builder itself is never
//! modified by them, so calling two terminal operations in a row never merges
//! their bind tables.
//!
//! # Example
//! ```ignore
//! use myqb::{QueryBuilder, Row};
//!
//! let mut qb = QueryBuilder::new("db", "users")?;
//! qb.set_data(vec![Row::new().with("name", "Hadi Darwish").with("age", 22)]);
//! let stmt = qb.insert()?;
//! assert_eq!(
//!     stmt.sql(),
//!     "INSERT INTO `db`.`users` (`name`, `age`) VALUES (:name_1, :age_1)"
//! );
//!
//! let mut qb = QueryBuilder::new("db", "users")?;
//! qb.append_to_where("id", 1).set_limit(10);
//! let stmt = qb.select();
//! assert_eq!(stmt.sql(), "SELECT * FROM `db`.`users` WHERE `id` = :id LIMIT 10");
//! # Ok::<(), myqb::QbError>(())
//! ```

use crate::bind::BindTable;
use crate::config::BuilderConfig;
use crate::error::{QbError, QbResult};
use crate::fragment::{Conditions, Data, Row, UpdateSpec};
use crate::ident::{qualified, quote};
use crate::statement::{Statement, StatementKind};
use crate::value::Value;

mod bulk;
mod delete;
mod insert;
mod select;
mod update;

/// Parameterized statement builder for one table.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    database: String,
    table: String,
    config: BuilderConfig,
    /// Rows / columns / update specs, depending on the operation
    data: Data,
    /// WHERE equality predicates
    where_conditions: Conditions,
    /// JOIN clauses, emitted verbatim
    join: Vec<String>,
    /// GROUP BY expressions, emitted verbatim
    group: Vec<String>,
    /// HAVING equality predicates
    having: Conditions,
    /// ORDER BY expressions, emitted verbatim
    order: Vec<String>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl QueryBuilder {
    /// Create a builder for `database`.`table`.
    ///
    /// Fails with [`QbError::InvalidConstruction`] naming the first empty field.
    pub fn new(database: impl Into<String>, table: impl Into<String>) -> QbResult<Self> {
        let database = database.into();
        let table = table.into();
        if database.is_empty() {
            return Err(QbError::invalid_construction("database"));
        }
        if table.is_empty() {
            return Err(QbError::invalid_construction("table"));
        }
        Ok(Self {
            database,
            table,
            config: BuilderConfig::default(),
            data: Data::Empty,
            where_conditions: Conditions::new(),
            join: Vec::new(),
            group: Vec::new(),
            having: Conditions::new(),
            order: Vec::new(),
            limit: None,
            offset: None,
        })
    }

    /// Replace the builder configuration.
    pub fn with_config(mut self, config: BuilderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    // ==================== Data ====================

    pub fn data(&self) -> &Data {
        &self.data
    }

    /// Replace the data fragment.
    pub fn set_data(&mut self, data: impl Into<Data>) -> &mut Self {
        self.data = data.into();
        self
    }

    pub fn clear_data(&mut self) -> &mut Self {
        self.data = Data::Empty;
        self
    }

    /// Append an insert row. Switches the fragment to rows if it held another shape.
    pub fn append_row(&mut self, row: Row) -> &mut Self {
        match &mut self.data {
            Data::Rows(rows) => rows.push(row),
            other => *other = Data::Rows(vec![row]),
        }
        self
    }

    /// Append a select column. Switches the fragment to columns if it held another shape.
    pub fn append_column(&mut self, column: impl Into<String>) -> &mut Self {
        match &mut self.data {
            Data::Columns(cols) => cols.push(column.into()),
            other => *other = Data::Columns(vec![column.into()]),
        }
        self
    }

    /// Append a bulk-update spec. Switches the fragment to specs if it held another shape.
    pub fn append_update(&mut self, spec: UpdateSpec) -> &mut Self {
        match &mut self.data {
            Data::Updates(specs) => specs.push(spec),
            other => *other = Data::Updates(vec![spec]),
        }
        self
    }

    /// Set one SET value for [`update`](Self::update). Switches the fragment to
    /// values if it held another shape.
    pub fn append_value(&mut self, column: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        match &mut self.data {
            Data::Values(row) => row.set(column, value),
            other => *other = Data::Values(Row::new().with(column, value)),
        }
        self
    }

    // ==================== WHERE ====================

    pub fn where_conditions(&self) -> &Conditions {
        &self.where_conditions
    }

    pub fn set_where(&mut self, conditions: impl Into<Conditions>) -> &mut Self {
        self.where_conditions = conditions.into();
        self
    }

    /// Add WHERE: column = value
    pub fn append_to_where(
        &mut self,
        column: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.where_conditions.set(column, value);
        self
    }

    pub fn clear_where(&mut self) -> &mut Self {
        self.where_conditions = Conditions::new();
        self
    }

    // ==================== JOIN / GROUP BY / ORDER BY ====================

    pub fn join(&self) -> &[String] {
        &self.join
    }

    pub fn set_join<I, S>(&mut self, clauses: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.join = clauses.into_iter().map(Into::into).collect();
        self
    }

    /// Add a complete JOIN clause, e.g. ``INNER JOIN `db`.`users` ON ...``.
    pub fn append_to_join(&mut self, clause: impl Into<String>) -> &mut Self {
        self.join.push(clause.into());
        self
    }

    pub fn clear_join(&mut self) -> &mut Self {
        self.join.clear();
        self
    }

    pub fn group(&self) -> &[String] {
        &self.group
    }

    pub fn set_group<I, S>(&mut self, exprs: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group = exprs.into_iter().map(Into::into).collect();
        self
    }

    pub fn append_to_group(&mut self, expr: impl Into<String>) -> &mut Self {
        self.group.push(expr.into());
        self
    }

    pub fn clear_group(&mut self) -> &mut Self {
        self.group.clear();
        self
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn set_order<I, S>(&mut self, exprs: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order = exprs.into_iter().map(Into::into).collect();
        self
    }

    /// Add ORDER BY expression, e.g. ``"`users`.`id` DESC"``.
    pub fn append_to_order(&mut self, expr: impl Into<String>) -> &mut Self {
        self.order.push(expr.into());
        self
    }

    pub fn clear_order(&mut self) -> &mut Self {
        self.order.clear();
        self
    }

    // ==================== HAVING ====================

    pub fn having(&self) -> &Conditions {
        &self.having
    }

    pub fn set_having(&mut self, conditions: impl Into<Conditions>) -> &mut Self {
        self.having = conditions.into();
        self
    }

    /// Add HAVING: `expr` = value. The expression is quoted as one identifier.
    pub fn append_to_having(
        &mut self,
        expr: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.having.set(expr, value);
        self
    }

    pub fn clear_having(&mut self) -> &mut Self {
        self.having = Conditions::new();
        self
    }

    // ==================== Pagination ====================

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    /// Set LIMIT. `0` is emitted as `LIMIT 0`.
    pub fn set_limit(&mut self, n: u64) -> &mut Self {
        self.limit = Some(n);
        self
    }

    pub fn clear_limit(&mut self) -> &mut Self {
        self.limit = None;
        self
    }

    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    /// Set OFFSET. `0` is emitted as `OFFSET 0`.
    pub fn set_offset(&mut self, n: u64) -> &mut Self {
        self.offset = Some(n);
        self
    }

    pub fn clear_offset(&mut self) -> &mut Self {
        self.offset = None;
        self
    }

    // ==================== Helpers ====================

    fn target(&self) -> String {
        qualified(&self.database, &self.table)
    }

    fn select_list(&self) -> String {
        match self.data.columns() {
            [] => "*".to_string(),
            [only] if only.is_empty() => "*".to_string(),
            cols => cols.iter().map(|c| quote(c)).collect::<Vec<_>>().join(", "),
        }
    }

    fn finish(&self, kind: StatementKind, sql: String, binds: BindTable) -> Statement {
        let stmt = Statement::new(kind, sql, binds);
        #[cfg(feature = "tracing")]
        stmt.trace(&self.config);
        stmt
    }
}
