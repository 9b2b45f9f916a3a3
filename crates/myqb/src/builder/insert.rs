use super::QueryBuilder;
use crate::bind::BindTable;
use crate::error::{QbError, QbResult};
use crate::ident::quote;
use crate::statement::{Statement, StatementKind};

impl QueryBuilder {
    /// Build a multi-row INSERT.
    ///
    /// The column list comes from the first row. Row `i` (1-based) binds column
    /// `c` as `:c_i`. Later rows are expected to carry the same columns in the
    /// same order; this is not re-checked.
    pub fn insert(&self) -> QbResult<Statement> {
        let rows = self.data.rows();
        let Some(first) = rows.first() else {
            return Err(QbError::missing("data"));
        };

        let columns: Vec<String> = first.columns().map(quote).collect();
        let mut binds = BindTable::new();
        let mut values = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let n = i + 1;
            let placeholders: Vec<String> = row
                .iter()
                .map(|(column, value)| {
                    let name = format!(":{column}_{n}");
                    binds.push(name.clone(), value.clone());
                    name
                })
                .collect();
            values.push(format!("({})", placeholders.join(", ")));
        }

        let sql = format!(
            "INSERT INTO {} ({}) VALUES {}",
            self.target(),
            columns.join(", "),
            values.join(", ")
        );
        Ok(self.finish(StatementKind::Insert, sql, binds))
    }
}
