use super::QueryBuilder;
use crate::bind::BindTable;
use crate::clause::{Clauses, equality_predicate};
use crate::error::{QbError, QbResult};
use crate::ident::write_quoted;
use crate::statement::{Statement, StatementKind};

impl QueryBuilder {
    /// Build a single-statement UPDATE from [`Data::Values`](crate::Data::Values).
    ///
    /// SET placeholders are `:col`; WHERE placeholders are `:where_col`. Either
    /// gets a `_2`, `_3`, ... suffix when its name is already bound, so a column
    /// may be both assigned and filtered on.
    pub fn update(&self) -> QbResult<Statement> {
        let Some(values) = self.data.values() else {
            return Err(QbError::missing("data"));
        };

        let mut binds = BindTable::new();
        let mut set = String::new();
        for (i, (column, value)) in values.iter().enumerate() {
            if i > 0 {
                set.push_str(", ");
            }
            let name = binds.unique_name(column);
            write_quoted(&mut set, column);
            set.push_str(" = ");
            set.push_str(&name);
            binds.push(name, value.clone());
        }

        let mut clauses = Clauses::new(format!("UPDATE {} SET {}", self.target(), set));
        clauses.push_keyword("", &self.join.join(" "));
        let predicate = equality_predicate(&self.where_conditions, &mut binds, |b, column| {
            b.unique_name(&format!("where_{column}"))
        });
        clauses.push_keyword("WHERE", &predicate);
        Ok(self.finish(StatementKind::Update, clauses.finish(), binds))
    }
}
