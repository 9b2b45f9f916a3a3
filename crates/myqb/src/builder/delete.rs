use super::QueryBuilder;
use crate::bind::BindTable;
use crate::clause::{Clauses, equality_predicate};
use crate::statement::{Statement, StatementKind};

impl QueryBuilder {
    /// Build a DELETE. No fragment is required; without WHERE every row is deleted.
    pub fn delete(&self) -> Statement {
        let mut binds = BindTable::new();
        let mut clauses = Clauses::new(format!("DELETE FROM {}", self.target()));
        clauses.push_keyword("", &self.join.join(" "));
        let predicate =
            equality_predicate(&self.where_conditions, &mut binds, |b, c| b.unique_name(c));
        clauses.push_keyword("WHERE", &predicate);
        self.finish(StatementKind::Delete, clauses.finish(), binds)
    }
}
