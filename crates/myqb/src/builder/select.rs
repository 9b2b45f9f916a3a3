use super::QueryBuilder;
use crate::bind::BindTable;
use crate::clause::{Clauses, equality_predicate};
use crate::statement::{Statement, StatementKind};

impl QueryBuilder {
    /// Build a SELECT with every fragment in fixed order:
    /// JOIN, WHERE, GROUP BY, HAVING, ORDER BY, LIMIT, OFFSET.
    pub fn select(&self) -> Statement {
        let mut binds = BindTable::new();
        let mut clauses = Clauses::new(format!(
            "SELECT {} FROM {}",
            self.select_list(),
            self.target()
        ));
        clauses.push_keyword("", &self.join.join(" "));

        let predicate =
            equality_predicate(&self.where_conditions, &mut binds, |b, c| b.unique_name(c));
        clauses.push_keyword("WHERE", &predicate);
        clauses.push_keyword("GROUP BY", &self.group.join(", "));

        // A HAVING expression whose name is taken becomes `:expr_having`, then
        // `:expr_having_2`, ... until it is free.
        let having = equality_predicate(&self.having, &mut binds, |b, expr| {
            let plain = format!(":{expr}");
            if b.contains(&plain) {
                b.unique_name(&format!("{expr}_having"))
            } else {
                plain
            }
        });
        clauses.push_keyword("HAVING", &having);

        clauses
            .push_keyword("ORDER BY", &self.order.join(", "))
            .push_count("LIMIT", self.limit)
            .push_count("OFFSET", self.offset);
        self.finish(StatementKind::Select, clauses.finish(), binds)
    }
}
