//! Clause assembly shared by every terminal operation.
//!
//! A statement is an ordered list of optional fragments. [`Clauses`] keeps the
//! present ones and joins them with a single space, so omission and ordering
//! live in one place.

use crate::bind::BindTable;
use crate::fragment::Conditions;
use crate::ident::write_quoted;

/// Ordered list of optional SQL fragments.
#[derive(Debug, Clone, Default)]
pub struct Clauses {
    parts: Vec<String>,
}

impl Clauses {
    /// Start with the leading fragment (e.g. `SELECT * FROM ...`).
    pub fn new(head: impl Into<String>) -> Self {
        Self {
            parts: vec![head.into()],
        }
    }

    /// Append `keyword body` when `body` is non-empty. An empty keyword appends
    /// the body alone.
    pub fn push_keyword(&mut self, keyword: &str, body: &str) -> &mut Self {
        if body.is_empty() {
            return self;
        }
        if keyword.is_empty() {
            self.parts.push(body.to_string());
        } else {
            self.parts.push(format!("{keyword} {body}"));
        }
        self
    }

    /// Append `keyword n` when `n` is present. Zero is a value, not absence.
    pub fn push_count(&mut self, keyword: &str, n: Option<u64>) -> &mut Self {
        if let Some(n) = n {
            self.parts.push(format!("{keyword} {n}"));
        }
        self
    }

    pub fn finish(self) -> String {
        self.parts.join(" ")
    }
}

/// Render `` `a` = :pa AND `b` = :pb `` over `conditions`, pushing one bind per
/// column in the same order.
///
/// `name` maps each column to its placeholder, including the leading `:`. It
/// sees the binds pushed so far and must return a name not yet in them.
pub fn equality_predicate(
    conditions: &Conditions,
    binds: &mut BindTable,
    mut name: impl FnMut(&BindTable, &str) -> String,
) -> String {
    let mut sql = String::new();
    for (i, (column, value)) in conditions.iter().enumerate() {
        if i > 0 {
            sql.push_str(" AND ");
        }
        let placeholder = name(&*binds, column);
        write_quoted(&mut sql, column);
        sql.push_str(" = ");
        sql.push_str(&placeholder);
        binds.push(placeholder, value.clone());
    }
    sql
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn clauses_skip_empty_parts() {
        let mut c = Clauses::new("SELECT * FROM `db`.`t`");
        c.push_keyword("", "")
            .push_keyword("WHERE", "`id` = :id")
            .push_keyword("GROUP BY", "")
            .push_count("LIMIT", None)
            .push_count("OFFSET", Some(0));
        assert_eq!(c.finish(), "SELECT * FROM `db`.`t` WHERE `id` = :id OFFSET 0");
    }

    #[test]
    fn predicate_orders_binds() {
        let conds = Conditions::new().with("id", 1).with("name", "Hadi Darwish");
        let mut binds = BindTable::new();
        let sql = equality_predicate(&conds, &mut binds, |b, c| b.unique_name(c));
        assert_eq!(sql, "`id` = :id AND `name` = :name");
        assert_eq!(binds.names().collect::<Vec<_>>(), vec![":id", ":name"]);
        assert_eq!(binds.get(":id").unwrap().value, Value::Int(1));
    }

    #[test]
    fn predicate_with_counter() {
        let conds = Conditions::new().with("id", 1).with("key", "k");
        let mut binds = BindTable::new();
        let mut k = 0;
        let sql = equality_predicate(&conds, &mut binds, |_, _| {
            k += 1;
            format!(":filter_{k}")
        });
        assert_eq!(sql, "`id` = :filter_1 AND `key` = :filter_2");
    }

    #[test]
    fn predicate_names_avoid_existing_binds() {
        let mut binds = BindTable::new();
        binds.push(":id", Value::Int(0));
        let conds = Conditions::new().with("id", 1);
        let sql = equality_predicate(&conds, &mut binds, |b, c| b.unique_name(c));
        assert_eq!(sql, "`id` = :id_2");
        assert_eq!(binds.get(":id_2").unwrap().value, Value::Int(1));
    }

    #[test]
    fn empty_predicate_is_empty() {
        let mut binds = BindTable::new();
        assert_eq!(equality_predicate(&Conditions::new(), &mut binds, |b, c| b.unique_name(c)), "");
        assert!(binds.is_empty());
    }
}
