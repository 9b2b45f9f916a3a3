//! MySQL identifier quoting.
//!
//! Every identifier the builder owns (database, table, column names, HAVING
//! expressions) is wrapped in backticks. Embedded backticks are escaped by
//! doubling, the same way MySQL reads them back.
//!
//! Join, group and order entries are caller-supplied SQL and are never passed
//! through here.
//!
//! # Example
//! ```ignore
//! use myqb::ident::{quote, qualified};
//!
//! assert_eq!(quote("name"), "`name`");
//! assert_eq!(qualified("db", "users"), "`db`.`users`");
//! ```

/// Wrap an identifier in backticks.
///
/// Dots are not treated as separators: `users.id` becomes `` `users.id` ``.
pub fn quote(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 2);
    write_quoted(&mut out, ident);
    out
}

/// Render `` `database`.`table` ``.
pub fn qualified(database: &str, table: &str) -> String {
    let mut out = String::with_capacity(database.len() + table.len() + 5);
    write_quoted(&mut out, database);
    out.push('.');
    write_quoted(&mut out, table);
    out
}

pub(crate) fn write_quoted(out: &mut String, ident: &str) {
    out.push('`');
    for ch in ident.chars() {
        if ch == '`' {
            out.push_str("``");
        } else {
            out.push(ch);
        }
    }
    out.push('`');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_simple() {
        assert_eq!(quote("users"), "`users`");
    }

    #[test]
    fn quote_dotted_is_single_identifier() {
        assert_eq!(quote("users.id"), "`users.id`");
    }

    #[test]
    fn quote_escapes_backtick() {
        assert_eq!(quote("we`ird"), "`we``ird`");
    }

    #[test]
    fn qualified_db_table() {
        assert_eq!(qualified("db", "table"), "`db`.`table`");
    }
}
