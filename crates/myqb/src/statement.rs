//! The output of a terminal operation.

use std::fmt;

use serde::Serialize;
#[cfg(feature = "tracing")]
use tracing::Level;

use crate::bind::BindTable;
#[cfg(feature = "tracing")]
use crate::config::BuilderConfig;

/// The kind of statement that was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    Insert,
    Delete,
    Select,
    Update,
    UpdateBulk,
}

impl StatementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StatementKind::Insert => "insert",
            StatementKind::Delete => "delete",
            StatementKind::Select => "select",
            StatementKind::Update => "update",
            StatementKind::UpdateBulk => "update_bulk",
        }
    }
}

/// SQL text plus the bind table for every placeholder it contains.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    kind: StatementKind,
    sql: String,
    binds: BindTable,
}

impl Statement {
    pub(crate) fn new(kind: StatementKind, sql: String, binds: BindTable) -> Self {
        Self { kind, sql, binds }
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn binds(&self) -> &BindTable {
        &self.binds
    }

    /// Split into `(sql, binds)`.
    pub fn into_parts(self) -> (String, BindTable) {
        (self.sql, self.binds)
    }

    /// Named placeholders (`:name`) in the order they appear in the SQL.
    ///
    /// Text inside backtick identifiers and single-quoted literals is skipped.
    pub fn placeholders(&self) -> Vec<&str> {
        scan_placeholders(&self.sql)
    }

    #[cfg(feature = "tracing")]
    pub(crate) fn trace(&self, config: &BuilderConfig) {
        /// Dispatch a tracing event at a runtime-determined level.
        macro_rules! emit_at_level {
            ($level:expr, $($field:tt)*) => {
                match $level {
                    Level::ERROR => tracing::error!($($field)*),
                    Level::WARN  => tracing::warn!($($field)*),
                    Level::INFO  => tracing::info!($($field)*),
                    Level::DEBUG => tracing::debug!($($field)*),
                    Level::TRACE => tracing::trace!($($field)*),
                }
            };
        }

        let sql = match config.max_logged_sql {
            Some(max) if self.sql.len() > max => {
                format!("{}...", truncate_sql_bytes(&self.sql, max))
            }
            _ => self.sql.clone(),
        };
        emit_at_level!(
            config.log_level,
            target: "myqb.sql",
            kind = self.kind.as_str(),
            bind_count = self.binds.len(),
            sql = %sql,
        );
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

#[cfg(feature = "tracing")]
fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

fn is_placeholder_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'.'
}

pub(crate) fn scan_placeholders(sql: &str) -> Vec<&str> {
    let bytes = sql.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            quote @ (b'`' | b'\'') => {
                // Doubled quote is an escape; keep scanning.
                i += 1;
                while i < bytes.len() {
                    if bytes[i] == quote {
                        if bytes.get(i + 1) == Some(&quote) {
                            i += 2;
                            continue;
                        }
                        break;
                    }
                    i += 1;
                }
                i += 1;
            }
            b':' => {
                let start = i;
                i += 1;
                while i < bytes.len() && is_placeholder_char(bytes[i]) {
                    i += 1;
                }
                if i > start + 1 {
                    out.push(&sql[start..i]);
                }
            }
            _ => i += 1,
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_plain_and_dotted() {
        let sql = "SELECT * FROM `db`.`t` WHERE `id` = :id HAVING `users.id` = :users.id";
        assert_eq!(scan_placeholders(sql), vec![":id", ":users.id"]);
    }

    #[test]
    fn skips_quoted_text() {
        let sql = "SELECT `a:b` FROM t WHERE x = 'at :noon' AND `c` = :c";
        assert_eq!(scan_placeholders(sql), vec![":c"]);
    }

    #[test]
    fn lone_colon_is_not_a_placeholder() {
        assert!(scan_placeholders("SELECT 1 : 2").is_empty());
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn truncate_respects_char_boundary() {
        assert_eq!(truncate_sql_bytes("héllo", 2), "h");
        assert_eq!(truncate_sql_bytes("abc", 10), "abc");
    }
}
