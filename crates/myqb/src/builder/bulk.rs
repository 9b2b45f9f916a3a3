use super::QueryBuilder;
use crate::bind::BindTable;
use crate::clause::equality_predicate;
use crate::config::BulkUpdateMode;
use crate::error::{QbError, QbResult};
use crate::ident::quote;
use crate::statement::{Statement, StatementKind};

impl QueryBuilder {
    /// Update many rows in one statement with one `CASE` per target column.
    ///
    /// Target columns are collected from every spec's `values` in first-seen
    /// order. Each column block gets one `WHEN <filter> THEN :bind_m` arm per
    /// spec, in spec order, and ends with `ELSE <column>` so unmatched rows keep
    /// their value. `:filter_k` and `:bind_m` count from 1 across the whole
    /// statement.
    ///
    /// With [`BulkUpdateMode::Strict`] every spec must name every target
    /// column. With [`BulkUpdateMode::SkipMissing`] a spec only contributes arms
    /// to the columns it names.
    pub fn update_bulk(&self) -> QbResult<Statement> {
        let specs = self.data.updates();
        if specs.is_empty() {
            return Err(QbError::missing("data"));
        }
        if specs.iter().any(|spec| spec.filter.is_empty()) {
            return Err(QbError::missing("filter"));
        }

        let mut targets: Vec<&str> = Vec::new();
        for spec in specs {
            for column in spec.values.columns() {
                if !targets.contains(&column) {
                    targets.push(column);
                }
            }
        }
        if targets.is_empty() {
            return Err(QbError::missing("values"));
        }

        if self.config.bulk_update_mode == BulkUpdateMode::Strict {
            for (index, spec) in specs.iter().enumerate() {
                if let Some(column) = targets.iter().find(|c| !spec.values.contains(c)) {
                    return Err(QbError::IncompleteUpdate {
                        spec: index,
                        column: column.to_string(),
                    });
                }
            }
        }

        let mut binds = BindTable::new();
        let mut filter_n = 0usize;
        let mut bind_n = 0usize;
        let mut blocks = Vec::with_capacity(targets.len());
        for column in &targets {
            let quoted = quote(column);
            let mut block = format!("{quoted} = CASE");
            for spec in specs {
                let Some(value) = spec.values.get(column) else {
                    continue;
                };
                let predicate = equality_predicate(&spec.filter, &mut binds, |_, _| {
                    filter_n += 1;
                    format!(":filter_{filter_n}")
                });
                bind_n += 1;
                let name = format!(":bind_{bind_n}");
                block.push_str(" WHEN ");
                block.push_str(&predicate);
                block.push_str(" THEN ");
                block.push_str(&name);
                binds.push(name, value.clone());
            }
            block.push_str(" ELSE ");
            block.push_str(&quoted);
            block.push_str(" END");
            blocks.push(block);
        }

        let sql = format!("UPDATE {} SET {}", self.target(), blocks.join(", "));
        Ok(self.finish(StatementKind::UpdateBulk, sql, binds))
    }
}
