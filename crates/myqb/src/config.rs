#[cfg(feature = "tracing")]
use tracing::Level;

/// How `update_bulk` treats a spec that does not name a target column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulkUpdateMode {
    /// Every spec must provide every target column; otherwise
    /// [`QbError::IncompleteUpdate`](crate::QbError::IncompleteUpdate).
    #[default]
    Strict,
    /// Leave the spec out of that column's CASE block.
    SkipMissing,
}

/// Configuration for [`QueryBuilder`](crate::QueryBuilder).
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Bulk update handling of incomplete specs.
    pub bulk_update_mode: BulkUpdateMode,
    /// Tracing event level for built statements.
    #[cfg(feature = "tracing")]
    pub log_level: Level,
    /// Truncate logged SQL (in bytes, on a char boundary). `None` means no truncation.
    #[cfg(feature = "tracing")]
    pub max_logged_sql: Option<usize>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            bulk_update_mode: BulkUpdateMode::Strict,
            #[cfg(feature = "tracing")]
            log_level: Level::DEBUG,
            #[cfg(feature = "tracing")]
            max_logged_sql: Some(200),
        }
    }
}

impl BuilderConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bulk update mode.
    pub fn bulk_update_mode(mut self, mode: BulkUpdateMode) -> Self {
        self.bulk_update_mode = mode;
        self
    }

    /// Shorthand for [`BulkUpdateMode::SkipMissing`].
    pub fn skip_missing_columns(self) -> Self {
        self.bulk_update_mode(BulkUpdateMode::SkipMissing)
    }

    /// Override the tracing event level.
    #[cfg(feature = "tracing")]
    pub fn log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    /// Set maximum SQL length to log.
    #[cfg(feature = "tracing")]
    pub fn max_logged_sql(mut self, len: usize) -> Self {
        self.max_logged_sql = Some(len);
        self
    }

    /// Disable SQL truncation in logs.
    #[cfg(feature = "tracing")]
    pub fn no_truncate(mut self) -> Self {
        self.max_logged_sql = None;
        self
    }
}
