//! Error types for myqb

use indexmap::IndexMap;
use thiserror::Error;

use crate::translate::Translate;

/// Result type alias for myqb operations
pub type QbResult<T> = Result<T, QbError>;

/// Translation key shared by every "this must not be empty" condition.
pub const NOT_EMPTY_PARAM_KEY: &str = "exception.NotEmptyParam";

/// Translation key for a bulk-update spec that skips a target column.
pub const INCOMPLETE_UPDATE_KEY: &str = "exception.IncompleteUpdate";

/// Error types for statement building
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QbError {
    /// Builder was constructed with an empty database or table name
    #[error("Invalid construction: '{field}' cannot be empty")]
    InvalidConstruction { field: &'static str },

    /// A fragment required by the terminal operation is empty
    #[error("Missing argument: '{0}' cannot be empty")]
    MissingArgument(&'static str),

    /// A bulk-update spec does not provide a value for a target column
    #[error("Incomplete update: spec #{spec} has no value for column '{column}'")]
    IncompleteUpdate { spec: usize, column: String },
}

impl QbError {
    /// Create an invalid construction error for a named field
    pub fn invalid_construction(field: &'static str) -> Self {
        Self::InvalidConstruction { field }
    }

    /// Create a missing argument error for a named field
    pub fn missing(field: &'static str) -> Self {
        Self::MissingArgument(field)
    }

    /// Check if this is a missing argument error
    pub fn is_missing_argument(&self) -> bool {
        matches!(self, Self::MissingArgument(_))
    }

    /// The logical field this error is about.
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidConstruction { field } => field,
            Self::MissingArgument(field) => field,
            Self::IncompleteUpdate { column, .. } => column,
        }
    }

    /// Message key handed to the translation collaborator.
    pub fn translation_key(&self) -> &'static str {
        match self {
            Self::InvalidConstruction { .. } | Self::MissingArgument(_) => NOT_EMPTY_PARAM_KEY,
            Self::IncompleteUpdate { .. } => INCOMPLETE_UPDATE_KEY,
        }
    }

    /// Placeholder substitutions handed to the translation collaborator.
    pub fn translation_params(&self) -> IndexMap<String, String> {
        let mut params = IndexMap::new();
        match self {
            Self::InvalidConstruction { field } | Self::MissingArgument(field) => {
                params.insert("::params::".to_string(), (*field).to_string());
            }
            Self::IncompleteUpdate { spec, column } => {
                params.insert("::params::".to_string(), column.clone());
                params.insert("::column::".to_string(), column.clone());
                params.insert("::spec::".to_string(), spec.to_string());
            }
        }
        params
    }

    /// Render the user-facing message through a translator.
    ///
    /// `locale = None` lets the translator pick its default language.
    pub fn localized(&self, translator: &impl Translate, locale: Option<&str>) -> String {
        translator.translate(self.translation_key(), locale, &self.translation_params())
    }
}
