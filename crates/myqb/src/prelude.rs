//! Convenient imports for typical `myqb` usage.
//!
//! ```ignore
//! use myqb::prelude::*;
//! ```

pub use crate::{
    BindTable, BuilderConfig, BulkUpdateMode, Conditions, QbError, QbResult, QueryBuilder, Row,
    Statement, TypeHint, UpdateSpec, Value,
};
