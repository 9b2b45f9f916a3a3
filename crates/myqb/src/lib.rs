//! # myqb
//!
//! A parameterized MySQL statement builder.
//!
//! A [`QueryBuilder`] is scoped to one `` `database`.`table` `` and holds the
//! statement fragments (data, where, join, group, having, order, limit,
//! offset). Each terminal operation returns a [`Statement`]: SQL with fully
//! quoted identifiers and named placeholders, plus a [`BindTable`] mapping every
//! placeholder to its value and driver [`TypeHint`]. Nothing is executed.
//!
//! ## Features
//!
//! - **Named placeholders**: `:column` for predicates, `:column_n` per insert row,
//!   `:filter_k` / `:bind_m` for bulk updates
//! - **Closed value set**: [`Value`] maps to a two-valued [`TypeHint`] through a
//!   fixed table compatible with PDO's `PARAM_INT` / `PARAM_STR`
//! - **No hidden state**: every terminal call builds its own bind table
//! - **Bulk update via CASE**: many rows, heterogeneous filters, one statement
//!
//! ```ignore
//! use myqb::{Conditions, QueryBuilder, Row, UpdateSpec};
//!
//! let mut qb = QueryBuilder::new("shop", "users")?;
//!
//! // INSERT
//! qb.append_row(Row::new().with("name", "alice").with("age", 30));
//! let (sql, binds) = qb.insert()?.into_parts();
//!
//! // SELECT
//! qb.clear_data().append_column("name").append_to_where("id", 1).set_limit(10);
//! let stmt = qb.select();
//!
//! // DELETE
//! let stmt = qb.delete();
//!
//! // UPDATE many rows at once
//! qb.clear_where()
//!     .append_update(UpdateSpec::new(Conditions::new().with("id", 1), Row::new().with("age", 31)))
//!     .append_update(UpdateSpec::new(Conditions::new().with("id", 2), Row::new().with("age", 41)));
//! let stmt = qb.update_bulk()?;
//! # Ok::<(), myqb::QbError>(())
//! ```

pub mod bind;
pub mod builder;
pub mod clause;
pub mod config;
pub mod error;
pub mod fragment;
pub mod ident;
pub mod prelude;
pub mod statement;
pub mod translate;
pub mod value;

pub use bind::{Bind, BindTable};
pub use builder::QueryBuilder;
pub use clause::{Clauses, equality_predicate};
pub use config::{BuilderConfig, BulkUpdateMode};
pub use error::{QbError, QbResult};
pub use fragment::{Conditions, Data, Row, UpdateSpec, ValueMap};
pub use ident::{qualified, quote};
pub use statement::{Statement, StatementKind};
pub use translate::{StaticTranslator, Translate};
pub use value::{TypeHint, Value, infer_type};
