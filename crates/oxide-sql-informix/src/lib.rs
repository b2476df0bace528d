//! # oxide-sql-informix
//!
//! Informix SQL dialect: renders abstract persistence requests as
//! Informix SQL text.
//!
//! This crate provides:
//! - Column type mapping from generic type codes, with length buckets
//!   (`varchar` up to 255, `lvarchar` up to 32739)
//! - `SELECT SKIP m FIRST n` pagination by rewriting the query text
//! - Sequence, identity and temporary table DDL strings
//! - Constraint-name extraction from Informix error messages
//! - Function templates (`concat`, optional `current_date`)
//!
//! Every operation is a pure function over tables built once when the
//! dialect is constructed, so a dialect can be shared freely between
//! threads.
//!
//! ## Example
//!
//! ```rust
//! use oxide_sql_informix::{Dialect, InformixDialect, TypeCode};
//!
//! let dialect = InformixDialect::new();
//!
//! assert_eq!(
//!     dialect.column_type_with_length(TypeCode::Varchar, 1000).unwrap(),
//!     "lvarchar(1000)"
//! );
//! assert_eq!(
//!     dialect.limit_string("select * from orders", 40, 20).unwrap(),
//!     "select skip 40 first 20 * from orders"
//! );
//! assert_eq!(
//!     oxide_sql_informix::extract_constraint_name(
//!         -268,
//!         "Unique constraint (informix.u_orders_ref) violated.",
//!     ),
//!     Some("u_orders_ref".to_string())
//! );
//! ```

pub mod config;
pub mod ddl;
pub mod dialect;
pub mod error;
pub mod exception;
pub mod function;
pub mod limit;
pub mod resolver;
pub mod type_names;
pub mod types;

pub use config::InformixOptions;
pub use dialect::{Dialect, GenericDialect, InformixDialect, JoinSyntax, extract_constraint_name};
pub use error::{DialectError, Result};
pub use exception::{SqlError, ViolatedConstraintNameExtractor};
pub use limit::RowSelection;
pub use resolver::DialectResolver;
pub use types::{ColumnSize, TypeCode};
