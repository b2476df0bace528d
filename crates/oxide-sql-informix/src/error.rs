//! Error types for the Informix dialect.

use crate::types::TypeCode;

/// Errors that can occur while rendering dialect-specific SQL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialectError {
    /// An argument is outside the domain the operation accepts.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A query handed to the limit rewrite contains no `select` keyword.
    #[error("Cannot apply limit: query contains no SELECT keyword")]
    MissingSelectKeyword,

    /// Neither the dialect nor the default table maps the type code.
    #[error("No type mapping for type code {type_code} ({})", type_code.code())]
    NoTypeMapping {
        /// The unmapped type code.
        type_code: TypeCode,
    },

    /// A type name or numeric code does not denote a known type code.
    #[error("Unknown type code: {0}")]
    UnknownTypeCode(String),

    /// No SQL function is registered under the name.
    #[error("Unknown SQL function: {0}")]
    UnknownFunction(String),

    /// A SQL function was called with the wrong number of arguments.
    #[error("Function '{name}' takes {expected} argument(s), got {actual}")]
    FunctionArity {
        /// Registered function name.
        name: String,
        /// Number of arguments the function accepts.
        expected: usize,
        /// Number of arguments supplied.
        actual: usize,
    },

    /// The dialect does not support the requested operation.
    #[error("{dialect} dialect does not support {operation}")]
    Unsupported {
        /// Name of the dialect.
        dialect: &'static str,
        /// Operation that was requested.
        operation: &'static str,
    },

    /// Dialect options could not be deserialized.
    #[error("Invalid dialect options: {0}")]
    Options(String),
}

/// Result type for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;
