//! Generic SQL type codes.
//!
//! The codes follow `java.sql.Types`, which is what the persistence layer
//! hands to a dialect when it needs a column type. Vendor-specific types
//! all share [`TypeCode::Other`], which no dialect maps.

use std::fmt;
use std::str::FromStr;

use crate::error::DialectError;

/// A generic SQL type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeCode {
    Bit,
    Tinyint,
    Smallint,
    Integer,
    Bigint,
    Float,
    Real,
    Double,
    Numeric,
    Decimal,
    Char,
    Varchar,
    Longvarchar,
    Date,
    Time,
    Timestamp,
    Binary,
    Varbinary,
    Longvarbinary,
    Blob,
    Clob,
    Boolean,
    Nchar,
    Nvarchar,
    Longnvarchar,
    Nclob,
    /// A database-specific type with no portable DDL spelling.
    Other,
}

impl TypeCode {
    /// Every type code, in declaration order.
    pub const ALL: [Self; 27] = [
        Self::Bit,
        Self::Tinyint,
        Self::Smallint,
        Self::Integer,
        Self::Bigint,
        Self::Float,
        Self::Real,
        Self::Double,
        Self::Numeric,
        Self::Decimal,
        Self::Char,
        Self::Varchar,
        Self::Longvarchar,
        Self::Date,
        Self::Time,
        Self::Timestamp,
        Self::Binary,
        Self::Varbinary,
        Self::Longvarbinary,
        Self::Blob,
        Self::Clob,
        Self::Boolean,
        Self::Nchar,
        Self::Nvarchar,
        Self::Longnvarchar,
        Self::Nclob,
        Self::Other,
    ];

    /// Returns the numeric code as defined by `java.sql.Types`.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Bit => -7,
            Self::Tinyint => -6,
            Self::Smallint => 5,
            Self::Integer => 4,
            Self::Bigint => -5,
            Self::Float => 6,
            Self::Real => 7,
            Self::Double => 8,
            Self::Numeric => 2,
            Self::Decimal => 3,
            Self::Char => 1,
            Self::Varchar => 12,
            Self::Longvarchar => -1,
            Self::Date => 91,
            Self::Time => 92,
            Self::Timestamp => 93,
            Self::Binary => -2,
            Self::Varbinary => -3,
            Self::Longvarbinary => -4,
            Self::Blob => 2004,
            Self::Clob => 2005,
            Self::Boolean => 16,
            Self::Nchar => -15,
            Self::Nvarchar => -9,
            Self::Longnvarchar => -16,
            Self::Nclob => 2011,
            Self::Other => 1111,
        }
    }

    /// Looks up a type code by its numeric value.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Returns the upper-case type name (e.g. `VARCHAR`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bit => "BIT",
            Self::Tinyint => "TINYINT",
            Self::Smallint => "SMALLINT",
            Self::Integer => "INTEGER",
            Self::Bigint => "BIGINT",
            Self::Float => "FLOAT",
            Self::Real => "REAL",
            Self::Double => "DOUBLE",
            Self::Numeric => "NUMERIC",
            Self::Decimal => "DECIMAL",
            Self::Char => "CHAR",
            Self::Varchar => "VARCHAR",
            Self::Longvarchar => "LONGVARCHAR",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
            Self::Binary => "BINARY",
            Self::Varbinary => "VARBINARY",
            Self::Longvarbinary => "LONGVARBINARY",
            Self::Blob => "BLOB",
            Self::Clob => "CLOB",
            Self::Boolean => "BOOLEAN",
            Self::Nchar => "NCHAR",
            Self::Nvarchar => "NVARCHAR",
            Self::Longnvarchar => "LONGNVARCHAR",
            Self::Nclob => "NCLOB",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeCode {
    type Err = DialectError;

    /// Parses a type name (case-insensitive) or a numeric type code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i32>() {
            return Self::from_code(code)
                .ok_or_else(|| DialectError::UnknownTypeCode(trimmed.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DialectError::UnknownTypeCode(trimmed.to_string()))
    }
}

/// Length, precision and scale of a column, used to fill type templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSize {
    /// Length for character and binary types (`$l`).
    pub length: u32,
    /// Precision for numeric types (`$p`).
    pub precision: u32,
    /// Scale for numeric types (`$s`).
    pub scale: u32,
}

impl ColumnSize {
    /// Default column length.
    pub const DEFAULT_LENGTH: u32 = 255;
    /// Default numeric precision.
    pub const DEFAULT_PRECISION: u32 = 19;
    /// Default numeric scale.
    pub const DEFAULT_SCALE: u32 = 2;

    /// Creates a size with the given length and default precision/scale.
    #[must_use]
    pub const fn with_length(length: u32) -> Self {
        Self {
            length,
            precision: Self::DEFAULT_PRECISION,
            scale: Self::DEFAULT_SCALE,
        }
    }

    /// Creates a size with the given precision and scale and the default length.
    #[must_use]
    pub const fn with_precision(precision: u32, scale: u32) -> Self {
        Self {
            length: Self::DEFAULT_LENGTH,
            precision,
            scale,
        }
    }
}

impl Default for ColumnSize {
    fn default() -> Self {
        Self::with_length(Self::DEFAULT_LENGTH)
    }
}
