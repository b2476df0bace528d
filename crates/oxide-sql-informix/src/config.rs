//! Construction-time options for the Informix dialect.

use serde::{Deserialize, Serialize};

use crate::error::{DialectError, Result};

/// Environment variable enabling the `current_date` emulation.
pub const ENABLE_CURRENT_DATE_FUNCTION_ENV: &str = "OXIDE_INFORMIX_ENABLE_CURRENT_DATE_FUNCTION";

/// Environment variable selecting the `sysmaster:sysdual` variant of the
/// `current_date` emulation.
pub const USE_SYSDUAL_FOR_CURRENT_DATE_FUNCTION_ENV: &str =
    "OXIDE_INFORMIX_USE_SYSDUAL_FOR_CURRENT_DATE_FUNCTION";

/// Returns whether an option value turns its flag on: only `true`,
/// ignoring case.
#[must_use]
pub fn is_flag_set(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// Options read once when an `InformixDialect` is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct InformixOptions {
    /// Register a `current_date` function. Informix has no such function,
    /// so it is emulated with a scalar subquery on `today`.
    pub enable_current_date_function: bool,
    /// Read `today` from `sysmaster:sysdual` instead of
    /// `first 1 ... from informix.systables`.
    pub use_sysdual_for_current_date_function: bool,
}

impl InformixOptions {
    /// Reads options from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads options through an arbitrary key lookup.
    ///
    /// A flag is set only when its value is `true`, ignoring case. Anything
    /// else, including a missing value, leaves it unset.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| lookup(key).is_some_and(|v| is_flag_set(&v));
        Self {
            enable_current_date_function: flag(ENABLE_CURRENT_DATE_FUNCTION_ENV),
            use_sysdual_for_current_date_function: flag(USE_SYSDUAL_FOR_CURRENT_DATE_FUNCTION_ENV),
        }
    }

    /// Parses options from a JSON document. Missing fields default to `false`.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::Options`] if the document is not valid JSON
    /// or has fields of the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DialectError::Options(e.to_string()))
    }

    /// Enables the `current_date` emulation.
    #[must_use]
    pub const fn enable_current_date_function(mut self) -> Self {
        self.enable_current_date_function = true;
        self
    }

    /// Uses `sysmaster:sysdual` for the `current_date` emulation.
    #[must_use]
    pub const fn use_sysdual(mut self) -> Self {
        self.use_sysdual_for_current_date_function = true;
        self
    }
}
