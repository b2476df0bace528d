//! Constraint-violation name extraction.
//!
//! When the database rejects a statement because of a constraint, the
//! persistence layer wants to know which constraint fired. Most vendors
//! only report it inside the message text, so each dialect knows the
//! message templates of its error codes and cuts the name out of them.

use tracing::debug;

/// A database error as reported by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlError {
    /// Vendor error code.
    pub error_code: i32,
    /// SQLSTATE, if the driver reported one.
    pub sql_state: Option<String>,
    /// Vendor error message.
    pub message: String,
}

impl SqlError {
    /// Creates an error without a SQLSTATE.
    #[must_use]
    pub fn new(error_code: i32, message: impl Into<String>) -> Self {
        Self {
            error_code,
            sql_state: None,
            message: message.into(),
        }
    }

    /// Sets the SQLSTATE.
    #[must_use]
    pub fn with_sql_state(mut self, sql_state: impl Into<String>) -> Self {
        self.sql_state = Some(sql_state.into());
        self
    }
}

/// Extracts the name of the violated constraint from a database error.
pub trait ViolatedConstraintNameExtractor: Send + Sync {
    /// Returns the constraint name, or `None` if the error does not name one.
    fn extract_constraint_name(&self, error: &SqlError) -> Option<String>;
}

/// Extractor for dialects that do not know their vendor's messages.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoConstraintNameExtractor;

impl ViolatedConstraintNameExtractor for NoConstraintNameExtractor {
    fn extract_constraint_name(&self, _error: &SqlError) -> Option<String> {
        None
    }
}

/// A message template for one vendor error code.
///
/// The constraint name sits between `prefix` and `suffix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPattern {
    /// Vendor error code the template belongs to.
    pub error_code: i32,
    /// Literal text right before the constraint name.
    pub prefix: &'static str,
    /// Literal text right after the constraint name.
    pub suffix: &'static str,
}

impl ErrorPattern {
    /// Creates a pattern.
    #[must_use]
    pub const fn new(error_code: i32, prefix: &'static str, suffix: &'static str) -> Self {
        Self {
            error_code,
            prefix,
            suffix,
        }
    }

    /// Cuts the text between the prefix and the following suffix out of
    /// `message`.
    #[must_use]
    pub fn extract<'a>(&self, message: &'a str) -> Option<&'a str> {
        extract_using_template(self.prefix, self.suffix, message)
    }
}

/// Returns the text between the first `start` literal in `message` and the
/// next `end` literal after it.
///
/// Both literals must be present; matching is case-sensitive.
#[must_use]
pub fn extract_using_template<'a>(start: &str, end: &str, message: &'a str) -> Option<&'a str> {
    let name_start = message.find(start)? + start.len();
    let name_len = message[name_start..].find(end)?;
    Some(&message[name_start..name_start + name_len])
}

/// Extractor driven by a fixed, ordered list of [`ErrorPattern`]s.
///
/// The first pattern whose error code matches is the only one tried.
/// Owner-qualified names (`owner.name`) lose everything up to the first
/// dot when `strip_owner` is set.
#[derive(Debug, Clone)]
pub struct TemplatedConstraintNameExtractor {
    patterns: &'static [ErrorPattern],
    strip_owner: bool,
}

impl TemplatedConstraintNameExtractor {
    /// Creates an extractor over the given patterns.
    #[must_use]
    pub const fn new(patterns: &'static [ErrorPattern]) -> Self {
        Self {
            patterns,
            strip_owner: false,
        }
    }

    /// Drops the owner qualification from extracted names.
    #[must_use]
    pub const fn strip_owner(mut self) -> Self {
        self.strip_owner = true;
        self
    }

    /// Returns the patterns in match order.
    #[must_use]
    pub const fn patterns(&self) -> &'static [ErrorPattern] {
        self.patterns
    }

    /// Extracts a constraint name from a raw code and message.
    #[must_use]
    pub fn extract(&self, error_code: i32, message: &str) -> Option<String> {
        let pattern = self.patterns.iter().find(|p| p.error_code == error_code)?;
        let mut name = pattern.extract(message)?;
        if self.strip_owner {
            if let Some(dot) = name.find('.') {
                name = &name[dot + 1..];
            }
        }
        debug!(error_code, constraint = name, "Extracted violated constraint name");
        Some(name.to_string())
    }
}

impl ViolatedConstraintNameExtractor for TemplatedConstraintNameExtractor {
    fn extract_constraint_name(&self, error: &SqlError) -> Option<String> {
        self.extract(error.error_code, &error.message)
    }
}
