//! SQL function templates.
//!
//! Portable function names used by the query layer (`concat`,
//! `current_date`, ...) are rendered through templates the dialect
//! registers.

use std::collections::BTreeMap;

use crate::error::{DialectError, Result};

/// How a registered function renders to SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlFunction {
    /// Any number of arguments joined by `separator`, wrapped in
    /// `begin`/`end` (e.g. `(a||b||c)`).
    VarArgs {
        begin: &'static str,
        separator: &'static str,
        end: &'static str,
    },
    /// A function without arguments. `sql` is emitted as-is, followed by
    /// `()` when `has_parentheses` is set.
    NoArg {
        sql: &'static str,
        has_parentheses: bool,
    },
}

impl SqlFunction {
    /// Renders the function call for `name` with the given argument SQL.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::FunctionArity`] when arguments are passed to
    /// a [`SqlFunction::NoArg`] function.
    pub fn render(&self, name: &str, args: &[&str]) -> Result<String> {
        match self {
            Self::VarArgs {
                begin,
                separator,
                end,
            } => Ok(format!("{begin}{}{end}", args.join(*separator))),
            Self::NoArg {
                sql,
                has_parentheses,
            } => {
                if !args.is_empty() {
                    return Err(DialectError::FunctionArity {
                        name: name.to_string(),
                        expected: 0,
                        actual: args.len(),
                    });
                }
                if *has_parentheses {
                    Ok(format!("{sql}()"))
                } else {
                    Ok((*sql).to_string())
                }
            }
        }
    }
}

/// Functions registered by a dialect, keyed by lower-case name.
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions: BTreeMap<String, SqlFunction>,
}

impl FunctionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            functions: BTreeMap::new(),
        }
    }

    /// Registers (or replaces) a function.
    pub fn register(&mut self, name: &str, function: SqlFunction) {
        self.functions.insert(name.to_ascii_lowercase(), function);
    }

    /// Looks up a function by name (case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SqlFunction> {
        self.functions.get(&name.to_ascii_lowercase())
    }

    /// Renders a call to a registered function.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnknownFunction`] if no function is
    /// registered under `name`, or the error of [`SqlFunction::render`].
    pub fn render(&self, name: &str, args: &[&str]) -> Result<String> {
        self.get(name)
            .ok_or_else(|| DialectError::UnknownFunction(name.to_string()))?
            .render(name, args)
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    /// Returns the number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns whether no function is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
