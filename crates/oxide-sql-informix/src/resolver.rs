//! Dialect lookup by database product or dialect name.
//!
//! Callers that only know what they are connected to (the product name a
//! driver reports) or what was configured (a dialect name) get a dialect
//! from here instead of naming a concrete type.

use tracing::debug;

use crate::config::InformixOptions;
use crate::dialect::{Dialect, GenericDialect, InformixDialect};

const INFORMIX_PRODUCT_PREFIX: &str = "informix";

/// Resolves dialects by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialectResolver {
    options: InformixOptions,
}

impl DialectResolver {
    /// Creates a resolver building dialects with default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: InformixOptions {
                enable_current_date_function: false,
                use_sysdual_for_current_date_function: false,
            },
        }
    }

    /// Creates a resolver building Informix dialects with `options`.
    #[must_use]
    pub const fn with_options(options: InformixOptions) -> Self {
        Self { options }
    }

    /// Returns the dialect for a product name as reported by the driver,
    /// e.g. `Informix Dynamic Server`.
    #[must_use]
    pub fn resolve_product(&self, product_name: &str) -> Option<Box<dyn Dialect>> {
        let product = product_name.trim();
        let is_informix = product
            .get(..INFORMIX_PRODUCT_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(INFORMIX_PRODUCT_PREFIX));
        if is_informix {
            debug!(product, "Resolved Informix dialect");
            Some(Box::new(InformixDialect::with_options(self.options)))
        } else {
            debug!(product, "No dialect for database product");
            None
        }
    }

    /// Returns the dialect registered under `name` (`informix` or `generic`).
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<Box<dyn Dialect>> {
        match name.trim().to_ascii_lowercase().as_str() {
            "informix" => Some(Box::new(InformixDialect::with_options(self.options))),
            "generic" => Some(Box::new(GenericDialect::new())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_product() {
        let resolver = DialectResolver::new();
        let dialect = resolver
            .resolve_product("Informix Dynamic Server")
            .expect("informix product");
        assert_eq!(dialect.name(), "informix");
        assert!(resolver.resolve_product("INFORMIX-OnLine").is_some());
        assert!(resolver.resolve_product("PostgreSQL").is_none());
        assert!(resolver.resolve_product("Inf").is_none());
    }

    #[test]
    fn test_by_name() {
        let resolver = DialectResolver::new();
        assert_eq!(resolver.by_name("Informix").map(|d| d.name()), Some("informix"));
        assert_eq!(resolver.by_name("generic").map(|d| d.name()), Some("generic"));
        assert!(resolver.by_name("oracle").is_none());
    }

    #[test]
    fn test_options_are_passed_on() {
        let options = InformixOptions::default().enable_current_date_function();
        let resolver = DialectResolver::with_options(options);
        let dialect = resolver.by_name("informix").expect("informix dialect");
        assert!(dialect.render_function("current_date", &[]).is_ok());
    }
}
