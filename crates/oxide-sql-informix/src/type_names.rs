//! Column type templates keyed by type code.
//!
//! A template is the DDL spelling of a column type and may contain the
//! placeholders `$l` (length), `$p` (precision) and `$s` (scale). A type
//! code can have one unqualified template plus any number of templates
//! qualified by a capacity: the largest length that template accepts.
//!
//! ```rust
//! use oxide_sql_informix::type_names::TypeMappingTable;
//! use oxide_sql_informix::TypeCode;
//!
//! let mut table = TypeMappingTable::new();
//! table.register(TypeCode::Varchar, "varchar($l)");
//! table.register_with_capacity(TypeCode::Varchar, 255, "varchar($l)");
//! table.register_with_capacity(TypeCode::Varchar, 32739, "lvarchar($l)");
//!
//! assert_eq!(table.resolve(TypeCode::Varchar, 100).as_deref(), Some("varchar(100)"));
//! assert_eq!(table.resolve(TypeCode::Varchar, 4000).as_deref(), Some("lvarchar(4000)"));
//! assert_eq!(table.resolve(TypeCode::Varchar, 40000).as_deref(), Some("varchar(40000)"));
//! ```

use std::collections::{BTreeMap, HashMap};

use crate::types::{ColumnSize, TypeCode};

/// Templates for a single type code.
#[derive(Debug, Clone, Default)]
struct TypeEntry {
    default: Option<String>,
    by_capacity: BTreeMap<u32, String>,
}

/// Mapping from type codes to column type templates.
#[derive(Debug, Clone, Default)]
pub struct TypeMappingTable {
    entries: HashMap<TypeCode, TypeEntry>,
}

impl TypeMappingTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the unqualified template for a type code.
    pub fn register(&mut self, type_code: TypeCode, template: impl Into<String>) {
        self.entries.entry(type_code).or_default().default = Some(template.into());
    }

    /// Registers (or replaces) a template used for lengths up to `capacity`.
    pub fn register_with_capacity(
        &mut self,
        type_code: TypeCode,
        capacity: u32,
        template: impl Into<String>,
    ) {
        self.entries
            .entry(type_code)
            .or_default()
            .by_capacity
            .insert(capacity, template.into());
    }

    /// Returns the raw unqualified template for a type code.
    #[must_use]
    pub fn get(&self, type_code: TypeCode) -> Option<&str> {
        self.entries.get(&type_code)?.default.as_deref()
    }

    /// Returns the raw template that applies to a type code at `length`.
    ///
    /// The capacity-qualified entry with the smallest capacity that still
    /// fits `length` wins; otherwise the unqualified entry is used. A type
    /// with only capacity-qualified entries yields `None` past its largest
    /// capacity, so [`Dialect::column_type`](crate::Dialect::column_type)
    /// falls back to the default table instead of failing.
    #[must_use]
    pub fn template_for(&self, type_code: TypeCode, length: u32) -> Option<&str> {
        let entry = self.entries.get(&type_code)?;
        entry
            .by_capacity
            .range(length..)
            .next()
            .map(|(_, template)| template.as_str())
            .or(entry.default.as_deref())
    }

    /// Renders the template for a type code at the given length, using the
    /// default precision and scale.
    #[must_use]
    pub fn resolve(&self, type_code: TypeCode, length: u32) -> Option<String> {
        self.resolve_sized(type_code, ColumnSize::with_length(length))
    }

    /// Renders the template for a type code with an explicit column size.
    #[must_use]
    pub fn resolve_sized(&self, type_code: TypeCode, size: ColumnSize) -> Option<String> {
        self.template_for(type_code, size.length)
            .map(|template| render_template(template, size))
    }

    /// Returns whether any template is registered for the type code.
    #[must_use]
    pub fn contains(&self, type_code: TypeCode) -> bool {
        self.entries.contains_key(&type_code)
    }

    /// Returns the number of type codes with at least one template.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Substitutes `$s`, `$l` and `$p` in a template, first occurrence each.
#[must_use]
pub fn render_template(template: &str, size: ColumnSize) -> String {
    template
        .replacen("$s", &size.scale.to_string(), 1)
        .replacen("$l", &size.length.to_string(), 1)
        .replacen("$p", &size.precision.to_string(), 1)
}
