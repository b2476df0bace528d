//! Generic SQL dialect.

use std::sync::OnceLock;

use super::Dialect;
use crate::function::FunctionRegistry;
use crate::type_names::TypeMappingTable;
use crate::types::TypeCode;

static NO_FUNCTIONS: FunctionRegistry = FunctionRegistry::new();

/// Returns the ANSI column types every dialect falls back to.
#[must_use]
pub fn default_type_names() -> &'static TypeMappingTable {
    static DEFAULTS: OnceLock<TypeMappingTable> = OnceLock::new();
    DEFAULTS.get_or_init(|| {
        let mut t = TypeMappingTable::new();
        t.register(TypeCode::Bit, "bit");
        t.register(TypeCode::Boolean, "boolean");
        t.register(TypeCode::Tinyint, "tinyint");
        t.register(TypeCode::Smallint, "smallint");
        t.register(TypeCode::Integer, "integer");
        t.register(TypeCode::Bigint, "bigint");
        t.register(TypeCode::Float, "float($p)");
        t.register(TypeCode::Double, "double precision");
        t.register(TypeCode::Numeric, "numeric($p,$s)");
        t.register(TypeCode::Decimal, "decimal($p,$s)");
        t.register(TypeCode::Real, "real");

        t.register(TypeCode::Date, "date");
        t.register(TypeCode::Time, "time");
        t.register(TypeCode::Timestamp, "timestamp");

        t.register(TypeCode::Binary, "binary($l)");
        t.register(TypeCode::Varbinary, "bit varying($l)");
        t.register(TypeCode::Longvarbinary, "bit varying($l)");
        t.register(TypeCode::Blob, "blob");

        t.register(TypeCode::Char, "char($l)");
        t.register(TypeCode::Varchar, "varchar($l)");
        t.register(TypeCode::Longvarchar, "varchar($l)");
        t.register(TypeCode::Clob, "clob");

        t.register(TypeCode::Nchar, "nchar($l)");
        t.register(TypeCode::Nvarchar, "nvarchar($l)");
        t.register(TypeCode::Longnvarchar, "nvarchar($l)");
        t.register(TypeCode::Nclob, "nclob");
        t
    })
}

/// A generic SQL dialect using ANSI SQL standards.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn type_names(&self) -> &TypeMappingTable {
        default_type_names()
    }

    fn functions(&self) -> &FunctionRegistry {
        &NO_FUNCTIONS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DialectError;
    use crate::exception::SqlError;
    use crate::limit::RowSelection;
    use crate::types::ColumnSize;

    #[test]
    fn test_generic_dialect() {
        let dialect = GenericDialect::new();
        assert_eq!(dialect.name(), "generic");
        assert!(!dialect.supports_limit());
        assert!(!dialect.supports_sequences());
        assert!(!dialect.supports_temporary_tables());
        assert_eq!(dialect.create_temporary_table_string(), "create table");
        assert_eq!(dialect.add_column_string(), "add column");
        assert_eq!(dialect.to_boolean_value_string(true), "1");
        assert_eq!(dialect.no_columns_insert_string(), "values ( )");
    }

    #[test]
    fn test_every_portable_type_code_is_mapped() {
        let table = default_type_names();
        for type_code in TypeCode::ALL {
            if type_code == TypeCode::Other {
                assert!(!table.contains(type_code));
            } else {
                assert!(table.contains(type_code), "{type_code} has no default");
            }
        }
    }

    #[test]
    fn test_default_column_types() {
        let dialect = GenericDialect::new();
        assert_eq!(
            dialect.column_type(TypeCode::Numeric, ColumnSize::with_precision(10, 2)),
            Ok("numeric(10,2)".to_string())
        );
        assert_eq!(
            dialect.column_type_with_length(TypeCode::Varchar, 80),
            Ok("varchar(80)".to_string())
        );
    }

    #[test]
    fn test_unsupported_operations() {
        let dialect = GenericDialect::new();
        assert_eq!(
            dialect.create_sequence_string("seq"),
            Err(DialectError::Unsupported {
                dialect: "generic",
                operation: "sequences",
            })
        );
        assert!(dialect.limit_string("select 1", 0, 1).is_err());
        assert!(dialect.identity_column_string(TypeCode::Integer).is_err());
        assert!(dialect.current_timestamp_select_string().is_err());
    }

    struct CapacityOnlyDialect(TypeMappingTable);

    impl Dialect for CapacityOnlyDialect {
        fn name(&self) -> &'static str {
            "capacity-only"
        }

        fn type_names(&self) -> &TypeMappingTable {
            &self.0
        }

        fn functions(&self) -> &FunctionRegistry {
            &NO_FUNCTIONS
        }
    }

    #[test]
    fn test_length_past_largest_capacity_uses_defaults() {
        let mut table = TypeMappingTable::new();
        table.register_with_capacity(TypeCode::Char, 10, "nchar($l)");
        let dialect = CapacityOnlyDialect(table);
        assert_eq!(
            dialect.column_type_with_length(TypeCode::Char, 10),
            Ok("nchar(10)".to_string())
        );
        assert_eq!(
            dialect.column_type_with_length(TypeCode::Char, 11),
            Ok("char(11)".to_string())
        );
    }

    #[test]
    fn test_row_selection_passthrough() {
        let dialect = GenericDialect::new();
        let selection = RowSelection::new().max_rows(10);
        assert_eq!(
            dialect.apply_row_selection("select * from t", &selection),
            Ok("select * from t".to_string())
        );
    }

    #[test]
    fn test_foreign_key_fragment() {
        let dialect = GenericDialect::new();
        assert_eq!(
            dialect.add_foreign_key_constraint_string("fk_a", &["b_id"], "b", &["id"], false),
            " add constraint fk_a foreign key (b_id) references b (id)"
        );
        assert_eq!(
            dialect.add_primary_key_constraint_string("pk_a"),
            " add constraint pk_a primary key "
        );
    }

    #[test]
    fn test_no_constraint_names() {
        let dialect = GenericDialect::new();
        let error = SqlError::new(-268, "Unique constraint (a.b) violated.");
        assert_eq!(
            dialect
                .violated_constraint_name_extractor()
                .extract_constraint_name(&error),
            None
        );
    }
}
