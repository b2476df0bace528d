//! Informix dialect implementation.
//!
//! Targets Informix Dynamic Server. Notable differences from ANSI SQL:
//!
//! - Paging is written right after the `SELECT` keyword:
//!   `SELECT SKIP m FIRST n ...`.
//! - Smart large objects (`clob`, `blob`) are preferred over the older
//!   `text`/`byte` types, and `varchar` longer than 255 becomes `lvarchar`.
//! - Sequences are named like tables and live in `syssequences`; there is
//!   no `dual`, so single-row selects read `systables where tabid=1`.
//! - Constraint clauses name the constraint after the constraint kind:
//!   `add constraint primary key constraint pk_name (...)` and
//!   `add constraint  foreign key (...) references t constraint fk_name`.
//! - Error messages report constraints as `owner.name`.

use tracing::{debug, trace, warn};

use super::{Dialect, JoinSyntax};
use crate::config::InformixOptions;
use crate::error::{DialectError, Result};
use crate::exception::{
    ErrorPattern, TemplatedConstraintNameExtractor, ViolatedConstraintNameExtractor,
};
use crate::function::{FunctionRegistry, SqlFunction};
use crate::limit::end_of_select_keyword;
use crate::type_names::TypeMappingTable;
use crate::types::TypeCode;

/// Error message templates of the Informix constraint violations, in match
/// order.
pub const ERROR_PATTERNS: &[ErrorPattern] = &[
    // unique constraint violated
    ErrorPattern::new(-268, "Unique constraint (", ") violated."),
    // missing key in referenced table
    ErrorPattern::new(
        -691,
        "Missing key in referenced table for referential constraint (",
        ").",
    ),
    // key still referenced
    ErrorPattern::new(-692, "Key value for constraint (", ") is still being referenced."),
];

static EXTRACTOR: TemplatedConstraintNameExtractor =
    TemplatedConstraintNameExtractor::new(ERROR_PATTERNS).strip_owner();

/// Extracts the violated constraint name from an Informix error code and
/// message, without the owner qualification.
///
/// ```rust
/// use oxide_sql_informix::extract_constraint_name;
///
/// assert_eq!(
///     extract_constraint_name(-268, "Unique constraint (informix.u_email) violated."),
///     Some("u_email".to_string())
/// );
/// assert_eq!(extract_constraint_name(-100, "ISAM error"), None);
/// ```
#[must_use]
pub fn extract_constraint_name(error_code: i32, message: &str) -> Option<String> {
    EXTRACTOR.extract(error_code, message)
}

/// Informix dialect.
///
/// All tables are built in the constructor and never change afterwards,
/// so one instance can be shared between threads.
#[derive(Debug, Clone)]
pub struct InformixDialect {
    type_names: TypeMappingTable,
    functions: FunctionRegistry,
    options: InformixOptions,
}

impl InformixDialect {
    /// Creates an Informix dialect with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(InformixOptions::default())
    }

    /// Creates an Informix dialect with options from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::with_options(InformixOptions::from_env())
    }

    /// Creates an Informix dialect with the given options.
    #[must_use]
    pub fn with_options(options: InformixOptions) -> Self {
        let mut type_names = TypeMappingTable::new();
        register_character_types(&mut type_names);
        register_numeric_types(&mut type_names);
        register_date_time_types(&mut type_names);
        register_binary_types(&mut type_names);

        let functions = register_functions(options);

        debug!(
            types = type_names.len(),
            functions = functions.len(),
            current_date = options.enable_current_date_function,
            "Built Informix dialect"
        );

        Self {
            type_names,
            functions,
            options,
        }
    }

    /// Returns the options the dialect was built with.
    #[must_use]
    pub const fn options(&self) -> &InformixOptions {
        &self.options
    }
}

impl Default for InformixDialect {
    fn default() -> Self {
        Self::new()
    }
}

fn register_character_types(t: &mut TypeMappingTable) {
    t.register(TypeCode::Char, "char($l)");
    t.register(TypeCode::Varchar, "varchar($l)");
    t.register_with_capacity(TypeCode::Varchar, 255, "varchar($l)");
    t.register_with_capacity(TypeCode::Varchar, 32739, "lvarchar($l)");
    t.register(TypeCode::Longvarchar, "clob");
    t.register(TypeCode::Clob, "clob");
}

fn register_numeric_types(t: &mut TypeMappingTable) {
    // no bit type
    t.register(TypeCode::Bit, "smallint");
    t.register(TypeCode::Tinyint, "smallint");
    t.register(TypeCode::Smallint, "smallint");
    t.register(TypeCode::Integer, "integer");
    t.register(TypeCode::Bigint, "bigint");

    t.register(TypeCode::Float, "smallfloat");
    t.register(TypeCode::Real, "smallfloat");
    t.register(TypeCode::Double, "float");
    t.register(TypeCode::Numeric, "decimal");
    t.register(TypeCode::Decimal, "decimal");
}

fn register_date_time_types(t: &mut TypeMappingTable) {
    t.register(TypeCode::Date, "date");
    t.register(TypeCode::Time, "datetime hour to second");
    t.register(TypeCode::Timestamp, "datetime year to fraction(5)");
}

fn register_binary_types(t: &mut TypeMappingTable) {
    t.register(TypeCode::Boolean, "boolean");
    t.register(TypeCode::Binary, "byte");
    t.register(TypeCode::Varbinary, "blob");
    t.register(TypeCode::Longvarbinary, "blob");
    t.register(TypeCode::Blob, "blob");
}

fn register_functions(options: InformixOptions) -> FunctionRegistry {
    let mut functions = FunctionRegistry::new();
    functions.register(
        "concat",
        SqlFunction::VarArgs {
            begin: "(",
            separator: "||",
            end: ")",
        },
    );

    if options.enable_current_date_function {
        let sql = if options.use_sysdual_for_current_date_function {
            "(select today from sysmaster:sysdual)"
        } else {
            // relies on systables never being empty
            "(select first 1 today from informix.systables)"
        };
        functions.register(
            "current_date",
            SqlFunction::NoArg {
                sql,
                has_parentheses: false,
            },
        );
    }
    functions
}

impl Dialect for InformixDialect {
    fn name(&self) -> &'static str {
        "informix"
    }

    fn type_names(&self) -> &TypeMappingTable {
        &self.type_names
    }

    fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    // SERIAL/SERIAL8 exist, but sequences are preferred for key generation.
    fn supports_identity_columns(&self) -> bool {
        false
    }

    fn has_data_type_in_identity_column(&self) -> bool {
        false
    }

    fn identity_column_string(&self, type_code: TypeCode) -> Result<String> {
        Ok(if type_code == TypeCode::Bigint {
            "bigserial not null".to_string()
        } else {
            "serial not null".to_string()
        })
    }

    fn identity_select_string(
        &self,
        _table: &str,
        _column: &str,
        type_code: TypeCode,
    ) -> Result<String> {
        Ok(if type_code == TypeCode::Bigint {
            "select dbinfo('bigserial') from systables where tabid=1".to_string()
        } else {
            "select dbinfo('sqlca.sqlerrd1') from systables where tabid=1".to_string()
        })
    }

    fn identity_insert_string(&self) -> Option<&'static str> {
        Some("0")
    }

    fn supports_sequences(&self) -> bool {
        true
    }

    fn supports_pooled_sequences(&self) -> bool {
        true
    }

    fn sequence_next_val_string(&self, sequence: &str) -> Result<String> {
        Ok(format!(
            "select {} from systables where tabid=1",
            self.select_sequence_next_val_string(sequence)?
        ))
    }

    fn select_sequence_next_val_string(&self, sequence: &str) -> Result<String> {
        Ok(format!("{sequence}.nextval"))
    }

    fn create_sequence_string(&self, sequence: &str) -> Result<String> {
        Ok(format!("create sequence {sequence}"))
    }

    fn drop_sequence_string(&self, sequence: &str) -> Result<String> {
        Ok(format!("drop sequence {sequence}"))
    }

    // Sequence names are table names; join systables to syssequences on tabid.
    fn query_sequences_string(&self) -> Option<&'static str> {
        Some(
            "select systables.tabname from systables,syssequences \
             where systables.tabid = syssequences.tabid",
        )
    }

    fn supports_limit(&self) -> bool {
        true
    }

    fn supports_limit_offset(&self) -> bool {
        true
    }

    fn supports_variable_limit(&self) -> bool {
        false
    }

    fn use_max_for_limit(&self) -> bool {
        false
    }

    /// Inserts `first n` or `skip m first n` after the first `select`.
    fn limit_string(&self, query: &str, offset: i64, limit: i64) -> Result<String> {
        if offset < 0 || limit < 0 {
            return Err(DialectError::InvalidArgument(format!(
                "cannot perform limit query with negative limit and/or offset value(s): \
                 offset={offset}, limit={limit}"
            )));
        }

        let Some(insert_at) = end_of_select_keyword(query) else {
            warn!(query, "Limit requested for a query without SELECT");
            return Err(DialectError::MissingSelectKeyword);
        };

        let clause = if offset == 0 {
            format!(" first {limit}")
        } else {
            format!(" skip {offset} first {limit}")
        };

        let mut sql = String::with_capacity(query.len() + clause.len());
        sql.push_str(&query[..insert_at]);
        sql.push_str(&clause);
        sql.push_str(&query[insert_at..]);
        trace!(offset, limit, sql = %sql, "Applied Informix limit");
        Ok(sql)
    }

    fn supports_temporary_tables(&self) -> bool {
        true
    }

    fn create_temporary_table_string(&self) -> &'static str {
        "create temp table"
    }

    fn create_temporary_table_postfix(&self) -> &'static str {
        "with no log"
    }

    fn supports_current_timestamp_selection(&self) -> bool {
        true
    }

    fn is_current_timestamp_select_string_callable(&self) -> bool {
        false
    }

    fn current_timestamp_select_string(&self) -> Result<String> {
        Ok("select distinct current timestamp from informix.systables".to_string())
    }

    fn violated_constraint_name_extractor(&self) -> &dyn ViolatedConstraintNameExtractor {
        &EXTRACTOR
    }

    fn add_column_string(&self) -> &'static str {
        "add"
    }

    // The column list is appended after the name.
    fn add_primary_key_constraint_string(&self, constraint_name: &str) -> String {
        format!(" add constraint primary key constraint {constraint_name} ")
    }

    fn add_foreign_key_constraint_string(
        &self,
        constraint_name: &str,
        foreign_key: &[&str],
        referenced_table: &str,
        primary_key: &[&str],
        references_primary_key: bool,
    ) -> String {
        let mut sql = format!(
            " add constraint  foreign key ({}) references {referenced_table}",
            foreign_key.join(", ")
        );
        if !references_primary_key {
            sql.push_str(" (");
            sql.push_str(&primary_key.join(", "));
            sql.push(')');
        }
        sql.push_str(" constraint ");
        sql.push_str(constraint_name);
        sql
    }

    fn supports_union_all(&self) -> bool {
        true
    }

    fn join_syntax(&self) -> JoinSyntax {
        JoinSyntax::Ansi
    }

    // Informix has no empty insert; the 0 feeds a serial column.
    fn no_columns_insert_string(&self) -> &'static str {
        "values (0)"
    }

    fn to_boolean_value_string(&self, value: bool) -> &'static str {
        if value { "'t'" } else { "'f'" }
    }
}
