//! SQL dialect support.
//!
//! A dialect answers the questions the persistence layer asks when it turns
//! abstract requests into SQL text: which column type to emit for a type
//! code, how to page a query, how sequences and identity columns work, how
//! to read a constraint name out of an error. The default method bodies
//! describe a plain ANSI database; vendors override what differs.

mod generic;
mod informix;

pub use generic::{GenericDialect, default_type_names};
pub use informix::{ERROR_PATTERNS, InformixDialect, extract_constraint_name};

use crate::error::{DialectError, Result};
use crate::exception::{NoConstraintNameExtractor, ViolatedConstraintNameExtractor};
use crate::function::FunctionRegistry;
use crate::limit::RowSelection;
use crate::type_names::TypeMappingTable;
use crate::types::{ColumnSize, TypeCode};

/// Outer join rendering strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinSyntax {
    /// `left outer join ... on ...`
    Ansi,
    /// Join conditions in the `where` clause with `(+)` markers.
    Oracle,
}

/// Trait for SQL dialect-specific behavior.
pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    // Type mapping

    /// Returns the dialect's own column type templates.
    fn type_names(&self) -> &TypeMappingTable;

    /// Returns the column type for a type code and size.
    ///
    /// The dialect's templates are consulted first, then the default table.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::NoTypeMapping`] when neither table maps the
    /// type code.
    fn column_type(&self, type_code: TypeCode, size: ColumnSize) -> Result<String> {
        self.type_names()
            .resolve_sized(type_code, size)
            .or_else(|| default_type_names().resolve_sized(type_code, size))
            .ok_or(DialectError::NoTypeMapping { type_code })
    }

    /// Returns the column type for a type code using only a length.
    ///
    /// # Errors
    ///
    /// See [`Dialect::column_type`].
    fn column_type_with_length(&self, type_code: TypeCode, length: u32) -> Result<String> {
        self.column_type(type_code, ColumnSize::with_length(length))
    }

    // Functions

    /// Returns the SQL functions registered by the dialect.
    fn functions(&self) -> &FunctionRegistry;

    /// Renders a call to a registered function.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnknownFunction`] or
    /// [`DialectError::FunctionArity`].
    fn render_function(&self, name: &str, args: &[&str]) -> Result<String> {
        self.functions().render(name, args)
    }

    // Identity columns

    /// Returns whether identity columns are used for key generation.
    fn supports_identity_columns(&self) -> bool {
        false
    }

    /// Returns whether an identity column also needs an explicit data type.
    fn has_data_type_in_identity_column(&self) -> bool {
        true
    }

    /// Returns the column definition suffix of an identity column.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::Unsupported`] by default.
    fn identity_column_string(&self, _type_code: TypeCode) -> Result<String> {
        Err(self.unsupported("identity key generation"))
    }

    /// Returns the statement that reads the last generated identity value.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::Unsupported`] by default.
    fn identity_select_string(
        &self,
        _table: &str,
        _column: &str,
        _type_code: TypeCode,
    ) -> Result<String> {
        Err(self.unsupported("identity key generation"))
    }

    /// Returns the value to insert into an identity column, if any.
    fn identity_insert_string(&self) -> Option<&'static str> {
        None
    }

    // Sequences

    /// Returns whether sequences are supported.
    fn supports_sequences(&self) -> bool {
        false
    }

    /// Returns whether sequences can increment by more than one.
    fn supports_pooled_sequences(&self) -> bool {
        false
    }

    /// Returns a statement selecting the next value of a sequence.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::Unsupported`] by default.
    fn sequence_next_val_string(&self, _sequence: &str) -> Result<String> {
        Err(self.unsupported("sequences"))
    }

    /// Returns the expression yielding the next value of a sequence,
    /// for embedding in another statement.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::Unsupported`] by default.
    fn select_sequence_next_val_string(&self, _sequence: &str) -> Result<String> {
        Err(self.unsupported("sequences"))
    }

    /// Returns the statement creating a sequence.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::Unsupported`] by default.
    fn create_sequence_string(&self, _sequence: &str) -> Result<String> {
        Err(self.unsupported("sequences"))
    }

    /// Returns the statement dropping a sequence.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::Unsupported`] by default.
    fn drop_sequence_string(&self, _sequence: &str) -> Result<String> {
        Err(self.unsupported("sequences"))
    }

    /// Returns the query listing the sequences in the schema.
    fn query_sequences_string(&self) -> Option<&'static str> {
        None
    }

    // Limit / offset

    /// Returns whether the dialect can limit result rows.
    fn supports_limit(&self) -> bool {
        false
    }

    /// Returns whether the dialect can skip rows as well as limit them.
    fn supports_limit_offset(&self) -> bool {
        self.supports_limit()
    }

    /// Returns whether limit and offset can be bound parameters.
    fn supports_variable_limit(&self) -> bool {
        self.supports_limit()
    }

    /// Returns whether the limit value is the last row number rather than
    /// the row count.
    fn use_max_for_limit(&self) -> bool {
        false
    }

    /// Rewrites `query` to skip `offset` rows and return at most `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::Unsupported`] by default.
    fn limit_string(&self, _query: &str, _offset: i64, _limit: i64) -> Result<String> {
        Err(self.unsupported("limit"))
    }

    /// Applies a row selection to a query.
    ///
    /// The query is returned unchanged when no row limit is requested or the
    /// dialect cannot limit rows.
    ///
    /// # Errors
    ///
    /// Propagates the error of [`Dialect::limit_string`].
    fn apply_row_selection(&self, query: &str, selection: &RowSelection) -> Result<String> {
        match selection.max_rows {
            Some(max_rows) if self.supports_limit() => {
                let offset = if self.supports_limit_offset() {
                    selection.first_row.unwrap_or(0)
                } else {
                    0
                };
                let limit = if self.use_max_for_limit() {
                    max_rows.saturating_add(offset)
                } else {
                    max_rows
                };
                self.limit_string(query, offset, limit)
            }
            _ => Ok(query.to_string()),
        }
    }

    // Temporary tables

    /// Returns whether temporary tables are supported.
    fn supports_temporary_tables(&self) -> bool {
        false
    }

    /// Returns the command that starts a temporary table definition.
    fn create_temporary_table_string(&self) -> &'static str {
        "create table"
    }

    /// Returns the text placed after the column list of a temporary table.
    fn create_temporary_table_postfix(&self) -> &'static str {
        ""
    }

    // Current timestamp

    /// Returns whether the current timestamp can be selected.
    fn supports_current_timestamp_selection(&self) -> bool {
        false
    }

    /// Returns whether the current timestamp statement must be called as a
    /// procedure.
    fn is_current_timestamp_select_string_callable(&self) -> bool {
        false
    }

    /// Returns the statement selecting the database's current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::Unsupported`] by default.
    fn current_timestamp_select_string(&self) -> Result<String> {
        Err(self.unsupported("current timestamp selection"))
    }

    // Constraint violations

    /// Returns the extractor for constraint names in error messages.
    fn violated_constraint_name_extractor(&self) -> &dyn ViolatedConstraintNameExtractor {
        &NoConstraintNameExtractor
    }

    // DDL

    /// Returns the keyword used to add a column in `alter table`.
    fn add_column_string(&self) -> &'static str {
        "add column"
    }

    /// Returns the fragment adding a primary key constraint.
    fn add_primary_key_constraint_string(&self, constraint_name: &str) -> String {
        format!(" add constraint {constraint_name} primary key ")
    }

    /// Returns the fragment adding a foreign key constraint.
    ///
    /// The referenced column list is omitted when the key references the
    /// primary key of `referenced_table`.
    fn add_foreign_key_constraint_string(
        &self,
        constraint_name: &str,
        foreign_key: &[&str],
        referenced_table: &str,
        primary_key: &[&str],
        references_primary_key: bool,
    ) -> String {
        let mut sql = format!(
            " add constraint {constraint_name} foreign key ({}) references {referenced_table}",
            foreign_key.join(", ")
        );
        if !references_primary_key {
            sql.push_str(" (");
            sql.push_str(&primary_key.join(", "));
            sql.push(')');
        }
        sql
    }

    // Miscellaneous

    /// Returns whether `union all` is supported.
    fn supports_union_all(&self) -> bool {
        false
    }

    /// Returns how outer joins are rendered.
    fn join_syntax(&self) -> JoinSyntax {
        JoinSyntax::Ansi
    }

    /// Returns the values clause of an insert that names no columns.
    fn no_columns_insert_string(&self) -> &'static str {
        "values ( )"
    }

    /// Returns the SQL literal for a boolean value.
    fn to_boolean_value_string(&self, value: bool) -> &'static str {
        if value { "1" } else { "0" }
    }

    /// Builds the error returned for an unsupported operation.
    fn unsupported(&self, operation: &'static str) -> DialectError {
        DialectError::Unsupported {
            dialect: self.name(),
            operation,
        }
    }
}
