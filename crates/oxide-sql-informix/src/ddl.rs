//! Complete DDL statements assembled from dialect fragments.
//!
//! Dialects only know the vendor-specific pieces (`create temp table`,
//! `with no log`, where the constraint name goes). These helpers glue the
//! pieces to table and column names. Identifiers and column definitions
//! are emitted verbatim; quoting and validation are the caller's job.

use crate::dialect::Dialect;

/// Builds a `create ... table` statement for a temporary table.
///
/// ```rust
/// use oxide_sql_informix::{InformixDialect, ddl};
///
/// let sql = ddl::create_temporary_table(
///     &InformixDialect::new(),
///     "ht_orders",
///     &["id bigint not null"],
/// );
/// assert_eq!(sql, "create temp table ht_orders (id bigint not null) with no log");
/// ```
#[must_use]
pub fn create_temporary_table(dialect: &dyn Dialect, table: &str, columns: &[&str]) -> String {
    let mut sql = format!(
        "{} {table} ({})",
        dialect.create_temporary_table_string(),
        columns.join(", ")
    );
    let postfix = dialect.create_temporary_table_postfix();
    if !postfix.is_empty() {
        sql.push(' ');
        sql.push_str(postfix);
    }
    sql
}

/// Builds an `alter table` statement adding a column.
#[must_use]
pub fn alter_table_add_column(
    dialect: &dyn Dialect,
    table: &str,
    column_definition: &str,
) -> String {
    format!(
        "alter table {table} {} {column_definition}",
        dialect.add_column_string()
    )
}

/// Builds an `alter table` statement adding a primary key constraint.
#[must_use]
pub fn alter_table_add_primary_key(
    dialect: &dyn Dialect,
    table: &str,
    constraint_name: &str,
    columns: &[&str],
) -> String {
    format!(
        "alter table {table}{}({})",
        dialect.add_primary_key_constraint_string(constraint_name),
        columns.join(", ")
    )
}

/// A foreign key to add to an existing table.
#[derive(Debug, Clone, Copy)]
pub struct ForeignKey<'a> {
    /// Constraint name.
    pub name: &'a str,
    /// Referencing columns.
    pub columns: &'a [&'a str],
    /// Referenced table.
    pub referenced_table: &'a str,
    /// Referenced columns.
    pub referenced_columns: &'a [&'a str],
    /// Whether the referenced columns are the referenced table's primary key.
    pub references_primary_key: bool,
}

/// Builds an `alter table` statement adding a foreign key constraint.
#[must_use]
pub fn alter_table_add_foreign_key(
    dialect: &dyn Dialect,
    table: &str,
    fk: &ForeignKey<'_>,
) -> String {
    format!(
        "alter table {table}{}",
        dialect.add_foreign_key_constraint_string(
            fk.name,
            fk.columns,
            fk.referenced_table,
            fk.referenced_columns,
            fk.references_primary_key,
        )
    )
}
