#![allow(dead_code)]

use oxide_sql_informix::{ColumnSize, Dialect, InformixDialect, InformixOptions, TypeCode};

pub fn informix() -> InformixDialect {
    InformixDialect::new()
}

pub fn informix_with_current_date(use_sysdual: bool) -> InformixDialect {
    let mut options = InformixOptions::default().enable_current_date_function();
    if use_sysdual {
        options = options.use_sysdual();
    }
    InformixDialect::with_options(options)
}

pub fn column_type(type_code: TypeCode, length: u32) -> String {
    informix()
        .column_type(type_code, ColumnSize::with_length(length))
        .unwrap_or_else(|e| panic!("No column type for {type_code}({length}): {e}"))
}

pub fn paginate(sql: &str, offset: i64, limit: i64) -> String {
    informix()
        .limit_string(sql, offset, limit)
        .unwrap_or_else(|e| panic!("Failed to paginate: {sql}\nError: {e:?}"))
}

/// Asserts that `output` equals `input` with `inserted` spliced in right
/// after the first `select` and nothing else changed.
pub fn assert_single_insertion(input: &str, output: &str, inserted: &str) {
    let at = input.to_ascii_lowercase().find("select").expect("select keyword") + 6;
    assert_eq!(output.len(), input.len() + inserted.len());
    assert_eq!(&output[..at], &input[..at], "prefix changed");
    assert_eq!(&output[at..at + inserted.len()], inserted, "wrong clause");
    assert_eq!(&output[at + inserted.len()..], &input[at..], "suffix changed");
}
