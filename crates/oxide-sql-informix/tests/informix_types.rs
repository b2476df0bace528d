//! Tests for Informix column type mapping.

mod common;
use common::*;

use oxide_sql_informix::{
    ColumnSize, Dialect, DialectError, GenericDialect, InformixDialect, TypeCode,
};

#[test]
fn character_types() {
    assert_eq!(column_type(TypeCode::Char, 1), "char(1)");
    assert_eq!(column_type(TypeCode::Char, 64), "char(64)");
    assert_eq!(column_type(TypeCode::Longvarchar, 100_000), "clob");
    assert_eq!(column_type(TypeCode::Clob, 255), "clob");
}

#[test]
fn varchar_length_buckets() {
    assert_eq!(column_type(TypeCode::Varchar, 100), "varchar(100)");
    assert_eq!(column_type(TypeCode::Varchar, 255), "varchar(255)");
    assert_eq!(column_type(TypeCode::Varchar, 256), "lvarchar(256)");
    assert_eq!(column_type(TypeCode::Varchar, 1000), "lvarchar(1000)");
    assert_eq!(column_type(TypeCode::Varchar, 32739), "lvarchar(32739)");
    assert_eq!(column_type(TypeCode::Varchar, 40000), "varchar(40000)");
}

#[test]
fn numeric_types() {
    for code in [TypeCode::Bit, TypeCode::Tinyint, TypeCode::Smallint] {
        assert_eq!(column_type(code, 255), "smallint");
    }
    assert_eq!(column_type(TypeCode::Integer, 255), "integer");
    assert_eq!(column_type(TypeCode::Bigint, 255), "bigint");
    assert_eq!(column_type(TypeCode::Float, 255), "smallfloat");
    assert_eq!(column_type(TypeCode::Real, 255), "smallfloat");
    assert_eq!(column_type(TypeCode::Double, 255), "float");

    // no precision placeholder in the Informix template
    let d = informix();
    assert_eq!(
        d.column_type(TypeCode::Decimal, ColumnSize::with_precision(12, 4)),
        Ok("decimal".to_string())
    );
    assert_eq!(column_type(TypeCode::Numeric, 255), "decimal");
}

#[test]
fn date_time_types() {
    assert_eq!(column_type(TypeCode::Date, 255), "date");
    assert_eq!(column_type(TypeCode::Time, 255), "datetime hour to second");
    assert_eq!(
        column_type(TypeCode::Timestamp, 255),
        "datetime year to fraction(5)"
    );
}

#[test]
fn binary_types() {
    assert_eq!(column_type(TypeCode::Boolean, 255), "boolean");
    assert_eq!(column_type(TypeCode::Binary, 255), "byte");
    assert_eq!(column_type(TypeCode::Varbinary, 255), "blob");
    assert_eq!(column_type(TypeCode::Longvarbinary, 255), "blob");
    assert_eq!(column_type(TypeCode::Blob, 255), "blob");
}

#[test]
fn national_types_use_defaults() {
    assert_eq!(column_type(TypeCode::Nchar, 10), "nchar(10)");
    assert_eq!(column_type(TypeCode::Nclob, 10), "nclob");
}

#[test]
fn every_portable_type_code_resolves() {
    let d = informix();
    for type_code in TypeCode::ALL.into_iter().filter(|t| *t != TypeCode::Other) {
        assert!(
            d.column_type(type_code, ColumnSize::default()).is_ok(),
            "{type_code} did not resolve"
        );
    }
}

#[test]
fn length_substituted_verbatim() {
    let d = informix();
    for length in [0, 1, 17, 255, 256, 32739, 32740, u32::MAX] {
        let template = d
            .type_names()
            .template_for(TypeCode::Varchar, length)
            .expect("varchar template");
        assert_eq!(
            d.column_type_with_length(TypeCode::Varchar, length).unwrap(),
            template.replace("$l", &length.to_string())
        );
    }
}

#[test]
fn no_type_mapping_error() {
    let err = informix()
        .column_type(TypeCode::Other, ColumnSize::default())
        .unwrap_err();
    assert_eq!(
        err,
        DialectError::NoTypeMapping {
            type_code: TypeCode::Other
        }
    );
    assert_eq!(err.to_string(), "No type mapping for type code OTHER (1111)");

    let err = GenericDialect::new()
        .column_type_with_length(TypeCode::Other, 10)
        .unwrap_err();
    assert!(matches!(err, DialectError::NoTypeMapping { .. }));
}

#[test]
fn dialect_is_shareable_between_threads() {
    let dialect = std::sync::Arc::new(InformixDialect::new());
    let handles: Vec<_> = (0..4u32)
        .map(|i| {
            let dialect = std::sync::Arc::clone(&dialect);
            std::thread::spawn(move || {
                dialect
                    .column_type_with_length(TypeCode::Varchar, 200 + i * 100)
                    .unwrap()
            })
        })
        .collect();
    let types: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        types,
        ["varchar(200)", "lvarchar(300)", "lvarchar(400)", "lvarchar(500)"]
    );
}
