//! Tests for Informix DDL strings and statements.

mod common;
use common::*;

use oxide_sql_informix::ddl::{self, ForeignKey};
use oxide_sql_informix::{Dialect, DialectResolver, TypeCode};

#[test]
fn add_column() {
    let d = informix();
    assert_eq!(d.add_column_string(), "add");
    assert_eq!(
        ddl::alter_table_add_column(&d, "customer", "phone char(18)"),
        "alter table customer add phone char(18)"
    );
}

#[test]
fn primary_key_name_precedes_columns() {
    let d = informix();
    assert_eq!(
        d.add_primary_key_constraint_string("pk_customer"),
        " add constraint primary key constraint pk_customer "
    );
    assert_eq!(
        ddl::alter_table_add_primary_key(&d, "customer", "pk_customer", &["id"]),
        "alter table customer add constraint primary key constraint pk_customer (id)"
    );
}

#[test]
fn foreign_key_with_explicit_columns() {
    let fk = ForeignKey {
        name: "fk_item_order",
        columns: &["order_num", "order_rev"],
        referenced_table: "orders",
        referenced_columns: &["order_num", "rev"],
        references_primary_key: false,
    };
    assert_eq!(
        ddl::alter_table_add_foreign_key(&informix(), "items", &fk),
        "alter table items add constraint  foreign key (order_num, order_rev) \
         references orders (order_num, rev) constraint fk_item_order"
    );
}

#[test]
fn foreign_key_to_primary_key_omits_columns() {
    let fk = ForeignKey {
        name: "fk_item_order",
        columns: &["order_num"],
        referenced_table: "orders",
        referenced_columns: &["order_num"],
        references_primary_key: true,
    };
    assert_eq!(
        ddl::alter_table_add_foreign_key(&informix(), "items", &fk),
        "alter table items add constraint  foreign key (order_num) references orders \
         constraint fk_item_order"
    );
}

#[test]
fn sequences() {
    let d = informix();
    assert_eq!(
        d.create_sequence_string("seq_orders").unwrap(),
        "create sequence seq_orders"
    );
    assert_eq!(
        d.drop_sequence_string("seq_orders").unwrap(),
        "drop sequence seq_orders"
    );
    assert_eq!(
        d.sequence_next_val_string("seq_orders").unwrap(),
        "select seq_orders.nextval from systables where tabid=1"
    );
}

#[test]
fn temporary_table() {
    let d = informix();
    let id_type = d.column_type_with_length(TypeCode::Bigint, 0).unwrap();
    let id_column = format!("id {id_type} not null");
    assert_eq!(
        ddl::create_temporary_table(&d, "ht_orders", &[id_column.as_str()]),
        "create temp table ht_orders (id bigint not null) with no log"
    );
}

#[test]
fn identity_column_definition() {
    let d = informix();
    let serial = d.identity_column_string(TypeCode::Integer).unwrap();
    assert_eq!(
        ddl::alter_table_add_column(&d, "orders", &format!("order_num {serial}")),
        "alter table orders add order_num serial not null"
    );
}

#[test]
fn resolved_dialect_matches_direct_construction() {
    let resolved = DialectResolver::new()
        .resolve_product("Informix Dynamic Server")
        .expect("informix dialect");
    let direct = informix();
    assert_eq!(
        ddl::create_temporary_table(resolved.as_ref(), "t", &["a int"]),
        ddl::create_temporary_table(&direct, "t", &["a int"])
    );
    assert_eq!(
        resolved.limit_string("select a from t", 1, 2),
        direct.limit_string("select a from t", 1, 2)
    );
}

#[test]
fn current_date_function() {
    assert_eq!(
        informix_with_current_date(false)
            .render_function("current_date", &[])
            .unwrap(),
        "(select first 1 today from informix.systables)"
    );
    assert_eq!(
        informix_with_current_date(true)
            .render_function("current_date", &[])
            .unwrap(),
        "(select today from sysmaster:sysdual)"
    );
}
