#![allow(dead_code)]

use oxide_dialects_core::model::{
    boolean, integer, long, timestamp, varchar, FKeyModel, ForeignKeyAction, IndexModel,
    TableModel, UniqueModel,
};

/// `user_t(first_name, last_name, age)` keyed on both names.
pub fn user_t() -> TableModel {
    let mut t = TableModel::new("user_t").expect("valid table name");
    t.add_column(varchar("first_name", 20).pkey())
        .and_then(|t| t.add_column(varchar("last_name", 20).pkey()))
        .and_then(|t| t.add_column(integer("age")))
        .expect("valid user_t model");
    t
}

/// A master table with reserved column names and an identity key.
pub fn master() -> TableModel {
    let mut t = TableModel::new("master").expect("valid table name");
    t.add_column(long("id").pkey().auto_id())
        .and_then(|t| t.add_column(varchar("name", 40).not_null().comment("display name")))
        .and_then(|t| t.add_column(varchar("order", 10)))
        .and_then(|t| t.add_column(boolean("active").not_null().default_bool(true)))
        .and_then(|t| t.add_unique(UniqueModel::new("uk_master_name").columns(["name"])))
        .expect("valid master model");
    t.set_comment("Master records");
    t
}

/// A detail table referencing [`master`].
pub fn detail() -> TableModel {
    let mut t = TableModel::new("detail").expect("valid table name");
    t.add_column(long("id").pkey().auto_id())
        .and_then(|t| t.add_column(long("master_id").not_null()))
        .and_then(|t| t.add_column(timestamp("created_at")))
        .and_then(|t| t.add_index(IndexModel::new("idx_detail_master").columns(["master_id"])))
        .and_then(|t| {
            t.add_fkey(
                FKeyModel::new("fk_detail_master")
                    .columns(["master_id"])
                    .refs("master", ["id"])
                    .on_delete(ForeignKeyAction::Cascade),
            )
        })
        .expect("valid detail model");
    t
}

/// Asserts that `needle` occurs in one of `statements`.
pub fn assert_has(statements: &[String], needle: &str) {
    assert!(
        statements.iter().any(|s| s.contains(needle)),
        "no statement contains {needle:?}:\n{}",
        statements.join("\n")
    );
}

/// Position of the first statement containing `needle`.
pub fn position(statements: &[String], needle: &str) -> usize {
    statements
        .iter()
        .position(|s| s.contains(needle))
        .unwrap_or_else(|| panic!("no statement contains {needle:?}"))
}
