//! Source emission from models read out of a catalog.

mod common;

use std::fs;

use common::{detail, master};
use oxide_dialects_core::codegen::{emit_all, write_units, EmitterConfig};
use oxide_dialects_core::dialect::MYSQL8;
use oxide_dialects_core::introspect::TableMeta;
use oxide_dialects_core::{introspect, CatalogSnapshot};

#[test]
fn introspected_tables_become_modules() {
    let mut catalog = CatalogSnapshot::new();
    for table in [master(), detail()] {
        catalog.add_table(TableMeta::from_model(&table, &MYSQL8).unwrap());
    }
    let tables = introspect(&catalog, &MYSQL8).unwrap();

    let cfg = EmitterConfig::from_json(
        r#"{"package_name": "db.rows", "exclude_tables": ["DETAIL"], "public_field": true}"#,
    )
    .unwrap();
    let units = emit_all(&tables, &cfg);
    assert_eq!(units.len(), 1);
    let src = &units[0].content;
    assert!(src.contains("pub struct Master {"));
    assert!(src.contains("    pub id: i64,\n    pub name: String,\n    pub order: Option<String>,\n    pub active: bool,\n"));
    assert!(src.contains("pub const ORDER: &'static str = \"order\";"));

    let dir = tempfile::tempdir().unwrap();
    let written = write_units(dir.path(), &units).unwrap();
    assert_eq!(written, vec![dir.path().join("db").join("rows").join("master.rs")]);
    let mod_rs = fs::read_to_string(dir.path().join("db/rows/mod.rs")).unwrap();
    assert_eq!(mod_rs, "pub mod master;\n");
    assert_eq!(fs::read_to_string(&written[0]).unwrap(), *src);
}
