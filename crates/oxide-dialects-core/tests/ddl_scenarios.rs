//! End-to-end DDL scenarios across the dialect registry.

mod common;

use common::{assert_has, detail, master, position, user_t};
use oxide_dialects_core::dialect::{self, H2, MYSQL8, POSTGRESQL, SQLITE};
use oxide_dialects_core::model::TableModel;
use oxide_dialects_core::{DdlError, DdlOptions, DdlSynthesizer};

// =============================================================================
// H2 composite key
// =============================================================================

#[test]
fn h2_user_t_create_and_drop() {
    let h2 = dialect::resolve("H2Dialect").unwrap();
    let create = h2.to_create_ddl(&user_t()).unwrap();
    assert_eq!(create.len(), 1);
    assert!(create[0].starts_with("CREATE TABLE user_t ("));
    assert!(create[0].contains("PRIMARY KEY (first_name, last_name)"));

    let drop = h2.to_drop_ddl(&user_t());
    assert_eq!(drop, vec!["DROP TABLE IF EXISTS user_t CASCADE"]);
}

#[test]
fn h2_drop_without_columns() {
    let empty = TableModel::new("user_t").unwrap();
    assert_eq!(H2.to_drop_ddl(&empty).len(), 1);
}

// =============================================================================
// MySQL 8 master/detail
// =============================================================================

#[test]
fn mysql8_master_detail() {
    let tables = [master(), detail()];
    let ddl = MYSQL8.synthesizer().create_ddl_all(&tables).unwrap();

    assert_eq!(
        ddl[0],
        "CREATE TABLE master (id BIGINT AUTO_INCREMENT NOT NULL, \
         name VARCHAR(40) NOT NULL COMMENT 'display name', \
         order_attribute VARCHAR(10), \
         active TINYINT(1) DEFAULT TRUE NOT NULL, \
         PRIMARY KEY (id)) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COMMENT='Master records'"
    );
    assert!(ddl[1].starts_with("CREATE TABLE detail ("));
    assert_has(&ddl, "created_at DATETIME(6)");

    let index = position(&ddl, "CREATE INDEX idx_detail_master ON detail (master_id)");
    let unique = position(&ddl, "ADD CONSTRAINT uk_master_name UNIQUE (name)");
    let fk = position(
        &ddl,
        "ALTER TABLE detail ADD CONSTRAINT fk_detail_master FOREIGN KEY (master_id) \
         REFERENCES master (id) ON DELETE CASCADE",
    );
    assert!(index < unique && unique < fk);
    assert_eq!(fk, ddl.len() - 1);

    let drop = MYSQL8.synthesizer().drop_ddl_all(&tables);
    assert_eq!(drop[0], "ALTER TABLE detail DROP FOREIGN KEY fk_detail_master");
    let last_table = drop
        .iter()
        .rposition(|s| s.starts_with("DROP TABLE"))
        .unwrap();
    assert_eq!(last_table, drop.len() - 1);
    assert_has(&drop, "ALTER TABLE master DROP INDEX uk_master_name");
}

#[test]
fn reserved_names_are_stable() {
    let first = MYSQL8.to_create_ddl(&master()).unwrap();
    let second = MYSQL8.to_create_ddl(&master()).unwrap();
    assert_eq!(first, second);
    assert!(!first[0].contains("order_attribute_attribute"));
}

// =============================================================================
// Every dialect
// =============================================================================

#[test]
fn every_dialect_renders_master_detail() {
    // Declared referencing-first on purpose.
    let tables = [detail(), master()];
    for d in dialect::all() {
        let create = d
            .synthesizer()
            .create_ddl_all(&tables)
            .unwrap_or_else(|e| panic!("{d}: {e}"));
        let drop = d.synthesizer().drop_ddl_all(&tables);
        for sql in create.iter().chain(&drop) {
            assert!(!sql.ends_with(';'), "{d}: terminator in {sql}");
            assert!(!sql.contains('$'), "{d}: unfilled placeholder in {sql}");
        }
        let master_create = position(&create, "CREATE TABLE master");
        let detail_create = position(&create, "CREATE TABLE detail");
        if d.id == "sqlite" || d.id == "duckdb" {
            assert!(master_create < detail_create, "{d}");
        }
        assert!(drop.iter().any(|s| s.contains("DROP TABLE")), "{d}");
    }
}

#[test]
fn quoted_identifiers_follow_dialect_case() {
    let synth = DdlSynthesizer::with_options(
        &POSTGRESQL,
        DdlOptions::new().quote_identifiers(true).show_sql(true),
    );
    let ddl = synth.create_ddl(&master()).unwrap();
    assert!(ddl[0].starts_with("CREATE TABLE \"master\" (\"id\" BIGINT"));
    assert!(ddl[0].contains("\"order_attribute\" VARCHAR(10)"));

    let h2 = DdlSynthesizer::with_options(&H2, DdlOptions::new().quote_identifiers(true));
    let ddl = h2.create_ddl(&user_t()).unwrap();
    assert!(ddl[0].starts_with("CREATE TABLE \"USER_T\" (\"FIRST_NAME\""));
}

#[test]
fn sqlite_rejects_unknown_reference_target() {
    let err = SQLITE
        .synthesizer()
        .create_ddl_all(&[detail()])
        .unwrap_err();
    assert!(matches!(err, DdlError::InvalidModelDefinition(_)));
}

#[test]
fn unknown_dialect() {
    let err = dialect::resolve("access97").unwrap_err();
    assert!(matches!(err, DdlError::UnknownDialect(ref id) if id == "access97"));
}
