//! Round trips against an in-memory SQLite database.

use oxide_dialects_core::dialect::SQLITE;
use oxide_dialects_core::model::{
    boolean, integer, long, timestamp, varchar, FKeyModel, ForeignKeyAction, IndexModel,
    TableModel, UniqueModel,
};
use oxide_dialects_core::paginate;
use oxide_dialects_sqlite::{SqliteError, SqliteExecutor};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

async fn create_test_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create in-memory SQLite pool")
}

fn master() -> TableModel {
    let mut t = TableModel::new("master").unwrap();
    t.add_column(long("id").pkey().auto_id())
        .unwrap()
        .add_column(varchar("name", 40).not_null())
        .unwrap()
        .add_column(varchar("order", 10))
        .unwrap()
        .add_column(boolean("active").not_null().default_bool(true))
        .unwrap()
        .add_unique(UniqueModel::new("uk_master_name").columns(["name"]))
        .unwrap();
    t
}

fn detail() -> TableModel {
    let mut t = TableModel::new("detail").unwrap();
    t.add_column(long("id").pkey().auto_id())
        .unwrap()
        .add_column(long("master_id").not_null())
        .unwrap()
        .add_column(timestamp("created_at"))
        .unwrap()
        .add_index(IndexModel::new("idx_detail_master").columns(["master_id"]))
        .unwrap()
        .add_fkey(
            FKeyModel::new("fk_detail_master")
                .columns(["master_id"])
                .refs("master", ["id"])
                .on_delete(ForeignKeyAction::Cascade),
        )
        .unwrap();
    t
}

fn sorted(mut statements: Vec<String>) -> Vec<String> {
    statements.sort();
    statements
}

#[tokio::test]
async fn create_then_drop_leaves_no_trace() {
    let executor = SqliteExecutor::new(create_test_pool().await);
    let tables = [master(), detail()];

    let report = executor.create_tables(&tables).await.unwrap();
    assert!(report.is_clean());
    let catalog = executor.catalog().await.unwrap();
    assert_eq!(catalog.tables.len(), 2);
    assert_eq!(catalog.tables[0].name, "master");

    let report = executor.drop_tables(&tables).await.unwrap();
    assert!(report.is_clean(), "{:?}", report.failures);
    assert!(executor.catalog().await.unwrap().tables.is_empty());
}

#[tokio::test]
async fn introspected_schema_resynthesizes_identically() {
    let executor = SqliteExecutor::new(create_test_pool().await);
    let tables = [master(), detail()];
    executor.create_tables(&tables).await.unwrap();

    let read = executor.introspect().await.unwrap();
    assert_eq!(read.len(), 2);
    let detail = &read[1];
    assert_eq!(detail.fkeys()[0].name(), "fk_detail_master");
    assert_eq!(detail.fkeys()[0].delete_action(), Some(ForeignKeyAction::Cascade));
    assert!(detail.columns()[0].is_auto_id());
    assert!(read[0].column("order_attribute").is_some());

    // Unique constraints come back as unique indexes, so compare as sets.
    let synth = executor.synthesizer();
    assert_eq!(
        sorted(synth.create_ddl_all(&read).unwrap()),
        sorted(synth.create_ddl_all(&tables).unwrap())
    );
}

#[tokio::test]
async fn add_and_drop_column() {
    let executor = SqliteExecutor::new(create_test_pool().await);
    let mut table = master();
    executor.create_tables(std::slice::from_ref(&table)).await.unwrap();

    table
        .add_column(integer("rank").not_null().default_int(0))
        .unwrap();
    let rank = table.column_ref("rank").unwrap();
    executor.add_column(rank).await.unwrap();
    let catalog = executor.catalog().await.unwrap();
    let columns = &catalog.tables[0].columns;
    assert_eq!(columns.last().map(|c| c.name.as_str()), Some("rank"));
    assert_eq!(columns.last().and_then(|c| c.default.as_deref()), Some("0"));

    let report = executor
        .drop_column(table.column_ref("rank").unwrap())
        .await
        .unwrap();
    assert!(report.is_clean());
    assert_eq!(executor.catalog().await.unwrap().tables[0].columns.len(), 4);
}

#[tokio::test]
async fn identity_column_cannot_be_added() {
    let executor = SqliteExecutor::new(create_test_pool().await);
    let mut table = TableModel::new("plain").unwrap();
    table.add_column(varchar("code", 8)).unwrap();
    executor.create_tables(std::slice::from_ref(&table)).await.unwrap();

    table.add_column(long("seq").auto_id()).unwrap();
    let err = executor
        .add_column(table.column_ref("seq").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, SqliteError::Ddl(_)));
}

#[tokio::test]
async fn pages_partition_the_ordered_result() {
    let executor = SqliteExecutor::new(create_test_pool().await);
    let mut nums = TableModel::new("nums").unwrap();
    nums.add_column(integer("n").pkey()).unwrap();
    executor.create_tables(&[nums]).await.unwrap();
    for n in 1..=25_i64 {
        sqlx::query("INSERT INTO nums (n) VALUES (?)")
            .bind(n)
            .execute(executor.pool())
            .await
            .unwrap();
    }

    let mut seen = Vec::new();
    for page in 1..=3 {
        let sql = paginate(&SQLITE, page, 10, "select n from nums order by n").unwrap();
        let rows: Vec<(i64,)> = sqlx::query_as(&sql)
            .fetch_all(executor.pool())
            .await
            .unwrap();
        assert_eq!(rows.len(), if page == 3 { 5 } else { 10 });
        seen.extend(rows.into_iter().map(|(n,)| n));
    }
    assert_eq!(seen, (1..=25).collect::<Vec<_>>());

    let sql = paginate(&SQLITE, 4, 10, "select n from nums order by n").unwrap();
    let rows: Vec<(i64,)> = sqlx::query_as(&sql)
        .fetch_all(executor.pool())
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn foreign_keys_sharing_columns_keep_their_names() {
    let executor = SqliteExecutor::new(create_test_pool().await);
    let mut first = TableModel::new("first_parent").unwrap();
    first.add_column(integer("id").pkey()).unwrap();
    let mut second = TableModel::new("second_parent").unwrap();
    second.add_column(integer("id").pkey()).unwrap();
    let mut link = TableModel::new("link").unwrap();
    link.add_column(integer("id").pkey())
        .unwrap()
        .add_column(integer("parent_id"))
        .unwrap()
        .add_fkey(
            FKeyModel::new("fk_link_first")
                .columns(["parent_id"])
                .refs("first_parent", ["id"]),
        )
        .unwrap()
        .add_fkey(
            FKeyModel::new("fk_link_second")
                .columns(["parent_id"])
                .refs("second_parent", ["id"]),
        )
        .unwrap();
    let report = executor.create_tables(&[first, second, link]).await.unwrap();
    assert!(report.is_clean());

    let read = executor.introspect().await.unwrap();
    let link = read.iter().find(|t| t.name() == "link").unwrap();
    let fkeys: Vec<_> = link
        .fkeys()
        .iter()
        .map(|f| (f.name(), f.ref_table()))
        .collect();
    assert_eq!(
        fkeys,
        vec![
            ("fk_link_first", "first_parent"),
            ("fk_link_second", "second_parent"),
        ]
    );
}
