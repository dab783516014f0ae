//! Reads the SQLite catalog into a [`CatalogSnapshot`].
//!
//! Table names come from `sqlite_master`; columns, indexes and foreign keys
//! from the `pragma_*` table-valued functions. SQLite keeps no names for
//! foreign keys and no flag for AUTOINCREMENT, so both are recovered from
//! the stored CREATE TABLE text.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use oxide_dialects_core::introspect::{
    ColumnMeta, ForeignKeyMeta, IndexMeta, PrimaryKeyMeta, TableMeta,
};
use oxide_dialects_core::model::ForeignKeyAction;
use oxide_dialects_core::CatalogSnapshot;
use regex::Regex;
use sqlx::sqlite::SqlitePool;
use tracing::{debug, info};

use crate::error::{Result, SqliteError};

/// Prefix of the indexes SQLite creates for inline UNIQUE constraints.
const AUTOINDEX_PREFIX: &str = "sqlite_autoindex_";

const TABLES_SQL: &str = "SELECT name, sql FROM sqlite_master \
     WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY rowid";

const COLUMNS_SQL: &str =
    "SELECT name, type, \"notnull\", dflt_value, pk FROM pragma_table_info(?) ORDER BY cid";

const INDEXES_SQL: &str =
    "SELECT name, \"unique\", origin FROM pragma_index_list(?) ORDER BY seq DESC";

const INDEX_COLUMNS_SQL: &str = "SELECT name FROM pragma_index_info(?) ORDER BY seqno";

const FOREIGN_KEYS_SQL: &str = "SELECT id, \"table\", \"from\", \"to\", on_update, on_delete \
     FROM pragma_foreign_key_list(?) ORDER BY id, seq";

const NAME: &str = r#"(?:"[^"]+"|`[^`]+`|\[[^\]]+\]|\w+)"#;

/// `name INTEGER PRIMARY KEY AUTOINCREMENT` column definitions.
static AUTOINCREMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)({NAME})\s+INTEGER\s+PRIMARY\s+KEY(?:\s+ASC|\s+DESC)?\s+AUTOINCREMENT"
    ))
    .expect("Invalid autoincrement regex")
});

/// `CONSTRAINT name FOREIGN KEY (cols) REFERENCES table` clauses.
static NAMED_FOREIGN_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)CONSTRAINT\s+({NAME})\s+FOREIGN\s+KEY\s*\(([^)]*)\)\s*REFERENCES\s+({NAME})"
    ))
    .expect("Invalid foreign key regex")
});

/// A `CONSTRAINT ... FOREIGN KEY` clause of a stored CREATE TABLE.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NamedForeignKey {
    offset: usize,
    name: String,
    columns: Vec<String>,
    referenced_table: String,
}

type ColumnRow = (String, String, i64, Option<String>, i64);
type ForeignKeyRow = (i64, String, String, Option<String>, String, String);

/// Reads every user table of the database behind `pool`.
///
/// # Errors
///
/// [`SqliteError::Database`] when a catalog query fails.
pub async fn read_catalog(pool: &SqlitePool) -> Result<CatalogSnapshot> {
    let tables: Vec<(String, Option<String>)> =
        sqlx::query_as(TABLES_SQL).fetch_all(pool).await?;

    let mut snapshot = CatalogSnapshot::new();
    for (name, create_sql) in &tables {
        let meta = read_table(pool, name, create_sql.as_deref().unwrap_or_default()).await?;
        snapshot.add_table(meta);
    }
    info!(tables = snapshot.tables.len(), "Read SQLite catalog");
    Ok(snapshot)
}

async fn read_table(pool: &SqlitePool, name: &str, create_sql: &str) -> Result<TableMeta> {
    let mut table = TableMeta::new(name);

    let rows: Vec<ColumnRow> = sqlx::query_as(COLUMNS_SQL).bind(name).fetch_all(pool).await?;
    let autoincrement = autoincrement_column(create_sql);
    let mut pkey: Vec<(i64, String)> = Vec::new();
    for (column, type_name, not_null, default, pk) in rows {
        if pk > 0 {
            pkey.push((pk, column.clone()));
        }
        let auto_increment = autoincrement
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(&column));
        table.columns.push(ColumnMeta {
            nullable: not_null == 0,
            default,
            auto_increment,
            ..ColumnMeta::new(column, type_name)
        });
    }
    pkey.sort_by_key(|(position, _)| *position);
    if !pkey.is_empty() {
        table.primary_key = Some(PrimaryKeyMeta {
            name: None,
            columns: pkey.into_iter().map(|(_, c)| c).collect(),
        });
    }

    table.indexes = read_indexes(pool, name).await?;
    table.foreign_keys = read_foreign_keys(pool, name, create_sql).await?;
    debug!(
        table = name,
        columns = table.columns.len(),
        indexes = table.indexes.len(),
        foreign_keys = table.foreign_keys.len(),
        "Read SQLite table"
    );
    Ok(table)
}

async fn read_indexes(pool: &SqlitePool, table: &str) -> Result<Vec<IndexMeta>> {
    let rows: Vec<(String, i64, String)> =
        sqlx::query_as(INDEXES_SQL).bind(table).fetch_all(pool).await?;

    let mut indexes = Vec::new();
    for (name, unique, origin) in rows {
        // The primary key is reported separately.
        if origin == "pk" {
            continue;
        }
        let columns: Vec<(Option<String>,)> = sqlx::query_as(INDEX_COLUMNS_SQL)
            .bind(&name)
            .fetch_all(pool)
            .await?;
        if columns.iter().any(|(c,)| c.is_none()) {
            return Err(SqliteError::Unsupported(format!(
                "expression index '{name}' on table '{table}'"
            )));
        }
        indexes.push(IndexMeta {
            name: (!name.starts_with(AUTOINDEX_PREFIX)).then_some(name),
            columns: columns.into_iter().filter_map(|(c,)| c).collect(),
            unique: unique != 0,
            constraint: origin == "u",
        });
    }
    Ok(indexes)
}

async fn read_foreign_keys(
    pool: &SqlitePool,
    table: &str,
    create_sql: &str,
) -> Result<Vec<ForeignKeyMeta>> {
    let rows: Vec<ForeignKeyRow> = sqlx::query_as(FOREIGN_KEYS_SQL)
        .bind(table)
        .fetch_all(pool)
        .await?;

    let mut grouped: BTreeMap<i64, ForeignKeyMeta> = BTreeMap::new();
    for (id, ref_table, from, to, on_update, on_delete) in rows {
        let fk = grouped.entry(id).or_insert_with(|| ForeignKeyMeta {
            referenced_table: ref_table.clone(),
            on_delete: ForeignKeyAction::from_sql(&on_delete),
            on_update: ForeignKeyAction::from_sql(&on_update),
            ..ForeignKeyMeta::default()
        });
        let position = fk.columns.len();
        fk.columns.push(from);
        let to = match to {
            Some(to) => to,
            None => referenced_pkey_column(pool, &ref_table, position).await?,
        };
        fk.referenced_columns.push(to);
    }

    let named = named_foreign_keys(create_sql);
    Ok(attach_names(grouped.into_values().collect(), named))
}

/// Gives each foreign key the name of its declaring clause and restores
/// declaration order. A clause names at most one foreign key; keys without
/// a clause stay unnamed and come last.
fn attach_names(
    foreign_keys: Vec<ForeignKeyMeta>,
    mut named: Vec<NamedForeignKey>,
) -> Vec<ForeignKeyMeta> {
    let mut keyed: Vec<(usize, ForeignKeyMeta)> = foreign_keys
        .into_iter()
        .map(|mut fk| {
            let found = named.iter().position(|clause| {
                clause.referenced_table.eq_ignore_ascii_case(&fk.referenced_table)
                    && same_columns(&clause.columns, &fk.columns)
            });
            let position = match found {
                Some(at) => {
                    let clause = named.remove(at);
                    fk.name = Some(clause.name);
                    clause.offset
                }
                None => usize::MAX,
            };
            (position, fk)
        })
        .collect();
    keyed.sort_by_key(|(position, _)| *position);
    keyed.into_iter().map(|(_, fk)| fk).collect()
}

/// Column of `table`'s primary key at `position`, for foreign keys that
/// reference the primary key implicitly.
async fn referenced_pkey_column(pool: &SqlitePool, table: &str, position: usize) -> Result<String> {
    let rows: Vec<ColumnRow> = sqlx::query_as(COLUMNS_SQL).bind(table).fetch_all(pool).await?;
    let mut pkey: Vec<(i64, String)> = rows
        .into_iter()
        .filter(|row| row.4 > 0)
        .map(|row| (row.4, row.0))
        .collect();
    pkey.sort_by_key(|(p, _)| *p);
    pkey.into_iter()
        .nth(position)
        .map(|(_, c)| c)
        .ok_or_else(|| {
            SqliteError::Unsupported(format!(
                "foreign key to '{table}' without matching primary key column"
            ))
        })
}

fn autoincrement_column(create_sql: &str) -> Option<String> {
    AUTOINCREMENT
        .captures(create_sql)
        .map(|caps| unquote(&caps[1]))
}

fn named_foreign_keys(create_sql: &str) -> Vec<NamedForeignKey> {
    NAMED_FOREIGN_KEY
        .captures_iter(create_sql)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(NamedForeignKey {
                offset: whole.start(),
                name: unquote(&caps[1]),
                columns: caps[2].split(',').map(|c| unquote(c.trim())).collect(),
                referenced_table: unquote(&caps[3]),
            })
        })
        .collect()
}

fn same_columns(a: &[String], b: &[String]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.eq_ignore_ascii_case(y))
}

fn unquote(name: &str) -> String {
    let quoted = [('"', '"'), ('`', '`'), ('[', ']')]
        .iter()
        .find(|(open, close)| name.len() >= 2 && name.starts_with(*open) && name.ends_with(*close));
    match quoted {
        Some(_) => name[1..name.len() - 1].to_string(),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autoincrement_column() {
        assert_eq!(
            autoincrement_column("CREATE TABLE t (id INTEGER PRIMARY KEY AUTOINCREMENT, a TEXT)"),
            Some("id".to_string())
        );
        assert_eq!(
            autoincrement_column("CREATE TABLE \"t\" (\"Id\" integer primary key autoincrement)"),
            Some("Id".to_string())
        );
        assert_eq!(autoincrement_column("CREATE TABLE t (id INTEGER PRIMARY KEY)"), None);
    }

    #[test]
    fn test_named_foreign_keys() {
        let sql = "CREATE TABLE d (id INTEGER, a INTEGER, b INTEGER, \
                   CONSTRAINT fk_b FOREIGN KEY (\"b\") REFERENCES m (id), \
                   CONSTRAINT fk_a FOREIGN KEY (a) REFERENCES m (id))";
        let named = named_foreign_keys(sql);
        assert_eq!(named.len(), 2);
        assert_eq!(named[0].name, "fk_b");
        assert_eq!(named[0].columns, vec!["b"]);
        assert_eq!(named[0].referenced_table, "m");
        assert!(named[0].offset < named[1].offset);
    }

    fn fk(columns: &[&str], referenced_table: &str) -> ForeignKeyMeta {
        ForeignKeyMeta {
            referenced_table: referenced_table.to_string(),
            columns: columns.iter().map(ToString::to_string).collect(),
            referenced_columns: vec!["id".to_string(); columns.len()],
            ..ForeignKeyMeta::default()
        }
    }

    #[test]
    fn test_attach_names_same_columns_different_targets() {
        let sql = "CREATE TABLE link (id INTEGER, ref_id INTEGER, \
                   CONSTRAINT fk_link_a FOREIGN KEY (ref_id) REFERENCES \"a\" (id), \
                   CONSTRAINT fk_link_b FOREIGN KEY (ref_id) REFERENCES b (id))";
        // pragma_foreign_key_list reports the last clause first.
        let attached = attach_names(
            vec![fk(&["ref_id"], "b"), fk(&["ref_id"], "a")],
            named_foreign_keys(sql),
        );
        let names: Vec<_> = attached
            .iter()
            .map(|f| (f.name.as_deref(), f.referenced_table.as_str()))
            .collect();
        assert_eq!(names, vec![(Some("fk_link_a"), "a"), (Some("fk_link_b"), "b")]);
    }

    #[test]
    fn test_attach_names_uses_each_clause_once() {
        let sql = "CREATE TABLE t (a INTEGER, CONSTRAINT fk_t FOREIGN KEY (a) REFERENCES m (id), \
                   FOREIGN KEY (a) REFERENCES m (id))";
        let attached = attach_names(
            vec![fk(&["a"], "m"), fk(&["a"], "m")],
            named_foreign_keys(sql),
        );
        assert_eq!(attached[0].name.as_deref(), Some("fk_t"));
        assert_eq!(attached[1].name, None);
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"a b\""), "a b");
        assert_eq!(unquote("[x]"), "x");
        assert_eq!(unquote("plain"), "plain");
        assert_eq!(unquote("\""), "\"");
    }
}
