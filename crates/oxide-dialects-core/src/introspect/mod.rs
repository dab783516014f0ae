//! Schema introspection.
//!
//! Driver crates implement [`CatalogSource`] to read a live database's
//! catalog. [`introspect`] turns what they report into [`TableModel`]s,
//! mapping native type names back to tokens through the dialect's type
//! rules. The core crate defines only the trait so it stays
//! driver-agnostic.

mod catalog;

use tracing::{debug, info};

use crate::dialect::DialectDescriptor;
use crate::error::{DdlError, Result};
use crate::model::{
    ColumnBuilder, DefaultValue, FKeyModel, ForeignKeyAction, IndexModel, TableModel,
    UniqueModel,
};

pub use catalog::{
    CatalogError, CatalogSnapshot, ColumnMeta, ForeignKeyMeta, IndexMeta, PrimaryKeyMeta,
    TableMeta,
};

/// Read access to a database catalog.
pub trait CatalogSource {
    /// Error type for catalog reads.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Names of the user tables, in catalog order.
    fn table_names(&self) -> std::result::Result<Vec<String>, Self::Error>;

    /// Columns of `table` in declaration order.
    fn columns(&self, table: &str) -> std::result::Result<Vec<ColumnMeta>, Self::Error>;

    /// Primary key of `table`, if it has one.
    fn primary_key(&self, table: &str) -> std::result::Result<Option<PrimaryKeyMeta>, Self::Error>;

    /// Foreign keys declared on `table`.
    fn foreign_keys(&self, table: &str) -> std::result::Result<Vec<ForeignKeyMeta>, Self::Error>;

    /// Indexes and unique constraints of `table`, excluding the primary key.
    fn indexes(&self, table: &str) -> std::result::Result<Vec<IndexMeta>, Self::Error>;

    /// Comment on `table`. Engines without table comments keep the default.
    fn table_comment(&self, _table: &str) -> std::result::Result<Option<String>, Self::Error> {
        Ok(None)
    }
}

/// Reads every table of `source` into a model.
///
/// All or nothing: the first failure aborts the call and no partial
/// result is returned.
///
/// # Errors
///
/// [`DdlError::Introspection`] when the source fails, a native type has no
/// token in `dialect`, or the reported metadata does not form a valid
/// model.
pub fn introspect<S>(source: &S, dialect: &DialectDescriptor) -> Result<Vec<TableModel>>
where
    S: CatalogSource + ?Sized,
{
    let names = source
        .table_names()
        .map_err(|e| DdlError::introspection("failed to list tables", e))?;
    let mut tables = Vec::with_capacity(names.len());
    for name in &names {
        tables.push(introspect_table(source, dialect, name)?);
    }
    info!(dialect = dialect.id, tables = tables.len(), "Introspected catalog");
    Ok(tables)
}

fn introspect_table<S>(source: &S, dialect: &DialectDescriptor, name: &str) -> Result<TableModel>
where
    S: CatalogSource + ?Sized,
{
    let read = |what: &str| {
        let message = format!("failed to read {what} of table '{name}'");
        move |e: S::Error| DdlError::introspection(message, e)
    };
    let columns = source.columns(name).map_err(read("columns"))?;
    let pkey = source.primary_key(name).map_err(read("primary key"))?;
    let fkeys = source.foreign_keys(name).map_err(read("foreign keys"))?;
    let indexes = source.indexes(name).map_err(read("indexes"))?;
    let comment = source.table_comment(name).map_err(read("comment"))?;

    let invalid = |e: DdlError| DdlError::introspection(format!("table '{name}' cannot be modeled"), e);
    let mut table = TableModel::new(name).map_err(invalid)?;

    let pkey_columns = pkey.map(|pk| pk.columns).unwrap_or_default();
    for pk in &pkey_columns {
        if !columns.iter().any(|c| c.name.eq_ignore_ascii_case(pk)) {
            return Err(DdlError::introspection_msg(format!(
                "primary key of table '{name}' names unknown column '{pk}'"
            )));
        }
    }

    for meta in &columns {
        let in_pkey = pkey_columns.iter().any(|pk| pk.eq_ignore_ascii_case(&meta.name));
        let builder = column_builder(dialect, name, meta, in_pkey)?;
        table.add_column(builder).map_err(invalid)?;
    }

    for (n, fk) in fkeys.into_iter().enumerate() {
        let fk_name = fk.name.unwrap_or_else(|| format!("FK_{name}_{}", n + 1));
        let mut model = FKeyModel::new(fk_name)
            .columns(fk.columns)
            .refs(fk.referenced_table, fk.referenced_columns);
        if let Some(action) = fk.on_delete.filter(|a| *a != ForeignKeyAction::NoAction) {
            model = model.on_delete(action);
        }
        if let Some(action) = fk.on_update.filter(|a| *a != ForeignKeyAction::NoAction) {
            model = model.on_update(action);
        }
        table.add_fkey(model).map_err(invalid)?;
    }

    let (mut index_n, mut unique_n) = (0, 0);
    for index in indexes {
        if index.unique && index.constraint {
            unique_n += 1;
            let uk_name = index.name.unwrap_or_else(|| format!("UK_{name}_{unique_n}"));
            table
                .add_unique(UniqueModel::new(uk_name).columns(index.columns))
                .map_err(invalid)?;
        } else {
            index_n += 1;
            let idx_name = index.name.unwrap_or_else(|| format!("IDX_{name}_{index_n}"));
            let mut model = IndexModel::new(idx_name).columns(index.columns);
            if index.unique {
                model = model.unique();
            }
            table.add_index(model).map_err(invalid)?;
        }
    }

    if let Some(comment) = comment {
        table.set_comment(comment);
    }
    debug!(table = name, columns = table.columns().len(), "Introspected table");
    Ok(table)
}

fn column_builder(
    dialect: &DialectDescriptor,
    table: &str,
    meta: &ColumnMeta,
    in_pkey: bool,
) -> Result<ColumnBuilder> {
    let (token, params) = dialect
        .native_type(&meta.type_name, meta.size, meta.precision, meta.scale)
        .ok_or_else(|| {
            DdlError::introspection_msg(format!(
                "column '{table}.{}' has type '{}' with no {} mapping",
                meta.name, meta.type_name, dialect.name
            ))
        })?;

    let mut builder = ColumnBuilder::new(&meta.name, token).params(params);
    if !meta.nullable {
        builder = builder.not_null();
    }
    if in_pkey {
        builder = builder.pkey();
    }

    let sequence_default = meta
        .default
        .as_deref()
        .is_some_and(|d| d.trim_start().to_ascii_lowercase().starts_with("nextval("));
    let auto_id = meta.auto_increment || sequence_default;
    if auto_id && token.is_integral() {
        builder = builder.auto_id();
    } else {
        if auto_id {
            debug!(table, column = %meta.name, %token, "Identity flag on non-integral column ignored");
        }
        if let Some(value) = meta.default.as_deref().and_then(parse_default) {
            builder = builder.default(value);
        }
    }
    if let Some(comment) = &meta.comment {
        builder = builder.comment(comment);
    }
    Ok(builder)
}

/// Interprets a catalog default expression.
///
/// NULL defaults are dropped. Literals become typed values; anything else
/// is kept as an expression.
fn parse_default(raw: &str) -> Option<DefaultValue> {
    let mut text = raw.trim();
    while let Some(inner) = strip_outer_parens(text) {
        text = inner.trim();
    }
    if text.is_empty() || text.eq_ignore_ascii_case("NULL") {
        return None;
    }
    if let Some(s) = string_literal(text) {
        return Some(DefaultValue::String(s));
    }
    if text.eq_ignore_ascii_case("TRUE") {
        return Some(DefaultValue::Boolean(true));
    }
    if text.eq_ignore_ascii_case("FALSE") {
        return Some(DefaultValue::Boolean(false));
    }
    if let Ok(i) = text.parse::<i64>() {
        return Some(DefaultValue::Integer(i));
    }
    let numeric = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if numeric {
        if let Ok(f) = text.parse::<f64>() {
            return Some(DefaultValue::Float(f));
        }
    }
    Some(DefaultValue::Expression(text.to_string()))
}

/// Returns the inside of `(...)` when the outer parentheses wrap the whole
/// text.
fn strip_outer_parens(text: &str) -> Option<&str> {
    let inner = text.strip_prefix('(')?.strip_suffix(')')?;
    let mut depth = 0i32;
    let mut in_string = false;
    for ch in inner.chars() {
        match ch {
            '\'' => in_string = !in_string,
            '(' if !in_string => depth += 1,
            ')' if !in_string => {
                depth -= 1;
                if depth < 0 {
                    return None;
                }
            }
            _ => {}
        }
    }
    (depth == 0).then_some(inner)
}

/// Unescapes a single-quoted literal, ignoring a trailing `::type` cast.
fn string_literal(text: &str) -> Option<String> {
    let rest = text.strip_prefix('\'')?;
    let mut value = String::new();
    let mut chars = rest.char_indices().peekable();
    while let Some((i, ch)) = chars.next() {
        if ch != '\'' {
            value.push(ch);
            continue;
        }
        if matches!(chars.peek(), Some((_, '\''))) {
            chars.next();
            value.push('\'');
            continue;
        }
        let tail = rest[i + 1..].trim();
        return (tail.is_empty() || tail.starts_with("::")).then_some(value);
    }
    None
}
