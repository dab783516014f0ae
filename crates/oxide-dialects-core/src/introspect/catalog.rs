//! Catalog metadata and the in-memory catalog.

use serde::{Deserialize, Serialize};

use super::CatalogSource;
use crate::dialect::DialectDescriptor;
use crate::error::Result;
use crate::model::{ForeignKeyAction, TableModel};

/// A column as reported by a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMeta {
    /// Column name.
    pub name: String,
    /// Native type name, possibly with arguments (`"VARCHAR(20)"`).
    pub type_name: String,
    /// Character or byte length, when reported separately.
    pub size: Option<u32>,
    /// Numeric precision, when reported separately.
    pub precision: Option<u32>,
    /// Numeric scale, when reported separately.
    pub scale: Option<u32>,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Raw default expression as stored in the catalog.
    pub default: Option<String>,
    /// Whether the engine generates values for this column.
    pub auto_increment: bool,
    /// Column comment.
    pub comment: Option<String>,
}

impl Default for ColumnMeta {
    fn default() -> Self {
        Self {
            name: String::new(),
            type_name: String::new(),
            size: None,
            precision: None,
            scale: None,
            nullable: true,
            default: None,
            auto_increment: false,
            comment: None,
        }
    }
}

impl ColumnMeta {
    /// A nullable column without default.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            ..Self::default()
        }
    }
}

/// A table's primary key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryKeyMeta {
    /// Constraint name, if the engine exposes one.
    pub name: Option<String>,
    /// Key columns in key order.
    pub columns: Vec<String>,
}

/// A foreign key as reported by a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForeignKeyMeta {
    /// Constraint name, if the engine exposes one.
    pub name: Option<String>,
    /// Local columns.
    pub columns: Vec<String>,
    /// Referenced table.
    pub referenced_table: String,
    /// Referenced columns, aligned with `columns`.
    pub referenced_columns: Vec<String>,
    /// ON DELETE action.
    pub on_delete: Option<ForeignKeyAction>,
    /// ON UPDATE action.
    pub on_update: Option<ForeignKeyAction>,
}

/// An index or unique constraint as reported by a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexMeta {
    /// Index name, if the engine exposes one.
    pub name: Option<String>,
    /// Indexed columns in order.
    pub columns: Vec<String>,
    /// Whether the index enforces uniqueness.
    pub unique: bool,
    /// Whether the index backs a declared UNIQUE constraint.
    pub constraint: bool,
}

/// Everything a catalog knows about one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableMeta {
    /// Table name.
    pub name: String,
    /// Table comment.
    pub comment: Option<String>,
    /// Columns in declaration order.
    pub columns: Vec<ColumnMeta>,
    /// Primary key, if any.
    pub primary_key: Option<PrimaryKeyMeta>,
    /// Foreign keys.
    pub foreign_keys: Vec<ForeignKeyMeta>,
    /// Indexes and unique constraints.
    pub indexes: Vec<IndexMeta>,
}

impl TableMeta {
    /// Creates an empty table entry.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Describes `table` the way a catalog of `dialect` would report it.
    ///
    /// # Errors
    ///
    /// [`DdlError::InvalidModelDefinition`](crate::DdlError::InvalidModelDefinition)
    /// if a column type cannot be rendered in `dialect`.
    pub fn from_model(table: &TableModel, dialect: &DialectDescriptor) -> Result<Self> {
        let mut columns = Vec::with_capacity(table.columns().len());
        for col in table.columns() {
            columns.push(ColumnMeta {
                name: col.name().to_string(),
                type_name: dialect.render_type(col.token(), col.params())?,
                nullable: col.is_nullable(),
                default: col.default_value().map(|d| d.to_sql(dialect)),
                auto_increment: col.is_auto_id(),
                comment: col.comment().map(str::to_string),
                ..ColumnMeta::default()
            });
        }
        let pkey: Vec<String> = table
            .pkey_columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        let foreign_keys = table
            .fkeys()
            .iter()
            .map(|fk| ForeignKeyMeta {
                name: Some(fk.name().to_string()),
                columns: fk.column_names().to_vec(),
                referenced_table: fk.ref_table().to_string(),
                referenced_columns: fk.ref_column_names().to_vec(),
                on_delete: fk.delete_action(),
                on_update: fk.update_action(),
            })
            .collect();
        let indexes = table
            .indexes()
            .iter()
            .map(|i| IndexMeta {
                name: Some(i.name().to_string()),
                columns: i.column_names().to_vec(),
                unique: i.is_unique(),
                constraint: false,
            })
            .chain(table.uniques().iter().map(|u| IndexMeta {
                name: Some(u.name().to_string()),
                columns: u.column_names().to_vec(),
                unique: true,
                constraint: true,
            }))
            .collect();
        Ok(Self {
            name: table.name().to_string(),
            comment: table.comment().map(str::to_string),
            columns,
            primary_key: (!pkey.is_empty()).then(|| PrimaryKeyMeta {
                name: None,
                columns: pkey,
            }),
            foreign_keys,
            indexes,
        })
    }
}

/// Errors from [`CatalogSnapshot`] lookups.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown table: {0}")]
    UnknownTable(String),
}

/// An in-memory catalog.
///
/// Driver crates fill one from their engine's system tables; tests build
/// one by hand or from models with [`TableMeta::from_model`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Tables in catalog order.
    pub tables: Vec<TableMeta>,
}

impl CatalogSnapshot {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table.
    pub fn add_table(&mut self, table: TableMeta) {
        self.tables.push(table);
    }

    /// Looks up a table by name, ignoring ASCII case.
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&TableMeta> {
        self.tables
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    fn require(&self, name: &str) -> std::result::Result<&TableMeta, CatalogError> {
        self.table(name)
            .ok_or_else(|| CatalogError::UnknownTable(name.to_string()))
    }
}

impl CatalogSource for CatalogSnapshot {
    type Error = CatalogError;

    fn table_names(&self) -> std::result::Result<Vec<String>, Self::Error> {
        Ok(self.tables.iter().map(|t| t.name.clone()).collect())
    }

    fn columns(&self, table: &str) -> std::result::Result<Vec<ColumnMeta>, Self::Error> {
        Ok(self.require(table)?.columns.clone())
    }

    fn primary_key(&self, table: &str) -> std::result::Result<Option<PrimaryKeyMeta>, Self::Error> {
        Ok(self.require(table)?.primary_key.clone())
    }

    fn foreign_keys(&self, table: &str) -> std::result::Result<Vec<ForeignKeyMeta>, Self::Error> {
        Ok(self.require(table)?.foreign_keys.clone())
    }

    fn indexes(&self, table: &str) -> std::result::Result<Vec<IndexMeta>, Self::Error> {
        Ok(self.require(table)?.indexes.clone())
    }

    fn table_comment(&self, table: &str) -> std::result::Result<Option<String>, Self::Error> {
        Ok(self.require(table)?.comment.clone())
    }
}
