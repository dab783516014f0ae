//! Table models.

use serde::Serialize;

use super::column::{ColumnBuilder, ColumnModel};
use super::constraint::{FKeyModel, IndexModel, UniqueModel};
use crate::error::{DdlError, Result};
use crate::identifier::validate_identifier;

/// An engine-independent table definition.
///
/// Columns keep insertion order, which is the column order of the
/// rendered CREATE TABLE. Column names are unique within the table, and
/// constraint names (foreign keys, indexes, uniques) are unique across all
/// three kinds and never equal the table name. Names compare ASCII
/// case-insensitively.
///
/// ```
/// use oxide_dialects_core::model::{integer, varchar, TableModel};
///
/// let mut t = TableModel::new("user_t")?;
/// t.add_column(varchar("first_name", 20).pkey())?
///     .add_column(varchar("last_name", 20).pkey())?
///     .add_column(integer("age"))?;
/// assert_eq!(t.pkey_columns().len(), 2);
/// # Ok::<(), oxide_dialects_core::DdlError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableModel {
    name: String,
    columns: Vec<ColumnModel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fkeys: Vec<FKeyModel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    indexes: Vec<IndexModel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    uniques: Vec<UniqueModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tail: Option<String>,
}

impl TableModel {
    /// Creates an empty table model.
    ///
    /// # Errors
    ///
    /// [`DdlError::InvalidModelDefinition`] if `name` is not a valid
    /// identifier.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_identifier("table", &name)?;
        Ok(Self {
            name,
            columns: Vec::new(),
            fkeys: Vec::new(),
            indexes: Vec::new(),
            uniques: Vec::new(),
            comment: None,
            tail: None,
        })
    }

    /// Builds and appends a column.
    ///
    /// # Errors
    ///
    /// The builder's validation error, or
    /// [`DdlError::InvalidModelDefinition`] for a duplicate column name.
    pub fn add_column(&mut self, column: ColumnBuilder) -> Result<&mut Self> {
        if self.column(column.name()).is_some() {
            return Err(DdlError::invalid_model(format!(
                "table '{}' already has a column named '{}'",
                self.name,
                column.name()
            )));
        }
        let column = column.build()?;
        self.columns.push(column);
        Ok(self)
    }

    /// Appends a foreign key.
    ///
    /// # Errors
    ///
    /// [`DdlError::InvalidModelDefinition`] for an invalid or duplicate
    /// name, an empty column list, a missing referenced table, or local and
    /// referenced column lists of different lengths.
    pub fn add_fkey(&mut self, fkey: FKeyModel) -> Result<&mut Self> {
        self.check_constraint_name("foreign key", fkey.name())?;
        self.check_column_list("foreign key", fkey.name(), fkey.column_names())?;
        validate_identifier("referenced table", fkey.ref_table())?;
        if fkey.column_names().len() != fkey.ref_column_names().len() {
            return Err(DdlError::invalid_model(format!(
                "foreign key '{}' has {} columns but references {}",
                fkey.name(),
                fkey.column_names().len(),
                fkey.ref_column_names().len()
            )));
        }
        self.fkeys.push(fkey);
        Ok(self)
    }

    /// Appends an index.
    ///
    /// # Errors
    ///
    /// [`DdlError::InvalidModelDefinition`] for an invalid or duplicate
    /// name or an empty column list.
    pub fn add_index(&mut self, index: IndexModel) -> Result<&mut Self> {
        self.check_constraint_name("index", index.name())?;
        self.check_column_list("index", index.name(), index.column_names())?;
        self.indexes.push(index);
        Ok(self)
    }

    /// Appends a unique constraint.
    ///
    /// # Errors
    ///
    /// [`DdlError::InvalidModelDefinition`] for an invalid or duplicate
    /// name or an empty column list.
    pub fn add_unique(&mut self, unique: UniqueModel) -> Result<&mut Self> {
        self.check_constraint_name("unique constraint", unique.name())?;
        self.check_column_list("unique constraint", unique.name(), unique.column_names())?;
        self.uniques.push(unique);
        Ok(self)
    }

    /// Sets the table comment.
    pub fn set_comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.comment = Some(comment.into());
        self
    }

    /// Overrides the dialect's CREATE TABLE tail (e.g. `ENGINE=MyISAM`).
    pub fn set_tail(&mut self, tail: impl Into<String>) -> &mut Self {
        self.tail = Some(tail.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn columns(&self) -> &[ColumnModel] {
        &self.columns
    }

    #[must_use]
    pub fn fkeys(&self) -> &[FKeyModel] {
        &self.fkeys
    }

    #[must_use]
    pub fn indexes(&self) -> &[IndexModel] {
        &self.indexes
    }

    #[must_use]
    pub fn uniques(&self) -> &[UniqueModel] {
        &self.uniques
    }

    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    #[must_use]
    pub fn tail(&self) -> Option<&str> {
        self.tail.as_deref()
    }

    /// Finds a column by name, ignoring ASCII case.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnModel> {
        self.columns
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Handle to a column together with its owning table.
    #[must_use]
    pub fn column_ref(&self, name: &str) -> Option<ColumnRef<'_>> {
        self.columns
            .iter()
            .position(|c| c.name().eq_ignore_ascii_case(name))
            .map(|index| ColumnRef { table: self, index })
    }

    /// Primary-key columns in declaration order.
    #[must_use]
    pub fn pkey_columns(&self) -> Vec<&ColumnModel> {
        self.columns.iter().filter(|c| c.is_pkey()).collect()
    }

    fn check_constraint_name(&self, kind: &str, name: &str) -> Result<()> {
        validate_identifier(kind, name)?;
        let taken = name.eq_ignore_ascii_case(&self.name)
            || self.fkeys.iter().any(|f| f.name().eq_ignore_ascii_case(name))
            || self.indexes.iter().any(|i| i.name().eq_ignore_ascii_case(name))
            || self.uniques.iter().any(|u| u.name().eq_ignore_ascii_case(name));
        if taken {
            return Err(DdlError::invalid_model(format!(
                "{kind} name '{name}' is already used in table '{}'",
                self.name
            )));
        }
        Ok(())
    }

    fn check_column_list(&self, kind: &str, name: &str, columns: &[String]) -> Result<()> {
        if columns.is_empty() {
            return Err(DdlError::invalid_model(format!(
                "{kind} '{name}' on table '{}' has no columns",
                self.name
            )));
        }
        for column in columns {
            validate_identifier("column", column)?;
        }
        Ok(())
    }
}

/// A column together with the table that owns it.
///
/// Holds a borrow of the table and the column's position, so it can never
/// outlive or dangle from its table.
#[derive(Debug, Clone, Copy)]
pub struct ColumnRef<'a> {
    table: &'a TableModel,
    index: usize,
}

impl<'a> ColumnRef<'a> {
    /// Owning table.
    #[must_use]
    pub const fn table(&self) -> &'a TableModel {
        self.table
    }

    /// The referenced column.
    #[must_use]
    pub fn column(&self) -> &'a ColumnModel {
        &self.table.columns[self.index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{integer, varchar};

    fn user_t() -> TableModel {
        let mut t = TableModel::new("user_t").unwrap();
        t.add_column(varchar("first_name", 20).pkey())
            .unwrap()
            .add_column(varchar("last_name", 20).pkey())
            .unwrap()
            .add_column(integer("age"))
            .unwrap();
        t
    }

    #[test]
    fn test_columns_keep_insertion_order() {
        let t = user_t();
        let names: Vec<&str> = t.columns().iter().map(ColumnModel::name).collect();
        assert_eq!(names, ["first_name", "last_name", "age"]);
        assert_eq!(t.pkey_columns().len(), 2);
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let mut t = user_t();
        let err = t.add_column(integer("AGE")).unwrap_err();
        assert!(matches!(err, DdlError::InvalidModelDefinition(_)));
        assert_eq!(t.columns().len(), 3);
    }

    #[test]
    fn test_constraint_namespace_shared() {
        let mut t = user_t();
        t.add_index(IndexModel::new("ix_age").columns(["age"])).unwrap();
        assert!(t
            .add_unique(UniqueModel::new("IX_AGE").columns(["age"]))
            .is_err());
        assert!(t
            .add_unique(UniqueModel::new("user_t").columns(["age"]))
            .is_err());
        assert!(t.add_index(IndexModel::new("ix_empty")).is_err());
    }

    #[test]
    fn test_fkey_cardinality_checked() {
        let mut t = user_t();
        let fk = FKeyModel::new("fk_x")
            .columns(["first_name", "last_name"])
            .refs("other", ["id"]);
        assert!(t.add_fkey(fk).is_err());
        let fk = FKeyModel::new("fk_x").columns(["age"]);
        assert!(t.add_fkey(fk).is_err());
    }

    #[test]
    fn test_column_ref() {
        let t = user_t();
        let col = t.column_ref("Age").unwrap();
        assert_eq!(col.column().name(), "age");
        assert_eq!(col.table().name(), "user_t");
        assert!(t.column_ref("missing").is_none());
    }

    #[test]
    fn test_invalid_table_name() {
        assert!(TableModel::new("").is_err());
    }
}
