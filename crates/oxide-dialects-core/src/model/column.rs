//! Column models and the fluent column builder.

use serde::Serialize;

use crate::dialect::DialectDescriptor;
use crate::error::{DdlError, Result};
use crate::identifier::validate_identifier;
use crate::types::{TypeParams, TypeToken};

/// Default value for a column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DefaultValue {
    /// NULL default.
    Null,
    /// Boolean default, rendered with the dialect's boolean literals.
    Boolean(bool),
    /// Integer default.
    Integer(i64),
    /// Float default.
    Float(f64),
    /// String default.
    String(String),
    /// Raw SQL expression (e.g., CURRENT_TIMESTAMP).
    Expression(String),
}

impl DefaultValue {
    /// Returns the SQL representation of the default value in `dialect`.
    #[must_use]
    pub fn to_sql(&self, dialect: &DialectDescriptor) -> String {
        match self {
            Self::Null => String::from("NULL"),
            Self::Boolean(b) => dialect.boolean_literal(*b).to_string(),
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::String(s) => format!("'{}'", s.replace('\'', "''")),
            Self::Expression(expr) => expr.clone(),
        }
    }
}

/// A validated column of a [`TableModel`](super::TableModel).
///
/// Only [`ColumnBuilder::build`] creates columns, so every instance
/// carries the parameters its type token requires.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnModel {
    name: String,
    #[serde(rename = "type")]
    token: TypeToken,
    #[serde(flatten)]
    params: TypeParams,
    nullable: bool,
    pkey: bool,
    auto_id: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<DefaultValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    check: Option<String>,
}

impl ColumnModel {
    /// Column name as declared.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Abstract type.
    #[must_use]
    pub const fn token(&self) -> TypeToken {
        self.token
    }

    /// Type parameters.
    #[must_use]
    pub const fn params(&self) -> &TypeParams {
        &self.params
    }

    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Whether the column belongs to the primary key.
    #[must_use]
    pub const fn is_pkey(&self) -> bool {
        self.pkey
    }

    /// Whether the column is auto-increment / identity.
    #[must_use]
    pub const fn is_auto_id(&self) -> bool {
        self.auto_id
    }

    #[must_use]
    pub const fn default_value(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }

    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// CHECK expression, without the `CHECK (...)` wrapper.
    #[must_use]
    pub fn check(&self) -> Option<&str> {
        self.check.as_deref()
    }
}

/// Fluent builder for [`ColumnModel`].
///
/// Type parameters are checked when the column is built, so a builder can
/// be assembled in any order.
#[derive(Debug, Clone)]
pub struct ColumnBuilder {
    name: String,
    token: TypeToken,
    params: TypeParams,
    nullable: bool,
    pkey: bool,
    auto_id: bool,
    default: Option<DefaultValue>,
    comment: Option<String>,
    check: Option<String>,
}

impl ColumnBuilder {
    /// Creates a new column builder with name and type.
    #[must_use]
    pub fn new(name: impl Into<String>, token: TypeToken) -> Self {
        Self {
            name: name.into(),
            token,
            params: TypeParams::default(),
            nullable: true,
            pkey: false,
            auto_id: false,
            default: None,
            comment: None,
            check: None,
        }
    }

    /// Sets the length parameter.
    #[must_use]
    pub const fn length(mut self, length: u32) -> Self {
        self.params.length = Some(length);
        self
    }

    /// Sets the precision parameter.
    #[must_use]
    pub const fn precision(mut self, precision: u32) -> Self {
        self.params.precision = Some(precision);
        self
    }

    /// Sets the scale parameter.
    #[must_use]
    pub const fn scale(mut self, scale: u32) -> Self {
        self.params.scale = Some(scale);
        self
    }

    /// Replaces all type parameters at once.
    #[must_use]
    pub const fn params(mut self, params: TypeParams) -> Self {
        self.params = params;
        self
    }

    /// Marks the column as NOT NULL.
    #[must_use]
    pub const fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Marks the column as nullable (default).
    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Adds the column to the table's primary key.
    #[must_use]
    pub const fn pkey(mut self) -> Self {
        self.pkey = true;
        self.nullable = false;
        self
    }

    /// Marks the column as auto-increment / identity.
    #[must_use]
    pub const fn auto_id(mut self) -> Self {
        self.auto_id = true;
        self
    }

    /// Sets a default value.
    #[must_use]
    pub fn default(mut self, value: DefaultValue) -> Self {
        self.default = Some(value);
        self
    }

    /// Sets a boolean default.
    #[must_use]
    pub fn default_bool(self, value: bool) -> Self {
        self.default(DefaultValue::Boolean(value))
    }

    /// Sets an integer default.
    #[must_use]
    pub fn default_int(self, value: i64) -> Self {
        self.default(DefaultValue::Integer(value))
    }

    /// Sets a float default.
    #[must_use]
    pub fn default_float(self, value: f64) -> Self {
        self.default(DefaultValue::Float(value))
    }

    /// Sets a string default.
    #[must_use]
    pub fn default_str(self, value: impl Into<String>) -> Self {
        self.default(DefaultValue::String(value.into()))
    }

    /// Sets a NULL default.
    #[must_use]
    pub fn default_null(self) -> Self {
        self.default(DefaultValue::Null)
    }

    /// Sets a raw SQL expression as default.
    #[must_use]
    pub fn default_expr(self, expr: impl Into<String>) -> Self {
        self.default(DefaultValue::Expression(expr.into()))
    }

    /// Attaches a free-text comment.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Adds a CHECK constraint expression.
    ///
    /// The expression is rendered verbatim. Column names inside it are not
    /// suffixed or quoted, so a column whose name is a reserved word in
    /// the target dialect must be written by its rendered name
    /// (`order_attribute > 0` for a column `order`).
    #[must_use]
    pub fn check(mut self, expr: impl Into<String>) -> Self {
        self.check = Some(expr.into());
        self
    }

    /// Name the column will carry.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validates and builds the column.
    ///
    /// # Errors
    ///
    /// [`DdlError::InvalidModelDefinition`] when the name is not a valid
    /// identifier, the type parameters do not match the token, or the
    /// identity flag is set on a non-integral type or together with a
    /// default.
    pub fn build(self) -> Result<ColumnModel> {
        validate_identifier("column", &self.name)?;
        self.params
            .validate(self.token)
            .map_err(|e| DdlError::invalid_model(format!("column '{}': {e}", self.name)))?;
        if self.auto_id && !self.token.is_integral() {
            return Err(DdlError::invalid_model(format!(
                "column '{}': auto-increment requires an integral type, got {}",
                self.name, self.token
            )));
        }
        if self.auto_id && self.default.is_some() {
            return Err(DdlError::invalid_model(format!(
                "column '{}': auto-increment columns cannot declare a default",
                self.name
            )));
        }
        Ok(ColumnModel {
            name: self.name,
            token: self.token,
            params: self.params,
            nullable: self.nullable,
            pkey: self.pkey,
            auto_id: self.auto_id,
            default: self.default,
            comment: self.comment,
            check: self.check,
        })
    }
}

// ================================================================
// Shorthand constructors
// ================================================================

/// Creates a BIGINT column builder.
pub fn bigint(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::Bigint)
}

/// Creates a LONG column builder (64-bit integer).
pub fn long(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::Long)
}

/// Creates an INTEGER column builder.
pub fn integer(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::Integer)
}

/// Creates a SMALLINT column builder.
pub fn smallint(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::Smallint)
}

/// Creates a TINYINT column builder.
pub fn tinyint(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::Tinyint)
}

/// Creates a BIT column builder.
pub fn bit(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::Bit)
}

/// Creates a BOOLEAN column builder.
pub fn boolean(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::Boolean)
}

/// Creates a DECIMAL column builder.
pub fn decimal(name: impl Into<String>, precision: u32, scale: u32) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::Decimal)
        .precision(precision)
        .scale(scale)
}

/// Creates a NUMERIC column builder.
pub fn numeric(name: impl Into<String>, precision: u32, scale: u32) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::Numeric)
        .precision(precision)
        .scale(scale)
}

/// Creates a DOUBLE column builder.
pub fn double(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::Double)
}

/// Creates a FLOAT column builder.
pub fn float(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::Float)
}

/// Creates a REAL column builder.
pub fn real(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::Real)
}

/// Creates a CHAR column builder.
pub fn char(name: impl Into<String>, len: u32) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::Char).length(len)
}

/// Creates a VARCHAR column builder.
pub fn varchar(name: impl Into<String>, len: u32) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::Varchar).length(len)
}

/// Creates an NCHAR column builder.
pub fn nchar(name: impl Into<String>, len: u32) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::NChar).length(len)
}

/// Creates an NVARCHAR column builder.
pub fn nvarchar(name: impl Into<String>, len: u32) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::NVarchar).length(len)
}

/// Creates a LONGVARCHAR column builder.
pub fn long_varchar(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::LongVarchar)
}

/// Creates a CLOB column builder.
pub fn clob(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::Clob)
}

/// Creates an NCLOB column builder.
pub fn nclob(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::NClob)
}

/// Creates a BINARY column builder.
pub fn binary(name: impl Into<String>, len: u32) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::Binary).length(len)
}

/// Creates a VARBINARY column builder.
pub fn varbinary(name: impl Into<String>, len: u32) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::Varbinary).length(len)
}

/// Creates a LONGVARBINARY column builder.
pub fn long_varbinary(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::LongVarbinary)
}

/// Creates a BLOB column builder.
pub fn blob(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::Blob)
}

/// Creates a DATE column builder.
pub fn date(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::Date)
}

/// Creates a TIME column builder.
pub fn time(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::Time)
}

/// Creates a TIMESTAMP column builder.
pub fn timestamp(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, TypeToken::Timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{H2, SQLITE};

    #[test]
    fn test_basic_column() {
        let col = integer("age").build().unwrap();
        assert_eq!(col.name(), "age");
        assert_eq!(col.token(), TypeToken::Integer);
        assert!(col.is_nullable());
        assert!(!col.is_pkey());
    }

    #[test]
    fn test_pkey_implies_not_null() {
        let col = long("id").pkey().auto_id().build().unwrap();
        assert!(col.is_pkey());
        assert!(col.is_auto_id());
        assert!(!col.is_nullable());
    }

    #[test]
    fn test_varchar_without_length_fails() {
        let err = ColumnBuilder::new("first_name", TypeToken::Varchar)
            .build()
            .unwrap_err();
        assert!(matches!(err, DdlError::InvalidModelDefinition(_)));
        assert!(err.to_string().contains("first_name"));
    }

    #[test]
    fn test_varchar_with_length_succeeds() {
        let col = ColumnBuilder::new("first_name", TypeToken::Varchar)
            .length(20)
            .build()
            .unwrap();
        assert_eq!(col.params().length, Some(20));
    }

    #[test]
    fn test_decimal_scale_above_precision_fails() {
        assert!(decimal("amount", 4, 6).build().is_err());
        assert!(decimal("amount", 10, 2).build().is_ok());
    }

    #[test]
    fn test_auto_id_rules() {
        assert!(varchar("code", 10).auto_id().build().is_err());
        assert!(integer("id").auto_id().default_int(1).build().is_err());
        assert!(integer("id").auto_id().build().is_ok());
    }

    #[test]
    fn test_invalid_name() {
        assert!(integer("").build().is_err());
        assert!(integer("a\0b").build().is_err());
    }

    #[test]
    fn test_default_to_sql() {
        assert_eq!(DefaultValue::Boolean(true).to_sql(&H2), "TRUE");
        assert_eq!(DefaultValue::Boolean(true).to_sql(&SQLITE), "1");
        assert_eq!(
            DefaultValue::String("it's".into()).to_sql(&H2),
            "'it''s'"
        );
        assert_eq!(DefaultValue::Integer(-3).to_sql(&H2), "-3");
        assert_eq!(
            DefaultValue::Expression("CURRENT_TIMESTAMP".into()).to_sql(&H2),
            "CURRENT_TIMESTAMP"
        );
    }

    #[test]
    fn test_column_serializes() {
        let col = varchar("email", 120).not_null().comment("login").build().unwrap();
        let json = serde_json::to_value(&col).unwrap();
        assert_eq!(json["name"], "email");
        assert_eq!(json["type"], "VARCHAR");
        assert_eq!(json["length"], 120);
        assert_eq!(json["nullable"], false);
        assert_eq!(json["comment"], "login");
        assert!(json.get("default").is_none());
    }
}
