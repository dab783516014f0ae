//! H2 database.

use super::{
    reserved, ColumnAlterTemplates, CommentStyle, ConstraintRules, DialectDescriptor,
    DropTemplates, IdentifierCase, IdentityStrategy, PagingStrategy, QuoteStyle, TypeRule,
};
use crate::types::TypeToken as T;

static TYPES: &[TypeRule] = &[
    TypeRule::new(T::Bigint, "BIGINT"),
    TypeRule::new(T::Binary, "BINARY($l)"),
    TypeRule::new(T::Bit, "BIT"),
    TypeRule::new(T::Blob, "BLOB"),
    TypeRule::new(T::Boolean, "BOOLEAN"),
    TypeRule::new(T::Char, "CHAR($l)"),
    TypeRule::new(T::Clob, "CLOB"),
    TypeRule::new(T::Date, "DATE"),
    TypeRule::new(T::Decimal, "DECIMAL($p[,$s])"),
    TypeRule::new(T::Double, "DOUBLE"),
    TypeRule::new(T::Float, "FLOAT[($p)]"),
    TypeRule::new(T::Integer, "INTEGER"),
    TypeRule::new(T::Long, "BIGINT"),
    TypeRule::new(T::LongVarbinary, "LONGVARBINARY"),
    TypeRule::new(T::LongVarchar, "LONGVARCHAR"),
    TypeRule::new(T::NChar, "NCHAR($l)"),
    TypeRule::new(T::NClob, "NCLOB"),
    TypeRule::new(T::Numeric, "NUMERIC($p[,$s])"),
    TypeRule::new(T::NVarchar, "NVARCHAR($l)"),
    TypeRule::new(T::Real, "REAL"),
    TypeRule::new(T::Smallint, "SMALLINT"),
    TypeRule::new(T::Time, "TIME"),
    TypeRule::new(T::Timestamp, "TIMESTAMP"),
    TypeRule::new(T::Tinyint, "TINYINT"),
    TypeRule::new(T::Varbinary, "VARBINARY($l)"),
    TypeRule::new(T::Varchar, "VARCHAR($l)"),
];

/// H2 2.x.
pub static H2: DialectDescriptor = DialectDescriptor {
    id: "h2",
    name: "H2",
    aliases: &["h2database"],
    types: TYPES,
    type_overrides: &[],
    quote: QuoteStyle::Double,
    identifier_case: IdentifierCase::Upper,
    reserved: &reserved::H2,
    identity: IdentityStrategy::Keyword("AUTO_INCREMENT"),
    constraints: ConstraintRules::STANDARD,
    column_alter: ColumnAlterTemplates::STANDARD,
    comments: CommentStyle::CommentOn,
    drops: DropTemplates {
        table: "DROP TABLE IF EXISTS $t CASCADE",
        index: "DROP INDEX IF EXISTS $n",
        if_exists: true,
    },
    paging: PagingStrategy::LimitOffset,
    table_tail: None,
    boolean_literals: ("TRUE", "FALSE"),
    max_identifier_length: Some(256),
};
