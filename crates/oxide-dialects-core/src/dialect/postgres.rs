//! PostgreSQL.

use super::{
    reserved, ColumnAlterTemplates, CommentStyle, ConstraintRules, DialectDescriptor,
    DropTemplates, IdentifierCase, IdentityStrategy, PagingStrategy, Placement, QuoteStyle,
    TypeRule, UniquePlacement, FK_ADD, UNIQUE_ADD,
};
use crate::types::TypeToken as T;

static TYPES: &[TypeRule] = &[
    TypeRule::new(T::Bigint, "BIGINT"),
    TypeRule::new(T::Binary, "BYTEA"),
    TypeRule::new(T::Bit, "BIT"),
    TypeRule::new(T::Blob, "BYTEA"),
    TypeRule::new(T::Boolean, "BOOLEAN"),
    TypeRule::new(T::Char, "CHAR($l)"),
    TypeRule::new(T::Clob, "TEXT"),
    TypeRule::new(T::Date, "DATE"),
    TypeRule::new(T::Decimal, "NUMERIC($p[,$s])"),
    TypeRule::new(T::Double, "DOUBLE PRECISION"),
    TypeRule::new(T::Float, "FLOAT[($p)]"),
    TypeRule::new(T::Integer, "INTEGER"),
    TypeRule::new(T::Long, "BIGINT"),
    TypeRule::new(T::LongVarbinary, "BYTEA"),
    TypeRule::new(T::LongVarchar, "TEXT"),
    TypeRule::new(T::NChar, "CHAR($l)"),
    TypeRule::new(T::NClob, "TEXT"),
    TypeRule::new(T::Numeric, "NUMERIC($p[,$s])"),
    TypeRule::new(T::NVarchar, "VARCHAR($l)"),
    TypeRule::new(T::Real, "REAL"),
    TypeRule::new(T::Smallint, "SMALLINT"),
    TypeRule::new(T::Time, "TIME"),
    TypeRule::new(T::Timestamp, "TIMESTAMP"),
    TypeRule::new(T::Tinyint, "SMALLINT"),
    TypeRule::new(T::Varbinary, "BYTEA"),
    TypeRule::new(T::Varchar, "VARCHAR($l)"),
];

const DROP_CONSTRAINT: &str = "ALTER TABLE $t DROP CONSTRAINT IF EXISTS $n";

/// PostgreSQL 10 and later.
pub static POSTGRESQL: DialectDescriptor = DialectDescriptor {
    id: "postgresql",
    name: "PostgreSQL",
    aliases: &["postgres", "pg", "pgsql"],
    types: TYPES,
    type_overrides: &[],
    quote: QuoteStyle::Double,
    identifier_case: IdentifierCase::Lower,
    reserved: &reserved::POSTGRESQL,
    identity: IdentityStrategy::Keyword("GENERATED BY DEFAULT AS IDENTITY"),
    constraints: ConstraintRules {
        foreign_key: Placement::AlterTable {
            add: FK_ADD,
            drop: DROP_CONSTRAINT,
        },
        unique: UniquePlacement::AlterTable {
            add: UNIQUE_ADD,
            drop: DROP_CONSTRAINT,
        },
        ..ConstraintRules::STANDARD
    },
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
    max_identifier_length: Some(63),
};
