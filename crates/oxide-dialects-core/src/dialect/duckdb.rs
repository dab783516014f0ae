//! DuckDB.

use super::{
    reserved, ColumnAlterTemplates, CommentStyle, ConstraintRules, DialectDescriptor,
    DropTemplates, IdentifierCase, IdentityStrategy, PagingStrategy, Placement, QuoteStyle,
    ReferentialActions, TypeRule, UniquePlacement,
};
use crate::types::TypeToken as T;

static TYPES: &[TypeRule] = &[
    TypeRule::new(T::Bigint, "BIGINT"),
    TypeRule::new(T::Binary, "BLOB"),
    TypeRule::new(T::Bit, "BIT"),
    TypeRule::new(T::Blob, "BLOB"),
    TypeRule::new(T::Boolean, "BOOLEAN"),
    TypeRule::new(T::Char, "CHAR($l)"),
    TypeRule::new(T::Clob, "VARCHAR"),
    TypeRule::new(T::Date, "DATE"),
    TypeRule::new(T::Decimal, "DECIMAL($p[,$s])"),
    TypeRule::new(T::Double, "DOUBLE"),
    TypeRule::new(T::Float, "FLOAT"),
    TypeRule::new(T::Integer, "INTEGER"),
    TypeRule::new(T::Long, "BIGINT"),
    TypeRule::new(T::LongVarbinary, "BLOB"),
    TypeRule::new(T::LongVarchar, "VARCHAR"),
    TypeRule::new(T::NChar, "CHAR($l)"),
    TypeRule::new(T::NClob, "VARCHAR"),
    TypeRule::new(T::Numeric, "NUMERIC($p[,$s])"),
    TypeRule::new(T::NVarchar, "VARCHAR($l)"),
    TypeRule::new(T::Real, "REAL"),
    TypeRule::new(T::Smallint, "SMALLINT"),
    TypeRule::new(T::Time, "TIME"),
    TypeRule::new(T::Timestamp, "TIMESTAMP"),
    TypeRule::new(T::Tinyint, "TINYINT"),
    TypeRule::new(T::Varbinary, "BLOB"),
    TypeRule::new(T::Varchar, "VARCHAR($l)"),
];

/// DuckDB 1.x. Identity columns are backed by a sequence; constraints
/// must be declared in CREATE TABLE.
pub static DUCKDB: DialectDescriptor = DialectDescriptor {
    id: "duckdb",
    name: "DuckDB",
    aliases: &[],
    types: TYPES,
    type_overrides: &[],
    quote: QuoteStyle::Double,
    identifier_case: IdentifierCase::AsDeclared,
    reserved: &reserved::DUCKDB,
    identity: IdentityStrategy::Sequence {
        create: "CREATE SEQUENCE $n START 1",
        drop: "DROP SEQUENCE IF EXISTS $n",
        default: Some("nextval('$n')"),
    },
    constraints: ConstraintRules {
        primary_key: Placement::Inline,
        foreign_key: Placement::Inline,
        unique: UniquePlacement::UniqueIndex,
        actions: ReferentialActions {
            on_delete: false,
            on_update: false,
        },
    },
    column_alter: ColumnAlterTemplates::STANDARD,
    comments: CommentStyle::CommentOn,
    drops: DropTemplates {
        table: "DROP TABLE IF EXISTS $t",
        index: "DROP INDEX IF EXISTS $n",
        if_exists: true,
    },
    paging: PagingStrategy::LimitOffset,
    table_tail: None,
    boolean_literals: ("TRUE", "FALSE"),
    max_identifier_length: None,
};
