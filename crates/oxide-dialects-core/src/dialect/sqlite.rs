//! SQLite.

use super::{
    reserved, ColumnAlterTemplates, CommentStyle, ConstraintRules, DialectDescriptor,
    DropTemplates, IdentifierCase, IdentityStrategy, PagingStrategy, Placement, QuoteStyle,
    ReferentialActions, TypeRule, UniquePlacement,
};
use crate::types::TypeToken as T;

// SQLite keeps declared type names verbatim, so spellings stay close to
// the token names and survive a catalog round trip.
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
    TypeRule::new(T::LongVarchar, "TEXT"),
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

/// SQLite 3. Constraints cannot be added after CREATE TABLE, so foreign
/// keys are declared inline and uniques become unique indexes.
pub static SQLITE: DialectDescriptor = DialectDescriptor {
    id: "sqlite",
    name: "SQLite",
    aliases: &["sqlite3"],
    types: TYPES,
    type_overrides: &[],
    quote: QuoteStyle::Double,
    identifier_case: IdentifierCase::AsDeclared,
    reserved: &reserved::SQLITE,
    identity: IdentityStrategy::RowidAlias,
    constraints: ConstraintRules {
        primary_key: Placement::Inline,
        foreign_key: Placement::Inline,
        unique: UniquePlacement::UniqueIndex,
        actions: ReferentialActions {
            on_delete: true,
            on_update: true,
        },
    },
    column_alter: ColumnAlterTemplates::STANDARD,
    comments: CommentStyle::Unsupported,
    drops: DropTemplates {
        table: "DROP TABLE IF EXISTS $t",
        index: "DROP INDEX IF EXISTS $n",
        if_exists: true,
    },
    paging: PagingStrategy::LimitOffset,
    table_tail: None,
    boolean_literals: ("1", "0"),
    max_identifier_length: None,
};
