//! Apache Derby.

use super::{
    reserved, ColumnAlterTemplates, CommentStyle, ConstraintRules, DialectDescriptor,
    DropTemplates, IdentifierCase, IdentityStrategy, PagingStrategy, QuoteStyle,
    ReferentialActions, SplitAlter, TypeRule,
};
use crate::types::TypeToken as T;

static TYPES: &[TypeRule] = &[
    TypeRule::new(T::Bigint, "BIGINT"),
    TypeRule::new(T::Binary, "CHAR($l) FOR BIT DATA"),
    TypeRule::new(T::Bit, "SMALLINT"),
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
    TypeRule::new(T::LongVarbinary, "LONG VARCHAR FOR BIT DATA"),
    TypeRule::new(T::LongVarchar, "LONG VARCHAR"),
    TypeRule::new(T::NChar, "CHAR($l)"),
    TypeRule::new(T::NClob, "CLOB"),
    TypeRule::new(T::Numeric, "NUMERIC($p[,$s])"),
    TypeRule::new(T::NVarchar, "VARCHAR($l)"),
    TypeRule::new(T::Real, "REAL"),
    TypeRule::new(T::Smallint, "SMALLINT"),
    TypeRule::new(T::Time, "TIME"),
    TypeRule::new(T::Timestamp, "TIMESTAMP"),
    TypeRule::new(T::Tinyint, "SMALLINT"),
    TypeRule::new(T::Varbinary, "VARCHAR($l) FOR BIT DATA"),
    TypeRule::new(T::Varchar, "VARCHAR($l)"),
];

/// Apache Derby 10.x. Adding a NOT NULL column with a default takes
/// follow-up ALTER COLUMN statements.
pub static DERBY: DialectDescriptor = DialectDescriptor {
    id: "derby",
    name: "Derby",
    aliases: &["derby10", "javadb"],
    types: TYPES,
    type_overrides: &[],
    quote: QuoteStyle::Double,
    identifier_case: IdentifierCase::Upper,
    reserved: &reserved::DERBY,
    identity: IdentityStrategy::Keyword("GENERATED BY DEFAULT AS IDENTITY"),
    constraints: ConstraintRules {
        actions: ReferentialActions {
            on_delete: true,
            on_update: false,
        },
        ..ConstraintRules::STANDARD
    },
    column_alter: ColumnAlterTemplates {
        split: Some(SplitAlter {
            set_default: "ALTER TABLE $t ALTER COLUMN $c SET DEFAULT $v",
            set_not_null: "ALTER TABLE $t ALTER COLUMN $c NOT NULL",
        }),
        ..ColumnAlterTemplates::STANDARD
    },
    comments: CommentStyle::Unsupported,
    drops: DropTemplates {
        table: "DROP TABLE $t",
        index: "DROP INDEX $n",
        if_exists: false,
    },
    paging: PagingStrategy::OffsetFetch {
        requires_order_by: false,
    },
    table_tail: None,
    boolean_literals: ("TRUE", "FALSE"),
    max_identifier_length: Some(128),
};
