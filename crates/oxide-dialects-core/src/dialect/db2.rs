//! IBM Db2.

use super::{
    reserved, ColumnAlterTemplates, CommentStyle, ConstraintRules, DialectDescriptor,
    DropTemplates, IdentifierCase, IdentityStrategy, PagingStrategy, Placement, QuoteStyle,
    ReferentialActions, SplitAlter, TypeRule, UniquePlacement, FK_ADD, UNIQUE_ADD,
};
use crate::types::TypeToken as T;

static TYPES: &[TypeRule] = &[
    TypeRule::new(T::Bigint, "BIGINT"),
    TypeRule::new(T::Binary, "CHAR($l) FOR BIT DATA"),
    TypeRule::new(T::Bit, "SMALLINT"),
    TypeRule::new(T::Blob, "BLOB"),
    TypeRule::new(T::Boolean, "SMALLINT"),
    TypeRule::new(T::Char, "CHAR($l)"),
    TypeRule::new(T::Clob, "CLOB"),
    TypeRule::new(T::Date, "DATE"),
    TypeRule::new(T::Decimal, "DECIMAL($p[,$s])"),
    TypeRule::new(T::Double, "DOUBLE"),
    TypeRule::new(T::Float, "FLOAT[($p)]"),
    TypeRule::new(T::Integer, "INTEGER"),
    TypeRule::new(T::Long, "BIGINT"),
    TypeRule::new(T::LongVarbinary, "BLOB"),
    TypeRule::new(T::LongVarchar, "CLOB"),
    TypeRule::new(T::NChar, "GRAPHIC($l)"),
    TypeRule::new(T::NClob, "DBCLOB"),
    TypeRule::new(T::Numeric, "NUMERIC($p[,$s])"),
    TypeRule::new(T::NVarchar, "VARGRAPHIC($l)"),
    TypeRule::new(T::Real, "REAL"),
    TypeRule::new(T::Smallint, "SMALLINT"),
    TypeRule::new(T::Time, "TIME"),
    TypeRule::new(T::Timestamp, "TIMESTAMP"),
    TypeRule::new(T::Tinyint, "SMALLINT"),
    TypeRule::new(T::Varbinary, "VARCHAR($l) FOR BIT DATA"),
    TypeRule::new(T::Varchar, "VARCHAR($l)"),
];

/// Db2 for Linux, Unix and Windows.
pub static DB2: DialectDescriptor = DialectDescriptor {
    id: "db2",
    name: "DB2",
    aliases: &["db2luw"],
    types: TYPES,
    type_overrides: &[],
    quote: QuoteStyle::Double,
    identifier_case: IdentifierCase::Upper,
    reserved: &reserved::DB2,
    identity: IdentityStrategy::Keyword("GENERATED BY DEFAULT AS IDENTITY"),
    constraints: ConstraintRules {
        primary_key: Placement::Inline,
        foreign_key: Placement::AlterTable {
            add: FK_ADD,
            drop: "ALTER TABLE $t DROP FOREIGN KEY $n",
        },
        unique: UniquePlacement::AlterTable {
            add: UNIQUE_ADD,
            drop: "ALTER TABLE $t DROP UNIQUE $n",
        },
        actions: ReferentialActions {
            on_delete: true,
            on_update: false,
        },
    },
    column_alter: ColumnAlterTemplates {
        split: Some(SplitAlter {
            set_default: "ALTER TABLE $t ALTER COLUMN $c SET DEFAULT $v",
            set_not_null: "ALTER TABLE $t ALTER COLUMN $c SET NOT NULL",
        }),
        ..ColumnAlterTemplates::STANDARD
    },
    comments: CommentStyle::CommentOn,
    drops: DropTemplates {
        table: "DROP TABLE $t",
        index: "DROP INDEX $n",
        if_exists: false,
    },
    paging: PagingStrategy::RowNumberWrap { empty_order: "" },
    table_tail: None,
    boolean_literals: ("1", "0"),
    max_identifier_length: Some(128),
};
