//! Oracle Database.

use super::{
    reserved, ColumnAlterTemplates, CommentStyle, ConstraintRules, DialectDescriptor,
    DropTemplates, IdentifierCase, IdentityStrategy, PagingStrategy, QuoteStyle,
    ReferentialActions, TypeRule,
};
use crate::types::TypeToken as T;

static TYPES: &[TypeRule] = &[
    TypeRule::new(T::Bigint, "NUMBER(19)"),
    TypeRule::new(T::Binary, "RAW($l)").overflow(2000, "BLOB"),
    TypeRule::new(T::Bit, "NUMBER(1)"),
    TypeRule::new(T::Blob, "BLOB"),
    TypeRule::new(T::Boolean, "NUMBER(1)"),
    TypeRule::new(T::Char, "CHAR($l)"),
    TypeRule::new(T::Clob, "CLOB"),
    TypeRule::new(T::Date, "DATE"),
    TypeRule::new(T::Decimal, "NUMBER($p[,$s])"),
    TypeRule::new(T::Double, "BINARY_DOUBLE"),
    TypeRule::new(T::Float, "FLOAT[($p)]"),
    TypeRule::new(T::Integer, "NUMBER(10)"),
    TypeRule::new(T::Long, "NUMBER(19)"),
    TypeRule::new(T::LongVarbinary, "BLOB"),
    TypeRule::new(T::LongVarchar, "CLOB"),
    TypeRule::new(T::NChar, "NCHAR($l)"),
    TypeRule::new(T::NClob, "NCLOB"),
    TypeRule::new(T::Numeric, "NUMBER($p[,$s])"),
    TypeRule::new(T::NVarchar, "NVARCHAR2($l)").overflow(2000, "NCLOB"),
    TypeRule::new(T::Real, "BINARY_FLOAT"),
    TypeRule::new(T::Smallint, "NUMBER(5)"),
    TypeRule::new(T::Time, "DATE"),
    TypeRule::new(T::Timestamp, "TIMESTAMP"),
    TypeRule::new(T::Tinyint, "NUMBER(3)"),
    TypeRule::new(T::Varbinary, "RAW($l)").overflow(2000, "BLOB"),
    TypeRule::new(T::Varchar, "VARCHAR2($l)").overflow(4000, "CLOB"),
];

const CONSTRAINTS: ConstraintRules = ConstraintRules {
    actions: ReferentialActions {
        on_delete: true,
        on_update: false,
    },
    ..ConstraintRules::STANDARD
};

const COLUMN_ALTER: ColumnAlterTemplates = ColumnAlterTemplates {
    add: "ALTER TABLE $t ADD $d",
    drop: "ALTER TABLE $t DROP COLUMN $c",
    split: None,
};

const DROPS: DropTemplates = DropTemplates {
    table: "DROP TABLE $t CASCADE CONSTRAINTS",
    index: "DROP INDEX $n",
    if_exists: false,
};

/// Oracle 10g/11g: identity through sequences, ROWNUM paging.
pub static ORACLE10G: DialectDescriptor = DialectDescriptor {
    id: "oracle10g",
    name: "Oracle 10g",
    aliases: &["oracle", "oracle11g"],
    types: TYPES,
    type_overrides: &[],
    quote: QuoteStyle::Double,
    identifier_case: IdentifierCase::Upper,
    reserved: &reserved::ORACLE,
    identity: IdentityStrategy::Sequence {
        create: "CREATE SEQUENCE $n START WITH 1 INCREMENT BY 1",
        drop: "DROP SEQUENCE $n",
        default: None,
    },
    constraints: CONSTRAINTS,
    column_alter: COLUMN_ALTER,
    comments: CommentStyle::CommentOn,
    drops: DROPS,
    paging: PagingStrategy::RownumWrap,
    table_tail: None,
    boolean_literals: ("1", "0"),
    max_identifier_length: Some(30),
};

/// Oracle 12c and later: identity columns, OFFSET/FETCH paging.
pub static ORACLE12C: DialectDescriptor = DialectDescriptor {
    id: "oracle12c",
    name: "Oracle 12c",
    aliases: &["oracle18c", "oracle19c"],
    types: TYPES,
    type_overrides: &[],
    quote: QuoteStyle::Double,
    identifier_case: IdentifierCase::Upper,
    reserved: &reserved::ORACLE,
    identity: IdentityStrategy::Keyword("GENERATED BY DEFAULT AS IDENTITY"),
    constraints: CONSTRAINTS,
    column_alter: COLUMN_ALTER,
    comments: CommentStyle::CommentOn,
    drops: DROPS,
    paging: PagingStrategy::OffsetFetch {
        requires_order_by: false,
    },
    table_tail: None,
    boolean_literals: ("1", "0"),
    max_identifier_length: Some(128),
};
