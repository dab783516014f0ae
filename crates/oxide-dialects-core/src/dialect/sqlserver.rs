//! Microsoft SQL Server.

use super::{
    reserved, ColumnAlterTemplates, CommentStyle, ConstraintRules, DialectDescriptor,
    DropTemplates, IdentifierCase, IdentityStrategy, PagingStrategy, QuoteStyle, TypeRule,
};
use crate::types::TypeToken as T;

static TYPES: &[TypeRule] = &[
    TypeRule::new(T::Bigint, "BIGINT"),
    TypeRule::new(T::Binary, "BINARY($l)").overflow(8000, "VARBINARY(MAX)"),
    TypeRule::new(T::Bit, "BIT"),
    TypeRule::new(T::Blob, "VARBINARY(MAX)"),
    TypeRule::new(T::Boolean, "BIT"),
    TypeRule::new(T::Char, "CHAR($l)"),
    TypeRule::new(T::Clob, "VARCHAR(MAX)"),
    TypeRule::new(T::Date, "DATE"),
    TypeRule::new(T::Decimal, "DECIMAL($p[,$s])"),
    TypeRule::new(T::Double, "FLOAT(53)"),
    TypeRule::new(T::Float, "FLOAT[($p)]"),
    TypeRule::new(T::Integer, "INT"),
    TypeRule::new(T::Long, "BIGINT"),
    TypeRule::new(T::LongVarbinary, "VARBINARY(MAX)"),
    TypeRule::new(T::LongVarchar, "VARCHAR(MAX)"),
    TypeRule::new(T::NChar, "NCHAR($l)"),
    TypeRule::new(T::NClob, "NVARCHAR(MAX)"),
    TypeRule::new(T::Numeric, "NUMERIC($p[,$s])"),
    TypeRule::new(T::NVarchar, "NVARCHAR($l)").overflow(4000, "NVARCHAR(MAX)"),
    TypeRule::new(T::Real, "REAL"),
    TypeRule::new(T::Smallint, "SMALLINT"),
    TypeRule::new(T::Time, "TIME"),
    TypeRule::new(T::Timestamp, "DATETIME2"),
    TypeRule::new(T::Tinyint, "TINYINT"),
    TypeRule::new(T::Varbinary, "VARBINARY($l)").overflow(8000, "VARBINARY(MAX)"),
    TypeRule::new(T::Varchar, "VARCHAR($l)").overflow(8000, "VARCHAR(MAX)"),
];

// SQL Server 2005 predates DATE, TIME and DATETIME2.
static SQLSERVER2005_OVERRIDES: &[TypeRule] = &[
    TypeRule::new(T::Date, "DATETIME"),
    TypeRule::new(T::Time, "DATETIME"),
    TypeRule::new(T::Timestamp, "DATETIME"),
];

const COLUMN_ALTER: ColumnAlterTemplates = ColumnAlterTemplates {
    add: "ALTER TABLE $t ADD $d",
    drop: "ALTER TABLE $t DROP COLUMN $c",
    split: None,
};

/// SQL Server 2005/2008: ROW_NUMBER() paging.
pub static SQLSERVER2005: DialectDescriptor = DialectDescriptor {
    id: "sqlserver2005",
    name: "SQL Server 2005",
    aliases: &["sqlserver2008", "mssql2005"],
    types: TYPES,
    type_overrides: SQLSERVER2005_OVERRIDES,
    quote: QuoteStyle::Bracket,
    identifier_case: IdentifierCase::AsDeclared,
    reserved: &reserved::SQLSERVER,
    identity: IdentityStrategy::Keyword("IDENTITY(1,1)"),
    constraints: ConstraintRules::STANDARD,
    column_alter: COLUMN_ALTER,
    comments: CommentStyle::Unsupported,
    drops: DropTemplates {
        table: "DROP TABLE $t",
        index: "DROP INDEX $t.$n",
        if_exists: false,
    },
    paging: PagingStrategy::RowNumberWrap {
        empty_order: "ORDER BY (SELECT NULL)",
    },
    table_tail: None,
    boolean_literals: ("1", "0"),
    max_identifier_length: Some(128),
};

/// SQL Server 2012 and later: OFFSET/FETCH paging, which the engine only
/// accepts after an ORDER BY.
pub static SQLSERVER2012: DialectDescriptor = DialectDescriptor {
    id: "sqlserver2012",
    name: "SQL Server 2012",
    aliases: &["sqlserver", "mssql", "sqlserver2016"],
    types: TYPES,
    type_overrides: &[],
    quote: QuoteStyle::Bracket,
    identifier_case: IdentifierCase::AsDeclared,
    reserved: &reserved::SQLSERVER,
    identity: IdentityStrategy::Keyword("IDENTITY(1,1)"),
    constraints: ConstraintRules::STANDARD,
    column_alter: COLUMN_ALTER,
    comments: CommentStyle::Unsupported,
    drops: DropTemplates {
        table: "DROP TABLE $t",
        index: "DROP INDEX $n ON $t",
        if_exists: false,
    },
    paging: PagingStrategy::OffsetFetch {
        requires_order_by: true,
    },
    table_tail: None,
    boolean_literals: ("1", "0"),
    max_identifier_length: Some(128),
};
