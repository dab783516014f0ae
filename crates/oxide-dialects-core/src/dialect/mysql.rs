//! MySQL and MariaDB.

use super::{
    reserved, ColumnAlterTemplates, CommentStyle, ConstraintRules, DialectDescriptor,
    DropTemplates, IdentifierCase, IdentityStrategy, PagingStrategy, Placement, QuoteStyle,
    ReferentialActions, TypeRule, UniquePlacement, FK_ADD, UNIQUE_ADD,
};
use crate::types::TypeToken as T;

static TYPES: &[TypeRule] = &[
    TypeRule::new(T::Bigint, "BIGINT"),
    TypeRule::new(T::Binary, "BINARY($l)"),
    TypeRule::new(T::Bit, "BIT"),
    TypeRule::new(T::Blob, "LONGBLOB"),
    TypeRule::new(T::Boolean, "TINYINT(1)"),
    TypeRule::new(T::Char, "CHAR($l)"),
    TypeRule::new(T::Clob, "LONGTEXT"),
    TypeRule::new(T::Date, "DATE"),
    TypeRule::new(T::Decimal, "DECIMAL($p[,$s])"),
    TypeRule::new(T::Double, "DOUBLE"),
    TypeRule::new(T::Float, "FLOAT[($p)]"),
    TypeRule::new(T::Integer, "INTEGER"),
    TypeRule::new(T::Long, "BIGINT"),
    TypeRule::new(T::LongVarbinary, "LONGBLOB"),
    TypeRule::new(T::LongVarchar, "LONGTEXT"),
    TypeRule::new(T::NChar, "NCHAR($l)"),
    TypeRule::new(T::NClob, "LONGTEXT"),
    TypeRule::new(T::Numeric, "DECIMAL($p[,$s])"),
    TypeRule::new(T::NVarchar, "NVARCHAR($l)"),
    TypeRule::new(T::Real, "FLOAT"),
    TypeRule::new(T::Smallint, "SMALLINT"),
    TypeRule::new(T::Time, "TIME"),
    TypeRule::new(T::Timestamp, "DATETIME"),
    TypeRule::new(T::Tinyint, "TINYINT"),
    TypeRule::new(T::Varbinary, "VARBINARY($l)"),
    TypeRule::new(T::Varchar, "VARCHAR($l)").overflow(65535, "LONGTEXT"),
];

const CONSTRAINTS: ConstraintRules = ConstraintRules {
    primary_key: Placement::Inline,
    foreign_key: Placement::AlterTable {
        add: FK_ADD,
        drop: "ALTER TABLE $t DROP FOREIGN KEY $n",
    },
    unique: UniquePlacement::AlterTable {
        add: UNIQUE_ADD,
        drop: "ALTER TABLE $t DROP INDEX $n",
    },
    actions: ReferentialActions {
        on_delete: true,
        on_update: true,
    },
};

const DROPS: DropTemplates = DropTemplates {
    table: "DROP TABLE IF EXISTS $t",
    index: "DROP INDEX $n ON $t",
    if_exists: true,
};

/// MySQL 5.x.
pub static MYSQL: DialectDescriptor = DialectDescriptor {
    id: "mysql",
    name: "MySQL",
    aliases: &["mysql5", "mysql57"],
    types: TYPES,
    type_overrides: &[],
    quote: QuoteStyle::Backtick,
    identifier_case: IdentifierCase::AsDeclared,
    reserved: &reserved::MYSQL,
    identity: IdentityStrategy::Keyword("AUTO_INCREMENT"),
    constraints: CONSTRAINTS,
    column_alter: ColumnAlterTemplates::STANDARD,
    comments: CommentStyle::Inline,
    drops: DROPS,
    paging: PagingStrategy::LimitOffset,
    table_tail: Some("ENGINE=InnoDB"),
    boolean_literals: ("TRUE", "FALSE"),
    max_identifier_length: Some(64),
};

static MYSQL8_OVERRIDES: &[TypeRule] = &[TypeRule::new(T::Timestamp, "DATETIME(6)")];

/// MySQL 8.x.
pub static MYSQL8: DialectDescriptor = DialectDescriptor {
    id: "mysql8",
    name: "MySQL 8",
    aliases: &["mysql80"],
    types: TYPES,
    type_overrides: MYSQL8_OVERRIDES,
    quote: QuoteStyle::Backtick,
    identifier_case: IdentifierCase::AsDeclared,
    reserved: &reserved::MYSQL,
    identity: IdentityStrategy::Keyword("AUTO_INCREMENT"),
    constraints: CONSTRAINTS,
    column_alter: ColumnAlterTemplates::STANDARD,
    comments: CommentStyle::Inline,
    drops: DROPS,
    paging: PagingStrategy::LimitOffset,
    table_tail: Some("ENGINE=InnoDB DEFAULT CHARSET=utf8mb4"),
    boolean_literals: ("TRUE", "FALSE"),
    max_identifier_length: Some(64),
};

/// MariaDB 10.x.
pub static MARIADB: DialectDescriptor = DialectDescriptor {
    id: "mariadb",
    name: "MariaDB",
    aliases: &["mariadb10"],
    types: TYPES,
    type_overrides: &[],
    quote: QuoteStyle::Backtick,
    identifier_case: IdentifierCase::AsDeclared,
    reserved: &reserved::MYSQL,
    identity: IdentityStrategy::Keyword("AUTO_INCREMENT"),
    constraints: CONSTRAINTS,
    column_alter: ColumnAlterTemplates::STANDARD,
    comments: CommentStyle::Inline,
    drops: DROPS,
    paging: PagingStrategy::LimitOffset,
    table_tail: Some("ENGINE=InnoDB"),
    boolean_literals: ("TRUE", "FALSE"),
    max_identifier_length: Some(64),
};
