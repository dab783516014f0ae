//! IBM Informix.

use super::{
    reserved, ColumnAlterTemplates, CommentStyle, ConstraintRules, DialectDescriptor,
    DropTemplates, IdentifierCase, IdentityStrategy, PagingStrategy, Placement, QuoteStyle,
    ReferentialActions, TypeRule, UniquePlacement, CONSTRAINT_DROP,
};
use crate::types::TypeToken as T;

static TYPES: &[TypeRule] = &[
    TypeRule::new(T::Bigint, "INT8"),
    TypeRule::new(T::Binary, "BYTE"),
    TypeRule::new(T::Bit, "SMALLINT"),
    TypeRule::new(T::Blob, "BLOB"),
    TypeRule::new(T::Boolean, "BOOLEAN"),
    TypeRule::new(T::Char, "CHAR($l)"),
    TypeRule::new(T::Clob, "CLOB"),
    TypeRule::new(T::Date, "DATE"),
    TypeRule::new(T::Decimal, "DECIMAL($p[,$s])"),
    TypeRule::new(T::Double, "FLOAT"),
    TypeRule::new(T::Float, "SMALLFLOAT"),
    TypeRule::new(T::Integer, "INTEGER"),
    TypeRule::new(T::Long, "INT8"),
    TypeRule::new(T::LongVarbinary, "BYTE"),
    TypeRule::new(T::LongVarchar, "TEXT"),
    TypeRule::new(T::NChar, "NCHAR($l)"),
    TypeRule::new(T::NClob, "TEXT"),
    TypeRule::new(T::Numeric, "DECIMAL($p[,$s])"),
    TypeRule::new(T::NVarchar, "NVARCHAR($l)"),
    TypeRule::new(T::Real, "SMALLFLOAT"),
    TypeRule::new(T::Smallint, "SMALLINT"),
    TypeRule::new(T::Time, "DATETIME HOUR TO SECOND"),
    TypeRule::new(T::Timestamp, "DATETIME YEAR TO FRACTION(5)"),
    TypeRule::new(T::Tinyint, "SMALLINT"),
    TypeRule::new(T::Varbinary, "BYTE"),
    TypeRule::new(T::Varchar, "VARCHAR($l)").overflow(255, "LVARCHAR($l)"),
];

/// Informix 11 and later. Constraint names trail the constraint body.
pub static INFORMIX: DialectDescriptor = DialectDescriptor {
    id: "informix",
    name: "Informix",
    aliases: &["ifx"],
    types: TYPES,
    type_overrides: &[],
    quote: QuoteStyle::Double,
    identifier_case: IdentifierCase::AsDeclared,
    reserved: &reserved::INFORMIX,
    identity: IdentityStrategy::SerialType {
        integer: "SERIAL",
        bigint: "SERIAL8",
    },
    constraints: ConstraintRules {
        primary_key: Placement::AlterTable {
            add: "ALTER TABLE $t ADD CONSTRAINT PRIMARY KEY ($c) CONSTRAINT $n",
            drop: CONSTRAINT_DROP,
        },
        foreign_key: Placement::AlterTable {
            add: "ALTER TABLE $t ADD CONSTRAINT FOREIGN KEY ($c) REFERENCES $r ($v)$a CONSTRAINT $n",
            drop: CONSTRAINT_DROP,
        },
        unique: UniquePlacement::AlterTable {
            add: "ALTER TABLE $t ADD CONSTRAINT UNIQUE ($c) CONSTRAINT $n",
            drop: CONSTRAINT_DROP,
        },
        actions: ReferentialActions {
            on_delete: true,
            on_update: false,
        },
    },
    column_alter: ColumnAlterTemplates {
        add: "ALTER TABLE $t ADD $d",
        drop: "ALTER TABLE $t DROP $c",
        split: None,
    },
    comments: CommentStyle::Unsupported,
    drops: DropTemplates {
        table: "DROP TABLE $t",
        index: "DROP INDEX $n",
        if_exists: false,
    },
    paging: PagingStrategy::SkipFirst,
    table_tail: None,
    boolean_literals: ("'t'", "'f'"),
    max_identifier_length: Some(128),
};
