//! Dialect descriptors and the dialect registry.
//!
//! A dialect is plain data: type templates, quoting and reserved words,
//! identity strategy, constraint placement, DROP templates and a paging
//! strategy. The synthesizer, paginator and introspector interpret these
//! tables; no dialect carries behaviour of its own.
//!
//! Statement templates use single-letter placeholders:
//!
//! | Placeholder | Meaning |
//! |-------------|---------|
//! | `$t` | table name |
//! | `$n` | constraint, index or sequence name |
//! | `$c` | column name or column list |
//! | `$r` | referenced table |
//! | `$v` | referenced column list, or a literal value |
//! | `$d` | full column definition |
//! | `$a` | referential actions (` ON DELETE ...`) |
//!
//! Type templates use `$l` (length), `$p` (precision) and `$s` (scale),
//! with `[...]` marking an optional segment.

mod db2;
mod derby;
mod duckdb;
mod h2;
mod hsqldb;
mod informix;
mod mysql;
mod oracle;
mod postgres;
pub mod reserved;
mod sqlite;
mod sqlserver;
pub(crate) mod template;

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use tracing::debug;

pub use crate::identifier::QuoteStyle;
pub use db2::DB2;
pub use derby::DERBY;
pub use duckdb::DUCKDB;
pub use h2::H2;
pub use hsqldb::HSQLDB;
pub use informix::INFORMIX;
pub use mysql::{MARIADB, MYSQL, MYSQL8};
pub use oracle::{ORACLE10G, ORACLE12C};
pub use postgres::POSTGRESQL;
pub use reserved::ReservedWords;
pub use sqlite::SQLITE;
pub use sqlserver::{SQLSERVER2005, SQLSERVER2012};

use crate::error::{DdlError, Result};
use crate::types::{Param, Requirement, TypeParams, TypeToken};
use template::{literal_args, type_key};

/// Suffix appended to names that collide with a reserved word.
pub const RESERVED_SUFFIX: &str = "_attribute";

// ================================================================
// Descriptor data
// ================================================================

/// Spelling of one type token in one dialect.
#[derive(Debug, Clone, Copy)]
pub struct TypeRule {
    /// The abstract token this rule renders.
    pub token: TypeToken,
    /// Type template, e.g. `"VARCHAR($l)"`.
    pub template: &'static str,
    /// Replacement template once the length exceeds a limit.
    pub overflow: Option<Overflow>,
}

/// Fallback spelling for lengths above an engine limit.
#[derive(Debug, Clone, Copy)]
pub struct Overflow {
    /// Largest length the primary template accepts.
    pub max_length: u32,
    /// Template used above `max_length`.
    pub template: &'static str,
}

impl TypeRule {
    /// Creates a rule without overflow.
    #[must_use]
    pub const fn new(token: TypeToken, template: &'static str) -> Self {
        Self {
            token,
            template,
            overflow: None,
        }
    }

    /// Adds an overflow fallback.
    #[must_use]
    pub const fn overflow(mut self, max_length: u32, template: &'static str) -> Self {
        self.overflow = Some(Overflow {
            max_length,
            template,
        });
        self
    }
}

/// Case applied to identifiers when they are quoted.
///
/// Unquoted identifiers are always emitted as declared; quoting folds them
/// the way the engine folds unquoted names so both forms address the same
/// object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierCase {
    AsDeclared,
    Upper,
    Lower,
}

/// How auto-increment columns are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityStrategy {
    /// A keyword after the column type (`AUTO_INCREMENT`, `IDENTITY(1,1)`).
    Keyword(&'static str),
    /// SQLite's `INTEGER PRIMARY KEY AUTOINCREMENT` rowid alias. Only valid
    /// on a single-column primary key.
    RowidAlias,
    /// The column type itself is replaced by a serial type.
    SerialType {
        integer: &'static str,
        bigint: &'static str,
    },
    /// A sequence created before the table. `default` wires the sequence
    /// into the column when the engine supports it.
    Sequence {
        create: &'static str,
        drop: &'static str,
        default: Option<&'static str>,
    },
}

/// Placement of a primary or foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Declared inside CREATE TABLE.
    Inline,
    /// Added and dropped through ALTER TABLE.
    AlterTable {
        add: &'static str,
        drop: &'static str,
    },
}

/// Placement of a unique constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniquePlacement {
    /// Added and dropped through ALTER TABLE.
    AlterTable {
        add: &'static str,
        drop: &'static str,
    },
    /// Rendered as `CREATE UNIQUE INDEX` and dropped with the index template.
    UniqueIndex,
}

/// Which referential actions the engine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferentialActions {
    pub on_delete: bool,
    pub on_update: bool,
}

/// Constraint placement rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintRules {
    pub primary_key: Placement,
    pub foreign_key: Placement,
    pub unique: UniquePlacement,
    pub actions: ReferentialActions,
}

/// Templates for adding and dropping columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnAlterTemplates {
    /// `$t` table, `$d` definition.
    pub add: &'static str,
    /// `$t` table, `$c` column.
    pub drop: &'static str,
    /// Present when ADD cannot carry DEFAULT / NOT NULL and they must be
    /// applied by follow-up statements.
    pub split: Option<SplitAlter>,
}

/// Follow-up statements for dialects that split ADD COLUMN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitAlter {
    /// `$t` table, `$c` column, `$v` default literal.
    pub set_default: &'static str,
    /// `$t` table, `$c` column.
    pub set_not_null: &'static str,
}

/// How column and table comments are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `COMMENT '...'` on the column, `COMMENT='...'` after the table.
    Inline,
    /// Separate `COMMENT ON` statements.
    CommentOn,
    /// Comments are dropped.
    Unsupported,
}

/// DROP templates for tables and indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTemplates {
    pub table: &'static str,
    pub index: &'static str,
    /// Whether the templates carry an existence check (`IF EXISTS`).
    pub if_exists: bool,
}

/// Pagination strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingStrategy {
    /// `LIMIT n [OFFSET m]`.
    LimitOffset,
    /// `OFFSET m ROWS FETCH NEXT n ROWS ONLY`.
    OffsetFetch {
        /// The engine rejects OFFSET without ORDER BY.
        requires_order_by: bool,
    },
    /// `ROW_NUMBER() OVER (...)` window wrap.
    RowNumberWrap {
        /// Window ordering used when the query has no ORDER BY.
        empty_order: &'static str,
    },
    /// Oracle `ROWNUM` wrap.
    RownumWrap,
    /// Informix `SELECT SKIP m FIRST n`.
    SkipFirst,
}

/// Everything the engine knows about one SQL dialect.
#[derive(Debug)]
pub struct DialectDescriptor {
    /// Registry identifier, lower case.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Additional registry identifiers.
    pub aliases: &'static [&'static str],
    /// Type spellings, one per token.
    pub types: &'static [TypeRule],
    /// Spellings that replace entries of `types` (version variants).
    pub type_overrides: &'static [TypeRule],
    pub quote: QuoteStyle,
    pub identifier_case: IdentifierCase,
    pub reserved: &'static ReservedWords,
    pub identity: IdentityStrategy,
    pub constraints: ConstraintRules,
    pub column_alter: ColumnAlterTemplates,
    pub comments: CommentStyle,
    pub drops: DropTemplates,
    pub paging: PagingStrategy,
    /// Text appended after the closing parenthesis of CREATE TABLE.
    pub table_tail: Option<&'static str>,
    /// Literals for `true` and `false` defaults.
    pub boolean_literals: (&'static str, &'static str),
    /// Longest identifier the engine accepts, in bytes; `None` when the
    /// engine sets no practical limit.
    pub max_identifier_length: Option<usize>,
}

/// Foreign key template shared by most ALTER TABLE dialects.
pub(crate) const FK_ADD: &str = "ALTER TABLE $t ADD CONSTRAINT $n FOREIGN KEY ($c) REFERENCES $r ($v)$a";
pub(crate) const CONSTRAINT_DROP: &str = "ALTER TABLE $t DROP CONSTRAINT $n";
pub(crate) const UNIQUE_ADD: &str = "ALTER TABLE $t ADD CONSTRAINT $n UNIQUE ($c)";

impl ConstraintRules {
    /// Inline primary key; foreign keys and uniques through ALTER TABLE.
    pub const STANDARD: Self = Self {
        primary_key: Placement::Inline,
        foreign_key: Placement::AlterTable {
            add: FK_ADD,
            drop: CONSTRAINT_DROP,
        },
        unique: UniquePlacement::AlterTable {
            add: UNIQUE_ADD,
            drop: CONSTRAINT_DROP,
        },
        actions: ReferentialActions {
            on_delete: true,
            on_update: true,
        },
    };
}

impl ColumnAlterTemplates {
    /// `ALTER TABLE t ADD COLUMN ...` / `ALTER TABLE t DROP COLUMN c`.
    pub const STANDARD: Self = Self {
        add: "ALTER TABLE $t ADD COLUMN $d",
        drop: "ALTER TABLE $t DROP COLUMN $c",
        split: None,
    };
}

// ================================================================
// Rendering helpers
// ================================================================

impl DialectDescriptor {
    /// Iterates the effective type rules: overrides first, then the base
    /// rules they do not replace.
    pub fn type_rules(&self) -> impl Iterator<Item = &TypeRule> {
        self.type_overrides.iter().chain(
            self.types
                .iter()
                .filter(|r| !self.type_overrides.iter().any(|o| o.token == r.token)),
        )
    }

    /// The rule used to render `token`.
    #[must_use]
    pub fn type_rule(&self, token: TypeToken) -> Option<&TypeRule> {
        self.type_rules().find(|r| r.token == token)
    }

    /// Renders `token` with `params` as this dialect's type clause.
    ///
    /// # Errors
    ///
    /// [`DdlError::InvalidModelDefinition`] if the parameters do not fit
    /// the token or the dialect has no rule for it.
    pub fn render_type(&self, token: TypeToken, params: &TypeParams) -> Result<String> {
        params.validate(token)?;
        let rule = self.type_rule(token).ok_or_else(|| {
            DdlError::invalid_model(format!("{} has no type mapping for {token}", self.name))
        })?;
        let template = match (rule.overflow, params.length) {
            (Some(overflow), Some(length)) if length > overflow.max_length => overflow.template,
            _ => rule.template,
        };
        Ok(template::fill(template, |key| {
            let value = match key {
                'l' => params.length,
                'p' => params.precision,
                's' => params.scale,
                _ => None,
            };
            value.map(|v| v.to_string())
        }))
    }

    /// Whether `name` is a reserved word in this dialect.
    #[must_use]
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.contains(name)
    }

    /// Appends [`RESERVED_SUFFIX`] to reserved names.
    ///
    /// Idempotent: names that already end with the suffix are returned
    /// unchanged.
    #[must_use]
    pub fn escape_name(&self, name: &str) -> String {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(RESERVED_SUFFIX) || !self.is_reserved(name) {
            name.to_string()
        } else {
            format!("{name}{RESERVED_SUFFIX}")
        }
    }

    /// Fits a synthesized name within [`max_identifier_length`].
    ///
    /// A longer name is cut and suffixed with `_` and eight hex digits
    /// hashed from the full name, so the result is stable across calls and
    /// distinct long names stay distinct.
    ///
    /// [`max_identifier_length`]: DialectDescriptor::max_identifier_length
    #[must_use]
    pub fn fit_identifier(&self, name: &str) -> String {
        let Some(max) = self.max_identifier_length else {
            return name.to_string();
        };
        if name.len() <= max {
            return name.to_string();
        }
        let hash = format!("{:08x}", fnv1a(name));
        let mut cut = max.saturating_sub(hash.len() + 1);
        while !name.is_char_boundary(cut) {
            cut -= 1;
        }
        debug!(dialect = self.id, name, max, "Shortening synthesized identifier");
        format!("{}_{hash}", &name[..cut])
    }

    /// Renders a name for use in DDL: reserved-word escaping, then case
    /// folding and quoting when `quote` is set.
    #[must_use]
    pub fn render_identifier(&self, name: &str, quote: bool) -> String {
        let escaped = self.escape_name(name);
        if !quote {
            return escaped;
        }
        let folded = match self.identifier_case {
            IdentifierCase::AsDeclared => escaped,
            IdentifierCase::Upper => escaped.to_ascii_uppercase(),
            IdentifierCase::Lower => escaped.to_ascii_lowercase(),
        };
        self.quote.quote(&folded)
    }

    /// Renders a boolean literal.
    #[must_use]
    pub const fn boolean_literal(&self, value: bool) -> &'static str {
        if value {
            self.boolean_literals.0
        } else {
            self.boolean_literals.1
        }
    }

    /// Maps a native type name (as reported by a catalog) back to a token.
    ///
    /// `type_name` may carry its arguments (`"VARCHAR(20)"`); explicit
    /// `size`, `precision` and `scale` take priority over them. When
    /// several tokens share a spelling, a rule whose literal arguments
    /// match wins, then the token named like the type, then a rule that
    /// accepts the available parameters. Shared aliases (`INT`,
    /// `CHARACTER VARYING`, `BYTEA`, ...) are tried last.
    #[must_use]
    pub fn native_type(
        &self,
        type_name: &str,
        size: Option<u32>,
        precision: Option<u32>,
        scale: Option<u32>,
    ) -> Option<(TypeToken, TypeParams)> {
        let key = type_key(type_name);
        let args = literal_args(type_name);
        let native = NativeArgs {
            size: size.or_else(|| args.first().copied()),
            precision: precision.or_else(|| args.first().copied()),
            scale: scale.or_else(|| args.get(1).copied()),
        };
        let has_args = !args.is_empty() || size.is_some() || precision.is_some();

        let candidates: Vec<&TypeRule> = self
            .type_rules()
            .filter(|r| type_key(r.template) == key)
            .collect();

        let passes: [&dyn Fn(&TypeRule) -> bool; 5] = [
            &|r| native.matches_literals(&literal_args(r.template)),
            &|r| r.token.as_str() == key,
            &|r| has_args && r.template.contains('$'),
            &|r| literal_args(r.template).is_empty(),
            &|_| true,
        ];
        for pass in passes {
            for rule in candidates.iter().filter(|r| pass(r)) {
                if let Some(params) = native.params_for(rule.token) {
                    return Some((rule.token, params));
                }
            }
        }

        let alias = TYPE_ALIASES
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, token)| *token)
            .or_else(|| key.parse::<TypeToken>().ok());
        if let Some(token) = alias {
            if let Some(params) = native.params_for(token) {
                return Some((token, params));
            }
        }
        debug!(dialect = self.id, native = type_name, "No token for native type");
        None
    }
}

impl fmt::Display for DialectDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// 32-bit FNV-1a.
fn fnv1a(text: &str) -> u32 {
    text.bytes().fold(0x811c_9dc5, |hash, b| {
        (hash ^ u32::from(b)).wrapping_mul(0x0100_0193)
    })
}

/// Native type arguments gathered during reverse lookup.
struct NativeArgs {
    size: Option<u32>,
    precision: Option<u32>,
    scale: Option<u32>,
}

impl NativeArgs {
    fn matches_literals(&self, literals: &[u32]) -> bool {
        let Some(first) = literals.first() else {
            return false;
        };
        if self.precision.or(self.size) != Some(*first) {
            return false;
        }
        match literals.get(1) {
            Some(scale) => self.scale == Some(*scale),
            None => self.scale.unwrap_or(0) == 0,
        }
    }

    fn params_for(&self, token: TypeToken) -> Option<TypeParams> {
        let mut params = TypeParams::default();
        let pick = |param: Param, value: Option<u32>| -> Option<Option<u32>> {
            match token.requirement(param) {
                Requirement::Required => value.map(Some),
                Requirement::Optional => Some(value),
                Requirement::Forbidden => Some(None),
            }
        };
        params.length = pick(Param::Length, self.size)?;
        params.precision = pick(Param::Precision, self.precision)?;
        if params.precision.is_some() {
            params.scale = pick(Param::Scale, self.scale)?.filter(|s| *s > 0);
        }
        params.validate(token).ok()?;
        Some(params)
    }
}

/// Native spellings shared across engines.
static TYPE_ALIASES: &[(&str, TypeToken)] = &[
    ("BIGSERIAL", TypeToken::Bigint),
    ("BOOL", TypeToken::Boolean),
    ("BYTEA", TypeToken::Blob),
    ("CHARACTER", TypeToken::Char),
    ("CHARACTER VARYING", TypeToken::Varchar),
    ("DATETIME", TypeToken::Timestamp),
    ("DATETIME2", TypeToken::Timestamp),
    ("DEC", TypeToken::Decimal),
    ("DOUBLE PRECISION", TypeToken::Double),
    ("FLOAT4", TypeToken::Real),
    ("FLOAT8", TypeToken::Double),
    ("IMAGE", TypeToken::Blob),
    ("INT", TypeToken::Integer),
    ("INT2", TypeToken::Smallint),
    ("INT4", TypeToken::Integer),
    ("INT8", TypeToken::Bigint),
    ("LONGBLOB", TypeToken::Blob),
    ("LONGTEXT", TypeToken::Clob),
    ("MEDIUMBLOB", TypeToken::Blob),
    ("MEDIUMINT", TypeToken::Integer),
    ("MEDIUMTEXT", TypeToken::Clob),
    ("NATIONAL CHARACTER VARYING", TypeToken::NVarchar),
    ("NTEXT", TypeToken::NClob),
    ("NUMBER", TypeToken::Numeric),
    ("NVARCHAR2", TypeToken::NVarchar),
    ("SERIAL", TypeToken::Integer),
    ("SERIAL8", TypeToken::Bigint),
    ("TEXT", TypeToken::Clob),
    ("TIME WITHOUT TIME ZONE", TypeToken::Time),
    ("TIMESTAMP WITHOUT TIME ZONE", TypeToken::Timestamp),
    ("VARCHAR2", TypeToken::Varchar),
];

// ================================================================
// Registry
// ================================================================

static DIALECTS: [&DialectDescriptor; 15] = [
    &H2,
    &HSQLDB,
    &DERBY,
    &MYSQL,
    &MYSQL8,
    &MARIADB,
    &POSTGRESQL,
    &SQLITE,
    &DUCKDB,
    &ORACLE10G,
    &ORACLE12C,
    &SQLSERVER2005,
    &SQLSERVER2012,
    &DB2,
    &INFORMIX,
];

static REGISTRY: LazyLock<HashMap<String, &'static DialectDescriptor>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for dialect in DIALECTS {
        map.insert(normalize_id(dialect.id), dialect);
        for alias in dialect.aliases {
            map.insert(normalize_id(alias), dialect);
        }
    }
    map
});

/// All registered dialects, in registration order.
#[must_use]
pub fn all() -> &'static [&'static DialectDescriptor] {
    &DIALECTS
}

/// Looks up a dialect by identifier.
///
/// Matching ignores ASCII case and punctuation, and tolerates a trailing
/// `Dialect` suffix, so `"h2"`, `"H2Dialect"` and `"MySQL8Dialect"` all
/// resolve.
///
/// # Errors
///
/// [`DdlError::UnknownDialect`] when nothing is registered under the id.
pub fn resolve(id: &str) -> Result<&'static DialectDescriptor> {
    let key = normalize_id(id);
    let found = REGISTRY.get(&key).copied();
    debug!(id, found = found.is_some(), "Resolving dialect");
    found.ok_or_else(|| DdlError::UnknownDialect(id.to_string()))
}

fn normalize_id(id: &str) -> String {
    let compact: String = id
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    match compact.strip_suffix("dialect") {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => compact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(length: Option<u32>, precision: Option<u32>, scale: Option<u32>) -> TypeParams {
        TypeParams {
            length,
            precision,
            scale,
        }
    }

    #[test]
    fn test_resolve_variants() {
        assert_eq!(resolve("h2").unwrap().id, "h2");
        assert_eq!(resolve("H2Dialect").unwrap().id, "h2");
        assert_eq!(resolve("MySQL8Dialect").unwrap().id, "mysql8");
        assert_eq!(resolve("postgres").unwrap().id, "postgresql");
        assert_eq!(resolve("SQLServer2012Dialect").unwrap().id, "sqlserver2012");
        assert_eq!(resolve("oracle-12c").unwrap().id, "oracle12c");
    }

    #[test]
    fn test_resolve_unknown() {
        let err = resolve("foxpro").unwrap_err();
        assert!(matches!(err, DdlError::UnknownDialect(ref id) if id == "foxpro"));
        assert!(resolve("Dialect").is_err());
        assert!(resolve("").is_err());
    }

    #[test]
    fn test_ids_and_aliases_unique() {
        let mut seen = std::collections::HashSet::new();
        for dialect in all() {
            assert!(seen.insert(normalize_id(dialect.id)), "{}", dialect.id);
            for alias in dialect.aliases {
                assert!(seen.insert(normalize_id(alias)), "{alias}");
            }
        }
        assert_eq!(all().len(), 15);
    }

    #[test]
    fn test_every_dialect_renders_every_token() {
        for dialect in all() {
            for token in TypeToken::ALL {
                let p = params(
                    (token.requirement(Param::Length) == Requirement::Required).then_some(20),
                    (token.requirement(Param::Precision) == Requirement::Required).then_some(10),
                    None,
                );
                let rendered = dialect.render_type(token, &p).unwrap();
                assert!(!rendered.is_empty(), "{} {token}", dialect.id);
                assert!(!rendered.contains('$'), "{} {token}: {rendered}", dialect.id);
                assert!(!rendered.contains('['), "{} {token}: {rendered}", dialect.id);
            }
        }
    }

    #[test]
    fn test_render_type_templates() {
        assert_eq!(
            H2.render_type(TypeToken::Varchar, &params(Some(20), None, None))
                .unwrap(),
            "VARCHAR(20)"
        );
        assert_eq!(
            POSTGRESQL
                .render_type(TypeToken::Decimal, &params(None, Some(12), Some(2)))
                .unwrap(),
            "NUMERIC(12,2)"
        );
        assert_eq!(
            POSTGRESQL
                .render_type(TypeToken::Decimal, &params(None, Some(12), None))
                .unwrap(),
            "NUMERIC(12)"
        );
        assert_eq!(
            ORACLE12C
                .render_type(TypeToken::Long, &TypeParams::default())
                .unwrap(),
            "NUMBER(19)"
        );
    }

    #[test]
    fn test_render_type_overflow() {
        assert_eq!(
            ORACLE12C
                .render_type(TypeToken::Varchar, &params(Some(4000), None, None))
                .unwrap(),
            "VARCHAR2(4000)"
        );
        assert_eq!(
            ORACLE12C
                .render_type(TypeToken::Varchar, &params(Some(4001), None, None))
                .unwrap(),
            "CLOB"
        );
        assert_eq!(
            SQLSERVER2012
                .render_type(TypeToken::Varchar, &params(Some(9000), None, None))
                .unwrap(),
            "VARCHAR(MAX)"
        );
    }

    #[test]
    fn test_render_type_rejects_missing_length() {
        let err = H2
            .render_type(TypeToken::Varchar, &TypeParams::default())
            .unwrap_err();
        assert!(matches!(err, DdlError::InvalidModelDefinition(_)));
    }

    #[test]
    fn test_type_overrides() {
        assert_eq!(
            SQLSERVER2005
                .render_type(TypeToken::Date, &TypeParams::default())
                .unwrap(),
            "DATETIME"
        );
        assert_eq!(
            SQLSERVER2012
                .render_type(TypeToken::Date, &TypeParams::default())
                .unwrap(),
            "DATE"
        );
    }

    #[test]
    fn test_escape_name_idempotent_for_all_reserved_words() {
        for dialect in all() {
            for word in dialect.reserved.words {
                let once = dialect.escape_name(word);
                assert_ne!(&once, word, "{} {word}", dialect.id);
                assert_eq!(dialect.escape_name(&once), once, "{} {word}", dialect.id);
                let lower = word.to_ascii_lowercase();
                assert_eq!(dialect.escape_name(&lower), format!("{lower}_attribute"));
            }
            assert_eq!(dialect.escape_name("first_name"), "first_name");
        }
    }

    #[test]
    fn test_fit_identifier() {
        assert_eq!(ORACLE10G.fit_identifier("orders_id_seq"), "orders_id_seq");

        let long = "model_column_t_model_column_id_seq";
        let fitted = ORACLE10G.fit_identifier(long);
        assert_eq!(fitted.len(), 30);
        assert!(fitted.starts_with("model_column_t_model__"), "{fitted}");
        assert_eq!(fitted, ORACLE10G.fit_identifier(long));
        assert_ne!(
            fitted,
            ORACLE10G.fit_identifier("model_column_t_model_column_no_seq")
        );

        assert_eq!(ORACLE12C.fit_identifier(long), long);
        assert_eq!(SQLITE.fit_identifier(&"x".repeat(300)).len(), 300);
        assert_eq!(POSTGRESQL.fit_identifier(&"é".repeat(40)).len(), 63);
        assert_eq!(POSTGRESQL.fit_identifier(&format!("a{}", "é".repeat(40))).len(), 62);
    }

    #[test]
    fn test_render_identifier_quoting() {
        assert_eq!(MYSQL.render_identifier("check", false), "check_attribute");
        assert_eq!(MYSQL.render_identifier("user_t", true), "`user_t`");
        assert_eq!(SQLSERVER2012.render_identifier("user_t", true), "[user_t]");
        assert_eq!(ORACLE12C.render_identifier("user_t", true), "\"USER_T\"");
        assert_eq!(ORACLE12C.render_identifier("user_t", false), "user_t");
        assert_eq!(POSTGRESQL.render_identifier("UserT", true), "\"usert\"");
    }

    #[test]
    fn test_native_type_direct() {
        assert_eq!(
            SQLITE.native_type("VARCHAR(20)", None, None, None),
            Some((TypeToken::Varchar, params(Some(20), None, None)))
        );
        assert_eq!(
            SQLITE.native_type("integer", None, None, None),
            Some((TypeToken::Integer, TypeParams::default()))
        );
        assert_eq!(
            SQLITE.native_type("DECIMAL(10,2)", None, None, None),
            Some((TypeToken::Decimal, params(None, Some(10), Some(2))))
        );
    }

    #[test]
    fn test_native_type_shared_spelling() {
        // NUMBER(10) is INTEGER, NUMBER(19) BIGINT, NUMBER(12,2) DECIMAL.
        assert_eq!(
            ORACLE12C.native_type("NUMBER", None, Some(10), Some(0)),
            Some((TypeToken::Integer, TypeParams::default()))
        );
        assert_eq!(
            ORACLE12C.native_type("NUMBER", None, Some(19), Some(0)),
            Some((TypeToken::Bigint, TypeParams::default()))
        );
        assert_eq!(
            ORACLE12C.native_type("NUMBER", None, Some(12), Some(2)),
            Some((TypeToken::Decimal, params(None, Some(12), Some(2))))
        );
        assert_eq!(
            SQLSERVER2012.native_type("float", None, Some(53), None),
            Some((TypeToken::Double, TypeParams::default()))
        );
        assert_eq!(
            MYSQL.native_type("tinyint(1)", None, None, None),
            Some((TypeToken::Boolean, TypeParams::default()))
        );
        assert_eq!(
            MYSQL.native_type("tinyint", None, Some(3), None),
            Some((TypeToken::Tinyint, TypeParams::default()))
        );
    }

    #[test]
    fn test_native_type_aliases() {
        assert_eq!(
            POSTGRESQL.native_type("character varying", Some(40), None, None),
            Some((TypeToken::Varchar, params(Some(40), None, None)))
        );
        assert_eq!(
            POSTGRESQL.native_type("bytea", None, None, None),
            Some((TypeToken::Blob, TypeParams::default()))
        );
        assert_eq!(
            SQLITE.native_type("INT", None, None, None),
            Some((TypeToken::Integer, TypeParams::default()))
        );
        assert_eq!(SQLITE.native_type("GEOMETRY", None, None, None), None);
        assert_eq!(SQLITE.native_type("VARCHAR", None, None, None), None);
    }
}
