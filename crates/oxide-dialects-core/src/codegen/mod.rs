//! Rust source generation from table models.
//!
//! Each table becomes one source unit holding a row struct, optional
//! column-name constants and optional accessors. Units are returned as
//! strings; [`write_units`] stores them under a directory.

mod config;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::model::{ColumnModel, TableModel};
use crate::types::TypeToken;

pub use config::{EmitterConfig, FlagStyle};

/// Generated source for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// Table the unit was generated from.
    pub table: String,
    /// Name of the generated struct.
    pub struct_name: String,
    /// Module segments from `package_name`.
    pub module_path: Vec<String>,
    /// File name, e.g. `user_t.rs`.
    pub file_name: String,
    /// Rust source text.
    pub content: String,
}

/// Generates the source unit for `table`.
#[must_use]
pub fn emit(table: &TableModel, config: &EmitterConfig) -> SourceUnit {
    let struct_name = struct_name(table.name());
    let fields: Vec<Field<'_>> = table.columns().iter().map(Field::new).collect();

    let mut out = format!("//! Row type for table `{}`.\n", table.name());

    let mut imports = String::new();
    if !config.remove_default_imports {
        imports.push_str("use serde::{Deserialize, Serialize};\n");
    }
    if let Some(extra) = config.imports.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        imports.push_str(extra);
        imports.push('\n');
    }
    if !imports.is_empty() {
        out.push('\n');
        out.push_str(&imports);
    }

    if config.field_flags && config.field_flags_static {
        out.push('\n');
        for field in &fields {
            out.push_str(&flag_const(field, config.field_flags_style, ""));
        }
    }

    out.push_str(&format!("\n/// Row of table `{}`.\n", table.name()));
    if config.remove_default_imports {
        out.push_str("#[derive(Debug, Clone, PartialEq)]\n");
    } else {
        out.push_str("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\n");
    }
    let header = config.class_definition.replace("$ClassName", &struct_name);
    let header = header.trim_end();
    out.push_str(header);
    if !header.ends_with('{') {
        out.push_str(" {");
    }
    out.push('\n');
    if config.fields {
        let vis = if config.public_field { "pub " } else { "" };
        for field in &fields {
            out.push_str(&format!("    {vis}{}: {},\n", field.ident, field.field_type()));
        }
    }
    out.push_str("}\n");

    let mut members = Vec::new();
    if config.field_flags && !config.field_flags_static {
        let flags: String = fields
            .iter()
            .map(|f| flag_const(f, config.field_flags_style, "    "))
            .collect();
        members.push(flags);
    }
    if config.getter_setters {
        if config.fields {
            for field in &fields {
                members.push(field.getter());
                members.push(field.setter(config.link_style));
            }
        } else {
            debug!(table = table.name(), "Accessors skipped, fields are disabled");
        }
    }
    if !members.is_empty() {
        out.push_str(&format!("\nimpl {struct_name} {{\n"));
        out.push_str(&members.join("\n"));
        out.push_str("}\n");
    }

    let module_path = config
        .package_name
        .as_deref()
        .map(|p| {
            p.split(['.', ':', '/'])
                .filter(|s| !s.is_empty())
                .map(sanitize)
                .collect()
        })
        .unwrap_or_default();

    SourceUnit {
        table: table.name().to_string(),
        file_name: format!("{}.rs", module_name(table.name())),
        struct_name,
        module_path,
        content: out,
    }
}

/// Generates units for every table not excluded by `config`.
#[must_use]
pub fn emit_all(tables: &[TableModel], config: &EmitterConfig) -> Vec<SourceUnit> {
    tables
        .iter()
        .filter(|t| {
            let excluded = config.is_excluded(t.name());
            if excluded {
                debug!(table = t.name(), "Table excluded from emission");
            }
            !excluded
        })
        .map(|t| emit(t, config))
        .collect()
}

/// Writes `units` below `dir`, one directory per module segment, and a
/// `mod.rs` per directory declaring its units.
///
/// Returns the written unit paths.
///
/// # Errors
///
/// [`DdlError::Io`](crate::DdlError::Io) if a directory or file cannot be
/// written.
pub fn write_units(dir: &Path, units: &[SourceUnit]) -> Result<Vec<PathBuf>> {
    let mut by_dir: BTreeMap<PathBuf, Vec<&SourceUnit>> = BTreeMap::new();
    for unit in units {
        let target = unit
            .module_path
            .iter()
            .fold(dir.to_path_buf(), |path, segment| path.join(segment));
        by_dir.entry(target).or_default().push(unit);
    }

    let mut written = Vec::with_capacity(units.len());
    for (target, units) in by_dir {
        fs::create_dir_all(&target)?;
        let mut mod_rs = String::new();
        for unit in units {
            let path = target.join(&unit.file_name);
            fs::write(&path, &unit.content)?;
            let stem = unit.file_name.trim_end_matches(".rs");
            mod_rs.push_str(&format!("pub mod {};\n", escape_keyword(stem)));
            written.push(path);
        }
        fs::write(target.join("mod.rs"), mod_rs)?;
    }
    info!(dir = %dir.display(), units = written.len(), "Wrote source units");
    Ok(written)
}

// ================================================================
// Fields
// ================================================================

/// Rust representation of a column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    /// A `Copy` type returned by value.
    Scalar(&'static str),
    /// `String`, borrowed as `&str`.
    Text,
    /// `Vec<u8>`, borrowed as `&[u8]`.
    Bytes,
}

impl ValueKind {
    const fn of(token: TypeToken) -> Self {
        match token {
            TypeToken::Bigint | TypeToken::Long => Self::Scalar("i64"),
            TypeToken::Integer => Self::Scalar("i32"),
            TypeToken::Smallint => Self::Scalar("i16"),
            TypeToken::Tinyint => Self::Scalar("i8"),
            TypeToken::Bit | TypeToken::Boolean => Self::Scalar("bool"),
            TypeToken::Double | TypeToken::Float => Self::Scalar("f64"),
            TypeToken::Real => Self::Scalar("f32"),
            TypeToken::Date => Self::Scalar("chrono::NaiveDate"),
            TypeToken::Time => Self::Scalar("chrono::NaiveTime"),
            TypeToken::Timestamp => Self::Scalar("chrono::NaiveDateTime"),
            TypeToken::Binary
            | TypeToken::Varbinary
            | TypeToken::LongVarbinary
            | TypeToken::Blob => Self::Bytes,
            // Exact numerics keep their textual form.
            TypeToken::Decimal
            | TypeToken::Numeric
            | TypeToken::Char
            | TypeToken::Varchar
            | TypeToken::NChar
            | TypeToken::NVarchar
            | TypeToken::LongVarchar
            | TypeToken::Clob
            | TypeToken::NClob => Self::Text,
        }
    }

    const fn owned(self) -> &'static str {
        match self {
            Self::Scalar(ty) => ty,
            Self::Text => "String",
            Self::Bytes => "Vec<u8>",
        }
    }
}

struct Field<'a> {
    column: &'a ColumnModel,
    /// Field identifier, raw-escaped when it is a keyword.
    ident: String,
    /// Identifier without the raw prefix, for derived names.
    plain: String,
    kind: ValueKind,
}

impl<'a> Field<'a> {
    fn new(column: &'a ColumnModel) -> Self {
        let plain = snake_case(column.name());
        Self {
            column,
            ident: escape_keyword(&plain),
            plain,
            kind: ValueKind::of(column.token()),
        }
    }

    fn field_type(&self) -> String {
        if self.column.is_nullable() {
            format!("Option<{}>", self.kind.owned())
        } else {
            self.kind.owned().to_string()
        }
    }

    fn getter(&self) -> String {
        let nullable = self.column.is_nullable();
        let (ret, body) = match (self.kind, nullable) {
            (ValueKind::Scalar(ty), false) => (ty.to_string(), format!("self.{}", self.ident)),
            (ValueKind::Scalar(ty), true) => (format!("Option<{ty}>"), format!("self.{}", self.ident)),
            (ValueKind::Text, false) => ("&str".to_string(), format!("&self.{}", self.ident)),
            (ValueKind::Text, true) => {
                ("Option<&str>".to_string(), format!("self.{}.as_deref()", self.ident))
            }
            (ValueKind::Bytes, false) => ("&[u8]".to_string(), format!("&self.{}", self.ident)),
            (ValueKind::Bytes, true) => {
                ("Option<&[u8]>".to_string(), format!("self.{}.as_deref()", self.ident))
            }
        };
        format!(
            "    pub fn {}(&self) -> {ret} {{\n        {body}\n    }}\n",
            self.ident
        )
    }

    fn setter(&self, link_style: bool) -> String {
        let ty = self.field_type();
        if link_style {
            format!(
                "    pub fn set_{}(&mut self, value: {ty}) -> &mut Self {{\n        \
                 self.{} = value;\n        self\n    }}\n",
                self.plain, self.ident
            )
        } else {
            format!(
                "    pub fn set_{}(&mut self, value: {ty}) {{\n        self.{} = value;\n    }}\n",
                self.plain, self.ident
            )
        }
    }
}

fn flag_const(field: &Field<'_>, style: FlagStyle, indent: &str) -> String {
    let name = match style {
        FlagStyle::Upper => field.plain.to_ascii_uppercase(),
        FlagStyle::Lower => field.plain.clone(),
        FlagStyle::Camel => camel_case(&field.plain),
        FlagStyle::Normal => sanitize(field.column.name()),
    };
    let allow = if style == FlagStyle::Upper {
        String::new()
    } else {
        format!("{indent}#[allow(non_upper_case_globals)]\n")
    };
    // Associated constants spell out the lifetime.
    let ty = if indent.is_empty() { "&str" } else { "&'static str" };
    format!(
        "{allow}{indent}pub const {}: {ty} = \"{}\";\n",
        escape_keyword(&name),
        field.column.name().replace('\\', "\\\\").replace('"', "\\\"")
    )
}

// ================================================================
// Naming
// ================================================================

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers.
const NON_RAW: &[&str] = &["_", "crate", "self", "Self", "super"];

fn escape_keyword(ident: &str) -> String {
    if NON_RAW.contains(&ident) {
        format!("{ident}_")
    } else if KEYWORDS.contains(&ident) {
        format!("r#{ident}")
    } else {
        ident.to_string()
    }
}

/// Replaces characters not allowed in identifiers and guards a leading
/// digit.
fn sanitize(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// `firstName` and `FIRST_NAME` both become `first_name`.
fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in sanitize(name).chars() {
        if c.is_ascii_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }
    out
}

fn camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper_next = false;
    for c in snake.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    if out.is_empty() {
        return sanitize(snake);
    }
    out
}

/// Converts a table name like "user_t" into a struct name like "UserT".
fn struct_name(table: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = true;
    for ch in snake_case(table).chars() {
        if ch == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(ch.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(ch);
        }
    }
    if result.is_empty() || result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, 'T');
    }
    if result == "Self" {
        result.push('_');
    }
    result
}

fn module_name(table: &str) -> String {
    escape_keyword(&snake_case(table)).replace("r#", "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{blob, date, decimal, integer, long, varchar, TableModel};

    fn user_t() -> TableModel {
        let mut t = TableModel::new("user_t").unwrap();
        t.add_column(varchar("first_name", 20).pkey())
            .unwrap()
            .add_column(integer("age"))
            .unwrap();
        t
    }

    #[test]
    fn test_naming() {
        assert_eq!(struct_name("user_t"), "UserT");
        assert_eq!(struct_name("OrderItem"), "OrderItem");
        assert_eq!(struct_name("2fa"), "T2fa");
        assert_eq!(snake_case("firstName"), "first_name");
        assert_eq!(snake_case("FIRST_NAME"), "first_name");
        assert_eq!(snake_case("pay rate"), "pay_rate");
        assert_eq!(camel_case("first_name"), "firstName");
        assert_eq!(escape_keyword("type"), "r#type");
        assert_eq!(escape_keyword("self"), "self_");
        assert_eq!(module_name("type"), "type");
    }

    #[test]
    fn test_default_unit() {
        let unit = emit(&user_t(), &EmitterConfig::default());
        assert_eq!(unit.struct_name, "UserT");
        assert_eq!(unit.file_name, "user_t.rs");
        assert!(unit.module_path.is_empty());
        let src = &unit.content;
        assert!(src.contains("use serde::{Deserialize, Serialize};"));
        assert!(src.contains("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\npub struct UserT {"));
        assert!(src.contains("    first_name: String,\n    age: Option<i32>,\n}"));
        assert!(src.contains("    pub const FIRST_NAME: &'static str = \"first_name\";"));
        assert!(src.contains("pub fn first_name(&self) -> &str {\n        &self.first_name\n    }"));
        assert!(src.contains("pub fn age(&self) -> Option<i32> {"));
        assert!(src.contains("pub fn set_age(&mut self, value: Option<i32>) {\n        self.age = value;\n    }"));
    }

    #[test]
    fn test_configured_unit() {
        let cfg = EmitterConfig {
            package_name: Some("db.models".to_string()),
            imports: Some("use std::collections::HashMap;".to_string()),
            remove_default_imports: true,
            class_definition: "pub struct $ClassName<M = HashMap<String, String>> {".to_string(),
            field_flags_static: true,
            field_flags_style: FlagStyle::Camel,
            public_field: true,
            link_style: true,
            ..EmitterConfig::default()
        };
        let unit = emit(&user_t(), &cfg);
        let src = &unit.content;
        assert_eq!(unit.module_path, ["db", "models"]);
        assert!(!src.contains("serde"));
        assert!(src.contains("use std::collections::HashMap;"));
        assert!(src.contains("#[allow(non_upper_case_globals)]\npub const firstName: &str = \"first_name\";"));
        assert!(src.contains("pub struct UserT<M = HashMap<String, String>> {\n    pub first_name"));
        assert!(src.contains("-> &mut Self {\n        self.first_name = value;\n        self\n    }"));
    }

    #[test]
    fn test_field_types() {
        let mut t = TableModel::new("item").unwrap();
        t.add_column(long("id").pkey())
            .unwrap()
            .add_column(decimal("price", 10, 2).not_null())
            .unwrap()
            .add_column(blob("image"))
            .unwrap()
            .add_column(date("type"))
            .unwrap();
        let cfg = EmitterConfig {
            field_flags: false,
            ..EmitterConfig::default()
        };
        let src = emit(&t, &cfg).content;
        assert!(src.contains("    id: i64,\n    price: String,\n    image: Option<Vec<u8>>,\n    r#type: Option<chrono::NaiveDate>,"));
        assert!(src.contains("pub fn image(&self) -> Option<&[u8]> {\n        self.image.as_deref()"));
        assert!(src.contains("pub fn set_type(&mut self, value: Option<chrono::NaiveDate>)"));
        assert!(!src.contains("pub const"));
    }

    #[test]
    fn test_no_fields_no_impl() {
        let cfg = EmitterConfig {
            fields: false,
            field_flags: false,
            ..EmitterConfig::default()
        };
        let src = emit(&user_t(), &cfg).content;
        assert!(src.contains("pub struct UserT {\n}\n"));
        assert!(!src.contains("impl UserT"));
    }

    #[test]
    fn test_emit_all_excludes() {
        let mut other = TableModel::new("Dbsample").unwrap();
        other.add_column(integer("id")).unwrap();
        let cfg = EmitterConfig {
            exclude_tables: vec!["DBSAMPLE".to_string()],
            ..EmitterConfig::default()
        };
        let units = emit_all(&[user_t(), other], &cfg);
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].table, "user_t");
    }

    #[test]
    fn test_write_units() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = EmitterConfig {
            package_name: Some("models".to_string()),
            ..EmitterConfig::default()
        };
        let units = emit_all(&[user_t()], &cfg);
        let paths = write_units(dir.path(), &units).unwrap();
        assert_eq!(paths, vec![dir.path().join("models").join("user_t.rs")]);
        let written = fs::read_to_string(&paths[0]).unwrap();
        assert_eq!(written, units[0].content);
        let mod_rs = fs::read_to_string(dir.path().join("models").join("mod.rs")).unwrap();
        assert_eq!(mod_rs, "pub mod user_t;\n");
    }
}
