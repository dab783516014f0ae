//! Source emitter options.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Naming style of column-name constants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagStyle {
    /// `FIRST_NAME`
    #[default]
    Upper,
    /// `first_name`
    Lower,
    /// `firstName`
    Camel,
    /// The column name as declared.
    Normal,
}

/// Options for [`emit`](super::emit).
///
/// Deserializes from a flat JSON object; missing keys keep their
/// defaults.
///
/// ```
/// use oxide_dialects_core::codegen::{EmitterConfig, FlagStyle};
///
/// let cfg = EmitterConfig::from_json(r#"{"link_style": true, "field_flags_style": "camel"}"#)?;
/// assert!(cfg.link_style);
/// assert_eq!(cfg.field_flags_style, FlagStyle::Camel);
/// assert!(cfg.fields);
/// # Ok::<(), oxide_dialects_core::DdlError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// Tables to skip, matched ignoring ASCII case.
    pub exclude_tables: Vec<String>,
    /// Dotted module path; each segment becomes a directory when units
    /// are written.
    pub package_name: Option<String>,
    /// Extra `use` lines placed after the default imports.
    pub imports: Option<String>,
    /// Drop the default serde import and derives.
    pub remove_default_imports: bool,
    /// Struct header; `$ClassName` is replaced by the struct name.
    pub class_definition: String,
    /// Emit one constant per column holding the column name.
    pub field_flags: bool,
    /// Put the column constants at module level instead of in an
    /// associated `impl` block.
    pub field_flags_static: bool,
    /// Naming style of the column constants.
    pub field_flags_style: FlagStyle,
    /// Emit struct fields.
    pub fields: bool,
    /// Emit getters and setters.
    pub getter_setters: bool,
    /// Make struct fields `pub`.
    pub public_field: bool,
    /// Setters return `&mut Self` for chaining.
    pub link_style: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            exclude_tables: Vec::new(),
            package_name: None,
            imports: None,
            remove_default_imports: false,
            class_definition: String::from("pub struct $ClassName"),
            field_flags: true,
            field_flags_static: false,
            field_flags_style: FlagStyle::Upper,
            fields: true,
            getter_setters: true,
            public_field: false,
            link_style: false,
        }
    }
}

impl EmitterConfig {
    /// Parses options from a JSON object.
    ///
    /// # Errors
    ///
    /// [`DdlError::Config`](crate::DdlError::Config) for malformed JSON or
    /// values of the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether `table` is listed in `exclude_tables`.
    #[must_use]
    pub fn is_excluded(&self, table: &str) -> bool {
        self.exclude_tables
            .iter()
            .any(|t| t.eq_ignore_ascii_case(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DdlError;

    #[test]
    fn test_defaults() {
        let cfg = EmitterConfig::from_json("{}").unwrap();
        assert_eq!(cfg, EmitterConfig::default());
        assert_eq!(cfg.class_definition, "pub struct $ClassName");
        assert!(cfg.fields && cfg.getter_setters && cfg.field_flags);
    }

    #[test]
    fn test_full_config() {
        let cfg = EmitterConfig::from_json(
            r#"{
                "exclude_tables": ["Dbsample"],
                "package_name": "somepackage",
                "imports": "use std::collections::HashMap;",
                "remove_default_imports": true,
                "field_flags_static": true,
                "field_flags_style": "normal",
                "public_field": true
            }"#,
        )
        .unwrap();
        assert!(cfg.is_excluded("DBSAMPLE"));
        assert_eq!(cfg.package_name.as_deref(), Some("somepackage"));
        assert_eq!(cfg.field_flags_style, FlagStyle::Normal);
        assert!(cfg.remove_default_imports && cfg.public_field);
    }

    #[test]
    fn test_bad_style() {
        let err = EmitterConfig::from_json(r#"{"field_flags_style": "shout"}"#).unwrap_err();
        assert!(matches!(err, DdlError::Config(_)));
    }
}
