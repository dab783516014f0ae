//! Abstract column type tokens.
//!
//! Every column in a [`TableModel`](crate::model::TableModel) carries one
//! of these tokens instead of an engine-specific type name. Each token
//! declares which of the three type parameters (length, precision, scale)
//! it requires, accepts or forbids; dialects only decide how a token is
//! spelled.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{DdlError, Result};

/// A closed set of engine-independent column types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeToken {
    Bigint,
    Binary,
    Bit,
    Blob,
    Boolean,
    Char,
    Clob,
    Date,
    Decimal,
    Double,
    Float,
    Integer,
    Long,
    LongVarbinary,
    LongVarchar,
    NChar,
    NClob,
    Numeric,
    NVarchar,
    Real,
    Smallint,
    Time,
    Timestamp,
    Tinyint,
    Varbinary,
    Varchar,
}

/// A type parameter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Param {
    Length,
    Precision,
    Scale,
}

/// How a token treats one parameter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
    Forbidden,
}

impl TypeToken {
    /// All tokens, in declaration order.
    pub const ALL: [Self; 26] = [
        Self::Bigint,
        Self::Binary,
        Self::Bit,
        Self::Blob,
        Self::Boolean,
        Self::Char,
        Self::Clob,
        Self::Date,
        Self::Decimal,
        Self::Double,
        Self::Float,
        Self::Integer,
        Self::Long,
        Self::LongVarbinary,
        Self::LongVarchar,
        Self::NChar,
        Self::NClob,
        Self::Numeric,
        Self::NVarchar,
        Self::Real,
        Self::Smallint,
        Self::Time,
        Self::Timestamp,
        Self::Tinyint,
        Self::Varbinary,
        Self::Varchar,
    ];

    /// Canonical upper-case name of the token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bigint => "BIGINT",
            Self::Binary => "BINARY",
            Self::Bit => "BIT",
            Self::Blob => "BLOB",
            Self::Boolean => "BOOLEAN",
            Self::Char => "CHAR",
            Self::Clob => "CLOB",
            Self::Date => "DATE",
            Self::Decimal => "DECIMAL",
            Self::Double => "DOUBLE",
            Self::Float => "FLOAT",
            Self::Integer => "INTEGER",
            Self::Long => "LONG",
            Self::LongVarbinary => "LONGVARBINARY",
            Self::LongVarchar => "LONGVARCHAR",
            Self::NChar => "NCHAR",
            Self::NClob => "NCLOB",
            Self::Numeric => "NUMERIC",
            Self::NVarchar => "NVARCHAR",
            Self::Real => "REAL",
            Self::Smallint => "SMALLINT",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
            Self::Tinyint => "TINYINT",
            Self::Varbinary => "VARBINARY",
            Self::Varchar => "VARCHAR",
        }
    }

    /// Returns how this token treats `param`.
    #[must_use]
    pub const fn requirement(self, param: Param) -> Requirement {
        match (self, param) {
            (
                Self::Char | Self::NChar | Self::Varchar | Self::NVarchar | Self::Binary
                | Self::Varbinary,
                Param::Length,
            )
            | (Self::Decimal | Self::Numeric, Param::Precision) => Requirement::Required,
            (Self::Decimal | Self::Numeric, Param::Scale) | (Self::Float, Param::Precision) => {
                Requirement::Optional
            }
            _ => Requirement::Forbidden,
        }
    }

    /// Whether the token may carry an auto-increment/identity flag.
    #[must_use]
    pub const fn is_integral(self) -> bool {
        matches!(
            self,
            Self::Bigint | Self::Integer | Self::Long | Self::Smallint | Self::Tinyint
        )
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeToken {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DdlError::invalid_model(format!("unknown type token '{s}'")))
    }
}

impl Serialize for TypeToken {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Parameters a token requires.
///
/// Pure function of the token; dialects never change it.
#[must_use]
pub const fn required_parameters(token: TypeToken) -> &'static [Param] {
    match token {
        TypeToken::Char
        | TypeToken::NChar
        | TypeToken::Varchar
        | TypeToken::NVarchar
        | TypeToken::Binary
        | TypeToken::Varbinary => &[Param::Length],
        TypeToken::Decimal | TypeToken::Numeric => &[Param::Precision],
        _ => &[],
    }
}

/// Concrete parameter values attached to a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TypeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
}

impl TypeParams {
    /// Returns the value stored for `param`.
    #[must_use]
    pub const fn get(&self, param: Param) -> Option<u32> {
        match param {
            Param::Length => self.length,
            Param::Precision => self.precision,
            Param::Scale => self.scale,
        }
    }

    /// Checks these parameters against what `token` requires.
    ///
    /// # Errors
    ///
    /// [`DdlError::InvalidModelDefinition`] when a required parameter is
    /// missing, a forbidden one is present, a length or precision is zero,
    /// or the scale exceeds the precision.
    pub fn validate(&self, token: TypeToken) -> Result<()> {
        for param in [Param::Length, Param::Precision, Param::Scale] {
            let value = self.get(param);
            match (token.requirement(param), value) {
                (Requirement::Required, None) => {
                    return Err(DdlError::invalid_model(format!(
                        "{token} requires a {} parameter",
                        param_name(param)
                    )));
                }
                (Requirement::Forbidden, Some(_)) => {
                    return Err(DdlError::invalid_model(format!(
                        "{token} does not accept a {} parameter",
                        param_name(param)
                    )));
                }
                (_, Some(0)) if param != Param::Scale => {
                    return Err(DdlError::invalid_model(format!(
                        "{token} {} must be at least 1",
                        param_name(param)
                    )));
                }
                _ => {}
            }
        }
        if let (Some(precision), Some(scale)) = (self.precision, self.scale) {
            if scale > precision {
                return Err(DdlError::invalid_model(format!(
                    "{token} scale {scale} exceeds precision {precision}"
                )));
            }
        }
        Ok(())
    }
}

const fn param_name(param: Param) -> &'static str {
    match param {
        Param::Length => "length",
        Param::Precision => "precision",
        Param::Scale => "scale",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_parameters() {
        assert_eq!(required_parameters(TypeToken::Varchar), &[Param::Length]);
        assert_eq!(required_parameters(TypeToken::Decimal), &[Param::Precision]);
        assert!(required_parameters(TypeToken::Integer).is_empty());
        assert!(required_parameters(TypeToken::Float).is_empty());
    }

    #[test]
    fn test_required_parameters_agree_with_requirements() {
        for token in TypeToken::ALL {
            for param in [Param::Length, Param::Precision, Param::Scale] {
                let listed = required_parameters(token).contains(&param);
                assert_eq!(
                    listed,
                    token.requirement(param) == Requirement::Required,
                    "{token} {param:?}"
                );
            }
        }
    }

    #[test]
    fn test_validate_missing_length() {
        let err = TypeParams::default().validate(TypeToken::Varchar).unwrap_err();
        assert!(matches!(err, DdlError::InvalidModelDefinition(_)));
        assert!(err.to_string().contains("length"));
    }

    #[test]
    fn test_validate_forbidden_parameter() {
        let params = TypeParams {
            length: Some(10),
            ..TypeParams::default()
        };
        assert!(params.validate(TypeToken::Integer).is_err());
        assert!(params.validate(TypeToken::Varchar).is_ok());
    }

    #[test]
    fn test_validate_decimal() {
        let ok = TypeParams {
            precision: Some(10),
            scale: Some(2),
            ..TypeParams::default()
        };
        assert!(ok.validate(TypeToken::Decimal).is_ok());

        let bad_scale = TypeParams {
            precision: Some(2),
            scale: Some(5),
            ..TypeParams::default()
        };
        assert!(bad_scale.validate(TypeToken::Decimal).is_err());

        let scale_only = TypeParams {
            scale: Some(2),
            ..TypeParams::default()
        };
        assert!(scale_only.validate(TypeToken::Numeric).is_err());
    }

    #[test]
    fn test_validate_zero_length() {
        let params = TypeParams {
            length: Some(0),
            ..TypeParams::default()
        };
        assert!(params.validate(TypeToken::Char).is_err());
    }

    #[test]
    fn test_from_str_round_trip() {
        for token in TypeToken::ALL {
            assert_eq!(token.as_str().parse::<TypeToken>().unwrap(), token);
        }
        assert_eq!("nvarchar".parse::<TypeToken>().unwrap(), TypeToken::NVarchar);
        assert!("VARCHAR2".parse::<TypeToken>().is_err());
    }

    #[test]
    fn test_is_integral() {
        assert!(TypeToken::Long.is_integral());
        assert!(!TypeToken::Decimal.is_integral());
        assert!(!TypeToken::Varchar.is_integral());
    }
}
