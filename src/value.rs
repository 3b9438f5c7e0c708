//! Cell values
//!
//! A `Value` is the scalar a table variable takes at evaluation time and the
//! operand stored inside a table condition. Each domain accepts exactly one
//! of the variants: `IntegerDomain` only `Int`, `EnumDomain` whatever its
//! declared members are.

use crate::condition::Operand;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A scalar table value
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl Value {
    /// The integer payload, if this is an `Int`
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The boolean payload, if this is a `Bool`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Only values of the same variant compare
impl Operand for Value {
    fn comparable(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Str(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// Parses the operand text used in condition strings.
///
/// `true`/`false` become `Bool`, integer literals become `Int`, and anything
/// else becomes `Str` with one pair of surrounding double quotes removed.
impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::ConditionParse("missing value".into()));
        }
        match s {
            "true" => return Ok(Value::Bool(true)),
            "false" => return Ok(Value::Bool(false)),
            _ => {}
        }
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Value::Int(i));
        }
        let unquoted = s
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(s);
        Ok(Value::Str(unquoted.to_string()))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalars() {
        assert_eq!("true".parse::<Value>().unwrap(), Value::Bool(true));
        assert_eq!(" -12 ".parse::<Value>().unwrap(), Value::Int(-12));
        assert_eq!("eu".parse::<Value>().unwrap(), Value::Str("eu".into()));
        assert_eq!(
            "\"two words\"".parse::<Value>().unwrap(),
            Value::Str("two words".into())
        );
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert!(matches!(
            "   ".parse::<Value>(),
            Err(Error::ConditionParse(_))
        ));
    }

    #[test]
    fn test_display_quotes_strings() {
        assert_eq!(Value::Str("eu".into()).to_string(), "\"eu\"");
        assert_eq!(Value::Int(5).to_string(), "5");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_quoted_keyword_stays_string() {
        // Quoting only strips once; the payload is not re-interpreted
        assert_eq!(
            "\"true\"".parse::<Value>().unwrap(),
            Value::Str("true".into())
        );
    }

    #[test]
    fn test_comparable_by_variant() {
        assert!(Value::Int(1).comparable(&Value::Int(-7)));
        assert!(Value::from("a").comparable(&Value::from("b")));
        assert!(!Value::Int(1).comparable(&Value::Bool(true)));
        assert!(!Value::Bool(false).comparable(&Value::from("false")));
    }

    #[test]
    fn test_yaml_untagged() {
        let values: Vec<Value> = serde_norway::from_str("[true, 3, red]").unwrap();
        assert_eq!(
            values,
            vec![Value::Bool(true), Value::Int(3), Value::Str("red".into())]
        );
    }
}
