//! Error types for truthiness

use crate::condition::ConditionKind;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Truthiness errors
///
/// All of these are contract violations surfaced to the caller; nothing here
/// is transient or worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{domain} does not support {condition} conditions")]
    UnsupportedCondition {
        domain: &'static str,
        condition: ConditionKind,
    },

    #[error("Invalid range: {min} is greater than {max}")]
    InvalidRange { min: String, max: String },

    #[error("Range bounds {min} and {max} are not comparable")]
    MixedRange { min: String, max: String },

    #[error("Integer gap analysis requires at least one condition")]
    EmptyConditions,

    #[error("{domain} cannot hold value {value}")]
    ValueType { domain: &'static str, value: String },

    #[error("Duplicate variable: {0}")]
    DuplicateVariable(String),

    #[error("Row does not match declared variables (missing: {missing:?}, unexpected: {unexpected:?})")]
    RowShape {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("Condition parse error: {0}")]
    ConditionParse(String),

    #[error("Table spec parse error: {0}")]
    SpecParse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}
