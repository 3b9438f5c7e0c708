//! Completeness Analysis for Decision Table Variables
//!
//! Given the conditions a table actually uses for one variable, a domain
//! computes the *gaps*: conditions describing every value of the variable
//! that no supplied condition matches.
//!
//! ## Submodules
//!
//! - `enumeration` - finite unordered domains (set difference)
//! - `integer` - discrete ordered domains (boundary sweep)
//!
//! ## Example
//!
//! ```ignore
//! use truthiness::completeness::{Domain, IntegerDomain};
//!
//! let used = vec![Condition::LessThan(Value::Int(0)), Condition::GreaterThan(Value::Int(10))];
//! let gaps = IntegerDomain.compute_gaps(&used)?;
//! // gaps == [0 - 10]
//! ```

mod enumeration;
mod integer;

use crate::condition::Condition;
use crate::error::{Error, Result};
use crate::value::Value;

pub use enumeration::{enum_gaps, EnumDomain};
pub use integer::{integer_gaps, IntegerDomain};

/// The set of legal values for a variable
pub trait Domain: std::fmt::Debug {
    /// Name used in diagnostics
    fn name(&self) -> &'static str;

    /// Is `value` of the type this domain holds?
    fn holds(&self, value: &Value) -> bool;

    /// Reject a condition with an operand this domain cannot hold
    fn check(&self, condition: &Condition<Value>) -> Result<()> {
        match condition.operands().find(|v| !self.holds(v)) {
            Some(value) => Err(Error::ValueType {
                domain: self.name(),
                value: value.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Conditions covering every domain value that none of `conditions` match
    fn compute_gaps(&self, conditions: &[Condition<Value>]) -> Result<Vec<Condition<Value>>>;
}
