//! Gap detection for finite, unordered domains
//!
//! An enum domain only understands equality: the gaps are simply the members
//! no `==` condition names. Gaps come out in the domain's own (sorted) order.

use super::Domain;
use crate::condition::{Condition, Operand};
use crate::error::{Error, Result};
use crate::value::Value;
use std::collections::BTreeSet;

/// A domain of explicitly listed members
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDomain {
    name: &'static str,
    values: BTreeSet<Value>,
}

impl EnumDomain {
    pub fn new<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            name: "EnumDomain",
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The two-member domain `{true, false}`
    pub fn boolean() -> Self {
        Self {
            name: "BoolDomain",
            values: [Value::Bool(false), Value::Bool(true)].into_iter().collect(),
        }
    }

    pub fn values(&self) -> &BTreeSet<Value> {
        &self.values
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.values.contains(value)
    }
}

impl Domain for EnumDomain {
    /// `EnumDomain` or `BoolDomain`
    fn name(&self) -> &'static str {
        self.name
    }

    /// Any value sharing a variant with some member. Foreign members of the
    /// right type are allowed and ignored by gap analysis.
    fn holds(&self, value: &Value) -> bool {
        self.values.iter().any(|member| member.comparable(value))
    }

    fn compute_gaps(&self, conditions: &[Condition<Value>]) -> Result<Vec<Condition<Value>>> {
        let gaps = enum_gaps(self.name, &self.values, conditions)?;
        tracing::debug!(
            domain = self.name,
            members = self.values.len(),
            conditions = conditions.len(),
            gaps = gaps.len(),
            "computed enum gaps"
        );
        Ok(gaps)
    }
}

/// One `==` condition for every member of `values` not named by `conditions`.
///
/// Any condition other than `==` is rejected with
/// [`Error::UnsupportedCondition`] naming `domain`.
pub fn enum_gaps<T: Ord + Clone>(
    domain: &'static str,
    values: &BTreeSet<T>,
    conditions: &[Condition<T>],
) -> Result<Vec<Condition<T>>> {
    let mut used = BTreeSet::new();
    for condition in conditions {
        match condition {
            Condition::Equality(v) => {
                used.insert(v);
            }
            other => {
                return Err(Error::UnsupportedCondition {
                    domain,
                    condition: other.kind(),
                })
            }
        }
    }

    Ok(values
        .iter()
        .filter(|v| !used.contains(v))
        .cloned()
        .map(Condition::Equality)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::ConditionKind;
    use pretty_assertions::assert_eq;

    fn eq(v: impl Into<Value>) -> Condition<Value> {
        Condition::Equality(v.into())
    }

    #[test]
    fn test_bool_gaps() {
        let gaps = EnumDomain::boolean().compute_gaps(&[eq(false)]).unwrap();
        assert_eq!(gaps, vec![eq(true)]);
    }

    #[test]
    fn test_bool_complete() {
        let gaps = EnumDomain::boolean()
            .compute_gaps(&[eq(true), eq(false), eq(true)])
            .unwrap();
        assert!(gaps.is_empty());
    }

    #[test]
    fn test_no_conditions_leaves_every_member() {
        let domain = EnumDomain::new(["red", "green", "blue"]);
        let gaps = domain.compute_gaps(&[]).unwrap();
        assert_eq!(gaps, vec![eq("blue"), eq("green"), eq("red")]);
    }

    #[test]
    fn test_foreign_values_are_ignored() {
        let domain = EnumDomain::new(["red", "green"]);
        let gaps = domain.compute_gaps(&[eq("purple"), eq("red")]).unwrap();
        assert_eq!(gaps, vec![eq("green")]);
    }

    #[test]
    fn test_rejects_non_equality() {
        let err = EnumDomain::boolean()
            .compute_gaps(&[eq(true), Condition::Inequality(Value::Bool(true))])
            .unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedCondition {
                domain: "BoolDomain",
                condition: ConditionKind::Inequality,
            }
        );
        assert_eq!(
            err.to_string(),
            "BoolDomain does not support Inequality conditions"
        );
    }

    #[test]
    fn test_holds_member_types() {
        let colors = EnumDomain::new(["red", "green"]);
        assert!(colors.holds(&Value::from("purple")));
        assert!(!colors.holds(&Value::Int(1)));
        assert!(EnumDomain::boolean().holds(&Value::Bool(true)));
        assert_eq!(
            EnumDomain::boolean().check(&eq(5i64)),
            Err(Error::ValueType {
                domain: "BoolDomain",
                value: "5".into(),
            })
        );
    }

    #[test]
    fn test_generic_core() {
        let values: BTreeSet<u8> = [1, 2, 3].into_iter().collect();
        let gaps = enum_gaps("EnumDomain", &values, &[Condition::Equality(2)]).unwrap();
        assert_eq!(gaps, vec![Condition::Equality(1), Condition::Equality(3)]);
    }
}
