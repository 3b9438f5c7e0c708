//! Conditions: predicates over a single variable
//!
//! A condition is one of seven closed shapes:
//! - `== v`, `!= v`
//! - `< v`, `<= v`
//! - `> v`, `>= v`
//! - `min - max` (inclusive range)
//!
//! Over a discretely ordered type (see [`Discrete`]) every condition also
//! exposes the inclusive bounds it admits via [`Condition::lowest`] and
//! [`Condition::highest`]. Those bounds drive integer gap detection.
//!
//! Conditions are ordered for gap analysis by their *sort key*, which is the
//! raw operand (range minimum for ranges), not the derived lower bound:
//! `> 5` sorts at 5 even though the smallest value it admits is 6.

use crate::error::{Error, Result};
use crate::value::Value;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A condition operand.
///
/// Operands that are not [`comparable`](Operand::comparable) never satisfy a
/// condition on one another and cannot bound a range together.
pub trait Operand: PartialOrd {
    fn comparable(&self, _other: &Self) -> bool {
        true
    }
}

/// A totally ordered type with a successor and predecessor.
///
/// Both return `None` past the type's bounds.
pub trait Discrete: Operand + Ord + Clone + fmt::Debug {
    fn successor(&self) -> Option<Self>;
    fn predecessor(&self) -> Option<Self>;
}

macro_rules! impl_discrete {
    ($($t:ty),*) => {
        $(
            impl Operand for $t {}

            impl Discrete for $t {
                fn successor(&self) -> Option<Self> {
                    self.checked_add(1)
                }

                fn predecessor(&self) -> Option<Self> {
                    self.checked_sub(1)
                }
            }
        )*
    };
}

impl_discrete!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Operand for bool {}
impl Operand for char {}
impl Operand for String {}

/// Inclusive range bounds, `min <= max`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    min: T,
    max: T,
}

impl<T: Operand + fmt::Display> Interval<T> {
    /// Build a range, rejecting `min > max` and incomparable bounds
    pub fn new(min: T, max: T) -> Result<Self> {
        if !min.comparable(&max) {
            return Err(Error::MixedRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        if min > max {
            return Err(Error::InvalidRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self { min, max })
    }
}

impl<T> Interval<T> {
    /// Caller guarantees `min <= max`
    pub(crate) fn new_unchecked(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> &T {
        &self.min
    }

    pub fn max(&self) -> &T {
        &self.max
    }
}

/// A predicate over one variable's domain
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition<T> {
    Equality(T),
    Inequality(T),
    LessThan(T),
    LessThanOrEqual(T),
    GreaterThan(T),
    GreaterThanOrEqual(T),
    Range(Interval<T>),
}

/// The shape of a condition, without its operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    Equality,
    Inequality,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Range,
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConditionKind::Equality => "Equality",
            ConditionKind::Inequality => "Inequality",
            ConditionKind::LessThan => "LessThan",
            ConditionKind::LessThanOrEqual => "LessThanOrEqual",
            ConditionKind::GreaterThan => "GreaterThan",
            ConditionKind::GreaterThanOrEqual => "GreaterThanOrEqual",
            ConditionKind::Range => "Range",
        };
        write!(f, "{}", name)
    }
}

impl<T: Operand + fmt::Display> Condition<T> {
    /// Inclusive range condition, rejecting `min > max`
    pub fn range(min: T, max: T) -> Result<Self> {
        Interval::new(min, max).map(Condition::Range)
    }
}

impl<T> Condition<T> {
    pub fn kind(&self) -> ConditionKind {
        match self {
            Condition::Equality(_) => ConditionKind::Equality,
            Condition::Inequality(_) => ConditionKind::Inequality,
            Condition::LessThan(_) => ConditionKind::LessThan,
            Condition::LessThanOrEqual(_) => ConditionKind::LessThanOrEqual,
            Condition::GreaterThan(_) => ConditionKind::GreaterThan,
            Condition::GreaterThanOrEqual(_) => ConditionKind::GreaterThanOrEqual,
            Condition::Range(_) => ConditionKind::Range,
        }
    }

    /// The raw constructor operand (range minimum for ranges)
    pub fn sort_key(&self) -> &T {
        match self {
            Condition::Equality(v)
            | Condition::Inequality(v)
            | Condition::LessThan(v)
            | Condition::LessThanOrEqual(v)
            | Condition::GreaterThan(v)
            | Condition::GreaterThanOrEqual(v) => v,
            Condition::Range(interval) => &interval.min,
        }
    }

    /// The operand, or both bounds for a range
    pub fn operands(&self) -> impl Iterator<Item = &T> {
        let max = match self {
            Condition::Range(interval) => Some(&interval.max),
            _ => None,
        };
        std::iter::once(self.sort_key()).chain(max)
    }

    /// Operator symbol, or `None` for ranges which render as `min - max`
    pub fn operator(&self) -> Option<&'static str> {
        match self {
            Condition::Equality(_) => Some("=="),
            Condition::Inequality(_) => Some("!="),
            Condition::LessThan(_) => Some("<"),
            Condition::LessThanOrEqual(_) => Some("<="),
            Condition::GreaterThan(_) => Some(">"),
            Condition::GreaterThanOrEqual(_) => Some(">="),
            Condition::Range(_) => None,
        }
    }

    /// Convert operands with an order-preserving function.
    ///
    /// Range bounds are not re-validated, so `f` must be monotonic.
    pub(crate) fn try_map<U, F>(&self, mut f: F) -> Result<Condition<U>>
    where
        F: FnMut(&T) -> Result<U>,
    {
        Ok(match self {
            Condition::Equality(v) => Condition::Equality(f(v)?),
            Condition::Inequality(v) => Condition::Inequality(f(v)?),
            Condition::LessThan(v) => Condition::LessThan(f(v)?),
            Condition::LessThanOrEqual(v) => Condition::LessThanOrEqual(f(v)?),
            Condition::GreaterThan(v) => Condition::GreaterThan(f(v)?),
            Condition::GreaterThanOrEqual(v) => Condition::GreaterThanOrEqual(f(v)?),
            Condition::Range(interval) => Condition::Range(Interval {
                min: f(&interval.min)?,
                max: f(&interval.max)?,
            }),
        })
    }
}

impl<T: Into<Value>> Condition<T> {
    /// Lift a typed condition into a table condition over [`Value`]
    pub fn into_value(self) -> Condition<Value> {
        match self {
            Condition::Equality(v) => Condition::Equality(v.into()),
            Condition::Inequality(v) => Condition::Inequality(v.into()),
            Condition::LessThan(v) => Condition::LessThan(v.into()),
            Condition::LessThanOrEqual(v) => Condition::LessThanOrEqual(v.into()),
            Condition::GreaterThan(v) => Condition::GreaterThan(v.into()),
            Condition::GreaterThanOrEqual(v) => Condition::GreaterThanOrEqual(v.into()),
            Condition::Range(Interval { min, max }) => Condition::Range(Interval {
                min: min.into(),
                max: max.into(),
            }),
        }
    }
}

impl<T: Operand> Condition<T> {
    /// Does `x` satisfy this condition?
    ///
    /// A value not comparable with the operands matches nothing, `!=` included.
    pub fn matches(&self, x: &T) -> bool {
        if !self.operands().all(|v| v.comparable(x)) {
            return false;
        }
        match self {
            Condition::Equality(v) => x == v,
            Condition::Inequality(v) => x != v,
            Condition::LessThan(v) => x < v,
            Condition::LessThanOrEqual(v) => x <= v,
            Condition::GreaterThan(v) => x > v,
            Condition::GreaterThanOrEqual(v) => x >= v,
            Condition::Range(interval) => *x >= interval.min && *x <= interval.max,
        }
    }
}

impl<T: Discrete> Condition<T> {
    /// True for `< v` at the type's minimum and `> v` at its maximum
    pub fn is_empty(&self) -> bool {
        match self {
            Condition::LessThan(v) => v.predecessor().is_none(),
            Condition::GreaterThan(v) => v.successor().is_none(),
            _ => false,
        }
    }

    /// Smallest admitted value, `None` when unbounded below.
    ///
    /// An empty `> v` also has no lowest value; check [`Condition::is_empty`]
    /// first.
    pub fn lowest(&self) -> Option<T> {
        match self {
            Condition::LessThan(_) | Condition::LessThanOrEqual(_) | Condition::Inequality(_) => {
                None
            }
            Condition::GreaterThan(v) => v.successor(),
            Condition::GreaterThanOrEqual(v) | Condition::Equality(v) => Some(v.clone()),
            Condition::Range(interval) => Some(interval.min.clone()),
        }
    }

    /// Largest admitted value, `None` when unbounded above (or an empty `< v`)
    pub fn highest(&self) -> Option<T> {
        match self {
            Condition::GreaterThan(_)
            | Condition::GreaterThanOrEqual(_)
            | Condition::Inequality(_) => None,
            Condition::LessThan(v) => v.predecessor(),
            Condition::LessThanOrEqual(v) | Condition::Equality(v) => Some(v.clone()),
            Condition::Range(interval) => Some(interval.max.clone()),
        }
    }
}

/// Order conditions for a boundary sweep.
///
/// Every `!= v` is split into `< v` followed by `> v`, since the two halves are
/// disjoint and cannot share one position in the sweep. The result is sorted
/// by [`Condition::sort_key`]; equal keys keep their relative order.
pub fn sort_conditions<T: Ord + Clone>(conditions: &[Condition<T>]) -> Vec<Condition<T>> {
    let mut expanded = Vec::with_capacity(conditions.len());
    for condition in conditions {
        match condition {
            Condition::Inequality(v) => {
                expanded.push(Condition::LessThan(v.clone()));
                expanded.push(Condition::GreaterThan(v.clone()));
            }
            other => expanded.push(other.clone()),
        }
    }
    expanded.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
    expanded
}

impl<T: fmt::Display> fmt::Display for Condition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Range(interval) => write!(f, "{} - {}", interval.min, interval.max),
            Condition::Equality(v)
            | Condition::Inequality(v)
            | Condition::LessThan(v)
            | Condition::LessThanOrEqual(v)
            | Condition::GreaterThan(v)
            | Condition::GreaterThanOrEqual(v) => {
                write!(f, "{} {}", self.operator().unwrap_or_default(), v)
            }
        }
    }
}

type Build = fn(Value) -> Condition<Value>;

// Two-character operators first so "<=" is not read as "<" followed by "=5"
const OPERATORS: [(&str, Build); 6] = [
    ("==", Condition::Equality),
    ("!=", Condition::Inequality),
    ("<=", Condition::LessThanOrEqual),
    (">=", Condition::GreaterThanOrEqual),
    ("<", Condition::LessThan),
    (">", Condition::GreaterThan),
];

/// Parses the text produced by `Display`: `"> 5"`, `"== eu"`, `"3 - 8"`.
impl FromStr for Condition<Value> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        for (op, build) in OPERATORS {
            if let Some(rest) = text.strip_prefix(op) {
                return Ok(build(rest.parse()?));
            }
        }
        if let Some((min, max)) = text.split_once(" - ") {
            return Condition::range(min.parse()?, max.parse()?);
        }
        Err(Error::ConditionParse(format!(
            "expected an operator or `min - max`, got {:?}",
            text
        )))
    }
}

impl<T: fmt::Display> Serialize for Condition<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Condition<Value> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
