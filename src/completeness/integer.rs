//! Gap detection for discrete ordered domains
//!
//! The basic strategy:
//! 1. If nothing bounds the low end, add the complement of the lowest condition.
//! 2. If nothing bounds the high end, add the complement of the highest condition.
//! 3. Sweep left to right and fill holes between neighbours with `==` (one
//!    skipped value) or a range (several).
//!
//! End complements are chosen to reference the same number as the condition
//! they complement: the inverse of `> 5` is `<= 5`, not `< 6`.

use super::Domain;
use crate::condition::{sort_conditions, Condition, Discrete, Interval};
use crate::error::{Error, Result};
use crate::value::Value;

/// The domain of 64-bit signed integers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerDomain;

impl Domain for IntegerDomain {
    fn name(&self) -> &'static str {
        "IntegerDomain"
    }

    fn holds(&self, value: &Value) -> bool {
        matches!(value, Value::Int(_))
    }

    fn compute_gaps(&self, conditions: &[Condition<Value>]) -> Result<Vec<Condition<Value>>> {
        let typed = conditions
            .iter()
            .map(|condition| {
                condition.try_map(|v| {
                    v.as_int().ok_or_else(|| Error::ValueType {
                        domain: "IntegerDomain",
                        value: v.to_string(),
                    })
                })
            })
            .collect::<Result<Vec<Condition<i64>>>>()?;

        let gaps = integer_gaps(&typed)?;
        tracing::debug!(
            conditions = conditions.len(),
            gaps = gaps.len(),
            "computed integer gaps"
        );
        Ok(gaps.into_iter().map(Condition::into_value).collect())
    }
}

/// Conditions covering every value of `T` that none of `conditions` match.
///
/// Requires at least one condition. Empty conditions (`< MIN`, `> MAX`)
/// cover nothing and are dropped before the sweep. Inputs whose upper bounds
/// are not monotonic in sort order (overlaps) can move the sweep's coverage
/// bound backwards; later holes are then measured from that lower bound.
pub fn integer_gaps<T: Discrete>(conditions: &[Condition<T>]) -> Result<Vec<Condition<T>>> {
    let mut sorted = sort_conditions(conditions);
    let Some(placeholder) = sorted.first().cloned() else {
        return Err(Error::EmptyConditions);
    };
    sorted.retain(|condition| !condition.is_empty());

    let (first, last) = match (sorted.first(), sorted.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            // Nothing is covered: the complement of an empty condition is
            // the whole type
            tracing::debug!(conditions = conditions.len(), "only empty conditions");
            return Ok(vec![match placeholder {
                Condition::GreaterThan(v) => Condition::LessThanOrEqual(v),
                other => Condition::GreaterThanOrEqual(other.sort_key().clone()),
            }]);
        }
    };

    let low_gap = first.lowest().and_then(|low| match first {
        Condition::GreaterThan(v) => Some(Condition::LessThanOrEqual(v.clone())),
        _ => low.predecessor().map(|_| Condition::LessThan(low)),
    });
    let high_gap = last.highest().and_then(|high| match last {
        Condition::LessThan(v) => Some(Condition::GreaterThanOrEqual(v.clone())),
        _ => high.successor().map(|_| Condition::GreaterThan(high)),
    });

    let working: Vec<&Condition<T>> = low_gap
        .iter()
        .chain(sorted.iter())
        .chain(high_gap.iter())
        .collect();
    // Unbounded above from the start means everything past the low gap is
    // covered and the loop below exits immediately
    let mut covered_up_to = working
        .first()
        .and_then(|condition| condition.highest());

    let mut interior = Vec::new();
    for condition in working.iter().skip(1) {
        let Some(covered) = covered_up_to.take() else {
            break;
        };

        match condition.lowest() {
            Some(low) => {
                let hole = covered
                    .successor()
                    .zip(low.predecessor())
                    .filter(|(next, before)| next <= before);
                match hole {
                    Some((next, before)) if next == before => {
                        interior.push(Condition::Equality(next));
                    }
                    Some((next, before)) => {
                        interior.push(Condition::Range(Interval::new_unchecked(next, before)));
                    }
                    None if low <= covered => {
                        tracing::debug!(
                            covered = ?covered,
                            lowest = ?low,
                            "overlapping condition, no gap"
                        );
                    }
                    // contiguous
                    None => {}
                }
            }
            None => {
                tracing::debug!(covered = ?covered, "unbounded-below condition past the first, no gap");
            }
        }

        covered_up_to = condition.highest();
    }

    let mut gaps = Vec::with_capacity(interior.len() + 2);
    gaps.extend(low_gap);
    gaps.extend(interior);
    gaps.extend(high_gap);
    Ok(gaps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use Condition::*;

    fn range(min: i64, max: i64) -> Condition<i64> {
        Condition::range(min, max).unwrap()
    }

    #[test]
    fn test_gaps_gt() {
        assert_eq!(integer_gaps(&[GreaterThan(5)]).unwrap(), vec![LessThanOrEqual(5)]);
    }

    #[test]
    fn test_gaps_gte() {
        assert_eq!(integer_gaps(&[GreaterThanOrEqual(5)]).unwrap(), vec![LessThan(5)]);
    }

    #[test]
    fn test_gaps_lt() {
        assert_eq!(integer_gaps(&[LessThan(5)]).unwrap(), vec![GreaterThanOrEqual(5)]);
    }

    #[test]
    fn test_gaps_lte() {
        assert_eq!(integer_gaps(&[LessThanOrEqual(5)]).unwrap(), vec![GreaterThan(5)]);
    }

    #[test]
    fn test_gaps_middle() {
        assert_eq!(
            integer_gaps(&[LessThan(0), GreaterThan(10)]).unwrap(),
            vec![range(0, 10)]
        );
    }

    #[test]
    fn test_gaps_range() {
        assert_eq!(
            integer_gaps(&[range(0, 10)]).unwrap(),
            vec![LessThan(0), GreaterThan(10)]
        );
    }

    #[test]
    fn test_gaps_eq() {
        assert_eq!(
            integer_gaps(&[Equality(0)]).unwrap(),
            vec![LessThan(0), GreaterThan(0)]
        );
    }

    #[test]
    fn test_gaps_neq() {
        assert_eq!(integer_gaps(&[Inequality(0)]).unwrap(), vec![Equality(0)]);
    }

    #[test]
    fn test_single_value_inner_gap() {
        assert_eq!(
            integer_gaps(&[LessThan(0), GreaterThan(0)]).unwrap(),
            vec![Equality(0)]
        );
    }

    #[test]
    fn test_several_interior_gaps() {
        let gaps = integer_gaps(&[Equality(5), LessThan(0), range(2, 3), GreaterThanOrEqual(10)])
            .unwrap();
        assert_eq!(gaps, vec![range(0, 1), Equality(4), range(6, 9)]);
    }

    #[test]
    fn test_empty_is_error() {
        assert_eq!(integer_gaps::<i64>(&[]), Err(Error::EmptyConditions));
    }

    #[test]
    fn test_overlap_emits_no_inverted_range() {
        assert_eq!(
            integer_gaps(&[range(0, 10), range(5, 20)]).unwrap(),
            vec![LessThan(0), GreaterThan(20)]
        );
    }

    #[test]
    fn test_overlap_can_move_coverage_backwards() {
        // == 5 sits inside 0 - 10 but resets coverage to 5, so 6 - 10 is
        // reported again before == 20
        assert_eq!(
            integer_gaps(&[range(0, 10), Equality(5), Equality(20)]).unwrap(),
            vec![LessThan(0), range(6, 19), GreaterThan(20)]
        );
    }

    #[test]
    fn test_later_unbounded_below_condition() {
        assert_eq!(
            integer_gaps(&[LessThan(0), LessThanOrEqual(5)]).unwrap(),
            vec![GreaterThan(5)]
        );
    }

    #[test]
    fn test_fully_covered() {
        assert!(integer_gaps(&[LessThan(0), GreaterThanOrEqual(0)])
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_empty_condition_at_minimum() {
        assert_eq!(
            integer_gaps(&[LessThan(i64::MIN), GreaterThan(5)]).unwrap(),
            vec![LessThanOrEqual(5)]
        );
    }

    #[test]
    fn test_empty_condition_at_maximum() {
        assert_eq!(
            integer_gaps(&[LessThan(0), GreaterThan(i64::MAX)]).unwrap(),
            vec![GreaterThanOrEqual(0)]
        );
    }

    #[test]
    fn test_only_empty_conditions() {
        assert_eq!(
            integer_gaps(&[LessThan(i64::MIN)]).unwrap(),
            vec![GreaterThanOrEqual(i64::MIN)]
        );
        assert_eq!(
            integer_gaps(&[GreaterThan(i64::MAX)]).unwrap(),
            vec![LessThanOrEqual(i64::MAX)]
        );
    }

    #[test]
    fn test_no_gap_past_type_bounds() {
        assert_eq!(
            integer_gaps(&[Equality(i64::MIN)]).unwrap(),
            vec![GreaterThan(i64::MIN)]
        );
        assert_eq!(
            integer_gaps(&[range(0, i64::MAX)]).unwrap(),
            vec![LessThan(0)]
        );
        assert!(integer_gaps(&[LessThanOrEqual(i64::MAX)]).unwrap().is_empty());
        assert!(integer_gaps(&[GreaterThanOrEqual(i64::MIN)]).unwrap().is_empty());
        assert!(integer_gaps(&[range(i64::MIN, i64::MAX)]).unwrap().is_empty());
    }

    #[test]
    fn test_inequality_at_minimum() {
        // != MIN splits into the empty < MIN and > MIN
        assert_eq!(
            integer_gaps(&[Inequality(i64::MIN)]).unwrap(),
            vec![LessThanOrEqual(i64::MIN)]
        );
    }

    #[test]
    fn test_interior_gap_spanning_narrow_type() {
        assert_eq!(
            integer_gaps(&[LessThan(3u8), GreaterThan(254)]).unwrap(),
            vec![Condition::range(3u8, 254).unwrap()]
        );
        assert_eq!(
            integer_gaps(&[LessThan(0u8), GreaterThan(u8::MAX)]).unwrap(),
            vec![GreaterThanOrEqual(0)]
        );
    }

    #[test]
    fn test_domain_converts_values() {
        let gaps = IntegerDomain
            .compute_gaps(&[Condition::GreaterThan(Value::Int(5))])
            .unwrap();
        assert_eq!(gaps, vec![Condition::LessThanOrEqual(Value::Int(5))]);
    }

    #[test]
    fn test_check_range_operands() {
        let mixed = Condition::Range(Interval::new_unchecked(Value::Int(1), Value::from("9")));
        assert_eq!(
            IntegerDomain.check(&mixed),
            Err(Error::ValueType {
                domain: "IntegerDomain",
                value: "\"9\"".into(),
            })
        );
        assert_eq!(IntegerDomain.check(&Condition::LessThan(Value::Int(3))), Ok(()));
    }

    #[test]
    fn test_domain_rejects_non_integers() {
        let err = IntegerDomain
            .compute_gaps(&[Condition::Equality(Value::Str("five".into()))])
            .unwrap_err();
        assert_eq!(
            err,
            Error::ValueType {
                domain: "IntegerDomain",
                value: "\"five\"".into(),
            }
        );
    }
}
