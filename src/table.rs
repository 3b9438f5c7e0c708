//! Decision tables
//!
//! A table declares its variables up front, each with a [`Domain`], and then
//! grows by appending rows. A row supplies one condition per variable plus a
//! result. Row order is priority order: [`DecisionTable::evaluate`] returns
//! the result of the first row whose conditions all match.
//!
//! [`DecisionTable::report_gaps`] runs each variable's domain over the
//! conditions the rows use for it. Gaps are reported per variable only;
//! joint uncovered combinations across several variables are not computed.

use crate::completeness::Domain;
use crate::condition::Condition;
use crate::error::{Error, Result};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

/// A named table column restricted to a domain
#[derive(Debug)]
pub struct Variable {
    name: String,
    domain: Box<dyn Domain>,
}

impl Variable {
    pub fn new(name: impl Into<String>, domain: impl Domain + 'static) -> Self {
        Self {
            name: name.into(),
            domain: Box::new(domain),
        }
    }

    pub fn from_boxed(name: impl Into<String>, domain: Box<dyn Domain>) -> Self {
        Self {
            name: name.into(),
            domain,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> &dyn Domain {
        self.domain.as_ref()
    }
}

/// One table entry: a condition per variable and a result
#[derive(Debug, Clone, PartialEq)]
pub struct Row<R> {
    /// In variable declaration order
    conditions: Vec<(String, Condition<Value>)>,
    result: R,
}

impl<R> Row<R> {
    /// The condition this row places on `variable`
    pub fn get(&self, variable: &str) -> Option<&Condition<Value>> {
        self.conditions
            .iter()
            .find(|(name, _)| name == variable)
            .map(|(_, condition)| condition)
    }

    pub fn conditions(&self) -> &[(String, Condition<Value>)] {
        &self.conditions
    }

    pub fn result(&self) -> &R {
        &self.result
    }

    fn matches(&self, values: &HashMap<String, Value>) -> bool {
        self.conditions.iter().all(|(name, condition)| {
            values
                .get(name)
                .is_some_and(|value| condition.matches(value))
        })
    }
}

/// Gaps found for a single variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableGaps {
    pub variable: String,
    pub gaps: Vec<Condition<Value>>,
}

/// Per-variable gap report for a table
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GapReport {
    /// In variable declaration order
    pub variables: Vec<VariableGaps>,
}

impl GapReport {
    /// True when no variable has a gap
    pub fn is_complete(&self) -> bool {
        self.variables.iter().all(|v| v.gaps.is_empty())
    }

    pub fn get(&self, variable: &str) -> Option<&[Condition<Value>]> {
        self.variables
            .iter()
            .find(|v| v.variable == variable)
            .map(|v| v.gaps.as_slice())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialize(e.to_string()))
    }
}

/// A decision table with results of type `R`
#[derive(Debug)]
pub struct DecisionTable<R> {
    variables: Vec<Variable>,
    rows: Vec<Row<R>>,
}

impl<R> DecisionTable<R> {
    /// Create an empty table. Variable names must be unique.
    pub fn new(variables: impl IntoIterator<Item = Variable>) -> Result<Self> {
        let variables: Vec<Variable> = variables.into_iter().collect();
        let mut seen = HashSet::new();
        for variable in &variables {
            if !seen.insert(variable.name.as_str()) {
                return Err(Error::DuplicateVariable(variable.name.clone()));
            }
        }
        Ok(Self {
            variables,
            rows: Vec::new(),
        })
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn rows(&self) -> &[Row<R>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row.
    ///
    /// The supplied variable names must be exactly the declared ones, and each
    /// condition's operands must be of the type its variable's domain holds.
    /// Rows may overlap; earlier rows win at evaluation time.
    pub fn add_row<K, I>(&mut self, conditions: I, result: R) -> Result<()>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Condition<Value>)>,
    {
        let mut supplied: HashMap<String, Condition<Value>> = conditions
            .into_iter()
            .map(|(name, condition)| (name.into(), condition))
            .collect();

        let missing: Vec<String> = self
            .variables
            .iter()
            .filter(|v| !supplied.contains_key(&v.name))
            .map(|v| v.name.clone())
            .collect();
        let declared: HashSet<&str> = self.variables.iter().map(|v| v.name.as_str()).collect();
        let unexpected: BTreeSet<String> = supplied
            .keys()
            .filter(|name| !declared.contains(name.as_str()))
            .cloned()
            .collect();
        if !missing.is_empty() || !unexpected.is_empty() {
            return Err(Error::RowShape {
                missing,
                unexpected: unexpected.into_iter().collect(),
            });
        }

        let mut ordered = Vec::with_capacity(self.variables.len());
        for variable in &self.variables {
            if let Some(condition) = supplied.remove(&variable.name) {
                variable.domain.check(&condition)?;
                ordered.push((variable.name.clone(), condition));
            }
        }
        self.rows.push(Row {
            conditions: ordered,
            result,
        });
        Ok(())
    }

    /// Result of the first row whose conditions all match `values`.
    ///
    /// A variable missing from `values`, or holding a value of another type,
    /// fails any condition on it.
    pub fn evaluate(&self, values: &HashMap<String, Value>) -> Option<&R> {
        let (index, row) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.matches(values))?;
        tracing::trace!(row = index, "evaluate matched");
        Some(&row.result)
    }

    /// Conditions used for `variable`, in row order
    pub fn conditions_for(&self, variable: &str) -> Option<Vec<Condition<Value>>> {
        if !self.variables.iter().any(|v| v.name == variable) {
            return None;
        }
        Some(
            self.rows
                .iter()
                .filter_map(|row| row.get(variable).cloned())
                .collect(),
        )
    }

    /// Gaps for each variable, computed independently.
    ///
    /// Fails with the first domain error, e.g. an integer variable in a table
    /// with no rows, or a non-`==` condition on an enum variable.
    pub fn report_gaps(&self) -> Result<GapReport> {
        let mut report = GapReport::default();
        for (position, variable) in self.variables.iter().enumerate() {
            let used: Vec<Condition<Value>> = self
                .rows
                .iter()
                .map(|row| row.conditions[position].1.clone())
                .collect();
            let gaps = variable.domain.compute_gaps(&used)?;
            tracing::debug!(
                variable = %variable.name,
                conditions = used.len(),
                gaps = gaps.len(),
                "variable gaps"
            );
            report.variables.push(VariableGaps {
                variable: variable.name.clone(),
                gaps,
            });
        }
        Ok(report)
    }
}
