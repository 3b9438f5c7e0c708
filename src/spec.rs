//! Declarative table definitions
//!
//! A `TableSpec` describes a decision table's variables and rows in YAML or
//! JSON. Conditions use the same text form they render with.
//!
//! ## Example Spec
//!
//! ```yaml
//! id: shipping
//! variables:
//!   - name: express
//!     type: bool
//!   - name: weight
//!     type: int
//!   - name: region
//!     type: enum
//!     values: [eu, us]
//! rows:
//!   - when: { express: "== true", weight: "< 10", region: "== eu" }
//!     then: 5
//!   - when: { express: "== false", weight: ">= 10", region: "== us" }
//!     then: 12
//! ```

use crate::completeness::{Domain, EnumDomain, IntegerDomain};
use crate::condition::Condition;
use crate::error::{Error, Result};
use crate::table::{DecisionTable, Variable};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A complete table definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Table columns, in order
    pub variables: Vec<VariableSpec>,

    /// Rows, in priority order
    #[serde(default)]
    pub rows: Vec<RowSpec>,
}

/// A declared variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableSpec {
    pub name: String,

    #[serde(rename = "type")]
    pub typ: DomainType,

    /// For enums: the members
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Value>>,
}

/// Domain kinds a spec can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainType {
    Bool,
    Int,
    Enum,
}

/// A row: conditions keyed by variable name, and the result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowSpec {
    pub when: BTreeMap<String, Condition<Value>>,

    pub then: Value,
}

impl VariableSpec {
    /// Instantiate the declared domain
    pub fn domain(&self) -> Result<Box<dyn Domain>> {
        match (self.typ, &self.values) {
            (DomainType::Bool, None) => Ok(Box::new(EnumDomain::boolean())),
            (DomainType::Int, None) => Ok(Box::new(IntegerDomain)),
            (DomainType::Enum, Some(values)) if !values.is_empty() => {
                Ok(Box::new(EnumDomain::new(values.iter().cloned())))
            }
            (DomainType::Enum, _) => Err(Error::SpecParse(format!(
                "enum variable `{}` needs a non-empty `values` list",
                self.name
            ))),
            (_, Some(_)) => Err(Error::SpecParse(format!(
                "`values` is only allowed on enum variables (`{}`)",
                self.name
            ))),
        }
    }
}

impl TableSpec {
    /// Parse spec from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_norway::from_str(yaml).map_err(|e| Error::SpecParse(e.to_string()))
    }

    /// Serialize spec to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_norway::to_string(self).map_err(|e| Error::Serialize(e.to_string()))
    }

    /// Parse spec from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::SpecParse(e.to_string()))
    }

    /// Serialize spec to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialize(e.to_string()))
    }

    /// Build the table, appending rows in order
    pub fn build(&self) -> Result<DecisionTable<Value>> {
        let variables = self
            .variables
            .iter()
            .map(|v| -> Result<Variable> {
                Ok(Variable::from_boxed(v.name.clone(), v.domain()?))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut table = DecisionTable::new(variables)?;
        for row in &self.rows {
            table.add_row(
                row.when
                    .iter()
                    .map(|(name, condition)| (name.clone(), condition.clone())),
                row.then.clone(),
            )?;
        }
        tracing::debug!(
            id = self.id.as_deref().unwrap_or("<anonymous>"),
            variables = self.variables.len(),
            rows = self.rows.len(),
            "built decision table"
        );
        Ok(table)
    }
}
