// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # Truthiness: decision tables with coverage-gap analysis
//!
//! A decision table maps typed variables to results through rows of
//! conditions. Truthiness checks such a table for *exhaustiveness*, the way a
//! compiler checks that a `match` covers every case: for each variable it
//! computes the gaps, i.e. the conditions describing values no row addresses.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use truthiness::{Condition, DecisionTable, EnumDomain, IntegerDomain, Value, Variable};
//!
//! let mut table = DecisionTable::new([
//!     Variable::new("express", EnumDomain::boolean()),
//!     Variable::new("weight", IntegerDomain),
//! ])?;
//! table.add_row(
//!     [("express", "== true".parse()?), ("weight", "< 10".parse()?)],
//!     "small express",
//! )?;
//!
//! let report = table.report_gaps()?;
//! // express: == false
//! // weight: >= 10
//! println!("{}", report);
//! ```
//!
//! ## Domains
//!
//! | Domain | Conditions | Gap strategy |
//! |--------|------------|--------------|
//! | `EnumDomain` / `EnumDomain::boolean()` | `==` only | members not named |
//! | `IntegerDomain` | all seven shapes | sorted boundary sweep |
//!
//! Integer gaps prefer complements that reuse the boundary the table already
//! uses: the gap left by `> 5` is `<= 5`, not `< 6`. A single skipped value is
//! reported as `==`, a run of them as a range.
//!
//! Each domain holds one scalar type. `add_row` rejects operands of another
//! type, and at evaluation time a value of another type matches nothing.
//!
//! ## Limitations
//!
//! Gaps are reported per variable. Combinations that are covered variable by
//! variable but not jointly (e.g. `a == true && b == false` when rows only
//! cover `(true, true)` and `(false, false)`) are not detected.

pub mod completeness;
pub mod condition;
pub mod error;
pub mod render;
pub mod spec;
pub mod table;
pub mod value;

// Re-exports
pub use completeness::{enum_gaps, integer_gaps, Domain, EnumDomain, IntegerDomain};
pub use condition::{sort_conditions, Condition, ConditionKind, Discrete, Interval, Operand};
pub use error::{Error, Result};
pub use spec::{DomainType, RowSpec, TableSpec, VariableSpec};
pub use table::{DecisionTable, GapReport, Row, Variable, VariableGaps};
pub use value::Value;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
