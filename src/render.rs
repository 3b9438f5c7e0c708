//! Text rendering for tables and gap reports
//!
//! ```text
//!          a |         c |    result
//! ---------------------------------
//!    == true |       < 6 |     "woo"
//! ```

use crate::table::{DecisionTable, GapReport};
use std::fmt;

const COLUMN_WIDTH: usize = 10;

impl<R: fmt::Display> fmt::Display for DecisionTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for variable in self.variables() {
            write!(f, "{:>width$} |", variable.name(), width = COLUMN_WIDTH)?;
        }
        writeln!(f, "{:>width$}", "result", width = COLUMN_WIDTH)?;
        writeln!(
            f,
            "{}",
            "-".repeat((COLUMN_WIDTH + 1) * (self.variables().len() + 1))
        )?;

        for row in self.rows() {
            for (_, condition) in row.conditions() {
                write!(
                    f,
                    "{:>width$} |",
                    condition.to_string(),
                    width = COLUMN_WIDTH
                )?;
            }
            writeln!(
                f,
                "{:>width$}",
                row.result().to_string(),
                width = COLUMN_WIDTH
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for GapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.variables {
            if entry.gaps.is_empty() {
                writeln!(f, "{}: complete", entry.variable)?;
            } else {
                let gaps: Vec<String> = entry.gaps.iter().map(|g| g.to_string()).collect();
                writeln!(f, "{}: {}", entry.variable, gaps.join(", "))?;
            }
        }
        Ok(())
    }
}
