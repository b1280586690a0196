mod assignment;
mod config;
mod dpll;
mod metrics;
mod pure_literal;
mod substitution;
mod trace;
mod unit_propagator;
mod variable_selection;

mod dfs;
#[cfg(test)]
mod properties;

pub use crate::solver::assignment::{Assignment, EvaluationResult};
pub use crate::solver::config::SolverConfig;
pub use crate::solver::dfs::*;
pub use crate::solver::dpll::{Dpll, Outcome};
pub use crate::solver::substitution::substitute;
pub use crate::solver::trace::{EventKind, EventType, Trace, TraceEvent, TraceStep};
pub use crate::solver::variable_selection::select_variable;
