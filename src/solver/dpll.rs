use std::mem;

use log::{debug, info, trace};

use crate::instance::*;

use super::assignment::Assignment;
use super::config::SolverConfig;
use super::dfs::EvaluationStats;
use super::metrics::{self, Rule};
use super::pure_literal::PureLiteralEliminator;
use super::substitution::substitute;
use super::trace::{EventKind, Trace, EMPTY_CLAUSE_REASON};
use super::unit_propagator::{PropagationResult, UnitPropagator};
use super::variable_selection::select_variable;

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Satisfied(Assignment),
    Unsatisfiable,
    /// The run was stopped by the interrupt flag or the decision limit before it could decide.
    Interrupted,
}

impl Outcome {
    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            Outcome::Satisfied(assignment) => Some(assignment),
            _ => None,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        matches!(self, Outcome::Satisfied(_))
    }

    pub fn is_unsatisfiable(&self) -> bool {
        matches!(self, Outcome::Unsatisfiable)
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Outcome::Satisfied(_) => "sat",
            Outcome::Unsatisfiable => "unsat",
            Outcome::Interrupted => "interrupted",
        }
    }
}

/// Recursive DPLL search. Every call owns its formula and assignment and hands copies down to
/// its branches, so a failed branch is undone simply by dropping it.
///
/// Recursion depth is bounded by the number of distinct variables in the formula, as every
/// branch assigns one more variable before recursing.
#[derive(Debug, Clone, Default)]
pub struct Dpll {
    config: SolverConfig,
    trace: Trace,
    stats: EvaluationStats,
}

impl Dpll {
    pub fn new(config: SolverConfig) -> Dpll {
        Dpll {
            config,
            trace: Trace::new(),
            stats: EvaluationStats::default(),
        }
    }

    /// Decides `formula`. The trace and stats from any previous call are discarded.
    ///
    /// A satisfying assignment covers every variable of `formula`: variables the search never had
    /// to fix are set to false.
    pub fn solve(&mut self, formula: Formula) -> Outcome {
        self.trace = if self.config.record_trace {
            Trace::new()
        } else {
            Trace::disabled()
        };
        self.stats = EvaluationStats::default();
        debug!(
            "searching {} clauses, {} literals",
            formula.len(),
            formula.literal_count()
        );

        let variables = formula.variables();
        let outcome = match self.search(formula, Assignment::new(), 0) {
            Outcome::Satisfied(assignment) => {
                Outcome::Satisfied(complete_assignment(assignment, &variables))
            }
            other => other,
        };

        info!(
            "finished search: {} ({} steps, {} decisions)",
            outcome.label(),
            self.stats.step_count,
            self.stats.decision_count
        );
        metrics::record_solve(outcome.label());
        outcome
    }

    /// Events recorded by the most recent `solve`.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn take_trace(&mut self) -> Trace {
        mem::take(&mut self.trace)
    }

    pub fn stats(&self) -> &EvaluationStats {
        &self.stats
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn search(&mut self, formula: Formula, assignment: Assignment, depth: usize) -> Outcome {
        if self.config.interrupted() {
            debug!("interrupted at depth {}", depth);
            return Outcome::Interrupted;
        }
        self.stats.step_count += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        self.trace.record(EventKind::Check, &formula, &assignment);

        if formula.is_empty() {
            return Outcome::Satisfied(assignment);
        }
        if formula.has_empty_clause() {
            debug!("empty clause at depth {}, backtracking", depth);
            self.trace.record(
                EventKind::Backtrack(EMPTY_CLAUSE_REASON.to_string()),
                &formula,
                &assignment,
            );
            self.stats.backtrack_count += 1;
            return Outcome::Unsatisfiable;
        }

        let (formula, assignment) = match UnitPropagator::new(&mut self.trace, &mut self.stats)
            .propagate_units(formula, assignment)
        {
            PropagationResult::Propagated {
                formula,
                assignment,
            } => (formula, assignment),
            PropagationResult::Conflicted { .. } => return Outcome::Unsatisfiable,
        };

        let (formula, assignment) = if self.config.pure_literal_elimination {
            PureLiteralEliminator::new(&mut self.trace, &mut self.stats)
                .eliminate(formula, assignment)
        } else {
            (formula, assignment)
        };

        let var = match select_variable(&formula) {
            Some(var) => var,
            None => {
                // Only an empty formula has no literals here: empty clauses were ruled out above.
                debug_assert!(
                    formula.is_empty(),
                    "clauses remain without literals: {:?}",
                    formula
                );
                return if formula.is_empty() {
                    Outcome::Satisfied(assignment)
                } else {
                    Outcome::Unsatisfiable
                };
            }
        };

        for value in [true, false] {
            if self.config.decisions_exhausted(self.stats.decision_count) {
                debug!("decision limit reached at depth {}", depth);
                return Outcome::Interrupted;
            }
            let literal = Literal::new(var, value);
            trace!("branch: {:?} at depth {}", literal, depth);
            self.trace
                .record(EventKind::Branch(literal), &formula, &assignment);
            self.stats.decision_count += 1;
            metrics::record_inference(Rule::Branch);

            let branch = self.search(
                substitute(&formula, var, value),
                assignment.with(var, value),
                depth + 1,
            );
            match branch {
                Outcome::Unsatisfiable => continue,
                resolved => return resolved,
            }
        }
        Outcome::Unsatisfiable
    }
}

fn complete_assignment(mut assignment: Assignment, variables: &[Variable]) -> Assignment {
    for &var in variables {
        if !assignment.is_assigned(var) {
            assignment.assign(var, false);
        }
    }
    assignment
}
