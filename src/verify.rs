use crate::instance::Formula;
use crate::solver::{Assignment, EvaluationResult};

/// Checks `assignment` against every clause of `formula`. A clause only counts as satisfied if
/// one of its literals is assigned and true; unassigned variables never satisfy anything.
pub fn check_satisfiability(formula: &Formula, assignment: &Assignment) -> bool {
    formula
        .clauses()
        .iter()
        .all(|clause| assignment.evaluate(clause) == EvaluationResult::True)
}
