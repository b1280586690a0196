use log::{debug, trace};

use crate::instance::*;

use super::assignment::Assignment;
use super::dfs::EvaluationStats;
use super::metrics::{self, Rule};
use super::substitution::substitute;
use super::trace::{EventKind, Trace, UNIT_CONFLICT_REASON};

pub(crate) struct UnitPropagator<'a> {
    trace: &'a mut Trace,
    stats: &'a mut EvaluationStats,
}

impl<'a> UnitPropagator<'a> {
    pub(crate) fn new(trace: &'a mut Trace, stats: &'a mut EvaluationStats) -> UnitPropagator<'a> {
        UnitPropagator { trace, stats }
    }

    /// Resolves unit clauses one at a time until none remain or an empty clause appears. The
    /// scan always restarts from the first clause, as substitution reshapes the clause list.
    pub(crate) fn propagate_units(
        &mut self,
        mut formula: Formula,
        mut assignment: Assignment,
    ) -> PropagationResult {
        while let Some(literal) = find_unit(&formula) {
            trace!("unit: {:?}", literal);
            self.trace
                .record(EventKind::Unit(literal), &formula, &assignment);
            self.stats.unit_prop_count += 1;
            metrics::record_inference(Rule::Unit);

            assignment.add(literal);
            formula = substitute(&formula, literal.var(), literal.polarity());

            if formula.has_empty_clause() {
                debug!("conflict after propagating {:?}", literal);
                self.trace.record(
                    EventKind::Conflict(UNIT_CONFLICT_REASON.to_string()),
                    &formula,
                    &assignment,
                );
                self.stats.conflict_count += 1;
                metrics::record_conflict();
                return PropagationResult::Conflicted { assignment };
            }
        }
        PropagationResult::Propagated {
            formula,
            assignment,
        }
    }
}

fn find_unit(formula: &Formula) -> Option<Literal> {
    formula.clauses().iter().find_map(Clause::unit)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PropagationResult {
    Propagated {
        formula: Formula,
        assignment: Assignment,
    },
    /// The assignment that produced the empty clause, kept for inspection.
    Conflicted { assignment: Assignment },
}
