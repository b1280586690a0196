use fnv::FnvHashMap;
use log::trace;

use crate::instance::*;

use super::assignment::Assignment;
use super::dfs::EvaluationStats;
use super::metrics::{self, Rule};
use super::substitution::substitute;
use super::trace::{EventKind, Trace};

pub(crate) struct PureLiteralEliminator<'a> {
    trace: &'a mut Trace,
    stats: &'a mut EvaluationStats,
}

impl<'a> PureLiteralEliminator<'a> {
    pub(crate) fn new(
        trace: &'a mut Trace,
        stats: &'a mut EvaluationStats,
    ) -> PureLiteralEliminator<'a> {
        PureLiteralEliminator { trace, stats }
    }

    /// Fixes pure variables one at a time, recounting polarities over the whole formula after
    /// each substitution, until none are left. Making a pure literal true only ever removes
    /// clauses, so this cannot produce an empty clause.
    pub(crate) fn eliminate(
        &mut self,
        mut formula: Formula,
        mut assignment: Assignment,
    ) -> (Formula, Assignment) {
        while let Some(literal) = find_pure(&formula, &assignment) {
            trace!("pure: {:?}", literal);
            self.trace
                .record(EventKind::Pure(literal), &formula, &assignment);
            self.stats.pure_literal_count += 1;
            metrics::record_inference(Rule::Pure);

            assignment.add(literal);
            formula = substitute(&formula, literal.var(), literal.polarity());
        }
        (formula, assignment)
    }
}

#[derive(Default)]
struct Occurrences {
    positive: usize,
    negative: usize,
}

/// The next pure literal, if any. Variables seen only positively are preferred over variables
/// seen only negatively; within each group the first to occur in the formula wins.
fn find_pure(formula: &Formula, assignment: &Assignment) -> Option<Literal> {
    let mut order = vec![];
    let mut counts: FnvHashMap<Variable, Occurrences> = FnvHashMap::default();
    for literal in formula.literals() {
        let entry = counts.entry(literal.var()).or_insert_with(|| {
            order.push(literal.var());
            Occurrences::default()
        });
        if literal.polarity() {
            entry.positive += 1;
        } else {
            entry.negative += 1;
        }
    }

    let pure_with = |polarity: bool| {
        order.iter().copied().find(|var| {
            let occ = &counts[var];
            let pure = if polarity {
                occ.negative == 0
            } else {
                occ.positive == 0
            };
            pure && !assignment.is_assigned(*var)
        })
    };

    pure_with(true)
        .map(Variable::positive)
        .or_else(|| pure_with(false).map(Variable::negative))
}
