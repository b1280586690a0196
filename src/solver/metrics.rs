use lazy_static::lazy_static;
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

// Process wide counters, registered against the default prometheus registry. Per-run numbers
// live in `EvaluationStats` instead.
lazy_static! {
    static ref SOLVES: IntCounterVec = register_int_counter_vec!(
        "dpll_solves_total",
        "Completed solver runs, by outcome",
        &["outcome"]
    )
    .expect("dpll_solves_total registered twice");
    static ref INFERENCES: IntCounterVec = register_int_counter_vec!(
        "dpll_inferences_total",
        "Variables assigned by the search, by the rule that assigned them",
        &["rule"]
    )
    .expect("dpll_inferences_total registered twice");
    static ref CONFLICTS: IntCounter = register_int_counter!(
        "dpll_conflicts_total",
        "Branches abandoned because an empty clause appeared"
    )
    .expect("dpll_conflicts_total registered twice");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rule {
    Unit,
    Pure,
    Branch,
}

impl Rule {
    fn label(self) -> &'static str {
        match self {
            Rule::Unit => "unit",
            Rule::Pure => "pure",
            Rule::Branch => "branch",
        }
    }
}

pub(crate) fn record_inference(rule: Rule) {
    INFERENCES.with_label_values(&[rule.label()]).inc();
}

pub(crate) fn record_conflict() {
    CONFLICTS.inc();
}

pub(crate) fn record_solve(outcome: &str) {
    SOLVES.with_label_values(&[outcome]).inc();
}
