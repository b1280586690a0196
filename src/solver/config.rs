use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Knobs for a single solver run.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Record every search step into the trace.
    pub record_trace: bool,
    /// Run pure literal elimination after unit propagation.
    pub pure_literal_elimination: bool,
    /// Give up with `Outcome::Interrupted` rather than make more than this many branch decisions.
    pub decision_limit: Option<usize>,
    /// Checked before every search step; setting it stops the run with `Outcome::Interrupted`.
    pub interrupt: Option<Arc<AtomicBool>>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            record_trace: true,
            pure_literal_elimination: true,
            decision_limit: None,
            interrupt: None,
        }
    }
}

impl SolverConfig {
    pub fn with_trace(mut self, record_trace: bool) -> Self {
        self.record_trace = record_trace;
        self
    }

    pub fn with_pure_literal_elimination(mut self, enabled: bool) -> Self {
        self.pure_literal_elimination = enabled;
        self
    }

    pub fn with_decision_limit(mut self, limit: usize) -> Self {
        self.decision_limit = Some(limit);
        self
    }

    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    pub(crate) fn interrupted(&self) -> bool {
        match &self.interrupt {
            Some(flag) => flag.load(Ordering::Relaxed),
            None => false,
        }
    }

    /// Whether another branch decision would go over the limit.
    pub(crate) fn decisions_exhausted(&self, decisions: usize) -> bool {
        matches!(self.decision_limit, Some(limit) if decisions >= limit)
    }
}
