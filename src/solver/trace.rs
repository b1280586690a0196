use std::collections::BTreeMap;

use serde::Serialize;

use crate::instance::*;
use crate::variable_registry::VariableRegister;

use super::assignment::Assignment;

pub(crate) const EMPTY_CLAUSE_REASON: &str = "empty clause found";
pub(crate) const UNIT_CONFLICT_REASON: &str = "contradiction after unit propagation";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Check,
    Unit,
    Pure,
    Branch,
    Backtrack,
    Conflict,
}

/// What happened at a recorded step. Decisions carry the literal that was made true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Check,
    Unit(Literal),
    Pure(Literal),
    Branch(Literal),
    Backtrack(String),
    Conflict(String),
}

impl EventKind {
    pub fn event_type(&self) -> EventType {
        match self {
            EventKind::Check => EventType::Check,
            EventKind::Unit(_) => EventType::Unit,
            EventKind::Pure(_) => EventType::Pure,
            EventKind::Branch(_) => EventType::Branch,
            EventKind::Backtrack(_) => EventType::Backtrack,
            EventKind::Conflict(_) => EventType::Conflict,
        }
    }

    fn literal(&self) -> Option<Literal> {
        match *self {
            EventKind::Unit(l) | EventKind::Pure(l) | EventKind::Branch(l) => Some(l),
            _ => None,
        }
    }
}

/// A single step of the search, with owned copies of the formula and assignment as they were
/// when the step was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEvent {
    pub kind: EventKind,
    pub formula: Formula,
    pub assignment: Assignment,
}

impl TraceEvent {
    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }

    pub fn variable(&self) -> Option<Variable> {
        self.kind.literal().map(|l| l.var())
    }

    pub fn value(&self) -> Option<bool> {
        self.kind.literal().map(|l| l.polarity())
    }

    pub fn reason(&self) -> Option<&str> {
        match &self.kind {
            EventKind::Backtrack(reason) | EventKind::Conflict(reason) => Some(reason),
            _ => None,
        }
    }

    /// A one line, human readable summary of the step.
    pub fn describe(&self, names: &VariableRegister) -> String {
        let decision = |label: &str, lit: Literal| {
            format!("{}: {} = {}", label, names.name(lit.var()), lit.polarity())
        };
        match &self.kind {
            EventKind::Check => "Check formula".to_string(),
            EventKind::Unit(lit) => decision("Unit literal", *lit),
            EventKind::Pure(lit) => decision("Pure literal", *lit),
            EventKind::Branch(lit) => decision("Branch", *lit),
            EventKind::Backtrack(reason) => format!("Backtrack ({})", reason),
            EventKind::Conflict(reason) => format!("Conflict: {}", reason),
        }
    }

    /// The event with variable names resolved, in the shape handed to presentation layers.
    pub fn to_step(&self, names: &VariableRegister) -> TraceStep {
        TraceStep {
            kind: self.event_type(),
            formula: self
                .formula
                .clauses()
                .iter()
                .map(|c| c.literals().iter().map(|&l| names.literal_name(l)).collect())
                .collect(),
            assignment: self
                .assignment
                .iter()
                .map(|(var, value)| (names.name(var), value))
                .collect(),
            variable: self.variable().map(|v| names.name(v)),
            value: self.value(),
            reason: self.reason().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    pub kind: EventType,
    pub formula: Vec<Vec<String>>,
    pub assignment: BTreeMap<String, bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Append-only log of search events. The search writes to it but never reads from it.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    events: Vec<TraceEvent>,
    disabled: bool,
}

impl Trace {
    pub fn new() -> Trace {
        Trace::default()
    }

    /// A trace that drops everything recorded into it.
    pub fn disabled() -> Trace {
        Trace {
            events: vec![],
            disabled: true,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }

    pub(crate) fn record(&mut self, kind: EventKind, formula: &Formula, assignment: &Assignment) {
        if self.disabled {
            return;
        }
        self.events.push(TraceEvent {
            kind,
            formula: formula.clone(),
            assignment: assignment.clone(),
        });
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &TraceEvent> + '_ {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn count(&self, event_type: EventType) -> usize {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .count()
    }

    pub fn to_steps(&self, names: &VariableRegister) -> Vec<TraceStep> {
        self.events.iter().map(|e| e.to_step(names)).collect()
    }

    pub fn to_json(&self, names: &VariableRegister) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_steps(names))
    }
}
