use core::fmt;

use fnv::FnvHashSet;
use itertools::Itertools;

use crate::variable_registry::VariableRegister;

use super::{Clause, Literal, Variable};

/// A conjunction of clauses. A formula with no clauses is trivially true.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Formula {
    clauses: Vec<Clause>,
}

impl Formula {
    pub fn new(clauses: Vec<Clause>) -> Formula {
        Formula { clauses }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// The number of clauses left.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// True when every clause has been satisfied and removed.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(Clause::is_empty)
    }

    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.clauses.iter().flat_map(|c| c.literals().iter().copied())
    }

    pub fn literal_count(&self) -> usize {
        self.clauses.iter().map(Clause::len).sum()
    }

    /// Every variable mentioned by the formula, in order of first occurrence.
    pub fn variables(&self) -> Vec<Variable> {
        let mut seen = FnvHashSet::default();
        self.literals()
            .map(|l| l.var())
            .filter(|&v| seen.insert(v))
            .collect()
    }

    /// Renders the formula as `(a | !b) & (c)` using the names held by `names`.
    pub fn display<'a>(&'a self, names: &'a VariableRegister) -> FormulaDisplay<'a> {
        FormulaDisplay {
            formula: self,
            names,
        }
    }
}

impl From<Vec<Clause>> for Formula {
    fn from(clauses: Vec<Clause>) -> Self {
        Formula::new(clauses)
    }
}

impl FromIterator<Clause> for Formula {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        Formula::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.clauses.iter().map(|c| format!("{:?}", c)).join(", ")
        )
    }
}

pub struct FormulaDisplay<'a> {
    formula: &'a Formula,
    names: &'a VariableRegister,
}

impl<'a> fmt::Display for FormulaDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .formula
            .clauses()
            .iter()
            .map(|clause| {
                let body = clause
                    .literals()
                    .iter()
                    .map(|&lit| self.names.literal_name(lit))
                    .join(" | ");
                format!("({})", body)
            })
            .join(" & ");
        write!(f, "{}", rendered)
    }
}
