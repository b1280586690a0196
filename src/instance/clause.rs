use core::fmt;

use super::{Literal, Variable};

/// A disjunction of literals. Literal order is kept exactly as given: no sorting and no
/// deduplication, since branching order depends on it.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(lits: Vec<Literal>) -> Clause {
        Clause { literals: lits }
    }

    pub fn empty() -> Clause {
        Clause::default()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// An empty clause can never be satisfied; its presence marks a conflict.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn is_unit(&self) -> bool {
        self.len() == 1
    }

    /// The forced literal of a unit clause.
    pub fn unit(&self) -> Option<Literal> {
        match self.literals.as_slice() {
            [lit] => Some(*lit),
            _ => None,
        }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn mentions(&self, var: Variable) -> bool {
        self.literals.iter().any(|l| l.var() == var)
    }
}

impl From<Vec<Literal>> for Clause {
    fn from(literals: Vec<Literal>) -> Self {
        Clause::new(literals)
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        let mut fst = true;
        for &lit in &self.literals {
            if !fst {
                write!(f, ", ")?;
            }
            fst = false;
            write!(f, "{:?}", lit)?;
        }
        write!(f, ")")
    }
}
