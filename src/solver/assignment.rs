use crate::instance::*;
use core::fmt;

use fnv::FnvHashMap;
use itertools::Itertools;

/// A partial mapping from variables to truth values. Each search branch owns its own copy, so a
/// variable is only ever set once along any path.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    values: FnvHashMap<Variable, bool>,
}

impl Assignment {
    pub fn new() -> Assignment {
        Assignment::default()
    }

    pub fn assign(&mut self, var: Variable, value: bool) {
        self.require_unset(var, value);
        self.values.insert(var, value);
    }

    pub fn add(&mut self, lit: Literal) {
        self.assign(lit.var(), lit.polarity());
    }

    /// A copy of this assignment extended with `var = value`, leaving `self` untouched.
    pub fn with(&self, var: Variable, value: bool) -> Assignment {
        let mut extended = self.clone();
        extended.assign(var, value);
        extended
    }

    pub fn get(&self, var: Variable) -> Option<bool> {
        self.values.get(&var).copied()
    }

    pub fn is_assigned(&self, var: Variable) -> bool {
        self.values.contains_key(&var)
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn from_literals(lits: &[Literal]) -> Assignment {
        let mut set = Assignment::new();
        for &lit in lits {
            set.add(lit);
        }
        set
    }

    /// The assignment as literals, ordered by variable id.
    pub fn as_literals(&self) -> Vec<Literal> {
        self.iter().map(|(k, v)| Literal::new(k, v)).collect()
    }

    /// (variable, value) pairs ordered by variable id.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, bool)> + '_ {
        self.values
            .iter()
            .map(|(&k, &v)| (k, v))
            .sorted_by_key(|&(k, _)| k)
    }

    /// Evaluates a clause under this assignment. Unassigned literals never make a clause true.
    pub fn evaluate(&self, clause: &Clause) -> EvaluationResult {
        let mut result = EvaluationResult::False;
        for literal in clause.literals() {
            match self.get(literal.var()) {
                Some(value) if literal.evaluate(value) => return EvaluationResult::True,
                Some(_) => {}
                None => result = EvaluationResult::Unknown,
            }
        }
        result
    }

    #[cfg(debug_assertions)]
    fn require_unset(&self, var: Variable, value: bool) {
        if self.get(var) == Some(!value) {
            panic!("{:?} already assigned {:?}", var, !value)
        }
    }

    #[cfg(not(debug_assertions))]
    fn require_unset(&self, _var: Variable, _value: bool) {}
}

impl fmt::Debug for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.iter()
                .map(|(k, v)| format!("{:?}={:?}", k, v))
                .join(", ")
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EvaluationResult {
    True,
    False,
    Unknown,
}

#[cfg(test)]
mod test {
    use crate::{
        instance::*,
        solver::assignment::{Assignment, EvaluationResult},
    };

    #[test]
    fn test_evaluate_clause_true() {
        let a = Variable(0);
        let b = Variable(1);
        let c = Variable(2);
        // A OR !C
        let clause = Clause::new(vec![Literal::new(a, true), Literal::new(c, false)]);
        // a = true, b = true, c = false
        assert_eq!(
            Assignment::from_literals(&[
                Literal::new(a, true),
                Literal::new(b, true),
                Literal::new(c, false),
            ])
            .evaluate(&clause),
            EvaluationResult::True
        );
        // a = false, b = false, c = false
        assert_eq!(
            Assignment::from_literals(&[
                Literal::new(a, false),
                Literal::new(b, false),
                Literal::new(c, false),
            ])
            .evaluate(&clause),
            EvaluationResult::True
        );
        // a = false, b = false, c = true
        assert_eq!(
            Assignment::from_literals(&[
                Literal::new(a, false),
                Literal::new(b, false),
                Literal::new(c, true),
            ])
            .evaluate(&clause),
            EvaluationResult::False
        )
    }

    #[test]
    fn test_evaluate_clause_missing() {
        let c = Clause::new(vec![Literal::new(Variable(0), true)]);
        assert_eq!(Assignment::new().evaluate(&c), EvaluationResult::Unknown)
    }

    #[test]
    fn test_evaluate_looks_past_unassigned_literals() {
        let a = Variable(0);
        let b = Variable(1);
        let clause = Clause::new(vec![a.positive(), b.positive()]);
        let ass = Assignment::from_literals(&[b.positive()]);
        assert_eq!(ass.evaluate(&clause), EvaluationResult::True);
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let a = Variable(0);
        let b = Variable(1);
        let base = Assignment::from_literals(&[a.positive()]);
        let extended = base.with(b, false);
        assert_eq!(base.size(), 1);
        assert_eq!(extended.size(), 2);
        assert_eq!(extended.get(b), Some(false));
        assert!(!base.is_assigned(b));
        assert_eq!(extended.as_literals(), vec![a.positive(), b.negative()]);
        assert_eq!(format!("{:?}", extended), "{x0=true, x1=false}");
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn test_reassigning_opposite_polarity_panics() {
        let a = Variable(0);
        let mut ass = Assignment::from_literals(&[a.positive()]);
        ass.add(a.negative());
    }
}
