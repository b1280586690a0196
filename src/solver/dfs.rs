use std::fmt;
use std::rc::Rc;

use itertools::Itertools;

use crate::instance::*;
use crate::variable_registry::VariableRegister;
use crate::verify::check_satisfiability;

use super::assignment::Assignment;
use super::config::SolverConfig;
use super::dpll::{Dpll, Outcome};
use super::trace::{Trace, TraceStep};

/// A formula together with the names of its variables.
#[derive(Clone)]
pub struct Instance {
    pub(crate) variables: Rc<VariableRegister>,
    pub(crate) formula: Formula,
}

impl Instance {
    pub(crate) fn new(formula: Formula, variables: VariableRegister) -> Instance {
        Instance {
            variables: Rc::new(variables),
            formula,
        }
    }

    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    pub fn variables(&self) -> &VariableRegister {
        &self.variables
    }

    pub fn variable(&self, name: &str) -> Option<Variable> {
        self.variables.get_by_name(name)
    }

    pub fn solve(&self) -> Solution {
        self.solve_with(SolverConfig::default())
    }

    pub fn solve_with(&self, config: SolverConfig) -> Solution {
        let mut dpll = Dpll::new(config);
        let outcome = dpll.solve(self.formula.clone());
        Solution {
            literals: self.variables.clone(),
            stats: dpll.stats().clone(),
            trace: dpll.take_trace(),
            outcome,
        }
    }

    /// Whether `assignment` makes every clause of this instance true.
    pub fn check(&self, assignment: &Assignment) -> bool {
        check_satisfiability(&self.formula, assignment)
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formula.display(&self.variables))
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instance {{ {} }}", self)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvaluationStats {
    /// Search steps taken, one per `check` event.
    pub step_count: usize,
    pub decision_count: usize,
    pub unit_prop_count: usize,
    pub pure_literal_count: usize,
    /// Conflicts found during unit propagation.
    pub conflict_count: usize,
    /// Branches entered with an empty clause already present.
    pub backtrack_count: usize,
    pub max_depth: usize,
}

#[derive(Clone)]
pub struct Solution {
    pub(crate) literals: Rc<VariableRegister>,
    pub(crate) outcome: Outcome,
    pub(crate) trace: Trace,
    pub stats: EvaluationStats,
}

impl Solution {
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn is_satisfiable(&self) -> bool {
        self.outcome.is_satisfied()
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        self.outcome.assignment()
    }

    pub fn assignments(&self) -> Option<Vec<Literal>> {
        self.assignment().map(Assignment::as_literals)
    }

    /// The value given to the variable called `name`.
    pub fn value(&self, name: &str) -> Option<bool> {
        let var = self.literals.get_by_name(name)?;
        self.assignment()?.get(var)
    }

    /// (name, value) pairs sorted by name.
    pub fn named_assignment(&self) -> Option<Vec<(String, bool)>> {
        let assignment = self.assignment()?;
        Some(
            assignment
                .iter()
                .map(|(var, value)| (self.literals.name(var), value))
                .sorted()
                .collect(),
        )
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// The trace as numbered, human readable lines.
    pub fn trace_lines(&self) -> Vec<String> {
        self.trace
            .iter()
            .enumerate()
            .map(|(ix, event)| {
                let mut line = format!("Step {}: {}", ix + 1, event.describe(&self.literals));
                line.push_str(&format!(
                    "\n  formula: {}",
                    event.formula.display(&self.literals)
                ));
                if !event.assignment.is_empty() {
                    let assigned = event
                        .assignment
                        .iter()
                        .map(|(var, value)| format!("{}: {}", self.literals.name(var), value))
                        .join(", ");
                    line.push_str(&format!("\n  assignment: {{{}}}", assigned));
                }
                line
            })
            .collect()
    }

    pub fn trace_steps(&self) -> Vec<TraceStep> {
        self.trace.to_steps(&self.literals)
    }

    pub fn trace_json(&self) -> serde_json::Result<String> {
        self.trace.to_json(&self.literals)
    }
}

impl fmt::Debug for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Satisfied(solution) => {
                let mut first = true;
                for lit in self.literals.iter() {
                    let formatted_val = match solution.get(lit) {
                        Some(val) => format!("{:?}", val),
                        None => continue,
                    };
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{}={}", self.literals.name(lit), formatted_val)?;
                }
            }
            Outcome::Unsatisfiable => write!(f, "no solution found")?,
            Outcome::Interrupted => write!(f, "search interrupted")?,
        }
        write!(f, "; stats={:?}", self.stats)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::{parser::parse_formula, problem_builder::ProblemBuilder};

    #[test]
    fn test_build_and_solve_infeasible() {
        let mut pb = ProblemBuilder::new();

        let x = pb.var("x");
        let y = pb.var("y");
        let z = pb.var("z");

        // exactly one of x, y, z must be true, and so must two of them
        pb.clause(&[x.positive(), y.positive(), z.positive()]);
        pb.clause(&[x.negative(), y.negative()]);
        pb.clause(&[y.negative(), z.negative()]);
        pb.clause(&[x.negative(), z.negative()]);
        pb.clause(&[x.positive(), y.positive()]);
        pb.clause(&[y.positive(), z.positive()]);
        pb.clause(&[x.positive(), z.positive()]);

        let instance = pb.build();
        let solution = instance.solve();
        assert!(solution.assignment().is_none());
        assert!(solution.outcome().is_unsatisfiable());
        assert_eq!(format!("{:?}", solution).split(';').next(), Some("no solution found"));
    }

    #[test]
    fn test_build_and_solve_feasible() {
        let mut pb = ProblemBuilder::new();

        let a = pb.var("a");
        let b = pb.var("b");
        let c = pb.var("c");

        pb.clause(&[a.negative(), b.negative(), c.negative()]);
        pb.clause(&[a.positive(), b.positive()]);
        pb.clause(&[b.negative(), c.positive()]);
        pb.require(c.positive());

        let instance = pb.build();
        let solution = instance.solve();
        assert!(solution.is_satisfiable());
        assert!(instance.check(solution.assignment().unwrap()));
        assert_eq!(solution.value("c"), Some(true));
    }

    #[test]
    fn test_named_assignment_and_debug() {
        let instance = parse_formula("[[\"b\"], [\"!a\"]]").unwrap();
        let solution = instance.solve();
        assert_eq!(
            solution.named_assignment(),
            Some(vec![("a".to_string(), false), ("b".to_string(), true)])
        );
        assert!(format!("{:?}", solution).starts_with("b=true, a=false; stats="));
    }

    #[test]
    fn test_trace_lines() {
        let instance = parse_formula("(a)").unwrap();
        let solution = instance.solve();
        let lines = solution.trace_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Step 1: Check formula\n  formula: (a)");
        assert_eq!(lines[1], "Step 2: Unit literal: a = true\n  formula: (a)");
    }

    #[test]
    fn test_instance_display() {
        let instance = parse_formula("(a | b | !c) & (!a | d)").unwrap();
        assert_eq!(instance.to_string(), "(a | b | !c) & (!a | d)");
        assert_eq!(instance.variables().len(), 4);
        assert!(instance.variable("d").is_some());
    }
}
