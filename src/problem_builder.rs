use crate::instance::{Clause, Formula, Literal, Variable};
use crate::solver::Instance;
use crate::variable_registry::VariableRegister;

/// Assembles an instance clause by clause. Variables are interned by name, so asking for the same
/// name twice yields the same variable.
#[derive(Clone, Debug, Default)]
pub struct ProblemBuilder {
    variables: VariableRegister,
    clauses: Vec<Clause>,
}

impl ProblemBuilder {
    pub fn new() -> ProblemBuilder {
        ProblemBuilder::default()
    }

    pub fn var(&mut self, name: &str) -> Variable {
        self.variables.ensure_original(name)
    }

    /// A literal on the variable called `name`.
    pub fn lit(&mut self, name: &str, polarity: bool) -> Literal {
        Literal::new(self.var(name), polarity)
    }

    /// Adds the disjunction of `literals`. An empty slice adds an empty clause.
    pub fn clause(&mut self, literals: &[Literal]) {
        self.clauses.push(Clause::new(literals.to_vec()));
    }

    /// Requires `literal` to hold, as a unit clause.
    pub fn require(&mut self, literal: Literal) {
        self.clause(&[literal])
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    pub fn build(self) -> Instance {
        Instance::new(Formula::new(self.clauses), self.variables)
    }
}
