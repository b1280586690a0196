pub mod dimacs;
pub mod instance;
pub mod parser;
pub mod problem_builder;
pub mod solver;
pub mod variable_registry;
pub mod verify;

pub use instance::*;
pub use solver::{Dpll, Instance, Outcome, Solution, SolverConfig};
pub use verify::check_satisfiability;
