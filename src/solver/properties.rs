//! Randomized checks of the search against exhaustive enumeration on small formulas.
use proptest::prelude::*;

use crate::instance::*;
use crate::verify::check_satisfiability;

use super::assignment::Assignment;
use super::config::SolverConfig;
use super::dfs::EvaluationStats;
use super::dpll::{Dpll, Outcome};
use super::pure_literal::PureLiteralEliminator;
use super::substitution::substitute;
use super::trace::{EventType, Trace};
use super::unit_propagator::{PropagationResult, UnitPropagator};

const MAX_VARS: u64 = 5;

fn literal() -> impl Strategy<Value = Literal> {
    (0..MAX_VARS, any::<bool>()).prop_map(|(var, polarity)| Literal::new(Variable(var), polarity))
}

fn arb_formula(max_clause_len: usize) -> impl Strategy<Value = Formula> {
    prop::collection::vec(
        prop::collection::vec(literal(), 1..=max_clause_len).prop_map(Clause::new),
        0..10,
    )
    .prop_map(Formula::new)
}

fn brute_force_satisfiable(formula: &Formula) -> bool {
    let variables = formula.variables();
    (0u32..1 << variables.len()).any(|bits| {
        let mut assignment = Assignment::new();
        for (ix, &var) in variables.iter().enumerate() {
            assignment.assign(var, bits & (1 << ix) != 0);
        }
        check_satisfiability(formula, &assignment)
    })
}

proptest! {
    #[test]
    fn solver_agrees_with_enumeration(formula in arb_formula(3), pure in any::<bool>()) {
        let mut dpll = Dpll::new(SolverConfig::default().with_pure_literal_elimination(pure));
        match dpll.solve(formula.clone()) {
            Outcome::Satisfied(assignment) => {
                prop_assert!(check_satisfiability(&formula, &assignment));
                prop_assert_eq!(assignment.size(), formula.variables().len());
            }
            Outcome::Unsatisfiable => prop_assert!(!brute_force_satisfiable(&formula)),
            Outcome::Interrupted => prop_assert!(false, "no limit was configured"),
        }
        prop_assert!(dpll.stats().max_depth <= formula.variables().len());
    }

    #[test]
    fn every_branch_is_preceded_by_a_check(formula in arb_formula(3)) {
        let mut dpll = Dpll::default();
        dpll.solve(formula);
        let trace = dpll.trace();
        prop_assert_eq!(trace.events().first().map(|e| e.event_type()), Some(EventType::Check));
        prop_assert_eq!(trace.count(EventType::Check), trace.count(EventType::Branch) + 1);
        prop_assert_eq!(trace.count(EventType::Check), dpll.stats().step_count);
    }

    #[test]
    fn pure_elimination_never_empties_a_clause(formula in arb_formula(4)) {
        let mut trace = Trace::new();
        let mut stats = EvaluationStats::default();
        let (reduced, assignment) = PureLiteralEliminator::new(&mut trace, &mut stats)
            .eliminate(formula.clone(), Assignment::new());
        prop_assert!(!reduced.has_empty_clause());
        prop_assert!(reduced.len() <= formula.len());
        prop_assert_eq!(assignment.size(), stats.pure_literal_count);
    }

    #[test]
    fn substituting_an_absent_variable_changes_nothing(formula in arb_formula(4), value in any::<bool>()) {
        prop_assert_eq!(substitute(&formula, Variable(MAX_VARS), value), formula);
    }

    #[test]
    fn propagation_leaves_no_units(formula in arb_formula(3)) {
        let mut trace = Trace::new();
        let mut stats = EvaluationStats::default();
        let result = UnitPropagator::new(&mut trace, &mut stats)
            .propagate_units(formula.clone(), Assignment::new());
        prop_assert!(stats.unit_prop_count <= formula.variables().len());
        match result {
            PropagationResult::Propagated { formula: reduced, .. } => {
                prop_assert!(reduced.clauses().iter().all(|c| !c.is_unit()));
                prop_assert!(!reduced.has_empty_clause());
            }
            PropagationResult::Conflicted { .. } => {
                prop_assert_eq!(stats.conflict_count, 1);
                prop_assert!(!brute_force_satisfiable(&formula));
            }
        }
    }
}

mod scenarios {
    use crate::{parser::parse_formula, solver::EventType};

    #[test]
    fn three_clause_example_is_satisfied() {
        let instance = parse_formula(r#"[["a", "b", "!c"], ["!a", "d"], ["c", "!d", "e"]]"#).unwrap();
        let solution = instance.solve();
        assert!(solution.is_satisfiable());
        assert!(instance.check(solution.assignment().unwrap()));
        assert_eq!(solution.assignment().unwrap().size(), 5);
    }

    #[test]
    fn pure_literals_settle_two_clause_example() {
        let instance = parse_formula("(a | b) & (!a | c)").unwrap();
        let solution = instance.solve();
        assert_eq!(solution.value("b"), Some(true));
        assert_eq!(solution.value("c"), Some(true));
        assert_eq!(solution.trace().count(EventType::Branch), 0);
    }

    #[test]
    fn all_four_sign_combinations_are_unsatisfiable() {
        let instance = parse_formula("(a | b) & (a | !b) & (!a | b) & (!a | !b)").unwrap();
        let solution = instance.solve();
        assert!(solution.outcome().is_unsatisfiable());
        assert!(solution.trace().count(EventType::Conflict) >= 1);
    }
}
