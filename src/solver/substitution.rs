use crate::instance::*;

/// Rewrites `formula` under `var = value`. Satisfied clauses are dropped, falsified literals
/// are removed, and a clause left with no literals is kept as a conflict marker. Clause and
/// literal order is preserved.
pub fn substitute(formula: &Formula, var: Variable, value: bool) -> Formula {
    formula
        .clauses()
        .iter()
        .filter_map(|clause| substitute_clause(clause, var, value))
        .collect()
}

fn substitute_clause(clause: &Clause, var: Variable, value: bool) -> Option<Clause> {
    if !clause.mentions(var) {
        return Some(clause.clone());
    }
    let mut remaining = Vec::with_capacity(clause.len());
    for &literal in clause.literals() {
        if literal.var() != var {
            remaining.push(literal);
        } else if literal.evaluate(value) {
            return None;
        }
    }
    Some(Clause::new(remaining))
}
