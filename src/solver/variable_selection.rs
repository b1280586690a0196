use fnv::FnvHashMap;

use crate::instance::*;

/// Picks the variable with the most literal occurrences, of either polarity. Ties go to the
/// variable met first when scanning clauses in order, so the choice depends only on the formula.
pub fn select_variable(formula: &Formula) -> Option<Variable> {
    let mut order = vec![];
    let mut frequency: FnvHashMap<Variable, usize> = FnvHashMap::default();
    for literal in formula.literals() {
        let count = frequency.entry(literal.var()).or_insert_with(|| {
            order.push(literal.var());
            0
        });
        *count += 1;
    }

    let mut best: Option<(Variable, usize)> = None;
    for var in order {
        let count = frequency[&var];
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((var, count)),
        }
    }
    best.map(|(var, _)| var)
}
