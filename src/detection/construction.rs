use crate::data_structures::{ResidualFormula, ResidualClause, Witness};
use crate::lookup_propagation::lookup_propagate;

/*
A function to check whether a candidate clause can join the partial witness.
For every position, assigning the candidate literal at that position true must
propagate the negation of every witness clause's literal at the same position.
*/
pub fn can_select(residual: &ResidualFormula, candidate: &ResidualClause, current: &Vec<ResidualClause>) -> bool {
    for position in 0..candidate.live_literals.len() {
        let required: Vec<i32> = current.iter().map(|clause| -clause.live_literals[position]).collect();
        let propagations = lookup_propagate(residual, candidate.live_literals[position]);
        for literal in &required {
            if !propagations.contains(literal) {
                return false;
            }
        }
    }
    return true;
}

/*
A function to try to build a pigeon hole starting from the reference clause.
The pool holds candidate clauses already aligned to the reference, one entry
per admissible permutation, in ascending id order.

Returns the first witness found, or None when the pool cannot be extended to
clause_length + 1 pairwise-exclusive clauses.
*/
pub fn construct_pigeon(residual: &ResidualFormula, reference: &ResidualClause, pool: &Vec<ResidualClause>) -> Option<Witness> {
    let mut current = vec![reference.clone()];
    let mut found = None;
    extend_pigeon(residual, reference.live_literals.len(), pool, &mut current, &mut found);
    return found;
}

/*
A function to extend the partial witness by one clause. Selecting a candidate
restricts the remaining pool to the later entries sharing no variable with it;
branches that cannot reach clause_length + 1 clauses are pruned before
recursing. The first completed witness wins and is emitted sorted by id.
*/
fn extend_pigeon(residual: &ResidualFormula, clause_length: usize, remaining: &Vec<ResidualClause>, current: &mut Vec<ResidualClause>, found: &mut Option<Witness>) {
    if current.len() > clause_length {
        let mut clauses = current.clone();
        clauses.sort_by_key(|clause| clause.id);
        *found = Some(Witness { clauses });
        return;
    }
    for index in 0..remaining.len() {
        if can_select(residual, &remaining[index], current) {
            let mut next_remaining = Vec::new();
            for later in remaining.iter().skip(index + 1) {
                if !later.shares_variable_with(&remaining[index]) {
                    next_remaining.push(later.clone());
                }
            }
            if next_remaining.len() + current.len() + 1 > clause_length {
                current.push(remaining[index].clone());
                extend_pigeon(residual, clause_length, &next_remaining, current, found);
                current.pop();
                if !found.is_none() {
                    break;
                }
            }
        }
    }
}
