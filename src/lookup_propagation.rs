use std::collections::VecDeque;

use crate::data_structures::{ResidualFormula, LiteralFlags};

/*
A function to perform unit propagation on the residual formula starting from a
single literal, with no prior assignment. Propagation runs to fixpoint and does
not stop when a clause empties: the contradictory assignment is simply not
re-recorded and the rest of the formula keeps propagating. Both sides of an
exclusion certificate have to be checkable this way, so the residual is never
consumed or mutated.

Returns the propagated literals in dequeue order, starting literal first.
*/
pub fn lookup_propagate(residual: &ResidualFormula, start_literal: i32) -> Vec<i32> {
    let mut assigned = LiteralFlags::new(residual.num_variables);
    let mut to_assign = LiteralFlags::new(residual.num_variables);
    let mut to_propagate = VecDeque::new();
    let mut propagated = Vec::new();
    to_assign.set(start_literal);
    to_propagate.push_back(start_literal);
    while !to_propagate.is_empty() {
        let literal = to_propagate.pop_front().unwrap();
        propagated.push(literal);
        assigned.set(literal);
        to_assign.clear(literal);
        // Clauses containing the complement lose a literal under this assignment.
        let references = residual.clause_references.get_vec(&-literal);
        if references.is_none() {
            continue;
        }
        for clause_index in references.unwrap() {
            let clause = &residual.clause_list[*clause_index];
            let mut surviving = None;
            let mut survivor_count = 0;
            for candidate in &clause.live_literals {
                if !assigned.is_set(-candidate) {
                    survivor_count += 1;
                    if survivor_count > 1 {
                        break;
                    }
                    surviving = Some(*candidate);
                }
            }
            if survivor_count == 1 {
                let unit = surviving.unwrap();
                if !assigned.is_set(unit) && !to_assign.is_set(unit) {
                    to_assign.set(unit);
                    to_propagate.push_back(unit);
                }
            }
        }
    }
    return propagated;
}
