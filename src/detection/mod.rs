mod mark_analysis;
mod bitmask_propagation;
mod permutations;
mod construction;

use crate::data_structures::{ResidualFormula, ResidualClause, Witness, Config, SolverError};
use crate::detection::{mark_analysis::analyse_reference, bitmask_propagation::propagate_bitmasks, permutations::enumerate_permutations, construction::construct_pigeon};
use crate::util::literal_index;

/*
A function to run one detection pass over the residual formula. Every clause
whose consider flag is raised is tried as a reference, in ascending id order,
provided its length falls inside the configured window. A clause is blocked
before it is tried and stays blocked for the rest of the pass, so no clause
serves as both reference and candidate within one pass.

Returns the first witness found, or None. Fails when a residual clause carries
an id outside the master formula's id space.
*/
pub fn detect_pigeons(residual: &ResidualFormula, consider: &Vec<bool>, config: &Config) -> Result<Option<Witness>, SolverError> {
    for clause in &residual.clause_list {
        if clause.id >= consider.len() {
            return Err(SolverError::UnknownClauseId { id: clause.id });
        }
    }
    let mut blocked = vec![false; consider.len()];
    for reference_index in 0..residual.clause_list.len() {
        let id = residual.clause_list[reference_index].id;
        if consider[id] {
            blocked[id] = true;
            let length = residual.clause_list[reference_index].live_literals.len();
            if length >= config.min_pigeons && length <= config.max_pigeons {
                let witness = detect_from_reference(residual, reference_index, &blocked);
                if !witness.is_none() {
                    return Ok(witness);
                }
            }
        }
    }
    return Ok(None);
}

/*
A function to hunt for a pigeon hole around one reference clause. The mark
table of the reference classifies every other clause of equal length sharing
no variable with it: the candidate's restricted bitmasks are propagated, the
admissible permutations enumerated, and one reordered copy of the candidate
per permutation is pooled. Construction only starts when enough distinct
candidate ids survived to possibly exceed the reference length.

Returns the first witness found, or None.
*/
pub fn detect_from_reference(residual: &ResidualFormula, reference_index: usize, blocked: &Vec<bool>) -> Option<Witness> {
    let reference = &residual.clause_list[reference_index];
    let length = reference.live_literals.len();
    let marks = analyse_reference(residual, reference);
    let mut pool = Vec::new();
    let mut candidate_ids = 0;
    for candidate in &residual.clause_list {
        if blocked[candidate.id] || candidate.live_literals.len() != length {
            continue;
        }
        if candidate.shares_variable_with(reference) {
            continue;
        }
        let restricted: Vec<u64> = candidate.live_literals.iter()
            .map(|literal| marks[literal_index(*literal, residual.num_variables)])
            .collect();
        let reduced = propagate_bitmasks(&restricted, -1, length);
        if reduced.is_none() {
            continue;
        }
        let admissible = enumerate_permutations(length, &reduced.unwrap());
        if admissible.is_empty() {
            continue;
        }
        candidate_ids += 1;
        for permutation in &admissible {
            pool.push(reorder_for_permutation(candidate, permutation));
        }
    }
    if candidate_ids + 1 > length {
        return construct_pigeon(residual, reference, &pool);
    }
    return None;
}

/*
A function to reorder a candidate clause along one permutation: the literal at
position j moves to the reference position encoded by the single-bit mask at
entry j.
*/
pub fn reorder_for_permutation(candidate: &ResidualClause, permutation: &Vec<u64>) -> ResidualClause {
    let mut reordered = vec![0; candidate.live_literals.len()];
    for (position, literal) in candidate.live_literals.iter().enumerate() {
        let target = permutation[position].trailing_zeros() as usize;
        reordered[target] = *literal;
    }
    return ResidualClause {
        id: candidate.id,
        live_literals: reordered,
        is_removed: false,
    };
}
