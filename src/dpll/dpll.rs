use std::time::Instant;

use crate::{dpll::unit_propagate::{unit_propagate, Propagation}, data_structures::{ResidualFormula, SearchContext, SolverError, LiteralSelection}, detection::detect_pigeons, literal_selection::{select_literal, select_literal_vss}};

/*
An enum to store the result of the DPLL procedure.

Satisfiable => Satisfying assignment found at the current decision branch.
Unsatisfiable => Unsatisfiable at the current decision branch.
Timeout => Instance timeout, stop running the current instance.
*/
#[derive(Clone, Debug, PartialEq)]
pub enum SearchResult {
    Satisfiable(Vec<i32>),
    Unsatisfiable,
    Timeout,
}

/*
A function that will perform the Davis-Putnam-Logemann-Loveland (DPLL)
algorithm with inline pigeon-hole detection. After each propagation the
detector inspects the residual; a witness refutes the whole sub-tree without
enumerating it. At the search root every clause is considered as a reference,
below the root only the clauses whose shape changed during the propagation.

Returns Satisfiable with the assignment, Unsatisfiable, or Timeout. Fails only
on the residual/master id contract violation.
*/
pub fn dpll(residual: &ResidualFormula, assignment: &Vec<i32>, to_propagate: Vec<i32>, decisions: &mut Vec<i32>, context: &mut SearchContext, timer: Instant) -> Result<SearchResult, SolverError> {
    if timer.elapsed().as_secs() > 30 { return Ok(SearchResult::Timeout) }

    let mut consider = vec![decisions.is_empty(); context.total_clauses];
    let (outcome, new_residual, new_assignment) = unit_propagate(residual, assignment, to_propagate, &mut consider, &mut context.statistics);
    if outcome.eq(&Propagation::Conflict) {
        return Ok(SearchResult::Unsatisfiable);
    }
    if new_residual.is_satisfied() {
        return Ok(SearchResult::Satisfiable(new_assignment));
    }

    if context.config.pigeon_detection_enabled() {
        let witness = detect_pigeons(&new_residual, &consider, &context.config)?;
        if !witness.is_none() {
            let name = context.cache.lock().unwrap().register(&witness.unwrap());
            println!("{:?} -> {}", decisions, name);
            context.statistics.increment_witness_count();
            return Ok(SearchResult::Unsatisfiable);
        }
    }

    let selection = if context.config.literal_selection.eq(&LiteralSelection::Ordered)
                                                        {select_literal(&new_residual, &new_assignment)} else {select_literal_vss(&new_residual, &new_assignment)};
    if selection.is_none() {
        return Ok(SearchResult::Satisfiable(new_assignment));
    }
    let literal = selection.unwrap();

    // Negative branch first, matching the reporting order of the search.
    decisions.push(-literal);
    let first_branch = dpll(&new_residual, &new_assignment, vec![-literal], decisions, context, timer)?;
    decisions.pop();
    match &first_branch {
        SearchResult::Satisfiable(_) | SearchResult::Timeout => {
            return Ok(first_branch);
        },
        SearchResult::Unsatisfiable => {}
    }

    context.statistics.increment_backtrack_count();
    decisions.push(literal);
    let second_branch = dpll(&new_residual, &new_assignment, vec![literal], decisions, context, timer)?;
    decisions.pop();
    return Ok(second_branch);
}
