use std::collections::VecDeque;

use crate::data_structures::{ResidualFormula, ResidualClause, Statistics, LiteralFlags};

/*
An enum to store the outcome of unit propagation.

Stable => Propagation reached a fixpoint without emptying a clause.
Conflict => A clause emptied, or a literal and its complement were both forced.
*/
#[derive(Clone, Debug, PartialEq)]
pub enum Propagation {
    Stable,
    Conflict,
}

/*
A function to perform unit propagation (Boolean Constraint Propagation) over
the residual formula. The residual itself is never mutated: a working copy of
the clause list is simplified and compacted into the child residual, with
satisfied clauses dropped and falsified literals stripped.

Every clause that shrinks raises its consider flag, and a clause shrinking to
a binary raises the flag on every clause containing the complement of either
of its literals, recursively.

Returns the outcome, the child residual, and the extended assignment.
*/
pub fn unit_propagate(residual: &ResidualFormula, assignment: &Vec<i32>, unit_literals: Vec<i32>, consider: &mut Vec<bool>, statistics: &mut Statistics) -> (Propagation, ResidualFormula, Vec<i32>) {
    let num_variables = residual.num_variables;
    let mut clause_list = residual.clause_list.clone();
    let mut new_assignment = assignment.clone();
    let mut assigned = LiteralFlags::new(num_variables);
    let mut to_assign = LiteralFlags::new(num_variables);
    let mut to_propagate = VecDeque::new();
    for literal in unit_literals {
        if !to_assign.is_set(literal) {
            to_assign.set(literal);
            to_propagate.push_back(literal);
        }
    }
    while !to_propagate.is_empty() {
        let literal = to_propagate.pop_front().unwrap();
        statistics.increment_propagation_count();
        if assigned.is_set(-literal) {
            // A literal and its complement were both forced.
            return (Propagation::Conflict, ResidualFormula::from_clauses(num_variables, clause_list), new_assignment);
        }
        if assigned.is_set(literal) {
            continue;
        }
        assigned.set(literal);
        to_assign.clear(literal);
        new_assignment.push(literal);

        // Clauses containing the literal are satisfied and fall out of the residual.
        let positive_references = residual.clause_references.get_vec(&literal);
        if !positive_references.is_none() {
            for clause_index in positive_references.unwrap() {
                clause_list[*clause_index].is_removed = true;
            }
        }

        // Clauses containing the complement lose that literal.
        let negative_references = residual.clause_references.get_vec(&-literal);
        if !negative_references.is_none() {
            for clause_index in negative_references.unwrap() {
                if clause_list[*clause_index].is_removed {
                    continue;
                }
                clause_list[*clause_index].remove_literal(-literal);
                consider[clause_list[*clause_index].id] = true;
                if clause_list[*clause_index].live_literals.len() == 2 {
                    // A fresh binary clause is an exclusion; clauses it constrains
                    // become detection material as well.
                    cascade_consider(&clause_list, *clause_index, consider);
                }
                if clause_list[*clause_index].is_empty() {
                    return (Propagation::Conflict, ResidualFormula::from_clauses(num_variables, clause_list), new_assignment);
                }
                let unit_clause_check = clause_list[*clause_index].is_unit_clause();
                if !unit_clause_check.is_none() {
                    let unit = unit_clause_check.unwrap();
                    if !assigned.is_set(unit) && !to_assign.is_set(unit) {
                        to_assign.set(unit);
                        to_propagate.push_back(unit);
                    }
                }
            }
        }
    }
    return (Propagation::Stable, ResidualFormula::from_clauses(num_variables, clause_list), new_assignment);
}

/*
A function to raise the consider flag on every clause that contains the
complement of either literal of a binary clause. A clause reached this way
that is itself binary cascades further.
*/
pub fn cascade_consider(clause_list: &Vec<ResidualClause>, source_index: usize, consider: &mut Vec<bool>) {
    let first = clause_list[source_index].live_literals[0];
    let second = clause_list[source_index].live_literals[1];
    for (index, clause) in clause_list.iter().enumerate() {
        if clause.is_removed || consider[clause.id] {
            continue;
        }
        if clause.live_literals.contains(&-first) || clause.live_literals.contains(&-second) {
            consider[clause.id] = true;
            if clause.live_literals.len() == 2 {
                cascade_consider(clause_list, index, consider);
            }
        }
    }
}
