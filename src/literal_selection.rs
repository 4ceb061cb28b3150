use crate::data_structures::ResidualFormula;
use crate::util::get_variable_state_sum;

/*
A function to select the first free variable in variable order.

Returns the selected decision literal, or None when every variable is assigned.
*/
pub fn select_literal(residual: &ResidualFormula, assignment: &Vec<i32>) -> Option<i32> {
    for variable in 1..=residual.num_variables {
        if !assignment.contains(&variable) && !assignment.contains(&-variable) {
            return Some(variable);
        }
    }
    return None;
}

/*
A function to select a free variable based on its variable state sum: the
variable with the most occurrences in the residual wins, decided with the sign
it appears with more often. Free variables with no remaining occurrences only
serve as a fallback.

Returns the selected decision literal, or None when every variable is assigned.
*/
pub fn select_literal_vss(residual: &ResidualFormula, assignment: &Vec<i32>) -> Option<i32> {
    let mut max_appearances = 0;
    let mut choice = None;
    let mut choose_positive = true;
    for variable in 1..=residual.num_variables {
        if assignment.contains(&variable) || assignment.contains(&-variable) {
            continue;
        }
        if choice.is_none() {
            choice = Some(variable);
        }
        let (appearances, priority) = get_variable_state_sum(&residual.clause_references, variable);
        if appearances > max_appearances {
            max_appearances = appearances;
            choose_positive = priority;
            choice = Some(variable);
        }
    }
    if choice.is_none() {
        return None;
    }
    let variable = choice.unwrap();
    return Some(if choose_positive {variable} else {-variable});
}
