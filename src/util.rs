use multimap::MultiMap;
use regex::Regex;

/*
A function to map a signed literal into the dense tables over [-N, N].
Literal l lives at position l + num_variables; position num_variables
(literal 0) is unused.
*/
pub fn literal_index(literal: i32, num_variables: i32) -> usize {
    return (literal + num_variables) as usize;
}

/*
A function to find the number of references a variable has in the current residual.
It also determines the sign priority.

choose_positive determines whether the variable should be decided positively or
negatively. If the variable appears more often negatively, we choose the variable
negatively. Otherwise, we choose the variable positively.
*/
pub fn get_variable_state_sum(clause_references: &MultiMap<i32, usize>, variable: i32) -> (i32, bool) {
    let mut pos_appearances = 0;
    if clause_references.contains_key(&variable) {
        pos_appearances += clause_references.get_vec(&variable).unwrap().len() as i32;
    }
    let mut neg_appearances = 0;
    if clause_references.contains_key(&-variable) {
        neg_appearances += clause_references.get_vec(&-variable).unwrap().len() as i32;
    }
    let choose_positive = if neg_appearances >= pos_appearances {false} else {true};
    let appearances = pos_appearances + neg_appearances;
    return (appearances, choose_positive);
}

/*
A function to get the instance name from a file_path.

Example: file_path = ./benchmarks/uniform/uf20-01.cnf
            => instance_name = uf20-01.cnf

Returns the instance name.
*/
pub fn read_instance_name(file_path: &String) -> String {
    let re_get_instance = Regex::new(r"[^/\\]+$").unwrap();
    let instance_name = re_get_instance.find(&file_path).map(|m| m.as_str()).unwrap().to_string();
    return instance_name;
}
