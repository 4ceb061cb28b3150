use crate::data_structures::{ResidualFormula, ResidualClause};
use crate::lookup_propagation::lookup_propagate;
use crate::util::literal_index;

/*
A function to set a position bit in a literal's mark.
*/
pub fn update_mark(marks: &mut Vec<u64>, index: usize, position: usize) {
    marks[index] |= 1 << position;
}

/*
A function to compute the mark table of a reference clause: one bitmask per
signed literal of the formula, where bit i is set on a literal's mark exactly
when propagating the reference literal at position i forces that literal false.
Each reference literal also carries its own position bit.

Returns the dense mark table, indexed by util::literal_index.
*/
pub fn analyse_reference(residual: &ResidualFormula, reference: &ResidualClause) -> Vec<u64> {
    let num_variables = residual.num_variables;
    let mut marks = vec![0u64; residual.flag_length()];
    for (position, literal) in reference.live_literals.iter().enumerate() {
        update_mark(&mut marks, literal_index(*literal, num_variables), position);
        let propagations = lookup_propagate(residual, *literal);
        for propagated in &propagations {
            if *propagated != *literal {
                update_mark(&mut marks, literal_index(-*propagated, num_variables), position);
            }
        }
    }
    return marks;
}
