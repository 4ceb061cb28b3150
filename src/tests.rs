#[cfg(test)]
mod test {
    use serde_json::json;

    use crate::{data_structures::{Formula, ResidualClause, ResidualFormula, Witness, WitnessCache, LiteralSelection}, lookup_propagation::lookup_propagate, parse_config::{read_config_value, read_number_json_usize, read_boolean_json, read_string_json, read_literal_selection_json}, util::{literal_index, get_variable_state_sum, read_instance_name}};

    fn residual_from(num_variables: i32, clauses: Vec<Vec<i32>>) -> ResidualFormula {
        let clause_list = clauses.into_iter().enumerate()
            .map(|(id, live_literals)| ResidualClause { id, live_literals, is_removed: false })
            .collect();
        return ResidualFormula::from_clauses(num_variables, clause_list);
    }

    /* START OF DIMACS PARSING TESTS */

    /*
    Tests that long clauses receive stable ids in stream order and unit clauses
    are routed into the initial propagation queue.
    */
    #[test]
    fn parse_dimacs_test() {
        let formula = Formula::new("./test_files/unit_chain_sat.cnf".to_string());
        assert_eq!(4, formula.num_variables);
        assert_eq!(2, formula.clause_list.len());
        assert_eq!(vec![1, -3], formula.initial_units);
        assert_eq!(0, formula.clause_list[0].id);
        assert_eq!(vec![-1, 2], formula.clause_list[0].literals);
        assert_eq!(1, formula.clause_list[1].id);
        assert_eq!(vec![-2, 3, 4], formula.clause_list[1].literals);
    }

    /*
    Tests that the literal occurrence lists of the parsed formula are complete.
    */
    #[test]
    fn parse_dimacs_references_test() {
        let formula = Formula::new("./test_files/unit_chain_sat.cnf".to_string());
        assert_eq!(vec![0], formula.clause_references.get_vec(&-1).unwrap().clone());
        assert_eq!(vec![1], formula.clause_references.get_vec(&3).unwrap().clone());
        assert_eq!(true, formula.clause_references.get_vec(&1).is_none());
    }

    /*
    Tests that the initial residual view mirrors the master formula with ids intact.
    */
    #[test]
    fn initial_residual_test() {
        let formula = Formula::new("./test_files/php_3_2.cnf".to_string());
        let residual = formula.residual();
        assert_eq!(9, residual.clause_list.len());
        assert_eq!(0, residual.clause_list[0].id);
        assert_eq!(vec![1, 2], residual.clause_list[0].live_literals);
        assert_eq!(false, residual.is_satisfied());
    }

    /* END OF DIMACS PARSING TESTS */

    /* START OF LOOKUP PROPAGATION TESTS */

    /*
    Tests that lookup propagation follows a chain of forced literals and
    returns them in dequeue order, starting literal first.
    */
    #[test]
    fn lookup_propagate_chain_test() {
        let residual = residual_from(3, vec![vec![-1, 2], vec![-2, 3]]);
        let propagations = lookup_propagate(&residual, 1);
        assert_eq!(vec![1, 2, 3], propagations);
    }

    /*
    Tests that lookup propagation keeps going when a clause empties instead of
    stopping at the conflict.
    */
    #[test]
    fn lookup_propagate_ignores_conflicts_test() {
        let residual = residual_from(4, vec![vec![-1, 2], vec![-1, -2], vec![-2, 3], vec![-1, 4]]);
        let propagations = lookup_propagate(&residual, 1);
        // 2 and -2 are both forced; the contradiction is not re-recorded and
        // the rest of the formula still propagates.
        assert!(propagations.contains(&2));
        assert!(propagations.contains(&-2));
        assert!(propagations.contains(&4));
    }

    /*
    Tests that a literal with no occurrences of its complement propagates nothing.
    */
    #[test]
    fn lookup_propagate_isolated_test() {
        let residual = residual_from(2, vec![vec![1, 2]]);
        let propagations = lookup_propagate(&residual, 1);
        assert_eq!(vec![1], propagations);
    }

    /* END OF LOOKUP PROPAGATION TESTS */

    /* START OF WITNESS CACHE TESTS */

    fn sample_witness(ids: Vec<usize>) -> Witness {
        let clauses = ids.into_iter().enumerate()
            .map(|(row, id)| ResidualClause {
                id,
                live_literals: vec![(2 * row + 1) as i32, (2 * row + 2) as i32],
                is_removed: false,
            })
            .collect();
        return Witness { clauses };
    }

    /*
    Tests that the first witness of a shape is named ph<rows>-<columns>_1.
    */
    #[test]
    fn cache_first_name_test() {
        let mut cache = WitnessCache::new();
        let name = cache.register(&sample_witness(vec![0, 1, 2]));
        assert_eq!("ph3-2_1", name);
    }

    /*
    Tests that registering the same canonical form twice returns the existing
    name without creating a new entry.
    */
    #[test]
    fn cache_stability_test() {
        let mut cache = WitnessCache::new();
        let first = cache.register(&sample_witness(vec![0, 1, 2]));
        let second = cache.register(&sample_witness(vec![0, 1, 2]));
        assert_eq!(first, second);
        assert_eq!(1, cache.entries.len());
    }

    /*
    Tests that a different witness of the same shape gets the next counter value.
    */
    #[test]
    fn cache_shape_counter_test() {
        let mut cache = WitnessCache::new();
        cache.register(&sample_witness(vec![0, 1, 2]));
        let name = cache.register(&sample_witness(vec![3, 4, 5]));
        assert_eq!("ph3-2_2", name);
    }

    /*
    Tests that witnesses equal up to clause order and literal order share one
    canonical form.
    */
    #[test]
    fn canonical_form_test() {
        let ordered = Witness { clauses: vec![
            ResidualClause { id: 0, live_literals: vec![1, 2], is_removed: false },
            ResidualClause { id: 1, live_literals: vec![3, 4], is_removed: false },
            ResidualClause { id: 2, live_literals: vec![5, 6], is_removed: false },
        ]};
        let shuffled = Witness { clauses: vec![
            ResidualClause { id: 2, live_literals: vec![6, 5], is_removed: false },
            ResidualClause { id: 0, live_literals: vec![2, 1], is_removed: false },
            ResidualClause { id: 1, live_literals: vec![4, 3], is_removed: false },
        ]};
        assert_eq!(ordered.canonical_form(), shuffled.canonical_form());
    }

    /* END OF WITNESS CACHE TESTS */

    /* START OF UTIL TESTS */

    /*
    Tests the dense table index of signed literals.
    */
    #[test]
    fn literal_index_test() {
        assert_eq!(0, literal_index(-4, 4));
        assert_eq!(8, literal_index(4, 4));
        assert_eq!(3, literal_index(-1, 4));
        assert_eq!(5, literal_index(1, 4));
    }

    /*
    Tests that the variable state sum counts both signs and prefers the
    majority sign.
    */
    #[test]
    fn get_variable_state_sum_test() {
        let residual = residual_from(3, vec![vec![1, 2], vec![1, 3], vec![-1, 2]]);
        let (appearances, choose_positive) = get_variable_state_sum(&residual.clause_references, 1);
        assert_eq!(3, appearances);
        assert_eq!(true, choose_positive);
        let (appearances, choose_positive) = get_variable_state_sum(&residual.clause_references, 2);
        assert_eq!(2, appearances);
        assert_eq!(true, choose_positive);
        let (appearances, _) = get_variable_state_sum(&residual.clause_references, 3);
        assert_eq!(1, appearances);
    }

    /*
    Tests that the instance name of a file path is extracted properly.
    */
    #[test]
    fn read_instance_name_test() {
        let file_path = "./benchmarks/uniform/uf20-01.cnf".to_string();
        assert_eq!("uf20-01.cnf".to_string(), read_instance_name(&file_path));
    }

    /* END OF UTIL TESTS */

    /* START OF CONFIG PARSER TESTS */

    /*
    Tests that an empty document yields the default configuration.
    */
    #[test]
    fn read_config_defaults_test() {
        let config = read_config_value(&json!({}));
        assert_eq!(LiteralSelection::Ordered, config.literal_selection);
        assert_eq!(true, config.pigeon_detection);
        assert_eq!(2, config.min_pigeons);
        assert_eq!(64, config.max_pigeons);
        assert_eq!("output.txt".to_string(), config.output);
    }

    /*
    Tests that provided keys override the defaults.
    */
    #[test]
    fn read_config_overrides_test() {
        let config = read_config_value(&json!({
            "SolverOptions": {
                "LiteralSelection": "VSS",
                "PigeonDetection": false,
                "MinPigeons": 3,
                "MaxPigeons": 16
            },
            "OutputFileName": "bench.txt"
        }));
        assert_eq!(LiteralSelection::VariableStateSum, config.literal_selection);
        assert_eq!(false, config.pigeon_detection);
        assert_eq!(3, config.min_pigeons);
        assert_eq!(16, config.max_pigeons);
        assert_eq!("bench.txt".to_string(), config.output);
    }

    /*
    Tests that a MaxPigeons value beyond the bitmask width is rejected.
    */
    #[test]
    #[should_panic]
    fn read_config_max_pigeons_limit_test() {
        read_config_value(&json!({"SolverOptions": {"MaxPigeons": 65}}));
    }

    /*
    Tests reading unsigned integers does not allow floats or strings.
    */
    #[test]
    fn read_usize_invalid_test() {
        assert_eq!(Some(3), read_number_json_usize(&json!(3)));
        assert_eq!(None, read_number_json_usize(&json!(0.25)));
        assert_eq!(None, read_number_json_usize(&json!("three")));
    }

    /*
    Tests reading Boolean values does not allow other types.
    */
    #[test]
    fn read_boolean_test() {
        assert_eq!(Some(true), read_boolean_json(&json!(true)));
        assert_eq!(None, read_boolean_json(&json!(1)));
    }

    /*
    Tests reading string values does not allow integers.
    */
    #[test]
    fn read_string_test() {
        assert_eq!(Some("name".to_string()), read_string_json(&json!("name")));
        assert_eq!(None, read_string_json(&json!(5)));
    }

    /*
    Tests reading literal selection accepts both schemes case-insensitively and
    nothing else.
    */
    #[test]
    fn read_literal_selection_test() {
        assert_eq!(Some(LiteralSelection::VariableStateSum), read_literal_selection_json(&json!("VSS")));
        assert_eq!(Some(LiteralSelection::Ordered), read_literal_selection_json(&json!("ordered")));
        assert_eq!(None, read_literal_selection_json(&json!("random")));
    }

    /* END OF CONFIG PARSER TESTS */
}
