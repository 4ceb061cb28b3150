mod unit_propagate;
mod dpll;
mod bench;

use std::{sync::{Arc, Mutex}, time::Instant};

use crate::{dpll::{dpll::{dpll, SearchResult}, bench::run_bench_group}, data_structures::{Formula, Config, SearchContext, SolverError, WitnessCache}};

/*
A function to load a DIMACS instance and run the DPLL search with inline
pigeon-hole detection, printing the outcome and the named witnesses.
*/
pub fn run_instance(filename: String, config: Config, cache: Arc<Mutex<WitnessCache>>) -> Result<(), SolverError> {
    let timer = Instant::now();
    let formula = Formula::new(filename);
    let context = &mut SearchContext::new(&formula, config, cache);
    let result = dpll(&formula.residual(), &Vec::new(), formula.initial_units.clone(), &mut Vec::new(), context, timer)?;
    match &result {
        SearchResult::Satisfiable(assignment) => {
            println!("Satisfiable");
            println!("Assignment: {:?}", assignment);
        },
        SearchResult::Unsatisfiable => println!("Unsatisfiable"),
        SearchResult::Timeout => println!("Runtime has timed out - > 30 seconds."),
    }
    context.cache.lock().unwrap().print_known();
    return Ok(());
}

/*
A function to run every DIMACS instance in a directory, each with a fresh
witness cache, and store the results in a file.
*/
pub fn run_bench_directory(path: String, config: Config) -> Result<(), SolverError> {
    let output = config.output.clone();
    return run_bench_group(path, config, &output);
}
