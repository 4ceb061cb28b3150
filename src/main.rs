use std::{env, fs, process, sync::{Arc, Mutex}};

use crate::data_structures::WitnessCache;

mod dpll;
mod detection;
mod lookup_propagation;
mod literal_selection;
mod parse_config;
mod data_structures;
mod util;
mod tests;

/*
The main function for running the DPLL search with inline pigeon-hole
detection.

Takes a single positional argument: either a DIMACS .cnf instance, or a
directory of instances to benchmark. Detector options are read from an
optional config.json. An interrupt prints the witnesses named so far and
exits with code 1.

See README.md for more information.
*/
fn main() {
    let arguments: Vec<String> = env::args().collect();
    if arguments.len() != 2 {
        println!("usage : pigeon_dpll instance.cnf");
        println!("usage : pigeon_dpll benchmark_directory");
        process::exit(1);
    }
    let path = arguments[1].clone();
    let config = parse_config::read_config_json();

    let cache = Arc::new(Mutex::new(WitnessCache::new()));
    let handler_cache = Arc::clone(&cache);
    ctrlc::set_handler(move || {
        handler_cache.lock().unwrap().print_known();
        process::exit(1);
    }).expect("the interrupt handler should install once");

    let metadata = fs::metadata(&path);
    if metadata.is_err() {
        println!("cannot open {}", path);
        process::exit(1);
    }
    let outcome = if metadata.unwrap().is_dir() { dpll::run_bench_directory(path, config) } else { dpll::run_instance(path, config, cache) };
    if let Err(error) = outcome {
        println!("error: {}", error);
        process::exit(1);
    }
}
