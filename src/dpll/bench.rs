use std::{fs, sync::{Arc, Mutex}, time::Instant, collections::{HashMap, BTreeMap}};

use crate::{dpll::dpll::{dpll, SearchResult}, data_structures::{Formula, Config, SearchContext, SolverError, WitnessCache}, util::read_instance_name};

/*
A function to run a directory of files in DIMACS format. Each instance runs
with an automatic timeout at 30 seconds and a fresh witness cache, so the
naming sequence restarts per instance.

Stores detailed results in a file with the provided name "results-<filename_to_write>".
*/
pub fn run_bench_group(group: String, config: Config, filename_to_write: &str) -> Result<(), SolverError> {
    let mut test_times = BTreeMap::new();
    let paths = fs::read_dir(&group).expect("the benchmark directory should be readable");
    let (mut total, mut satisfiable, mut unsatisfiable, mut timeout) = (0, 0, 0, 0);
    let bench_timer = Instant::now();
    let mut statistic_database = HashMap::new();
    for path in paths {
        let instance_timer = Instant::now();
        let file_path = path.unwrap().path().display().to_string();
        if !file_path.ends_with(".cnf") {
            continue;
        }
        let formula = Formula::new(file_path.clone());
        let instance_name = read_instance_name(&file_path);
        let cache = Arc::new(Mutex::new(WitnessCache::new()));
        let context = &mut SearchContext::new(&formula, config.clone(), cache);
        let result = dpll(&formula.residual(), &Vec::new(), formula.initial_units.clone(), &mut Vec::new(), context, instance_timer)?;
        let label = match &result {
            SearchResult::Satisfiable(_) => "SAT",
            SearchResult::Unsatisfiable => "UNSAT",
            SearchResult::Timeout => "Timeout",
        };
        test_times.insert(instance_name.clone(), instance_timer.elapsed());
        statistic_database.insert(instance_name, (context.statistics.propagation_count, context.statistics.backtrack_count, context.statistics.witness_count, label));
        total += 1;
        match &result {
            SearchResult::Satisfiable(_) => satisfiable += 1,
            SearchResult::Unsatisfiable => unsatisfiable += 1,
            SearchResult::Timeout => timeout += 1,
        }
    }
    // Formatting to store overall results
    let mut output_string = format!("--- DPLL with pigeon-hole detection --- \nCONFIG: [Literal Selection: {:?}, Pigeon Detection: {}, Min Pigeons: {}, Max Pigeons: {}]",
                                            config.literal_selection, config.pigeon_detection, config.min_pigeons, config.max_pigeons);
    output_string += &format!("\n--------------------------------------------------------------\nTotal: {}, Sat: {}, Unsat: {}, Timeout: {}\nComplete time: {:?}", total,
                                satisfiable, unsatisfiable, timeout, bench_timer.elapsed());
    for (key, val) in test_times {
        let stats = statistic_database.get(&key).unwrap();
        output_string += &format!("\nInstance: {} -- Runtime: {:?} -- Result: {}  -- Propagations: {}, Backtracks: {}, Witnesses: {}", key, val, stats.3, stats.0, stats.1, stats.2);
    }
    let pathname = format!("results-{}", filename_to_write);
    fs::write(pathname, output_string).expect("Unable to write file");
    return Ok(());
}
