use std::{fs::File, io::{self, BufRead}, path::Path, collections::HashMap, fmt, sync::{Arc, Mutex}};
use multimap::MultiMap;

use crate::util::literal_index;

/*
An enum to store the type of decision literal selection.
*/
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LiteralSelection {
    Ordered, // In-order selection
    VariableStateSum, // Variable State Sum selection
}

/*
A struct to store the solver configuration.

min_pigeons/max_pigeons bound the reference clause lengths the detector will
start from. Bitmasks are 64-bit words, so max_pigeons never exceeds 64.
*/
#[derive(Clone)]
pub struct Config {
    pub literal_selection: LiteralSelection,
    pub pigeon_detection: bool,
    pub min_pigeons: usize,
    pub max_pigeons: usize,
    pub output: String,
}

impl Config {
    /*
    Create the default configuration, used when no config.json is present.
    */
    pub fn default_config() -> Self {
        return Config {
            literal_selection: LiteralSelection::Ordered,
            pigeon_detection: true,
            min_pigeons: 2,
            max_pigeons: 64,
            output: "output.txt".to_string(),
        };
    }

    pub fn pigeon_detection_enabled(&self) -> bool {
        return self.pigeon_detection;
    }
}

/*
A struct to store statistics relating to number of unit propagations,
backtrack counts, and detected witness counts.
*/
#[derive(Clone)]
pub struct Statistics {
    pub propagation_count: i32,
    pub backtrack_count: i32,
    pub witness_count: i32,
}

impl Statistics {
    /*
    Create an empty statistics struct.
    */
    pub fn new() -> Self {
        Statistics { propagation_count: 0, backtrack_count: 0, witness_count: 0 }
    }

    /*
    A function to increment propagation count.
    */
    pub fn increment_propagation_count(&mut self) {
        self.propagation_count += 1;
    }

    /*
    A function to increment backtrack count.
    */
    pub fn increment_backtrack_count(&mut self) {
        self.backtrack_count += 1;
    }

    /*
    A function to increment the number of witnesses found.
    */
    pub fn increment_witness_count(&mut self) {
        self.witness_count += 1;
    }
}

/*
The fatal contract violation between the search layer and the detector:
a residual clause carries an id that the master formula does not know.
*/
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    UnknownClauseId { id: usize },
}

impl fmt::Display for SolverError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolverError::UnknownClauseId { id } => {
                write!(formatter, "clause id {} appears in the residual but not in the master formula", id)
            }
        }
    }
}

/*
A struct for storing a clause of the master formula. The id is the clause's
zero-based position in the long-clause stream of the DIMACS source and stays
stable across residual simplification.
*/
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MasterClause {
    pub id: usize,
    pub literals: Vec<i32>,
}

/*
A struct for storing the parsed master formula.

- clause_list stores the long clauses (length >= 2) with their stable ids.
- clause_references stores the literal occurrence lists - in a multimap for O(1) access.
- initial_units stores the unit clauses of the source, consumed into the
  initial propagation queue before the search starts.
*/
pub struct Formula {
    pub num_variables: i32,
    pub clause_list: Vec<MasterClause>,
    pub clause_references: MultiMap<i32, usize>,
    pub initial_units: Vec<i32>,
}

impl Formula {
    /*
    Parses a CNF instance stored in DIMACS format and generates the master formula.
    */
    pub fn new(filename: String) -> Self {
        let mut num_variables = 0;
        let mut clause_list = Vec::new();
        let mut clause_references = MultiMap::new();
        let mut initial_units = Vec::new();
        let mut clause_count = 0;
        if let Ok(lines) = Formula::read_lines(filename) {
            for line in lines {
                if let Ok(l) = line {
                    let fields: Vec<&str> = l.split_whitespace().collect();
                    if fields.is_empty() || fields[0].eq("c") {
                        continue;
                    }
                    if fields[0].eq("p") {
                        num_variables = fields[2].parse().expect("the problem line should hold the variable count");
                        continue;
                    }
                    let literals: Vec<i32> = fields.iter()
                        .filter_map(|field| field.parse().ok())
                        .take_while(|&literal| literal != 0)
                        .collect();
                    if literals.len() == 1 {
                        initial_units.push(literals[0]);
                    } else if !literals.is_empty() {
                        for literal in &literals {
                            clause_references.insert(*literal, clause_count);
                        }
                        clause_list.push(MasterClause { id: clause_count, literals });
                        clause_count += 1;
                    }
                }
            }
        }
        return Formula { num_variables, clause_list, clause_references, initial_units };
    }

    /*
    A function to parse a given file into separate lines.
    */
    pub fn read_lines<P>(filename: P) -> io::Result<io::Lines<io::BufReader<File>>>
    where P: AsRef<Path>, {
        let file = File::open(filename)?;
        Ok(io::BufReader::new(file).lines())
    }

    /*
    A function to build the initial residual view of the formula, with every
    long clause live and untouched.
    */
    pub fn residual(&self) -> ResidualFormula {
        let mut clause_list = Vec::new();
        for clause in &self.clause_list {
            clause_list.push(ResidualClause {
                id: clause.id,
                live_literals: clause.literals.clone(),
                is_removed: false,
            });
        }
        return ResidualFormula::from_clauses(self.num_variables, clause_list);
    }
}

/*
A struct for storing a single clause of the residual formula: the master
clause id plus the literals not yet falsified. The is_removed variable marks
satisfied clauses during propagation; compacting drops them.
*/
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResidualClause {
    pub id: usize,
    pub live_literals: Vec<i32>,
    pub is_removed: bool,
}

impl ResidualClause {
    /*
    A function that checks for a unit clause and returns the unit literal if there is one.
    */
    pub fn is_unit_clause(&self) -> Option<i32> {
        if self.live_literals.len() == 1 && !self.is_removed {
            return Some(self.live_literals[0]);
        } else {
            return None;
        }
    }

    /*
    A function to check whether the given clause contains no literals.
    */
    pub fn is_empty(&self) -> bool {
        return self.live_literals.is_empty() && !self.is_removed;
    }

    /*
    A function that removes the given literal from the clause.
    */
    pub fn remove_literal(&mut self, literal: i32) {
        self.live_literals.retain(|&x| x != literal);
    }

    /*
    A function to check whether two clauses mention a common variable.
    */
    pub fn shares_variable_with(&self, other: &ResidualClause) -> bool {
        for literal in &self.live_literals {
            if other.live_literals.contains(literal) || other.live_literals.contains(&-literal) {
                return true;
            }
        }
        return false;
    }
}

/*
A struct for storing the residual formula: the clauses still live under the
current partial assignment, with literal occurrence lists in a multimap.
The multimap values are positions in clause_list, not clause ids.
*/
#[derive(Clone)]
pub struct ResidualFormula {
    pub num_variables: i32,
    pub clause_list: Vec<ResidualClause>,
    pub clause_references: MultiMap<i32, usize>,
}

impl ResidualFormula {
    /*
    A function to build a residual formula from a clause list, dropping removed
    clauses and rebuilding the occurrence lists.
    */
    pub fn from_clauses(num_variables: i32, clause_list: Vec<ResidualClause>) -> Self {
        let mut live_clauses = Vec::new();
        for clause in clause_list {
            if !clause.is_removed {
                live_clauses.push(clause);
            }
        }
        let mut clause_references = MultiMap::new();
        for (position, clause) in live_clauses.iter().enumerate() {
            for literal in &clause.live_literals {
                clause_references.insert(*literal, position);
            }
        }
        return ResidualFormula { num_variables, clause_list: live_clauses, clause_references };
    }

    /*
    The length of the dense flag and mark tables over signed literals.
    Literal l lives at index l + num_variables, see util::literal_index.
    */
    pub fn flag_length(&self) -> usize {
        return (2 * self.num_variables + 1) as usize;
    }

    /*
    A function to check whether no clauses remain, meaning the current
    assignment satisfies every remaining constraint.
    */
    pub fn is_satisfied(&self) -> bool {
        return self.clause_list.is_empty();
    }
}

/*
A pigeon-hole witness: k+1 clauses of length k, reordered so that for any two
clauses A and B and any position i, assigning A[i] true propagates -B[i].
Clauses are sorted by id on construction.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct Witness {
    pub clauses: Vec<ResidualClause>,
}

impl Witness {
    /*
    The number of at-least-one clauses in the witness (k+1).
    */
    pub fn rows(&self) -> usize {
        return self.clauses.len();
    }

    /*
    The common clause length (k).
    */
    pub fn columns(&self) -> usize {
        return self.clauses[0].live_literals.len();
    }

    /*
    A function to compute the canonical form used for cache comparison:
    clauses sorted by id, literals within each clause sorted by variable.
    */
    pub fn canonical_form(&self) -> Vec<(usize, Vec<i32>)> {
        let mut form = Vec::new();
        for clause in &self.clauses {
            let mut literals = clause.live_literals.clone();
            literals.sort_by_key(|literal| literal.abs());
            form.push((clause.id, literals));
        }
        form.sort_by_key(|entry| entry.0);
        return form;
    }
}

/*
A struct for storing one named witness in the cache.
*/
pub struct CachedWitness {
    pub name: String,
    pub canonical: Vec<(usize, Vec<i32>)>,
}

/*
The process-wide cache of named witnesses. Entries are append-only and keep
insertion order so the naming sequence is reproducible. Names follow the
pattern ph<rows>-<columns>_<n> with one counter per shape.
*/
pub struct WitnessCache {
    pub entries: Vec<CachedWitness>,
    pub shape_counters: HashMap<(usize, usize), usize>,
}

impl WitnessCache {
    /*
    Create an empty cache.
    */
    pub fn new() -> Self {
        return WitnessCache { entries: Vec::new(), shape_counters: HashMap::new() };
    }

    /*
    A function to register a witness. Returns the existing name when a witness
    with the same canonical form is already cached, otherwise assigns and
    returns a fresh name.
    */
    pub fn register(&mut self, witness: &Witness) -> String {
        let canonical = witness.canonical_form();
        for entry in &self.entries {
            if entry.canonical.eq(&canonical) {
                return entry.name.clone();
            }
        }
        let shape = (witness.rows(), witness.columns());
        let count = if self.shape_counters.contains_key(&shape) { self.shape_counters.get(&shape).unwrap() + 1 } else { 1 };
        self.shape_counters.insert(shape, count);
        let name = format!("ph{}-{}_{}", shape.0, shape.1, count);
        self.entries.push(CachedWitness { name: name.clone(), canonical });
        return name;
    }

    /*
    A function to print every named witness in discovery order.
    */
    pub fn print_known(&self) {
        println!("\nDetected pigeons:");
        for entry in &self.entries {
            println!("\n {} = {:?}", entry.name, entry.canonical);
        }
    }
}

/*
A struct bundling the state threaded through one search: the configuration,
the running statistics, the master clause count (the id space for consider
and blocked flags), and the shared witness cache. The cache sits behind a
mutex so the interrupt handler can print it mid-search.
*/
pub struct SearchContext {
    pub config: Config,
    pub statistics: Statistics,
    pub total_clauses: usize,
    pub cache: Arc<Mutex<WitnessCache>>,
}

impl SearchContext {
    /*
    Create a search context for one instance.
    */
    pub fn new(formula: &Formula, config: Config, cache: Arc<Mutex<WitnessCache>>) -> Self {
        return SearchContext {
            config,
            statistics: Statistics::new(),
            total_clauses: formula.clause_list.len(),
            cache,
        };
    }
}

/*
A struct for storing one dense flag table over signed literals, used by the
propagators for assigned and queued flags.
*/
pub struct LiteralFlags {
    pub flags: Vec<u8>,
    num_variables: i32,
}

impl LiteralFlags {
    /*
    Create a zeroed flag table for num_variables variables.
    */
    pub fn new(num_variables: i32) -> Self {
        return LiteralFlags {
            flags: vec![0; (2 * num_variables + 1) as usize],
            num_variables,
        };
    }

    pub fn is_set(&self, literal: i32) -> bool {
        return self.flags[literal_index(literal, self.num_variables)] == 1;
    }

    pub fn set(&mut self, literal: i32) {
        self.flags[literal_index(literal, self.num_variables)] = 1;
    }

    pub fn clear(&mut self, literal: i32) {
        self.flags[literal_index(literal, self.num_variables)] = 0;
    }
}
