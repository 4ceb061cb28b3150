use std::{fs::File, path::Path};
use serde_json::Value;

use crate::data_structures::{LiteralSelection, Config};

/*
A function to read the configuration of the solver within config.json.
Every key is optional; missing keys fall back to the defaults, and a missing
config.json means the full default configuration.

Returns the solver Config.
*/
pub fn read_config_json() -> Config {
    if !Path::new("./config.json").exists() {
        return Config::default_config();
    }
    let file = File::open("./config.json").expect("config.json should be readable");
    let json: Value = serde_json::from_reader(file).expect("config.json should be valid JSON");
    return read_config_value(&json);
}

/*
A function to build a Config from a parsed JSON document. Split out from
read_config_json so the parsing rules can be tested without a file.
*/
pub fn read_config_value(json: &Value) -> Config {
    let defaults = Config::default_config();
    let solver_options = json.get("SolverOptions");

    let literal_selection = match solver_options.and_then(|options| options.get("LiteralSelection")) {
        Some(value) => read_literal_selection_json(value).expect("LiteralSelection should be a valid type: VSS or Ordered"),
        None => defaults.literal_selection,
    };
    let pigeon_detection = match solver_options.and_then(|options| options.get("PigeonDetection")) {
        Some(value) => read_boolean_json(value).expect("PigeonDetection should be a Boolean value"),
        None => defaults.pigeon_detection,
    };
    let min_pigeons = match solver_options.and_then(|options| options.get("MinPigeons")) {
        Some(value) => read_number_json_usize(value).expect("MinPigeons should be an unsigned integer"),
        None => defaults.min_pigeons,
    };
    let max_pigeons = match solver_options.and_then(|options| options.get("MaxPigeons")) {
        Some(value) => read_number_json_usize(value).expect("MaxPigeons should be an unsigned integer"),
        None => defaults.max_pigeons,
    };
    if max_pigeons > 64 {
        panic!("MaxPigeons is limited to 64, the width of the mark bitmasks");
    }
    let output = match json.get("OutputFileName") {
        Some(value) => read_string_json(value).expect("OutputFileName must be a string"),
        None => defaults.output,
    };

    return Config {
        literal_selection,
        pigeon_detection,
        min_pigeons,
        max_pigeons,
        output,
    };
}

/*
A function to read usize numbers from json. Returns usize value or None if invalid.
*/
pub fn read_number_json_usize(value: &Value) -> Option<usize> {
    if value.is_number() && !value.is_f64() {
        return Some(value.as_u64().unwrap() as usize);
    }
    return None;
}

/*
A function to read LiteralSelection objects from json. Returns LiteralSelection object or None if invalid.
*/
pub fn read_literal_selection_json(value: &Value) -> Option<LiteralSelection> {
    if value.is_string() {
        if value.as_str().unwrap().to_lowercase().eq("vss") {
            return Some(LiteralSelection::VariableStateSum);
        } else if value.as_str().unwrap().to_lowercase().eq("ordered") {
            return Some(LiteralSelection::Ordered);
        }
    }
    return None;
}

/*
A function to read Boolean values from json. Returns Boolean value or None if invalid.
*/
pub fn read_boolean_json(value: &Value) -> Option<bool> {
    if value.is_boolean() {
        return value.as_bool();
    } else {
        return None;
    }
}

/*
A function to read String values from json. Returns String value or None if invalid.
*/
pub fn read_string_json(value: &Value) -> Option<String> {
    if value.is_string() {
        return Some(value.as_str().unwrap().to_string());
    }
    return None;
}
