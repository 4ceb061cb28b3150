use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

// Helper function to run the solver on a specific file path
fn run_solver(file_path: &str) -> Command {
    let mut cmd = Command::cargo_bin("pigeon_dpll").unwrap();
    cmd.arg(file_path);
    cmd
}

fn run_cnf(content: &str) -> (NamedTempFile, Command) {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    let cmd = run_solver(file.path().to_str().unwrap());
    (file, cmd)
}

#[test]
fn usage_error_without_arguments() {
    Command::cargo_bin("pigeon_dpll")
        .unwrap()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("usage"));
}

#[test]
fn missing_file_is_an_error() {
    run_solver("test_files/does_not_exist.cnf")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("cannot open"));
}

#[test]
fn pigeon_hole_instance_is_refuted_and_named() {
    run_solver("test_files/php_3_2.cnf")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unsatisfiable"))
        .stdout(predicate::str::contains("ph3-2_1"))
        .stdout(predicate::str::contains("Detected pigeons:"));
}

#[test]
fn four_pigeons_share_the_first_witness_name() {
    run_solver("test_files/php_4_2.cnf")
        .assert()
        .success()
        .stdout(predicate::str::contains("ph3-2_1"))
        .stdout(predicate::str::contains("ph3-2_2").not());
}

#[test]
fn satisfiable_instance_prints_assignment() {
    run_solver("test_files/simple_sat.cnf")
        .assert()
        .success()
        .stdout(predicate::str::contains("Satisfiable"))
        .stdout(predicate::str::contains("Assignment:"));
}

#[test]
fn unit_clauses_are_consumed_before_search() {
    let (_file, mut cmd) = run_cnf("p cnf 4 4\n1 0\n-1 2 0\n-2 3 4 0\n-3 0\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Satisfiable"));
}

#[test]
fn conflicting_instance_is_refuted_without_witnesses() {
    let (_file, mut cmd) = run_cnf("p cnf 2 4\n1 2 0\n1 -2 0\n-1 2 0\n-1 -2 0\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Unsatisfiable"))
        .stdout(predicate::str::contains("ph3-2").not());
}
