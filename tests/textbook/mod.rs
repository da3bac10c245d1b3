//! # Textbook problems
//!
//! Small problems as they appear in introductory courses, each small enough to check by hand.
use std::path::{Path, PathBuf};

use relp_steps::algorithm::SolveError;
use relp_steps::algorithm::simplex::{solve, SolveResult, SolverOptions};
use relp_steps::io::import;

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Relative path of the folder where the problem files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of the problem file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("lp")
}

fn solve_with(file_name: &str, options: &SolverOptions) -> Result<SolveResult, SolveError> {
    let path = get_test_file_path(file_name);
    let (objective, constraints) = import(&path).unwrap().into_program().unwrap();

    solve(objective, constraints, options)
}

fn solve_file(file_name: &str) -> Result<SolveResult, SolveError> {
    solve_with(file_name, &SolverOptions::default())
}
