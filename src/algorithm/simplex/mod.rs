//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! algorithm is implemented as described in chapters 2 and 4 of Combinatorial Optimization, a book
//! by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! Only the tableau form is implemented, and every intermediate tableau is kept so that the
//! computation can be replayed one pivot at a time.
use serde::Serialize;

use crate::algorithm::SolveError;
use crate::algorithm::simplex::strategy::pivot_rule::{FirstProfitable, PivotRuleKind, SteepestDescentAlongVariable};
use crate::algorithm::simplex::tableau::Tableau;
use crate::algorithm::simplex::trace::Trace;
use crate::data::linear_program::elements::{Constraint, LinearExpression};
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::verification::Verification;

pub mod logic;
pub mod strategy;
pub mod tableau;
pub mod trace;

/// Default maximum number of pivots.
pub const MAX_ITERATIONS: usize = 20;

/// Settings of a single solve.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct SolverOptions {
    /// Number of pivots after which the solve fails.
    pub max_iterations: usize,
    /// Absolute tolerance for the invariant checks.
    pub tolerance: f64,
    /// How the entering variable is chosen.
    pub pivot_rule: PivotRuleKind,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
            tolerance: 1e-9,
            pivot_rule: PivotRuleKind::default(),
        }
    }
}

/// Everything a solve produces.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SolveResult {
    /// A snapshot before each pivot and a final one.
    pub trace: Trace,
    /// Values read from the final tableau.
    pub solution: Solution,
    /// Decision variables in column order.
    pub variable_list: Vec<char>,
    /// The constraints, as they were given.
    pub constraints: Vec<Constraint>,
    /// The objective function, as it was given.
    pub objective: LinearExpression,
}

impl SolveResult {
    /// Substitute the solution back into the problem.
    pub fn verify(&self) -> Verification {
        Verification::new(&self.objective, &self.constraints, &self.variable_list, &self.solution)
    }
}

/// Maximize an objective function subject to constraints.
///
/// A slack is added to every constraint and the slacks form the first basis. Constraints of type
/// `>=` and `=` are not given artificial variables, see `Tableau::new`.
///
/// # Errors
///
/// When the problem is unbounded, when no optimum was found within the maximum number of pivots,
/// or when a coefficient or right hand side is not a finite number. No trace is returned.
pub fn solve(
    objective: LinearExpression,
    constraints: Vec<Constraint>,
    options: &SolverOptions,
) -> Result<SolveResult, SolveError> {
    log::info!(
        "Solving a problem with {} constraint(s), pivot rule {:?}",
        constraints.len(), options.pivot_rule,
    );

    let variable_list = Tableau::variable_list(&objective, &constraints);
    let mut tableau = Tableau::new(&objective, &constraints);

    let trace = match options.pivot_rule {
        PivotRuleKind::Dantzig => logic::primal::<SteepestDescentAlongVariable>(
            &mut tableau, options.max_iterations, options.tolerance,
        ),
        PivotRuleKind::FirstProfitable => logic::primal::<FirstProfitable>(
            &mut tableau, options.max_iterations, options.tolerance,
        ),
    }?;

    let solution = Solution::from_tableau(&tableau, &variable_list);
    log::info!("Solution: {}", solution);

    Ok(SolveResult { trace, solution, variable_list, constraints, objective })
}
