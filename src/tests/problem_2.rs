//! Product mix of a glass factory.
//!
//! Maximize `3x + 5y` subject to `x <= 4`, `2y <= 12` and `3x + 2y <= 18`. The optimum is `x = 2`,
//! `y = 6` with value `36`. The first constraint doesn't contain `y`, so its ratio is skipped in
//! the first iteration.
use approx::assert_abs_diff_eq;

use crate::algorithm::simplex::{solve, SolverOptions};
use crate::data::linear_program::elements::{Constraint, ConstraintType, LinearExpression};

/// Value of the objective function at the optimum.
pub const OPTIMUM: f64 = 36f64;

#[test]
fn solve_and_skip_zero_entries() {
    let (objective, constraints) = program();
    let result = solve(objective, constraints, &SolverOptions::default()).unwrap();

    let (first, step) = result.trace.pivots().next().unwrap();
    assert_eq!(first.number, 1);
    assert!(step.ratios[0].is_none());
    assert_abs_diff_eq!(step.ratios[1].as_ref().unwrap().value, 6f64);
    assert_abs_diff_eq!(step.ratios[2].as_ref().unwrap().value, 9f64);
    assert_eq!(step.pivot.row, 1);

    assert_eq!(result.trace.nr_pivots(), 2);
    assert_abs_diff_eq!(result.solution.value('x'), 2f64, epsilon = 1e-9);
    assert_abs_diff_eq!(result.solution.value('y'), 6f64, epsilon = 1e-9);
    assert_abs_diff_eq!(result.solution.objective_value(), OPTIMUM, epsilon = 1e-9);
}

/// Objective and constraints.
pub fn program() -> (LinearExpression, Vec<Constraint>) {
    let objective = LinearExpression::new(vec![('x', 3f64), ('y', 5f64)]);
    let constraints = vec![
        Constraint {
            expression: LinearExpression::new(vec![('x', 1f64)]),
            relation: ConstraintType::Less,
            rhs: 4f64,
        },
        Constraint {
            expression: LinearExpression::new(vec![('y', 2f64)]),
            relation: ConstraintType::Less,
            rhs: 12f64,
        },
        Constraint {
            expression: LinearExpression::new(vec![('x', 3f64), ('y', 2f64)]),
            relation: ConstraintType::Less,
            rhs: 18f64,
        },
    ];

    (objective, constraints)
}
