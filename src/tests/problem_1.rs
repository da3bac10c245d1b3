//! Two products sharing two resources.
//!
//! Maximize `1.5x + 1.2y` subject to `2x + 3y <= 24` and `6x + 3y <= 48`. The optimum is `x = 6`,
//! `y = 4` with value `13.8`, after two pivots.
use approx::assert_abs_diff_eq;

use crate::algorithm::simplex::{solve, SolverOptions};
use crate::data::linear_algebra::matrix::Dense;
use crate::data::linear_program::elements::{Constraint, ConstraintType, LinearExpression};
use crate::io::problem::{self, ConstraintRow, ProblemText};

#[test]
fn conversion_pipeline() {
    // Text
    let text = problem::parse(PROBLEM_LITERAL_STRING).unwrap();
    assert_eq!(text, problem_text());

    // Program
    let (objective, constraints) = text.into_program().unwrap();
    assert_eq!((objective.clone(), constraints.clone()), program());

    // Solve
    let result = solve(objective, constraints, &SolverOptions::default()).unwrap();
    assert_eq!(result.variable_list, vec!['x', 'y']);
    assert_eq!(result.trace.nr_pivots(), 2);
    assert_eq!(result.trace.snapshots()[0].tableau.matrix(), &initial_matrix());
    assert_eq!(result.trace.snapshots()[1].tableau.matrix(), &matrix_after_first_pivot());

    assert_abs_diff_eq!(result.solution.value('x'), 6f64, epsilon = 1e-6);
    assert_abs_diff_eq!(result.solution.value('y'), 4f64, epsilon = 1e-6);
    assert_abs_diff_eq!(result.solution.objective_value(), 13.8f64, epsilon = 1e-6);
}

pub const PROBLEM_LITERAL_STRING: &str = "# Two products sharing two resources
max: 1.5x + 1.2y

2x + 3y <= 24
6x + 3y <= 48
";

/// The text as it is read from `PROBLEM_LITERAL_STRING`.
pub fn problem_text() -> ProblemText {
    ProblemText {
        objective: "1.5x + 1.2y".to_string(),
        rows: vec![
            ConstraintRow { expression: "2x + 3y".to_string(), relation: "<=".to_string(), rhs: "24".to_string() },
            ConstraintRow { expression: "6x + 3y".to_string(), relation: "<=".to_string(), rhs: "48".to_string() },
        ],
    }
}

/// Objective and constraints.
pub fn program() -> (LinearExpression, Vec<Constraint>) {
    let objective = LinearExpression::new(vec![('x', 1.5f64), ('y', 1.2f64)]);
    let constraints = vec![
        Constraint {
            expression: LinearExpression::new(vec![('x', 2f64), ('y', 3f64)]),
            relation: ConstraintType::Less,
            rhs: 24f64,
        },
        Constraint {
            expression: LinearExpression::new(vec![('x', 6f64), ('y', 3f64)]),
            relation: ConstraintType::Less,
            rhs: 48f64,
        },
    ];

    (objective, constraints)
}

/// Columns `x`, `y`, `s1`, `s2` and the right hand side.
pub fn initial_matrix() -> Dense<f64> {
    Dense::from_data(vec![
        vec![2f64, 3f64, 1f64, 0f64, 24f64],
        vec![6f64, 3f64, 0f64, 1f64, 48f64],
        vec![-1.5f64, -1.2f64, 0f64, 0f64, 0f64],
    ])
}

/// After `x` entered in the row of `s2`, on pivot element `6`.
///
/// The values are written as the operations that compute them, such that they are exactly equal.
pub fn matrix_after_first_pivot() -> Dense<f64> {
    let sixth = 1f64 / 6f64;
    Dense::from_data(vec![
        vec![0f64, 2f64, 1f64, 0f64 - 2f64 * sixth, 8f64],
        vec![1f64, 0.5f64, 0f64, sixth, 8f64],
        vec![0f64, -1.2f64 - -1.5f64 * 0.5f64, 0f64, 0f64 - -1.5f64 * sixth, 12f64],
    ])
}
