use approx::assert_abs_diff_eq;

use relp_steps::algorithm::SolveError;
use relp_steps::algorithm::simplex::SolverOptions;
use relp_steps::algorithm::simplex::strategy::pivot_rule::PivotRuleKind;
use relp_steps::data::linear_program::elements::Variable;
use relp_steps::data::linear_program::solution::Solution;
use relp_steps::io::error::ImportError;
use relp_steps::io::format::Fraction;
use relp_steps::io::import;
use relp_steps::io::render::Report;

use super::{get_test_file_path, problem_file_directory, solve_file, solve_with};

#[test]
fn two_products() {
    let result = solve_file("two_products").unwrap();

    assert_eq!(result.variable_list, vec!['x', 'y']);
    assert_eq!(result.trace.nr_pivots(), 2);
    assert_abs_diff_eq!(result.solution.value('x'), 6f64, epsilon = 1e-6);
    assert_abs_diff_eq!(result.solution.value('y'), 4f64, epsilon = 1e-6);
    assert_abs_diff_eq!(result.solution.objective_value(), 13.8f64, epsilon = 1e-6);
    assert!(result.verify().all_hold());

    let last = &result.trace.final_snapshot().unwrap().tableau;
    assert!((0..last.nr_columns()).all(|j| last.relative_cost(j) >= -1e-9));
}

#[test]
fn glass_factory() {
    let expected = Solution::new(36f64, vec![('x', 2f64), ('y', 6f64)]);

    for pivot_rule in [PivotRuleKind::Dantzig, PivotRuleKind::FirstProfitable] {
        let options = SolverOptions { pivot_rule, ..SolverOptions::default() };
        let result = solve_with("glass_factory", &options).unwrap();

        assert!(result.solution.is_close_to(&expected, 1e-9), "{}", result.solution);
    }
}

#[test]
fn unbounded() {
    let result = solve_file("unbounded");

    assert_eq!(result, Err(SolveError::Unbounded { iteration: 1, entering: Variable::Decision('x') }));
    assert!(result.unwrap_err().to_string().starts_with("Problem is unbounded"));
}

#[test]
fn degenerate() {
    let result = solve_file("degenerate").unwrap();

    // The ratio of the only row is zero: one pivot that doesn't change the objective value.
    assert_eq!(result.trace.nr_pivots(), 1);
    assert_eq!(result.solution.value('x'), 0f64);
    assert_eq!(result.solution.objective_value(), 0f64);
}

#[test]
fn greater_than_is_not_enforced() {
    let result = solve_file("greater_than").unwrap();

    assert_eq!(result.trace.nr_pivots(), 0);
    assert_eq!(result.solution.objective_value(), 0f64);

    let verification = result.verify();
    assert!(!verification.constraints[0].holds);
    assert!(verification.constraints[1].holds);
    assert!(verification.objective.holds);
    assert!(!verification.all_hold());
}

#[test]
fn incomplete_rows() {
    let result = solve_file("incomplete_rows").unwrap();

    assert_eq!(result.constraints.len(), 3);
    assert_eq!(result.variable_list, vec!['a', 'b', 'c']);
    assert_eq!(result.trace.nr_pivots(), 3);

    // Tie in the ratio test between the last two rows, the first one is taken.
    let (_, step) = result.trace.pivots().next().unwrap();
    assert_eq!(step.pivot.entering, Variable::Decision('b'));
    assert_eq!(step.pivot.row, 1);

    assert_eq!(result.solution.value('a'), 4f64);
    assert_eq!(result.solution.value('b'), 4f64);
    assert_eq!(result.solution.value('c'), 2f64);
    assert_eq!(result.solution.objective_value(), 22f64);
    assert!(result.verify().all_hold());
}

#[test]
fn unreadable_coefficient() {
    let result = solve_file("unreadable_coefficient");

    assert_eq!(result, Err(SolveError::NonFinite { iteration: 1, row: Variable::Slack(1) }));
}

#[test]
fn iteration_limit() {
    let options = SolverOptions { max_iterations: 1, ..SolverOptions::default() };
    let result = solve_with("two_products", &options);

    assert_eq!(result, Err(SolveError::IterationLimitExceeded { limit: 1 }));
    assert!(result.unwrap_err().to_string().starts_with("Maximum iterations exceeded"));
}

#[test]
fn report() {
    let result = solve_file("two_products").unwrap();
    let text = Report::new(&result, &Fraction).to_string();

    assert!(text.starts_with("LP model\n"));
    assert_eq!(text.matches("← smallest ratio").count(), 2);
    assert!(text.contains("Optimal solution: x = 6, y = 4, Z = 69/5"));
}

#[test]
fn import_errors() {
    let missing = import(&get_test_file_path("does_not_exist"));
    assert!(matches!(missing, Err(ImportError::IO(_))));

    let wrong_extension = import(&problem_file_directory().join("mod.rs"));
    assert!(matches!(wrong_extension, Err(ImportError::FileExtension(_))));
}
