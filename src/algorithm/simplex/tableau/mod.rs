//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon
//! it.
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result as FormatResult};

use enum_map::EnumMap;
use itertools::repeat_n;
use serde::Serialize;

use crate::algorithm::simplex::trace::RatioTest;
use crate::algorithm::utilities::first_minimum_below;
use crate::data::linear_algebra::matrix::Dense;
use crate::data::linear_program::elements::{Constraint, ConstraintType, LinearExpression, Variable};

/// The full simplex tableau of a problem in standard maximization form.
///
/// There is a row for each constraint and a last row for the objective function. The columns are
/// the decision variables, the slack variables and finally the right hand side.
///
/// The objective row contains the negated objective coefficients, such that the tableau is
/// optimal when that row has no negative entries left.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tableau {
    /// Matrix of size `(m + 1) x (n + m + 1)`.
    ///
    /// Only the values change with a basis change, never the shape.
    matrix: Dense<f64>,
    /// Variable of each column except the right hand side: first the decision variables, sorted,
    /// then the slacks.
    columns: Vec<Variable>,
    /// Maps the rows to the variable that is basic in it. The objective row maps to `Objective`.
    ///
    /// This attribute changes with a basis change.
    basis: Vec<Variable>,
}

impl Tableau {
    /// Create the initial tableau.
    ///
    /// Each constraint gets a slack variable, and these slacks form the initial basis. No surplus
    /// or artificial variables are introduced, so constraints of type `Greater` and `Equal` are
    /// treated like `Less` constraints.
    ///
    /// # Arguments
    ///
    /// * `objective`: Function to maximize.
    /// * `constraints`: In order; constraint `i` is described by row `i` and has slack `s{i+1}`.
    pub fn new(objective: &LinearExpression, constraints: &[Constraint]) -> Self {
        let variables = Self::variable_list(objective, constraints);
        let nr_variables = variables.len();
        let nr_constraints = constraints.len();

        let mut counts = EnumMap::<ConstraintType, usize>::default();
        for constraint in constraints {
            counts[constraint.relation] += 1;
        }
        if counts[ConstraintType::Greater] + counts[ConstraintType::Equal] > 0 {
            log::warn!(
                "{} \">=\" and {} \"=\" constraint(s) are given a slack as if they were \"<=\"; \
                 the result may not satisfy them",
                counts[ConstraintType::Greater], counts[ConstraintType::Equal],
            );
        }

        let mut matrix = Dense::zeros(nr_constraints + 1, nr_variables + nr_constraints + 1);
        for (i, constraint) in constraints.iter().enumerate() {
            for (j, &variable) in variables.iter().enumerate() {
                matrix.set_value(i, j, constraint.expression.coefficient(variable));
            }
            matrix.set_value(i, nr_variables + i, 1f64);
            matrix.set_value(i, nr_variables + nr_constraints, constraint.rhs);
        }
        for (j, &variable) in variables.iter().enumerate() {
            matrix.set_value(nr_constraints, j, -objective.coefficient(variable));
        }

        let columns = variables.iter().copied().map(Variable::Decision)
            .chain((0..nr_constraints).map(Variable::Slack))
            .collect();
        let basis = (0..nr_constraints).map(Variable::Slack)
            .chain(std::iter::once(Variable::Objective))
            .collect();

        log::debug!(
            "Built a tableau with {} constraint rows and {} variable columns",
            nr_constraints, nr_variables + nr_constraints,
        );

        Self { matrix, columns, basis }
    }

    /// All decision variables in the objective or any of the constraints, sorted.
    pub fn variable_list(objective: &LinearExpression, constraints: &[Constraint]) -> Vec<char> {
        objective.variables()
            .chain(constraints.iter().flat_map(|constraint| constraint.expression.variables()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Determine the pivot row candidates for a pivot column.
    ///
    /// Each row with a strictly positive entry in the column gets a ratio between its right hand
    /// side and that entry. The first row with the smallest ratio is marked as the minimum.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the pivot column, in range `0` until `self.nr_columns()`.
    ///
    /// # Return value
    ///
    /// A value for each row of the tableau, including `None` for the objective row.
    pub fn ratio_test(&self, column: usize) -> Vec<Option<RatioTest>> {
        debug_assert!(column < self.nr_columns());

        let mut ratios = (0..self.nr_rows())
            .map(|row| {
                let entry = self.entry(row, column);
                (entry > 0f64).then(|| RatioTest::new(self.rhs(row), entry))
            })
            .collect::<Vec<_>>();

        let candidates = ratios.iter()
            .enumerate()
            .filter_map(|(row, ratio)| ratio.as_ref().map(|ratio| (row, ratio.value)));
        if let Some((row, _)) = first_minimum_below(candidates, f64::INFINITY) {
            if let Some(ratio) = ratios[row].as_mut() {
                ratio.is_minimum = true;
            }
        }

        ratios.push(None);
        ratios
    }

    /// Determine the row to pivot on, given the column.
    ///
    /// This is the row with the positive but minimal ratio between the right hand side and the
    /// column. Ties are broken by taking the lowest row index.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded.
    pub fn select_primal_pivot_row(ratios: &[Option<RatioTest>]) -> Option<usize> {
        ratios.iter().position(|ratio| ratio.as_ref().is_some_and(|ratio| ratio.is_minimum))
    }

    /// Pivot: bring the variable of a column into the basis in the place of a row's variable.
    ///
    /// The pivot row is divided by the pivot element, after which the pivot row, multiplied with
    /// each other row's original entry in the pivot column, is subtracted from that row.
    pub fn bring_into_basis(&mut self, pivot_row: usize, pivot_column: usize) {
        debug_assert!(pivot_row < self.nr_rows());
        debug_assert!(pivot_column < self.nr_columns());

        let pivot_element = self.matrix.get_value(pivot_row, pivot_column);
        debug_assert!(pivot_element > 0f64);

        self.matrix.divide_row(pivot_row, pivot_element);
        for row in (0..self.matrix.nr_rows()).filter(|&row| row != pivot_row) {
            let factor = self.matrix.get_value(row, pivot_column);
            self.matrix.sub_multiple_of_row(pivot_row, row, factor);
        }

        self.basis[pivot_row] = self.columns[pivot_column];
    }

    /// The first row, objective row included, with a value that is `NaN` or infinite.
    pub fn first_non_finite_row(&self) -> Option<usize> {
        self.matrix.rows().position(|row| row.iter().any(|value| !value.is_finite()))
    }

    /// Value in the tableau, the right hand side column and objective row included.
    pub fn entry(&self, row: usize, column: usize) -> f64 {
        self.matrix.get_value(row, column)
    }

    /// Right hand side of a row, in range `0` through `self.nr_rows()` (the objective row).
    pub fn rhs(&self, row: usize) -> f64 {
        self.matrix.get_value(row, self.nr_columns())
    }

    /// Entry of the objective row in a column.
    ///
    /// The tableau is optimal when none of these are negative.
    pub fn relative_cost(&self, column: usize) -> f64 {
        debug_assert!(column < self.nr_columns());

        self.matrix.get_value(self.nr_rows(), column)
    }

    /// Get the value of the objective function of the current solution.
    pub fn objective_function_value(&self) -> f64 {
        self.rhs(self.nr_rows())
    }

    /// The row in which a variable is basic, if any.
    pub fn basic_row(&self, variable: Variable) -> Option<usize> {
        self.basis.iter().position(|&basic| basic == variable)
    }

    /// Variable of each column except the right hand side.
    pub fn columns(&self) -> &[Variable] {
        &self.columns
    }

    /// Basic variable of each row, the objective row included.
    pub fn basis(&self) -> &[Variable] {
        &self.basis
    }

    /// The underlying matrix, right hand side and objective row included.
    pub fn matrix(&self) -> &Dense<f64> {
        &self.matrix
    }

    /// Number of constraint rows in the tableau, the objective row not included.
    pub fn nr_rows(&self) -> usize {
        self.matrix.nr_rows() - 1
    }

    /// Number of variable columns in the tableau, the right hand side not included.
    pub fn nr_columns(&self) -> usize {
        self.columns.len()
    }
}

/// Check whether each basic variable has a unit column: a one in its own row and zeros in all
/// other rows, the objective row included.
///
/// The objective row itself should be labelled `Objective`, and no variable may be basic twice.
pub fn has_unit_basis(tableau: &Tableau, tolerance: f64) -> bool {
    let objective_row = tableau.nr_rows();
    if tableau.basis.len() != objective_row + 1 || tableau.basis[objective_row] != Variable::Objective {
        return false;
    }

    tableau.basis[..objective_row].iter().enumerate().all(|(i, &basic)| {
        let unique = tableau.basic_row(basic) == Some(i);
        let unit = tableau.columns.iter().position(|&column| column == basic)
            .is_some_and(|j| (0..=objective_row).all(|row| {
                let expected = if row == i { 1f64 } else { 0f64 };
                (tableau.entry(row, j) - expected).abs() <= tolerance
            }));

        unique && unit
    })
}

/// Check whether all constraint rows have a non negative right hand side.
pub fn is_primal_feasible(tableau: &Tableau, tolerance: f64) -> bool {
    (0..tableau.nr_rows()).all(|row| tableau.rhs(row) >= -tolerance)
}

/// Check whether the tableau currently has a valid basic feasible solution.
pub fn is_in_basic_feasible_solution_state(tableau: &Tableau, tolerance: f64) -> bool {
    has_unit_basis(tableau, tolerance) && is_primal_feasible(tableau, tolerance)
}

impl Display for Tableau {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "Tableau:")?;

        let column_width = 10;
        let counter_width = 8;
        let line_width = counter_width + (2 + self.nr_columns()) * column_width;

        // Column names
        write!(f, "{0:>width$}", "basic |", width = counter_width)?;
        for variable in &self.columns {
            write!(f, "{0:^width$}", variable.to_string(), width = column_width)?;
        }
        writeln!(f, "|{0:^width$}", "RHS", width = column_width)?;

        // Separator
        writeln!(f, "{}", repeat_n("-", line_width).collect::<String>())?;

        for (row, basic) in self.basis.iter().enumerate() {
            if row == self.nr_rows() {
                writeln!(f, "{}", repeat_n("-", line_width).collect::<String>())?;
            }
            write!(f, "{0:>width$}", format!("{} |", basic), width = counter_width)?;
            for column in 0..self.nr_columns() {
                write!(f, "{0:^width$.5}", self.entry(row, column), width = column_width)?;
            }
            writeln!(f, "|{0:^width$.5}", self.rhs(row), width = column_width)?;
        }

        Ok(())
    }
}
