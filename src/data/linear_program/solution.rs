//! # Representation of optimal solutions
//!
//! Once the tableau is optimal, the value of each decision variable is read from the right hand
//! side of the row in which it is basic. Variables that are not basic are zero.
use std::fmt;

use serde::Serialize;

use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_program::elements::Variable;

/// Values of all decision variables and the value of the objective function.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Solution {
    /// Value of the objective function for this solution.
    objective_value: f64,
    /// (variable name, solution value) tuples for all decision variables, in column order.
    solution_values: Vec<(char, f64)>,
}

impl Solution {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(objective_value: f64, solution_values: Vec<(char, f64)>) -> Self {
        Self { objective_value, solution_values }
    }

    /// Read the solution from a tableau.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Typically optimal, but any tableau with a valid basis has a basic solution.
    /// * `variables`: Decision variables to report a value for.
    pub fn from_tableau(tableau: &Tableau, variables: &[char]) -> Self {
        let solution_values = variables.iter()
            .map(|&variable| {
                let value = tableau.basic_row(Variable::Decision(variable))
                    .map_or(0f64, |row| tableau.rhs(row));
                (variable, value)
            })
            .collect();

        Self::new(tableau.objective_function_value(), solution_values)
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    /// Value of a variable, zero for variables not in the problem.
    pub fn value(&self, variable: char) -> f64 {
        self.solution_values.iter()
            .find(|&&(name, _)| name == variable)
            .map_or(0f64, |&(_, value)| value)
    }

    /// All `(variable, value)` pairs, in column order.
    pub fn values(&self) -> &[(char, f64)] {
        &self.solution_values
    }

    /// Whether two solutions are the same, up to an absolute error per value.
    pub fn is_close_to(&self, other: &Self, tolerance: f64) -> bool {
        (self.objective_value - other.objective_value).abs() <= tolerance
            && self.solution_values.len() == other.solution_values.len()
            && self.solution_values.iter().zip(&other.solution_values)
                .all(|(&(a, x), &(b, y))| a == b && (x - y).abs() <= tolerance)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (variable, value) in &self.solution_values {
            write!(f, "{} = {}, ", variable, value)?;
        }
        write!(f, "Z = {}", self.objective_value)
    }
}
