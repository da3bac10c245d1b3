//! # Checking a solution by substitution
//!
//! The values of a solution are substituted into each constraint and into the objective function,
//! keeping the intermediate products such that the check can be shown step by step.
use serde::Serialize;

use crate::data::linear_program::elements::{Constraint, ConstraintType, LinearExpression};
use crate::data::linear_program::solution::Solution;

/// Absolute error allowed when comparing a substituted total.
pub const CHECK_TOLERANCE: f64 = 1e-6;
/// Constraint coefficients smaller than this are left out of the substitution.
const CONSTRAINT_COEFFICIENT_TOLERANCE: f64 = 1e-9;
/// Objective coefficients smaller than this are left out of the substitution.
const OBJECTIVE_COEFFICIENT_TOLERANCE: f64 = 1e-12;

/// A coefficient multiplied with the value of its variable.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Product {
    #[allow(missing_docs)]
    pub variable: char,
    #[allow(missing_docs)]
    pub coefficient: f64,
    /// Value of the variable in the solution.
    pub value: f64,
}

impl Product {
    /// `coefficient * value`.
    pub fn result(&self) -> f64 {
        self.coefficient * self.value
    }
}

/// Substitution of the solution into one constraint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConstraintCheck {
    /// A product for each variable with a coefficient that is not (nearly) zero.
    pub products: Vec<Product>,
    /// Sum of the products.
    pub total: f64,
    #[allow(missing_docs)]
    pub relation: ConstraintType,
    #[allow(missing_docs)]
    pub rhs: f64,
    /// Whether `total (relation) rhs` holds, within `CHECK_TOLERANCE`.
    pub holds: bool,
}

/// Substitution of the solution into the objective function.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectiveCheck {
    /// A product for each variable with a coefficient that is not (nearly) zero.
    pub products: Vec<Product>,
    /// Sum of the products.
    pub total: f64,
    /// The objective value read from the tableau.
    pub objective_value: f64,
    /// Whether `total` equals `objective_value`, within `CHECK_TOLERANCE`.
    pub holds: bool,
}

/// All checks of a solution.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Verification {
    /// One for each constraint, in order.
    pub constraints: Vec<ConstraintCheck>,
    #[allow(missing_docs)]
    pub objective: ObjectiveCheck,
}

impl Verification {
    /// Substitute the solution into all constraints and the objective function.
    ///
    /// # Arguments
    ///
    /// * `objective`: The objective function that was maximized.
    /// * `constraints`: The constraints as they were given.
    /// * `variables`: Decision variables, in the order in which products are listed.
    /// * `solution`: The values to substitute.
    pub fn new(
        objective: &LinearExpression,
        constraints: &[Constraint],
        variables: &[char],
        solution: &Solution,
    ) -> Self {
        let constraints = constraints.iter()
            .map(|constraint| {
                let (products, total) = substitute(
                    &constraint.expression, variables, solution, CONSTRAINT_COEFFICIENT_TOLERANCE,
                );
                let holds = constraint.relation.holds(total, constraint.rhs, CHECK_TOLERANCE);
                ConstraintCheck { products, total, relation: constraint.relation, rhs: constraint.rhs, holds }
            })
            .collect();

        let (products, total) = substitute(objective, variables, solution, OBJECTIVE_COEFFICIENT_TOLERANCE);
        let objective_value = solution.objective_value();
        let objective = ObjectiveCheck {
            products,
            total,
            objective_value,
            holds: (total - objective_value).abs() < CHECK_TOLERANCE,
        };

        Self { constraints, objective }
    }

    /// Whether all constraints and the objective check hold.
    pub fn all_hold(&self) -> bool {
        self.constraints.iter().all(|check| check.holds) && self.objective.holds
    }
}

fn substitute(
    expression: &LinearExpression,
    variables: &[char],
    solution: &Solution,
    coefficient_tolerance: f64,
) -> (Vec<Product>, f64) {
    let products = variables.iter()
        .map(|&variable| Product {
            variable,
            coefficient: expression.coefficient(variable),
            value: solution.value(variable),
        })
        .filter(|product| product.coefficient.abs() >= coefficient_tolerance)
        .collect::<Vec<_>>();
    let total = products.iter().map(Product::result).sum();

    (products, total)
}
