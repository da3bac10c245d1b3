//! # Pivot rules
//!
//! Strategies for choosing the entering variable.
use serde::Serialize;

use crate::algorithm::simplex::tableau::Tableau;
use crate::algorithm::utilities::first_minimum_below;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made by the ratio
/// test, independent of the strategy.
pub trait PivotRule {
    /// Create a new instance.
    fn new(tableau: &Tableau) -> Self
    where
        Self: Sized;

    /// Column selection rule for the primal Simplex method.
    ///
    /// Every variable column is considered, basic or not. Basic columns have a zero in the
    /// objective row, so they are never selected.
    ///
    /// # Return value
    ///
    /// The column index and its (negative) objective row entry, or `None` when the tableau is
    /// optimal.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, f64)>;
}

/// Simply pivot on the column, which has the most negative relative cost.
///
/// This is Dantzig's rule. The columns are scanned from left to right and only a strictly more
/// negative entry replaces the current choice, so the lowest column index wins a tie.
pub struct SteepestDescentAlongVariable;

impl PivotRule for SteepestDescentAlongVariable {
    fn new(_tableau: &Tableau) -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, f64)> {
        let costs = (0..tableau.nr_columns()).map(|column| (column, tableau.relative_cost(column)));
        first_minimum_below(costs, 0f64)
    }
}

/// Simply pivot on the first column, which has a negative relative cost.
pub struct FirstProfitable;

impl PivotRule for FirstProfitable {
    fn new(_tableau: &Tableau) -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, f64)> {
        (0..tableau.nr_columns())
            .map(|column| (column, tableau.relative_cost(column)))
            .find(|&(_, cost)| cost < 0f64)
    }
}

/// Selects one of the pivot rules at runtime.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub enum PivotRuleKind {
    /// `SteepestDescentAlongVariable`.
    #[default]
    Dantzig,
    /// `FirstProfitable`.
    FirstProfitable,
}
