//! # High-level Simplex logic
//!
//! The pivot loop. The details of the elementary operations are hidden away mostly in the
//! `Tableau` type, the recording of each iteration in the `trace` module.
use crate::algorithm::SolveError;
use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;
use crate::algorithm::simplex::tableau::{has_unit_basis, Tableau};
use crate::algorithm::simplex::trace::{Elimination, IterationSnapshot, Pivot, PivotStep, Trace};

/// Pivots until the objective row has no negative entries left.
///
/// While calling this method, the tableau should have a valid basis. It is not required that all
/// right hand sides are non negative, but without that, the result is not a feasible solution.
///
/// # Arguments
///
/// * `tableau`: Tableau to improve, it is left in its final state.
/// * `max_iterations`: Number of pivots after which the search is abandoned.
/// * `tolerance`: Used only in debug assertions.
///
/// # Return value
///
/// A snapshot for each pivot and one for the optimal tableau.
///
/// # Errors
///
/// When the ratio test finds no row, the problem is unbounded. When the tableau is not optimal
/// after `max_iterations` pivots, the iteration limit is exceeded. A `NaN` or infinite value in
/// the tableau, given or produced by overflow, stops the solve before it is pivoted on.
pub(crate) fn primal<PR: PivotRule>(
    tableau: &mut Tableau,
    max_iterations: usize,
    tolerance: f64,
) -> Result<Trace, SolveError> {
    let mut rule = PR::new(tableau);
    let mut trace = Trace::default();
    let mut iteration = 1;

    loop {
        if let Some(row) = tableau.first_non_finite_row() {
            let row = tableau.basis()[row];
            log::warn!("Iteration {}: row {} holds a value that is not finite", iteration, row);
            break Err(SolveError::NonFinite { iteration, row });
        }
        debug_assert!(has_unit_basis(tableau, tolerance));
        log::trace!("Iteration {}\n{}", iteration, tableau);

        let Some((column, cost)) = rule.select_primal_pivot_column(tableau) else {
            log::info!(
                "Optimal after {} pivot(s), objective value {}",
                iteration - 1, tableau.objective_function_value(),
            );
            trace.push(IterationSnapshot { number: iteration, tableau: tableau.clone(), step: None });
            break Ok(trace);
        };

        if iteration > max_iterations {
            log::warn!("No optimum after {} pivots, giving up", max_iterations);
            break Err(SolveError::IterationLimitExceeded { limit: max_iterations });
        }

        let entering = tableau.columns()[column];
        let ratios = tableau.ratio_test(column);
        let Some(row) = Tableau::select_primal_pivot_row(&ratios) else {
            log::info!("Unbounded: no positive entry in the column of {}", entering);
            break Err(SolveError::Unbounded { iteration, entering });
        };

        let pivot = Pivot {
            row,
            column,
            value: tableau.entry(row, column),
            entering,
            leaving: tableau.basis()[row],
        };
        log::debug!(
            "Iteration {}: {} enters (cost {}), {} leaves (ratio {}), pivot element {}",
            iteration, pivot.entering, cost, pivot.leaving,
            ratios[row].as_ref().map_or(f64::NAN, |ratio| ratio.value), pivot.value,
        );

        let elimination = Elimination::derive(tableau, row, column);
        trace.push(IterationSnapshot {
            number: iteration,
            tableau: tableau.clone(),
            step: Some(PivotStep { ratios, pivot, elimination }),
        });

        tableau.bring_into_basis(row, column);
        iteration += 1;
    }
}
