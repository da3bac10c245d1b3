//! # Algorithms
use std::error::Error;
use std::fmt;

use crate::data::linear_program::elements::Variable;

pub mod simplex;
pub mod utilities;

/// A solve that ended without finding an optimum.
///
/// Both variants end the solve immediately; no partial trace is kept.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveError {
    /// The entering variable can be increased without bound: no row has a positive entry in the
    /// pivot column.
    Unbounded {
        /// Iteration in which the ratio test found no candidate row.
        iteration: usize,
        /// Variable of the pivot column.
        entering: Variable,
    },
    /// The maximum number of pivots was performed without reaching an optimal tableau.
    IterationLimitExceeded {
        /// The maximum number of pivots.
        limit: usize,
    },
    /// A value in the tableau is `NaN` or infinite, either as given or after overflow.
    NonFinite {
        /// Iteration in which the value was found.
        iteration: usize,
        /// Basic variable of the first row holding such a value.
        row: Variable,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Unbounded { iteration, entering } => write!(
                f,
                "Problem is unbounded - no positive values in pivot column {} (iteration {})",
                entering, iteration,
            ),
            SolveError::IterationLimitExceeded { limit } => write!(
                f,
                "Maximum iterations exceeded ({}). The problem might be unbounded or infeasible.",
                limit,
            ),
            SolveError::NonFinite { iteration, row } => write!(
                f,
                "Row {} holds a value that is not a finite number (iteration {}). \
                 Check the coefficients and right hand sides.",
                row, iteration,
            ),
        }
    }
}

impl Error for SolveError {}

#[cfg(test)]
mod test {
    use crate::algorithm::SolveError;
    use crate::data::linear_program::elements::Variable;

    #[test]
    fn messages_are_distinguishable() {
        let unbounded = SolveError::Unbounded { iteration: 1, entering: Variable::Decision('x') };
        let limit = SolveError::IterationLimitExceeded { limit: 20 };

        assert!(unbounded.to_string().starts_with("Problem is unbounded"));
        assert!(unbounded.to_string().contains("column x"));
        assert!(limit.to_string().starts_with("Maximum iterations exceeded (20)"));

        let non_finite = SolveError::NonFinite { iteration: 1, row: Variable::Slack(1) };
        assert!(non_finite.to_string().starts_with("Row s2 holds a value that is not a finite number"));
    }
}
