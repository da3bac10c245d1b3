//! # Recording of pivots
//!
//! Every iteration of the simplex method is captured before the tableau changes: the tableau
//! itself, the outcome of the ratio test and the arithmetic of the elimination. The arithmetic is
//! stored as values only; turning it into text is done by the `render` methods, which take a
//! `NumberFormat` to decide how values are written.
use serde::Serialize;

use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_program::elements::Variable;
use crate::io::format::NumberFormat;

/// Ratio between the right hand side and the pivot column entry of one row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RatioTest {
    /// Right hand side of the row.
    pub rhs: f64,
    /// Strictly positive entry of the row in the pivot column.
    pub entry: f64,
    /// `rhs / entry`.
    pub value: f64,
    /// Whether this is the (first) smallest ratio, making its row the pivot row.
    pub is_minimum: bool,
}

impl RatioTest {
    /// Compute the ratio of a row, not yet marked as the minimum.
    pub fn new(rhs: f64, entry: f64) -> Self {
        Self { rhs, entry, value: rhs / entry, is_minimum: false }
    }

    /// Text like `24 ÷ 2 = 12`.
    pub fn render(&self, format: &impl NumberFormat) -> String {
        format!("{} ÷ {} = {}", format.format(self.rhs), format.format(self.entry), format.format(self.value))
    }
}

/// Location and value of the pivot element.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Pivot {
    /// Row of the leaving variable.
    pub row: usize,
    /// Column of the entering variable.
    pub column: usize,
    /// Value of the tableau at `(row, column)`, before the pivot.
    pub value: f64,
    /// Variable that enters the basis.
    pub entering: Variable,
    /// Variable that leaves the basis.
    pub leaving: Variable,
}

/// Division of a pivot row cell by the pivot element.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PivotRowStep {
    #[allow(missing_docs)]
    pub old: f64,
    #[allow(missing_docs)]
    pub pivot: f64,
    /// `old / pivot`.
    pub new: f64,
}

impl PivotRowStep {
    /// Text like `6(1/6) = 1`.
    pub fn render(&self, format: &impl NumberFormat) -> String {
        format!("{}(1/{}) = {}", format.format(self.old), format.format(self.pivot), format.format(self.new))
    }
}

/// Elimination of a single cell outside of the pivot row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EliminationStep {
    #[allow(missing_docs)]
    pub old: f64,
    /// Value of the pivot row in the same column, after division by the pivot element.
    pub normalized: f64,
    /// Original entry of this row in the pivot column.
    pub factor: f64,
    /// `old - factor * normalized`.
    pub new: f64,
}

impl EliminationStep {
    /// Text like `3 - 1/2(2) = 2`.
    pub fn render(&self, format: &impl NumberFormat) -> String {
        format!(
            "{} - {}({}) = {}",
            format.format(self.old), format.format(self.normalized), format.format(self.factor), format.format(self.new),
        )
    }
}

/// All cell updates of a row other than the pivot row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RowElimination {
    /// Index of the row in the tableau.
    pub row: usize,
    /// Basic variable of the row, before the pivot.
    pub basic: Variable,
    /// One for each column, the right hand side included.
    pub steps: Vec<EliminationStep>,
}

/// The Gauss-Jordan elimination of one pivot, cell by cell.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Elimination {
    /// One for each column, the right hand side included.
    pub pivot_row: Vec<PivotRowStep>,
    /// All other rows in order, the objective row included.
    pub other_rows: Vec<RowElimination>,
}

impl Elimination {
    /// Derive the elimination from the tableau as it is before the pivot.
    ///
    /// The values of the other rows are computed from the divided pivot row, exactly like the
    /// pivot itself computes them, such that the `new` values equal the tableau after the pivot.
    pub fn derive(tableau: &Tableau, pivot_row: usize, pivot_column: usize) -> Self {
        let pivot = tableau.entry(pivot_row, pivot_column);
        let width = tableau.nr_columns() + 1;

        let pivot_row_steps = (0..width)
            .map(|j| {
                let old = tableau.entry(pivot_row, j);
                PivotRowStep { old, pivot, new: old / pivot }
            })
            .collect();

        let other_rows = (0..=tableau.nr_rows())
            .filter(|&i| i != pivot_row)
            .map(|i| {
                let factor = tableau.entry(i, pivot_column);
                let steps = (0..width)
                    .map(|j| {
                        let old = tableau.entry(i, j);
                        let normalized = tableau.entry(pivot_row, j) / pivot;
                        EliminationStep { old, normalized, factor, new: old - factor * normalized }
                    })
                    .collect();

                RowElimination { row: i, basic: tableau.basis()[i], steps }
            })
            .collect();

        Self { pivot_row: pivot_row_steps, other_rows }
    }
}

/// Everything that was decided in an iteration that pivots.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PivotStep {
    /// A ratio for each row with a positive pivot column entry, `None` for the other rows and the
    /// objective row.
    pub ratios: Vec<Option<RatioTest>>,
    #[allow(missing_docs)]
    pub pivot: Pivot,
    #[allow(missing_docs)]
    pub elimination: Elimination,
}

/// The state of one iteration, taken before the tableau is changed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IterationSnapshot {
    /// One based iteration number.
    pub number: usize,
    /// Copy of the tableau, and with it the basic variables.
    pub tableau: Tableau,
    /// The pivot of this iteration, `None` for the final, optimal tableau.
    pub step: Option<PivotStep>,
}

impl IterationSnapshot {
    /// Whether this is the snapshot of an optimal tableau, without a pivot.
    pub fn is_final(&self) -> bool {
        self.step.is_none()
    }
}

/// The ordered snapshots of a solve.
///
/// There is one snapshot for each pivot, followed by one for the optimal tableau.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    snapshots: Vec<IterationSnapshot>,
}

impl Trace {
    pub(crate) fn push(&mut self, snapshot: IterationSnapshot) {
        debug_assert_eq!(snapshot.number, self.snapshots.len() + 1);
        debug_assert!(self.final_snapshot().is_none());

        self.snapshots.push(snapshot);
    }

    /// All snapshots in order.
    pub fn snapshots(&self) -> &[IterationSnapshot] {
        &self.snapshots
    }

    /// The snapshots that have a pivot.
    pub fn pivots(&self) -> impl Iterator<Item = (&IterationSnapshot, &PivotStep)> {
        self.snapshots.iter().filter_map(|snapshot| snapshot.step.as_ref().map(|step| (snapshot, step)))
    }

    /// Number of pivots that were performed.
    pub fn nr_pivots(&self) -> usize {
        self.pivots().count()
    }

    /// The snapshot of the optimal tableau, if the solve got that far.
    pub fn final_snapshot(&self) -> Option<&IterationSnapshot> {
        self.snapshots.last().filter(|snapshot| snapshot.is_final())
    }
}
