//! # Dense matrix
//!
//! Row major storage with dimensions fixed at creation. Only the elementary row operations needed
//! by Gauss-Jordan elimination are provided.
use std::slice::Iter;

use num_traits::Float;
use serde::Serialize;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dense<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Float> Dense<F> {
    /// Create a matrix from row major data.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of equal length.
    pub fn from_data(data: Vec<Vec<F>>) -> Self {
        let nr_rows = data.len();
        let nr_columns = data.first().map_or(0, Vec::len);
        debug_assert!(data.iter().all(|row| row.len() == nr_columns));

        Self { data, nr_rows, nr_columns }
    }

    /// A matrix of the given size with all values zero.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: vec![vec![F::zero(); nr_columns]; nr_rows],
            nr_rows,
            nr_columns,
        }
    }

    /// Value at `(row, column)`.
    pub fn get_value(&self, row: usize, column: usize) -> F {
        debug_assert!(row < self.nr_rows);
        debug_assert!(column < self.nr_columns);

        self.data[row][column]
    }

    /// Overwrite the value at `(row, column)`.
    pub fn set_value(&mut self, row: usize, column: usize, value: F) {
        debug_assert!(row < self.nr_rows);
        debug_assert!(column < self.nr_columns);

        self.data[row][column] = value;
    }

    /// All values in row `i`.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j]).collect()
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> Iter<'_, Vec<F>> {
        self.data.iter()
    }

    /// Divide every value in row `row` by `divisor`.
    ///
    /// Each entry becomes exactly `value / divisor`, not `value * (1 / divisor)`.
    pub fn divide_row(&mut self, row: usize, divisor: F) {
        debug_assert!(row < self.nr_rows);

        for value in &mut self.data[row] {
            *value = *value / divisor;
        }
    }

    /// Subtract a multiple of row `read_row` from row `write_row`.
    pub fn sub_multiple_of_row(&mut self, read_row: usize, write_row: usize, factor: F) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            let read = self.data[read_row][j];
            self.data[write_row][j] = self.data[write_row][j] - factor * read;
        }
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::data::linear_algebra::matrix::Dense;

    fn matrix() -> Dense<f64> {
        Dense::from_data(vec![
            vec![1f64, 2f64, 0f64],
            vec![0f64, 5f64, 6f64],
        ])
    }

    #[test]
    fn dimensions() {
        let m = matrix();
        assert_eq!(m.nr_rows(), 2);
        assert_eq!(m.nr_columns(), 3);

        let z = Dense::<f64>::zeros(3, 4);
        assert_eq!(z.nr_rows(), 3);
        assert_eq!(z.nr_columns(), 4);
        assert!(z.rows().flatten().all(|&v| v == 0f64));
    }

    #[test]
    fn get_set() {
        let mut m = matrix();
        assert_abs_diff_eq!(m.get_value(1, 2), 6f64);
        m.set_value(1, 2, 7f64);
        assert_abs_diff_eq!(m.get_value(1, 2), 7f64);
        assert_eq!(m.column(1), vec![2f64, 5f64]);
        assert_eq!(m.row(0), &[1f64, 2f64, 0f64]);
    }

    #[test]
    fn divide_row() {
        let mut m = matrix();
        m.divide_row(1, 5f64);
        assert_eq!(m.row(1), &[0f64, 1f64, 6f64 / 5f64]);
        assert_eq!(m.row(0), &[1f64, 2f64, 0f64]);
    }

    #[test]
    fn sub_multiple_of_row() {
        let mut m = matrix();
        m.sub_multiple_of_row(0, 1, 2.5f64);
        assert_eq!(m.row(1), &[-2.5f64, 0f64, 6f64]);
    }
}
