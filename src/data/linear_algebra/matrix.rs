//! # Dense matrix
//!
//! Both payoff matrices and simplex tableaus are small and have few zeros. They are stored row by
//! row, with the dimensions fixed at creation.
use std::slice::Iter;

use crate::error::SolveError;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if there are no rows, the first row is empty, or not all rows have the
    /// same length.
    pub fn from_data(data: Vec<Vec<F>>) -> Result<Self, SolveError> {
        let (nr_rows, nr_columns) = get_data_dimensions(&data)?;

        Ok(Self { data, nr_rows, nr_columns })
    }

    /// Create a matrix from rows of which the dimensions are known to be correct.
    ///
    /// Used after row operations which preserve the shape of a validated matrix.
    pub(crate) fn from_data_unchecked(data: Vec<Vec<F>>, nr_columns: usize) -> Self {
        debug_assert!(!data.is_empty());
        debug_assert!(data.iter().all(|row| row.len() == nr_columns));

        Self { nr_rows: data.len(), data, nr_columns }
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// Iterate over the rows of this matrix, in order.
    pub fn rows(&self) -> Iter<'_, Vec<F>> {
        self.data.iter()
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> impl Iterator<Item=&F> + '_ {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(move |row| &row[j])
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> &F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &self.data[i][j]
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get the data of this matrix.
    pub fn data(self) -> Vec<Vec<F>> {
        self.data
    }
}

fn get_data_dimensions<F>(data: &[Vec<F>]) -> Result<(usize, usize), SolveError> {
    let nr_rows = data.len();
    let nr_columns = data.first().map_or(0, Vec::len);

    if nr_rows == 0 || nr_columns == 0 || data.iter().any(|row| row.len() != nr_columns) {
        Err(SolveError::InvalidDimensions { rows: nr_rows, columns: nr_columns })
    } else {
        Ok((nr_rows, nr_columns))
    }
}
