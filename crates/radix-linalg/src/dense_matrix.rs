//! Dense matrices with exact Gauss–Jordan elimination.

use std::fmt;
use std::ops::{Index, IndexMut};

use rayon::prelude::*;

use radix_rings::{Field, Ring};

/// Rows at which elimination moves onto the rayon pool.
const PARALLEL_ROWS: usize = 64;

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DenseMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    num_rows: usize,
    num_cols: usize,
}

/// Reduced row echelon form together with its pivot columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Echelon<R> {
    /// The reduced matrix; pivot rows come first.
    pub matrix: DenseMatrix<R>,
    /// Pivot column of each of the first `rank` rows.
    pub pivots: Vec<usize>,
}

impl<R> Echelon<R> {
    /// Rank of the reduced matrix.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }
}

impl<R: Ring> DenseMatrix<R> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![R::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from its rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<R>>) -> Self {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == num_cols),
            "rows of a matrix must have equal length"
        );
        Self {
            data: rows.into_iter().flatten().collect(),
            num_rows,
            num_cols,
        }
    }

    /// Builds a matrix from its entry function.
    #[must_use]
    pub fn from_fn(num_rows: usize, num_cols: usize, f: impl Fn(usize, usize) -> R) -> Self {
        let data = (0..num_rows)
            .flat_map(|i| (0..num_cols).map(move |j| (i, j)))
            .map(|(i, j)| f(i, j))
            .collect();
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&R> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[R]> {
        (0..self.num_rows).map(move |i| self.row(i))
    }

    /// Matrix-vector multiply: y = A * x.
    ///
    /// # Panics
    ///
    /// Panics if `x` does not have one entry per column.
    #[must_use]
    pub fn mv(&self, x: &[R]) -> Vec<R> {
        assert_eq!(x.len(), self.num_cols);
        self.rows()
            .map(|row| {
                row.iter()
                    .zip(x)
                    .fold(R::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
            })
            .collect()
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Scales a row by a scalar.
    pub fn scale_row(&mut self, row: usize, scale: &R) {
        for k in 0..self.num_cols {
            self[(row, k)] = self[(row, k)].clone() * scale.clone();
        }
    }

    /// Applies `f` to every entry.
    #[must_use]
    pub fn map<S: Ring>(&self, f: impl Fn(&R) -> S) -> DenseMatrix<S> {
        DenseMatrix {
            data: self.data.iter().map(f).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl<F: Field + Send + Sync> DenseMatrix<F> {
    /// Clears column `col` in every row but `pivot_row`, whose pivot is one.
    fn eliminate_column(&mut self, pivot_row: usize, col: usize) {
        let cols = self.num_cols;
        let pivot: Vec<F> = self.row(pivot_row).to_vec();
        let clear = |(r, row): (usize, &mut [F])| {
            if r == pivot_row || row[col].is_zero() {
                return;
            }
            let factor = row[col].clone();
            for (entry, p) in row.iter_mut().zip(&pivot).skip(col) {
                if !p.is_zero() {
                    *entry = entry.clone() - factor.clone() * p.clone();
                }
            }
        };
        if self.num_rows >= PARALLEL_ROWS {
            self.data.par_chunks_mut(cols).enumerate().for_each(clear);
        } else {
            self.data.chunks_mut(cols).enumerate().for_each(clear);
        }
    }

    /// Reduced row echelon form by Gauss–Jordan elimination.
    ///
    /// Pivots are the first nonzero entry in each column scanned from the
    /// current row down, so the result is deterministic.
    #[must_use]
    pub fn rref(&self) -> Echelon<F> {
        let mut m = self.clone();
        let mut pivots = Vec::new();
        let mut pivot_row = 0;

        for col in 0..m.num_cols {
            if pivot_row == m.num_rows {
                break;
            }
            let Some(found) = (pivot_row..m.num_rows).find(|&r| !m[(r, col)].is_zero()) else {
                continue;
            };
            m.swap_rows(pivot_row, found);
            let inv = m[(pivot_row, col)].inv().expect("pivot is nonzero");
            m.scale_row(pivot_row, &inv);
            m.eliminate_column(pivot_row, col);
            pivots.push(col);
            pivot_row += 1;
        }

        Echelon { matrix: m, pivots }
    }

    /// Rank over the field.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rref().rank()
    }

    /// A basis of the kernel, one vector per free column.
    #[must_use]
    pub fn null_space(&self) -> Vec<Vec<F>> {
        let Echelon { matrix, pivots } = self.rref();
        (0..self.num_cols)
            .filter(|col| !pivots.contains(col))
            .map(|free| {
                let mut v = vec![F::zero(); self.num_cols];
                v[free] = F::one();
                for (row, &p) in pivots.iter().enumerate() {
                    v[p] = -matrix[(row, free)].clone();
                }
                v
            })
            .collect()
    }

    /// A solution of `Ax = b` with every free unknown set to zero.
    ///
    /// Returns `None` if the system is inconsistent.
    ///
    /// # Panics
    ///
    /// Panics if `b` does not have one entry per row.
    #[must_use]
    pub fn solve(&self, b: &[F]) -> Option<Vec<F>> {
        assert_eq!(b.len(), self.num_rows);
        let n = self.num_cols;
        let aug = Self::from_fn(self.num_rows, n + 1, |i, j| {
            if j < n {
                self[(i, j)].clone()
            } else {
                b[i].clone()
            }
        });
        let Echelon { matrix, pivots } = aug.rref();
        if pivots.last() == Some(&n) {
            return None;
        }
        let mut x = vec![F::zero(); n];
        for (row, &p) in pivots.iter().enumerate() {
            x[p] = matrix[(row, n)].clone();
        }
        Some(x)
    }
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

impl<R: Ring> fmt::Display for DenseMatrix<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let entries: Vec<String> = row.iter().map(ToString::to_string).collect();
            write!(f, "[{}]", entries.join(", "))?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radix_rings::Q;

    fn m(rows: &[&[i64]]) -> DenseMatrix<Q> {
        DenseMatrix::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&v| Q::from(v)).collect())
                .collect(),
        )
    }

    #[test]
    fn test_from_rows_shape() {
        let a = m(&[&[1, 2, 3], &[4, 5, 6]]);
        assert_eq!(a.num_rows(), 2);
        assert_eq!(a.num_cols(), 3);
        assert_eq!(a.get(1, 2), Some(&Q::from(6)));
        assert_eq!(a.get(2, 0), None);
        assert_eq!(a.to_string(), "[[1, 2, 3], [4, 5, 6]]");
    }

    #[test]
    fn test_mv() {
        let a = m(&[&[1, 2, 3], &[4, 5, 6]]);
        let y = a.mv(&[Q::from(1), Q::from(2), Q::from(3)]);
        assert_eq!(y, vec![Q::from(14), Q::from(32)]);
    }

    #[test]
    fn test_map() {
        let a = m(&[&[1, -2], &[0, 3]]);
        let doubled = a.map(|x| x.clone() + x.clone());
        assert_eq!(doubled, m(&[&[2, -4], &[0, 6]]));
    }

    #[test]
    fn test_rref_unique() {
        // x + 4y = 2, -2x + y = 14
        let e = m(&[&[1, 4, 2], &[-2, 1, 14]]).rref();
        assert_eq!(e.pivots, vec![0, 1]);
        assert_eq!(e.matrix, m(&[&[1, 0, -6], &[0, 1, 2]]));
    }

    #[test]
    fn test_rref_skips_zero_columns() {
        let e = m(&[&[0, 2, 4], &[0, 1, 2]]).rref();
        assert_eq!(e.pivots, vec![1]);
        assert_eq!(e.rank(), 1);
        assert_eq!(e.matrix.row(0), &[Q::from(0), Q::from(1), Q::from(2)]);
    }

    #[test]
    fn test_solve() {
        let a = m(&[&[1, 2], &[3, 4]]);
        let x = a.solve(&[Q::from(5), Q::from(11)]).unwrap();
        assert_eq!(x, vec![Q::from(1), Q::from(2)]);
        let singular = m(&[&[1, 2], &[2, 4]]);
        assert_eq!(singular.solve(&[Q::from(1), Q::from(3)]), None);
    }

    #[test]
    fn test_null_space() {
        let a = m(&[&[1, 2, 3], &[2, 4, 6]]);
        let null = a.null_space();
        assert_eq!(null.len(), 2);
        for v in &null {
            assert!(a.mv(v).iter().all(Ring::is_zero));
        }
    }

    #[test]
    fn test_parallel_elimination_matches() {
        // Tall enough to take the rayon path; rows are multiples of (1, 1, 2).
        let rows: Vec<Vec<Q>> = (1..=80)
            .map(|k| vec![Q::from(k), Q::from(k), Q::from(2 * k)])
            .collect();
        let e = DenseMatrix::from_rows(rows).rref();
        assert_eq!(e.pivots, vec![0]);
        assert_eq!(e.matrix.row(0), &[Q::from(1), Q::from(1), Q::from(2)]);
        assert!(e.matrix.row(79).iter().all(Ring::is_zero));
    }
}
