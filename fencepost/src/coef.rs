//! Coefficient storage for piecewise polynomials
use crate::Error;
use nalgebra::DMatrix;

/// Table of polynomial coefficients, one row per piece
///
/// Each row holds the `order` coefficients of one polynomial, **highest degree
/// first**: a row `[a, b, c]` represents `a·d² + b·d + c`, where `d` is the
/// offset from the piece's left breakpoint.
///
/// Values are addressed by `(row, column)`; the storage layout is an internal
/// detail, so tables can be built from either row-major or column-major flat
/// data without copying through an intermediate layout.
#[derive(Clone, Debug, PartialEq)]
pub struct CoefficientTable(DMatrix<f64>);

impl CoefficientTable {
    /// Builds a table from a list of rows
    ///
    /// Every row must have the same (non-zero) length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, Error> {
        let order = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if order == 0 {
            return Err(Error::EmptyOrder);
        }
        if rows.iter().any(|r| r.as_ref().len() != order) {
            let len = rows.iter().map(|r| r.as_ref().len()).sum();
            return Err(Error::BadCoefficientData {
                len,
                rows: rows.len(),
                order,
            });
        }
        Ok(Self(DMatrix::from_fn(rows.len(), order, |r, c| {
            rows[r].as_ref()[c]
        })))
    }

    /// Builds a table from flat data, stored one polynomial after another
    pub fn from_row_slice(
        data: &[f64],
        rows: usize,
        order: usize,
    ) -> Result<Self, Error> {
        Self::check_flat(data, rows, order)?;
        Ok(Self(DMatrix::from_row_slice(rows, order, data)))
    }

    /// Builds a table from flat data, stored one power after another
    ///
    /// This is the layout of a column-major `rows × order` matrix, i.e. all of
    /// the leading coefficients come first, then all of the next-highest
    /// coefficients, and so on.
    pub fn from_column_major(
        data: &[f64],
        rows: usize,
        order: usize,
    ) -> Result<Self, Error> {
        Self::check_flat(data, rows, order)?;
        Ok(Self(DMatrix::from_column_slice(rows, order, data)))
    }

    /// Wraps an existing matrix (rows are pieces, columns are powers)
    pub fn from_matrix(m: DMatrix<f64>) -> Result<Self, Error> {
        if m.ncols() == 0 {
            Err(Error::EmptyOrder)
        } else {
            Ok(Self(m))
        }
    }

    fn check_flat(
        data: &[f64],
        rows: usize,
        order: usize,
    ) -> Result<(), Error> {
        if order == 0 {
            Err(Error::EmptyOrder)
        } else if rows.checked_mul(order) != Some(data.len()) {
            Err(Error::BadCoefficientData {
                len: data.len(),
                rows,
                order,
            })
        } else {
            Ok(())
        }
    }

    /// Number of polynomial pieces
    pub fn rows(&self) -> usize {
        self.0.nrows()
    }

    /// Number of coefficients per polynomial (one more than the degree)
    pub fn order(&self) -> usize {
        self.0.ncols()
    }

    /// Returns a single coefficient
    ///
    /// # Panics
    /// If either index is out of range
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.0[(row, col)]
    }

    /// Evaluates the polynomial in the given row at offset `d`
    ///
    /// This uses nested multiplication, starting from the leading coefficient:
    /// `acc = c[0]`, then `acc = acc * d + c[i]` for each remaining column.
    /// The order of operations is fixed; results are bit-for-bit reproducible.
    #[inline]
    pub fn horner(&self, row: usize, d: f64) -> f64 {
        let mut acc = self.get(row, 0);
        for col in 1..self.order() {
            acc = acc * d + self.get(row, col);
        }
        acc
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn layouts_agree() {
        // Two quadratics: x² + 2x + 3 and 4x² + 5x + 6
        let a =
            CoefficientTable::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])
                .unwrap();
        let b = CoefficientTable::from_row_slice(
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            2,
            3,
        )
        .unwrap();
        let c = CoefficientTable::from_column_major(
            &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0],
            2,
            3,
        )
        .unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.rows(), 2);
        assert_eq!(a.order(), 3);
        assert_eq!(a.get(1, 0), 4.0);
        assert_eq!(a.get(0, 2), 3.0);
    }

    #[test]
    fn bad_shapes() {
        assert!(matches!(
            CoefficientTable::from_row_slice(&[1.0, 2.0, 3.0], 2, 2),
            Err(Error::BadCoefficientData {
                len: 3,
                rows: 2,
                order: 2
            })
        ));
        assert!(matches!(
            CoefficientTable::from_column_major(&[], 3, 0),
            Err(Error::EmptyOrder)
        ));
        assert!(matches!(
            CoefficientTable::from_rows::<Vec<f64>>(&[]),
            Err(Error::EmptyOrder)
        ));
        assert!(matches!(
            CoefficientTable::from_rows(&[vec![1.0, 2.0], vec![3.0]]),
            Err(Error::BadCoefficientData { len: 3, .. })
        ));
        assert!(matches!(
            CoefficientTable::from_matrix(DMatrix::zeros(4, 0)),
            Err(Error::EmptyOrder)
        ));
    }

    #[test]
    fn horner() {
        let t =
            CoefficientTable::from_rows(&[[1.0, 2.0, 3.0], [0.5, 0.0, 0.0]])
                .unwrap();
        assert_eq!(t.horner(0, 0.0), 3.0);
        assert_eq!(t.horner(0, 1.0), 6.0);
        assert_eq!(t.horner(0, 2.0), 11.0);
        assert_eq!(t.horner(0, -1.0), 2.0);
        assert_eq!(t.horner(1, 4.0), 8.0);

        // Order-1 tables are piecewise constant
        let k = CoefficientTable::from_rows(&[[7.0]]).unwrap();
        assert_eq!(k.horner(0, 123.0), 7.0);
    }

    #[test]
    fn horner_evaluation_order() {
        // The multiply-then-add sequence is observable in rounding
        let c = [0.1, 0.2, 0.3, 0.4];
        let t = CoefficientTable::from_rows(&[c]).unwrap();
        let d = 0.7;
        let expected = ((0.1 * d + 0.2) * d + 0.3) * d + 0.4;
        assert_eq!(t.horner(0, d).to_bits(), expected.to_bits());
    }
}
