//! Piecewise polynomial evaluation
use crate::{
    Error,
    axis::{Axis, clamped_interval},
    coef::CoefficientTable,
    config::EvalConfig,
};

/// A piecewise polynomial, as produced by a spline fit
///
/// The polynomial is defined by `N` sorted breaks and an `(N - 1) × O` table
/// of coefficients.  Piece `i` covers `(breaks[i], breaks[i + 1]]` and is
/// evaluated at the local offset `q - breaks[i]`.
///
/// Queries outside the breaks are **extrapolated**: everything at or left of
/// `breaks[0]` uses the first piece, and everything right of the last break
/// uses the last piece (still measuring the offset from that piece's own left
/// break).
///
/// ```
/// use fencepost::{CoefficientTable, PiecewisePoly};
///
/// // f(x) = x on [0, 1], then f(x) = (x - 1) + 1 on (1, 2]
/// let coefs = CoefficientTable::from_rows(&[[1.0, 0.0], [1.0, 1.0]])?;
/// let p = PiecewisePoly::new(vec![0.0, 1.0, 2.0], coefs)?;
/// assert_eq!(p.eval(&[-1.0, 0.0, 1.0, 1.5, 5.0]), [-1.0, 0.0, 1.0, 1.5, 5.0]);
/// # Ok::<(), fencepost::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct PiecewisePoly {
    breaks: Vec<f64>,
    coefs: CoefficientTable,
}

static_assertions::assert_impl_all!(PiecewisePoly: Send, Sync);

impl PiecewisePoly {
    /// Builds a new piecewise polynomial
    ///
    /// Returns an error if there are fewer than two breaks, if the breaks are
    /// not sorted and finite, or if the coefficient table does not have
    /// exactly one row per piece.
    pub fn new(
        breaks: Vec<f64>,
        coefs: CoefficientTable,
    ) -> Result<Self, Error> {
        if breaks.len() < 2 {
            return Err(Error::TooFewBreaks(breaks.len()));
        }
        Axis::new(&breaks)?;
        if coefs.rows() != breaks.len() - 1 {
            return Err(Error::BadCoefficientRows {
                breaks: breaks.len(),
                rows: coefs.rows(),
            });
        }
        Ok(Self { breaks, coefs })
    }

    /// Returns the breaks
    pub fn breaks(&self) -> Axis<'_> {
        Axis::new_unchecked(&self.breaks)
    }

    /// Returns the coefficient table
    pub fn coefs(&self) -> &CoefficientTable {
        &self.coefs
    }

    /// Number of polynomial pieces
    pub fn pieces(&self) -> usize {
        self.coefs.rows()
    }

    /// Number of coefficients per piece
    pub fn order(&self) -> usize {
        self.coefs.order()
    }

    /// Returns the index of the piece used to evaluate `q`
    #[inline]
    pub fn interval(&self, q: f64) -> usize {
        clamped_interval(&self.breaks, q)
    }

    /// Evaluates at a single location
    #[inline]
    pub fn eval_point(&self, q: f64) -> f64 {
        let i = self.interval(q);
        self.coefs.horner(i, q - self.breaks[i])
    }

    /// Evaluates into a caller-provided buffer
    pub fn eval_into(
        &self,
        queries: &[f64],
        out: &mut [f64],
    ) -> Result<(), Error> {
        if queries.len() != out.len() {
            return Err(Error::MismatchedOutput {
                queries: queries.len(),
                out: out.len(),
            });
        }
        self.fill(queries, out);
        Ok(())
    }

    /// Evaluates on the calling thread, returning a new buffer
    pub fn eval(&self, queries: &[f64]) -> Vec<f64> {
        self.eval_with(queries, &EvalConfig::serial())
    }

    /// Evaluates using the given configuration
    pub fn eval_with(&self, queries: &[f64], config: &EvalConfig) -> Vec<f64> {
        let mut out = vec![0.0; queries.len()];
        config.for_each_chunk(queries, &mut out, |q, o| self.fill(q, o));
        out
    }

    fn fill(&self, queries: &[f64], out: &mut [f64]) {
        for (q, o) in queries.iter().zip(out.iter_mut()) {
            *o = self.eval_point(*q);
        }
    }
}
