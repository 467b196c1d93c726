//! Zero-order-hold resampling
//!
//! Each query takes the value of the most recent sample at or before it; there
//! is no blending between samples.  Queries that precede every sample produce
//! zero.
use crate::{
    Error,
    axis::{Axis, ForwardCursor},
    config::EvalConfig,
    sample::Samples,
};
use num_complex::Complex64;
use num_traits::Zero;

/// Resamples a discretely sampled function at arbitrary locations
///
/// The sample type is generic, so the same evaluator handles `f64` and
/// [`Complex64`] data (or anything else that is `Copy` and has a zero).
///
/// ```
/// use fencepost::{StepResampler, axis::Axis};
///
/// let axis = [0.0, 1.0, 2.0];
/// let samples = [1.0, 2.0, 3.0];
/// let r = StepResampler::new(Axis::new(&axis)?, &samples)?;
/// let out = r.eval(&[-1.0, 0.0, 0.5, 2.0, 5.0]);
/// assert_eq!(out, [0.0, 1.0, 1.0, 3.0, 3.0]);
/// # Ok::<(), fencepost::Error>(())
/// ```
#[derive(Copy, Clone, Debug)]
pub struct StepResampler<'a, T> {
    axis: Axis<'a>,
    samples: &'a [T],
}

static_assertions::assert_impl_all!(StepResampler<'static, f64>: Send, Sync);
static_assertions::assert_impl_all!(
    StepResampler<'static, Complex64>: Send,
    Sync
);

impl<'a, T> StepResampler<'a, T>
where
    T: Copy + Zero + Send + Sync,
{
    /// Builds a new resampler
    ///
    /// Returns an error if the sample count does not match the axis length.
    pub fn new(axis: Axis<'a>, samples: &'a [T]) -> Result<Self, Error> {
        if axis.len() != samples.len() {
            return Err(Error::MismatchedSamples {
                axis: axis.len(),
                samples: samples.len(),
            });
        }
        Ok(Self { axis, samples })
    }

    /// Returns the sample axis
    pub fn axis(&self) -> Axis<'a> {
        self.axis
    }

    /// Returns the samples
    pub fn samples(&self) -> &'a [T] {
        self.samples
    }

    /// Resamples at a single location
    #[inline]
    pub fn eval_point(&self, q: f64) -> T {
        match self.axis.last_at_or_before(q) {
            Some(i) => self.samples[i],
            None => T::zero(),
        }
    }

    /// Resamples into a caller-provided buffer
    pub fn eval_into(
        &self,
        queries: &[f64],
        out: &mut [T],
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

    /// Resamples on the calling thread, returning a new buffer
    pub fn eval(&self, queries: &[f64]) -> Vec<T> {
        self.eval_with(queries, &EvalConfig::serial())
    }

    /// Resamples using the given configuration
    ///
    /// Queries may be in any order.
    pub fn eval_with(&self, queries: &[f64], config: &EvalConfig) -> Vec<T> {
        let mut out = vec![T::zero(); queries.len()];
        config.for_each_chunk(queries, &mut out, |q, o| self.fill(q, o));
        out
    }

    /// Resamples non-decreasing queries with a single forward pass
    ///
    /// This walks the axis and the queries together, costing `O(N + M)`
    /// instead of `O(M log N)`, but is inherently sequential.  Returns an
    /// error if any query is NaN or if the queries are not sorted.
    pub fn eval_sorted(&self, queries: &[f64]) -> Result<Vec<T>, Error> {
        if let Some(i) = queries.iter().position(|q| q.is_nan()) {
            return Err(Error::NanQuery(i));
        }
        if let Some(i) = queries.windows(2).position(|w| w[1] < w[0]) {
            return Err(Error::UnsortedQueries(i + 1));
        }
        log::debug!("evaluating {} sorted points by cursor", queries.len());
        let mut cursor = ForwardCursor::new(self.axis.as_slice());
        Ok(queries
            .iter()
            .map(|&q| match cursor.locate(q) {
                Some(i) => self.samples[i],
                None => T::zero(),
            })
            .collect())
    }

    fn fill(&self, queries: &[f64], out: &mut [T]) {
        for (q, o) in queries.iter().zip(out.iter_mut()) {
            *o = self.eval_point(*q);
        }
    }
}

/// Resamples a real or complex buffer, preserving its variant
///
/// Returns an error if the sample count does not match the axis length.
pub fn resample(
    axis: Axis,
    samples: &Samples,
    queries: &[f64],
    config: &EvalConfig,
) -> Result<Samples, Error> {
    Ok(match samples {
        Samples::Real(v) => Samples::Real(
            StepResampler::new(axis, v)?.eval_with(queries, config),
        ),
        Samples::Complex(v) => Samples::Complex(
            StepResampler::new(axis, v)?.eval_with(queries, config),
        ),
    })
}

/// Resamples a real or complex buffer at sorted query locations
///
/// See [`StepResampler::eval_sorted`] for details.
pub fn resample_sorted(
    axis: Axis,
    samples: &Samples,
    queries: &[f64],
) -> Result<Samples, Error> {
    Ok(match samples {
        Samples::Real(v) => Samples::Real(
            StepResampler::new(axis, v)?.eval_sorted(queries)?,
        ),
        Samples::Complex(v) => Samples::Complex(
            StepResampler::new(axis, v)?.eval_sorted(queries)?,
        ),
    })
}
