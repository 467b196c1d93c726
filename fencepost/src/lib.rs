//! Fencepost evaluates functions defined over sorted, breakpoint-indexed data.
//!
//! Two evaluators are provided, sharing one pattern: locate each query on a
//! sorted axis, then compute its value from the located entry.
//!
//! - [`PiecewisePoly`] evaluates a piecewise polynomial (for example, the
//!   output of a spline fit) at arbitrary query locations, using nested
//!   multiplication within the selected piece.  Queries beyond the breaks
//!   are extrapolated with the nearest edge piece.
//! - [`StepResampler`] performs zero-order-hold resampling: each query takes
//!   the value of the last sample at or before it, or zero if there is none.
//!   Samples may be real or complex.
//!
//! The lookup rules are in the [`axis`] module; they differ at the boundaries,
//! so they are exposed as separate functions.
//!
//! # Evaluation
//! Each query is resolved independently, so batches can be split across
//! threads.  The `eval_with` methods take an [`EvalConfig`], which selects a
//! [`ThreadPool`](config::ThreadPool) (or none, to stay on the calling thread)
//! and a chunk size:
//!
//! ```
//! use fencepost::{CoefficientTable, EvalConfig, PiecewisePoly};
//!
//! let coefs =
//!     CoefficientTable::from_rows(&[[1.0, 0.0, 0.0], [2.0, 2.0, 1.0]])?;
//! let p = PiecewisePoly::new(vec![0.0, 1.0, 2.0], coefs)?;
//!
//! let queries: Vec<f64> = (0..10_000).map(|i| i as f64 / 5000.0).collect();
//! let par = p.eval_with(&queries, &EvalConfig::default());
//! let ser = p.eval(&queries);
//! assert_eq!(par, ser);
//! # Ok::<(), fencepost::Error>(())
//! ```
//!
//! When resampling queries that are already sorted,
//! [`StepResampler::eval_sorted`] walks the axis with a
//! [`ForwardCursor`](axis::ForwardCursor) instead of binary-searching for each
//! point.  This is strictly sequential.
//!
//! # Validation
//! Constructors check their inputs (sorted and finite axes, matching lengths,
//! coefficient table shape) and return an [`Error`]; once built, evaluation
//! cannot fail.
pub mod axis;
pub mod coef;
pub mod config;
pub mod ppoly;
pub mod resample;
pub mod sample;
pub mod text;

mod error;
pub use error::Error;

pub use coef::CoefficientTable;
pub use config::EvalConfig;
pub use ppoly::PiecewisePoly;
pub use resample::{StepResampler, resample, resample_sorted};
pub use sample::Samples;

pub use num_complex::Complex64;
