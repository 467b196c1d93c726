//! Module containing the Fencepost universal error type
use thiserror::Error;

/// Universal error type for Fencepost
///
/// Every variant is raised while *building* an evaluator (or reading its
/// inputs); once constructed, evaluation itself cannot fail.
#[derive(Error, Debug)]
pub enum Error {
    /// Axis decreases at the given index
    #[error("axis is not sorted; entry {0} is smaller than its predecessor")]
    UnsortedAxis(usize),

    /// Axis contains a NaN or infinite value at the given index
    #[error("axis entry {0} is not finite")]
    NonFiniteAxis(usize),

    /// A piecewise polynomial needs at least two breaks
    #[error("piecewise polynomial needs at least 2 breaks, got {0}")]
    TooFewBreaks(usize),

    /// Sample count does not match axis length
    #[error("axis length ({axis}) does not match sample length ({samples})")]
    MismatchedSamples {
        /// Number of axis entries
        axis: usize,
        /// Number of samples
        samples: usize,
    },

    /// Real and imaginary parts have different lengths
    #[error("real length ({0}) does not match imaginary length ({1})")]
    MismatchedParts(usize, usize),

    /// Number of polynomials is not consistent with number of breaks
    #[error(
        "number of polynomials ({rows}) is not consistent with \
         number of breaks ({breaks})"
    )]
    BadCoefficientRows {
        /// Number of breaks
        breaks: usize,
        /// Number of coefficient rows
        rows: usize,
    },

    /// Flat coefficient data does not fill a `rows × order` table
    #[error("coefficient data of length {len} cannot fill {rows} × {order}")]
    BadCoefficientData {
        /// Length of the flat data
        len: usize,
        /// Requested row count
        rows: usize,
        /// Requested polynomial order
        order: usize,
    },

    /// Polynomial order must be at least 1
    #[error("polynomial order must be at least 1")]
    EmptyOrder,

    /// Output slice length does not match query slice length
    #[error("query length ({queries}) does not match output length ({out})")]
    MismatchedOutput {
        /// Number of queries
        queries: usize,
        /// Length of the output slice
        out: usize,
    },

    /// Queries must be non-decreasing for cursor-based evaluation
    #[error("queries are not sorted; entry {0} is out of order")]
    UnsortedQueries(usize),

    /// Cursor-based evaluation cannot place a NaN query
    #[error("query {0} is NaN")]
    NanQuery(usize),

    /// Text input could not be parsed as a number
    #[error("could not parse {text:?} on line {line}")]
    ParseError {
        /// One-based line number
        line: usize,
        /// Offending token
        text: String,
    },

    /// Worker pool could not be created
    #[error("could not build thread pool: {0}")]
    ThreadPoolError(#[from] rayon::ThreadPoolBuildError),

    /// IO error; see inner code for details
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}
