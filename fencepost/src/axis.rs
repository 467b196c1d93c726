//! Locating query coordinates on a sorted axis
//!
//! An axis is a non-decreasing sequence of `f64` values, used either as sample
//! locations (for resampling) or as breakpoints between polynomial pieces.
//! Given a query coordinate, we need to decide which sample or piece covers
//! it.  The two users of this module want slightly different answers at the
//! boundaries, so there are two separate lookup functions:
//!
//! - [`last_at_or_before`] returns the greatest index whose axis value is `<=`
//!   the query, or `None` if the query precedes every entry.  This is the
//!   zero-order-hold rule used by [`StepResampler`](crate::StepResampler).
//! - [`clamped_interval`] returns a polynomial piece index in `0..=N-2`, using
//!   right-closed intervals `(axis[i], axis[i + 1]]` for interior queries and
//!   clamping everything outside the axis onto the first or last piece.  This
//!   is the rule used by [`PiecewisePoly`](crate::PiecewisePoly).
//!
//! Both functions are `O(log N)` binary searches.  For the special case of
//! already-sorted queries, [`ForwardCursor`] provides an amortized `O(1)`
//! version of [`last_at_or_before`].
//!
//! ```
//! use fencepost::axis::{clamped_interval, last_at_or_before};
//!
//! let axis = [0.0, 1.0, 2.0];
//! assert_eq!(last_at_or_before(&axis, -1.0), None);
//! assert_eq!(last_at_or_before(&axis, 1.0), Some(1));
//! assert_eq!(clamped_interval(&axis, 1.0), 0);
//! assert_eq!(clamped_interval(&axis, 5.0), 1);
//! ```
use crate::Error;

/// Validated view of a sorted axis
///
/// Construction checks that every entry is finite and that the sequence never
/// decreases.  Repeated values are allowed.
#[derive(Copy, Clone, Debug)]
pub struct Axis<'a>(&'a [f64]);

impl<'a> Axis<'a> {
    /// Checks the given data and wraps it as an axis
    ///
    /// An empty axis is valid; resampling against it yields all zeros.
    pub fn new(data: &'a [f64]) -> Result<Self, Error> {
        if let Some(i) = data.iter().position(|v| !v.is_finite()) {
            return Err(Error::NonFiniteAxis(i));
        }
        if let Some(i) = data.windows(2).position(|w| w[1] < w[0]) {
            return Err(Error::UnsortedAxis(i + 1));
        }
        Ok(Self(data))
    }

    /// Wraps the given data without checking it
    ///
    /// If the data is not sorted, lookups return unspecified (but in-bounds)
    /// indices.
    pub fn new_unchecked(data: &'a [f64]) -> Self {
        Self(data)
    }

    /// Returns the underlying slice
    pub fn as_slice(&self) -> &'a [f64] {
        self.0
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks whether the axis has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// See [`last_at_or_before`]
    #[inline]
    pub fn last_at_or_before(&self, q: f64) -> Option<usize> {
        last_at_or_before(self.0, q)
    }

    /// See [`clamped_interval`]
    #[inline]
    pub fn clamped_interval(&self, q: f64) -> usize {
        clamped_interval(self.0, q)
    }

    /// Builds a cursor for walking sorted queries along this axis
    pub fn cursor(&self) -> ForwardCursor<'a> {
        ForwardCursor::new(self.0)
    }
}

/// Returns the greatest index `i` with `axis[i] <= q`
///
/// Returns `None` if `q` is smaller than every axis entry, if the axis is
/// empty, or if `q` is NaN.  A query exactly equal to an axis entry selects
/// that entry (or the last of a run of equal entries).
#[inline]
pub fn last_at_or_before(axis: &[f64], q: f64) -> Option<usize> {
    axis.partition_point(|&a| a <= q).checked_sub(1)
}

/// Returns the index of the polynomial piece covering `q`
///
/// The result is always in `0..=axis.len() - 2`:
/// - `q <= axis[0]` selects piece 0
/// - `q > axis[N - 1]` selects piece `N - 2`
/// - otherwise, the result `i` satisfies `axis[i] < q <= axis[i + 1]`
///
/// A NaN query selects piece 0.
///
/// # Panics
/// If the axis has fewer than two entries
#[inline]
pub fn clamped_interval(axis: &[f64], q: f64) -> usize {
    let n = axis.len();
    assert!(n >= 2, "clamped interval lookup needs at least 2 breaks");
    if q <= axis[0] {
        0
    } else if q > axis[n - 1] {
        n - 2
    } else {
        // First entry that is >= q, then step back to its left neighbor
        axis.partition_point(|&a| a < q).saturating_sub(1)
    }
}

/// Sequential version of [`last_at_or_before`] for non-decreasing queries
///
/// The cursor only ever moves forward along the axis, so a full pass over `M`
/// sorted queries costs `O(N + M)`.  Feeding it a query smaller than the
/// previous one returns a stale answer; callers must check query order
/// themselves.
#[derive(Clone, Debug)]
pub struct ForwardCursor<'a> {
    axis: &'a [f64],
    /// Number of axis entries known to be `<=` the most recent query
    next: usize,
}

impl<'a> ForwardCursor<'a> {
    /// Builds a new cursor at the start of the axis
    pub fn new(axis: &'a [f64]) -> Self {
        Self { axis, next: 0 }
    }

    /// Locates a query, advancing the cursor as needed
    #[inline]
    pub fn locate(&mut self, q: f64) -> Option<usize> {
        while self.next < self.axis.len() && self.axis[self.next] <= q {
            self.next += 1;
        }
        self.next.checked_sub(1)
    }
}
