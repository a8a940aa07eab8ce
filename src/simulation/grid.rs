//! Discretized optimizer: a strictly ordered, derivative-free scan over
//! equally spaced candidate decision values.
//!
//! The composed objective invokes independently trained regressors whose
//! outputs need not vary smoothly with the decision value, so the
//! surface is too irregular for gradient-based solvers. The engine
//! therefore evaluates a fixed lattice of candidates low-to-high and
//! keeps the running maximum under strict greater-than, which makes the
//! left-most maximizer the winner on ties.
use crate::simulation::{
    errors::{SimError, SimResult},
    types::{DEFAULT_GRID_SAMPLES, Score},
    validation::{validate_score, verify_bounds, verify_samples},
};
use ndarray::Array1;
use serde::Serialize;

/// `Grid` — validated candidate lattice over a bounded interval.
///
/// Invariants
/// ----------
/// - Both bounds are finite and `min_inc <= max_inc`; equal bounds are
///   legal and collapse the scan to one repeated candidate.
/// - `samples >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Grid {
    min_inc: f64,
    max_inc: f64,
    samples: usize,
}

impl Grid {
    /// Construct a validated grid.
    ///
    /// # Errors
    /// - [`SimError::InvalidBounds`] for non-finite or inverted bounds.
    /// - [`SimError::InvalidSampleCount`] for `samples == 0`.
    pub fn new(min_inc: f64, max_inc: f64, samples: usize) -> SimResult<Self> {
        verify_bounds(min_inc, max_inc)?;
        verify_samples(samples)?;
        Ok(Grid { min_inc, max_inc, samples })
    }

    /// Grid with the default resolution of [`DEFAULT_GRID_SAMPLES`]
    /// candidates.
    pub fn with_default_samples(min_inc: f64, max_inc: f64) -> SimResult<Self> {
        Grid::new(min_inc, max_inc, DEFAULT_GRID_SAMPLES)
    }

    /// Lower bound of the candidate interval.
    pub fn min_inc(&self) -> f64 {
        self.min_inc
    }

    /// Upper bound of the candidate interval.
    pub fn max_inc(&self) -> f64 {
        self.max_inc
    }

    /// Number of candidates scanned per round.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// The candidate values: `samples` equally spaced points inclusive of
    /// both bounds, ascending.
    pub fn candidates(&self) -> Array1<f64> {
        Array1::linspace(self.min_inc, self.max_inc, self.samples)
    }
}

/// Outcome of one grid scan.
///
/// - `best_candidate`: left-most maximizing candidate.
/// - `best_value`: objective score attained there.
/// - `evaluations`: number of objective evaluations performed (always
///   the full lattice; there is no early exit).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridOutcome {
    pub best_candidate: f64,
    pub best_value: Score,
    pub evaluations: usize,
}

/// Scan the grid low-to-high and return the maximizer of `objective`.
///
/// # Behavior
/// - The first candidate seeds the running maximum; later candidates
///   replace it only under strict `>`. Ties therefore resolve to the
///   first (smallest) candidate encountered.
/// - Every score is validated for finiteness; no sentinel initial value
///   is used, so arbitrarily negative finite surfaces are handled
///   correctly.
///
/// # Errors
/// - [`SimError::NonFiniteScore`] when the objective returns NaN or ±∞.
/// - Any error the objective itself reports; the scan aborts on the
///   first failure.
pub fn maximize_over_grid<F>(grid: &Grid, mut objective: F) -> SimResult<GridOutcome>
where
    F: FnMut(f64) -> SimResult<Score>,
{
    let mut best: Option<(f64, Score)> = None;
    let mut evaluations = 0usize;

    for &candidate in grid.candidates().iter() {
        let value = objective(candidate)?;
        validate_score(candidate, value)?;
        evaluations += 1;
        best = match best {
            Some((_, incumbent)) if value <= incumbent => best,
            _ => Some((candidate, value)),
        };
    }

    let (best_candidate, best_value) = best.ok_or(SimError::InvalidSampleCount {
        samples: 0,
        reason: "Grid produced no candidates.",
    })?;
    tracing::trace!(best_candidate, best_value, evaluations, "grid scan complete");
    Ok(GridOutcome { best_candidate, best_value, evaluations })
}
