//! Validation helpers for the policy simulation engine.
//!
//! This module centralizes common consistency checks used across the
//! engine:
//!
//! - **Grid checks**: [`verify_bounds`], [`verify_samples`] ensure the
//!   candidate lattice is well formed before any scan starts.
//! - **Driver checks**: [`verify_steps`] rejects zero-round runs.
//! - **Objective values**: [`validate_score`] checks candidate scores for
//!   finiteness.
//! - **Predictions**: [`validate_prediction`] checks model outputs for
//!   finiteness before they enter an increase set.
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`SimError`] variants, making higher-level code more uniform and
//! easier to debug.
use crate::simulation::errors::{SimError, SimResult};

/// Validate the bounds of the candidate interval.
///
/// - Both bounds must be **finite**.
/// - `min_inc <= max_inc` must hold; equality is legal and collapses the
///   scan to a single repeated candidate.
///
/// # Errors
/// Returns [`SimError::InvalidBounds`] if either bound is non-finite or
/// the bounds are inverted.
pub fn verify_bounds(min_inc: f64, max_inc: f64) -> SimResult<()> {
    if !min_inc.is_finite() || !max_inc.is_finite() {
        return Err(SimError::InvalidBounds {
            min_inc,
            max_inc,
            reason: "Bounds must be finite.",
        });
    }
    if min_inc > max_inc {
        return Err(SimError::InvalidBounds {
            min_inc,
            max_inc,
            reason: "Lower bound must not exceed upper bound.",
        });
    }
    Ok(())
}

/// Validate the number of candidates scanned per round.
///
/// # Errors
/// Returns [`SimError::InvalidSampleCount`] if `samples == 0`.
pub fn verify_samples(samples: usize) -> SimResult<()> {
    if samples == 0 {
        return Err(SimError::InvalidSampleCount {
            samples,
            reason: "At least one candidate must be scanned.",
        });
    }
    Ok(())
}

/// Validate the number of simulation rounds.
///
/// # Errors
/// Returns [`SimError::InvalidStepCount`] if `steps == 0`.
pub fn verify_steps(steps: usize) -> SimResult<()> {
    if steps == 0 {
        return Err(SimError::InvalidStepCount {
            steps,
            reason: "A simulation must run at least one round.",
        });
    }
    Ok(())
}

/// Validate that a candidate's objective score is finite.
///
/// Negative scores are fine as long as they are finite; the optimizer
/// seeds its running maximum from the first candidate, so arbitrarily
/// negative surfaces are handled without a sentinel value.
///
/// # Errors
/// Returns [`SimError::NonFiniteScore`] if the value is `NaN` or infinite.
pub fn validate_score(candidate: f64, value: f64) -> SimResult<()> {
    if !value.is_finite() {
        return Err(SimError::NonFiniteScore { candidate, value });
    }
    Ok(())
}

/// Validate that a model prediction is finite before it enters an
/// increase set.
///
/// # Errors
/// Returns [`SimError::NonFinitePrediction`] if the value is `NaN` or
/// infinite.
pub fn validate_prediction(target: &str, value: f64) -> SimResult<()> {
    if !value.is_finite() {
        return Err(SimError::NonFinitePrediction { target: target.to_string(), value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Acceptance of well-formed bounds, counts, and finite scalars.
    // - Rejection of non-finite bounds, inverted bounds, zero counts, and
    //   NaN / infinite scores and predictions.
    //
    // They intentionally DO NOT cover:
    // - How the grid or driver react to these errors; that belongs to the
    //   `grid` and `driver` module tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure `verify_bounds` accepts ordered finite bounds, including the
    // degenerate case `min_inc == max_inc`.
    //
    // Given
    // -----
    // - `(0.0, 0.1)` and `(0.05, 0.05)`.
    //
    // Expect
    // ------
    // - Both calls return `Ok(())`.
    fn verify_bounds_accepts_ordered_and_degenerate_bounds() {
        assert!(verify_bounds(0.0, 0.1).is_ok());
        assert!(verify_bounds(0.05, 0.05).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Ensure `verify_bounds` rejects non-finite and inverted bounds.
    //
    // Given
    // -----
    // - `(f64::NAN, 0.1)`, `(0.0, f64::INFINITY)`, and `(0.2, 0.1)`.
    //
    // Expect
    // ------
    // - Every call returns `Err(SimError::InvalidBounds { .. })`.
    fn verify_bounds_rejects_non_finite_and_inverted_bounds() {
        assert!(matches!(
            verify_bounds(f64::NAN, 0.1),
            Err(SimError::InvalidBounds { .. })
        ));
        assert!(matches!(
            verify_bounds(0.0, f64::INFINITY),
            Err(SimError::InvalidBounds { .. })
        ));
        assert!(matches!(verify_bounds(0.2, 0.1), Err(SimError::InvalidBounds { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Ensure `verify_samples` and `verify_steps` reject zero and accept
    // one.
    //
    // Given
    // -----
    // - Counts `0` and `1` for both helpers.
    //
    // Expect
    // ------
    // - Zero is rejected with the matching error variant; one is accepted.
    fn verify_counts_reject_zero_and_accept_one() {
        assert!(matches!(verify_samples(0), Err(SimError::InvalidSampleCount { .. })));
        assert!(verify_samples(1).is_ok());
        assert!(matches!(verify_steps(0), Err(SimError::InvalidStepCount { .. })));
        assert!(verify_steps(1).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Ensure `validate_score` accepts finite (including very negative)
    // scores and rejects NaN / infinite ones.
    //
    // Given
    // -----
    // - Scores `-1e12`, `f64::NAN`, and `f64::NEG_INFINITY` at candidate
    //   `0.05`.
    //
    // Expect
    // ------
    // - The finite score passes; the other two yield
    //   `SimError::NonFiniteScore` carrying the candidate.
    fn validate_score_rejects_only_non_finite_values() {
        assert!(validate_score(0.05, -1e12).is_ok());

        let err = validate_score(0.05, f64::NAN).unwrap_err();
        assert!(matches!(err, SimError::NonFiniteScore { candidate, .. } if candidate == 0.05));
        assert!(validate_score(0.05, f64::NEG_INFINITY).is_err());
    }

    #[test]
    // Purpose
    // -------
    // Ensure `validate_prediction` tags the offending target on failure.
    //
    // Given
    // -----
    // - A finite prediction and an infinite one for target "POVERTY".
    //
    // Expect
    // ------
    // - The finite value passes; the infinite one yields
    //   `SimError::NonFinitePrediction { target: "POVERTY", .. }`.
    fn validate_prediction_reports_target_on_failure() {
        assert!(validate_prediction("POVERTY", 0.02).is_ok());

        let err = validate_prediction("POVERTY", f64::INFINITY).unwrap_err();
        assert_eq!(
            err,
            SimError::NonFinitePrediction { target: "POVERTY".to_string(), value: f64::INFINITY }
        );
    }
}
