//! Built-in linear-model adapter.
//!
//! The historical panel models this engine was built for are mostly
//! linear (ordinary least squares and Lasso fits trained upstream). This
//! adapter lets a caller load such a fit from its intercept and
//! coefficient vector and run simulations natively, without bridging to
//! the training environment. It also serves as the reference
//! [`Predictor`] implementation for tests.
use crate::{
    model::traits::Predictor,
    simulation::{
        errors::{SimError, SimResult},
        types::Features,
    },
};
use ndarray::Array1;

/// `LinearPredictor` — fitted linear regression of the form
/// `intercept + coefficients · features`.
///
/// Invariants
/// ----------
/// - `intercept` and every coefficient are finite.
/// - `predict` requires `features.len() == coefficients.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPredictor {
    intercept: f64,
    coefficients: Array1<f64>,
}

impl LinearPredictor {
    /// Construct a validated [`LinearPredictor`].
    ///
    /// Parameters
    /// ----------
    /// - `intercept`: fitted intercept term; must be finite.
    /// - `coefficients`: fitted slope per feature, in the same order as
    ///   the feature registry entry this model will be keyed under.
    ///
    /// Errors
    /// ------
    /// - `SimError::NonFiniteCoefficient { index, value }` when the
    ///   intercept (reported at the index one past the coefficients) or
    ///   any coefficient is NaN or ±∞.
    pub fn new(intercept: f64, coefficients: Array1<f64>) -> SimResult<Self> {
        for (index, &value) in coefficients.iter().enumerate() {
            if !value.is_finite() {
                return Err(SimError::NonFiniteCoefficient { index, value });
            }
        }
        if !intercept.is_finite() {
            return Err(SimError::NonFiniteCoefficient {
                index: coefficients.len(),
                value: intercept,
            });
        }
        Ok(LinearPredictor { intercept, coefficients })
    }

    /// Number of features this model expects.
    pub fn arity(&self) -> usize {
        self.coefficients.len()
    }
}

impl Predictor for LinearPredictor {
    /// Evaluate `intercept + coefficients · features`.
    ///
    /// # Errors
    /// - [`SimError::FeatureCountMismatch`] when the feature vector
    ///   length differs from the coefficient vector length.
    fn predict(&self, features: &Features) -> SimResult<f64> {
        if features.len() != self.coefficients.len() {
            return Err(SimError::FeatureCountMismatch {
                expected: self.coefficients.len(),
                found: features.len(),
            });
        }
        Ok(self.intercept + self.coefficients.dot(features))
    }
}
