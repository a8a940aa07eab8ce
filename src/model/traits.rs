//! Public seam between the engine and externally trained models.
//!
//! - [`Predictor`]: trait model adapters implement; exactly one method.
//!
//! Convention: the engine assembles the feature vector in the predictor
//! order declared by the feature registry for the target being
//! predicted, so implementations index positionally and never look names
//! up themselves.
use crate::simulation::{errors::SimResult, types::Features};

/// Opaque fitted regression model, polymorphic over a single `predict`
/// capability.
///
/// The engine is agnostic to model family (tree ensembles, linear
/// models, FFI-backed regressors, ...). Implementations must be
/// stateless with respect to the simulation: two calls with the same
/// features yield the same value, and no simulation state leaks into the
/// model.
///
/// Required:
/// - `predict(&Features) -> SimResult<f64>`: evaluate the model on one
///   feature vector.
///   - Errors: return a descriptive [`SimError`] for malformed inputs or
///     model failures; never panic and never silently default a value.
///
/// [`SimError`]: crate::simulation::errors::SimError
pub trait Predictor {
    fn predict(&self, features: &Features) -> SimResult<f64>;
}
