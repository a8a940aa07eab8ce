//! Objective seam for the discretized optimizer.
//!
//! - [`Objective`]: trait callers implement (or satisfy with a closure)
//!   to score a candidate decision value against the current state.
//! - [`WeightedDeltaObjective`]: the canonical objective shape — a
//!   weighted combination of the predicted per-target deltas.
//!
//! Convention: higher scores are better; the engine imposes no shape
//! constraint beyond a finite, totally ordered scalar.
use crate::{
    model::{FeatureRegistry, ModelTable},
    simulation::{
        errors::{SimError, SimResult},
        state::StateVector,
        transition::predict_increases,
        types::Score,
    },
};
use indexmap::IndexMap;

/// User-supplied scoring function over candidate decision values.
///
/// Required:
/// - `score(candidate, state, models, registry) -> SimResult<Score>`:
///   evaluate the candidate against the *current* (pre-commit) state.
///   Implementations typically run the transition function internally
///   and aggregate the predicted deltas.
///   - Errors: return a descriptive [`SimError`]; the driver aborts the
///     whole run on the first failure.
///
/// Any closure of the matching shape implements this trait.
pub trait Objective {
    fn score(
        &self, candidate: f64, state: &StateVector, models: &ModelTable,
        registry: &FeatureRegistry,
    ) -> SimResult<Score>;
}

impl<F> Objective for F
where
    F: Fn(f64, &StateVector, &ModelTable, &FeatureRegistry) -> SimResult<Score>,
{
    fn score(
        &self, candidate: f64, state: &StateVector, models: &ModelTable,
        registry: &FeatureRegistry,
    ) -> SimResult<Score> {
        self(candidate, state, models, registry)
    }
}

/// `WeightedDeltaObjective` — dot product of the predicted increase set
/// with caller-supplied per-target weights.
///
/// A positive weight rewards growth in its target, a negative weight
/// penalizes it (e.g. poverty risk or unemployment). Every predicted
/// target must carry a weight; a missing weight is a configuration
/// error, consistent with the engine's fail-loud policy.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedDeltaObjective {
    decision_field: String,
    weights: IndexMap<String, f64>,
}

impl WeightedDeltaObjective {
    /// Construct the objective from the decision-field name and the
    /// per-target weights.
    ///
    /// # Errors
    /// - [`SimError::NonFiniteField`] when a weight is NaN or ±∞,
    ///   reported under the target's name.
    pub fn new<N: Into<String>>(
        decision_field: impl Into<String>, weights: impl IntoIterator<Item = (N, f64)>,
    ) -> SimResult<Self> {
        let weights: IndexMap<String, f64> =
            weights.into_iter().map(|(target, weight)| (target.into(), weight)).collect();
        for (target, &weight) in &weights {
            if !weight.is_finite() {
                return Err(SimError::NonFiniteField { field: target.clone(), value: weight });
            }
        }
        Ok(WeightedDeltaObjective { decision_field: decision_field.into(), weights })
    }
}

impl Objective for WeightedDeltaObjective {
    /// Run the transition function at `candidate` and return
    /// `Σ weight[target] · delta[target]` over the predicted targets.
    ///
    /// # Errors
    /// - Everything `predict_increases` can report.
    /// - [`SimError::MissingWeight`] when a predicted target has no
    ///   weight.
    fn score(
        &self, candidate: f64, state: &StateVector, models: &ModelTable,
        registry: &FeatureRegistry,
    ) -> SimResult<Score> {
        let increases =
            predict_increases(candidate, &self.decision_field, state, models, registry)?;
        let mut total = 0.0;
        for (target, delta) in &increases {
            let weight = self
                .weights
                .get(target)
                .ok_or_else(|| SimError::MissingWeight { target: target.clone() })?;
            total += weight * delta;
        }
        Ok(total)
    }
}
