//! Transition function: one predictor call per target against a
//! consistent candidate snapshot.
//!
//! This is the model-in-the-loop half of a round: given a candidate
//! decision value and the current state, produce the predicted per-target
//! deltas without touching the caller's state.
use crate::{
    model::{FeatureRegistry, ModelTable},
    simulation::{
        errors::{SimError, SimResult},
        state::StateVector,
        types::{Features, IncreaseSet},
        validation::validate_prediction,
    },
};

/// Predict the next-step delta for every target variable at a candidate
/// decision value.
///
/// # Behavior
/// - Clones `state`; the caller's state is never mutated.
/// - Overwrites `decision_field` in the clone with `decision_value`, so
///   every target's model sees the same candidate (consistent snapshot,
///   no partial updates between predictions).
/// - For each target in model-table order: looks up its predictor list,
///   gathers those fields from the clone into a [`Features`] vector in
///   declared order, and calls the target's [`Predictor`].
///
/// # Errors
/// - [`SimError::UnknownField`] if `decision_field` is absent from the
///   state.
/// - [`SimError::MissingPredictorList`] if a model's target has no
///   registry entry.
/// - [`SimError::MissingFeature`] if a listed predictor is not a state
///   field. This is a configuration error and is never silently
///   defaulted.
/// - [`SimError::NonFinitePrediction`] if a model returns NaN or ±∞.
/// - Any error the predictor itself reports.
///
/// # Returns
/// An [`IncreaseSet`] whose key set equals the model table's key set, in
/// table order. Empty when the table is empty.
///
/// [`Predictor`]: crate::model::Predictor
pub fn predict_increases(
    decision_value: f64, decision_field: &str, state: &StateVector, models: &ModelTable,
    registry: &FeatureRegistry,
) -> SimResult<IncreaseSet> {
    let mut snapshot = state.clone();
    snapshot.set(decision_field, decision_value)?;

    let mut increases = IncreaseSet::with_capacity(models.len());
    for (target, model) in models.iter() {
        let predictors = registry
            .predictors(target)
            .ok_or_else(|| SimError::MissingPredictorList { target: target.to_string() })?;

        let mut values = Vec::with_capacity(predictors.len());
        for feature in predictors {
            let value = snapshot.get(feature).ok_or_else(|| SimError::MissingFeature {
                target: target.to_string(),
                feature: feature.clone(),
            })?;
            values.push(value);
        }

        let prediction = model.predict(&Features::from(values))?;
        validate_prediction(target, prediction)?;
        increases.insert(target.to_string(), prediction);
    }
    Ok(increases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::Predictor, simulation::types::Features};
    use approx::assert_abs_diff_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Purity: the caller's state is bitwise unchanged and repeated calls
    //   agree.
    // - Feature assembly order and decision-field substitution.
    // - Failure modes: missing registry entry, missing feature, non-finite
    //   prediction.
    //
    // They intentionally DO NOT cover:
    // - How increases are committed; that belongs to `update` tests.
    // -------------------------------------------------------------------------

    /// Records the feature vector it was called with and echoes back the
    /// first feature, letting tests observe assembly order and the
    /// substituted decision value.
    struct EchoFirst;

    impl Predictor for EchoFirst {
        fn predict(&self, features: &Features) -> SimResult<f64> {
            Ok(features[0])
        }
    }

    struct Fixed(f64);

    impl Predictor for Fixed {
        fn predict(&self, _features: &Features) -> SimResult<f64> {
            Ok(self.0)
        }
    }

    fn make_state() -> StateVector {
        StateVector::from_pairs([("INC_SMI_REAL", 0.0), ("WAGE", 1000.0), ("POVERTY", 0.2)])
            .expect("test state should construct")
    }

    #[test]
    // Purpose
    // -------
    // Verify the transition never mutates its input and is deterministic.
    //
    // Given
    // -----
    // - A state and a fixed-output model for "POVERTY".
    //
    // Expect
    // ------
    // - Two identical calls return identical increase sets.
    // - The original state compares equal to a pre-call clone.
    fn predict_increases_is_pure_and_deterministic() {
        let state = make_state();
        let before = state.clone();
        let mut models = ModelTable::new();
        models.insert("POVERTY", Box::new(Fixed(-0.01)));
        let mut registry = FeatureRegistry::new();
        registry.insert("POVERTY", ["WAGE", "INC_SMI_REAL"]);

        let first = predict_increases(0.05, "INC_SMI_REAL", &state, &models, &registry).unwrap();
        let second = predict_increases(0.05, "INC_SMI_REAL", &state, &models, &registry).unwrap();

        assert_eq!(first, second);
        assert_eq!(state, before);
    }

    #[test]
    // Purpose
    // -------
    // Verify the decision field is overwritten in the snapshot the models
    // see, and that features arrive in registry order.
    //
    // Given
    // -----
    // - A model echoing its first feature, registered with predictor list
    //   ["INC_SMI_REAL", "WAGE"].
    // - A state whose stored decision value is 0.0 and candidate 0.07.
    //
    // Expect
    // ------
    // - The echoed value is the candidate 0.07, not the stored 0.0.
    fn predict_increases_applies_candidate_before_prediction() {
        let state = make_state();
        let mut models = ModelTable::new();
        models.insert("POVERTY", Box::new(EchoFirst));
        let mut registry = FeatureRegistry::new();
        registry.insert("POVERTY", ["INC_SMI_REAL", "WAGE"]);

        let increases =
            predict_increases(0.07, "INC_SMI_REAL", &state, &models, &registry).unwrap();
        assert_abs_diff_eq!(increases["POVERTY"], 0.07);
    }

    #[test]
    // Purpose
    // -------
    // Verify the output key set equals the model table's key set, in
    // table order.
    //
    // Given
    // -----
    // - Models for "POVERTY" then "WAGE" (both registered).
    //
    // Expect
    // ------
    // - Keys are exactly ["POVERTY", "WAGE"] in that order.
    fn predict_increases_domain_matches_model_table() {
        let state = make_state();
        let mut models = ModelTable::new();
        models.insert("POVERTY", Box::new(Fixed(0.01)));
        models.insert("WAGE", Box::new(Fixed(0.02)));
        let mut registry = FeatureRegistry::new();
        registry.insert("POVERTY", ["WAGE"]);
        registry.insert("WAGE", ["INC_SMI_REAL"]);

        let increases =
            predict_increases(0.0, "INC_SMI_REAL", &state, &models, &registry).unwrap();
        let keys: Vec<&String> = increases.keys().collect();
        assert_eq!(keys, vec!["POVERTY", "WAGE"]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure configuration errors fail loudly: a target without a
    // registry entry and a predictor absent from the state.
    //
    // Given
    // -----
    // - A model for "POVERTY" with no registry entry; then a registry
    //   entry naming the nonexistent field "GDP".
    //
    // Expect
    // ------
    // - `SimError::MissingPredictorList` and `SimError::MissingFeature`
    //   respectively, each naming the target.
    fn predict_increases_rejects_misconfigured_lookup_tables() {
        let state = make_state();
        let mut models = ModelTable::new();
        models.insert("POVERTY", Box::new(Fixed(0.01)));

        let registry = FeatureRegistry::new();
        let err = predict_increases(0.0, "INC_SMI_REAL", &state, &models, &registry).unwrap_err();
        assert_eq!(err, SimError::MissingPredictorList { target: "POVERTY".to_string() });

        let mut registry = FeatureRegistry::new();
        registry.insert("POVERTY", ["GDP"]);
        let err = predict_increases(0.0, "INC_SMI_REAL", &state, &models, &registry).unwrap_err();
        assert_eq!(
            err,
            SimError::MissingFeature { target: "POVERTY".to_string(), feature: "GDP".to_string() }
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure a missing decision field and a non-finite model output are
    // both rejected.
    //
    // Given
    // -----
    // - A decision-field name the state does not carry; then a model
    //   returning NaN.
    //
    // Expect
    // ------
    // - `SimError::UnknownField` and `SimError::NonFinitePrediction`.
    fn predict_increases_rejects_bad_decision_field_and_nan_output() {
        let state = make_state();
        let mut models = ModelTable::new();
        models.insert("POVERTY", Box::new(Fixed(f64::NAN)));
        let mut registry = FeatureRegistry::new();
        registry.insert("POVERTY", ["WAGE"]);

        let err = predict_increases(0.0, "NO_SUCH_FIELD", &state, &models, &registry).unwrap_err();
        assert_eq!(err, SimError::UnknownField { field: "NO_SUCH_FIELD".to_string() });

        let err = predict_increases(0.0, "INC_SMI_REAL", &state, &models, &registry).unwrap_err();
        assert!(matches!(err, SimError::NonFinitePrediction { target, .. } if target == "POVERTY"));
    }
}
