//! Model and feature-registry tables supplied by the caller.
//!
//! Purpose
//! -------
//! Provide the two read-only lookup structures the engine consumes at
//! invocation time: the table of fitted predictors per target variable
//! and the registry of predictor names each target's model was trained
//! on. Both preserve insertion order, which fixes the order predictions
//! are made in and the order increase sets iterate in.
//!
//! Key behaviors
//! -------------
//! - [`ModelTable`] maps target-variable name → boxed [`Predictor`].
//! - [`FeatureRegistry`] maps target-variable name → ordered predictor
//!   list.
//!
//! Invariants & assumptions
//! ------------------------
//! - The engine treats both tables as immutable during a run; they are
//!   built and owned externally.
//! - Every target in a model table must have a registry entry; the
//!   driver verifies this up front, the transition function re-checks on
//!   lookup.
//! - Predictor lists name state fields; the transition function fails
//!   loudly when a listed predictor is absent from the state.
//!
//! Testing notes
//! -------------
//! - Exercised throughout the `transition`, `driver`, and integration
//!   tests; only insertion/lookup behavior is covered here.
use crate::model::traits::Predictor;
use indexmap::IndexMap;
use std::fmt;

/// `ModelTable` — fitted predictor per target variable, insertion-ordered.
#[derive(Default)]
pub struct ModelTable {
    models: IndexMap<String, Box<dyn Predictor>>,
}

impl ModelTable {
    /// Create an empty table.
    ///
    /// An empty table is legal: a simulation run against it degenerates
    /// to a no-op on every non-decision field.
    pub fn new() -> Self {
        ModelTable { models: IndexMap::new() }
    }

    /// Register (or replace) the predictor for a target variable.
    pub fn insert(&mut self, target: impl Into<String>, model: Box<dyn Predictor>) {
        self.models.insert(target.into(), model);
    }

    /// Look up the predictor for a target variable.
    pub fn get(&self, target: &str) -> Option<&dyn Predictor> {
        self.models.get(target).map(Box::as_ref)
    }

    /// Iterate `(target, predictor)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Predictor)> {
        self.models.iter().map(|(target, model)| (target.as_str(), model.as_ref()))
    }

    /// Target-variable names in insertion order.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// Number of registered targets.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// `true` when no target has a model.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl fmt::Debug for ModelTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelTable")
            .field("targets", &self.models.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// `FeatureRegistry` — ordered predictor-name list per target variable.
///
/// The list order is the order the target's model was trained with; the
/// transition function assembles feature vectors in exactly this order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureRegistry {
    entries: IndexMap<String, Vec<String>>,
}

impl FeatureRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        FeatureRegistry { entries: IndexMap::new() }
    }

    /// Register (or replace) the ordered predictor list for a target.
    pub fn insert<N: Into<String>>(
        &mut self, target: impl Into<String>, predictors: impl IntoIterator<Item = N>,
    ) {
        self.entries
            .insert(target.into(), predictors.into_iter().map(Into::into).collect());
    }

    /// The ordered predictor names for a target, if registered.
    pub fn predictors(&self, target: &str) -> Option<&[String]> {
        self.entries.get(target).map(Vec::as_slice)
    }

    /// Registered target names in insertion order.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered targets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no target is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{errors::SimResult, types::Features};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover insertion, lookup, and iteration order of the two
    // tables. Prediction semantics are covered in `transition` tests.
    // -------------------------------------------------------------------------

    struct Fixed(f64);

    impl Predictor for Fixed {
        fn predict(&self, _features: &Features) -> SimResult<f64> {
            Ok(self.0)
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that `ModelTable` preserves insertion order and resolves
    // lookups to the registered predictor.
    //
    // Given
    // -----
    // - Predictors for "POVERTY" then "GINI".
    //
    // Expect
    // ------
    // - `targets()` yields ["POVERTY", "GINI"]; `get` finds both and
    //   misses unknown names.
    fn model_table_preserves_insertion_order() {
        let mut models = ModelTable::new();
        assert!(models.is_empty());
        models.insert("POVERTY", Box::new(Fixed(0.1)));
        models.insert("GINI", Box::new(Fixed(-0.2)));

        let targets: Vec<&str> = models.targets().collect();
        assert_eq!(targets, vec!["POVERTY", "GINI"]);
        assert!(models.get("GINI").is_some());
        assert!(models.get("UNEMPLOYMENT").is_none());
        assert_eq!(models.len(), 2);
    }

    #[test]
    // Purpose
    // -------
    // Verify that `FeatureRegistry` stores predictor lists verbatim and
    // in order.
    //
    // Given
    // -----
    // - Entry "POVERTY" → ["WAGE", "INC_SMI_REAL"].
    //
    // Expect
    // ------
    // - `predictors("POVERTY")` returns the list in declaration order;
    //   unknown targets return `None`.
    fn feature_registry_keeps_predictor_order() {
        let mut registry = FeatureRegistry::new();
        registry.insert("POVERTY", ["WAGE", "INC_SMI_REAL"]);

        assert_eq!(
            registry.predictors("POVERTY"),
            Some(&["WAGE".to_string(), "INC_SMI_REAL".to_string()][..])
        );
        assert_eq!(registry.predictors("GINI"), None);
    }
}
