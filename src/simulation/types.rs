//! simulation::types — shared numeric aliases and engine constants.
//!
//! Purpose
//! -------
//! Centralize the core numeric types used by the policy simulation
//! engine. By defining these in one place, the rest of the simulation
//! code can stay agnostic to `ndarray` and `indexmap` specifics and can
//! more easily evolve if a backend changes.
//!
//! Key behaviors
//! -------------
//! - Define canonical aliases for feature vectors, objective scores, and
//!   per-step increase sets (`Features`, `Score`, `IncreaseSet`).
//! - Expose the default candidate-lattice resolution
//!   (`DEFAULT_GRID_SAMPLES`) used by the discretized optimizer.
//!
//! Invariants & assumptions
//! ------------------------
//! - Feature vectors are `ndarray` containers over `f64`, assembled in
//!   the predictor order declared by the feature registry.
//! - `Score` is a totally ordered scalar; higher is better everywhere in
//!   the engine.
//! - `IncreaseSet` iteration order is insertion order, which the
//!   transition function guarantees to be model-table order.
//!
//! Conventions
//! -----------
//! - This module defines no runtime behavior; correctness is exercised
//!   indirectly by tests in the surrounding engine modules.
use indexmap::IndexMap;
use ndarray::Array1;

/// Named-order feature vector handed to a [`Predictor`].
///
/// Alias for `ndarray::Array1<f64>`. Values appear in the predictor
/// order declared by the feature registry entry for the target being
/// predicted.
///
/// [`Predictor`]: crate::model::Predictor
pub type Features = Array1<f64>;

/// Scalar objective value produced when scoring a candidate increase.
///
/// Higher is better; the discretized optimizer maximizes this value.
pub type Score = f64;

/// Per-step mapping of target variable → predicted scalar delta.
///
/// Produced by the transition function, consumed immediately by the
/// update rule. Iteration order is model-table insertion order.
pub type IncreaseSet = IndexMap<String, f64>;

/// Default number of equally spaced candidates scanned per round.
pub const DEFAULT_GRID_SAMPLES: usize = 150;
