//! wage_policy_sim — minimum-wage policy simulation over fitted
//! indicator models.
//!
//! Purpose
//! -------
//! Serve as the crate root for the policy simulation engine: an
//! iterative, model-in-the-loop optimization loop that, at each discrete
//! time step, searches for the wage-increase value maximizing a
//! user-supplied objective, applies the resulting predicted changes to a
//! state vector, and advances to the next step.
//!
//! Key behaviors
//! -------------
//! - Re-export the core modules ([`model`] and [`simulation`]) as the
//!   public crate surface.
//! - Keep externally trained regression models behind the single-method
//!   [`model::Predictor`] seam; the crate never trains, persists, or
//!   reloads models.
//!
//! Invariants & assumptions
//! ------------------------
//! - All computation is single-threaded, synchronous, and in-memory; the
//!   crate has no file format, wire protocol, or CLI surface. Inputs and
//!   outputs are exchanged in-process with the surrounding data pipeline
//!   and modeling code.
//! - The decision variable is a single scalar per step by design; the
//!   composed objective surface is too irregular for gradient-based
//!   solvers, so the optimizer is a discretized scan.
//!
//! Downstream usage
//! ----------------
//! - Most callers can `use wage_policy_sim::prelude::*;` and then build
//!   a `ModelTable`, `FeatureRegistry`, `StateVector`, `UpdatePolicy`,
//!   and `SimulationConfig` before calling `simulate`.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by
//!   the end-to-end scenario in `tests/integration_simulation.rs`.

pub mod model;
pub mod simulation;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use wage_policy_sim::prelude::*;
//
// to import the main engine surface in a single line.

pub mod prelude {
    pub use crate::model::{FeatureRegistry, LinearPredictor, ModelTable, Predictor};
    pub use crate::simulation::{
        DEFAULT_GRID_SAMPLES, EvolutionTrace, Features, FieldBinding, Grid, GridOutcome, IncreaseSet,
        Objective, Score, SimError, SimResult, SimulationConfig, StateVector, UpdatePolicy,
        WeightedDeltaObjective, apply_increases, maximize_over_grid, predict_increases, simulate,
    };
}
