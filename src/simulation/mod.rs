//! simulation — the model-in-the-loop policy simulation engine.
//!
//! Purpose
//! -------
//! Estimate how raising a regional minimum-wage indicator propagates,
//! over multiple future periods, through a set of dependent
//! socioeconomic indicators (poverty risk, inequality, employment
//! composition, unemployment, productivity, ...). Per round the engine
//! searches a bounded lattice of candidate wage increases for the one
//! maximizing a caller-supplied objective, records the state, and
//! commits the predicted per-indicator changes before advancing.
//!
//! Key behaviors
//! -------------
//! - [`transition::predict_increases`] evaluates one predictor per
//!   target variable against a consistent candidate snapshot and
//!   collects the deltas into an [`IncreaseSet`].
//! - [`update::apply_increases`] commits an increase set under an
//!   explicit, ordered field↔target [`UpdatePolicy`], additively for a
//!   configured field subset and multiplicatively for the rest.
//! - [`grid::maximize_over_grid`] scans equally spaced candidates
//!   low-to-high under strict greater-than, so ties resolve to the
//!   left-most maximizer; the approach is deliberately derivative-free.
//! - [`driver::simulate`] orchestrates the sequential rounds and
//!   returns the [`EvolutionTrace`] of pre-commit snapshots.
//!
//! Invariants & assumptions
//! ------------------------
//! - States are plain values: the transition function never mutates its
//!   input, and each run owns its state copy; nothing is shared across
//!   runs.
//! - All field values, predictions, and objective scores are finite;
//!   violations surface as [`SimError`] values, never as silent
//!   defaults.
//! - Rounds are strictly sequential; a trace of length `steps` is
//!   produced in full or the run fails with no partial result.
//!
//! Conventions
//! -----------
//! - Iteration order everywhere is insertion order (`indexmap`); the
//!   order models predict in and bindings commit in is deterministic
//!   and caller-controlled.
//! - Errors bubble up as [`SimResult<T>`] / [`SimError`]; this module
//!   and its children never intentionally panic.
//! - The engine performs no I/O; `tracing` calls are observational
//!   only.
//!
//! Downstream usage
//! ----------------
//! - Callers build a [`ModelTable`] and [`FeatureRegistry`] from their
//!   training pipeline, a starting [`StateVector`], an [`Objective`]
//!   (closure or [`WeightedDeltaObjective`]), and a
//!   [`SimulationConfig`], then call [`simulate`].
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover lattice mechanics and tie-breaks
//!   (`grid`), transition purity and failure modes (`transition`),
//!   update arithmetic (`update`), and driver round ordering
//!   (`driver`).
//! - `tests/integration_simulation.rs` exercises the full
//!   optimize–record–commit pipeline on the reference scenario.
//!
//! [`ModelTable`]: crate::model::ModelTable
//! [`FeatureRegistry`]: crate::model::FeatureRegistry
//! [`IncreaseSet`]: types::IncreaseSet
//! [`UpdatePolicy`]: update::UpdatePolicy
//! [`EvolutionTrace`]: state::EvolutionTrace
//! [`StateVector`]: state::StateVector
//! [`Objective`]: objective::Objective
//! [`WeightedDeltaObjective`]: objective::WeightedDeltaObjective
//! [`SimulationConfig`]: driver::SimulationConfig
//! [`simulate`]: driver::simulate
//! [`SimError`]: errors::SimError
//! [`SimResult<T>`]: errors::SimResult

pub mod driver;
pub mod errors;
pub mod grid;
pub mod objective;
pub mod state;
pub mod transition;
pub mod types;
pub mod update;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::driver::{SimulationConfig, simulate};
pub use self::errors::{SimError, SimResult};
pub use self::grid::{Grid, GridOutcome, maximize_over_grid};
pub use self::objective::{Objective, WeightedDeltaObjective};
pub use self::state::{EvolutionTrace, StateVector};
pub use self::transition::predict_increases;
pub use self::types::{DEFAULT_GRID_SAMPLES, Features, IncreaseSet, Score};
pub use self::update::{FieldBinding, UpdatePolicy, apply_increases};
