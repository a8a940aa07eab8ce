//! Indicator snapshots and evolution traces for the simulation engine.
//!
//! Purpose
//! -------
//! Provide small, validated containers for the named indicator values of
//! one geographic unit and for the sequence of snapshots a simulation
//! run produces. This module centralizes input validation for raw state
//! data and standardizes how field order is represented.
//!
//! Key behaviors
//! -------------
//! - [`StateVector`] enforces basic data invariants (non-empty, finite
//!   field values) and preserves field insertion order.
//! - [`EvolutionTrace`] records one pre-commit snapshot per round,
//!   append-only and in step order.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every field value is **finite** at all times; mutation through
//!   [`StateVector::set`] re-validates the incoming value.
//! - Field names are unique and iteration order is insertion order.
//! - Snapshots stored in a trace are never mutated after being recorded.
//!
//! Conventions
//! -----------
//! - The decision field (the wage-increase indicator) is an ordinary
//!   field; the driver names it via its configuration rather than this
//!   type baking it in.
//! - Both containers derive `serde` traits so the surrounding pipeline
//!   can persist or exchange snapshots.
//!
//! Downstream usage
//! ----------------
//! - Construct [`StateVector`] at the boundary where indicator data
//!   enters the engine; downstream modules may rely on its invariants
//!   and skip re-validating basic properties.
//! - [`EvolutionTrace`] is the externally visible output of a run; it is
//!   produced by the driver and read (or serialized) by callers.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction behavior for `StateVector::new`
//!   (happy path, empty map, non-finite values), `get`/`set` semantics,
//!   and trace append-only accounting.
use crate::simulation::errors::{SimError, SimResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// `StateVector` — one region's indicator snapshot at one simulated time
/// point.
///
/// Purpose
/// -------
/// Represent a single, validated record of named numeric fields. This
/// type centralizes basic input checks so downstream code can assume
/// clean, finite data and a deterministic field order.
///
/// Fields
/// ------
/// - `fields`: `IndexMap<String, f64>`
///   Named indicator values; insertion-ordered, all finite.
///
/// Invariants
/// ----------
/// - `fields.len() > 0`.
/// - Every stored value is finite; `set` re-validates on mutation.
///
/// Performance
/// -----------
/// - Validation is O(n) in the number of fields due to a single scan.
/// - After construction this is a lightweight container; lookups are
///   O(1) hashed access.
///
/// Notes
/// -----
/// - The engine mutates a working copy step-to-step; each round's
///   pre-commit snapshot is cloned into the trace and never touched
///   again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    fields: IndexMap<String, f64>,
}

impl StateVector {
    /// Construct a validated [`StateVector`] from named field values.
    ///
    /// Parameters
    /// ----------
    /// - `fields`: `IndexMap<String, f64>`
    ///   Named indicator values. Must be non-empty with finite values.
    ///
    /// Returns
    /// -------
    /// `SimResult<StateVector>`
    ///   - `Ok(StateVector)` if all invariants are satisfied.
    ///   - `Err(SimError)` if validation fails.
    ///
    /// Errors
    /// ------
    /// - `SimError::EmptyState` when `fields` is empty.
    /// - `SimError::NonFiniteField { field, value }` when any value is
    ///   NaN or ±∞; `field` names the first offending entry.
    ///
    /// Panics
    /// ------
    /// - Never panics. All invalid inputs are reported via `SimError`.
    pub fn new(fields: IndexMap<String, f64>) -> SimResult<Self> {
        if fields.is_empty() {
            return Err(SimError::EmptyState);
        }
        for (field, &value) in &fields {
            if !value.is_finite() {
                return Err(SimError::NonFiniteField { field: field.clone(), value });
            }
        }
        Ok(StateVector { fields })
    }

    /// Construct a [`StateVector`] from `(name, value)` pairs.
    ///
    /// Convenience wrapper over [`StateVector::new`]; later duplicates of
    /// a name overwrite earlier ones, as with plain map insertion.
    ///
    /// Errors
    /// ------
    /// - Same as [`StateVector::new`].
    pub fn from_pairs<N, I>(pairs: I) -> SimResult<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, f64)>,
    {
        let fields: IndexMap<String, f64> =
            pairs.into_iter().map(|(name, value)| (name.into(), value)).collect();
        StateVector::new(fields)
    }

    /// Read a field value by name; `None` if the field does not exist.
    pub fn get(&self, field: &str) -> Option<f64> {
        self.fields.get(field).copied()
    }

    /// `true` when the state carries a field with the given name.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Overwrite an existing field with a new finite value.
    ///
    /// The engine never invents fields: writing to a name the state does
    /// not carry is a configuration error and fails loudly.
    ///
    /// Errors
    /// ------
    /// - `SimError::UnknownField { field }` when the field is absent.
    /// - `SimError::NonFiniteField { field, value }` when the new value
    ///   is NaN or ±∞.
    pub fn set(&mut self, field: &str, value: f64) -> SimResult<()> {
        if !value.is_finite() {
            return Err(SimError::NonFiniteField { field: field.to_string(), value });
        }
        match self.fields.get_mut(field) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(SimError::UnknownField { field: field.to_string() }),
        }
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.fields.iter().map(|(name, &value)| (name.as_str(), value))
    }

    /// Field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always `false` for a constructed state; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// `EvolutionTrace` — ordered sequence of per-round state snapshots.
///
/// Purpose
/// -------
/// Hold the externally visible output of a simulation run: one snapshot
/// per round, recorded *before* the round's increases are committed, in
/// step order.
///
/// Invariants
/// ----------
/// - Append-only: snapshots are never reordered or mutated after being
///   written. Mutation is restricted to the engine via `pub(crate)`
///   push access.
/// - After a successful run the trace length equals the configured step
///   count exactly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EvolutionTrace {
    snapshots: Vec<StateVector>,
}

impl EvolutionTrace {
    /// Create an empty trace.
    pub fn new() -> Self {
        EvolutionTrace { snapshots: Vec::new() }
    }

    /// Append one round's pre-commit snapshot. Engine-internal.
    pub(crate) fn push(&mut self, snapshot: StateVector) {
        self.snapshots.push(snapshot);
    }

    /// All recorded snapshots in step order.
    pub fn snapshots(&self) -> &[StateVector] {
        &self.snapshots
    }

    /// The most recent snapshot, if any round has completed.
    pub fn last(&self) -> Option<&StateVector> {
        self.snapshots.last()
    }

    /// Number of recorded rounds.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// `true` before the first round has been recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Consume the trace, yielding the owned snapshot sequence.
    pub fn into_snapshots(self) -> Vec<StateVector> {
        self.snapshots
    }
}
