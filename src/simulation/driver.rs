//! Simulation driver: N sequential optimize–record–commit rounds.
//!
//! This wires the whole engine together: per round it runs the grid
//! maximizer against the caller's objective on the *current* state,
//! writes the winning candidate into the decision field, records the
//! snapshot, and commits the predicted increases via the update rule.
//! Rounds are strictly sequential; round `k + 1` depends on the state
//! committed by round `k`.
use crate::{
    model::{FeatureRegistry, ModelTable},
    simulation::{
        errors::{SimError, SimResult},
        grid::{Grid, maximize_over_grid},
        objective::Objective,
        state::{EvolutionTrace, StateVector},
        transition::predict_increases,
        update::{UpdatePolicy, apply_increases},
        validation::verify_steps,
    },
};

/// `SimulationConfig` — validated run configuration.
///
/// Fields
/// ------
/// - `grid`: the candidate lattice scanned each round.
/// - `steps`: number of sequential rounds; `>= 1`.
/// - `decision_field`: the state field holding the wage-increase lever;
///   overwritten with the winning candidate every round before the
///   snapshot is taken.
/// - `policy`: the update rule configuration committing predicted
///   increases into the state.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    grid: Grid,
    steps: usize,
    decision_field: String,
    policy: UpdatePolicy,
}

impl SimulationConfig {
    /// Construct a validated configuration.
    ///
    /// # Errors
    /// - [`SimError::InvalidStepCount`] when `steps == 0`. The grid and
    ///   policy are validated by their own constructors.
    pub fn new(
        grid: Grid, steps: usize, decision_field: impl Into<String>, policy: UpdatePolicy,
    ) -> SimResult<Self> {
        verify_steps(steps)?;
        Ok(SimulationConfig { grid, steps, decision_field: decision_field.into(), policy })
    }

    /// The candidate lattice.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of rounds the run will execute.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Name of the decision field.
    pub fn decision_field(&self) -> &str {
        &self.decision_field
    }

    /// The update-rule configuration.
    pub fn policy(&self) -> &UpdatePolicy {
        &self.policy
    }
}

/// Run a full simulation and return the evolution trace.
///
/// # Behavior
/// - Up-front checks: `state0` must carry the decision field, and every
///   model-table target must have a feature-registry entry. An empty
///   model table is legal but logged as a warning — every round then
///   commits an empty increase set and only the decision field ever
///   changes.
/// - Per round:
///   1. scan the grid, scoring each candidate with `objective` on the
///      current state;
///   2. write the winning candidate into the decision field;
///   3. append a snapshot of the current state to the trace;
///   4. predict the increase set at the winning candidate and commit it
///      through the update policy.
/// - After `steps` rounds, the trace (length exactly `steps`) is
///   returned.
///
/// # Errors
/// Any failure inside a round — optimizer, objective, transition, or
/// update — aborts the whole simulation with no partial trace. A
/// corrupted mid-run state would propagate nonsensical results into all
/// subsequent rounds, so there is no recovery layer.
pub fn simulate<O>(
    config: &SimulationConfig, state0: StateVector, objective: &O, models: &ModelTable,
    registry: &FeatureRegistry,
) -> SimResult<EvolutionTrace>
where
    O: Objective + ?Sized,
{
    if !state0.contains(config.decision_field()) {
        return Err(SimError::UnknownField { field: config.decision_field().to_string() });
    }
    for target in models.targets() {
        if registry.predictors(target).is_none() {
            return Err(SimError::MissingPredictorList { target: target.to_string() });
        }
    }
    if models.is_empty() {
        tracing::warn!(
            steps = config.steps(),
            "empty model table: simulation will not move any non-decision field"
        );
    }

    let mut state = state0;
    let mut trace = EvolutionTrace::new();
    for step in 0..config.steps() {
        let outcome = maximize_over_grid(config.grid(), |candidate| {
            objective.score(candidate, &state, models, registry)
        })?;

        state.set(config.decision_field(), outcome.best_candidate)?;
        trace.push(state.clone());

        let increases = predict_increases(
            outcome.best_candidate,
            config.decision_field(),
            &state,
            models,
            registry,
        )?;
        apply_increases(config.policy(), &increases, &mut state)?;

        tracing::debug!(
            step,
            best_candidate = outcome.best_candidate,
            best_value = outcome.best_value,
            evaluations = outcome.evaluations,
            "round committed"
        );
    }
    Ok(trace)
}
