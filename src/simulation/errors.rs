/// Crate-wide result alias for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    // ---- State vector ----
    /// A state vector must carry at least one field.
    EmptyState,

    /// State fields must hold finite values.
    NonFiniteField {
        field: String,
        value: f64,
    },

    /// A named field is absent from the state vector.
    UnknownField {
        field: String,
    },

    // ---- Model table / feature registry ----
    /// A model has no predictor list in the feature registry.
    MissingPredictorList {
        target: String,
    },

    /// A required predictor is absent from the state vector.
    MissingFeature {
        target: String,
        feature: String,
    },

    /// A predictor returned a non-finite value.
    NonFinitePrediction {
        target: String,
        value: f64,
    },

    /// Feature vector length does not match the model's coefficients.
    FeatureCountMismatch {
        expected: usize,
        found: usize,
    },

    /// Linear-model coefficients must be finite.
    NonFiniteCoefficient {
        index: usize,
        value: f64,
    },

    // ---- Candidate grid ----
    /// Grid bounds must be finite with `min_inc <= max_inc`.
    InvalidBounds {
        min_inc: f64,
        max_inc: f64,
        reason: &'static str,
    },

    /// At least one candidate must be scanned per round.
    InvalidSampleCount {
        samples: usize,
        reason: &'static str,
    },

    /// The objective returned a non-finite score for a candidate.
    NonFiniteScore {
        candidate: f64,
        value: f64,
    },

    // ---- Update policy ----
    /// A state field may be bound to at most one target variable.
    DuplicateBinding {
        field: String,
    },

    // ---- Objective ----
    /// A predicted target has no weight in the weighted-delta objective.
    MissingWeight {
        target: String,
    },

    // ---- Driver ----
    /// A simulation must run at least one round.
    InvalidStepCount {
        steps: usize,
        reason: &'static str,
    },
}

impl std::error::Error for SimError {}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- State vector ----
            SimError::EmptyState => {
                write!(f, "State vector must contain at least one field")
            }
            SimError::NonFiniteField { field, value } => {
                write!(f, "Non-finite value for state field '{field}': {value}")
            }
            SimError::UnknownField { field } => {
                write!(f, "Field '{field}' is not present in the state vector")
            }

            // ---- Model table / feature registry ----
            SimError::MissingPredictorList { target } => {
                write!(f, "No predictor list registered for target variable '{target}'")
            }
            SimError::MissingFeature { target, feature } => {
                write!(
                    f,
                    "Predictor '{feature}' required by target '{target}' is missing from the state"
                )
            }
            SimError::NonFinitePrediction { target, value } => {
                write!(f, "Model for target '{target}' returned a non-finite prediction: {value}")
            }
            SimError::FeatureCountMismatch { expected, found } => {
                write!(f, "Feature count mismatch: expected {expected}, found {found}")
            }
            SimError::NonFiniteCoefficient { index, value } => {
                write!(f, "Non-finite coefficient at index {index}: {value}")
            }

            // ---- Candidate grid ----
            SimError::InvalidBounds { min_inc, max_inc, reason } => {
                write!(f, "Invalid grid bounds [{min_inc}, {max_inc}]: {reason}")
            }
            SimError::InvalidSampleCount { samples, reason } => {
                write!(f, "Invalid sample count {samples}: {reason}")
            }
            SimError::NonFiniteScore { candidate, value } => {
                write!(f, "Objective returned non-finite score {value} at candidate {candidate}")
            }

            // ---- Update policy ----
            SimError::DuplicateBinding { field } => {
                write!(f, "Field '{field}' is bound to more than one target variable")
            }

            // ---- Objective ----
            SimError::MissingWeight { target } => {
                write!(f, "No weight supplied for predicted target '{target}'")
            }

            // ---- Driver ----
            SimError::InvalidStepCount { steps, reason } => {
                write!(f, "Invalid step count {steps}: {reason}")
            }
        }
    }
}
