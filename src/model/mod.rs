//! model — the adapter seam for externally trained regression models.
//!
//! Purpose
//! -------
//! Keep the engine agnostic to model family. Everything the simulation
//! knows about a fitted model is the single-method [`Predictor`] trait;
//! the caller supplies one adapter per target variable in a
//! [`ModelTable`] together with a [`FeatureRegistry`] describing the
//! exact ordered feature names each model was trained on.
//!
//! Key behaviors
//! -------------
//! - [`traits`] defines the `Predictor` contract.
//! - [`tables`] holds the two insertion-ordered lookup structures the
//!   caller builds and the engine reads.
//! - [`linear`] ships a native affine adapter for the linear fits the
//!   upstream training pipeline typically produces.
//!
//! Downstream usage
//! ----------------
//! - The simulation driver and transition function consume these types;
//!   nothing in this module trains, persists, or reloads models.

pub mod linear;
pub mod tables;
pub mod traits;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::linear::LinearPredictor;
pub use self::tables::{FeatureRegistry, ModelTable};
pub use self::traits::Predictor;
