//! Update rule: commit a round's predicted increases into the state.
//!
//! Purpose
//! -------
//! Apply an increase set to a state vector under an explicit, ordered
//! field↔target binding list, with an additive rule for a configured
//! subset of fields and a multiplicative (percentage-growth) rule for
//! all others.
//!
//! Key behaviors
//! -------------
//! - [`UpdatePolicy`] is caller-supplied configuration: which state field
//!   consumes which predicted target, and which fields grow additively.
//! - [`apply_increases`] walks the binding list in order and mutates the
//!   state in place.
//!
//! Invariants & assumptions
//! ------------------------
//! - At most one binding per state field; [`UpdatePolicy::new`] rejects
//!   duplicates, so the "two keys match one field" ambiguity of
//!   substring-style matching cannot arise.
//! - Fields without a binding, and bindings whose target produced no
//!   increase this round, are left untouched. That is normal behavior,
//!   not an error.
//! - Bound fields must exist in the state; a dangling binding is a
//!   configuration error and fails loudly.
//!
//! Conventions
//! -----------
//! - Additive classification is keyed by *field* name. A poverty-gap
//!   style indicator (e.g. `CARENCIA`) moves by level, everything else by
//!   relative growth.
use crate::simulation::{
    errors::{SimError, SimResult},
    state::StateVector,
    types::IncreaseSet,
};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// One entry of the update configuration: state field `field` consumes
/// the predicted delta of target variable `target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldBinding {
    pub field: String,
    pub target: String,
}

impl FieldBinding {
    /// Bind a state field to the target variable whose predicted delta
    /// updates it. The common case binds a field to the target of the
    /// same name.
    pub fn new(field: impl Into<String>, target: impl Into<String>) -> Self {
        FieldBinding { field: field.into(), target: target.into() }
    }
}

/// `UpdatePolicy` — ordered field↔target bindings plus the additive
/// field classification.
///
/// Fields
/// ------
/// - `bindings`: ordered binding list; order is the commit order.
/// - `additive`: fields updated as `v + d`; all other bound fields as
///   `v * (1 + d)`.
///
/// Invariants
/// ----------
/// - No state field appears in more than one binding.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdatePolicy {
    bindings: Vec<FieldBinding>,
    additive: IndexSet<String>,
}

impl UpdatePolicy {
    /// Construct a validated policy from bindings and the additive set.
    ///
    /// # Errors
    /// - [`SimError::DuplicateBinding`] when two bindings name the same
    ///   state field. Binding several fields to the *same target* is
    ///   legal.
    pub fn new<N: Into<String>>(
        bindings: Vec<FieldBinding>, additive: impl IntoIterator<Item = N>,
    ) -> SimResult<Self> {
        let mut seen: IndexSet<&str> = IndexSet::with_capacity(bindings.len());
        for binding in &bindings {
            if !seen.insert(binding.field.as_str()) {
                return Err(SimError::DuplicateBinding { field: binding.field.clone() });
            }
        }
        Ok(UpdatePolicy {
            bindings,
            additive: additive.into_iter().map(Into::into).collect(),
        })
    }

    /// Policy with no bindings; every commit is a no-op.
    pub fn empty() -> Self {
        UpdatePolicy::default()
    }

    /// The bindings in commit order.
    pub fn bindings(&self) -> &[FieldBinding] {
        &self.bindings
    }

    /// `true` when the field is classified additive.
    pub fn is_additive(&self, field: &str) -> bool {
        self.additive.contains(field)
    }
}

/// Commit an increase set into a state vector under a policy.
///
/// # Behavior
/// For each binding in policy order:
/// - the bound field must exist in the state;
/// - if the increase set carries the binding's target, the field becomes
///   `v + d` (additive) or `v * (1 + d)` (multiplicative);
/// - otherwise the field is left unchanged.
///
/// Mutates `state` in place. Unbound fields are never touched.
///
/// # Errors
/// - [`SimError::UnknownField`] when a binding names a field the state
///   does not carry.
/// - [`SimError::NonFiniteField`] when an update overflows to a
///   non-finite value; the state's finiteness invariant is preserved.
pub fn apply_increases(
    policy: &UpdatePolicy, increases: &IncreaseSet, state: &mut StateVector,
) -> SimResult<()> {
    for binding in policy.bindings() {
        let Some(current) = state.get(&binding.field) else {
            return Err(SimError::UnknownField { field: binding.field.clone() });
        };
        if let Some(&delta) = increases.get(&binding.target) {
            let next = if policy.is_additive(&binding.field) {
                current + delta
            } else {
                current * (1.0 + delta)
            };
            state.set(&binding.field, next)?;
        }
    }
    Ok(())
}
