// crates/field-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Field Gate Interfaces
// Description: Capability contracts between the engine and message inspection.
// Purpose: Define the subject boundary and the evaluation trace hooks.
// Dependencies: crate::core, serde::{Deserialize, Serialize}
// ============================================================================

//! ## Overview
//! The engine never touches a concrete message. Everything it needs — does
//! the current field value satisfy a check, how does a gating condition apply
//! right now — is answered by the caller's [`Subject`] implementation.
//! Implementations must be deterministic and side-effect free; the evaluator
//! may consult them any number of times and expects identical answers for an
//! unchanged message.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::Check;
use crate::core::Condition;

// ============================================================================
// SECTION: Gate Signal
// ============================================================================

/// Tri-state signal describing how a condition applies to a subject.
///
/// The three-way form distinguishes "the policy is irrelevant here, skip
/// silently" from "the conditions are relevant and the subject violates
/// them", which a plain boolean cannot express.
///
/// # Invariants
/// - Represents a closed set of gate outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionalAction {
    /// The condition does not apply; the policy is inert for this subject.
    Skip,
    /// The condition applies and the subject violates it.
    Fail,
    /// The condition is met; proceed to the check chain.
    Evaluate,
}

// ============================================================================
// SECTION: Subject Capability
// ============================================================================

/// The caller's message-inspection layer.
///
/// A subject wraps one concrete message instance and one field accessor and
/// answers the engine's questions about it. How fields are located —
/// reflection, generated accessors, a parsed map — is entirely the
/// implementation's business.
pub trait Subject {
    /// Reports whether the current field value satisfies the given check.
    ///
    /// Must be a pure predicate over the field value and the check's kind.
    /// For [`crate::core::CheckKind::Calculated`] the subject extracts the
    /// field's runtime value and applies the carried calculation; for
    /// [`crate::core::CheckKind::NotZero`] it applies the zero-value test
    /// for the field's concrete type.
    fn satisfies(&self, check: &Check) -> bool;

    /// Reports how the gating condition applies to the current field state.
    ///
    /// Subjects with plain boolean presence semantics can fold the
    /// expression with [`Condition::evaluate`] and map the result onto
    /// [`ConditionalAction::Evaluate`] / [`ConditionalAction::Fail`],
    /// reserving [`ConditionalAction::Skip`] for fields the policy cannot
    /// meaningfully gate.
    fn conditional_action(&self, condition: &Condition) -> ConditionalAction;
}

// ============================================================================
// SECTION: Trace Hooks
// ============================================================================

/// Trace hook observing one policy evaluation.
pub trait EvaluationTrace {
    /// Called once with the subject's gate signal before any check runs.
    fn on_gate(&mut self, condition: &Condition, action: ConditionalAction);

    /// Called for every check the traversal consults, in walk order.
    fn on_check_evaluated(&mut self, check: &Check, satisfied: bool);
}

/// No-op trace hook for fast paths.
///
/// # Invariants
/// - Zero-sized marker type; carries no state.
#[derive(Debug, Default)]
pub struct NoopTrace;

impl EvaluationTrace for NoopTrace {
    fn on_gate(&mut self, _condition: &Condition, _action: ConditionalAction) {}

    fn on_check_evaluated(&mut self, _check: &Check, _satisfied: bool) {}
}
