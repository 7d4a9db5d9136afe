// crates/field-gate-core/src/core/condition.rs
// ============================================================================
// Module: Field Gate Conditions
// Description: Gating expressions over field-presence flags.
// Purpose: Define the condition algebra that decides when a policy applies.
// Dependencies: serde::{Deserialize, Serialize}, std::fmt
// ============================================================================

//! ## Overview
//! Conditions describe *when* a policy's checks should run at all: a field may
//! only be worth validating when it arrived in the wire message, when it is
//! named by the caller's update mask, or some AND/OR combination of the two.
//! Conditions are immutable expression trees; composition consumes both
//! operands and returns a new value, so a condition shared between policies
//! can never be rewritten behind a caller's back.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Condition Flags
// ============================================================================

/// Primitive situational flags a subject can answer for a field.
///
/// # Invariants
/// - Represents a closed set of field-presence situations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionFlag {
    /// The field is present in the wire message.
    InMessage,
    /// The field is named by the caller-supplied update mask.
    InMask,
}

impl ConditionFlag {
    /// Returns the diagnostic name for this flag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InMessage => "in_message",
            Self::InMask => "in_mask",
        }
    }
}

impl fmt::Display for ConditionFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Condition Expression
// ============================================================================

/// Gating expression determining whether a policy's checks are evaluated.
///
/// Conditions form a small boolean algebra over [`ConditionFlag`] leaves.
/// The engine never evaluates a condition itself; the subject owns the
/// mapping from flags to the concrete message state and reports a gate
/// signal through [`crate::interfaces::Subject::conditional_action`].
///
/// # Invariants
/// - Immutable once constructed; composition returns a new value.
/// - Finite tree; depth is bounded by the number of compositions performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// A primitive presence flag.
    Flag(ConditionFlag),
    /// Both sub-conditions must hold.
    And(Box<Condition>, Box<Condition>),
    /// At least one sub-condition must hold.
    Or(Box<Condition>, Box<Condition>),
}

impl Condition {
    /// Creates the "field present in the wire message" condition.
    #[must_use]
    pub const fn in_message() -> Self {
        Self::Flag(ConditionFlag::InMessage)
    }

    /// Creates the "field named by the update mask" condition.
    #[must_use]
    pub const fn in_mask() -> Self {
        Self::Flag(ConditionFlag::InMask)
    }

    /// Creates a condition from a primitive flag.
    #[must_use]
    pub const fn flag(flag: ConditionFlag) -> Self {
        Self::Flag(flag)
    }

    /// Combines two conditions so that both must hold.
    ///
    /// Composition is total: any two condition values combine, and the
    /// operands are consumed so no previously shared expression is aliased.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    /// Combines two conditions so that at least one must hold.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    /// Evaluates the expression against a per-flag answer.
    ///
    /// Subjects that model presence as plain booleans can delegate their
    /// whole gate decision to this fold instead of re-deriving the AND/OR
    /// semantics. Evaluation short-circuits left to right.
    pub fn evaluate<F>(&self, lookup: &F) -> bool
    where
        F: Fn(ConditionFlag) -> bool,
    {
        match self {
            Self::Flag(flag) => lookup(*flag),
            Self::And(lhs, rhs) => lhs.evaluate(lookup) && rhs.evaluate(lookup),
            Self::Or(lhs, rhs) => lhs.evaluate(lookup) || rhs.evaluate(lookup),
        }
    }

    /// Renders the expression for diagnostics.
    ///
    /// The rendering is deterministic but not a compatibility surface;
    /// it exists so gate failures can name the unmet conditions.
    #[must_use]
    pub fn flags_string(&self) -> String {
        self.to_string()
    }
}

// ============================================================================
// SECTION: Display Implementation
// ============================================================================

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(flag) => flag.fmt(f),
            Self::And(lhs, rhs) => write!(f, "({lhs} && {rhs})"),
            Self::Or(lhs, rhs) => write!(f, "({lhs} || {rhs})"),
        }
    }
}
