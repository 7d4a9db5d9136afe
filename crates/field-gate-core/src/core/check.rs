// crates/field-gate-core/src/core/check.rs
// ============================================================================
// Module: Field Gate Checks
// Description: Chainable assertion nodes over a field's runtime value.
// Purpose: Define the check chain structure that policies evaluate.
// Dependencies: serde_json, std::{fmt, sync}
// ============================================================================

//! ## Overview
//! A check is one assertion about a field's value plus links into an AND/OR
//! chain: the AND successor is a further requirement consulted after this
//! check passes, the OR successor an alternative consulted after it fails.
//! Checks carry no evaluation logic against a subject; deciding whether a
//! concrete message satisfies a check belongs to the subject, and walking
//! the chain belongs to the policy runtime.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

// ============================================================================
// SECTION: Calculation Type
// ============================================================================

/// Type-erased user predicate over a field's runtime value.
///
/// The subject extracts the field's value from its concrete message
/// representation and hands it to the calculation as JSON; the calculation
/// answers whether the assertion holds.
pub type Calculation = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

// ============================================================================
// SECTION: Check Kind
// ============================================================================

/// The assertion a single check node carries.
#[derive(Clone)]
pub enum CheckKind {
    /// The field's value must not be the zero value for its type.
    ///
    /// The zero-value test itself is delegated to the subject, which knows
    /// the field's concrete type; this variant only tags the intent.
    /// Subjects holding JSON-modelled values can use
    /// [`crate::runtime::zero::is_zero_value`].
    NotZero,

    /// A user-supplied calculation with its human-readable assertion text.
    Calculated {
        /// Assertion text used in failure diagnostics.
        assertion: String,
        /// Predicate over the field's runtime value.
        calculation: Calculation,
    },
}

impl fmt::Debug for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotZero => f.write_str("NotZero"),
            Self::Calculated {
                assertion, ..
            } => f.debug_struct("Calculated").field("assertion", assertion).finish_non_exhaustive(),
        }
    }
}

// ============================================================================
// SECTION: Check Node
// ============================================================================

/// One assertion node in a policy's check chain.
///
/// # Invariants
/// - `and_next` and `or_next` are independently optional; a leaf has both
///   unset.
/// - Chains are finite, acyclic, and singly linked. Combinators consume
///   their operands, so a linked node is owned by exactly one chain.
#[derive(Debug, Clone)]
pub struct Check {
    /// The assertion this node carries.
    kind: CheckKind,
    /// Further requirement consulted after this check passes.
    and_next: Option<Box<Check>>,
    /// Alternative consulted after this check fails.
    or_next: Option<Box<Check>>,
}

impl Check {
    /// Creates a leaf check asserting the field is not its type's zero value.
    #[must_use]
    pub const fn not_zero() -> Self {
        Self {
            kind: CheckKind::NotZero,
            and_next: None,
            or_next: None,
        }
    }

    /// Creates a leaf check wrapping a user calculation.
    ///
    /// `assertion` is the diagnostic text reported when the calculation
    /// answers false and no OR-alternative remains.
    #[must_use]
    pub fn calculated<F>(assertion: impl Into<String>, calculation: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            kind: CheckKind::Calculated {
                assertion: assertion.into(),
                calculation: Arc::new(calculation),
            },
            and_next: None,
            or_next: None,
        }
    }

    /// Appends `other` at the tail of this check's AND-chain.
    ///
    /// Repeated calls append rather than replace, so
    /// `a.and(b).and(c)` and `a.and(b.and(c))` link the same chain.
    /// The OR-chain is untouched.
    #[must_use]
    pub fn and(mut self, other: Self) -> Self {
        self.append_and(other);
        self
    }

    /// Appends `other` at the tail of this check's OR-chain.
    ///
    /// Same append semantics as [`Check::and`], independent of the AND-chain.
    #[must_use]
    pub fn or(mut self, other: Self) -> Self {
        self.append_or(other);
        self
    }

    /// Attaches `other` to the last node of the AND-chain.
    fn append_and(&mut self, other: Self) {
        match self.and_next {
            Some(ref mut next) => next.append_and(other),
            None => self.and_next = Some(Box::new(other)),
        }
    }

    /// Attaches `other` to the last node of the OR-chain.
    fn append_or(&mut self, other: Self) {
        match self.or_next {
            Some(ref mut next) => next.append_or(other),
            None => self.or_next = Some(Box::new(other)),
        }
    }

    /// Returns the assertion this node carries.
    #[must_use]
    pub const fn kind(&self) -> &CheckKind {
        &self.kind
    }

    /// Returns the AND successor, if any.
    #[must_use]
    pub fn and_next(&self) -> Option<&Self> {
        self.and_next.as_deref()
    }

    /// Returns the OR successor, if any.
    #[must_use]
    pub fn or_next(&self) -> Option<&Self> {
        self.or_next.as_deref()
    }

    /// Renders the failure diagnostic for this node.
    ///
    /// Diagnostic-only; the text is what [`crate::core::error::PolicyError::Unsatisfied`]
    /// carries when traversal stops at this node.
    #[must_use]
    pub fn infractions_string(&self) -> String {
        match &self.kind {
            CheckKind::NotZero => "field value must be non-zero for its type".to_string(),
            CheckKind::Calculated {
                assertion, ..
            } => assertion.clone(),
        }
    }
}
