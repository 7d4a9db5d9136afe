// crates/field-gate-core/src/core/error.rs
// ============================================================================
// Module: Field Gate Error Definitions
// Description: Structured diagnostics for policy evaluation failures.
// Purpose: Provide the two terminal failure kinds policy execution can yield.
// Dependencies: serde::{Deserialize, Serialize}, thiserror
// ============================================================================

//! ## Overview
//! Policy execution has exactly two failure kinds: the gating condition was
//! relevant but violated, or traversal stopped at an unsatisfied check with
//! no remaining alternative. Both are terminal and non-retryable; the engine
//! is a pure predicate check, not a corrective system. Message text is
//! diagnostic-only and not a compatibility surface.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Policy Errors
// ============================================================================

/// Errors returned by policy execution.
///
/// # Invariants
/// - Variants are stable for programmatic handling; carried strings are not.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PolicyError {
    /// The subject reported the policy's conditions relevant but violated.
    #[error("subject did not meet conditions {conditions}")]
    ConditionNotMet {
        /// Rendered condition flags, from [`crate::core::condition::Condition::flags_string`].
        conditions: String,
    },

    /// Traversal reached a check with no OR-alternative that the subject
    /// reported unsatisfied.
    #[error("{infraction}")]
    Unsatisfied {
        /// The failing check's assertion text, from
        /// [`crate::core::check::Check::infractions_string`].
        infraction: String,
    },
}

// ============================================================================
// SECTION: Result Alias
// ============================================================================

/// Convenient Result type for policy operations.
pub type PolicyResult<T = ()> = Result<T, PolicyError>;
