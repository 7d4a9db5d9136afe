// crates/field-gate-core/src/lib.rs
// ============================================================================
// Module: Field Gate Root
// Description: Public API surface for the field-validation rule engine.
// Purpose: Wire together core modules and re-exports.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Field Gate is a field-validation rule engine. Callers declare policies —
//! conditional assertions about the fields of a structured message — and
//! evaluate whether a given message instance (the subject) satisfies them.
//! A [`Policy`] binds one gating [`Condition`] to a chain of [`Check`]
//! assertions composed with AND/OR links; the subject supplies the concrete
//! message's answers through the [`Subject`] capability interface.
//!
//! The engine is purely synchronous: execution is a short-circuiting walk
//! over the chain with no I/O and no shared mutable state. Composition is
//! by-value throughout, so policies are frozen once constructed.

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::Calculation;
pub use crate::core::Check;
pub use crate::core::CheckKind;
pub use crate::core::Condition;
pub use crate::core::ConditionFlag;
pub use crate::core::PolicyError;
pub use crate::core::PolicyResult;
pub use crate::interfaces::ConditionalAction;
pub use crate::interfaces::EvaluationTrace;
pub use crate::interfaces::NoopTrace;
pub use crate::interfaces::Subject;
pub use crate::runtime::Policy;
pub use crate::runtime::is_zero_value;
