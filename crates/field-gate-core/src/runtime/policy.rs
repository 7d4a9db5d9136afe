// crates/field-gate-core/src/runtime/policy.rs
// ============================================================================
// Module: Field Gate Policy Runtime
// Description: Policy binding and the short-circuiting chain evaluator.
// Purpose: Bind one condition to one check chain and execute it on subjects.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! A policy is the evaluable unit: one gating condition plus one check chain.
//! Execution first asks the subject how the condition applies, then walks the
//! chain with short-circuit semantics: the AND successor is consulted only
//! after a check passes, the OR successor only after it fails, and the first
//! terminal outcome wins. The walk is an explicit loop, so stack use stays
//! constant no matter how long a caller-built chain grows.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::Check;
use crate::core::Condition;
use crate::core::PolicyError;
use crate::core::PolicyResult;
use crate::interfaces::ConditionalAction;
use crate::interfaces::EvaluationTrace;
use crate::interfaces::NoopTrace;
use crate::interfaces::Subject;

// ============================================================================
// SECTION: Policy Definition
// ============================================================================

/// A bound (condition, check chain) pair.
///
/// # Invariants
/// - Immutable after construction except through the by-value [`Policy::and`]
///   / [`Policy::or`] combinators, which consume both operands.
/// - Execution never mutates the policy; a policy reachable from several
///   threads is frozen by construction.
#[derive(Debug, Clone)]
pub struct Policy {
    /// Gating expression consulted before any check runs.
    condition: Condition,
    /// Root of the check chain; `None` means no assertions to check.
    checks: Option<Check>,
}

impl Policy {
    /// Creates a policy binding `condition` to a check chain.
    #[must_use]
    pub const fn new(condition: Condition, checks: Check) -> Self {
        Self {
            condition,
            checks: Some(checks),
        }
    }

    /// Creates a policy with no checks.
    ///
    /// A vacuous policy succeeds whenever its gate signals
    /// [`ConditionalAction::Evaluate`] or [`ConditionalAction::Skip`]; only a
    /// [`ConditionalAction::Fail`] gate can fail it. The empty chain is an
    /// explicit construction choice, never an accident of composition.
    #[must_use]
    pub const fn vacuous(condition: Condition) -> Self {
        Self {
            condition,
            checks: None,
        }
    }

    /// Returns the policy's gating condition.
    #[must_use]
    pub const fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Returns the root of the check chain, if any.
    #[must_use]
    pub fn checks(&self) -> Option<&Check> {
        self.checks.as_ref()
    }

    // ========================================================================
    // SECTION: Composition
    // ========================================================================

    /// Conjoins another policy onto this one.
    ///
    /// The other policy's chain is appended at the tail of this chain's
    /// AND-links and the two conditions combine with logical AND. Both
    /// operands are consumed; tail-append keeps composition associative, so
    /// `(a.and(b)).and(c)` and `a.and(b.and(c))` evaluate identically.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        let Self {
            condition,
            checks,
        } = self;
        let merged = match (checks, other.checks) {
            (Some(mine), Some(theirs)) => Some(mine.and(theirs)),
            (Some(mine), None) => Some(mine),
            (None, theirs) => theirs,
        };
        Self {
            condition: condition.and(other.condition),
            checks: merged,
        }
    }

    /// Disjoins another policy onto this one.
    ///
    /// The other policy's chain is appended at the tail of this chain's
    /// OR-links and the two conditions combine with logical OR.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        let Self {
            condition,
            checks,
        } = self;
        let merged = match (checks, other.checks) {
            (Some(mine), Some(theirs)) => Some(mine.or(theirs)),
            (Some(mine), None) => Some(mine),
            (None, theirs) => theirs,
        };
        Self {
            condition: condition.or(other.condition),
            checks: merged,
        }
    }

    // ========================================================================
    // SECTION: Execution
    // ========================================================================

    /// Executes the policy against a subject.
    ///
    /// Consults the gate first: `Skip` succeeds immediately without touching
    /// the chain, `Fail` reports the unmet conditions, `Evaluate` walks the
    /// chain. Execution is idempotent for an unchanged subject.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::ConditionNotMet`] when the gate signals `Fail`,
    /// or [`PolicyError::Unsatisfied`] when the walk stops at a failing check
    /// with no remaining alternative.
    pub fn execute<S>(&self, subject: &S) -> PolicyResult
    where
        S: Subject + ?Sized,
    {
        self.execute_with_trace(subject, &mut NoopTrace)
    }

    /// Executes the policy with trace callbacks for every consulted node.
    ///
    /// Same algorithm as [`Policy::execute`]; the trace observes the gate
    /// signal and each check outcome in walk order.
    ///
    /// # Errors
    ///
    /// Identical to [`Policy::execute`].
    pub fn execute_with_trace<S, T>(&self, subject: &S, trace: &mut T) -> PolicyResult
    where
        S: Subject + ?Sized,
        T: EvaluationTrace,
    {
        let action = subject.conditional_action(&self.condition);
        trace.on_gate(&self.condition, action);
        match action {
            ConditionalAction::Skip => Ok(()),
            ConditionalAction::Fail => Err(PolicyError::ConditionNotMet {
                conditions: self.condition.flags_string(),
            }),
            ConditionalAction::Evaluate => walk_chain(self.checks.as_ref(), subject, trace),
        }
    }
}

// ============================================================================
// SECTION: Chain Traversal
// ============================================================================

/// Walks a check chain with short-circuit AND/OR semantics.
///
/// A node's own outcome picks the single link to follow: pass moves to the
/// AND successor (a further requirement), fail moves to the OR successor (an
/// alternative). There is no backtracking once an OR branch fails further
/// down, and no accumulation of failures; the first terminal result wins.
/// An empty chain is vacuously satisfied.
fn walk_chain<S, T>(root: Option<&Check>, subject: &S, trace: &mut T) -> PolicyResult
where
    S: Subject + ?Sized,
    T: EvaluationTrace,
{
    let mut current = root;
    loop {
        let Some(check) = current else {
            return Ok(());
        };
        let satisfied = subject.satisfies(check);
        trace.on_check_evaluated(check, satisfied);
        current = if satisfied {
            match check.and_next() {
                Some(next) => Some(next),
                None => return Ok(()),
            }
        } else {
            match check.or_next() {
                Some(next) => Some(next),
                None => {
                    return Err(PolicyError::Unsatisfied {
                        infraction: check.infractions_string(),
                    });
                }
            }
        };
    }
}
