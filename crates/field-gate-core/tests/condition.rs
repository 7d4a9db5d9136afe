// crates/field-gate-core/tests/condition.rs
// ============================================================================
// Module: Condition Expression Tests
// Description: Coverage for condition composition, folding, and rendering.
// Purpose: Ensure gating expressions compose and render deterministically.
// Dependencies: field-gate-core
// ============================================================================

//! ## Overview
//! Exercises the condition algebra on its own: constructor flags, AND/OR
//! composition, the short-circuiting fold, and diagnostic rendering.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::cell::Cell;

use field_gate_core::Condition;
use field_gate_core::ConditionFlag;

// ============================================================================
// SECTION: Rendering Tests
// ============================================================================

#[test]
fn base_flags_render_their_names() -> Result<(), Box<dyn std::error::Error>> {
    if Condition::in_message().flags_string() != "in_message" {
        return Err("in_message must render as its flag name".into());
    }
    if Condition::in_mask().flags_string() != "in_mask" {
        return Err("in_mask must render as its flag name".into());
    }

    Ok(())
}

#[test]
fn composites_render_parenthesized() -> Result<(), Box<dyn std::error::Error>> {
    let both = Condition::in_message().and(Condition::in_mask());
    if both.flags_string() != "(in_message && in_mask)" {
        return Err(format!("unexpected AND rendering: {}", both.flags_string()).into());
    }

    let either = Condition::in_message()
        .and(Condition::in_mask())
        .or(Condition::in_mask());
    if either.flags_string() != "((in_message && in_mask) || in_mask)" {
        return Err(format!("unexpected nested rendering: {}", either.flags_string()).into());
    }

    Ok(())
}

#[test]
fn rendering_is_deterministic() -> Result<(), Box<dyn std::error::Error>> {
    let condition = Condition::in_mask().or(Condition::in_message());
    if condition.flags_string() != condition.flags_string() {
        return Err("two renders of one expression must agree".into());
    }

    Ok(())
}

// ============================================================================
// SECTION: Fold Tests
// ============================================================================

#[test]
fn evaluate_folds_the_truth_table() -> Result<(), Box<dyn std::error::Error>> {
    let both = Condition::in_message().and(Condition::in_mask());
    let either = Condition::in_message().or(Condition::in_mask());

    for (in_message, in_mask) in [(false, false), (false, true), (true, false), (true, true)] {
        let lookup = |flag: ConditionFlag| match flag {
            ConditionFlag::InMessage => in_message,
            ConditionFlag::InMask => in_mask,
        };
        if both.evaluate(&lookup) != (in_message && in_mask) {
            return Err(format!("AND fold wrong for ({in_message}, {in_mask})").into());
        }
        if either.evaluate(&lookup) != (in_message || in_mask) {
            return Err(format!("OR fold wrong for ({in_message}, {in_mask})").into());
        }
    }

    Ok(())
}

#[test]
fn evaluate_short_circuits_left_to_right() -> Result<(), Box<dyn std::error::Error>> {
    let consulted = Cell::new(0usize);

    let both = Condition::in_message().and(Condition::in_mask());
    let closed = |_flag: ConditionFlag| {
        consulted.set(consulted.get() + 1);
        false
    };
    if both.evaluate(&closed) {
        return Err("closed AND must fold false".into());
    }
    if consulted.get() != 1 {
        return Err(format!("AND must stop at the first false, consulted {}", consulted.get()).into());
    }

    consulted.set(0);
    let either = Condition::in_message().or(Condition::in_mask());
    let open = |_flag: ConditionFlag| {
        consulted.set(consulted.get() + 1);
        true
    };
    if !either.evaluate(&open) {
        return Err("open OR must fold true".into());
    }
    if consulted.get() != 1 {
        return Err(format!("OR must stop at the first true, consulted {}", consulted.get()).into());
    }

    Ok(())
}

// ============================================================================
// SECTION: Composition Tests
// ============================================================================

#[test]
fn composition_produces_new_values() -> Result<(), Box<dyn std::error::Error>> {
    let base = Condition::in_message();
    let composed = base.clone().and(Condition::in_mask());

    if base != Condition::in_message() {
        return Err("composition must not rewrite the original operand".into());
    }
    if composed == base {
        return Err("composition must produce a distinct expression".into());
    }

    Ok(())
}

#[test]
fn flag_constructor_matches_named_constructors() -> Result<(), Box<dyn std::error::Error>> {
    if Condition::flag(ConditionFlag::InMessage) != Condition::in_message() {
        return Err("flag(InMessage) must equal in_message()".into());
    }
    if Condition::flag(ConditionFlag::InMask) != Condition::in_mask() {
        return Err("flag(InMask) must equal in_mask()".into());
    }

    Ok(())
}
