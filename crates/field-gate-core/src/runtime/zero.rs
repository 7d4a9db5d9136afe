// crates/field-gate-core/src/runtime/zero.rs
// ============================================================================
// Module: Field Gate Zero Values
// Description: Zero-value classification for JSON-modelled field values.
// Purpose: Give subjects one shared zero test for the not-zero check.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! The engine delegates the not-zero judgement to the subject, which knows
//! the field's concrete type. Subjects that model field values as
//! [`serde_json::Value`] — the engine's type-erased value representation —
//! all need the same classification, so it lives here once. Missing values
//! count as zero, which keeps the not-zero check fail-closed on absent data.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

// ============================================================================
// SECTION: Zero Classification
// ============================================================================

/// Reports whether a JSON value is the zero value of its type.
///
/// `null`, `false`, numeric zero (integer or float), the empty string, the
/// empty array, and the empty object are the zero values of their respective
/// types.
#[must_use]
pub fn is_zero_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => {
            number.as_i64() == Some(0)
                || number.as_u64() == Some(0)
                || number.as_f64().is_some_and(|float| float == 0.0)
        }
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
