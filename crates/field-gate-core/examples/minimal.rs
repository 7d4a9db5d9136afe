// crates/field-gate-core/examples/minimal.rs
// ============================================================================
// Module: Field Gate Minimal Example
// Description: Minimal end-to-end policy evaluation over a JSON-backed subject.
// Purpose: Demonstrate policy construction, gating, and chain execution.
// Dependencies: field-gate-core
// ============================================================================

//! ## Overview
//! Evaluates a small policy — "when the field arrived in the message and is
//! named by the update mask, it must be non-zero and at least 21" — against
//! a subject backed by a JSON object and a mask set.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use field_gate_core::Check;
use field_gate_core::CheckKind;
use field_gate_core::Condition;
use field_gate_core::ConditionFlag;
use field_gate_core::ConditionalAction;
use field_gate_core::Policy;
use field_gate_core::PolicyError;
use field_gate_core::Subject;
use field_gate_core::is_zero_value;
use serde_json::Value;
use serde_json::json;

/// Error type for example preconditions.
#[derive(Debug)]
struct ExampleError(&'static str);

impl std::fmt::Display for ExampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ExampleError {}

/// Subject over one field of a JSON object message with an update mask.
struct MessageSubject {
    /// The decoded message fields.
    fields: BTreeMap<String, Value>,
    /// Field names the caller's update mask names.
    mask: BTreeSet<String>,
    /// The field this subject answers for.
    field: String,
}

impl MessageSubject {
    /// Returns the field's current value, treating absence as JSON null.
    fn value(&self) -> Value {
        self.fields.get(&self.field).cloned().unwrap_or(Value::Null)
    }
}

impl Subject for MessageSubject {
    fn satisfies(&self, check: &Check) -> bool {
        match check.kind() {
            CheckKind::NotZero => !is_zero_value(&self.value()),
            CheckKind::Calculated {
                calculation, ..
            } => calculation(&self.value()),
        }
    }

    fn conditional_action(&self, condition: &Condition) -> ConditionalAction {
        let lookup = |flag: ConditionFlag| match flag {
            ConditionFlag::InMessage => self.fields.contains_key(&self.field),
            ConditionFlag::InMask => self.mask.contains(&self.field),
        };
        if condition.evaluate(&lookup) {
            ConditionalAction::Evaluate
        } else {
            ConditionalAction::Fail
        }
    }
}

/// Builds the example policy for the `age` field.
fn age_policy() -> Policy {
    let condition = Condition::in_message().and(Condition::in_mask());
    let checks = Check::not_zero().and(Check::calculated("age must be at least 21", |value| {
        value.as_i64().is_some_and(|age| age >= 21)
    }));
    Policy::new(condition, checks)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let policy = age_policy();

    let of_age = MessageSubject {
        fields: BTreeMap::from([("age".to_string(), json!(30))]),
        mask: BTreeSet::from(["age".to_string()]),
        field: "age".to_string(),
    };
    policy.execute(&of_age)?;

    let zeroed = MessageSubject {
        fields: BTreeMap::from([("age".to_string(), json!(0))]),
        mask: BTreeSet::from(["age".to_string()]),
        field: "age".to_string(),
    };
    let Err(err) = policy.execute(&zeroed) else {
        return Err(ExampleError("a zero age must be rejected").into());
    };
    if !matches!(
        err,
        PolicyError::Unsatisfied {
            ..
        }
    ) {
        return Err(ExampleError("expected an unsatisfied check").into());
    }

    let unmasked = MessageSubject {
        fields: BTreeMap::from([("age".to_string(), json!(30))]),
        mask: BTreeSet::new(),
        field: "age".to_string(),
    };
    let Err(err) = policy.execute(&unmasked) else {
        return Err(ExampleError("an unmasked field must fail the gate").into());
    };
    if !matches!(
        err,
        PolicyError::ConditionNotMet {
            ..
        }
    ) {
        return Err(ExampleError("expected an unmet condition").into());
    }

    Ok(())
}
