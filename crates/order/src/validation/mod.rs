//! Structural validation of order payloads.
//!
//! The schema is an ordered list of field rules. Rules run in declaration
//! order and the first violation wins, so the reported message is stable for a
//! given payload.

use crate::model::OrderStatus;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaMode {
    Create,
    Update,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

struct FieldRule {
    name: &'static str,
    required_on_create: bool,
    check: fn(&'static str, &Value) -> Result<(), String>,
}

const ORDER_SCHEMA: [FieldRule; 4] = [
    FieldRule {
        name: "customerName",
        required_on_create: true,
        check: check_customer_name,
    },
    FieldRule {
        name: "totalAmount",
        required_on_create: true,
        check: check_total_amount,
    },
    FieldRule {
        name: "status",
        required_on_create: false,
        check: check_status,
    },
    FieldRule {
        name: "items",
        required_on_create: false,
        check: check_items,
    },
];

const CUSTOMER_NAME_MIN_LEN: usize = 3;

/// Checks `payload` against the order schema for `mode`.
///
/// Returns the accepted object untouched, or the message of the first violated
/// constraint.
pub fn validate(payload: &Value, mode: SchemaMode) -> Result<&Map<String, Value>, ValidationError> {
    let Some(object) = payload.as_object() else {
        return Err(ValidationError("\"value\" must be of type object".into()));
    };

    for rule in &ORDER_SCHEMA {
        match object.get(rule.name) {
            None if mode == SchemaMode::Create && rule.required_on_create => {
                return Err(ValidationError(format!("\"{}\" is required", rule.name)));
            }
            None => {}
            Some(value) => (rule.check)(rule.name, value).map_err(ValidationError)?,
        }
    }

    if let Some(unknown) = object
        .keys()
        .find(|key| ORDER_SCHEMA.iter().all(|rule| rule.name != key.as_str()))
    {
        return Err(ValidationError(format!("\"{unknown}\" is not allowed")));
    }

    if mode == SchemaMode::Update && object.is_empty() {
        return Err(ValidationError("\"value\" must have at least 1 key".into()));
    }

    Ok(object)
}

fn check_customer_name(field: &'static str, value: &Value) -> Result<(), String> {
    let Some(name) = value.as_str() else {
        return Err(format!("\"{field}\" must be a string"));
    };
    if name.is_empty() {
        return Err(format!("\"{field}\" is not allowed to be empty"));
    }
    if name.chars().count() < CUSTOMER_NAME_MIN_LEN {
        return Err(format!(
            "\"{field}\" length must be at least {CUSTOMER_NAME_MIN_LEN} characters long"
        ));
    }
    Ok(())
}

fn check_total_amount(field: &'static str, value: &Value) -> Result<(), String> {
    let Some(amount) = value.as_f64() else {
        return Err(format!("\"{field}\" must be a number"));
    };
    if amount <= 0.0 {
        return Err(format!("\"{field}\" must be a positive number"));
    }
    Ok(())
}

fn check_status(field: &'static str, value: &Value) -> Result<(), String> {
    let allowed = value
        .as_str()
        .is_some_and(|status| status.parse::<OrderStatus>().is_ok());

    if allowed {
        Ok(())
    } else {
        let names: Vec<&str> = OrderStatus::ALL.iter().map(OrderStatus::as_str).collect();
        Err(format!("\"{field}\" must be one of [{}]", names.join(", ")))
    }
}

fn check_items(field: &'static str, value: &Value) -> Result<(), String> {
    let Some(items) = value.as_array() else {
        return Err(format!("\"{field}\" must be an array"));
    };
    match items.iter().position(|item| !item.is_object()) {
        Some(index) => Err(format!("\"{field}[{index}]\" must be of type object")),
        None => Ok(()),
    }
}
