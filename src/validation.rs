//! Parameter checks applied before a request leaves the client.
//!
//! The checks are shallow: a parameter set must be a key/value mapping,
//! must contain the keys an endpoint requires, and keys known to carry
//! numbers (ids, intervals, ports) must hold numeric values. Everything
//! else is passed through to the API untouched.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{JiffyError, Result};

/// Keys whose values must be numeric, matched case-insensitively.
pub const NUMERIC_KEYS: &[&str] = &[
    "boxid",
    "planid",
    "backupid",
    "dayid",
    "timeid",
    "ipid",
    "targetid",
    "checkid",
    "checkinterval",
    "reminderinterval",
    "retrytolerance",
    "contactgroups",
    "port",
];

/// Validate a parameter set against the keys an endpoint requires.
///
/// Fails if `params` is not a JSON object, if any key in `required` is
/// absent, or if a numeric key (see [`NUMERIC_KEYS`]) holds a value that
/// does not parse as a number. Required keys are matched exactly.
///
/// # Example
///
/// ```
/// use jiffybox::validate_params;
/// use serde_json::json;
///
/// let params = json!({"name": "web1", "planid": "10", "distribution": "ubuntu_24_04_64bit"});
/// assert!(validate_params(&params, &["name", "planid", "distribution"]).is_ok());
///
/// let params = json!({"name": "web1", "planid": "ten"});
/// assert!(validate_params(&params, &["name", "planid"]).is_err());
/// ```
///
/// # Errors
///
/// Returns [`JiffyError::Validation`] describing the first problem found.
pub fn validate_params<'a>(params: &'a Value, required: &[&str]) -> Result<&'a Map<String, Value>> {
    let map = params.as_object().ok_or_else(|| {
        JiffyError::Validation(format!(
            "parameters must be a key/value mapping, got {}",
            kind(params)
        ))
    })?;

    if let Some(missing) = required.iter().find(|key| !map.contains_key(**key)) {
        return Err(JiffyError::Validation(format!(
            "required parameter '{missing}' not set"
        )));
    }

    for (key, value) in map {
        if is_numeric_key(key) && !is_numeric(value) {
            return Err(JiffyError::Validation(format!(
                "parameter '{key}' must be a number, got {value}"
            )));
        }
    }

    Ok(map)
}

/// Check that a value, typically a resource id, parses as a number.
///
/// # Errors
///
/// Returns [`JiffyError::Validation`] if `value` is not numeric.
pub fn validate_number(value: &str) -> Result<()> {
    if value.trim().parse::<f64>().is_ok() {
        Ok(())
    } else {
        Err(JiffyError::Validation(format!("'{value}' is not a number")))
    }
}

/// Serialize caller parameters, validate them, and return the body to send.
///
/// Null values count as present for the required-key check but are not
/// sent.
pub(crate) fn prepare<P: Serialize + ?Sized>(
    params: &P,
    required: &[&str],
) -> Result<Map<String, Value>> {
    let value = serde_json::to_value(params)?;
    let map = validate_params(&value, required)?;

    Ok(map
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect())
}

fn is_numeric_key(key: &str) -> bool {
    NUMERIC_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key))
}

fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::String(s) => validate_number(s).is_ok(),
        _ => false,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
