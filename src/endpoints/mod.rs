//! JiffyBox endpoint methods.
//!
//! Each resource family adds an `impl JiffyClient` block. Every method
//! validates its input, delegates to exactly one request helper and hands
//! back the provider's JSON unchanged.

mod backups;
mod boxes;
mod catalog;
mod contact_groups;
mod ips;
mod monitoring;

use std::fmt::Display;

use crate::error::{JiffyError, Result};
use crate::validation::validate_number;

/// Percent-encode a value for use as a single path segment.
///
/// Empty values and the dot segments `.` and `..` are rejected; URL
/// resolution would drop or collapse them and address another resource.
fn segment(value: impl Display) -> Result<String> {
    let value = value.to_string();
    if value.trim().is_empty() || value == "." || value == ".." {
        return Err(JiffyError::Validation(format!(
            "'{value}' is not a valid path segment"
        )));
    }
    Ok(urlencoding::encode(&value).into_owned())
}

/// Check that an identifier is numeric and encode it as a path segment.
fn numeric_id(id: impl Display) -> Result<String> {
    let id = id.to_string();
    let id = id.trim();
    validate_number(id)?;
    segment(id)
}
