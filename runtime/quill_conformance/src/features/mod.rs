//! The conformance scripts, one module per runtime feature.

pub mod interception;
pub mod unique_keys;

use crate::CheckError;

/// Name and entry point of every script, in run order.
pub const ALL: &[(&str, fn() -> Result<(), CheckError>)] = &[
    ("interception", interception::run),
    ("unique-keys", unique_keys::run),
];
