//! Parser for the scheduler's `key=value,key=value` node status field.

use std::collections::HashMap;

use crate::error::{Error, Result};

const JOBS_KEY: &str = "jobs";

/// Split a status string into its fields.
///
/// Values may contain `=` and spaces but not commas. Empty tokens are skipped;
/// a token without `=` is rejected. A repeated key keeps its first value.
pub fn parse(node: &str, status: &str) -> Result<HashMap<String, String>> {
    let mut fields = HashMap::new();
    for token in status.split(',') {
        if token.trim().is_empty() {
            continue;
        }
        let (key, value) = token.split_once('=').ok_or_else(|| Error::StatusToken {
            node: node.to_string(),
            token: token.to_string(),
        })?;
        fields
            .entry(key.trim().to_string())
            .or_insert_with(|| value.to_string());
    }
    Ok(fields)
}

/// Job IDs listed under `jobs`; empty when the key is absent or blank.
pub fn jobs(fields: &HashMap<String, String>) -> Vec<String> {
    match fields.get(JOBS_KEY) {
        Some(value) => value.split_whitespace().map(str::to_string).collect(),
        None => Vec::new(),
    }
}
