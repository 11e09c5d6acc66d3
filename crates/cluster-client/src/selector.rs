//! Label selector matching for the fake store
//!
//! Supports the equality-based selector forms Kubernetes accepts:
//! `k=v`, `k==v`, `k!=v`, bare `k` (exists) and `!k` (not exists), joined
//! with commas. An empty selector matches everything. Set-based terms
//! (`in`, `notin`) are rejected as unsupported.

use std::collections::BTreeMap;

use crate::error::ClientError;

/// One parsed selector term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Requirement {
    Eq(String, String),
    NotEq(String, String),
    Exists(String),
    NotExists(String),
}

/// Parses an equality-based label selector string.
pub(crate) fn parse(selector: &str) -> Result<Vec<Requirement>, ClientError> {
    let selector = selector.trim();
    if selector.is_empty() {
        return Ok(Vec::new());
    }

    let mut requirements = Vec::new();

    for term in selector.split(',') {
        let term = term.trim();
        if term.is_empty() {
            continue;
        }

        if term.contains(char::is_whitespace) {
            return Err(ClientError::UnsupportedSelector(format!(
                "set-based selector term {:?} is not supported",
                term
            )));
        }

        if let Some((key, value)) = term.split_once("!=") {
            requirements.push(Requirement::NotEq(key.to_string(), value.to_string()));
        } else if let Some((key, value)) = term.split_once("==") {
            requirements.push(Requirement::Eq(key.to_string(), value.to_string()));
        } else if let Some((key, value)) = term.split_once('=') {
            requirements.push(Requirement::Eq(key.to_string(), value.to_string()));
        } else if let Some(key) = term.strip_prefix('!') {
            requirements.push(Requirement::NotExists(key.to_string()));
        } else {
            requirements.push(Requirement::Exists(term.to_string()));
        }
    }

    Ok(requirements)
}

/// Whether a label set satisfies every requirement.
pub(crate) fn matches(requirements: &[Requirement], labels: &BTreeMap<String, String>) -> bool {
    requirements.iter().all(|requirement| match requirement {
        Requirement::Eq(key, value) => labels.get(key) == Some(value),
        Requirement::NotEq(key, value) => labels.get(key) != Some(value),
        Requirement::Exists(key) => labels.contains_key(key),
        Requirement::NotExists(key) => !labels.contains_key(key),
    })
}
