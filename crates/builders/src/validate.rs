//! Argument validation helpers for `with_*` setters
//!
//! Each helper returns the accepted value on success or the exact message
//! the builder records on failure, so setters stay one expression.

/// Accepts a non-empty string, owned.
///
/// `what` names the field in the failure message, prefixed with the kind
/// label (for example "backup storage location").
pub(crate) fn nonempty(value: &str, what: &str) -> Result<String, String> {
    if value.is_empty() {
        Err(format!("{} cannot be an empty string", what))
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonempty_accepts_value() {
        assert_eq!(nonempty("default", "backup storage location"), Ok("default".to_string()));
    }

    #[test]
    fn test_nonempty_message() {
        assert_eq!(
            nonempty("", "backup storage location"),
            Err("backup storage location cannot be an empty string".to_string())
        );
    }
}
