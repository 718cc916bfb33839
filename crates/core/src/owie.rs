//! Validation for user-reported owie events.

use crate::error::CoreError;

/// Maximum length for a reported body part name (characters).
pub const MAX_BODY_PART_LENGTH: usize = 100;

/// Validate a body part name taken from the request path.
///
/// The path router already rejects empty segments, but the check is kept
/// here so the rule holds for any future caller.
pub fn validate_body_part(body_part: &str) -> Result<(), CoreError> {
    if body_part.trim().is_empty() {
        return Err(CoreError::Validation(
            "Body part must not be empty".to_string(),
        ));
    }
    if body_part.chars().count() > MAX_BODY_PART_LENGTH {
        return Err(CoreError::Validation(format!(
            "Body part must be at most {MAX_BODY_PART_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_body_parts() {
        assert!(validate_body_part("knee").is_ok());
        assert!(validate_body_part("left elbow").is_ok());
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(validate_body_part("").is_err());
        assert!(validate_body_part("   ").is_err());
    }

    #[test]
    fn rejects_overlong_names() {
        let long = "a".repeat(MAX_BODY_PART_LENGTH + 1);
        assert!(validate_body_part(&long).is_err());

        let at_limit = "a".repeat(MAX_BODY_PART_LENGTH);
        assert!(validate_body_part(&at_limit).is_ok());
    }
}
