use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// A single attribute-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{attribute}: {message}")]
pub struct Violation {
    /// The record attribute that failed validation.
    pub attribute: &'static str,
    /// Human-readable reason, shown in the form.
    pub message: String,
}

impl Violation {
    /// Creates a violation for the given attribute.
    pub fn new(attribute: &'static str, message: impl Into<String>) -> Self {
        Self {
            attribute,
            message: message.into(),
        }
    }
}

/// Validation failure for a whole record.
///
/// Enumerates every violated attribute rather than stopping at the first, so
/// the form can mark all offending fields in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// Creates an error with a single violation.
    pub fn single(attribute: &'static str, message: impl Into<String>) -> Self {
        Self {
            violations: vec![Violation::new(attribute, message)],
        }
    }

    /// Turns a collected violation list into a result: `Ok` when empty.
    pub fn collect(violations: Vec<Violation>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self { violations })
        }
    }

    /// Returns `true` if any violation concerns the given attribute.
    pub fn concerns(&self, attribute: &str) -> bool {
        self.violations.iter().any(|v| v.attribute == attribute)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 \-]{5,19}$").expect("valid hardcoded regex"));

/// Checks that a required string attribute is non-empty.
pub fn validate_required(attribute: &'static str, value: &str) -> Option<Violation> {
    if value.is_empty() {
        Some(Violation::new(attribute, "must not be empty"))
    } else {
        None
    }
}

/// Validates a phone number: digits with optional leading `+`, spaces, and
/// dashes, 6 to 20 characters.
pub fn validate_phone(phone: &str) -> Option<Violation> {
    if PHONE_RE.is_match(phone) {
        None
    } else {
        Some(Violation::new("phone", format!("not a phone number: {phone}")))
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    // --- validate_required ---

    #[test]
    fn required_rejects_empty() {
        let violation = validate_required("name", "").unwrap();
        assert_eq!(violation.attribute, "name");
    }

    #[test]
    fn required_accepts_nonempty() {
        assert_eq!(validate_required("name", "Ada"), None);
    }

    // --- validate_phone ---

    #[test]
    fn phone_plain_digits() {
        assert_eq!(validate_phone("6135550195"), None);
    }

    #[test]
    fn phone_with_separators() {
        assert_eq!(validate_phone("613-555-0195"), None);
        assert_eq!(validate_phone("613 555 0195"), None);
    }

    #[test]
    fn phone_international_prefix() {
        assert_eq!(validate_phone("+1 613 555 0195"), None);
    }

    #[test]
    fn phone_too_short() {
        assert!(validate_phone("12345").is_some());
    }

    #[test]
    fn phone_letters_rejected() {
        assert!(validate_phone("CALL-ME-MAYBE").is_some());
    }

    #[test]
    fn phone_empty_rejected() {
        assert!(validate_phone("").is_some());
    }

    #[test]
    fn phone_plus_must_lead() {
        assert!(validate_phone("613+5550195").is_some());
    }

    #[quickcheck]
    fn phone_digit_runs_are_valid(digits: Vec<u8>) -> bool {
        if digits.len() < 6 || digits.len() > 20 {
            return true; // only lengths inside the accepted range are claimed valid
        }
        let phone: String = digits.iter().map(|d| char::from(b'0' + (d % 10))).collect();
        validate_phone(&phone).is_none()
    }

    // --- ValidationError ---

    #[test]
    fn collect_empty_is_ok() {
        assert_eq!(ValidationError::collect(vec![]), Ok(()));
    }

    #[test]
    fn collect_returns_all_violations() {
        let err = ValidationError::collect(vec![
            Violation::new("name", "must not be empty"),
            Violation::new("phone", "bad"),
        ])
        .unwrap_err();
        assert_eq!(err.violations.len(), 2);
        assert!(err.concerns("name"));
        assert!(err.concerns("phone"));
        assert!(!err.concerns("address"));
    }

    #[test]
    fn display_enumerates_attributes() {
        let err = ValidationError::collect(vec![
            Violation::new("name", "must not be empty"),
            Violation::new("phone", "bad"),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "name: must not be empty; phone: bad");
    }

    #[test]
    fn single_builds_one_violation() {
        let err = ValidationError::single("title", "must not be empty");
        assert_eq!(err.violations.len(), 1);
        assert!(err.concerns("title"));
    }
}
