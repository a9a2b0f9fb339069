//! Request validation helpers shared by all DTOs

use std::borrow::Cow;
use std::collections::BTreeMap;

use validator::{Validate, ValidationError, ValidationErrors};

/// Field name → violation message
pub type FieldErrors = BTreeMap<String, String>;

/// Code used by [`not_blank`]; its message wins when a field breaks several rules.
pub const BLANK_CODE: &str = "blank";

/// Run the declared constraints of `value` and flatten any violations into
/// one message per field.
pub fn validate_request<T: Validate>(value: &T) -> Result<(), FieldErrors> {
    value.validate().map_err(|errors| field_errors(&errors))
}

/// One message per field. A blank-field message takes precedence over the rest.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            let chosen = errs
                .iter()
                .find(|e| e.code == BLANK_CODE)
                .or_else(|| errs.first())?;
            let message = chosen
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("invalid value ({})", chosen.code));
            Some((field.to_string(), message))
        })
        .collect()
}

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(BLANK_CODE));
    }
    Ok(())
}

/// Build a validation error carrying its own message.
pub fn violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(
            custom(function = "not_blank", message = "title cannot be blank"),
            length(min = 3, message = "title is too short")
        )]
        title: String,
        #[validate(length(max = 5, message = "tag is too long"))]
        tag: String,
    }

    #[test]
    fn valid_value_passes() {
        let p = Probe {
            title: "Rust".into(),
            tag: "lang".into(),
        };
        assert!(validate_request(&p).is_ok());
    }

    #[test]
    fn blank_message_takes_precedence() {
        let p = Probe {
            title: "".into(),
            tag: "ok".into(),
        };
        let errors = validate_request(&p).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["title"], "title cannot be blank");
    }

    #[test]
    fn every_failing_field_is_reported() {
        let p = Probe {
            title: "ab".into(),
            tag: "too-long".into(),
        };
        let errors = validate_request(&p).unwrap_err();
        assert_eq!(errors["title"], "title is too short");
        assert_eq!(errors["tag"], "tag is too long");
    }

    #[test]
    fn whitespace_is_blank() {
        assert!(not_blank("   ").is_err());
        assert!(not_blank(" x ").is_ok());
    }
}
