/// Input validation for post creation payloads
///
/// Operates on the raw decoded JSON object so that type errors can be
/// reported per field instead of failing deserialization as a whole.
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Fields every new post must carry, in reporting order.
pub const REQUIRED_POST_FIELDS: [&str; 3] = ["name", "username", "body"];

/// Field name -> human readable problem
pub type FieldErrors = BTreeMap<String, String>;

/// Outcome of validating a creation payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub missing_fields: Vec<String>,
    pub field_errors: FieldErrors,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.missing_fields.is_empty() && self.field_errors.is_empty()
    }

    /// "Validation failed", plus the missing field list when there is one.
    pub fn summary(&self) -> String {
        let mut message = String::from("Validation failed");
        if !self.missing_fields.is_empty() {
            message.push_str(". Missing required fields: ");
            message.push_str(&self.missing_fields.join(", "));
        }
        message
    }
}

/// Validate a post creation payload.
///
/// Absent keys and explicit `null` values are both reported as missing.
/// Present values must be strings that are non-empty once trimmed; the type
/// check wins over the emptiness check. Unknown keys are ignored.
pub fn validate_post_data(data: &Map<String, Value>) -> ValidationResult {
    let mut result = ValidationResult::default();

    for field in REQUIRED_POST_FIELDS {
        match data.get(field) {
            None | Some(Value::Null) => result.missing_fields.push(field.to_string()),
            Some(Value::String(s)) if s.trim().is_empty() => {
                result
                    .field_errors
                    .insert(field.to_string(), format!("{} cannot be empty", label(field)));
            }
            Some(Value::String(_)) => {}
            Some(_) => {
                result
                    .field_errors
                    .insert(field.to_string(), format!("{} must be a string", label(field)));
            }
        }
    }

    result
}

fn label(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
