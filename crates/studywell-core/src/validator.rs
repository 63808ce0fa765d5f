//! Per-question answer validation.
//!
//! The validator gates every `next` transition in the wizard. It is pure
//! and generic over whatever predicate a question carries; it knows nothing
//! about step order or engine state.

use serde::{Deserialize, Serialize};

use crate::catalog::QuestionDefinition;
use crate::profile::Answer;

/// Outcome of validating one answer against one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
    /// Present exactly when `valid` is false.
    pub message: Option<String>,
}

impl Validation {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Validate `value` against `question`.
///
/// Rules, in order: required-ness first (absent, blank, or empty selection
/// fails), then the question's own predicate for non-empty values.
pub fn validate(question: &QuestionDefinition, value: Option<&Answer>) -> Validation {
    let empty = value.map_or(true, Answer::is_empty);

    if question.required && empty {
        return Validation::fail("This field is required");
    }

    if let (Some(predicate), Some(value)) = (question.validate, value) {
        if !empty && !predicate(value) {
            return Validation::fail(format!("Please enter a valid {}", question.id));
        }
    }

    Validation::ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{QuestionCatalog, QuestionKind};

    fn question(id: &str, kind: QuestionKind, required: bool) -> QuestionDefinition {
        QuestionDefinition {
            id: id.to_string(),
            prompt: String::new(),
            kind,
            options: Vec::new(),
            unit: None,
            placeholder: None,
            required,
            validate: None,
        }
    }

    #[test]
    fn required_rejects_absent_answer() {
        let q = question("age", QuestionKind::Number, true);
        let result = validate(&q, None);
        assert!(!result.valid);
        assert_eq!(result.message.as_deref(), Some("This field is required"));
    }

    #[test]
    fn required_rejects_blank_text_and_empty_selection() {
        let q = question("goal", QuestionKind::FreeText, true);
        assert!(!validate(&q, Some(&Answer::Text("  ".to_string()))).valid);

        let q = question("restrictions", QuestionKind::MultiSelect, true);
        assert!(!validate(&q, Some(&Answer::Selection(vec![]))).valid);
    }

    #[test]
    fn optional_accepts_absent_answer() {
        let q = question("notes", QuestionKind::FreeText, false);
        assert!(validate(&q, None).valid);
        assert!(validate(&q, Some(&Answer::Text(String::new()))).valid);
    }

    #[test]
    fn predicate_failure_names_the_field() {
        let catalog = QuestionCatalog::nutrition();
        let age = catalog.by_id("age").unwrap();

        let result = validate(age, Some(&Answer::Number(12.0)));
        assert!(!result.valid);
        assert_eq!(result.message.as_deref(), Some("Please enter a valid age"));

        assert!(validate(age, Some(&Answer::Number(20.0))).valid);
    }

    #[test]
    fn predicate_not_applied_to_empty_optional_value() {
        let mut q = question("age", QuestionKind::Number, false);
        q.validate = Some(|_| false);
        // Empty never reaches the predicate.
        assert!(validate(&q, Some(&Answer::Text(String::new()))).valid);
        // Non-empty does.
        assert!(!validate(&q, Some(&Answer::Number(20.0))).valid);
    }
}
