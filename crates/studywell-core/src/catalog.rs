//! Questionnaire configuration.
//!
//! The catalog is data, not code: the wizard engine is parameterized by an
//! ordered list of [`QuestionDefinition`]s and never inspects individual
//! ids. Swapping the catalog retargets the wizard to a different
//! questionnaire without touching the engine.

use serde::{Deserialize, Serialize};

use crate::profile::Answer;

/// Per-question predicate over a raw answer value.
///
/// Numeric bounds live here rather than in the validator, which stays
/// generic over whatever predicate a question carries.
pub type AnswerPredicate = fn(&Answer) -> bool;

/// The closed set of question kinds; validation and rendering branch on
/// this exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Number,
    SingleSelect,
    MultiSelect,
    FreeText,
}

/// A single question in the flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDefinition {
    /// Unique identifier, stable for the whole session.
    pub id: String,
    /// Display text; carried through untouched.
    pub prompt: String,
    pub kind: QuestionKind,
    /// Ordered choices, present for the select kinds.
    #[serde(default)]
    pub options: Vec<String>,
    /// Display metadata.
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    /// If true, an absent/blank answer fails validation.
    pub required: bool,
    /// Extra acceptance check applied to non-empty answers.
    #[serde(skip)]
    pub validate: Option<AnswerPredicate>,
}

/// Ordered, immutable question list.
///
/// Invariant: ids are unique and the order defines step order; neither
/// changes at runtime.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<QuestionDefinition>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<QuestionDefinition>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "question ids must be unique"
        );
        Self { questions }
    }

    /// The default nutrition-profile questionnaire.
    pub fn nutrition() -> Self {
        Self::new(nutrition_questions())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuestionDefinition> {
        self.questions.get(index)
    }

    pub fn by_id(&self, id: &str) -> Option<&QuestionDefinition> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionDefinition> {
        self.questions.iter()
    }
}

fn age_in_range(value: &Answer) -> bool {
    matches!(value, Answer::Number(n) if (16.0..=100.0).contains(n))
}

fn weight_in_range(value: &Answer) -> bool {
    matches!(value, Answer::Number(n) if (30.0..=300.0).contains(n))
}

fn height_in_range(value: &Answer) -> bool {
    matches!(value, Answer::Number(n) if (120.0..=250.0).contains(n))
}

/// The nutrition onboarding questions, in step order.
fn nutrition_questions() -> Vec<QuestionDefinition> {
    vec![
        QuestionDefinition {
            id: "age".to_string(),
            prompt: "What's your age?".to_string(),
            kind: QuestionKind::Number,
            options: Vec::new(),
            unit: Some("years".to_string()),
            placeholder: Some("e.g., 20".to_string()),
            required: true,
            validate: Some(age_in_range),
        },
        QuestionDefinition {
            id: "gender".to_string(),
            prompt: "Gender (for accurate calorie calculation)".to_string(),
            kind: QuestionKind::SingleSelect,
            options: vec![
                "Male".to_string(),
                "Female".to_string(),
                "Other".to_string(),
            ],
            unit: None,
            placeholder: None,
            required: true,
            validate: None,
        },
        QuestionDefinition {
            id: "weight".to_string(),
            prompt: "What's your current weight?".to_string(),
            kind: QuestionKind::Number,
            options: Vec::new(),
            unit: Some("kg".to_string()),
            placeholder: Some("e.g., 65".to_string()),
            required: true,
            validate: Some(weight_in_range),
        },
        QuestionDefinition {
            id: "height".to_string(),
            prompt: "What's your height?".to_string(),
            kind: QuestionKind::Number,
            options: Vec::new(),
            unit: Some("cm".to_string()),
            placeholder: Some("e.g., 170".to_string()),
            required: true,
            validate: Some(height_in_range),
        },
        QuestionDefinition {
            id: "activity_level".to_string(),
            prompt: "How active are you?".to_string(),
            kind: QuestionKind::SingleSelect,
            options: vec![
                "Sedentary (mostly sitting)".to_string(),
                "Lightly Active".to_string(),
                "Moderately Active".to_string(),
                "Very Active".to_string(),
                "Extremely Active".to_string(),
            ],
            unit: None,
            placeholder: None,
            required: true,
            validate: None,
        },
        QuestionDefinition {
            id: "goal".to_string(),
            prompt: "What's your main goal?".to_string(),
            kind: QuestionKind::SingleSelect,
            options: vec![
                "Better Energy for Studies".to_string(),
                "Maintain Current Weight".to_string(),
                "Gain Weight".to_string(),
                "Lose Weight".to_string(),
                "Build Muscle".to_string(),
                "General Wellness".to_string(),
            ],
            unit: None,
            placeholder: None,
            required: true,
            validate: None,
        },
        QuestionDefinition {
            id: "restrictions".to_string(),
            prompt: "Any dietary restrictions?".to_string(),
            kind: QuestionKind::MultiSelect,
            options: vec![
                "None".to_string(),
                "Vegetarian".to_string(),
                "Vegan".to_string(),
                "Gluten-Free".to_string(),
                "Dairy-Free".to_string(),
                "Nut Allergies".to_string(),
                "Halal".to_string(),
                "Kosher".to_string(),
                "Other".to_string(),
            ],
            unit: None,
            placeholder: None,
            required: false,
            validate: None,
        },
        QuestionDefinition {
            id: "study_habits".to_string(),
            prompt: "When do you usually study intensively?".to_string(),
            kind: QuestionKind::SingleSelect,
            options: vec![
                "Early Morning (5-9 AM)".to_string(),
                "Morning (9-12 PM)".to_string(),
                "Afternoon (12-5 PM)".to_string(),
                "Evening (5-9 PM)".to_string(),
                "Night (9 PM-1 AM)".to_string(),
                "Late Night (1-5 AM)".to_string(),
            ],
            unit: None,
            placeholder: None,
            required: true,
            validate: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nutrition_catalog_ids_are_unique() {
        let catalog = QuestionCatalog::nutrition();
        let mut ids: Vec<&str> = catalog.iter().map(|q| q.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn lookup_by_id_agrees_with_order() {
        let catalog = QuestionCatalog::nutrition();
        for (index, question) in catalog.iter().enumerate() {
            assert_eq!(catalog.index_of(&question.id), Some(index));
            assert_eq!(
                catalog.by_id(&question.id).map(|q| q.id.as_str()),
                Some(question.id.as_str())
            );
        }
    }

    #[test]
    fn select_questions_carry_options() {
        let catalog = QuestionCatalog::nutrition();
        for question in catalog.iter() {
            match question.kind {
                QuestionKind::SingleSelect | QuestionKind::MultiSelect => {
                    assert!(!question.options.is_empty(), "{} has no options", question.id)
                }
                QuestionKind::Number | QuestionKind::FreeText => {
                    assert!(question.options.is_empty(), "{} has stray options", question.id)
                }
            }
        }
    }

    #[test]
    fn numeric_bounds() {
        assert!(age_in_range(&Answer::Number(16.0)));
        assert!(age_in_range(&Answer::Number(100.0)));
        assert!(!age_in_range(&Answer::Number(15.0)));
        assert!(!age_in_range(&Answer::Number(101.0)));
        assert!(!age_in_range(&Answer::Text("20".to_string())));

        assert!(weight_in_range(&Answer::Number(30.0)));
        assert!(!weight_in_range(&Answer::Number(301.0)));
        assert!(height_in_range(&Answer::Number(250.0)));
        assert!(!height_in_range(&Answer::Number(119.0)));
    }
}
