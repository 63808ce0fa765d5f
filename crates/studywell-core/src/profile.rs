//! Answer values and the profile they accumulate into.
//!
//! A [`Profile`] is nothing more than the map from question id to
//! [`Answer`], built up by the wizard and finalized when the review phase is
//! reached. Typed getters expose the handful of fields the metrics
//! calculator consumes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single answer; the shape depends on the question kind.
///
/// Serializes untagged so a profile round-trips as a natural JSON object:
/// `{"age": 20, "gender": "Female", "restrictions": ["Vegan"]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// Numeric input (age, weight, height).
    Number(f64),
    /// A single-select choice or free text.
    Text(String),
    /// A multi-select choice set; order of taps is preserved.
    Selection(Vec<String>),
}

impl Answer {
    /// Whether the value counts as "not provided" for required-ness checks:
    /// blank text or an empty selection set. Numbers are never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Answer::Number(_) => false,
            Answer::Text(text) => text.trim().is_empty(),
            Answer::Selection(items) => items.is_empty(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Answer::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_selection(&self) -> Option<&[String]> {
        match self {
            Answer::Selection(items) => Some(items),
            _ => None,
        }
    }
}

/// The accumulated answers, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile {
    answers: BTreeMap<String, Answer>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: impl Into<String>, value: Answer) {
        self.answers.insert(id.into(), value);
    }

    pub fn get(&self, id: &str) -> Option<&Answer> {
        self.answers.get(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Answer> {
        self.answers.remove(id)
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Answer)> {
        self.answers.iter()
    }

    // ── Typed accessors for the metrics calculator ───────────────────

    pub fn age(&self) -> Option<f64> {
        self.number_field("age")
    }

    pub fn weight_kg(&self) -> Option<f64> {
        self.number_field("weight")
    }

    pub fn height_cm(&self) -> Option<f64> {
        self.number_field("height")
    }

    pub fn gender(&self) -> Option<&str> {
        self.text_field("gender")
    }

    pub fn activity_level(&self) -> Option<&str> {
        self.text_field("activity_level")
    }

    pub fn goal(&self) -> Option<&str> {
        self.text_field("goal")
    }

    pub fn study_habits(&self) -> Option<&str> {
        self.text_field("study_habits")
    }

    /// Dietary restrictions; empty slice if the question was skipped.
    pub fn restrictions(&self) -> &[String] {
        self.get("restrictions")
            .and_then(Answer::as_selection)
            .unwrap_or(&[])
    }

    /// A numeric field, treating absent, non-numeric, and non-positive
    /// values alike as missing so the calculator degrades to its defaults.
    fn number_field(&self, id: &str) -> Option<f64> {
        self.get(id)
            .and_then(Answer::as_number)
            .filter(|n| n.is_finite() && *n > 0.0)
    }

    fn text_field(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(Answer::as_text).filter(|s| !s.is_empty())
    }
}
