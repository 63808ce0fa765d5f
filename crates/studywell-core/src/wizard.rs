//! Profile wizard state machine.
//!
//! The wizard drives a sequential question flow with forward/backward
//! navigation and a terminal review phase. It is synchronous and has a
//! single writer: every command completes atomically before the next is
//! accepted, so there is no locking discipline and no suspension point.
//!
//! ## State Transitions
//!
//! ```text
//! Answering --next (last step, valid)--> Review --reset--> Answering
//! ```
//!
//! Commands return `Option<Event>`; `None` means the command was a no-op in
//! the current phase. Validation only ever inspects the *current* step's
//! answer -- see `next_does_not_revalidate_earlier_steps` below for the
//! pinned-down consequence of that rule.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{QuestionCatalog, QuestionDefinition, QuestionKind};
use crate::events::Event;
use crate::metrics::DerivedMetrics;
use crate::multiselect;
use crate::profile::{Answer, Profile};
use crate::validator;

/// Which half of the flow the wizard is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardPhase {
    Answering,
    Review,
}

/// The question-flow engine.
///
/// Owns the catalog it was created with plus all mutable session state.
/// Wizard state lives and dies with the owning process; it is never
/// persisted.
#[derive(Debug, Clone)]
pub struct ProfileWizard {
    /// Unique session identifier.
    id: String,
    started_at: DateTime<Utc>,
    catalog: QuestionCatalog,
    step_index: usize,
    answers: Profile,
    errors: HashMap<String, String>,
    phase: WizardPhase,
}

impl ProfileWizard {
    /// Create a wizard over an arbitrary catalog.
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            catalog,
            step_index: 0,
            answers: Profile::new(),
            errors: HashMap::new(),
            phase: WizardPhase::Answering,
        }
    }

    /// Create a wizard over the default nutrition questionnaire.
    pub fn nutrition() -> Self {
        Self::new(QuestionCatalog::nutrition())
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// The question at the current step; `None` once in review.
    pub fn current_question(&self) -> Option<&QuestionDefinition> {
        match self.phase {
            WizardPhase::Answering => self.catalog.get(self.step_index),
            WizardPhase::Review => None,
        }
    }

    pub fn answers(&self) -> &Profile {
        &self.answers
    }

    pub fn answer(&self, id: &str) -> Option<&Answer> {
        self.answers.get(id)
    }

    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(String::as_str)
    }

    /// Whether a "next" affordance should be enabled: true iff the current
    /// question has no recorded error. Read-only; does not validate.
    pub fn can_advance(&self) -> bool {
        self.current_question()
            .map_or(false, |q| !self.errors.contains_key(&q.id))
    }

    /// Percentage of steps reached, recomputed on every read.
    pub fn progress_pct(&self) -> f64 {
        if self.catalog.is_empty() {
            return 0.0;
        }
        (self.step_index as f64 + 1.0) / self.catalog.len() as f64 * 100.0
    }

    /// Derived targets for the current answers; total, so it is usable as a
    /// live preview before the profile is complete.
    pub fn metrics(&self) -> DerivedMetrics {
        DerivedMetrics::from_profile(&self.answers)
    }

    /// The finalized profile, available once the review phase is reached.
    pub fn finished_profile(&self) -> Option<&Profile> {
        match self.phase {
            WizardPhase::Review => Some(&self.answers),
            WizardPhase::Answering => None,
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        let question = self.current_question();
        Event::StateSnapshot {
            phase: self.phase,
            step_index: self.step_index,
            total_steps: self.catalog.len(),
            question_id: question.map(|q| q.id.clone()),
            prompt: question.map(|q| q.prompt.clone()),
            progress_pct: self.progress_pct(),
            can_advance: self.can_advance(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Record an answer. Allowed in any phase; clears any recorded error
    /// for the field the moment its value changes.
    pub fn set_answer(&mut self, id: impl Into<String>, value: Answer) {
        let id = id.into();
        self.errors.remove(&id);
        self.answers.set(id, value);
    }

    /// Toggle an option of the current multi-select question, routing
    /// through the exclusivity reducer. No-op when the current question is
    /// not a multi-select.
    pub fn toggle_option(&mut self, option: &str) {
        let Some(question) = self.current_question() else {
            return;
        };
        if question.kind != QuestionKind::MultiSelect {
            return;
        }
        let id = question.id.clone();

        let current: Vec<String> = self
            .answers
            .get(&id)
            .and_then(Answer::as_selection)
            .map(<[String]>::to_vec)
            .unwrap_or_default();
        let updated = multiselect::toggle(&current, option);
        self.set_answer(id, Answer::Selection(updated));
    }

    /// Validate the current step and advance on success.
    ///
    /// On failure the error is recorded under the question's id and the
    /// step does not move. A successful `next` on the last step flips the
    /// wizard into review. Only the current step's answer is ever
    /// validated here.
    pub fn next(&mut self) -> Option<Event> {
        if self.phase != WizardPhase::Answering {
            return None;
        }
        let (question_id, validation) = {
            let question = self.catalog.get(self.step_index)?;
            let value = self.answers.get(&question.id);
            (question.id.clone(), validator::validate(question, value))
        };

        if !validation.valid {
            let message = validation
                .message
                .unwrap_or_else(|| "Invalid value".to_string());
            self.errors.insert(question_id.clone(), message.clone());
            return Some(Event::ValidationFailed {
                question_id,
                message,
                at: Utc::now(),
            });
        }

        if self.step_index + 1 >= self.catalog.len() {
            self.phase = WizardPhase::Review;
            Some(Event::ReviewEntered { at: Utc::now() })
        } else {
            self.step_index += 1;
            Some(Event::StepAdvanced {
                step_index: self.step_index,
                question_id: self
                    .catalog
                    .get(self.step_index)
                    .map(|q| q.id.clone())
                    .unwrap_or_default(),
                at: Utc::now(),
            })
        }
    }

    /// Step back one question. No-op at step 0 or in review; answers are
    /// never cleared by navigation.
    pub fn previous(&mut self) -> Option<Event> {
        if self.phase != WizardPhase::Answering || self.step_index == 0 {
            return None;
        }
        self.step_index -= 1;
        Some(Event::StepBack {
            step_index: self.step_index,
            question_id: self
                .catalog
                .get(self.step_index)
                .map(|q| q.id.clone())
                .unwrap_or_default(),
            at: Utc::now(),
        })
    }

    /// Discard all session state and return to the first step.
    pub fn reset(&mut self) -> Event {
        self.step_index = 0;
        self.answers.clear();
        self.errors.clear();
        self.phase = WizardPhase::Answering;
        Event::WizardReset { at: Utc::now() }
    }
}
