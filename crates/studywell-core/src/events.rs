use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wizard::WizardPhase;

/// Every wizard state change produces an Event.
/// The presentation layer renders these; the CLI prints them as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A successful `next` moved the wizard to a later step.
    StepAdvanced {
        step_index: usize,
        question_id: String,
        at: DateTime<Utc>,
    },
    /// `previous` moved the wizard to an earlier step.
    StepBack {
        step_index: usize,
        question_id: String,
        at: DateTime<Utc>,
    },
    /// `next` was rejected by the current question's validation.
    ValidationFailed {
        question_id: String,
        message: String,
        at: DateTime<Utc>,
    },
    /// The last step's `next` succeeded; the profile is finalized.
    ReviewEntered {
        at: DateTime<Utc>,
    },
    WizardReset {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: WizardPhase,
        step_index: usize,
        total_steps: usize,
        question_id: Option<String>,
        prompt: Option<String>,
        progress_pct: f64,
        can_advance: bool,
        at: DateTime<Utc>,
    },
}
