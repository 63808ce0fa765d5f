//! # Studywell Core Library
//!
//! This library provides the core business logic for the Studywell student
//! wellness tracker. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary, with any GUI being
//! a thin presentation layer over the same core library.
//!
//! ## Architecture
//!
//! - **Profile Wizard**: A synchronous state machine that drives the
//!   nutrition-profile questionnaire step by step. The caller feeds answers
//!   in and receives [`Event`]s describing each transition.
//! - **Metrics**: Pure functions turning a (possibly partial) profile into
//!   daily calorie and hydration targets.
//! - **API clients**: Thin typed wrappers over the remote subjects/habits
//!   backend, including the final profile submission.
//! - **Storage**: TOML-based configuration under `~/.config/studywell/`.
//!
//! ## Key Components
//!
//! - [`ProfileWizard`]: Question-flow state machine
//! - [`QuestionCatalog`]: Ordered questionnaire configuration (data, not code)
//! - [`DerivedMetrics`]: BMR / calorie / water targets
//! - [`Config`]: Application configuration management

pub mod api;
pub mod catalog;
pub mod error;
pub mod events;
pub mod metrics;
pub mod multiselect;
pub mod profile;
pub mod storage;
pub mod validator;
pub mod wizard;

pub use catalog::{QuestionCatalog, QuestionDefinition, QuestionKind};
pub use error::{ApiError, ConfigError, CoreError};
pub use events::Event;
pub use metrics::DerivedMetrics;
pub use profile::{Answer, Profile};
pub use storage::Config;
pub use validator::Validation;
pub use wizard::{ProfileWizard, WizardPhase};
