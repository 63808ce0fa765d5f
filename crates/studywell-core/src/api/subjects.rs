//! Academic subjects CRUD client.

use serde::{Deserialize, Serialize};

use super::Transport;
use crate::error::ApiError;
use crate::storage::Config;

/// How demanding a subject is; drives the study-planner UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SubjectDifficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for SubjectDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SubjectDifficulty::Easy => "Easy",
            SubjectDifficulty::Medium => "Medium",
            SubjectDifficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

impl std::str::FromStr for SubjectDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" | "easy" => Ok(SubjectDifficulty::Easy),
            "Medium" | "medium" => Ok(SubjectDifficulty::Medium),
            "Hard" | "hard" => Ok(SubjectDifficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// An academic subject record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Backend-assigned id; absent until created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub difficulty: SubjectDifficulty,
}

/// Client for the subjects service.
pub struct SubjectsClient {
    transport: Transport,
}

impl SubjectsClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            transport: Transport::new(base_url)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(&config.api.subjects_url)
    }

    pub fn list(&self) -> Result<Vec<Subject>, ApiError> {
        self.transport.get_json("/subjects")
    }

    pub fn add(&self, subject: &Subject) -> Result<(), ApiError> {
        self.transport
            .send_json(reqwest::Method::POST, "/subjects", subject)
    }

    pub fn update(&self, id: i64, subject: &Subject) -> Result<(), ApiError> {
        self.transport
            .send_json(reqwest::Method::PUT, &format!("/subjects/{id}"), subject)
    }

    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.transport.delete(&format!("/subjects/{id}"))
    }
}
