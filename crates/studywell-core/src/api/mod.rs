//! Typed clients for the remote wellness backend.
//!
//! The backend is a pair of small CRUD services (subjects and habits on
//! separate ports) plus a profile-submission endpoint. The core only ever
//! depends on success/failure and the documented record shapes, never on
//! transport details -- base URLs come from [`crate::storage::Config`].

pub mod habits;
pub mod profile;
pub mod subjects;

pub use habits::{Habit, HabitFrequency, HabitsClient};
pub use profile::{ProfileClient, ProfileSubmission};
pub use subjects::{Subject, SubjectDifficulty, SubjectsClient};

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::ApiError;

/// Shared synchronous transport over async reqwest.
///
/// Each client owns a current-thread runtime so callers stay free of any
/// async plumbing; the wizard core itself never touches this.
pub(crate) struct Transport {
    http: reqwest::Client,
    rt: tokio::runtime::Runtime,
    base: Url,
}

impl Transport {
    pub(crate) fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ApiError::Runtime)?;
        Ok(Self {
            http: reqwest::Client::new(),
            rt,
            base,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base.join(path).map_err(|e| ApiError::InvalidBaseUrl {
            url: format!("{}{}", self.base, path),
            message: e.to_string(),
        })
    }

    /// GET `path` and decode the JSON body.
    pub(crate) fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let response = self
            .rt
            .block_on(self.http.get(url.clone()).send())
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        Self::check_status(&url, response.status())?;
        self.rt
            .block_on(response.json())
            .map_err(|source| ApiError::Decode {
                url: url.to_string(),
                source,
            })
    }

    /// Send `body` with `method` to `path`; only the status is inspected.
    pub(crate) fn send_json<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(path)?;
        let response = self
            .rt
            .block_on(self.http.request(method, url.clone()).json(body).send())
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        Self::check_status(&url, response.status())
    }

    /// DELETE `path`; only the status is inspected.
    pub(crate) fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.endpoint(path)?;
        let response = self
            .rt
            .block_on(self.http.delete(url.clone()).send())
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        Self::check_status(&url, response.status())
    }

    fn check_status(url: &Url, status: StatusCode) -> Result<(), ApiError> {
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            })
        }
    }
}
