//! Habit tracker CRUD client.

use serde::{Deserialize, Serialize};

use super::Transport;
use crate::error::ApiError;
use crate::storage::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HabitFrequency {
    #[default]
    Daily,
    Weekly,
}

impl std::fmt::Display for HabitFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            HabitFrequency::Daily => "Daily",
            HabitFrequency::Weekly => "Weekly",
        };
        f.write_str(label)
    }
}

impl std::str::FromStr for HabitFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Daily" | "daily" => Ok(HabitFrequency::Daily),
            "Weekly" | "weekly" => Ok(HabitFrequency::Weekly),
            other => Err(format!("unknown frequency: {other}")),
        }
    }
}

/// A tracked habit record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Backend-assigned id; absent until created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub frequency: HabitFrequency,
    /// Completion percentage, 0-100.
    #[serde(default)]
    pub progress: u32,
}

/// Client for the habits service.
pub struct HabitsClient {
    transport: Transport,
}

impl HabitsClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            transport: Transport::new(base_url)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(&config.api.habits_url)
    }

    pub fn list(&self) -> Result<Vec<Habit>, ApiError> {
        self.transport.get_json("/habits")
    }

    pub fn add(&self, habit: &Habit) -> Result<(), ApiError> {
        self.transport
            .send_json(reqwest::Method::POST, "/habits", habit)
    }

    pub fn update(&self, id: i64, habit: &Habit) -> Result<(), ApiError> {
        self.transport
            .send_json(reqwest::Method::PUT, &format!("/habits/{id}"), habit)
    }

    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.transport.delete(&format!("/habits/{id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn habit_defaults_on_deserialize() {
        let habit: Habit = serde_json::from_str(r#"{"id": 3, "name": "Reading"}"#).unwrap();
        assert_eq!(habit.id, Some(3));
        assert_eq!(habit.frequency, HabitFrequency::Daily);
        assert_eq!(habit.progress, 0);
    }
}
