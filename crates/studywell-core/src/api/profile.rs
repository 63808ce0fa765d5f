//! Finished-profile submission.
//!
//! The wizard's contract ends at producing a complete [`Profile`]; this
//! client performs the hand-off. The payload is the profile plus the two
//! numeric daily goals, and only success/failure comes back.

use serde::{Deserialize, Serialize};

use super::Transport;
use crate::error::ApiError;
use crate::metrics::DerivedMetrics;
use crate::profile::Profile;
use crate::storage::Config;

/// Payload for the submit-profile operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    pub profile: Profile,
    pub calorie_goal: i64,
    pub water_goal_ml: i64,
}

impl ProfileSubmission {
    pub fn new(profile: Profile, metrics: &DerivedMetrics) -> Self {
        Self {
            profile,
            calorie_goal: metrics.calorie_target,
            water_goal_ml: metrics.water_target_ml,
        }
    }
}

/// Client for the profile endpoint on the subjects service.
pub struct ProfileClient {
    transport: Transport,
}

impl ProfileClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            transport: Transport::new(base_url)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(&config.api.subjects_url)
    }

    pub fn submit(&self, submission: &ProfileSubmission) -> Result<(), ApiError> {
        self.transport
            .send_json(reqwest::Method::POST, "/profile", submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Answer;

    #[test]
    fn submission_carries_both_goals() {
        let mut profile = Profile::new();
        profile.set("age", Answer::Number(20.0));
        profile.set("weight", Answer::Number(65.0));
        profile.set("height", Answer::Number(170.0));
        profile.set("gender", Answer::Text("Female".to_string()));
        profile.set(
            "activity_level",
            Answer::Text("Moderately Active".to_string()),
        );

        let metrics = DerivedMetrics::from_profile(&profile);
        let submission = ProfileSubmission::new(profile, &metrics);

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["calorie_goal"], 2250);
        assert_eq!(json["water_goal_ml"], 2275);
        assert_eq!(json["profile"]["age"], serde_json::json!(20.0));
    }
}
