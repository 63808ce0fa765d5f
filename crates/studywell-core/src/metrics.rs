//! Derived nutrition targets.
//!
//! All functions here are total: a partially filled profile degrades to
//! documented defaults instead of erroring, so the review screen can show a
//! live preview at any point in the flow.

use serde::{Deserialize, Serialize};

use crate::profile::Profile;

/// BMR substituted when age, weight, or height is missing.
pub const DEFAULT_BMR: f64 = 2000.0;
/// Water target substituted when weight is missing (ml).
pub const DEFAULT_WATER_ML: i64 = 2500;

/// The numeric targets computed from a finished (or partial) profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub basal_metabolic_rate: f64,
    pub calorie_target: i64,
    pub water_target_ml: i64,
}

impl DerivedMetrics {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            basal_metabolic_rate: basal_metabolic_rate(profile),
            calorie_target: calorie_target(profile),
            water_target_ml: water_target_ml(profile),
        }
    }
}

/// Mifflin-St Jeor basal metabolic rate.
///
/// Falls back to [`DEFAULT_BMR`] when any of age/weight/height is missing.
/// `Other` takes the non-Female branch.
pub fn basal_metabolic_rate(profile: &Profile) -> f64 {
    let (Some(age), Some(weight), Some(height)) =
        (profile.age(), profile.weight_kg(), profile.height_cm())
    else {
        return DEFAULT_BMR;
    };

    let base = 10.0 * weight + 6.25 * height - 5.0 * age;
    if profile.gender() == Some("Female") {
        base - 161.0
    } else {
        base + 5.0
    }
}

/// Activity multiplier for the TDEE-style calorie target.
///
/// Keyed by the catalog's activity labels; anything unrecognized (or a
/// missing answer) is treated as sedentary.
pub fn activity_multiplier(level: Option<&str>) -> f64 {
    match level {
        Some("Sedentary (mostly sitting)") => 1.2,
        Some("Lightly Active") => 1.375,
        Some("Moderately Active") => 1.55,
        Some("Very Active") => 1.725,
        Some("Extremely Active") => 1.9,
        _ => 1.2,
    }
}

/// Daily calorie target: BMR scaled by the activity multiplier.
pub fn calorie_target(profile: &Profile) -> i64 {
    let bmr = basal_metabolic_rate(profile);
    (bmr * activity_multiplier(profile.activity_level())).round() as i64
}

/// Daily water target in millilitres: 35 ml per kg of body weight.
pub fn water_target_ml(profile: &Profile) -> i64 {
    match profile.weight_kg() {
        Some(weight) => (weight * 35.0).round() as i64,
        None => DEFAULT_WATER_ML,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Answer;

    fn profile(entries: &[(&str, Answer)]) -> Profile {
        let mut profile = Profile::new();
        for (id, value) in entries {
            profile.set(*id, value.clone());
        }
        profile
    }

    fn reference_profile() -> Profile {
        profile(&[
            ("age", Answer::Number(20.0)),
            ("weight", Answer::Number(65.0)),
            ("height", Answer::Number(170.0)),
            ("gender", Answer::Text("Female".to_string())),
            ("activity_level", Answer::Text("Moderately Active".to_string())),
        ])
    }

    #[test]
    fn bmr_female() {
        // 10*65 + 6.25*170 - 5*20 - 161
        assert_eq!(basal_metabolic_rate(&reference_profile()), 1451.5);
    }

    #[test]
    fn bmr_male_and_other_take_the_same_branch() {
        let male = profile(&[
            ("age", Answer::Number(30.0)),
            ("weight", Answer::Number(80.0)),
            ("height", Answer::Number(180.0)),
            ("gender", Answer::Text("Male".to_string())),
        ]);
        let other = profile(&[
            ("age", Answer::Number(30.0)),
            ("weight", Answer::Number(80.0)),
            ("height", Answer::Number(180.0)),
            ("gender", Answer::Text("Other".to_string())),
        ]);
        // 10*80 + 6.25*180 - 5*30 + 5
        assert_eq!(basal_metabolic_rate(&male), 1780.0);
        assert_eq!(basal_metabolic_rate(&other), 1780.0);
    }

    #[test]
    fn bmr_defaults_when_inputs_missing() {
        assert_eq!(basal_metabolic_rate(&Profile::new()), DEFAULT_BMR);

        let partial = profile(&[("age", Answer::Number(20.0))]);
        assert_eq!(basal_metabolic_rate(&partial), DEFAULT_BMR);
    }

    #[test]
    fn calorie_target_rounds_scaled_bmr() {
        // round(1451.5 * 1.55)
        assert_eq!(calorie_target(&reference_profile()), 2250);
    }

    #[test]
    fn calorie_target_defaults_to_sedentary() {
        // round(2000 * 1.2) on an empty profile
        assert_eq!(calorie_target(&Profile::new()), 2400);

        let unknown = profile(&[("activity_level", Answer::Text("Couch Potato".to_string()))]);
        assert_eq!(calorie_target(&unknown), 2400);
    }

    #[test]
    fn water_target() {
        assert_eq!(water_target_ml(&reference_profile()), 2275);
        assert_eq!(water_target_ml(&Profile::new()), DEFAULT_WATER_ML);
    }

    #[test]
    fn multiplier_table() {
        assert_eq!(activity_multiplier(Some("Sedentary (mostly sitting)")), 1.2);
        assert_eq!(activity_multiplier(Some("Lightly Active")), 1.375);
        assert_eq!(activity_multiplier(Some("Moderately Active")), 1.55);
        assert_eq!(activity_multiplier(Some("Very Active")), 1.725);
        assert_eq!(activity_multiplier(Some("Extremely Active")), 1.9);
        assert_eq!(activity_multiplier(None), 1.2);
    }

    #[test]
    fn metrics_bundle_matches_parts() {
        let p = reference_profile();
        let metrics = DerivedMetrics::from_profile(&p);
        assert_eq!(metrics.basal_metabolic_rate, basal_metabolic_rate(&p));
        assert_eq!(metrics.calorie_target, 2250);
        assert_eq!(metrics.water_target_ml, 2275);
    }
}
