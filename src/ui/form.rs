// SPDX-License-Identifier: MIT

//! Profile form state and conversion to the request schema.
//!
//! Free-text fields stay strings until submission. Numeric-looking fields
//! are converted on submit; a blank or unparseable value becomes `None` and
//! is omitted from the payload rather than raising a client-side error.

use chrono::NaiveDate;

use crate::models::profile::{ActivityLevel, Gender, Goal, Profile, ProfileRequest};

/// Editable form fields for creating or updating a profile.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    /// YYYY-MM-DD
    pub birth_date: String,
    pub gender: Option<Gender>,
    pub height: String,
    pub weight: String,
    pub activity_level: Option<ActivityLevel>,
    pub goal: Option<Goal>,
    pub target_weight: String,
    pub daily_calorie_goal: String,
    pub allergies: String,
    pub medical_conditions: String,
    pub dietary_preferences: String,
    pub profile_picture_url: String,
    pub bio: String,
}

impl ProfileForm {
    /// Prefill the form from an existing profile for editing.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            phone_number: profile.phone_number.clone().unwrap_or_default(),
            birth_date: profile
                .birth_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            gender: profile.gender,
            height: number_text(profile.height),
            weight: number_text(profile.weight),
            activity_level: profile.activity_level,
            goal: profile.goal,
            target_weight: number_text(profile.target_weight),
            daily_calorie_goal: profile
                .daily_calorie_goal
                .map(|v| v.to_string())
                .unwrap_or_default(),
            allergies: profile.allergies.clone().unwrap_or_default(),
            medical_conditions: profile.medical_conditions.clone().unwrap_or_default(),
            dietary_preferences: profile.dietary_preferences.clone().unwrap_or_default(),
            profile_picture_url: profile.profile_picture_url.clone().unwrap_or_default(),
            bio: profile.bio.clone().unwrap_or_default(),
        }
    }

    /// Convert to the submission schema. Blank fields are omitted; numeric
    /// fields are submitted as numbers, never as text.
    pub fn to_request(&self) -> ProfileRequest {
        ProfileRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone_number: opt_text(&self.phone_number),
            birth_date: opt_date(&self.birth_date),
            gender: self.gender,
            height: opt_f64(&self.height),
            weight: opt_f64(&self.weight),
            activity_level: self.activity_level,
            goal: self.goal,
            target_weight: opt_f64(&self.target_weight),
            daily_calorie_goal: opt_i64(&self.daily_calorie_goal),
            allergies: opt_text(&self.allergies),
            medical_conditions: opt_text(&self.medical_conditions),
            dietary_preferences: opt_text(&self.dietary_preferences),
            profile_picture_url: opt_text(&self.profile_picture_url),
            bio: opt_text(&self.bio),
        }
    }
}

fn opt_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn opt_f64(value: &str) -> Option<f64> {
    value.trim().parse().ok()
}

fn opt_i64(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

fn opt_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn number_text(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_fields_become_numbers() {
        let form = ProfileForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            height: "170".to_string(),
            weight: "72.5".to_string(),
            daily_calorie_goal: "2000".to_string(),
            ..Default::default()
        };

        let request = form.to_request();
        assert_eq!(request.height, Some(170.0));
        assert_eq!(request.weight, Some(72.5));
        assert_eq!(request.daily_calorie_goal, Some(2000));

        let json = serde_json::to_value(&request).unwrap();
        assert!(json["weight"].is_f64());
    }

    #[test]
    fn test_blank_and_malformed_fields_are_omitted() {
        let form = ProfileForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            height: "".to_string(),
            weight: "seventy".to_string(),
            target_weight: "  ".to_string(),
            allergies: "   ".to_string(),
            ..Default::default()
        };

        let request = form.to_request();
        assert_eq!(request.height, None);
        assert_eq!(request.weight, None);
        assert_eq!(request.target_weight, None);
        assert_eq!(request.allergies, None);

        let json = serde_json::to_value(&request).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("weight"));
        assert!(!object.contains_key("allergies"));
    }

    #[test]
    fn test_birth_date_parsing() {
        let mut form = ProfileForm {
            birth_date: "1990-12-10".to_string(),
            ..Default::default()
        };
        assert_eq!(
            form.to_request().birth_date,
            NaiveDate::from_ymd_opt(1990, 12, 10)
        );

        form.birth_date = "12/10/1990".to_string();
        assert_eq!(form.to_request().birth_date, None);
    }

    #[test]
    fn test_roundtrip_from_profile() {
        let profile: Profile = serde_json::from_str(
            r#"{
                "id": 1,
                "userId": 2,
                "firstName": "Ada",
                "lastName": "Lovelace",
                "height": 170.0,
                "weight": 60.0,
                "goal": "GENERAL_HEALTH",
                "allergies": "peanuts, shellfish"
            }"#,
        )
        .unwrap();

        let form = ProfileForm::from_profile(&profile);
        assert_eq!(form.height, "170");
        assert_eq!(form.goal, Some(Goal::GeneralHealth));

        let request = form.to_request();
        assert_eq!(request.height, Some(170.0));
        assert_eq!(request.allergies.as_deref(), Some("peanuts, shellfish"));
    }
}
