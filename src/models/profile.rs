// SPDX-License-Identifier: MIT

//! Profile service schemas: the editable request, the server
//! representation with computed metrics, and the closed category sets.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Gender categories recognized by the profile service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Parse loose user input ("male", "MALE", "Female").
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "MALE" => Some(Gender::Male),
            "FEMALE" => Some(Gender::Female),
            "OTHER" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// Activity levels used by the backend to scale BMR into TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::LightlyActive => "Lightly active (1-3 days/week)",
            ActivityLevel::ModeratelyActive => "Moderately active (3-5 days/week)",
            ActivityLevel::VeryActive => "Very active (6-7 days/week)",
            ActivityLevel::ExtraActive => "Extra active (physical job or training)",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "SEDENTARY" => Some(ActivityLevel::Sedentary),
            "LIGHTLY_ACTIVE" => Some(ActivityLevel::LightlyActive),
            "MODERATELY_ACTIVE" => Some(ActivityLevel::ModeratelyActive),
            "VERY_ACTIVE" => Some(ActivityLevel::VeryActive),
            "EXTRA_ACTIVE" => Some(ActivityLevel::ExtraActive),
            _ => None,
        }
    }
}

/// Goal categories for a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Goal {
    WeightLoss,
    WeightGain,
    WeightMaintenance,
    MuscleGain,
    GeneralHealth,
}

impl Goal {
    pub const ALL: [Goal; 5] = [
        Goal::WeightLoss,
        Goal::WeightGain,
        Goal::WeightMaintenance,
        Goal::MuscleGain,
        Goal::GeneralHealth,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight loss",
            Goal::WeightGain => "Weight gain",
            Goal::WeightMaintenance => "Weight maintenance",
            Goal::MuscleGain => "Muscle gain",
            Goal::GeneralHealth => "General health",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "WEIGHT_LOSS" => Some(Goal::WeightLoss),
            "WEIGHT_GAIN" => Some(Goal::WeightGain),
            "WEIGHT_MAINTENANCE" => Some(Goal::WeightMaintenance),
            "MUSCLE_GAIN" => Some(Goal::MuscleGain),
            "GENERAL_HEALTH" => Some(Goal::GeneralHealth),
            _ => None,
        }
    }
}

/// Editable profile fields sent on create and update (full replace).
///
/// Optional fields left `None` are omitted from the payload entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_calorie_goal: Option<i64>,
    /// Comma-separated free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_conditions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_preferences: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Profile as returned by the service, including the server-computed
/// read-only metrics. BMI, BMR, and TDEE are never computed client-side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default)]
    pub goal: Option<Goal>,
    #[serde(default)]
    pub target_weight: Option<f64>,
    #[serde(default)]
    pub daily_calorie_goal: Option<i64>,
    #[serde(default)]
    pub allergies: Option<String>,
    #[serde(default)]
    pub medical_conditions: Option<String>,
    #[serde(default)]
    pub dietary_preferences: Option<String>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,

    // Server-computed fields
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub bmi: Option<f64>,
    #[serde(default)]
    pub bmi_category: Option<String>,
    /// Basal metabolic rate, kcal/day
    #[serde(default)]
    pub bmr: Option<i32>,
    /// Total daily energy expenditure, kcal/day
    #[serde(default)]
    pub tdee: Option<i32>,
}

/// Query parameters for GET /api/profiles/search.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
}
