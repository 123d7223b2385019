use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Biological sex as used by the energy-expenditure formulas.
///
/// `Other` is a first-class value: goal calculation averages the male and
/// female formulas for it rather than refusing to calculate.
#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    /// Total mapping from profile-layer strings to the canonical vocabulary.
    ///
    /// Accepts legacy synonyms and single-letter codes; anything unknown
    /// maps to `Other` rather than failing.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "man" => Sex::Male,
            "female" | "f" | "woman" => Sex::Female,
            _ => Sex::Other,
        }
    }
}

/// Activity level on the standard 5-step scale used by TDEE estimation.
#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    Athlete,
}

impl ActivityLevel {
    /// TDEE multiplier applied to BMR.
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::Athlete => 1.9,
        }
    }

    /// Total mapping from profile-layer strings, including the legacy
    /// 5-step vocabulary ("lightly_active", "very_active", ...). Unknown
    /// values map to `Moderate`.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "sedentary" | "none" => ActivityLevel::Sedentary,
            "light" | "lightly_active" => ActivityLevel::Light,
            "moderate" | "moderately_active" => ActivityLevel::Moderate,
            "active" | "very_active" => ActivityLevel::Active,
            "athlete" | "extra_active" | "extremely_active" => ActivityLevel::Athlete,
            _ => ActivityLevel::Moderate,
        }
    }
}

/// Goal direction: whether the user wants to lose, maintain, or gain weight.
#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum GoalType {
    #[default]
    Maintain,
    Lose,
    Gain,
}

impl GoalType {
    /// Fixed kcal/day adjustment applied on top of TDEE.
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            GoalType::Maintain => 0.0,
            GoalType::Lose => -500.0,
            GoalType::Gain => 300.0,
        }
    }

    /// Total mapping from profile-layer strings; unknown values map to
    /// `Maintain`.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "lose" | "lose_weight" | "cut" | "deficit" => GoalType::Lose,
            "gain" | "gain_weight" | "bulk" | "surplus" => GoalType::Gain,
            _ => GoalType::Maintain,
        }
    }
}

/// Dietary restrictions carried on the profile. The goal/progress engine
/// does not consume these; they are part of the profile vocabulary bridged
/// to storage alongside the biometric fields.
#[derive(
    EnumString, VariantArray, Display, AsRefStr, Clone, Debug, PartialEq, Eq, Serialize, Deserialize,
)]
pub enum DietaryRestriction {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    NutFree,
    LowCarb,
}

/// Biometric basics required by the goal calculator.
///
/// All fields are optional: goal calculation proceeds only when every field
/// is present and positive, otherwise the resolution chain falls back.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserBasics {
    pub age: Option<u32>,
    pub sex: Option<Sex>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
}

/// Goal parameters plus optional manual target overrides.
///
/// Manual fields only become authoritative when the auto-calculation path
/// is unavailable (missing biometrics).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserGoalSettings {
    pub activity_level: Option<ActivityLevel>,
    pub goal_type: Option<GoalType>,
    pub daily_calories: Option<f64>,
    pub protein_target_g: Option<f64>,
    pub carbs_target_g: Option<f64>,
    pub fats_target_g: Option<f64>,
}

impl UserGoalSettings {
    /// True when at least one manual target field is set.
    pub fn has_manual_goals(&self) -> bool {
        self.daily_calories.is_some()
            || self.protein_target_g.is_some()
            || self.carbs_target_g.is_some()
            || self.fats_target_g.is_some()
    }
}
