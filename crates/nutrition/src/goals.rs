use profile::{Sex, UserBasics, UserGoalSettings};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Calorie targets are never allowed below this floor, regardless of how
/// aggressive the deficit would otherwise be.
pub const CALORIE_FLOOR: f64 = 1200.0;

/// Fixed macro split applied to the final calorie target: 25% protein,
/// 50% carbs, 25% fat, at 4/4/9 kcal per gram.
const PROTEIN_CALORIE_SHARE: f64 = 0.25;
const CARBS_CALORIE_SHARE: f64 = 0.50;
const FATS_CALORIE_SHARE: f64 = 0.25;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Daily calorie and macro targets, computed or manually entered.
/// Macros are grams.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoals {
    pub daily_calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl Default for NutritionGoals {
    /// Hard fallback used when no other goal source is available.
    fn default() -> Self {
        NutritionGoals {
            daily_calories: 2000.0,
            protein: 125.0,
            carbs: 250.0,
            fats: 56.0,
        }
    }
}

/// True when the biometric basics are complete enough to run the
/// calculator: age, sex, height, and weight all present and positive.
///
/// Callers must check this before offering the auto-calculate path.
pub fn can_calculate_goals(basics: &UserBasics) -> bool {
    matches!(basics.age, Some(age) if age > 0)
        && basics.sex.is_some()
        && matches!(basics.height_cm, Some(h) if h.is_finite() && h > 0.0)
        && matches!(basics.weight_kg, Some(w) if w.is_finite() && w > 0.0)
}

/// Mifflin-St Jeor basal metabolic rate.
///
/// For `Sex::Other` the male and female formulas are averaged. That is a
/// deliberate policy choice: the two formulas differ only by a constant
/// offset (+5 vs -161), so the average applies a -78 offset.
fn mifflin_st_jeor(sex: Sex, age: u32, height_cm: f64, weight_kg: f64) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
        Sex::Other => base + (5.0 - 161.0) / 2.0,
    }
}

/// Derive daily calorie and macro targets from biometrics and goal
/// settings.
///
/// Returns `None` when the basics are incomplete (see
/// [`can_calculate_goals`]); missing activity level defaults to moderate
/// and missing goal direction to maintain. The calorie target is clamped
/// to [`CALORIE_FLOOR`] and everything is rounded to whole kcal/grams.
pub fn calculate_nutrition_goals(
    basics: &UserBasics,
    settings: &UserGoalSettings,
) -> Option<NutritionGoals> {
    if !can_calculate_goals(basics) {
        return None;
    }

    let age = basics.age?;
    let sex = basics.sex?;
    let height_cm = basics.height_cm?;
    let weight_kg = basics.weight_kg?;

    let bmr = mifflin_st_jeor(sex, age, height_cm, weight_kg);
    let tdee = bmr * settings.activity_level.unwrap_or_default().factor();
    let adjusted = tdee + settings.goal_type.unwrap_or_default().calorie_adjustment();
    let daily_calories = adjusted.max(CALORIE_FLOOR).round();

    Some(NutritionGoals {
        daily_calories,
        protein: (daily_calories * PROTEIN_CALORIE_SHARE / KCAL_PER_G_PROTEIN).round(),
        carbs: (daily_calories * CARBS_CALORIE_SHARE / KCAL_PER_G_CARBS).round(),
        fats: (daily_calories * FATS_CALORIE_SHARE / KCAL_PER_G_FAT).round(),
    })
}

/// Human-readable justification of a computed goal, referencing the BMR,
/// activity multiplier, TDEE, and adjustment applied. For UI display only.
pub fn goal_explanation(
    basics: &UserBasics,
    settings: &UserGoalSettings,
    result: &NutritionGoals,
) -> String {
    let (Some(age), Some(sex), Some(height_cm), Some(weight_kg)) =
        (basics.age, basics.sex, basics.height_cm, basics.weight_kg)
    else {
        return "Goals are not derived from your biometrics; add age, sex, height, and weight \
                to enable automatic calculation."
            .to_string();
    };

    let bmr = mifflin_st_jeor(sex, age, height_cm, weight_kg);
    let activity = settings.activity_level.unwrap_or_default();
    let tdee = bmr * activity.factor();
    let goal_type = settings.goal_type.unwrap_or_default();

    let adjustment_text = match goal_type.calorie_adjustment() {
        a if a < 0.0 => format!("a {:.0} kcal/day deficit for weight loss", -a),
        a if a > 0.0 => format!("a {:.0} kcal/day surplus for weight gain", a),
        _ => "no adjustment (maintenance)".to_string(),
    };

    format!(
        "Your basal metabolic rate (Mifflin-St Jeor) is {:.0} kcal. Multiplied by the {} \
         activity factor of {} this gives a total daily energy expenditure of {:.0} kcal. \
         Applying {} yields a daily target of {:.0} kcal, split as {:.0}g protein, {:.0}g \
         carbs, and {:.0}g fat.",
        bmr,
        activity.as_ref().to_lowercase(),
        activity.factor(),
        tdee,
        adjustment_text,
        result.daily_calories,
        result.protein,
        result.carbs,
        result.fats,
    )
}

/// A partial goal edit, as submitted from the UI. Fields left `None` keep
/// their current value when the update is committed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct GoalUpdate {
    #[validate(range(
        min = 800.0,
        max = 10000.0,
        message = "daily calories must be between 800 and 10000"
    ))]
    pub daily_calories: Option<f64>,
    #[validate(range(min = 0.0, message = "protein target cannot be negative"))]
    pub protein: Option<f64>,
    #[validate(range(min = 0.0, message = "carbs target cannot be negative"))]
    pub carbs: Option<f64>,
    #[validate(range(min = 0.0, message = "fats target cannot be negative"))]
    pub fats: Option<f64>,
}

impl GoalUpdate {
    /// Merge this partial edit over an existing goal snapshot.
    pub fn apply_to(&self, current: &NutritionGoals) -> NutritionGoals {
        NutritionGoals {
            daily_calories: self.daily_calories.unwrap_or(current.daily_calories),
            protein: self.protein.unwrap_or(current.protein),
            carbs: self.carbs.unwrap_or(current.carbs),
            fats: self.fats.unwrap_or(current.fats),
        }
    }
}

/// Outcome of validating a goal edit. Errors block the update; warnings
/// are advisory and never auto-corrected.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Validate a goal edit: hard range errors plus advisory warnings for
/// macro/calorie inconsistency (>10% deviation) and calorie targets
/// outside the generally safe 1200-4000 band.
pub fn validate_nutrition_goals(update: &GoalUpdate) -> GoalValidation {
    let mut errors = Vec::new();

    if let Err(validation_errors) = update.validate() {
        for (field, field_errors) in validation_errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value for {}", field));
                errors.push(message);
            }
        }
    }

    let mut warnings = Vec::new();

    if let (Some(calories), Some(protein), Some(carbs), Some(fats)) =
        (update.daily_calories, update.protein, update.carbs, update.fats)
    {
        let macro_calories =
            protein * KCAL_PER_G_PROTEIN + carbs * KCAL_PER_G_CARBS + fats * KCAL_PER_G_FAT;
        if calories > 0.0 && ((macro_calories - calories) / calories).abs() > 0.10 {
            warnings.push(format!(
                "macro targets add up to {:.0} kcal, which differs from the {:.0} kcal daily \
                 target by more than 10%",
                macro_calories, calories
            ));
        }
    }

    if let Some(calories) = update.daily_calories {
        if calories < 1200.0 {
            warnings.push(
                "daily calorie targets below 1200 kcal are generally considered unsafe"
                    .to_string(),
            );
        } else if calories > 4000.0 {
            warnings.push(
                "daily calorie targets above 4000 kcal are unusually high; double-check the value"
                    .to_string(),
            );
        }
    }

    GoalValidation {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}
