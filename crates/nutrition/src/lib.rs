//! Nutrition goal and progress engine.
//!
//! Pure computation over injected snapshots: personalized calorie/macro
//! targets from biometrics (Mifflin-St Jeor), aggregation of logged and
//! planned meals into daily totals, daily/weekly progress classification,
//! and the priority-ordered goal resolution chain. Persistence, rendering,
//! and recipe discovery are collaborators, not part of this crate.

pub mod aggregate;
pub mod error;
pub mod estimate;
pub mod goals;
pub mod progress;
pub mod tracker;

pub use aggregate::{
    DayTotals, MealPlanCalories, logged_totals, planned_calories_for_range,
    planned_meal_calories, planned_totals,
};
pub use error::NutritionError;
pub use estimate::estimate_calories_from_ingredients;
pub use goals::{
    CALORIE_FLOOR, GoalUpdate, GoalValidation, NutritionGoals, calculate_nutrition_goals,
    can_calculate_goals, goal_explanation, validate_nutrition_goals,
};
pub use progress::{
    CalorieProgress, DailyProgress, GoalStatus, MacroBreakdown, MacroProgress, WeeklyTrend,
    daily_progress, status_for, weekly_trends,
};
pub use tracker::{GoalSource, NutritionTracker, ResolvedGoals, resolve_goals};
