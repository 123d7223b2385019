use chrono::NaiveDate;
use recipe::{LoggedMeal, MealType, PlannedMeal, RecipeCatalog};
use serde::{Deserialize, Serialize};

use crate::error::NutritionError;
use crate::estimate::estimate_calories_from_ingredients;

/// Projected nutrition for one not-yet-completed planned meal, resolved
/// against the recipe catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MealPlanCalories {
    pub planned_meal_id: String,
    pub recipe_id: String,
    pub recipe_name: String,
    pub meal_type: MealType,
    pub servings: f64,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    /// True when the figure came from the ingredient-estimation fallback
    /// rather than authored nutrition facts. Estimated entries carry zero
    /// macros.
    pub estimated: bool,
}

/// Summed nutrition for a set of meals on one day.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DayTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Sum the logged meals for a single date.
pub fn logged_totals(date: NaiveDate, logged: &[LoggedMeal]) -> DayTotals {
    logged
        .iter()
        .filter(|meal| meal.date == date)
        .fold(DayTotals::default(), |mut totals, meal| {
            totals.calories += meal.calories;
            totals.protein += meal.protein;
            totals.carbs += meal.carbs;
            totals.fats += meal.fats;
            totals
        })
}

/// Resolve the planned meals for `date` into projected calorie/macro
/// entries.
///
/// Completed plans are excluded: their nutrition is already reflected by
/// the logged meal created at completion time, and counting both would
/// double the day's total.
///
/// A recipe with authored nutrition is scaled by the planned servings. A
/// recipe without one falls back to ingredient estimation, scaled from the
/// whole-recipe estimate down to one serving and back up to the planned
/// servings. A recipe missing from the catalog entirely projects zero
/// rather than erroring.
pub fn planned_meal_calories(
    date: NaiveDate,
    planned: &[PlannedMeal],
    catalog: &RecipeCatalog,
) -> Vec<MealPlanCalories> {
    planned
        .iter()
        .filter(|plan| plan.date == date && !plan.is_completed)
        .map(|plan| match catalog.get(&plan.recipe_id) {
            Some(recipe) => match &recipe.nutrition_per_serving {
                Some(nutrition) => {
                    let scaled = nutrition.scale(plan.servings);
                    MealPlanCalories {
                        planned_meal_id: plan.id.clone(),
                        recipe_id: plan.recipe_id.clone(),
                        recipe_name: recipe.name.clone(),
                        meal_type: plan.meal_type,
                        servings: plan.servings,
                        calories: scaled.calories,
                        protein: scaled.protein,
                        carbs: scaled.carbs,
                        fats: scaled.fats,
                        estimated: false,
                    }
                }
                None => {
                    let whole_recipe = estimate_calories_from_ingredients(&recipe.ingredients);
                    let per_serving = whole_recipe / recipe.servings.max(1.0);
                    MealPlanCalories {
                        planned_meal_id: plan.id.clone(),
                        recipe_id: plan.recipe_id.clone(),
                        recipe_name: recipe.name.clone(),
                        meal_type: plan.meal_type,
                        servings: plan.servings,
                        calories: (per_serving * plan.servings).round(),
                        protein: 0.0,
                        carbs: 0.0,
                        fats: 0.0,
                        estimated: true,
                    }
                }
            },
            None => MealPlanCalories {
                planned_meal_id: plan.id.clone(),
                recipe_id: plan.recipe_id.clone(),
                recipe_name: String::new(),
                meal_type: plan.meal_type,
                servings: plan.servings,
                calories: 0.0,
                protein: 0.0,
                carbs: 0.0,
                fats: 0.0,
                estimated: true,
            },
        })
        .collect()
}

/// Sum projected planned-meal totals for a date.
pub fn planned_totals(
    date: NaiveDate,
    planned: &[PlannedMeal],
    catalog: &RecipeCatalog,
) -> DayTotals {
    planned_meal_calories(date, planned, catalog).iter().fold(
        DayTotals::default(),
        |mut totals, entry| {
            totals.calories += entry.calories;
            totals.protein += entry.protein;
            totals.carbs += entry.carbs;
            totals.fats += entry.fats;
            totals
        },
    )
}

/// Sum projected planned calories over an inclusive date range.
pub fn planned_calories_for_range(
    start: NaiveDate,
    end: NaiveDate,
    planned: &[PlannedMeal],
    catalog: &RecipeCatalog,
) -> Result<f64, NutritionError> {
    if start > end {
        return Err(NutritionError::InvalidDateRange { start, end });
    }

    let mut total = 0.0;
    let mut date = start;
    while date <= end {
        total += planned_totals(date, planned, catalog).calories;
        date = date.succ_opt().expect("date range within calendar bounds");
    }
    Ok(total)
}
