use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use uuid::Uuid;

/// Authored nutrition facts for one serving of a recipe.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionPerServing {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl NutritionPerServing {
    /// Scale every field by a serving count, rounded to the nearest whole
    /// kcal/gram.
    pub fn scale(&self, servings: f64) -> Self {
        NutritionPerServing {
            calories: (self.calories * servings).round(),
            protein: (self.protein * servings).round(),
            carbs: (self.carbs * servings).round(),
            fats: (self.fats * servings).round(),
        }
    }
}

/// A single recipe ingredient. `quantity` is interpreted against `unit` by
/// the calorie-estimation fallback; `optional` ingredients are excluded
/// from estimation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub optional: bool,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Ingredient {
            name: name.into(),
            quantity,
            unit: unit.into(),
            optional: false,
        }
    }
}

/// A recipe as supplied by the catalog collaborator. Read-only input for
/// the nutrition engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub servings: f64,
    pub ingredients: Vec<Ingredient>,
    pub nutrition_per_serving: Option<NutritionPerServing>,
}

impl Recipe {
    /// True when the recipe carries authored nutrition facts, i.e. the
    /// aggregator will not need the ingredient-estimation fallback.
    pub fn has_nutrition_data(&self) -> bool {
        self.nutrition_per_serving.is_some()
    }
}

/// Meal slot within a day.
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
pub enum MealType {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
    Snack,
}

impl MealType {
    /// Total mapping from storage strings; unknown values map to `Snack`.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => MealType::Breakfast,
            "lunch" => MealType::Lunch,
            "dinner" | "supper" => MealType::Dinner,
            _ => MealType::Snack,
        }
    }
}

/// An immutable record of an actually-consumed meal.
///
/// Nutrition fields are frozen at logging time: editing the parent recipe
/// later never rewrites logged history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggedMeal {
    pub id: String,
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub meal_id: Option<String>,
    pub custom_name: Option<String>,
    pub servings: f64,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl LoggedMeal {
    /// Log a recipe-derived meal, freezing the recipe's per-serving
    /// nutrition scaled by `servings`. Recipes without authored nutrition
    /// log as zeros; the caller is expected to estimate first if it wants
    /// a calorie figure.
    pub fn from_recipe(recipe: &Recipe, date: NaiveDate, meal_type: MealType, servings: f64) -> Self {
        let nutrition = recipe
            .nutrition_per_serving
            .as_ref()
            .map(|n| n.scale(servings))
            .unwrap_or_default();

        LoggedMeal {
            id: Uuid::new_v4().to_string(),
            date,
            meal_type,
            meal_id: Some(recipe.id.clone()),
            custom_name: None,
            servings,
            calories: nutrition.calories,
            protein: nutrition.protein,
            carbs: nutrition.carbs,
            fats: nutrition.fats,
        }
    }

    /// Log a free-form meal with caller-supplied nutrition.
    pub fn custom(
        name: impl Into<String>,
        date: NaiveDate,
        meal_type: MealType,
        nutrition: NutritionPerServing,
        servings: f64,
    ) -> Self {
        let scaled = nutrition.scale(servings);
        LoggedMeal {
            id: Uuid::new_v4().to_string(),
            date,
            meal_type,
            meal_id: None,
            custom_name: Some(name.into()),
            servings,
            calories: scaled.calories,
            protein: scaled.protein,
            carbs: scaled.carbs,
            fats: scaled.fats,
        }
    }
}

/// An intent to eat: contributes to projected daily totals only while not
/// completed. On completion the authoritative record becomes a
/// `LoggedMeal`, and the planned entry must stop counting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannedMeal {
    pub id: String,
    pub recipe_id: String,
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub servings: f64,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

impl PlannedMeal {
    pub fn new(
        recipe_id: impl Into<String>,
        date: NaiveDate,
        meal_type: MealType,
        servings: f64,
    ) -> Self {
        PlannedMeal {
            id: Uuid::new_v4().to_string(),
            recipe_id: recipe_id.into(),
            date,
            meal_type,
            servings,
            is_completed: false,
            completed_at: None,
        }
    }

    /// Mark the plan as eaten. The corresponding `LoggedMeal` is created by
    /// the caller; after this transition the planned entry no longer
    /// contributes to projected totals.
    pub fn complete(&mut self, at: DateTime<Utc>) {
        self.is_completed = true;
        self.completed_at = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_with_nutrition() -> Recipe {
        Recipe {
            id: "r1".to_string(),
            name: "Grilled Salmon".to_string(),
            servings: 2.0,
            ingredients: vec![Ingredient::new("salmon", 300.0, "g")],
            nutrition_per_serving: Some(NutritionPerServing {
                calories: 400.0,
                protein: 25.0,
                carbs: 30.0,
                fats: 20.0,
            }),
        }
    }

    #[test]
    fn scale_rounds_to_nearest_whole() {
        let n = NutritionPerServing {
            calories: 400.0,
            protein: 25.0,
            carbs: 30.0,
            fats: 20.0,
        };
        let scaled = n.scale(1.5);
        assert_eq!(scaled.calories, 600.0);
        assert_eq!(scaled.protein, 38.0); // 37.5 rounds up
        assert_eq!(scaled.carbs, 45.0);
        assert_eq!(scaled.fats, 30.0);
    }

    #[test]
    fn from_recipe_freezes_scaled_nutrition() {
        let recipe = recipe_with_nutrition();
        let date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let logged = LoggedMeal::from_recipe(&recipe, date, MealType::Dinner, 1.5);

        assert_eq!(logged.meal_id.as_deref(), Some("r1"));
        assert_eq!(logged.calories, 600.0);
        assert_eq!(logged.protein, 38.0);
        assert_eq!(logged.carbs, 45.0);
        assert_eq!(logged.fats, 30.0);
    }

    #[test]
    fn from_recipe_without_nutrition_logs_zeros() {
        let mut recipe = recipe_with_nutrition();
        recipe.nutrition_per_serving = None;
        let date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let logged = LoggedMeal::from_recipe(&recipe, date, MealType::Lunch, 2.0);
        assert_eq!(logged.calories, 0.0);
        assert_eq!(logged.protein, 0.0);
    }

    #[test]
    fn complete_sets_timestamp_and_flag() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let mut planned = PlannedMeal::new("r1", date, MealType::Breakfast, 1.0);
        assert!(!planned.is_completed);

        let at = Utc::now();
        planned.complete(at);
        assert!(planned.is_completed);
        assert_eq!(planned.completed_at, Some(at));
    }

    #[test]
    fn meal_type_parse_lenient_defaults_to_snack() {
        assert_eq!(MealType::parse_lenient("Breakfast"), MealType::Breakfast);
        assert_eq!(MealType::parse_lenient("supper"), MealType::Dinner);
        assert_eq!(MealType::parse_lenient("second breakfast"), MealType::Snack);
    }
}
