pub mod catalog;
pub mod types;

pub use catalog::RecipeCatalog;
pub use types::{
    Ingredient, LoggedMeal, MealType, NutritionPerServing, PlannedMeal, Recipe,
};
