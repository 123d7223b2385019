use std::collections::HashMap;

use crate::types::Recipe;

/// In-memory `recipe id -> Recipe` lookup.
///
/// This is the engine's view of the recipe-catalog collaborator: a plain
/// read-only map over an already-fetched snapshot. Discovery, search, and
/// provider integration live outside.
#[derive(Clone, Debug, Default)]
pub struct RecipeCatalog {
    recipes: HashMap<String, Recipe>,
}

impl RecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, recipe: Recipe) {
        self.recipes.insert(recipe.id.clone(), recipe);
    }

    pub fn get(&self, recipe_id: &str) -> Option<&Recipe> {
        self.recipes.get(recipe_id)
    }

    /// True when the recipe exists and carries authored nutrition facts.
    /// A missing recipe reports false, same as one without data.
    pub fn has_nutrition_data(&self, recipe_id: &str) -> bool {
        self.recipes
            .get(recipe_id)
            .is_some_and(Recipe::has_nutrition_data)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl FromIterator<Recipe> for RecipeCatalog {
    fn from_iter<T: IntoIterator<Item = Recipe>>(iter: T) -> Self {
        let mut catalog = RecipeCatalog::new();
        for recipe in iter {
            catalog.insert(recipe);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NutritionPerServing;

    fn recipe(id: &str, with_nutrition: bool) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: format!("Recipe {}", id),
            servings: 2.0,
            ingredients: Vec::new(),
            nutrition_per_serving: with_nutrition.then(NutritionPerServing::default),
        }
    }

    #[test]
    fn has_nutrition_data_requires_authored_facts() {
        let catalog: RecipeCatalog = vec![recipe("a", true), recipe("b", false)]
            .into_iter()
            .collect();

        assert!(catalog.has_nutrition_data("a"));
        assert!(!catalog.has_nutrition_data("b"));
        assert!(!catalog.has_nutrition_data("missing"));
    }

    #[test]
    fn insert_replaces_by_id() {
        let mut catalog = RecipeCatalog::new();
        catalog.insert(recipe("a", false));
        catalog.insert(recipe("a", true));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.has_nutrition_data("a"));
    }
}
