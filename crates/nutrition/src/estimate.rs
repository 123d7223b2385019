use recipe::Ingredient;

/// Applied when no fragment in [`CALORIE_TABLE`] matches an ingredient.
pub const DEFAULT_KCAL_PER_100G: f64 = 100.0;

/// Representative kcal-per-100g values keyed by common ingredient name
/// fragments. Matching is case-insensitive substring, first hit wins, so
/// more specific fragments come before the generic ones they contain.
const CALORIE_TABLE: &[(&str, f64)] = &[
    // Proteins
    ("chicken", 165.0),
    ("ground beef", 250.0),
    ("beef", 250.0),
    ("pork", 242.0),
    ("salmon", 208.0),
    ("tuna", 132.0),
    ("shrimp", 99.0),
    ("fish", 140.0),
    ("turkey", 189.0),
    ("bacon", 541.0),
    ("sausage", 301.0),
    ("egg", 155.0),
    ("tofu", 76.0),
    ("lentil", 116.0),
    ("bean", 127.0),
    ("chickpea", 164.0),
    // Dairy
    ("butter", 717.0),
    ("cheese", 402.0),
    ("cream", 340.0),
    ("yogurt", 59.0),
    ("milk", 61.0),
    // Grains and starches
    ("flour", 364.0),
    ("pasta", 131.0),
    ("noodle", 138.0),
    ("rice", 130.0),
    ("bread", 265.0),
    ("oat", 389.0),
    ("quinoa", 120.0),
    ("potato", 77.0),
    ("tortilla", 218.0),
    // Fats, sugars, condiments
    ("olive oil", 884.0),
    ("oil", 884.0),
    ("mayonnaise", 680.0),
    ("peanut butter", 588.0),
    ("sugar", 387.0),
    ("honey", 304.0),
    ("chocolate", 546.0),
    ("nut", 607.0),
    ("avocado", 160.0),
    // Produce
    ("banana", 89.0),
    ("apple", 52.0),
    ("berry", 43.0),
    ("onion", 40.0),
    ("garlic", 149.0),
    ("tomato", 18.0),
    ("carrot", 41.0),
    ("broccoli", 34.0),
    ("spinach", 23.0),
    ("lettuce", 15.0),
    ("pepper", 31.0),
    ("mushroom", 22.0),
    ("zucchini", 17.0),
    ("corn", 86.0),
];

/// Look up a representative kcal/100g figure for an ingredient name.
pub fn kcal_per_100g(name: &str) -> f64 {
    let lower = name.to_lowercase();
    CALORIE_TABLE
        .iter()
        .find(|(fragment, _)| lower.contains(fragment))
        .map(|(_, kcal)| *kcal)
        .unwrap_or(DEFAULT_KCAL_PER_100G)
}

/// Convert an ingredient quantity to grams using a coarse unit heuristic.
/// Unknown units are assumed to already be grams (or ml, treated 1:1).
fn quantity_in_grams(quantity: f64, unit: &str) -> f64 {
    match unit.trim().to_lowercase().as_str() {
        "cup" | "cups" => quantity * 240.0,
        "tbsp" | "tablespoon" | "tablespoons" => quantity * 15.0,
        "tsp" | "teaspoon" | "teaspoons" => quantity * 5.0,
        "piece" | "pieces" | "pc" | "pcs" => quantity * 150.0,
        "kg" | "l" | "liter" | "liters" | "litre" | "litres" => quantity * 1000.0,
        "oz" => quantity * 28.0,
        "lb" | "lbs" => quantity * 454.0,
        _ => quantity,
    }
}

/// Estimate total calories for a list of raw ingredients.
///
/// This is the degrade-gracefully path for recipes without authored
/// nutrition facts: it always produces a number, never an error. Optional
/// ingredients are skipped. The estimate covers calories only; callers in
/// this path report zero protein/carbs/fats, a known precision gap kept
/// from the original behavior.
pub fn estimate_calories_from_ingredients(ingredients: &[Ingredient]) -> f64 {
    ingredients
        .iter()
        .filter(|ingredient| !ingredient.optional)
        .map(|ingredient| {
            let grams = quantity_in_grams(ingredient.quantity, &ingredient.unit);
            grams * kcal_per_100g(&ingredient.name) / 100.0
        })
        .sum::<f64>()
        .round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_match_is_case_insensitive() {
        assert_eq!(kcal_per_100g("Chicken Breast"), 165.0);
        assert_eq!(kcal_per_100g("BROWN RICE"), 130.0);
    }

    #[test]
    fn specific_fragments_win_over_generic() {
        // "olive oil" must not fall through to a produce entry or default.
        assert_eq!(kcal_per_100g("extra virgin olive oil"), 884.0);
        assert_eq!(kcal_per_100g("ground beef 80/20"), 250.0);
    }

    #[test]
    fn unknown_ingredient_uses_default() {
        assert_eq!(kcal_per_100g("dragonfruit compote"), DEFAULT_KCAL_PER_100G);
    }

    #[test]
    fn unit_heuristics() {
        assert_eq!(quantity_in_grams(1.0, "cup"), 240.0);
        assert_eq!(quantity_in_grams(2.0, "tbsp"), 30.0);
        assert_eq!(quantity_in_grams(3.0, "tsp"), 15.0);
        assert_eq!(quantity_in_grams(1.0, "piece"), 150.0);
        assert_eq!(quantity_in_grams(0.5, "kg"), 500.0);
        assert_eq!(quantity_in_grams(200.0, "g"), 200.0);
        assert_eq!(quantity_in_grams(100.0, "grams"), 100.0);
        assert_eq!(quantity_in_grams(4.0, "oz"), 112.0);
    }

    #[test]
    fn estimate_sums_and_rounds() {
        let ingredients = vec![
            Ingredient::new("chicken breast", 200.0, "g"), // 330 kcal
            Ingredient::new("rice", 1.0, "cup"),           // 240g * 1.3 = 312 kcal
        ];
        assert_eq!(estimate_calories_from_ingredients(&ingredients), 642.0);
    }

    #[test]
    fn optional_ingredients_are_skipped() {
        let mut garnish = Ingredient::new("butter", 50.0, "g");
        garnish.optional = true;
        let ingredients = vec![Ingredient::new("potato", 300.0, "g"), garnish];
        // 300g potato at 77 kcal/100g = 231; butter excluded.
        assert_eq!(estimate_calories_from_ingredients(&ingredients), 231.0);
    }

    #[test]
    fn empty_list_estimates_zero() {
        assert_eq!(estimate_calories_from_ingredients(&[]), 0.0);
    }
}
