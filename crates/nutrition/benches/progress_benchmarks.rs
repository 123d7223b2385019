use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nutrition::{NutritionGoals, daily_progress, weekly_trends};
use recipe::{
    Ingredient, LoggedMeal, MealType, NutritionPerServing, PlannedMeal, Recipe, RecipeCatalog,
};

fn synthetic_week() -> (Vec<LoggedMeal>, Vec<PlannedMeal>, RecipeCatalog) {
    let catalog: RecipeCatalog = (0..50)
        .map(|i| Recipe {
            id: format!("recipe_{}", i),
            name: format!("Recipe {}", i),
            servings: 2.0,
            ingredients: vec![
                Ingredient::new("chicken", 200.0, "g"),
                Ingredient::new("rice", 1.0, "cup"),
            ],
            // Half the catalog exercises the estimation fallback.
            nutrition_per_serving: (i % 2 == 0).then(|| NutritionPerServing {
                calories: 420.0,
                protein: 30.0,
                carbs: 40.0,
                fats: 14.0,
            }),
        })
        .collect();

    let start = NaiveDate::from_ymd_opt(2026, 5, 3).unwrap();
    let mut logged = Vec::new();
    let mut planned = Vec::new();
    for day in 0..28 {
        let date = start + chrono::Duration::days(day);
        for meal in 0..3 {
            let recipe_id = format!("recipe_{}", (day * 3 + meal) % 50);
            logged.push(LoggedMeal::custom(
                "meal",
                date,
                MealType::Lunch,
                NutritionPerServing {
                    calories: 600.0,
                    protein: 35.0,
                    carbs: 60.0,
                    fats: 20.0,
                },
                1.0,
            ));
            planned.push(PlannedMeal::new(recipe_id, date, MealType::Dinner, 1.5));
        }
    }
    (logged, planned, catalog)
}

fn bench_daily_progress(c: &mut Criterion) {
    let (logged, planned, catalog) = synthetic_week();
    let goals = NutritionGoals::default();
    let date = NaiveDate::from_ymd_opt(2026, 5, 13).unwrap();

    c.bench_function("daily_progress_84_meals", |b| {
        b.iter(|| {
            daily_progress(
                black_box(date),
                black_box(&logged),
                black_box(&planned),
                black_box(&catalog),
                black_box(&goals),
            )
        })
    });
}

fn bench_weekly_trends(c: &mut Criterion) {
    let (logged, planned, catalog) = synthetic_week();
    let goals = NutritionGoals::default();
    let today = NaiveDate::from_ymd_opt(2026, 5, 30).unwrap();

    c.bench_function("weekly_trends_4_weeks", |b| {
        b.iter(|| {
            weekly_trends(
                black_box(today),
                black_box(&logged),
                black_box(&planned),
                black_box(&catalog),
                black_box(&goals),
            )
        })
    });
}

criterion_group!(benches, bench_daily_progress, bench_weekly_trends);
criterion_main!(benches);
