use chrono::NaiveDate;
use nutrition::{GoalSource, GoalUpdate, NutritionGoals, NutritionTracker};
use profile::{ActivityLevel, GoalType, Sex, UserBasics, UserGoalSettings};
use recipe::{LoggedMeal, MealType, NutritionPerServing, RecipeCatalog};

fn complete_basics() -> UserBasics {
    UserBasics {
        age: Some(30),
        sex: Some(Sex::Male),
        height_cm: Some(180.0),
        weight_kg: Some(80.0),
    }
}

fn light_maintain() -> UserGoalSettings {
    UserGoalSettings {
        activity_level: Some(ActivityLevel::Light),
        goal_type: Some(GoalType::Maintain),
        ..Default::default()
    }
}

#[test]
fn calculated_goals_flow_into_progress() {
    let tracker = NutritionTracker::new(complete_basics(), light_maintain(), None);
    assert_eq!(tracker.goals().source, GoalSource::Calculated);
    assert_eq!(tracker.goals().goals.daily_calories, 2448.0);

    let date = NaiveDate::from_ymd_opt(2026, 5, 13).unwrap();
    let logged = vec![LoggedMeal::custom(
        "lunch",
        date,
        MealType::Lunch,
        NutritionPerServing {
            calories: 2448.0,
            protein: 153.0,
            carbs: 306.0,
            fats: 68.0,
        },
        1.0,
    )];

    let progress = tracker.daily_progress(date, &logged, &[], &RecipeCatalog::new());
    assert_eq!(progress.calories.percentage, 100.0);
    assert_eq!(progress.macros.protein.percentage, 100.0);
}

#[test]
fn profile_change_triggers_recompute_reads_do_not() {
    let mut tracker =
        NutritionTracker::new(UserBasics::default(), UserGoalSettings::default(), None);
    assert_eq!(tracker.goals().source, GoalSource::Default);
    // Repeated reads return the same cached snapshot.
    let first = tracker.goals().clone();
    assert_eq!(tracker.goals(), &first);

    tracker.set_profile(complete_basics(), light_maintain());
    assert_eq!(tracker.goals().source, GoalSource::Calculated);
    assert_eq!(tracker.goals().goals.daily_calories, 2448.0);
}

#[test]
fn legacy_goals_survive_until_profile_completes() {
    let legacy = NutritionGoals {
        daily_calories: 2100.0,
        protein: 130.0,
        carbs: 260.0,
        fats: 58.0,
    };
    let mut tracker = NutritionTracker::new(
        UserBasics::default(),
        UserGoalSettings::default(),
        Some(legacy.clone()),
    );
    assert_eq!(tracker.goals().source, GoalSource::Legacy);
    assert_eq!(tracker.goals().goals, legacy);

    tracker.set_profile(complete_basics(), light_maintain());
    assert_eq!(tracker.goals().source, GoalSource::Calculated);
}

#[test]
fn failed_persist_rolls_back_to_prior_snapshot() {
    let mut tracker = NutritionTracker::new(complete_basics(), light_maintain(), None);
    let before = tracker.goals().clone();

    let validation = tracker.update_goals(GoalUpdate {
        daily_calories: Some(3000.0),
        protein: Some(180.0),
        ..Default::default()
    });
    assert!(validation.is_valid);
    assert_eq!(tracker.goals().goals.daily_calories, 3000.0);

    // Downstream persistence failed; the caller restores the old snapshot.
    assert!(tracker.rollback_update());
    assert_eq!(tracker.goals(), &before);
}
