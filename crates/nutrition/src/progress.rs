use chrono::{Datelike, Duration, NaiveDate};
use recipe::{LoggedMeal, PlannedMeal, RecipeCatalog};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::aggregate::{logged_totals, planned_totals};
use crate::goals::NutritionGoals;

/// Lower and upper bounds of the consumed/goal ratio counted as "met".
pub const MET_LOWER_BOUND: f64 = 0.95;
pub const MET_UPPER_BOUND: f64 = 1.05;

/// Number of trailing weeks covered by [`weekly_trends`].
const TREND_WEEKS: i64 = 4;

/// Classification of a day's calories against the goal.
#[derive(
    Display, AsRefStr, Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize,
)]
pub enum GoalStatus {
    Under,
    Met,
    Over,
}

/// Ratio of consumed to goal, defensively treating a missing or zero goal
/// as 0 instead of letting NaN/infinity escape into percentages.
fn goal_ratio(consumed: f64, goal: f64) -> f64 {
    if goal > 0.0 { consumed / goal } else { 0.0 }
}

/// Classify a consumed/goal pair: within [0.95, 1.05] of the goal is met,
/// above is over, anything else (including a zero goal) is under.
pub fn status_for(consumed: f64, goal: f64) -> GoalStatus {
    let ratio = goal_ratio(consumed, goal);
    if ratio > MET_UPPER_BOUND {
        GoalStatus::Over
    } else if ratio >= MET_LOWER_BOUND {
        GoalStatus::Met
    } else {
        GoalStatus::Under
    }
}

fn percentage(consumed: f64, goal: f64) -> f64 {
    (goal_ratio(consumed, goal) * 100.0).round()
}

/// Calorie progress for one day, split by source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalorieProgress {
    pub consumed: f64,
    pub goal: f64,
    pub remaining: f64,
    pub percentage: f64,
    pub from_logged: f64,
    pub from_planned: f64,
}

/// Progress against a single macro target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MacroProgress {
    pub consumed: f64,
    pub goal: f64,
    pub percentage: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    pub protein: MacroProgress,
    pub carbs: MacroProgress,
    pub fats: MacroProgress,
}

/// Derived per-day progress record. Never persisted; recomputed from the
/// meal snapshots on demand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    pub date: NaiveDate,
    pub calories: CalorieProgress,
    pub macros: MacroBreakdown,
    pub status: GoalStatus,
}

/// Rolled-up view of one Sunday-anchored week.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTrend {
    pub week_start_date: NaiveDate,
    pub average_calories: f64,
    /// Percentage of included days whose calorie status was met, 0-100.
    pub goal_adherence: f64,
    pub total_days: u32,
    pub days_met_goal: u32,
}

fn macro_progress(consumed: f64, goal: f64) -> MacroProgress {
    MacroProgress {
        consumed,
        goal,
        percentage: percentage(consumed, goal),
    }
}

/// Compute the day's combined progress: logged meals plus projected
/// not-yet-completed plans, measured against the goal snapshot.
///
/// Pure over its inputs; calling twice with the same snapshots yields an
/// identical record.
pub fn daily_progress(
    date: NaiveDate,
    logged: &[LoggedMeal],
    planned: &[PlannedMeal],
    catalog: &RecipeCatalog,
    goals: &NutritionGoals,
) -> DailyProgress {
    let logged_day = logged_totals(date, logged);
    let planned_day = planned_totals(date, planned, catalog);

    let consumed = logged_day.calories + planned_day.calories;
    let goal = goals.daily_calories;

    DailyProgress {
        date,
        calories: CalorieProgress {
            consumed,
            goal,
            remaining: (goal - consumed).max(0.0),
            percentage: percentage(consumed, goal),
            from_logged: logged_day.calories,
            from_planned: planned_day.calories,
        },
        macros: MacroBreakdown {
            protein: macro_progress(logged_day.protein + planned_day.protein, goals.protein),
            carbs: macro_progress(logged_day.carbs + planned_day.carbs, goals.carbs),
            fats: macro_progress(logged_day.fats + planned_day.fats, goals.fats),
        },
        status: status_for(consumed, goal),
    }
}

/// Roll up the trailing four Sunday-anchored weeks, most recent first.
///
/// Days after `today` are excluded rather than zero-filled, so the current
/// week only covers the days elapsed so far. A week that would contribute
/// zero days is omitted entirely instead of producing a divide-by-zero
/// artifact.
pub fn weekly_trends(
    today: NaiveDate,
    logged: &[LoggedMeal],
    planned: &[PlannedMeal],
    catalog: &RecipeCatalog,
    goals: &NutritionGoals,
) -> Vec<WeeklyTrend> {
    let current_week_start =
        today - Duration::days(i64::from(today.weekday().num_days_from_sunday()));

    let mut trends = Vec::with_capacity(TREND_WEEKS as usize);
    for week_back in 0..TREND_WEEKS {
        let week_start = current_week_start - Duration::weeks(week_back);

        let mut total_days = 0u32;
        let mut days_met_goal = 0u32;
        let mut calories_sum = 0.0;

        for day_offset in 0..7 {
            let day = week_start + Duration::days(day_offset);
            if day > today {
                continue;
            }
            total_days += 1;

            let progress = daily_progress(day, logged, planned, catalog, goals);
            calories_sum += progress.calories.consumed;
            if progress.status == GoalStatus::Met {
                days_met_goal += 1;
            }
        }

        if total_days == 0 {
            continue;
        }

        trends.push(WeeklyTrend {
            week_start_date: week_start,
            average_calories: (calories_sum / f64::from(total_days)).round(),
            goal_adherence: (100.0 * f64::from(days_met_goal) / f64::from(total_days)).round(),
            total_days,
            days_met_goal,
        });
    }

    trends
}
