use chrono::NaiveDate;
use profile::{UserBasics, UserGoalSettings};
use recipe::{LoggedMeal, PlannedMeal, RecipeCatalog};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use tracing::debug;

use crate::goals::{
    GoalUpdate, GoalValidation, NutritionGoals, calculate_nutrition_goals,
    validate_nutrition_goals,
};
use crate::progress::{DailyProgress, WeeklyTrend, daily_progress, weekly_trends};

/// Which link of the fallback chain produced the current goals. Carried
/// for UI transparency.
#[derive(Display, AsRefStr, Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalSource {
    Calculated,
    Manual,
    Legacy,
    Default,
}

/// The authoritative goal snapshot plus its provenance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedGoals {
    pub goals: NutritionGoals,
    pub source: GoalSource,
}

/// Decide which goal source is authoritative, in priority order:
/// freshly calculated, then manual settings (missing manual fields default
/// to 0), then a legacy stored goals object verbatim, then hard defaults.
pub fn resolve_goals(
    basics: &UserBasics,
    settings: &UserGoalSettings,
    legacy: Option<&NutritionGoals>,
) -> ResolvedGoals {
    if let Some(goals) = calculate_nutrition_goals(basics, settings) {
        return ResolvedGoals {
            goals,
            source: GoalSource::Calculated,
        };
    }

    if settings.has_manual_goals() {
        return ResolvedGoals {
            goals: NutritionGoals {
                daily_calories: settings.daily_calories.unwrap_or(0.0),
                protein: settings.protein_target_g.unwrap_or(0.0),
                carbs: settings.carbs_target_g.unwrap_or(0.0),
                fats: settings.fats_target_g.unwrap_or(0.0),
            },
            source: GoalSource::Manual,
        };
    }

    if let Some(stored) = legacy {
        return ResolvedGoals {
            goals: stored.clone(),
            source: GoalSource::Legacy,
        };
    }

    ResolvedGoals {
        goals: NutritionGoals::default(),
        source: GoalSource::Default,
    }
}

/// Owns the single cached goal snapshot and the profile data it was
/// resolved from.
///
/// All inputs arrive by explicit injection; the tracker performs no I/O.
/// The cache is only recomputed through [`NutritionTracker::set_profile`]
/// (the caller's recompute entry point after an upstream change) or a goal
/// update, and each recompute replaces the snapshot wholesale, so a reader
/// always observes either the old or the new goals, never a mix.
#[derive(Clone, Debug)]
pub struct NutritionTracker {
    basics: UserBasics,
    settings: UserGoalSettings,
    legacy: Option<NutritionGoals>,
    current: ResolvedGoals,
    previous: Option<ResolvedGoals>,
}

impl NutritionTracker {
    pub fn new(
        basics: UserBasics,
        settings: UserGoalSettings,
        legacy: Option<NutritionGoals>,
    ) -> Self {
        let current = resolve_goals(&basics, &settings, legacy.as_ref());
        debug!(source = %current.source, calories = current.goals.daily_calories, "resolved initial goals");
        NutritionTracker {
            basics,
            settings,
            legacy,
            current,
            previous: None,
        }
    }

    /// The cached goal snapshot. Reads never trigger a recompute.
    pub fn goals(&self) -> &ResolvedGoals {
        &self.current
    }

    pub fn basics(&self) -> &UserBasics {
        &self.basics
    }

    pub fn settings(&self) -> &UserGoalSettings {
        &self.settings
    }

    /// Re-resolve the goal chain after the caller saw the biometric or
    /// settings data change. The cached snapshot is replaced atomically.
    pub fn set_profile(&mut self, basics: UserBasics, settings: UserGoalSettings) {
        self.basics = basics;
        self.settings = settings;
        self.current = resolve_goals(&self.basics, &self.settings, self.legacy.as_ref());
        self.previous = None;
        debug!(source = %self.current.source, calories = self.current.goals.daily_calories, "re-resolved goals after profile change");
    }

    /// Validate and apply a partial goal edit.
    ///
    /// On validation failure the prior goals remain active and the error
    /// list is returned for display. On success the update is committed in
    /// memory immediately (warnings are still surfaced); persisting the new
    /// goals is the caller's job, and [`NutritionTracker::rollback_update`]
    /// restores the previous snapshot if that persist fails.
    pub fn update_goals(&mut self, update: GoalUpdate) -> GoalValidation {
        let validation = validate_nutrition_goals(&update);
        if !validation.is_valid {
            debug!(errors = validation.errors.len(), "rejected goal update");
            return validation;
        }

        let committed = ResolvedGoals {
            goals: update.apply_to(&self.current.goals),
            source: GoalSource::Manual,
        };
        self.previous = Some(std::mem::replace(&mut self.current, committed));
        debug!(
            calories = self.current.goals.daily_calories,
            warnings = validation.warnings.len(),
            "committed goal update"
        );
        validation
    }

    /// Restore the snapshot that was active before the last committed
    /// update. Returns false when there is nothing to roll back.
    pub fn rollback_update(&mut self) -> bool {
        match self.previous.take() {
            Some(previous) => {
                self.current = previous;
                debug!(source = %self.current.source, "rolled back goal update");
                true
            }
            None => false,
        }
    }

    /// Day progress over the cached goals.
    pub fn daily_progress(
        &self,
        date: NaiveDate,
        logged: &[LoggedMeal],
        planned: &[PlannedMeal],
        catalog: &RecipeCatalog,
    ) -> DailyProgress {
        daily_progress(date, logged, planned, catalog, &self.current.goals)
    }

    /// Trailing four-week rollup over the cached goals.
    pub fn weekly_trends(
        &self,
        today: NaiveDate,
        logged: &[LoggedMeal],
        planned: &[PlannedMeal],
        catalog: &RecipeCatalog,
    ) -> Vec<WeeklyTrend> {
        weekly_trends(today, logged, planned, catalog, &self.current.goals)
    }
}
