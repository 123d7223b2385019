pub mod types;

pub use types::{
    ActivityLevel, DietaryRestriction, GoalType, Sex, UserBasics, UserGoalSettings,
};
