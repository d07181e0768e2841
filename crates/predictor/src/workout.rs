//! Rule-based split of available workout time.
//!
//! The plan depends only on the goal; the other form inputs are validated
//! but do not change the split.

use std::fmt;
use std::str::FromStr;

use data_loader::{BmiCategory, FitnessLevel, UnknownCategory};
use serde::Serialize;

use crate::error::InputError;
use crate::form::{category_field, int_field, FormFields};
use crate::round_to;

/// Form field names of the exercise-plan inputs
pub mod fields {
    pub const BMI_CATEGORY: &str = "BMI_Category";
    pub const FITNESS_LEVEL: &str = "Fitness_Level";
    pub const PREFERENCE: &str = "Workout_Preference";
    pub const TIME: &str = "Time";
    pub const GOAL: &str = "Goal";
    pub const GENDER: &str = "Gender";
}

/// Minutes offered on the form: 15 to 90 in steps of 15
pub const TIME_OPTIONS: [i64; 6] = [15, 30, 45, 60, 75, 90];

/// Implements the label plumbing shared by the workout form enums.
macro_rules! labelled {
    ($name:ident, $field:literal { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownCategory;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($label => Ok($name::$variant),)+
                    other => Err(UnknownCategory {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WorkoutGoal {
    WeightLoss,
    MuscleGain,
    Flexibility,
    GeneralFitness,
}

labelled!(WorkoutGoal, "fitness goal" {
    WeightLoss => "Weight Loss",
    MuscleGain => "Muscle Gain",
    Flexibility => "Flexibility",
    GeneralFitness => "General Fitness",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WorkoutType {
    Cardio,
    Strength,
    Flexibility,
    Hiit,
}

labelled!(WorkoutType, "workout preference" {
    Cardio => "Cardio",
    Strength => "Strength",
    Flexibility => "Flexibility",
    Hiit => "HIIT",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

labelled!(Gender, "gender" {
    Male => "Male",
    Female => "Female",
    Other => "Other",
});

impl WorkoutGoal {
    /// Share of the available time per workout type, in display order
    pub fn split(&self) -> &'static [(WorkoutType, f64)] {
        match self {
            WorkoutGoal::WeightLoss => &[
                (WorkoutType::Cardio, 0.5),
                (WorkoutType::Hiit, 0.3),
                (WorkoutType::Strength, 0.2),
            ],
            WorkoutGoal::MuscleGain => &[
                (WorkoutType::Strength, 0.6),
                (WorkoutType::Hiit, 0.2),
                (WorkoutType::Flexibility, 0.2),
            ],
            WorkoutGoal::Flexibility => &[
                (WorkoutType::Flexibility, 0.6),
                (WorkoutType::Cardio, 0.3),
                (WorkoutType::Strength, 0.1),
            ],
            WorkoutGoal::GeneralFitness => &[
                (WorkoutType::Cardio, 0.35),
                (WorkoutType::Strength, 0.35),
                (WorkoutType::Flexibility, 0.2),
                (WorkoutType::Hiit, 0.1),
            ],
        }
    }

    pub fn tip(&self) -> &'static str {
        match self {
            WorkoutGoal::WeightLoss => {
                "Stay hydrated and focus on consistency. Mix HIIT with light cardio for max burn."
            }
            WorkoutGoal::MuscleGain => {
                "Progressive overload is key. Ensure proper protein intake post-workout."
            }
            WorkoutGoal::Flexibility => {
                "Stretch daily. Focus on breathwork to enhance flexibility routines."
            }
            WorkoutGoal::GeneralFitness => {
                "A balanced routine with rest days ensures sustainable progress."
            }
        }
    }
}

/// A validated exercise-plan submission
#[derive(Debug, Clone, PartialEq)]
pub struct ExercisePlanRequest {
    pub bmi_category: BmiCategory,
    pub fitness_level: FitnessLevel,
    pub preference: WorkoutType,
    pub minutes: i64,
    pub goal: WorkoutGoal,
    pub gender: Gender,
}

impl ExercisePlanRequest {
    pub fn from_form(form: &FormFields) -> Result<Self, InputError> {
        let minutes = int_field(form, fields::TIME)?;
        if minutes < 0 {
            return Err(InputError::MalformedNumber {
                field: fields::TIME.to_string(),
                value: minutes.to_string(),
            });
        }

        Ok(Self {
            bmi_category: category_field(form, fields::BMI_CATEGORY)?,
            fitness_level: category_field(form, fields::FITNESS_LEVEL)?,
            preference: category_field(form, fields::PREFERENCE)?,
            minutes,
            goal: category_field(form, fields::GOAL)?,
            gender: category_field(form, fields::GENDER)?,
        })
    }
}

/// Minutes per workout type, rounded to 1 decimal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExercisePlan {
    pub goal: WorkoutGoal,
    pub minutes: i64,
    pub split: Vec<(WorkoutType, f64)>,
}

impl ExercisePlan {
    pub fn for_goal(goal: WorkoutGoal, minutes: i64) -> Self {
        let total = minutes as f64;
        let split = goal
            .split()
            .iter()
            .map(|&(kind, share)| (kind, round_to(total * share, 1)))
            .collect();

        Self { goal, minutes, split }
    }

    pub fn tip(&self) -> &'static str {
        self.goal.tip()
    }
}

impl From<&ExercisePlanRequest> for ExercisePlan {
    fn from(request: &ExercisePlanRequest) -> Self {
        ExercisePlan::for_goal(request.goal, request.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn valid_form(time: &str, goal: &str) -> FormFields {
        form(&[
            (fields::BMI_CATEGORY, "Normal"),
            (fields::FITNESS_LEVEL, "Beginner"),
            (fields::PREFERENCE, "HIIT"),
            (fields::TIME, time),
            (fields::GOAL, goal),
            (fields::GENDER, "Other"),
        ])
    }

    #[test]
    fn test_splits_sum_to_one() {
        for goal in WorkoutGoal::ALL {
            let total: f64 = goal.split().iter().map(|(_, share)| share).sum();
            assert!((total - 1.0).abs() < 1e-9, "{goal} split sums to {total}");
        }
    }

    #[test]
    fn test_weight_loss_plan() {
        let plan = ExercisePlan::for_goal(WorkoutGoal::WeightLoss, 45);
        assert_eq!(
            plan.split,
            vec![
                (WorkoutType::Cardio, 22.5),
                (WorkoutType::Hiit, 13.5),
                (WorkoutType::Strength, 9.0),
            ]
        );
        assert!(plan.tip().starts_with("Stay hydrated"));
    }

    #[test]
    fn test_general_fitness_plan() {
        let plan = ExercisePlan::for_goal(WorkoutGoal::GeneralFitness, 60);
        assert_eq!(plan.split.len(), 4);
        assert_eq!(plan.split[0], (WorkoutType::Cardio, 21.0));
        assert_eq!(plan.split[3], (WorkoutType::Hiit, 6.0));
    }

    #[test]
    fn test_general_fitness_plan_at_quarter_hours() {
        let plan = ExercisePlan::for_goal(WorkoutGoal::GeneralFitness, 15);
        assert_eq!(plan.split[0], (WorkoutType::Cardio, 5.2));

        let plan = ExercisePlan::for_goal(WorkoutGoal::GeneralFitness, 75);
        assert_eq!(plan.split[0], (WorkoutType::Cardio, 26.2));
    }

    #[test]
    fn test_request_from_form() {
        let request = ExercisePlanRequest::from_form(&valid_form("30", "Muscle Gain")).unwrap();
        assert_eq!(request.goal, WorkoutGoal::MuscleGain);
        assert_eq!(request.preference, WorkoutType::Hiit);
        assert_eq!(ExercisePlan::from(&request).split[0], (WorkoutType::Strength, 18.0));
    }

    #[test]
    fn test_request_rejects_bad_time() {
        assert!(matches!(
            ExercisePlanRequest::from_form(&valid_form("thirty", "Flexibility")),
            Err(InputError::MalformedNumber { .. })
        ));
        assert!(matches!(
            ExercisePlanRequest::from_form(&valid_form("-15", "Flexibility")),
            Err(InputError::MalformedNumber { .. })
        ));
    }

    #[test]
    fn test_request_rejects_unknown_goal() {
        assert!(matches!(
            ExercisePlanRequest::from_form(&valid_form("30", "Bulking")),
            Err(InputError::UnknownCategory { .. })
        ));
    }
}
