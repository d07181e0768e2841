//! Daily health planner.
//!
//! The planner only echoes the submitted times back as an ordered plan.
//! Wake-up and the three meals are required; workout and relaxation may be
//! left blank.

use serde::Serialize;

use crate::error::InputError;
use crate::form::{optional, required, FormFields};

/// Shown for an optional slot the user left empty
pub const NOT_SCHEDULED: &str = "Not scheduled";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlanSlot {
    Wake,
    Breakfast,
    Lunch,
    Dinner,
    Workout,
    Relax,
}

impl PlanSlot {
    pub const ALL: [PlanSlot; 6] = [
        PlanSlot::Wake,
        PlanSlot::Breakfast,
        PlanSlot::Lunch,
        PlanSlot::Dinner,
        PlanSlot::Workout,
        PlanSlot::Relax,
    ];

    pub fn field(&self) -> &'static str {
        match self {
            PlanSlot::Wake => "wake_time",
            PlanSlot::Breakfast => "breakfast_time",
            PlanSlot::Lunch => "lunch_time",
            PlanSlot::Dinner => "dinner_time",
            PlanSlot::Workout => "workout_time",
            PlanSlot::Relax => "relax_time",
        }
    }

    /// Heading of the slot in the rendered plan
    pub fn label(&self) -> &'static str {
        match self {
            PlanSlot::Wake => "Wake-up Time",
            PlanSlot::Breakfast => "Breakfast",
            PlanSlot::Lunch => "Lunch",
            PlanSlot::Dinner => "Dinner",
            PlanSlot::Workout => "Workout",
            PlanSlot::Relax => "Self-Care/Relaxation",
        }
    }

    /// Form label of the input
    pub fn prompt(&self) -> &'static str {
        match self {
            PlanSlot::Wake => "Wake-up Time",
            PlanSlot::Breakfast => "Breakfast Time",
            PlanSlot::Lunch => "Lunch Time",
            PlanSlot::Dinner => "Dinner Time",
            PlanSlot::Workout => "Workout Time",
            PlanSlot::Relax => "Relaxation Time",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, PlanSlot::Workout | PlanSlot::Relax)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPlan {
    entries: Vec<(PlanSlot, Option<String>)>,
}

impl DailyPlan {
    pub fn from_form(form: &FormFields) -> Result<Self, InputError> {
        let entries = PlanSlot::ALL
            .iter()
            .map(|&slot| -> Result<_, InputError> {
                let value = if slot.is_required() {
                    Some(required(form, slot.field())?)
                } else {
                    optional(form, slot.field())
                };
                Ok((slot, value.map(str::to_string)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    /// `(label, value)` pairs in plan order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(slot, value)| (slot.label(), value.as_deref().unwrap_or(NOT_SCHEDULED)))
    }
}
