//! Pages of the predictor app.

use std::fmt::Write;

use data_loader::{BmiCategory, DietType, FitnessLevel, MealType};
use html_escape::{encode_double_quoted_attribute, encode_text};
use pipeline::format_number;
use predictor::calories::{self, unit_steps, INTENSITY_LEVELS};
use predictor::workout::{self, TIME_OPTIONS};
use predictor::{
    macros, CaloriePrediction, DailyPlan, ExercisePlan, Gender, MacroBreakdown, PlanSlot,
    WorkoutGoal, WorkoutType,
};

const STYLE: &str = r#"
body { margin: 0; font-family: Arial, sans-serif; background: linear-gradient(to right, #0f2027, #203a43, #2c5364); color: #fff; }
.sidebar { height: 100vh; width: 240px; position: fixed; background-color: #111; padding-top: 30px; }
.sidebar a { padding: 15px 25px; text-decoration: none; font-size: 18px; color: #ccc; display: block; }
.main { margin-left: 260px; padding: 20px; }
.app-name { font-family: 'Trebuchet MS', sans-serif; font-size: 26px; color: #ffcc00; margin-bottom: 10px; }
h1 { color: #00ffcc; margin-top: 0; }
form { background: rgba(255,255,255,0.1); padding: 20px; border-radius: 10px; max-width: 600px; }
label { display: block; margin-top: 15px; }
select, input, button { width: 100%; padding: 10px; margin-top: 10px; border-radius: 8px; border: none; font-size: 16px; }
button { background-color: #00cc99; color: white; font-weight: bold; cursor: pointer; }
.result { margin-top: 20px; font-size: 18px; background: rgba(0,0,0,0.5); padding: 15px; border-radius: 10px; color: #00ffcc; }
.summary { margin-top: 10px; font-style: italic; color: #ffcc99; }
.error { margin-top: 20px; font-size: 16px; color: red; background: rgba(0,0,0,0.3); padding: 15px; border-radius: 10px; }
"#;

/// Message shown when an exercise-plan submission is rejected
pub const PLAN_ERROR: &str = "Something went wrong. Please check your input values.";

/// Donut colors for protein, carbohydrates and fat
pub const MACRO_COLORS: [&str; 3] = ["#00cc99", "#00bfff", "#ff9966"];
pub const PLAN_BAR_COLOR: &str = "#ff6666";

/// Wrap page content in the shared layout with the navigation sidebar
pub fn layout(title: &str, heading: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<div class="sidebar">
<a href="/">Calories Burned Prediction</a>
<a href="/macros">Macronutrient Distribution</a>
<a href="/exercise">Exercise Duration Suggestion</a>
<a href="/more">More</a>
</div>
<div class="main">
<div class="app-name">Personalized Health &amp; Fitness AI Suite</div>
<h1>{heading}</h1>
{content}
</div>
</body>
</html>"#,
        title = encode_text(title),
        heading = encode_text(heading),
    )
}

fn select(field: &str, label: &str, choices: String) -> String {
    format!(
        r#"<label>{}:</label><select name="{}" required>{choices}</select>"#,
        encode_text(label),
        encode_double_quoted_attribute(field)
    )
}

fn labels<T>(values: &[T], label: impl Fn(&T) -> &'static str) -> Vec<&'static str> {
    values.iter().map(label).collect()
}

// =============================================================================
// Calories burned
// =============================================================================

pub fn calories_form() -> String {
    let steps: Vec<String> = unit_steps().into_iter().map(|v| v.to_string()).collect();
    let mut html = String::from(r#"<form method="POST">"#);
    html.push_str(&select(
        calories::fields::INTENSITY,
        "Exercise Intensity (1–10)",
        super::options(INTENSITY_LEVELS.map(|i| i.to_string())),
    ));
    html.push_str(&select(calories::fields::DURATION, "Duration (0 to 1)", super::options(&steps)));
    html.push_str(&select(calories::fields::HEART_RATE, "Heart Rate (0 to 1)", super::options(&steps)));
    html.push_str(&select(
        calories::fields::BMI_CATEGORY,
        "BMI Category",
        super::options(labels(BmiCategory::ALL, BmiCategory::as_str)),
    ));
    html.push_str(&select(
        calories::fields::FITNESS_LEVEL,
        "Fitness Level",
        super::options(labels(FitnessLevel::ALL, FitnessLevel::as_str)),
    ));
    html.push_str(r#"<button type="submit">Predict</button></form>"#);
    html
}

pub fn calories_result(prediction: &CaloriePrediction) -> String {
    format!(
        r#"<div class="result">Predicted Calories Burned: <strong>{}</strong><p class="summary">{}</p></div>"#,
        format_number(prediction.value),
        encode_text(prediction.summary())
    )
}

// =============================================================================
// Macronutrients
// =============================================================================

pub fn macros_form() -> String {
    let mut html = String::from(r#"<form method="POST">"#);
    let _ = write!(
        html,
        r#"<label>Calories (kcal):</label><input type="number" name="{}" step="0.01" required>"#,
        encode_double_quoted_attribute(macros::fields::CALORIES)
    );
    html.push_str(&select(
        macros::fields::MEAL_TYPE,
        "Meal Type",
        super::options(labels(MealType::ALL, MealType::as_str)),
    ));
    html.push_str(&select(
        macros::fields::DIET_TYPE,
        "Diet Type",
        super::options(labels(DietType::ALL, DietType::as_str)),
    ));
    html.push_str(&select(
        macros::fields::BMI_CATEGORY,
        "BMI Category",
        super::options(labels(BmiCategory::ALL, BmiCategory::as_str)),
    ));
    html.push_str(r#"<button type="submit">Predict</button></form>"#);
    html
}

pub fn macros_result(breakdown: &MacroBreakdown, chart_uri: &str) -> String {
    let mut html = String::from(r#"<div class="result"><h2>Predicted Macronutrient Breakdown:</h2><ul>"#);
    for (nutrient, grams) in breakdown.entries() {
        let _ = write!(
            html,
            "<li><strong>{}:</strong> {}</li>",
            encode_text(nutrient.label()),
            format_number(grams)
        );
    }
    let _ = write!(
        html,
        r#"</ul><p class="summary">{}</p><img src="{}" alt="Macronutrient Chart" style="margin-top: 10px;" /></div>"#,
        encode_text(&breakdown.summary()),
        encode_double_quoted_attribute(chart_uri)
    );
    html
}

// =============================================================================
// Exercise plan
// =============================================================================

pub fn exercise_form() -> String {
    let mut html = String::from(r#"<form method="POST">"#);
    html.push_str(&select(
        workout::fields::BMI_CATEGORY,
        "BMI Category",
        super::options(labels(BmiCategory::ALL, BmiCategory::as_str)),
    ));
    html.push_str(&select(
        workout::fields::FITNESS_LEVEL,
        "Fitness Level",
        super::options(labels(FitnessLevel::ALL, FitnessLevel::as_str)),
    ));
    html.push_str(&select(
        workout::fields::PREFERENCE,
        "Workout Preference",
        super::options(labels(WorkoutType::ALL, WorkoutType::as_str)),
    ));
    html.push_str(&select(
        workout::fields::TIME,
        "Time Available (minutes)",
        super::options(TIME_OPTIONS.iter().map(|t| t.to_string())),
    ));
    html.push_str(&select(
        workout::fields::GOAL,
        "Fitness Goal",
        super::options(labels(WorkoutGoal::ALL, WorkoutGoal::as_str)),
    ));
    html.push_str(&select(
        workout::fields::GENDER,
        "Gender",
        super::options(labels(Gender::ALL, Gender::as_str)),
    ));
    html.push_str(r#"<button type="submit">Get Suggestion</button></form>"#);
    html
}

pub fn exercise_result(plan: &ExercisePlan, chart_uri: &str) -> String {
    let mut html = String::from(r#"<div class="result"><h2>Recommended Exercise Plan:</h2><ul>"#);
    for (kind, minutes) in &plan.split {
        let _ = write!(
            html,
            "<li><strong>{}:</strong> {} min</li>",
            kind,
            format_number(*minutes)
        );
    }
    let _ = write!(
        html,
        r#"</ul><p class="summary">{}</p><img src="{}" alt="Workout Chart" style="margin-top: 15px;" /></div>"#,
        encode_text(plan.tip()),
        encode_double_quoted_attribute(chart_uri)
    );
    html
}

// =============================================================================
// More and planner
// =============================================================================

pub fn more_content(quote: &str, tip: &str) -> String {
    format!(
        r#"<div class="result">
<h2>🧠 Fitness &amp; Wellness Motivation</h2>
<p class="summary">{}</p>
<h2>📌 Tip of the Day</h2>
<p>{}</p>
<h2>📅 Plan Your Day</h2>
<p>Use our <a href="/planner" style="color:#00ccff; font-weight:bold;">Daily Health Planner</a> to build a personalized routine.</p>
</div>"#,
        encode_text(quote),
        encode_text(tip)
    )
}

pub fn planner_form() -> String {
    let mut html = String::from(r#"<form method="POST">"#);
    for slot in PlanSlot::ALL {
        let _ = write!(
            html,
            r#"<label>{}:</label><input type="time" name="{}"{}>"#,
            slot.prompt(),
            slot.field(),
            if slot.is_required() { " required" } else { "" }
        );
    }
    html.push_str(r#"<button type="submit">Generate My Plan</button></form>"#);
    html
}

pub fn planner_result(plan: &DailyPlan) -> String {
    let mut html =
        String::from(r#"<div class="result"><h2>Your Personalized Health Plan for Today:</h2><ul>"#);
    for (label, value) in plan.entries() {
        let _ = write!(
            html,
            "<li><strong>{}:</strong> {}</li>",
            encode_text(label),
            encode_text(value)
        );
    }
    html.push_str("</ul></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_escapes_heading() {
        let html = layout("T", "Macros & More", "<p>body</p>");
        assert!(html.contains("<h1>Macros &amp; More</h1>"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains(r#"<a href="/more">More</a>"#));
    }

    #[test]
    fn test_calories_form_options() {
        let html = calories_form();
        assert!(html.contains(r#"<select name="Exercise Intensity" required>"#));
        assert!(html.contains(r#"<option value="10">10</option>"#));
        assert!(html.contains(r#"<option value="0.05">0.05</option>"#));
        assert!(html.contains(r#"<option value="1">1</option>"#));
        assert!(html.contains(r#"<option value="Intermediate">"#));
    }

    #[test]
    fn test_calories_result() {
        let html = calories_result(&CaloriePrediction::from_raw(0.456));
        assert!(html.contains("<strong>0.46</strong>"));
        assert!(html.contains("Moderate calorie burn"));
    }

    #[test]
    fn test_exercise_result_lists_minutes() {
        let plan = ExercisePlan::for_goal(WorkoutGoal::Flexibility, 30);
        let html = exercise_result(&plan, "data:image/svg+xml;base64,AA==");
        assert!(html.contains("<li><strong>Flexibility:</strong> 18.0 min</li>"));
        assert!(html.contains("<li><strong>Strength:</strong> 3.0 min</li>"));
        assert!(html.contains("Stretch daily."));
    }

    #[test]
    fn test_planner_form_marks_required_slots() {
        let html = planner_form();
        assert!(html.contains(r#"name="wake_time" required>"#));
        assert!(html.contains(r#"name="relax_time">"#));
    }
}
