//! Pages of the recommendation app.

use std::fmt::Write;

use data_loader::{BmiCategory, DietType, FitnessLevel, Goal, MealType};
use html_escape::encode_text;

use crate::orchestrator::{fields, Outcome, RecommendationRequest, Recommendations};
use crate::render::{error_box, options, table};
use crate::session::Snapshot;

const STYLE: &str = r#"
html, body { margin: 0; padding: 0; font-family: 'Segoe UI', sans-serif; background: #1b2a2f; color: #ffffff; }
.app-title { text-align: center; color: #00ffcc; font-size: 28px; }
.container { background-color: rgba(0, 0, 0, 0.75); padding: 30px; border-radius: 20px; max-width: 800px; margin: 30px auto 60px auto; }
label { font-weight: bold; display: block; margin-top: 10px; }
select, button { padding: 10px; width: 100%; margin-top: 5px; margin-bottom: 20px; border-radius: 10px; border: none; font-size: 14px; }
button { background-color: #00cc99; color: white; cursor: pointer; font-weight: bold; }
.results { background-color: rgba(255, 255, 255, 0.1); padding: 20px; border-radius: 10px; margin-top: 20px; }
.tip-box { background-color: rgba(0, 255, 255, 0.1); border-left: 4px solid #00e6e6; padding: 15px; margin: 20px 0 30px 0; font-style: italic; color: #ccf2ff; }
.warning { background-color: #fff3cd; color: #856404; border: 1px solid #ffeeba; padding: 15px; border-radius: 10px; margin-bottom: 15px; }
.error { color: #ff9999; background: rgba(0,0,0,0.3); padding: 15px; border-radius: 10px; margin-bottom: 15px; }
table { width: 100%; color: #fff; border-collapse: collapse; margin-top: 10px; }
th, td { padding: 10px; text-align: center; border-bottom: 1px solid #999; }
.nav-buttons { display: flex; justify-content: center; gap: 10px; margin-bottom: 20px; }
"#;

/// What the recommendation page shows
#[derive(Debug, Default)]
pub struct HomeView<'a> {
    /// Show the selection form (the page starts with it)
    pub show_form: bool,
    pub tip: &'a str,
    /// Results to display; `show_form == false` also shows the navigation buttons
    pub snapshot: Option<&'a Snapshot>,
    /// Cause of a rejected submission
    pub error: Option<String>,
}

fn selection_form() -> String {
    let select = |field: &str, label: &str, values: Vec<&str>| {
        format!(
            r#"<label for="{field}">{label}:</label><select name="{field}" required>{}</select>"#,
            options(values)
        )
    };

    let mut html = String::from(r#"<form method="post">"#);
    html.push_str(&select(fields::GOAL, "Fitness Goal", Goal::ALL.iter().map(|g| g.as_str()).collect()));
    html.push_str(&select(fields::DIET_TYPE, "Diet Type", DietType::ALL.iter().map(|d| d.as_str()).collect()));
    html.push_str(&select(fields::MEAL_TYPE, "Meal Type", MealType::ALL.iter().map(|m| m.as_str()).collect()));
    html.push_str(&select(
        fields::FITNESS_LEVEL,
        "Fitness Level",
        FitnessLevel::ALL.iter().map(|f| f.as_str()).collect(),
    ));
    html.push_str(&select(
        fields::BMI_CATEGORY,
        "BMI Category",
        BmiCategory::ALL.iter().map(|b| b.as_str()).collect(),
    ));
    html.push_str(r#"<button type="submit">Get Recommendations</button></form>"#);
    html
}

const NAV_BUTTONS: &str = r#"<form method="post" class="nav-buttons">
<button type="submit" name="action" value="show_form">🔙 Back to Form</button>
<button type="submit" name="action" value="show_history">📜 Show Last Recommendation</button>
</form>"#;

fn meal_summary(request: &RecommendationRequest) -> String {
    format!(
        "You are aiming for <strong>{}</strong> with a <strong>{}</strong> diet during <strong>{}</strong>. \
         We’ve picked meals that support your goal by optimizing for macronutrient balance.",
        request.goal.as_str().to_lowercase(),
        request.diet_type,
        request.meal_type
    )
}

fn exercise_summary(request: &RecommendationRequest) -> String {
    format!(
        "As a <strong>{}</strong> with a <strong>{}</strong> BMI aiming for <strong>{}</strong>, \
         here are tailored exercises based on your intensity level and calorie burn potential.",
        request.fitness_level,
        request.bmi_category,
        request.goal.as_str().to_lowercase()
    )
}

fn warning(headline: &str, detail: &str, noun: &str) -> String {
    format!(
        r#"<div class="warning">⚠️ <strong>{headline}</strong> {detail}<br>Showing 3 alternative {noun} instead:</div>"#
    )
}

/// Render a result into the snapshot stored in the session.
///
/// A matched side gets its summary; a fallback side gets a warning box above
/// the alternatives and no summary.
pub fn snapshot(request: &RecommendationRequest, recs: &Recommendations) -> Snapshot {
    let (meals_html, meal_summary) = match &recs.meals {
        Outcome::Matched(rows) => (table(rows), meal_summary(request)),
        Outcome::Fallback(rows) => (
            warning(
                "No suitable meals found",
                "based on your selected goal and diet type.",
                "meals",
            ) + &table(rows),
            String::new(),
        ),
    };

    let (exercises_html, exercise_summary) = match &recs.exercises {
        Outcome::Matched(rows) => (table(rows), exercise_summary(request)),
        Outcome::Fallback(rows) => (
            warning(
                "No matching exercises found",
                "for your current fitness level and BMI.",
                "exercises",
            ) + &table(rows),
            String::new(),
        ),
    };

    Snapshot {
        meals_html,
        exercises_html,
        meal_summary,
        exercise_summary,
    }
}

pub fn home_page(view: &HomeView<'_>) -> String {
    let mut body = String::new();

    if view.show_form {
        body.push_str(&selection_form());
    }
    if let Some(cause) = &view.error {
        body.push_str(&error_box(super::INVALID_INPUT, cause));
    }
    if !view.tip.is_empty() {
        let _ = write!(
            body,
            r#"<div class="tip-box">🌟 <strong>Tip of the Day:</strong> {}</div>"#,
            encode_text(view.tip)
        );
    }
    if !view.show_form {
        body.push_str(NAV_BUTTONS);
    }

    if let Some(snapshot) = view.snapshot {
        if !snapshot.meals_html.is_empty() {
            let _ = write!(
                body,
                r#"<div class="results"><h2>🥗 Recommended Meals</h2><p>{}</p>{}</div>"#,
                snapshot.meal_summary, snapshot.meals_html
            );
        }
        if !snapshot.exercises_html.is_empty() {
            let _ = write!(
                body,
                r#"<div class="results"><h2>🏋️ Recommended Exercises</h2><p>{}</p>{}</div>"#,
                snapshot.exercise_summary, snapshot.exercises_html
            );
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Personalized Health &amp; Fitness Recommendation System</title>
<style>{STYLE}</style>
</head>
<body>
<div class="app-title"><h1>Personalized Health &amp; Fitness Recommendation System</h1></div>
<div class="container">{body}</div>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeline::{ExerciseRecommendation, MealRecommendation};

    fn request() -> RecommendationRequest {
        RecommendationRequest {
            goal: Goal::Loss,
            diet_type: DietType::Vegan,
            meal_type: MealType::Lunch,
            fitness_level: FitnessLevel::Beginner,
            bmi_category: BmiCategory::Obese,
        }
    }

    fn meal() -> MealRecommendation {
        MealRecommendation {
            food_item: "Tofu Bowl".to_string(),
            category: "Main".to_string(),
            calories: 0.2,
            protein: 0.4,
            carbohydrates: 0.1,
            fat: 0.05,
        }
    }

    fn exercise() -> ExerciseRecommendation {
        ExerciseRecommendation {
            exercise: "Cycling".to_string(),
            calories_burned: 320.0,
            duration: 45.0,
            intensity: 4.0,
            heart_rate: 0.6,
        }
    }

    #[test]
    fn test_snapshot_matched_has_summaries() {
        let recs = Recommendations {
            meals: Outcome::Matched(vec![meal()]),
            exercises: Outcome::Matched(vec![exercise()]),
        };

        let snapshot = snapshot(&request(), &recs);
        assert!(snapshot.meal_summary.contains("<strong>loss</strong>"));
        assert!(snapshot.meal_summary.contains("<strong>Vegan</strong> diet during <strong>Lunch</strong>"));
        assert!(snapshot.exercise_summary.starts_with("As a <strong>Beginner</strong> with a <strong>Obese</strong> BMI"));
        assert!(snapshot.meals_html.contains("<td>Tofu Bowl</td>"));
        assert!(!snapshot.meals_html.contains("warning"));
    }

    #[test]
    fn test_snapshot_fallback_has_warning() {
        let recs = Recommendations {
            meals: Outcome::Fallback(vec![meal()]),
            exercises: Outcome::Fallback(vec![exercise()]),
        };

        let snapshot = snapshot(&request(), &recs);
        assert!(snapshot.meals_html.contains("No suitable meals found"));
        assert!(snapshot.meals_html.contains("Showing 3 alternative meals instead"));
        assert!(snapshot.exercises_html.contains("No matching exercises found"));
        assert!(snapshot.meal_summary.is_empty());
        assert!(snapshot.exercise_summary.is_empty());
    }

    #[test]
    fn test_home_page_form_and_tip() {
        let html = home_page(&HomeView {
            show_form: true,
            tip: "Drink water & rest",
            ..HomeView::default()
        });
        assert!(html.contains(r#"<select name="goal" required>"#));
        assert!(html.contains(r#"<option value="High-Protein">"#));
        assert!(html.contains("Drink water &amp; rest"));
        assert!(!html.contains("show_history"));
    }

    #[test]
    fn test_home_page_results_hide_form() {
        let snapshot = Snapshot {
            meals_html: "<table>meals</table>".to_string(),
            ..Snapshot::default()
        };
        let html = home_page(&HomeView {
            show_form: false,
            tip: "",
            snapshot: Some(&snapshot),
            error: None,
        });
        assert!(!html.contains(r#"<select name="goal""#));
        assert!(html.contains("show_history"));
        assert!(html.contains("<table>meals</table>"));
        assert!(!html.contains("Recommended Exercises"));
    }
}
