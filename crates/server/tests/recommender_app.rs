//! End-to-end tests of the recommendation app through its axum router.

use std::io::Write;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use data_loader::{FitnessDataset, FitnessRecord};
use server::startup::load_recommender_state;
use server::{create_recommender_router, RecommenderState, ServerConfig};

const COOKIE_NAME: &str = "fitrecs_session";

#[allow(clippy::too_many_arguments)]
fn row(
    goal: &str,
    diet_type: &str,
    meal_type: &str,
    food_item: &str,
    calories: f64,
    carbohydrates: f64,
    exercise: &str,
    calories_burned: f64,
    duration: f64,
    intensity: f64,
) -> FitnessRecord {
    FitnessRecord {
        goal: goal.to_string(),
        diet_type: diet_type.to_string(),
        meal_type: meal_type.to_string(),
        food_item: food_item.to_string(),
        category: "Main".to_string(),
        calories,
        protein: 0.5,
        carbohydrates,
        fat: 0.1,
        exercise: exercise.to_string(),
        calories_burned,
        duration,
        intensity,
        heart_rate: 0.6,
    }
}

fn test_state() -> RecommenderState {
    let dataset = FitnessDataset::from_records(vec![
        row("Loss", "Vegan", "Lunch", "Tofu Bowl", 0.2, 0.1, "Cycling", 320.0, 45.0, 5.0),
        row("Loss", "Vegan", "Lunch", "Heavy Curry", 0.4, 0.1, "Rowing", 400.0, 50.0, 8.0),
        row("Gain", "Balanced", "Dinner", "Steak", 0.3, 0.2, "Squats", 200.0, 30.0, 3.0),
        row("Gain", "Balanced", "Dinner", "Pasta", 0.7, 0.9, "Deadlift", 240.0, 35.0, 9.0),
    ]);
    RecommenderState::new(Arc::new(dataset), COOKIE_NAME)
}

fn selection(goal: &str, diet_type: &str, meal_type: &str, level: &str, bmi: &str) -> String {
    format!(
        "goal={goal}&diet_type={diet_type}&meal_type={meal_type}&fitness_level={level}&bmi_category={bmi}"
    )
}

async fn post(app: &Router, body: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// The `name=value` part of the response's session cookie
fn session_cookie(response: &Response) -> String {
    let value = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie")
        .to_str()
        .unwrap();
    value.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn test_get_home_shows_form_and_sets_cookie() {
    let app = create_recommender_router(test_state());
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.starts_with("fitrecs_session="));
    assert!(cookie.contains("HttpOnly"));

    let html = body_text(response).await;
    assert!(html.contains(r#"<select name="goal" required>"#));
    assert!(html.contains("Tip of the Day"));
}

#[tokio::test]
async fn test_submit_renders_matched_results() {
    let app = create_recommender_router(test_state());
    let response = post(&app, &selection("Loss", "Vegan", "Lunch", "Intermediate", "Obese"), None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<td>Tofu Bowl</td>"));
    assert!(!html.contains("<td>Heavy Curry</td>"));
    assert!(html.contains("You are aiming for <strong>loss</strong>"));
    // Intermediate + Loss + Obese: only Cycling fits
    assert!(html.contains("<td>Cycling</td>"));
    assert!(html.contains("show_history"));
    assert!(!html.contains(r#"<select name="goal""#));
}

#[tokio::test]
async fn test_submit_renders_fallback_warning() {
    let app = create_recommender_router(test_state());
    // No Gain/Vegan/Snack rows, and nothing burns >= 300 in a beginner band
    let response = post(&app, &selection("Gain", "Vegan", "Snack", "Beginner", "Obese"), None).await;

    let html = body_text(response).await;
    assert!(html.contains("No suitable meals found"));
    assert!(html.contains("No matching exercises found"));
    // Gain fallback by calories burned: Deadlift (240) before Squats (200)
    let deadlift = html.find("<td>Deadlift</td>").unwrap();
    let squats = html.find("<td>Squats</td>").unwrap();
    assert!(deadlift < squats);
}

#[tokio::test]
async fn test_show_history_renders_previous_result() {
    let app = create_recommender_router(test_state());

    let first = post(&app, &selection("Loss", "Vegan", "Lunch", "Intermediate", "Normal"), None).await;
    let cookie = session_cookie(&first);

    let second = post(
        &app,
        &selection("Gain", "Balanced", "Dinner", "Beginner", "Normal"),
        Some(&cookie),
    )
    .await;
    // A known session gets no new cookie
    assert!(second.headers().get(header::SET_COOKIE).is_none());
    assert!(body_text(second).await.contains("<td>Steak</td>"));

    let history = post(&app, "action=show_history", Some(&cookie)).await;
    let html = body_text(history).await;
    assert!(html.contains("<td>Tofu Bowl</td>"));
    assert!(!html.contains("<td>Steak</td>"));
    assert!(!html.contains(r#"<select name="goal""#));
}

#[tokio::test]
async fn test_show_history_without_previous_is_empty() {
    let app = create_recommender_router(test_state());
    let first = post(&app, &selection("Loss", "Vegan", "Lunch", "Beginner", "Normal"), None).await;
    let cookie = session_cookie(&first);

    let html = body_text(post(&app, "action=show_history", Some(&cookie)).await).await;
    assert!(!html.contains("Recommended Meals"));
    assert!(html.contains("show_form"));
}

#[tokio::test]
async fn test_show_form_returns_to_form() {
    let app = create_recommender_router(test_state());
    let html = body_text(post(&app, "action=show_form", None).await).await;

    assert!(html.contains(r#"<select name="goal" required>"#));
    assert!(!html.contains("show_history"));
}

#[tokio::test]
async fn test_unknown_category_is_rejected() {
    let app = create_recommender_router(test_state());
    let response = post(&app, &selection("Bulk", "Vegan", "Lunch", "Beginner", "Normal"), None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_text(response).await;
    assert!(html.contains("Invalid input. Please check your values."));
    assert!(html.contains("Unknown goal &#x27;Bulk&#x27;") || html.contains("Unknown goal 'Bulk'"));
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let app = create_recommender_router(test_state());
    let response = post(&app, "goal=Loss&diet_type=Vegan", None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Missing field"));
}

#[test]
fn test_load_state_from_dataset_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "Goal,Diet_Type,Meal_Type,Food_Item,Category,Calories (kcal),Protein (g),Carbohydrates (g),Fat (g),Exercise,Calories Burned,Duration,Exercise Intensity,Heart Rate"
    )
    .unwrap();
    writeln!(file, "Loss,Vegan,Lunch,Tofu Bowl,Main,0.2,0.4,0.1,0.05,Cycling,320,45,5,0.6").unwrap();

    let config = ServerConfig {
        dataset_path: file.path().to_path_buf(),
        ..ServerConfig::default()
    };
    let state = load_recommender_state(&config).unwrap();
    assert_eq!(state.orchestrator.dataset().len(), 1);
}

#[test]
fn test_load_state_missing_dataset_fails() {
    let config = ServerConfig {
        dataset_path: "does/not/exist.csv".into(),
        ..ServerConfig::default()
    };
    let err = load_recommender_state(&config).err().unwrap();
    assert!(err.to_string().contains("Failed to load dataset"));
}
