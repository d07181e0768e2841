//! Recommendation app handlers.
//!
//! A single page at `/` branches on the `action` form field:
//! - absent: parse the selections, recommend, record the result
//! - `show_form`: back to the empty form
//! - `show_history`: the result before the latest one

use axum::extract::{Form, State};
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use tracing::{debug, error, warn};
use uuid::Uuid;

use predictor::advice::tip_of_the_day;
use predictor::FormFields;

use crate::orchestrator::{fields, RecommendationRequest};
use crate::render::recommender::{home_page, snapshot, HomeView};
use crate::session::{session_cookie, session_from_headers};
use crate::state::RecommenderState;

const SHOW_FORM: &str = "show_form";
const SHOW_HISTORY: &str = "show_history";

/// GET / - the selection form
pub async fn show_home(State(state): State<RecommenderState>, headers: HeaderMap) -> Response {
    let session = resolve_session(&state, &headers);
    let html = home_page(&HomeView {
        show_form: true,
        tip: tip_of_the_day(),
        ..HomeView::default()
    });
    respond(&state, session, StatusCode::OK, html)
}

/// POST / - recommend, or navigate between the form and the history
pub async fn submit(
    State(state): State<RecommenderState>,
    headers: HeaderMap,
    Form(form): Form<FormFields>,
) -> Response {
    let session = resolve_session(&state, &headers);
    let tip = tip_of_the_day();

    let (status, html) = match form.get(fields::ACTION).map(String::as_str) {
        Some(SHOW_FORM) => (
            StatusCode::OK,
            home_page(&HomeView {
                show_form: true,
                tip,
                ..HomeView::default()
            }),
        ),
        Some(SHOW_HISTORY) => {
            let previous = state.sessions.previous(session.id);
            (
                StatusCode::OK,
                home_page(&HomeView {
                    show_form: false,
                    tip,
                    snapshot: previous.as_ref(),
                    error: None,
                }),
            )
        }
        _ => recommend(&state, session.id, &form, tip).await,
    };

    respond(&state, session, status, html)
}

async fn recommend(
    state: &RecommenderState,
    session: Uuid,
    form: &FormFields,
    tip: &str,
) -> (StatusCode, String) {
    let request = match RecommendationRequest::from_form(form) {
        Ok(request) => request,
        Err(err) => {
            debug!("Rejected recommendation form: {:?}", err);
            let html = home_page(&HomeView {
                show_form: true,
                tip,
                snapshot: None,
                error: Some(err.to_string()),
            });
            return (StatusCode::BAD_REQUEST, html);
        }
    };

    match state.orchestrator.recommend(&request).await {
        Ok(recs) => {
            let current = snapshot(&request, &recs);
            state.sessions.record(session, current.clone());
            let html = home_page(&HomeView {
                show_form: false,
                tip,
                snapshot: Some(&current),
                error: None,
            });
            (StatusCode::OK, html)
        }
        Err(err) => {
            error!("Recommendation failed: {:#}", err);
            let html = home_page(&HomeView {
                show_form: true,
                tip,
                snapshot: None,
                error: Some("Recommendations are temporarily unavailable.".to_string()),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, html)
        }
    }
}

/// The request's session, and whether it was just created
struct ResolvedSession {
    id: Uuid,
    is_new: bool,
}

fn resolve_session(state: &RecommenderState, headers: &HeaderMap) -> ResolvedSession {
    match session_from_headers(headers, &state.cookie_name) {
        Some(id) => ResolvedSession { id, is_new: false },
        None => ResolvedSession {
            id: Uuid::new_v4(),
            is_new: true,
        },
    }
}

fn respond(
    state: &RecommenderState,
    session: ResolvedSession,
    status: StatusCode,
    html: String,
) -> Response {
    let mut response = (status, Html(html)).into_response();
    if session.is_new {
        match HeaderValue::from_str(&session_cookie(&state.cookie_name, session.id)) {
            Ok(value) => {
                response.headers_mut().insert(SET_COOKIE, value);
            }
            Err(err) => warn!("Could not build session cookie: {}", err),
        }
    }
    response
}
