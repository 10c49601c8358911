//! Contact HTTP Routes
//!
//! `GET /`, `GET /contact`, `POST /contact`. The handler's tagged outcome
//! is turned into a response here: redirect, re-rendered form, or 500.

use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};

use super::pages::{contact_page, error_page, home_page, FormView};
use crate::contact::{ContactError, FormHandler, FormOutcome, RawSubmission};
use crate::observability::Logger;

/// Shared contact state
pub struct ContactState {
    pub handler: FormHandler,
}

impl ContactState {
    pub fn new(handler: FormHandler) -> Self {
        Self { handler }
    }
}

/// Contact routes with shared state
pub fn contact_routes(state: Arc<ContactState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/contact", get(contact_form_handler).post(submit_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// Landing page
async fn home_handler() -> Html<String> {
    Html(home_page())
}

/// Empty contact form
async fn contact_form_handler(State(state): State<Arc<ContactState>>) -> Html<String> {
    Html(contact_page(&state.handler.config(), &FormView::default()))
}

/// Form submission
async fn submit_handler(
    State(state): State<Arc<ContactState>>,
    Form(raw): Form<RawSubmission>,
) -> Response {
    let worker_state = Arc::clone(&state);
    let worker_raw = raw.clone();
    let outcome = tokio::task::spawn_blocking(move || worker_state.handler.handle(&worker_raw))
        .await
        .unwrap_or_else(|e| FormOutcome::Fatal(ContactError::Worker(e.to_string())));

    match outcome {
        FormOutcome::Redirect(path) => Redirect::to(&path).into_response(),
        FormOutcome::ValidationFailure(issues) => {
            let view = FormView {
                values: Some(&raw),
                issues: &issues,
            };
            Html(contact_page(&state.handler.config(), &view)).into_response()
        }
        FormOutcome::Fatal(e) => {
            let reason = e.to_string();
            Logger::error("SUBMISSION_ERROR_RESPONSE", &[("error", reason.as_str())]);
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Html(error_page())).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::FormConfig;
    use crate::store::InMemoryMessageStore;

    #[test]
    fn test_contact_state_creation() {
        let handler = FormHandler::new(FormConfig::default(), Arc::new(InMemoryMessageStore::new()));
        let state = ContactState::new(handler);
        assert_eq!(state.handler.config(), FormConfig::default());
    }
}
