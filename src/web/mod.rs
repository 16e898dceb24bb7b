//! HTTP front end for the survey.
//!
//! Routes:
//! - `GET /` redirects to `/survey`
//! - `GET /survey` renders the form
//! - `POST /results` classifies the submission and renders the result page
//! - `GET /static/style.css` serves the embedded stylesheet
//! - `GET /health` for load balancer probes

pub mod form;
pub mod templates;

use crate::core::survey::SurveyService;
use crate::utils::error::{AppError, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

use form::SurveyForm;

pub fn router(service: SurveyService) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/survey", get(survey_handler))
        .route("/results", post(results_handler))
        .route("/static/style.css", get(css_handler))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Bind and serve until Ctrl-C.
pub async fn start_server(addr: SocketAddr, app: Router) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    tracing::info!("🚀 Server running on {}", bound_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::ServerError {
            message: format!("HTTP server on {} stopped unexpectedly: {}", bound_addr, e),
        })?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

// -- Handlers --

async fn index_handler() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/survey")])
}

async fn survey_handler() -> Html<&'static str> {
    Html(templates::render_survey())
}

async fn results_handler(
    State(service): State<SurveyService>,
    headers: HeaderMap,
    body: Bytes,
) -> Html<String> {
    let form = SurveyForm::from_request_parts(&headers, &body);
    let result = service.evaluate(form.into_input()).await;

    tracing::info!(
        "Survey result: {} ({})",
        result.profile,
        if result.advice.is_fallback() {
            "local advice"
        } else {
            "AI advice"
        }
    );

    Html(templates::render_results(&result.view()))
}

async fn css_handler() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        include_str!("../../static/style.css"),
    )
}

async fn health_check() -> &'static str {
    "ok"
}
