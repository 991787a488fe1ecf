//! HTTP routes.
//!
//! A single page at `/`: `GET` lists the whole table ranked, `POST` applies
//! the submitted filters first. Each request reloads the dataset through the
//! orchestrator; handlers share nothing mutable.

use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use pipeline::{FilterCriteria, RankedMovie};
use serde_json::json;
use tera::Tera;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::ServerConfig;
use crate::error::Result;
use crate::form::MovieFilterForm;
use crate::orchestrator::RankingOrchestrator;
use crate::views::{IndexPage, build_templates};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    orchestrator: RankingOrchestrator,
    templates: Arc<Tera>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        Ok(Self {
            orchestrator: RankingOrchestrator::new(config.dataset_path.clone()),
            templates: build_templates()?,
        })
    }
}

/// Build the router for the movie page.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler).post(filter_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// --- Handlers ---

async fn index_handler(State(state): State<AppState>) -> Response {
    let form = MovieFilterForm::default();
    match state.orchestrator.rank(FilterCriteria::new()).await {
        Ok(ranked) => render_results(&state.templates, &ranked, &form),
        Err(err) => internal_error(err),
    }
}

async fn filter_handler(
    State(state): State<AppState>,
    Form(form): Form<MovieFilterForm>,
) -> Response {
    info!(
        "Received filters: min_rating={:?}, max_rating={:?}, genre1={:?}, genre2={:?}",
        form.min_rating, form.max_rating, form.genre1, form.genre2
    );

    let criteria = match form.to_criteria() {
        Ok(criteria) => criteria,
        Err(err) => {
            warn!("Rejected filter form: {}", err);
            let page = IndexPage::invalid(err.to_string(), &form);
            return render_page(&state.templates, &page, StatusCode::UNPROCESSABLE_ENTITY);
        }
    };

    match state.orchestrator.rank(criteria).await {
        Ok(ranked) => {
            info!("Filtered movies count: {}", ranked.len());
            render_results(&state.templates, &ranked, &form)
        }
        Err(err) => internal_error(err),
    }
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

// --- Helpers ---

fn render_results(tera: &Tera, ranked: &[RankedMovie], form: &MovieFilterForm) -> Response {
    render_page(tera, &IndexPage::results(ranked, form), StatusCode::OK)
}

fn render_page(tera: &Tera, page: &IndexPage, status: StatusCode) -> Response {
    match page.render(tera) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            error!("Template error: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template error: {}", err),
            )
                .into_response()
        }
    }
}

fn internal_error(err: anyhow::Error) -> Response {
    error!("Ranking failed: {:#}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
        .into_response()
}
