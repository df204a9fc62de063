use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;
use axum::extract::{Path, RawQuery, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};
use clap::Parser;
use comply_core::overview::render_overview_markdown;
use comply_core::requests::model::Priority;
use comply_core::requests::render::render_requests_markdown;
use comply_core::session::Session;
use comply_core::vault::filter::SortKey;
use comply_core::vault::render::{
    render_detail_markdown, render_not_found_markdown, render_vault_markdown,
};
use serde::Deserialize;

type SharedSession = Arc<Mutex<Session>>;

#[derive(Debug, Parser)]
#[command(name = "comply-service")]
#[command(about = "Local HTTP front end for the SentryLink Comply evidence vault")]
struct Args {
    #[arg(long, default_value = "127.0.0.1:4017")]
    bind: SocketAddr,
}

/// Form fields of the new-request dialog. Every field is optional at the
/// HTTP layer; the core workflow decides what is actually required and
/// reports the misses in one notice.
#[derive(Debug, Deserialize)]
struct NewRequestForm {
    #[serde(default)]
    title: String,
    #[serde(default)]
    evidence_id: String,
    #[serde(default)]
    priority: String,
    #[serde(default)]
    requested_by: String,
    #[serde(default)]
    due_date: String,
    #[serde(default)]
    description: String,
}

fn app(state: SharedSession) -> Router {
    Router::new()
        .route("/", get(landing))
        .route("/vault", get(vault_list))
        .route("/vault/:id", get(vault_detail))
        .route("/requests", get(requests_list).post(requests_create))
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let state: SharedSession = Arc::new(Mutex::new(Session::new()));
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    tracing::info!(bind = %args.bind, "evidence vault service listening");
    axum::serve(listener, app(state)).await?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

fn markdown(status: StatusCode, body: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        body,
    )
        .into_response()
}

fn lock_session(state: &SharedSession) -> Result<MutexGuard<'_, Session>, Response> {
    state.lock().map_err(|_| {
        (StatusCode::INTERNAL_SERVER_ERROR, "session state poisoned").into_response()
    })
}

async fn landing() -> Response {
    markdown(StatusCode::OK, render_overview_markdown())
}

async fn vault_list(State(state): State<SharedSession>, RawQuery(raw): RawQuery) -> Response {
    let raw = raw.unwrap_or_default();
    let mut session = match lock_session(&state) {
        Ok(session) => session,
        Err(response) => return response,
    };
    session.apply_query(&raw);
    if let Some(sort) = sort_param(&raw) {
        session.set_sort(sort);
    }
    let visible = session.visible_evidence();
    tracing::info!(query = %raw, visible = visible.len(), "vault view");
    markdown(
        StatusCode::OK,
        render_vault_markdown(&visible, session.evidence().len()),
    )
}

/// The sort choice is view state, not filter state; it never round-trips
/// through the criteria encoding. `sort=date|title|size` is the service's
/// stand-in for the in-memory sort selector.
fn sort_param(raw: &str) -> Option<SortKey> {
    raw.split('&')
        .find_map(|pair| pair.strip_prefix("sort="))
        .and_then(SortKey::parse)
}

async fn vault_detail(State(state): State<SharedSession>, Path(id): Path<String>) -> Response {
    let session = match lock_session(&state) {
        Ok(session) => session,
        Err(response) => return response,
    };
    match session.find_evidence(&id) {
        Ok(record) => markdown(StatusCode::OK, render_detail_markdown(record)),
        Err(error) => {
            tracing::info!(%id, %error, "evidence lookup miss");
            markdown(StatusCode::NOT_FOUND, render_not_found_markdown(&id))
        }
    }
}

async fn requests_list(State(state): State<SharedSession>) -> Response {
    let session = match lock_session(&state) {
        Ok(session) => session,
        Err(response) => return response,
    };
    let visible = session.visible_requests();
    markdown(
        StatusCode::OK,
        render_requests_markdown(&visible, session.requests().len()),
    )
}

async fn requests_create(
    State(state): State<SharedSession>,
    Form(form): Form<NewRequestForm>,
) -> Response {
    let mut session = match lock_session(&state) {
        Ok(session) => session,
        Err(response) => return response,
    };
    session.open_request_form();
    if let Some(draft) = session.draft_mut() {
        draft.title = form.title;
        draft.evidence_id = form.evidence_id;
        draft.priority = Priority::parse(&form.priority).unwrap_or_default();
        draft.requested_by = form.requested_by;
        draft.due_date = form.due_date;
        draft.description = form.description;
    }
    match session.submit_request() {
        Ok(id) => {
            tracing::info!(%id, "request created");
            Redirect::to("/requests").into_response()
        }
        Err(error) => {
            tracing::warn!(%error, "request rejected");
            markdown(
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("# Request Rejected\n\n{error}\n"),
            )
        }
    }
}
