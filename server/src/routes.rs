use std::path::PathBuf;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};

/// Client-side routes served with the page shell.
pub const SHELL_ROUTES: [&str; 2] = ["/", "/coloring"];

#[derive(Clone)]
pub struct AppState {
    pub index_file: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteKind {
    Shell,
    /// A file request the static service could not satisfy.
    Asset,
    Redirect,
}

pub fn classify_path(path: &str) -> RouteKind {
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };
    if SHELL_ROUTES.contains(&normalized) {
        return RouteKind::Shell;
    }
    let last_segment = normalized.rsplit('/').next().unwrap_or_default();
    if normalized.starts_with("/pkg/") || last_segment.contains('.') {
        RouteKind::Asset
    } else {
        RouteKind::Redirect
    }
}

pub async fn shell_handler(State(state): State<AppState>) -> Response {
    match tokio::fs::read_to_string(&state.index_file).await {
        Ok(contents) => Html(contents).into_response(),
        Err(err) => {
            log::error!("failed to read {}: {err}", state.index_file.display());
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Requests the static service found no file for.
pub async fn unmatched_handler(state: State<AppState>, uri: Uri) -> Response {
    match classify_path(uri.path()) {
        RouteKind::Shell => shell_handler(state).await,
        RouteKind::Asset => {
            log::debug!("missing asset {}", uri.path());
            StatusCode::NOT_FOUND.into_response()
        }
        RouteKind::Redirect => {
            log::debug!("redirecting {} to /", uri.path());
            Redirect::to("/").into_response()
        }
    }
}
