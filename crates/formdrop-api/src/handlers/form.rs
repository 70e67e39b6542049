//! Form page route: serves the static HTML form asset.

use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::error::HttpAppError;
use crate::state::AppState;
use formdrop_core::AppError;

/// Serve the submission form page from the configured static directory.
#[tracing::instrument(skip(state), fields(operation = "form_page"))]
pub async fn form_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, HttpAppError> {
    let path = std::path::Path::new(state.config.static_dir()).join("form.html");

    let html = tokio::fs::read_to_string(&path).await.map_err(|e| {
        AppError::Internal(format!(
            "Failed to read form asset {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(Html(html))
}
