//! Submission endpoint: validate the field map, serialize it as a CSV
//! record, and write it to the object store.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{FromRequest, Request, State},
    http::{header, StatusCode},
    Form, Json,
};
use chrono::Utc;
use serde_json::Value;

use crate::error::HttpAppError;
use crate::state::AppState;
use formdrop_core::{AppError, CsvRecord, Submission};
use formdrop_storage::response_key;

/// Raw field map extracted from the request body.
///
/// `POST /submit` accepts either a JSON object or a URL-encoded form; the
/// extractor branches on the Content-Type header. An unparseable body
/// validates as an empty field map and takes the missing-fields path.
pub struct SubmitPayload(pub HashMap<String, String>);

/// Coerce a JSON value to the string form validation sees. Strings pass
/// through, scalars stringify, null and containers validate as absent.
fn coerce_value(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

impl<S> FromRequest<S> for SubmitPayload
where
    S: Send + Sync,
{
    type Rejection = HttpAppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim().to_ascii_lowercase().starts_with("application/json"))
            .unwrap_or(false);

        let fields = if is_json {
            match Json::<HashMap<String, Value>>::from_request(req, state).await {
                Ok(Json(raw)) => raw
                    .into_iter()
                    .map(|(k, v)| (k, coerce_value(v)))
                    .collect(),
                Err(rejection) => {
                    tracing::debug!(error = %rejection, "Unparseable JSON body, validating as empty");
                    HashMap::new()
                }
            }
        } else {
            match Form::<HashMap<String, String>>::from_request(req, state).await {
                Ok(Form(fields)) => fields,
                Err(rejection) => {
                    tracing::debug!(error = %rejection, "Unparseable form body, validating as empty");
                    HashMap::new()
                }
            }
        };

        Ok(SubmitPayload(fields))
    }
}

/// Handle a form submission.
///
/// Validation failures never reach the storage layer; storage failures are
/// surfaced immediately with no retry, logged in full, and answered with the
/// generic 500 body.
#[tracing::instrument(skip(state, payload), fields(operation = "submit"))]
pub async fn submit(
    State(state): State<Arc<AppState>>,
    payload: SubmitPayload,
) -> Result<(StatusCode, &'static str), HttpAppError> {
    let SubmitPayload(fields) = payload;

    let submission = Submission::from_fields(&fields)?;

    let now = Utc::now();
    let record = CsvRecord::new(&submission, now);
    let key = response_key(state.config.response_key_prefix(), now);

    state
        .storage
        .put(&key, record.to_bytes(), "text/csv")
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;

    tracing::info!(key = %key, "Submission stored");

    Ok((StatusCode::OK, "Saved"))
}
