//! HTTP request handlers for the Overtime Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use chrono::Local;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{classify, minimum_clock_out_time, overtime_start_time, shift_countdown, summarize};
use crate::error::EngineError;
use crate::export::{export_period_csv, file_name};
use crate::models::{ClockTime, EntryDraft, PayslipMonth};
use crate::store::AttendanceRecord;

use super::request::{EntryRequest, SummarizeRequest};
use super::response::{ApiError, ApiErrorResponse, ClassifyResponse, ClearResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/classify", post(classify_handler))
        .route("/summarize", post(summarize_handler))
        .route(
            "/entries",
            get(list_entries_handler)
                .post(create_entry_handler)
                .delete(clear_entries_handler),
        )
        .route("/entries/import", post(import_handler))
        .route("/entries/:id", delete(delete_entry_handler))
        .route("/periods/:month", get(period_handler))
        .route("/periods/:month/export", get(export_handler))
        .route("/countdown/:clock_in", get(countdown_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn engine_error_response(correlation_id: Uuid, error: EngineError) -> Response {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    ApiErrorResponse::from(error).into_response()
}

/// Unwraps a JSON body, mapping extractor rejections to API errors.
fn parse_json<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::bad_request(error))
}

/// Handler for POST /classify.
///
/// Classifies a single entry without storing it, and previews the clock-out
/// thresholds when the clock-in is known.
async fn classify_handler(
    State(state): State<AppState>,
    payload: Result<Json<EntryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing classify request");

    let request = match parse_json(correlation_id, payload) {
        Ok(req) => req,
        Err(err) => return err.into_response(),
    };

    let policy = state.config().policy();
    let clock_in = request.clock_in;
    let entry = match EntryDraft::try_from(request) {
        Ok(draft) => draft.into_entry(),
        Err(err) => return engine_error_response(correlation_id, err),
    };
    let result = classify(&entry, policy);

    info!(
        correlation_id = %correlation_id,
        date = %entry.date,
        overtime_type = ?result.as_ref().map(|r| r.overtime_type),
        "Classification completed"
    );

    json_response(
        StatusCode::OK,
        ClassifyResponse {
            result,
            minimum_clock_out: clock_in.map(|t| minimum_clock_out_time(t, &policy.weekday)),
            overtime_start: clock_in.map(|t| overtime_start_time(t, &policy.weekday)),
        },
    )
}

/// Handler for POST /summarize.
///
/// Aggregates caller-supplied classified entries over a payslip period.
async fn summarize_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summarize request");

    let request = match parse_json(correlation_id, payload) {
        Ok(req) => req,
        Err(err) => return err.into_response(),
    };

    let period = summarize(&request.entries, request.month, state.config().policy());
    info!(
        correlation_id = %correlation_id,
        month = %period.month,
        count = period.count,
        total_pay = %period.total_pay,
        "Summary completed"
    );
    json_response(StatusCode::OK, period)
}

/// Handler for GET /entries.
async fn list_entries_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.ledger().entries() {
        Ok(entries) => json_response(StatusCode::OK, entries),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /entries.
///
/// Classifies and stores an entry; both clock times are required.
async fn create_entry_handler(
    State(state): State<AppState>,
    payload: Result<Json<EntryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create entry request");

    let request = match parse_json(correlation_id, payload) {
        Ok(req) => req,
        Err(err) => return err.into_response(),
    };

    let draft = match EntryDraft::try_from(request) {
        Ok(draft) => draft,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    match state.ledger().add_entry(draft) {
        Ok(entry) => json_response(StatusCode::CREATED, entry),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for DELETE /entries.
async fn clear_entries_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.ledger().clear() {
        Ok(deleted) => json_response(StatusCode::OK, ClearResponse { deleted }),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for DELETE /entries/:id.
async fn delete_entry_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();

    let Ok(id) = id.parse::<Uuid>() else {
        warn!(correlation_id = %correlation_id, id = %id, "Invalid entry id");
        return ApiErrorResponse::bad_request(ApiError::validation_error(format!("Invalid entry id '{}'", id)))
            .into_response();
    };

    match state.ledger().delete_entry(id) {
        Ok(entry) => json_response(StatusCode::OK, entry),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /entries/import.
///
/// Accepts the JSON array produced by the attendance scraper.
async fn import_handler(
    State(state): State<AppState>,
    payload: Result<Json<Vec<AttendanceRecord>>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing import request");

    let records = match parse_json(correlation_id, payload) {
        Ok(records) => records,
        Err(err) => return err.into_response(),
    };

    match state.ledger().import_attendance(records) {
        Ok(report) => json_response(StatusCode::OK, report),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /periods/:month.
async fn period_handler(State(state): State<AppState>, Path(month): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    let period = month
        .parse::<PayslipMonth>()
        .and_then(|month| state.ledger().summarize(month));

    match period {
        Ok(period) => json_response(StatusCode::OK, period),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /periods/:month/export.
///
/// Returns the period's entries as a CSV attachment.
async fn export_handler(State(state): State<AppState>, Path(month): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    let csv = month.parse::<PayslipMonth>().and_then(|month| {
        let entries = state.ledger().entries()?;
        export_period_csv(&entries, month, state.config().policy()).map(|csv| (month, csv))
    });

    match csv {
        Ok((month, csv)) => {
            info!(correlation_id = %correlation_id, month = %month, "Exported period");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", file_name(month)),
                    ),
                ],
                csv,
            )
                .into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /countdown/:clock_in.
///
/// Counts down against the server's local wall clock.
async fn countdown_handler(State(state): State<AppState>, Path(clock_in): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    match clock_in.parse::<ClockTime>() {
        Ok(clock_in) => {
            let now = Local::now().naive_local();
            json_response(
                StatusCode::OK,
                shift_countdown(clock_in, now, &state.config().policy().weekday),
            )
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}
