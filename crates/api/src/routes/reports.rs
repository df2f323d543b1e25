//! Quarterly VAT report routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Datelike;
use serde::Deserialize;
use std::str::FromStr;

use super::{error_response, store_failure};
use crate::{ApiResponse, AppState, middleware::AuthUser};
use gageboek_core::period::Quarter;
use gageboek_core::report::ReportService;

/// Year bounds accepted for reports.
const MIN_YEAR: i32 = 2000;
const MAX_YEAR: i32 = 2100;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/reports/quarterly", get(get_quarterly_report))
}

/// Query parameters for the quarterly report.
#[derive(Debug, Deserialize)]
pub struct QuarterlyReportQuery {
    /// Reporting quarter (defaults to Q1).
    pub quarter: Option<String>,
    /// Reporting year (defaults to the current year).
    pub year: Option<String>,
}

/// GET /api/reports/quarterly?quarter=Q1&year=2024
///
/// Returns the BTW-grouped summary for one quarter of the caller's entries.
async fn get_quarterly_report(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<QuarterlyReportQuery>,
) -> Response {
    let quarter = match query.quarter.as_deref() {
        None => Quarter::Q1,
        Some(raw) => match Quarter::from_str(raw) {
            Ok(quarter) => quarter,
            Err(_) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    "Invalid quarter. Must be Q1, Q2, Q3, or Q4",
                );
            }
        },
    };

    let year = match query.year.as_deref() {
        None => chrono::Utc::now().year(),
        Some(raw) => match raw.parse::<i32>() {
            Ok(year) if (MIN_YEAR..=MAX_YEAR).contains(&year) => year,
            _ => return error_response(StatusCode::BAD_REQUEST, "Invalid year"),
        },
    };

    match state
        .repository
        .list_by_quarter(user.user_id(), quarter, year)
        .await
    {
        Ok(entries) => {
            let summary = ReportService::quarterly_summary(&entries, quarter, year);
            (StatusCode::OK, Json(ApiResponse::ok(summary))).into_response()
        }
        Err(e) => store_failure(e, "Failed to fetch quarterly report"),
    }
}
