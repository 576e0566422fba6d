//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::calendar::{CalendarError, holidays_for_year};
use crate::domain::{InputError, Province, Query as CheckQuery};
use crate::holidays_api::HolidayApiError;
use crate::restriction::OracleError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/check", get(check))
        .route("/holidays/:year", get(holidays))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Check whether a vehicle may circulate.
async fn check(
    State(state): State<AppState>,
    Query(req): Query<CheckRequest>,
) -> Result<Json<CheckResponse>, AppError> {
    let query = CheckQuery::parse(&req.plate, &req.date, &req.time)?;
    let engine = state.engine(req.online)?;
    let verdict = engine.evaluate(&query).await?;

    Ok(Json(CheckResponse::from_verdict(&query, &verdict)))
}

/// List a year's holidays.
async fn holidays(
    Path(year): Path<i32>,
    Query(req): Query<HolidaysRequest>,
) -> Result<Json<HolidaysResponse>, AppError> {
    let province = match req.province.as_deref() {
        Some(p) => Province::parse_selection(p).map_err(InputError::from)?,
        None => Some(Province::Pichincha),
    };
    let calendar = holidays_for_year(year, province)?;

    Ok(Json(HolidaysResponse::from_calendar(&calendar)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    BadGateway { message: String },
    GatewayTimeout { message: String },
}

impl From<InputError> for AppError {
    fn from(e: InputError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<CalendarError> for AppError {
    fn from(e: CalendarError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<HolidayApiError> for AppError {
    fn from(e: HolidayApiError) -> Self {
        match e {
            HolidayApiError::Timeout { .. } => AppError::GatewayTimeout {
                message: e.to_string(),
            },
            _ => AppError::BadGateway {
                message: e.to_string(),
            },
        }
    }
}

impl From<OracleError> for AppError {
    fn from(e: OracleError) -> Self {
        match e {
            OracleError::Calendar(e) => e.into(),
            OracleError::Api(e) => e.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::GatewayTimeout { message } => (StatusCode::GATEWAY_TIMEOUT, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
