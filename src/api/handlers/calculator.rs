//! Advance rate calculation endpoint

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

use crate::api::envelope::ApiErrorResponse;
use crate::estimation;
use crate::types::TbmParameters;

/// POST /api/v1/calculate - Estimate the advance rate for one parameter set
///
/// - 200: bare `AdvanceRateResult`
/// - 413: body over the configured limit
/// - 422 `INVALID_BODY`: malformed JSON, unknown enum value, missing field
/// - 422 `VALIDATION_ERROR`: range or rock-rule violations, listed per field
/// - 400 `CALCULATION_ERROR`: the engine could not produce a finite result
pub async fn calculate(payload: Result<Json<TbmParameters>, JsonRejection>) -> Response {
    let params = match payload {
        Ok(Json(params)) => params,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            warn!("Rejected oversized calculate request");
            return ApiErrorResponse::payload_too_large(rejection.body_text());
        }
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "Rejected calculate request body");
            return ApiErrorResponse::invalid_body(rejection.body_text());
        }
    };

    if let Err(e) = params.validate() {
        warn!(fields = ?e.fields(), "Parameter validation failed");
        return ApiErrorResponse::validation(&e);
    }

    match estimation::estimate(&params) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            error!(error = %e, "Advance rate calculation failed");
            ApiErrorResponse::calculation(format!("Calculation error: {e}"))
        }
    }
}
