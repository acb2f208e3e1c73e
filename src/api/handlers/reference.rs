//! Reference data endpoints: examples, soil types, TBM types, method info

use axum::Json;
use serde::Serialize;

use crate::api::envelope::ApiErrorResponse;
use crate::catalog::{self, CalculationInfo, CategoryOption, ExampleScenario};

#[derive(Debug, Serialize)]
pub struct SoilTypesResponse {
    pub soil_types: Vec<CategoryOption>,
}

#[derive(Debug, Serialize)]
pub struct TbmTypesResponse {
    pub tbm_types: Vec<CategoryOption>,
}

/// GET /api/v1/examples
///
/// A bare JSON array of scenarios.
pub async fn get_examples() -> Json<Vec<ExampleScenario>> {
    Json(catalog::example_scenarios())
}

/// GET /api/v1/soil-types
pub async fn get_soil_types() -> Json<SoilTypesResponse> {
    Json(SoilTypesResponse {
        soil_types: catalog::soil_types(),
    })
}

/// GET /api/v1/tbm-types
pub async fn get_tbm_types() -> Json<TbmTypesResponse> {
    Json(TbmTypesResponse {
        tbm_types: catalog::tbm_types(),
    })
}

/// GET /api/v1/calculation-info
pub async fn get_calculation_info() -> Json<CalculationInfo> {
    Json(catalog::calculation_info())
}

/// Fallback for unmatched `/api/v1/*` paths
pub async fn api_not_found(uri: axum::http::Uri) -> axum::response::Response {
    ApiErrorResponse::not_found(format!("No API endpoint at {}", uri.path()))
}
