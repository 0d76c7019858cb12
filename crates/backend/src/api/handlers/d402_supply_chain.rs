use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use contracts::dashboards::d402_supply_chain::{
    CacheInvalidateResponse, RegionsResponse, SupplyChainDashboardResponse, SupplyChainRequest,
    EXPORT_FILE_NAME,
};

use crate::dashboards::d402_supply_chain::service;
use crate::dashboards::d402_supply_chain::{RegionSelection, SupplyChainError};

type ApiError = (StatusCode, String);

fn to_api_error(context: &str, e: SupplyChainError) -> ApiError {
    tracing::error!("D402 Dashboard: {}: {}", context, e);
    (e.status_code(), e.to_string())
}

fn parse_selection(request: &SupplyChainRequest) -> Result<RegionSelection, ApiError> {
    RegionSelection::parse(request.regions.as_deref())
        .map_err(|e| to_api_error("Invalid region selection", e))
}

/// GET /api/d402/regions
pub async fn get_regions() -> Result<Json<RegionsResponse>, ApiError> {
    let regions = service::instance()
        .regions()
        .await
        .map_err(|e| to_api_error("Failed to list regions", e))?;
    Ok(Json(regions))
}

/// GET /api/d402/dashboard?regions=North,South
pub async fn get_dashboard(
    Query(request): Query<SupplyChainRequest>,
) -> Result<Json<SupplyChainDashboardResponse>, ApiError> {
    let selection = parse_selection(&request)?;

    let response = service::instance()
        .dashboard(&selection)
        .await
        .map_err(|e| to_api_error("Failed to build dashboard", e))?;

    tracing::info!(
        "D402 Dashboard: {} of {} rows for regions {:?}",
        response.table.shown_rows,
        response.table.total_rows,
        response.selected_regions
    );
    Ok(Json(response))
}

/// GET /api/d402/export?regions=North,South
pub async fn export_csv(
    Query(request): Query<SupplyChainRequest>,
) -> Result<Response, ApiError> {
    let selection = parse_selection(&request)?;

    let csv = service::instance()
        .export(&selection)
        .await
        .map_err(|e| to_api_error("Failed to export CSV", e))?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
        ),
    ];
    Ok((headers, csv).into_response())
}

/// POST /api/d402/cache/invalidate
pub async fn invalidate_cache() -> Json<CacheInvalidateResponse> {
    let dropped = service::instance().invalidate().await;
    Json(CacheInvalidateResponse { dropped })
}
