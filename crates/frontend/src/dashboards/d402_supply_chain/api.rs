use crate::shared::api_utils::api_url;
use contracts::dashboards::d402_supply_chain::{
    RegionsResponse, SupplyChainDashboardResponse, SupplyChainRequest,
};
use contracts::enums::Region;
use gloo_net::http::Request;
use std::collections::HashSet;

const API_BASE: &str = "/api/d402";

/// Selected region codes in the fixed region order. Unknown codes are dropped.
pub fn selection_to_regions(selected: &HashSet<String>) -> Vec<Region> {
    Region::ALL
        .into_iter()
        .filter(|r| selected.contains(r.code()))
        .collect()
}

/// Query string for dashboard/export requests; always explicit so that
/// an empty selection reaches the backend as "no regions".
pub fn regions_query(regions: &[Region]) -> String {
    let joined = SupplyChainRequest::for_regions(regions)
        .regions
        .unwrap_or_default();
    format!("regions={}", urlencoding::encode(&joined))
}

async fn get_text(url: &str) -> Result<String, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(format!("HTTP error {}: {}", response.status(), body));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

/// Список регионов
pub async fn get_regions() -> Result<RegionsResponse, String> {
    let text = get_text(&api_url(&format!("{}/regions", API_BASE))).await?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}

/// Данные дашборда для выбранных регионов
pub async fn get_dashboard(regions: &[Region]) -> Result<SupplyChainDashboardResponse, String> {
    let url = api_url(&format!("{}/dashboard?{}", API_BASE, regions_query(regions)));
    let text = get_text(&url).await?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}

/// CSV with every filtered row (not limited by the table cap)
pub async fn export_csv(regions: &[Region]) -> Result<String, String> {
    let url = api_url(&format!("{}/export?{}", API_BASE, regions_query(regions)));
    get_text(&url).await
}
