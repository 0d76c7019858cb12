use contracts::dashboards::d402_supply_chain::{
    RegionsResponse, SupplyChainDashboardResponse, SupplyChainRecord, DASHBOARD_TITLE,
};
use contracts::enums::Region;
use once_cell::sync::OnceCell;

use super::charts::{delivery_trend, regional_box};
use super::error::SupplyChainError;
use super::export::export_csv;
use super::filter::{available_regions, filter_by_regions, RegionSelection};
use super::generator::{generate, Dataset, GenerationParams};
use super::metrics::compute_metrics;
use super::table::table_page;
use crate::shared::cache::{CachePolicy, TtlCache};
use crate::shared::config::Config;

static SERVICE: OnceCell<SupplyChainService> = OnceCell::new();

/// Owns the generation cache and renders dashboard views from it.
pub struct SupplyChainService {
    params: GenerationParams,
    cache: TtlCache<GenerationParams, Dataset>,
    row_cap: usize,
}

impl SupplyChainService {
    pub fn new(params: GenerationParams, policy: CachePolicy, row_cap: usize) -> Self {
        Self {
            params,
            cache: TtlCache::new(policy),
            row_cap,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.dataset.generation_params(),
            config.cache_policy(),
            config.display.row_cap,
        )
    }

    /// Base table, generated on first use and after expiry/invalidation.
    pub async fn dataset(&self) -> Result<Dataset, SupplyChainError> {
        self.cache
            .get_or_try_insert_with(&self.params, || generate(&self.params))
            .await
    }

    pub async fn regions(&self) -> Result<RegionsResponse, SupplyChainError> {
        let data = self.dataset().await?;
        Ok(RegionsResponse {
            all: Region::all(),
            available: available_regions(&data),
        })
    }

    pub async fn dashboard(
        &self,
        selection: &RegionSelection,
    ) -> Result<SupplyChainDashboardResponse, SupplyChainError> {
        let data = self.dataset().await?;
        Ok(build_dashboard(&data, selection, self.row_cap))
    }

    pub async fn export(&self, selection: &RegionSelection) -> Result<String, SupplyChainError> {
        let data = self.dataset().await?;
        export_csv(&filter_by_regions(&data, selection))
    }

    /// Drop the cached table; the next request regenerates it.
    pub async fn invalidate(&self) -> usize {
        let dropped = self.cache.invalidate_all().await;
        tracing::info!("D402: cache invalidated, {} entries dropped", dropped);
        dropped
    }
}

/// One render of the dashboard: a pure function of base table and selection.
pub fn build_dashboard(
    data: &[SupplyChainRecord],
    selection: &RegionSelection,
    row_cap: usize,
) -> SupplyChainDashboardResponse {
    let view = filter_by_regions(data, selection);

    SupplyChainDashboardResponse {
        title: DASHBOARD_TITLE.to_string(),
        selected_regions: selection.regions(),
        available_regions: available_regions(data),
        metrics: compute_metrics(&view),
        delivery_trend: delivery_trend(&view),
        regional_box: regional_box(&view),
        table: table_page(&view, row_cap),
    }
}

/// Install the process-wide service. Later calls are ignored.
pub fn init(config: &Config) {
    if SERVICE.set(SupplyChainService::from_config(config)).is_err() {
        tracing::warn!("D402: service already initialized");
    }
}

/// Process-wide service; built from default configuration if `init` was not called.
pub fn instance() -> &'static SupplyChainService {
    SERVICE.get_or_init(|| SupplyChainService::from_config(&Config::default()))
}
