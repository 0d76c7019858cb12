use crate::dashboards::d402_supply_chain::api;
use crate::dashboards::d402_supply_chain::api::selection_to_regions;
use crate::shared::components::stat_card::StatCard;
use crate::shared::export::download_csv;
use crate::shared::icons::icon;
use contracts::dashboards::d402_supply_chain::{
    SupplyChainDashboardResponse, DASHBOARD_TITLE, EXPORT_FILE_NAME,
};
use contracts::enums::Region;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::charts::{BoxPlot, LineChart};
use super::data_table::DataTable;
use super::region_filter::{all_region_codes, RegionFilter};

/// (icon, label before the first response) for each metric card
const METRIC_CARDS: [(&str, &str); 3] = [
    ("clock", "Avg Delivery Time"),
    ("award", "Avg Vendor Performance"),
    ("alert-triangle", "Avg Defect Rate"),
];

/// Supply Chain Analytics dashboard component
#[component]
pub fn SupplyChainDashboard() -> impl IntoView {
    let sidebar_open = RwSignal::new(true);
    let selected = RwSignal::new(all_region_codes());
    let available = RwSignal::new(Region::all());

    let data = RwSignal::new(None::<SupplyChainDashboardResponse>);
    let loading = RwSignal::new(false);
    let exporting = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);

    // Only the latest request may update the view
    let request_seq = StoredValue::new(0u64);

    // Load region options on mount
    spawn_local(async move {
        match api::get_regions().await {
            Ok(regions) => available.set(regions.available),
            Err(e) => log::error!("Failed to load D402 regions: {}", e),
        }
    });

    // Reload when the selection changes
    Effect::new(move |_| {
        let regions = selection_to_regions(&selected.get());
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);
        loading.set(true);
        error_msg.set(None);

        spawn_local(async move {
            let result = api::get_dashboard(&regions).await;
            if request_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(response) => data.set(Some(response)),
                Err(e) => {
                    log::error!("Failed to load D402 dashboard: {}", e);
                    error_msg.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    let on_download = move |_| {
        let regions = selection_to_regions(&selected.get_untracked());
        exporting.set(true);
        spawn_local(async move {
            let result = api::export_csv(&regions)
                .await
                .and_then(|csv| download_csv(&csv, EXPORT_FILE_NAME));
            if let Err(e) = result {
                log::error!("D402 export failed: {}", e);
                error_msg.set(Some(e));
            }
            exporting.set(false);
        });
    };

    let title = move || {
        data.get()
            .map(|d| d.title)
            .unwrap_or_else(|| DASHBOARD_TITLE.to_string())
    };

    let metric = move |index: usize| {
        Signal::derive(move || {
            data.get()
                .and_then(|d| d.metrics.get(index).cloned())
        })
    };

    view! {
        <div id="d402_supply_chain--dashboard" class="d402-dashboard">
            <aside class=move || if sidebar_open.get() { "d402-sidebar" } else { "d402-sidebar d402-sidebar--collapsed" }>
                <div class="d402-sidebar__header">
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| sidebar_open.update(|open| *open = !*open)
                    >
                        {move || if sidebar_open.get() { icon("chevron-left") } else { icon("filter") }}
                    </Button>
                    <Show when=move || sidebar_open.get()>
                        <span class="d402-sidebar__title">"Filters"</span>
                    </Show>
                </div>
                <Show when=move || sidebar_open.get()>
                    <RegionFilter selected=selected options=available />
                </Show>
            </aside>

            <main class="d402-main">
                <div class="page__header">
                    <h2 class="page__title">{title}</h2>
                </div>

                {move || error_msg.get().map(|msg| view! {
                    <div class="alert alert--error">
                        <strong>"Error: "</strong>
                        {msg}
                    </div>
                })}

                {move || (loading.get() && data.get().is_none()).then(|| view! {
                    <div class="d402-loading">"Loading data..."</div>
                })}

                <div class="d402-metrics">
                    {METRIC_CARDS.into_iter().enumerate().map(|(i, (icon_name, label))| view! {
                        <StatCard
                            icon_name=icon_name.to_string()
                            fallback_label=label.to_string()
                            metric=metric(i)
                        />
                    }).collect_view()}
                </div>

                <div class="d402-charts">
                    {move || data.get().map(|d| view! {
                        <LineChart spec=d.delivery_trend />
                        <BoxPlot spec=d.regional_box />
                    })}
                </div>

                <section class="d402-section">
                    <h3 class="d402-section__title">"Detailed Data View"</h3>
                    {move || data.get().map(|d| view! { <DataTable page=d.table /> })}
                </section>

                <div class="d402-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_download
                        disabled=Signal::derive(move || exporting.get())
                    >
                        {icon("download")}
                        {move || if exporting.get() { " Preparing..." } else { " Download Data" }}
                    </Button>
                </div>
            </main>
        </div>
    }
}
