use crate::dashboards::SupplyChainDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SupplyChainDashboard />
    }
}
