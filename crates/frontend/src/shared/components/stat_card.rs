use crate::shared::icons::icon;
use contracts::dashboards::d402_supply_chain::MetricValue;
use leptos::prelude::*;

/// Карточка одной метрики. `None` = данные ещё не загружены.
#[component]
pub fn StatCard(
    /// Icon name from the icon() helper
    icon_name: String,
    /// Label shown until the metric arrives
    fallback_label: String,
    #[prop(into)] metric: Signal<Option<MetricValue>>,
) -> impl IntoView {
    let label = move || {
        metric
            .get()
            .map(|m| m.label)
            .unwrap_or_else(|| fallback_label.clone())
    };

    let formatted = move || match metric.get() {
        Some(m) => m.display(),
        None => "\u{2014}".to_string(),
    };

    let status_class = move || match metric.get() {
        Some(m) if m.value.is_none() => "stat-card stat-card--warning",
        _ => "stat-card",
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}
