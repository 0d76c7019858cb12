use contracts::dashboards::d402_supply_chain::TablePage;

use super::filter::FilteredView;

pub const DEFAULT_ROW_CAP: usize = 1000;

/// First `row_cap` rows of the view for display. The cap never touches export.
pub fn table_page(view: &FilteredView<'_>, row_cap: usize) -> TablePage {
    let rows: Vec<_> = view.iter().take(row_cap).cloned().collect();
    TablePage {
        total_rows: view.len(),
        shown_rows: rows.len(),
        row_cap,
        capped: view.len() > row_cap,
        rows,
    }
}
