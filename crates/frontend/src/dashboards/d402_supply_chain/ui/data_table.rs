use contracts::dashboards::d402_supply_chain::{SupplyChainRecord, TablePage};
use leptos::prelude::*;

/// Подпись под таблицей: сколько строк показано из скольких
pub fn table_caption(page: &TablePage) -> String {
    if page.capped {
        format!(
            "Showing first {} of {} rows (download the CSV for all rows)",
            page.shown_rows, page.total_rows
        )
    } else {
        format!("Showing {} of {} rows", page.shown_rows, page.total_rows)
    }
}

fn row_cells(record: &SupplyChainRecord) -> [String; 5] {
    [
        record.date.format("%Y-%m-%d").to_string(),
        format!("{:.2}", record.delivery_time),
        format!("{:.2}", record.vendor_performance),
        format!("{:.2}", record.defect_rate),
        record.region.code().to_string(),
    ]
}

#[component]
pub fn DataTable(page: TablePage) -> impl IntoView {
    let caption = table_caption(&page);
    let rows = page.rows;

    view! {
        <div class="data-table">
            <div class="data-table__scroll">
                <table class="data-table__table">
                    <thead>
                        <tr>
                            {SupplyChainRecord::COLUMNS.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {rows.iter().map(|record| {
                            view! {
                                <tr>
                                    {row_cells(record).into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
            <div class="data-table__caption">{caption}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::enums::Region;

    fn page(shown: usize, total: usize, capped: bool) -> TablePage {
        TablePage {
            rows: Vec::new(),
            total_rows: total,
            shown_rows: shown,
            row_cap: 1000,
            capped,
        }
    }

    #[test]
    fn test_caption() {
        assert_eq!(table_caption(&page(182, 182, false)), "Showing 182 of 182 rows");
        assert_eq!(table_caption(&page(0, 0, false)), "Showing 0 of 0 rows");
        assert!(table_caption(&page(1000, 1500, true)).starts_with("Showing first 1000 of 1500"));
    }

    #[test]
    fn test_row_cells() {
        let record = SupplyChainRecord {
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            delivery_time: 23.4567,
            vendor_performance: 80.0,
            defect_rate: 1.2349,
            region: Region::East,
        };
        assert_eq!(
            row_cells(&record),
            ["2024-03-05", "23.46", "80.00", "1.23", "East"].map(String::from)
        );
    }
}
