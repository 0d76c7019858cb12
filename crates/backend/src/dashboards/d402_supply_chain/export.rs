use contracts::dashboards::d402_supply_chain::SupplyChainRecord;

use super::error::SupplyChainError;
use super::filter::FilteredView;

/// Serialize the whole filtered view to CSV.
///
/// Header row is always written, even for an empty view; no index column.
pub fn export_csv(view: &FilteredView<'_>) -> Result<String, SupplyChainError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(SupplyChainRecord::COLUMNS)?;
    for record in view.iter() {
        writer.serialize(record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| SupplyChainError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d402_supply_chain::filter::{filter_by_regions, RegionSelection};
    use crate::dashboards::d402_supply_chain::generator::{generate, GenerationParams};
    use crate::dashboards::d402_supply_chain::table::{table_page, DEFAULT_ROW_CAP};
    use chrono::NaiveDate;
    use contracts::enums::Region;

    fn seeded() -> Vec<SupplyChainRecord> {
        generate(&GenerationParams {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            seed: Some(42),
        })
        .unwrap()
        .to_vec()
    }

    fn parse(csv_text: &str) -> (Vec<String>, Vec<SupplyChainRecord>) {
        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        let headers = reader
            .headers()
            .unwrap()
            .iter()
            .map(str::to_string)
            .collect();
        let rows = reader
            .deserialize::<SupplyChainRecord>()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        (headers, rows)
    }

    #[test]
    fn test_csv_round_trip() {
        let data = seeded();
        let view = filter_by_regions(&data, &RegionSelection::of(&[Region::North, Region::East]));
        let csv_text = export_csv(&view).unwrap();

        let (headers, rows) = parse(&csv_text);
        assert_eq!(headers, SupplyChainRecord::COLUMNS);
        assert_eq!(rows.len(), view.len());
        for (parsed, original) in rows.iter().zip(view.iter()) {
            assert_eq!(parsed.date, original.date);
            assert_eq!(parsed.region, original.region);
            assert!((parsed.delivery_time - original.delivery_time).abs() < 1e-9);
            assert!((parsed.vendor_performance - original.vendor_performance).abs() < 1e-9);
            assert!((parsed.defect_rate - original.defect_rate).abs() < 1e-9);
        }
    }

    #[test]
    fn test_csv_layout() {
        let data = vec![SupplyChainRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            delivery_time: 23.5,
            vendor_performance: 61.25,
            defect_rate: 1.5,
            region: Region::West,
        }];
        let view = filter_by_regions(&data, &RegionSelection::all());
        let csv_text = export_csv(&view).unwrap();
        assert_eq!(
            csv_text,
            "date,delivery_time,vendor_performance,defect_rate,region\n\
             2024-01-01,23.5,61.25,1.5,West\n"
        );
    }

    #[test]
    fn test_empty_view_exports_header_only() {
        let data = seeded();
        let view = filter_by_regions(&data, &RegionSelection::none());
        let csv_text = export_csv(&view).unwrap();
        assert_eq!(
            csv_text,
            "date,delivery_time,vendor_performance,defect_rate,region\n"
        );
    }

    #[test]
    fn test_export_ignores_display_cap() {
        let data = seeded();
        let view = filter_by_regions(&data, &RegionSelection::all());
        let page = table_page(&view, DEFAULT_ROW_CAP);
        assert_eq!(page.shown_rows, 182);

        let (_, rows) = parse(&export_csv(&view).unwrap());
        assert_eq!(rows.len(), 182);

        let small_page = table_page(&view, 5);
        assert_eq!(small_page.shown_rows, 5);
        let (_, rows) = parse(&export_csv(&view).unwrap());
        assert_eq!(rows.len(), 182);
    }
}
