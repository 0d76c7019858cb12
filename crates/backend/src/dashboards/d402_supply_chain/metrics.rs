use contracts::dashboards::d402_supply_chain::{MetricUnit, MetricValue, SupplyChainRecord};

use super::filter::FilteredView;

struct TrackedColumn {
    id: &'static str,
    label: &'static str,
    unit: MetricUnit,
    value: fn(&SupplyChainRecord) -> f64,
}

fn delivery_time(r: &SupplyChainRecord) -> f64 {
    r.delivery_time
}

fn vendor_performance(r: &SupplyChainRecord) -> f64 {
    r.vendor_performance
}

fn defect_rate(r: &SupplyChainRecord) -> f64 {
    r.defect_rate
}

/// Columns summarised in the metrics row, in display order.
const TRACKED_COLUMNS: [TrackedColumn; 3] = [
    TrackedColumn {
        id: "delivery_time",
        label: "Avg Delivery Time",
        unit: MetricUnit::Hours,
        value: delivery_time,
    },
    TrackedColumn {
        id: "vendor_performance",
        label: "Avg Vendor Performance",
        unit: MetricUnit::Percent,
        value: vendor_performance,
    },
    TrackedColumn {
        id: "defect_rate",
        label: "Avg Defect Rate",
        unit: MetricUnit::Percent,
        value: defect_rate,
    },
];

/// Arithmetic mean; `None` for an empty input.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

pub fn compute_metrics(view: &FilteredView<'_>) -> Vec<MetricValue> {
    TRACKED_COLUMNS
        .iter()
        .map(|column| MetricValue {
            id: column.id.to_string(),
            label: column.label.to_string(),
            unit: column.unit,
            value: mean(view.iter().map(column.value)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d402_supply_chain::filter::{filter_by_regions, RegionSelection};
    use chrono::NaiveDate;
    use contracts::enums::Region;

    fn record(day: u32, delivery: f64, vendor: f64, defect: f64, region: Region) -> SupplyChainRecord {
        SupplyChainRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            delivery_time: delivery,
            vendor_performance: vendor,
            defect_rate: defect,
            region,
        }
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean([1.0, 2.0, 3.0, 4.0]), Some(2.5));
        assert_eq!(mean(std::iter::empty::<f64>()), None);
        assert_eq!(mean([-3.0]), Some(-3.0));
    }

    #[test]
    fn test_metrics_over_view() {
        let rows = vec![
            record(1, 20.0, 70.0, 2.0, Region::North),
            record(2, 30.0, 90.0, 4.0, Region::North),
            record(3, 100.0, 60.0, 9.0, Region::South),
        ];
        let view = filter_by_regions(&rows, &RegionSelection::of(&[Region::North]));
        let metrics = compute_metrics(&view);

        assert_eq!(metrics.len(), 3);
        assert_eq!(metrics[0].id, "delivery_time");
        assert_eq!(metrics[0].value, Some(25.0));
        assert_eq!(metrics[0].display(), "25.0h");
        assert_eq!(metrics[1].value, Some(80.0));
        assert_eq!(metrics[1].display(), "80.0%");
        assert_eq!(metrics[2].value, Some(3.0));
        assert_eq!(metrics[2].display(), "3.0%");
    }

    #[test]
    fn test_empty_view_metrics_are_undefined() {
        let rows = vec![record(1, 20.0, 70.0, 2.0, Region::North)];
        let view = filter_by_regions(&rows, &RegionSelection::none());
        let metrics = compute_metrics(&view);
        assert_eq!(metrics.len(), 3);
        for m in &metrics {
            assert_eq!(m.value, None);
            assert_eq!(m.display(), "NaN");
        }
    }
}
