use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::Region;

pub const DASHBOARD_TITLE: &str = "Supply Chain Analytics Dashboard";

/// Suggested file name for the CSV download
pub const EXPORT_FILE_NAME: &str = "supply_chain_data.csv";

/// One simulated day of supply-chain activity.
///
/// Field order is the column order of the CSV export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyChainRecord {
    pub date: NaiveDate,
    /// Hours
    pub delivery_time: f64,
    /// Percent
    pub vendor_performance: f64,
    /// Percent
    pub defect_rate: f64,
    pub region: Region,
}

impl SupplyChainRecord {
    pub const COLUMNS: [&'static str; 5] = [
        "date",
        "delivery_time",
        "vendor_performance",
        "defect_rate",
        "region",
    ];
}

/// Query for dashboard and export endpoints.
///
/// `regions` is a comma-separated list of region codes:
/// absent means all regions, an empty string means no regions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplyChainRequest {
    pub regions: Option<String>,
}

impl SupplyChainRequest {
    pub fn for_regions(regions: &[Region]) -> Self {
        let joined = regions
            .iter()
            .map(|r| r.code())
            .collect::<Vec<_>>()
            .join(",");
        Self {
            regions: Some(joined),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricUnit {
    Hours,
    Percent,
}

impl MetricUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            MetricUnit::Hours => "h",
            MetricUnit::Percent => "%",
        }
    }
}

/// Single summary statistic (mean of a column over the filtered view)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    /// Column name, e.g. "delivery_time"
    pub id: String,
    /// Display label, e.g. "Avg Delivery Time"
    pub label: String,
    pub unit: MetricUnit,
    /// None when the view is empty
    pub value: Option<f64>,
}

impl MetricValue {
    /// Text shown on the metric card: `24.3h`, `80.1%`, or `NaN` for an empty view.
    pub fn display(&self) -> String {
        match self.value {
            Some(v) if v.is_finite() => format!("{:.1}{}", v, self.unit.suffix()),
            _ => "NaN".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Line chart of one column against date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<LinePoint>,
}

/// Distribution summary of one box in a box plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStats {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Lowest observation within 1.5 IQR below q1
    pub lower_fence: f64,
    /// Highest observation within 1.5 IQR above q3
    pub upper_fence: f64,
    pub mean: f64,
    pub outliers: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxGroup {
    pub region: Region,
    pub stats: BoxStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub groups: Vec<BoxGroup>,
}

/// Rows shown in the data table. `rows` is capped, `total_rows` is not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablePage {
    pub rows: Vec<SupplyChainRecord>,
    pub total_rows: usize,
    pub shown_rows: usize,
    pub row_cap: usize,
    pub capped: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyChainDashboardResponse {
    pub title: String,
    pub selected_regions: Vec<Region>,
    /// Options for the region multi-select
    pub available_regions: Vec<Region>,
    pub metrics: Vec<MetricValue>,
    pub delivery_trend: LineChartSpec,
    pub regional_box: BoxPlotSpec,
    pub table: TablePage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionsResponse {
    /// Fixed region set
    pub all: Vec<Region>,
    /// Regions present in the generated table, in order of first appearance
    pub available: Vec<Region>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheInvalidateResponse {
    pub dropped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(unit: MetricUnit, value: Option<f64>) -> MetricValue {
        MetricValue {
            id: "delivery_time".to_string(),
            label: "Avg Delivery Time".to_string(),
            unit,
            value,
        }
    }

    #[test]
    fn test_metric_display() {
        assert_eq!(metric(MetricUnit::Hours, Some(24.26)).display(), "24.3h");
        assert_eq!(metric(MetricUnit::Percent, Some(80.04)).display(), "80.0%");
        assert_eq!(metric(MetricUnit::Percent, Some(-1.26)).display(), "-1.3%");
    }

    #[test]
    fn test_undefined_metric_displays_nan() {
        assert_eq!(metric(MetricUnit::Hours, None).display(), "NaN");
        assert_eq!(metric(MetricUnit::Hours, Some(f64::NAN)).display(), "NaN");
    }

    #[test]
    fn test_undefined_metric_serializes_as_null() {
        let json = serde_json::to_value(metric(MetricUnit::Hours, None)).unwrap();
        assert!(json["value"].is_null());
    }

    #[test]
    fn test_request_for_regions() {
        let req = SupplyChainRequest::for_regions(&[Region::North, Region::West]);
        assert_eq!(req.regions.as_deref(), Some("North,West"));
        let empty = SupplyChainRequest::for_regions(&[]);
        assert_eq!(empty.regions.as_deref(), Some(""));
    }
}
