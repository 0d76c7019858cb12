use contracts::dashboards::d402_supply_chain::{
    BoxGroup, BoxPlotSpec, BoxStats, LineChartSpec, LinePoint,
};
use contracts::enums::Region;

use super::filter::FilteredView;

const WHISKER_IQR_FACTOR: f64 = 1.5;

/// Delivery time over date, one point per row of the view.
pub fn delivery_trend(view: &FilteredView<'_>) -> LineChartSpec {
    LineChartSpec {
        title: "Delivery Time Trends".to_string(),
        x_label: "date".to_string(),
        y_label: "delivery_time".to_string(),
        points: view
            .iter()
            .map(|r| LinePoint {
                date: r.date,
                value: r.delivery_time,
            })
            .collect(),
    }
}

/// Delivery time distribution per region, regions in order of first appearance.
pub fn regional_box(view: &FilteredView<'_>) -> BoxPlotSpec {
    let mut buckets: Vec<(Region, Vec<f64>)> = Vec::new();
    for r in view.iter() {
        match buckets.iter_mut().find(|(region, _)| *region == r.region) {
            Some((_, values)) => values.push(r.delivery_time),
            None => buckets.push((r.region, vec![r.delivery_time])),
        }
    }

    let groups = buckets
        .into_iter()
        .filter_map(|(region, values)| box_stats(&values).map(|stats| BoxGroup { region, stats }))
        .collect();

    BoxPlotSpec {
        title: "Delivery Time by Region".to_string(),
        x_label: "region".to_string(),
        y_label: "delivery_time".to_string(),
        groups,
    }
}

/// Quantile of sorted data with linear interpolation between closest ranks.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Five-number summary with Tukey whiskers. `None` for no values.
pub fn box_stats(values: &[f64]) -> Option<BoxStats> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.5);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    let low_limit = q1 - WHISKER_IQR_FACTOR * iqr;
    let high_limit = q3 + WHISKER_IQR_FACTOR * iqr;

    // q1 and q3 lie inside the limits, so both searches always hit
    let lower_fence = sorted.iter().copied().find(|v| *v >= low_limit).unwrap_or(q1);
    let upper_fence = sorted.iter().copied().rev().find(|v| *v <= high_limit).unwrap_or(q3);

    let outliers = sorted
        .iter()
        .copied()
        .filter(|v| *v < low_limit || *v > high_limit)
        .collect();

    Some(BoxStats {
        count: sorted.len(),
        min: sorted[0],
        q1,
        median,
        q3,
        max: sorted[sorted.len() - 1],
        lower_fence,
        upper_fence,
        mean: sorted.iter().sum::<f64>() / sorted.len() as f64,
        outliers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d402_supply_chain::filter::{filter_by_regions, RegionSelection};
    use chrono::NaiveDate;
    use contracts::dashboards::d402_supply_chain::SupplyChainRecord;

    fn rows(spec: &[(Region, f64)]) -> Vec<SupplyChainRecord> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        spec.iter()
            .zip(start.iter_days())
            .map(|(&(region, delivery_time), date)| SupplyChainRecord {
                date,
                delivery_time,
                vendor_performance: 80.0,
                defect_rate: 5.0,
                region,
            })
            .collect()
    }

    #[test]
    fn test_box_stats_with_outlier() {
        let values = [5.0, 1.0, 9.0, 2.0, 100.0, 3.0, 8.0, 4.0, 7.0, 6.0];
        let stats = box_stats(&values).unwrap();
        assert_eq!(stats.count, 10);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 100.0);
        assert!((stats.q1 - 3.25).abs() < 1e-9);
        assert!((stats.median - 5.5).abs() < 1e-9);
        assert!((stats.q3 - 7.75).abs() < 1e-9);
        assert_eq!(stats.lower_fence, 1.0);
        assert_eq!(stats.upper_fence, 9.0);
        assert_eq!(stats.outliers, vec![100.0]);
        assert!((stats.mean - 14.5).abs() < 1e-9);
    }

    #[test]
    fn test_box_stats_single_value() {
        let stats = box_stats(&[24.0]).unwrap();
        assert_eq!(stats.q1, 24.0);
        assert_eq!(stats.median, 24.0);
        assert_eq!(stats.q3, 24.0);
        assert_eq!(stats.lower_fence, 24.0);
        assert_eq!(stats.upper_fence, 24.0);
        assert!(stats.outliers.is_empty());
        assert!(box_stats(&[]).is_none());
    }

    #[test]
    fn test_delivery_trend_follows_view() {
        let data = rows(&[(Region::North, 20.0), (Region::South, 25.0), (Region::North, 30.0)]);
        let view = filter_by_regions(&data, &RegionSelection::of(&[Region::North]));
        let chart = delivery_trend(&view);
        assert_eq!(chart.title, "Delivery Time Trends");
        let values: Vec<f64> = chart.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![20.0, 30.0]);
        assert_eq!(chart.points[1].date, data[2].date);
    }

    #[test]
    fn test_regional_box_groups_in_first_appearance_order() {
        let data = rows(&[
            (Region::West, 20.0),
            (Region::North, 22.0),
            (Region::West, 30.0),
            (Region::East, 18.0),
        ]);
        let view = filter_by_regions(&data, &RegionSelection::all());
        let chart = regional_box(&view);
        let regions: Vec<Region> = chart.groups.iter().map(|g| g.region).collect();
        assert_eq!(regions, vec![Region::West, Region::North, Region::East]);
        assert_eq!(chart.groups[0].stats.count, 2);
        assert_eq!(chart.groups[0].stats.median, 25.0);
    }

    #[test]
    fn test_empty_view_charts() {
        let data = rows(&[(Region::North, 20.0)]);
        let view = filter_by_regions(&data, &RegionSelection::none());
        assert!(delivery_trend(&view).points.is_empty());
        assert!(regional_box(&view).groups.is_empty());
    }
}
