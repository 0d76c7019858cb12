use contracts::dashboards::d402_supply_chain::SupplyChainRecord;
use contracts::enums::Region;
use std::collections::BTreeSet;

use super::error::SupplyChainError;

/// Regions chosen in the sidebar multi-select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSelection(BTreeSet<Region>);

impl RegionSelection {
    pub fn all() -> Self {
        Self(Region::ALL.into_iter().collect())
    }

    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    pub fn of(regions: &[Region]) -> Self {
        Self(regions.iter().copied().collect())
    }

    /// Parse the `regions` query value.
    ///
    /// `None` selects every region, `Some("")` selects nothing.
    pub fn parse(raw: Option<&str>) -> Result<Self, SupplyChainError> {
        let Some(raw) = raw else {
            return Ok(Self::all());
        };

        let mut selected = BTreeSet::new();
        for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let region = Region::from_code(part)
                .ok_or_else(|| SupplyChainError::UnknownRegion(part.to_string()))?;
            selected.insert(region);
        }
        Ok(Self(selected))
    }

    pub fn contains(&self, region: Region) -> bool {
        self.0.contains(&region)
    }

    pub fn regions(&self) -> Vec<Region> {
        self.0.iter().copied().collect()
    }
}

impl Default for RegionSelection {
    fn default() -> Self {
        Self::all()
    }
}

/// Read-only projection of the base table, original row order preserved.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    rows: Vec<&'a SupplyChainRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a SupplyChainRecord> + '_ {
        self.rows.iter().copied()
    }
}

pub fn filter_by_regions<'a>(
    records: &'a [SupplyChainRecord],
    selection: &RegionSelection,
) -> FilteredView<'a> {
    FilteredView {
        rows: records
            .iter()
            .filter(|r| selection.contains(r.region))
            .collect(),
    }
}

/// Distinct regions of the table in order of first appearance.
pub fn available_regions(records: &[SupplyChainRecord]) -> Vec<Region> {
    let mut seen = Vec::with_capacity(Region::ALL.len());
    for r in records {
        if !seen.contains(&r.region) {
            seen.push(r.region);
            if seen.len() == Region::ALL.len() {
                break;
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d402_supply_chain::generator::{generate, GenerationParams};
    use chrono::NaiveDate;

    fn seeded() -> Vec<SupplyChainRecord> {
        generate(&GenerationParams {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            seed: Some(42),
        })
        .unwrap()
        .to_vec()
    }

    fn subsets() -> Vec<Vec<Region>> {
        (1u8..16)
            .map(|mask| {
                Region::ALL
                    .into_iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, r)| r)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_every_subset_selects_exactly_matching_rows() {
        let data = seeded();
        for subset in subsets() {
            let selection = RegionSelection::of(&subset);
            let view = filter_by_regions(&data, &selection);
            let expected = data.iter().filter(|r| subset.contains(&r.region)).count();
            assert_eq!(view.len(), expected, "subset {subset:?}");
            assert!(view.iter().all(|r| subset.contains(&r.region)));
        }
    }

    #[test]
    fn test_view_preserves_order() {
        let data = seeded();
        let view = filter_by_regions(&data, &RegionSelection::of(&[Region::East, Region::West]));
        let dates: Vec<_> = view.iter().map(|r| r.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_full_selection_returns_table() {
        let data = seeded();
        let view = filter_by_regions(&data, &RegionSelection::all());
        let rows: Vec<SupplyChainRecord> = view.iter().cloned().collect();
        assert_eq!(rows, data);
    }

    #[test]
    fn test_empty_selection_returns_nothing() {
        let data = seeded();
        let view = filter_by_regions(&data, &RegionSelection::none());
        assert!(view.is_empty());
    }

    #[test]
    fn test_north_only_scenario() {
        let data = seeded();
        assert_eq!(data.len(), 182);
        let view = filter_by_regions(&data, &RegionSelection::of(&[Region::North]));
        let north = data.iter().filter(|r| r.region == Region::North).count();
        assert_eq!(view.len(), north);
        // uniform 1/4 split of 182 rows
        assert!((20..=75).contains(&north), "north rows: {north}");
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(RegionSelection::parse(None).unwrap(), RegionSelection::all());
        assert_eq!(RegionSelection::parse(Some("")).unwrap(), RegionSelection::none());
        assert_eq!(
            RegionSelection::parse(Some("north, South,NORTH")).unwrap(),
            RegionSelection::of(&[Region::North, Region::South])
        );
        let err = RegionSelection::parse(Some("North,Central")).unwrap_err();
        assert!(matches!(err, SupplyChainError::UnknownRegion(ref r) if r == "Central"));
    }

    #[test]
    fn test_available_regions_first_appearance() {
        let data = seeded();
        let regions = available_regions(&data);
        assert_eq!(regions.len(), 4);
        assert_eq!(regions[0], data[0].region);
        assert!(available_regions(&[]).is_empty());
    }
}
