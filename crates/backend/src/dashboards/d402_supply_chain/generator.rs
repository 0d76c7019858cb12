use chrono::NaiveDate;
use contracts::dashboards::d402_supply_chain::SupplyChainRecord;
use contracts::enums::Region;
use rand::rngs::StdRng;
use rand::distributions::Uniform;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::sync::Arc;

use super::error::SupplyChainError;

/// Immutable snapshot of the generated table, shared between requests.
pub type Dataset = Arc<[SupplyChainRecord]>;

/// Upper bound for the generated range (about a century of days).
pub const MAX_GENERATED_DAYS: i64 = 36_600;

const DELIVERY_TIME_MEAN: f64 = 24.0;
const DELIVERY_TIME_STD_DEV: f64 = 5.0;
const VENDOR_PERFORMANCE_RANGE: (f64, f64) = (60.0, 100.0);
const DEFECT_RATE_RANGE: (f64, f64) = (1.0, 10.0);

/// Inputs of one generation run. Also the key of the generation cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenerationParams {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// `None` draws from OS entropy, so every run differs
    pub seed: Option<u64>,
}

impl GenerationParams {
    /// Number of days in the inclusive range
    pub fn day_count(&self) -> Result<usize, SupplyChainError> {
        if self.end_date < self.start_date {
            return Err(SupplyChainError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        let days = (self.end_date - self.start_date).num_days() + 1;
        if days > MAX_GENERATED_DAYS {
            return Err(SupplyChainError::RangeTooLarge {
                days,
                limit: MAX_GENERATED_DAYS,
            });
        }
        Ok(days as usize)
    }
}

/// Generate one record per day of the range.
///
/// Columns are sampled one after another from a single RNG stream:
/// delivery time, vendor performance, defect rate, then region.
pub fn generate(params: &GenerationParams) -> Result<Dataset, SupplyChainError> {
    let n = params.day_count()?;

    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let delivery = Normal::new(DELIVERY_TIME_MEAN, DELIVERY_TIME_STD_DEV)?;
    let vendor = Uniform::new(VENDOR_PERFORMANCE_RANGE.0, VENDOR_PERFORMANCE_RANGE.1);
    let defect = Uniform::new(DEFECT_RATE_RANGE.0, DEFECT_RATE_RANGE.1);

    let delivery_time: Vec<f64> = (0..n).map(|_| delivery.sample(&mut rng)).collect();
    let vendor_performance: Vec<f64> = (0..n).map(|_| vendor.sample(&mut rng)).collect();
    let defect_rate: Vec<f64> = (0..n).map(|_| defect.sample(&mut rng)).collect();
    let regions: Vec<Region> = (0..n)
        .map(|_| Region::ALL[rng.gen_range(0..Region::ALL.len())])
        .collect();

    let records: Vec<SupplyChainRecord> = params
        .start_date
        .iter_days()
        .take(n)
        .enumerate()
        .map(|(i, date)| SupplyChainRecord {
            date,
            delivery_time: delivery_time[i],
            vendor_performance: vendor_performance[i],
            defect_rate: defect_rate[i],
            region: regions[i],
        })
        .collect();

    tracing::info!(
        "D402: generated {} records for {}..{} (seed: {:?})",
        records.len(),
        params.start_date,
        params.end_date,
        params.seed
    );

    Ok(records.into())
}
