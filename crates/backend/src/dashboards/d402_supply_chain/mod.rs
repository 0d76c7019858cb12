pub mod charts;
pub mod error;
pub mod export;
pub mod filter;
pub mod generator;
pub mod metrics;
pub mod service;
pub mod table;

pub use error::SupplyChainError;
pub use filter::RegionSelection;
