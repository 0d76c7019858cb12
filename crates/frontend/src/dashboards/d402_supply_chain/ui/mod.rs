pub mod charts;
pub mod dashboard;
pub mod data_table;
pub mod region_filter;

pub use dashboard::SupplyChainDashboard;
