pub mod d402_supply_chain;

pub use d402_supply_chain::ui::SupplyChainDashboard;
