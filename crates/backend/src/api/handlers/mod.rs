// Dashboard handlers
pub mod d402_supply_chain;
