//! SeaORM adapters: the only code that builds queries against the entities.

pub mod consoles_sea;
pub mod games_sea;
