//! Item generation: data model, affix catalog, rarity, tier selection,
//! and the roll engine.

pub mod catalog;
pub mod generator;
pub mod rarity;
pub mod roller;
pub mod tiers;
pub mod types;

pub use catalog::*;
pub use generator::*;
pub use rarity::*;
pub use roller::*;
pub use tiers::*;
pub use types::*;
