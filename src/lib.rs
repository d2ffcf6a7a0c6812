//! Lootsmith - procedural item generation engine
//!
//! Given a base item template, a target item level, and a weighted affix
//! catalog, produces a fully rolled item: rarity tier, prefix and suffix
//! modifiers, and numeric values. Every roll draws from a caller-owned
//! random stream, so results are reproducible per seed; catalogs and
//! settings are plain data passed in per call, never ambient state.

pub mod constants;
pub mod generation;
pub mod sampler;
pub mod simulator;

pub use generation::catalog::AffixCatalog;
pub use generation::generator::{clamp_item_level, generate_item};
pub use generation::types::{
    AffixDefinition, GeneratedAffix, GeneratedItem, ItemTemplate, Rarity, RollSettings, Tier,
};
