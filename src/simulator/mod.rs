//! Distribution analysis over the real generation engine.
//!
//! Run many generations against a catalog to inspect rarity mix and affix
//! density, for balance tuning and statistical tests.

pub mod loot_sim;

pub use loot_sim::*;
