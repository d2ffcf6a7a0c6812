//! Rarity resolution from a configured weight triple.

use super::types::Rarity;
use crate::constants::{DEFAULT_COMMON_WEIGHT, DEFAULT_MAGIC_WEIGHT, DEFAULT_RARE_WEIGHT};
use crate::sampler::{pick_weighted, ZeroTotalPolicy};
use rand::Rng;

/// Roll a rarity in proportion to the given weights. Negative weights
/// count as zero; a non-positive total substitutes the fixed 60/30/10
/// split. Pure function of the inputs and the random stream.
pub fn roll_rarity<R: Rng>(common: f64, magic: f64, rare: f64, rng: &mut R) -> Rarity {
    let (common, magic, rare) = (common.max(0.0), magic.max(0.0), rare.max(0.0));
    let (common, magic, rare) = if common + magic + rare <= 0.0 {
        (
            DEFAULT_COMMON_WEIGHT,
            DEFAULT_MAGIC_WEIGHT,
            DEFAULT_RARE_WEIGHT,
        )
    } else {
        (common, magic, rare)
    };

    let entries = [
        (Rarity::Common, common),
        (Rarity::Magic, magic),
        (Rarity::Rare, rare),
    ];
    pick_weighted(&entries, |(_, w)| *w, ZeroTotalPolicy::LastElement, rng)
        .map(|(rarity, _)| *rarity)
        .unwrap_or(Rarity::Rare)
}
