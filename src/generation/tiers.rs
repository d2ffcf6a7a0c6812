//! Level-gated, bias-shaped tier selection and the numeric value roll.

use super::types::Tier;
use crate::constants::TIER_BIAS_FLOOR;
use crate::sampler::{pick_weighted, ZeroTotalPolicy};
use rand::Rng;

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Effective selection weight for the tier at `index` of a `count`-long
/// tier list. A bias above 1 inflates later (rarer) tiers, below 1 the
/// earlier ones; a bias of exactly 1 or at/below 0 leaves raw weights
/// untouched. The normalized position runs over the full tier list, not
/// the level-filtered subset.
fn effective_weight(tier: &Tier, index: usize, count: usize, tier_bias: f64) -> f64 {
    let raw = tier.weight.max(0.0);
    if tier_bias <= 0.0 || (tier_bias - 1.0).abs() < f64::EPSILON {
        return raw;
    }

    let norm = if count > 1 {
        index as f64 / (count - 1) as f64
    } else {
        0.0
    };
    let scale = lerp(1.0 / tier_bias.max(TIER_BIAS_FLOOR), tier_bias, norm);
    raw * scale
}

/// Pick an eligible tier for `item_level`, weight-shaped by `tier_bias`.
/// Returns None when no tier passes the level gate with positive effective
/// weight; the caller treats that as "try a different affix".
pub fn pick_tier<'a, R: Rng>(
    tiers: &'a [Tier],
    item_level: u32,
    tier_bias: f64,
    rng: &mut R,
) -> Option<&'a Tier> {
    let count = tiers.len();
    let eligible: Vec<(&Tier, f64)> = tiers
        .iter()
        .enumerate()
        .filter(|(_, tier)| tier.min_item_level <= item_level)
        .map(|(i, tier)| (tier, effective_weight(tier, i, count, tier_bias)))
        .filter(|(_, w)| *w > 0.0)
        .collect();

    pick_weighted(&eligible, |(_, w)| *w, ZeroTotalPolicy::LastElement, rng).map(|(tier, _)| *tier)
}

/// Uniform roll over the tier's closed value range.
pub fn roll_value<R: Rng>(tier: &Tier, rng: &mut R) -> f64 {
    if tier.max_value <= tier.min_value {
        return tier.min_value;
    }
    rng.gen_range(tier.min_value..=tier.max_value)
}
