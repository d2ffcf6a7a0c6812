//! The core affix roll loop: weight-proportional selection with mod-group
//! exclusion and bounded retries.

use super::tiers::{pick_tier, roll_value};
use super::types::{AffixDefinition, GeneratedAffix};
use crate::constants::MAX_ROLL_ATTEMPTS;
use crate::sampler::{pick_weighted, ZeroTotalPolicy};
use rand::Rng;
use std::collections::HashSet;

/// Roll up to `count` affixes from `pool`, skipping mod groups already in
/// `used_groups`. The pool must already be filtered by slot and side; the
/// caller owns `used_groups` so group exclusion can span the prefix and
/// suffix rolls of one item.
///
/// Under-fills rather than erroring when the pool cannot supply enough
/// distinct groups or eligible tiers; the attempt cap bounds the retry
/// loop for pathological pools.
pub fn roll_affixes<R: Rng>(
    pool: &[&AffixDefinition],
    count: u32,
    item_level: u32,
    tier_bias: f64,
    used_groups: &mut HashSet<String>,
    rng: &mut R,
) -> Vec<GeneratedAffix> {
    let mut rolled = Vec::new();
    let mut attempts = MAX_ROLL_ATTEMPTS;

    while (rolled.len() as u32) < count && attempts > 0 {
        attempts -= 1;

        // All-zero-weight or empty pool: nothing can ever be picked
        let affix = match pick_weighted(
            pool,
            |a| a.weight as f64,
            ZeroTotalPolicy::Nothing,
            rng,
        ) {
            Some(affix) => *affix,
            None => break,
        };

        if !affix.mod_group.is_empty() && used_groups.contains(&affix.mod_group) {
            continue;
        }

        // No tier eligible at this level: retry with a different draw
        let tier = match pick_tier(&affix.tiers, item_level, tier_bias, rng) {
            Some(tier) => tier,
            None => continue,
        };

        let value = roll_value(tier, rng);
        rolled.push(GeneratedAffix {
            affix_id: affix.id.clone(),
            name: affix.name.clone(),
            tier_name: tier.name.clone(),
            is_prefix: affix.is_prefix,
            stat: affix.stat.clone(),
            is_percent: affix.is_percent,
            value,
            mod_group: affix.mod_group.clone(),
        });
        if !affix.mod_group.is_empty() {
            used_groups.insert(affix.mod_group.clone());
        }
    }

    rolled
}
