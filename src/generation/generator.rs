//! The single public entry point: template + level + catalog + settings
//! into one generated item.

use super::catalog::AffixCatalog;
use super::rarity::roll_rarity;
use super::roller::roll_affixes;
use super::types::{GeneratedItem, ItemTemplate, Rarity, RollSettings};
use crate::constants::{MAX_ITEM_LEVEL, MIN_ITEM_LEVEL};
use crate::sampler::pick_count;
use rand::Rng;
use std::collections::HashSet;

/// Clamp an arbitrary requested level into the supported range.
pub fn clamp_item_level(requested: i32) -> u32 {
    requested.clamp(MIN_ITEM_LEVEL as i32, MAX_ITEM_LEVEL as i32) as u32
}

/// Desired (prefix, suffix) counts for a rolled rarity.
fn decide_counts<R: Rng>(rarity: Rarity, settings: &RollSettings, rng: &mut R) -> (u32, u32) {
    match rarity {
        Rarity::Common => (0, 0),
        // Two independent flips: 50% both sides, otherwise an even split
        // between prefix-only and suffix-only (50/25/25 overall)
        Rarity::Magic => {
            if rng.gen_bool(0.5) {
                (1, 1)
            } else if rng.gen_bool(0.5) {
                (1, 0)
            } else {
                (0, 1)
            }
        }
        Rarity::Rare => {
            let prefixes = pick_count(
                settings.min_prefixes,
                settings.max_prefixes,
                settings.prefix_count_weights.as_deref(),
                rng,
            );
            let suffixes = pick_count(
                settings.min_suffixes,
                settings.max_suffixes,
                settings.suffix_count_weights.as_deref(),
                rng,
            );
            (prefixes, suffixes)
        }
    }
}

/// Generate one item from a template against an affix catalog.
///
/// The requested level is clamped to `[1, 100]`. A missing template or
/// catalog degrades to an inert Common result, and an exhausted pool to a
/// partial fill; this function never panics and never returns an error.
pub fn generate_item<R: Rng>(
    template: Option<&ItemTemplate>,
    requested_level: i32,
    catalog: Option<&AffixCatalog>,
    settings: &RollSettings,
    rng: &mut R,
) -> GeneratedItem {
    let item_level = clamp_item_level(requested_level);

    let (template, catalog) = match (template, catalog) {
        (Some(template), Some(catalog)) => (template, catalog),
        _ => return GeneratedItem::empty(template.cloned(), item_level),
    };

    let rarity = roll_rarity(
        settings.common_weight,
        settings.magic_weight,
        settings.rare_weight,
        rng,
    );
    let (prefix_count, suffix_count) = decide_counts(rarity, settings, rng);

    // One group set across both sides: no mod group may appear twice on
    // the finished item
    let mut used_groups: HashSet<String> = HashSet::new();

    let prefix_pool = catalog.affixes_for_slot(&template.slot, true);
    let prefixes = roll_affixes(
        &prefix_pool,
        prefix_count,
        item_level,
        settings.tier_bias,
        &mut used_groups,
        rng,
    );

    let suffix_pool = catalog.affixes_for_slot(&template.slot, false);
    let suffixes = roll_affixes(
        &suffix_pool,
        suffix_count,
        item_level,
        settings.tier_bias,
        &mut used_groups,
        rng,
    );

    GeneratedItem {
        template: Some(template.clone()),
        item_level,
        rarity,
        prefixes,
        suffixes,
    }
}
