//! Generation statistics gathered by driving the real engine.

use crate::generation::catalog::AffixCatalog;
use crate::generation::generator::generate_item;
use crate::generation::types::{GeneratedItem, ItemTemplate, Rarity, RollSettings};
use rand::Rng;

/// Counters describing a batch of generated items.
#[derive(Debug, Clone, Default)]
pub struct GenerationStats {
    pub total_items: u32,
    pub common_items: u32,
    pub magic_items: u32,
    pub rare_items: u32,
    pub total_prefixes: u32,
    pub total_suffixes: u32,
}

impl GenerationStats {
    pub fn record(&mut self, item: &GeneratedItem) {
        self.total_items += 1;
        match item.rarity {
            Rarity::Common => self.common_items += 1,
            Rarity::Magic => self.magic_items += 1,
            Rarity::Rare => self.rare_items += 1,
        }
        self.total_prefixes += item.prefixes.len() as u32;
        self.total_suffixes += item.suffixes.len() as u32;
    }

    /// Fraction of recorded items with the given rarity.
    pub fn rarity_share(&self, rarity: Rarity) -> f64 {
        if self.total_items == 0 {
            return 0.0;
        }
        let count = match rarity {
            Rarity::Common => self.common_items,
            Rarity::Magic => self.magic_items,
            Rarity::Rare => self.rare_items,
        };
        count as f64 / self.total_items as f64
    }

    /// Mean affix count (prefixes plus suffixes) per recorded item.
    pub fn average_affixes(&self) -> f64 {
        if self.total_items == 0 {
            return 0.0;
        }
        (self.total_prefixes + self.total_suffixes) as f64 / self.total_items as f64
    }
}

/// Generate `trials` items and fold them into one stats record.
pub fn simulate_generations<R: Rng>(
    trials: u32,
    template: &ItemTemplate,
    item_level: i32,
    catalog: &AffixCatalog,
    settings: &RollSettings,
    rng: &mut R,
) -> GenerationStats {
    let mut stats = GenerationStats::default();
    for _ in 0..trials {
        let item = generate_item(Some(template), item_level, Some(catalog), settings, rng);
        stats.record(&item);
    }
    stats
}
