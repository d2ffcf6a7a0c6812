use crate::constants::{
    DEFAULT_COMMON_WEIGHT, DEFAULT_MAGIC_WEIGHT, DEFAULT_RARE_WEIGHT, NEUTRAL_TIER_BIAS,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Magic = 1,
    Rare = 2,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Magic => "Magic",
            Rarity::Rare => "Rare",
        }
    }
}

/// One strength band of an affix: a level-gated value range with a
/// selection weight. Tiers are ordered within their affix; the position in
/// that order drives the bias law during selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub name: String,
    /// Inclusive minimum item level for this tier to be eligible.
    pub min_item_level: u32,
    pub min_value: f64,
    pub max_value: f64,
    pub weight: f64,
}

/// An authored affix: identity, placement rules, stat target, and its
/// value tiers. Immutable at generation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffixDefinition {
    pub id: String,
    pub name: String,
    /// Affixes sharing a non-empty group never co-occur on one item.
    #[serde(default)]
    pub mod_group: String,
    pub is_prefix: bool,
    /// Equipment slots this affix may roll on; empty means any slot.
    #[serde(default)]
    pub allowed_slots: Vec<String>,
    pub stat: String,
    #[serde(default)]
    pub is_percent: bool,
    pub tiers: Vec<Tier>,
    /// Selection weight in the affix pool; 0 excludes it from sampling.
    pub weight: u32,
}

impl AffixDefinition {
    pub fn allowed_on_slot(&self, slot: &str) -> bool {
        self.allowed_slots.is_empty() || self.allowed_slots.iter().any(|s| s == slot)
    }
}

/// Configuration for one generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollSettings {
    pub min_prefixes: u32,
    pub max_prefixes: u32,
    pub min_suffixes: u32,
    pub max_suffixes: u32,
    /// Optional weight per prefix count, indexed by absolute count value.
    /// Counts beyond the table weigh zero.
    #[serde(default)]
    pub prefix_count_weights: Option<Vec<f64>>,
    #[serde(default)]
    pub suffix_count_weights: Option<Vec<f64>>,
    pub common_weight: f64,
    pub magic_weight: f64,
    pub rare_weight: f64,
    /// 1.0 is neutral; above 1 skews tier selection toward later (rarer)
    /// tiers, below 1 toward earlier ones.
    pub tier_bias: f64,
}

impl Default for RollSettings {
    fn default() -> Self {
        Self {
            min_prefixes: 1,
            max_prefixes: 3,
            min_suffixes: 1,
            max_suffixes: 3,
            prefix_count_weights: None,
            suffix_count_weights: None,
            common_weight: DEFAULT_COMMON_WEIGHT,
            magic_weight: DEFAULT_MAGIC_WEIGHT,
            rare_weight: DEFAULT_RARE_WEIGHT,
            tier_bias: NEUTRAL_TIER_BIAS,
        }
    }
}

/// The base item being rolled. The engine reads only `slot`; everything
/// else is carried through for the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTemplate {
    pub id: String,
    pub name: String,
    pub slot: String,
}

/// One rolled modifier on a generated item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedAffix {
    pub affix_id: String,
    pub name: String,
    pub tier_name: String,
    pub is_prefix: bool,
    pub stat: String,
    pub is_percent: bool,
    pub value: f64,
    /// Carried for later display/combination logic.
    pub mod_group: String,
}

/// A fully rolled item. Owned by the caller; the engine keeps nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedItem {
    /// None only when generation degraded because no template was given.
    pub template: Option<ItemTemplate>,
    pub item_level: u32,
    pub rarity: Rarity,
    pub prefixes: Vec<GeneratedAffix>,
    pub suffixes: Vec<GeneratedAffix>,
}

impl GeneratedItem {
    /// An inert result: Common rarity, no affixes.
    pub fn empty(template: Option<ItemTemplate>, item_level: u32) -> Self {
        Self {
            template,
            item_level,
            rarity: Rarity::Common,
            prefixes: Vec::new(),
            suffixes: Vec::new(),
        }
    }

    pub fn affix_count(&self) -> usize {
        self.prefixes.len() + self.suffixes.len()
    }

    /// Prefixes followed by suffixes.
    pub fn all_affixes(&self) -> impl Iterator<Item = &GeneratedAffix> {
        self.prefixes.iter().chain(self.suffixes.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Magic);
        assert!(Rarity::Magic < Rarity::Rare);
    }

    #[test]
    fn test_rarity_name() {
        assert_eq!(Rarity::Common.name(), "Common");
        assert_eq!(Rarity::Magic.name(), "Magic");
        assert_eq!(Rarity::Rare.name(), "Rare");
    }

    #[test]
    fn test_allowed_on_slot_empty_means_any() {
        let affix = AffixDefinition {
            id: "swift".to_string(),
            name: "Swift".to_string(),
            mod_group: String::new(),
            is_prefix: true,
            allowed_slots: vec![],
            stat: "attack_speed".to_string(),
            is_percent: true,
            tiers: vec![],
            weight: 100,
        };
        assert!(affix.allowed_on_slot("Weapon"));
        assert!(affix.allowed_on_slot("Ring"));
    }

    #[test]
    fn test_allowed_on_slot_restricted() {
        let affix = AffixDefinition {
            id: "sharp".to_string(),
            name: "Sharp".to_string(),
            mod_group: "damage".to_string(),
            is_prefix: true,
            allowed_slots: vec!["Weapon".to_string()],
            stat: "damage".to_string(),
            is_percent: true,
            tiers: vec![],
            weight: 100,
        };
        assert!(affix.allowed_on_slot("Weapon"));
        assert!(!affix.allowed_on_slot("Boots"));
    }

    #[test]
    fn test_default_settings_are_neutral() {
        let settings = RollSettings::default();
        assert!((settings.tier_bias - 1.0).abs() < f64::EPSILON);
        assert!(settings.common_weight > settings.magic_weight);
        assert!(settings.magic_weight > settings.rare_weight);
        assert!(settings.prefix_count_weights.is_none());
        assert!(settings.suffix_count_weights.is_none());
    }

    #[test]
    fn test_empty_item_is_inert() {
        let item = GeneratedItem::empty(None, 10);
        assert_eq!(item.rarity, Rarity::Common);
        assert_eq!(item.affix_count(), 0);
        assert!(item.template.is_none());
    }

    #[test]
    fn test_all_affixes_orders_prefixes_first() {
        let prefix = GeneratedAffix {
            affix_id: "p".to_string(),
            name: "P".to_string(),
            tier_name: "T1".to_string(),
            is_prefix: true,
            stat: "damage".to_string(),
            is_percent: true,
            value: 5.0,
            mod_group: "damage".to_string(),
        };
        let suffix = GeneratedAffix {
            affix_id: "s".to_string(),
            name: "S".to_string(),
            tier_name: "T1".to_string(),
            is_prefix: false,
            stat: "life".to_string(),
            is_percent: false,
            value: 20.0,
            mod_group: "life".to_string(),
        };
        let item = GeneratedItem {
            template: None,
            item_level: 10,
            rarity: Rarity::Rare,
            prefixes: vec![prefix],
            suffixes: vec![suffix],
        };

        let ids: Vec<&str> = item.all_affixes().map(|a| a.affix_id.as_str()).collect();
        assert_eq!(ids, vec!["p", "s"]);
        assert_eq!(item.affix_count(), 2);
    }
}
