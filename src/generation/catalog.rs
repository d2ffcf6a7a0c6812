//! Affix database: authored definitions with slot and prefix/suffix lookup.

use super::types::AffixDefinition;

/// A read-only collection of affix definitions in authoring order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AffixCatalog {
    affixes: Vec<AffixDefinition>,
}

impl AffixCatalog {
    pub fn new(affixes: Vec<AffixDefinition>) -> Self {
        Self { affixes }
    }

    /// Parse a catalog from a JSON array of affix definitions.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let affixes: Vec<AffixDefinition> = serde_json::from_str(json)?;
        Ok(Self::new(affixes))
    }

    pub fn affixes(&self) -> &[AffixDefinition] {
        &self.affixes
    }

    pub fn get(&self, id: &str) -> Option<&AffixDefinition> {
        self.affixes.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.affixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.affixes.is_empty()
    }

    /// Affixes eligible for `slot` on the requested side. Zero-weight
    /// definitions are excluded up front; authoring order is preserved so
    /// sampling stays reproducible.
    pub fn affixes_for_slot(&self, slot: &str, want_prefix: bool) -> Vec<&AffixDefinition> {
        self.affixes
            .iter()
            .filter(|a| a.is_prefix == want_prefix)
            .filter(|a| a.weight > 0)
            .filter(|a| a.allowed_on_slot(slot))
            .collect()
    }
}
