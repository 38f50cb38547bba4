//! Filter configuration for the transform stage

use restack_inventory::item::{Item, Quality};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Category value reserved for colorable flora/objects. Only items in
/// this category carry a meaningful color attribute.
pub const COLORABLE_CATEGORY: i32 = -80;

/// Per-tier ignore flag with exception overrides.
///
/// When `ignore` is set, items of this tier are skipped by the quality
/// transform unless their `type_id` or `category` appears in the
/// matching exception set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierFilter {
    /// Skip items of this tier
    pub ignore: bool,
    /// Item ids that bypass the ignore flag
    pub item_exceptions: HashSet<i32>,
    /// Categories that bypass the ignore flag
    pub category_exceptions: HashSet<i32>,
}

impl TierFilter {
    /// Whether this filter lets the given item through
    pub fn allows(&self, item: &Item) -> bool {
        !self.ignore
            || self.item_exceptions.contains(&item.type_id)
            || self.category_exceptions.contains(&item.category)
    }
}

/// Ignore/exception rules applied by the transform stage.
///
/// Read-only for the duration of one engine call; owned and mutated
/// only by the external configuration surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Item ids never transformed, regardless of transform kind
    pub ignore_items: HashSet<i32>,
    /// Categories never transformed, regardless of transform kind
    pub ignore_categories: HashSet<i32>,
    /// Silver-tier (1) filter
    pub silver: TierFilter,
    /// Gold-tier (2) filter
    pub gold: TierFilter,
    /// Iridium-tier (4) filter
    pub iridium: TierFilter,
    /// Item ids skipped by the color transform
    pub color_ignore_items: HashSet<i32>,
}

impl FilterConfig {
    /// Whether the item is excluded outright, for every transform kind
    pub fn ignores_outright(&self, item: &Item) -> bool {
        self.ignore_items.contains(&item.type_id)
            || self.ignore_categories.contains(&item.category)
    }

    /// The tier filter for a quality, if that tier is ignorable.
    /// Tier 0 is never ignorable.
    pub fn tier_filter(&self, quality: Quality) -> Option<&TierFilter> {
        match quality {
            Quality::Silver => Some(&self.silver),
            Quality::Gold => Some(&self.gold),
            Quality::Iridium => Some(&self.iridium),
            Quality::Normal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_filter_allows_by_default() {
        let filter = TierFilter::default();
        let item = Item::new(100, 1).with_quality(Quality::Iridium);

        assert!(filter.allows(&item));
    }

    #[test]
    fn test_tier_filter_exceptions_override_ignore() {
        let mut filter = TierFilter {
            ignore: true,
            ..Default::default()
        };
        let item = Item::new(100, 1).with_quality(Quality::Iridium);

        assert!(!filter.allows(&item));

        filter.item_exceptions.insert(100);
        assert!(filter.allows(&item));

        filter.item_exceptions.clear();
        filter.category_exceptions.insert(item.category);
        assert!(filter.allows(&item));
    }

    #[test]
    fn test_tier_zero_has_no_filter() {
        let config = FilterConfig::default();

        assert!(config.tier_filter(Quality::Normal).is_none());
        assert!(config.tier_filter(Quality::Iridium).is_some());
    }
}
