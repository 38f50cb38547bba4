//! Filter-and-mutate pass over a container

use crate::filter::{FilterConfig, COLORABLE_CATEGORY};
use restack_inventory::container::Container;
use restack_inventory::item::{Item, Quality};

/// Which attribute a transform mutates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    /// Reset the color attribute to uncolored
    Color,
    /// Smash the quality tier to 0
    Quality,
}

/// Whether the filter rules select this item for the given transform
fn is_eligible(item: &Item, config: &FilterConfig, kind: TransformKind) -> bool {
    // Nothing to reduce; a short-circuit, not a filter
    if kind == TransformKind::Quality && item.quality == Quality::Normal {
        return false;
    }

    if config.ignores_outright(item) {
        return false;
    }

    match kind {
        TransformKind::Quality => {
            if let Some(tier) = config.tier_filter(item.quality) {
                if !tier.allows(item) {
                    return false;
                }
            }
            true
        }
        TransformKind::Color => {
            item.category == COLORABLE_CATEGORY
                && item.color.is_some()
                && !config.color_ignore_items.contains(&item.type_id)
        }
    }
}

/// Apply the attribute mutation to an extracted item
fn apply(item: &mut Item, kind: TransformKind) {
    match kind {
        TransformKind::Quality => item.quality = Quality::Normal,
        TransformKind::Color => item.color = None,
    }
}

/// Scan the container in slot order, mutate every eligible item, and
/// extract it from its slot (compacting the container). Returns the
/// extracted items in their original relative order.
///
/// Never fails: unmatched items are simply skipped.
pub fn transform(
    container: &mut Container,
    config: &FilterConfig,
    kind: TransformKind,
) -> Vec<Item> {
    let mut processed = Vec::new();

    // Stable cursor: the index only advances past slots that stay put,
    // so compaction after a removal cannot skip or double-visit a slot.
    let mut i = 0;
    while i < container.len() {
        let eligible = container
            .get(i)
            .is_some_and(|item| is_eligible(item, config, kind));

        if !eligible {
            i += 1;
            continue;
        }

        if let Some(mut item) = container.remove_slot(i) {
            apply(&mut item, kind);
            log::debug!(
                "extracted item {} (category {}, stack {})",
                item.type_id,
                item.category,
                item.stack
            );
            processed.push(item);
        }
    }

    processed
}

/// Transform one item in place, without filtering or restacking.
///
/// The quality variant halves the tier on its literal value (4 -> 2,
/// 2 -> 1, 1 -> 0) rather than smashing it straight to 0. Non-stackable
/// items are never touched. Returns whether the item changed.
pub fn transform_single(item: &mut Item, kind: TransformKind) -> bool {
    if !item.is_stackable() {
        return false;
    }

    match kind {
        TransformKind::Quality => {
            if item.quality == Quality::Normal {
                return false;
            }
            item.quality = item.quality.halved();
            true
        }
        TransformKind::Color => {
            if item.category != COLORABLE_CATEGORY || item.color.is_none() {
                return false;
            }
            item.color = None;
            true
        }
    }
}
