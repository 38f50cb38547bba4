//! Restacking: priming, seeding, and stack consolidation

use restack_inventory::container::Container;
use restack_inventory::item::Item;

/// Guarantee at least one occupied slot exists before merging.
///
/// The merge phase only scans existing occupied slots for targets, so a
/// container vacated entirely by the transform stage would never accept
/// anything back. When that happens, the first processed item becomes
/// the seed slot, whole stack, no splitting.
pub fn prime(container: &mut Container, processed: &mut Vec<Item>) {
    if !container.is_empty() || processed.is_empty() {
        return;
    }

    if container.can_append() {
        let seed = processed.remove(0);
        log::debug!("priming empty container with item {}", seed.type_id);
        container.push(seed);
    } else if let Some(slot) = container.find_empty_slot() {
        let seed = processed.remove(0);
        log::debug!("priming empty container with item {}", seed.type_id);
        container.fill_slot(slot, seed);
    }
}

/// Merge processed items back into the container.
///
/// Phase A gives every processed identity a real presence: items with no
/// compatible slot are appended as new slots while capacity allows.
/// Phase B fills existing stacks and spills the remainder into overflow
/// slots. The processed list is consumed; quantity that could not be
/// placed anywhere is returned rather than silently dropped.
pub fn merge(container: &mut Container, processed: &mut Vec<Item>) -> u32 {
    seed_new_stacks(container, processed);
    fill_stacks(container, processed);

    let unplaced = processed.iter().map(|p| p.stack).sum();
    processed.clear();
    unplaced
}

/// Phase A: append processed items whose identity has no compatible
/// slot yet. Non-stackable items stay on the list.
fn seed_new_stacks(container: &mut Container, processed: &mut Vec<Item>) {
    let mut i = 0;
    while i < processed.len() {
        let p = &processed[i];
        let represented =
            !p.is_stackable() || container.items().any(|(_, slot)| slot.can_stack_with(p));

        if represented || !container.can_append() {
            i += 1;
            continue;
        }

        let p = processed.remove(i);
        log::debug!("seeding new slot for item {}", p.type_id);
        container.push(p);
    }
}

/// Phase B: for every occupied stackable slot, pull in every remaining
/// compatible processed item, spilling overflow into further slots.
fn fill_stacks(container: &mut Container, processed: &mut Vec<Item>) {
    let mut pending: Vec<Option<Item>> = processed.drain(..).map(Some).collect();

    // The container can grow while merging; re-check the length each pass.
    let mut i = 0;
    while i < container.len() {
        let stackable_slot = container.get(i).is_some_and(Item::is_stackable);
        if !stackable_slot {
            i += 1;
            continue;
        }

        for entry in pending.iter_mut() {
            let consumed = {
                let Some(p) = entry.as_mut() else { continue };
                let compatible = container.get(i).is_some_and(|slot| slot.can_stack_with(p));
                if !compatible {
                    continue;
                }

                if let Some(slot) = container.get_mut(i) {
                    slot.absorb(p);
                }

                while p.stack > 0 {
                    if !place_overflow(container, i, p) {
                        break;
                    }
                }

                p.stack == 0
            };

            if consumed {
                *entry = None;
            }
        }

        i += 1;
    }

    processed.extend(pending.into_iter().flatten());
}

/// Find or create an overflow slot for the anchor slot's identity and
/// transfer into it. Priority: an existing compatible slot with space,
/// then an existing empty slot, then an appended slot while under
/// capacity. Returns whether any quantity was placed.
fn place_overflow(container: &mut Container, anchor: usize, p: &mut Item) -> bool {
    let seed = match container.get(anchor) {
        Some(item) => item.split_seed(),
        None => return false,
    };

    let existing = container
        .items()
        .find(|(_, slot)| slot.can_stack_with(&seed) && slot.remaining_space() > 0)
        .map(|(idx, _)| idx);
    if let Some(idx) = existing {
        if let Some(slot) = container.get_mut(idx) {
            return slot.absorb(p) > 0;
        }
    }

    if let Some(idx) = container.find_empty_slot() {
        container.fill_slot(idx, seed.clone());
        if let Some(slot) = container.get_mut(idx) {
            return slot.absorb(p) > 0;
        }
    }

    if container.can_append() {
        container.push(seed);
        let idx = container.len() - 1;
        if let Some(slot) = container.get_mut(idx) {
            return slot.absorb(p) > 0;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use restack_inventory::item::Quality;

    fn stackable(type_id: i32, stack: u32) -> Item {
        Item::new(type_id, stack).with_max_stack(99)
    }

    #[test]
    fn test_prime_empty_container() {
        let mut container = Container::new(5);
        let mut processed = vec![stackable(1, 5), stackable(2, 3)];

        prime(&mut container, &mut processed);

        assert_eq!(container.occupied_count(), 1);
        assert_eq!(container.get(0).unwrap().type_id, 1);
        assert_eq!(processed.len(), 1);
    }

    #[test]
    fn test_prime_noop_when_occupied() {
        let mut container = Container::from_items(5, [stackable(9, 1)]);
        let mut processed = vec![stackable(1, 5)];

        prime(&mut container, &mut processed);

        assert_eq!(container.occupied_count(), 1);
        assert_eq!(processed.len(), 1);
    }

    #[test]
    fn test_prime_noop_when_nothing_processed() {
        let mut container = Container::new(5);
        let mut processed = Vec::new();

        prime(&mut container, &mut processed);

        assert!(container.is_empty());
    }

    #[test]
    fn test_prime_reuses_empty_slot_at_capacity() {
        let mut container = Container::from_items(1, [stackable(9, 1)]);
        container.clear_slot(0);
        let mut processed = vec![stackable(1, 5)];

        prime(&mut container, &mut processed);

        assert_eq!(container.len(), 1);
        assert_eq!(container.get(0).unwrap().type_id, 1);
        assert!(processed.is_empty());
    }

    #[test]
    fn test_merge_into_existing_stack() {
        let mut container = Container::from_items(5, [stackable(24, 20)]);
        let mut processed = vec![stackable(24, 5)];

        let unplaced = merge(&mut container, &mut processed);

        assert_eq!(unplaced, 0);
        assert_eq!(container.len(), 1);
        assert_eq!(container.get(0).unwrap().stack, 25);
        assert!(processed.is_empty());
    }

    #[test]
    fn test_merge_seeds_unrepresented_identity() {
        let mut container = Container::from_items(5, [stackable(24, 20)]);
        let mut processed = vec![stackable(30, 8)];

        let unplaced = merge(&mut container, &mut processed);

        assert_eq!(unplaced, 0);
        assert_eq!(container.len(), 2);
        assert_eq!(container.get(1).unwrap().type_id, 30);
        assert_eq!(container.get(1).unwrap().stack, 8);
    }

    #[test]
    fn test_merge_overflow_appends_slot() {
        let mut container = Container::from_items(2, [stackable(24, 90)]);
        let mut processed = vec![stackable(24, 30)];

        let unplaced = merge(&mut container, &mut processed);

        assert_eq!(unplaced, 0);
        assert_eq!(container.len(), 2);
        assert_eq!(container.get(0).unwrap().stack, 99);
        assert_eq!(container.get(1).unwrap().stack, 21);
    }

    #[test]
    fn test_merge_overflow_reuses_empty_slot() {
        let mut container = Container::from_items(2, [stackable(24, 90), stackable(9, 1)]);
        container.clear_slot(1);
        let mut processed = vec![stackable(24, 30)];

        let unplaced = merge(&mut container, &mut processed);

        assert_eq!(unplaced, 0);
        assert_eq!(container.len(), 2);
        assert_eq!(container.get(1).unwrap().type_id, 24);
        assert_eq!(container.get(1).unwrap().stack, 21);
    }

    #[test]
    fn test_merge_overflow_prefers_existing_compatible_slot() {
        let mut container =
            Container::from_items(3, [stackable(24, 99), stackable(24, 10)]);
        let mut processed = vec![stackable(24, 30)];

        let unplaced = merge(&mut container, &mut processed);

        assert_eq!(unplaced, 0);
        // Filled the partial stack rather than opening a third slot
        assert_eq!(container.len(), 2);
        assert_eq!(container.get(1).unwrap().stack, 40);
    }

    #[test]
    fn test_merge_capacity_exhaustion_reports_unplaced() {
        let mut container = Container::from_items(1, [stackable(24, 99)]);
        let mut processed = vec![stackable(24, 50)];

        let unplaced = merge(&mut container, &mut processed);

        // Slot count unchanged, excess reported instead of erroring
        assert_eq!(unplaced, 50);
        assert_eq!(container.len(), 1);
        assert_eq!(container.get(0).unwrap().stack, 99);
    }

    #[test]
    fn test_merge_partial_placement() {
        let mut container = Container::from_items(1, [stackable(24, 90)]);
        let mut processed = vec![stackable(24, 30)];

        let unplaced = merge(&mut container, &mut processed);

        assert_eq!(unplaced, 21);
        assert_eq!(container.get(0).unwrap().stack, 99);
    }

    #[test]
    fn test_merge_non_stackable_left_unplaced() {
        let mut container = Container::from_items(5, [stackable(24, 10)]);
        let mut processed = vec![Item::new(7, 1)];

        let unplaced = merge(&mut container, &mut processed);

        assert_eq!(unplaced, 1);
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn test_merge_quality_mismatch_opens_new_slot() {
        let mut container = Container::from_items(5, [stackable(24, 10)]);
        let mut processed = vec![stackable(24, 5).with_quality(Quality::Gold)];

        let unplaced = merge(&mut container, &mut processed);

        assert_eq!(unplaced, 0);
        assert_eq!(container.len(), 2);
        assert_eq!(container.get(1).unwrap().quality, Quality::Gold);
    }
}
