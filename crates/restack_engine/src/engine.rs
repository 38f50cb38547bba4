//! Engine entry point: transform, prime, then restack

use crate::filter::FilterConfig;
use crate::merge::{merge, prime};
use crate::transform::{transform, TransformKind};
use restack_inventory::container::Container;

/// What one engine call did to the container.
///
/// `changed` is the caller's feedback-cue signal: true iff the transform
/// stage extracted at least one item. `unplaced` surfaces quantity the
/// merge phase had to drop at capacity, which would otherwise vanish
/// silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestackOutcome {
    /// Whether any item was transformed
    pub changed: bool,
    /// Number of item stacks extracted and mutated
    pub transformed: usize,
    /// Quantity that could not be placed back into the container
    pub unplaced: u32,
}

/// Run one transform-and-restack pass over the container.
///
/// Synchronous and deterministic; the exclusive borrow is the whole
/// concurrency story. Best-effort throughout: ineligible items are
/// skipped and overflow exhaustion truncates instead of failing.
pub fn transform_and_restack(
    container: &mut Container,
    config: &FilterConfig,
    kind: TransformKind,
) -> RestackOutcome {
    let mut processed = transform(container, config, kind);
    if processed.is_empty() {
        return RestackOutcome::default();
    }

    let transformed = processed.len();
    log::debug!("transformed {} item stack(s) ({:?})", transformed, kind);

    prime(container, &mut processed);
    let unplaced = merge(container, &mut processed);

    if unplaced > 0 {
        log::warn!(
            "container at capacity: {} unit(s) could not be restacked",
            unplaced
        );
    }

    RestackOutcome {
        changed: true,
        transformed,
        unplaced,
    }
}
