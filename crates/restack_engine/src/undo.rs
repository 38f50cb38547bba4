//! Undo snapshots of container state

use restack_inventory::container::Container;

/// Default number of snapshots kept before the oldest is evicted
pub const DEFAULT_UNDO_DEPTH: usize = 16;

/// Bounded LIFO of container snapshots.
///
/// The caller pushes a snapshot before running a transform and pops it
/// to restore the pre-transform state. The engine itself never touches
/// this; it is owned by the surrounding interaction layer.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    snapshots: Vec<Container>,
    limit: usize,
}

impl UndoStack {
    /// Create an undo stack with the default depth
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_UNDO_DEPTH)
    }

    /// Create an undo stack keeping at most `limit` snapshots
    pub fn with_limit(limit: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Save a snapshot, evicting the oldest when at the depth limit
    pub fn push(&mut self, snapshot: Container) {
        if self.snapshots.len() == self.limit {
            self.snapshots.remove(0);
        }
        self.snapshots.push(snapshot);
    }

    /// Take back the most recent snapshot
    pub fn pop(&mut self) -> Option<Container> {
        self.snapshots.pop()
    }

    /// Whether a snapshot is available
    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    /// Number of stored snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the stack is empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Drop all snapshots
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restack_inventory::item::Item;

    fn container_with(type_id: i32) -> Container {
        Container::from_items(5, [Item::new(type_id, 1).with_max_stack(99)])
    }

    #[test]
    fn test_undo_is_lifo() {
        let mut undo = UndoStack::new();
        assert!(!undo.can_undo());

        undo.push(container_with(1));
        undo.push(container_with(2));

        assert_eq!(undo.pop().unwrap().get(0).unwrap().type_id, 2);
        assert_eq!(undo.pop().unwrap().get(0).unwrap().type_id, 1);
        assert!(undo.pop().is_none());
    }

    #[test]
    fn test_depth_limit_evicts_oldest() {
        let mut undo = UndoStack::with_limit(2);

        undo.push(container_with(1));
        undo.push(container_with(2));
        undo.push(container_with(3));

        assert_eq!(undo.len(), 2);
        assert_eq!(undo.pop().unwrap().get(0).unwrap().type_id, 3);
        assert_eq!(undo.pop().unwrap().get(0).unwrap().type_id, 2);
    }

    #[test]
    fn test_clear() {
        let mut undo = UndoStack::new();
        undo.push(container_with(1));

        undo.clear();

        assert!(undo.is_empty());
        assert!(!undo.can_undo());
    }
}
