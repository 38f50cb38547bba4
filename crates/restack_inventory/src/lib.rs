//! Restack Inventory - Slotted Container and Item Model
//!
//! This crate provides the data model consumed by the restack engine.
//!
//! # Features
//!
//! - Items with type identity, category, quality tier, and optional color
//! - Item stacking with per-item max stack sizes (1 = not stackable)
//! - Fixed-capacity containers of ordered slots
//! - Mutual-stackability predicate (same type, quality, and color)
//! - Quantity transfer between stacks with overflow reporting
//!
//! # Example
//!
//! ```
//! use restack_inventory::prelude::*;
//!
//! let mut container = Container::new(36);
//! container.push(Item::new(24, 20).with_quality(Quality::Gold).with_max_stack(99));
//!
//! let slot = container.get(0).unwrap();
//! assert_eq!(slot.quality, Quality::Gold);
//! ```

pub mod container;
pub mod item;

pub mod prelude {
    pub use crate::container::Container;
    pub use crate::item::{Item, ItemColor, Quality};
}

pub use prelude::*;
