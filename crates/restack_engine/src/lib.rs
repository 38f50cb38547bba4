//! Restack Engine - Attribute Transform and Stack Consolidation
//!
//! This crate mutates a bounded set of stacked items according to
//! configurable filter rules (smashing a quality tier or a color back to
//! its default), then re-consolidates the mutated items into their
//! fixed-capacity container, merging into existing compatible stacks
//! before creating new ones.
//!
//! # Features
//!
//! - Filter rules: ignore by item id, by category, or per quality tier,
//!   with per-tier exception overrides
//! - Bulk transform of a whole container, or a single item in place
//! - Restacking that honors per-slot and container capacity
//! - Best-effort overflow handling with an observable unplaced count
//! - Undo snapshots of container state
//! - JSON persistence for the filter configuration
//!
//! # Example
//!
//! ```
//! use restack_engine::prelude::*;
//! use restack_inventory::prelude::*;
//!
//! let mut container = Container::from_items(36, [
//!     Item::new(24, 20).with_max_stack(99),
//!     Item::new(24, 5).with_quality(Quality::Iridium).with_max_stack(99),
//! ]);
//!
//! let outcome = transform_and_restack(
//!     &mut container,
//!     &FilterConfig::default(),
//!     TransformKind::Quality,
//! );
//!
//! assert!(outcome.changed);
//! assert_eq!(container.quantity_of(24, Quality::Normal, None), 25);
//! ```

pub mod config;
pub mod engine;
pub mod filter;
pub mod merge;
pub mod transform;
pub mod undo;

pub mod prelude {
    pub use crate::config::{load_filter_config, store_filter_config, ConfigError};
    pub use crate::engine::{transform_and_restack, RestackOutcome};
    pub use crate::filter::{FilterConfig, TierFilter, COLORABLE_CATEGORY};
    pub use crate::merge::{merge, prime};
    pub use crate::transform::{transform, transform_single, TransformKind};
    pub use crate::undo::UndoStack;
}

pub use prelude::*;
