//! Item definitions, quality tiers, and colors

use serde::{Deserialize, Serialize};

/// Item quality tier.
///
/// The tier values are the literal set `{0, 1, 2, 4}` and are not
/// contiguous; halving is defined on the literal values, not the rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Quality {
    /// No quality (tier 0)
    Normal,
    /// Silver (tier 1)
    Silver,
    /// Gold (tier 2)
    Gold,
    /// Iridium (tier 4)
    Iridium,
}

impl Default for Quality {
    fn default() -> Self {
        Self::Normal
    }
}

impl Quality {
    /// Get the literal tier value
    pub fn value(&self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Silver => 1,
            Self::Gold => 2,
            Self::Iridium => 4,
        }
    }

    /// Look up a tier by its literal value
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Normal),
            1 => Some(Self::Silver),
            2 => Some(Self::Gold),
            4 => Some(Self::Iridium),
            _ => None,
        }
    }

    /// Integer halving on literal tier values: 4 -> 2 -> 1 -> 0
    pub fn halved(&self) -> Self {
        match self {
            Self::Iridium => Self::Gold,
            Self::Gold => Self::Silver,
            Self::Silver => Self::Normal,
            Self::Normal => Self::Normal,
        }
    }
}

impl From<Quality> for u8 {
    fn from(q: Quality) -> u8 {
        q.value()
    }
}

impl TryFrom<u8> for Quality {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| format!("invalid quality tier: {}", value))
    }
}

/// RGBA color attribute for colorable items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl ItemColor {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// A stack of identical items occupying one container slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identity of the item kind
    pub type_id: i32,
    /// Coarse classification, used only for filter matching
    pub category: i32,
    /// Quality tier
    pub quality: Quality,
    /// Optional color (None = uncolored)
    pub color: Option<ItemColor>,
    /// Current quantity in this stack
    pub stack: u32,
    /// Maximum stack size (1 = not stackable)
    pub max_stack: u32,
}

impl Item {
    /// Create a new item stack
    pub fn new(type_id: i32, stack: u32) -> Self {
        Self {
            type_id,
            category: 0,
            quality: Quality::Normal,
            color: None,
            stack: stack.max(1),
            max_stack: 1,
        }
    }

    /// Set category
    pub fn with_category(mut self, category: i32) -> Self {
        self.category = category;
        self
    }

    /// Set quality tier
    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    /// Set color
    pub fn with_color(mut self, color: ItemColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Set max stack size
    pub fn with_max_stack(mut self, max: u32) -> Self {
        self.max_stack = max.max(1);
        self
    }

    /// Check if stackable
    pub fn is_stackable(&self) -> bool {
        self.max_stack > 1
    }

    /// Remaining quantity this stack can still hold
    pub fn remaining_space(&self) -> u32 {
        self.max_stack.saturating_sub(self.stack)
    }

    /// Mutual stackability: both stackable, same type, quality, and color
    pub fn can_stack_with(&self, other: &Item) -> bool {
        self.is_stackable()
            && other.is_stackable()
            && self.type_id == other.type_id
            && self.quality == other.quality
            && self.color == other.color
    }

    /// Transfer as much of the donor stack as fits into this one.
    /// Returns the amount actually transferred; the donor keeps the rest.
    pub fn absorb(&mut self, donor: &mut Item) -> u32 {
        let transferred = self.remaining_space().min(donor.stack);
        self.stack += transferred;
        donor.stack -= transferred;
        transferred
    }

    /// Clone this item as a zero-quantity stack, used to seed overflow slots
    pub fn split_seed(&self) -> Item {
        let mut seed = self.clone();
        seed.stack = 0;
        seed
    }
}
