//! Host snapshot model.
//!
//! # Responsibility
//! - Mirror the key-value snapshot the host app writes into the shared
//!   container (`name1`, `name2`, `startDate`, `avatar1Path`, `avatar2Path`,
//!   `days`, `initial1`, `initial2`).
//! - Provide per-partner accessors so render code never indexes fields by
//!   number.
//!
//! # Invariants
//! - Field wire names match the host keys exactly; unknown keys are ignored.
//! - A missing snapshot deserializes to the all-default state, which renders
//!   as the setup prompt with placeholder values.

use serde::{Deserialize, Serialize};

/// Identifies one of the two partners on the card.
///
/// The accent colors are the card palette the host app uses for the
/// fallback initial badges (coral for the first partner, teal for the
/// second).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartnerSlot {
    One,
    Two,
}

impl PartnerSlot {
    /// Both slots in display order (left to right on the card).
    pub const ALL: [PartnerSlot; 2] = [PartnerSlot::One, PartnerSlot::Two];

    /// Badge accent color as RGB.
    pub fn accent_rgb(self) -> [u8; 3] {
        match self {
            // #FF6B6B
            Self::One => [0xFF, 0x6B, 0x6B],
            // #4ECDC4
            Self::Two => [0x4E, 0xCD, 0xC4],
        }
    }
}

/// Read-only snapshot of everything the host app shares with the widget.
///
/// Produced externally by the host, consumed once per render, never mutated
/// here. Optional fields stay `None` until the host has written them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetState {
    /// First partner display name. Empty until setup completes.
    pub name1: String,
    /// Second partner display name. Empty until setup completes.
    pub name2: String,
    /// Relationship start instant in epoch milliseconds. Zero or absent
    /// means "not configured".
    #[serde(rename = "startDate")]
    pub start_date_ms: Option<i64>,
    /// Avatar file path for the first partner, absolute or relative to the
    /// shared container.
    #[serde(rename = "avatar1Path")]
    pub avatar1_path: Option<String>,
    /// Avatar file path for the second partner.
    #[serde(rename = "avatar2Path")]
    pub avatar2_path: Option<String>,
    /// Host-precomputed day string, used only when the start date cannot be
    /// counted locally.
    #[serde(rename = "days")]
    pub days_fallback: Option<String>,
    /// Host-precomputed initial for the first partner. Preferred over
    /// derivation when present.
    pub initial1: Option<String>,
    /// Host-precomputed initial for the second partner.
    pub initial2: Option<String>,
}

impl WidgetState {
    /// Returns the display name for a slot.
    pub fn name(&self, slot: PartnerSlot) -> &str {
        match slot {
            PartnerSlot::One => &self.name1,
            PartnerSlot::Two => &self.name2,
        }
    }

    /// Returns the raw avatar path for a slot, when the host set one.
    pub fn avatar_path(&self, slot: PartnerSlot) -> Option<&str> {
        match slot {
            PartnerSlot::One => self.avatar1_path.as_deref(),
            PartnerSlot::Two => self.avatar2_path.as_deref(),
        }
    }

    /// Returns the host-precomputed initial for a slot, when present.
    pub fn stored_initial(&self, slot: PartnerSlot) -> Option<&str> {
        match slot {
            PartnerSlot::One => self.initial1.as_deref(),
            PartnerSlot::Two => self.initial2.as_deref(),
        }
    }

    /// Whether the host has not completed setup yet.
    ///
    /// Both names empty is the signal the originals use to show the setup
    /// prompt instead of "name1 & name2".
    pub fn is_unconfigured(&self) -> bool {
        self.name1.is_empty() && self.name2.is_empty()
    }
}
