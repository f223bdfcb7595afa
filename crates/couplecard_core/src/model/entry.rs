//! Rendered entry model.
//!
//! # Responsibility
//! - Carry everything a platform widget shell needs for one refresh: display
//!   strings, per-partner badges, and the next refresh instant.
//!
//! # Invariants
//! - Derived data only; never persisted, never written back to the host.
//! - A badge always has a usable initial even when its avatar is absent.

use crate::model::widget_state::PartnerSlot;
use image::RgbaImage;

/// Fallback badge plus optional avatar for one partner.
#[derive(Debug, Clone, PartialEq)]
pub struct PartnerBadge {
    /// Single-character (grapheme) initial shown when the avatar is absent.
    pub initial: String,
    /// Badge accent color as RGB.
    pub accent_rgb: [u8; 3],
    /// Circular avatar thumbnail, exactly target-size square, or `None` when
    /// the file was missing or undecodable.
    pub avatar: Option<RgbaImage>,
}

/// Ephemeral output of one widget refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEntry {
    /// `"name1 & name2"`, or the setup prompt before first configuration.
    pub display_names: String,
    /// Inclusive day count as a decimal string, or the fallback placeholder.
    pub display_days: String,
    /// Badges in display order.
    pub badges: [PartnerBadge; 2],
    /// Epoch millis of the next local midnight, when computable. The shells
    /// schedule their timeline refresh on this instant.
    pub next_refresh_epoch_ms: Option<i64>,
}

impl RenderedEntry {
    /// Returns the badge for a slot.
    pub fn badge(&self, slot: PartnerSlot) -> &PartnerBadge {
        match slot {
            PartnerSlot::One => &self.badges[0],
            PartnerSlot::Two => &self.badges[1],
        }
    }
}
