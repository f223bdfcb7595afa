//! Core widget logic for CoupleCard.
//! This crate is the single source of truth for widget-entry derivation.

pub mod avatar;
pub mod daycount;
pub mod logging;
pub mod model;
pub mod prefs;
pub mod render;

pub use avatar::{
    encode_png, load_circular_avatar, try_load_circular_avatar, AvatarError, AvatarResult,
    AVATAR_TARGET_PX,
};
pub use daycount::{
    days_together, display_days, next_midnight_epoch_ms, now_epoch_ms, DAYS_PLACEHOLDER,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{PartnerBadge, RenderedEntry};
pub use model::widget_state::{PartnerSlot, WidgetState};
pub use prefs::store::{AvatarPathResolver, JsonPrefsStore, MemoryPrefsStore, WidgetPrefs};
pub use prefs::{PrefsError, PrefsResult};
pub use render::entry::{derive_initial, render_entry, SETUP_PROMPT};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
