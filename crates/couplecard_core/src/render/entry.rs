//! Entry composition.
//!
//! # Responsibility
//! - Run the per-refresh derivation in display order: names, day count,
//!   badges, next refresh instant.
//!
//! # Invariants
//! - The output always carries two badges with usable initials.
//! - Avatar failures only ever cost the bitmap, never the whole entry.

use crate::avatar::try_load_circular_avatar;
use crate::daycount::{display_days, next_midnight_epoch_ms};
use crate::model::entry::{PartnerBadge, RenderedEntry};
use crate::model::widget_state::{PartnerSlot, WidgetState};
use crate::prefs::store::AvatarPathResolver;
use log::info;
use std::time::Instant;

/// Shown instead of the names before the host completes setup.
pub const SETUP_PROMPT: &str = "Tap to Setup";

/// Derives the complete entry for one widget refresh.
pub fn render_entry(
    state: &WidgetState,
    resolver: &AvatarPathResolver,
    now_epoch_ms: i64,
    avatar_px: u32,
) -> RenderedEntry {
    let started_at = Instant::now();

    let display_names = if state.is_unconfigured() {
        SETUP_PROMPT.to_string()
    } else {
        format!("{} & {}", state.name1, state.name2)
    };
    let display_days = display_days(
        state.start_date_ms,
        now_epoch_ms,
        state.days_fallback.as_deref(),
    );

    let badges = PartnerSlot::ALL.map(|slot| {
        let avatar = state
            .avatar_path(slot)
            .and_then(|raw| resolver.resolve(raw))
            .and_then(|path| try_load_circular_avatar(&path, avatar_px));
        PartnerBadge {
            initial: display_initial(state.stored_initial(slot), state.name(slot)),
            accent_rgb: slot.accent_rgb(),
            avatar,
        }
    });
    let avatar_count = badges.iter().filter(|badge| badge.avatar.is_some()).count();
    let next_refresh_epoch_ms = next_midnight_epoch_ms(now_epoch_ms);

    info!(
        "event=render_entry module=render status=ok duration_ms={} days={} avatars={}",
        started_at.elapsed().as_millis(),
        display_days,
        avatar_count
    );

    RenderedEntry {
        display_names,
        display_days,
        badges,
        next_refresh_epoch_ms,
    }
}

/// First character of `name`, uppercased, or `"?"` when there is none.
pub fn derive_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|first| first.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

fn display_initial(stored: Option<&str>, name: &str) -> String {
    match stored.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => derive_initial(name),
    }
}
