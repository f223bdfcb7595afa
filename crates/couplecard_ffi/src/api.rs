//! FFI use-case API for the widget shells.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the platform widget
//!   extensions (Android AppWidget / iOS WidgetKit) via FRB.
//! - Keep the degrade-only error contract: a refresh call always returns a
//!   renderable envelope.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Avatar bitmaps cross the boundary as PNG bytes.

use couplecard_core::{
    core_version as core_version_inner, encode_png, init_logging as init_logging_inner,
    now_epoch_ms, ping as ping_inner, render_entry, JsonPrefsStore, PartnerSlot, RenderedEntry,
    WidgetPrefs, AVATAR_TARGET_PX, DAYS_PLACEHOLDER, SETUP_PROMPT,
};
use log::warn;

const AVATAR_PX_MAX: u32 = 512;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory inside the shared container.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for an identical `level + log_dir`; reconfiguration attempts
///   return an error message.
/// - Never panics; returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Fully derived widget entry for one refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetEntryResponse {
    /// Whether the snapshot loaded cleanly. Placeholder fields are still
    /// renderable when `false`.
    pub ok: bool,
    /// `"name1 & name2"`, or the setup prompt.
    pub display_names: String,
    /// Inclusive day count, or the fallback placeholder.
    pub display_days: String,
    /// Initial badge text for the first partner.
    pub initial1: String,
    /// Initial badge text for the second partner.
    pub initial2: String,
    /// First partner circular avatar as PNG bytes, absent on any failure.
    pub avatar1_png: Option<Vec<u8>>,
    /// Second partner circular avatar as PNG bytes.
    pub avatar2_png: Option<Vec<u8>>,
    /// Epoch millis of the next local midnight, for timeline scheduling.
    pub next_refresh_epoch_ms: Option<i64>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Derives the widget entry from the host snapshot.
///
/// Input semantics:
/// - `prefs_path`: snapshot file the host app writes into the shared
///   container.
/// - `container_dir`: shared container directory for relative avatar paths.
/// - `avatar_px`: density-scaled avatar edge length; `0` selects the
///   default.
///
/// # FFI contract
/// - Sync call, file-system backed execution.
/// - Never panics; snapshot failures return a placeholder envelope with
///   `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn widget_entry(
    prefs_path: String,
    container_dir: Option<String>,
    avatar_px: u32,
) -> WidgetEntryResponse {
    let store = match container_dir {
        Some(dir) => JsonPrefsStore::with_container_dir(prefs_path, dir),
        None => JsonPrefsStore::new(prefs_path),
    };

    let state = match store.snapshot() {
        Ok(state) => state,
        Err(err) => return placeholder_response(format!("widget_entry failed: {err}")),
    };

    let entry = render_entry(
        &state,
        &store.resolver(),
        now_epoch_ms(),
        normalize_avatar_px(avatar_px),
    );
    to_response(entry)
}

fn normalize_avatar_px(avatar_px: u32) -> u32 {
    match avatar_px {
        0 => AVATAR_TARGET_PX,
        value if value > AVATAR_PX_MAX => AVATAR_PX_MAX,
        value => value,
    }
}

fn to_response(entry: RenderedEntry) -> WidgetEntryResponse {
    let avatar1_png = badge_png(&entry, PartnerSlot::One);
    let avatar2_png = badge_png(&entry, PartnerSlot::Two);
    WidgetEntryResponse {
        ok: true,
        display_names: entry.display_names,
        display_days: entry.display_days,
        initial1: entry.badges[0].initial.clone(),
        initial2: entry.badges[1].initial.clone(),
        avatar1_png,
        avatar2_png,
        next_refresh_epoch_ms: entry.next_refresh_epoch_ms,
        message: "Entry rendered.".to_string(),
    }
}

fn badge_png(entry: &RenderedEntry, slot: PartnerSlot) -> Option<Vec<u8>> {
    let avatar = entry.badge(slot).avatar.as_ref()?;
    match encode_png(avatar) {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            warn!("event=avatar_encode module=ffi status=error error={err}");
            None
        }
    }
}

fn placeholder_response(message: String) -> WidgetEntryResponse {
    WidgetEntryResponse {
        ok: false,
        display_names: SETUP_PROMPT.to_string(),
        display_days: DAYS_PLACEHOLDER.to_string(),
        initial1: "?".to_string(),
        initial2: "?".to_string(),
        avatar1_png: None,
        avatar2_png: None,
        next_refresh_epoch_ms: None,
        message,
    }
}
