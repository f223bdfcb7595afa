//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `couplecard_core` linkage.
//! - Render a snapshot file from argv for quick local inspection without a
//!   device.

use couplecard_core::{
    now_epoch_ms, render_entry, JsonPrefsStore, PartnerSlot, WidgetPrefs, AVATAR_TARGET_PX,
};

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from the platform widget runtimes.
    println!("couplecard_core ping={}", couplecard_core::ping());
    println!("couplecard_core version={}", couplecard_core::core_version());

    let Some(prefs_path) = std::env::args().nth(1) else {
        return;
    };

    let store = JsonPrefsStore::new(&prefs_path);
    let state = match store.snapshot() {
        Ok(state) => state,
        Err(err) => {
            eprintln!("snapshot load failed: {err}");
            std::process::exit(1);
        }
    };

    let entry = render_entry(&state, &store.resolver(), now_epoch_ms(), AVATAR_TARGET_PX);
    println!("names={}", entry.display_names);
    println!("days={}", entry.display_days);
    for slot in PartnerSlot::ALL {
        let badge = entry.badge(slot);
        println!(
            "badge slot={slot:?} initial={} avatar={}",
            badge.initial,
            if badge.avatar.is_some() { "yes" } else { "no" }
        );
    }
    if let Some(refresh) = entry.next_refresh_epoch_ms {
        println!("next_refresh_epoch_ms={refresh}");
    }
}
