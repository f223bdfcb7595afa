//! Domain model for the couple widget.
//!
//! # Responsibility
//! - Define the read-only host snapshot consumed per refresh.
//! - Define the ephemeral render output handed to the platform shells.
//!
//! # Invariants
//! - `WidgetState` is never mutated by this crate.
//! - `RenderedEntry` lives only for the duration of one widget refresh.

pub mod entry;
pub mod widget_state;
