//! Widget entry derivation.
//!
//! # Responsibility
//! - Compose day count, initials, and avatar thumbnails into one
//!   `RenderedEntry` per refresh.
//!
//! # Invariants
//! - Derivation is synchronous, stateless, and never fails; every missing
//!   input degrades to a placeholder field.

pub mod entry;

pub use entry::{derive_initial, render_entry, SETUP_PROMPT};
