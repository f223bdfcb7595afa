//! Host snapshot store entry points.
//!
//! # Responsibility
//! - Load the read-only key-value snapshot the host app shares with the
//!   widget (the Rust-side analog of SharedPreferences / UserDefaults).
//! - Resolve avatar paths against the shared container directory.
//!
//! # Invariants
//! - This crate never writes to the snapshot; the host owns it.
//! - A missing snapshot file is the empty state, not an error.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod store;

pub use store::{AvatarPathResolver, JsonPrefsStore, MemoryPrefsStore, WidgetPrefs};

pub type PrefsResult<T> = Result<T, PrefsError>;

/// Snapshot load failure.
#[derive(Debug)]
pub enum PrefsError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for PrefsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read snapshot `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid snapshot `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for PrefsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}
