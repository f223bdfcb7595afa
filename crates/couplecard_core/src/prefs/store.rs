//! Snapshot store implementations.
//!
//! # Responsibility
//! - Provide the `WidgetPrefs` read seam plus the JSON-file store used in
//!   production and an in-memory store for tests.
//!
//! # Invariants
//! - `snapshot()` is read-only and side-effect free apart from logging.
//! - Unknown snapshot keys are ignored so host-side additions never break
//!   older widget builds.

use super::{PrefsError, PrefsResult};
use crate::model::widget_state::WidgetState;
use log::info;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read seam over the host snapshot.
pub trait WidgetPrefs {
    /// Returns the current host snapshot.
    fn snapshot(&self) -> PrefsResult<WidgetState>;
}

/// Resolves raw avatar path values against the shared container.
///
/// Mirrors the host widget lookup order: an existing path as written wins;
/// otherwise the value is joined to the shared container directory.
#[derive(Debug, Clone, Default)]
pub struct AvatarPathResolver {
    container_dir: Option<PathBuf>,
}

impl AvatarPathResolver {
    pub fn new(container_dir: Option<PathBuf>) -> Self {
        Self { container_dir }
    }

    /// Returns the first existing candidate for `raw`, or `None`.
    pub fn resolve(&self, raw: &str) -> Option<PathBuf> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let direct = Path::new(trimmed);
        if direct.exists() {
            return Some(direct.to_path_buf());
        }
        let joined = self.container_dir.as_ref()?.join(trimmed);
        joined.exists().then_some(joined)
    }
}

/// JSON snapshot file written by the host app into the shared container.
#[derive(Debug, Clone)]
pub struct JsonPrefsStore {
    path: PathBuf,
    container_dir: Option<PathBuf>,
}

impl JsonPrefsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            container_dir: None,
        }
    }

    /// Store whose relative avatar paths resolve inside `container_dir`.
    pub fn with_container_dir(path: impl Into<PathBuf>, container_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            container_dir: Some(container_dir.into()),
        }
    }

    /// Path resolver matching this store's container configuration.
    pub fn resolver(&self) -> AvatarPathResolver {
        AvatarPathResolver::new(self.container_dir.clone())
    }
}

impl WidgetPrefs for JsonPrefsStore {
    fn snapshot(&self) -> PrefsResult<WidgetState> {
        let raw = match std::fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                // Widget placed before the host ever wrote a snapshot.
                info!(
                    "event=prefs_snapshot module=prefs status=empty path={}",
                    self.path.display()
                );
                return Ok(WidgetState::default());
            }
            Err(source) => {
                return Err(PrefsError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_slice(&raw).map_err(|source| PrefsError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

/// Fixed-state store for tests and previews.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefsStore {
    state: WidgetState,
}

impl MemoryPrefsStore {
    pub fn new(state: WidgetState) -> Self {
        Self { state }
    }
}

impl WidgetPrefs for MemoryPrefsStore {
    fn snapshot(&self) -> PrefsResult<WidgetState> {
        Ok(self.state.clone())
    }
}
