//! Dataset load state

use phonespec_core::Dataset;
use std::sync::LazyLock;

static EMPTY: LazyLock<Dataset> = LazyLock::new(Dataset::empty);

/// Where a session's single dataset load stands
///
/// A session starts `Pending`, moves to `Ready` or `Failed` once, and never
/// leaves either. Queries issued while not `Ready` see an empty dataset.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Ready(Dataset),
    /// Carries the static message shown to the user
    Failed(String),
}

impl LoadState {
    /// The loaded dataset, or an empty one
    pub fn dataset(&self) -> &Dataset {
        match self {
            LoadState::Ready(dataset) => dataset,
            LoadState::Pending | LoadState::Failed(_) => &EMPTY,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    /// The user-facing failure message, if the load failed
    pub fn failure(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
