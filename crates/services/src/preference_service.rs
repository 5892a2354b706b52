use std::sync::Arc;

use storage::repository::{DARK_MODE_KEY, PreferenceRepository};
use trivia_core::model::DisplayMode;

use crate::error::PreferenceError;

/// Durable single-key display preference: read at startup, written on every
/// toggle. Single reader/writer, no transaction requirements.
#[derive(Clone)]
pub struct PreferenceService {
    repo: Arc<dyn PreferenceRepository>,
}

impl PreferenceService {
    #[must_use]
    pub fn new(repo: Arc<dyn PreferenceRepository>) -> Self {
        Self { repo }
    }

    /// Load the persisted display mode (light when nothing is stored).
    ///
    /// # Errors
    ///
    /// Returns `PreferenceError` on storage failures.
    pub async fn load_display_mode(&self) -> Result<DisplayMode, PreferenceError> {
        let stored = self.repo.get_preference(DARK_MODE_KEY).await?;
        Ok(DisplayMode::from_stored(stored.as_deref()))
    }

    /// Flip the stored mode and return the new value so the caller can update
    /// its in-memory state synchronously.
    ///
    /// # Errors
    ///
    /// Returns `PreferenceError` if the read or the write fails.
    pub async fn toggle_display_mode(&self) -> Result<DisplayMode, PreferenceError> {
        let next = self.load_display_mode().await?.toggled();
        self.repo.set_preference(DARK_MODE_KEY, next.as_str()).await?;
        Ok(next)
    }
}
