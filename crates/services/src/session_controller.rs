use std::sync::Arc;

use trivia_core::model::{Category, DisplayMode, Question};
use trivia_core::session::{FetchRequest, Phase, Session};

use crate::error::SessionError;
use crate::preference_service::PreferenceService;
use crate::trivia_api::QuestionSource;

/// Owns the session state machine and executes the fetches it requests.
///
/// The controller is the only writer of session state; the rendering layer
/// reads the published snapshots (`phase`, `questions`, `display_mode`) and
/// feeds intents back through the four operations below. Fetches are awaited
/// inline, so at most one is in flight; the generation tag on every request
/// additionally drops completions that a newer request has superseded.
pub struct SessionController {
    session: Session,
    source: Arc<dyn QuestionSource>,
    preferences: PreferenceService,
}

impl SessionController {
    /// Build a controller with the display preference restored from storage.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the stored preference cannot be read.
    pub async fn start(
        source: Arc<dyn QuestionSource>,
        preferences: PreferenceService,
    ) -> Result<Self, SessionError> {
        let display_mode = preferences.load_display_mode().await?;
        Ok(Self {
            session: Session::new(display_mode),
            source,
            preferences,
        })
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        self.session.questions()
    }

    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.session.category()
    }

    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.session.display_mode()
    }

    /// Resolve a category label, fetch a batch for it, and start the game
    /// once the batch lands. Unrecognized labels are silently ignored.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when the fetch fails; the session is left in
    /// the recoverable `Error` phase.
    pub async fn select_category(&mut self, label: &str) -> Result<(), SessionError> {
        let Some(request) = self.session.select_category(label) else {
            return Ok(());
        };
        self.run_fetch(request).await
    }

    /// Fetch a fresh batch for the current category and play again. Also the
    /// retry path out of the `Error` phase. No-op from the menu.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when the fetch fails.
    pub async fn replay(&mut self) -> Result<(), SessionError> {
        let Some(request) = self.session.replay() else {
            return Ok(());
        };
        self.run_fetch(request).await
    }

    /// Return to the menu. The phase flips before any network activity; the
    /// refresh that follows only pre-warms the next round and never changes
    /// the phase, even when it fails.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when the background refresh fails, so the
    /// caller can report it. The menu stays usable either way.
    pub async fn return_to_menu(&mut self) -> Result<(), SessionError> {
        let Some(request) = self.session.return_to_menu() else {
            return Ok(());
        };
        self.run_fetch(request).await
    }

    /// Persist the flipped display preference and mirror it into the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the preference cannot be written.
    pub async fn toggle_dark_mode(&mut self) -> Result<DisplayMode, SessionError> {
        let display_mode = self.preferences.toggle_display_mode().await?;
        self.session.set_display_mode(display_mode);
        Ok(display_mode)
    }

    async fn run_fetch(&mut self, request: FetchRequest) -> Result<(), SessionError> {
        match self.source.fetch_batch(request.category).await {
            Ok(batch) => {
                self.session.install_batch(request.generation, batch);
                Ok(())
            }
            Err(err) => {
                self.session.fetch_failed(request.generation);
                Err(err.into())
            }
        }
    }
}
