use serde::Serialize;

use crate::model::{Category, DisplayMode, Question, QuestionBatch};

/// Coarse application mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Menu,
    Playing,
    /// A fetch the user was waiting on failed. Recoverable: replaying or
    /// selecting a category again issues a fresh fetch.
    Error,
}

/// A fetch the controller must execute, tagged with the generation that
/// requested it so late completions for superseded requests can be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub category: Category,
    pub generation: u64,
}

/// The session state machine: one instance per application run.
///
/// All operations are synchronous. The ones that need questions return a
/// [`FetchRequest`] for the caller to execute; the outcome comes back through
/// [`Session::install_batch`] or [`Session::fetch_failed`]. The generation
/// counter is the replay token: it bumps on every request, which both forces
/// a re-fetch for an unchanged category and identifies stale completions.
#[derive(Debug)]
pub struct Session {
    phase: Phase,
    category: Option<Category>,
    questions: Option<QuestionBatch>,
    generation: u64,
    auto_start: bool,
    display_mode: DisplayMode,
}

impl Session {
    #[must_use]
    pub fn new(display_mode: DisplayMode) -> Self {
        Self {
            phase: Phase::Menu,
            category: None,
            questions: None,
            generation: 0,
            auto_start: false,
            display_mode,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// The current batch, or empty before the first successful fetch.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        self.questions
            .as_ref()
            .map_or(&[], QuestionBatch::questions)
    }

    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Resolve a category label and request a fetch that will start the game.
    ///
    /// Unrecognized labels are ignored: no state change, no fetch.
    pub fn select_category(&mut self, label: &str) -> Option<FetchRequest> {
        let category = Category::from_label(label)?;
        self.category = Some(category);
        self.auto_start = true;
        Some(self.next_request(category))
    }

    /// Request a fresh batch for the current category and start again.
    ///
    /// Only meaningful once a game has started: a no-op from the menu, and
    /// also the retry path out of [`Phase::Error`].
    pub fn replay(&mut self) -> Option<FetchRequest> {
        if self.phase == Phase::Menu {
            return None;
        }
        let category = self.category?;
        self.auto_start = true;
        Some(self.next_request(category))
    }

    /// Go back to the menu immediately. When a category is already selected,
    /// also requests a background refresh so the next round has fresh
    /// questions ready; its completion must not leave the menu.
    pub fn return_to_menu(&mut self) -> Option<FetchRequest> {
        self.phase = Phase::Menu;
        self.auto_start = false;
        let category = self.category?;
        Some(self.next_request(category))
    }

    /// Install a fetched batch, replacing the previous one wholesale.
    ///
    /// Completions for superseded generations are discarded. Returns whether
    /// the batch was installed. Flips to [`Phase::Playing`] only when the
    /// request that produced the batch asked for an auto-start.
    pub fn install_batch(&mut self, generation: u64, batch: QuestionBatch) -> bool {
        if generation != self.generation {
            return false;
        }
        self.questions = Some(batch);
        if self.auto_start {
            self.phase = Phase::Playing;
        }
        true
    }

    /// Record a failed fetch. Stale failures are discarded. A failure the
    /// user was waiting on lands in [`Phase::Error`]; a failed background
    /// refresh leaves the current phase untouched.
    pub fn fetch_failed(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        if self.auto_start {
            self.phase = Phase::Error;
        }
        true
    }

    pub fn set_display_mode(&mut self, display_mode: DisplayMode) {
        self.display_mode = display_mode;
    }

    fn next_request(&mut self, category: Category) -> FetchRequest {
        self.generation += 1;
        FetchRequest {
            category,
            generation: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BATCH_SIZE, Question};

    fn build_batch() -> QuestionBatch {
        let questions = (0..BATCH_SIZE)
            .map(|index| {
                Question::new(
                    index,
                    format!("Q{index}"),
                    "A",
                    vec!["B".into(), "C".into(), "D".into()],
                    vec!["A".into(), "B".into(), "C".into(), "D".into()],
                )
                .unwrap()
            })
            .collect();
        QuestionBatch::new(questions).unwrap()
    }

    #[test]
    fn starts_in_menu_with_no_questions() {
        let session = Session::new(DisplayMode::Light);
        assert_eq!(session.phase(), Phase::Menu);
        assert!(session.questions().is_empty());
        assert_eq!(session.category(), None);
    }

    #[test]
    fn select_then_install_starts_the_game() {
        let mut session = Session::new(DisplayMode::Light);
        let request = session.select_category("medium").unwrap();
        assert_eq!(request.category, Category::Medium);

        // Still in the menu until the fetch lands.
        assert_eq!(session.phase(), Phase::Menu);

        assert!(session.install_batch(request.generation, build_batch()));
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.questions().len(), BATCH_SIZE);
    }

    #[test]
    fn unknown_label_is_a_silent_noop() {
        let mut session = Session::new(DisplayMode::Light);
        assert!(session.select_category("Geography").is_none());
        assert_eq!(session.phase(), Phase::Menu);
        assert_eq!(session.category(), None);
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn return_to_menu_is_synchronous_and_refreshes_in_background() {
        let mut session = Session::new(DisplayMode::Light);
        let request = session.select_category("easy").unwrap();
        session.install_batch(request.generation, build_batch());
        assert_eq!(session.phase(), Phase::Playing);

        let refresh = session.return_to_menu().unwrap();
        assert_eq!(session.phase(), Phase::Menu);
        assert_eq!(refresh.category, Category::Easy);

        // The background completion must not re-enter the game.
        assert!(session.install_batch(refresh.generation, build_batch()));
        assert_eq!(session.phase(), Phase::Menu);
    }

    #[test]
    fn replay_bumps_the_generation_for_an_unchanged_category() {
        let mut session = Session::new(DisplayMode::Light);
        let first = session.select_category("hard").unwrap();
        session.install_batch(first.generation, build_batch());

        let second = session.replay().unwrap();
        assert_eq!(second.category, first.category);
        assert!(second.generation > first.generation);

        session.install_batch(second.generation, build_batch());
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn replay_from_menu_is_rejected() {
        let mut session = Session::new(DisplayMode::Light);
        assert!(session.replay().is_none());
    }

    #[test]
    fn stale_completions_are_discarded() {
        let mut session = Session::new(DisplayMode::Light);
        let stale = session.select_category("easy").unwrap();
        let current = session.select_category("hard").unwrap();

        assert!(!session.install_batch(stale.generation, build_batch()));
        assert!(session.questions().is_empty());
        assert_eq!(session.phase(), Phase::Menu);

        assert!(session.install_batch(current.generation, build_batch()));
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn awaited_failure_enters_error_and_replay_recovers() {
        let mut session = Session::new(DisplayMode::Light);
        let request = session.select_category("Music").unwrap();
        assert!(session.fetch_failed(request.generation));
        assert_eq!(session.phase(), Phase::Error);

        let retry = session.replay().unwrap();
        assert!(session.install_batch(retry.generation, build_batch()));
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn background_failure_keeps_the_menu() {
        let mut session = Session::new(DisplayMode::Light);
        let request = session.select_category("Film").unwrap();
        session.install_batch(request.generation, build_batch());

        let refresh = session.return_to_menu().unwrap();
        assert!(session.fetch_failed(refresh.generation));
        assert_eq!(session.phase(), Phase::Menu);
    }

    #[test]
    fn install_replaces_questions_wholesale() {
        let mut session = Session::new(DisplayMode::Light);
        let first = session.select_category("Sport").unwrap();
        session.install_batch(first.generation, build_batch());
        let before = session.questions().to_vec();

        let second = session.replay().unwrap();
        session.install_batch(second.generation, build_batch());
        assert_eq!(session.questions().len(), before.len());
    }
}
