#![forbid(unsafe_code)]

pub mod error;
pub mod preference_service;
pub mod session_controller;
pub mod shuffle;
pub mod trivia_api;

pub use error::{PreferenceError, QuestionSourceError, SessionError};
pub use preference_service::PreferenceService;
pub use session_controller::SessionController;
pub use trivia_api::{ApiQuestion, QuestionSource, TriviaApiClient, build_batch};
