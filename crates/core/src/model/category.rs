use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of categories the title screen offers. Each one resolves to
/// a fully-formed request target with the batch size and difficulty/topic
/// encoded in the URL itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Easy,
    Medium,
    Hard,
    EightiesTrivia,
    Music,
    Film,
    Sport,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Easy,
        Category::Medium,
        Category::Hard,
        Category::EightiesTrivia,
        Category::Music,
        Category::Film,
        Category::Sport,
    ];

    /// Resolve a menu label. Anything outside the vocabulary is `None`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            "80's Trivia" => Some(Self::EightiesTrivia),
            "Music" => Some(Self::Music),
            "Film" => Some(Self::Film),
            "Sport" => Some(Self::Sport),
            _ => None,
        }
    }

    /// The label shown on the title screen.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::EightiesTrivia => "80's Trivia",
            Self::Music => "Music",
            Self::Film => "Film",
            Self::Sport => "Sport",
        }
    }

    /// The fully-resolved endpoint for one batch of questions.
    #[must_use]
    pub fn request_target(&self) -> &'static str {
        match self {
            Self::Easy => "https://the-trivia-api.com/api/questions?limit=5&difficulty=easy",
            Self::Medium => {
                "https://the-trivia-api.com/api/questions?limit=5&region=GB&difficulty=medium"
            }
            Self::Hard => "https://the-trivia-api.com/api/questions?limit=5&difficulty=hard",
            Self::EightiesTrivia => {
                "https://the-trivia-api.com/api/questions?limit=5&tags=1980's"
            }
            Self::Music => "https://the-trivia-api.com/api/questions?categories=music&limit=5",
            Self::Film => {
                "https://the-trivia-api.com/api/questions?categories=film_and_tv&limit=5"
            }
            Self::Sport => {
                "https://the-trivia-api.com/api/questions?categories=sport_and_leisure&limit=5"
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
