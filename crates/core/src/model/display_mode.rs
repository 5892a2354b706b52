use serde::{Deserialize, Serialize};

/// The persisted display preference. Stored as the literals `"dark"` and
/// `"light"`; anything else (including nothing stored yet) reads as light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The literal written to durable storage.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_defaults_to_light() {
        assert_eq!(DisplayMode::from_stored(None), DisplayMode::Light);
    }

    #[test]
    fn only_the_dark_literal_reads_as_dark() {
        assert_eq!(DisplayMode::from_stored(Some("dark")), DisplayMode::Dark);
        assert_eq!(DisplayMode::from_stored(Some("Dark")), DisplayMode::Light);
        assert_eq!(DisplayMode::from_stored(Some("light")), DisplayMode::Light);
        assert_eq!(DisplayMode::from_stored(Some("")), DisplayMode::Light);
    }

    #[test]
    fn toggle_round_trips_through_storage_literals() {
        let mode = DisplayMode::Light;
        let flipped = mode.toggled();
        assert_eq!(DisplayMode::from_stored(Some(flipped.as_str())), flipped);
        assert_eq!(flipped.toggled(), mode);
    }
}
