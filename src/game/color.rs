use std::fmt;

use serde::{Deserialize, Serialize};

/// Contents of a square, doubling as the color a player moves with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    #[default]
    Empty,
    Dark,
    Light,
}

impl PlayerColor {
    /// Swap Dark and Light. Empty maps to itself.
    pub fn reverse(self) -> PlayerColor {
        match self {
            PlayerColor::Dark => PlayerColor::Light,
            PlayerColor::Light => PlayerColor::Dark,
            PlayerColor::Empty => PlayerColor::Empty,
        }
    }

    /// True for the two disc colors.
    pub fn is_disc(self) -> bool {
        self != PlayerColor::Empty
    }

    /// Get color name for display
    pub fn name(self) -> &'static str {
        match self {
            PlayerColor::Empty => "Empty",
            PlayerColor::Dark => "Dark",
            PlayerColor::Light => "Light",
        }
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_swaps_disc_colors() {
        assert_eq!(PlayerColor::Dark.reverse(), PlayerColor::Light);
        assert_eq!(PlayerColor::Light.reverse(), PlayerColor::Dark);
        assert_eq!(PlayerColor::Empty.reverse(), PlayerColor::Empty);
    }

    #[test]
    fn test_color_name() {
        assert_eq!(PlayerColor::Dark.name(), "Dark");
        assert_eq!(PlayerColor::Light.to_string(), "Light");
    }

    #[test]
    fn test_is_disc() {
        assert!(PlayerColor::Dark.is_disc());
        assert!(!PlayerColor::Empty.is_disc());
    }
}
