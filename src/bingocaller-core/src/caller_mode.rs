//! Caller modes.
//!
//! A mode decides how a drawn ball is dressed up before it is announced.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BingoError;

/// How the caller announces each ball.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CallerMode {
    /// Just the letter and number, e.g. "B-eleven".
    #[default]
    #[serde(alias = "normal")]
    Plain,
    /// Traditional hall nicknames, e.g. "Legs Eleven! That's B-eleven".
    Traditional,
    /// Playful phrases for younger players.
    #[serde(alias = "kid_friendly", alias = "kids")]
    KidFriendly,
    /// Pirate-flavoured phrases.
    Pirate,
}

impl CallerMode {
    pub const ALL: [CallerMode; 4] = [
        CallerMode::Plain,
        CallerMode::Traditional,
        CallerMode::KidFriendly,
        CallerMode::Pirate,
    ];

    pub fn display_name(&self) -> &str {
        match self {
            CallerMode::Plain => "Normal",
            CallerMode::Traditional => "Traditional",
            CallerMode::KidFriendly => "Kid-Friendly",
            CallerMode::Pirate => "Pirate",
        }
    }
}

impl fmt::Display for CallerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for CallerMode {
    type Err = BingoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "plain" | "normal" => Ok(CallerMode::Plain),
            "traditional" => Ok(CallerMode::Traditional),
            "kid-friendly" | "kidfriendly" | "kids" => Ok(CallerMode::KidFriendly),
            "pirate" => Ok(CallerMode::Pirate),
            _ => Err(BingoError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode_names() {
        assert_eq!("plain".parse::<CallerMode>().unwrap(), CallerMode::Plain);
        assert_eq!("Normal".parse::<CallerMode>().unwrap(), CallerMode::Plain);
        assert_eq!(
            "Kid_Friendly".parse::<CallerMode>().unwrap(),
            CallerMode::KidFriendly
        );
        assert_eq!(
            "kid friendly".parse::<CallerMode>().unwrap(),
            CallerMode::KidFriendly
        );
        assert_eq!("PIRATE".parse::<CallerMode>().unwrap(), CallerMode::Pirate);
    }

    #[test]
    fn test_parse_unknown_mode() {
        let err = "shouty".parse::<CallerMode>().unwrap_err();
        assert!(matches!(err, BingoError::UnknownMode(name) if name == "shouty"));
    }

    #[test]
    fn test_default_is_plain() {
        assert_eq!(CallerMode::default(), CallerMode::Plain);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(CallerMode::KidFriendly.to_string(), "Kid-Friendly");
        assert_eq!(CallerMode::Plain.display_name(), "Normal");
    }
}
