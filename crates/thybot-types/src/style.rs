use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// How verbose the assistant should be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseStyle {
    #[default]
    Concise,
    Detailed,
}

impl Display for ResponseStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseStyle::Concise => write!(f, "Concise"),
            ResponseStyle::Detailed => write!(f, "Detailed"),
        }
    }
}

impl FromStr for ResponseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "concise" => Ok(ResponseStyle::Concise),
            "detailed" => Ok(ResponseStyle::Detailed),
            other => Err(format!("unknown response style `{other}` (expected concise or detailed)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Detailed".parse::<ResponseStyle>(), Ok(ResponseStyle::Detailed));
        assert_eq!(" concise ".parse::<ResponseStyle>(), Ok(ResponseStyle::Concise));
        assert!("verbose".parse::<ResponseStyle>().is_err());
    }
}
