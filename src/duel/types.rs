//! Shared value types for the duel: game variants, chat sides, and the
//! utterances exchanged with the opponent service.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::DuelError;

/// The four numbered game rulesets. The variant is fixed for the lifetime
/// of a session and selects both the win threshold and the auto-play
/// formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameVariant {
    V1,
    V2,
    V3,
    V4,
}

impl GameVariant {
    /// Numeric form used in API paths (`/v{n}/new`) and the config file.
    pub fn number(self) -> u8 {
        match self {
            GameVariant::V1 => 1,
            GameVariant::V2 => 2,
            GameVariant::V3 => 3,
            GameVariant::V4 => 4,
        }
    }
}

impl TryFrom<u8> for GameVariant {
    type Error = DuelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(GameVariant::V1),
            2 => Ok(GameVariant::V2),
            3 => Ok(GameVariant::V3),
            4 => Ok(GameVariant::V4),
            other => Err(DuelError::UnknownVariant(other)),
        }
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.number())
    }
}

/// Which party a score or chat entry belongs to. The robot is rendered on
/// the left, the agent (human) on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Robot,
    Agent,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Robot => write!(f, "Robot"),
            Side::Agent => write!(f, "Agent"),
        }
    }
}

/// One utterance in the exchange. The service speaks numbers for the most
/// part but is free to send text, so both forms are accepted on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Utterance {
    Number(i64),
    Text(String),
}

impl Utterance {
    /// Numeric value, if this utterance is a number. The auto-play formula
    /// only engages when both operands are numeric.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Utterance::Number(n) => Some(*n),
            Utterance::Text(_) => None,
        }
    }
}

impl fmt::Display for Utterance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Utterance::Number(n) => write!(f, "{}", n),
            Utterance::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Utterance {
    fn from(n: i64) -> Self {
        Utterance::Number(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_roundtrip() {
        for n in 1u8..=4 {
            let v = GameVariant::try_from(n).expect("valid variant");
            assert_eq!(v.number(), n);
        }
    }

    #[test]
    fn variant_out_of_range_rejected() {
        for n in [0u8, 5, 9, 255] {
            assert!(matches!(
                GameVariant::try_from(n),
                Err(DuelError::UnknownVariant(m)) if m == n
            ));
        }
    }

    #[test]
    fn utterance_accepts_numbers_and_text() {
        let n: Utterance = serde_json::from_str("7").unwrap();
        assert_eq!(n, Utterance::Number(7));
        let s: Utterance = serde_json::from_str("\"seven\"").unwrap();
        assert_eq!(s, Utterance::Text("seven".into()));
        assert_eq!(n.as_number(), Some(7));
        assert_eq!(s.as_number(), None);
    }
}
