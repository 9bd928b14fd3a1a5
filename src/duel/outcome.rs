//! Parsing of the opponent service's natural-language outcome field.
//!
//! The service reports round and session results as prose mixed into a
//! single string, e.g. `"Agent wins this round. Agent wins the game."`.
//! Matching is case-sensitive substring search; that fragile grammar is
//! deliberately confined to this module so nothing else in the crate
//! touches the raw text.

use super::types::Side;

/// What a single round's outcome text declared. A string may carry both a
/// round winner and a session winner (a session-ending round); it may also
/// carry neither, which is an inconclusive round, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundOutcome {
    pub round_winner: Option<Side>,
    pub session_winner: Option<Side>,
}

/// Extract round and session winners from the raw outcome text.
pub fn parse_outcome(text: &str) -> RoundOutcome {
    let session_winner = if text.contains("Agent wins the game.") {
        Some(Side::Agent)
    } else if text.contains("Robot wins the game.") {
        Some(Side::Robot)
    } else {
        None
    };

    let round_winner = if text.contains("Agent wins this round.") {
        Some(Side::Agent)
    } else if text.contains("Robot wins this round.") {
        Some(Side::Robot)
    } else {
        None
    };

    RoundOutcome {
        round_winner,
        session_winner,
    }
}
