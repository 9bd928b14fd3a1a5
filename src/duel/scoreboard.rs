//! Round-win bookkeeping and the per-variant win-threshold table.

use super::types::{GameVariant, Side};

/// First side to take this many rounds wins the session.
pub fn win_threshold(variant: GameVariant) -> u32 {
    match variant {
        GameVariant::V1 | GameVariant::V2 => 5,
        GameVariant::V3 => 2,
        GameVariant::V4 => 3,
    }
}

/// Two non-negative round-win counters plus the latched session winner.
/// Scores never decrement or reset mid-session; play stops once a side
/// reaches the threshold, so over-threshold ties cannot occur.
#[derive(Debug, Clone)]
pub struct ScoreBoard {
    variant: GameVariant,
    agent: u32,
    robot: u32,
    winner: Option<Side>,
}

impl ScoreBoard {
    pub fn new(variant: GameVariant) -> Self {
        ScoreBoard {
            variant,
            agent: 0,
            robot: 0,
            winner: None,
        }
    }

    /// Credit one round win and latch the session winner the first time a
    /// counter reaches the variant's threshold.
    pub fn record_round_win(&mut self, side: Side) {
        let counter = match side {
            Side::Agent => &mut self.agent,
            Side::Robot => &mut self.robot,
        };
        *counter += 1;
        if self.winner.is_none() && *counter == win_threshold(self.variant) {
            self.winner = Some(side);
        }
    }

    /// The session winner, once a side has reached the threshold. Stable:
    /// never reverts to `None` for the remainder of the session.
    pub fn session_winner(&self) -> Option<Side> {
        self.winner
    }

    /// Current counters as `(agent, robot)`.
    pub fn scores(&self) -> (u32, u32) {
        (self.agent, self.robot)
    }

    pub fn threshold(&self) -> u32 {
        win_threshold(self.variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_table() {
        assert_eq!(win_threshold(GameVariant::V1), 5);
        assert_eq!(win_threshold(GameVariant::V2), 5);
        assert_eq!(win_threshold(GameVariant::V3), 2);
        assert_eq!(win_threshold(GameVariant::V4), 3);
    }

    #[test]
    fn winner_appears_exactly_at_threshold() {
        let mut board = ScoreBoard::new(GameVariant::V3);
        assert_eq!(board.session_winner(), None);

        board.record_round_win(Side::Agent);
        assert_eq!(board.session_winner(), None);
        assert_eq!(board.scores(), (1, 0));

        board.record_round_win(Side::Agent);
        assert_eq!(board.session_winner(), Some(Side::Agent));
        assert_eq!(board.scores(), (2, 0));
    }

    #[test]
    fn winner_is_stable_once_latched() {
        let mut board = ScoreBoard::new(GameVariant::V3);
        board.record_round_win(Side::Robot);
        board.record_round_win(Side::Robot);
        assert_eq!(board.session_winner(), Some(Side::Robot));

        // Further increments must not disturb the latched winner.
        board.record_round_win(Side::Agent);
        board.record_round_win(Side::Agent);
        board.record_round_win(Side::Agent);
        assert_eq!(board.session_winner(), Some(Side::Robot));
    }

    #[test]
    fn sides_count_independently() {
        let mut board = ScoreBoard::new(GameVariant::V4);
        board.record_round_win(Side::Agent);
        board.record_round_win(Side::Robot);
        board.record_round_win(Side::Agent);
        assert_eq!(board.scores(), (2, 1));
        assert_eq!(board.session_winner(), None);
    }
}
