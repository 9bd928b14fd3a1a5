//! Shared test helpers: a scripted stand-in for the opponent service.
#![allow(dead_code)]

use std::collections::VecDeque;

use chitchat::duel::{ClientError, GameVariant, MoveReply, Opponent, SessionStart, Utterance};

/// Plays back pre-loaded replies in order and records every move it was
/// shown, so tests can assert on the exact wire traffic.
pub struct ScriptedOpponent {
    starts: VecDeque<Result<SessionStart, ClientError>>,
    replies: VecDeque<Result<MoveReply, ClientError>>,
    pub seen_moves: Vec<Utterance>,
    pub seen_codes: Vec<String>,
}

impl ScriptedOpponent {
    pub fn new() -> Self {
        ScriptedOpponent {
            starts: VecDeque::new(),
            replies: VecDeque::new(),
            seen_moves: Vec::new(),
            seen_codes: Vec::new(),
        }
    }

    pub fn will_start(mut self, game_code: &str, robot_says: i64) -> Self {
        self.starts.push_back(Ok(SessionStart {
            game_code: game_code.to_string(),
            robot_says: Utterance::Number(robot_says),
        }));
        self
    }

    pub fn will_fail_start(mut self, error: ClientError) -> Self {
        self.starts.push_back(Err(error));
        self
    }

    pub fn will_reply(mut self, outcome: &str, robot_says: Option<i64>) -> Self {
        self.replies.push_back(Ok(MoveReply {
            outcome: outcome.to_string(),
            robot_says: robot_says.map(Utterance::Number),
        }));
        self
    }

    pub fn will_fail_round(mut self, error: ClientError) -> Self {
        self.replies.push_back(Err(error));
        self
    }
}

impl Opponent for ScriptedOpponent {
    async fn start_session(&mut self, _variant: GameVariant) -> Result<SessionStart, ClientError> {
        self.starts.pop_front().expect("unscripted start_session call")
    }

    async fn submit_move(
        &mut self,
        game_code: &str,
        _variant: GameVariant,
        agent_says: &Utterance,
    ) -> Result<MoveReply, ClientError> {
        self.seen_codes.push(game_code.to_string());
        self.seen_moves.push(agent_says.clone());
        self.replies.pop_front().expect("unscripted submit_move call")
    }
}
