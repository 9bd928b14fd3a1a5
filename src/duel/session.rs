//! The duel state machine: one session at a time, driven round by round.
//!
//! ## Lifecycle
//!
//! A duel moves through three states:
//! 1. **Idle** - no session; only `start` is accepted
//! 2. **Active** - session open, rounds accepted
//! 3. **Terminal** - a side reached the win threshold; rounds rejected
//!
//! `start` may be called from any state: starting over mid-session is a
//! supported move. On success the previous transcript and scoreboard are
//! discarded; on failure nothing changes.
//!
//! ## Round flow
//!
//! `play_round` appends the agent's bubble first, then submits the move.
//! If the service call fails the bubble stands as a sent message whose
//! reply never arrived - committed state (scores, terminal flag) is only
//! touched after a successful reply. The caller may simply try another
//! round; no retry happens here.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::logutil::sanitize_log;

use super::autoplay;
use super::client::Opponent;
use super::errors::DuelError;
use super::flair;
use super::outcome::parse_outcome;
use super::scoreboard::ScoreBoard;
use super::transcript::{ChatEntry, Emphasis, Transcript};
use super::types::{GameVariant, Side, Utterance};

/// Record of the session in progress: the token the service issued and
/// the two most recent utterances, which feed the auto-play heuristic.
#[derive(Debug, Clone)]
pub struct Session {
    pub game_code: String,
    pub variant: GameVariant,
    pub robot_said: Option<Utterance>,
    pub agent_said: Option<Utterance>,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelState {
    Idle,
    Active,
    Terminal(Side),
}

/// Snapshot for the progress indicator: how far each side is from the
/// variant's win threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub threshold: u32,
    pub agent: u32,
    pub robot: u32,
}

/// One duel against the remote opponent. Owns the session record, the
/// transcript, the scoreboard, and the flair RNG; the renderer reads all
/// of them through `&self` accessors that never mutate.
pub struct Duel<O: Opponent> {
    opponent: O,
    session: Option<Session>,
    scoreboard: Option<ScoreBoard>,
    transcript: Transcript,
    state: DuelState,
    rng: StdRng,
}

impl<O: Opponent> Duel<O> {
    pub fn new(opponent: O) -> Self {
        Duel {
            opponent,
            session: None,
            scoreboard: None,
            transcript: Transcript::new(),
            state: DuelState::Idle,
            rng: StdRng::from_entropy(),
        }
    }

    /// Like [`Duel::new`] but with a seeded flair RNG. The pick is
    /// cosmetic, so this only pins down transcript text for tests.
    pub fn with_seed(opponent: O, seed: u64) -> Self {
        Duel {
            rng: StdRng::seed_from_u64(seed),
            ..Duel::new(opponent)
        }
    }

    /// Open a new session for `variant`, discarding any previous one.
    /// On failure nothing is committed: a machine that was Idle stays
    /// Idle, and a live session remains untouched.
    pub async fn start(&mut self, variant: GameVariant) -> Result<(), DuelError> {
        let opening = self
            .opponent
            .start_session(variant)
            .await
            .map_err(DuelError::Start)?;

        info!(
            "session {} started ({}), first to {} rounds",
            sanitize_log(&opening.game_code),
            variant,
            super::scoreboard::win_threshold(variant)
        );

        self.transcript = Transcript::new();
        self.transcript
            .append(ChatEntry::new(Side::Robot, format!("{}?", opening.robot_says)));
        self.scoreboard = Some(ScoreBoard::new(variant));
        self.session = Some(Session {
            game_code: opening.game_code,
            variant,
            robot_said: Some(opening.robot_says),
            agent_said: None,
            started_at: Utc::now(),
        });
        self.state = DuelState::Active;
        Ok(())
    }

    /// Play one round with a move chosen by the human.
    pub async fn play_round(&mut self, agent_says: Utterance) -> Result<(), DuelError> {
        self.round(agent_says, Emphasis::Normal).await
    }

    /// Play one round with the move chosen by the auto-play heuristic.
    pub async fn auto_play_round(&mut self) -> Result<(), DuelError> {
        self.guard_active()?;
        let session = self.session.as_ref().ok_or(DuelError::NoActiveSession)?;
        // A session whose last reply carried no utterance leaves nothing
        // to react to; treat it like having no session for this call.
        let robot_said = session
            .robot_said
            .clone()
            .ok_or(DuelError::NoActiveSession)?;
        let agent_says =
            autoplay::next_move(session.variant, &robot_said, session.agent_said.as_ref());
        debug!("auto-play chose {}", agent_says);
        self.round(agent_says, Emphasis::AutoPlay).await
    }

    fn guard_active(&self) -> Result<(), DuelError> {
        match self.state {
            DuelState::Idle => Err(DuelError::NoActiveSession),
            DuelState::Terminal(_) => Err(DuelError::SessionTerminal),
            DuelState::Active => Ok(()),
        }
    }

    async fn round(&mut self, agent_says: Utterance, emphasis: Emphasis) -> Result<(), DuelError> {
        self.guard_active()?;
        let (game_code, variant) = {
            let session = self.session.as_mut().ok_or(DuelError::NoActiveSession)?;
            session.agent_said = Some(agent_says.clone());
            (session.game_code.clone(), session.variant)
        };

        // Visible before the reply lands; stands even if the call fails.
        self.transcript.append(
            ChatEntry::new(Side::Agent, format!("{}!", agent_says)).with_emphasis(emphasis),
        );

        let reply = self
            .opponent
            .submit_move(&game_code, variant, &agent_says)
            .await
            .map_err(|e| {
                warn!("round aborted: {}", e);
                DuelError::Round(e)
            })?;

        debug!("outcome text: {}", sanitize_log(&reply.outcome));
        let outcome = parse_outcome(&reply.outcome);

        if let Some(winner) = outcome.round_winner {
            if let Some(board) = self.scoreboard.as_mut() {
                board.record_round_win(winner);
            }
        }

        // Robot bubble: flair for a decided round, then the next
        // utterance when the service offered one.
        let mut text = match outcome.round_winner {
            Some(winner) => flair::pick(winner, &mut self.rng).to_string(),
            None => String::new(),
        };
        if let Some(says) = &reply.robot_says {
            if text.is_empty() {
                text = format!("{}?", says);
            } else {
                text = format!("{} {}?", text, says);
            }
        }
        self.transcript.append(ChatEntry::new(Side::Robot, text));

        if let Some(session) = self.session.as_mut() {
            session.robot_said = reply.robot_says.clone();
        }

        self.settle(outcome.session_winner);
        Ok(())
    }

    /// Compare the scoreboard's verdict with the session winner the
    /// outcome text declared, and latch the terminal state. The scoreboard
    /// is primary; a declaration it does not back is honored anyway (the
    /// service has ended the session either way) but logged loudly.
    fn settle(&mut self, declared: Option<Side>) {
        let counted = self
            .scoreboard
            .as_ref()
            .and_then(|board| board.session_winner());
        match (counted, declared) {
            (Some(winner), declared) => {
                if let Some(declared) = declared {
                    if declared != winner {
                        warn!(
                            "outcome text declared {} the session winner but the score favors {}",
                            declared, winner
                        );
                    }
                }
                info!("{} wins the session", winner);
                self.state = DuelState::Terminal(winner);
            }
            (None, Some(declared)) => {
                warn!(
                    "outcome text declared {} the session winner before the threshold was reached",
                    declared
                );
                self.state = DuelState::Terminal(declared);
            }
            (None, None) => {}
        }
    }

    // --- renderer-facing read API; all idempotent, none mutate ---

    /// Transcript entries in insertion order; fresh iterator per call.
    pub fn entries(&self) -> impl Iterator<Item = &ChatEntry> {
        self.transcript.entries()
    }

    /// Transcript with anchor layout, for renderers that draw bubbles.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Current `(agent, robot)` round-win counters; zeros while Idle.
    pub fn scores(&self) -> (u32, u32) {
        self.scoreboard
            .as_ref()
            .map(|board| board.scores())
            .unwrap_or((0, 0))
    }

    /// Threshold and counters for the progress indicator; `None` while
    /// Idle since there is no variant to read a threshold from.
    pub fn progress(&self) -> Option<Progress> {
        self.scoreboard.as_ref().map(|board| {
            let (agent, robot) = board.scores();
            Progress {
                threshold: board.threshold(),
                agent,
                robot,
            }
        })
    }

    /// The session winner once the duel is over.
    pub fn winner(&self) -> Option<Side> {
        match self.state {
            DuelState::Terminal(side) => Some(side),
            _ => None,
        }
    }

    pub fn state(&self) -> DuelState {
        self.state
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Access the underlying opponent, e.g. to inspect a scripted fake.
    pub fn opponent(&self) -> &O {
        &self.opponent
    }
}
