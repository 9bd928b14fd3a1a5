//! Decorative flair phrases prefixed to the robot's reply bubble.
//!
//! Purely cosmetic: the pick never influences scoring or state
//! transitions. The random source is passed in by the caller so tests can
//! seed it.

use rand::Rng;

use super::types::Side;

/// Shown when the agent takes the round.
const AGENT_WIN_FLAIRS: [&str; 3] = [":D", ":)", "^.^"];
/// Shown when the robot takes the round.
const ROBOT_WIN_FLAIRS: [&str; 3] = [":O", ":(", "o.o"];

/// Pick a flair phrase matching the round winner's tone.
pub fn pick(round_winner: Side, rng: &mut impl Rng) -> &'static str {
    let set = match round_winner {
        Side::Agent => &AGENT_WIN_FLAIRS,
        Side::Robot => &ROBOT_WIN_FLAIRS,
    };
    set[rng.gen_range(0..set.len())]
}
