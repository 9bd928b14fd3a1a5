//! Deterministic auto-play heuristic.
//!
//! A fixed rule, not an optimal strategy: echo the robot's last utterance,
//! except in variants 2 and 4 where a digit-sum trick pays off once there
//! is a previous agent move to fold in.

use super::types::{GameVariant, Utterance};

/// Choose the agent's next move from the two most recent utterances.
///
/// Default is a plain echo of `robot_said`. For variants 2 and 4, when a
/// previous agent utterance exists and both values are numeric:
/// `calc = (robot + previous) mod 10`, playing `1` when `calc` is zero.
/// Variants 1 and 3, a missing previous utterance, or non-numeric values
/// all fall back to the echo.
pub fn next_move(
    variant: GameVariant,
    robot_said: &Utterance,
    agent_said: Option<&Utterance>,
) -> Utterance {
    if matches!(variant, GameVariant::V2 | GameVariant::V4) {
        if let (Some(robot), Some(previous)) = (
            robot_said.as_number(),
            agent_said.and_then(Utterance::as_number),
        ) {
            let calc = (robot + previous).rem_euclid(10);
            return Utterance::Number(if calc == 0 { 1 } else { calc });
        }
    }
    robot_said.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_1_always_echoes() {
        let robot = Utterance::Number(7);
        assert_eq!(next_move(GameVariant::V1, &robot, None), Utterance::Number(7));
        let previous = Utterance::Number(4);
        assert_eq!(
            next_move(GameVariant::V1, &robot, Some(&previous)),
            Utterance::Number(7)
        );
    }

    #[test]
    fn variant_2_digit_sum_wraps_to_one() {
        let robot = Utterance::Number(6);
        let previous = Utterance::Number(4);
        // (6 + 4) mod 10 == 0, so the move is 1.
        assert_eq!(
            next_move(GameVariant::V2, &robot, Some(&previous)),
            Utterance::Number(1)
        );
    }

    #[test]
    fn variant_2_digit_sum() {
        let robot = Utterance::Number(6);
        assert_eq!(
            next_move(GameVariant::V2, &robot, Some(&Utterance::Number(5))),
            Utterance::Number(1)
        );
        assert_eq!(
            next_move(GameVariant::V2, &robot, Some(&Utterance::Number(7))),
            Utterance::Number(3)
        );
    }

    #[test]
    fn variant_4_first_round_echoes() {
        let robot = Utterance::Number(8);
        assert_eq!(next_move(GameVariant::V4, &robot, None), Utterance::Number(8));
    }

    #[test]
    fn non_numeric_utterances_echo() {
        let robot = Utterance::Text("three".into());
        let previous = Utterance::Number(2);
        assert_eq!(
            next_move(GameVariant::V2, &robot, Some(&previous)),
            Utterance::Text("three".into())
        );
    }
}
