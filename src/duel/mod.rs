//! # Duel Core Module
//!
//! Everything that makes up one chat duel against the remote robot:
//! session lifecycle, round scoring, transcript layout, and the auto-play
//! heuristic.
//!
//! ## Components
//!
//! - [`session`] - The state machine driving a duel round by round
//! - [`client`] - HTTP client for the opponent service and the trait seam
//! - [`transcript`] - Append-only chat entries with bubble anchor layout
//! - [`scoreboard`] - Round-win counters and the per-variant threshold
//! - [`autoplay`] - Deterministic next-move heuristic
//! - [`outcome`] - The natural-language outcome grammar, in one place
//! - [`flair`] - Tone-matched decoration for the robot's reply bubbles
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Duel           │ ← State machine owning the pieces below
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  OpponentClient │ ← One HTTP round-trip per round
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  Transcript +   │ ← Read every frame by the renderer,
//! │  ScoreBoard     │   mutated only at round boundaries
//! └─────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chitchat::config::Config;
//! use chitchat::duel::{Duel, GameVariant, OpponentClient, Utterance};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     let mut duel = Duel::new(OpponentClient::new(config.api));
//!     duel.start(GameVariant::V3).await?;
//!     duel.play_round(Utterance::Number(5)).await?;
//!     for entry in duel.entries() {
//!         println!("{}: {}", entry.side, entry.text);
//!     }
//!     Ok(())
//! }
//! ```

pub mod autoplay;
pub mod client;
pub mod errors;
pub mod flair;
pub mod outcome;
pub mod scoreboard;
pub mod session;
pub mod transcript;
pub mod types;

pub use client::{MoveReply, Opponent, OpponentClient, SessionStart};
pub use errors::{ClientError, DuelError};
pub use session::{Duel, DuelState, Progress, Session};
pub use transcript::{ChatEntry, Emphasis, Transcript};
pub use types::{GameVariant, Side, Utterance};
