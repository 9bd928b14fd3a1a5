//! # Chitchat - an interactive chat-duel client
//!
//! Chitchat plays a two-party "chat duel": a human agent trades short
//! numeric utterances with a remote robot opponent through a stateless
//! request/response API, and the exchange is rendered as a scrolling chat
//! transcript with a score line and a progress indicator.
//!
//! ## Features
//!
//! - **Four game variants**: each with its own win threshold (first to 5,
//!   5, 2, or 3 round wins) and its own auto-play formula.
//! - **Chat transcript layout**: append-only bubbles whose anchors shift
//!   upward as the exchange grows, robot on the left, agent on the right.
//! - **Auto-play**: a deterministic heuristic move for when typing a
//!   digit feels like too much work.
//! - **Strict wire schema**: malformed service responses surface as
//!   protocol errors instead of panics deep in a round.
//! - **Async design**: built on Tokio; one request in flight at a time.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chitchat::config::Config;
//! use chitchat::duel::{Duel, GameVariant, OpponentClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     let mut duel = Duel::new(OpponentClient::new(config.api));
//!     duel.start(GameVariant::V1).await?;
//!     duel.auto_play_round().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`duel`] - Session state machine, transcript, scoreboard, opponent client
//! - [`config`] - Configuration management and validation
//! - [`logutil`] - Log sanitation for remote-supplied text

pub mod config;
pub mod duel;
pub mod logutil;
