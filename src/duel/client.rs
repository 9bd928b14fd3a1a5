//! HTTP client for the remote opponent service.
//!
//! The service is stateless request/response: one endpoint mints a session
//! (`POST {base}/v{n}/new`), one scores a move (`POST {base}/v{n}/play`).
//! Responses are parsed against a strict schema; a reply missing its
//! required fields is a protocol error rather than a silent default.
//! No retries happen here — the caller decides whether a failed round is
//! worth another attempt.

use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;

use crate::config::ApiConfig;
use crate::logutil::sanitize_log;

use super::errors::ClientError;
use super::types::{GameVariant, Utterance};

/// A freshly minted session: the opaque token the service issued plus the
/// robot's opening utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStart {
    pub game_code: String,
    pub robot_says: Utterance,
}

/// The service's reply to one scored move. `outcome` is natural-language
/// prose; `robot_says` is absent on session-ending rounds.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveReply {
    pub outcome: String,
    pub robot_says: Option<Utterance>,
}

/// Wire shape of the `new` endpoint. Fields are optional here so shape
/// violations surface as `ClientError::Protocol`, not deserialization
/// failures with no context.
#[derive(Debug, Deserialize)]
struct NewGameWire {
    game_code: Option<String>,
    robot_says: Option<Utterance>,
}

/// Wire shape of the `play` endpoint.
#[derive(Debug, Deserialize)]
struct PlayWire {
    outcome: Option<String>,
    robot_says: Option<Utterance>,
}

#[derive(Debug, Serialize)]
struct PlayBody<'a> {
    game_code: &'a str,
    agent_says: &'a Utterance,
}

/// Abstraction over the opponent so the state machine can be exercised
/// against a scripted fake in tests.
#[allow(async_fn_in_trait)]
pub trait Opponent {
    async fn start_session(&mut self, variant: GameVariant) -> Result<SessionStart, ClientError>;

    async fn submit_move(
        &mut self,
        game_code: &str,
        variant: GameVariant,
        agent_says: &Utterance,
    ) -> Result<MoveReply, ClientError>;
}

/// Production client speaking to the real service over HTTP.
pub struct OpponentClient {
    config: ApiConfig,
    client: reqwest::Client,
}

impl OpponentClient {
    pub fn new(config: ApiConfig) -> Self {
        OpponentClient {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, variant: GameVariant, action: &str) -> String {
        format!(
            "{}/v{}/{}",
            self.config.base_url.trim_end_matches('/'),
            variant.number(),
            action
        )
    }

    async fn post_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        body: Option<&PlayBody<'_>>,
    ) -> Result<T, ClientError> {
        debug!("POST {}", url);
        let mut request = self.client.post(url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let deadline = Duration::from_secs(self.config.timeout_seconds);
        let response = timeout(deadline, request.send())
            .await
            .map_err(|_| ClientError::Timeout(self.config.timeout_seconds))??
            .error_for_status()?;

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Protocol(format!("unparseable response body: {}", e)))
    }
}

impl Opponent for OpponentClient {
    async fn start_session(&mut self, variant: GameVariant) -> Result<SessionStart, ClientError> {
        let url = self.endpoint(variant, "new");
        let wire: NewGameWire = self.post_json(&url, None).await?;

        let game_code = wire
            .game_code
            .ok_or_else(|| ClientError::Protocol("new-game response missing game_code".into()))?;
        let robot_says = wire
            .robot_says
            .ok_or_else(|| ClientError::Protocol("new-game response missing robot_says".into()))?;

        debug!(
            "session {} opened ({}), robot says {}",
            sanitize_log(&game_code),
            variant,
            robot_says
        );
        Ok(SessionStart {
            game_code,
            robot_says,
        })
    }

    async fn submit_move(
        &mut self,
        game_code: &str,
        variant: GameVariant,
        agent_says: &Utterance,
    ) -> Result<MoveReply, ClientError> {
        let url = self.endpoint(variant, "play");
        let body = PlayBody {
            game_code,
            agent_says,
        };
        let wire: PlayWire = self.post_json(&url, Some(&body)).await?;

        let outcome = wire
            .outcome
            .ok_or_else(|| ClientError::Protocol("play response missing outcome".into()))?;

        debug!("round scored: {}", sanitize_log(&outcome));
        Ok(MoveReply {
            outcome,
            robot_says: wire.robot_says,
        })
    }
}
