use thiserror::Error;

/// Errors that can arise while talking to the remote opponent service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure reaching the service. Retryable: the same
    /// round may be attempted again.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request deadline elapsed before a response arrived. Retryable.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// The response arrived but its shape was not what the protocol
    /// promises (missing session token, missing outcome field, bad JSON).
    /// Recoverable only by abandoning the session.
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// Errors surfaced by the duel state machine.
#[derive(Debug, Error)]
pub enum DuelError {
    /// Session creation failed; no session state was committed.
    #[error("failed to start session: {0}")]
    Start(#[source] ClientError),

    /// A round was aborted mid-flight. The agent's transcript entry
    /// stands, but no score or terminal state changed.
    #[error("round aborted: {0}")]
    Round(#[source] ClientError),

    /// A round-affecting call arrived with no session in progress.
    #[error("no active session")]
    NoActiveSession,

    /// A round-affecting call arrived after the session was decided.
    #[error("session already decided")]
    SessionTerminal,

    /// A game variant outside 1..=4. Indicates a defect in the caller or
    /// its configuration, never a remote condition.
    #[error("unknown game variant: {0}")]
    UnknownVariant(u8),
}
