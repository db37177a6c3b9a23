//! Bridge error types.

use thiserror::Error;

/// Result type for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors that can occur outside the invocation/response path.
///
/// Note that an unsupported method name is *not* an error: the bridge answers
/// it with [`Response::Unimplemented`](crate::Response::Unimplemented). These
/// variants cover the plumbing around the bridge instead.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A wire envelope could not be encoded or decoded.
    #[error("Codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// No bridge is registered for the named channel.
    #[error("No bridge registered for channel '{0}'")]
    UnknownChannel(String),

    /// A channel name is already taken by another bridge.
    #[error("Channel '{0}' already has a registered bridge")]
    ChannelTaken(String),

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),
}
