use thiserror::Error;

/// Failure of one HTTP collaborator call, reduced to what the stores need.
///
/// Stores never see a transport-level error type; the `api` crate maps its
/// own errors into this enum before they cross the boundary.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never produced a response (network down, DNS, timeout).
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-success status code.
    #[error("request failed with status {0}")]
    Status(u16),

    /// The response arrived but its body could not be decoded.
    #[error("invalid response: {0}")]
    Decode(String),
}
