use std::io;

use thiserror::Error;

use crate::protocol::sdp::SdpError;

/// Errors that can occur during RTSP client operations
#[derive(Debug, Error)]
pub enum RtspError {
    /// The client connection has already been closed.
    ///
    /// Returned by any request method called after [`Client::close`](crate::Client::close)
    /// or after a fatal error tore the session down.
    #[error("client closed")]
    ClientClosed,

    /// No response arrived within the configured request timeout.
    #[error("response timeout")]
    ResponseTimeout,

    /// The operation was interrupted through the [`CancelHandle`](crate::CancelHandle).
    #[error("cancelled")]
    Cancelled,

    /// The server answered with a non-200 status. Carries the status line.
    #[error("bad response status: {0}")]
    InvalidStatus(String),

    /// The DESCRIBE body could not be parsed as SDP.
    #[error("invalid sdp: {0}")]
    InvalidSdp(#[from] SdpError),

    /// A TCP interleaved frame did not start with the `$` magic byte.
    #[error("invalid interleaved framing")]
    InvalidFraming,

    /// A request or response message violated the RTSP/1.0 grammar,
    /// or declared a body larger than the 64 KiB cap.
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    /// An Authorization header could not be built from the server challenge.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// Network I/O error on the control connection or a media socket.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result type alias for RTSP client operations
pub type Result<T> = std::result::Result<T, RtspError>;
