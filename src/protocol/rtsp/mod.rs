//! RTSP/1.0 message codec (RFC 2326)

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::{Result, RtspError};

pub mod headers;
pub mod request;
pub mod response;


pub use headers::Headers;
pub use request::{read_request, Request};
pub use response::{read_response, Response};

/// Protocol token written on every request line.
pub const PROTOCOL: &str = "RTSP/1.0";

/// RTSP methods used by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Query server capabilities
    Options,
    /// Request the session description (SDP)
    Describe,
    /// Set up transport for one media track
    Setup,
    /// Start the stream delivery
    Play,
    /// Keep-alive request
    GetParameter,
    /// Stop the stream delivery
    Teardown,
}

impl Method {
    /// Convert to RTSP method string
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Options => "OPTIONS",
            Method::Describe => "DESCRIBE",
            Method::Setup => "SETUP",
            Method::Play => "PLAY",
            Method::GetParameter => "GET_PARAMETER",
            Method::Teardown => "TEARDOWN",
        }
    }
}

impl std::str::FromStr for Method {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "OPTIONS" => Ok(Method::Options),
            "DESCRIBE" => Ok(Method::Describe),
            "SETUP" => Ok(Method::Setup),
            "PLAY" => Ok(Method::Play),
            "GET_PARAMETER" => Ok(Method::GetParameter),
            "TEARDOWN" => Ok(Method::Teardown),
            _ => Err(()),
        }
    }
}

/// Truncated input inside a message is not a normal end of stream.
pub(crate) fn unexpected_end() -> RtspError {
    RtspError::Io(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        "unexpected end of input",
    ))
}

/// Read one CRLF-terminated line, without the terminator.
///
/// End of stream before the terminator is reported as "unexpected end of
/// input" rather than a clean EOF.
pub(crate) async fn read_line<R>(reader: &mut R) -> Result<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    let n = reader.read_line(&mut line).await?;

    if n == 0 || !line.ends_with('\n') {
        return Err(unexpected_end());
    }

    line.pop();
    if line.ends_with('\r') {
        line.pop();
    }

    Ok(line)
}

/// Read the MIME header block terminated by an empty line.
pub(crate) async fn read_headers<R>(reader: &mut R) -> Result<Headers>
where
    R: AsyncBufRead + Unpin,
{
    let mut headers = Headers::new();

    loop {
        let line = read_line(reader).await?;
        if line.is_empty() {
            return Ok(headers);
        }

        let Some((name, value)) = line.split_once(':') else {
            return Err(RtspError::InvalidMessage(format!(
                "invalid header line {line:?}"
            )));
        };

        headers.insert(name.trim(), value.trim());
    }
}
