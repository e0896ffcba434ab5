use tokio::io::AsyncBufRead;

use url::Url;

use super::{read_headers, read_line, Headers, Method};
use crate::error::{Result, RtspError};

/// An RTSP request message
///
/// Serialization happens in the client, which owns the `CSeq` counter,
/// session token, and authentication state that go on the wire with it.
#[derive(Debug, Clone)]
pub struct Request {
    /// RTSP method
    pub method: Method,
    /// Target URL; userinfo credentials are stripped before it reaches the wire
    pub url: Url,
    /// Caller-supplied headers
    pub headers: Headers,
}

impl Request {
    /// Create a new request with empty headers
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Headers::new(),
        }
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }
}

fn parse_request_line(line: &str) -> Option<(Method, &str)> {
    let (method, rest) = line.split_once(' ')?;

    // the protocol token is optional
    let uri = match rest.split_once(' ') {
        Some((uri, _proto)) => uri,
        None => rest,
    };

    Some((method.parse().ok()?, uri))
}

/// Read a request from the peer: `METHOD URI [PROTO]` plus headers.
///
/// The counterpart of the client-side serializer, used by tests and by
/// server-side reuse of this codec.
///
/// # Errors
/// Returns `InvalidMessage` for a malformed request line, unknown method, or
/// unparseable URI, and an unexpected-end I/O error when the stream is cut
/// mid-message.
pub async fn read_request<R>(reader: &mut R) -> Result<Request>
where
    R: AsyncBufRead + Unpin,
{
    let line = read_line(reader).await?;

    let (method, uri) = parse_request_line(&line).ok_or_else(|| {
        RtspError::InvalidMessage(format!("invalid request line {line:?}"))
    })?;

    let url = Url::parse(uri)
        .map_err(|err| RtspError::InvalidMessage(format!("invalid request url: {err}")))?;

    let headers = read_headers(reader).await?;

    Ok(Request {
        method,
        url,
        headers,
    })
}
