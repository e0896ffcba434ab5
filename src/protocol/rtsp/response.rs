use tokio::io::{AsyncBufRead, AsyncReadExt};

use super::{read_headers, read_line, unexpected_end, Headers};
use crate::error::{Result, RtspError};

/// The client refuses to buffer response bodies larger than this.
pub const MAX_BODY_SIZE: usize = 64 * 1024;

/// An RTSP response message
#[derive(Debug, Clone, Default)]
pub struct Response {
    /// Protocol token from the status line (usually `RTSP/1.0`)
    pub proto: String,
    /// Numeric status code (100–999)
    pub status: u16,
    /// Reason phrase, possibly empty
    pub reason: String,
    /// Response headers
    pub headers: Headers,
    /// Response body (empty until [`read_body`](Response::read_body))
    pub body: Vec<u8>,
}

impl Response {
    /// The status line without the protocol token, e.g. `200 OK`.
    #[must_use]
    pub fn status_line(&self) -> String {
        if self.reason.is_empty() {
            self.status.to_string()
        } else {
            format!("{} {}", self.status, self.reason)
        }
    }

    /// Read the body that follows the header block.
    ///
    /// Without a `Content-Length` header (or with value `0`) the body stays
    /// empty. A declared length above 64 KiB is rejected outright.
    ///
    /// # Errors
    /// Returns `InvalidMessage` for an unparseable or oversized length, or an
    /// I/O error (with `UnexpectedEof` kind) when the stream ends early.
    pub async fn read_body<R>(&mut self, reader: &mut R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let Some(value) = self.headers.content_length() else {
            return Ok(());
        };

        let content_length: usize = value.trim().parse().map_err(|_| {
            RtspError::InvalidMessage(format!("invalid content-length {value:?}"))
        })?;

        if content_length == 0 {
            return Ok(());
        }

        if content_length > MAX_BODY_SIZE {
            return Err(RtspError::InvalidMessage(format!(
                "content-length too large: {content_length}"
            )));
        }

        let mut body = vec![0u8; content_length];
        reader.read_exact(&mut body).await.map_err(|err| {
            if err.kind() == std::io::ErrorKind::UnexpectedEof {
                unexpected_end()
            } else {
                RtspError::Io(err)
            }
        })?;
        self.body = body;

        Ok(())
    }
}

fn parse_response_line(line: &str) -> Option<(String, u16, String)> {
    let (proto, rest) = line.split_once(' ')?;
    let rest = rest.trim();

    let (code, reason) = match rest.split_once(' ') {
        Some((code, reason)) => (code, reason),
        None => (rest, ""),
    };

    let status: u16 = code.parse().ok()?;
    if !(100..=999).contains(&status) {
        return None;
    }

    Some((proto.to_string(), status, reason.to_string()))
}

/// Read the status line and header block of a response.
///
/// The body is not consumed; call [`Response::read_body`] when it is wanted.
///
/// # Errors
/// Returns `InvalidMessage` for a malformed status line or header, or an I/O
/// error (with `UnexpectedEof` kind) when the stream ends mid-message.
pub async fn read_response<R>(reader: &mut R) -> Result<Response>
where
    R: AsyncBufRead + Unpin,
{
    let line = read_line(reader).await?;

    let (proto, status, reason) = parse_response_line(&line).ok_or_else(|| {
        RtspError::InvalidMessage(format!("invalid response line {line:?}"))
    })?;

    let headers = read_headers(reader).await?;

    Ok(Response {
        proto,
        status,
        reason,
        headers,
        body: Vec::new(),
    })
}
