//! Restricted SDP dialect (RFC 4566) for DESCRIBE responses: `m=` opens
//! media descriptors, `a=control`/`a=rtpmap`/`a=fmtp` are interpreted,
//! every other line type is ignored.

use thiserror::Error;
use url::Url;

use crate::protocol::media::CodecInfo;

pub mod parser;


pub use parser::parse;

/// MIME type of DESCRIBE payloads, sent in the `Accept` header.
pub const SDP_MIME_TYPE: &str = "application/sdp";

#[derive(Debug, Error)]
pub enum SdpError {
    /// The DESCRIBE response carried no payload at all.
    #[error("empty payload")]
    Empty,
}

/// One media track from the session description, in declaration order
#[derive(Debug, Clone)]
pub struct MediaDescription {
    /// Media kind token from the `m=` line (`video`, `audio`); not validated
    pub kind: String,
    /// Declared RTP port from the `m=` line
    pub port: u16,
    /// Transport token, e.g. `RTP/AVP`, preserved verbatim
    pub transport: String,
    /// Payload type number from the `m=` format list
    pub format: u32,
    /// Track control URL, resolved from `a=control` against the base URL
    pub url: Url,
    /// Codec descriptor when `a=rtpmap` named a known codec
    pub codec: Option<CodecInfo>,
}

/// Resolve an `a=control` attribute value against the base URL.
///
/// `*` keeps the base unchanged; `rtsp://` values are absolute; anything else
/// is a suffix joined onto the base path, inserting a `/` when neither side
/// provides one. `None` when the value does not produce a valid URL.
pub(crate) fn resolve_control(base: &Url, value: &str) -> Option<Url> {
    let value = value.trim();

    if value == "*" {
        return Some(base.clone());
    }

    if value.starts_with("rtsp://") {
        return Url::parse(value).ok();
    }

    let mut path = base.path().to_string();
    if !path.ends_with('/') && !value.starts_with('/') {
        path.push('/');
    }
    path.push_str(value);

    base.join(&path).ok()
}
