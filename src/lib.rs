//! # rtsp-client
//!
//! An async RTSP 1.0 client (RFC 2326): negotiates a streaming session with
//! a media server, parses its SDP announcement, sets up media tracks, and
//! delivers received RTP and RTCP packets to an application handler.
//!
//! ## Protocol references
//!
//! | RFC | Topic | How this crate uses it |
//! |-----|-------|----------------------|
//! | [RFC 2326](https://tools.ietf.org/html/rfc2326) | RTSP 1.0 | Request/response codec, session lifecycle, interleaved framing |
//! | [RFC 4566](https://tools.ietf.org/html/rfc4566) | SDP | DESCRIBE payload parsing, per-track control URLs |
//! | [RFC 7617](https://tools.ietf.org/html/rfc7617) | Basic auth | `WWW-Authenticate: Basic` challenges |
//! | [RFC 7616](https://tools.ietf.org/html/rfc7616) | Digest auth | `WWW-Authenticate: Digest` challenges (legacy MD5 computation) |
//! | [RFC 6184](https://tools.ietf.org/html/rfc6184) | H.264 RTP payload | `fmtp` attribute parsing |
//! | [RFC 7798](https://tools.ietf.org/html/rfc7798) | H.265 RTP payload | `fmtp` attribute parsing |
//! | [RFC 3640](https://tools.ietf.org/html/rfc3640) | MPEG-4 RTP payload | `fmtp` attribute parsing |
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Client     — session driver, auth retry │
//! ├──────────────────────────────────────────┤
//! │  Protocol   — RTSP codec, SDP, auth,     │
//! │               codec descriptors          │
//! ├──────────────────────────────────────────┤
//! │  Transport  — TCP interleaved / UDP,     │
//! │               packet delivery            │
//! └──────────────────────────────────────────┘
//! ```
//!
//! RTP/RTCP packets are delivered as opaque byte slices tagged with a media
//! index and a kind; payload decoding is out of scope.
//!
//! ## Crate layout
//!
//! - [`client`] — [`Client`] session driver and [`ClientConfig`].
//! - [`protocol`] — RTSP message codec, authentication, SDP, codec
//!   descriptors.
//! - [`transport`] — [`MediaHandler`] contract and the two media transports.
//! - [`error`] — [`RtspError`] enum and [`Result`] alias.

pub mod client;
pub mod error;
pub mod protocol;
pub mod transport;

pub use client::{CancelHandle, Client, ClientConfig, ClientConfigBuilder};
pub use error::{Result, RtspError};
pub use protocol::media::CodecInfo;
pub use protocol::sdp::MediaDescription;
pub use transport::MediaHandler;
