//! Passive codec descriptors built from SDP `a=rtpmap` / `a=fmtp` lines.
//!
//! These hold the typed transport parameters a payload depacketizer needs;
//! they never touch packet data themselves.

pub mod h264;
pub mod h265;
pub mod mpeg4;

#[cfg(test)]
mod tests;

pub use h264::H264Media;
pub use h265::H265Media;
pub use mpeg4::Mpeg4Media;

/// Codec descriptor for one media track
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecInfo {
    /// H.264 (RFC 6184)
    H264(H264Media),
    /// H.265 / HEVC (RFC 7798)
    H265(H265Media),
    /// MPEG-4 AAC elementary streams (RFC 3640)
    Mpeg4(Mpeg4Media),
}

impl CodecInfo {
    /// Construct a descriptor from an `a=rtpmap` encoding name, if known.
    ///
    /// The name comparison is case-insensitive; unknown codecs yield `None`
    /// and the track is carried without a descriptor.
    #[must_use]
    pub fn from_rtpmap(name: &str, clock_rate: u32) -> Option<CodecInfo> {
        match name.to_ascii_lowercase().as_str() {
            "h264" => Some(CodecInfo::H264(H264Media::new(clock_rate))),
            "h265" => Some(CodecInfo::H265(H265Media::new(clock_rate))),
            "mpeg4-generic" => Some(CodecInfo::Mpeg4(Mpeg4Media::new(clock_rate))),
            _ => None,
        }
    }

    /// Merge the parameter portion of an `a=fmtp` line into the descriptor.
    pub fn parse_fmtp(&mut self, params: &str) {
        match self {
            CodecInfo::H264(media) => media.parse_fmtp(params),
            CodecInfo::H265(media) => media.parse_fmtp(params),
            CodecInfo::Mpeg4(media) => media.parse_fmtp(params),
        }
    }
}

/// Iterate `;`-separated `key=value` pairs, whitespace-trimmed.
///
/// Pairs without `=` are skipped. Shared by all fmtp parsers.
pub(crate) fn fmtp_pairs(params: &str) -> impl Iterator<Item = (&str, &str)> {
    params.split(';').filter_map(|pair| {
        let pair = pair.trim();
        pair.split_once('=')
    })
}
