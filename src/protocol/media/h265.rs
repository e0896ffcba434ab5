use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use super::fmtp_pairs;

/// RTP payload parameters for H.265 / HEVC video (RFC 7798)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct H265Media {
    /// RTP clock rate from `a=rtpmap`
    pub clock_rate: u32,
    /// `level-id` fmtp key
    pub level_id: u32,
    /// Video parameter set from `sprop-vps`
    pub vps: Vec<u8>,
    /// Sequence parameter set from `sprop-sps`
    pub sps: Vec<u8>,
    /// Picture parameter set from `sprop-pps`
    pub pps: Vec<u8>,
}

impl H265Media {
    #[must_use]
    pub fn new(clock_rate: u32) -> Self {
        Self {
            clock_rate,
            ..Self::default()
        }
    }

    pub fn parse_fmtp(&mut self, params: &str) {
        for (key, value) in fmtp_pairs(params) {
            match key {
                "level-id" => {
                    if let Ok(level) = value.parse() {
                        self.level_id = level;
                    }
                }

                "sprop-vps" => {
                    if let Ok(vps) = BASE64.decode(value) {
                        self.vps = vps;
                    }
                }

                "sprop-sps" => {
                    if let Ok(sps) = BASE64.decode(value) {
                        self.sps = sps;
                    }
                }

                "sprop-pps" => {
                    if let Ok(pps) = BASE64.decode(value) {
                        self.pps = pps;
                    }
                }

                _ => {}
            }
        }
    }
}
