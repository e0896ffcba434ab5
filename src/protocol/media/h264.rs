use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use super::fmtp_pairs;

/// RTP payload parameters for H.264 video (RFC 6184)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct H264Media {
    /// RTP clock rate from `a=rtpmap`, usually 90000
    pub clock_rate: u32,
    /// `packetization-mode` fmtp key
    pub packetization_mode: u32,
    /// `profile-level-id`: exactly three bytes, empty if absent or malformed
    pub profile_level_id: Vec<u8>,
    /// Sequence parameter set from `sprop-parameter-sets`
    pub sps: Vec<u8>,
    /// Picture parameter set from `sprop-parameter-sets`
    pub pps: Vec<u8>,
}

impl H264Media {
    #[must_use]
    pub fn new(clock_rate: u32) -> Self {
        Self {
            clock_rate,
            ..Self::default()
        }
    }

    /// Best-effort fmtp parsing: unknown keys and undecodable values are
    /// ignored, one bad key never discards the others.
    pub fn parse_fmtp(&mut self, params: &str) {
        for (key, value) in fmtp_pairs(params) {
            match key {
                "packetization-mode" => {
                    if let Ok(mode) = value.parse() {
                        self.packetization_mode = mode;
                    }
                }

                "profile-level-id" => {
                    if let Ok(id) = hex::decode(value) {
                        if id.len() == 3 {
                            self.profile_level_id = id;
                        }
                    }
                }

                "sprop-parameter-sets" => {
                    let Some((sps, pps)) = value.split_once(',') else {
                        continue;
                    };

                    if let Ok(sps) = BASE64.decode(sps) {
                        self.sps = sps;
                    }

                    if let Ok(pps) = BASE64.decode(pps) {
                        self.pps = pps;
                    }
                }

                _ => {}
            }
        }
    }
}
