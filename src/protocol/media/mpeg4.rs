use super::fmtp_pairs;

/// RTP payload parameters for MPEG-4 elementary streams (RFC 3640),
/// typically AAC audio announced as `mpeg4-generic`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mpeg4Media {
    /// RTP clock rate from `a=rtpmap`
    pub clock_rate: u32,
    /// `mode` fmtp key, e.g. `AAC-hbr`
    pub mode: String,
    /// `profile-level-id` fmtp key (decimal here, unlike H.264)
    pub profile_level_id: u32,
    /// AudioSpecificConfig bytes from the hex `config` key
    pub config: Vec<u8>,
}

impl Mpeg4Media {
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
                "mode" => {
                    self.mode = value.to_string();
                }

                "profile-level-id" => {
                    if let Ok(id) = value.parse() {
                        self.profile_level_id = id;
                    }
                }

                "config" => {
                    if let Ok(config) = hex::decode(value) {
                        self.config = config;
                    }
                }

                _ => {}
            }
        }
    }
}
