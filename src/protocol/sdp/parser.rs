use url::Url;

use super::{resolve_control, MediaDescription, SdpError};
use crate::protocol::media::CodecInfo;

/// Parse a DESCRIBE payload into the ordered media list.
///
/// `base` is the control URL the caller resolved from `Content-Base` (or the
/// connection URL); an `a=control` before the first `m=` line redefines it.
/// Malformed individual lines are skipped, matching how servers in the wild
/// emit SDP.
///
/// # Errors
/// Returns [`SdpError::Empty`] for an empty payload.
pub fn parse(base: &Url, data: &[u8]) -> Result<Vec<MediaDescription>, SdpError> {
    if data.is_empty() {
        return Err(SdpError::Empty);
    }

    let mut base = base.clone();
    let mut result: Vec<MediaDescription> = Vec::new();
    let mut current: Option<MediaDescription> = None;

    let text = String::from_utf8_lossy(data);
    for line in text.lines() {
        let line = line.trim_end();
        if line.len() < 2 || line.as_bytes()[1] != b'=' {
            continue;
        }

        let content = &line[2..];

        match line.as_bytes()[0] {
            b'm' => {
                if let Some(media) = current.take() {
                    result.push(media);
                }
                // a malformed m= line still closes the previous descriptor
                current = parse_media_line(content, &base);
            }

            b'a' => {
                let Some((attr, value)) = content.split_once(':') else {
                    continue;
                };

                match attr {
                    "control" => {
                        if let Some(resolved) = resolve_control(&base, value) {
                            if let Some(media) = current.as_mut() {
                                media.url = resolved;
                            } else {
                                // before the first m= line the attribute
                                // redefines the base URL itself
                                base = resolved;
                            }
                        }
                    }

                    "rtpmap" => {
                        if let Some(media) = current.as_mut() {
                            parse_rtpmap(media, value);
                        }
                    }

                    "fmtp" => {
                        if let Some(media) = current.as_mut() {
                            parse_fmtp(media, value);
                        }
                    }

                    _ => {}
                }
            }

            _ => {}
        }
    }

    if let Some(media) = current {
        result.push(media);
    }

    Ok(result)
}

/// `m=<media> <port> <transport> <fmt>`
fn parse_media_line(content: &str, base: &Url) -> Option<MediaDescription> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    if fields.len() < 4 {
        return None;
    }

    let port = fields[1].parse().ok()?;
    let format = fields[3].parse().ok()?;

    Some(MediaDescription {
        kind: fields[0].to_string(),
        port,
        transport: fields[2].to_string(),
        format,
        url: base.clone(),
        codec: None,
    })
}

/// `a=rtpmap:<pt> <name>/<clockRate>[/<channels>]`
fn parse_rtpmap(media: &mut MediaDescription, value: &str) {
    let fields: Vec<&str> = value.split_whitespace().collect();
    if fields.len() < 2 {
        return;
    }

    let mut params = fields[1].split('/');
    let Some(name) = params.next() else { return };
    let Some(clock_rate) = params.next().and_then(|v| v.parse().ok()) else {
        return;
    };

    media.codec = CodecInfo::from_rtpmap(name, clock_rate);
}

/// `a=fmtp:<pt> <params>`
fn parse_fmtp(media: &mut MediaDescription, value: &str) {
    let Some(codec) = media.codec.as_mut() else {
        return;
    };

    if let Some((_pt, params)) = value.split_once(' ') {
        codec.parse_fmtp(params);
    }
}
