//! RTSP authentication: Basic (RFC 7617) and Digest (RFC 7616, legacy
//! RFC 2617 MD5 computation).

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use md5::{Digest as _, Md5};
use url::Url;

use crate::error::{Result, RtspError};

#[cfg(test)]
mod tests;

/// Authentication state built from a `WWW-Authenticate` challenge
///
/// Credentials come from the userinfo of the request URL. An absent `Auth`
/// is a legal state meaning "send no Authorization header".
#[derive(Debug, Clone)]
pub enum Auth {
    /// Precomputed `Basic <base64>` header value
    Basic { header: String },
    /// Digest parameters; the response hash depends on method and URI,
    /// so it is computed per request
    Digest(DigestAuth),
}

/// Parameters for Digest authentication
#[derive(Debug, Clone, Default)]
pub struct DigestAuth {
    login: String,
    password: String,
    realm: String,
    nonce: String,
    opaque: Option<String>,
}

impl Auth {
    /// Build authentication state from the challenge header value.
    ///
    /// The first space-delimited token selects the scheme, case-insensitively.
    /// Credentials are the userinfo of `url`.
    ///
    /// # Errors
    /// Returns `AuthFailed` when the URL carries no password or the scheme is
    /// not Basic or Digest.
    pub fn from_challenge(url: &Url, challenge: &str) -> Result<Auth> {
        let login = url.username();
        let Some(password) = url.password() else {
            return Err(RtspError::AuthFailed(
                "no credentials in url".to_string(),
            ));
        };

        let challenge = challenge.trim();
        let (scheme, params) = challenge.split_once(' ').unwrap_or((challenge, ""));

        match scheme.to_ascii_lowercase().as_str() {
            "basic" => Ok(Auth::basic(login, password)),
            "digest" => Ok(Auth::Digest(DigestAuth::new(login, password, params))),
            _ => Err(RtspError::AuthFailed(format!(
                "unsupported scheme {scheme:?}"
            ))),
        }
    }

    fn basic(login: &str, password: &str) -> Auth {
        let token = BASE64.encode(format!("{login}:{password}"));
        Auth::Basic {
            header: format!("Basic {token}"),
        }
    }

    /// The `Authorization` header value for one request.
    ///
    /// Basic ignores both arguments. Digest with an empty nonce returns an
    /// empty string, which makes the client omit the header entirely.
    #[must_use]
    pub fn header(&self, method: &str, uri: &str) -> String {
        match self {
            Auth::Basic { header } => header.clone(),
            Auth::Digest(digest) => digest.header(method, uri),
        }
    }
}

impl DigestAuth {
    fn new(login: &str, password: &str, params: &str) -> Self {
        let mut auth = DigestAuth {
            login: login.to_string(),
            password: password.to_string(),
            ..DigestAuth::default()
        };

        for pair in params.split(',') {
            let pair = pair.trim();
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };

            let value = value.trim_matches('"');
            match name {
                "nonce" => auth.nonce = value.to_string(),
                "realm" => auth.realm = value.to_string(),
                "opaque" => auth.opaque = Some(value.to_string()),
                // qop, algorithm, domain, stale and friends are ignored
                _ => {}
            }
        }

        auth
    }

    fn header(&self, method: &str, uri: &str) -> String {
        if self.nonce.is_empty() {
            return String::new();
        }

        let ha1 = md5_hex(&format!("{}:{}:{}", self.login, self.realm, self.password));
        let ha2 = md5_hex(&format!("{method}:{uri}"));
        let response = md5_hex(&format!("{ha1}:{}:{ha2}", self.nonce));

        let mut header = format!(
            "Digest username=\"{}\", uri=\"{uri}\", realm=\"{}\", nonce=\"{}\", response=\"{response}\"",
            self.login, self.realm, self.nonce,
        );

        if let Some(opaque) = &self.opaque {
            header.push_str(&format!(", opaque=\"{opaque}\""));
        }

        header
    }
}

fn md5_hex(input: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
