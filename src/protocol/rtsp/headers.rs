use std::collections::HashMap;

/// Well-known RTSP header names
pub mod names {
    pub const ACCEPT: &str = "Accept";
    pub const AUTHORIZATION: &str = "Authorization";
    pub const CONTENT_BASE: &str = "Content-Base";
    pub const CONTENT_LENGTH: &str = "Content-Length";
    pub const CSEQ: &str = "CSeq";
    pub const RANGE: &str = "Range";
    pub const SESSION: &str = "Session";
    pub const TRANSPORT: &str = "Transport";
    pub const USER_AGENT: &str = "User-Agent";
    pub const WWW_AUTHENTICATE: &str = "WWW-Authenticate";
}

/// RTSP header map
///
/// RFC 2326 header names compare case-insensitively, so entries are keyed by
/// their ASCII-lowercased name and every lookup costs a single hash. The
/// casing the sender used is kept alongside the value for serialization.
#[derive(Debug, Clone, Default)]
pub struct Headers {
    entries: HashMap<String, Entry>,
}

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    value: String,
}

impl Headers {
    /// Create empty headers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a header, replacing any entry whose name matches ignoring case.
    /// The most recent casing of the name wins.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let key = name.to_ascii_lowercase();
        self.entries.insert(
            key,
            Entry {
                name,
                value: value.into(),
            },
        );
    }

    /// Look up a header value by name, ignoring case
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(|entry| entry.value.as_str())
    }

    /// Whether a header with this name is present, ignoring case
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    /// Parsed `CSeq` value
    #[must_use]
    pub fn cseq(&self) -> Option<u32> {
        self.get(names::CSEQ)?.parse().ok()
    }

    /// Raw Content-Length value; the codec parses and bounds it
    #[must_use]
    pub fn content_length(&self) -> Option<&str> {
        self.get(names::CONTENT_LENGTH)
    }

    /// Get the `Session` header token: the text before the first `;`,
    /// whitespace-trimmed. Servers commonly append `;timeout=N`.
    #[must_use]
    pub fn session(&self) -> Option<&str> {
        let value = self.get(names::SESSION)?;
        let token = value.split(';').next().unwrap_or(value).trim();
        (!token.is_empty()).then_some(token)
    }

    /// Visit every header, with the name casing the sender used
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|entry| (entry.name.as_str(), entry.value.as_str()))
    }

    /// Number of headers
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
