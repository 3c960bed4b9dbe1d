use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// A short URL path segment produced by the chain codec.
///
/// Carries no validation of its own: outbound paths come straight from
/// `encode`, and inbound strings are validated by `decode` on the resolve
/// path, which is the only authority on what constitutes a valid chain.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ShortPath(SmolStr);

impl ShortPath {
    /// Wraps an encoded chain into a path segment.
    pub fn new(chain: impl AsRef<str>) -> Self {
        Self(SmolStr::new(chain))
    }

    /// Returns the path segment as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }
}

impl std::fmt::Debug for ShortPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShortPath").field(&self.0).finish()
    }
}

impl Display for ShortPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ShortPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ShortPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Ok(Self(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_the_raw_segment() {
        let path = ShortPath::new("xK3f");
        assert_eq!(path.to_string(), "xK3f");
        assert_eq!(path.as_str(), "xK3f");
    }

    #[test]
    fn to_url_joins_with_a_single_slash() {
        let path = ShortPath::new("xK3f");
        assert_eq!(path.to_url("https://ske.in"), "https://ske.in/xK3f");
        assert_eq!(path.to_url("https://ske.in/"), "https://ske.in/xK3f");
    }
}
