use crate::error::ShortenerError;
use crate::repository::UrlRecord;
use crate::short_path::ShortPath;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, ShortenerError>;

/// Service seam for creating and resolving shortened URLs.
#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Persists the original URL and returns the short path derived from
    /// the new record's id.
    async fn shorten(&self, original_url: &str) -> Result<ShortPath>;

    /// Resolves a short path back to its stored record.
    ///
    /// Returns `None` when the path is well-formed but was never issued, or
    /// decodes to an id with no stored record.
    async fn resolve(&self, path: &str) -> Result<Option<UrlRecord>>;
}
