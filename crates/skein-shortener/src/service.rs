use async_trait::async_trait;
use skein_chain::{ChainCodec, DecodeError};
use skein_core::{Repository, ShortPath, Shortener, ShortenerError, UrlRecord};
use std::sync::Arc;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, ShortenerError>;

/// A concrete implementation of the `Shortener` trait.
///
/// Wraps a `Repository` and the process-wide `ChainCodec`. The codec is
/// injected as a shared immutable instance rather than read from a global:
/// the service restart contract (identical alphabet, seed and minimum
/// length, or previously issued paths stop resolving) lives with whoever
/// constructs it.
///
/// Note: no collision handling exists or is needed — record ids are unique
/// by construction and the codec is injective, so issued paths never clash.
#[derive(Debug, Clone)]
pub struct ShortenerService<R> {
    repository: Arc<R>,
    codec: Arc<ChainCodec>,
}

impl<R: Repository> ShortenerService<R> {
    /// Creates a new `ShortenerService` over a repository and a codec.
    pub fn new(repository: R, codec: Arc<ChainCodec>) -> Self {
        Self {
            repository: Arc::new(repository),
            codec,
        }
    }

    /// Validates that the URL has a valid format (has a scheme and host).
    fn validate_url(url: &str) -> Result<()> {
        if url.is_empty() {
            return Err(ShortenerError::InvalidUrl(
                "URL cannot be empty".to_string(),
            ));
        }

        // Basic validation: check for scheme and host presence
        let parts: Vec<&str> = url.split("://").collect();
        if parts.len() < 2 || parts[0].is_empty() || parts[1].is_empty() {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL must have a valid scheme and host: {}",
                url
            )));
        }

        let scheme = parts[0].to_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL scheme must be http or https: {}",
                scheme
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl<R: Repository> Shortener for ShortenerService<R> {
    async fn shorten(&self, original_url: &str) -> Result<ShortPath> {
        Self::validate_url(original_url)?;

        let id = self.repository.insert(original_url).await?;
        let path = ShortPath::new(self.codec.encode(id));

        debug!(id, path = %path, "shortened url");
        Ok(path)
    }

    async fn resolve(&self, path: &str) -> Result<Option<UrlRecord>> {
        trace!(path, "resolving short path");

        let id = match self.codec.decode(path) {
            Ok(id) => id,
            // A structurally broken chain over valid characters is
            // indistinguishable from one that was never issued.
            Err(DecodeError::MalformedChain) => {
                debug!(path, "chain was never issued");
                return Ok(None);
            }
            Err(err) => return Err(ShortenerError::InvalidChain(err)),
        };

        let record = self.repository.get(id).await?;
        match &record {
            Some(record) => debug!(id, url = %record.original_url, "resolved short path"),
            None => trace!(id, "no record behind decoded id"),
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skein_chain::ChainCodecSettings;
    use skein_storage::InMemoryRepository;

    fn test_codec() -> Arc<ChainCodec> {
        let settings = ChainCodecSettings::builder()
            .alphabet("abcdefghijklmnopqrstuvwxyz")
            .seed(6)
            .min_length(4)
            .build();
        Arc::new(ChainCodec::new(settings).unwrap())
    }

    fn test_service() -> ShortenerService<InMemoryRepository> {
        ShortenerService::new(InMemoryRepository::new(), test_codec())
    }

    #[tokio::test]
    async fn shorten_then_resolve_round_trips() {
        let service = test_service();

        let path = service.shorten("https://example.com/page").await.unwrap();
        assert!(path.as_str().chars().count() >= 4);

        let record = service.resolve(path.as_str()).await.unwrap().unwrap();
        assert_eq!(record.original_url, "https://example.com/page");
    }

    #[tokio::test]
    async fn duplicate_urls_get_distinct_paths() {
        let service = test_service();

        let first = service.shorten("https://example.com").await.unwrap();
        let second = service.shorten("https://example.com").await.unwrap();

        assert_ne!(first, second);

        let record = service.resolve(second.as_str()).await.unwrap().unwrap();
        assert_eq!(record.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn shorten_with_invalid_url_fails() {
        let service = test_service();

        for url in ["", "not-a-valid-url", "ftp://example.com", "https://"] {
            let err = service.shorten(url).await.unwrap_err();
            assert!(matches!(err, ShortenerError::InvalidUrl(_)), "url {:?}", url);
        }
    }

    #[tokio::test]
    async fn unissued_but_valid_chain_resolves_to_none() {
        let service = test_service();
        let codec = test_codec();

        // A perfectly decodable chain whose id was never assigned.
        let phantom = codec.encode(10_000);
        assert!(service.resolve(&phantom).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn malformed_chain_resolves_to_none() {
        let service = test_service();

        // Repeated characters can never form a canonical chain.
        assert!(service.resolve("aaaa").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn too_short_chain_is_a_client_error() {
        let service = test_service();

        let err = service.resolve("ab").await.unwrap_err();
        assert!(matches!(
            err,
            ShortenerError::InvalidChain(DecodeError::TooShort { got: 2, min: 4 })
        ));
    }

    #[tokio::test]
    async fn foreign_characters_are_a_client_error() {
        let service = test_service();

        let err = service.resolve("AB12").await.unwrap_err();
        assert!(matches!(
            err,
            ShortenerError::InvalidChain(DecodeError::InvalidCharacter(_))
        ));
    }

    #[tokio::test]
    async fn paths_embed_into_urls() {
        let service = test_service();

        let path = service.shorten("https://example.com").await.unwrap();
        let url = path.to_url("https://ske.in/");
        assert_eq!(url, format!("https://ske.in/{}", path));
    }
}
