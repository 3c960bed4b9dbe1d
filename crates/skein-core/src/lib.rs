//! Core types and traits for the Skein URL shortener.
//!
//! This crate provides the shared vocabulary between the chain codec and
//! the shortening service: the short path newtype, the repository seam for
//! id-keyed URL records, and the shortener seam itself.

pub mod error;
pub mod repository;
pub mod short_path;
pub mod shortener;

pub use error::{ShortenerError, StorageError};
pub use repository::{RecordId, Repository, UrlRecord};
pub use short_path::ShortPath;
pub use shortener::Shortener;
