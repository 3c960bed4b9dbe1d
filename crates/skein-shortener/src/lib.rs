//! URL shortener service implementation.
//!
//! This crate wires the chain codec to a repository: shortening persists
//! the URL and encodes the assigned record id, resolving decodes a short
//! path back into an id and looks the record up. Core types and trait
//! seams live in `skein_core`.

pub mod service;

pub use service::ShortenerService;
