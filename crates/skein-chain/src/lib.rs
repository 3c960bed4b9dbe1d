mod alphabet;
mod codec;
pub mod error;

pub use alphabet::{prepare, shuffle};
pub use codec::{ChainCodec, ChainCodecSettings, DEFAULT_MIN_LENGTH};
pub use error::{ConfigError, DecodeError};
