use clap::{Parser, Subcommand};

pub const ALPHABET_ENV: &str = "SKEIN_ALPHABET";
pub const SEED_ENV: &str = "SKEIN_SEED";
pub const MIN_LENGTH_ENV: &str = "SKEIN_MIN_LENGTH";

pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Parser)]
#[command(name = "skein")]
pub struct CLI {
    /// Alphabet the codec encodes over.
    #[arg(long, env = ALPHABET_ENV, default_value = DEFAULT_ALPHABET)]
    pub alphabet: String,

    /// Seed for the deterministic alphabet shuffle. Decoding previously
    /// issued chains requires the exact seed they were issued under.
    #[arg(long, env = SEED_ENV)]
    pub seed: Option<u64>,

    /// Minimum chain length.
    #[arg(
        long,
        env = MIN_LENGTH_ENV,
        default_value_t = skein_chain::DEFAULT_MIN_LENGTH
    )]
    pub min_length: usize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode a record id into a chain.
    Encode { id: u64 },
    /// Decode a chain back into the record id it was issued for.
    Decode { chain: String },
    /// Print the prepared (post-shuffle) alphabet.
    Alphabet,
    /// Shorten the given URLs into an in-memory store and resolve each
    /// short path back, printing the mapping.
    Demo { urls: Vec<String> },
}
