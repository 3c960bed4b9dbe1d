mod cli;

use crate::cli::{Command, CLI};
use anyhow::Context;
use clap::Parser;
use skein_chain::{ChainCodec, ChainCodecSettings};
use skein_core::Shortener;
use skein_shortener::ShortenerService;
use skein_storage::InMemoryRepository;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    let builder = ChainCodecSettings::builder()
        .alphabet(config.alphabet)
        .min_length(config.min_length);
    let settings = match config.seed {
        Some(seed) => builder.seed(seed).build(),
        None => builder.build(),
    };
    let codec = Arc::new(ChainCodec::new(settings).context("codec configuration rejected")?);

    info!(
        alphabet_len = codec.alphabet().chars().count(),
        min_length = codec.min_length(),
        seeded = config.seed.is_some(),
        "chain codec ready"
    );

    match config.command {
        Command::Encode { id } => println!("{}", codec.encode(id)),
        Command::Decode { chain } => println!("{}", codec.decode(&chain)?),
        Command::Alphabet => println!("{}", codec.alphabet()),
        Command::Demo { urls } => {
            let service = ShortenerService::new(InMemoryRepository::new(), Arc::clone(&codec));
            for url in urls {
                let path = service.shorten(&url).await?;
                let record = service
                    .resolve(path.as_str())
                    .await?
                    .context("freshly issued path must resolve")?;
                println!("{} -> {}", path, record.original_url);
            }
        }
    }

    Ok(())
}
