//! vitts-symbols CLI — inspect and persist symbol vocabularies.
//!
//! Builds a vocabulary from a JSON config (or a built-in preset), logs the
//! vocabulary dump, and optionally encodes a line of text.
//!
//! # Output
//!
//! The dump goes to the log (stderr). A one-line JSON summary is printed to
//! stdout on success:
//!
//! ```json
//! {"num_symbols":181,"pad_id":0,"blank_id":3,"ids":[7,33]}
//! ```
//!
//! Exit code 0 on success, non-zero on error.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use vitts_symbols::{CharactersConfig, VocabConfig, Vocabulary};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    Graphemes,
    Phonemes,
}

#[derive(Parser, Debug)]
#[command(
    name = "vitts-symbols",
    about = "Build and inspect VITS symbol vocabularies",
    long_about = "Build a symbol vocabulary from a JSON config or a built-in preset.\n\
                  The vocabulary dump is logged to stderr; a JSON summary line is printed to stdout."
)]
struct Args {
    /// JSON config with an optional "characters" section.
    /// Overrides --preset when given.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Built-in inventory used when no config is given.
    #[arg(long, value_enum, default_value_t = Preset::Graphemes)]
    preset: Preset,

    /// Write the resolved config here (reloads to an identical vocabulary).
    #[arg(long, short = 'w')]
    write_config: Option<PathBuf>,

    /// Text to encode, one symbol per char.
    #[arg(long, short = 'e')]
    encode: Option<String>,

    /// Wrap encoded ids with bos/eos.
    #[arg(long, requires = "encode")]
    add_bos_eos: bool,

    /// Intersperse the blank id between encoded ids.
    #[arg(long, requires = "encode")]
    add_blank: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            VocabConfig::from_file(path)
                .map_err(|e| anyhow::anyhow!("failed to load {}: {e}", path.display()))?
        }
        None => VocabConfig::new(match args.preset {
            Preset::Graphemes => CharactersConfig::graphemes(),
            Preset::Phonemes => CharactersConfig::phonemes(),
        }),
    };

    let (vocab, config) = Vocabulary::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build vocabulary: {e}"))?;
    vocab.log_summary();

    if let Some(path) = &args.write_config {
        config.save(path)?;
        tracing::info!("Wrote config to {}", path.display());
    }

    let ids = match &args.encode {
        Some(text) => {
            let mut ids = vocab.encode(text)?;
            if args.add_blank {
                ids = vocab.intersperse_blank(&ids)?;
            }
            if args.add_bos_eos {
                ids = vocab.pad_with_bos_eos(&ids)?;
            }
            Some(ids)
        }
        None => None,
    };

    // Machine-readable summary on stdout for the caller
    let mut summary = serde_json::json!({
        "num_symbols": vocab.num_symbols(),
        "pad_id": vocab.pad_id(),
        "blank_id": vocab.blank_id(),
    });
    if let Some(ids) = ids {
        summary["ids"] = serde_json::json!(ids);
    }
    println!("{summary}");

    Ok(())
}
