// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, using `clap`.
// All work is delegated to Layer 2 (application).
//
// Three commands are supported:
//   1. `build-vocab` — rebuild the stored vocabulary
//   2. `smoke-test`  — load everything and pull two batches
//   3. `dump-vocab`  — print the token → id mapping
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::application::config::DataConfig;
use crate::infra::json_store::JsonFileStore;
use commands::{Commands, DataArgs, DumpVocabArgs, SmokeTestArgs};

#[derive(Parser, Debug)]
#[command(
    name = "dialog-batcher",
    version,
    about = "Build a chat vocabulary and produce padded seq2seq training batches."
)]
pub struct Cli {
    /// JSON data config; explicit flags override its values
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        let config = self.config;
        match self.command {
            Commands::BuildVocab(args) => run_build_vocab(config, args),
            Commands::SmokeTest(args) => run_smoke_test(config, args),
            Commands::DumpVocab(args) => run_dump_vocab(config, args),
        }
    }
}

fn store_for(cfg: &DataConfig) -> JsonFileStore {
    JsonFileStore::new(&cfg.corpus_path, &cfg.vocab_path)
}

fn run_build_vocab(config: Option<PathBuf>, args: DataArgs) -> Result<()> {
    use crate::application::vocab_use_case::BuildVocabUseCase;

    let cfg = DataConfig::resolve(config.as_deref(), args.into())?;
    tracing::info!("Building vocabulary from '{}'", cfg.corpus_path);

    let store = store_for(&cfg);
    let count = BuildVocabUseCase::new(&store, &store).execute()?;

    println!("Stored {} tokens in '{}'.", count, cfg.vocab_path);
    Ok(())
}

fn run_smoke_test(config: Option<PathBuf>, args: SmokeTestArgs) -> Result<()> {
    use crate::application::smoke_test_use_case::SmokeTestUseCase;

    let cfg = DataConfig::resolve(config.as_deref(), args.into())?;
    tracing::info!(
        "Smoke test: batch size {}, data loop {}",
        cfg.batch_size,
        cfg.data_loop
    );

    let store = store_for(&cfg);
    let report = SmokeTestUseCase::new(&cfg, &store, &store).execute()?;

    println!(
        "Vocabulary: {} entries, examples: {}, input size: {}",
        report.vocab_size, report.examples, report.input_size
    );
    for batch in &report.batches {
        println!(
            "  batch @{}: {} pairs, encoder {:?}, decoder {:?}, targets {:?}",
            batch.start, batch.pairs, batch.encoder_shape, batch.decoder_shape, batch.target_shape
        );
    }
    Ok(())
}

fn run_dump_vocab(config: Option<PathBuf>, args: DumpVocabArgs) -> Result<()> {
    use crate::application::vocab_use_case::DumpVocabUseCase;

    let export_dir = args.export_tokenizer;
    let cfg = DataConfig::resolve(config.as_deref(), args.data.into())?;

    let store = store_for(&cfg);
    let use_case = DumpVocabUseCase::new(&store);

    for (token, id) in use_case.execute()? {
        println!("{id}\t{token}");
    }

    if let Some(dir) = export_dir {
        let count = use_case.export(&dir)?;
        println!("Exported {} entries to '{}'.", count, dir.display());
    }
    Ok(())
}
