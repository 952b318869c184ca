// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `build-vocab`, `smoke-test`
// and `dump-vocab`, and their flags.
//
// Every data flag is optional: whatever is not given falls back
// to the --config file, then to DataConfig's defaults.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::config::ConfigOverrides;

/// The three top-level modes
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rebuild the stored vocabulary from the corpus
    BuildVocab(DataArgs),

    /// Load vocabulary and examples, then pull two batches
    SmokeTest(SmokeTestArgs),

    /// Print the token → id mapping of the stored vocabulary
    DumpVocab(DumpVocabArgs),
}

/// Where the corpus and vocabulary live.
#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// JSON corpus file (array of sentence groups)
    #[arg(long)]
    pub corpus: Option<String>,

    /// JSON vocabulary file
    #[arg(long)]
    pub vocab: Option<String>,
}

#[derive(Args, Debug)]
pub struct SmokeTestArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Examples per batch window
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Append the cyclic shift of every window to itself
    #[arg(long)]
    pub data_loop: bool,
}

#[derive(Args, Debug)]
pub struct DumpVocabArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Also write the vocabulary as <DIR>/tokenizer.json
    #[arg(long, value_name = "DIR")]
    pub export_tokenizer: Option<PathBuf>,
}

/// Convert CLI flags into application-layer overrides.
/// The application layer never sees clap types.
impl From<DataArgs> for ConfigOverrides {
    fn from(a: DataArgs) -> Self {
        ConfigOverrides {
            corpus_path: a.corpus,
            vocab_path: a.vocab,
            ..ConfigOverrides::default()
        }
    }
}

impl From<SmokeTestArgs> for ConfigOverrides {
    fn from(a: SmokeTestArgs) -> Self {
        ConfigOverrides {
            batch_size: a.batch_size,
            // A bare switch can only turn the loop on
            data_loop: a.data_loop.then_some(true),
            ..a.data.into()
        }
    }
}
