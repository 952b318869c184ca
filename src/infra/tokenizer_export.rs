// ============================================================
// Layer 6 — Tokenizer Export
// ============================================================
// Writes a loaded Vocabulary as a HuggingFace tokenizer.json so
// inference code outside this crate tokenises exactly like the
// training pipeline did: same whitespace split, same ids, same
// <UNK> fallback.
//
// The JSON is built by hand and then loaded back through
// Tokenizer::from_file, which doubles as validation.
//
// Reference: HuggingFace tokenizers serialisation format

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokenizers::Tokenizer;

use crate::domain::reserved::{RESERVED, UNKNOWN};
use crate::domain::vocabulary::Vocabulary;

/// Write `<dir>/tokenizer.json` for `vocab` and reload it.
pub fn export_tokenizer(vocab: &Vocabulary, dir: &Path) -> Result<Tokenizer> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Cannot create directory '{}'", dir.display()))?;

    // ── WordLevel vocab: token → id ───────────────────────────────────────────
    let mut word_ids = serde_json::Map::new();
    for (token, id) in vocab.iter() {
        word_ids.insert(token.to_string(), serde_json::json!(id));
    }

    // Reserved symbols are special tokens so they are never split
    let added_tokens: Vec<serde_json::Value> = RESERVED
        .iter()
        .enumerate()
        .map(|(id, content)| {
            serde_json::json!({
                "id": id,
                "content": content,
                "single_word": false,
                "lstrip": false,
                "rstrip": false,
                "normalized": false,
                "special": true
            })
        })
        .collect();

    let tokenizer_json = serde_json::json!({
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": added_tokens,
        "normalizer": null,
        "pre_tokenizer": {
            "type": "WhitespaceSplit"
        },
        "post_processor": null,
        "decoder": null,
        "model": {
            "type": "WordLevel",
            "vocab": word_ids,
            "unk_token": UNKNOWN
        }
    });

    let path = tokenizer_path(dir);
    std::fs::write(&path, serde_json::to_string_pretty(&tokenizer_json)?)
        .with_context(|| format!("Cannot write tokenizer JSON to '{}'", path.display()))?;

    tracing::info!(
        "Exported {} vocabulary entries to '{}'",
        vocab.size(),
        path.display()
    );

    Tokenizer::from_file(&path)
        .map_err(|e| anyhow::anyhow!("Cannot reload tokenizer from '{}': {e}", path.display()))
}

pub fn tokenizer_path(dir: &Path) -> PathBuf {
    dir.join("tokenizer.json")
}
