use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::chain_model::{ChainModel, Token};
use crate::choice::Chooser;
use crate::tokenizer::Tokenizer;

#[derive(Clone, Debug, Default)]
pub struct StoryConfig {
    /// Training files, trained in order into one continuous context.
    pub sources: Vec<PathBuf>,
    pub max_words: usize,
    pub seed: Option<u64>,
}

pub fn load_source(model: &mut ChainModel, tokenizer: &Tokenizer, path: &Path) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read training file '{}'", path.display()))?;
    let before = model.len();
    model.train_sequence(tokenizer.tokens(&text));
    tracing::info!(
        "Trained on '{}' ({} new states, {} total)",
        path.display(),
        model.len() - before,
        model.len()
    );
    Ok(())
}

pub fn load_sources(model: &mut ChainModel, tokenizer: &Tokenizer, sources: &[PathBuf]) -> Result<()> {
    for path in sources {
        load_source(model, tokenizer, path)?;
    }
    Ok(())
}

/// Trains on every source, rewinds to the start state and generates.
pub fn tell<C: Chooser + ?Sized>(config: &StoryConfig, chooser: &mut C) -> Result<String> {
    let tokenizer = Tokenizer::new().context("Failed to build tokenizer")?;
    let mut model = ChainModel::new();
    load_sources(&mut model, &tokenizer, &config.sources)?;

    if model.is_empty() {
        tracing::warn!("Training sources contained no words");
    }

    model.reset();
    let words = model.generate(config.max_words, chooser);
    tracing::debug!(
        "Generated {} of at most {} words, stopped at {:?}",
        words.len(),
        config.max_words,
        model.state()
    );
    Ok(render(&words))
}

pub fn render(words: &[Token]) -> String {
    words.join(" ")
}
