use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::choice::RandomChooser;
use crate::prompt::{prompt_filename, prompt_max_words};
use crate::story::{tell, StoryConfig};

/// Reads a training story and writes a new one built from its word pairs.
///
/// Missing arguments are asked for on stdin.
#[derive(Parser, Debug)]
#[command(name = "markov_story", version)]
pub struct Cli {
    /// Training text file
    pub file: Option<PathBuf>,

    /// Maximum number of words to generate
    #[arg(allow_negative_numbers = true)]
    pub max_words: Option<String>,

    /// Extra training files, read after FILE without resetting context
    #[arg(long = "also", value_name = "FILE")]
    pub also: Vec<PathBuf>,

    /// Seed the random walk for a reproducible story
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stdout();
        let config = self.into_config(&mut input, &mut output)?;

        let mut chooser = match config.seed {
            Some(seed) => RandomChooser::seeded(seed),
            None => RandomChooser::from_entropy(),
        };
        tracing::info!(
            "Generating up to {} words from {} source(s)",
            config.max_words,
            config.sources.len()
        );
        let story = tell(&config, &mut chooser)?;
        println!("{}", story);
        Ok(())
    }

    /// Fills in whatever the command line left out by prompting.
    pub fn into_config<R: BufRead, W: Write>(self, input: &mut R, output: &mut W) -> Result<StoryConfig> {
        let file = match self.file {
            Some(file) => file,
            None => prompt_filename(input, output)?,
        };

        let max_words = match self.max_words.as_deref().map(str::parse::<usize>) {
            Some(Ok(n)) => n,
            Some(Err(_)) => {
                tracing::debug!("Word count argument is not a number, asking instead");
                prompt_max_words(input, output)?
            }
            None => prompt_max_words(input, output)?,
        };

        let mut sources = vec![file];
        sources.extend(self.also);
        Ok(StoryConfig {
            sources,
            max_words,
            seed: self.seed,
        })
    }
}
