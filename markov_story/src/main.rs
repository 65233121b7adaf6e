mod chain_model;
mod choice;
mod cli;
mod prompt;
mod story;
mod tokenizer;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("markov_story=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    cli::Cli::parse().run()
}
