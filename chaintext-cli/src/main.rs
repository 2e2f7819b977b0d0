use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;

use chaintext_core::model::generator;
use chaintext_core::model::tokenizer;
use chaintext_core::model::{Chain, FrequencyTable};

#[derive(Parser, Debug)]
#[command(author, version, about = "Markov word-chain trainer and generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a frequency table from text files
    Train {
        /// Number of words per prefix (at least 1)
        prefix_len: usize,

        /// Path the table is written to
        output: PathBuf,

        /// Text files to ingest, in order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Generate text from a previously trained table
    Generate {
        /// Path of a table written by `train`
        table: PathBuf,

        /// Maximum number of words to emit
        words: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Train { prefix_len, output, inputs } => train(prefix_len, &output, &inputs),
        Commands::Generate { table, words } => generate(&table, words),
    }
}

/// Accumulates all inputs into one chain, then builds and saves the table.
fn train(prefix_len: usize, output: &Path, inputs: &[PathBuf]) -> Result<()> {
    let mut chain = Chain::new(prefix_len)?;

    for path in inputs {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read input file {}", path.display()))?;
        chain.feed(tokenizer::tokenize(&text));
        info!("ingested {}", path.display());
    }

    let table = FrequencyTable::build(&chain);
    table
        .save(output)
        .with_context(|| format!("cannot write table to {}", output.display()))?;
    info!("wrote {} prefixes to {}", table.len(), output.display());

    Ok(())
}

/// Loads a table and prints a generated walk as one space-joined line.
fn generate(table_path: &Path, words: usize) -> Result<()> {
    let table = FrequencyTable::load(table_path)
        .with_context(|| format!("cannot load table {}", table_path.display()))?;

    let generated = generator::generate(&table, words);
    println!("{}", generated.join(" "));

    Ok(())
}
