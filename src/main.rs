use anyhow::Context;
use clap::{Parser, Subcommand};
use mnemonic::config::Config;
use mnemonic::error::Error;
use mnemonic::template::{render, Template};
use mnemonic::wordnet;
use mnemonic::words::{DictionaryWordSource, WordSourceRegistry};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::{debug, error, trace};

/// Generate a mnemonic from a string of characters
#[derive(Parser)]
#[command(name = "mnemonic", version)]
#[command(about = "Generate a mnemonic from a string of characters", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a mnemonic phrase for the given letters
    Generate {
        /// Letters to expand, one word per letter
        letters: String,

        /// WordNet dictionary directory
        #[arg(short, long)]
        dictionary: Option<PathBuf>,

        /// Seed for the random number generator, for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .init();

    debug!("mnemonic started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let result = match cli.command {
        Commands::Generate {
            letters,
            dictionary,
            seed,
        } => run_generate(&letters, dictionary, seed),
    };

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        let code = e.downcast_ref::<Error>().map_or(1, Error::exit_code);
        std::process::exit(code);
    }
}

fn run_generate(input: &str, dictionary: Option<PathBuf>, seed: Option<u64>) -> anyhow::Result<()> {
    let letters: Vec<char> = input.to_lowercase().chars().collect();
    let template = Template::new(&letters);
    debug!(
        letters = letters.len(),
        groups = template.groups().len(),
        "built template"
    );

    let mut registry = WordSourceRegistry::new();
    let used = template.used_parts_of_speech();
    if !used.is_empty() {
        let config = Config::load().context("failed to load configuration")?;
        let dictionary = config.resolve_dictionary(dictionary)?;
        debug!(dictionary = %dictionary.display(), "loading dictionary");
        for &part_of_speech in used {
            let words = wordnet::load_words(&dictionary, part_of_speech)?;
            registry.register(
                part_of_speech,
                Box::new(DictionaryWordSource::new(part_of_speech, words)),
            );
        }
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let phrase = render(&template, &registry, &mut rng)?;
    println!("{phrase}");
    Ok(())
}
