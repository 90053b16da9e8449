//! CLI frontend for the Stille Post text garbler.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sp",
    about = "Stille Post — render text through an imperfect reader",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Garble a text file (or stdin with '-') at a given skill level
    Garble {
        /// Input file, or '-' for stdin
        file: PathBuf,

        /// Lexicon JSON file
        #[arg(short, long)]
        lexicon: PathBuf,

        /// Skill level in [0, 1]; mutually exclusive with --roll
        #[arg(short, long, conflicts_with = "roll")]
        skill: Option<f64>,

        /// Raw check result, converted via the skill model
        #[arg(long, requires = "difficulty")]
        roll: Option<f64>,

        /// Difficulty the roll is measured against
        #[arg(long)]
        difficulty: Option<f64>,

        /// RNG seed for reproducible output
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Term to emphasize (garbled more readily); repeatable
        #[arg(short, long = "term")]
        terms: Vec<String>,

        /// Wrap changed words as [possibly '...']
        #[arg(short, long)]
        annotate: bool,
    },

    /// Convert a raw check result and difficulty into a skill level
    Skill {
        /// Raw check result (e.g. a dice roll plus modifiers)
        #[arg(long)]
        roll: f64,

        /// Difficulty the roll is measured against
        #[arg(long)]
        difficulty: f64,
    },

    /// Show the candidate pools the garbler would draw from for a word
    Pools {
        /// The word to inspect
        word: String,

        /// Coarse part of speech: noun, verb, adjective, adverb
        #[arg(short, long)]
        pos: String,

        /// Lexicon JSON file
        #[arg(short, long)]
        lexicon: PathBuf,

        /// RNG seed for the misleading fallback sample
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Garble {
            file,
            lexicon,
            skill,
            roll,
            difficulty,
            seed,
            terms,
            annotate,
        } => commands::garble::run(
            &file, &lexicon, skill, roll, difficulty, seed, &terms, annotate,
        ),
        Commands::Skill { roll, difficulty } => commands::skill::run(roll, difficulty),
        Commands::Pools {
            word,
            pos,
            lexicon,
            seed,
        } => commands::pools::run(&word, &pos, &lexicon, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
