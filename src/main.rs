//! Terminal Hacking Solver - CLI
//!
//! Interactive assistant and simulation tools for the password minigame.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use term_crack::{
    commands::{
        DEFAULT_ATTEMPTS, SolveConfig, analyze_word, run_benchmark, run_simple, solve_word,
    },
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{Strategy, StrategyType},
    wordlists::{
        SAMPLE,
        loader::{load_from_file, same_length_pool, words_from_slice, words_from_tokens},
    },
};

#[derive(Parser)]
#[command(
    name = "term_crack",
    about = "Terminal hacking assistant: picks the guess with the most likeness outcomes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Level: 0/novice/house gambit, 1/advanced/best bucket (default), 2/expert/tie breaker
    #[arg(short, long, global = true, default_value = "1")]
    level: String,

    /// Strategy name, overrides --level; also accepts 'random'
    #[arg(short, long, global = true)]
    strategy: Option<String>,

    /// Seed for the randomized strategies
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Wordlist: 'sample' for the built-in list, or path to file
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Simple {
        /// Candidate words; read from input when omitted
        words: Vec<String>,
    },

    /// Crack a known password
    Solve {
        /// The password to crack
        secret: String,

        /// Candidate words (default: --wordlist or the sample list)
        words: Vec<String>,

        /// Attempts before lockout
        #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
        attempts: usize,

        /// Show candidate counts and scores per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score one word against the candidates
    Analyze {
        /// Word to analyze
        word: String,

        /// Candidate words (default: --wordlist or the sample list)
        words: Vec<String>,
    },

    /// Crack every candidate in turn and report statistics
    Benchmark {
        /// Attempts before lockout
        #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
        attempts: usize,
    },
}

/// Resolve the candidate pool
///
/// Positional words win, then `--wordlist`, then `fallback`.
fn load_words(words: &[String], wordlist: Option<&str>, fallback: &[&str]) -> Result<Vec<Word>> {
    let pool = if !words.is_empty() {
        words_from_tokens(words.iter().map(String::as_str))
    } else {
        match wordlist {
            Some("sample") => words_from_slice(SAMPLE),
            Some(path) => {
                load_from_file(path).with_context(|| format!("loading word list {path}"))?
            }
            None => words_from_slice(fallback),
        }
    };

    Ok(same_length_pool(pool))
}

fn strategy(cli: &Cli) -> StrategyType {
    cli.strategy.as_deref().map_or_else(
        || StrategyType::from_name(&cli.level, cli.seed),
        |name| StrategyType::from_name(name, cli.seed),
    )
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let strategy = strategy(&cli);
    log::debug!("using {} strategy", strategy.name());

    // Default to Simple mode if no command given
    let command = cli
        .command
        .unwrap_or(Commands::Simple { words: Vec::new() });

    match command {
        Commands::Simple { words } => {
            let pool = load_words(&words, cli.wordlist.as_deref(), &[])?;
            run_simple(strategy, pool, io::stdin().lock(), io::stdout().lock())?;
        }
        Commands::Solve {
            secret,
            words,
            attempts,
            verbose,
        } => {
            let pool = load_words(&words, cli.wordlist.as_deref(), SAMPLE)?;
            let config = SolveConfig {
                secret,
                max_guesses: attempts,
            };
            let result = solve_word(&config, &pool, &strategy)?;
            print_solve_result(&result, verbose);
        }
        Commands::Analyze { word, words } => {
            let pool = load_words(&words, cli.wordlist.as_deref(), SAMPLE)?;
            let result = analyze_word(&word, &pool, &strategy)?;
            print_analysis_result(&result);
        }
        Commands::Benchmark { attempts } => {
            let pool = load_words(&[], cli.wordlist.as_deref(), SAMPLE)?;
            println!("Running benchmark on {} words...", pool.len());
            let result = run_benchmark(&strategy, &pool, attempts, true)?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
