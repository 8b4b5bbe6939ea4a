use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::core::engine::Engine;
use crate::games::hangman::HangmanGame;
use crate::words::WordRepository;

#[derive(Parser)]
#[command(name = "hangterm")]
#[command(about = "🎩 Hangman in your terminal")]
#[command(version)]
pub struct Cli {
    /// Category data file (JSON)
    #[arg(short, long, global = true, env = "HANGTERM_WORDS", default_value = "assets/words.json")]
    pub words: PathBuf,

    /// Write logs to this file; the game screen owns the terminal
    #[arg(long, global = true, env = "HANGTERM_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Seed for word selection, for reproducible rounds
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Play in the terminal (default)
    Play {
        /// Skip the category screen and play this category
        #[arg(short, long, conflicts_with = "random")]
        category: Option<String>,

        /// Skip the category screen and play a random category
        #[arg(short, long)]
        random: bool,
    },
    /// List available categories
    List,
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Commands::Play { category: None, random: false });

    init_tracing(cli.log_file.as_deref(), matches!(command, Commands::List))?;

    let mut words = match cli.seed {
        Some(seed) => WordRepository::seeded(seed),
        None => WordRepository::new(),
    };
    let load_error = words.load_file(&cli.words).err();

    match command {
        Commands::List => {
            if let Some(error) = load_error {
                println!("⚠️  Using built-in words ({}: {})", cli.words.display(), error);
                println!();
            }
            println!("🎮 Available categories:");
            println!();
            for category in words.all_categories() {
                println!("{} {} ({} words)", category.icon, category.name, category.words.len());
            }
            println!();
            println!("Total: {} words", words.total_word_count());
        }

        Commands::Play { category, random } => {
            let mut game = HangmanGame::new(words);
            if random {
                game.start_random_category();
            } else if let Some(name) = category {
                if !game.start_new_game_in(&name) {
                    let available: Vec<&str> = game.all_categories().iter().map(|c| c.name.as_str()).collect();
                    bail!("Category '{}' not found. Available: {}", name, available.join(", "));
                }
            }

            let terminal = ratatui::init();
            let result = Engine::new(game).run(terminal).await;
            ratatui::restore();

            let game = result?;
            let score = game.score();
            info!(wins = score.wins, losses = score.losses, "session finished");
            println!("👋 Wins: {}  Losses: {}", score.wins, score.losses);
        }
    }

    Ok(())
}

/// Logs go to `log_file` when given. Otherwise only non-interactive
/// commands log, to stderr.
fn init_tracing(log_file: Option<&Path>, to_stderr: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = log_file {
        let file = std::fs::File::create(path)?;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .try_init(); // Don't panic if already initialized
    } else if to_stderr {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
    Ok(())
}
