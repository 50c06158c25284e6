use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use yearguess::client::Catalog;
use yearguess::config::{CatalogConfig, PoolSource};
use yearguess::game::{Game, Phase, RoundResult};

#[derive(Parser)]
#[command(name = "yearguess")]
#[command(version)]
#[command(about = "Guess the release year of a random song")]
pub struct Cli {
    /// Path to a config TOML file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play rounds in the terminal
    Play(SourceArgs),
    /// Fetch one pool and print it as JSON
    Search(SourceArgs),
}

/// Overrides for the config file
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Search keyword
    #[arg(short, long)]
    pub term: Option<String>,
    /// Maximum number of songs per pool
    #[arg(short, long)]
    pub limit: Option<u16>,
    /// Store front country code, e.g. US
    #[arg(long)]
    pub country: Option<String>,
    /// Deezer album id to play instead of a search
    #[arg(long)]
    pub album: Option<String>,
    /// Seed for reproducible track picks
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SourceArgs {
    fn apply(&self, mut config: CatalogConfig) -> CatalogConfig {
        if let Some(term) = &self.term {
            config = config.term(term);
        }
        if let Some(limit) = self.limit {
            config = config.limit(limit);
        }
        if let Some(country) = &self.country {
            config = config.country(country);
        }
        if let Some(album) = &self.album {
            config = config.album(album);
        }
        if let Some(seed) = self.seed {
            config = config.seed(seed);
        }
        config
    }
}

/// Entrypoint for CLI
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };

    match &cli.command {
        Commands::Play(args) => play(args.apply(config)).await,
        Commands::Search(args) => search(args.apply(config)).await,
    }
}

async fn search(config: CatalogConfig) -> anyhow::Result<()> {
    let catalog = Catalog::new(config);
    let tracks = catalog
        .tracks()
        .pool()
        .await
        .with_context(|| "Failed to fetch tracks")?;
    println!("{}", serde_json::to_string_pretty(&tracks)?);
    Ok(())
}

async fn play(config: CatalogConfig) -> anyhow::Result<()> {
    match config.pool_source() {
        PoolSource::Search { term } => println!("Songs matching \"{}\"", term),
        PoolSource::Album { id } => println!("Songs from Deezer album {}", id),
    }
    println!("Type a four digit year to guess, n for the next song, q to quit.");

    let mut game = Game::new(Catalog::new(config));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    start_round(&mut game).await;
    loop {
        prompt(game.session().phase())?;
        let line = match lines.next_line().await.with_context(|| "Failed to read input")? {
            Some(line) => line,
            None => break,
        };

        match line.trim() {
            "q" | "quit" => break,
            "n" | "next" => start_round(&mut game).await,
            "" if game.session().phase() != Phase::AwaitingGuess => start_round(&mut game).await,
            input => match game.guess(input) {
                Ok(result) => print_result(&game, &result),
                Err(err) => println!("{}", err),
            },
        }
    }

    let session = game.session();
    println!(
        "\nFinal score: {} in {} rounds",
        session.cumulative_score(),
        session.rounds_scored()
    );
    Ok(())
}

async fn start_round(game: &mut Game) {
    println!();
    match game.next_round().await {
        Ok(track) => {
            println!("{} - {}", track.artist, track.album);
            if !track.preview.is_empty() {
                println!("Listen: {}", track.preview);
            }
        }
        Err(err) => {
            println!("{}", err);
            if err.is_retryable() {
                println!("Press n to try again.");
            }
        }
    }
}

fn prompt(phase: Phase) -> anyhow::Result<()> {
    match phase {
        Phase::AwaitingGuess => print!("Year? "),
        Phase::Revealed => print!("[n]ext or [q]uit? "),
        Phase::Idle | Phase::Loading => print!("> "),
    }
    std::io::stdout().flush()?;
    Ok(())
}

fn print_result(game: &Game, result: &RoundResult) {
    if let Some(track) = game.session().current_track() {
        println!("{} by {}, released {}", track.title, track.artist, track.release_date);
    }
    if result.year_was_fallback {
        println!("(no usable release date, scored against {})", result.correct_year);
    }
    println!(
        "You guessed {}, off by {}: {} points. Total {}.",
        result.guessed_year,
        result.diff,
        result.score,
        game.session().cumulative_score()
    );
}
