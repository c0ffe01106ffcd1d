use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::builder::TypedValueParser as _;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wordleclient::api::{ValidationClient, DEFAULT_ENDPOINT};
use wordleclient::game::{GameConfig, DEFAULT_LETTERS, DEFAULT_MAX_GUESSES};
use wordleclient::store::Store;

mod tui;

#[derive(Parser, Debug)]
#[command(version, about = "Play Wordle in the terminal")]
struct Cli {
    /// Base url of the guess validation service
    #[arg(long, env = "WORDLE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Number of letters per word
    #[arg(long, default_value_t = DEFAULT_LETTERS, value_parser = clap::value_parser!(u16).range(1..=12).map(usize::from))]
    letters: usize,

    /// Number of guesses before the game is lost
    #[arg(long, default_value_t = DEFAULT_MAX_GUESSES, value_parser = clap::value_parser!(u16).range(1..=10).map(usize::from))]
    max_guesses: usize,

    /// Timeout of a validation request in milliseconds
    #[arg(long, default_value_t = 5000)]
    timeout_ms: u64,

    /// Write logs to this file, filtered by RUST_LOG
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).wrap_err_with(|| format!("creating {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = GameConfig {
        letters: cli.letters,
        max_guesses: cli.max_guesses,
    };
    let client = ValidationClient::new(&cli.endpoint, Duration::from_millis(cli.timeout_ms))
        .wrap_err("building the http client")?;
    info!(endpoint = client.endpoint(), ?config, "starting game");

    tui::initialize_panic_handler();
    let mut terminal = tui::init()?;
    let mut app = tui::App::init(Store::new(config), client);
    let app_result = app.run(&mut terminal).await;
    tui::restore()?;
    app_result?;

    let game = &app.store().game;
    for guess in game.guesses() {
        println!("{guess}");
    }
    if game.won() {
        println!("Solved in {}/{}", game.guesses().len(), game.max_guesses());
    }
    Ok(())
}
