use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use reversi::config::AppConfig;
use reversi::game::GameState;
use reversi::player::HumanPlayer;
use reversi::ui::console::{self, Seats};
use reversi::ui::App;

/// Play Reversi in the terminal.
#[derive(Parser)]
#[command(name = "reversi", about = "Two-player Reversi in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "reversi.toml")]
    config: PathBuf,

    /// Override the board size (even, 2 to 26)
    #[arg(long)]
    size: Option<usize>,

    /// Line-oriented console game instead of the full-screen UI
    #[arg(long)]
    plain: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.dump_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(size) = cli.size {
        config.board.size = size;
        config.validate().context("invalid --size")?;
    }

    init_tracing(&config, cli.plain);

    let state = GameState::with_size(config.board.size, config.game.first)?;
    if cli.plain {
        run_console(state, &config)
    } else {
        run_tui(state)
    }
}

/// Diagnostics go to stderr. The full-screen UI owns the terminal, so it
/// stays silent unless `RUST_LOG` asks otherwise.
fn init_tracing(config: &AppConfig, plain: bool) {
    let fallback = if plain { config.log_level.as_str() } else { "off" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_console(state: GameState, config: &AppConfig) -> Result<()> {
    let mut human = HumanPlayer::new(io::stdin().lock(), "Human");
    let mut stdout = io::stdout().lock();

    let end = console::play(
        state,
        Seats::Shared(&mut human),
        &mut stdout,
        &config.display.glyphs(),
    )
    .context("console game failed")?;
    if !end.is_terminal() {
        tracing::info!("input closed before the game ended");
    }
    Ok(())
}

fn run_tui(state: GameState) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(state);
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("terminal UI failed")
}
