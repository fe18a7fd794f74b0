mod keyboard;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use plane_shooter::assets::{AssetProvider, BuiltinAssets, ImageDirAssets};
use plane_shooter::display::TerminalRenderer;
use plane_shooter::pacer::FramePacer;
use plane_shooter::{run, Game, GameConfig, GameError, LoopOutcome, Result};

use keyboard::TerminalInput;

/// Vertical-scrolling plane shooter for the terminal.
#[derive(Parser)]
#[command(name = "plane_shooter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Ticks per second
    #[arg(long, default_value = "60")]
    fps: u32,

    /// Milliseconds between enemy spawns
    #[arg(long, default_value = "1000")]
    enemy_period_ms: u64,

    /// Milliseconds between hero volleys
    #[arg(long, default_value = "500")]
    fire_period_ms: u64,

    /// Directory holding the sprite images; built-in sizes are used if omitted
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Write logs to this file (the terminal itself is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            frame_rate: self.fps,
            enemy_period: Duration::from_millis(self.enemy_period_ms),
            fire_period: Duration::from_millis(self.fire_period_ms),
            ..GameConfig::default()
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let file = File::create(path)?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| GameError::Logging(e.to_string()))
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli.config();
    config.validate()?;

    // Resolve assets before touching the terminal so a bad asset directory
    // fails with a readable error.
    let assets: Box<dyn AssetProvider> = match &cli.assets {
        Some(dir) => {
            let provider = ImageDirAssets::new(dir);
            provider.preflight()?;
            info!(dir = %dir.display(), "using sprite directory");
            Box::new(provider)
        }
        None => Box::new(BuiltinAssets),
    };

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread to blocking event reads so the game loop only ever
    // drains the channel.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = play(&mut out, &config, assets.as_ref(), TerminalInput::new(rx));

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn play<W: Write>(
    out: &mut W,
    config: &GameConfig,
    assets: &dyn AssetProvider,
    mut input: TerminalInput,
) -> Result<()> {
    let (width, height) = terminal::size()?;
    let mut renderer = TerminalRenderer::new(out, width, height, config.screen);
    let mut pacer = FramePacer::new(config.frame_period());
    let mut game = Game::new(config, assets, thread_rng())?;

    match run(&mut game, &mut input, &mut pacer, &mut renderer)? {
        LoopOutcome::GameOver => {
            renderer.draw_game_over(game.ticks())?;
            input.wait_for_key();
        }
        LoopOutcome::Quit => {}
    }
    Ok(())
}
