//! Bolt scene runner (default binary).
//!
//! `preview` (the default) rasterizes the scene into the terminal with a
//! live flash timer; `export` writes the mounted page as HTML or the scene
//! data as JSON.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use bolt_scene::adapter::{
    mount_hero, render_html_document, render_json, BoltConfig, Document, HeroMount,
};
use bolt_scene::core::{scatter_particles, SimpleRng};
use bolt_scene::engine::{FlashDriver, FlashEvent};
use bolt_scene::input::{map_key, should_quit, PreviewAction};
use bolt_scene::term::{PreviewState, SceneView, TerminalRenderer, Viewport};

const LOG_FILTER_ENV: &str = "BOLT_SCENE_LOG";
const LOG_PATH_ENV: &str = "BOLT_SCENE_LOG_PATH";
const TICK_MS: u64 = 16;

#[derive(Debug, Parser)]
#[command(name = "bolt-scene", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    source: SourceArgs,
}

#[derive(Debug, Clone, Default, clap::Args)]
struct SourceArgs {
    /// JSON config file (overrides BOLT_SCENE_CONFIG).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for flash intervals and particles (overrides BOLT_SCENE_SEED).
    #[arg(long, global = true)]
    seed: Option<u32>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Animate the scene in the terminal.
    Preview,
    /// Write the mounted scene to a file or stdout.
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Html)]
        format: ExportFormat,

        /// Output file; stdout when omitted.
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Page title for HTML output.
        #[arg(long, default_value = "Bolt")]
        title: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Html,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Preview) {
        Command::Preview => {
            init_logging(true)?;
            let config = load_config(&cli.source)?;
            preview(config)
        }
        Command::Export {
            format,
            output,
            title,
        } => {
            init_logging(false)?;
            let config = load_config(&cli.source)?;
            export(&config, format, output, &title)
        }
    }
}

/// `fmt` subscriber filtered by `BOLT_SCENE_LOG` (default `warn`).
///
/// The preview owns the terminal, so its logs only go to the file named by
/// `BOLT_SCENE_LOG_PATH` and are dropped when it is unset.
fn init_logging(preview: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match std::env::var_os(LOG_PATH_ENV) {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("creating log file {}", PathBuf::from(&path).display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if preview => {}
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn load_config(source: &SourceArgs) -> Result<BoltConfig> {
    let mut config = match &source.config {
        Some(path) => BoltConfig::load_with_env(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => BoltConfig::from_env().context("loading config from environment")?,
    };
    // --seed wins over BOLT_SCENE_SEED.
    if let Some(seed) = source.seed {
        config.set_seed(seed);
    }
    Ok(config)
}

fn export(
    config: &BoltConfig,
    format: ExportFormat,
    output: Option<PathBuf>,
    title: &str,
) -> Result<()> {
    let text = match format {
        ExportFormat::Html => render_html_document(config, title).context("rendering html")?,
        ExportFormat::Json => {
            let mount = mount_standalone(config)?;
            render_json(&mount).context("rendering json")?
        }
    };

    match output {
        Some(path) => {
            fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), ?format, "scene exported");
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn mount_standalone(config: &BoltConfig) -> Result<HeroMount> {
    let mut doc = Document::with_hero();
    mount_hero(&mut doc, config)
        .context("mounting scene")?
        .context("hero container missing")
}

fn preview(config: BoltConfig) -> Result<()> {
    let mount = mount_standalone(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, mount);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut mount: HeroMount) -> Result<()> {
    let view = SceneView::default();
    let mut driver =
        FlashDriver::start(mount.flash_schedule()).context("starting flash timer")?;
    let mut rng = SimpleRng::new(mount.seed());

    let stagger = u64::from(mount.flash_schedule().timing().stagger_ms.max(1));
    let manual_flash = Duration::from_millis(u64::from(PreviewAction::MANUAL_FLASH_MS));
    let tick = Duration::from_millis(TICK_MS);

    let mut entrance_start = Instant::now();
    let mut timer_flash = false;
    let mut manual_until: Option<Instant> = None;
    let mut state = PreviewState::default();
    let mut last_size = (0, 0);

    loop {
        // Flash events from the timer task.
        while let Some(event) = driver.try_recv() {
            timer_flash = event == FlashEvent::On;
        }
        if manual_until.is_some_and(|until| Instant::now() >= until) {
            manual_until = None;
        }

        let elapsed = entrance_start.elapsed().as_millis() as u64;
        state.visible_blocks = ((elapsed / stagger) as usize + 1).min(mount.block_count());
        state.flashing = timer_flash || manual_until.is_some();
        state.paused = !driver.is_running();

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        if (w, h) != last_size {
            term.invalidate();
            last_size = (w, h);
        }
        let fb = view.render(&mount.scene, &mount.particles, &state, Viewport::new(w, h));
        term.present(&fb)?;

        if !event::poll(tick)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }

        match map_key(key) {
            Some(PreviewAction::Flash) => {
                manual_until = Some(Instant::now() + manual_flash);
            }
            Some(PreviewAction::TogglePause) => {
                if driver.is_running() {
                    driver.stop();
                    timer_flash = false;
                } else {
                    driver.restart(mount.flash_schedule());
                }
            }
            Some(PreviewAction::Reseed) => {
                let mut particles = mount.particle_config();
                particles.seed = rng.next_u32();
                mount.particles = scatter_particles(&particles);
                debug!(seed = particles.seed, "particles reseeded");
            }
            Some(PreviewAction::Replay) => {
                entrance_start = Instant::now();
                timer_flash = false;
                driver.restart(mount.flash_schedule());
            }
            None => {}
        }
    }
}
