use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use ratatui::crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use resumer_core::{Analyzer, Config, StubAnalyzer};

mod action;
mod app;
mod backend;
mod config_file;
mod input;
mod model;
mod theme;
mod tui_event;
mod view;

use app::App;
use config_file::FileConfig;

/// How long a notification stays on screen.
const TOAST_LIFETIME: Duration = Duration::from_secs(5);

/// Resumer: upload a resume and review its analysis in the terminal.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    /// Resume to preselect (PDF, DOC or DOCX); opens on the upload screen
    document: Option<PathBuf>,

    /// Config file (default: <config dir>/resumer/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seconds allowed for one analysis attempt
    #[arg(long)]
    timeout: Option<u64>,

    /// Retries after a transient analysis failure
    #[arg(long)]
    max_retries: Option<u32>,

    /// Delay of the built-in example analyzer, in milliseconds
    #[arg(long)]
    stub_delay_ms: Option<u64>,

    /// Refuse to analyze documents larger than this many bytes
    #[arg(long)]
    max_document_bytes: Option<u64>,

    /// Where to write the log (default: <data dir>/resumer/resumer.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// UI refresh interval in milliseconds
    #[arg(long)]
    tick_rate_ms: Option<u64>,
}

/// CLI flag > environment variable > config file.
fn layer<T: FromStr>(cli: Option<T>, env: Option<String>, file: Option<T>) -> Option<T> {
    cli.or_else(|| env.and_then(|v| v.trim().parse().ok()))
        .or(file)
}

fn resolve_config(
    args: &Args,
    file: &FileConfig,
    env: impl Fn(&str) -> Option<String>,
) -> Config {
    let defaults = Config::default();
    Config {
        analysis_timeout_secs: layer(args.timeout, env("RESUMER_TIMEOUT"), file.analysis.timeout_secs)
            .unwrap_or(defaults.analysis_timeout_secs),
        max_retries: layer(
            args.max_retries,
            env("RESUMER_MAX_RETRIES"),
            file.analysis.max_retries,
        )
        .unwrap_or(defaults.max_retries),
        stub_delay_ms: layer(
            args.stub_delay_ms,
            env("RESUMER_STUB_DELAY_MS"),
            file.analysis.stub_delay_ms,
        )
        .unwrap_or(defaults.stub_delay_ms),
        max_document_bytes: layer(
            args.max_document_bytes,
            env("RESUMER_MAX_DOCUMENT_BYTES"),
            file.analysis.max_document_bytes,
        )
        .or(defaults.max_document_bytes),
    }
}

fn resolve_log_path(
    args: &Args,
    file: &FileConfig,
    env: impl Fn(&str) -> Option<String>,
) -> Option<PathBuf> {
    args.log_file
        .clone()
        .or_else(|| env("RESUMER_LOG_FILE").map(PathBuf::from))
        .or_else(|| file.ui.log_file.clone())
        .or_else(|| dirs::data_local_dir().map(|d| d.join("resumer").join("resumer.log")))
}

/// Send logs to a file; the terminal belongs to the UI. `log` records from
/// the core crate are captured too.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    if let Some(path) = &args.document {
        if !path.exists() {
            anyhow::bail!("Document not found: {}", path.display());
        }
    }

    // Resolve config from CLI flags > env vars > config file > defaults
    let env = |key: &str| std::env::var(key).ok();
    let file_config = match args.config.clone().or_else(config_file::config_path) {
        Some(path) => config_file::load(&path)?,
        None => FileConfig::default(),
    };
    let config = resolve_config(&args, &file_config, env);
    let tick_rate_ms = layer(
        args.tick_rate_ms,
        env("RESUMER_TICK_RATE_MS"),
        file_config.ui.tick_rate_ms,
    )
    .unwrap_or(100)
    .max(10);

    if let Some(path) = resolve_log_path(&args, &file_config, env) {
        if let Err(e) = init_logging(&path) {
            eprintln!("warning: logging disabled: {e:#}");
        }
    }
    tracing::info!("starting resumer v{} with {:?}", env!("CARGO_PKG_VERSION"), config);

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();

    let mut app = App::new(cmd_tx, TOAST_LIFETIME);
    let size = terminal.size()?;
    app.update(action::Action::Resize(size.width, size.height));

    if let Some(path) = &args.document {
        app.update(action::Action::Confirm);
        app.select_path(path);
    }

    let analyzer: Arc<dyn Analyzer> = Arc::new(StubAnalyzer::new(config.stub_delay()));
    let cancel_backend = cancel.clone();
    tokio::spawn(async move {
        backend::run_backend(cmd_rx, analyzer, config, tx, cancel_backend).await;
    });

    // Also handle Ctrl+C at the OS level for clean shutdown
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_for_signal.cancel();
        }
    });

    // Main event loop
    let tick_rate = Duration::from_millis(tick_rate_ms);

    loop {
        // Draw
        terminal.draw(|f| app.view(f))?;

        tokio::select! {
            // Backend events (non-blocking drain)
            maybe_event = rx.recv() => {
                if let Some(backend_event) = maybe_event {
                    app.handle_backend_event(backend_event);
                    while let Ok(evt) = rx.try_recv() {
                        app.handle_backend_event(evt);
                    }
                }
            }
            // Terminal input events
            _ = async {
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        app.update(input::map_event(&evt));
                    }
                }
            } => {}
        }

        // Process tick
        app.update(action::Action::Tick);

        if app.should_quit || cancel.is_cancelled() {
            cancel.cancel();
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    tracing::info!("exiting");

    Ok(())
}
