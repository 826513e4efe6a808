use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::{stderr, stdout};

use quotebatch::App;
use quotebatch::batch::{BatchController, BatchTerminal};
use quotebatch::clipboard::BackendSink;
use quotebatch::config::{self, ClipboardBackend, Config, ConfigResult};
use quotebatch::error::AppError;
use quotebatch::headless;
use quotebatch::source::QuoteApiClient;
use quotebatch::worker;

/// Random quote browser with paced batch clipboard copy
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Browse random quotes and copy them to the clipboard in paced batches"
)]
struct Args {
    /// Copy COUNT quotes (1-50) one per second without opening the TUI
    #[arg(long, value_name = "COUNT")]
    batch: Option<String>,

    /// Base URL of the quote service (overrides [api] base_url)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Clipboard backend (overrides [clipboard] backend)
    #[arg(long, value_enum)]
    backend: Option<ClipboardBackend>,
}

fn main() -> Result<()> {
    // Writes to /tmp/quotebatch-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let args = Args::parse();
    let ConfigResult { config, warning } = config::load_config();
    let config = apply_overrides(config, &args);

    match args.batch.as_deref() {
        Some(count_text) => {
            if let Some(warning) = warning {
                eprintln!("Warning: {}", warning);
            }
            run_headless(&config, count_text)
        }
        None => run_tui(&config, warning),
    }
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/quotebatch-debug.log")
    else {
        return;
    };

    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .try_init();

    log::debug!("=== QUOTEBATCH DEBUG SESSION STARTED ===");
}

/// CLI flags win over the config file
fn apply_overrides(mut config: Config, args: &Args) -> Config {
    if let Some(url) = &args.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(backend) = args.backend {
        config.clipboard.backend = backend;
    }
    config.normalized()
}

fn run_headless(config: &Config, count_text: &str) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(AppError::from)?;

    let controller = BatchController::new(
        QuoteApiClient::new(config.api.base_url.clone()),
        BackendSink::new(config.clipboard.backend),
    );

    let result = runtime.block_on(async {
        let ctrl_c = tokio::spawn(headless::cancel_on_ctrl_c(controller.handle()));
        let result = headless::run_batch(&controller, count_text, &mut stderr()).await;
        ctrl_c.abort();
        result
    });

    match result {
        Ok(BatchTerminal::Completed { .. } | BatchTerminal::Cancelled { .. }) => Ok(()),
        Ok(terminal) => Err(eyre!("Batch copy did not complete: {:?}", terminal)),
        Err(e) => Err(AppError::from(e).into()),
    }
}

fn run_tui(config: &Config, warning: Option<String>) -> Result<()> {
    let terminal = init_terminal()?;

    let mut app = App::new(config);
    app.attach_worker(worker::spawn_worker(
        QuoteApiClient::new(config.api.base_url.clone()),
        BackendSink::new(config.clipboard.backend),
    ));
    if let Some(warning) = warning {
        app.notification.show_warning(&warning);
    }
    app.request_random_quote();

    let result = run(terminal, app);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== QUOTEBATCH DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
