mod config;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use staystrong_core::app::AppState;
use staystrong_core::goals::GoalTracker;
use staystrong_core::key_event::{AppKeyCode, AppKeyEvent};
use staystrong_core::quote::{HttpQuoteSource, QuoteState};
use staystrong_core::ui;
use staystrong_core::utils::format_long_date;

use crate::config::{
    default_config_path, default_log_path, load_file_config, resolve_settings, Settings,
};

const DEFAULT_LOG_FILTER: &str = "staystrong=info,staystrong_core=info";
const POLL_INTERVAL: Duration = Duration::from_millis(100);

// ── Key event conversion ─────────────────────────────────────────────────

fn convert_key(key: crossterm::event::KeyEvent) -> AppKeyEvent {
    let code = match key.code {
        KeyCode::Char(c) => AppKeyCode::Char(c),
        KeyCode::Backspace => AppKeyCode::Backspace,
        KeyCode::Enter => AppKeyCode::Enter,
        KeyCode::Left => AppKeyCode::Left,
        KeyCode::Right => AppKeyCode::Right,
        KeyCode::Up => AppKeyCode::Up,
        KeyCode::Down => AppKeyCode::Down,
        KeyCode::Delete => AppKeyCode::Delete,
        KeyCode::Home => AppKeyCode::Home,
        KeyCode::End => AppKeyCode::End,
        KeyCode::Esc => AppKeyCode::Esc,
        _ => AppKeyCode::Other,
    };
    AppKeyEvent {
        code,
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        alt: key.modifiers.contains(KeyModifiers::ALT),
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
    }
}

// ── Logging ──────────────────────────────────────────────────────────────

/// The TUI owns stdout, so logs go to a file unless running with `--once`.
fn init_logging(args: &Args) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    if args.once {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(io::stderr))
            .init();
        return Ok(());
    }

    let path = match &args.log_file {
        Some(path) => path.clone(),
        None => default_log_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .init();
    Ok(())
}

// ── Non-interactive snapshot ─────────────────────────────────────────────

fn format_snapshot(tracker: &GoalTracker, quote: &str, today: NaiveDate) -> String {
    let stats = tracker.stats();
    let mut out = format!("{} - {}\n", ui::TITLE, format_long_date(today));
    out.push_str(&format!(
        "Goals Today: {}/{}  Total Streak: {}  Progress: {}%  Level: {}\n",
        stats.completed,
        stats.total,
        stats.total_streak,
        stats.rounded_percentage(),
        stats.level
    ));
    for goal in tracker.goals() {
        out.push_str(&format!("  {}\n", ui::goal_label(goal)));
    }
    out.push_str(&format!("\n\"{quote}\"\n"));
    out
}

fn print_snapshot(settings: Settings, source: &HttpQuoteSource) {
    let tracker = GoalTracker::from_seeds(settings.goals);
    let mut quote = QuoteState::default();
    quote.refresh_blocking(source);
    print!(
        "{}",
        format_snapshot(&tracker, quote.text(), Local::now().date_naive())
    );
}

// ── Main ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "staystrong")]
#[command(about = "Daily goals, streaks and a quote to keep you going", long_about = None)]
pub struct Args {
    /// Config file (default: ~/.config/staystrong/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Quote endpoint returning {"reason": "..."}
    #[arg(long)]
    endpoint: Option<String>,

    /// Quote request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Start in dark theme
    #[arg(long)]
    dark: bool,

    /// Start with no goals instead of the sample list
    #[arg(long)]
    empty: bool,

    /// Log file (default: ~/.config/staystrong/staystrong.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print stats and one quote, then exit
    #[arg(long)]
    once: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let settings = resolve_settings(load_file_config(&config_path)?, &args);
    tracing::info!(
        endpoint = %settings.endpoint,
        theme = settings.theme.label(),
        goals = settings.goals.len(),
        "starting StayStrong v{}",
        env!("CARGO_PKG_VERSION")
    );

    let source = HttpQuoteSource::new(settings.endpoint.clone(), settings.timeout);
    if args.once {
        print_snapshot(settings, &source);
        return Ok(());
    }

    let mut app = AppState::new(settings.goals, settings.theme, Arc::new(source));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "dashboard exited with an error");
        eprintln!("Error: {err}");
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| ui::ui(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(convert_key(key)) {
                    break;
                }
            }
        }
    }
    tracing::info!("dashboard closed");
    Ok(())
}
