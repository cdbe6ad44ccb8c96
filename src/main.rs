//! Interests - browse and filter your interests from the terminal.
//!
//! Runs the interactive screen, or with `--snapshot` prints the derived view
//! model as JSON and exits.

use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde::Serialize;
use tracing::{error, info};

use interests::app::App;
use interests::config::{Config, Settings};
use interests::error::{AppError, Result};
use interests::events::EventHandler;
use interests::logging::{self, LogOptions};
use interests::model::{load_interests, seed_interests, InterestItem};
use interests::store::{DerivedViewModel, InterestStore, ScreenState};

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug, Parser)]
#[command(name = "interests", version, about = "Browse and filter your interests")]
struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// TOML file with [[interests]] entries; overrides the config.
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Delay before the welcome overlay hides itself.
    #[arg(long, value_name = "MS")]
    welcome_delay_ms: Option<u64>,

    /// Skip the welcome overlay.
    #[arg(long)]
    no_welcome: bool,

    /// Print the filtered view as JSON and exit.
    #[arg(long)]
    snapshot: bool,

    /// Search text applied in snapshot mode.
    #[arg(long, requires = "snapshot")]
    query: Option<String>,

    /// Category applied in snapshot mode.
    #[arg(long, requires = "snapshot")]
    category: Option<String>,

    /// Write the effective settings to the config file and exit.
    #[arg(long, conflicts_with = "snapshot")]
    init_config: bool,

    /// Log filter used when RUST_LOG is unset, e.g. "interests=debug".
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Directory for log files.
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

impl Cli {
    fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Ok(Config::default_path()?),
        }
    }

    /// Apply command-line overrides on top of the file settings.
    fn apply(&self, mut settings: Settings) -> Result<Settings> {
        if let Some(path) = &self.data {
            settings.data_file = Some(path.clone());
        }
        if let Some(delay) = self.welcome_delay_ms {
            settings.welcome_delay_ms = delay;
        }
        if self.no_welcome || self.snapshot {
            settings.features.welcome = false;
        }
        settings.validate()?;
        Ok(settings)
    }
}

/// Headless output of `--snapshot`.
#[derive(Debug, Serialize)]
struct Snapshot<'a> {
    state: &'a ScreenState,
    category_chips: &'a [String],
    #[serde(flatten)]
    view: DerivedViewModel<'a>,
}

fn load_items(data_file: Option<&Path>) -> Result<Vec<InterestItem>> {
    match data_file {
        Some(path) => Ok(load_interests(path)?),
        None => Ok(seed_interests()),
    }
}

fn build_store(cli: &Cli, settings: &Settings) -> Result<InterestStore> {
    let mut store = InterestStore::new(load_items(settings.data_file.as_deref())?, false);
    if let Some(chips) = &settings.categories {
        store = store.with_category_chips(chips.clone());
    }
    if let Some(query) = &cli.query {
        store.set_search_query(query.as_str());
    }
    store.set_selected_category(cli.category.as_deref());
    Ok(store)
}

fn print_snapshot(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    let store = build_store(cli, settings)?;
    let snapshot = Snapshot {
        state: store.state(),
        category_chips: store.category_chips(),
        view: store.derive_view_model(),
    };
    let json = serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?;
    println!("{}", json);
    Ok(())
}

fn init_config(path: &Path, settings: Settings) -> Result<()> {
    if path.exists() {
        return Err(AppError::other(format!(
            "Config file already exists at {}",
            path.display()
        )));
    }
    Config { settings }.save_to(path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().map_err(|e| AppError::terminal(e.to_string()))?;
    let mut stdout = io::stdout();
    undo_on_error(
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        ),
        leave_screen,
    )?;
    undo_on_error(Terminal::new(CrosstermBackend::new(stdout)), leave_screen)
}

/// Run `undo` when a setup step failed, so the shell is not left in raw mode.
fn undo_on_error<T>(step: io::Result<T>, undo: impl FnOnce() -> io::Result<()>) -> Result<T> {
    step.map_err(|e| {
        if let Err(undo_err) = undo() {
            error!(error = %undo_err, "Failed to restore terminal");
        }
        AppError::terminal(e.to_string())
    })
}

fn leave_screen() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = leave_screen();
        original_hook(panic_info);
    }));
}

fn run_event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.view(frame))?;
        let event = events.next()?;
        app.update(event);
        app.poll_messages();
    }
    Ok(())
}

async fn run(settings: Settings) -> Result<()> {
    let items = load_items(settings.data_file.as_deref())?;
    info!(count = items.len(), "Loaded interests");

    let mut app = App::new(items, &settings);
    let events = EventHandler::with_tick_rate(settings.tick_rate_ms);

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    app.activate();
    let result = run_event_loop(&mut terminal, &mut app, &events);
    app.teardown();

    restore_terminal(&mut terminal)?;
    result
}

/// Lines printed to stderr for a failed run.
fn failure_report(err: &anyhow::Error, log_dir: Option<&Path>) -> Vec<String> {
    let mut lines = match err.downcast_ref::<AppError>() {
        Some(app_err) => {
            let mut lines = vec![format!("Error: {}", app_err.user_message())];
            lines.extend(app_err.suggested_action().map(str::to_string));
            lines
        }
        None => vec![format!("Error: {:#}", err)],
    };
    if let Some(dir) = log_dir {
        lines.push(format!("Logs: {}", dir.display()));
    }
    lines
}

fn load_settings(cli: &Cli, config_path: &Path) -> Result<Settings> {
    let config = Config::load_from(config_path)?;
    cli.apply(config.settings)
}

async fn try_main(cli: &Cli) -> anyhow::Result<()> {
    let config_path = cli.config_path()?;
    let settings = load_settings(cli, &config_path)
        .with_context(|| format!("Failed to load settings from {}", config_path.display()))?;

    if cli.init_config {
        return init_config(&config_path, settings).context("Failed to write config");
    }

    if cli.snapshot {
        return print_snapshot(cli, &settings);
    }

    let _guard = logging::init(&LogOptions {
        directory: cli.log_dir.clone(),
        filter: cli.log_level.clone(),
    })
    .context("Failed to initialize logging")?;

    let result = run(settings).await;
    if let Err(e) = &result {
        error!(error = %e, "Screen exited with an error");
    }
    logging::shutdown();

    result.context("Interests exited with an error")
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let log_dir = if cli.snapshot || cli.init_config {
                None
            } else {
                cli.log_dir
                    .clone()
                    .or_else(logging::log_directory)
                    .filter(|dir| dir.exists())
            };
            for line in failure_report(&err, log_dir.as_deref()) {
                eprintln!("{}", line);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["interests"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_without_flags() {
        let cli = parse(&[]);
        let settings = cli.apply(Settings::default()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_flags_override_settings() {
        let cli = parse(&["--data", "mine.toml", "--welcome-delay-ms", "500", "--no-welcome"]);
        let settings = cli.apply(Settings::default()).unwrap();
        assert_eq!(settings.data_file, Some(PathBuf::from("mine.toml")));
        assert_eq!(settings.welcome_delay_ms, 500);
        assert!(!settings.features.welcome);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let cli = parse(&["--welcome-delay-ms", "999999"]);
        assert!(matches!(
            cli.apply(Settings::default()),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_query_requires_snapshot() {
        assert!(Cli::try_parse_from(["interests", "--query", "dev"]).is_err());
    }

    #[test]
    fn test_snapshot_store_applies_filters() {
        let cli = parse(&["--snapshot", "--query", "a", "--category", "Development"]);
        let settings = cli.apply(Settings::default()).unwrap();
        let store = build_store(&cli, &settings).unwrap();
        let titles: Vec<&str> = store
            .derive_view_model()
            .filtered_items
            .iter()
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec!["Android Studio Tools", "Architecture", "Performance"]
        );
        assert!(!store.state().show_welcome());
    }

    #[test]
    fn test_snapshot_json_shape() {
        let cli = parse(&["--snapshot"]);
        let settings = cli.apply(Settings::default()).unwrap();
        let store = build_store(&cli, &settings).unwrap();
        let snapshot = Snapshot {
            state: store.state(),
            category_chips: store.category_chips(),
            view: store.derive_view_model(),
        };
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["total_count"], 18);
        assert_eq!(value["completed_count"], 12);
        assert_eq!(value["category_chips"][0], "All");
        assert_eq!(value["state"]["search_query"], "");
    }

    #[test]
    fn test_load_items_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[interests]]\ntitle = \"Chess\"\ncategory = \"Games\"").unwrap();
        let items = load_items(Some(file.path())).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Chess");
    }

    #[test]
    fn test_load_items_missing_file() {
        let err = load_items(Some(Path::new("/nonexistent/interests.toml"))).unwrap_err();
        assert!(matches!(err, AppError::Data(_)));
    }

    #[test]
    fn test_failed_setup_step_restores_terminal() {
        let undone = std::cell::Cell::new(false);
        let result: Result<()> = undo_on_error(
            Err(io::Error::new(io::ErrorKind::Other, "no tty")),
            || {
                undone.set(true);
                Ok(())
            },
        );
        assert!(matches!(result, Err(AppError::Terminal(_))));
        assert!(undone.get());
    }

    #[test]
    fn test_successful_setup_step_keeps_terminal() {
        let undone = std::cell::Cell::new(false);
        let value = undo_on_error(Ok(7), || {
            undone.set(true);
            Ok(())
        })
        .unwrap();
        assert_eq!(value, 7);
        assert!(!undone.get());
    }

    #[test]
    fn test_settings_failure_reported_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[settings]\ntick_rate_ms = 0\n").unwrap();

        let cli = parse(&[]);
        let err = load_settings(&cli, &path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))
            .unwrap_err();
        let lines = failure_report(&err, None);

        assert_eq!(lines.iter().filter(|l| l.starts_with("Error:")).count(), 1);
        assert!(lines[0].contains("tick_rate_ms"));
        assert_eq!(
            lines[1],
            "Fix or remove the config file to fall back to defaults."
        );
    }

    #[test]
    fn test_plain_failure_shows_context_chain() {
        let err = anyhow::anyhow!("disk full").context("Failed to initialize logging");
        let lines = failure_report(&err, Some(Path::new("/tmp/logs")));
        assert_eq!(
            lines,
            vec![
                "Error: Failed to initialize logging: disk full".to_string(),
                "Logs: /tmp/logs".to_string(),
            ]
        );
    }

    #[test]
    fn test_init_config_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        init_config(&path, Settings::default()).unwrap();
        assert!(Config::load_from(&path).is_ok());
        assert!(matches!(
            init_config(&path, Settings::default()),
            Err(AppError::Other(_))
        ));
    }
}
