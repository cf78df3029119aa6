use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use health_dashboard::{events, logging, ui, App, Settings, Theme, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "health-dashboard")]
#[command(about = "Terminal dashboard for personal health metrics")]
struct Args {
    /// Settings file (TOML, JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Color theme
    #[arg(short, long, value_enum)]
    theme: Option<ThemeMode>,

    /// Render one frame as plain text to stdout and exit
    #[arg(short, long, conflicts_with = "export")]
    print: bool,

    /// Width used by --print
    #[arg(short, long, default_value = "120")]
    width: u16,

    /// Export the dashboard to a JSON file and exit
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    apply_overrides(&mut settings, &args);

    let interactive = !args.print && args.export.is_none();
    let log_target = logging::init(&settings.log, interactive)?;
    tracing::info!(
        config = ?args.config,
        theme = ?settings.theme,
        log = ?log_target,
        "starting health dashboard"
    );

    // Probing the terminal only makes sense when we are about to draw on it
    let theme = match settings.theme {
        ThemeMode::Auto if !interactive => Theme::dark(),
        mode => Theme::from_mode(mode),
    };
    let tick_rate = settings.tick_rate();
    let app = App::new(settings.dashboard, theme);

    if let Some(export_path) = args.export {
        return export_to_file(&app, &export_path);
    }

    if args.print {
        println!("{}", ui::render_to_text(&app.record, &app.theme, args.width));
        return Ok(());
    }

    run_tui(app, tick_rate)
}

/// Command-line flags win over the file and environment.
fn apply_overrides(settings: &mut Settings, args: &Args) {
    if let Some(theme) = args.theme {
        settings.theme = theme;
    }
    if let Some(path) = &args.log_file {
        settings.log.file = Some(path.clone());
    }
}

/// Export the dashboard to a JSON file
fn export_to_file(app: &App, path: &Path) -> Result<()> {
    app.export_state(path)?;
    println!("Exported dashboard to: {}", path.display());
    Ok(())
}

/// Run the TUI until the user quits
fn run_tui(mut app: App, tick_rate: Duration) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    let result = run_app(&mut terminal, &mut app, tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "dashboard loop failed");
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Some(event) = events::poll_event(tick_rate)? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "terminal resized");
                }
                _ => {}
            }
        }
    }

    Ok(())
}
