// dsviz: step-by-step data structure animations in the terminal

use std::fs::File;
use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use dsviz::error::DsvizError;
use dsviz::settings::{Cli, Settings};
use dsviz::ui::App;

/// The TUI owns stdout, so log records only go somewhere when a file is given.
fn init_logging(path: Option<&Path>) -> Result<(), DsvizError> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).map_err(|source| DsvizError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Own the terminal for the lifetime of the app, restoring it afterwards
fn run_tui(settings: &Settings) -> Result<(), DsvizError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(DsvizError::from)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(settings.log_file.as_deref())?;
    log::info!(
        "starting on {:?}, interval {:?}",
        settings.structure,
        settings.interval()
    );

    if let Err(err) = run_tui(&settings) {
        log::error!("{}", err);
        eprintln!("Error: {}", err);
    }

    Ok(())
}
