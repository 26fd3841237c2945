// shapecalc: area and perimeter calculator with an animated terminal UI

use std::io;

use clap::Parser;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use shapecalc::config::{render_calc, Cli, Config, Mode};
use shapecalc::error::AppError;
use shapecalc::logging;
use shapecalc::ui::app::run_restoring;
use shapecalc::ui::App;

fn main() {
    let cli = Cli::parse();
    let log_file = cli.log_file.clone();

    let result = cli.into_mode().and_then(|mode| match mode {
        Mode::Calculate { kind, dimensions } => {
            logging::init_stderr_or_file(log_file.as_deref())?;
            info!(%kind, "calculated from command line");
            print!("{}", render_calc(kind, &dimensions));
            Ok(())
        }
        Mode::Interactive(config) => {
            logging::init_file(config.log_file.as_deref())?;
            run_tui(&config)
        }
    });

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_tui(config: &Config) -> Result<(), AppError> {
    enable_raw_mode()?;
    run_restoring(
        || -> Result<(), AppError> {
            // Set up terminal
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            let backend = CrosstermBackend::new(stdout);
            let mut terminal = Terminal::new(backend)?;

            // Create and run app
            let mut app = App::new(config);
            app.run(&mut terminal)?;
            Ok(())
        },
        // Restore terminal, also when setup failed part way
        || {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen, Show)
        },
    )
}
