//! Gitale - a commit history storyteller for the terminal
//!
//! Binary entry point for the TUI application.

use std::io::stdout;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;

use gitale::app::App;
use gitale::cli::Cli;
use gitale::loc;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // Load and aggregate before touching the terminal, so a bad log
    // prints as a plain error report
    let report = loc::load_path(&cli.loc_file)
        .wrap_err_with(|| format!("Failed to load {}", cli.loc_file.display()))?;
    let commits = loc::aggregate_commits(report.records);
    let app = App::new(commits, report.skipped, cli.repo_url);

    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;
    let _guard = scopeguard::guard((), |_| {
        let _ = execute!(stdout(), DisableMouseCapture);
    });
    let result = run(terminal, app);
    ratatui::restore();
    result
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with 200ms timeout so expired notifications clear even
/// while no input arrives.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            Event::Mouse(mouse) => {
                app.on_mouse_event(mouse);
            }
            _ => {}
        }
    } else {
        app.on_tick();
    }
    Ok(())
}
