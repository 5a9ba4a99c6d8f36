//! Terminal management and main run loop

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use rankctl_core::{DispatchEvent, RankConfig};

use super::app::App;
use super::event::{handle_key, poll_event, HandleResult};
use super::ui;

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Run the dashboard
pub async fn run(config: RankConfig) -> Result<()> {
    // Initialize terminal
    let mut terminal = init_terminal()?;

    // Create app state wired to the dispatch event channel
    let (mut app, mut events) = App::new(&config);

    // Main event loop
    let result = run_loop(&mut terminal, &mut app, &mut events);

    // Restore terminal (even if loop failed)
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop
///
/// Background operations run as spawned tasks and report progress
/// through the dispatch channel, so the loop itself only ever drains
/// the receiver and never awaits an operation.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    events: &mut mpsc::UnboundedReceiver<DispatchEvent>,
) -> Result<()> {
    loop {
        // Fold in progress from background operations before drawing
        while let Ok(event) = events.try_recv() {
            app.apply_event(event);
        }

        // Render UI
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll for events (short timeout keeps the UI responsive)
        if let Some(event) = poll_event(app.tick_rate)? {
            match event {
                Event::Key(key) => match handle_key(app, key) {
                    HandleResult::Quit => break,
                    HandleResult::Continue => {}
                    HandleResult::Execute(action) => {
                        if let Some(fut) = app.invoke_action(action) {
                            tokio::spawn(fut);
                        }
                    }
                },
                Event::Resize(_, _) => {
                    // Terminal resized, will be handled on next draw
                }
                _ => {}
            }
        }
    }

    Ok(())
}
