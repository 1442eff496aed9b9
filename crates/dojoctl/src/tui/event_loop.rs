//! Event Loop - Main TUI entry point and event handling

use super::input::handle_key;
use super::render::draw_ui;
use super::state::DojoTuiState;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dojo_common::{DojoConfig, Mode, ProblemEngine, SessionStats};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

/// Poll interval; bounds how late a flash or lockout deadline can fire
const TICK: Duration = Duration::from_millis(50);

/// Run the TUI until the user quits. Returns the session statistics.
pub fn run(engine: ProblemEngine, config: &DojoConfig, start_mode: Option<Mode>) -> Result<SessionStats> {
    enable_raw_mode().map_err(|e| {
        anyhow::anyhow!("Failed to enable raw mode: {}. Ensure you're running in a real terminal (TTY).", e)
    })?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        let _ = disable_raw_mode();
        anyhow::anyhow!("Failed to initialize terminal: {}", e)
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = DojoTuiState::new(engine, config);
    if let Some(mode) = start_mode {
        state.start_drill(mode);
    }

    let result = run_event_loop(&mut terminal, &mut state);

    // Restore terminal (always attempt cleanup)
    let cleanup_result = restore_terminal(&mut terminal);

    let stats = SessionStats::from_history(state.engine.history());
    info!(
        answered = stats.answered,
        correct = stats.correct,
        best_streak = stats.best_streak,
        "Session finished"
    );

    result.and(cleanup_result).map(|_| stats)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut DojoTuiState,
) -> Result<()> {
    while !state.should_quit {
        let now = Instant::now();
        state.tick(now);

        terminal.draw(|f| draw_ui(f, state, now))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                handle_key(state, key, Instant::now());
            }
        }
    }

    Ok(())
}
