//! Rendering - lobby, drill screen, header, status bar and help overlay

use super::layout::{centered_rect, compute_layout};
use super::state::{DojoTuiState, Flash, Screen};
use dojo_common::Phase;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

const VERSION: &str = env!("DOJO_VERSION");

/// Palette
const BG: Color = Color::Rgb(0x12, 0x12, 0x12);
const BG_SUCCESS: Color = Color::Rgb(0x05, 0x20, 0x05);
const BG_ERROR: Color = Color::Rgb(0x20, 0x05, 0x05);
const TEXT_MAIN: Color = Color::Rgb(0xE0, 0xE0, 0xE0);
const TEXT_DIM: Color = Color::Rgb(0x75, 0x75, 0x75);
const ACCENT: Color = Color::Rgb(0xBB, 0x86, 0xFC);
const INPUT_BG: Color = Color::Rgb(0x1E, 0x1E, 0x1E);
const SUCCESS_TEXT: Color = Color::Rgb(0x69, 0xF0, 0xAE);
const ERROR_TEXT: Color = Color::Rgb(0xFF, 0x52, 0x52);

/// Background for the current flash, if any
pub fn background(flash: Option<Flash>) -> Color {
    match flash {
        Some(Flash::Success) => BG_SUCCESS,
        Some(Flash::Error) => BG_ERROR,
        None => BG,
    }
}

pub fn draw_ui(f: &mut Frame, state: &DojoTuiState, now: Instant) {
    let size = f.size();
    let bg = background(state.flash_at(now));
    f.render_widget(Block::default().style(Style::default().bg(bg)), size);

    match state.screen {
        Screen::Lobby => draw_lobby(f, size),
        Screen::Dojo => draw_dojo(f, size, state, now),
    }

    if state.show_help {
        draw_help_overlay(f, size);
    }
}

fn draw_lobby(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "MENTAL DOJO",
            Style::default().fg(TEXT_MAIN).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("PRESS [A] FOR ADDITION", Style::default().fg(TEXT_DIM))),
        Line::from(Span::styled("PRESS [S] FOR SUBTRACTION", Style::default().fg(TEXT_DIM))),
        Line::from(Span::styled("PRESS [ESC] TO QUIT", Style::default().fg(TEXT_DIM))),
    ];
    let rect = centered_rect(area.width, lines.len() as u16, area);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}

fn draw_dojo(f: &mut Frame, area: Rect, state: &DojoTuiState, now: Instant) {
    let layout = compute_layout(area);
    let engine = &state.engine;

    draw_header(f, layout.header, state);

    let progress = Paragraph::new(engine.progress_text())
        .style(Style::default().fg(TEXT_DIM))
        .alignment(Alignment::Center);
    f.render_widget(progress, layout.progress);

    let equation = engine
        .problem()
        .map(|p| p.equation())
        .unwrap_or_else(|| "...".to_string());
    let equation_style = Style::default().fg(TEXT_MAIN).add_modifier(Modifier::BOLD);
    let equation_widget =
        Paragraph::new(Span::styled(equation, equation_style)).alignment(Alignment::Center);
    // Middle row of the equation band when there is room for padding
    let equation_row = if layout.equation.height >= 3 {
        Rect::new(layout.equation.x, layout.equation.y + 1, layout.equation.width, 1)
    } else {
        layout.equation
    };
    f.render_widget(equation_widget, equation_row);

    let locked = state.is_locked(now);
    let border = if locked { TEXT_DIM } else { ACCENT };
    let input = Paragraph::new(Span::styled(
        state.input.as_str(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(INPUT_BG)),
    );
    f.render_widget(input, layout.input);

    if let Some(feedback) = &state.feedback {
        let widget = Paragraph::new(Span::styled(
            feedback.as_str(),
            Style::default().fg(ERROR_TEXT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        f.render_widget(widget, layout.feedback);
    } else if state.flash_at(now) == Some(Flash::Success) {
        let widget = Paragraph::new(Span::styled("✓", Style::default().fg(SUCCESS_TEXT)))
            .alignment(Alignment::Center);
        f.render_widget(widget, layout.feedback);
    }

    draw_status_bar(f, layout.status_bar, state);
}

/// Format: Mental Dojo v0.1.0 | ADDITION | 15:42:08
pub fn compose_header_text(version: &str, mode_label: &str, time: &str) -> String {
    format!("Mental Dojo v{} | {} | {}", version, mode_label, time)
}

fn draw_header(f: &mut Frame, area: Rect, state: &DojoTuiState) {
    let time = chrono::Local::now().format("%H:%M:%S").to_string();
    let text = compose_header_text(VERSION, state.engine.mode().label(), &time);
    let header = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(text, Style::default().fg(ACCENT)),
    ]))
    .style(Style::default().bg(Color::Rgb(0, 0, 0)));
    f.render_widget(header, area);
}

/// Format: Streak: 12 | Phase 1 | Esc: lobby | F1: help
pub fn compose_status_text(streak: u32, phase: Phase) -> String {
    format!(
        "Streak: {} | Phase {} | Esc: lobby | F1: help",
        streak,
        phase.number()
    )
}

fn draw_status_bar(f: &mut Frame, area: Rect, state: &DojoTuiState) {
    let text = compose_status_text(state.engine.streak(), state.engine.phase());
    let bar = Paragraph::new(Span::styled(format!(" {}", text), Style::default().fg(TEXT_DIM)))
        .style(Style::default().bg(Color::Rgb(0, 0, 0)));
    f.render_widget(bar, area);
}

fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(" 0-9, -      type answer"),
        Line::from(" Enter       submit now"),
        Line::from(" Backspace   delete digit"),
        Line::from(" Esc         back to lobby"),
        Line::from(" F1          toggle help"),
        Line::from(" Ctrl+C      quit"),
    ];
    let rect = centered_rect(36, lines.len() as u16 + 2, area);
    f.render_widget(Clear, rect);
    let help = Paragraph::new(lines).style(Style::default().fg(TEXT_MAIN).bg(INPUT_BG)).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT)),
    );
    f.render_widget(help, rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use dojo_common::config::TimingConfig;
    use dojo_common::{Mode, ProblemEngine};
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_status_text() {
        assert_eq!(
            compose_status_text(4, Phase::Endless),
            "Streak: 4 | Phase 2 | Esc: lobby | F1: help"
        );
    }

    #[test]
    fn test_flash_background() {
        assert_eq!(background(None), BG);
        assert_eq!(background(Some(Flash::Success)), BG_SUCCESS);
        assert_eq!(background(Some(Flash::Error)), BG_ERROR);
    }

    #[test]
    fn test_lobby_renders_instructions() {
        let state = DojoTuiState::with_timing(ProblemEngine::with_seed(1), &TimingConfig::default(), true);
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| draw_ui(f, &state, Instant::now())).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("MENTAL DOJO"));
        assert!(text.contains("PRESS [A] FOR ADDITION"));
    }

    #[test]
    fn test_dojo_renders_problem_and_progress() {
        let mut state = DojoTuiState::with_timing(ProblemEngine::with_seed(1), &TimingConfig::default(), true);
        state.start_drill(Mode::Subtraction);
        let equation = state.engine.problem().unwrap().equation();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw_ui(f, &state, Instant::now())).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains(&equation));
        assert!(text.contains("L1: 2D SUBTRACTION | 0/30"));
        assert!(text.contains("Streak: 0 | Phase 1"));
        assert!(text.contains("SUBTRACTION"));
    }
}
