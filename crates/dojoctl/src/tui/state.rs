//! TUI state - screen, typed input and the deadlines the presentation owns
//!
//! The engine never waits. Flash and post-error lockout are deadlines kept
//! here and checked by `tick` on every pass of the event loop.

use dojo_common::config::TimingConfig;
use dojo_common::{DojoConfig, Mode, ProblemEngine, Verdict};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Lobby,
    Dojo,
}

/// Background tint shown briefly after an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    Success,
    Error,
}

/// Central TUI state - everything rendered on screen comes from this
#[derive(Debug)]
pub struct DojoTuiState {
    pub engine: ProblemEngine,
    pub screen: Screen,

    /// Current answer buffer
    pub input: String,

    /// "Correct: N" after a miss
    pub feedback: Option<String>,

    pub show_help: bool,
    pub should_quit: bool,

    flash: Option<(Flash, Instant)>,
    locked_until: Option<Instant>,
    error_delay: Duration,
    flash_duration: Duration,
    auto_submit: bool,
}

impl DojoTuiState {
    pub fn new(engine: ProblemEngine, config: &DojoConfig) -> Self {
        Self::with_timing(engine, &config.timing, config.input.auto_submit)
    }

    pub fn with_timing(engine: ProblemEngine, timing: &TimingConfig, auto_submit: bool) -> Self {
        Self {
            engine,
            screen: Screen::Lobby,
            input: String::new(),
            feedback: None,
            show_help: false,
            should_quit: false,
            flash: None,
            locked_until: None,
            error_delay: timing.effective_error_delay(),
            flash_duration: timing.effective_flash(),
            auto_submit,
        }
    }

    /// Leave the lobby and start a fresh drill
    pub fn start_drill(&mut self, mode: Mode) {
        self.engine.set_mode(mode);
        self.screen = Screen::Dojo;
        self.input.clear();
        self.feedback = None;
        self.flash = None;
        self.locked_until = None;
    }

    pub fn back_to_lobby(&mut self) {
        self.screen = Screen::Lobby;
        self.show_help = false;
        self.input.clear();
        self.feedback = None;
        self.locked_until = None;
    }

    /// Input is ignored while the correct answer is on display
    pub fn is_locked(&self, now: Instant) -> bool {
        self.locked_until.is_some_and(|until| now < until)
    }

    pub fn flash_at(&self, now: Instant) -> Option<Flash> {
        match self.flash {
            Some((kind, until)) if now < until => Some(kind),
            _ => None,
        }
    }

    /// Type one character. Returns the verdict when auto-submit fires.
    pub fn push_char(&mut self, c: char, now: Instant) -> Option<Verdict> {
        if self.is_locked(now) || !(c.is_ascii_digit() || c == '-') {
            return None;
        }
        self.input.push(c);

        let target = self.engine.problem().map_or(1, |p| p.answer_len());
        if self.auto_submit && self.input.trim().len() >= target {
            return self.submit(now);
        }
        None
    }

    pub fn backspace(&mut self, now: Instant) {
        if !self.is_locked(now) {
            self.input.pop();
        }
    }

    /// Score the current input
    pub fn submit(&mut self, now: Instant) -> Option<Verdict> {
        if self.is_locked(now) || self.input.trim().is_empty() {
            return None;
        }

        let verdict = self.engine.check_answer(&self.input);
        if verdict.correct {
            self.flash = Some((Flash::Success, now + self.flash_duration));
            self.next_problem();
        } else {
            self.flash = Some((Flash::Error, now + self.flash_duration));
            self.feedback = Some(format!("Correct: {}", verdict.expected));
            self.locked_until = Some(now + self.error_delay);
            debug!("Input locked for {:?}", self.error_delay);
        }
        Some(verdict)
    }

    /// Fire expired deadlines
    pub fn tick(&mut self, now: Instant) {
        if let Some(until) = self.locked_until {
            if now >= until {
                self.locked_until = None;
                self.next_problem();
            }
        }
        if self.flash.is_some() && self.flash_at(now).is_none() {
            self.flash = None;
        }
    }

    fn next_problem(&mut self) {
        self.engine.generate_new_problem();
        self.input.clear();
        self.feedback = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(auto_submit: bool) -> DojoTuiState {
        DojoTuiState::with_timing(
            ProblemEngine::with_seed(42),
            &TimingConfig::default(),
            auto_submit,
        )
    }

    fn type_str(state: &mut DojoTuiState, text: &str, now: Instant) -> Option<Verdict> {
        let mut verdict = None;
        for c in text.chars() {
            verdict = state.push_char(c, now).or(verdict);
        }
        verdict
    }

    #[test]
    fn test_start_drill_enters_dojo() {
        let mut s = state(true);
        assert_eq!(s.screen, Screen::Lobby);
        s.start_drill(Mode::Subtraction);
        assert_eq!(s.screen, Screen::Dojo);
        assert_eq!(s.engine.mode(), Mode::Subtraction);
        assert!(s.engine.problem().is_some());
    }

    #[test]
    fn test_auto_submit_on_answer_length() {
        let mut s = state(true);
        let now = Instant::now();
        s.start_drill(Mode::Addition);
        let before = s.engine.problem().unwrap().clone();
        let answer = before.expected_answer.to_string();

        let (head, last) = answer.split_at(answer.len() - 1);
        assert!(type_str(&mut s, head, now).is_none());
        let verdict = type_str(&mut s, last, now).expect("auto submit");

        assert!(verdict.correct);
        assert_eq!(s.engine.streak(), 1);
        assert!(s.input.is_empty());
        assert_eq!(s.engine.history().len(), 1);
        assert_eq!(s.flash_at(now), Some(Flash::Success));
    }

    #[test]
    fn test_manual_submit_when_auto_disabled() {
        let mut s = state(false);
        let now = Instant::now();
        s.start_drill(Mode::Addition);
        let answer = s.engine.expected_answer().to_string();
        assert!(type_str(&mut s, &answer, now).is_none());
        assert_eq!(s.input, answer);
        assert!(s.submit(now).unwrap().correct);
    }

    #[test]
    fn test_wrong_answer_locks_then_advances() {
        let mut s = state(false);
        let now = Instant::now();
        s.start_drill(Mode::Subtraction);
        let problem = s.engine.problem().unwrap().clone();
        let wrong = (problem.expected_answer + 1).to_string();

        type_str(&mut s, &wrong, now);
        let verdict = s.submit(now).unwrap();
        assert!(!verdict.correct);
        assert_eq!(s.feedback, Some(format!("Correct: {}", problem.expected_answer)));
        assert_eq!(s.flash_at(now), Some(Flash::Error));
        assert!(s.is_locked(now));

        // typing is ignored during lockout
        assert!(s.push_char('5', now).is_none());
        assert_eq!(s.input, wrong);

        s.tick(now + Duration::from_millis(500));
        assert_eq!(s.flash_at(now + Duration::from_millis(500)), None);
        assert!(s.is_locked(now + Duration::from_millis(500)));
        assert_eq!(s.engine.problem().unwrap().started_at, problem.started_at);

        let later = now + Duration::from_millis(1500);
        s.tick(later);
        assert!(!s.is_locked(later));
        assert!(s.input.is_empty());
        assert!(s.feedback.is_none());
    }

    #[test]
    fn test_non_digits_ignored() {
        let mut s = state(true);
        let now = Instant::now();
        s.start_drill(Mode::Addition);
        assert!(s.push_char('x', now).is_none());
        assert!(s.push_char(' ', now).is_none());
        assert!(s.input.is_empty());
        assert!(s.submit(now).is_none());
    }

    #[test]
    fn test_back_to_lobby_clears_input() {
        let mut s = state(false);
        let now = Instant::now();
        s.start_drill(Mode::Addition);
        s.push_char('1', now);
        s.back_to_lobby();
        assert_eq!(s.screen, Screen::Lobby);
        assert!(s.input.is_empty());
    }
}
