//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{GameConfig, MissLog, Session, SessionState};
use crate::output::formatters::attempts_label;
use crate::output::is_help_request;
use crate::wordlists::WordLists;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub lists: &'a WordLists,
    pub config: &'a GameConfig,
    pub session: Session<'a>,
    pub miss_log: Option<MissLog>,
    pub rng: StdRng,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub show_help: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of attempts, index 0 unused
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, state: SessionState, attempts: usize) {
        self.total_games += 1;
        if state == SessionState::Won {
            self.games_won += 1;
            if self.guess_distribution.len() <= attempts {
                self.guess_distribution.resize(attempts + 1, 0);
            }
            self.guess_distribution[attempts] += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    /// # Errors
    ///
    /// Returns an error if the miss-letter log cannot be created.
    pub fn new(lists: &'a WordLists, config: &'a GameConfig) -> Result<Self> {
        let mut rng = config.rng();
        let session = Session::start(lists, &mut rng, config.max_attempts);
        let miss_log = config
            .open_miss_log()
            .context("failed to create the miss-letter log")?;

        let mut app = Self {
            lists,
            config,
            session,
            miss_log,
            rng,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            show_help: false,
            should_quit: false,
        };
        app.add_message(
            &format!(
                "Guess the word of the day in {} attempts. Press ? for help.",
                config.max_attempts
            ),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Type a letter into the current row
    pub fn push_letter(&mut self, c: char) {
        if !self.session.is_over() && self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic()
        {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn pop_letter(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the typed word to the session
    ///
    /// # Errors
    ///
    /// Returns an error only if the miss-letter log cannot be written.
    pub fn submit_guess(&mut self) -> Result<()> {
        let input = std::mem::take(&mut self.input_buffer);

        if is_help_request(&input) {
            self.show_help = true;
            return Ok(());
        }

        let turn = match self.session.submit(&input) {
            Ok(turn) => turn,
            Err(err) => {
                self.add_message(
                    &format!("Not a valid 5-letter word: {err}"),
                    MessageStyle::Error,
                );
                return Ok(());
            }
        };

        if let Some(log) = &self.miss_log {
            log.mirror(&turn.missed, self.session.misses())
                .with_context(|| format!("failed to update {}", log.path().display()))?;
        }

        match turn.state {
            SessionState::Won => {
                self.stats.record(turn.state, turn.attempt);
                let text = format!(
                    "You won in {}! The word of the day was {}. Press n for a new game.",
                    attempts_label(turn.attempt),
                    self.session.target().text().to_uppercase()
                );
                self.add_message(&text, MessageStyle::Success);
            }
            SessionState::Lost => {
                self.stats.record(turn.state, turn.attempt);
                let text = format!(
                    "Out of attempts. The word of the day was {}. Press n for a new game.",
                    self.session.target().text().to_uppercase()
                );
                self.add_message(&text, MessageStyle::Error);
            }
            SessionState::AwaitingGuess => {
                let text = format!(
                    "Not quite right. {} attempts left.",
                    self.session.attempts_left()
                );
                self.add_message(&text, MessageStyle::Info);
            }
        }
        Ok(())
    }

    /// Start a new session with a fresh target
    ///
    /// A session still in progress is abandoned and counted as a loss.
    ///
    /// # Errors
    ///
    /// Returns an error if the miss-letter log cannot be recreated.
    pub fn new_game(&mut self) -> Result<()> {
        if !self.session.is_over() {
            // Abandoning a session in progress counts as a loss
            self.stats
                .record(SessionState::Lost, self.session.attempts());
        }
        self.session = Session::start(self.lists, &mut self.rng, self.config.max_attempts);
        self.miss_log = self
            .config
            .open_miss_log()
            .context("failed to recreate the miss-letter log")?;
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        Ok(())
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Returns an error if the miss-letter log cannot be updated.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if modifiers.contains(KeyModifiers::CONTROL) => self.new_game()?,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.toggle_help(),
            KeyCode::Char('n') if self.session.is_over() => self.new_game()?,
            KeyCode::Char('q') if self.session.is_over() => self.should_quit = true,
            KeyCode::Char(c) => self.push_letter(c),
            KeyCode::Backspace => self.pop_letter(),
            KeyCode::Enter if !self.session.is_over() => self.submit_guess()?,
            _ => {}
        }
        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers)?;
        }

        if app.should_quit {
            break;
        }
    }

    log::info!(
        "leaving TUI after {} games, {} won",
        app.stats.total_games,
        app.stats.games_won
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn lists() -> WordLists {
        WordLists::new(
            words_from_slice(&["hello", "weird", "crane", "slate"]),
            words_from_slice(&["weird"]),
        )
        .unwrap()
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE).unwrap();
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    }

    #[test]
    fn typing_is_limited_to_five_letters() {
        let lists = lists();
        let config = GameConfig::new();
        let mut app = App::new(&lists, &config).unwrap();

        for c in "cr4nesx".chars() {
            app.push_letter(c);
        }
        assert_eq!(app.input_buffer, "crnes");

        app.pop_letter();
        assert_eq!(app.input_buffer, "crne");
    }

    #[test]
    fn invalid_word_reports_error_without_attempt() {
        let lists = lists();
        let config = GameConfig::new();
        let mut app = App::new(&lists, &config).unwrap();

        type_word(&mut app, "zzzzz");

        assert_eq!(app.session.attempts(), 0);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));
    }

    #[test]
    fn winning_updates_stats_and_allows_new_game() {
        let lists = lists();
        let config = GameConfig::new();
        let mut app = App::new(&lists, &config).unwrap();

        type_word(&mut app, "crane");
        type_word(&mut app, "weird");

        assert_eq!(app.session.state(), SessionState::Won);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE).unwrap();
        assert_eq!(app.session.attempts(), 0);
        assert!(!app.session.is_over());
    }

    #[test]
    fn letters_n_and_q_are_typed_during_a_session() {
        let lists = lists();
        let config = GameConfig::new();
        let mut app = App::new(&lists, &config).unwrap();

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE).unwrap();
        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE).unwrap();

        assert_eq!(app.input_buffer, "nq");
        assert!(!app.should_quit);
    }

    #[test]
    fn ctrl_c_and_help_toggle() {
        let lists = lists();
        let config = GameConfig::new();
        let mut app = App::new(&lists, &config).unwrap();

        app.handle_key(KeyCode::Char('?'), KeyModifiers::NONE).unwrap();
        assert!(app.show_help);

        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn h_then_enter_opens_help_without_a_guess() {
        let lists = lists();
        let config = GameConfig::new();
        let mut app = App::new(&lists, &config).unwrap();
        let messages_before = app.messages.len();

        type_word(&mut app, "h");

        assert!(app.show_help);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.attempts(), 0);
        assert_eq!(app.messages.len(), messages_before);
        assert!(app.messages.iter().all(|m| m.style != MessageStyle::Error));
    }

    #[test]
    fn win_message_names_the_attempts() {
        let lists = lists();
        let config = GameConfig::new();
        let mut app = App::new(&lists, &config).unwrap();

        type_word(&mut app, "weird");

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Success);
        assert!(last.text.starts_with("You won in 1 attempt!"));
    }

    #[test]
    fn ctrl_n_abandons_a_session_in_progress() {
        let lists = lists();
        let config = GameConfig::new();
        let mut app = App::new(&lists, &config).unwrap();

        type_word(&mut app, "crane");
        assert_eq!(app.session.attempts(), 1);

        app.handle_key(KeyCode::Char('n'), KeyModifiers::CONTROL).unwrap();

        assert_eq!(app.session.attempts(), 0);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn statistics_win_rate() {
        let mut stats = Statistics::default();
        assert!(stats.win_rate().abs() < f64::EPSILON);

        stats.record(SessionState::Won, 3);
        stats.record(SessionState::Lost, 6);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }
}
