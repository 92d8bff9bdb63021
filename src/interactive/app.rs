//! TUI application state and logic

use crate::commands::{SolveResult, save_result, solve};
use crate::config::LadderConfig;
use crate::core::{Dictionary, Word};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub config: &'a LadderConfig,
    pub input_mode: InputMode,
    pub start_input: String,
    pub end_input: String,
    pub start: Option<Word>,
    pub current: Option<SolveResult>,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    StartWord,
    EndWord,
    Viewing,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub start: String,
    pub end: String,
    pub steps: Option<usize>,
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
    pub searches: usize,
    pub found: usize,
    pub total_steps: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, config: &'a LadderConfig) -> Self {
        Self {
            dictionary,
            config,
            input_mode: InputMode::StartWord,
            start_input: String::new(),
            end_input: String::new(),
            start: None,
            current: None,
            history: Vec::new(),
            messages: vec![Message {
                text: format!(
                    "Welcome! {} words of {} letters loaded.",
                    dictionary.len(),
                    dictionary.word_length()
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// The buffer the user is typing into, if any
    #[must_use]
    pub fn active_input(&self) -> Option<&str> {
        match self.input_mode {
            InputMode::StartWord => Some(self.start_input.as_str()),
            InputMode::EndWord => Some(self.end_input.as_str()),
            InputMode::Viewing => None,
        }
    }

    pub fn push_char(&mut self, c: char) {
        let limit = self.dictionary.word_length();
        let buffer = match self.input_mode {
            InputMode::StartWord => &mut self.start_input,
            InputMode::EndWord => &mut self.end_input,
            InputMode::Viewing => return,
        };
        if buffer.len() < limit && c.is_ascii_alphabetic() {
            buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn pop_char(&mut self) {
        match self.input_mode {
            InputMode::StartWord => {
                self.start_input.pop();
            }
            InputMode::EndWord => {
                self.end_input.pop();
            }
            InputMode::Viewing => {}
        }
    }

    /// Accept the current input field
    pub fn submit(&mut self) {
        match self.input_mode {
            InputMode::StartWord => match self.dictionary.validate(&self.start_input) {
                Ok(word) => {
                    self.add_message(
                        &format!("Start: {word}. Now enter the ending word."),
                        MessageStyle::Info,
                    );
                    self.start = Some(word);
                    self.input_mode = InputMode::EndWord;
                }
                Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
            },
            InputMode::EndWord => match self.dictionary.validate(&self.end_input) {
                Ok(end) => {
                    if let Some(start) = self.start.clone() {
                        self.run_search(start, end);
                    }
                }
                Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
            },
            InputMode::Viewing => self.new_search(),
        }
    }

    fn run_search(&mut self, start: Word, end: Word) {
        let result = solve(start, end, self.dictionary);

        self.stats.searches += 1;
        let steps = result.ladder().map(crate::ladder::Ladder::steps);
        match &result.outcome {
            Ok(ladder) => {
                self.stats.found += 1;
                self.stats.total_steps += ladder.steps();
                self.add_message(
                    &format!("Found a {}-step ladder!", ladder.steps()),
                    MessageStyle::Success,
                );
            }
            Err(not_found) => self.add_message(&not_found.to_string(), MessageStyle::Error),
        }

        match save_result(&result, self.config) {
            Ok(true) => self.add_message(
                &format!("Saved to {}", self.config.results_path.display()),
                MessageStyle::Info,
            ),
            Ok(false) => {}
            Err(e) => self.add_message(&e, MessageStyle::Error),
        }

        self.history.push(HistoryEntry {
            start: result.start.text().to_string(),
            end: result.end.text().to_string(),
            steps,
        });
        self.current = Some(result);
        self.input_mode = InputMode::Viewing;
    }

    /// Go back one field, or clear the start field
    pub fn cancel(&mut self) {
        match self.input_mode {
            InputMode::StartWord => self.start_input.clear(),
            InputMode::EndWord => {
                self.end_input.clear();
                self.start = None;
                self.input_mode = InputMode::StartWord;
            }
            InputMode::Viewing => self.new_search(),
        }
    }

    pub fn new_search(&mut self) {
        self.start_input.clear();
        self.end_input.clear();
        self.start = None;
        self.input_mode = InputMode::StartWord;
        self.add_message("New search - enter the starting word.", MessageStyle::Info);
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

    #[must_use]
    pub fn average_steps(&self) -> f64 {
        if self.stats.found == 0 {
            0.0
        } else {
            self.stats.total_steps as f64 / self.stats.found as f64
        }
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else if app.input_mode == InputMode::Viewing {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') | KeyCode::Enter => app.new_search(),
                    _ => {}
                }
            } else {
                match key.code {
                    KeyCode::Esc if app.active_input().is_some_and(str::is_empty)
                        && app.input_mode == InputMode::StartWord =>
                    {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => app.cancel(),
                    KeyCode::Char(c) => app.push_char(c),
                    KeyCode::Backspace => app.pop_char(),
                    KeyCode::Enter => app.submit(),
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
