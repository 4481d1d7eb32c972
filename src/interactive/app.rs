//! TUI application state and logic

use crate::commands::{
    ExploreConfig, ExploreContext, ExploreResult, ReportResult, apply_bulk, build_report,
    explore, set_letter, set_total,
};
use crate::core::BulkKind;
use crate::engine::CombinationStatus;
use crate::progress::DEFAULT_RECOMMENDATIONS;
use crate::session::Game;
use crate::store::GameStore;
use anyhow::{Result, anyhow, bail};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 8;
/// Combinations kept from an exploration
const EXPLORE_LIMIT: usize = 40;

/// Application state
pub struct App<S: GameStore> {
    pub game: Game<S>,
    pub report: ReportResult,
    pub exploration: Option<ExploreResult>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typed text is a comma-separated list of found words
    Words,
    /// Typed text is a command such as `explore tr 5`
    Command,
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

impl<S: GameStore> App<S> {
    #[must_use]
    pub fn new(game: Game<S>) -> Self {
        let report = build_report(
            game.alphabet(),
            &game.clues(),
            game.found_words(),
            DEFAULT_RECOMMENDATIONS,
        );
        Self {
            game,
            report,
            exploration: None,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Type found words and press Enter (commas allowed).".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Press ':' for commands, e.g. ':explore tr 5'.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            input_mode: InputMode::Words,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    fn refresh(&mut self) {
        self.report = build_report(
            self.game.alphabet(),
            &self.game.clues(),
            self.game.found_words(),
            DEFAULT_RECOMMENDATIONS,
        );
        if let Some(current) = &self.exploration {
            let config = ExploreConfig {
                limit: Some(EXPLORE_LIMIT),
                ..ExploreConfig::new(current.prefix.clone(), current.length)
            };
            self.exploration = self.run_explore(&config).ok();
        }
    }

    fn run_explore(&self, config: &ExploreConfig) -> Result<ExploreResult> {
        let clues = self.game.clues();
        let ctx = ExploreContext {
            alphabet: self.game.alphabet(),
            clues: &clues,
            found: self.game.found_words(),
            tried: self.game.tried(),
        };
        explore(config, &ctx)
    }

    /// Add the typed words; a leading '-' removes a word instead
    pub fn submit_words(&mut self, input: &str) {
        let input = input.trim();
        if input.is_empty() {
            return;
        }
        if let Some(word) = input.strip_prefix('-') {
            match self.game.remove_word(word) {
                Ok(true) => {
                    self.add_message(&format!("Removed {}", word.trim()), MessageStyle::Success);
                }
                Ok(false) => self.add_message(
                    &format!("{} is not in the list", word.trim()),
                    MessageStyle::Error,
                ),
                Err(e) => self.add_message(&format!("{e:#}"), MessageStyle::Error),
            }
            self.refresh();
            return;
        }

        match self.game.add_words(input) {
            Ok(outcome) => {
                if !outcome.added.is_empty() {
                    self.add_message(
                        &format!("Added {}", outcome.added.join(", ")),
                        MessageStyle::Success,
                    );
                }
                if !outcome.duplicates.is_empty() {
                    self.add_message(
                        &format!("Already found: {}", outcome.duplicates.join(", ")),
                        MessageStyle::Info,
                    );
                }
                for (word, error) in &outcome.rejected {
                    self.add_message(&format!("{word}: {error}"), MessageStyle::Error);
                }
            }
            Err(e) => self.add_message(&format!("{e:#}"), MessageStyle::Error),
        }
        self.refresh();
    }

    /// Run one command line and report the outcome in the message log
    pub fn submit_command(&mut self, line: &str) {
        match self.execute(line) {
            Ok(Some(text)) => self.add_message(&text, MessageStyle::Success),
            Ok(None) => {}
            Err(e) => self.add_message(&format!("{e:#}"), MessageStyle::Error),
        }
        self.refresh();
    }

    fn execute(&mut self, line: &str) -> Result<Option<String>> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = parts.collect();

        match (command, args.as_slice()) {
            ("explore" | "e", [prefix, length]) => {
                let length: usize = length
                    .parse()
                    .map_err(|_| anyhow!("length must be a number"))?;
                let config = ExploreConfig {
                    limit: Some(EXPLORE_LIMIT),
                    ..ExploreConfig::new(*prefix, length)
                };
                let result = self.run_explore(&config)?;
                let text = format!(
                    "{} combinations for {} ({} letters)",
                    result.total, result.prefix, result.length
                );
                self.exploration = Some(result);
                Ok(Some(text))
            }
            ("mark" | "m", [combination, status]) => {
                let status: CombinationStatus = status.parse().map_err(|e: String| anyhow!(e))?;
                self.game.set_status(combination, status)?;
                Ok(Some(format!("{combination} marked {status}")))
            }
            ("total", [total]) => {
                let total: u32 = total.parse().map_err(|_| anyhow!("total must be a number"))?;
                set_total(&mut self.game, total)?;
                Ok(Some(format!("Total words set to {total}")))
            }
            ("letter", [letter, length, count]) => {
                let mut chars = letter.chars();
                let (Some(single), None) = (chars.next(), chars.next()) else {
                    bail!("'{letter}' is not a single letter");
                };
                let length: usize = length.parse()?;
                let count: u32 = count.parse()?;
                set_letter(&mut self.game, single, length, count)?;
                Ok(Some(format!("{single} × {length}: {count}")))
            }
            ("subgroups" | "s", tokens) | ("prefixes" | "p", tokens) if !tokens.is_empty() => {
                let kind = if command.starts_with('s') {
                    BulkKind::Subgroups
                } else {
                    BulkKind::Prefixes
                };
                let outcome = apply_bulk(&mut self.game, &tokens.join(" "), kind)?;
                for error in &outcome.errors {
                    self.add_message(&error.to_string(), MessageStyle::Error);
                }
                Ok(Some(format!("{} clues updated", outcome.applied.len())))
            }
            ("clear-tried", []) => {
                let count = self.game.clear_tried()?;
                Ok(Some(format!("Forgot {count} tried combinations")))
            }
            ("close", []) => {
                self.exploration = None;
                Ok(None)
            }
            ("quit" | "q", []) => {
                self.should_quit = true;
                Ok(None)
            }
            _ => bail!("unknown command: {line}"),
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: GameStore>(app: App<S>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: GameStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => match app.input_mode {
                    InputMode::Command => {
                        app.input_mode = InputMode::Words;
                        app.input_buffer.clear();
                    }
                    InputMode::Words => app.should_quit = true,
                },
                KeyCode::Char(':') if app.input_buffer.is_empty() => {
                    app.input_mode = InputMode::Command;
                }
                KeyCode::Char(c) => app.input_buffer.push(c),
                KeyCode::Backspace => {
                    if app.input_buffer.pop().is_none() {
                        app.input_mode = InputMode::Words;
                    }
                }
                KeyCode::Enter => {
                    let input = std::mem::take(&mut app.input_buffer);
                    match app.input_mode {
                        InputMode::Words => app.submit_words(&input),
                        InputMode::Command => {
                            app.submit_command(&input);
                            app.input_mode = InputMode::Words;
                        }
                    }
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn app() -> App<MemoryStore> {
        App::new(Game::create(MemoryStore::new(), 't', "erasg").unwrap())
    }

    fn last(app: &App<MemoryStore>) -> &Message {
        app.messages.last().unwrap()
    }

    #[test]
    fn words_are_added_and_removed() {
        let mut app = app();
        app.submit_words("tres, terra");
        assert_eq!(app.report.found_count, 2);
        assert_eq!(last(&app).style, MessageStyle::Success);

        app.submit_words("-tres");
        assert_eq!(app.report.found_count, 1);

        app.submit_words("-tres");
        assert_eq!(last(&app).style, MessageStyle::Error);
    }

    #[test]
    fn rejected_words_are_logged() {
        let mut app = app();
        app.submit_words("gra");
        assert_eq!(app.report.found_count, 0);
        assert_eq!(last(&app).style, MessageStyle::Error);
    }

    #[test]
    fn clue_commands_update_the_report() {
        let mut app = app();
        app.submit_command("total 30");
        app.submit_command("letter t 4 2");
        app.submit_command("prefixes tr-3 xx-1");
        app.submit_command("subgroups rest-2");

        let clues = app.game.clues();
        assert_eq!(clues.total_words, 30);
        assert_eq!(clues.expected('t', 4), 2);
        assert_eq!(clues.per_prefix.get("tr"), Some(&3));
        assert_eq!(clues.per_subgroup.get("erst"), Some(&2));
        assert_eq!(app.report.progress.overall_expected, 30);
        assert_eq!(app.report.recommendations[0].letter, 't');
    }

    #[test]
    fn explore_then_mark_refreshes_exploration() {
        let mut app = app();
        app.submit_command("subgroups rest-2");
        app.submit_command("explore tr 4");
        let exploration = app.exploration.as_ref().unwrap();
        assert_eq!(exploration.prefix, "tr");
        assert_eq!(exploration.counts.correct, 0);

        app.submit_command("mark tres correct");
        assert!(app.game.found_words().contains("tres"));
        assert_eq!(app.exploration.as_ref().unwrap().counts.correct, 1);

        app.submit_command("close");
        assert!(app.exploration.is_none());
    }

    #[test]
    fn bad_commands_are_errors() {
        let mut app = app();
        app.submit_command("explode");
        assert_eq!(last(&app).style, MessageStyle::Error);
        app.submit_command("explore tr many");
        assert_eq!(last(&app).style, MessageStyle::Error);
        app.submit_command("explore t 10");
        assert_eq!(last(&app).style, MessageStyle::Error);
        assert!(app.exploration.is_none());
        app.submit_command("mark tres maybe");
        assert_eq!(last(&app).style, MessageStyle::Error);
        assert!(!app.should_quit);

        app.submit_command("quit");
        assert!(app.should_quit);
    }
}
