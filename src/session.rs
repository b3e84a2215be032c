//! Interactive session: prompt, action dispatch and the "press Enter" pause

use crate::game::{Action, Game, Outcome};
use crate::input::{PromptEvent, PromptInput, parse_code};
use crate::mode::{Command, SupplyMode};
use crate::settings::Settings;
use crate::stats::SessionStats;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

/// Where the session is in its input cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for an action code
    AwaitingCode,
    /// Showing an outcome until Enter is pressed
    AwaitingContinue,
}

/// Tone of the status message, used for coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub tone: Tone,
    pub text: String,
}

/// What the app loop should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Continue,
    /// Exit code chosen; return to the menu
    Exit,
    /// Ctrl+C; leave the program
    Quit,
}

pub struct Session {
    game: Game,
    stats: SessionStats,
    input: PromptInput,
    phase: Phase,
    message: Option<Message>,
    last_outcome: Option<Outcome>,
}

impl Session {
    /// Start a session using the configured capacities and seed
    pub fn new(mode: SupplyMode, settings: &Settings) -> Self {
        let supply = &settings.supply;
        let game = match settings.session.seed {
            Some(seed) => Game::with_seed(mode, supply.queue_capacity, supply.reserve_capacity, seed),
            None => Game::new(mode, supply.queue_capacity, supply.reserve_capacity),
        };
        Self::from_game(game)
    }

    pub fn from_game(game: Game) -> Self {
        Self {
            game,
            stats: SessionStats::new(),
            input: PromptInput::new(),
            phase: Phase::AwaitingCode,
            message: None,
            last_outcome: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn input(&self) -> &PromptInput {
        &self.input
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last_outcome.as_ref()
    }

    /// Feed one key press
    pub fn handle_key(&mut self, key: KeyEvent) -> SessionEvent {
        match self.phase {
            Phase::AwaitingContinue => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    return SessionEvent::Quit;
                }
                if key.code == KeyCode::Enter {
                    self.phase = Phase::AwaitingCode;
                    self.message = None;
                }
                SessionEvent::Continue
            }
            Phase::AwaitingCode => match self.input.key_down(key) {
                PromptEvent::Edited => SessionEvent::Continue,
                PromptEvent::Quit => SessionEvent::Quit,
                PromptEvent::Submit(line) => self.submit(&line),
            },
        }
    }

    /// Handle one submitted prompt line
    pub fn submit(&mut self, line: &str) -> SessionEvent {
        let mode = self.game.mode();

        let Some(code) = parse_code(line) else {
            debug!(line, "non-numeric input");
            self.warn("Invalid input. Please enter a number.".to_string());
            return SessionEvent::Continue;
        };

        let Some(command) = Command::from_code(code, mode) else {
            debug!(code, "unknown option");
            self.warn(format!("Invalid option. Please choose {}.", valid_codes(mode)));
            self.phase = Phase::AwaitingContinue;
            return SessionEvent::Continue;
        };

        let action = match command {
            Command::Exit => {
                info!(
                    issued = self.game.pieces_issued(),
                    accepted = self.stats.accepted(),
                    rejected = self.stats.rejected,
                    "session ended"
                );
                return SessionEvent::Exit;
            }
            Command::Play => Action::Play,
            Command::Insert => Action::Insert,
            Command::Reserve => Action::Reserve,
            Command::UseReserved => Action::UseReserved,
        };

        let outcome = self.game.perform(action);
        self.stats.record(&outcome);
        self.message = Some(Message {
            tone: if outcome.is_success() { Tone::Success } else { Tone::Warning },
            text: outcome.to_string(),
        });
        self.last_outcome = Some(outcome);
        self.phase = Phase::AwaitingContinue;
        SessionEvent::Continue
    }

    fn warn(&mut self, text: String) {
        self.message = Some(Message {
            tone: Tone::Warning,
            text,
        });
    }
}

/// "1, 2, 3 or 0" for the mode's menu
fn valid_codes(mode: SupplyMode) -> String {
    let codes: Vec<String> = mode
        .commands()
        .iter()
        .map(|command| command.code().to_string())
        .collect();
    match codes.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} or {}", rest.join(", "), last),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(mode: SupplyMode) -> Session {
        Session::from_game(Game::with_seed(mode, 5, 3, 77))
    }

    fn enter(session: &mut Session) -> SessionEvent {
        session.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
    }

    fn type_line(session: &mut Session, line: &str) -> SessionEvent {
        for c in line.chars() {
            session.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        enter(session)
    }

    #[test]
    fn test_non_numeric_reprompts_without_change() {
        let mut s = session(SupplyMode::WithReserve);
        let before = s.game().snapshot_queue();
        assert_eq!(type_line(&mut s, "abc"), SessionEvent::Continue);
        assert_eq!(s.phase(), Phase::AwaitingCode);
        assert_eq!(s.game().snapshot_queue(), before);
        assert_eq!(
            s.message().map(|m| m.text.as_str()),
            Some("Invalid input. Please enter a number.")
        );
        assert_eq!(s.stats().accepted() + s.stats().rejected, 0);
    }

    #[test]
    fn test_unknown_code_lists_valid_codes() {
        let mut s = session(SupplyMode::WithReserve);
        type_line(&mut s, "7");
        assert_eq!(
            s.message().map(|m| m.text.as_str()),
            Some("Invalid option. Please choose 1, 2, 3 or 0.")
        );
        assert_eq!(s.phase(), Phase::AwaitingContinue);

        let mut s = session(SupplyMode::QueueOnly);
        type_line(&mut s, "3");
        assert_eq!(
            s.message().map(|m| m.text.as_str()),
            Some("Invalid option. Please choose 1, 2 or 0.")
        );
    }

    #[test]
    fn test_action_then_pause() {
        let mut s = session(SupplyMode::WithReserve);
        type_line(&mut s, "1");
        assert_eq!(s.phase(), Phase::AwaitingContinue);
        assert_eq!(s.stats().played, 1);
        assert!(s.last_outcome().unwrap().is_success());

        // Digits are ignored while paused
        type_line(&mut s, "1");
        assert_eq!(s.stats().played, 1);
        assert_eq!(s.phase(), Phase::AwaitingCode);
        assert!(s.message().is_none());
    }

    #[test]
    fn test_reserve_and_use_through_prompt() {
        let mut s = session(SupplyMode::WithReserve);
        type_line(&mut s, "2");
        enter(&mut s);
        assert_eq!(s.game().snapshot_reserve().len(), 1);
        type_line(&mut s, "3");
        enter(&mut s);
        assert!(s.game().snapshot_reserve().is_empty());
        type_line(&mut s, "3");
        assert_eq!(s.message().unwrap().tone, Tone::Warning);
        assert_eq!(s.stats().rejected, 1);
    }

    #[test]
    fn test_exit_code() {
        let mut s = session(SupplyMode::QueueOnly);
        assert_eq!(type_line(&mut s, "0"), SessionEvent::Exit);
    }

    #[test]
    fn test_ctrl_c_while_paused() {
        let mut s = session(SupplyMode::QueueOnly);
        type_line(&mut s, "1");
        let event = s.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(event, SessionEvent::Quit);
    }

    #[test]
    fn test_session_uses_configured_seed() {
        let mut settings = Settings::default();
        settings.session.seed = Some(5);
        settings.supply.queue_capacity = 4;
        let a = Session::new(SupplyMode::QueueOnly, &settings);
        let b = Session::new(SupplyMode::QueueOnly, &settings);
        assert_eq!(a.game().snapshot_queue(), b.game().snapshot_queue());
        assert_eq!(a.game().queue().capacity(), 4);
        assert!(a.game().reserve().is_none());
    }
}
