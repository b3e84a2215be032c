//! Prompt line editing and action-code parsing
//!
//! The session prompt collects typed characters until Enter, then hands the
//! line over to be parsed as an integer code.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Longest line the prompt keeps; extra characters are ignored
const MAX_LINE: usize = 16;

/// What a key press means to the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    /// Buffer changed or key ignored
    Edited,
    /// Enter pressed; carries the submitted line
    Submit(String),
    /// Ctrl+C
    Quit,
}

/// Line buffer for the action prompt
#[derive(Debug, Clone, Default)]
pub struct PromptInput {
    buffer: String,
}

impl PromptInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents, for rendering
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Feed one key press
    pub fn key_down(&mut self, key: KeyEvent) -> PromptEvent {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return PromptEvent::Quit;
        }

        match key.code {
            KeyCode::Enter => PromptEvent::Submit(std::mem::take(&mut self.buffer)),
            KeyCode::Backspace => {
                self.buffer.pop();
                PromptEvent::Edited
            }
            KeyCode::Esc => {
                self.buffer.clear();
                PromptEvent::Edited
            }
            KeyCode::Char(c) if !c.is_control() && self.buffer.len() < MAX_LINE => {
                self.buffer.push(c);
                PromptEvent::Edited
            }
            _ => PromptEvent::Edited,
        }
    }
}

/// Parse a submitted line as an action code. Surrounding whitespace is
/// allowed; anything else that is not an integer is rejected, including a
/// number followed by junk such as `1x`.
pub fn parse_code(line: &str) -> Option<i64> {
    line.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut PromptInput, code: KeyCode) -> PromptEvent {
        input.key_down(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_type_and_submit() {
        let mut input = PromptInput::new();
        press(&mut input, KeyCode::Char('1'));
        press(&mut input, KeyCode::Char('2'));
        press(&mut input, KeyCode::Backspace);
        assert_eq!(input.text(), "1");
        assert_eq!(
            press(&mut input, KeyCode::Enter),
            PromptEvent::Submit("1".to_string())
        );
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut input = PromptInput::new();
        let event = input.key_down(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(event, PromptEvent::Quit);
    }

    #[test]
    fn test_line_length_capped() {
        let mut input = PromptInput::new();
        for _ in 0..40 {
            press(&mut input, KeyCode::Char('9'));
        }
        assert_eq!(input.text().len(), MAX_LINE);
    }

    #[test]
    fn test_parse_code() {
        assert_eq!(parse_code("2"), Some(2));
        assert_eq!(parse_code("  0 "), Some(0));
        assert_eq!(parse_code("-1"), Some(-1));
        assert_eq!(parse_code("abc"), None);
        assert_eq!(parse_code(""), None);
        assert_eq!(parse_code("1x"), None);
    }
}
