//! Single-line text entry for raw-mode terminals.
//!
//! Raw mode switches off the terminal's own line editing, so name prompts
//! collect characters here until Enter or Esc.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const DEFAULT_MAX_LEN: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    Editing,
    Submitted(String),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct LineEditor {
    buf: String,
    max_len: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::with_max_len(DEFAULT_MAX_LEN)
    }

    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            buf: String::new(),
            max_len,
        }
    }

    /// Text typed so far.
    pub fn text(&self) -> &str {
        &self.buf
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> LineEvent {
        match key.code {
            KeyCode::Enter => LineEvent::Submitted(std::mem::take(&mut self.buf)),
            KeyCode::Esc => {
                self.buf.clear();
                LineEvent::Cancelled
            }
            KeyCode::Backspace => {
                self.buf.pop();
                LineEvent::Editing
            }
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !c.is_control()
                    && self.buf.chars().count() < self.max_len =>
            {
                self.buf.push(c);
                LineEvent::Editing
            }
            _ => LineEvent::Editing,
        }
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(ed: &mut LineEditor, s: &str) {
        for c in s.chars() {
            assert_eq!(ed.handle_key(KeyEvent::from(KeyCode::Char(c))), LineEvent::Editing);
        }
    }

    #[test]
    fn test_type_and_submit() {
        let mut ed = LineEditor::new();
        type_str(&mut ed, "alice");
        assert_eq!(ed.text(), "alice");
        assert_eq!(
            ed.handle_key(KeyEvent::from(KeyCode::Enter)),
            LineEvent::Submitted("alice".to_string())
        );
        assert_eq!(ed.text(), "");
    }

    #[test]
    fn test_backspace() {
        let mut ed = LineEditor::new();
        type_str(&mut ed, "bobx");
        ed.handle_key(KeyEvent::from(KeyCode::Backspace));
        assert_eq!(ed.text(), "bob");
    }

    #[test]
    fn test_escape_cancels() {
        let mut ed = LineEditor::new();
        type_str(&mut ed, "eve");
        assert_eq!(ed.handle_key(KeyEvent::from(KeyCode::Esc)), LineEvent::Cancelled);
        assert_eq!(ed.text(), "");
    }

    #[test]
    fn test_max_len() {
        let mut ed = LineEditor::with_max_len(3);
        type_str(&mut ed, "abcdef");
        assert_eq!(ed.text(), "abc");
    }
}
