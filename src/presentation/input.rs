use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;
use std::io;

/// Source of key presses for the full-screen front end.
pub trait KeySource {
    /// Blocks until the next key press.
    fn next_key(&mut self) -> io::Result<KeyEvent>;
}

/// Reads key presses from the real terminal.
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }
}

/// A queue of pre-recorded key presses. Running dry is end of input.
impl KeySource for VecDeque<KeyEvent> {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        self.pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more keys"))
    }
}

/// Raw mode swallows SIGINT, so Ctrl+C arrives as a key.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c'))
}

pub fn interrupted() -> io::Error {
    io::Error::new(io::ErrorKind::Interrupted, "interrupted by user")
}

/// Result of feeding one key to a [`LineEditor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Continue,
    Submit,
}

/// Single-line text input with a cursor.
///
/// The cursor counts characters, not bytes, so multi-byte text edits
/// correctly.
#[derive(Debug, Default)]
pub struct LineEditor {
    chars: Vec<char>,
    cursor: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Applies a key; `Enter` submits the line.
    pub fn handle_key(&mut self, key: KeyCode) -> EditOutcome {
        match key {
            KeyCode::Enter => return EditOutcome::Submit,
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.chars.remove(self.cursor - 1);
                    self.cursor -= 1;
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.chars.len() {
                    self.chars.remove(self.cursor);
                }
            }
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Right => {
                if self.cursor < self.chars.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Home => {
                self.cursor = 0;
            }
            KeyCode::End => {
                self.cursor = self.chars.len();
            }
            KeyCode::Char(c) => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        EditOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(editor: &mut LineEditor, text: &str) {
        for c in text.chars() {
            editor.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_and_submit() {
        let mut editor = LineEditor::new();
        type_text(&mut editor, "Dune");

        assert_eq!(editor.handle_key(KeyCode::Enter), EditOutcome::Submit);
        assert_eq!(editor.text(), "Dune");
        assert_eq!(editor.cursor(), 4);
    }

    #[test]
    fn test_editing_multibyte_text() {
        let mut editor = LineEditor::new();
        type_text(&mut editor, "мирр");
        editor.handle_key(KeyCode::Backspace);
        editor.handle_key(KeyCode::Home);
        type_text(&mut editor, "Война и ");

        assert_eq!(editor.text(), "Война и мир");
    }

    #[test]
    fn test_cursor_movement_and_delete() {
        let mut editor = LineEditor::new();
        type_text(&mut editor, "abcd");
        editor.handle_key(KeyCode::Left);
        editor.handle_key(KeyCode::Left);
        editor.handle_key(KeyCode::Delete);
        assert_eq!(editor.text(), "abd");

        editor.handle_key(KeyCode::End);
        editor.handle_key(KeyCode::Right);
        assert_eq!(editor.cursor(), 3);

        editor.handle_key(KeyCode::Home);
        editor.handle_key(KeyCode::Backspace);
        assert_eq!(editor.text(), "abd");
    }

    #[test]
    fn test_interrupt_detection() {
        assert!(is_interrupt(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_interrupt(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_scripted_keys_run_dry() {
        let mut keys: VecDeque<KeyEvent> = VecDeque::from([KeyEvent::from(KeyCode::Char('1'))]);

        assert_eq!(keys.next_key().unwrap().code, KeyCode::Char('1'));
        assert_eq!(keys.next_key().unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }
}
