use std::io;

/// How a status message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// One-line outcome reported by a menu flow and shown under the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

/// Rendering capabilities shared by the plain and full-screen front ends.
///
/// Menu flows and pagination are written once against this trait. Every
/// method may fail with an I/O error, which ends the session: the terminal
/// is gone, input reached its end, or the user interrupted.
pub trait Screen {
    /// Clears the display area.
    fn clear_screen(&mut self) -> io::Result<()>;

    /// Appends one line of text below what is already shown.
    fn add_text(&mut self, text: &str) -> io::Result<()>;

    /// Appends a status line. Full-screen mode colors it by kind.
    fn add_status(&mut self, message: &StatusMessage) -> io::Result<()> {
        self.add_text(&message.text)
    }

    /// Clears the screen, shows `prompt` and blocks for a line of input.
    ///
    /// The line is returned verbatim apart from the line terminator.
    fn prompt_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Blocks until one key (or line, in plain mode) is available.
    fn read_key(&mut self) -> io::Result<String>;
}
