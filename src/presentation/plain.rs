//! Line-oriented front end for terminals without full-screen support.

use super::screen::Screen;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};

/// Plain text screen over any line reader and writer.
///
/// Every `read_key` consumes a whole line. Clearing is done with terminal
/// escape sequences and can be switched off when output is not a terminal.
pub struct PlainScreen<R, W> {
    reader: R,
    writer: W,
    clear_enabled: bool,
}

impl<R: BufRead, W: Write> PlainScreen<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            clear_enabled: true,
        }
    }

    /// Disables screen clearing, e.g. when output is redirected.
    pub fn without_clearing(mut self) -> Self {
        self.clear_enabled = false;
        self
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Screen for PlainScreen<R, W> {
    fn clear_screen(&mut self) -> io::Result<()> {
        if self.clear_enabled {
            execute!(self.writer, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn add_text(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)
    }

    fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        self.clear_screen()?;
        writeln!(self.writer, "{}", prompt)?;
        self.read_line()
    }

    fn read_key(&mut self) -> io::Result<String> {
        self.read_line()
    }
}
