//! Full-screen front end rendered with ratatui.

use super::input::{interrupted, is_interrupt, EditOutcome, KeySource, LineEditor};
use super::screen::{Screen, StatusMessage};
use crossterm::event::KeyCode;
use ratatui::{
    backend::Backend,
    layout::Position,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::thread;
use std::time::Duration;

/// Smallest terminal height that fits the longest screen: the paged listing
/// is 11 lines, plus the top and bottom border.
pub const MIN_HEIGHT: u16 = 13;

/// Screen kept as a list of lines and redrawn whenever input is awaited.
pub struct TuiScreen<B: Backend, K> {
    terminal: Terminal<B>,
    keys: K,
    lines: Vec<Line<'static>>,
    editor: Option<LineEditor>,
}

impl<B: Backend, K: KeySource> TuiScreen<B, K> {
    pub fn new(terminal: Terminal<B>, keys: K) -> Self {
        Self {
            terminal,
            keys,
            lines: Vec::new(),
            editor: None,
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn into_terminal(self) -> Terminal<B> {
        self.terminal
    }

    fn draw(&mut self) -> io::Result<()> {
        let lines = &self.lines;
        let editor = self.editor.as_ref();
        self.terminal.draw(|f| render_screen(f, lines, editor))?;
        Ok(())
    }

    fn edit_line(&mut self) -> io::Result<String> {
        loop {
            self.draw()?;
            let code = self.next_key()?;
            if let Some(editor) = self.editor.as_mut() {
                if editor.handle_key(code) == EditOutcome::Submit {
                    return Ok(editor.text());
                }
            }
        }
    }

    fn next_key(&mut self) -> io::Result<KeyCode> {
        let key = self.keys.next_key()?;
        if is_interrupt(&key) {
            return Err(interrupted());
        }
        Ok(key.code)
    }
}

impl<B: Backend, K: KeySource> Screen for TuiScreen<B, K> {
    fn clear_screen(&mut self) -> io::Result<()> {
        self.lines.clear();
        Ok(())
    }

    fn add_text(&mut self, text: &str) -> io::Result<()> {
        self.lines.push(Line::from(text.to_string()));
        Ok(())
    }

    fn add_status(&mut self, message: &StatusMessage) -> io::Result<()> {
        self.lines
            .push(Line::styled(message.text.clone(), status_style(message)));
        Ok(())
    }

    fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        self.clear_screen()?;
        for line in prompt.lines() {
            self.add_text(line)?;
        }
        self.editor = Some(LineEditor::new());
        let result = self.edit_line();
        self.editor = None;
        result
    }

    fn read_key(&mut self) -> io::Result<String> {
        self.draw()?;
        loop {
            if let KeyCode::Char(c) = self.next_key()? {
                return Ok(c.to_string());
            }
        }
    }
}

fn status_style(message: &StatusMessage) -> Style {
    if message.is_error() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    }
}

/// Draws the current lines in a bordered block, followed by the input line
/// and cursor while a prompt is active.
pub fn render_screen(f: &mut Frame, lines: &[Line<'static>], editor: Option<&LineEditor>) {
    let block = Block::default().borders(Borders::ALL).title("bookshelf");
    let inner = block.inner(f.area());
    f.render_widget(block, f.area());

    let mut content = lines.to_vec();
    if let Some(editor) = editor {
        content.push(Line::styled(editor.text(), Style::default().fg(Color::Yellow)));
    }
    f.render_widget(Paragraph::new(content), inner);

    if let Some(editor) = editor {
        let x = inner.x.saturating_add(editor.cursor() as u16);
        let y = inner.y.saturating_add(lines.len() as u16);
        if x < inner.right() && y < inner.bottom() {
            f.set_cursor_position(Position { x, y });
        }
    }
}

/// Blocks until the terminal is at least [`MIN_HEIGHT`] rows tall, showing
/// a hint meanwhile.
pub fn wait_for_min_height<B: Backend>(terminal: &mut Terminal<B>) -> io::Result<()> {
    loop {
        let size = terminal.size()?;
        if size.height >= MIN_HEIGHT {
            return Ok(());
        }

        terminal.draw(|f| {
            let hint = Paragraph::new(vec![
                Line::from(format!("Increase the terminal height to at least {} rows.", MIN_HEIGHT)),
                Line::from(format!("Current height: {}.", size.height)),
            ]);
            f.render_widget(hint, f.area());
        })?;
        thread::sleep(Duration::from_millis(100));
    }
}
