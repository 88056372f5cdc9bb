//! Single-line search input with a clear action and a loading slot.
//!
//! The box only edits text. Every edit is reported as
//! [`Message::Changed`]; debouncing and querying are the owner's business.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use duolist_core::{Command, Component};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    KeyPress(KeyEvent),
    Paste(String),
    Focus,
    Blur,
    /// Empty the box (the clear action).
    Clear,
    /// Output: the text changed.
    Changed(String),
    /// Output: the box gave up focus.
    Dismissed,
}

#[derive(Debug, Clone)]
struct SearchBoxStyle {
    border: Style,
    border_focused: Style,
    prompt: Style,
    text: Style,
    placeholder: Style,
    cursor: Style,
    clear: Style,
}

impl Default for SearchBoxStyle {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::DarkGray),
            border_focused: Style::default().fg(Color::Blue),
            prompt: Style::default().fg(Color::Gray),
            text: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            clear: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Search input.
#[derive(Debug, Clone)]
pub struct SearchBox {
    value: String,
    cursor_pos: usize,
    focused: bool,
    escape_clears: bool,
    placeholder: String,
    indicator: Option<&'static str>,
    style: SearchBoxStyle,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor_pos: 0,
            focused: false,
            escape_clears: true,
            placeholder: "Search...".to_string(),
            indicator: None,
            style: SearchBoxStyle::default(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Whether Esc on a non-empty box clears it (default) or only leaves it.
    pub fn with_escape_clears(mut self, enabled: bool) -> Self {
        self.escape_clears = enabled;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the text, moving the cursor to the end. Emits nothing.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor_pos = self.char_len();
    }

    /// Glyph shown at the right edge while the owner is loading.
    pub fn set_indicator(&mut self, indicator: Option<&'static str>) {
        self.indicator = indicator;
    }

    pub fn indicator(&self) -> Option<&'static str> {
        self.indicator
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    fn byte_offset(s: &str, char_idx: usize) -> usize {
        s.char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(s.len())
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn changed(&self) -> Command<Message> {
        Command::message(Message::Changed(self.value.clone()))
    }

    fn clear(&mut self) -> Command<Message> {
        if self.value.is_empty() {
            return Command::none();
        }
        self.value.clear();
        self.cursor_pos = 0;
        self.changed()
    }

    fn insert_str(&mut self, text: &str) -> Command<Message> {
        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        if text.is_empty() {
            return Command::none();
        }
        let byte_pos = Self::byte_offset(&self.value, self.cursor_pos);
        self.value.insert_str(byte_pos, &text);
        self.cursor_pos += text.chars().count();
        self.changed()
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => {
                if self.escape_clears && !self.value.is_empty() {
                    self.clear()
                } else {
                    self.blur();
                    Command::message(Message::Dismissed)
                }
            }
            (KeyCode::Enter, _) | (KeyCode::Tab, _) => {
                self.blur();
                Command::message(Message::Dismissed)
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => self.clear(),
            (KeyCode::Backspace, _) => {
                if self.cursor_pos == 0 {
                    return Command::none();
                }
                self.cursor_pos -= 1;
                let byte_pos = Self::byte_offset(&self.value, self.cursor_pos);
                self.value.remove(byte_pos);
                self.changed()
            }
            (KeyCode::Delete, _) => {
                if self.cursor_pos >= self.char_len() {
                    return Command::none();
                }
                let byte_pos = Self::byte_offset(&self.value, self.cursor_pos);
                self.value.remove(byte_pos);
                self.changed()
            }
            (KeyCode::Left, _) => {
                self.cursor_pos = self.cursor_pos.saturating_sub(1);
                Command::none()
            }
            (KeyCode::Right, _) => {
                self.cursor_pos = (self.cursor_pos + 1).min(self.char_len());
                Command::none()
            }
            (KeyCode::Home, _) => {
                self.cursor_pos = 0;
                Command::none()
            }
            (KeyCode::End, _) => {
                self.cursor_pos = self.char_len();
                Command::none()
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                let mut buf = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut buf))
            }
            _ => Command::none(),
        }
    }

    /// Spans for the text, scrolled so the cursor stays in `width` columns.
    fn text_spans(&self, width: usize) -> Vec<Span<'_>> {
        if self.value.is_empty() {
            let mut spans = Vec::new();
            if self.focused {
                spans.push(Span::styled(" ", self.style.cursor));
            }
            spans.push(Span::styled(self.placeholder.as_str(), self.style.placeholder));
            return spans;
        }

        // Drop leading characters until the text up to the cursor fits.
        let cursor_byte = Self::byte_offset(&self.value, self.cursor_pos);
        let mut start = 0;
        while start < cursor_byte && self.value[start..cursor_byte].width() + 1 > width {
            start += self.value[start..]
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(1);
        }

        let before = &self.value[start..cursor_byte];
        let mut spans = vec![Span::styled(before, self.style.text)];
        if !self.focused {
            spans.push(Span::styled(&self.value[cursor_byte..], self.style.text));
            return spans;
        }
        match self.value[cursor_byte..].chars().next() {
            Some(c) => {
                let next = cursor_byte + c.len_utf8();
                spans.push(Span::styled(&self.value[cursor_byte..next], self.style.cursor));
                spans.push(Span::styled(&self.value[next..], self.style.text));
            }
            None => spans.push(Span::styled(" ", self.style.cursor)),
        }
        spans
    }
}

impl Component for SearchBox {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focused => self.handle_key(key),
            Message::Paste(text) if self.focused => self.insert_str(&text),
            Message::Focus => {
                self.focus();
                Command::none()
            }
            Message::Blur => {
                self.blur();
                Command::none()
            }
            Message::Clear => self.clear(),
            Message::KeyPress(_) | Message::Paste(_) | Message::Changed(_) | Message::Dismissed => {
                Command::none()
            }
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                self.style.border_focused
            } else {
                self.style.border
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.is_empty() {
            return;
        }

        let mut trailing = Vec::new();
        if let Some(glyph) = self.indicator {
            trailing.push(Span::styled(glyph, Style::default().fg(Color::Cyan)));
            trailing.push(Span::raw(" "));
        }
        if !self.value.is_empty() {
            trailing.push(Span::styled("✕", self.style.clear));
        }
        let trailing_width: usize = trailing.iter().map(Span::width).sum();

        let prompt = Span::styled("/ ", self.style.prompt);
        let text_width = (inner.width as usize)
            .saturating_sub(prompt.width() + trailing_width + 1)
            .max(1);

        let mut spans = vec![prompt];
        spans.extend(self.text_spans(text_width));
        frame.render_widget(Paragraph::new(Line::from(spans)), inner);

        if trailing_width > 0 && inner.width as usize > trailing_width {
            let right = Rect::new(
                inner.right() - trailing_width as u16,
                inner.y,
                trailing_width as u16,
                1,
            );
            frame.render_widget(Paragraph::new(Line::from(trailing)), right);
        }
    }

    fn focused(&self) -> bool {
        self.focused
    }
}
