use crate::layout::centered_band;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorVariant {
    /// Icon, message and retry action on separate rows.
    #[default]
    Default,
    /// Message and retry action on one row.
    Compact,
}

/// A failure notice with an optional retry action.
///
/// The panel only shows the key hint; the owner binds the key.
#[derive(Debug, Clone)]
pub struct ErrorPanel<'a> {
    message: &'a str,
    retry_key: Option<char>,
    variant: ErrorVariant,
}

impl<'a> ErrorPanel<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            message,
            retry_key: None,
            variant: ErrorVariant::Default,
        }
    }

    /// Offer "Try Again" on `key`.
    pub fn retry(mut self, key: char) -> Self {
        self.retry_key = Some(key);
        self
    }

    pub fn variant(mut self, variant: ErrorVariant) -> Self {
        self.variant = variant;
        self
    }

    fn retry_span(&self) -> Option<Span<'static>> {
        self.retry_key.map(|key| {
            Span::styled(
                format!("[{key}] Try Again"),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )
        })
    }
}

impl Widget for ErrorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let alert = Style::default().fg(Color::Red);
        let text = Style::default().fg(Color::Gray);
        match self.variant {
            ErrorVariant::Default => {
                let mut lines = vec![
                    Line::styled("⚠", alert.add_modifier(Modifier::BOLD)),
                    Line::default(),
                    Line::styled(self.message, text),
                ];
                if let Some(retry) = self.retry_span() {
                    lines.push(Line::default());
                    lines.push(Line::from(retry));
                }
                let height = lines.len() as u16;
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .render(centered_band(height, area), buf);
            }
            ErrorVariant::Compact => {
                let mut spans = vec![
                    Span::styled("⚠ ", alert),
                    Span::styled(self.message, text),
                ];
                if let Some(retry) = self.retry_span() {
                    spans.push(Span::raw("  "));
                    spans.push(retry);
                }
                Paragraph::new(Line::from(spans))
                    .alignment(Alignment::Center)
                    .render(centered_band(1, area), buf);
            }
        }
    }
}
