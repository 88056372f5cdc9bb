use crate::layout::centered_band;
use duolist_state::EmptyReason;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget, Wrap};

/// Centered notice for a list with nothing to show.
#[derive(Debug, Clone)]
pub struct EmptyState<'a> {
    reason: &'a EmptyReason,
}

impl<'a> EmptyState<'a> {
    pub fn new(reason: &'a EmptyReason) -> Self {
        Self { reason }
    }

    pub fn title(&self) -> &'static str {
        match self.reason {
            EmptyReason::NoData => "No data available",
            EmptyReason::NoResults(_) => "No search results",
        }
    }

    pub fn message(&self) -> String {
        match self.reason {
            EmptyReason::NoData => "There are currently no items to display.".to_string(),
            EmptyReason::NoResults(query) => {
                format!("No results found for \"{query}\". Try adjusting your search terms.")
            }
        }
    }

    fn icon(&self) -> &'static str {
        match self.reason {
            EmptyReason::NoData => "∅",
            EmptyReason::NoResults(_) => "⌕",
        }
    }
}

impl Widget for EmptyState<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let muted = Style::default().fg(Color::DarkGray);
        let lines = vec![
            Line::styled(self.icon(), muted),
            Line::default(),
            Line::styled(self.title(), Style::default().add_modifier(Modifier::BOLD)),
            Line::styled(self.message(), muted),
        ];
        let message_rows = (self.message().chars().count() as u16 / area.width.max(1)) + 1;
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(centered_band(3 + message_rows, area), buf);
    }
}
