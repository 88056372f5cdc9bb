//! Card and detail views of a single record.

use crate::layout::centered_percent;
use duolist_state::{Record, RecordKind};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap};
use std::borrow::Cow;

/// Default number of comment characters shown on a card.
pub const COMMENT_MAX_LEN: usize = 120;

/// Cut `text` to `max_len` characters, marking the cut with `...`.
pub fn truncate_text(text: &str, max_len: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_len) {
        Some((byte, _)) => Cow::Owned(format!("{}...", &text[..byte])),
        None => Cow::Borrowed(text),
    }
}

/// A compact card: name and kind tag, email, quoted tagline and the start of
/// the comment.
#[derive(Debug, Clone)]
pub struct RecordCard<'a> {
    record: &'a Record,
    kind: RecordKind,
    comment_max_len: usize,
    selected: bool,
}

impl<'a> RecordCard<'a> {
    pub fn new(record: &'a Record, kind: RecordKind) -> Self {
        Self {
            record,
            kind,
            comment_max_len: COMMENT_MAX_LEN,
            selected: false,
        }
    }

    pub fn comment_max_len(mut self, max_len: usize) -> Self {
        self.comment_max_len = max_len;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for RecordCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let border = if self.selected {
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let name = Paragraph::new(Span::styled(
            self.record.full_name(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        name.render(Rect { height: 1, ..inner }, buf);
        Paragraph::new(Span::styled(self.kind.tag(), Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Right)
            .render(Rect { height: 1, ..inner }, buf);

        let mut lines = vec![
            Line::styled(self.record.email.as_str(), Style::default().fg(Color::Gray)),
            Line::styled(
                format!("\"{}\"", self.record.tagline),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::ITALIC),
            ),
        ];
        lines.push(Line::raw(truncate_text(&self.record.comment, self.comment_max_len)));

        let body = Rect {
            y: inner.y + 1,
            height: inner.height.saturating_sub(1),
            ..inner
        };
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(body, buf);
    }
}

/// The full record in a centered overlay, comment untruncated.
#[derive(Debug, Clone)]
pub struct RecordDetail<'a> {
    record: &'a Record,
    kind: RecordKind,
}

impl<'a> RecordDetail<'a> {
    pub fn new(record: &'a Record, kind: RecordKind) -> Self {
        Self { record, kind }
    }
}

impl Widget for RecordDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_percent(70, 60, area);
        if popup.is_empty() {
            return;
        }
        Clear.render(popup, buf);

        let label = Style::default().fg(Color::DarkGray);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Blue))
            .title(Line::from(format!(" {} ", self.record.full_name())).bold())
            .title_bottom(Line::from(" Enter/Esc close ").right_aligned());

        let lines = vec![
            Line::from(vec![Span::styled("kind     ", label), Span::raw(self.kind.tag())]),
            Line::from(vec![
                Span::styled("id       ", label),
                Span::raw(self.record.id.to_string()),
            ]),
            Line::from(vec![
                Span::styled("email    ", label),
                Span::raw(self.record.email.as_str()),
            ]),
            Line::from(vec![
                Span::styled("tagline  ", label),
                Span::styled(
                    format!("\"{}\"", self.record.tagline),
                    Style::default().fg(Color::Blue).add_modifier(Modifier::ITALIC),
                ),
            ]),
            Line::default(),
            Line::raw(self.record.comment.as_str()),
        ];
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duolist_core::testing::buffer_to_string;
    use duolist_state::RecordId;

    fn jane(comment: &str) -> Record {
        Record {
            id: RecordId::Number(7),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            tagline: "Open-source tangible hub".into(),
            comment: comment.into(),
        }
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_text("short", 120), "short");
        assert!(matches!(truncate_text("exact", 5), Cow::Borrowed(_)));
    }

    #[test]
    fn truncate_cuts_at_char_boundary() {
        assert_eq!(truncate_text("abcdef", 3), "abc...");
        assert_eq!(truncate_text("héllo wörld", 7), "héllo w...");
    }

    #[test]
    fn truncate_default_length() {
        let long = "x".repeat(200);
        let cut = truncate_text(&long, COMMENT_MAX_LEN);
        assert_eq!(cut.chars().count(), COMMENT_MAX_LEN + 3);
    }

    #[test]
    fn card_shows_all_fields() {
        let record = jane("Quidem sint voluptatem.");
        let mut buf = Buffer::empty(Rect::new(0, 0, 50, 8));
        RecordCard::new(&record, RecordKind::Reviewer).render(buf.area, &mut buf);
        let out = buffer_to_string(&buf);
        assert!(out.contains("Jane Doe"));
        assert!(out.contains("reviewer"));
        assert!(out.contains("jane@example.com"));
        assert!(out.contains("\"Open-source tangible hub\""));
        assert!(out.contains("Quidem sint voluptatem."));
    }

    #[test]
    fn card_truncates_comment() {
        let record = jane("abcdefghij");
        let mut buf = Buffer::empty(Rect::new(0, 0, 50, 8));
        RecordCard::new(&record, RecordKind::User)
            .comment_max_len(4)
            .render(buf.area, &mut buf);
        let out = buffer_to_string(&buf);
        assert!(out.contains("abcd..."));
        assert!(!out.contains("abcde"));
    }

    #[test]
    fn selected_card_has_bold_border() {
        let record = jane("");
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 6));
        RecordCard::new(&record, RecordKind::User)
            .selected(true)
            .render(buf.area, &mut buf);
        let corner = buf.cell((0, 0)).unwrap();
        assert!(corner.modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn detail_shows_full_comment() {
        let comment = "word ".repeat(40);
        let record = jane(comment.trim_end());
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 30));
        RecordDetail::new(&record, RecordKind::User).render(buf.area, &mut buf);
        let out = buffer_to_string(&buf);
        assert!(out.contains("Jane Doe"));
        assert_eq!(out.matches("word").count(), 40);
        assert!(!out.contains("..."));
    }
}
