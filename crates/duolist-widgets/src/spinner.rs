//! Animated loading indicator in three sizes.

use crate::layout::centered_band;
use duolist_core::{subscribe, Command, Component, Every, Subscription};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use ratatui::Frame;
use std::time::{Duration, Instant};

/// Braille dot frames.
pub const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// How much room the indicator takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerSize {
    /// A single glyph, for inline use next to other text.
    Small,
    /// Glyph and label on one centered line.
    #[default]
    Medium,
    /// A centered three-line block for an otherwise empty panel.
    Large,
}

#[derive(Debug, Clone)]
pub enum Message {
    Tick,
}

/// A spinner that advances one frame per tick while spinning.
///
/// One spinner can be drawn at several sizes at once through
/// [`Spinner::sized`], so a pane keeps a single animation for its inline,
/// loader and overlay indicators.
#[derive(Debug, Clone)]
pub struct Spinner {
    frame_index: usize,
    size: SpinnerSize,
    label: String,
    style: Style,
    interval: Duration,
    spinning: bool,
    id: &'static str,
}

impl Spinner {
    /// A stopped spinner. `id` keeps the tick timers of several spinners apart.
    pub fn new(id: &'static str) -> Self {
        Self {
            frame_index: 0,
            size: SpinnerSize::default(),
            label: "Loading...".to_string(),
            style: Style::default().fg(Color::Cyan),
            interval: Duration::from_millis(100),
            spinning: false,
            id,
        }
    }

    pub fn with_size(mut self, size: SpinnerSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn start(&mut self) {
        self.spinning = true;
    }

    pub fn stop(&mut self) {
        self.spinning = false;
        self.frame_index = 0;
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    /// The current frame.
    pub fn glyph(&self) -> &'static str {
        FRAMES[self.frame_index % FRAMES.len()]
    }

    /// A widget drawing the current frame at `size`.
    pub fn sized(&self, size: SpinnerSize) -> SpinnerWidget<'_> {
        SpinnerWidget {
            glyph: self.glyph(),
            label: &self.label,
            style: self.style,
            size,
        }
    }
}

impl Component for Spinner {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Tick => {
                if self.spinning {
                    self.frame_index = (self.frame_index + 1) % FRAMES.len();
                }
                Command::none()
            }
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.sized(self.size), area);
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        if self.spinning {
            vec![subscribe(Every::new(self.interval, self.id)).map(|_: Instant| Message::Tick)]
        } else {
            vec![]
        }
    }
}

/// One frame of a [`Spinner`], ready to draw.
#[derive(Debug, Clone)]
pub struct SpinnerWidget<'a> {
    glyph: &'static str,
    label: &'a str,
    style: Style,
    size: SpinnerSize,
}

impl<'a> SpinnerWidget<'a> {
    /// Override the label for this drawing only.
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }
}

impl Widget for SpinnerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        match self.size {
            SpinnerSize::Small => {
                buf.set_string(area.x, area.y, self.glyph, self.style);
            }
            SpinnerSize::Medium => {
                let line = Line::from(vec![
                    Span::styled(self.glyph, self.style),
                    Span::raw(" "),
                    Span::styled(self.label, Style::default().fg(Color::DarkGray)),
                ]);
                Paragraph::new(line)
                    .alignment(Alignment::Center)
                    .render(centered_band(1, area), buf);
            }
            SpinnerSize::Large => {
                let wheel = [self.glyph; 3].join(" ");
                let lines = vec![
                    Line::styled(wheel, self.style.add_modifier(Modifier::BOLD)),
                    Line::default(),
                    Line::styled(self.label, Style::default().fg(Color::DarkGray)),
                ];
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .render(centered_band(3, area), buf);
            }
        }
    }
}
