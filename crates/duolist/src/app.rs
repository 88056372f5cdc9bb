//! The top-level [`App`] model: users and reviewers side by side.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use duolist_api::{RecordSource, RequestCache};
use duolist_core::{terminal_events, Command, Component, Model, Subscription, TerminalEvent};
use duolist_state::RecordKind;
use duolist_widgets::search_box;
use duolist_widgets::RecordDetail;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::pane::{self, Pane, PaneSettings};

/// Rows below the panes, used by the key help line.
const FOOTER_ROWS: u16 = 1;

/// Lines scrolled per mouse wheel notch.
const WHEEL_STEP: i64 = 3;

/// Everything [`App::init`] needs.
pub struct Flags {
    pub settings: PaneSettings,
    pub source: Arc<dyn RecordSource>,
    pub cache_ttl: Duration,
    /// Terminal size as (columns, rows).
    pub size: (u16, u16),
}

#[derive(Debug)]
pub enum Msg {
    Pane(RecordKind, pane::Message),
    Key(KeyEvent),
    Mouse(MouseEvent),
    Paste(String),
    Resize(u16, u16),
}

pub struct App {
    users: Pane,
    reviewers: Pane,
    focus: RecordKind,
    size: (u16, u16),
}

impl App {
    pub fn pane(&self, kind: RecordKind) -> &Pane {
        match kind {
            RecordKind::User => &self.users,
            RecordKind::Reviewer => &self.reviewers,
        }
    }

    fn pane_mut(&mut self, kind: RecordKind) -> &mut Pane {
        match kind {
            RecordKind::User => &mut self.users,
            RecordKind::Reviewer => &mut self.reviewers,
        }
    }

    /// The pane receiving keyboard input.
    pub fn focus(&self) -> RecordKind {
        self.focus
    }

    fn to_pane(&mut self, kind: RecordKind, msg: pane::Message) -> Command<Msg> {
        self.pane_mut(kind)
            .update(msg)
            .map(move |msg| Msg::Pane(kind, msg))
    }

    fn focus_pane(&mut self, kind: RecordKind) {
        self.focus = kind;
        self.pane_mut(kind).set_focused(true);
        self.pane_mut(kind.other()).set_focused(false);
    }

    /// The pane under a screen column.
    fn pane_at(&self, column: u16) -> RecordKind {
        if column < self.size.0 / 2 {
            RecordKind::User
        } else {
            RecordKind::Reviewer
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Command<Msg> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Command::quit();
        }
        let kind = self.focus;
        if self.pane(kind).detail().is_some() {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc => self.to_pane(kind, pane::Message::ToggleDetail),
                KeyCode::Char('q') => Command::quit(),
                _ => Command::none(),
            };
        }
        if self.pane(kind).is_editing() {
            return self.to_pane(kind, pane::Message::Search(search_box::Message::KeyPress(key)));
        }

        let msg = match key.code {
            KeyCode::Char('q') => return Command::quit(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus_pane(kind.other());
                return Command::none();
            }
            KeyCode::Char('/') => pane::Message::Search(search_box::Message::Focus),
            KeyCode::Esc => pane::Message::Search(search_box::Message::Clear),
            KeyCode::Up | KeyCode::Char('k') => pane::Message::Select(-1),
            KeyCode::Down | KeyCode::Char('j') => pane::Message::Select(1),
            KeyCode::PageUp => pane::Message::PageUp,
            KeyCode::PageDown => pane::Message::PageDown,
            KeyCode::Home | KeyCode::Char('g') => pane::Message::Top,
            KeyCode::End | KeyCode::Char('G') => pane::Message::Bottom,
            KeyCode::Enter => pane::Message::ToggleDetail,
            KeyCode::Char('r') => pane::Message::Retry,
            _ => return Command::none(),
        };
        self.to_pane(kind, msg)
    }

    fn on_mouse(&mut self, mouse: MouseEvent) -> Command<Msg> {
        let kind = self.pane_at(mouse.column);
        match mouse.kind {
            MouseEventKind::ScrollDown => self.to_pane(kind, pane::Message::ScrollBy(WHEEL_STEP)),
            MouseEventKind::ScrollUp => self.to_pane(kind, pane::Message::ScrollBy(-WHEEL_STEP)),
            MouseEventKind::Down(MouseButton::Left) if kind != self.focus => {
                self.focus_pane(kind);
                Command::none()
            }
            _ => Command::none(),
        }
    }

    fn help_line() -> Paragraph<'static> {
        let key = Style::default().fg(Color::Cyan);
        let text = Style::default().fg(Color::DarkGray);
        let hints = [
            ("tab", "switch"),
            ("/", "search"),
            ("esc", "clear"),
            ("↑/↓", "select"),
            ("enter", "details"),
            ("r", "retry"),
            ("q", "quit"),
        ];
        let spans: Vec<Span<'static>> = hints
            .iter()
            .flat_map(|(k, label)| {
                [
                    Span::styled(*k, key),
                    Span::styled(format!(" {label}  "), text),
                ]
            })
            .collect();
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}

impl Model for App {
    type Message = Msg;
    type Flags = Flags;

    fn init(flags: Flags) -> (Self, Command<Msg>) {
        let cache = RequestCache::new(flags.source, flags.cache_ttl);
        let mut app = App {
            users: Pane::new(RecordKind::User, flags.settings.clone(), cache.clone()),
            reviewers: Pane::new(RecordKind::Reviewer, flags.settings, cache),
            focus: RecordKind::User,
            size: flags.size,
        };
        app.focus_pane(RecordKind::User);

        let pane_height = flags.size.1.saturating_sub(FOOTER_ROWS);
        let loads = RecordKind::ALL.map(|kind| {
            let pane = app.pane_mut(kind);
            pane.set_height(pane_height);
            pane.load().map(move |msg| Msg::Pane(kind, msg))
        });
        (app, Command::batch(loads))
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Pane(kind, msg) => self.to_pane(kind, msg),
            Msg::Key(key) => self.on_key(key),
            Msg::Mouse(mouse) => self.on_mouse(mouse),
            Msg::Paste(text) => {
                let kind = self.focus;
                if self.pane(kind).is_editing() {
                    self.to_pane(kind, pane::Message::Search(search_box::Message::Paste(text)))
                } else {
                    Command::none()
                }
            }
            Msg::Resize(width, height) => {
                self.size = (width, height);
                let pane_height = height.saturating_sub(FOOTER_ROWS);
                Command::batch(
                    RecordKind::ALL.map(|kind| self.to_pane(kind, pane::Message::Resize(pane_height))),
                )
            }
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [main, footer] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(FOOTER_ROWS)]).areas(frame.area());
        let [left, right] =
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(main);

        self.users.view(frame, left);
        self.reviewers.view(frame, right);
        frame.render_widget(Self::help_line(), footer);

        let pane = self.pane(self.focus);
        if let Some(record) = pane.detail() {
            frame.render_widget(RecordDetail::new(record, pane.kind()), main);
        }
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        let mut subs = vec![terminal_events(|event| match event {
            TerminalEvent::Key(key) => Some(Msg::Key(key)),
            TerminalEvent::Mouse(mouse) => Some(Msg::Mouse(mouse)),
            TerminalEvent::Paste(text) => Some(Msg::Paste(text)),
            TerminalEvent::Resize(width, height) => Some(Msg::Resize(width, height)),
        })];
        for kind in RecordKind::ALL {
            subs.extend(
                self.pane(kind)
                    .subscriptions()
                    .into_iter()
                    .map(move |sub| sub.map(move |msg| Msg::Pane(kind, msg))),
            );
        }
        subs
    }
}
