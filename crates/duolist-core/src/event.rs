use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent};

/// Terminal events produced by the runtime's event loop.
///
/// Delivered through the [`terminal_events`](crate::subscriptions::terminal_events)
/// subscription, which maps each event into the application's message type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A key press. Release and repeat events are filtered out.
    Key(KeyEvent),
    /// A mouse event (wheel scrolling, clicks).
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Bracketed paste content.
    Paste(String),
}

impl TerminalEvent {
    /// Convert a crossterm event, dropping the kinds the client never reacts
    /// to (focus changes, key releases).
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        match event {
            crossterm::event::Event::Key(k) if k.kind == KeyEventKind::Press => {
                Some(TerminalEvent::Key(k))
            }
            crossterm::event::Event::Key(_) => None,
            crossterm::event::Event::Mouse(m) => Some(TerminalEvent::Mouse(m)),
            crossterm::event::Event::Resize(w, h) => Some(TerminalEvent::Resize(w, h)),
            crossterm::event::Event::Paste(s) => Some(TerminalEvent::Paste(s)),
            crossterm::event::Event::FocusGained | crossterm::event::Event::FocusLost => None,
        }
    }
}
