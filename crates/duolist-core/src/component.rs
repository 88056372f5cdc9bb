use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`].
///
/// `Component` mirrors [`Model`](crate::Model) but its
/// [`view`](Component::view) receives the area to draw into, so a parent can
/// lay several of them out side by side. The two list panes of the client and
/// their search boxes are components.
///
/// # Composition
///
/// Wrap the child's message in a parent variant and lift commands and
/// subscriptions with [`Command::map`] / [`Subscription::map`]:
///
/// ```rust,ignore
/// fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///     match msg {
///         AppMsg::Search(m) => self.search.update(m).map(AppMsg::Search),
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Apply a message and return a command in the component's own message
    /// type; the parent maps it into its own.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into `area`. Implementations must stay inside the rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Subscriptions for this component. The parent collects and maps them.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }

    /// Whether this component currently takes keyboard input.
    fn focused(&self) -> bool {
        false
    }
}
