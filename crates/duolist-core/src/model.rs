use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::Frame;

/// The top-level application trait, following the [Elm Architecture].
///
/// The runtime drives a continuous **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) builds the initial state and may return a
///    [`Command`] for startup work, typically the first page fetch of every
///    list.
/// 2. [`view`](Model::view) renders the current state to a [`ratatui::Frame`].
/// 3. Key presses, mouse wheel ticks, timers and completed fetches arrive as
///    messages.
/// 4. [`update`](Model::update) applies each message and returns further
///    [`Command`]s.
///
/// Re-rendering after every update is the change notification: `view` reads
/// whatever state the last `update` left behind.
///
/// # Example
///
/// ```rust,ignore
/// use duolist_core::{Command, Model};
/// use ratatui::widgets::Paragraph;
/// use ratatui::Frame;
///
/// struct Counter {
///     loaded: usize,
/// }
///
/// enum Msg {
///     PageLoaded(usize),
/// }
///
/// impl Model for Counter {
///     type Message = Msg;
///     type Flags = ();
///
///     fn init(_: ()) -> (Self, Command<Msg>) {
///         (Counter { loaded: 0 }, Command::none())
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::PageLoaded(n) => self.loaded += n,
///         }
///         Command::none()
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         let text = format!("Shown {} users", self.loaded);
///         frame.render_widget(Paragraph::new(text), frame.area());
///     }
/// }
/// ```
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// Every event that can affect the application state.
    type Message: Send + 'static;

    /// Startup data handed to [`Model::init`], e.g. configuration and the
    /// record source to fetch from.
    type Flags: Send + 'static;

    /// Create the initial state and a startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Apply a message and return a command for side effects.
    ///
    /// After `update` returns, the runtime re-renders and reconciles
    /// [`subscriptions`](Model::subscriptions).
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state. Must not mutate logical state.
    fn view(&self, frame: &mut Frame);

    /// Declare the subscriptions that should be active for the current state.
    ///
    /// The runtime diffs the returned list against the active set: new ids
    /// are started, missing ids are aborted. The default is no subscriptions.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }
}
