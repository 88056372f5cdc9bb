use crate::command::{Command, CommandInner};
use crate::model::Model;
use crate::subscription::SubscriptionManager;
use futures::future::{join_all, BoxFuture};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tokio::sync::mpsc;

/// A headless harness that drives a [`Model`] without a real terminal.
///
/// Immediate messages ([`Command::message`]) are queued and flushed by
/// [`drain_messages`](TestProgram::drain_messages). Async commands
/// ([`Command::perform`]) are parked until [`settle`](TestProgram::settle)
/// runs them, which lets a test decide exactly when a fetch completes.
/// Subscriptions are not started unless
/// [`run_subscriptions`](TestProgram::run_subscriptions) is called; otherwise
/// send the message a timer would have produced instead.
///
/// # Example
///
/// ```rust,ignore
/// use duolist_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<App>::new(flags); // init issues both first-page fetches
/// prog.settle().await;                            // fetches resolve, updates run
/// assert!(prog.render_string(80, 24).contains("Shown 50 users"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    pending_futures: Vec<BoxFuture<'static, M::Message>>,
    quit: bool,
    subscriptions: Option<Subscriptions<M::Message>>,
}

struct Subscriptions<Msg: Send + 'static> {
    manager: SubscriptionManager<Msg>,
    rx: mpsc::UnboundedReceiver<Msg>,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            pending_futures: Vec::new(),
            quit: false,
            subscriptions: None,
        };
        program.collect(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd);
        self.reconcile();
    }

    /// Process queued immediate messages until none are left.
    ///
    /// Async commands produced along the way stay parked.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                self.send(msg);
            }
        }
    }

    /// Run every parked future and feed the results to `update`, repeating
    /// until no messages or futures remain.
    ///
    /// Futures parked in the same round run concurrently and their messages
    /// are delivered in the order the commands were issued.
    pub async fn settle(&mut self) {
        loop {
            self.drain_messages();
            if self.pending_futures.is_empty() {
                break;
            }
            let futures: Vec<_> = self.pending_futures.drain(..).collect();
            for msg in join_all(futures).await {
                self.send(msg);
            }
        }
    }

    /// Start the model's subscriptions, as the real runtime would, and keep
    /// them reconciled after every update from now on.
    ///
    /// Must be called inside a tokio runtime. Pair with
    /// `#[tokio::test(start_paused = true)]` to drive timers deterministically.
    pub fn run_subscriptions(&mut self) {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscriptions = Some(Subscriptions {
            manager: SubscriptionManager::new(tx),
            rx,
        });
        self.reconcile();
    }

    /// Wait for the next message from a running subscription and feed it to
    /// `update`. Returns `false` when subscriptions are not running.
    pub async fn next_subscription_message(&mut self) -> bool {
        let Some(subs) = self.subscriptions.as_mut() else {
            return false;
        };
        match subs.rx.recv().await {
            Some(msg) => {
                self.send(msg);
                true
            }
            None => false,
        }
    }

    /// Take the parked futures without running them.
    ///
    /// Useful for completing requests out of order: await the returned
    /// futures yourself and [`send`](TestProgram::send) their messages in
    /// whatever order the test needs.
    pub fn take_futures(&mut self) -> Vec<BoxFuture<'static, M::Message>> {
        self.pending_futures.drain(..).collect()
    }

    /// Number of async commands waiting to run.
    pub fn parked_futures(&self) -> usize {
        self.pending_futures.len()
    }

    /// Whether any update returned [`Command::quit`].
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable reference to the model for direct test setup.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test backend");
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .expect("test backend draw");
        terminal.backend().buffer().clone()
    }

    /// Render the model and return its content as newline-separated rows.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn reconcile(&mut self) {
        if let Some(subs) = self.subscriptions.as_mut() {
            subs.manager.reconcile(self.model.subscriptions());
        }
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => self.pending_messages.push(msg),
            CommandInner::Quit => self.quit = true,
            CommandInner::Future(fut) => self.pending_futures.push(fut),
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect(cmd);
                }
            }
        }
    }
}

impl<M: Model> Drop for TestProgram<M> {
    fn drop(&mut self) {
        if let Some(subs) = self.subscriptions.as_mut() {
            subs.manager.shutdown();
        }
    }
}

/// Flatten a buffer into rows of symbols separated by newlines.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area: Rect = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;
    use ratatui::Frame;

    struct Loader {
        loaded: Vec<u32>,
        requested: u32,
    }

    enum Msg {
        Request(u32),
        Loaded(u32),
        Done,
    }

    impl Model for Loader {
        type Message = Msg;
        type Flags = u32;

        fn init(first: u32) -> (Self, Command<Msg>) {
            (
                Loader {
                    loaded: Vec::new(),
                    requested: 0,
                },
                Command::message(Msg::Request(first)),
            )
        }

        fn update(&mut self, msg: Msg) -> Command<Msg> {
            match msg {
                Msg::Request(page) => {
                    self.requested += 1;
                    Command::perform(async move { page }, Msg::Loaded)
                }
                Msg::Loaded(page) => {
                    self.loaded.push(page);
                    if page < 3 {
                        Command::message(Msg::Request(page + 1))
                    } else {
                        Command::none()
                    }
                }
                Msg::Done => Command::quit(),
            }
        }

        fn view(&self, frame: &mut Frame) {
            let text = format!("pages: {}", self.loaded.len());
            frame.render_widget(Paragraph::new(text), frame.area());
        }
    }

    #[test]
    fn drain_parks_futures() {
        let mut prog = TestProgram::<Loader>::new(1);
        prog.drain_messages();
        assert_eq!(prog.model().requested, 1);
        assert_eq!(prog.parked_futures(), 1);
        assert!(prog.model().loaded.is_empty());
    }

    #[tokio::test]
    async fn settle_runs_until_quiescent() {
        let mut prog = TestProgram::<Loader>::new(1);
        prog.settle().await;
        assert_eq!(prog.model().loaded, vec![1, 2, 3]);
        assert_eq!(prog.parked_futures(), 0);
    }

    #[tokio::test]
    async fn take_futures_allows_manual_delivery() {
        let mut prog = TestProgram::<Loader>::new(3);
        prog.drain_messages();
        let futures = prog.take_futures();
        assert_eq!(futures.len(), 1);
        for fut in futures {
            let msg = fut.await;
            prog.send(msg);
        }
        assert_eq!(prog.model().loaded, vec![3]);
    }

    #[test]
    fn quit_is_recorded() {
        let mut prog = TestProgram::<Loader>::new(1);
        prog.send(Msg::Done);
        assert!(prog.quit_requested());
    }

    #[tokio::test]
    async fn render_string_shows_view() {
        let mut prog = TestProgram::<Loader>::new(2);
        prog.settle().await;
        let out = prog.render_string(12, 1);
        assert_eq!(out, "pages: 2    ");
    }

    /// Rings once `delay` ms after the latest `Arm`.
    struct Alarm {
        armed: Option<u32>,
        rung: Vec<u32>,
    }

    enum AlarmMsg {
        Arm(u32),
        Ring(u32),
    }

    impl Model for Alarm {
        type Message = AlarmMsg;
        type Flags = ();

        fn init(_: ()) -> (Self, Command<AlarmMsg>) {
            (
                Alarm {
                    armed: None,
                    rung: Vec::new(),
                },
                Command::none(),
            )
        }

        fn update(&mut self, msg: AlarmMsg) -> Command<AlarmMsg> {
            match msg {
                AlarmMsg::Arm(n) => self.armed = Some(n),
                AlarmMsg::Ring(n) => {
                    self.armed = None;
                    self.rung.push(n);
                }
            }
            Command::none()
        }

        fn view(&self, _: &mut Frame) {}

        fn subscriptions(&self) -> Vec<crate::Subscription<AlarmMsg>> {
            match self.armed {
                Some(n) => vec![crate::subscribe(crate::After::new(
                    std::time::Duration::from_millis(400),
                    format!("alarm-{n}"),
                ))
                .map(move |_| AlarmMsg::Ring(n))],
                None => vec![],
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn running_subscriptions_follow_the_model() {
        let mut prog = TestProgram::<Alarm>::new(());
        assert!(!prog.next_subscription_message().await);

        prog.run_subscriptions();
        prog.send(AlarmMsg::Arm(1));
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        prog.send(AlarmMsg::Arm(2));

        assert!(prog.next_subscription_message().await);
        assert_eq!(prog.model().rung, vec![2]);
    }
}
