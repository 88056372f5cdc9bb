use crate::command::{Command, CommandInner};
use crate::model::Model;
use crate::subscription::SubscriptionManager;
use crossterm::{
    cursor,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Errors that can occur while initializing or running a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// An I/O error from terminal setup, rendering, or teardown.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Configuration options for a [`Program`].
///
/// Override only what you need with struct update syntax:
///
/// ```rust,ignore
/// let opts = ProgramOptions {
///     title: Some("duolist".into()),
///     ..ProgramOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Target frames per second (default: 60, clamped to 1..=120).
    pub fps: u32,
    /// Start in the alternate screen (default: true).
    pub alt_screen: bool,
    /// Capture mouse events so the wheel scrolls the lists (default: true).
    pub mouse_capture: bool,
    /// Enable bracketed paste (default: true).
    pub bracketed_paste: bool,
    /// Terminal window title.
    pub title: Option<String>,
    /// Restore the terminal before the default panic hook runs (default: true).
    pub catch_panics: bool,
    /// Quit on Ctrl+C delivered as a signal (default: true).
    pub handle_signals: bool,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            alt_screen: true,
            mouse_capture: true,
            bracketed_paste: true,
            title: None,
            catch_panics: true,
            handle_signals: true,
        }
    }
}

/// The program runtime: terminal setup, the event loop, and the [`Model`]
/// lifecycle.
///
/// ```rust,ignore
/// #[tokio::main]
/// async fn main() -> Result<(), ProgramError> {
///     let model = Program::<App>::new(flags)?.run().await?;
///     Ok(())
/// }
/// ```
pub struct Program<M: Model> {
    model: M,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    msg_tx: mpsc::UnboundedSender<M::Message>,
    msg_rx: mpsc::UnboundedReceiver<M::Message>,
    subscription_manager: SubscriptionManager<M::Message>,
    options: ProgramOptions,
    needs_redraw: bool,
    should_quit: bool,
}

impl<M: Model> Program<M> {
    /// Create a new program with default options.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization fails.
    pub fn new(flags: M::Flags) -> Result<Self, ProgramError> {
        Self::with_options(flags, ProgramOptions::default())
    }

    /// Create a new program with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization fails.
    pub fn with_options(flags: M::Flags, options: ProgramOptions) -> Result<Self, ProgramError> {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();

        let (model, init_cmd) = M::init(flags);

        let terminal = init_terminal(&options)?;
        let subscription_manager = SubscriptionManager::new(msg_tx.clone());

        let mut program = Self {
            model,
            terminal,
            msg_tx,
            msg_rx,
            subscription_manager,
            options,
            needs_redraw: true,
            should_quit: false,
        };

        tracing::debug!("program initialized");

        program.execute_command(init_cmd);
        let subs = program.model.subscriptions();
        program.subscription_manager.reconcile(subs);

        Ok(program)
    }

    /// Run the program until the model quits. Returns the final model.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing or restoring the terminal fails.
    pub async fn run(mut self) -> Result<M, ProgramError> {
        let result = self.event_loop().await;

        tracing::debug!("shutting down");
        self.subscription_manager.shutdown();
        restore_terminal(&self.options)?;

        result.map(|()| self.model)
    }

    async fn event_loop(&mut self) -> Result<(), ProgramError> {
        self.render()?;

        let fps = self.options.fps.clamp(1, 120);
        let mut frame_interval = tokio::time::interval(Duration::from_secs_f64(1.0 / f64::from(fps)));
        frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let handle_signals = self.options.handle_signals;

        loop {
            tokio::select! {
                biased;

                _ = tokio::signal::ctrl_c(), if handle_signals => {
                    tracing::debug!("received ctrl+c signal");
                    return Ok(());
                }

                Some(msg) = self.msg_rx.recv() => {
                    self.process_message(msg);

                    // Micro-batch: drain further queued messages for up to
                    // 100µs (at most 100) before the next frame.
                    let deadline = Instant::now() + Duration::from_micros(100);
                    let mut batch_count = 0u32;
                    while Instant::now() < deadline && batch_count < 100 {
                        match self.msg_rx.try_recv() {
                            Ok(msg) => {
                                self.process_message(msg);
                                batch_count += 1;
                            }
                            Err(_) => break,
                        }
                    }

                    if self.should_quit {
                        return Ok(());
                    }
                }

                _ = frame_interval.tick() => {
                    if self.needs_redraw {
                        self.render()?;
                        self.needs_redraw = false;
                    }
                }
            }
        }
    }

    fn process_message(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.execute_command(cmd);

        let subs = self.model.subscriptions();
        self.subscription_manager.reconcile(subs);

        self.needs_redraw = true;
    }

    fn execute_command(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => {
                let _ = self.msg_tx.send(msg);
            }
            CommandInner::Quit => {
                self.should_quit = true;
            }
            CommandInner::Future(fut) => {
                let tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    let msg = fut.await;
                    let _ = tx.send(msg);
                });
            }
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.execute_command(cmd);
                }
            }
        }
    }

    fn render(&mut self) -> Result<(), ProgramError> {
        self.terminal.draw(|frame| {
            self.model.view(frame);
        })?;
        Ok(())
    }
}

fn init_terminal(options: &ProgramOptions) -> Result<Terminal<CrosstermBackend<Stdout>>, ProgramError> {
    // Install the restoring panic hook only once so hooks do not stack.
    if options.catch_panics {
        use std::sync::Once;
        static HOOK_INSTALLED: Once = Once::new();
        let alt_screen = options.alt_screen;
        HOOK_INSTALLED.call_once(|| {
            let original_hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                let _ = restore_terminal_minimal(alt_screen);
                original_hook(info);
            }));
        });
    }

    enable_raw_mode()?;
    let mut writer = stdout();

    if options.alt_screen {
        execute!(writer, EnterAlternateScreen)?;
    }
    if options.bracketed_paste {
        execute!(writer, EnableBracketedPaste)?;
    }
    if options.mouse_capture {
        execute!(writer, EnableMouseCapture)?;
    }
    if let Some(ref title) = options.title {
        execute!(writer, SetTitle(title))?;
    }
    execute!(writer, cursor::Hide)?;

    let backend = CrosstermBackend::new(writer);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(options: &ProgramOptions) -> Result<(), ProgramError> {
    restore_terminal_minimal(options.alt_screen)?;
    Ok(())
}

fn restore_terminal_minimal(alt_screen: bool) -> Result<(), io::Error> {
    // Best effort: keep going when a step fails so as much terminal state as
    // possible is restored.
    let raw = disable_raw_mode();
    let mut writer = stdout();
    execute!(writer, DisableBracketedPaste).ok();
    execute!(writer, DisableMouseCapture).ok();
    execute!(writer, cursor::Show).ok();
    if alt_screen {
        execute!(writer, LeaveAlternateScreen).ok();
    }
    raw
}
