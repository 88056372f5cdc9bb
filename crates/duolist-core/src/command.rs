use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;

/// A side effect returned from [`Model::update`](crate::Model::update) or
/// [`Model::init`](crate::Model::init).
///
/// # Examples
///
/// ```rust,ignore
/// // Do nothing:
/// let cmd = Command::none();
///
/// // Fetch a page and deliver the outcome back to `update`:
/// let cmd = Command::perform(cache.fetch(kind, params.clone()), move |result| {
///     Msg::Fetched { params, result }
/// });
///
/// // Start both lists at once:
/// let cmd = Command::batch([users.load(), reviewers.load()]);
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg: Send + 'static> {
    None,
    Message(Msg),
    Quit,
    Future(BoxFuture<'static, Msg>),
    Batch(Vec<Command<Msg>>),
}

impl<Msg: Send + 'static> Command<Msg> {
    /// No-op command.
    pub fn none() -> Self {
        Command {
            inner: CommandInner::None,
        }
    }

    /// Run an async future on the runtime and map its output to a message.
    ///
    /// The future is spawned and runs concurrently with further updates, so
    /// its message may arrive after the state that issued it has moved on.
    pub fn perform<F, T>(future: F, map: impl FnOnce(T) -> Msg + Send + 'static) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Command {
            inner: CommandInner::Future(Box::pin(async move { map(future.await) })),
        }
    }

    /// Deliver a message on the next loop iteration.
    pub fn message(msg: Msg) -> Self {
        Command {
            inner: CommandInner::Message(msg),
        }
    }

    /// Quit the program.
    pub fn quit() -> Self {
        Command {
            inner: CommandInner::Quit,
        }
    }

    /// Run several commands concurrently. No-ops are dropped.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let mut cmds: Vec<_> = cmds.into_iter().filter(|cmd| !cmd.is_none()).collect();
        match cmds.len() {
            0 => Command::none(),
            1 => cmds.pop().unwrap_or_else(Command::none),
            _ => Command {
                inner: CommandInner::Batch(cmds),
            },
        }
    }

    /// Transform the message type (for component composition).
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Command<NewMsg> {
        self.map_with(Arc::new(f))
    }

    fn map_with<NewMsg: Send + 'static>(
        self,
        f: Arc<dyn Fn(Msg) -> NewMsg + Send + Sync>,
    ) -> Command<NewMsg> {
        match self.inner {
            CommandInner::None => Command::none(),
            CommandInner::Message(msg) => Command::message(f(msg)),
            CommandInner::Quit => Command::quit(),
            CommandInner::Future(fut) => Command {
                inner: CommandInner::Future(Box::pin(async move { f(fut.await) })),
            },
            CommandInner::Batch(cmds) => Command {
                inner: CommandInner::Batch(
                    cmds.into_iter()
                        .map(|cmd| cmd.map_with(f.clone()))
                        .collect(),
                ),
            },
        }
    }

    // --- Inspection methods (useful for testing) ---

    /// Returns `true` if this is a no-op command.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// Returns `true` if this command quits the program.
    pub fn is_quit(&self) -> bool {
        matches!(self.inner, CommandInner::Quit)
    }

    /// Number of async futures this command would spawn, counting into
    /// batches.
    pub fn pending_futures(&self) -> usize {
        match &self.inner {
            CommandInner::Future(_) => 1,
            CommandInner::Batch(cmds) => cmds.iter().map(Command::pending_futures).sum(),
            CommandInner::None | CommandInner::Message(_) | CommandInner::Quit => 0,
        }
    }

    /// If this command is an immediate message, return it.
    pub fn into_message(self) -> Option<Msg> {
        match self.inner {
            CommandInner::Message(msg) => Some(msg),
            _ => None,
        }
    }
}
