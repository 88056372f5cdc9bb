use crate::event::TerminalEvent;
use crate::subscription::{Subscription, SubscriptionId};
use crossterm::event::EventStream;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// Marker type identifying the terminal event subscription.
pub struct TerminalEvents;

/// Subscribe to terminal events, mapping each through `map`.
///
/// Return `Some(msg)` to forward an event, `None` to discard it.
///
/// # Example
///
/// ```rust,ignore
/// fn subscriptions(&self) -> Vec<Subscription<Msg>> {
///     vec![terminal_events(|event| match event {
///         TerminalEvent::Key(key) => Some(Msg::Key(key)),
///         TerminalEvent::Mouse(mouse) => Some(Msg::Mouse(mouse)),
///         _ => None,
///     })]
/// }
/// ```
pub fn terminal_events<Msg: Send + 'static>(
    map: impl Fn(TerminalEvent) -> Option<Msg> + Send + Sync + 'static,
) -> Subscription<Msg> {
    let id = SubscriptionId::of::<TerminalEvents>();
    let map = Arc::new(map);

    // The EventStream is created inside the task: creating it eagerly on
    // every subscriptions() call would poke crossterm's global reader and
    // disturb the stream that is already running.
    Subscription {
        id,
        spawn: Box::new(move |tx: mpsc::UnboundedSender<Msg>| -> AbortHandle {
            let handle = tokio::spawn(async move {
                let stream = EventStream::new().filter_map(move |result| {
                    let map = map.clone();
                    async move {
                        match result {
                            Ok(event) => TerminalEvent::from_crossterm(event).and_then(|ev| map(ev)),
                            Err(err) => {
                                tracing::warn!(%err, "terminal event stream error");
                                None
                            }
                        }
                    }
                });
                futures::pin_mut!(stream);
                while let Some(msg) = stream.next().await {
                    if tx.send(msg).is_err() {
                        break;
                    }
                }
            });
            handle.abort_handle()
        }),
    }
}
