use crate::subscription::{SubscriptionId, SubscriptionSource};
use futures::stream::BoxStream;
use futures::StreamExt;
use std::time::{Duration, Instant};

/// A repeating timer that fires at a fixed interval.
///
/// Each tick emits the current [`Instant`]. The `id` keeps several `Every`
/// timers apart, e.g. one spinner per list pane.
///
/// # Example
///
/// ```rust,ignore
/// let sub = subscribe(Every::new(Duration::from_millis(100), "users-spinner"))
///     .map(|_| Msg::SpinnerTick);
/// ```
pub struct Every {
    /// The interval between ticks.
    pub interval: Duration,
    /// Identifier distinguishing this timer from others.
    pub id: &'static str,
}

impl Every {
    /// Create a new repeating timer with the given interval and identifier.
    pub fn new(interval: Duration, id: &'static str) -> Self {
        Self { interval, id }
    }
}

impl SubscriptionSource for Every {
    type Output = Instant;

    fn id(&self) -> SubscriptionId {
        SubscriptionId::with_str::<Self>(self.id)
    }

    fn stream(self) -> BoxStream<'static, Instant> {
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let stream =
            tokio_stream::wrappers::IntervalStream::new(interval).map(|tick| tick.into_std());
        Box::pin(stream)
    }
}

/// A keyed one-shot delay that fires once after `duration`.
///
/// The key is part of the subscription id. Declaring an `After` with a new
/// key replaces the old one on the next reconcile, and the old delay is
/// aborted before it fires. This is how a debounce window restarts on every
/// keystroke.
///
/// # Example
///
/// ```rust,ignore
/// let sub = subscribe(After::new(Duration::from_millis(400), format!("users-search-{generation}")))
///     .map(move |_| Msg::SearchSettled(generation));
/// ```
pub struct After {
    /// How long to wait before firing.
    pub duration: Duration,
    /// Identity of this particular delay.
    pub key: String,
}

impl After {
    /// Create a one-shot delay for `duration`, identified by `key`.
    pub fn new(duration: Duration, key: impl Into<String>) -> Self {
        Self {
            duration,
            key: key.into(),
        }
    }
}

impl SubscriptionSource for After {
    type Output = Instant;

    fn id(&self) -> SubscriptionId {
        SubscriptionId::with_str::<Self>(&self.key)
    }

    fn stream(self) -> BoxStream<'static, Instant> {
        let stream = futures::stream::once(async move {
            tokio::time::sleep(self.duration).await;
            Instant::now()
        });
        Box::pin(stream)
    }
}
