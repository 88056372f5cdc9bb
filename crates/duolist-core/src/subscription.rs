use futures::stream::BoxStream;
use futures::StreamExt;
use std::any::TypeId;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// A long-lived event source managed by the runtime.
///
/// Subscriptions are declared in [`Model::subscriptions`](crate::Model::subscriptions)
/// and reconciled after every update: ids that appear are started, ids that
/// disappear are aborted. Aborting drops the underlying stream, so a pending
/// timer never fires once its subscription is gone.
pub struct Subscription<Msg: Send + 'static> {
    pub(crate) id: SubscriptionId,
    pub(crate) spawn: Box<dyn FnOnce(mpsc::UnboundedSender<Msg>) -> AbortHandle + Send>,
}

/// Identity for diffing subscriptions between update cycles.
///
/// Composed of a Rust [`TypeId`] and a numeric discriminant, so two timers of
/// the same type stay distinct as long as their discriminants differ.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId {
    type_id: TypeId,
    discriminant: u64,
}

impl SubscriptionId {
    /// Create an ID from a type and a numeric discriminant.
    pub fn new<T: 'static>(discriminant: u64) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            discriminant,
        }
    }

    /// Create an ID from a type alone (for singletons).
    pub fn of<T: 'static>() -> Self {
        Self::new::<T>(0)
    }

    /// Create an ID from a type and a string discriminant.
    pub fn with_str<T: 'static>(s: &str) -> Self {
        let mut hasher = std::hash::DefaultHasher::new();
        s.hash(&mut hasher);
        Self::new::<T>(hasher.finish())
    }
}

/// Types that produce a stream of values for a [`Subscription`].
///
/// [`stream`](SubscriptionSource::stream) is called once when the
/// subscription starts; the stream is dropped when it is removed.
pub trait SubscriptionSource: Send + 'static {
    /// The type of values this source emits.
    type Output: Send + 'static;

    /// Unique ID for this subscription instance.
    fn id(&self) -> SubscriptionId;

    /// Create the stream of values.
    fn stream(self) -> BoxStream<'static, Self::Output>;
}

/// Create a [`Subscription`] from a [`SubscriptionSource`].
///
/// Spawns a tokio task that drives the source's stream and forwards each value
/// to the runtime's message channel.
pub fn subscribe<S>(source: S) -> Subscription<S::Output>
where
    S: SubscriptionSource,
{
    let id = source.id();
    Subscription {
        id,
        spawn: Box::new(move |tx| {
            let handle = tokio::spawn(async move {
                let mut stream = source.stream();
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

impl<Msg: Send + 'static> Subscription<Msg> {
    /// The identity used for diffing.
    pub fn id(&self) -> &SubscriptionId {
        &self.id
    }

    /// Transform the message type (for component composition).
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Subscription<NewMsg> {
        let f = std::sync::Arc::new(f);
        Subscription {
            id: self.id,
            spawn: Box::new(move |new_tx: mpsc::UnboundedSender<NewMsg>| {
                let (inner_tx, mut inner_rx) = mpsc::unbounded_channel::<Msg>();
                let abort = (self.spawn)(inner_tx);

                tokio::spawn(async move {
                    while let Some(msg) = inner_rx.recv().await {
                        if new_tx.send(f(msg)).is_err() {
                            break;
                        }
                    }
                });

                // Aborting the source drops inner_tx, which ends the mapper.
                abort
            }),
        }
    }
}

/// Active subscriptions, diffed between update cycles.
pub(crate) struct SubscriptionManager<Msg: Send + 'static> {
    active: HashMap<SubscriptionId, AbortHandle>,
    msg_tx: mpsc::UnboundedSender<Msg>,
}

impl<Msg: Send + 'static> SubscriptionManager<Msg> {
    pub fn new(msg_tx: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            active: HashMap::new(),
            msg_tx,
        }
    }

    /// Start new ids, abort removed ones, keep unchanged ones running.
    pub fn reconcile(&mut self, new_subs: Vec<Subscription<Msg>>) {
        let mut new_ids: HashMap<SubscriptionId, Subscription<Msg>> = HashMap::new();
        for sub in new_subs {
            new_ids.insert(sub.id.clone(), sub);
        }

        self.active.retain(|id, handle| {
            let keep = new_ids.contains_key(id);
            if !keep {
                tracing::trace!(?id, "stopping subscription");
                handle.abort();
            }
            keep
        });

        for (id, sub) in new_ids {
            if !self.active.contains_key(&id) {
                tracing::trace!(?id, "starting subscription");
                let handle = (sub.spawn)(self.msg_tx.clone());
                self.active.insert(id, handle);
            }
        }
    }

    /// Abort all active subscriptions.
    pub fn shutdown(&mut self) {
        for (_, handle) in self.active.drain() {
            handle.abort();
        }
    }

    #[cfg(test)]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pending(u64);

    impl SubscriptionSource for Pending {
        type Output = i32;

        fn id(&self) -> SubscriptionId {
            SubscriptionId::new::<Self>(self.0)
        }

        fn stream(self) -> BoxStream<'static, i32> {
            Box::pin(futures::stream::pending())
        }
    }

    #[test]
    fn subscription_id_equality() {
        assert_eq!(SubscriptionId::of::<String>(), SubscriptionId::of::<String>());
        assert_ne!(SubscriptionId::of::<String>(), SubscriptionId::of::<i32>());
    }

    #[test]
    fn subscription_id_with_str() {
        let id1 = SubscriptionId::with_str::<String>("users-search-1");
        let id2 = SubscriptionId::with_str::<String>("users-search-2");
        assert_ne!(id1, id2);
        assert_eq!(id1, SubscriptionId::with_str::<String>("users-search-1"));
    }

    #[tokio::test]
    async fn manager_starts_and_stops() {
        let (tx, _rx) = mpsc::unbounded_channel::<i32>();
        let mut manager = SubscriptionManager::new(tx);

        manager.reconcile(vec![subscribe(Pending(1))]);
        assert_eq!(manager.active_count(), 1);

        manager.reconcile(vec![]);
        assert_eq!(manager.active_count(), 0);
    }

    #[tokio::test]
    async fn manager_replaces_changed_id() {
        let (tx, _rx) = mpsc::unbounded_channel::<i32>();
        let mut manager = SubscriptionManager::new(tx);

        manager.reconcile(vec![subscribe(Pending(1))]);
        manager.reconcile(vec![subscribe(Pending(2))]);
        assert_eq!(manager.active_count(), 1);
        assert!(manager.active.contains_key(&SubscriptionId::new::<Pending>(2)));
    }

    #[tokio::test]
    async fn manager_keeps_existing() {
        let (tx, _rx) = mpsc::unbounded_channel::<i32>();
        let mut manager = SubscriptionManager::new(tx);

        manager.reconcile(vec![subscribe(Pending(7))]);
        manager.reconcile(vec![subscribe(Pending(7))]);
        assert_eq!(manager.active_count(), 1);
    }

    #[tokio::test]
    async fn manager_shutdown() {
        let (tx, _rx) = mpsc::unbounded_channel::<i32>();
        let mut manager = SubscriptionManager::new(tx);

        manager.reconcile(vec![subscribe(Pending(1)), subscribe(Pending(2))]);
        assert_eq!(manager.active_count(), 2);

        manager.shutdown();
        assert_eq!(manager.active_count(), 0);
    }
}
