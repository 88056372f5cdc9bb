use crate::error::FetchError;
use crate::source::{FetchedPage, RecordSource};
use duolist_state::{RecordKind, SearchParams};
use futures::future::{BoxFuture, FutureExt, Shared};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

/// How long a successful page is served without asking the server again.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

type FetchResult = Result<FetchedPage, FetchError>;
type SharedFetch = Shared<BoxFuture<'static, FetchResult>>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RequestKey {
    kind: RecordKind,
    params: SearchParams,
}

enum Entry {
    InFlight(SharedFetch),
    Ready { page: FetchedPage, at: Instant },
}

/// De-duplicates page requests by `(kind, params)`.
///
/// - A request identical to one still in flight joins it instead of hitting
///   the server again.
/// - A successful page is reused while younger than the ttl.
/// - Failures are never kept, so the next identical request goes out again.
///
/// Cloning is cheap; clones share one cache.
#[derive(Clone)]
pub struct RequestCache {
    source: Arc<dyn RecordSource>,
    ttl: Duration,
    entries: Arc<Mutex<HashMap<RequestKey, Entry>>>,
}

impl std::fmt::Debug for RequestCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestCache")
            .field("ttl", &self.ttl)
            .field("entries", &lock(&self.entries).len())
            .finish()
    }
}

impl RequestCache {
    pub fn new(source: Arc<dyn RecordSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            entries: Arc::default(),
        }
    }

    /// Fetch a page, reusing an in-flight or fresh result for the same key.
    pub fn fetch(&self, kind: RecordKind, params: SearchParams) -> BoxFuture<'static, FetchResult> {
        let key = RequestKey { kind, params };
        let mut entries = lock(&self.entries);

        match entries.get(&key) {
            Some(Entry::Ready { page, at }) if at.elapsed() < self.ttl => {
                tracing::debug!(%kind, page = key.params.page(), "serving cached page");
                let page = page.clone();
                return async move { Ok(page) }.boxed();
            }
            Some(Entry::InFlight(shared)) => {
                tracing::debug!(%kind, page = key.params.page(), "joining in-flight request");
                let shared = shared.clone();
                return self.settle(key, shared);
            }
            _ => {}
        }

        let ttl = self.ttl;
        entries.retain(|_, entry| match entry {
            Entry::Ready { at, .. } => at.elapsed() < ttl,
            Entry::InFlight(_) => true,
        });

        tracing::info!(
            %kind,
            page = key.params.page(),
            limit = key.params.limit(),
            search = key.params.search_value().unwrap_or_default(),
            "requesting page"
        );
        let shared = self.source.fetch_page(kind, &key.params).shared();
        entries.insert(key.clone(), Entry::InFlight(shared.clone()));
        drop(entries);
        self.settle(key, shared)
    }

    /// Forget whatever is stored for this key, so the next fetch goes to the
    /// server.
    pub fn invalidate(&self, kind: RecordKind, params: &SearchParams) {
        let key = RequestKey {
            kind,
            params: params.clone(),
        };
        if lock(&self.entries).remove(&key).is_some() {
            tracing::debug!(%kind, page = params.page(), "invalidated cache entry");
        }
    }

    /// Await `shared` and record its outcome, unless the entry was replaced
    /// or invalidated meanwhile.
    fn settle(&self, key: RequestKey, shared: SharedFetch) -> BoxFuture<'static, FetchResult> {
        let entries = Arc::clone(&self.entries);
        async move {
            let result = shared.clone().await;
            let mut entries = lock(&entries);
            let ours = matches!(entries.get(&key), Some(Entry::InFlight(current)) if current.ptr_eq(&shared));
            if ours {
                match &result {
                    Ok(page) => {
                        entries.insert(
                            key,
                            Entry::Ready {
                                page: page.clone(),
                                at: Instant::now(),
                            },
                        );
                    }
                    Err(err) => {
                        tracing::warn!(kind = %key.kind, page = key.params.page(), %err, "fetch failed");
                        entries.remove(&key);
                    }
                }
            }
            result
        }
        .boxed()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
