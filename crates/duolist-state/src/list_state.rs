use crate::record::Record;
use tokio::sync::watch;

/// Per-collection list state.
///
/// Only [`ListState::reduce`] produces new states, so the invariants below
/// hold after every transition:
///
/// - `page >= 1`
/// - a search change resets `page` to 1, clears `items` and sets `has_more`
/// - items added while `page == 1` replace the list, later pages append
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub items: Vec<Record>,
    pub search_query: String,
    pub page: u32,
    pub has_more: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            page: 1,
            has_more: true,
            is_loading: false,
            error: None,
        }
    }
}

/// Transitions accepted by [`ListState::reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    /// New search text. Resets paging and clears the list.
    SetSearchQuery(String),
    /// Advance to the next page. Callers only do this when `has_more` and not
    /// loading; the reducer does not check.
    IncrementPage,
    /// A page of records: replaces the list on page 1, appends otherwise.
    AddItems(Vec<Record>),
    SetHasMore(bool),
    SetLoading(bool),
    SetError(Option<String>),
}

impl ListState {
    /// Apply one action and return the next state.
    pub fn reduce(mut self, action: ListAction) -> ListState {
        match action {
            ListAction::SetSearchQuery(query) => {
                self.search_query = query;
                self.page = 1;
                self.items.clear();
                self.has_more = true;
            }
            ListAction::IncrementPage => {
                self.page = self.page.saturating_add(1);
            }
            ListAction::AddItems(records) => {
                if self.page == 1 {
                    self.items = records;
                } else {
                    self.items.extend(records);
                }
            }
            ListAction::SetHasMore(has_more) => self.has_more = has_more,
            ListAction::SetLoading(is_loading) => self.is_loading = is_loading,
            ListAction::SetError(error) => self.error = error,
        }
        self
    }

    /// Whether the next page may be requested right now.
    pub fn can_load_more(&self) -> bool {
        self.has_more && !self.is_loading && self.error.is_none()
    }

    /// Whether the current search is non-empty.
    pub fn is_searching(&self) -> bool {
        !self.search_query.is_empty()
    }
}

/// Owns one [`ListState`] and notifies observers after every dispatch.
///
/// Observers get a [`watch::Receiver`] carrying the store's revision, which
/// increases by one per dispatched action. Panes compare revisions to
/// decide whether the visible window needs recomputing.
#[derive(Debug)]
pub struct ListStore {
    state: ListState,
    revision: watch::Sender<u64>,
}

impl Default for ListStore {
    fn default() -> Self {
        Self::new(ListState::default())
    }
}

impl ListStore {
    pub fn new(state: ListState) -> Self {
        let (revision, _) = watch::channel(0);
        Self { state, revision }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Apply `action` and bump the revision.
    pub fn dispatch(&mut self, action: ListAction) {
        tracing::trace!(?action, "list action");
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
        self.revision.send_modify(|rev| *rev += 1);
    }

    /// Apply several actions in order.
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = ListAction>) {
        for action in actions {
            self.dispatch(action);
        }
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}
