//! One collection's column.
//!
//! A [`Pane`] owns everything a single list needs: its [`ListStore`], the
//! search box and its [`Debouncer`], the [`InfiniteScroll`] trigger, the scroll
//! position and a spinner. Pages come from a [`RequestCache`] shared with the
//! other pane. Each pane remembers the params of its outstanding request and
//! ignores any response that does not match them.
//!
//! The visible window is cached. It is recomputed only when the store's
//! revision moves or the list is scrolled or resized.

use std::time::{Duration, Instant};

use duolist_api::{FetchError, FetchedPage, RequestCache};
use duolist_core::{subscribe, After, Command, Component, Subscription};
use duolist_state::{
    clamp_offset, Debouncer, InfiniteScroll, ListAction, ListState, ListStore, Record, RecordKind,
    SearchParams, VirtualWindow, WindowConfig,
};
use duolist_widgets::search_box::{self, SearchBox};
use duolist_widgets::spinner::{self, Spinner};
use duolist_widgets::{ListPanel, VirtualListState};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;
use tokio::sync::watch;

use crate::config::Config;

/// Rows a pane spends on its border, search box and counter.
pub const CHROME_ROWS: u16 = 6;

/// Height of the list body inside a pane of `height` rows.
pub fn body_rows(height: u16) -> u16 {
    height.saturating_sub(CHROME_ROWS)
}

/// Per-pane tuning, taken from [`Config`].
#[derive(Debug, Clone)]
pub struct PaneSettings {
    pub page_size: u32,
    pub search_debounce: Duration,
    pub scroll_threshold: u32,
    pub load_more_cooldown: Duration,
    pub window: WindowConfig,
    pub comment_max_len: usize,
    pub escape_clears: bool,
}

impl From<&Config> for PaneSettings {
    fn from(config: &Config) -> Self {
        Self {
            page_size: config.api.page_size,
            search_debounce: config.list.search_debounce,
            scroll_threshold: config.list.scroll_threshold,
            load_more_cooldown: config.list.load_more_cooldown,
            window: config.list.window(),
            comment_max_len: config.list.comment_max_len,
            escape_clears: config.list.escape_clears,
        }
    }
}

impl Default for PaneSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

#[derive(Debug)]
pub enum Message {
    Search(search_box::Message),
    /// The debounce timer of the given generation ran out.
    SearchSettled(u64),
    Fetched {
        params: SearchParams,
        result: Result<FetchedPage, FetchError>,
    },
    ScrollBy(i64),
    PageUp,
    PageDown,
    Top,
    Bottom,
    /// Move the selection by this many cards.
    Select(isize),
    ToggleDetail,
    Retry,
    /// The pane is now this many rows tall.
    Resize(u16),
    Spinner(spinner::Message),
}

pub struct Pane {
    kind: RecordKind,
    settings: PaneSettings,
    store: ListStore,
    changes: watch::Receiver<u64>,
    window: VirtualWindow,
    /// Revision, offset and viewport the cached window was computed for.
    window_key: Option<(u64, u32, u32)>,
    search: SearchBox,
    debounce: Debouncer<String>,
    trigger: InfiniteScroll,
    list: VirtualListState,
    spinner: Spinner,
    cache: RequestCache,
    pending: Option<SearchParams>,
    last_params: SearchParams,
    detail: bool,
    focused: bool,
}

impl Pane {
    pub fn new(kind: RecordKind, settings: PaneSettings, cache: RequestCache) -> Self {
        let search = SearchBox::new()
            .with_placeholder(format!("Search {}...", kind.plural()))
            .with_escape_clears(settings.escape_clears);
        let spinner_id = match kind {
            RecordKind::User => "users-spinner",
            RecordKind::Reviewer => "reviewers-spinner",
        };
        let store = ListStore::default();
        Self {
            kind,
            changes: store.subscribe(),
            store,
            window: VirtualWindow::default(),
            window_key: None,
            search,
            debounce: Debouncer::new(settings.search_debounce),
            trigger: InfiniteScroll::new(settings.scroll_threshold, settings.load_more_cooldown),
            list: VirtualListState::new(),
            spinner: Spinner::new(spinner_id),
            cache,
            pending: None,
            last_params: SearchParams::new(1, settings.page_size, ""),
            detail: false,
            focused: false,
            settings,
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn state(&self) -> &ListState {
        self.store.state()
    }

    pub fn store(&self) -> &ListStore {
        &self.store
    }

    pub fn list(&self) -> &VirtualListState {
        &self.list
    }

    /// The window drawn on the next frame.
    pub fn window(&self) -> &VirtualWindow {
        &self.window
    }

    /// Store revision the cached window reflects.
    pub fn window_revision(&self) -> Option<u64> {
        self.window_key.map(|(revision, _, _)| revision)
    }

    pub fn search_box(&self) -> &SearchBox {
        &self.search
    }

    /// Whether keystrokes currently go to the search box.
    pub fn is_editing(&self) -> bool {
        self.search.focused()
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.search.blur();
        }
    }

    /// Params of the request whose response the pane is waiting for.
    pub fn pending(&self) -> Option<&SearchParams> {
        self.pending.as_ref()
    }

    /// Generation of the search still waiting for its debounce timer.
    pub fn pending_search(&self) -> Option<u64> {
        self.debounce
            .is_pending()
            .then(|| self.debounce.generation())
    }

    /// The record shown in the detail overlay, if it is open.
    pub fn detail(&self) -> Option<&Record> {
        if !self.detail {
            return None;
        }
        self.list.selected().and_then(|index| self.state().items.get(index))
    }

    /// Size the list body for a pane of `height` rows.
    pub fn set_height(&mut self, height: u16) {
        self.list.set_viewport(u32::from(body_rows(height)));
        let (items, total) = (self.state().items.len(), self.total_size());
        self.list.clamp(items, total);
        self.refresh_window();
    }

    /// Request the first page of the current query.
    pub fn load(&mut self) -> Command<Message> {
        let params = SearchParams::new(1, self.settings.page_size, self.state().search_query.clone());
        let cmd = self.request(params);
        self.refresh_window();
        cmd
    }

    /// "Shown N users", plus the active query.
    pub fn counter(&self) -> String {
        let state = self.state();
        if state.is_searching() {
            format!(
                "Shown {} {} for \"{}\"",
                state.items.len(),
                self.kind.plural(),
                state.search_query
            )
        } else {
            format!("Shown {} {}", state.items.len(), self.kind.plural())
        }
    }

    fn request(&mut self, params: SearchParams) -> Command<Message> {
        self.store
            .dispatch_all([ListAction::SetError(None), ListAction::SetLoading(true)]);
        self.spinner.start();
        self.sync_indicator();
        self.pending = Some(params.clone());
        self.last_params = params.clone();
        let fetch = self.cache.fetch(self.kind, params.clone());
        Command::perform(fetch, move |result| Message::Fetched { params, result })
    }

    fn load_more(&mut self) -> Command<Message> {
        if !self.state().can_load_more() {
            return Command::none();
        }
        self.store.dispatch(ListAction::IncrementPage);
        let state = self.state();
        let params = SearchParams::new(state.page, self.settings.page_size, state.search_query.clone());
        tracing::debug!(kind = %self.kind, page = params.page(), "loading next page");
        self.request(params)
    }

    fn apply_search(&mut self, query: String) -> Command<Message> {
        if query == self.state().search_query {
            return Command::none();
        }
        tracing::debug!(kind = %self.kind, %query, "search settled");
        self.store.dispatch(ListAction::SetSearchQuery(query));
        self.list.reset();
        self.trigger.reset();
        self.detail = false;
        self.load()
    }

    fn on_fetched(
        &mut self,
        params: SearchParams,
        result: Result<FetchedPage, FetchError>,
    ) -> Command<Message> {
        if self.pending.as_ref() != Some(&params) {
            tracing::debug!(
                kind = %self.kind,
                page = params.page(),
                search = params.search_value().unwrap_or_default(),
                "dropping stale response"
            );
            return Command::none();
        }
        self.pending = None;
        self.spinner.stop();
        self.trigger.on_loading_changed(false);

        match result {
            Ok(page) => {
                let has_more = page.has_more(&params);
                tracing::debug!(
                    kind = %self.kind,
                    page = params.page(),
                    records = page.records.len(),
                    has_more,
                    "page loaded"
                );
                self.store.dispatch_all([
                    ListAction::AddItems(page.records),
                    ListAction::SetHasMore(has_more),
                    ListAction::SetError(None),
                    ListAction::SetLoading(false),
                ]);
                let (items, total) = (self.state().items.len(), self.total_size());
                self.list.clamp(items, total);
                // A short page may not fill the viewport; keep loading.
                self.check_scroll()
            }
            Err(error) => {
                tracing::warn!(kind = %self.kind, page = params.page(), %error, "fetch failed");
                let message = format!("Failed to load {}", self.kind.plural());
                self.store.dispatch_all([
                    ListAction::SetError(Some(message)),
                    ListAction::SetLoading(false),
                ]);
                Command::none()
            }
        }
    }

    fn retry(&mut self) -> Command<Message> {
        if self.state().error.is_none() || self.pending.is_some() {
            return Command::none();
        }
        let params = self.last_params.clone();
        tracing::info!(kind = %self.kind, page = params.page(), "retrying");
        self.cache.invalidate(self.kind, &params);
        self.request(params)
    }

    fn total_size(&self) -> u32 {
        let state = self.state();
        self.settings
            .window
            .total_size(state.items.len() + usize::from(state.has_more))
    }

    /// Feed the current scroll position to the load-more trigger.
    fn check_scroll(&mut self) -> Command<Message> {
        let metrics = self.list.metrics(self.total_size());
        let state = self.store.state();
        if self
            .trigger
            .on_scroll(metrics, state.has_more, state.is_loading, Instant::now())
        {
            self.load_more()
        } else {
            Command::none()
        }
    }

    fn scroll_by(&mut self, delta: i64) -> Command<Message> {
        let total = self.total_size();
        self.list.scroll_by(delta, total);
        self.check_scroll()
    }

    fn handle(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Search(search_box::Message::Changed(value)) => {
                let ticket = self.debounce.push(value, Instant::now());
                tracing::trace!(kind = %self.kind, generation = ticket.generation, "search debounce restarted");
                Command::none()
            }
            Message::Search(msg) => self.search.update(msg).map(Message::Search),
            Message::SearchSettled(generation) => match self.debounce.fire(generation) {
                Some(query) => self.apply_search(query),
                None => Command::none(),
            },
            Message::Fetched { params, result } => self.on_fetched(params, result),
            Message::ScrollBy(delta) => self.scroll_by(delta),
            Message::PageUp => self.scroll_by(-i64::from(self.list.viewport())),
            Message::PageDown => self.scroll_by(i64::from(self.list.viewport())),
            Message::Top => {
                self.list.scroll_to_top();
                self.check_scroll()
            }
            Message::Bottom => {
                let total = self.total_size();
                self.list.scroll_to_bottom(total);
                self.check_scroll()
            }
            Message::Select(delta) => {
                let (items, total) = (self.state().items.len(), self.total_size());
                self.list
                    .move_selection(delta, items, &self.settings.window, total);
                self.check_scroll()
            }
            Message::ToggleDetail => {
                if self.detail {
                    self.detail = false;
                } else {
                    let items = self.state().items.len();
                    self.detail = self.list.selected().is_some_and(|index| index < items);
                }
                Command::none()
            }
            Message::Retry => self.retry(),
            Message::Resize(height) => {
                self.set_height(height);
                self.check_scroll()
            }
            Message::Spinner(msg) => self.spinner.update(msg).map(Message::Spinner),
        }
    }

    /// Recompute the cached window if the store changed since the last
    /// computation or the list moved.
    fn refresh_window(&mut self) {
        let viewport = self.list.viewport();
        let offset = clamp_offset(self.list.offset(), self.total_size(), viewport);
        let changed = self.changes.has_changed().unwrap_or(true);
        let moved = self.window_key.map(|(_, o, v)| (o, v)) != Some((offset, viewport));
        if !changed && !moved {
            return;
        }
        let revision = *self.changes.borrow_and_update();
        let state = self.store.state();
        self.window = VirtualWindow::compute(
            state.items.len(),
            state.has_more,
            &self.settings.window,
            viewport,
            offset,
        );
        self.window_key = Some((revision, offset, viewport));
    }

    /// Spin inside the search box while the first page of a query loads.
    fn sync_indicator(&mut self) {
        let state = self.store.state();
        let glyph = (state.is_loading && state.page == 1).then(|| self.spinner.glyph());
        self.search.set_indicator(glyph);
    }
}

impl Component for Pane {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        let cmd = self.handle(msg);
        self.sync_indicator();
        self.refresh_window();
        cmd
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let border = if self.focused {
            Style::default().fg(Color::Blue)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Line::from(format!(" {} ", self.kind.title())).bold());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [search_area, counter_area, body] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

        self.search.view(frame, search_area);
        frame.render_widget(
            Paragraph::new(self.counter()).style(Style::default().fg(Color::Gray)),
            counter_area,
        );
        let prepared = (u32::from(body.height) == self.list.viewport()).then_some(&self.window);
        frame.render_widget(
            ListPanel::new(
                self.state(),
                self.kind,
                &self.settings.window,
                &self.list,
                &self.spinner,
            )
            .window(prepared)
            .comment_max_len(self.settings.comment_max_len)
            .focused(self.focused),
            body,
        );
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        let mut subs: Vec<_> = self
            .spinner
            .subscriptions()
            .into_iter()
            .map(|sub| sub.map(Message::Spinner))
            .collect();
        if self.debounce.is_pending() {
            let generation = self.debounce.generation();
            let key = format!("{}-search-{generation}", self.kind);
            subs.push(
                subscribe(After::new(self.debounce.delay(), key))
                    .map(move |_: Instant| Message::SearchSettled(generation)),
            );
        }
        subs
    }

    fn focused(&self) -> bool {
        self.focused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duolist_api::RecordSource;
    use duolist_core::testing::TestProgram;
    use duolist_core::Model;
    use duolist_state::RecordId;
    use futures::future::{BoxFuture, FutureExt};
    use std::sync::Arc;

    /// Requests never complete; tests deliver responses by hand.
    struct Silent;

    impl RecordSource for Silent {
        fn fetch_page(
            &self,
            _: RecordKind,
            _: &SearchParams,
        ) -> BoxFuture<'static, Result<FetchedPage, FetchError>> {
            futures::future::pending().boxed()
        }
    }

    fn pane() -> Pane {
        let cache = RequestCache::new(Arc::new(Silent), Duration::from_secs(60));
        let mut pane = Pane::new(RecordKind::User, PaneSettings::default(), cache);
        pane.set_height(40);
        pane
    }

    fn records(range: std::ops::Range<u64>) -> Vec<Record> {
        range
            .map(|id| Record {
                id: RecordId::Number(id),
                first_name: format!("First{id}"),
                last_name: "Last".into(),
                email: format!("u{id}@example.com"),
                tagline: String::new(),
                comment: String::new(),
            })
            .collect()
    }

    fn page(records: Vec<Record>) -> FetchedPage {
        FetchedPage {
            returned: records.len(),
            records,
            total_count: None,
        }
    }

    fn deliver(pane: &mut Pane, result: Result<FetchedPage, FetchError>) -> Command<Message> {
        let params = pane.pending().cloned().unwrap();
        pane.update(Message::Fetched { params, result })
    }

    fn settle_search(pane: &mut Pane, text: &str) -> Command<Message> {
        pane.update(Message::Search(search_box::Message::Changed(text.into())));
        let generation = pane.debounce.generation();
        pane.update(Message::SearchSettled(generation))
    }

    #[test]
    fn load_marks_loading_and_spins_in_search_box() {
        let mut pane = pane();
        let cmd = pane.load();
        assert_eq!(cmd.pending_futures(), 1);
        assert!(pane.state().is_loading);
        assert_eq!(pane.pending(), Some(&SearchParams::new(1, 50, "")));
        assert!(pane.search_box().indicator().is_some());
    }

    #[test]
    fn full_page_keeps_more_and_partial_page_ends() {
        let mut pane = pane();
        let _ = pane.load();
        let _ = deliver(&mut pane, Ok(page(records(0..50))));
        assert_eq!(pane.state().items.len(), 50);
        assert!(pane.state().has_more);
        assert!(!pane.state().is_loading);
        assert!(pane.search_box().indicator().is_none());

        let cmd = pane.update(Message::Bottom);
        assert_eq!(cmd.pending_futures(), 1);
        assert_eq!(pane.state().page, 2);
        // Page 2 loads below the list, not in the search box.
        assert!(pane.search_box().indicator().is_none());

        let _ = deliver(&mut pane, Ok(page(records(50..62))));
        assert_eq!(pane.state().items.len(), 62);
        assert!(!pane.state().has_more);
        assert_eq!(pane.counter(), "Shown 62 users");
    }

    #[test]
    fn scrolling_while_loading_does_not_fetch_twice() {
        let mut pane = pane();
        let _ = pane.load();
        let _ = deliver(&mut pane, Ok(page(records(0..50))));
        assert_eq!(pane.update(Message::Bottom).pending_futures(), 1);
        assert_eq!(pane.update(Message::ScrollBy(-1)).pending_futures(), 0);
        assert_eq!(pane.update(Message::Bottom).pending_futures(), 0);
        assert_eq!(pane.state().page, 2);
    }

    #[test]
    fn only_the_latest_keystroke_searches() {
        let mut pane = pane();
        let _ = pane.load();
        pane.update(Message::Search(search_box::Message::Changed("ja".into())));
        let stale = pane.debounce.generation();
        pane.update(Message::Search(search_box::Message::Changed("jane".into())));
        assert_eq!(pane.subscriptions().len(), 2);

        assert!(pane.update(Message::SearchSettled(stale)).is_none());
        let cmd = pane.update(Message::SearchSettled(stale + 1));
        assert_eq!(cmd.pending_futures(), 1);
        assert_eq!(pane.state().search_query, "jane");
        assert_eq!(pane.pending(), Some(&SearchParams::new(1, 50, "jane")));
        assert_eq!(pane.counter(), "Shown 0 users for \"jane\"");
    }

    #[test]
    fn unchanged_query_is_not_refetched() {
        let mut pane = pane();
        let _ = pane.load();
        let _ = deliver(&mut pane, Ok(page(records(0..3))));
        assert!(settle_search(&mut pane, "").is_none());
    }

    #[test]
    fn response_for_an_older_search_is_dropped() {
        let mut pane = pane();
        let _ = pane.load();
        let first = pane.pending().cloned().unwrap();
        let _ = settle_search(&mut pane, "jane");

        pane.update(Message::Fetched {
            params: first,
            result: Ok(page(records(0..50))),
        });
        assert!(pane.state().items.is_empty());
        assert!(pane.state().is_loading);

        let _ = deliver(&mut pane, Ok(page(records(7..8))));
        assert_eq!(pane.state().items.len(), 1);
        assert!(pane.pending().is_none());
    }

    #[test]
    fn failure_sets_collection_message_and_retry_reissues() {
        let mut pane = pane();
        let _ = pane.load();
        let _ = deliver(&mut pane, Err(FetchError::InvalidBaseUrl("x".into())));
        assert_eq!(pane.state().error.as_deref(), Some("Failed to load users"));
        assert!(!pane.state().is_loading);

        // Scrolling cannot load past an error.
        assert!(pane.update(Message::Bottom).is_none());

        let cmd = pane.update(Message::Retry);
        assert_eq!(cmd.pending_futures(), 1);
        assert!(pane.state().error.is_none());
        assert_eq!(pane.pending(), Some(&SearchParams::new(1, 50, "")));
    }

    #[test]
    fn retry_without_error_is_a_no_op() {
        let mut pane = pane();
        let _ = pane.load();
        assert!(pane.update(Message::Retry).is_none());
    }

    #[test]
    fn detail_needs_a_selection() {
        let mut pane = pane();
        let _ = pane.load();
        let _ = deliver(&mut pane, Ok(page(records(0..5))));
        pane.update(Message::ToggleDetail);
        assert!(pane.detail().is_none());

        pane.update(Message::Select(1));
        pane.update(Message::Select(1));
        pane.update(Message::ToggleDetail);
        assert_eq!(pane.detail().map(|r| r.first_name.as_str()), Some("First1"));

        pane.update(Message::ToggleDetail);
        assert!(pane.detail().is_none());
    }

    #[test]
    fn short_page_with_more_keeps_loading() {
        let mut pane = pane();
        let _ = pane.load();
        let short = FetchedPage {
            records: records(0..2),
            returned: 50,
            total_count: Some(500),
        };
        // Two cards leave the viewport mostly empty.
        let cmd = deliver(&mut pane, Ok(short));
        assert_eq!(cmd.pending_futures(), 1);
        assert_eq!(pane.state().page, 2);
    }

    #[test]
    fn store_changes_refresh_the_cached_window() {
        let mut pane = pane();
        let _ = pane.load();
        assert_eq!(pane.window().count, 1);
        assert_eq!(pane.window_revision(), Some(pane.store().revision()));

        let _ = deliver(&mut pane, Ok(page(records(0..50))));
        assert_eq!(pane.window().count, 51);
        let seen = pane.window_revision();
        assert_eq!(seen, Some(pane.store().revision()));

        // Nothing dispatched: the cached window stays.
        pane.update(Message::ToggleDetail);
        assert_eq!(pane.window_revision(), seen);

        // Scrolling moves the window without a new revision.
        pane.update(Message::ScrollBy(27));
        assert_eq!(pane.window().visible.start, 3);
        assert_eq!(pane.window_revision(), seen);

        let _ = pane.update(Message::Bottom);
        let _ = deliver(&mut pane, Ok(page(records(50..62))));
        assert_eq!(pane.window().count, 62);
        assert!(pane.window_revision() > seen);
        assert_eq!(pane.window_revision(), Some(pane.store().revision()));
    }

    /// Answers every request at once with three records.
    #[derive(Default)]
    struct Immediate {
        requests: std::sync::Mutex<Vec<SearchParams>>,
    }

    impl RecordSource for Immediate {
        fn fetch_page(
            &self,
            _: RecordKind,
            params: &SearchParams,
        ) -> BoxFuture<'static, Result<FetchedPage, FetchError>> {
            self.requests.lock().unwrap().push(params.clone());
            futures::future::ready(Ok(page(records(0..3)))).boxed()
        }
    }

    /// A lone pane run as a whole program.
    struct Solo(Pane);

    impl Model for Solo {
        type Message = Message;
        type Flags = Arc<Immediate>;

        fn init(source: Arc<Immediate>) -> (Self, Command<Message>) {
            let cache = RequestCache::new(source, Duration::from_secs(60));
            let mut pane = Pane::new(RecordKind::User, PaneSettings::default(), cache);
            pane.set_height(40);
            let cmd = pane.load();
            (Solo(pane), cmd)
        }

        fn update(&mut self, msg: Message) -> Command<Message> {
            self.0.update(msg)
        }

        fn view(&self, frame: &mut Frame) {
            self.0.view(frame, frame.area());
        }

        fn subscriptions(&self) -> Vec<Subscription<Message>> {
            self.0.subscriptions()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn keystroke_burst_searches_once_after_quiet_period() {
        let source = Arc::new(Immediate::default());
        let mut prog = TestProgram::<Solo>::new(Arc::clone(&source));
        prog.settle().await;
        prog.run_subscriptions();

        let burst = ["j", "ja", "jan", "jane"];
        for (i, text) in burst.into_iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
            prog.send(Message::Search(search_box::Message::Changed(text.into())));
        }
        let last_keystroke = tokio::time::Instant::now();
        assert_eq!(prog.model().0.state().search_query, "");

        assert!(prog.next_subscription_message().await);
        assert!(last_keystroke.elapsed() >= Duration::from_millis(400));
        assert_eq!(prog.model().0.state().search_query, "jane");
        assert!(prog.model().0.pending_search().is_none());
        assert_eq!(
            *source.requests.lock().unwrap(),
            vec![SearchParams::new(1, 50, ""), SearchParams::new(1, 50, "jane")]
        );
    }

    #[test]
    fn body_rows_subtract_chrome() {
        assert_eq!(body_rows(40), 34);
        assert_eq!(body_rows(3), 0);
    }
}
