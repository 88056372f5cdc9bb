//! End-to-end flows through the headless harness against an in-memory
//! backend.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use duolist::pane;
use duolist::{App, Flags, Msg, PaneSettings};
use duolist_api::{FetchError, FetchedPage, RecordSource};
use duolist_core::testing::TestProgram;
use duolist_state::{EmptyReason, ListView, Record, RecordKind, SearchParams};
use futures::future::{BoxFuture, FutureExt};
use serde_json::json;

/// json-server lookalike: substring search over names and email, paging by
/// `_page`/`_limit`, optional total count.
struct Directory {
    users: Vec<Record>,
    reviewers: Vec<Record>,
    report_total: bool,
    failing: Mutex<HashSet<RecordKind>>,
    requests: Mutex<Vec<(RecordKind, SearchParams)>>,
}

impl Directory {
    fn new(users: usize, reviewers: usize) -> Arc<Self> {
        Arc::new(Self {
            users: people("User", users),
            reviewers: people("Reviewer", reviewers),
            report_total: false,
            failing: Mutex::default(),
            requests: Mutex::default(),
        })
    }

    fn fail(&self, kind: RecordKind, failing: bool) {
        let mut set = self.failing.lock().unwrap();
        if failing {
            set.insert(kind);
        } else {
            set.remove(&kind);
        }
    }

    fn requests(&self, kind: RecordKind) -> Vec<SearchParams> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, params)| params.clone())
            .collect()
    }
}

impl RecordSource for Directory {
    fn fetch_page(
        &self,
        kind: RecordKind,
        params: &SearchParams,
    ) -> BoxFuture<'static, Result<FetchedPage, FetchError>> {
        self.requests.lock().unwrap().push((kind, params.clone()));
        if self.failing.lock().unwrap().contains(&kind) {
            let err = serde_json::from_str::<Vec<Record>>("<html>").unwrap_err();
            return futures::future::ready(Err(FetchError::from(err))).boxed();
        }

        let all = match kind {
            RecordKind::User => &self.users,
            RecordKind::Reviewer => &self.reviewers,
        };
        let matching: Vec<&Record> = match params.search_value() {
            Some(q) => {
                let q = q.to_lowercase();
                all.iter()
                    .filter(|r| {
                        r.first_name.to_lowercase().contains(&q)
                            || r.last_name.to_lowercase().contains(&q)
                            || r.email.to_lowercase().contains(&q)
                    })
                    .collect()
            }
            None => all.iter().collect(),
        };
        let records: Vec<Record> = matching
            .iter()
            .skip(params.offset() as usize)
            .take(params.limit() as usize)
            .map(|r| (*r).clone())
            .collect();
        let page = FetchedPage {
            returned: records.len(),
            records,
            total_count: self.report_total.then_some(matching.len() as u64),
        };
        futures::future::ready(Ok(page)).boxed()
    }
}

fn people(prefix: &str, count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let (first, last) = if i == 7 {
                ("Jane".to_string(), "Doe".to_string())
            } else {
                (format!("{prefix}{i}"), "Smith".to_string())
            };
            serde_json::from_value(json!({
                "id": i,
                "firstName": first,
                "lastName": last,
                "email": format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
                "catchPhrase": "Synergized regional paradigm",
                "comments": format!("Comment number {i} with enough words to need a second line on a narrow card."),
            }))
            .unwrap()
        })
        .collect()
}

fn program(directory: &Arc<Directory>) -> TestProgram<App> {
    TestProgram::new(Flags {
        settings: PaneSettings::default(),
        source: directory.clone(),
        cache_ttl: Duration::from_secs(60),
        size: (120, 40),
    })
}

fn key(code: KeyCode) -> Msg {
    Msg::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Type into the focused pane's search box and leave it.
fn type_search(prog: &mut TestProgram<App>, text: &str) {
    prog.send(key(KeyCode::Char('/')));
    for c in text.chars() {
        prog.send(key(KeyCode::Char(c)));
    }
    prog.send(key(KeyCode::Enter));
    prog.drain_messages();
}

/// Fire the debounce timer the runtime would have fired, then let the fetch
/// complete.
async fn settle_search(prog: &mut TestProgram<App>, kind: RecordKind) {
    let generation = prog
        .model()
        .pane(kind)
        .pending_search()
        .expect("a search is waiting for its timer");
    prog.send(Msg::Pane(kind, pane::Message::SearchSettled(generation)));
    prog.settle().await;
}

#[tokio::test]
async fn pages_load_until_the_collection_is_exhausted() {
    let directory = Directory::new(62, 3);
    let mut prog = program(&directory);
    prog.settle().await;

    let users = prog.model().pane(RecordKind::User);
    assert_eq!(users.state().items.len(), 50);
    assert!(users.state().has_more);
    let reviewers = prog.model().pane(RecordKind::Reviewer);
    assert_eq!(reviewers.state().items.len(), 3);
    assert!(!reviewers.state().has_more);

    let screen = prog.render_string(120, 40);
    assert!(screen.contains("Shown 50 users"));
    assert!(screen.contains("Shown 3 reviewers"));

    prog.send(key(KeyCode::End));
    prog.settle().await;

    let users = prog.model().pane(RecordKind::User);
    assert_eq!(users.state().items.len(), 62);
    assert_eq!(users.state().page, 2);
    assert!(!users.state().has_more);
    assert_eq!(
        directory.requests(RecordKind::User),
        vec![SearchParams::new(1, 50, ""), SearchParams::new(2, 50, "")]
    );
    assert!(prog.render_string(120, 40).contains("Shown 62 users"));

    // Nothing more to load.
    prog.send(key(KeyCode::End));
    prog.settle().await;
    assert_eq!(directory.requests(RecordKind::User).len(), 2);
}

#[tokio::test]
async fn total_count_ends_paging_on_a_full_last_page() {
    let directory = Arc::new(Directory {
        report_total: true,
        ..Arc::into_inner(Directory::new(50, 0)).unwrap()
    });
    let mut prog = program(&directory);
    prog.settle().await;

    let users = prog.model().pane(RecordKind::User);
    assert_eq!(users.state().items.len(), 50);
    assert!(!users.state().has_more);
}

#[tokio::test]
async fn search_narrows_one_list_only() {
    let directory = Directory::new(62, 20);
    let mut prog = program(&directory);
    prog.settle().await;

    type_search(&mut prog, "jane");
    // The query applies only after the debounce timer.
    assert_eq!(prog.model().pane(RecordKind::User).state().items.len(), 50);
    settle_search(&mut prog, RecordKind::User).await;

    let users = prog.model().pane(RecordKind::User);
    assert_eq!(users.state().items.len(), 1);
    assert_eq!(users.state().items[0].full_name(), "Jane Doe");
    assert_eq!(users.counter(), "Shown 1 users for \"jane\"");
    assert_eq!(prog.model().pane(RecordKind::Reviewer).state().items.len(), 20);
    assert_eq!(
        directory.requests(RecordKind::User).last(),
        Some(&SearchParams::new(1, 50, "jane"))
    );
}

#[tokio::test]
async fn search_without_matches_shows_empty_state() {
    let directory = Directory::new(10, 10);
    let mut prog = program(&directory);
    prog.settle().await;

    type_search(&mut prog, "zzz");
    settle_search(&mut prog, RecordKind::User).await;

    let users = prog.model().pane(RecordKind::User);
    assert_eq!(
        ListView::classify(users.state()),
        ListView::Empty(EmptyReason::NoResults("zzz".into()))
    );
    let screen = prog.render_string(120, 40);
    assert!(screen.contains("No search results"));
    assert!(screen.contains("Shown 0 users for \"zzz\""));
}

#[tokio::test]
async fn clearing_the_search_reuses_the_cached_first_page() {
    let directory = Directory::new(62, 0);
    let mut prog = program(&directory);
    prog.settle().await;

    type_search(&mut prog, "jane");
    settle_search(&mut prog, RecordKind::User).await;
    assert_eq!(directory.requests(RecordKind::User).len(), 2);

    // Esc outside the box clears it.
    prog.send(key(KeyCode::Esc));
    prog.drain_messages();
    settle_search(&mut prog, RecordKind::User).await;

    let users = prog.model().pane(RecordKind::User);
    assert_eq!(users.state().items.len(), 50);
    assert!(users.state().search_query.is_empty());
    assert_eq!(directory.requests(RecordKind::User).len(), 2);
}

#[tokio::test]
async fn failure_is_scoped_to_one_list_and_retry_recovers() {
    let directory = Directory::new(62, 5);
    directory.fail(RecordKind::User, true);
    let mut prog = program(&directory);
    prog.settle().await;

    let users = prog.model().pane(RecordKind::User);
    assert_eq!(users.state().error.as_deref(), Some("Failed to load users"));
    assert!(prog.model().pane(RecordKind::Reviewer).state().error.is_none());
    let screen = prog.render_string(120, 40);
    assert!(screen.contains("Failed to load users"));
    assert!(screen.contains("Try Again"));
    assert!(screen.contains("Shown 5 reviewers"));

    directory.fail(RecordKind::User, false);
    prog.send(key(KeyCode::Char('r')));
    prog.settle().await;

    let users = prog.model().pane(RecordKind::User);
    assert!(users.state().error.is_none());
    assert_eq!(users.state().items.len(), 50);
    assert_eq!(directory.requests(RecordKind::User).len(), 2);
}

#[tokio::test]
async fn failed_later_page_keeps_loaded_items_for_retry() {
    let directory = Directory::new(62, 0);
    let mut prog = program(&directory);
    prog.settle().await;

    directory.fail(RecordKind::User, true);
    prog.send(key(KeyCode::End));
    prog.settle().await;
    let users = prog.model().pane(RecordKind::User);
    assert!(users.state().error.is_some());
    assert_eq!(users.state().items.len(), 50);
    assert!(!prog.render_string(120, 40).contains("User1 Smith"));

    directory.fail(RecordKind::User, false);
    prog.send(key(KeyCode::Char('r')));
    prog.settle().await;
    let users = prog.model().pane(RecordKind::User);
    assert_eq!(users.state().items.len(), 62);
    assert_eq!(
        directory.requests(RecordKind::User).last(),
        Some(&SearchParams::new(2, 50, ""))
    );
}

#[tokio::test]
async fn response_for_a_superseded_search_is_ignored() {
    let directory = Directory::new(62, 0);
    let mut prog = program(&directory);

    // Hold back the first-page responses.
    let initial = prog.take_futures();
    type_search(&mut prog, "jane");
    let generation = prog.model().pane(RecordKind::User).pending_search().unwrap();
    prog.send(Msg::Pane(RecordKind::User, pane::Message::SearchSettled(generation)));

    for fut in initial {
        let msg = fut.await;
        prog.send(msg);
    }
    assert!(prog.model().pane(RecordKind::User).state().items.is_empty());

    prog.settle().await;
    let users = prog.model().pane(RecordKind::User);
    assert_eq!(users.state().items.len(), 1);
    assert_eq!(users.state().search_query, "jane");
}

#[tokio::test]
async fn enter_opens_and_esc_closes_details() {
    let directory = Directory::new(10, 0);
    let mut prog = program(&directory);
    prog.settle().await;

    prog.send(key(KeyCode::Down));
    prog.send(key(KeyCode::Down));
    prog.send(key(KeyCode::Enter));
    let detail = prog.model().pane(RecordKind::User).detail().map(Record::full_name);
    assert_eq!(detail.as_deref(), Some("User1 Smith"));
    assert!(prog.render_string(120, 40).contains("Enter/Esc close"));

    prog.send(key(KeyCode::Esc));
    assert!(prog.model().pane(RecordKind::User).detail().is_none());
    // The search box was not touched by that Esc.
    assert!(prog.model().pane(RecordKind::User).pending_search().is_none());
}
