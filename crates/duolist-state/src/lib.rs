//! State and layout logic shared by both duolist panes.
//!
//! Nothing in this crate performs I/O or owns a timer. Time is passed in as
//! [`std::time::Instant`]s and every transition is a plain function call, so
//! the whole pagination, search and windowing state machine is testable
//! without a runtime.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`record`] | [`Record`], [`RecordId`], [`RecordKind`] |
//! | [`params`] | [`SearchParams`], the request key |
//! | [`list_state`] | [`ListState`], [`ListAction`], [`ListStore`] |
//! | [`debounce`] | [`Debouncer`] for search input |
//! | [`scroll`] | [`InfiniteScroll`] load-more trigger |
//! | [`window`] | [`VirtualWindow`] slot computation |
//! | [`view`] | [`ListView`] render-state classification |

pub mod debounce;
pub mod list_state;
pub mod params;
pub mod record;
pub mod scroll;
pub mod view;
pub mod window;

pub use debounce::{Debouncer, Ticket, SEARCH_DEBOUNCE};
pub use list_state::{ListAction, ListState, ListStore};
pub use params::{SearchParams, PAGE_SIZE};
pub use record::{Record, RecordId, RecordKind};
pub use scroll::{InfiniteScroll, ScrollMetrics, LOAD_MORE_COOLDOWN, LOAD_MORE_THRESHOLD};
pub use view::{EmptyReason, ListView};
pub use window::{clamp_offset, max_offset, SlotKind, VirtualSlot, VirtualWindow, WindowConfig};
