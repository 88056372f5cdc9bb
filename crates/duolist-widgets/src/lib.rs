//! Widgets for the duolist panes.
//!
//! Stateless pieces ([`RecordCard`], [`RecordDetail`], [`EmptyState`],
//! [`ErrorPanel`], [`VirtualList`], [`ListPanel`]) are ratatui
//! [`Widget`](ratatui::widgets::Widget)s built from borrowed data. The two
//! pieces with their own state, [`SearchBox`] and [`Spinner`], are
//! [`Component`](duolist_core::Component)s.

pub mod empty_state;
pub mod error_panel;
pub mod layout;
pub mod list_panel;
pub mod record_card;
pub mod search_box;
pub mod spinner;
pub mod virtual_list;

pub use empty_state::EmptyState;
pub use error_panel::{ErrorPanel, ErrorVariant};
pub use list_panel::{ListPanel, RETRY_KEY};
pub use record_card::{truncate_text, RecordCard, RecordDetail, COMMENT_MAX_LEN};
pub use search_box::SearchBox;
pub use spinner::{Spinner, SpinnerSize, SpinnerWidget};
pub use virtual_list::{VirtualList, VirtualListState};
