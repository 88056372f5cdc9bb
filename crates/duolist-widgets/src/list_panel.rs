use crate::empty_state::EmptyState;
use crate::error_panel::ErrorPanel;
use crate::record_card::{RecordCard, COMMENT_MAX_LEN};
use crate::spinner::{Spinner, SpinnerSize};
use crate::virtual_list::{VirtualList, VirtualListState};
use duolist_state::{
    clamp_offset, ListState, ListView, RecordKind, SlotKind, VirtualSlot, VirtualWindow, WindowConfig,
};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

/// Key offered for retrying after an error.
pub const RETRY_KEY: char = 'r';

/// The body of one pane: error panel, empty state or the windowed cards,
/// whichever [`ListView::classify`] selects.
pub struct ListPanel<'a> {
    state: &'a ListState,
    kind: RecordKind,
    config: &'a WindowConfig,
    list: &'a VirtualListState,
    spinner: &'a Spinner,
    window: Option<&'a VirtualWindow>,
    comment_max_len: usize,
    focused: bool,
}

impl<'a> ListPanel<'a> {
    pub fn new(
        state: &'a ListState,
        kind: RecordKind,
        config: &'a WindowConfig,
        list: &'a VirtualListState,
        spinner: &'a Spinner,
    ) -> Self {
        Self {
            state,
            kind,
            config,
            list,
            spinner,
            window: None,
            comment_max_len: COMMENT_MAX_LEN,
            focused: false,
        }
    }

    pub fn comment_max_len(mut self, max_len: usize) -> Self {
        self.comment_max_len = max_len;
        self
    }

    /// Draw a window the caller already computed for this height and scroll
    /// position instead of computing one per frame.
    pub fn window(mut self, window: Option<&'a VirtualWindow>) -> Self {
        self.window = window;
        self
    }

    /// Highlight the selected card.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ListPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        match ListView::classify(self.state) {
            ListView::Error { message } => {
                ErrorPanel::new(&message).retry(RETRY_KEY).render(area, buf);
            }
            ListView::Empty(reason) => EmptyState::new(&reason).render(area, buf),
            ListView::Items {
                overlay_loading: true,
            } => {
                self.spinner
                    .sized(SpinnerSize::Large)
                    .label("Loading...")
                    .render(area, buf);
            }
            ListView::Items {
                overlay_loading: false,
            } => {
                let state = self.state;
                let viewport = u32::from(area.height);
                let count = state.items.len() + usize::from(state.has_more);
                let offset = clamp_offset(self.list.offset(), self.config.total_size(count), viewport);
                let computed;
                let window = match self.window {
                    Some(window) => window,
                    None => {
                        computed = VirtualWindow::compute(
                            state.items.len(),
                            state.has_more,
                            self.config,
                            viewport,
                            offset,
                        );
                        &computed
                    }
                };

                let selected = self.list.selected().filter(|_| self.focused);
                let kind = self.kind;
                let comment_max_len = self.comment_max_len;
                let spinner = self.spinner;
                VirtualList::new(window, offset, |slot: &VirtualSlot, rect: Rect, buf: &mut Buffer| {
                    let padded = Rect {
                        x: rect.x + 1,
                        width: rect.width.saturating_sub(2),
                        ..rect
                    };
                    match slot.kind {
                        SlotKind::Record(index) => {
                            if let Some(record) = state.items.get(index) {
                                RecordCard::new(record, kind)
                                    .comment_max_len(comment_max_len)
                                    .selected(selected == Some(index))
                                    .render(padded, buf);
                            }
                        }
                        SlotKind::Loader => {
                            spinner
                                .sized(SpinnerSize::Medium)
                                .label("Loading more...")
                                .render(padded, buf);
                        }
                    }
                })
                .render(area, buf);
            }
        }
    }
}
