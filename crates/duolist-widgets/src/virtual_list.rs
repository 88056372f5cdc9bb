//! Windowed list rendering.
//!
//! Only the slots of a [`VirtualWindow`] are drawn. Each slot is rendered
//! into its own scratch buffer at full height and then copied row by row, so
//! a slot cut off by the top or bottom edge still shows the right rows.

use duolist_state::{clamp_offset, max_offset, ScrollMetrics, VirtualSlot, VirtualWindow, WindowConfig};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget};

/// Scroll position and selection of a windowed list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualListState {
    offset: u32,
    selected: Option<usize>,
    viewport: u32,
}

impl VirtualListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn viewport(&self) -> u32 {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: u32) {
        self.viewport = viewport;
    }

    /// Back to the top with nothing selected.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.selected = None;
    }

    /// Scroll by `delta` units, clamped to the content. Returns the new
    /// offset.
    pub fn scroll_by(&mut self, delta: i64, total: u32) -> u32 {
        let target = (i64::from(self.offset) + delta).max(0);
        let target = u32::try_from(target).unwrap_or(u32::MAX);
        self.offset = clamp_offset(target, total, self.viewport);
        self.offset
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self, total: u32) {
        self.offset = max_offset(total, self.viewport);
    }

    /// Re-clamp after the content shrank.
    pub fn clamp(&mut self, items: usize, total: u32) {
        self.offset = clamp_offset(self.offset, total, self.viewport);
        self.selected = match (self.selected, items) {
            (_, 0) => None,
            (Some(index), _) => Some(index.min(items - 1)),
            (None, _) => None,
        };
    }

    /// Move the selection by `delta` records and scroll it into view.
    pub fn move_selection(&mut self, delta: isize, items: usize, config: &WindowConfig, total: u32) {
        if items == 0 {
            self.selected = None;
            return;
        }
        let current = self.selected.unwrap_or_else(|| self.first_visible(config));
        let next = if self.selected.is_none() {
            current
        } else {
            current.saturating_add_signed(delta)
        };
        self.select(next.min(items - 1), config, total);
    }

    /// Select `index` and scroll it into view.
    pub fn select(&mut self, index: usize, config: &WindowConfig, total: u32) {
        self.selected = Some(index);
        let start = config.start_of(index);
        let end = start.saturating_add(config.estimate);
        if start < self.offset {
            self.offset = start;
        } else if end > self.offset.saturating_add(self.viewport) {
            self.offset = end.saturating_sub(self.viewport).min(start);
        }
        self.offset = clamp_offset(self.offset, total, self.viewport);
    }

    /// Index of the first slot whose top is in view.
    fn first_visible(&self, config: &WindowConfig) -> usize {
        let stride = config.stride().max(1);
        self.offset.div_ceil(stride) as usize
    }

    /// Metrics for the load-more trigger.
    pub fn metrics(&self, total: u32) -> ScrollMetrics {
        ScrollMetrics {
            offset: self.offset,
            content_height: total,
            viewport_height: self.viewport,
        }
    }
}

/// Draws the slots of a [`VirtualWindow`] scrolled to `offset`, one row per
/// unit, with a scrollbar for the full extent.
pub struct VirtualList<'a, F> {
    window: &'a VirtualWindow,
    offset: u32,
    render_slot: F,
    scrollbar: bool,
}

impl<'a, F> VirtualList<'a, F>
where
    F: FnMut(&VirtualSlot, Rect, &mut Buffer),
{
    /// `render_slot` draws one slot into the given area.
    pub fn new(window: &'a VirtualWindow, offset: u32, render_slot: F) -> Self {
        Self {
            window,
            offset,
            render_slot,
            scrollbar: true,
        }
    }

    pub fn scrollbar(mut self, enabled: bool) -> Self {
        self.scrollbar = enabled;
        self
    }
}

impl<F> Widget for VirtualList<'_, F>
where
    F: FnMut(&VirtualSlot, Rect, &mut Buffer),
{
    fn render(mut self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let height = u32::from(area.height);
        let overflows = self.window.total_size > height;
        let list_area = if self.scrollbar && overflows && area.width > 1 {
            Rect {
                width: area.width - 1,
                ..area
            }
        } else {
            area
        };

        let top = self.offset;
        let bottom = top.saturating_add(height);
        for slot in self.window.slots() {
            if slot.end() <= top || slot.start >= bottom {
                continue;
            }
            let slot_height = u16::try_from(slot.size).unwrap_or(u16::MAX);
            let mut scratch = Buffer::empty(Rect::new(0, 0, list_area.width, slot_height));
            (self.render_slot)(slot, scratch.area, &mut scratch);

            let skipped = top.saturating_sub(slot.start);
            let dest = slot.start.saturating_sub(top);
            let rows = (slot.size - skipped).min(height - dest);
            for row in 0..rows {
                let (Ok(src_y), Ok(dst_y)) = (u16::try_from(skipped + row), u16::try_from(dest + row))
                else {
                    break;
                };
                for x in 0..list_area.width {
                    let Some(cell) = scratch.cell((x, src_y)) else {
                        continue;
                    };
                    if let Some(target) = buf.cell_mut((list_area.x + x, list_area.y + dst_y)) {
                        *target = cell.clone();
                    }
                }
            }
        }

        if self.scrollbar && overflows {
            let scrollable = max_offset(self.window.total_size, height) as usize;
            let mut state = ScrollbarState::new(scrollable)
                .position(self.offset as usize)
                .viewport_content_length(height as usize);
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .thumb_style(Style::default().fg(Color::Gray))
                .track_style(Style::default().fg(Color::DarkGray))
                .render(area, buf, &mut state);
        }
    }
}
