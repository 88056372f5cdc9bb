use std::ops::Range;

/// Layout parameters of a windowed list. Lengths share one unit (rows in the
/// terminal client).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    /// Estimated extent of every slot.
    pub estimate: u32,
    /// Space between two consecutive slots.
    pub gap: u32,
    /// Extra slots rendered above and below the visible ones.
    pub overscan: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            estimate: 170,
            gap: 20,
            overscan: 2,
        }
    }
}

impl WindowConfig {
    /// Distance between the starts of two consecutive slots.
    pub fn stride(&self) -> u32 {
        self.estimate + self.gap
    }

    /// Start of slot `index`.
    pub fn start_of(&self, index: usize) -> u32 {
        u32::try_from(index as u64 * u64::from(self.stride())).unwrap_or(u32::MAX)
    }

    /// Full scrollable extent of `count` slots.
    pub fn total_size(&self, count: usize) -> u32 {
        if count == 0 {
            return 0;
        }
        let count = count as u64;
        let total = count * u64::from(self.estimate) + (count - 1) * u64::from(self.gap);
        u32::try_from(total).unwrap_or(u32::MAX)
    }
}

/// What a slot stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// The record at this position in the item list.
    Record(usize),
    /// The trailing placeholder shown while more pages exist.
    Loader,
}

/// One positioned slot of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualSlot {
    pub index: usize,
    pub start: u32,
    pub size: u32,
    pub kind: SlotKind,
}

impl VirtualSlot {
    pub fn end(&self) -> u32 {
        self.start.saturating_add(self.size)
    }
}

/// The slice of a list that needs drawing for one scroll position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VirtualWindow {
    /// Slots that intersect the viewport.
    pub visible: Range<usize>,
    /// Slots to draw, including overscan.
    pub rendered: Range<usize>,
    /// Logical slot count, loader included.
    pub count: usize,
    pub total_size: u32,
    slots: Vec<VirtualSlot>,
}

impl VirtualWindow {
    /// Compute the window for `items` records, plus a loader slot when
    /// `has_more`, seen through `viewport` at scroll `offset`.
    pub fn compute(
        items: usize,
        has_more: bool,
        config: &WindowConfig,
        viewport: u32,
        offset: u32,
    ) -> Self {
        let count = items + usize::from(has_more);
        let total_size = config.total_size(count);
        if count == 0 || viewport == 0 {
            return Self {
                count,
                total_size,
                ..Self::default()
            };
        }

        let stride = u64::from(config.stride().max(1));
        let offset = u64::from(offset);
        let within = offset % stride;
        let mut first = (offset / stride) as usize;
        if within >= u64::from(config.estimate) {
            // The top edge sits in the gap below a slot.
            first += 1;
        }
        let last = ((offset + u64::from(viewport) - 1) / stride) as usize;

        let visible_start = first.min(count);
        let visible_end = (last + 1).min(count).max(visible_start);
        let render_start = visible_start.saturating_sub(config.overscan);
        let render_end = (visible_end + config.overscan).min(count);

        let slots = (render_start..render_end)
            .map(|index| VirtualSlot {
                index,
                start: config.start_of(index),
                size: config.estimate,
                kind: if index < items {
                    SlotKind::Record(index)
                } else {
                    SlotKind::Loader
                },
            })
            .collect();

        Self {
            visible: visible_start..visible_end,
            rendered: render_start..render_end,
            count,
            total_size,
            slots,
        }
    }

    pub fn slots(&self) -> &[VirtualSlot] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Largest useful scroll offset for `total` content in `viewport`.
pub fn max_offset(total: u32, viewport: u32) -> u32 {
    total.saturating_sub(viewport)
}

/// Clamp `offset` into `0..=max_offset(total, viewport)`.
pub fn clamp_offset(offset: u32, total: u32, viewport: u32) -> u32 {
    offset.min(max_offset(total, viewport))
}
