use std::time::{Duration, Instant};

/// Distance from the bottom, in layout units, at which loading starts.
pub const LOAD_MORE_THRESHOLD: u32 = 200;

/// Minimum spacing between two load-more triggers.
pub const LOAD_MORE_COOLDOWN: Duration = Duration::from_millis(300);

/// Scroll position of a viewport over its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top.
    pub offset: u32,
    /// Full scrollable extent.
    pub content_height: u32,
    /// Visible extent.
    pub viewport_height: u32,
}

impl ScrollMetrics {
    /// Whether the bottom of the content is within `threshold` of the
    /// bottom of the viewport.
    pub fn is_near_bottom(&self, threshold: u32) -> bool {
        self.content_height.saturating_sub(self.offset)
            <= self.viewport_height.saturating_add(threshold)
    }
}

/// Decides when scrolling should load the next page.
///
/// Fires at most once per crossing into the bottom zone. After firing the
/// trigger stays disarmed until either the viewport leaves the zone again or
/// the owner reports that loading finished. A cooldown additionally spaces
/// triggers out during fast scroll gestures. All timing comes from the
/// caller, so dropping the trigger never leaves a timer behind.
#[derive(Debug, Clone)]
pub struct InfiniteScroll {
    threshold: u32,
    cooldown: Duration,
    armed: bool,
    last_fired: Option<Instant>,
}

impl Default for InfiniteScroll {
    fn default() -> Self {
        Self::new(LOAD_MORE_THRESHOLD, LOAD_MORE_COOLDOWN)
    }
}

impl InfiniteScroll {
    pub fn new(threshold: u32, cooldown: Duration) -> Self {
        Self {
            threshold,
            cooldown,
            armed: true,
            last_fired: None,
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Observe a scroll position. Returns `true` when the caller should load
    /// the next page.
    pub fn on_scroll(
        &mut self,
        metrics: ScrollMetrics,
        has_more: bool,
        is_loading: bool,
        now: Instant,
    ) -> bool {
        if !metrics.is_near_bottom(self.threshold) {
            self.armed = true;
            return false;
        }
        if !has_more || is_loading || !self.armed {
            return false;
        }
        if let Some(last) = self.last_fired {
            if now.saturating_duration_since(last) < self.cooldown {
                return false;
            }
        }
        self.armed = false;
        self.last_fired = Some(now);
        true
    }

    /// Report a change of the owner's loading flag. Finishing a load re-arms
    /// the trigger and lifts the cooldown.
    pub fn on_loading_changed(&mut self, is_loading: bool) {
        if !is_loading {
            self.armed = true;
            self.last_fired = None;
        }
    }

    /// Forget all history, e.g. after the list was replaced by a new search.
    pub fn reset(&mut self) {
        self.armed = true;
        self.last_fired = None;
    }
}
