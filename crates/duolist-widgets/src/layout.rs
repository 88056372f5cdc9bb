//! Placement helpers shared by the centered panels and the detail overlay.

use ratatui::layout::Rect;

/// A `width` x `height` rect centered in `area`, clamped to it.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// A full-width band of `height` rows, vertically centered in `area`.
pub fn centered_band(height: u16, area: Rect) -> Rect {
    centered_fixed(area.width, height, area)
}

/// `area` shrunk by `percent_x` / `percent_y` of its size and centered.
pub fn centered_percent(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let w = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let h = (u32::from(area.height) * u32::from(percent_y.min(100)) / 100) as u16;
    centered_fixed(w, h, area)
}
