//! Testimonial carousel arithmetic.
//!
//! The rendered page runs the same rules in its inline script; the
//! breakpoints below are passed into the template so both agree.

/// Viewports at least this wide show two cards.
pub const TABLET_MIN_WIDTH: u32 = 768;

/// Viewports at least this wide show three cards.
pub const DESKTOP_MIN_WIDTH: u32 = 1024;

/// Number of testimonial cards visible at a given viewport width.
pub fn visible_slots_for_width(width: u32) -> usize {
    if width >= DESKTOP_MIN_WIDTH {
        3
    } else if width >= TABLET_MIN_WIDTH {
        2
    } else {
        1
    }
}

/// Carousel position over `total` cards with `visible` shown at once.
///
/// The current index always stays within `0..=max_index()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    total: usize,
    visible: usize,
    current: usize,
}

impl Carousel {
    pub fn new(total: usize, visible: usize) -> Self {
        Self {
            total,
            visible: visible.max(1),
            current: 0,
        }
    }

    pub fn for_width(total: usize, width: u32) -> Self {
        Self::new(total, visible_slots_for_width(width))
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Highest reachable index: `max(0, total - visible)`.
    pub fn max_index(&self) -> usize {
        self.total.saturating_sub(self.visible)
    }

    /// Number of pagination dots.
    pub fn page_count(&self) -> usize {
        self.max_index() + 1
    }

    /// Advance one card, wrapping to the start past the end.
    pub fn next(&mut self) -> usize {
        self.current = if self.current >= self.max_index() {
            0
        } else {
            self.current + 1
        };
        self.current
    }

    /// Retreat one card, wrapping to the end before the start.
    pub fn prev(&mut self) -> usize {
        self.current = if self.current == 0 {
            self.max_index()
        } else {
            self.current - 1
        };
        self.current
    }

    /// Jump to a card, clamped to the last reachable index.
    pub fn go_to(&mut self, index: usize) -> usize {
        self.current = index.min(self.max_index());
        self.current
    }

    /// Horizontal track offset, in percent of the viewport.
    pub fn offset_percent(&self) -> f64 {
        self.current as f64 * 100.0 / self.visible as f64
    }
}
