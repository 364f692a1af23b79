use crate::constants::*;

/// Scroll-triggered fade-in for one page section. Stands in for an
/// intersection observer: the section latches to revealed once at least
/// `REVEAL_THRESHOLD` of it intersects the viewport shrunk by
/// `REVEAL_BOTTOM_MARGIN` at the bottom, and never un-reveals.
pub struct Reveal {
    revealed: bool,
    progress: f32,
}

impl Reveal {
    pub fn new() -> Self {
        Self { revealed: false, progress: 0.0 }
    }

    /// Re-run the intersection test against the current scroll window.
    pub fn observe(&mut self, top: f32, height: f32, scroll_y: f32, view_h: f32) {
        if self.revealed || height <= 0.0 {
            return;
        }
        let window_top = scroll_y;
        let window_bottom = scroll_y + view_h - REVEAL_BOTTOM_MARGIN;
        let overlap = (top + height).min(window_bottom) - top.max(window_top);
        if overlap / height >= REVEAL_THRESHOLD {
            self.revealed = true;
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.revealed && self.progress < 1.0 {
            self.progress = (self.progress + dt / REVEAL_DURATION).min(1.0);
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    fn eased(&self) -> f32 {
        // easeOutCubic
        1.0 - (1.0 - self.progress).powi(3)
    }

    /// Current opacity, 0.0 (hidden) to 1.0 (at rest).
    pub fn alpha(&self) -> f32 {
        self.eased()
    }

    /// Remaining upward travel, in pixels. Starts at `REVEAL_RISE` and
    /// settles at zero.
    pub fn rise(&self) -> f32 {
        REVEAL_RISE * (1.0 - self.eased())
    }
}
