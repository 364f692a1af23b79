use crate::constants::*;

/// Vertical scroll model for the page: clamped wheel scrolling plus an
/// eased glide toward anchor targets. Manual input always wins over a
/// glide in progress.
pub struct PageScroll {
    scroll_y: f32,
    max_scroll: f32,
    target: Option<f32>,
}

impl PageScroll {
    pub fn new(max_scroll: f32) -> Self {
        Self { scroll_y: 0.0, max_scroll: max_scroll.max(0.0), target: None }
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Content or window size changed; keep the position valid.
    pub fn set_max_scroll(&mut self, max_scroll: f32) {
        self.max_scroll = max_scroll.max(0.0);
        self.scroll_y = self.scroll_y.clamp(0.0, self.max_scroll);
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.target = None;
        self.scroll_y = (self.scroll_y + delta).clamp(0.0, self.max_scroll);
    }

    /// Begin a smooth glide toward `target`.
    pub fn scroll_to(&mut self, target: f32) {
        self.target = Some(target.clamp(0.0, self.max_scroll));
    }

    pub fn is_gliding(&self) -> bool {
        self.target.is_some()
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(target) = self.target {
            let step = (target - self.scroll_y) * (dt * SMOOTH_SCROLL_RATE).min(1.0);
            self.scroll_y += step;
            if (target - self.scroll_y).abs() < SMOOTH_SCROLL_SNAP {
                self.scroll_y = target;
                self.target = None;
            }
        }
    }
}

/// Scroll position that puts `section_top` just below the sticky header.
pub fn anchor_target(section_top: f32, header_height: f32) -> f32 {
    (section_top - header_height - ANCHOR_SCROLL_PAD).max(0.0)
}

/// Hidden "skip to main content" control. Invisible until keyboard focus
/// reaches it; activating it jumps the scroll to the main content.
pub struct SkipLink {
    pub focused: bool,
}

impl SkipLink {
    pub fn new() -> Self {
        Self { focused: false }
    }

    pub const LABEL: &'static str = "Skip to main content";

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wheel_scrolling_is_clamped() {
        let mut p = PageScroll::new(1000.0);
        p.scroll_by(-50.0);
        assert_eq!(p.scroll_y(), 0.0);
        p.scroll_by(1500.0);
        assert_eq!(p.scroll_y(), 1000.0);
    }

    #[test]
    fn glide_converges_on_the_target() {
        let mut p = PageScroll::new(1000.0);
        p.scroll_to(400.0);
        for _ in 0..300 {
            p.update(1.0 / 60.0);
        }
        assert_eq!(p.scroll_y(), 400.0);
        assert!(!p.is_gliding());
    }

    #[test]
    fn wheel_input_cancels_a_glide() {
        let mut p = PageScroll::new(1000.0);
        p.scroll_to(800.0);
        p.update(1.0 / 60.0);
        p.scroll_by(10.0);
        assert!(!p.is_gliding());
        let here = p.scroll_y();
        p.update(1.0);
        assert_eq!(p.scroll_y(), here);
    }

    #[test]
    fn targets_are_clamped_to_the_content() {
        let mut p = PageScroll::new(300.0);
        p.scroll_to(900.0);
        for _ in 0..300 {
            p.update(1.0 / 60.0);
        }
        assert_eq!(p.scroll_y(), 300.0);
    }

    #[test]
    fn shrinking_content_pulls_the_position_back() {
        let mut p = PageScroll::new(1000.0);
        p.scroll_by(1000.0);
        p.set_max_scroll(400.0);
        assert_eq!(p.scroll_y(), 400.0);
    }

    #[test]
    fn anchor_target_clears_the_header_with_padding() {
        assert_eq!(anchor_target(500.0, 56.0), 500.0 - 56.0 - ANCHOR_SCROLL_PAD);
        assert_eq!(anchor_target(10.0, 72.0), 0.0); // never negative
    }
}
