use crate::constants::*;

/// Sticky header style, driven by scroll depth. Past the threshold the
/// bar condenses and turns opaque.
pub fn scrolled(scroll_y: f32) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

pub fn height(scroll_y: f32) -> f32 {
    if scrolled(scroll_y) {
        HEADER_HEIGHT_SCROLLED
    } else {
        HEADER_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn condenses_strictly_past_the_threshold() {
        assert!(!scrolled(0.0));
        assert!(!scrolled(50.0));
        assert!(scrolled(50.1));
    }

    #[test]
    fn height_follows_the_scrolled_state() {
        assert_eq!(height(0.0), HEADER_HEIGHT);
        assert_eq!(height(300.0), HEADER_HEIGHT_SCROLLED);
    }
}
