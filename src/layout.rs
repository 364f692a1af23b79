use raylib::prelude::Rectangle;

const SECTION_PAD: f32 = 48.0;   // Vertical breathing room inside each section
const TITLE_BLOCK: f32 = 60.0;   // Section title + gap below it
const SIDE_MARGIN: f32 = 96.0;   // Page gutter
const VIEWPORT_HEIGHT: f32 = 340.0;
const NAV_BUTTON: f32 = 44.0;    // Prev/next button size
const DOT_SIZE: f32 = 14.0;
const DOT_PITCH: f32 = 26.0;     // Dot spacing, center to center
const TOGGLE_SIZE: f32 = 36.0;
const CARD_HEIGHT: f32 = 180.0;
const CARD_GAP: f32 = 24.0;
const FIELD_WIDTH: f32 = 320.0;
const FIELD_HEIGHT: f32 = 44.0;
const BUTTON_WIDTH: f32 = 160.0;

/// Screen-space geometry for the whole page, recomputed each frame from
/// the window width. Section rectangles are in content space (y grows
/// down from the top of the page, independent of scroll); the header,
/// nav links and skip link are fixed to the window.
pub struct PageLayout {
    pub header: Rectangle,
    pub nav_links: [Rectangle; 3],
    pub skip_link: Rectangle,

    pub hero: Rectangle,
    pub gallery: Rectangle,
    pub features: Rectangle,
    pub newsletter: Rectangle,
    pub footer: Rectangle,
    pub content_height: f32,

    pub viewport: Rectangle,
    pub prev: Rectangle,
    pub next: Rectangle,
    pub dots: Vec<Rectangle>,
    pub toggle: Rectangle,
    /// Hover region for the carousel: viewport plus all of its controls.
    pub carousel_root: Rectangle,

    pub cards: [Rectangle; 3],
    pub field: Rectangle,
    pub submit: Rectangle,
}

impl PageLayout {
    pub fn compute(screen_w: f32, header_h: f32, dot_count: usize) -> Self {
        let header = Rectangle::new(0.0, 0.0, screen_w, header_h);
        // Right-aligned nav, listed left to right.
        let nav_links = [0, 1, 2].map(|i| {
            let x = screen_w - SIDE_MARGIN - (3 - i) as f32 * 110.0 + 10.0;
            Rectangle::new(x, 0.0, 100.0, header_h)
        });
        let skip_link = Rectangle::new(6.0, 6.0, 240.0, 36.0);

        let mut y = header_h + 24.0;

        let hero = Rectangle::new(0.0, y, screen_w, 320.0);
        y += hero.height;

        // Gallery section: title, viewport, then the dot/toggle row.
        let viewport_w = (screen_w - 2.0 * SIDE_MARGIN).clamp(280.0, 760.0);
        let gallery_h = SECTION_PAD + TITLE_BLOCK + VIEWPORT_HEIGHT + 16.0 + DOT_SIZE + SECTION_PAD;
        let gallery = Rectangle::new(0.0, y, screen_w, gallery_h);

        let viewport = Rectangle::new(
            (screen_w - viewport_w) / 2.0,
            y + SECTION_PAD + TITLE_BLOCK,
            viewport_w,
            VIEWPORT_HEIGHT,
        );
        let prev = Rectangle::new(
            viewport.x - NAV_BUTTON - 12.0,
            viewport.y + (viewport.height - NAV_BUTTON) / 2.0,
            NAV_BUTTON,
            NAV_BUTTON,
        );
        let next = Rectangle::new(
            viewport.x + viewport.width + 12.0,
            prev.y,
            NAV_BUTTON,
            NAV_BUTTON,
        );

        let dots_y = viewport.y + viewport.height + 16.0;
        let dots_w = dot_count as f32 * DOT_PITCH - (DOT_PITCH - DOT_SIZE);
        let dots_x = viewport.x + (viewport.width - dots_w) / 2.0;
        let dots = (0..dot_count)
            .map(|i| Rectangle::new(dots_x + i as f32 * DOT_PITCH, dots_y, DOT_SIZE, DOT_SIZE))
            .collect();
        let toggle = Rectangle::new(
            viewport.x + viewport.width - TOGGLE_SIZE,
            dots_y + DOT_SIZE / 2.0 - TOGGLE_SIZE / 2.0,
            TOGGLE_SIZE,
            TOGGLE_SIZE,
        );

        let root_left = prev.x;
        let root_right = next.x + next.width;
        let root_bottom = dots_y + DOT_SIZE.max(TOGGLE_SIZE);
        let carousel_root = Rectangle::new(
            root_left,
            viewport.y,
            root_right - root_left,
            root_bottom - viewport.y,
        );
        y += gallery.height;

        // Features: three cards in a row.
        let features_h = SECTION_PAD + TITLE_BLOCK + CARD_HEIGHT + SECTION_PAD;
        let features = Rectangle::new(0.0, y, screen_w, features_h);
        let card_w = (screen_w - 2.0 * SIDE_MARGIN - 2.0 * CARD_GAP) / 3.0;
        let card_y = y + SECTION_PAD + TITLE_BLOCK;
        let cards = [0, 1, 2].map(|i| {
            Rectangle::new(
                SIDE_MARGIN + i as f32 * (card_w + CARD_GAP),
                card_y,
                card_w,
                CARD_HEIGHT,
            )
        });
        y += features.height;

        // Newsletter: centered field + submit button pair.
        let newsletter_h = SECTION_PAD + TITLE_BLOCK + FIELD_HEIGHT + SECTION_PAD;
        let newsletter = Rectangle::new(0.0, y, screen_w, newsletter_h);
        let form_w = FIELD_WIDTH + 12.0 + BUTTON_WIDTH;
        let form_x = (screen_w - form_w) / 2.0;
        let form_y = y + SECTION_PAD + TITLE_BLOCK;
        let field = Rectangle::new(form_x, form_y, FIELD_WIDTH, FIELD_HEIGHT);
        let submit = Rectangle::new(form_x + FIELD_WIDTH + 12.0, form_y, BUTTON_WIDTH, FIELD_HEIGHT);
        y += newsletter.height;

        let footer = Rectangle::new(0.0, y, screen_w, 140.0);
        y += footer.height;

        Self {
            header,
            nav_links,
            skip_link,
            hero,
            gallery,
            features,
            newsletter,
            footer,
            content_height: y,
            viewport,
            prev,
            next,
            dots,
            toggle,
            carousel_root,
            cards,
            field,
            submit,
        }
    }
}

/// Shift a content-space rectangle into window space.
pub fn to_screen(r: Rectangle, scroll_y: f32) -> Rectangle {
    Rectangle::new(r.x, r.y - scroll_y, r.width, r.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_dot_per_slide_in_order() {
        let l = PageLayout::compute(960.0, 72.0, 5);
        assert_eq!(l.dots.len(), 5);
        for pair in l.dots.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
    }

    #[test]
    fn sections_stack_without_gaps() {
        let l = PageLayout::compute(960.0, 72.0, 3);
        assert_eq!(l.gallery.y, l.hero.y + l.hero.height);
        assert_eq!(l.features.y, l.gallery.y + l.gallery.height);
        assert_eq!(l.newsletter.y, l.features.y + l.features.height);
        assert_eq!(l.footer.y, l.newsletter.y + l.newsletter.height);
        assert_eq!(l.content_height, l.footer.y + l.footer.height);
    }

    #[test]
    fn carousel_root_spans_viewport_and_controls() {
        let l = PageLayout::compute(960.0, 72.0, 4);
        assert!(l.carousel_root.x <= l.prev.x);
        assert!(l.carousel_root.x + l.carousel_root.width >= l.next.x + l.next.width);
        let last_dot = l.dots.last().unwrap();
        assert!(l.carousel_root.y + l.carousel_root.height >= last_dot.y + last_dot.height);
    }

    #[test]
    fn to_screen_subtracts_the_scroll() {
        let r = to_screen(Rectangle::new(10.0, 500.0, 50.0, 50.0), 120.0);
        assert_eq!(r.y, 380.0);
        assert_eq!(r.x, 10.0);
    }
}
