use raylib::prelude::*;

use crate::carousel::{Carousel, ToggleGlyph};
use crate::layout::{PageLayout, to_screen};
use crate::newsletter::{FormGlyph, Newsletter};
use crate::page::SkipLink;
use crate::reveal::Reveal;

pub const PAGE_BG: Color = Color::new(24, 24, 32, 255);
pub const HEADER_BG: Color = Color::new(24, 24, 32, 160);
pub const HEADER_BG_SCROLLED: Color = Color::new(16, 16, 22, 255);
pub const PANEL: Color = Color::new(38, 38, 52, 255);
pub const ACCENT: Color = Color::new(110, 86, 255, 255);
pub const TEXT: Color = Color::new(235, 235, 245, 255);
pub const MUTED: Color = Color::new(150, 150, 165, 255);

pub const NAV_LABELS: [&str; 3] = ["Gallery", "Features", "Newsletter"];

const CARD_COPY: [(&str, &str); 3] = [
    ("Fast", "Ready in seconds, no setup."),
    ("Flexible", "Bring your own image deck."),
    ("Accessible", "Labels and states throughout."),
];

fn draw_text_centered(d: &mut RaylibDrawHandle, text: &str, cx: f32, y: f32, size: i32, color: Color) {
    let w = d.measure_text(text, size);
    d.draw_text(text, cx as i32 - w / 2, y as i32, size, color);
}

// --- Fixed chrome ---

pub fn draw_header(d: &mut RaylibDrawHandle, layout: &PageLayout, scrolled: bool) {
    let bg = if scrolled { HEADER_BG_SCROLLED } else { HEADER_BG };
    d.draw_rectangle_rec(layout.header, bg);
    if scrolled {
        d.draw_line(
            0,
            layout.header.height as i32,
            layout.header.width as i32,
            layout.header.height as i32,
            ACCENT,
        );
    }
    let title_y = (layout.header.height / 2.0 - 11.0) as i32;
    d.draw_text("Showcase", 24, title_y, 22, TEXT);
    for (rect, label) in layout.nav_links.iter().zip(NAV_LABELS) {
        let w = d.measure_text(label, 18);
        d.draw_text(
            label,
            (rect.x + (rect.width - w as f32) / 2.0) as i32,
            title_y + 2,
            18,
            MUTED,
        );
    }
}

pub fn draw_skip_link(d: &mut RaylibDrawHandle, layout: &PageLayout, skip: &SkipLink) {
    // Parked off-screen until keyboard focus reaches it.
    if !skip.focused {
        return;
    }
    d.draw_rectangle_rec(layout.skip_link, ACCENT);
    d.draw_text(
        SkipLink::LABEL,
        layout.skip_link.x as i32 + 12,
        layout.skip_link.y as i32 + 9,
        18,
        TEXT,
    );
}

// --- Page sections ---

pub fn draw_hero(d: &mut RaylibDrawHandle, layout: &PageLayout, scroll_y: f32) {
    let r = to_screen(layout.hero, scroll_y);
    let cx = r.x + r.width / 2.0;
    draw_text_centered(d, "Everything in one place", cx, r.y + 110.0, 40, TEXT);
    draw_text_centered(
        d,
        "A small gallery page: scroll, swipe, subscribe.",
        cx,
        r.y + 170.0,
        20,
        MUTED,
    );
}

pub fn draw_carousel(
    d: &mut RaylibDrawHandle,
    layout: &PageLayout,
    carousel: &Carousel,
    slides: &[Texture2D],
    scroll_y: f32,
) {
    let vp = to_screen(layout.viewport, scroll_y);
    let section = to_screen(layout.gallery, scroll_y);
    draw_text_centered(d, "Gallery", vp.x + vp.width / 2.0, section.y + 52.0, 28, TEXT);
    d.draw_rectangle_rec(vp, PANEL);

    // Viewport offset is -index viewport-widths, so exactly one slide
    // intersects the viewport; the rest are culled.
    for (i, texture) in slides.iter().enumerate() {
        let x_off = (i as f32 + carousel.offset()) * vp.width;
        if x_off.abs() >= vp.width {
            continue;
        }
        draw_slide_fitted(d, texture, Rectangle::new(vp.x + x_off, vp.y, vp.width, vp.height));
    }

    draw_arrow(d, to_screen(layout.prev, scroll_y), true);
    draw_arrow(d, to_screen(layout.next, scroll_y), false);

    for (rect, dot) in layout.dots.iter().zip(&carousel.indicators) {
        let r = to_screen(*rect, scroll_y);
        let center = Vector2::new(r.x + r.width / 2.0, r.y + r.height / 2.0);
        if dot.selected {
            d.draw_circle_v(center, r.width / 2.0, ACCENT);
        } else {
            d.draw_circle_v(center, r.width / 2.0 - 2.0, MUTED);
        }
    }

    draw_toggle(d, to_screen(layout.toggle, scroll_y), carousel);
}

fn draw_slide_fitted(d: &mut RaylibDrawHandle, texture: &Texture2D, bounds: Rectangle) {
    let tex_w = texture.width() as f32;
    let tex_h = texture.height() as f32;
    let scale = (bounds.width / tex_w).min(bounds.height / tex_h);
    let dest = Rectangle::new(
        bounds.x + (bounds.width - tex_w * scale) / 2.0,
        bounds.y + (bounds.height - tex_h * scale) / 2.0,
        tex_w * scale,
        tex_h * scale,
    );
    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, tex_w, tex_h),
        dest,
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}

fn draw_arrow(d: &mut RaylibDrawHandle, rect: Rectangle, points_left: bool) {
    d.draw_rectangle_rec(rect, PANEL);
    let cx = rect.x + rect.width / 2.0;
    let cy = rect.y + rect.height / 2.0;
    let half = rect.width * 0.18;
    let (tip, top, bottom) = if points_left {
        (
            Vector2::new(cx - half, cy),
            Vector2::new(cx + half, cy - half),
            Vector2::new(cx + half, cy + half),
        )
    } else {
        (
            Vector2::new(cx + half, cy),
            Vector2::new(cx - half, cy + half),
            Vector2::new(cx - half, cy - half),
        )
    };
    // Counter-clockwise winding so the triangle fills.
    d.draw_triangle(tip, top, bottom, TEXT);
}

fn draw_toggle(d: &mut RaylibDrawHandle, rect: Rectangle, carousel: &Carousel) {
    let bg = if carousel.toggle.pressed { ACCENT } else { PANEL };
    d.draw_rectangle_rec(rect, bg);
    let cx = rect.x + rect.width / 2.0;
    let cy = rect.y + rect.height / 2.0;
    match carousel.toggle.glyph {
        ToggleGlyph::Play => {
            d.draw_triangle(
                Vector2::new(cx + 7.0, cy),
                Vector2::new(cx - 5.0, cy - 7.0),
                Vector2::new(cx - 5.0, cy + 7.0),
                TEXT,
            );
        }
        ToggleGlyph::Pause => {
            d.draw_rectangle((cx - 7.0) as i32, (cy - 7.0) as i32, 5, 14, TEXT);
            d.draw_rectangle((cx + 2.0) as i32, (cy - 7.0) as i32, 5, 14, TEXT);
        }
    }
}

pub fn draw_features(
    d: &mut RaylibDrawHandle,
    layout: &PageLayout,
    reveals: &[Reveal; 3],
    scroll_y: f32,
) {
    let section = to_screen(layout.features, scroll_y);
    draw_text_centered(
        d,
        "Features",
        section.x + section.width / 2.0,
        section.y + 52.0,
        28,
        TEXT,
    );
    for ((rect, reveal), (title, copy)) in layout.cards.iter().zip(reveals).zip(CARD_COPY) {
        let mut r = to_screen(*rect, scroll_y);
        r.y += reveal.rise();
        let alpha = reveal.alpha();
        d.draw_rectangle_rec(r, PANEL.fade(alpha));
        d.draw_text(title, r.x as i32 + 20, r.y as i32 + 22, 22, TEXT.fade(alpha));
        d.draw_text(copy, r.x as i32 + 20, r.y as i32 + 58, 17, MUTED.fade(alpha));
    }
}

pub fn draw_newsletter(
    d: &mut RaylibDrawHandle,
    layout: &PageLayout,
    form: &Newsletter,
    reveal: &Reveal,
    scroll_y: f32,
    clock: f32,
) {
    let section = to_screen(layout.newsletter, scroll_y);
    let alpha = reveal.alpha();
    draw_text_centered(
        d,
        "Stay in the loop",
        section.x + section.width / 2.0,
        section.y + 52.0 + reveal.rise(),
        28,
        TEXT.fade(alpha),
    );

    let mut field = to_screen(layout.field, scroll_y);
    field.y += reveal.rise();
    d.draw_rectangle_rec(field, PANEL.fade(alpha));
    if form.focused {
        d.draw_rectangle_lines_ex(field, 2.0, ACCENT.fade(alpha));
    }
    let text_y = field.y as i32 + 13;
    if form.input.is_empty() && !form.focused {
        d.draw_text("you@example.com", field.x as i32 + 12, text_y, 18, MUTED.fade(alpha));
    } else {
        d.draw_text(&form.input, field.x as i32 + 12, text_y, 18, TEXT.fade(alpha));
        if form.focused && clock.fract() < 0.5 {
            let w = d.measure_text(&form.input, 18);
            d.draw_text("|", field.x as i32 + 14 + w, text_y, 18, TEXT.fade(alpha));
        }
    }

    let mut button = to_screen(layout.submit, scroll_y);
    button.y += reveal.rise();
    let bg = if form.busy() { PANEL } else { ACCENT };
    d.draw_rectangle_rec(button, bg.fade(alpha));
    let label = form.button_label();
    let label_w = d.measure_text(label, 18);
    let mut label_x = button.x + (button.width - label_w as f32) / 2.0;
    let glyph_cy = button.y + button.height / 2.0;
    match form.button_glyph() {
        FormGlyph::None => {}
        FormGlyph::Spinner => {
            label_x += 10.0;
            let center = Vector2::new(label_x - 22.0, glyph_cy);
            let start = clock * 360.0;
            d.draw_ring(center, 5.0, 8.0, start, start + 270.0, 16, TEXT.fade(alpha));
        }
        FormGlyph::Check => {
            label_x += 10.0;
            let x = label_x - 28.0;
            d.draw_line_ex(
                Vector2::new(x, glyph_cy),
                Vector2::new(x + 5.0, glyph_cy + 5.0),
                2.0,
                TEXT.fade(alpha),
            );
            d.draw_line_ex(
                Vector2::new(x + 5.0, glyph_cy + 5.0),
                Vector2::new(x + 13.0, glyph_cy - 6.0),
                2.0,
                TEXT.fade(alpha),
            );
        }
    }
    d.draw_text(label, label_x as i32, button.y as i32 + 13, 18, TEXT.fade(alpha));
}

pub fn draw_footer(d: &mut RaylibDrawHandle, layout: &PageLayout, scroll_y: f32) {
    let r = to_screen(layout.footer, scroll_y);
    d.draw_line(r.x as i32, r.y as i32, (r.x + r.width) as i32, r.y as i32, PANEL);
    draw_text_centered(
        d,
        "Showcase — built for the love of small pages",
        r.x + r.width / 2.0,
        r.y + 60.0,
        16,
        MUTED,
    );
}

// --- Blocking alert ---

pub fn alert_ok_rect(screen_w: f32, screen_h: f32) -> Rectangle {
    Rectangle::new(screen_w / 2.0 - 50.0, screen_h / 2.0 + 24.0, 100.0, 36.0)
}

pub fn draw_alert(d: &mut RaylibDrawHandle, screen_w: f32, screen_h: f32, message: &str) {
    d.draw_rectangle(0, 0, screen_w as i32, screen_h as i32, Color::new(0, 0, 0, 170));
    let panel = Rectangle::new(
        screen_w / 2.0 - 220.0,
        screen_h / 2.0 - 70.0,
        440.0,
        150.0,
    );
    d.draw_rectangle_rec(panel, PANEL);
    d.draw_rectangle_lines_ex(panel, 2.0, ACCENT);
    draw_text_centered(d, message, screen_w / 2.0, panel.y + 34.0, 19, TEXT);
    let ok = alert_ok_rect(screen_w, screen_h);
    d.draw_rectangle_rec(ok, ACCENT);
    draw_text_centered(d, "OK", ok.x + ok.width / 2.0, ok.y + 9.0, 18, TEXT);
}
