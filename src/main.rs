use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod carousel;
mod constants;
mod error;
mod header;
mod layout;
mod newsletter;
mod page;
mod reveal;
mod texture_loader;
mod ui;

use crate::carousel::Carousel;
use crate::constants::*;
use crate::layout::{PageLayout, to_screen};
use crate::newsletter::Newsletter;
use crate::page::{PageScroll, SkipLink, anchor_target};
use crate::reveal::Reveal;
use crate::texture_loader::{load_slide_paths, load_slide_texture};

/// A small interactive landing page: image carousel with autoplay and
/// swipe, fade-in sections, smooth anchor navigation and a newsletter
/// form.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Directory containing the slide images
    image_directory: PathBuf,

    /// Start with automatic rotation enabled
    #[arg(long)]
    autoplay: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Showcase")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(60);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load the slide deck ---
    let paths = load_slide_paths(&args.image_directory)
        .with_context(|| format!("loading slides from {}", args.image_directory.display()))?;
    let mut slides: Vec<Texture2D> = Vec::new();
    for path in &paths {
        match load_slide_texture(&mut rl, &thread, path) {
            Ok(texture) => slides.push(texture),
            Err(e) => warn!(error = %e, "skipping slide"),
        }
    }

    let mut carousel = Carousel::new(slides.len()).context("building the carousel")?;
    info!(slides = slides.len(), "deck ready");
    if args.autoplay {
        carousel.play();
    }

    // --- Page services ---
    let mut scroll = PageScroll::new(0.0);
    let mut skip_link = SkipLink::new();
    let mut form = Newsletter::new();
    let mut card_reveals = [Reveal::new(), Reveal::new(), Reveal::new()];
    let mut form_reveal = Reveal::new();
    let mut hovered = false; // pointer was inside the carousel root last frame
    let mut clock: f32 = 0.0; // wall clock for caret blink and spinner

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        clock += dt;

        let screen_w = rl.get_screen_width() as f32;
        let screen_h = rl.get_screen_height() as f32;
        let header_h = header::height(scroll.scroll_y());
        let layout = PageLayout::compute(screen_w, header_h, carousel.len());
        scroll.set_max_scroll(layout.content_height - screen_h);

        // --- Input ---
        let mouse = rl.get_mouse_position();
        if form.error.is_some() {
            // The validation alert is modal: only dismissal gets through.
            if rl.is_key_pressed(KeyboardKey::KEY_ENTER)
                || (rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT)
                    && ui::alert_ok_rect(screen_w, screen_h).check_collision_point_rec(mouse))
            {
                form.dismiss_error();
            }
        } else {
            let wheel = rl.get_mouse_wheel_move();
            if wheel != 0.0 {
                scroll.scroll_by(-wheel * WHEEL_STEP);
            }

            let sy = scroll.scroll_y();
            let over_carousel =
                to_screen(layout.carousel_root, sy).check_collision_point_rec(mouse);
            if over_carousel && !hovered {
                carousel.hover_enter();
            } else if !over_carousel && hovered {
                carousel.hover_leave();
            }
            hovered = over_carousel;

            if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
                skip_link.blur();
                let hit = |r: Rectangle| to_screen(r, sy).check_collision_point_rec(mouse);

                if let Some(i) = layout
                    .nav_links
                    .iter()
                    .position(|r| r.check_collision_point_rec(mouse))
                {
                    let section_top =
                        [layout.gallery.y, layout.features.y, layout.newsletter.y][i];
                    scroll.scroll_to(anchor_target(section_top, header_h));
                    form.focused = false;
                } else if hit(layout.prev) {
                    carousel.previous();
                    form.focused = false;
                } else if hit(layout.next) {
                    carousel.next();
                    form.focused = false;
                } else if hit(layout.toggle) {
                    carousel.toggle_autoplay();
                    form.focused = false;
                } else if let Some(i) = layout.dots.iter().position(|r| hit(*r)) {
                    carousel.go_to(i);
                    form.focused = false;
                } else if hit(layout.viewport) {
                    carousel.touch_start(mouse.x);
                    form.focused = false;
                } else if hit(layout.submit) {
                    form.submit();
                } else {
                    form.focused = hit(layout.field);
                }
            }
            if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
                carousel.touch_end(mouse.x);
            }

            // Keyboard: Tab walks skip link -> e-mail field -> nothing.
            if rl.is_key_pressed(KeyboardKey::KEY_TAB) {
                if skip_link.focused {
                    skip_link.blur();
                    form.focused = true;
                } else if form.focused {
                    form.focused = false;
                } else {
                    skip_link.focus();
                }
            }
            if rl.is_key_pressed(KeyboardKey::KEY_ENTER) {
                if skip_link.focused {
                    scroll.scroll_to(anchor_target(layout.hero.y, header_h));
                    skip_link.blur();
                } else if form.focused {
                    form.submit();
                }
            }
            if form.focused {
                while let Some(c) = rl.get_char_pressed() {
                    form.type_char(c);
                }
                if rl.is_key_pressed(KeyboardKey::KEY_BACKSPACE) {
                    form.backspace();
                }
            }
        }

        // --- Update ---
        carousel.update(dt);
        scroll.update(dt);
        form.update(dt);

        let sy = scroll.scroll_y();
        for (rect, reveal) in layout.cards.iter().zip(card_reveals.iter_mut()) {
            reveal.observe(rect.y, rect.height, sy, screen_h);
            reveal.update(dt);
        }
        form_reveal.observe(layout.newsletter.y, layout.newsletter.height, sy, screen_h);
        form_reveal.update(dt);

        // --- Draw ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(ui::PAGE_BG);

        ui::draw_hero(&mut d, &layout, sy);
        ui::draw_carousel(&mut d, &layout, &carousel, &slides, sy);
        ui::draw_features(&mut d, &layout, &card_reveals, sy);
        ui::draw_newsletter(&mut d, &layout, &form, &form_reveal, sy, clock);
        ui::draw_footer(&mut d, &layout, sy);

        ui::draw_header(&mut d, &layout, header::scrolled(sy));
        ui::draw_skip_link(&mut d, &layout, &skip_link);

        if let Some(message) = form.error {
            ui::draw_alert(&mut d, screen_w, screen_h, message);
        }
    }

    carousel.teardown();
    Ok(())
}
