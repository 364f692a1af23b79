use crate::constants::*;
use crate::error::ShowcaseError;

/// Icon shown on the autoplay toggle. Play while paused (pressing it
/// starts rotation), pause bars while playing.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ToggleGlyph {
    Play,
    Pause,
}

/// One dot per slide. The label carries the 1-based position for
/// assistive output; exactly one indicator is selected at any time.
#[derive(Debug)]
pub struct Indicator {
    pub label: String,
    pub selected: bool,
}

/// Projection of the play/pause control: pressed state, accessible
/// label and glyph all swap together on every play/pause transition.
#[derive(Debug)]
pub struct ToggleControl {
    pub pressed: bool,
    pub label: &'static str,
    pub glyph: ToggleGlyph,
}

/// The carousel controller. Owns the current index, the autoplay
/// accumulator, the indicator set and the swipe tracker; knows nothing
/// about the render surface. The draw layer reads `offset()` and the
/// indicator/toggle projections, and feeds pointer and gesture events in.
///
/// Invariants:
/// - `0 <= index < len` at all times; navigation wraps modulo `len`.
/// - `autoplay` is `Some` if and only if playback is active, so at most
///   one timer ever exists.
pub struct Carousel {
    len: usize,
    index: usize,
    autoplay: Option<f32>,
    pub indicators: Vec<Indicator>,
    pub toggle: ToggleControl,
    hovered: bool,
    resume_on_leave: bool,
    swipe_start: Option<f32>,
}

impl Carousel {
    pub fn new(len: usize) -> Result<Self, ShowcaseError> {
        if len == 0 {
            return Err(ShowcaseError::MissingElement("carousel slides"));
        }

        let indicators = (0..len)
            .map(|i| Indicator {
                label: format!("Go to slide {}", i + 1),
                selected: i == 0,
            })
            .collect();

        Ok(Self {
            len,
            index: 0,
            autoplay: None,
            indicators,
            toggle: ToggleControl {
                pressed: false,
                label: "Start automatic rotation",
                glyph: ToggleGlyph::Play,
            },
            hovered: false,
            resume_on_leave: false,
            swipe_start: None,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_playing(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Horizontal offset of the viewport contents, in viewport widths.
    pub fn offset(&self) -> f32 {
        -(self.index as f32)
    }

    // --- Navigation ---

    /// Jump straight to `index`. Contract: `index < len`. Only the
    /// indicators call this, and they are 1:1 with the slides.
    pub fn go_to(&mut self, index: usize) {
        debug_assert!(index < self.len, "slide index out of range");
        self.index = index;
        self.sync_indicators();
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
        self.sync_indicators();
    }

    pub fn previous(&mut self) {
        self.index = if self.index == 0 { self.len - 1 } else { self.index - 1 };
        self.sync_indicators();
    }

    fn sync_indicators(&mut self) {
        for (i, dot) in self.indicators.iter_mut().enumerate() {
            dot.selected = i == self.index;
        }
    }

    // --- Autoplay ---

    pub fn play(&mut self) {
        if self.autoplay.is_some() {
            return; // never arm a second timer
        }
        self.toggle = ToggleControl {
            pressed: true,
            label: "Pause automatic rotation",
            glyph: ToggleGlyph::Pause,
        };
        self.autoplay = Some(0.0);
    }

    pub fn pause(&mut self) {
        self.toggle = ToggleControl {
            pressed: false,
            label: "Start automatic rotation",
            glyph: ToggleGlyph::Play,
        };
        self.autoplay = None;
    }

    pub fn toggle_autoplay(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Advance the autoplay accumulator by the frame delta; fires one
    /// `next()` per elapsed interval boundary.
    pub fn update(&mut self, dt: f32) {
        let fired = match &mut self.autoplay {
            Some(elapsed) => {
                *elapsed += dt;
                if *elapsed >= AUTOPLAY_INTERVAL {
                    *elapsed -= AUTOPLAY_INTERVAL;
                    true
                } else {
                    false
                }
            }
            None => false,
        };
        if fired {
            self.next();
        }
    }

    /// Release the autoplay timer. Called on every shutdown path.
    pub fn teardown(&mut self) {
        self.pause();
    }

    // --- Hover ---

    /// Pointer entered the carousel root. Always pauses; remembers
    /// whether playback was on so leaving can resume it.
    pub fn hover_enter(&mut self) {
        if self.hovered {
            return;
        }
        self.hovered = true;
        self.resume_on_leave = self.is_playing();
        self.pause();
    }

    /// Pointer left the root. Resumes only if the hover interrupted an
    /// active playback; never starts autoplay that was never running.
    pub fn hover_leave(&mut self) {
        if !self.hovered {
            return;
        }
        self.hovered = false;
        if self.resume_on_leave {
            self.play();
        }
        self.resume_on_leave = false;
    }

    // --- Swipe ---

    pub fn touch_start(&mut self, x: f32) {
        self.swipe_start = Some(x);
    }

    pub fn touch_end(&mut self, x: f32) {
        let Some(start) = self.swipe_start.take() else {
            return;
        };
        let delta = start - x;
        if delta.abs() > SWIPE_THRESHOLD {
            if delta > 0.0 {
                self.next();
            } else {
                self.previous();
            }
        }
        // At or below the threshold it was a tap, not a swipe.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn carousel(len: usize) -> Carousel {
        Carousel::new(len).unwrap()
    }

    #[test]
    fn empty_deck_is_a_missing_element() {
        assert!(matches!(
            Carousel::new(0),
            Err(ShowcaseError::MissingElement("carousel slides"))
        ));
    }

    #[test]
    fn index_stays_in_bounds_over_mixed_navigation() {
        for len in 1..=5 {
            let mut c = carousel(len);
            for step in 0..50 {
                if step % 3 == 0 {
                    c.previous();
                } else {
                    c.next();
                }
                assert!(c.index() < len);
            }
        }
    }

    #[test]
    fn next_then_previous_is_identity() {
        for len in 1..=6 {
            let mut c = carousel(len);
            c.go_to(len / 2);
            let start = c.index();
            c.next();
            c.previous();
            assert_eq!(c.index(), start);
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for len in 1..=6 {
            let mut c = carousel(len);
            c.go_to(len - 1);
            let start = c.index();
            for _ in 0..len {
                c.next();
            }
            assert_eq!(c.index(), start);
        }
    }

    #[test]
    fn two_next_one_previous_lands_on_one() {
        let mut c = carousel(4);
        c.next();
        c.next();
        c.previous();
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn exactly_one_indicator_selected_after_navigation() {
        let mut c = carousel(5);
        c.next();
        c.next();
        c.previous();
        let selected: Vec<usize> = c
            .indicators
            .iter()
            .enumerate()
            .filter(|(_, d)| d.selected)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(selected, vec![c.index()]);
    }

    #[test]
    fn indicator_labels_are_one_based() {
        let c = carousel(3);
        let labels: Vec<&str> = c.indicators.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["Go to slide 1", "Go to slide 2", "Go to slide 3"]);
    }

    #[test]
    fn offset_is_minus_index_viewport_widths() {
        let mut c = carousel(4);
        assert_eq!(c.offset(), 0.0);
        c.go_to(3);
        assert_eq!(c.offset(), -3.0);
    }

    #[test]
    fn play_then_pause_leaves_no_timer() {
        let mut c = carousel(3);
        c.play();
        assert!(c.is_playing());
        c.pause();
        assert!(!c.is_playing());
        assert!(c.autoplay.is_none());
    }

    #[test]
    fn double_play_keeps_a_single_timer() {
        let mut c = carousel(3);
        c.play();
        c.update(3.0); // accumulator at 3.0
        c.play(); // must not rearm
        c.update(2.0); // crosses 5.0 exactly once
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn toggle_flips_between_states() {
        let mut c = carousel(3);
        c.toggle_autoplay();
        assert!(c.is_playing());
        assert_eq!(c.toggle.glyph, ToggleGlyph::Pause);
        assert!(c.toggle.pressed);
        assert_eq!(c.toggle.label, "Pause automatic rotation");
        c.toggle_autoplay();
        assert!(!c.is_playing());
        assert_eq!(c.toggle.glyph, ToggleGlyph::Play);
        assert!(!c.toggle.pressed);
        assert_eq!(c.toggle.label, "Start automatic rotation");
    }

    #[test]
    fn autoplay_fires_on_the_interval_boundary() {
        let mut c = carousel(4);
        c.play();
        c.update(4.9);
        assert_eq!(c.index(), 0);
        c.update(0.1);
        assert_eq!(c.index(), 1);
        // Remainder carries over so the cadence stays steady.
        c.update(4.95);
        assert_eq!(c.index(), 1);
        c.update(0.05);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn paused_carousel_ignores_time() {
        let mut c = carousel(4);
        c.update(60.0);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn teardown_releases_the_timer() {
        let mut c = carousel(2);
        c.play();
        c.teardown();
        assert!(!c.is_playing());
    }

    #[test]
    fn swipe_past_threshold_advances() {
        let mut c = carousel(4);
        c.touch_start(200.0);
        c.touch_end(140.0); // delta 60 > 50, finger moved right-to-left
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn swipe_below_threshold_is_a_tap() {
        let mut c = carousel(4);
        c.touch_start(200.0);
        c.touch_end(170.0); // delta 30
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn leftward_start_swipe_goes_back() {
        let mut c = carousel(4);
        c.touch_start(100.0);
        c.touch_end(180.0); // delta -80
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn touch_end_without_start_is_ignored() {
        let mut c = carousel(4);
        c.touch_end(0.0);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn gesture_tracker_resets_each_cycle() {
        let mut c = carousel(4);
        c.touch_start(200.0);
        c.touch_end(140.0);
        assert_eq!(c.index(), 1);
        c.touch_end(0.0); // stale end with no new start
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn hover_resumes_playback_that_it_interrupted() {
        let mut c = carousel(3);
        c.play();
        c.hover_enter();
        assert!(!c.is_playing());
        c.hover_leave();
        assert!(c.is_playing());
    }

    #[test]
    fn hover_never_starts_idle_playback() {
        let mut c = carousel(3);
        c.hover_enter();
        c.hover_leave();
        assert!(!c.is_playing());
    }

    #[test]
    fn toggle_works_while_hovered() {
        let mut c = carousel(3);
        c.hover_enter();
        c.toggle_autoplay(); // hover pause is not a lock
        assert!(c.is_playing());
    }

    #[test]
    fn repeated_hover_enter_is_idempotent() {
        let mut c = carousel(3);
        c.play();
        c.hover_enter();
        c.hover_enter(); // must not overwrite the captured intent
        c.hover_leave();
        assert!(c.is_playing());
    }
}
