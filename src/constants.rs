pub const WINDOW_WIDTH: i32 = 960;             // Initial window width
pub const WINDOW_HEIGHT: i32 = 640;            // Initial window height

pub const AUTOPLAY_INTERVAL: f32 = 5.0;        // Seconds between automatic slide advances
pub const SWIPE_THRESHOLD: f32 = 50.0;         // Horizontal drag distance that counts as a swipe (px)

pub const HEADER_SCROLL_THRESHOLD: f32 = 50.0; // Scroll depth past which the header condenses (px)
pub const HEADER_HEIGHT: f32 = 72.0;           // Header height at the top of the page (px)
pub const HEADER_HEIGHT_SCROLLED: f32 = 56.0;  // Header height once condensed (px)

pub const REVEAL_THRESHOLD: f32 = 0.1;         // Fraction of a section that must be visible to reveal it
pub const REVEAL_BOTTOM_MARGIN: f32 = 50.0;    // Viewport shrink at the bottom for the reveal test (px)
pub const REVEAL_DURATION: f32 = 0.6;          // Fade-in animation length (seconds)
pub const REVEAL_RISE: f32 = 24.0;             // Upward travel during the fade-in (px)

pub const ANCHOR_SCROLL_PAD: f32 = 20.0;       // Gap left between the header and a scrolled-to section (px)
pub const SMOOTH_SCROLL_RATE: f32 = 8.0;       // Exponential approach rate for smooth scrolling (1/s)
pub const SMOOTH_SCROLL_SNAP: f32 = 0.5;       // Distance below which a smooth scroll snaps to target (px)
pub const WHEEL_STEP: f32 = 60.0;              // Scroll distance per wheel notch (px)

pub const FORM_SEND_DELAY: f32 = 1.0;          // Simulated submission round-trip (seconds)
pub const FORM_CONFIRM_DELAY: f32 = 2.0;       // How long the confirmation state is shown (seconds)
pub const FORM_MAX_INPUT: usize = 64;          // E-mail field length cap
