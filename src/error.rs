use thiserror::Error;

/// Structural failures surfaced at construction time. Navigation and
/// rendering never error: out-of-range indices are caller contract
/// violations, not runtime conditions.
#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("missing element: {0}")]
    MissingElement(&'static str),

    #[error("failed to load slide {path}: {reason}")]
    SlideLoad { path: String, reason: String },
}
