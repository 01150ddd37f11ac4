//! Scroll-synchronised hero video.
//!
//! The page scroll offset inside the hero section is mapped onto the video's
//! timeline. Readiness is detected from several redundant signals; if the
//! video never becomes seekable a static panel replaces it.

pub mod controller;
pub mod error;
pub mod fallback;
pub mod indicator;
pub mod media;
pub mod progress;
pub mod readiness;
pub mod scene;
pub mod scrubber;
pub mod sync;
pub mod throttle;

pub use controller::{ScrollVideoController, ScrollVideoElements};
pub use error::MediaError;
pub use readiness::{Phase, Transition};
