use serde::Deserialize;
use web_sys::HtmlElement;

use crate::scroll_video::media::ReadyState;

pub const SITE_NAME: &str = "Arcano Intelligence";
pub const CONTACT_EMAIL: &str = "info@arcanointelligence.com";
pub const WHATSAPP_DISPLAY: &str = "+1 (787) 123-4567";
pub const WHATSAPP_URL: &str = "https://wa.me/17871234567";
pub const LOCATION: &str = "Puerto Rico";
pub const OFFICE_HOURS: &str = "Lun - Vie: 9AM - 6PM";

/// Clip scrubbed by the hero section. An empty path renders the video
/// without a source, which sends the page straight to the static panel.
pub const HERO_VIDEO_SRC: &str = "/assets/hero-scroll.mp4";

/// Attribute on the scroll section that may carry a JSON override.
pub const SCRUB_CONFIG_ATTR: &str = "data-scrub-config";

/// Navbar switches to its solid style past this offset.
pub const NAV_SCROLLED_AFTER_PX: f64 = 50.0;

/// Tuning for the scroll-driven hero video. These were tuned by eye against
/// real browsers; none of them are load-bearing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollVideoConfig {
    pub readiness_timeout_ms: u32,
    pub poll_interval_ms: u32,
    pub jitter_threshold_s: f64,
    pub tail_buffer_s: f64,
    pub indicator_fade_start_px: f64,
    pub indicator_fade_end_px: f64,
    pub throttle_ms: f64,
    pub min_scroll_span_px: f64,
    pub min_poll_state: ReadyState,
}

impl Default for ScrollVideoConfig {
    fn default() -> Self {
        Self {
            readiness_timeout_ms: 3000,
            poll_interval_ms: 250,
            jitter_threshold_s: 0.05,
            tail_buffer_s: 0.1,
            indicator_fade_start_px: 100.0,
            indicator_fade_end_px: 400.0,
            throttle_ms: 16.0,
            min_scroll_span_px: 1.0,
            min_poll_state: ReadyState::HaveMetadata,
        }
    }
}

fn non_negative_or(value: f64, default: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        default
    }
}

impl ScrollVideoConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(config.sanitized())
    }

    /// Defaults, overridden by the section's `data-scrub-config` when present.
    pub fn from_section(section: &HtmlElement) -> Self {
        match section.get_attribute(SCRUB_CONFIG_ATTR) {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed {}: {}", SCRUB_CONFIG_ATTR, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.poll_interval_ms = self.poll_interval_ms.max(1);
        self.jitter_threshold_s =
            non_negative_or(self.jitter_threshold_s, defaults.jitter_threshold_s);
        self.tail_buffer_s = non_negative_or(self.tail_buffer_s, defaults.tail_buffer_s);
        self.indicator_fade_start_px =
            non_negative_or(self.indicator_fade_start_px, defaults.indicator_fade_start_px);
        self.indicator_fade_end_px = non_negative_or(
            self.indicator_fade_end_px,
            defaults.indicator_fade_end_px,
        )
        .max(self.indicator_fade_start_px);
        self.throttle_ms = non_negative_or(self.throttle_ms, defaults.throttle_ms);
        if !(self.min_scroll_span_px.is_finite() && self.min_scroll_span_px > 0.0) {
            self.min_scroll_span_px = defaults.min_scroll_span_px;
        }
        self
    }
}
