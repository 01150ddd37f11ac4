/// Smallest scrollable distance used as the progress denominator. A section
/// no taller than the viewport would otherwise divide by zero or a negative
/// number; with a 1px floor progress flips from 0 to 1 within one pixel.
pub const MIN_SCROLL_SPAN_PX: f64 = 1.0;

/// Layout of the scroll-driven section, read fresh for every frame since a
/// resize can move or stretch it at any time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionGeometry {
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

impl SectionGeometry {
    /// Distance the page scrolls while the section stays pinned.
    pub fn scroll_span(&self, min_span: f64) -> f64 {
        let span = self.height - self.viewport_height;
        if span.is_finite() {
            span.max(min_span)
        } else {
            min_span
        }
    }

    pub fn progress(&self, scroll_y: f64, min_span: f64) -> f64 {
        scroll_progress(self, scroll_y, min_span)
    }
}

/// Normalised position of `scroll_y` within the section, clamped to `[0, 1]`.
pub fn scroll_progress(geometry: &SectionGeometry, scroll_y: f64, min_span: f64) -> f64 {
    let min_span = if min_span > 0.0 { min_span } else { MIN_SCROLL_SPAN_PX };
    let progress = (scroll_y - geometry.top) / geometry.scroll_span(min_span);
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTION: SectionGeometry = SectionGeometry {
        top: 200.0,
        height: 3000.0,
        viewport_height: 800.0,
    };

    #[test]
    fn section_entering_view_is_zero() {
        assert_eq!(SECTION.progress(200.0, MIN_SCROLL_SPAN_PX), 0.0);
    }

    #[test]
    fn section_scrolled_past_is_one() {
        assert_eq!(SECTION.progress(200.0 + 3000.0 - 800.0, MIN_SCROLL_SPAN_PX), 1.0);
    }

    #[test]
    fn midpoint_is_linear() {
        assert_eq!(SECTION.progress(200.0 + 1100.0, MIN_SCROLL_SPAN_PX), 0.5);
    }

    #[test]
    fn offsets_outside_section_clamp() {
        for y in [-500.0, 0.0, 199.0] {
            assert_eq!(SECTION.progress(y, MIN_SCROLL_SPAN_PX), 0.0);
        }
        for y in [2400.0, 2401.0, 1e9] {
            assert_eq!(SECTION.progress(y, MIN_SCROLL_SPAN_PX), 1.0);
        }
    }

    #[test]
    fn short_section_uses_minimum_span() {
        let short = SectionGeometry {
            top: 100.0,
            height: 600.0,
            viewport_height: 800.0,
        };
        assert_eq!(short.scroll_span(MIN_SCROLL_SPAN_PX), MIN_SCROLL_SPAN_PX);
        assert_eq!(short.progress(100.0, MIN_SCROLL_SPAN_PX), 0.0);
        assert_eq!(short.progress(100.5, MIN_SCROLL_SPAN_PX), 0.5);
        assert_eq!(short.progress(101.0, MIN_SCROLL_SPAN_PX), 1.0);

        let exact = SectionGeometry {
            top: 0.0,
            height: 800.0,
            viewport_height: 800.0,
        };
        assert!(exact.progress(400.0, MIN_SCROLL_SPAN_PX).is_finite());
    }

    #[test]
    fn non_positive_floor_is_replaced() {
        let flat = SectionGeometry {
            top: 0.0,
            height: 0.0,
            viewport_height: 0.0,
        };
        assert_eq!(flat.progress(0.0, 0.0), 0.0);
        assert_eq!(flat.progress(10.0, -3.0), 1.0);
    }

    #[test]
    fn garbage_layout_never_yields_nan() {
        let broken = SectionGeometry {
            top: f64::NAN,
            height: f64::INFINITY,
            viewport_height: 800.0,
        };
        assert_eq!(broken.progress(100.0, MIN_SCROLL_SPAN_PX), 0.0);
    }
}
