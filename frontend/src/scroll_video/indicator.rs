/// Opacity of the "scroll down" hint, driven by absolute page offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorFade {
    pub fade_start: f64,
    pub fade_end: f64,
}

impl IndicatorFade {
    pub fn new(fade_start: f64, fade_end: f64) -> Self {
        Self {
            fade_start,
            fade_end,
        }
    }

    pub fn opacity(&self, scroll_y: f64) -> f64 {
        if scroll_y.is_nan() || scroll_y < self.fade_start {
            return 1.0;
        }
        if scroll_y >= self.fade_end {
            return 0.0;
        }
        let span = self.fade_end - self.fade_start;
        (1.0 - (scroll_y - self.fade_start) / span).clamp(0.0, 1.0)
    }
}

impl Default for IndicatorFade {
    fn default() -> Self {
        Self::new(100.0, 400.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fades_linearly_between_thresholds() {
        let fade = IndicatorFade::default();
        assert_eq!(fade.opacity(0.0), 1.0);
        assert_eq!(fade.opacity(100.0), 1.0);
        assert_eq!(fade.opacity(250.0), 0.5);
        assert_eq!(fade.opacity(400.0), 0.0);
        assert_eq!(fade.opacity(5000.0), 0.0);
    }

    #[test]
    fn collapsed_range_is_a_step() {
        let fade = IndicatorFade::new(300.0, 300.0);
        assert_eq!(fade.opacity(299.0), 1.0);
        assert_eq!(fade.opacity(300.0), 0.0);
    }
}
