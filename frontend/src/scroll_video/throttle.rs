/// Verdict for one scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Admit {
    Run,
    /// Too soon. Run once more after `wait_ms` so the final position lands.
    Trailing { wait_ms: f64 },
    /// Too soon and a trailing run is already queued.
    Drop,
}

/// Leading-edge throttle with a single trailing run, roughly one frame wide.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameThrottle {
    window_ms: f64,
    last_run_ms: Option<f64>,
    trailing_pending: bool,
}

impl FrameThrottle {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms: window_ms.max(0.0),
            last_run_ms: None,
            trailing_pending: false,
        }
    }

    pub fn admit(&mut self, now_ms: f64) -> Admit {
        match self.last_run_ms {
            Some(last) if now_ms - last < self.window_ms => {
                if self.trailing_pending {
                    Admit::Drop
                } else {
                    self.trailing_pending = true;
                    Admit::Trailing {
                        wait_ms: self.window_ms - (now_ms - last),
                    }
                }
            }
            _ => {
                self.last_run_ms = Some(now_ms);
                Admit::Run
            }
        }
    }

    /// Record that the queued trailing run happened.
    pub fn trailing_ran(&mut self, now_ms: f64) {
        self.trailing_pending = false;
        self.last_run_ms = Some(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_event_runs() {
        let mut t = FrameThrottle::new(16.0);
        assert_eq!(t.admit(0.0), Admit::Run);
    }

    #[test]
    fn burst_collapses_to_one_trailing_run() {
        let mut t = FrameThrottle::new(16.0);
        assert_eq!(t.admit(100.0), Admit::Run);
        assert_eq!(t.admit(104.0), Admit::Trailing { wait_ms: 12.0 });
        assert_eq!(t.admit(108.0), Admit::Drop);
        assert_eq!(t.admit(115.0), Admit::Drop);
        t.trailing_ran(116.0);
        assert_eq!(t.admit(120.0), Admit::Trailing { wait_ms: 12.0 });
    }

    #[test]
    fn spaced_events_all_run() {
        let mut t = FrameThrottle::new(16.0);
        for i in 0..10 {
            assert_eq!(t.admit(f64::from(i) * 20.0), Admit::Run);
        }
    }
}
