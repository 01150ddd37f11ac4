//! Decides when the hero video can be scrubbed.
//!
//! Media events are not delivered reliably everywhere (autoplay policies,
//! cached responses, some in-app browsers), so several sources feed the same
//! detector: lifecycle events, a periodic `readyState` poll, a deadline and
//! error events. They all end in [`ReadinessDetector::mark_ready`] or
//! [`ReadinessDetector::activate_fallback`], which only take effect once.

use super::error::MediaError;
use super::media::{playable_duration, ReadyState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Fallback,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Phase::Loading)
    }
}

/// Media lifecycle events that can prove the video is seekable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadinessSignal {
    LoadedMetadata,
    LoadedData,
    CanPlay,
    CanPlayThrough,
}

impl ReadinessSignal {
    pub const ALL: [ReadinessSignal; 4] = [
        ReadinessSignal::LoadedMetadata,
        ReadinessSignal::LoadedData,
        ReadinessSignal::CanPlay,
        ReadinessSignal::CanPlayThrough,
    ];

    /// DOM event name for this signal.
    pub fn event_name(self) -> &'static str {
        match self {
            ReadinessSignal::LoadedMetadata => "loadedmetadata",
            ReadinessSignal::LoadedData => "loadeddata",
            ReadinessSignal::CanPlay => "canplay",
            ReadinessSignal::CanPlayThrough => "canplaythrough",
        }
    }
}

/// Outcome of feeding one observation to the detector.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    Unchanged,
    Ready { duration: f64 },
    Fallback(MediaError),
}

impl Transition {
    /// True for the one transition that ends loading, either way.
    pub fn settles(&self) -> bool {
        !matches!(self, Transition::Unchanged)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReadinessDetector {
    phase: Phase,
    timeout_ms: u32,
    min_poll_state: ReadyState,
    started_at_ms: Option<f64>,
    activated_at_ms: Option<f64>,
    duration: Option<f64>,
    polls: u32,
    failure: Option<MediaError>,
}

impl ReadinessDetector {
    pub fn new(timeout_ms: u32, min_poll_state: ReadyState) -> Self {
        Self {
            phase: Phase::Loading,
            timeout_ms,
            min_poll_state,
            started_at_ms: None,
            activated_at_ms: None,
            duration: None,
            polls: 0,
            failure: None,
        }
    }

    /// Start the clock. Without a source there is nothing to wait for, so the
    /// detector falls back on the spot.
    pub fn begin(&mut self, has_source: bool, now_ms: f64) -> Transition {
        if self.phase.is_terminal() {
            return Transition::Unchanged;
        }
        self.started_at_ms.get_or_insert(now_ms);
        if has_source {
            Transition::Unchanged
        } else {
            self.activate_fallback(MediaError::MissingSource, now_ms)
        }
    }

    pub fn on_signal(&mut self, signal: ReadinessSignal, duration: f64, now_ms: f64) -> Transition {
        if self.phase == Phase::Loading {
            log::debug!("Video signal {} (duration {})", signal.event_name(), duration);
        }
        self.mark_ready(duration, now_ms)
    }

    /// Redundant path for environments that swallow media events.
    pub fn on_poll(&mut self, state: ReadyState, duration: f64, now_ms: f64) -> Transition {
        if self.phase.is_terminal() {
            return Transition::Unchanged;
        }
        self.polls += 1;
        if state >= self.min_poll_state {
            return self.mark_ready(duration, now_ms);
        }
        Transition::Unchanged
    }

    /// Falls back once the budget since [`begin`](Self::begin) is spent.
    pub fn on_deadline(&mut self, now_ms: f64) -> Transition {
        if self.phase.is_terminal() {
            return Transition::Unchanged;
        }
        let started = *self.started_at_ms.get_or_insert(now_ms);
        if now_ms - started >= f64::from(self.timeout_ms) {
            return self.activate_fallback(
                MediaError::LoadTimeout {
                    waited_ms: self.timeout_ms,
                },
                now_ms,
            );
        }
        Transition::Unchanged
    }

    /// One scheduled check: poll first, so a video that became ready right at
    /// the deadline still wins.
    pub fn tick(&mut self, state: ReadyState, duration: f64, now_ms: f64) -> Transition {
        match self.on_poll(state, duration, now_ms) {
            Transition::Unchanged => self.on_deadline(now_ms),
            transition => transition,
        }
    }

    pub fn on_error(&mut self, error: MediaError, now_ms: f64) -> Transition {
        if !error.is_terminal() {
            return Transition::Unchanged;
        }
        self.activate_fallback(error, now_ms)
    }

    /// Loading -> Ready. Ignored after any terminal state, and ignored while
    /// the duration is still unknown.
    pub fn mark_ready(&mut self, duration: f64, now_ms: f64) -> Transition {
        if self.phase != Phase::Loading {
            return Transition::Unchanged;
        }
        let Some(duration) = playable_duration(duration) else {
            return Transition::Unchanged;
        };
        self.phase = Phase::Ready;
        self.duration = Some(duration);
        self.activated_at_ms = Some(now_ms);
        Transition::Ready { duration }
    }

    /// Loading -> Fallback. Ignored after any terminal state.
    pub fn activate_fallback(&mut self, cause: MediaError, now_ms: f64) -> Transition {
        if self.phase != Phase::Loading {
            return Transition::Unchanged;
        }
        self.phase = Phase::Fallback;
        self.failure = Some(cause.clone());
        self.activated_at_ms = Some(now_ms);
        Transition::Fallback(cause)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn activated_at_ms(&self) -> Option<f64> {
        self.activated_at_ms
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn polls(&self) -> u32 {
        self.polls
    }

    pub fn failure(&self) -> Option<&MediaError> {
        self.failure.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> ReadinessDetector {
        let mut d = ReadinessDetector::new(3000, ReadyState::HaveMetadata);
        assert_eq!(d.begin(true, 0.0), Transition::Unchanged);
        d
    }

    #[test]
    fn only_the_settling_transition_settles() {
        let mut d = detector();
        assert!(!d.on_poll(ReadyState::HaveNothing, f64::NAN, 250.0).settles());
        assert!(d.mark_ready(8.0, 300.0).settles());
        assert!(!d.mark_ready(8.0, 310.0).settles());
        assert!(!d.on_error(MediaError::Network, 320.0).settles());
        assert!(Transition::Fallback(MediaError::Decode).settles());
    }

    #[test]
    fn missing_source_falls_back_immediately() {
        let mut d = ReadinessDetector::new(3000, ReadyState::HaveMetadata);
        assert_eq!(
            d.begin(false, 5.0),
            Transition::Fallback(MediaError::MissingSource)
        );
        assert_eq!(d.phase(), Phase::Fallback);
        assert_eq!(d.activated_at_ms(), Some(5.0));
    }

    #[test]
    fn any_signal_with_duration_marks_ready() {
        for signal in ReadinessSignal::ALL {
            let mut d = detector();
            assert_eq!(
                d.on_signal(signal, 8.0, 100.0),
                Transition::Ready { duration: 8.0 }
            );
            assert!(d.is_ready());
        }
    }

    #[test]
    fn signal_without_duration_keeps_waiting() {
        let mut d = detector();
        assert_eq!(
            d.on_signal(ReadinessSignal::LoadedMetadata, f64::NAN, 50.0),
            Transition::Unchanged
        );
        assert_eq!(d.phase(), Phase::Loading);
        assert_eq!(
            d.on_signal(ReadinessSignal::CanPlay, 4.0, 80.0),
            Transition::Ready { duration: 4.0 }
        );
    }

    #[test]
    fn first_signal_wins() {
        let mut d = detector();
        d.on_signal(ReadinessSignal::LoadedData, 8.0, 100.0);
        let snapshot = d.clone();
        assert_eq!(
            d.on_signal(ReadinessSignal::CanPlayThrough, 9.0, 200.0),
            Transition::Unchanged
        );
        assert_eq!(d, snapshot);
        assert_eq!(d.activated_at_ms(), Some(100.0));
        assert_eq!(d.duration(), Some(8.0));
    }

    #[test]
    fn mark_ready_is_idempotent() {
        let mut once = detector();
        once.mark_ready(6.0, 10.0);
        let mut twice = detector();
        twice.mark_ready(6.0, 10.0);
        twice.mark_ready(6.0, 10.0);
        assert_eq!(once, twice);
    }

    #[test]
    fn activate_fallback_is_idempotent() {
        let mut once = detector();
        once.activate_fallback(MediaError::Network, 10.0);
        let mut twice = detector();
        twice.activate_fallback(MediaError::Network, 10.0);
        twice.activate_fallback(MediaError::Decode, 20.0);
        assert_eq!(once, twice);
        assert_eq!(twice.failure(), Some(&MediaError::Network));
    }

    #[test]
    fn poll_marks_ready_when_events_are_missed() {
        let mut d = detector();
        assert_eq!(
            d.tick(ReadyState::HaveNothing, f64::NAN, 250.0),
            Transition::Unchanged
        );
        assert_eq!(
            d.tick(ReadyState::HaveEnoughData, 12.0, 500.0),
            Transition::Ready { duration: 12.0 }
        );
        assert_eq!(d.polls(), 2);
    }

    #[test]
    fn poll_respects_minimum_ready_state() {
        let mut d = ReadinessDetector::new(3000, ReadyState::HaveFutureData);
        d.begin(true, 0.0);
        assert_eq!(
            d.on_poll(ReadyState::HaveCurrentData, 12.0, 250.0),
            Transition::Unchanged
        );
        assert_eq!(
            d.on_poll(ReadyState::HaveFutureData, 12.0, 500.0),
            Transition::Ready { duration: 12.0 }
        );
    }

    #[test]
    fn deadline_falls_back_exactly_once() {
        let mut d = detector();
        let mut fallbacks = 0;
        for step in 1..=20 {
            let now = f64::from(step) * 250.0;
            if let Transition::Fallback(cause) = d.tick(ReadyState::HaveNothing, f64::NAN, now) {
                assert_eq!(cause, MediaError::LoadTimeout { waited_ms: 3000 });
                assert_eq!(now, 3000.0);
                fallbacks += 1;
            }
        }
        assert_eq!(fallbacks, 1);
        // polling stops counting once terminal
        assert_eq!(d.polls(), 12);
    }

    #[test]
    fn readiness_on_the_deadline_tick_wins() {
        let mut d = detector();
        assert_eq!(
            d.tick(ReadyState::HaveMetadata, 5.0, 3000.0),
            Transition::Ready { duration: 5.0 }
        );
    }

    #[test]
    fn error_routes_to_fallback() {
        let mut d = detector();
        assert_eq!(
            d.on_error(MediaError::Decode, 40.0),
            Transition::Fallback(MediaError::Decode)
        );
        assert_eq!(d.failure(), Some(&MediaError::Decode));
    }

    #[test]
    fn seek_rejection_never_ends_loading() {
        let mut d = detector();
        assert_eq!(
            d.on_error(MediaError::SeekRejected { target: 1.0 }, 40.0),
            Transition::Unchanged
        );
        assert_eq!(d.phase(), Phase::Loading);
    }

    #[test]
    fn terminal_states_never_change() {
        let mut ready = detector();
        ready.mark_ready(5.0, 1.0);
        let mut fallen = detector();
        fallen.activate_fallback(MediaError::Aborted, 1.0);

        for d in [&mut ready, &mut fallen] {
            let snapshot = d.clone();
            d.on_signal(ReadinessSignal::CanPlay, 7.0, 2.0);
            d.tick(ReadyState::HaveEnoughData, 7.0, 99_999.0);
            d.on_deadline(99_999.0);
            d.on_error(MediaError::Network, 3.0);
            d.mark_ready(7.0, 4.0);
            d.activate_fallback(MediaError::Decode, 5.0);
            d.begin(false, 6.0);
            assert_eq!(*d, snapshot);
        }
    }
}
