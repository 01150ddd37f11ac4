use super::media::{is_buffered, playable_duration, MediaHandle};

/// What a single synchronisation attempt did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SyncOutcome {
    /// Duration unknown, nothing to map onto.
    NoDuration,
    /// Target within the jitter threshold of the current position.
    Skipped { target: f64 },
    Seeked { target: f64 },
    /// Target outside the buffered ranges; seeking there would stall.
    Unbuffered { target: f64 },
    /// The element refused the seek; the next scroll tick will try again.
    Rejected { target: f64 },
}

/// Playback position for `progress`, keeping `tail_buffer` seconds clear of
/// the end so the last decodable frame is never overshot.
pub fn target_time(progress: f64, duration: f64, tail_buffer: f64) -> f64 {
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let usable = (duration - tail_buffer.max(0.0)).max(0.0);
    (progress * usable).clamp(0.0, duration.max(0.0))
}

/// Maps scroll progress onto the video's timeline with hysteresis.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSync {
    jitter_threshold: f64,
    tail_buffer: f64,
    seeks: u32,
    rejected: u32,
    unbuffered: u32,
}

impl TimeSync {
    pub fn new(jitter_threshold: f64, tail_buffer: f64) -> Self {
        Self {
            jitter_threshold,
            tail_buffer,
            seeks: 0,
            rejected: 0,
            unbuffered: 0,
        }
    }

    pub fn apply<M: MediaHandle + ?Sized>(&mut self, media: &M, progress: f64) -> SyncOutcome {
        let Some(duration) = playable_duration(media.duration()) else {
            return SyncOutcome::NoDuration;
        };
        let target = target_time(progress, duration, self.tail_buffer);
        if (target - media.current_time()).abs() <= self.jitter_threshold {
            return SyncOutcome::Skipped { target };
        }
        if !is_buffered(&media.buffered(), target) {
            self.unbuffered += 1;
            return SyncOutcome::Unbuffered { target };
        }
        match media.seek(target) {
            Ok(()) => {
                self.seeks += 1;
                SyncOutcome::Seeked { target }
            }
            Err(e) => {
                self.rejected += 1;
                log::debug!("{}", e);
                SyncOutcome::Rejected { target }
            }
        }
    }

    pub fn seeks(&self) -> u32 {
        self.seeks
    }

    pub fn rejected(&self) -> u32 {
        self.rejected
    }

    pub fn unbuffered(&self) -> u32 {
        self.unbuffered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll_video::error::MediaError;
    use crate::scroll_video::media::{MockMediaHandle, TimeRange};

    fn media_at(duration: f64, current: f64) -> MockMediaHandle {
        let mut media = MockMediaHandle::new();
        media.expect_duration().return_const(duration);
        media.expect_current_time().return_const(current);
        media.expect_buffered().returning(Vec::new);
        media
    }

    #[test]
    fn target_stays_within_duration() {
        for step in 0..=100 {
            let p = f64::from(step) / 100.0;
            let t = target_time(p, 10.0, 0.1);
            assert!((0.0..=10.0).contains(&t), "{} -> {}", p, t);
        }
        assert_eq!(target_time(0.0, 10.0, 0.1), 0.0);
        assert!((target_time(1.0, 10.0, 0.1) - 9.9).abs() < 1e-9);
        assert_eq!(target_time(1.0, 10.0, 0.0), 10.0);
    }

    #[test]
    fn tail_buffer_longer_than_clip_pins_to_start() {
        assert_eq!(target_time(1.0, 0.05, 0.1), 0.0);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(target_time(-2.0, 10.0, 0.0), 0.0);
        assert_eq!(target_time(7.0, 10.0, 0.0), 10.0);
        assert_eq!(target_time(f64::NAN, 10.0, 0.0), 0.0);
    }

    #[test]
    fn small_deltas_never_seek() {
        let mut media = media_at(10.0, 5.0);
        media.expect_seek().never();
        let mut sync = TimeSync::new(0.05, 0.0);
        for p in [0.5, 0.501, 0.499, 0.5049, 0.4951] {
            assert!(matches!(sync.apply(&media, p), SyncOutcome::Skipped { .. }));
        }
        assert_eq!(sync.seeks(), 0);
    }

    #[test]
    fn large_delta_seeks_once() {
        let mut media = media_at(10.0, 0.0);
        media
            .expect_seek()
            .withf(|t| (*t - 4.0).abs() < 1e-9)
            .times(1)
            .returning(|_| Ok(()));
        let mut sync = TimeSync::new(0.05, 0.0);
        assert_eq!(sync.apply(&media, 0.4), SyncOutcome::Seeked { target: 4.0 });
        assert_eq!(sync.seeks(), 1);
    }

    #[test]
    fn rejected_seek_is_swallowed() {
        let mut media = media_at(10.0, 0.0);
        media
            .expect_seek()
            .times(2)
            .returning(|t| Err(MediaError::SeekRejected { target: t }));
        let mut sync = TimeSync::new(0.05, 0.0);
        assert_eq!(sync.apply(&media, 0.5), SyncOutcome::Rejected { target: 5.0 });
        assert_eq!(sync.apply(&media, 0.5), SyncOutcome::Rejected { target: 5.0 });
        assert_eq!(sync.rejected(), 2);
        assert_eq!(sync.seeks(), 0);
    }

    #[test]
    fn unbuffered_target_waits_for_data() {
        let mut media = MockMediaHandle::new();
        media.expect_duration().return_const(10.0);
        media.expect_current_time().return_const(1.0);
        media
            .expect_buffered()
            .returning(|| vec![TimeRange { start: 0.0, end: 3.0 }]);
        media
            .expect_seek()
            .withf(|t| (*t - 2.0).abs() < 1e-9)
            .times(1)
            .returning(|_| Ok(()));
        let mut sync = TimeSync::new(0.05, 0.0);
        assert_eq!(sync.apply(&media, 0.8), SyncOutcome::Unbuffered { target: 8.0 });
        assert_eq!(sync.apply(&media, 0.2), SyncOutcome::Seeked { target: 2.0 });
        assert_eq!(sync.unbuffered(), 1);
        assert_eq!(sync.seeks(), 1);
    }

    #[test]
    fn unknown_duration_does_nothing() {
        let mut media = MockMediaHandle::new();
        media.expect_duration().return_const(f64::NAN);
        media.expect_seek().never();
        let mut sync = TimeSync::new(0.05, 0.1);
        assert_eq!(sync.apply(&media, 0.7), SyncOutcome::NoDuration);
    }
}
