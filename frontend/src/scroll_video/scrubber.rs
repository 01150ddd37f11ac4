use crate::config::ScrollVideoConfig;

use super::error::MediaError;
use super::fallback::FallbackPresenter;
use super::indicator::IndicatorFade;
use super::media::MediaHandle;
use super::progress::SectionGeometry;
use super::readiness::{Phase, ReadinessDetector, ReadinessSignal, Transition};
use super::scene::ScrollScene;
use super::sync::{SyncOutcome, TimeSync};

/// Result of one scroll-driven update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub progress: f64,
    pub indicator_opacity: f64,
    pub sync: SyncOutcome,
}

/// Everything the hero video does, minus the browser plumbing.
///
/// Readiness gates the scroll pipeline: until the detector reaches `Ready`,
/// [`on_scroll`](Self::on_scroll) is a no-op, and after `Fallback` it stays one.
pub struct Scrubber<M, S> {
    media: M,
    scene: S,
    detector: ReadinessDetector,
    presenter: FallbackPresenter,
    sync: TimeSync,
    fade: IndicatorFade,
    min_scroll_span: f64,
}

impl<M: MediaHandle, S: ScrollScene> Scrubber<M, S> {
    pub fn new(media: M, scene: S, config: &ScrollVideoConfig) -> Self {
        Self {
            media,
            scene,
            detector: ReadinessDetector::new(config.readiness_timeout_ms, config.min_poll_state),
            presenter: FallbackPresenter::default(),
            sync: TimeSync::new(config.jitter_threshold_s, config.tail_buffer_s),
            fade: IndicatorFade::new(
                config.indicator_fade_start_px,
                config.indicator_fade_end_px,
            ),
            min_scroll_span: config.min_scroll_span_px,
        }
    }

    /// Begin loading, or fall back right away when there is no source.
    pub fn start(&mut self, now_ms: f64) -> Transition {
        let transition = self.detector.begin(self.media.has_source(), now_ms);
        if transition == Transition::Unchanged && !self.detector.is_terminal() {
            self.scene.set_loading(true);
            self.media.load();
        }
        self.settle(transition)
    }

    pub fn on_signal(&mut self, signal: ReadinessSignal, now_ms: f64) -> Transition {
        let transition = self
            .detector
            .on_signal(signal, self.media.duration(), now_ms);
        self.settle(transition)
    }

    pub fn on_error(&mut self, error: MediaError, now_ms: f64) -> Transition {
        let transition = self.detector.on_error(error, now_ms);
        self.settle(transition)
    }

    /// Scheduled readiness check: poll plus deadline.
    pub fn tick(&mut self, now_ms: f64) -> Transition {
        let transition =
            self.detector
                .tick(self.media.ready_state(), self.media.duration(), now_ms);
        self.settle(transition)
    }

    pub fn on_scroll(&mut self, scroll_y: f64, section: SectionGeometry) -> Option<Frame> {
        if !self.detector.is_ready() {
            return None;
        }
        let indicator_opacity = self.fade.opacity(scroll_y);
        self.scene.set_indicator_opacity(indicator_opacity);
        let progress = section.progress(scroll_y, self.min_scroll_span);
        let sync = self.sync.apply(&self.media, progress);
        Some(Frame {
            progress,
            indicator_opacity,
            sync,
        })
    }

    fn settle(&mut self, transition: Transition) -> Transition {
        match &transition {
            Transition::Ready { duration } => {
                log::info!("Hero video ready ({:.2}s)", duration);
                self.scene.set_loading(false);
            }
            Transition::Fallback(cause) => {
                log::warn!("Hero video unavailable, showing static panel: {}", cause);
                self.presenter.activate(&self.scene);
            }
            Transition::Unchanged => {}
        }
        transition
    }

    pub fn phase(&self) -> Phase {
        self.detector.phase()
    }

    pub fn is_settled(&self) -> bool {
        self.detector.is_terminal()
    }

    pub fn detector(&self) -> &ReadinessDetector {
        &self.detector
    }

    pub fn sync(&self) -> &TimeSync {
        &self.sync
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::scroll_video::media::{MockMediaHandle, ReadyState, TimeRange};
    use crate::scroll_video::scene::MockScrollScene;

    struct FakeVideo {
        has_source: bool,
        duration: Cell<f64>,
        current: Cell<f64>,
        state: Cell<ReadyState>,
        buffered: RefCell<Vec<TimeRange>>,
        seeks: Cell<u32>,
        loads: Cell<u32>,
    }

    impl FakeVideo {
        fn with_source() -> Self {
            Self {
                has_source: true,
                duration: Cell::new(f64::NAN),
                current: Cell::new(0.0),
                state: Cell::new(ReadyState::HaveNothing),
                buffered: RefCell::new(Vec::new()),
                seeks: Cell::new(0),
                loads: Cell::new(0),
            }
        }

        fn metadata_arrives(&self, duration: f64) {
            self.duration.set(duration);
            self.state.set(ReadyState::HaveMetadata);
        }
    }

    impl MediaHandle for FakeVideo {
        fn has_source(&self) -> bool {
            self.has_source
        }
        fn duration(&self) -> f64 {
            self.duration.get()
        }
        fn current_time(&self) -> f64 {
            self.current.get()
        }
        fn ready_state(&self) -> ReadyState {
            self.state.get()
        }
        fn buffered(&self) -> Vec<TimeRange> {
            self.buffered.borrow().clone()
        }
        fn seek(&self, seconds: f64) -> Result<(), MediaError> {
            self.seeks.set(self.seeks.get() + 1);
            self.current.set(seconds);
            Ok(())
        }
        fn load(&self) {
            self.loads.set(self.loads.get() + 1);
        }
    }

    #[derive(Default)]
    struct FakeScene {
        loading: Cell<bool>,
        opacity: Cell<Option<f64>>,
        media_hidden: Cell<bool>,
        indicator_hidden: Cell<bool>,
        panels: Cell<u32>,
    }

    impl ScrollScene for FakeScene {
        fn set_loading(&self, loading: bool) {
            self.loading.set(loading);
        }
        fn set_indicator_opacity(&self, opacity: f64) {
            self.opacity.set(Some(opacity));
        }
        fn hide_media(&self) {
            self.media_hidden.set(true);
        }
        fn hide_indicator(&self) {
            self.indicator_hidden.set(true);
        }
        fn inject_fallback_panel(&self) -> bool {
            self.panels.set(self.panels.get() + 1);
            self.panels.get() == 1
        }
    }

    const SECTION: SectionGeometry = SectionGeometry {
        top: 0.0,
        height: 3000.0,
        viewport_height: 1000.0,
    };

    fn scrubber() -> Scrubber<FakeVideo, FakeScene> {
        Scrubber::new(
            FakeVideo::with_source(),
            FakeScene::default(),
            &ScrollVideoConfig::default(),
        )
    }

    fn ready_scrubber(duration: f64) -> Scrubber<FakeVideo, FakeScene> {
        let mut s = scrubber();
        s.start(0.0);
        s.media().metadata_arrives(duration);
        assert_eq!(
            s.on_signal(ReadinessSignal::LoadedMetadata, 40.0),
            Transition::Ready { duration }
        );
        s
    }

    #[test]
    fn missing_source_falls_back_before_any_scroll() {
        let mut media = MockMediaHandle::new();
        media.expect_has_source().return_const(false);
        media.expect_load().never();
        media.expect_seek().never();

        let mut scene = MockScrollScene::new();
        scene.expect_set_loading().with(mockall::predicate::eq(false)).returning(|_| ());
        scene.expect_hide_media().times(1).returning(|| ());
        scene.expect_hide_indicator().times(1).returning(|| ());
        scene.expect_inject_fallback_panel().times(1).returning(|| true);
        scene.expect_set_indicator_opacity().never();

        let mut s = Scrubber::new(media, scene, &ScrollVideoConfig::default());
        assert_eq!(s.start(0.0), Transition::Fallback(MediaError::MissingSource));
        assert_eq!(s.phase(), Phase::Fallback);
        assert_eq!(s.on_scroll(500.0, SECTION), None);
    }

    #[test]
    fn start_loads_and_marks_section_loading() {
        let mut s = scrubber();
        assert_eq!(s.start(0.0), Transition::Unchanged);
        assert_eq!(s.media().loads.get(), 1);
        assert!(s.scene().loading.get());
    }

    #[test]
    fn timeout_falls_back_once_and_hides_indicator() {
        let mut s = scrubber();
        s.start(0.0);
        let mut fallbacks = 0;
        for step in 1..=30 {
            if matches!(s.tick(f64::from(step) * 250.0), Transition::Fallback(_)) {
                fallbacks += 1;
            }
        }
        assert_eq!(fallbacks, 1);
        assert_eq!(s.scene().panels.get(), 1);
        assert!(s.scene().indicator_hidden.get());
        assert!(s.scene().media_hidden.get());
        assert!(!s.scene().loading.get());

        // metadata showing up late changes nothing
        s.media().metadata_arrives(10.0);
        assert_eq!(
            s.on_signal(ReadinessSignal::CanPlay, 9000.0),
            Transition::Unchanged
        );
        assert_eq!(s.on_scroll(1000.0, SECTION), None);
        assert_eq!(s.media().seeks.get(), 0);
    }

    #[test]
    fn scroll_before_ready_is_ignored() {
        let mut s = scrubber();
        s.start(0.0);
        assert_eq!(s.on_scroll(1500.0, SECTION), None);
        assert_eq!(s.media().seeks.get(), 0);
        assert_eq!(s.scene().opacity.get(), None);
    }

    #[test]
    fn poll_activates_pipeline_without_events() {
        let mut s = scrubber();
        s.start(0.0);
        assert_eq!(s.tick(250.0), Transition::Unchanged);
        s.media().metadata_arrives(6.0);
        assert_eq!(s.tick(500.0), Transition::Ready { duration: 6.0 });
        assert!(s.on_scroll(0.0, SECTION).is_some());
    }

    #[test]
    fn section_top_maps_to_start_of_video() {
        let mut s = ready_scrubber(10.0);
        let frame = s.on_scroll(0.0, SECTION).unwrap();
        assert_eq!(frame.progress, 0.0);
        assert_eq!(frame.indicator_opacity, 1.0);
        assert_eq!(frame.sync, SyncOutcome::Skipped { target: 0.0 });
    }

    #[test]
    fn section_end_maps_to_end_minus_tail() {
        let mut s = ready_scrubber(10.0);
        let frame = s.on_scroll(2000.0, SECTION).unwrap();
        assert_eq!(frame.progress, 1.0);
        assert_eq!(frame.indicator_opacity, 0.0);
        match frame.sync {
            SyncOutcome::Seeked { target } => assert!((target - 9.9).abs() < 1e-9),
            other => panic!("unexpected {:?}", other),
        }
        assert!((s.media().current.get() - 9.9).abs() < 1e-9);
    }

    #[test]
    fn tiny_scrolls_do_not_seek() {
        let mut s = ready_scrubber(10.0);
        s.on_scroll(1000.0, SECTION);
        let seeks = s.media().seeks.get();
        // 1px of scroll is ~5ms of video here, well under the threshold
        for y in 1001..1005 {
            s.on_scroll(f64::from(y), SECTION);
        }
        assert_eq!(s.media().seeks.get(), seeks);
        assert_eq!(s.sync().seeks(), seeks);
    }

    #[test]
    fn indicator_follows_absolute_scroll() {
        let mut s = ready_scrubber(10.0);
        s.on_scroll(250.0, SECTION);
        assert_eq!(s.scene().opacity.get(), Some(0.5));
    }

    #[test]
    fn errors_after_ready_are_ignored() {
        let mut s = ready_scrubber(10.0);
        assert_eq!(s.on_error(MediaError::Network, 100.0), Transition::Unchanged);
        assert_eq!(s.tick(99_999.0), Transition::Unchanged);
        assert_eq!(s.phase(), Phase::Ready);
        assert_eq!(s.scene().panels.get(), 0);
    }

    #[test]
    fn scroll_into_unbuffered_part_retries_later() {
        let mut s = ready_scrubber(10.0);
        *s.media().buffered.borrow_mut() = vec![TimeRange { start: 0.0, end: 4.0 }];
        // 2000 of a 2000px span: the very end of the clip
        let frame = s.on_scroll(2000.0, SECTION);
        assert!(matches!(
            frame.map(|f| f.sync),
            Some(SyncOutcome::Unbuffered { .. })
        ));
        assert_eq!(s.media().seeks.get(), 0);

        s.media().buffered.borrow_mut().push(TimeRange { start: 4.0, end: 10.0 });
        let frame = s.on_scroll(2000.0, SECTION);
        assert!(matches!(frame.map(|f| f.sync), Some(SyncOutcome::Seeked { .. })));
        assert_eq!(s.media().seeks.get(), 1);
    }

    #[test]
    fn load_error_falls_back() {
        let mut s = scrubber();
        s.start(0.0);
        assert_eq!(
            s.on_error(MediaError::SourceNotSupported, 10.0),
            Transition::Fallback(MediaError::SourceNotSupported)
        );
        assert_eq!(s.on_error(MediaError::Decode, 20.0), Transition::Unchanged);
        assert_eq!(s.scene().panels.get(), 1);
        assert_eq!(
            s.detector().failure(),
            Some(&MediaError::SourceNotSupported)
        );
    }
}
