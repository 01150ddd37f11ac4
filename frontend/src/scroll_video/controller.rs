//! Binds a [`Scrubber`] to the page: media events, the readiness loop and the
//! throttled scroll listener.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlVideoElement};

use crate::config::ScrollVideoConfig;
use crate::utils::dom::{self, DomListener};

use super::media::VideoElement;
use super::progress::SectionGeometry;
use super::readiness::{Phase, ReadinessSignal, Transition};
use super::scene::DomScene;
use super::scrubber::Scrubber;
use super::throttle::{Admit, FrameThrottle};

/// Element handles the controller needs. The indicator is optional.
pub struct ScrollVideoElements {
    pub section: HtmlElement,
    pub container: HtmlElement,
    pub video: HtmlVideoElement,
    pub indicator: Option<HtmlElement>,
}

struct Shared {
    scrubber: Scrubber<VideoElement, DomScene>,
    section: HtmlElement,
    throttle: FrameThrottle,
    media_listeners: Vec<DomListener>,
    window_listeners: Vec<DomListener>,
}

type SharedRef = Rc<RefCell<Shared>>;

/// Owns everything registered for the hero video. Dropping it detaches all
/// listeners and ends the readiness loop.
pub struct ScrollVideoController {
    shared: SharedRef,
}

impl ScrollVideoController {
    pub fn attach(elements: ScrollVideoElements, config: ScrollVideoConfig) -> Self {
        let ScrollVideoElements {
            section,
            container,
            video,
            indicator,
        } = elements;
        let video_el: &HtmlElement = video.as_ref();
        let scene = DomScene::new(section.clone(), container, video_el.clone(), indicator);
        let scrubber = Scrubber::new(VideoElement::new(video.clone()), scene, &config);
        let shared = Rc::new(RefCell::new(Shared {
            scrubber,
            section,
            throttle: FrameThrottle::new(config.throttle_ms),
            media_listeners: Vec::new(),
            window_listeners: Vec::new(),
        }));

        let listeners = media_listeners(&video, Rc::downgrade(&shared));
        shared.borrow_mut().media_listeners = listeners;

        let transition = shared.borrow_mut().scrubber.start(dom::now_ms());
        on_transition(&shared, transition);
        if shared.borrow().scrubber.is_settled() {
            return Self { shared };
        }

        // Cached videos may already be past metadata by the time we attach.
        let transition = shared.borrow_mut().scrubber.tick(dom::now_ms());
        on_transition(&shared, transition);
        if !shared.borrow().scrubber.is_settled() {
            spawn_readiness_loop(Rc::downgrade(&shared), config.poll_interval_ms);
        }

        Self { shared }
    }

    pub fn phase(&self) -> Phase {
        self.shared.borrow().scrubber.phase()
    }
}

fn media_listeners(video: &HtmlVideoElement, weak: Weak<RefCell<Shared>>) -> Vec<DomListener> {
    let mut listeners = Vec::new();
    for signal in ReadinessSignal::ALL {
        let weak = weak.clone();
        let listener = DomListener::new(video, signal.event_name(), move |_| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let transition = shared.borrow_mut().scrubber.on_signal(signal, dom::now_ms());
            on_transition(&shared, transition);
        });
        match listener {
            Ok(listener) => listeners.push(listener),
            Err(e) => log::warn!("Failed to listen for {}: {:?}", signal.event_name(), e),
        }
    }

    // `<source>` failures fire at the child and don't bubble.
    let error_listener = DomListener::capture(video, "error", move |event| {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let error = shared.borrow().scrubber.media().error_for_event(&event);
        let Some(error) = error else {
            log::debug!("Video source failed, trying the next one");
            return;
        };
        log::error!("Video loading error: {}", error);
        let transition = shared.borrow_mut().scrubber.on_error(error, dom::now_ms());
        on_transition(&shared, transition);
    });
    match error_listener {
        Ok(listener) => listeners.push(listener),
        Err(e) => log::warn!("Failed to listen for video errors: {:?}", e),
    }
    listeners
}

/// Poll + deadline as a single task. Ends when the detector settles or the
/// controller goes away.
fn spawn_readiness_loop(weak: Weak<RefCell<Shared>>, interval_ms: u32) {
    spawn_local(async move {
        loop {
            TimeoutFuture::new(interval_ms).await;
            let Some(shared) = weak.upgrade() else {
                break;
            };
            let transition = shared.borrow_mut().scrubber.tick(dom::now_ms());
            on_transition(&shared, transition);
            if shared.borrow().scrubber.is_settled() {
                log::debug!(
                    "Readiness loop done after {} polls",
                    shared.borrow().scrubber.detector().polls()
                );
                break;
            }
        }
    });
}

fn on_transition(shared: &SharedRef, transition: Transition) {
    if transition.settles() {
        release_media_listeners(shared);
    }
    if let Transition::Ready { .. } = transition {
        start_scroll_pipeline(shared);
    }
}

/// Media events carry nothing once loading has settled. This may run inside
/// one of those listeners, so the drop waits for the current callback to return.
fn release_media_listeners(shared: &SharedRef) {
    let listeners = std::mem::take(&mut shared.borrow_mut().media_listeners);
    if !listeners.is_empty() {
        spawn_local(async move { drop(listeners) });
    }
}

fn start_scroll_pipeline(shared: &SharedRef) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let mut listeners = Vec::new();
    for event in ["scroll", "resize"] {
        let weak = Rc::downgrade(shared);
        match DomListener::passive(&window, event, move |_| on_scroll_event(&weak)) {
            Ok(listener) => listeners.push(listener),
            Err(e) => log::warn!("Failed to listen for {}: {:?}", event, e),
        }
    }
    shared.borrow_mut().window_listeners = listeners;
    apply_frame(shared);
}

fn on_scroll_event(weak: &Weak<RefCell<Shared>>) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let admit = shared.borrow_mut().throttle.admit(dom::now_ms());
    match admit {
        Admit::Run => apply_frame(&shared),
        Admit::Trailing { wait_ms } => {
            let weak = weak.clone();
            spawn_local(async move {
                TimeoutFuture::new(wait_ms.ceil() as u32).await;
                if let Some(shared) = weak.upgrade() {
                    shared.borrow_mut().throttle.trailing_ran(dom::now_ms());
                    apply_frame(&shared);
                }
            });
        }
        Admit::Drop => {}
    }
}

fn apply_frame(shared: &SharedRef) {
    let scroll_y = dom::scroll_y();
    let mut shared = shared.borrow_mut();
    // Layout is re-read every frame; a resize can move or stretch the section.
    let geometry = SectionGeometry {
        top: f64::from(shared.section.offset_top()),
        height: f64::from(shared.section.offset_height()),
        viewport_height: dom::viewport_height(),
    };
    shared.scrubber.on_scroll(scroll_y, geometry);
}
