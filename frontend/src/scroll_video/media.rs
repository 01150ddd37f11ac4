use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, Event, HtmlSourceElement, HtmlVideoElement};

use super::error::MediaError;

/// Buffering level reported by a media element, lowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadyState {
    #[default]
    HaveNothing = 0,
    HaveMetadata = 1,
    HaveCurrentData = 2,
    HaveFutureData = 3,
    HaveEnoughData = 4,
}

impl ReadyState {
    /// Convert the raw `readyState` number. Anything unexpected counts as no data.
    pub fn from_raw(raw: u16) -> Self {
        match raw {
            1 => Self::HaveMetadata,
            2 => Self::HaveCurrentData,
            3 => Self::HaveFutureData,
            4 => Self::HaveEnoughData,
            _ => Self::HaveNothing,
        }
    }
}

/// A duration is usable for scrubbing only when it is positive and finite.
/// Media elements report `NaN` before metadata and `inf` for live streams.
pub fn playable_duration(duration: f64) -> Option<f64> {
    (duration.is_finite() && duration > 0.0).then_some(duration)
}

/// One entry of the element's `buffered` list, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

/// Whether `seconds` can be shown without fetching. An empty list means the
/// element reports nothing yet, which is not the same as "nothing buffered".
pub fn is_buffered(ranges: &[TimeRange], seconds: f64) -> bool {
    ranges.is_empty()
        || ranges
            .iter()
            .any(|range| range.start <= seconds && seconds <= range.end)
}

/// Maps an `error` event seen at the video to a load failure.
///
/// `element_code` is the video's own `MediaError` code, if set. Errors from a
/// `<source>` child leave it unset; they only count once no later `<source>`
/// candidate is left to try.
pub fn classify_error_event(
    element_code: Option<u16>,
    from_source: bool,
    later_candidate: bool,
) -> Option<MediaError> {
    match (element_code, from_source) {
        (Some(code), _) => Some(MediaError::from_code(code)),
        (None, true) if later_candidate => None,
        (None, true) => Some(MediaError::SourceNotSupported),
        (None, false) => Some(MediaError::Unknown(0)),
    }
}

/// The slice of a media element the scrubber needs.
#[cfg_attr(test, mockall::automock)]
pub trait MediaHandle {
    fn has_source(&self) -> bool;
    fn duration(&self) -> f64;
    fn current_time(&self) -> f64;
    fn ready_state(&self) -> ReadyState;
    fn buffered(&self) -> Vec<TimeRange>;
    /// Set the playback position. Errors when the element refuses the seek.
    fn seek(&self, seconds: f64) -> Result<(), MediaError>;
    /// Kick off (or restart) resource loading.
    fn load(&self);
}

/// `MediaHandle` over a real `<video>` element.
pub struct VideoElement {
    video: HtmlVideoElement,
}

impl VideoElement {
    pub fn new(video: HtmlVideoElement) -> Self {
        Self { video }
    }

    pub fn element(&self) -> &HtmlVideoElement {
        &self.video
    }

    /// Failure behind an `error` event captured at the video, `None` while
    /// the browser still has another `<source>` to try.
    pub fn error_for_event(&self, event: &Event) -> Option<MediaError> {
        let source = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlSourceElement>().ok());
        let later_candidate = source
            .as_ref()
            .map(has_later_source)
            .unwrap_or(false);
        classify_error_event(
            self.video.error().map(|err| err.code()),
            source.is_some(),
            later_candidate,
        )
    }
}

fn has_later_source(source: &HtmlSourceElement) -> bool {
    let mut next: Option<Element> = source.next_element_sibling();
    while let Some(el) = next {
        if el.tag_name().eq_ignore_ascii_case("source") {
            return true;
        }
        next = el.next_element_sibling();
    }
    false
}

impl MediaHandle for VideoElement {
    fn has_source(&self) -> bool {
        if !self.video.src().is_empty() {
            return true;
        }
        self.video
            .query_selector("source")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlSourceElement>().ok())
            .map(|source| !source.src().is_empty())
            .unwrap_or(false)
    }

    fn duration(&self) -> f64 {
        self.video.duration()
    }

    fn current_time(&self) -> f64 {
        self.video.current_time()
    }

    fn ready_state(&self) -> ReadyState {
        ReadyState::from_raw(self.video.ready_state())
    }

    fn buffered(&self) -> Vec<TimeRange> {
        let ranges = self.video.buffered();
        (0..ranges.length())
            .filter_map(|i| {
                Some(TimeRange {
                    start: ranges.start(i).ok()?,
                    end: ranges.end(i).ok()?,
                })
            })
            .collect()
    }

    fn seek(&self, seconds: f64) -> Result<(), MediaError> {
        // The generated setter can't report the InvalidStateError some
        // browsers throw for unbuffered positions, Reflect::set can.
        js_sys::Reflect::set(
            &self.video,
            &JsValue::from_str("currentTime"),
            &JsValue::from_f64(seconds),
        )
        .map(|_| ())
        .map_err(|_| MediaError::SeekRejected { target: seconds })
    }

    fn load(&self) {
        self.video.load();
    }
}
