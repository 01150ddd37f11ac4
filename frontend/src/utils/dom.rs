//! Thin wrappers over the browser APIs the page leans on. Everything here
//! degrades to a no-op when the window or element is missing.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    AddEventListenerOptions, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

/// Monotonic milliseconds, wall clock if `performance` is unavailable.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn element_by_id(id: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Smooth-scroll so the element with `id` sits `offset_px` below the top.
pub fn scroll_to_section(id: &str, offset_px: f64) {
    let (Some(window), Some(target)) = (web_sys::window(), element_by_id(id)) else {
        log::debug!("No section #{} to scroll to", id);
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(crate::utils::navigation::scroll_target(
        f64::from(target.offset_top()),
        offset_px,
    ));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Lock or release page scrolling, used while the mobile menu is open.
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

/// An event listener removed again when dropped.
pub struct DomListener {
    target: EventTarget,
    event: &'static str,
    capture: bool,
    callback: Closure<dyn FnMut(Event)>,
}

impl DomListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        Self::register(target, event, false, false, callback)
    }

    /// Same as [`new`](Self::new) but tells the browser we never call
    /// `preventDefault`, which keeps scrolling off the main thread.
    pub fn passive<F>(target: &EventTarget, event: &'static str, callback: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        Self::register(target, event, true, false, callback)
    }

    /// Listens in the capture phase, so events that don't bubble from
    /// descendants (`<source>` errors) reach `target` too.
    pub fn capture<F>(target: &EventTarget, event: &'static str, callback: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        Self::register(target, event, false, true, callback)
    }

    fn register<F>(
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        capture: bool,
        callback: F,
    ) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        options.set_capture(capture);
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            capture,
            callback,
        })
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            self.event,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

/// Calls back when an element scrolls into view. Disconnects on drop.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    /// With `once`, the element is unobserved after its first intersection.
    pub fn observe<F>(
        element: &Element,
        threshold: f64,
        root_margin: &str,
        once: bool,
        mut on_visible: F,
    ) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        on_visible();
                        if once {
                            observer.unobserve(&entry.target());
                        }
                    }
                }
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
