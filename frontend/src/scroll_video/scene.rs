use web_sys::{Document, HtmlElement};

/// Element id of the injected fallback panel.
pub const FALLBACK_PANEL_ID: &str = "scroll-video-fallback";
const FALLBACK_KEYFRAMES_ID: &str = "scroll-video-fallback-keyframes";

const FALLBACK_PANEL_HTML: &str = r#"
    <div class="fallback-glow"></div>
    <div class="fallback-brand">
        <span class="fallback-mark">ARCANO</span>
        <span class="fallback-sub">INTELLIGENCE</span>
    </div>
"#;

const FALLBACK_KEYFRAMES: &str = r#"
    @keyframes gradientShift {
        0% { background-position: 0% 50%; }
        50% { background-position: 100% 50%; }
        100% { background-position: 0% 50%; }
    }
    #scroll-video-fallback {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        background: linear-gradient(135deg, #000000 0%, #0a0e27 25%, #111827 50%, #0a0e27 75%, #000000 100%);
        background-size: 400% 400%;
        animation: gradientShift 15s ease infinite;
    }
    #scroll-video-fallback .fallback-brand {
        display: flex;
        flex-direction: column;
        align-items: center;
        font-family: 'Orbitron', sans-serif;
        opacity: 0.25;
    }
    #scroll-video-fallback .fallback-mark {
        font-size: clamp(3rem, 10vw, 8rem);
        color: #00ff9c;
        letter-spacing: 0.2em;
    }
    #scroll-video-fallback .fallback-sub {
        font-size: clamp(1rem, 3vw, 2rem);
        color: #fff;
        letter-spacing: 0.5em;
    }
"#;

/// Visual side effects of the scrubber, kept apart from the media element so
/// the orchestration can run without a browser.
#[cfg_attr(test, mockall::automock)]
pub trait ScrollScene {
    fn set_loading(&self, loading: bool);
    fn set_indicator_opacity(&self, opacity: f64);
    fn hide_media(&self);
    fn hide_indicator(&self);
    /// Insert the static panel. Returns `false` if one is already present.
    fn inject_fallback_panel(&self) -> bool;
}

/// `ScrollScene` backed by the hero section's DOM nodes.
pub struct DomScene {
    section: HtmlElement,
    container: HtmlElement,
    video: HtmlElement,
    indicator: Option<HtmlElement>,
}

impl DomScene {
    pub fn new(
        section: HtmlElement,
        container: HtmlElement,
        video: HtmlElement,
        indicator: Option<HtmlElement>,
    ) -> Self {
        Self {
            section,
            container,
            video,
            indicator,
        }
    }

    fn document(&self) -> Option<Document> {
        self.section.owner_document()
    }

    fn ensure_keyframes(&self, document: &Document) {
        if document.get_element_by_id(FALLBACK_KEYFRAMES_ID).is_some() {
            return;
        }
        let Some(head) = document.head() else {
            return;
        };
        match document.create_element("style") {
            Ok(style) => {
                style.set_id(FALLBACK_KEYFRAMES_ID);
                style.set_text_content(Some(FALLBACK_KEYFRAMES));
                if let Err(e) = head.append_child(&style) {
                    log::warn!("Failed to append fallback keyframes: {:?}", e);
                }
            }
            Err(e) => log::warn!("Failed to create fallback keyframes: {:?}", e),
        }
    }
}

impl ScrollScene for DomScene {
    fn set_loading(&self, loading: bool) {
        let _ = self
            .section
            .class_list()
            .toggle_with_force("loading", loading);
    }

    fn set_indicator_opacity(&self, opacity: f64) {
        if let Some(indicator) = &self.indicator {
            let _ = indicator
                .style()
                .set_property("opacity", &format!("{:.3}", opacity));
        }
    }

    fn hide_media(&self) {
        let _ = self.video.style().set_property("display", "none");
    }

    fn hide_indicator(&self) {
        if let Some(indicator) = &self.indicator {
            let _ = indicator.style().set_property("display", "none");
        }
    }

    fn inject_fallback_panel(&self) -> bool {
        let Some(document) = self.document() else {
            return false;
        };
        if document.get_element_by_id(FALLBACK_PANEL_ID).is_some() {
            return false;
        }
        self.ensure_keyframes(&document);
        let panel = match document.create_element("div") {
            Ok(panel) => panel,
            Err(e) => {
                log::warn!("Failed to create fallback panel: {:?}", e);
                return false;
            }
        };
        panel.set_id(FALLBACK_PANEL_ID);
        panel.set_attribute("aria-hidden", "true").ok();
        panel.set_inner_html(FALLBACK_PANEL_HTML);
        self.container.append_child(&panel).is_ok()
    }
}
