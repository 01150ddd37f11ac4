use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::{Function, Promise, Reflect};
use web_sys::{HtmlDocument, HtmlTextAreaElement};

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard API unavailable")]
    Unavailable,
    #[error("Clipboard write rejected: {0}")]
    Rejected(String),
    #[error("Selection copy failed")]
    LegacyCopyFailed,
}

/// Best-effort copy. Tries the async Clipboard API, then a hidden textarea
/// with `execCommand("copy")`.
pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    match write_with_clipboard_api(text).await {
        Ok(()) => Ok(()),
        Err(e) => {
            log::warn!("{}, falling back to selection copy", e);
            copy_with_selection(text)
        }
    }
}

async fn write_with_clipboard_api(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    // navigator.clipboard only exists on secure origins
    if !window.is_secure_context() {
        return Err(ClipboardError::Unavailable);
    }
    let navigator = window.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| ClipboardError::Unavailable)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ClipboardError::Unavailable);
    }
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or(ClipboardError::Unavailable)?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| ClipboardError::Rejected(format!("{:?}", e)))?
        .dyn_into::<Promise>()
        .map_err(|_| ClipboardError::Unavailable)?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Rejected(format!("{:?}", e)))
}

fn copy_with_selection(text: &str) -> Result<(), ClipboardError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ClipboardError::LegacyCopyFailed)?;
    let body = document.body().ok_or(ClipboardError::LegacyCopyFailed)?;
    let textarea = document
        .create_element("textarea")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
        .ok_or(ClipboardError::LegacyCopyFailed)?;
    textarea.set_value(text);
    let _ = textarea.set_attribute("readonly", "");
    let style = textarea.style();
    let _ = style.set_property("position", "absolute");
    let _ = style.set_property("left", "-9999px");
    body.append_child(&textarea)
        .map_err(|_| ClipboardError::LegacyCopyFailed)?;
    textarea.select();
    let copied = document
        .dyn_ref::<HtmlDocument>()
        .and_then(|d| d.exec_command("copy").ok())
        .unwrap_or(false);
    let _ = body.remove_child(&textarea);
    if copied {
        Ok(())
    } else {
        Err(ClipboardError::LegacyCopyFailed)
    }
}
