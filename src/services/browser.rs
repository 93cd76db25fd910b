//! Thin wrappers over the browser APIs the controllers need.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, HtmlElement, Url, Window};

use super::state::defer;
use crate::error::{ApiError, ApiResult};

fn window() -> ApiResult<Window> {
    web_sys::window().ok_or_else(|| ApiError::Browser("no window".to_string()))
}

fn document() -> ApiResult<Document> {
    window()?
        .document()
        .ok_or_else(|| ApiError::Browser("no document".to_string()))
}

pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// On-screen size of an element, or `None` if it isn't in the document.
pub fn element_size(id: &str) -> Option<(f64, f64)> {
    let element = document().ok()?.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    Some((rect.width(), rect.height()))
}

pub fn focus_element(id: &str) {
    if let Some(element) = document()
        .ok()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = element.focus();
    }
}

/// Blocking text prompt. `None` when cancelled.
pub fn prompt(message: &str) -> Option<String> {
    window().ok()?.prompt_with_message(message).ok().flatten()
}

pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).map_err(ApiError::from))
        .unwrap_or(false)
}

pub fn open_in_new_tab(url: &str) -> ApiResult<()> {
    window()?.open_with_url_and_target(url, "_blank")?;
    Ok(())
}

/// Follow `url` through a temporary anchor carrying a `download` attribute.
pub fn download_url(url: &str, file_name: &str) -> ApiResult<()> {
    let document = document()?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| ApiError::Browser("anchor element expected".to_string()))?;
    anchor.set_href(url);
    anchor.set_download(file_name);

    let body = document
        .body()
        .ok_or_else(|| ApiError::Browser("no document body".to_string()))?;
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    Ok(())
}

fn object_url(content: &str, mime: &str) -> ApiResult<String> {
    let parts = js_sys::Array::of1(&content.into());
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    Ok(Url::create_object_url_with_blob(&blob)?)
}

/// Offer `content` as a plain-text file download.
pub fn download_text(file_name: &str, content: &str) -> ApiResult<()> {
    let url = object_url(content, "text/plain")?;
    let result = download_url(&url, file_name);
    let _ = Url::revoke_object_url(&url);
    result
}

/// Open a standalone HTML document in a named window. The backing object URL
/// is revoked after `ttl_ms`, once the window has had time to load it.
pub fn open_html_window(html: &str, name: &str, features: &str, ttl_ms: u32) -> ApiResult<()> {
    let url = object_url(html, "text/html")?;
    let opened = window()?.open_with_url_and_target_and_features(&url, name, features);

    let revoke_url = url.clone();
    defer(ttl_ms, move || {
        let _ = Url::revoke_object_url(&revoke_url);
    });

    match opened? {
        Some(_) => Ok(()),
        None => Err(ApiError::Browser("window was blocked".to_string())),
    }
}
