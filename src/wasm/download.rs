//! Saving text through the browser's download mechanism.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url, Window};

/// Offer `content` to the user as a file called `file_name`.
///
/// The text is wrapped in a Blob of type `mime`, linked from a transient
/// anchor that is clicked and removed straight away. The object URL is
/// released whether or not the click went through.
pub fn download(
    window: &Window,
    document: &Document,
    content: &str,
    file_name: &str,
    mime: &str,
) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let clicked = click_link(document, &url, file_name);
    release(window, url);
    clicked
}

fn click_link(document: &Document, url: &str, file_name: &str) -> Result<(), JsValue> {
    let link: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(JsValue::from)?;
    link.set_href(url);
    link.set_download(file_name);

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Ok(())
}

/// Revoke `url` on the next task, once the browser has started the download,
/// or right away if no task can be scheduled.
fn release(window: &Window, url: String) {
    let deferred = url.clone();
    let revoke = Closure::once_into_js(move || {
        // Nothing useful to do if the URL is already gone.
        let _ = Url::revoke_object_url(&deferred);
    });

    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(revoke.unchecked_ref(), 0)
        .is_err()
    {
        let _ = Url::revoke_object_url(&url);
    }
}
