//! File-saving capability supplied by the browser environment.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Hand `bytes` to the browser as a file download named `filename`.
///
/// The platform half of the PDF download: a blob object URL attached to a
/// transient anchor element. Callers only invoke this capability and never
/// touch the DOM themselves.
pub fn save_binary_as_file(bytes: &[u8], filename: &str) -> Result<(), String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array);

    let options = BlobPropertyBag::new();
    options.set_type("application/octet-stream");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("Failed to build blob: {:?}", e))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "No document available".to_string())?;
    let body = document
        .body()
        .ok_or_else(|| "No document body".to_string())?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into()
        .map_err(|_| "Element is not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    // The anchor must be attached for the click to register in all browsers.
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to attach anchor: {:?}", e))?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    let _ = Url::revoke_object_url(&url);

    Ok(())
}
