//! Canvas export: PNG download and PNG blob for upload.
//!
//! ERROR HANDLING
//! ==============
//! Export fails when the canvas is tainted (a remote image served without
//! CORS headers). Both helpers return `Err(String)` so the editor can show
//! the message instead of silently doing nothing.

#[cfg(feature = "hydrate")]
use canvas::consts::EXPORT_MIME;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

#[cfg(feature = "hydrate")]
fn js_error(context: &str, err: &JsValue) -> String {
    format!("{context}: {err:?}")
}

/// Trigger a browser download of `data_url` as `file_name`.
///
/// # Errors
///
/// Returns an error string if there is no document or the link element cannot
/// be created.
#[cfg(feature = "hydrate")]
pub fn download_data_url(data_url: &str, file_name: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_owned())?;
    let link = document
        .create_element("a")
        .map_err(|e| js_error("create link", &e))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| js_error("create link", &e))?;
    link.set_href(data_url);
    link.set_download(file_name);
    link.click();
    Ok(())
}

/// Encode the canvas `element` as a PNG blob.
///
/// # Errors
///
/// Returns an error string if `toBlob` throws or yields no blob.
#[cfg(feature = "hydrate")]
pub async fn canvas_png_blob(element: &web_sys::HtmlCanvasElement) -> Result<web_sys::Blob, String> {
    let (tx, rx) = futures::channel::oneshot::channel::<Option<web_sys::Blob>>();
    let callback = Closure::<dyn FnMut(JsValue)>::once(move |value: JsValue| {
        let _ = tx.send(value.dyn_into::<web_sys::Blob>().ok());
    });
    element
        .to_blob_with_type(callback.as_ref().unchecked_ref(), EXPORT_MIME)
        .map_err(|e| js_error("export canvas", &e))?;

    // `callback` must outlive the await; the browser calls it exactly once.
    let blob = rx.await.map_err(|_| "export cancelled".to_owned())?;
    drop(callback);
    blob.ok_or_else(|| "canvas produced no image".to_owned())
}
