//! Object URL lifetime helpers for device-picked images.

/// Create an object URL for the first file selected in a file input.
#[cfg(feature = "hydrate")]
pub fn from_file_input(input: &web_sys::HtmlInputElement) -> Option<String> {
    let file = input.files()?.get(0)?;
    match web_sys::Url::create_object_url_with_blob(&file) {
        Ok(url) => Some(url),
        Err(err) => {
            log::warn!("could not create object url: {err:?}");
            None
        }
    }
}

/// Release an object URL returned by an editor transition.
pub fn revoke(url: Option<String>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(url) = url {
            if let Err(err) = web_sys::Url::revoke_object_url(&url) {
                log::warn!("could not revoke object url: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
