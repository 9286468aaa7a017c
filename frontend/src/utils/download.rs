use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    #[error("downloads are only available in the browser")]
    Unsupported,
    #[error("failed to {0}")]
    Browser(&'static str),
}

#[cfg(target_arch = "wasm32")]
pub fn trigger_csv_download(filename: &str, csv_data: &str) -> Result<(), DownloadError> {
    use wasm_bindgen::JsCast;

    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(csv_data));
    let props = web_sys::BlobPropertyBag::new();
    props.set_type("text/csv;charset=utf-8");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &props)
        .map_err(|_| DownloadError::Browser("create blob"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| DownloadError::Browser("create object URL"))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(DownloadError::Browser("access document"))?;
    let anchor = document
        .create_element("a")
        .map_err(|_| DownloadError::Browser("create link"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| DownloadError::Browser("cast link"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.style().set_property("display", "none").ok();
    document
        .body()
        .ok_or(DownloadError::Browser("access body"))?
        .append_child(&anchor)
        .map_err(|_| DownloadError::Browser("attach link"))?;
    anchor.click();
    anchor.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn trigger_csv_download(filename: &str, _csv_data: &str) -> Result<(), DownloadError> {
    log::debug!("Skipping download of {filename} outside the browser");
    Err(DownloadError::Unsupported)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn host_builds_report_unsupported() {
        assert_eq!(
            trigger_csv_download("campaigns.csv", "a,b\n"),
            Err(DownloadError::Unsupported)
        );
        assert_eq!(
            DownloadError::Browser("create blob").to_string(),
            "failed to create blob"
        );
    }
}
