use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Dispara o download de `content` no navegador: Blob -> object URL ->
/// clique sintético em um <a> temporário -> revogação imediata da URL.
pub fn trigger_download(filename: &str, mime: &str, content: &str) -> Result<(), JsValue> {
    let window = window().ok_or("sem window")?;
    let document = window.document().ok_or("sem document")?;
    let body = document.body().ok_or("sem body")?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Url::revoke_object_url(&url)?;

    log::info!("⬇️ Download disparado: {}", filename);
    Ok(())
}
