use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up `#id` and cast it to the requested element type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

/// Attach a click handler to `#element_id`. Missing elements are skipped.
#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] #{} not found, click handler not attached", element_id);
    }
}

/// Reuse `#id` if the page provides a canvas, otherwise append a full-window one.
pub fn find_or_create_canvas(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    if document.get_element_by_id(id).is_some() {
        return element_by_id(document, id);
    }
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?;
    canvas.set_id(id);
    let style = canvas.style();
    _ = style.set_property("position", "fixed");
    _ = style.set_property("inset", "0");
    _ = style.set_property("width", "100vw");
    _ = style.set_property("height", "100vh");
    _ = style.set_property("display", "block");
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;
    body.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    Ok(canvas)
}

/// CSS size of the canvas as laid out on the page.
#[inline]
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    (rect.width() as f32, rect.height() as f32)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
