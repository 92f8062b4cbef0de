use crate::constants::{FILE_INPUT_ID, UPLOAD_BUTTON_ID};
use crate::dom;
use crate::images::ImageLoader;
use crate::scene::Scene;
use sphere_core::ImageSource;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct UploadWiring {
    pub document: web::Document,
    pub scene: Rc<RefCell<Scene>>,
    pub loader: Rc<RefCell<ImageLoader>>,
}

/// `#uploadBtn` opens the picker behind `#fileInput`; a non-empty selection
/// replaces every panel. Pages without either element skip uploads.
pub fn wire_upload(w: UploadWiring) {
    let file_input = match dom::element_by_id::<web::HtmlInputElement>(&w.document, FILE_INPUT_ID)
    {
        Ok(input) => input,
        Err(e) => {
            log::warn!("[upload] disabled: {}", e);
            return;
        }
    };
    if w.document.get_element_by_id(UPLOAD_BUTTON_ID).is_none() {
        log::warn!("[upload] disabled: missing #{}", UPLOAD_BUTTON_ID);
        return;
    }

    let picker = file_input.clone();
    dom::add_click_listener(&w.document, UPLOAD_BUTTON_ID, move |ev| {
        // Keep the click away from the window-level activate handler.
        ev.stop_propagation();
        picker.click();
    });

    let input_for_change = file_input.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let urls = selected_object_urls(&input_for_change);
        if urls.is_empty() {
            return;
        }
        log::info!("[upload] {} images selected", urls.len());
        w.scene
            .borrow_mut()
            .replace_images(&urls, &w.loader.borrow());
    }) as Box<dyn FnMut(_)>);
    _ = file_input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn selected_object_urls(input: &web::HtmlInputElement) -> Vec<ImageSource> {
    let Some(files) = input.files() else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|i| files.get(i))
        .filter_map(|file| match web::Url::create_object_url_with_blob(&file) {
            Ok(url) => Some(ImageSource::from(url)),
            Err(e) => {
                log::warn!("[upload] createObjectURL failed for {}: {:?}", file.name(), e);
                None
            }
        })
        .collect()
}
