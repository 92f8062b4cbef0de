use crate::constants::{MODAL_ID, MODAL_IMG_ID};
use crate::dom;
use sphere_core::{FullViewer, ImageSource};
use web_sys as web;

struct ModalParts {
    modal: web::HtmlElement,
    img: web::HtmlImageElement,
}

/// Full-size image viewer backed by the page's `#imageModal` / `#modalImg`.
///
/// Pages without the modal still work; opened images are only logged.
pub struct ModalViewer {
    parts: Option<ModalParts>,
}

impl ModalViewer {
    pub fn new(document: &web::Document) -> Self {
        let parts = dom::element_by_id::<web::HtmlElement>(document, MODAL_ID)
            .and_then(|modal| {
                let img = dom::element_by_id::<web::HtmlImageElement>(document, MODAL_IMG_ID)?;
                Ok(ModalParts { modal, img })
            })
            .map_err(|e| log::warn!("[viewer] modal unavailable: {}", e))
            .ok();
        Self { parts }
    }

    /// Hide the modal when it is clicked. The click is stopped here so the
    /// window-level activate handler does not reopen the image underneath.
    pub fn wire_dismiss(&self, document: &web::Document) {
        let Some(parts) = &self.parts else {
            return;
        };
        let modal = parts.modal.clone();
        dom::add_click_listener(document, MODAL_ID, move |ev| {
            ev.stop_propagation();
            _ = modal.style().set_property("display", "none");
        });
    }
}

impl FullViewer for ModalViewer {
    fn open_full_view(&mut self, source: &ImageSource) {
        match &self.parts {
            Some(parts) => {
                parts.img.set_src(source.as_str());
                _ = parts.modal.style().set_property("display", "flex");
            }
            None => log::info!("[viewer] open {}", source),
        }
    }
}
