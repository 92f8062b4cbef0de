use crate::constants::{IMAGE_CROSS_ORIGIN, MAX_TEXTURE_SIDE};
use crate::input::fit_texture_extent;
use sphere_core::ImageSource;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Decoded RGBA8 pixels ready for upload.
pub struct DecodedImage {
    pub source: ImageSource,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Loads image sources through `<img>` elements and hands finished ones to
/// the frame loop, which drains them once per frame.
#[derive(Default)]
pub struct ImageLoader {
    ready: Rc<RefCell<Vec<(ImageSource, web::HtmlImageElement)>>>,
    scratch: Option<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)>,
}

impl ImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading `source`. Failures are logged and leave the panel on
    /// its placeholder tint.
    pub fn request(&self, source: &ImageSource) {
        let img = match web::HtmlImageElement::new() {
            Ok(img) => img,
            Err(e) => {
                log::error!("[images] create <img>: {:?}", e);
                return;
            }
        };
        if !source.as_str().starts_with("blob:") {
            img.set_cross_origin(Some(IMAGE_CROSS_ORIGIN));
        }

        let ready = self.ready.clone();
        let loaded_src = source.clone();
        let loaded_img = img.clone();
        let onload = Closure::once(move || {
            ready.borrow_mut().push((loaded_src, loaded_img));
        });
        img.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let failed_src = source.clone();
        let onerror = Closure::once(move || {
            log::warn!("[images] failed to load {}", failed_src);
        });
        img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        img.set_src(source.as_str());
    }

    /// Decode everything that finished loading since the last call.
    pub fn drain_decoded(&mut self) -> Vec<DecodedImage> {
        let loaded: Vec<_> = self.ready.borrow_mut().drain(..).collect();
        loaded
            .into_iter()
            .filter_map(|(source, img)| match self.decode(&img) {
                Ok((width, height, rgba)) => Some(DecodedImage {
                    source,
                    width,
                    height,
                    rgba,
                }),
                Err(e) => {
                    log::warn!("[images] cannot read pixels of {}: {}", source, e);
                    None
                }
            })
            .collect()
    }

    fn decode(&mut self, img: &web::HtmlImageElement) -> anyhow::Result<(u32, u32, Vec<u8>)> {
        let (width, height) =
            fit_texture_extent(img.natural_width(), img.natural_height(), MAX_TEXTURE_SIDE);
        let (canvas, ctx) = self.scratch()?;
        canvas.set_width(width);
        canvas.set_height(height);
        ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            0.0,
            0.0,
            width as f64,
            height as f64,
        )
        .map_err(|e| anyhow::anyhow!("drawImage: {:?}", e))?;
        let data = ctx
            .get_image_data(0.0, 0.0, width as f64, height as f64)
            .map_err(|e| anyhow::anyhow!("getImageData: {:?}", e))?;
        Ok((width, height, data.data().0))
    }

    fn scratch(
        &mut self,
    ) -> anyhow::Result<&(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
        if self.scratch.is_none() {
            let document = crate::dom::window_document()
                .ok_or_else(|| anyhow::anyhow!("no document"))?;
            let canvas: web::HtmlCanvasElement = document
                .create_element("canvas")
                .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
                .dyn_into()
                .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?;
            let ctx: web::CanvasRenderingContext2d = canvas
                .get_context("2d")
                .map_err(|e| anyhow::anyhow!("getContext: {:?}", e))?
                .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
                .dyn_into()
                .map_err(|e| anyhow::anyhow!("2d context: {:?}", e))?;
            self.scratch = Some((canvas, ctx));
        }
        self.scratch
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("scratch canvas unavailable"))
    }
}
