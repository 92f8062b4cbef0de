use crate::images::ImageLoader;
use crate::render;
use crate::scene::Scene;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<Scene>>,
    pub loader: Rc<RefCell<ImageLoader>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub started: Instant,
    pub shown_generation: u32,
}

impl<'a> FrameContext<'a> {
    /// One tick: camera first, then sphere animation, then uploads and draw.
    pub fn frame(&mut self) {
        let now = self.started.elapsed().as_secs_f64();

        let mut scene = self.scene.borrow_mut();
        let Scene {
            camera,
            orbit,
            controller,
        } = &mut *scene;
        orbit.update(camera);
        controller.frame(now);

        let Some(g) = &mut self.gpu else {
            return;
        };
        let billboards = controller.billboards();
        if billboards.generation() != self.shown_generation {
            g.retain_images(billboards);
            self.shown_generation = billboards.generation();
        }
        for image in self.loader.borrow_mut().drain_decoded() {
            // Loads from a replaced image set arrive late; drop them.
            if billboards.panels().iter().any(|p| p.source == image.source) {
                g.upload_image(&image);
            }
        }
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = g.render(camera.view_projection(), billboards, now as f32) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
