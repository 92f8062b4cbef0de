#![cfg(target_arch = "wasm32")]
use instant::Instant;
use sphere_core::{
    CameraConfig, ImageSource, InteractionController, OrbitConfig, OrbitControls, SphereConfig,
    DEFAULT_IMAGES,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod images;
mod input;
mod render;
mod scene;
mod viewer;

use constants::CANVAS_ID;
use images::ImageLoader;
use scene::Scene;
use viewer::ModalViewer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sphere-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn build_scene(document: &web::Document, canvas: &web::HtmlCanvasElement) -> anyhow::Result<Scene> {
    let camera_config = CameraConfig::default();
    camera_config.validate()?;
    let orbit_config = OrbitConfig::default();
    orbit_config.validate()?;

    let (css_w, css_h) = dom::canvas_css_size(canvas);
    let mut camera = camera_config.build_camera(1.0);
    camera.set_viewport(css_w, css_h);
    let orbit = OrbitControls::new(orbit_config, &camera);

    let viewer = ModalViewer::new(document);
    viewer.wire_dismiss(document);
    let controller = InteractionController::new(&SphereConfig::default(), viewer)?;
    Ok(Scene::new(camera, orbit, controller))
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_or_create_canvas(&document, CANVAS_ID)?;
    // Keep the canvas backing store at CSS size * devicePixelRatio.
    dom::sync_canvas_backing_size(&canvas);

    let scene = Rc::new(RefCell::new(build_scene(&document, &canvas)?));
    let loader = Rc::new(RefCell::new(ImageLoader::new()));
    let defaults: Vec<ImageSource> = DEFAULT_IMAGES.iter().copied().map(ImageSource::from).collect();
    scene.borrow_mut().replace_images(&defaults, &loader.borrow());

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
    });
    events::wire_upload(events::UploadWiring {
        document: document.clone(),
        scene: scene.clone(),
        loader: loader.clone(),
    });

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        loader,
        canvas,
        gpu,
        started: Instant::now(),
        shown_generation: 0,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
