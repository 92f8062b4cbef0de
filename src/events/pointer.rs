use crate::constants::{WHEEL_LINE_PX, WHEEL_PAGE_PX};
use crate::dom;
use crate::input;
use crate::scene::Scene;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_click(&w);
    wire_wheel(&w);
    wire_resize(&w);
}

#[inline]
fn pointer_canvas_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

fn add_window_listener<E: FromWasmAbi + 'static>(event: &str, handler: impl FnMut(E) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    add_window_listener("pointermove", move |ev: web::PointerEvent| {
        let pos = pointer_canvas_css(&ev, &w.canvas);
        let (css_w, css_h) = dom::canvas_css_size(&w.canvas);
        let Some(ndc) = input::client_to_ndc(pos.x, pos.y, css_w, css_h) else {
            return;
        };

        let mut scene = w.scene.borrow_mut();
        let Scene {
            camera,
            orbit,
            controller,
        } = &mut *scene;
        orbit.drag_to(pos, css_h);
        if let Err(e) = controller.pointer_moved(ndc, camera) {
            log::error!("[hover] {}", e);
        }
    });
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = pointer_canvas_css(&ev, &w.canvas);
        {
            let mut scene = w.scene.borrow_mut();
            if let Some(signal) = scene.orbit.begin_drag(pos) {
                scene.controller.apply_drive_signal(signal);
                log::debug!("[orbit] {:?}", signal);
            }
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    add_window_listener("pointerup", move |_ev: web::PointerEvent| {
        let mut scene = w.scene.borrow_mut();
        if let Some(signal) = scene.orbit.end_drag() {
            scene.controller.apply_drive_signal(signal);
            log::debug!("[orbit] {:?}", signal);
        }
    });
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    add_window_listener("click", move |_ev: web::MouseEvent| {
        let mut scene = w.scene.borrow_mut();
        let Scene {
            camera, controller, ..
        } = &mut *scene;
        if let Some(source) = controller.activate(camera) {
            log::info!("[click] opened {}", source);
        }
    });
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        let delta =
            input::wheel_delta_px(ev.delta_y(), ev.delta_mode(), WHEEL_LINE_PX, WHEEL_PAGE_PX);
        w.scene.borrow_mut().orbit.zoom(delta);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_resize(w: &InputWiring) {
    let w = w.clone();
    add_window_listener("resize", move |_ev: web::Event| {
        dom::sync_canvas_backing_size(&w.canvas);
        let (css_w, css_h) = dom::canvas_css_size(&w.canvas);
        w.scene.borrow_mut().camera.set_viewport(css_w, css_h);
    });
}
