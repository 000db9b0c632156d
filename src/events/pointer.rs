use crate::core::Scene;
use crate::dom;
use glam::Vec2;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position in viewport CSS pixels.
#[inline]
fn pointer_viewport_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Subscribe the scene to window pointer and resize events.
///
/// The returned listeners unsubscribe when dropped.
pub fn wire_input_handlers(window: &web::Window, scene: Rc<RefCell<Scene>>) -> Vec<EventListener> {
    vec![
        wire_pointermove(window, scene.clone()),
        wire_pointerdown(window, scene.clone()),
        wire_resize(window, scene),
    ]
}

fn wire_pointermove(window: &web::Window, scene: Rc<RefCell<Scene>>) -> EventListener {
    EventListener::new(window, "pointermove", move |event: &web::Event| {
        let Some(ev) = event.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        scene.borrow_mut().pointer_move(pointer_viewport_px(ev));
    })
}

fn wire_pointerdown(window: &web::Window, scene: Rc<RefCell<Scene>>) -> EventListener {
    EventListener::new(window, "pointerdown", move |event: &web::Event| {
        let Some(ev) = event.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let shot = scene
            .borrow_mut()
            .pointer_down(pointer_viewport_px(ev), instant::now());
        if shot.hit_mascot {
            log::info!("[click] mascot down, decal {:?}", shot.decal);
        }
    })
}

fn wire_resize(window: &web::Window, scene: Rc<RefCell<Scene>>) -> EventListener {
    let wnd = window.clone();
    EventListener::new(window, "resize", move |_event: &web::Event| {
        scene.borrow_mut().resize(dom::viewport_size(&wnd));
    })
}
