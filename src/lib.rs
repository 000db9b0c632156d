#![cfg(target_arch = "wasm32")]
use crate::core::{Scene, SceneConfig};
use anyhow::anyhow;
use gloo::events::EventListener;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod style;

/// Everything acquired by `mount`; dropping it releases listeners, the frame
/// loop, the DOM layer and the hidden-cursor style.
struct Mounted {
    _listeners: Vec<EventListener>,
    _frame: frame::FrameLoop,
    _cursor: Option<dom::CursorGuard>,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gun-cursor starting");

    match mount() {
        Ok(mounted) => {
            MOUNTED.with(|m| *m.borrow_mut() = Some(mounted));
            Ok(())
        }
        Err(e) => {
            log::error!("mount error: {:?}", e);
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}

/// Tear the scene down and restore the page.
#[wasm_bindgen]
pub fn unmount() {
    if MOUNTED.with(|m| m.borrow_mut().take()).is_some() {
        log::info!("gun-cursor unmounted");
    }
}

fn mount() -> anyhow::Result<Mounted> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;

    // An existing root element hosts the layer and carries config overrides.
    let host = document.get_element_by_id(constants::ROOT_ELEMENT_ID);
    let config = load_config(host.as_ref());
    let parent: web::Node = match host {
        Some(el) => el.into(),
        None => body.into(),
    };

    let viewport = dom::viewport_size(&window);
    let scene = Rc::new(RefCell::new(Scene::new(
        config,
        viewport,
        StdRng::from_entropy(),
    )));
    log::info!(
        "[scene] viewport={:.0}x{:.0} pivot=({:.0},{:.0})",
        viewport.x,
        viewport.y,
        scene.borrow().pivot().x,
        scene.borrow().pivot().y
    );

    let view = render::DomView::build(&document, &parent, scene.borrow().config())?;
    let listeners = events::wire_input_handlers(&window, scene.clone());
    let frame = frame::start_loop(frame::FrameContext { scene, view });

    Ok(Mounted {
        _listeners: listeners,
        _frame: frame,
        _cursor: dom::CursorGuard::hide(&document),
    })
}

fn load_config(host: Option<&web::Element>) -> SceneConfig {
    let Some(host) = host else {
        return SceneConfig::default();
    };
    let (config, errors) = SceneConfig::default().with_overrides(|key| host.get_attribute(key));
    for e in errors {
        log::warn!("[config] ignoring override: {}", e);
    }
    config
}
