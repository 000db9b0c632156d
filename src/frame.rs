use crate::core::Scene;
use crate::render::DomView;
use gloo::render::{request_animation_frame, AnimationFrame};
use std::cell::RefCell;
use std::rc::Rc;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub view: DomView,
}

impl FrameContext {
    /// Sweep timed state, then mirror the scene into the DOM.
    pub fn frame(&mut self, now_ms: f64) {
        let mut scene = self.scene.borrow_mut();
        scene.tick(now_ms);
        self.view.render(&scene);
    }
}

/// Running `requestAnimationFrame` loop; dropping it cancels the pending frame.
pub struct FrameLoop {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        // The pending callback owns the context; releasing it breaks the cycle.
        self.pending.borrow_mut().take();
    }
}

pub fn start_loop(frame_ctx: FrameContext) -> FrameLoop {
    let pending = Rc::new(RefCell::new(None));
    schedule(Rc::new(RefCell::new(frame_ctx)), pending.clone());
    FrameLoop { pending }
}

fn schedule(frame_ctx: Rc<RefCell<FrameContext>>, pending: Rc<RefCell<Option<AnimationFrame>>>) {
    let slot = pending.clone();
    let handle = request_animation_frame(move |_timestamp| {
        frame_ctx.borrow_mut().frame(instant::now());
        schedule(frame_ctx, slot);
    });
    *pending.borrow_mut() = Some(handle);
}
