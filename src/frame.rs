use fx_core::{CancelToken, Scheduler};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// The one `requestAnimationFrame` chain that steps the shared scheduler.
pub struct FrameLoop {
    scheduler: Rc<RefCell<Scheduler>>,
    tick: TickClosure,
    raf_id: Rc<Cell<Option<i32>>>,
    running: CancelToken,
}

impl FrameLoop {
    /// Cancel the pending frame, break the closure cycle and tear down tasks.
    pub fn stop(&mut self) {
        self.running.cancel();
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
        self.scheduler.borrow_mut().cancel_all();
    }
}

fn request_frame(tick: &TickClosure) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

pub fn start_loop(scheduler: Rc<RefCell<Scheduler>>) -> FrameLoop {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));
    let running = CancelToken::new();

    let tick_clone = tick.clone();
    let raf_id_tick = raf_id.clone();
    let running_tick = running.clone();
    let scheduler_tick = scheduler.clone();
    let mut last_instant = Instant::now();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if running_tick.is_cancelled() {
            return;
        }
        let now = Instant::now();
        let dt = now - last_instant;
        last_instant = now;

        let live = scheduler_tick.borrow_mut().step(dt);
        if live == 0 {
            log::info!("[frame] no animations left, loop idle");
            raf_id_tick.set(None);
            return;
        }
        raf_id_tick.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));

    raf_id.set(request_frame(&tick));
    FrameLoop {
        scheduler,
        tick,
        raf_id,
        running,
    }
}
