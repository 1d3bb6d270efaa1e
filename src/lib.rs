#![cfg(target_arch = "wasm32")]
use fx_core::Scheduler;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod effects;
mod frame;
mod style;

use effects::Wiring;

/// Everything that has to be undone on `stop()`.
struct Runtime {
    frame: frame::FrameLoop,
    wirings: Vec<Wiring>,
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

/// Keep a module's failure from taking the others down with it.
fn isolate(name: &str, result: anyhow::Result<Option<Wiring>>) -> Option<Wiring> {
    match result {
        Ok(Some(w)) => Some(w),
        Ok(None) => {
            log::debug!("[{name}] skipped");
            None
        }
        Err(e) => {
            log::warn!("[{name}] init failed: {e:?}");
            None
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Tear down every effect: frame tasks, listeners, observer and created nodes.
#[wasm_bindgen]
pub fn stop() {
    let runtime = RUNTIME.with(|r| r.borrow_mut().take());
    if let Some(mut rt) = runtime {
        rt.frame.stop();
        let names: Vec<&str> = rt.wirings.iter().map(|w| w.name).collect();
        drop(rt.wirings);
        log::info!("folio-fx stopped ({})", names.join(", "));
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::document_ready(&document).await;

    if RUNTIME.with(|r| r.borrow().is_some()) {
        log::warn!("folio-fx already running; ignoring start");
        return Ok(());
    }

    let cfg = config::load(&document);

    let wired = [
        isolate("cursor", effects::cursor::wire(&window, &document, &cfg.pointer)),
        isolate("typing", effects::typing::wire(&document, &cfg.typing)),
        isolate("tilt", effects::tilt::wire(&document, &cfg.tilt)),
        isolate("field", effects::field::wire(&window, &document, &cfg.field)),
        isolate(
            "scroll",
            effects::scroll::wire(&window, &document, &cfg.reveal, &cfg.scroll),
        ),
    ];

    let scheduler = Rc::new(RefCell::new(Scheduler::new()));
    let mut wirings = Vec::new();
    for mut w in wired.into_iter().flatten() {
        if let Some(anim) = w.animation.take() {
            scheduler.borrow_mut().spawn_boxed(anim);
        }
        wirings.push(w);
    }

    let frame = frame::start_loop(scheduler.clone());
    log::info!(
        "folio-fx running: {} modules, {} frame tasks",
        wirings.len(),
        scheduler.borrow().len()
    );
    RUNTIME.with(|r| *r.borrow_mut() = Some(Runtime { frame, wirings }));
    Ok(())
}
