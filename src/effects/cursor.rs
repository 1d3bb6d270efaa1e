use super::Wiring;
use crate::constants::{
    BURST_GLOW_PX, BURST_Z_INDEX, CURSOR_CLASSES, CURSOR_SELECTOR, FOLLOWER_SELECTOR,
    HOVER_TARGETS_SELECTOR,
};
use crate::dom::{self, set_style, Listener};
use crate::style;
use fnv::FnvHashMap;
use fx_core::constants::{BURST_PARTICLE_COUNT, BURST_PARTICLE_SIZE_PX};
use fx_core::{Animation, Burst, PointerConfig, PointerState, Tick};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

type BurstNodes = Rc<RefCell<FnvHashMap<u64, SmallVec<[web::HtmlElement; BURST_PARTICLE_COUNT]>>>>;

pub struct CursorEffect {
    cursor: web::HtmlElement,
    follower: web::HtmlElement,
    state: Rc<RefCell<PointerState>>,
    nodes: BurstNodes,
    finished: Vec<u64>,
}

impl Animation for CursorEffect {
    fn name(&self) -> &'static str {
        "cursor"
    }

    fn frame(&mut self, _dt: Duration) -> Tick {
        let mut state = self.state.borrow_mut();
        state.frame(&mut self.finished);

        let trail = &state.trail;
        set_style(&self.cursor, "transform", &style::translate3d(trail.cursor.pos));
        set_style(
            &self.follower,
            "transform",
            &style::translate3d_scaled(trail.follower.pos, trail.follower_scale()),
        );

        let nodes = self.nodes.borrow();
        for burst in &state.bursts {
            let Some(els) = nodes.get(&burst.id) else {
                continue;
            };
            for (el, p) in els.iter().zip(&burst.particles) {
                set_style(el, "transform", &style::translate3d(p.offset));
                set_style(el, "opacity", &p.opacity.to_string());
            }
        }
        drop(nodes);
        drop(state);

        let mut nodes = self.nodes.borrow_mut();
        for id in self.finished.drain(..) {
            for el in nodes.remove(&id).into_iter().flatten() {
                el.remove();
            }
        }
        Tick::Continue
    }

    fn teardown(&mut self) {
        for (_, els) in self.nodes.borrow_mut().drain() {
            for el in els {
                el.remove();
            }
        }
        self.state.borrow_mut().bursts.clear();
    }
}

fn spawn_burst_nodes(
    document: &web::Document,
    burst: &Burst,
) -> anyhow::Result<SmallVec<[web::HtmlElement; BURST_PARTICLE_COUNT]>> {
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let size = format!("{}px", BURST_PARTICLE_SIZE_PX);
    let mut out = SmallVec::new();
    for p in &burst.particles {
        let el = document
            .create_element("div")
            .map_err(dom::js_err)?
            .dyn_into::<web::HtmlElement>()
            .map_err(|_| anyhow::anyhow!("div is not an HtmlElement"))?;
        set_style(&el, "position", "fixed");
        set_style(&el, "left", &format!("{}px", p.origin.x));
        set_style(&el, "top", &format!("{}px", p.origin.y));
        set_style(&el, "width", &size);
        set_style(&el, "height", &size);
        set_style(&el, "border-radius", "50%");
        set_style(&el, "background-color", p.color);
        set_style(&el, "pointer-events", "none");
        set_style(&el, "z-index", BURST_Z_INDEX);
        set_style(&el, "box-shadow", &style::glow(BURST_GLOW_PX, p.glow));
        body.append_child(&el).map_err(dom::js_err)?;
        out.push(el);
    }
    Ok(out)
}

/// Custom cursor: two smoothed markers plus click bursts. Off on narrow viewports.
pub fn wire(
    window: &web::Window,
    document: &web::Document,
    cfg: &PointerConfig,
) -> anyhow::Result<Option<Wiring>> {
    let width = dom::viewport_size(window).x as f64;
    if !cfg.enabled_for_width(width) {
        log::info!("[cursor] disabled at viewport width {width}");
        return Ok(None);
    }
    let (Some(cursor), Some(follower)) = (
        dom::query(document, CURSOR_SELECTOR),
        dom::query(document, FOLLOWER_SELECTOR),
    ) else {
        log::debug!("[cursor] markers not found");
        return Ok(None);
    };

    let state = Rc::new(RefCell::new(PointerState::new(cfg)));
    let nodes: BurstNodes = Rc::new(RefCell::new(FnvHashMap::default()));
    let mut wiring = Wiring::new("cursor");
    let doc_target: &web::EventTarget = document.as_ref();

    let state_move = state.clone();
    wiring.listeners.push(Listener::new(doc_target, "pointermove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            let at = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            state_move.borrow_mut().trail.set_target(at);
        }
    })?);

    for el in dom::query_all(document, HOVER_TARGETS_SELECTOR) {
        let state_enter = state.clone();
        wiring.listeners.push(Listener::new(&el, "mouseenter", move |_| {
            state_enter.borrow_mut().trail.set_hovering(true);
        })?);
        let state_leave = state.clone();
        wiring.listeners.push(Listener::new(&el, "mouseleave", move |_| {
            state_leave.borrow_mut().trail.set_hovering(false);
        })?);
    }

    let state_click = state.clone();
    let nodes_click = nodes.clone();
    let doc_click = document.clone();
    let mut rng = StdRng::from_entropy();
    wiring.listeners.push(Listener::new(doc_target, "click", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let at = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let mut state = state_click.borrow_mut();
        let burst = state.click(at, &mut rng);
        match spawn_burst_nodes(&doc_click, burst) {
            Ok(els) => {
                nodes_click.borrow_mut().insert(burst.id, els);
            }
            Err(e) => log::warn!("[cursor] burst nodes: {e}"),
        }
    })?);

    wiring.listeners.push(Listener::new(doc_target, "contextmenu", |ev| {
        let on_marker = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|el| {
                let classes = el.class_list();
                CURSOR_CLASSES.iter().any(|c| classes.contains(c))
            })
            .unwrap_or(false);
        if on_marker {
            ev.prevent_default();
        }
    })?);

    log::info!("[cursor] active");
    Ok(Some(wiring.with_animation(CursorEffect {
        cursor,
        follower,
        state,
        nodes,
        finished: Vec::new(),
    })))
}
