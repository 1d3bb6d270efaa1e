use super::Wiring;
use crate::constants::TILT_SELECTOR;
use crate::dom::{self, set_style, Listener};
use crate::style;
use fx_core::{TiltConfig, TiltPose};
use glam::Vec2;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn apply(card: &web::HtmlElement, pose: &TiltPose, cfg: &TiltConfig) {
    let transition = if pose.is_rest() { &cfg.leave } else { &cfg.enter };
    set_style(card, "transform", &style::tilt_transform(pose, cfg.perspective_px));
    set_style(card, "transition", &style::transition("transform", transition));
}

/// 3D hover tilt on every `[data-tilt]` card. Event driven, no frame task.
pub fn wire(document: &web::Document, cfg: &TiltConfig) -> anyhow::Result<Option<Wiring>> {
    let cards = dom::query_all(document, TILT_SELECTOR);
    if cards.is_empty() {
        log::debug!("[tilt] no cards");
        return Ok(None);
    }
    let cfg = Rc::new(cfg.clone());
    let mut wiring = Wiring::new("tilt");
    for card in &cards {
        let card_move = card.clone();
        let cfg_move = cfg.clone();
        wiring.listeners.push(Listener::new(card, "mousemove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let rect = card_move.get_bounding_client_rect();
            let local = Vec2::new(
                (ev.client_x() as f64 - rect.left()) as f32,
                (ev.client_y() as f64 - rect.top()) as f32,
            );
            let size = Vec2::new(rect.width() as f32, rect.height() as f32);
            apply(&card_move, &TiltPose::from_pointer(local, size, &cfg_move), &cfg_move);
        })?);

        let card_leave = card.clone();
        let cfg_leave = cfg.clone();
        wiring.listeners.push(Listener::new(card, "mouseleave", move |_| {
            apply(&card_leave, &TiltPose::REST, &cfg_leave);
        })?);
    }
    log::info!("[tilt] {} cards", cards.len());
    Ok(Some(wiring))
}
