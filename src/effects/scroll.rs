//! Scroll reveal, section parallax, nav highlighting and smooth anchor jumps.

use super::Wiring;
use crate::constants::{
    ANCHOR_SELECTOR, NAV_ACTIVE_CLASS, REVEAL_CLASS, REVEAL_KEY_ATTR, REVEAL_SELECTOR,
    SECTION_SELECTOR,
};
use crate::dom::{self, set_style, Listener};
use crate::style;
use fx_core::{
    active_section, anchor_target, meets_threshold, parallax_offset, visible_ratio, RevealConfig,
    RevealKey, RevealSet, ScrollConfig, SectionSpan,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Intersection observer that disconnects when dropped.
pub struct RevealObserver {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn reveal_key(el: &web::Element) -> Option<RevealKey> {
    el.get_attribute(REVEAL_KEY_ATTR)?.parse().ok()
}

fn mark_revealed(el: &web::Element) {
    _ = el.class_list().add_1(REVEAL_CLASS);
}

fn build_observer(
    targets: &[web::HtmlElement],
    set: Rc<RefCell<RevealSet>>,
    cfg: &RevealConfig,
) -> anyhow::Result<RevealObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(key) = reveal_key(&target) else {
                    continue;
                };
                if set.borrow_mut().on_intersection(key, entry.is_intersecting()) {
                    mark_revealed(&target);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(cfg.threshold));
    opts.set_root_margin(&cfg.root_margin());
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
            .map_err(dom::js_err)?;
    for el in targets {
        observer.observe(el);
    }
    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

/// Geometric stand-in for browsers without `IntersectionObserver`.
fn reveal_by_geometry(
    window: &web::Window,
    targets: &[web::HtmlElement],
    set: &RefCell<RevealSet>,
    cfg: &RevealConfig,
) {
    let viewport_h = dom::viewport_size(window).y as f64;
    let mut set = set.borrow_mut();
    for el in targets {
        let Some(key) = reveal_key(el) else {
            continue;
        };
        let rect = el.get_bounding_client_rect();
        let ratio = visible_ratio(rect.top(), rect.height(), viewport_h, cfg.bottom_margin_px);
        if set.on_intersection(key, meets_threshold(ratio, cfg.threshold)) {
            mark_revealed(el);
        }
    }
}

struct NavSection {
    element: web::HtmlElement,
    links: Vec<web::HtmlElement>,
}

fn nav_sections(document: &web::Document, sections: &[web::HtmlElement]) -> Vec<NavSection> {
    sections
        .iter()
        .map(|s| {
            let id = s.id();
            let links = if id.is_empty() {
                Vec::new()
            } else {
                dom::query_all(document, &format!("a[href=\"#{id}\"]"))
            };
            NavSection {
                element: s.clone(),
                links,
            }
        })
        .collect()
}

fn on_scroll(window: &web::Window, nav: &[NavSection], cfg: &ScrollConfig) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    for (i, s) in nav.iter().enumerate() {
        let y = parallax_offset(scroll_y as f32, i, cfg);
        set_style(&s.element, "transform", &style::translate_y(y));
    }

    let spans: Vec<SectionSpan> = nav
        .iter()
        .map(|s| SectionSpan {
            top: s.element.offset_top() as f64,
            height: s.element.offset_height() as f64,
        })
        .collect();
    let active = active_section(scroll_y, &spans, cfg);
    for (i, s) in nav.iter().enumerate() {
        for link in &s.links {
            _ = link
                .class_list()
                .toggle_with_force(NAV_ACTIVE_CLASS, active == Some(i));
        }
    }
}

fn wire_anchors(document: &web::Document, wiring: &mut Wiring) -> anyhow::Result<usize> {
    let anchors = dom::query_all(document, ANCHOR_SELECTOR);
    for anchor in &anchors {
        let anchor_click = anchor.clone();
        let doc_click = document.clone();
        wiring.listeners.push(Listener::new(anchor, "click", move |ev| {
            let href = anchor_click.get_attribute("href").unwrap_or_default();
            let Some(target) = anchor_target(&href).and_then(|id| doc_click.get_element_by_id(id))
            else {
                return;
            };
            ev.prevent_default();
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            opts.set_block(web::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        })?);
    }
    Ok(anchors.len())
}

pub fn wire(
    window: &web::Window,
    document: &web::Document,
    reveal_cfg: &RevealConfig,
    scroll_cfg: &ScrollConfig,
) -> anyhow::Result<Option<Wiring>> {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    let sections = dom::query_all(document, SECTION_SELECTOR);
    let target_count = targets.len();
    let section_count = sections.len();
    let mut wiring = Wiring::new("scroll");

    let set = Rc::new(RefCell::new(RevealSet::new()));
    for (key, el) in (0 as RevealKey..).zip(&targets) {
        _ = el.set_attribute(REVEAL_KEY_ATTR, &key.to_string());
        set.borrow_mut().observe(key);
    }

    let mut fallback = false;
    if !targets.is_empty() {
        match build_observer(&targets, set.clone(), reveal_cfg) {
            Ok(observer) => wiring.observer = Some(observer),
            Err(e) => {
                log::warn!("[scroll] no IntersectionObserver ({e}), using scroll geometry");
                reveal_by_geometry(window, &targets, &set, reveal_cfg);
                fallback = true;
            }
        }
    }

    let nav = nav_sections(document, &sections);
    if fallback || !nav.is_empty() {
        let window_scroll = window.clone();
        let reveal_cfg = reveal_cfg.clone();
        let scroll_cfg = scroll_cfg.clone();
        wiring.listeners.push(Listener::new(window, "scroll", move |_| {
            if fallback && set.borrow().pending_count() > 0 {
                reveal_by_geometry(&window_scroll, &targets, &set, &reveal_cfg);
            }
            on_scroll(&window_scroll, &nav, &scroll_cfg);
        })?);
    }

    let anchors = wire_anchors(document, &mut wiring)?;

    if wiring.observer.is_none() && wiring.listeners.is_empty() {
        log::debug!("[scroll] nothing to wire");
        return Ok(None);
    }
    log::info!(
        "[scroll] {} reveal targets, {} sections, {} anchors",
        target_count,
        section_count,
        anchors
    );
    Ok(Some(wiring))
}
