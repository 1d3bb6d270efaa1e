use super::Wiring;
use crate::constants::FIELD_CONTAINER_ID;
use crate::dom::{self, set_style, Listener};
use fx_core::constants::{FIELD_GLOW_PX, FIELD_LINK_WIDTH_PX};
use fx_core::{Animation, FieldConfig, Link, ParticleField, Tick};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FieldEffect {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: Rc<RefCell<ParticleField>>,
    links: Vec<Link>,
}

impl FieldEffect {
    fn draw(&mut self) {
        let field = self.field.borrow();
        let size = field.size();
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);

        self.ctx.set_shadow_blur(FIELD_GLOW_PX);
        for p in field.particles() {
            self.ctx.begin_path();
            _ = self
                .ctx
                .arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU);
            self.ctx.set_fill_style_str(p.color);
            self.ctx.set_shadow_color(p.color);
            self.ctx.fill();
        }

        field.links_into(&mut self.links);
        self.ctx.set_shadow_blur(0.0);
        self.ctx.set_line_width(FIELD_LINK_WIDTH_PX);
        let particles = field.particles();
        for link in &self.links {
            let (a, b) = (&particles[link.a], &particles[link.b]);
            self.ctx.begin_path();
            self.ctx.move_to(a.pos.x as f64, a.pos.y as f64);
            self.ctx.line_to(b.pos.x as f64, b.pos.y as f64);
            self.ctx.set_stroke_style_str(a.color);
            self.ctx.set_global_alpha(link.alpha as f64);
            self.ctx.stroke();
        }
        self.ctx.set_global_alpha(1.0);
    }
}

impl Animation for FieldEffect {
    fn name(&self) -> &'static str {
        "field"
    }

    fn frame(&mut self, _dt: Duration) -> Tick {
        self.field.borrow_mut().step();
        self.draw();
        Tick::Continue
    }

    fn teardown(&mut self) {
        self.canvas.remove();
    }
}

fn sync_canvas_to_viewport(window: &web::Window, canvas: &web::HtmlCanvasElement) -> glam::Vec2 {
    let size = dom::viewport_size(window);
    canvas.set_width(size.x.max(1.0) as u32);
    canvas.set_height(size.y.max(1.0) as u32);
    size
}

/// Full-viewport particle background inside `#particles-bg`.
pub fn wire(
    window: &web::Window,
    document: &web::Document,
    cfg: &FieldConfig,
) -> anyhow::Result<Option<Wiring>> {
    let Some(container) = document.get_element_by_id(FIELD_CONTAINER_ID) else {
        log::debug!("[field] no #{FIELD_CONTAINER_ID}");
        return Ok(None);
    };
    if cfg.count == 0 {
        log::debug!("[field] particle count is zero");
        return Ok(None);
    }

    let canvas = document
        .create_element("canvas")
        .map_err(dom::js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("canvas element has wrong type"))?;
    for (prop, value) in [
        ("position", "absolute"),
        ("top", "0"),
        ("left", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("pointer-events", "none"),
    ] {
        set_style(&canvas, prop, value);
    }
    let ctx = canvas
        .get_context("2d")
        .map_err(dom::js_err)?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow::anyhow!("2d context has wrong type"))?;
    container.append_child(&canvas).map_err(dom::js_err)?;

    let size = sync_canvas_to_viewport(window, &canvas);
    if cfg.count > cfg.grid_threshold {
        log::info!(
            "[field] {} particles exceeds {}, using grid link search",
            cfg.count,
            cfg.grid_threshold
        );
    }
    let field = Rc::new(RefCell::new(ParticleField::new(
        cfg,
        size,
        &mut StdRng::from_entropy(),
    )));

    let mut wiring = Wiring::new("field");
    let field_resize = field.clone();
    let canvas_resize = canvas.clone();
    let window_resize = window.clone();
    wiring.listeners.push(Listener::new(window, "resize", move |_| {
        let size = sync_canvas_to_viewport(&window_resize, &canvas_resize);
        field_resize.borrow_mut().resize(size);
    })?);

    log::info!("[field] {} particles", cfg.count);
    Ok(Some(wiring.with_animation(FieldEffect {
        canvas,
        ctx,
        field,
        links: Vec::with_capacity(cfg.count.saturating_mul(4)),
    })))
}
