use super::Wiring;
use crate::constants::TYPING_SELECTOR;
use crate::dom;
use fx_core::{Animation, FxError, Tick, TypingConfig, TypingCycle, TypingTicker};
use std::time::Duration;
use web_sys as web;

pub struct TypingEffect {
    element: web::HtmlElement,
    ticker: TypingTicker,
}

impl Animation for TypingEffect {
    fn name(&self) -> &'static str {
        "typing"
    }

    fn frame(&mut self, dt: Duration) -> Tick {
        if self.ticker.advance(dt) {
            self.element.set_text_content(Some(self.ticker.text()));
        }
        Tick::Continue
    }
}

pub fn wire(document: &web::Document, cfg: &TypingConfig) -> anyhow::Result<Option<Wiring>> {
    let Some(element) = dom::query(document, TYPING_SELECTOR) else {
        log::debug!("[typing] no {TYPING_SELECTOR} element");
        return Ok(None);
    };
    let cycle = match TypingCycle::new(cfg.phrases.clone(), cfg.timing.clone()) {
        Ok(c) => c,
        Err(FxError::EmptyPhrases) => {
            log::debug!("[typing] no phrases");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    log::info!("[typing] cycling {} phrases", cfg.phrases.len());
    Ok(Some(Wiring::new("typing").with_animation(TypingEffect {
        element,
        ticker: TypingTicker::new(cycle),
    })))
}
