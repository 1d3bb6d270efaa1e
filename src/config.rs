use crate::constants::{
    FIELD_CONTAINER_ID, FIELD_COUNT_ATTR, PHRASES_ATTR, PHRASES_SEPARATOR, TYPING_SELECTOR,
};
use crate::dom;
use crate::style::parse_phrases;
use fx_core::constants::FIELD_MAX_COUNT;
use fx_core::FxConfig;
use web_sys as web;

/// Defaults plus whatever overrides the page declares through data attributes.
pub fn load(document: &web::Document) -> FxConfig {
    let mut cfg = FxConfig::default();

    if let Some(raw) =
        dom::query(document, TYPING_SELECTOR).and_then(|el| el.get_attribute(PHRASES_ATTR))
    {
        let phrases = parse_phrases(&raw, PHRASES_SEPARATOR);
        if phrases.is_empty() {
            log::warn!("[config] ignoring empty {PHRASES_ATTR}");
        } else {
            cfg.typing.phrases = phrases;
        }
    }

    if let Some(raw) = document
        .get_element_by_id(FIELD_CONTAINER_ID)
        .and_then(|el| el.get_attribute(FIELD_COUNT_ATTR))
    {
        match raw.trim().parse::<usize>() {
            Ok(n) if n > FIELD_MAX_COUNT => {
                log::warn!("[config] ignoring {FIELD_COUNT_ATTR}={n}: above {FIELD_MAX_COUNT}");
            }
            Ok(n) => cfg.field.count = n,
            Err(e) => log::warn!("[config] ignoring {FIELD_COUNT_ATTR}={raw:?}: {e}"),
        }
    }

    if let Err(e) = cfg.validate() {
        log::warn!("[config] invalid overrides ({e}); using defaults");
        return FxConfig::default();
    }
    cfg
}
