//! Hover sound-effect hooks. No audio assets ship with the page; the hook
//! logs the configured effect name so an integration can verify wiring
//! before enabling real playback.

use crate::constants::SOUND_HOOK_SELECTOR;
use crate::dom;
use web_sys as web;

pub fn init(document: &web::Document) {
    dom::for_each_element(document, SOUND_HOOK_SELECTOR, |el| {
        let Some(effect) = el.get_attribute("data-sound") else {
            return;
        };
        dom::listen0(&el, "mouseenter", move || {
            log::debug!("hover sound: {effect}");
        });
    });
}
