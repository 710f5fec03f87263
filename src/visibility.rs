//! Safety net: force the known reveal targets back to visible styling in
//! case an interrupted animation setup left them hidden.

use crate::constants::{PROJECT_CARD_SELECTOR, SECTION_SELECTOR, SKILL_CUBE_SELECTOR};
use crate::dom;
use crate::scroll::ScrollEffects;
use web_sys as web;

pub fn ensure_content_visible(document: &web::Document, fx: Option<&ScrollEffects>) {
    for selector in [SECTION_SELECTOR, SKILL_CUBE_SELECTOR, PROJECT_CARD_SELECTOR] {
        dom::for_each_element(document, selector, |el| {
            dom::set_style(&el, "opacity", "1");
            dom::set_style(&el, "visibility", "visible");
        });
    }
    // Trigger positions are stale once everything is visible again.
    if let Some(fx) = fx {
        fx.refresh();
    }
}
