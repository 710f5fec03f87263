//! Hover effects: magnetic buttons, tilting skill cubes, and project cards
//! with an inner-image counter-parallax. All of them are desktop-only and
//! reset to a neutral transform on pointer exit.

use crate::constants::{
    MAGNETIC_SELECTOR, PROJECT_BUTTON_SELECTOR, PROJECT_CARD_SELECTOR, PROJECT_IMAGE_SELECTOR,
    SKILL_CUBE_SELECTOR,
};
use crate::core::constants::{CARD_TILT_DEG, CUBE_TILT_DEG, MAGNET_STRENGTH_PX};
use crate::core::tilt;
use crate::dom;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn init(document: &web::Document) {
    wire_magnetics(document);
    wire_cubes(document);
    wire_cards(document);
}

/// Pointer position relative to the element's box, plus its dimensions.
fn local_pointer(ev: &web::MouseEvent, el: &web::HtmlElement) -> (Vec2, f32, f32) {
    let rect = el.get_bounding_client_rect();
    let local = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    (local, rect.width() as f32, rect.height() as f32)
}

fn wire_magnetics(document: &web::Document) {
    dom::for_each_element(document, MAGNETIC_SELECTOR, |el| {
        let target = el.clone();
        dom::listen(&el, "mousemove", move |ev: web::MouseEvent| {
            if !tilt::effects_enabled(dom::viewport_width()) {
                return;
            }
            let (local, width, height) = local_pointer(&ev, &target);
            let offset = tilt::center_offset(local, width, height);
            let shift = tilt::magnet_translation(offset, MAGNET_STRENGTH_PX);
            dom::set_style(&target, "transform", &tilt::magnet_transform(shift));
        });

        let target = el.clone();
        dom::listen0(&el, "mouseleave", move || {
            dom::set_style(&target, "transform", tilt::MAGNET_NEUTRAL);
        });
    });
}

fn wire_cubes(document: &web::Document) {
    dom::for_each_element(document, SKILL_CUBE_SELECTOR, |el| {
        // Interrupted reveal setups sometimes leave cubes hidden.
        dom::set_style(&el, "opacity", "1");
        dom::set_style(&el, "visibility", "visible");

        let target = el.clone();
        dom::listen(&el, "mousemove", move |ev: web::MouseEvent| {
            if !tilt::effects_enabled(dom::viewport_width()) {
                return;
            }
            let (local, width, height) = local_pointer(&ev, &target);
            let angles = tilt::tilt_angles(tilt::center_offset(local, width, height), CUBE_TILT_DEG);
            dom::set_style(&target, "transform", &tilt::cube_transform(&angles));
        });

        let target = el.clone();
        dom::listen0(&el, "mouseleave", move || {
            dom::set_style(&target, "transform", tilt::CUBE_NEUTRAL);
        });
    });
}

fn wire_cards(document: &web::Document) {
    dom::for_each_element(document, PROJECT_CARD_SELECTOR, |card| {
        dom::set_style(&card, "opacity", "1");
        dom::set_style(&card, "visibility", "visible");

        let image = card
            .query_selector(PROJECT_IMAGE_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());

        {
            let target = card.clone();
            let image = image.clone();
            dom::listen(&card, "mousemove", move |ev: web::MouseEvent| {
                if !tilt::effects_enabled(dom::viewport_width()) {
                    return;
                }
                let (local, width, height) = local_pointer(&ev, &target);
                let angles =
                    tilt::tilt_angles(tilt::center_offset(local, width, height), CARD_TILT_DEG);
                dom::set_style(&target, "transform", &tilt::card_transform(&angles));
                if let Some(image) = &image {
                    let shift = tilt::parallax_shift(local, width, height);
                    dom::set_style(image, "transform", &tilt::card_image_transform(shift));
                }
            });
        }
        {
            let target = card.clone();
            let image = image.clone();
            dom::listen0(&card, "mouseleave", move || {
                dom::set_style(&target, "transform", tilt::CARD_NEUTRAL);
                if let Some(image) = &image {
                    dom::set_style(image, "transform", tilt::CARD_IMAGE_NEUTRAL);
                }
            });
        }

        // The card's action button handles its own click; keep it out of
        // the tilt surface.
        if let Ok(Some(button)) = card.query_selector(PROJECT_BUTTON_SELECTOR) {
            dom::listen(&button, "click", move |ev: web::MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                log::debug!("project button clicked");
            });
        }
    });
}
