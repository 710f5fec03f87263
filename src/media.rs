//! Background video: autoplay with graceful fallbacks. Autoplay rejection
//! degrades to native controls plus an injected play button; a media error
//! swaps in the static image background.

use crate::constants::{
    BG_VIDEO_ID, PLAY_BUTTON_LABEL, PLAY_BUTTON_STYLE, VIDEO_BACKGROUND_SELECTOR,
    VIDEO_FALLBACK_IMAGE,
};
use crate::dom;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn init(document: &web::Document) {
    let Some(video) = dom::element_by_id_as::<web::HtmlVideoElement>(document, BG_VIDEO_ID) else {
        return;
    };

    // A media error means the asset is unusable; swap in the static image.
    {
        let document = document.clone();
        dom::listen0(&video, "error", move || {
            log::warn!("background video failed to load; using fallback image");
            if let Some(holder) = dom::query_html(&document, VIDEO_BACKGROUND_SELECTOR) {
                dom::set_style(&holder, "background-image", VIDEO_FALLBACK_IMAGE);
                dom::set_style(&holder, "background-size", "cover");
                dom::set_style(&holder, "background-position", "center");
            }
        });
    }
    dom::listen0(&video, "loadeddata", || {
        log::debug!("background video loaded");
    });

    match video.play() {
        Ok(promise) => {
            let document = document.clone();
            let video = video.clone();
            spawn_local(async move {
                if JsFuture::from(promise).await.is_err() {
                    log::debug!("video autoplay rejected; offering a manual start");
                    video.set_controls(true);
                    add_play_button(&document, &video);
                }
            });
        }
        Err(_) => video.set_controls(true),
    }
}

fn add_play_button(document: &web::Document, video: &web::HtmlVideoElement) {
    let Ok(button) = document.create_element("button") else {
        return;
    };
    button.set_text_content(Some(PLAY_BUTTON_LABEL));
    _ = button.set_attribute("style", PLAY_BUTTON_STYLE);
    let Some(body) = document.body() else {
        return;
    };
    _ = body.append_child(&button);

    let video = video.clone();
    let button_el = button.clone();
    dom::listen0(&button, "click", move || {
        _ = video.play();
        button_el.remove();
    });
}
