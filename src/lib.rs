#![cfg(target_arch = "wasm32")]
//! Effects layer for the portfolio page.
//!
//! Each component binds to a known element and silently skips when the page
//! does not carry it. Components are independent; the entry point only
//! initializes them and holds on to their scheduler handles.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod field;
mod follower;
mod form;
mod hover;
mod media;
mod nav;
mod rotator;
mod sched;
mod scroll;
mod sound;
mod visibility;

/// Live component handles. Dropping this cancels every recurring scheduler
/// the components own.
struct App {
    _field: Option<field::ParticleCanvas>,
    _follower: Option<follower::CursorFollower>,
    _rotator: Option<rotator::TitleRotatorHandle>,
    _safety_net: sched::Timeout,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    match init() {
        Ok(app) => APP.with(|slot| *slot.borrow_mut() = Some(app)),
        Err(e) => log::error!("init error: {e:?}"),
    }
    Ok(())
}

/// Tear down every component and cancel their recurring schedulers. The
/// page calls this before discarding the module.
#[wasm_bindgen]
pub fn shutdown() {
    APP.with(|slot| slot.borrow_mut().take());
    log::info!("portfolio-web stopped");
}

fn init() -> anyhow::Result<App> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let field = field::init(&document);
    if field.is_none() {
        log::debug!("no particle canvas on this page");
    }
    let follower = follower::init(&document);
    hover::init(&document);
    let rotator = rotator::init(&document);
    form::init(&document);
    nav::init(&document);
    let fx = scroll::init(&document);
    sound::init(&document);
    media::init(&document);

    // Give the reveal setup a beat to run, then force anything still
    // hidden back to visible.
    let safety_net = {
        let document = document.clone();
        sched::Timeout::once(constants::VISIBILITY_FIX_DELAY_MS, move || {
            visibility::ensure_content_visible(&document, fx.as_ref());
        })
    };

    Ok(App {
        _field: field,
        _follower: follower,
        _rotator: rotator,
        _safety_net: safety_net,
    })
}
