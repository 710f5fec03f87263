//! Cursor follower wiring: a single marker easing toward the pointer every
//! frame, reacting to interactive elements, hiding when the pointer leaves
//! the viewport.

use crate::constants::{
    CURSOR_ACTIVE_BACKGROUND, CURSOR_ACTIVE_BORDER, CURSOR_ACTIVE_TRANSFORM,
    CURSOR_FOLLOWER_SELECTOR, CURSOR_IDLE_BACKGROUND, CURSOR_IDLE_BORDER, CURSOR_IDLE_TRANSFORM,
    INTERACTIVE_SELECTOR,
};
use crate::core::follower::FollowerState;
use crate::dom;
use crate::sched::FrameLoop;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct CursorFollower {
    _frames: FrameLoop,
}

pub fn init(document: &web::Document) -> Option<CursorFollower> {
    let cursor = dom::query_html(document, CURSOR_FOLLOWER_SELECTOR)?;
    dom::set_style(&cursor, "opacity", "1");

    let state = Rc::new(RefCell::new(FollowerState::default()));

    {
        let state = state.clone();
        dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
            state
                .borrow_mut()
                .set_target(ev.client_x() as f32, ev.client_y() as f32);
        });
    }

    // Enlarge and recolor over anything interactive.
    dom::for_each_element(document, INTERACTIVE_SELECTOR, |el| {
        let cursor_enter = cursor.clone();
        dom::listen0(&el, "mouseenter", move || {
            dom::set_style(&cursor_enter, "transform", CURSOR_ACTIVE_TRANSFORM);
            dom::set_style(&cursor_enter, "background", CURSOR_ACTIVE_BACKGROUND);
            dom::set_style(&cursor_enter, "border-color", CURSOR_ACTIVE_BORDER);
        });
        let cursor_leave = cursor.clone();
        dom::listen0(&el, "mouseleave", move || {
            dom::set_style(&cursor_leave, "transform", CURSOR_IDLE_TRANSFORM);
            dom::set_style(&cursor_leave, "background", CURSOR_IDLE_BACKGROUND);
            dom::set_style(&cursor_leave, "border-color", CURSOR_IDLE_BORDER);
        });
    });

    // Hide while the system pointer is outside the viewport.
    {
        let cursor = cursor.clone();
        dom::listen0(document, "mouseleave", move || {
            dom::set_style(&cursor, "opacity", "0");
        });
    }
    {
        let cursor = cursor.clone();
        dom::listen0(document, "mouseenter", move || {
            dom::set_style(&cursor, "opacity", "1");
        });
    }

    let frames = FrameLoop::start(move || {
        let shown = state.borrow_mut().step();
        dom::set_style(&cursor, "left", &format!("{}px", shown.x));
        dom::set_style(&cursor, "top", &format!("{}px", shown.y));
    });

    Some(CursorFollower { _frames: frames })
}
