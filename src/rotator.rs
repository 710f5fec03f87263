//! Title rotator wiring: a startup delay, then a fixed interval that walks
//! the highlight through the title items.

use crate::constants::TITLE_ITEM_SELECTOR;
use crate::core::constants::{TITLE_INTERVAL_MS, TITLE_START_DELAY_MS};
use crate::core::rotator::TitleRotator;
use crate::dom;
use crate::sched::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct TitleRotatorHandle {
    _start: Timeout,
    _interval: Rc<RefCell<Option<Interval>>>,
}

pub fn init(document: &web::Document) -> Option<TitleRotatorHandle> {
    let items = dom::collect_html(document, TITLE_ITEM_SELECTOR);
    if items.is_empty() {
        return None;
    }

    let state = Rc::new(RefCell::new(TitleRotator::new(items.len())));
    let items = Rc::new(items);

    let tick = {
        let state = state.clone();
        let items = items.clone();
        move || {
            if let Some(active) = state.borrow_mut().advance() {
                apply_active(&items, active);
            }
        }
    };

    // The first item lights up after the startup delay; the interval takes
    // over from there. The interval handle lives in a shared slot so the
    // component owner can cancel it even though it is created late.
    let interval_slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let start = {
        let interval_slot = interval_slot.clone();
        Timeout::once(TITLE_START_DELAY_MS, move || {
            let mut tick = tick;
            tick();
            *interval_slot.borrow_mut() = Some(Interval::every(TITLE_INTERVAL_MS, tick));
        })
    };

    Some(TitleRotatorHandle {
        _start: start,
        _interval: interval_slot,
    })
}

fn apply_active(items: &[web::HtmlElement], active: usize) {
    for (i, item) in items.iter().enumerate() {
        let classes = item.class_list();
        if i == active {
            _ = classes.add_1("active");
        } else {
            _ = classes.remove_1("active");
        }
    }
}
