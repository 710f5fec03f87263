//! Mobile navigation wiring: menu toggle with scroll lock, outside-click
//! close, and smooth same-page anchor scrolling.

use crate::constants::{
    ANCHOR_SELECTOR, MENU_SPAN_SELECTOR, MENU_TOGGLE_SELECTOR, NAV_LINK_SELECTOR,
    NAV_MENU_SELECTOR, SPAN_BOTTOM_OPEN, SPAN_TOP_OPEN,
};
use crate::core::constants::ANCHOR_SCROLL_OFFSET_PX;
use crate::core::nav::MenuState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn init(document: &web::Document) {
    let menu = Menu::locate(document);
    if let Some(menu) = &menu {
        menu.wire(document);
    }
    wire_anchor_scrolling(document, menu);
}

#[derive(Clone)]
struct Menu {
    document: web::Document,
    toggle: web::HtmlElement,
    panel: web::HtmlElement,
    spans: Rc<Vec<web::HtmlElement>>,
    state: Rc<RefCell<MenuState>>,
}

impl Menu {
    fn locate(document: &web::Document) -> Option<Self> {
        let toggle = dom::query_html(document, MENU_TOGGLE_SELECTOR)?;
        let panel = dom::query_html(document, NAV_MENU_SELECTOR)?;
        let spans = Rc::new(dom::collect_html(document, MENU_SPAN_SELECTOR));
        Some(Self {
            document: document.clone(),
            toggle,
            panel,
            spans,
            state: Rc::new(RefCell::new(MenuState::default())),
        })
    }

    fn wire(&self, document: &web::Document) {
        {
            let menu = self.clone();
            dom::listen0(&self.toggle, "click", move || {
                let open = menu.state.borrow_mut().toggle();
                menu.apply(open);
            });
        }

        // Selecting a destination always folds the menu away.
        dom::for_each_element(document, NAV_LINK_SELECTOR, |link| {
            let menu = self.clone();
            dom::listen0(&link, "click", move || menu.close());
        });

        // Any pointer interaction outside both the panel and its toggle
        // closes an open menu.
        {
            let menu = self.clone();
            dom::listen(document, "click", move |ev: web::MouseEvent| {
                if !menu.state.borrow().is_open() {
                    return;
                }
                let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
                let inside = target.as_ref().is_some_and(|node| {
                    menu.panel.contains(Some(node)) || menu.toggle.contains(Some(node))
                });
                if !inside {
                    menu.close();
                }
            });
        }
    }

    fn close(&self) {
        if self.state.borrow_mut().close() {
            self.apply(false);
        }
    }

    fn apply(&self, open: bool) {
        let panel_classes = self.panel.class_list();
        let toggle_classes = self.toggle.class_list();
        if open {
            _ = panel_classes.add_1("active");
            _ = toggle_classes.add_1("active");
        } else {
            _ = panel_classes.remove_1("active");
            _ = toggle_classes.remove_1("active");
        }

        // Hamburger icon: outer bars rotate into a cross, the middle fades.
        if let [top, middle, bottom] = self.spans.as_slice() {
            if open {
                dom::set_style(top, "transform", SPAN_TOP_OPEN);
                dom::set_style(middle, "opacity", "0");
                dom::set_style(bottom, "transform", SPAN_BOTTOM_OPEN);
            } else {
                dom::set_style(top, "transform", "none");
                dom::set_style(middle, "opacity", "1");
                dom::set_style(bottom, "transform", "none");
            }
        }

        // Scroll lock follows the open state.
        let locked = self.state.borrow().scroll_locked();
        if let Some(body) = self.document.body() {
            dom::set_style(&body, "overflow", if locked { "hidden" } else { "" });
        }
    }
}

fn wire_anchor_scrolling(document: &web::Document, menu: Option<Menu>) {
    dom::for_each_element(document, ANCHOR_SELECTOR, |anchor| {
        let document = document.clone();
        let menu = menu.clone();
        let anchor_el = anchor.clone();
        dom::listen(&anchor, "click", move |ev: web::MouseEvent| {
            let Some(href) = anchor_el.get_attribute("href") else {
                return;
            };
            if href == "#" {
                return;
            }
            let Ok(Some(target)) = document.query_selector(&href) else {
                return;
            };
            ev.prevent_default();

            if let Some(menu) = &menu {
                menu.close();
            }

            let Ok(target) = target.dyn_into::<web::HtmlElement>() else {
                return;
            };
            if let Some(window) = web::window() {
                let options = web::ScrollToOptions::new();
                options.set_top(target.offset_top() as f64 - ANCHOR_SCROLL_OFFSET_PX);
                options.set_behavior(web::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        });
    });
}
