//! External scroll/animation library capability.
//!
//! The page may load an animation library (GSAP with its ScrollTrigger
//! plugin) next to this module. It is detected from the global scope and
//! treated as an injected collaborator: everything here degrades to a no-op
//! when the library is absent, and the rest of the crate never assumes it
//! exists.

use crate::core::reveal::{self, RevealSpec, TweenKind};
use crate::dom;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Clone)]
pub struct ScrollEffects {
    gsap: Object,
    trigger: Object,
}

impl ScrollEffects {
    /// Detect the library on the global object; None means the page runs
    /// without scroll animations.
    pub fn detect() -> Option<Self> {
        let global: JsValue = web::window()?.into();
        let gsap = Reflect::get(&global, &"gsap".into()).ok()?;
        let trigger = Reflect::get(&global, &"ScrollTrigger".into()).ok()?;
        if gsap.is_undefined() || trigger.is_undefined() {
            return None;
        }
        Some(Self {
            gsap: gsap.unchecked_into(),
            trigger: trigger.unchecked_into(),
        })
    }

    fn register_plugin(&self) {
        if let Some(f) = method(&self.gsap, "registerPlugin") {
            _ = f.call1(&self.gsap, &self.trigger);
        }
    }

    /// Pin targets at their resting state before any tween is registered.
    fn set_initial(&self, targets: &str) {
        let vars = Object::new();
        set(&vars, "opacity", &1.0.into());
        set(&vars, "y", &0.0.into());
        if let Some(f) = method(&self.gsap, "set") {
            _ = f.call2(&self.gsap, &targets.into(), &vars);
        }
    }

    fn register(&self, document: &web::Document, spec: &RevealSpec) {
        if spec.per_element {
            // Each matched element drives its own trigger window.
            dom::for_each_element(document, spec.targets, |el| {
                let el: JsValue = el.into();
                self.tween(&el, &el, spec);
            });
        } else {
            self.tween(&spec.targets.into(), &spec.trigger.into(), spec);
        }
    }

    fn tween(&self, targets: &JsValue, trigger: &JsValue, spec: &RevealSpec) {
        let window = Object::new();
        set(&window, "trigger", trigger);
        set(&window, "start", &spec.window.start.into());
        if let Some(end) = spec.window.end {
            set(&window, "end", &end.into());
        }
        if let Some(actions) = spec.window.toggle_actions {
            set(&window, "toggleActions", &actions.into());
        }
        if let Some(scrub) = spec.window.scrub {
            set(&window, "scrub", &f64::from(scrub).into());
        }

        let vars = Object::new();
        set(&vars, "scrollTrigger", &window);
        if spec.x != 0.0 {
            set(&vars, "x", &f64::from(spec.x).into());
        }
        if spec.y != 0.0 {
            set(&vars, "y", &f64::from(spec.y).into());
        }
        if let Some(opacity) = spec.opacity {
            set(&vars, "opacity", &f64::from(opacity).into());
        }
        if let Some(stagger) = spec.stagger {
            set(&vars, "stagger", &f64::from(stagger).into());
        }
        // Scrubbed tweens take their pacing from the scroll position.
        if spec.window.scrub.is_none() {
            set(&vars, "duration", &f64::from(spec.duration).into());
        }
        set(&vars, "ease", &spec.ease.into());

        let name = match spec.kind {
            TweenKind::From => "from",
            TweenKind::To => "to",
        };
        if let Some(f) = method(&self.gsap, name) {
            _ = f.call2(&self.gsap, targets, &vars);
        }
    }

    /// Re-measure trigger positions after a layout-affecting change.
    pub fn refresh(&self) {
        if let Some(f) = method(&self.trigger, "refresh") {
            _ = f.call0(&self.trigger);
        }
    }
}

fn method(obj: &Object, name: &str) -> Option<Function> {
    Reflect::get(obj, &name.into())
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn set(obj: &Object, key: &str, value: &JsValue) {
    _ = Reflect::set(obj, &key.into(), value);
}

/// Register the page's reveal plan and keep the library's measurements
/// fresh across layout-affecting events.
pub fn init(document: &web::Document) -> Option<ScrollEffects> {
    let Some(fx) = ScrollEffects::detect() else {
        log::warn!("scroll animation library not present; skipping reveals");
        return None;
    };
    fx.register_plugin();
    fx.set_initial(reveal::INITIAL_VISIBLE_TARGETS);
    for spec in reveal::page_reveals() {
        fx.register(document, &spec);
    }
    fx.refresh();

    if let Some(window) = web::window() {
        let fx_resize = fx.clone();
        dom::listen0(&window, "resize", move || fx_resize.refresh());
        let fx_load = fx.clone();
        dom::listen0(&window, "load", move || fx_load.refresh());
    }
    {
        let fx_visible = fx.clone();
        let document_inner = document.clone();
        dom::listen0(document, "visibilitychange", move || {
            if !document_inner.hidden() {
                fx_visible.refresh();
            }
        });
    }

    Some(fx)
}
