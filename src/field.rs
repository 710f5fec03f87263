//! Particle canvas wiring.
//!
//! Owns the 2D context, feeds pointer and resize events into the pure
//! simulation, and draws it once per animation frame. The whole feature is
//! skipped when the page carries no particle canvas.

use crate::constants::PARTICLE_CANVAS_ID;
use crate::core::particles::{connection_alpha, ParticleField, PointerState};
use crate::dom;
use crate::sched::FrameLoop;
use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ParticleCanvas {
    _frames: FrameLoop,
}

pub fn init(document: &web::Document) -> Option<ParticleCanvas> {
    let canvas: web::HtmlCanvasElement = dom::element_by_id_as(document, PARTICLE_CANVAS_ID)?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()?;

    let field = Rc::new(RefCell::new(ParticleField::new(js_sys::Date::now() as u64)));
    let pointer = Rc::new(RefCell::new(PointerState::default()));

    // The surface tracks the viewport; every resize resamples the whole
    // population.
    let resize = {
        let canvas = canvas.clone();
        let field = field.clone();
        move || {
            let width = dom::viewport_width();
            let height = dom::viewport_height();
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            field.borrow_mut().resize(width, height);
        }
    };
    resize();

    if let Some(window) = web::window() {
        dom::listen0(&window, "resize", resize);

        let pointer_move = pointer.clone();
        dom::listen(&window, "mousemove", move |ev: web::MouseEvent| {
            let mut p = pointer_move.borrow_mut();
            p.pos.x = ev.client_x() as f32;
            p.pos.y = ev.client_y() as f32;
        });
    }

    let frames = FrameLoop::start(move || {
        let mut field = field.borrow_mut();
        field.step(&pointer.borrow());
        draw(&ctx, &canvas, &field);
    });

    Some(ParticleCanvas { _frames: frames })
}

fn draw(ctx: &web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement, field: &ParticleField) {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);

    let particles = field.particles();
    for p in particles {
        ctx.set_fill_style_str(&p.color.css());
        ctx.begin_path();
        if ctx
            .arc(p.pos.x as f64, p.pos.y as f64, p.size as f64, 0.0, PI * 2.0)
            .is_ok()
        {
            ctx.fill();
        }
    }

    // Proximity connections: one pass over unordered pairs. The population
    // cap keeps the quadratic cost acceptable per frame.
    ctx.set_line_width(1.0);
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            if let Some(alpha) = connection_alpha(a.pos.distance(b.pos)) {
                ctx.set_stroke_style_str(&format!("rgba(150, 150, 255, {})", alpha));
                ctx.begin_path();
                ctx.move_to(a.pos.x as f64, a.pos.y as f64);
                ctx.line_to(b.pos.x as f64, b.pos.y as f64);
                ctx.stroke();
            }
        }
    }
}
