//! Contact form wiring: per-field validation feedback, a simulated
//! submission round trip, and transient status messages.

use crate::constants::{
    CONTACT_FORM_ID, EMAIL_INPUT_ID, FIELD_BORDER_FILLED, FIELD_BORDER_INVALID,
    FIELD_BORDER_NEUTRAL, FORM_MESSAGE_BASE_STYLE, FORM_MESSAGE_ERROR_STYLE,
    FORM_MESSAGE_SELECTOR, FORM_MESSAGE_SUCCESS_STYLE, MESSAGE_INPUT_ID, MSG_SEND_FAILED,
    MSG_SEND_SUCCESS, MSG_VALIDATION_FAILED, NAME_INPUT_ID, SUBMIT_BUTTON_SELECTOR,
};
use crate::core::constants::{
    FORM_MESSAGE_FADE_MS, FORM_MESSAGE_TTL_MS, FORM_RESET_DELAY_MS, FORM_SEND_LATENCY_MS,
};
use crate::core::form::{
    validate, ContactRequest, FeedbackKind, Field, SendError, SubmitState,
};
use crate::dom;
use crate::sched::{self, Timeout};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub fn init(document: &web::Document) {
    let Some(form) = dom::element_by_id_as::<web::HtmlFormElement>(document, CONTACT_FORM_ID)
    else {
        return;
    };
    let Some(submit) = form
        .query_selector(SUBMIT_BUTTON_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    else {
        return;
    };
    let Some(name) = dom::element_by_id_as::<web::HtmlInputElement>(document, NAME_INPUT_ID)
    else {
        return;
    };
    let Some(email) = dom::element_by_id_as::<web::HtmlInputElement>(document, EMAIL_INPUT_ID)
    else {
        return;
    };
    let Some(message) =
        dom::element_by_id_as::<web::HtmlTextAreaElement>(document, MESSAGE_INPUT_ID)
    else {
        return;
    };

    // Live border styling while typing.
    wire_live_border(name.clone().into(), {
        let name = name.clone();
        move || name.value()
    });
    wire_live_border(email.clone().into(), {
        let email = email.clone();
        move || email.value()
    });
    wire_live_border(message.clone().into(), {
        let message = message.clone();
        move || message.value()
    });

    let state = Rc::new(RefCell::new(SubmitState::default()));

    let document = document.clone();
    let form_target = form.clone();
    dom::listen(&form_target, "submit", move |ev: web::Event| {
        ev.prevent_default();

        let request = ContactRequest {
            name: name.value(),
            email: email.value(),
            message: message.value(),
        };
        match validate(&request) {
            Err(fields) => {
                mark_invalid(&fields, &name, &email, &message);
                show_feedback(&document, MSG_VALIDATION_FAILED, FeedbackKind::Error);
            }
            Ok(()) => {
                if !state.borrow_mut().begin() {
                    return;
                }
                _ = submit.class_list().add_1("sending");
                submit.set_disabled(true);

                let state = state.clone();
                let document = document.clone();
                let form = form.clone();
                let submit = submit.clone();
                let name = name.clone();
                let email = email.clone();
                let message = message.clone();
                spawn_local(async move {
                    match send(&request).await {
                        Ok(()) => {
                            state.borrow_mut().succeed();
                            _ = submit.class_list().remove_1("sending");
                            _ = submit.class_list().add_1("success");
                            show_feedback(&document, MSG_SEND_SUCCESS, FeedbackKind::Success);
                            form.reset();
                            reset_borders(&name, &email, &message);

                            // Let the success indication run its course,
                            // then make the control resubmittable.
                            let submit_done = submit.clone();
                            let state_done = state.clone();
                            Timeout::once(FORM_RESET_DELAY_MS, move || {
                                _ = submit_done.class_list().remove_1("success");
                                submit_done.set_disabled(false);
                                state_done.borrow_mut().clear();
                            })
                            .forget();
                        }
                        Err(err) => {
                            log::error!("contact submission failed: {err}");
                            state.borrow_mut().fail();
                            show_feedback(&document, MSG_SEND_FAILED, FeedbackKind::Error);
                            _ = submit.class_list().remove_1("sending");
                            submit.set_disabled(false);
                        }
                    }
                });
            }
        }
    });
}

/// Simulated transport: fixed latency, unconditional success. A real
/// endpoint would POST the request and map non-2xx responses onto
/// `SendError`.
async fn send(_request: &ContactRequest) -> Result<(), SendError> {
    sched::sleep_ms(FORM_SEND_LATENCY_MS).await;
    Ok(())
}

fn wire_live_border(target: web::HtmlElement, read: impl Fn() -> String + 'static) {
    let el = target.clone();
    dom::listen0(&target, "input", move || {
        let filled = !read().trim().is_empty();
        dom::set_style(
            &el,
            "border-color",
            if filled {
                FIELD_BORDER_FILLED
            } else {
                FIELD_BORDER_NEUTRAL
            },
        );
    });
}

fn mark_invalid(
    fields: &[Field],
    name: &web::HtmlInputElement,
    email: &web::HtmlInputElement,
    message: &web::HtmlTextAreaElement,
) {
    for field in fields {
        let el: &web::HtmlElement = match field {
            Field::Name => name.as_ref(),
            Field::Email => email.as_ref(),
            Field::Message => message.as_ref(),
        };
        dom::set_style(el, "border-color", FIELD_BORDER_INVALID);
    }
}

fn reset_borders(
    name: &web::HtmlInputElement,
    email: &web::HtmlInputElement,
    message: &web::HtmlTextAreaElement,
) {
    let fields: [&web::HtmlElement; 3] = [name.as_ref(), email.as_ref(), message.as_ref()];
    for el in fields {
        dom::set_style(el, "border-color", FIELD_BORDER_NEUTRAL);
    }
}

/// Show a transient message under the form, replacing any previous one. It
/// fades out and removes itself after a fixed lifetime.
fn show_feedback(document: &web::Document, text: &str, kind: FeedbackKind) {
    if let Ok(Some(existing)) = document.query_selector(FORM_MESSAGE_SELECTOR) {
        existing.remove();
    }
    let Some(form) = document.get_element_by_id(CONTACT_FORM_ID) else {
        return;
    };
    let Ok(el) = document.create_element("div") else {
        return;
    };
    el.set_class_name(&format!("form-message {}", kind.css_class()));
    el.set_text_content(Some(text));
    let kind_style = match kind {
        FeedbackKind::Success => FORM_MESSAGE_SUCCESS_STYLE,
        FeedbackKind::Error => FORM_MESSAGE_ERROR_STYLE,
    };
    _ = el.set_attribute("style", &format!("{} {}", FORM_MESSAGE_BASE_STYLE, kind_style));
    _ = form.append_child(&el);

    let el_fade = el.clone();
    Timeout::once(FORM_MESSAGE_TTL_MS, move || {
        if let Some(html) = el_fade.dyn_ref::<web::HtmlElement>() {
            dom::set_style(html, "transition", "opacity 0.3s ease");
            dom::set_style(html, "opacity", "0");
        }
        let el_remove = el_fade.clone();
        Timeout::once(FORM_MESSAGE_FADE_MS, move || el_remove.remove()).forget();
    })
    .forget();
}
