//! Signature Step
//!
//! Client signs on a canvas with mouse, pen or finger. The drawing is sent
//! as a base64 PNG.

use leptos::html::Canvas;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent};

use crate::api;
use crate::components::{BackButton, LoadingIndicator};
use crate::context::WizardContext;
use crate::error::ValidationError;
use crate::forms::signature_payload;
use crate::notify::use_notifier;
use crate::store::{store_report_id, use_session};

const LINE_WIDTH: f64 = 2.5;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

#[component]
pub fn SignatureStep() -> impl IntoView {
    let wizard = expect_context::<WizardContext>();
    let session = use_session();
    let notifier = use_notifier();

    let canvas_ref = NodeRef::<Canvas>::new();
    let (drawing, set_drawing) = signal(false);
    let (has_ink, set_has_ink) = signal(false);
    let (saving, set_saving) = signal(false);

    let with_pen = move |f: &dyn Fn(&CanvasRenderingContext2d)| {
        if let Some(ctx) = canvas_ref.get_untracked().as_ref().and_then(context_2d) {
            f(&ctx);
        }
    };

    let on_pointerdown = move |ev: PointerEvent| {
        ev.prevent_default();
        let (x, y) = (f64::from(ev.offset_x()), f64::from(ev.offset_y()));
        with_pen(&|ctx| {
            ctx.set_line_width(LINE_WIDTH);
            ctx.set_line_cap("round");
            ctx.set_line_join("round");
            ctx.set_stroke_style_str("#111827");
            ctx.begin_path();
            ctx.move_to(x, y);
        });
        set_drawing.set(true);
    };

    let on_pointermove = move |ev: PointerEvent| {
        if !drawing.get_untracked() {
            return;
        }
        let (x, y) = (f64::from(ev.offset_x()), f64::from(ev.offset_y()));
        with_pen(&|ctx| {
            ctx.line_to(x, y);
            ctx.stroke();
        });
        if !has_ink.get_untracked() {
            set_has_ink.set(true);
        }
    };

    let stop = move |_: PointerEvent| set_drawing.set(false);

    let clear = move |_| {
        if let Some(canvas) = canvas_ref.get_untracked() {
            if let Some(ctx) = context_2d(&canvas) {
                ctx.clear_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));
            }
        }
        set_has_ink.set(false);
    };

    let save = move |_| {
        if saving.get_untracked() {
            return;
        }
        if !has_ink.get_untracked() {
            notifier.show(ValidationError::EmptySignature.to_string());
            return;
        }
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let payload = match canvas.to_data_url_with_type("image/png") {
            Ok(url) => signature_payload(&url),
            Err(e) => {
                log::error!("[Signature] Could not export canvas: {:?}", e);
                Err(ValidationError::InvalidSignature)
            }
        };
        let payload = match payload {
            Ok(payload) => payload,
            Err(e) => {
                notifier.show(e.to_string());
                return;
            }
        };

        let report_id = store_report_id(&session);
        set_saving.set(true);
        spawn_local(async move {
            let result = api::save_signature(&report_id, &payload).await;
            set_saving.set(false);
            match result {
                Ok(()) => {
                    log::info!("[Signature] Saved for report {}", report_id);
                    set_has_ink.set(false);
                    wizard.advance();
                }
                Err(e) => notifier.error("Signature", &e),
            }
        });
    };

    view! {
        <BackButton on_back=move |_| wizard.retreat() />
        <div class="step-form">
            <h2>"Client Signature"</h2>
            <p class="muted">
                "By signing, the client confirms the service described in this report was carried out."
            </p>
            <canvas
                node_ref=canvas_ref
                class="signature-pad"
                width="600"
                height="240"
                style="touch-action: none;"
                on:pointerdown=on_pointerdown
                on:pointermove=on_pointermove
                on:pointerup=stop
                on:pointerleave=stop
                on:pointercancel=stop
            ></canvas>
            <LoadingIndicator when=saving />
            <div class="step-actions">
                <button type="button" class="ghost-btn" on:click=clear>
                    "Clear"
                </button>
                <button type="button" class="primary-btn" disabled=move || saving.get() on:click=save>
                    "Save signature"
                </button>
            </div>
        </div>
    }
}
