//! Canvas host for the `drift_field` simulation.
//!
//! Every section drops a `ParticleBackground` behind its content; the
//! component owns the canvas, the animation-frame loop and the window
//! resize subscription, and tears all three down when the hosting view
//! unmounts. The simulation itself lives in the `drift_field` crate and
//! knows nothing about the DOM.

use std::cell::RefCell;
use std::rc::Rc;

use drift_field::{Field, FieldConfig, SizingPolicy};
use leptos::html::Canvas;
use leptos::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use send_wrapper::SendWrapper;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

/// Single accent hue shared by fill and glow (indigo-500).
const ACCENT: &str = "#6366f1";

/// Decorative particle layer. Purely visual: no events, no outputs, never
/// blocks the page. If the canvas or its 2d context is unavailable the
/// field simply does not start.
#[component]
pub fn ParticleBackground(
    #[prop(default = FieldConfig::section())] config: FieldConfig,
    #[prop(default = SizingPolicy::FixedHeight(400.0))] sizing: SizingPolicy,
    /// Pin the layer to the viewport (page backdrop) instead of the
    /// hosting section.
    #[prop(optional)]
    fixed: bool,
    /// Shadow blur radius around each particle.
    #[prop(default = 18.0)]
    glow: f64,
) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();
    let handle: Rc<RefCell<Option<FieldHandle>>> = Rc::new(RefCell::new(None));

    {
        let handle = handle.clone();
        Effect::new(move || {
            if handle.borrow().is_some() {
                return;
            }
            if let Some(canvas) = canvas_ref.get() {
                *handle.borrow_mut() = start(&canvas, &config, sizing, glow);
            }
        });
    }

    // `on_cleanup` demands `Send + Sync`; the handle is wasm-single-threaded,
    // so `SendWrapper` asserts that without changing behavior.
    let handle = SendWrapper::new(handle);
    on_cleanup(move || {
        if let Some(h) = handle.borrow_mut().take() {
            h.stop();
        }
    });

    let class = if fixed {
        "particle-drift-bg particle-drift-fixed"
    } else {
        "particle-drift-bg"
    };
    let style = match sizing {
        SizingPolicy::Viewport => String::new(),
        SizingPolicy::FixedHeight(h) => format!("height: {h}px; overflow: hidden;"),
    };

    view! {
        <div class=class style=style>
            <canvas class="particle-drift-canvas" node_ref=canvas_ref></canvas>
        </div>
    }
}

/// Live field plus the resources that must be released on unmount.
struct FieldHandle {
    field: Rc<RefCell<Field>>,
    resize_cb: Closure<dyn FnMut()>,
}

impl FieldHandle {
    /// Stop the field and drop the resize subscription so no callback can
    /// touch a detached canvas. The in-flight animation frame observes the
    /// cleared flag and does not reschedule.
    fn stop(self) {
        self.field.borrow_mut().stop();
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.resize_cb.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Spawn a field over the canvas and arm the frame loop. Returns `None`
/// when the rendering surface is unavailable; that is the only failure
/// mode, and it is silent.
fn start(
    canvas: &HtmlCanvasElement,
    config: &FieldConfig,
    sizing: SizingPolicy,
    glow: f64,
) -> Option<FieldHandle> {
    let window = web_sys::window()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into()
        .ok()?;

    let (width, height) = sizing.resolve(inner_width(&window), inner_height(&window));
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
    let field = Rc::new(RefCell::new(Field::spawn(config, width, height, &mut rng)));

    // Keep canvas and field bounds in sync with the viewport. Particles are
    // not repositioned; they wrap against the new bounds on their next edge
    // crossing.
    let resize_cb = {
        let field = field.clone();
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            if let Some(window) = web_sys::window() {
                let (width, height) = sizing.resolve(inner_width(&window), inner_height(&window));
                canvas.set_width(width as u32);
                canvas.set_height(height as u32);
                field.borrow_mut().resize(width, height);
            }
        }) as Box<dyn FnMut()>)
    };
    window
        .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
        .ok()?;

    run_frame_loop(field.clone(), ctx, glow);

    Some(FieldHandle { field, resize_cb })
}

/// Self-rescheduling `requestAnimationFrame` loop: one draw+tick pass per
/// display frame while the field is active. The closure handle lives in an
/// `Rc<RefCell<Option<..>>>` so the callback can re-arm itself.
fn run_frame_loop(field: Rc<RefCell<Field>>, ctx: CanvasRenderingContext2d, glow: f64) {
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        // Cooperative cancellation: a stopped field draws nothing and the
        // loop is never re-armed.
        let ran = field.borrow_mut().render_pass(|state| draw(&ctx, state, glow));
        if !ran {
            return;
        }

        if let Some(window) = web_sys::window() {
            if let Some(cb) = f.borrow().as_ref() {
                let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(window) = web_sys::window() {
        if let Some(cb) = g.borrow().as_ref() {
            let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}

/// Clear the surface and paint every particle as a glowing filled circle
/// with its own base alpha.
fn draw(ctx: &CanvasRenderingContext2d, field: &Field, glow: f64) {
    ctx.clear_rect(0.0, 0.0, field.width(), field.height());
    for p in field.particles() {
        ctx.begin_path();
        let _ = ctx.arc(p.x, p.y, p.radius, 0.0, std::f64::consts::TAU);
        ctx.set_fill_style_str(&format!("rgba(99,102,241,{})", p.opacity));
        ctx.set_shadow_color(ACCENT);
        ctx.set_shadow_blur(glow);
        ctx.fill();
    }
}

fn inner_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

fn inner_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}
