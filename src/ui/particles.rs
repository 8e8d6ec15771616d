//! Animated particle backdrop for the hero section
//!
//! Draws a [`ParticleField`] onto a canvas that fills its parent element. The
//! frame loop reschedules itself through `request_animation_frame` and is
//! cancelled when the component unmounts.

use leptos::prelude::*;

use crate::core::particles::{FieldConfig, Link, Sprite};
#[cfg(not(feature = "ssr"))]
use crate::core::particles::{ParticleField, Pointer};

/// `hsla()` color in the field's hue
fn hsla(hue: f64, lightness: u8, alpha: f64) -> String {
    format!("hsla({}, 100%, {}%, {:.3})", hue, lightness, alpha.clamp(0.0, 1.0))
}

/// Lightness of the glow gradient and the link strokes
const GLOW_LIGHTNESS: u8 = 50;
/// Lightness of the solid core, brighter than its glow
const CORE_LIGHTNESS: u8 = 70;
/// Share of the sprite's opacity kept at the glow's middle stop
const GLOW_MID_ALPHA: f64 = 0.4;

/// Gradient stops for a sprite's glow, from center to edge
fn glow_stops(hue: f64, sprite: &Sprite) -> [(f32, String); 3] {
    [
        (0.0, hsla(hue, GLOW_LIGHTNESS, sprite.opacity)),
        (0.4, hsla(hue, GLOW_LIGHTNESS, sprite.opacity * GLOW_MID_ALPHA)),
        (1.0, hsla(hue, GLOW_LIGHTNESS, 0.0)),
    ]
}

fn core_color(hue: f64, sprite: &Sprite) -> String {
    hsla(hue, CORE_LIGHTNESS, sprite.opacity)
}

fn link_color(hue: f64, link: &Link) -> String {
    hsla(hue, GLOW_LIGHTNESS, link.opacity)
}

#[cfg(not(feature = "ssr"))]
fn draw(
    ctx: &web_sys::CanvasRenderingContext2d,
    field: &ParticleField,
) -> Result<(), wasm_bindgen::JsValue> {
    use std::f64::consts::TAU;

    let hue = field.config().hue;
    ctx.clear_rect(0.0, 0.0, field.width(), field.height());

    for sprite in field.sprites() {
        if sprite.glow_radius > 0.0 {
            let gradient = ctx.create_radial_gradient(
                sprite.x,
                sprite.y,
                0.0,
                sprite.x,
                sprite.y,
                sprite.glow_radius,
            )?;
            for (offset, color) in glow_stops(hue, &sprite) {
                gradient.add_color_stop(offset, &color)?;
            }
            ctx.set_fill_style_canvas_gradient(&gradient);
            ctx.begin_path();
            ctx.arc(sprite.x, sprite.y, sprite.glow_radius, 0.0, TAU)?;
            ctx.fill();
        }

        ctx.set_fill_style_str(&core_color(hue, &sprite));
        ctx.begin_path();
        ctx.arc(sprite.x, sprite.y, sprite.core_radius, 0.0, TAU)?;
        ctx.fill();
    }

    ctx.set_line_width(0.5);
    for link in field.links() {
        ctx.set_stroke_style_str(&link_color(hue, &link));
        ctx.begin_path();
        ctx.move_to(link.from.0, link.from.1);
        ctx.line_to(link.to.0, link.to.1);
        ctx.stroke();
    }

    Ok(())
}

/// Size of the canvas' parent element in CSS pixels
#[cfg(not(feature = "ssr"))]
fn parent_size(canvas: &web_sys::HtmlCanvasElement) -> (f64, f64) {
    canvas
        .parent_element()
        .map(|p| (p.client_width().max(0) as f64, p.client_height().max(0) as f64))
        .unwrap_or((0.0, 0.0))
}

/// Full-size canvas with drifting, pointer-attracted particles
#[component]
pub fn ParticlesBackground(
    /// Simulation tuning
    #[prop(optional)]
    config: Option<FieldConfig>,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let pointer = RwSignal::new(None::<(f64, f64)>);
    let surface = RwSignal::new((0.0_f64, 0.0_f64));

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::{mousemove, resize};

        let track_pointer = window_event_listener(mousemove, move |ev| {
            if let Some(canvas) = canvas_ref.get_untracked() {
                let rect = canvas.get_bounding_client_rect();
                pointer.set(Some((
                    ev.client_x() as f64 - rect.left(),
                    ev.client_y() as f64 - rect.top(),
                )));
            }
        });
        let track_size = window_event_listener(resize, move |_| {
            if let Some(canvas) = canvas_ref.get_untracked() {
                surface.set(parent_size(&canvas));
            }
        });
        on_cleanup(move || {
            drop(track_pointer);
            drop(track_size);
        });
    }

    #[cfg(not(feature = "ssr"))]
    {
        use rand::SeedableRng;
        use rand::rngs::StdRng;
        use std::cell::RefCell;
        use std::rc::{Rc, Weak};
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::*;

        let config = config.unwrap_or_default();
        let running = Arc::new(AtomicBool::new(false));
        let frame_id = Arc::new(AtomicI32::new(0));
        let frame_slot = StoredValue::new_local(None::<Rc<RefCell<Option<Closure<dyn FnMut()>>>>>);

        {
            let running = running.clone();
            let frame_id = frame_id.clone();
            Effect::new(move |_| {
                let Some(canvas) = canvas_ref.get() else {
                    return;
                };
                if running.swap(true, Ordering::SeqCst) {
                    return;
                }

                let Some(ctx) = canvas
                    .get_context("2d")
                    .ok()
                    .flatten()
                    .and_then(|c| c.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
                else {
                    leptos::logging::warn!("particles: 2d context unavailable");
                    return;
                };

                surface.set(parent_size(&canvas));

                let mut rng = StdRng::from_entropy();
                let mut field = ParticleField::new(0.0, 0.0, config, &mut rng);

                let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
                let weak: Weak<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::downgrade(&slot);
                let tick_running = running.clone();
                let tick_frame_id = frame_id.clone();

                let tick = move || {
                    if !tick_running.load(Ordering::SeqCst) {
                        return;
                    }

                    let (width, height) = surface.get_untracked();
                    if field.needs_resize(width, height) {
                        canvas.set_width(width as u32);
                        canvas.set_height(height as u32);
                        field.resize(width, height, &mut rng);
                    }

                    let pointer = pointer.get_untracked().map(|(x, y)| Pointer::new(x, y));
                    field.tick(pointer);
                    if let Err(err) = draw(&ctx, &field) {
                        leptos::logging::warn!("particles: draw failed: {:?}", err);
                    }

                    let Some(slot) = weak.upgrade() else {
                        return;
                    };
                    let next = slot.borrow();
                    if let (Some(window), Some(callback)) = (web_sys::window(), next.as_ref()) {
                        if let Ok(id) =
                            window.request_animation_frame(callback.as_ref().unchecked_ref())
                        {
                            tick_frame_id.store(id, Ordering::SeqCst);
                        }
                    }
                };

                let closure: Closure<dyn FnMut()> = Closure::new(tick);
                if let Some(window) = web_sys::window() {
                    if let Ok(id) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                        frame_id.store(id, Ordering::SeqCst);
                    }
                }
                *slot.borrow_mut() = Some(closure);
                frame_slot.set_value(Some(slot));
            });
        }

        on_cleanup(move || {
            running.store(false, Ordering::SeqCst);
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(frame_id.load(Ordering::SeqCst));
            }
        });
    }

    #[cfg(feature = "ssr")]
    let _ = (config, pointer, surface);

    view! {
        <canvas
            node_ref=canvas_ref
            class="absolute inset-0 w-full h-full pointer-events-none"
            aria-hidden="true"
        />
    }
}
