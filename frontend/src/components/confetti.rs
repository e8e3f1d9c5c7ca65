use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::styles;

const EMIT_FOR_MS: f64 = 3000.0;
const PER_CANNON: usize = 3;
const SPREAD_DEG: f64 = 55.0;
const START_VELOCITY: f64 = 45.0;
const DECAY: f64 = 0.9;
const GRAVITY: f64 = 3.0;
const LIFETIME_TICKS: u32 = 200;
const COLORS: [&str; 5] = ["#D4AF37", "#FFD700", "#FFA500", "#FF6B6B", "#4ECDC4"];

struct Particle {
    x: f64,
    y: f64,
    heading: f64,
    velocity: f64,
    wobble: f64,
    size: f64,
    tick: u32,
    color: &'static str,
}

struct ConfettiField {
    particles: Vec<Particle>,
    rng: SmallRng,
    width: f64,
    height: f64,
}

impl ConfettiField {
    fn new(width: f64, height: f64) -> Self {
        Self {
            particles: Vec::new(),
            rng: SmallRng::from_entropy(),
            width,
            height,
        }
    }

    /// Fires one cannon at `origin_x` (fraction of the width) aimed `angle_deg` above the horizon.
    fn emit(&mut self, origin_x: f64, angle_deg: f64) {
        for _ in 0..PER_CANNON {
            let spread = (self.rng.gen::<f64>() - 0.5) * SPREAD_DEG;
            self.particles.push(Particle {
                x: origin_x * self.width,
                y: 0.8 * self.height,
                heading: -(angle_deg + spread) * PI / 180.0,
                velocity: START_VELOCITY * (0.5 + self.rng.gen::<f64>() * 0.5),
                wobble: self.rng.gen::<f64>() * 10.0,
                size: self.rng.gen_range(6.0..12.0),
                tick: 0,
                color: COLORS[self.rng.gen_range(0..COLORS.len())],
            });
        }
    }

    fn step(&mut self) {
        for particle in &mut self.particles {
            particle.x += particle.heading.cos() * particle.velocity;
            particle.y += particle.heading.sin() * particle.velocity + GRAVITY;
            particle.velocity *= DECAY;
            particle.wobble += 0.1;
            particle.tick += 1;
        }
        let height = self.height;
        self.particles
            .retain(|particle| particle.tick < LIFETIME_TICKS && particle.y < height + 20.0);
    }

    fn is_idle(&self) -> bool {
        self.particles.is_empty()
    }

    fn draw(&self, context: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        context.clear_rect(0.0, 0.0, self.width, self.height);
        for particle in &self.particles {
            context.save();
            context.translate(particle.x, particle.y)?;
            context.rotate(particle.wobble)?;
            context.set_global_alpha(1.0 - particle.tick as f64 / LIFETIME_TICKS as f64);
            context.set_fill_style_str(particle.color);
            context.fill_rect(
                -particle.size / 2.0,
                -particle.size / 4.0,
                particle.size,
                particle.size / 2.0 * particle.wobble.cos().abs().max(0.2),
            );
            context.restore();
        }
        Ok(())
    }
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

fn run_frames(
    slot: FrameSlot,
    field: Rc<RefCell<ConfettiField>>,
    context: CanvasRenderingContext2d,
    emit_until: f64,
) {
    let next = slot.clone();
    let frame = request_animation_frame(move |_| {
        let emitting = js_sys::Date::now() < emit_until;
        let done = {
            let mut field = field.borrow_mut();
            if emitting {
                field.emit(0.0, 60.0);
                field.emit(1.0, 120.0);
            }
            field.step();
            if let Err(err) = field.draw(&context) {
                log::warn!("confetti frame failed: {:?}", err);
            }
            !emitting && field.is_idle()
        };
        if done {
            next.borrow_mut().take();
        } else {
            run_frames(next, field, context, emit_until);
        }
    });
    *slot.borrow_mut() = Some(frame);
}

#[derive(Properties, PartialEq)]
pub struct ConfettiProps {
    /// Bumped once per celebration; zero means nothing to celebrate yet.
    pub burst: u64,
}

/// Two side cannons showering the page for a few seconds.
#[function_component(Confetti)]
pub fn confetti(props: &ConfettiProps) -> Html {
    let canvas_ref = use_node_ref();
    let frames: FrameSlot = use_mut_ref(|| None);

    {
        let canvas_ref = canvas_ref.clone();
        let frames = frames.clone();
        use_effect_with(props.burst, move |burst| {
            if *burst > 0 {
                if let Some((canvas, context)) = canvas_context(&canvas_ref) {
                    let (width, height) = window_size();
                    canvas.set_width(width as u32);
                    canvas.set_height(height as u32);
                    let field = Rc::new(RefCell::new(ConfettiField::new(width, height)));
                    run_frames(frames.clone(), field, context, js_sys::Date::now() + EMIT_FOR_MS);
                }
            }
            move || {
                frames.borrow_mut().take();
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} class={styles::CONFETTI_CANVAS}></canvas>
    }
}

fn canvas_context(canvas_ref: &NodeRef) -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
    let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;
    Some((canvas, context))
}

fn window_size() -> (f64, f64) {
    let Some(window) = window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
    (width, height)
}
