use std::rc::Rc;

use gloo_events::EventListener;
use shared::layout::WheelLayout;
use shared::palette::{Palette, HUB_GRADIENT, HUB_STROKE, SEGMENT_BORDER};
use shared::prize::PrizeList;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};
use yew::prelude::*;

use crate::styles;

const FALLBACK_EDGE: u32 = 400;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub prizes: Rc<PrizeList>,
    pub max_px: u32,
    /// Element the page rotates every animation frame.
    pub rotor_ref: NodeRef,
    pub is_spinning: bool,
}

/// Static raster of the wheel. Rotation is applied to the rotor element, never re-painted.
#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let container_ref = use_node_ref();
    let canvas_ref = use_node_ref();
    let edge = use_state(|| FALLBACK_EDGE.min(props.max_px));

    // Track the container size
    {
        let container_ref = container_ref.clone();
        let edge = edge.clone();
        let max_px = props.max_px;
        use_effect_with(max_px, move |max_px| {
            let max_px = *max_px;
            let measure = move || {
                if let Some(size) = measure_edge(&container_ref, max_px) {
                    edge.set(size);
                }
            };
            measure();

            let listener = window().map(|window| {
                EventListener::new(&window, "resize", move |_| measure())
            });

            move || drop(listener)
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((props.prizes.clone(), *edge), move |(prizes, edge)| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                canvas.set_width(*edge);
                canvas.set_height(*edge);
                let layout = WheelLayout::compute(prizes, *edge, &Palette::default());
                match context_2d(&canvas) {
                    Some(context) => {
                        if let Err(err) = paint(&context, &layout) {
                            log::warn!("wheel paint failed: {:?}", err);
                        }
                    }
                    None => log::warn!("2d canvas context unavailable, wheel not drawn"),
                }
            }
            || ()
        });
    }

    let pointer_class = if props.is_spinning {
        "relative animate-pointer"
    } else {
        "relative"
    };
    let hub_class = if props.is_spinning {
        classes!(styles::HUB_BADGE, "animate-spin")
    } else {
        classes!(styles::HUB_BADGE)
    };

    html! {
        <div ref={container_ref} class={styles::WHEEL_CONTAINER}>
            <div class={styles::WHEEL_GLOW}></div>

            <div class={styles::WHEEL_FRAME}>
                <div ref={props.rotor_ref.clone()} class={styles::WHEEL_ROTOR}>
                    <canvas ref={canvas_ref} class="w-full h-full"></canvas>
                </div>
            </div>

            <div class={styles::POINTER}>
                <div class={pointer_class}>
                    <div class={styles::POINTER_BALL}></div>
                    <div class={styles::POINTER_ARROW}></div>
                </div>
            </div>

            <div class="absolute inset-0 flex items-center justify-center pointer-events-none">
                <div class={hub_class}>
                    <span class="text-[#1a1a2e] font-bold text-xs md:text-sm">{"SPIN"}</span>
                </div>
            </div>
        </div>
    }
}

fn measure_edge(container_ref: &NodeRef, max_px: u32) -> Option<u32> {
    let container = container_ref.cast::<HtmlElement>()?;
    let side = container.offset_width().min(container.offset_height());
    if side <= 0 {
        return None;
    }
    Some((side as u32).min(max_px))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

pub fn paint(context: &CanvasRenderingContext2d, layout: &WheelLayout) -> Result<(), JsValue> {
    let edge = layout.edge as f64;
    let (cx, cy) = (layout.center.x, layout.center.y);
    context.clear_rect(0.0, 0.0, edge, edge);

    for segment in &layout.segments {
        context.begin_path();
        context.move_to(cx, cy);
        context.arc(cx, cy, layout.radius, segment.start_angle, segment.end_angle)?;
        context.close_path();
        context.set_fill_style_str(segment.style.fill);
        context.fill();

        context.set_stroke_style_str(SEGMENT_BORDER);
        context.set_line_width(2.0);
        context.stroke();
    }

    context.set_text_align("center");
    context.set_text_baseline("middle");
    for (label, segment) in layout.labels.iter().zip(&layout.segments) {
        context.save();
        context.translate(cx, cy)?;
        context.rotate(label.rotation)?;
        context.set_font(&format!("bold {}px sans-serif", label.font_px));
        context.set_fill_style_str(segment.style.text);
        context.set_stroke_style_str(segment.style.outline);
        context.set_line_width(2.0);

        let mut buf = [0u8; 4];
        for glyph in &label.glyphs {
            let ch = glyph.ch.encode_utf8(&mut buf);
            context.stroke_text(ch, glyph.offset, 0.0)?;
            context.fill_text(ch, glyph.offset, 0.0)?;
        }
        context.restore();
    }

    // Centre ornament
    context.begin_path();
    context.arc(cx, cy, layout.hub_radius, 0.0, 2.0 * std::f64::consts::PI)?;
    let gradient = context.create_radial_gradient(cx, cy, 0.0, cx, cy, layout.hub_radius)?;
    gradient.add_color_stop(0.0, HUB_GRADIENT.0)?;
    gradient.add_color_stop(1.0, HUB_GRADIENT.1)?;
    context.set_fill_style_canvas_gradient(&gradient);
    context.fill();
    context.set_stroke_style_str(HUB_STROKE);
    context.set_line_width(3.0);
    context.stroke();

    Ok(())
}
