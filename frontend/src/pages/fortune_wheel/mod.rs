mod wheel_canvas;
mod wheel_utils;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::future::TimeoutFuture;
use gloo_utils::document;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::config::WheelConfig;
use shared::prize::{Outcome, PrizeList};
use shared::session::WheelSession;
use shared::sound::SoundEngine;
use shared::spin::UniformPicker;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::audio::WebAudioBackend;
use crate::components::{Confetti, ResultModal};
use crate::config::{load_sound_preference, load_wheel_config, save_sound_preference};
use crate::styles;
use crate::timers::BrowserScheduler;

use wheel_canvas::WheelCanvas;
use wheel_utils::{SoundToggle, SpinButton, StopButton};

type Session = WheelSession<BrowserScheduler, WebAudioBackend>;
type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

fn build_session(config: &WheelConfig) -> Session {
    let prizes = config.prize_list().unwrap_or_else(|err| {
        log::warn!("{}; using the default prizes", err);
        PrizeList::default()
    });
    let sound_enabled = load_sound_preference().unwrap_or(config.sound_enabled);
    let sound = Rc::new(SoundEngine::new(WebAudioBackend::new, sound_enabled));

    WheelSession::new(
        prizes,
        config.spin_settings(),
        Box::new(UniformPicker::new(SmallRng::from_entropy())),
        BrowserScheduler,
        sound,
    )
}

fn inject_css(css: &str) -> Option<Element> {
    let document = document();
    let head = document.head()?;
    let style = document.create_element("style").ok()?;
    style.set_text_content(Some(css));
    head.append_child(&style).ok()?;
    Some(style)
}

fn set_rotation(rotor: &HtmlElement, degrees: f64) {
    let _ = rotor
        .style()
        .set_property("transform", &format!("rotate({:.3}deg)", degrees));
}

/// Copies the session's eased angle onto the rotor once per frame until the spin ends.
fn animate(slot: FrameSlot, session: Weak<Session>, rotor: HtmlElement) {
    let next = slot.clone();
    let frame = request_animation_frame(move |_| {
        let Some(live) = session.upgrade() else {
            next.borrow_mut().take();
            return;
        };
        set_rotation(&rotor, live.displayed_angle());
        if live.is_spinning() {
            animate(next, session, rotor);
        } else {
            next.borrow_mut().take();
        }
    });
    *slot.borrow_mut() = Some(frame);
}

fn ensure_animating(slot: &FrameSlot, session: &Rc<Session>, rotor_ref: &NodeRef) {
    if slot.borrow().is_some() {
        return;
    }
    if let Some(rotor) = rotor_ref.cast::<HtmlElement>() {
        animate(slot.clone(), Rc::downgrade(session), rotor);
    }
}

#[function_component(FortuneWheel)]
pub fn fortune_wheel() -> Html {
    // Apply custom CSS
    use_effect_with((), move |_| {
        let style = inject_css(styles::CUSTOM_CSS);
        move || {
            if let Some(style) = style {
                style.remove();
            }
        }
    });

    let config = use_memo((), |_| load_wheel_config());
    let session = {
        let config = config.clone();
        use_memo((), move |_| build_session(&config))
    };
    let prizes = {
        let session = session.clone();
        use_memo((), move |_| session.prizes().clone())
    };

    let is_spinning = use_state(|| false);
    let stop_used = use_state(|| false);
    let sound_on = use_state(|| session.sound_enabled());
    let outcome = use_state(|| None::<Outcome>);
    let show_modal = use_state(|| false);
    let confetti_burst = use_state(|| 0u64);

    let rotor_ref = use_node_ref();
    let frames: FrameSlot = use_mut_ref(|| None);

    // Result wiring and teardown
    {
        let session = session.clone();
        let rotor_ref = rotor_ref.clone();
        let frames = frames.clone();
        let is_spinning = is_spinning.clone();
        let stop_used = stop_used.clone();
        let outcome = outcome.clone();
        let show_modal = show_modal.clone();
        let confetti_burst = confetti_burst.clone();
        let result_delay_ms = config.result_delay_ms;

        use_effect_with((), move |_| {
            if let Some(rotor) = rotor_ref.cast::<HtmlElement>() {
                set_rotation(&rotor, session.displayed_angle());
            }

            let weak = Rc::downgrade(&session);
            let bursts = Rc::new(Cell::new(0u64));
            session.on_spin_end(move |_ended, result| {
                is_spinning.set(false);
                stop_used.set(false);

                let weak = weak.clone();
                let bursts = bursts.clone();
                let outcome = outcome.clone();
                let show_modal = show_modal.clone();
                let confetti_burst = confetti_burst.clone();
                spawn_local(async move {
                    TimeoutFuture::new(result_delay_ms).await;
                    // Unmounted, or a new spin already started
                    if weak.upgrade().map_or(true, |session| session.is_spinning()) {
                        return;
                    }
                    let celebrate = result.is_win();
                    outcome.set(Some(result));
                    show_modal.set(true);
                    if celebrate {
                        bursts.set(bursts.get() + 1);
                        confetti_burst.set(bursts.get());
                    }
                });
            });

            move || {
                session.teardown();
                frames.borrow_mut().take();
            }
        });
    }

    let on_spin = {
        let session = session.clone();
        let frames = frames.clone();
        let rotor_ref = rotor_ref.clone();
        let is_spinning = is_spinning.clone();
        let stop_used = stop_used.clone();
        let show_modal = show_modal.clone();
        Callback::from(move |_: MouseEvent| {
            if session.start().is_none() {
                return;
            }
            is_spinning.set(true);
            stop_used.set(false);
            show_modal.set(false);
            ensure_animating(&frames, &session, &rotor_ref);
        })
    };

    let on_stop = {
        let session = session.clone();
        let frames = frames.clone();
        let rotor_ref = rotor_ref.clone();
        let stop_used = stop_used.clone();
        Callback::from(move |_: MouseEvent| {
            if session.stop_now().is_some() {
                stop_used.set(true);
                ensure_animating(&frames, &session, &rotor_ref);
            }
        })
    };

    let on_sound_toggle = {
        let session = session.clone();
        let sound_on = sound_on.clone();
        Callback::from(move |enabled: bool| {
            session.set_sound_enabled(enabled);
            save_sound_preference(enabled);
            sound_on.set(enabled);
        })
    };

    let on_close = {
        let show_modal = show_modal.clone();
        Callback::from(move |_: ()| show_modal.set(false))
    };

    html! {
        <>
            <div class={styles::PAGE}>
                <header class={styles::HEADER}>
                    <h1 class={styles::TITLE}>{"2026 年会抽奖"}</h1>
                    <div class="flex items-center justify-center gap-4">
                        <span class={styles::SUBTITLE_RULE_LEFT}></span>
                        <p class={styles::SUBTITLE}>{"Fortune Wheel"}</p>
                        <span class={styles::SUBTITLE_RULE_RIGHT}></span>
                    </div>
                </header>

                <WheelCanvas
                    prizes={prizes.clone()}
                    max_px={config.max_wheel_px}
                    rotor_ref={rotor_ref.clone()}
                    is_spinning={*is_spinning}
                />

                <div class={styles::BUTTON_ROW}>
                    <SpinButton is_spinning={*is_spinning} onclick={on_spin} />
                    <StopButton visible={*is_spinning} disabled={*stop_used} onclick={on_stop} />
                    <SoundToggle enabled={*sound_on} ontoggle={on_sound_toggle} />
                </div>

                <footer class={styles::FOOTER}>
                    <p>{"祝大家2026年好运连连 🎊"}</p>
                </footer>
            </div>

            if *show_modal {
                if let Some(result) = (*outcome).clone() {
                    <ResultModal outcome={result} {on_close} />
                }
            }

            <Confetti burst={*confetti_burst} />
        </>
    }
}
