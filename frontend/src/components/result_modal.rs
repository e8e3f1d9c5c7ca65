use shared::prize::Outcome;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ResultModalProps {
    pub outcome: Outcome,
    pub on_close: Callback<()>,
}

#[function_component(ResultModal)]
pub fn result_modal(props: &ResultModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Clicks inside the card must not reach the overlay
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let (emoji, title) = if props.outcome.is_win() {
        ("🎉", "恭喜中奖！")
    } else {
        ("😅", "再接再厉！")
    };

    html! {
        <div class={styles::MODAL_OVERLAY} onclick={close.clone()}>
            <div class={styles::MODAL_BACKDROP}></div>

            <div class={styles::MODAL_CARD} onclick={keep_open}>
                <div class={styles::MODAL_ACCENT_TOP}></div>

                <button onclick={close.clone()} class={styles::MODAL_CLOSE} aria-label="close">
                    <svg class="w-5 h-5 text-[#F4D03F]" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                    </svg>
                </button>

                <div class="mb-6">
                    <span class="text-6xl md:text-7xl">{emoji}</span>
                </div>

                <h2 class={styles::MODAL_TITLE}>{title}</h2>

                <div class={styles::MODAL_PRIZE}>
                    <p class="text-xl md:text-2xl lg:text-3xl font-bold text-white">
                        {&props.outcome.prize().label}
                    </p>
                </div>

                <button onclick={close} class="btn-gold px-8 py-3 text-lg">
                    {"好的"}
                </button>

                <div class={styles::MODAL_ACCENT_BOTTOM}></div>
            </div>
        </div>
    }
}
