use yew::prelude::*;

use crate::styles;

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning {
        "抽奖中..."
    } else {
        "开始抽奖"
    };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={props.is_spinning}
            class={styles::BUTTON_GOLD}
        >
            <span class="flex items-center justify-center">
                <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <circle cx="12" cy="12" r="10" />
                    <path d="M12 6v6l4 2" />
                </svg>
                <span>{button_text}</span>
            </span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct StopButtonProps {
    pub visible: bool,
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

/// Shown only while the wheel turns; one press per spin.
#[function_component(StopButton)]
pub fn stop_button(props: &StopButtonProps) -> Html {
    if !props.visible {
        return html! {};
    }

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={props.disabled}
            class={classes!(styles::BUTTON_GHOST, props.disabled.then_some("opacity-50 cursor-not-allowed"))}
        >
            {"立即停止"}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct SoundToggleProps {
    pub enabled: bool,
    pub ontoggle: Callback<bool>,
}

#[function_component(SoundToggle)]
pub fn sound_toggle(props: &SoundToggleProps) -> Html {
    let onclick = {
        let ontoggle = props.ontoggle.clone();
        let enabled = props.enabled;
        Callback::from(move |_: MouseEvent| ontoggle.emit(!enabled))
    };

    html! {
        <button
            {onclick}
            class={styles::BUTTON_ICON}
            title={if props.enabled { "关闭音效" } else { "开启音效" }}
        >
            {if props.enabled { "🔊" } else { "🔇" }}
        </button>
    }
}
