pub mod audio;
pub mod components;
pub mod config;
pub mod pages;
pub mod styles;
pub mod timers;

use yew::prelude::*;

use crate::components::GradientBackground;
use crate::pages::fortune_wheel::FortuneWheel;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <GradientBackground>
            <FortuneWheel />
        </GradientBackground>
    }
}
