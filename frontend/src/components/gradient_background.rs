use rand::Rng;
use yew::prelude::*;

const FLOATING_MOTES: usize = 20;

#[derive(Properties, PartialEq)]
pub struct GradientBackgroundProps {
    #[prop_or_default]
    pub children: Html,
}

#[derive(Clone, PartialEq)]
struct Mote {
    left: f64,
    top: f64,
    duration: f64,
    delay: f64,
}

/// Night-blue backdrop with drifting gold halos, floating motes and a faint grid.
#[function_component(GradientBackground)]
pub fn gradient_background(props: &GradientBackgroundProps) -> Html {
    let motes = use_memo((), |_| {
        let mut rng = rand::thread_rng();
        (0..FLOATING_MOTES)
            .map(|_| Mote {
                left: rng.gen_range(0.0..100.0),
                top: rng.gen_range(0.0..100.0),
                duration: rng.gen_range(3.0..5.0),
                delay: rng.gen_range(0.0..2.0),
            })
            .collect::<Vec<_>>()
    });

    html! {
        <div class="min-h-screen w-full overflow-x-hidden relative">
            <div class="fixed inset-0 overflow-hidden pointer-events-none">
                <div class="absolute inset-0 bg-gradient-to-br from-[#1a1a2e] via-[#16213e] to-[#1a1a2e]"></div>

                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-[#D4AF37]/10 rounded-full blur-3xl animate-pulse"></div>
                <div class="absolute bottom-1/4 right-1/4 w-80 h-80 bg-[#D4AF37]/5 rounded-full blur-3xl animate-pulse"></div>

                <div class="absolute inset-0">
                    { for motes.iter().map(|mote| html! {
                        <div
                            class="absolute w-1 h-1 bg-[#D4AF37]/30 rounded-full animate-bounce"
                            style={format!(
                                "left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
                                mote.left, mote.top, mote.duration, mote.delay
                            )}
                        ></div>
                    }) }
                </div>

                <div
                    class="absolute inset-0 opacity-5"
                    style="background-image: linear-gradient(rgba(212, 175, 55, 0.1) 1px, transparent 1px), linear-gradient(90deg, rgba(212, 175, 55, 0.1) 1px, transparent 1px); background-size: 50px 50px;"
                ></div>

                <div class="absolute top-8 left-8 w-24 h-24 border-l-2 border-t-2 border-[#D4AF37]/20 hidden lg:block"></div>
                <div class="absolute top-8 right-8 w-24 h-24 border-r-2 border-t-2 border-[#D4AF37]/20 hidden lg:block"></div>
                <div class="absolute bottom-8 left-8 w-24 h-24 border-l-2 border-b-2 border-[#D4AF37]/20 hidden lg:block"></div>
                <div class="absolute bottom-8 right-8 w-24 h-24 border-r-2 border-b-2 border-[#D4AF37]/20 hidden lg:block"></div>
            </div>

            {props.children.clone()}
        </div>
    }
}
