use jianying_state::workshop::{Figure, Pose, Workshop, MAX_DISTANCE};
use leptos::*;
use strum::IntoEnumIterator;
use tracing::debug;
use web_sys::Event;

pub fn shadow_style(workshop: &Workshop) -> String {
    format!(
        "transform: scale({:.2}); filter: blur({:.1}px);",
        workshop.shadow_scale(),
        workshop.shadow_blur_px()
    )
}

pub fn limb_style(deg: i16) -> String {
    format!("transform: rotate({}deg);", deg)
}

fn choice_class(selected: bool) -> &'static str {
    if selected {
        "px-4 py-2 border-2 border-ink bg-ink text-paper"
    } else {
        "px-4 py-2 border-2 border-ink/20 hover:border-ink transition-colors"
    }
}

/// Lamp and screen mini-game: pick a figure and a pose, then move the
/// puppet towards the screen until its shadow turns sharp.
#[component]
pub fn ShadowWorkshop() -> impl IntoView {
    let workshop = create_rw_signal(Workshop::default());

    let on_distance = move |ev: Event| {
        let Ok(distance) = event_target_value(&ev).parse::<u8>() else {
            debug!("workshop: ignoring distance {:?}", event_target_value(&ev));
            return;
        };
        workshop.update(|workshop| workshop.set_distance(distance));
    };

    view! {
        <div class="grid lg:grid-cols-[1fr_22rem] gap-12 items-start">
            <div>
                <div class="inline-block px-4 py-1 border border-shadow-red text-shadow-red text-xs tracking-widest mb-4">"互动体验"</div>
                <h2 class="font-serif text-4xl md:text-5xl mb-4">"匠心 · 工坊"</h2>
                <p class="text-ink-light font-light mb-8">"挑一个影人，摆一个身段，再把它慢慢贴近幕布：影子越近越清楚，这是皮影艺人的第一课。"</p>

                <div class="relative aspect-[4/3] bg-paper border-8 border-shadow-brown/80 shadow-inner overflow-hidden">
                    <div class="absolute -left-24 top-1/2 -translate-y-1/2 w-64 h-64 rounded-full bg-shadow-gold/40 blur-3xl animate-flicker"></div>
                    <div class="absolute inset-0 flex items-center justify-center transition-all duration-300" style=move || workshop.with(shadow_style)>
                        <div class="relative">
                            <span class="font-calligraphy text-[9rem] text-ink leading-none">{move || workshop.with(|w| w.figure.glyph())}</span>
                            <span class="absolute right-[-1.5rem] top-[35%] w-2 h-20 bg-ink origin-top rounded-full transition-transform" style=move || workshop.with(|w| limb_style(w.pose.arm_deg()))></span>
                            <span class="absolute left-1/2 bottom-[-3rem] w-2 h-16 bg-ink origin-top rounded-full transition-transform" style=move || workshop.with(|w| limb_style(w.pose.leg_deg()))></span>
                        </div>
                    </div>
                    <p class="absolute bottom-3 inset-x-0 text-center text-sm tracking-widest">
                        {move || if workshop.with(|w| w.is_sharp()) {
                            "影子清晰了！近则实，远则虚。"
                        } else {
                            "把影人往幕布靠近些……"
                        }}
                    </p>
                </div>
            </div>

            <div class="flex flex-col gap-8 bg-paper/70 p-6 border border-shadow-gold/30">
                <div>
                    <h3 class="text-sm tracking-widest mb-3">"选影人"</h3>
                    <div class="grid grid-cols-2 gap-2">
                        {
                            Figure::iter()
                                .map(|figure| view! {
                                    <button
                                        on:click=move |_| workshop.update(|w| w.figure = figure)
                                        class=move || choice_class(workshop.with(|w| w.figure == figure))
                                    >
                                        {figure.name()}
                                    </button>
                                })
                                .collect_view()
                        }
                    </div>
                    <p class="text-xs text-ink-light leading-relaxed mt-3">{move || workshop.with(|w| w.figure.description())}</p>
                </div>

                <div>
                    <h3 class="text-sm tracking-widest mb-3">"摆身段"</h3>
                    <div class="flex gap-2">
                        {
                            Pose::iter()
                                .map(|pose| view! {
                                    <button
                                        on:click=move |_| workshop.update(|w| w.pose = pose)
                                        class=move || choice_class(workshop.with(|w| w.pose == pose))
                                    >
                                        {pose.label()}
                                    </button>
                                })
                                .collect_view()
                        }
                    </div>
                </div>

                <div>
                    <h3 class="text-sm tracking-widest mb-3">"离幕距离"</h3>
                    <input
                        type="range"
                        min="0"
                        max=MAX_DISTANCE.to_string()
                        prop:value=move || workshop.with(|w| w.distance().to_string())
                        on:input=on_distance
                        class="w-full accent-shadow-red"
                    />
                    <p class="text-xs text-ink-light mt-2">{move || format!("{} / {}", workshop.with(|w| w.distance()), MAX_DISTANCE)}</p>
                </div>

                <button on:click=move |_| workshop.update(|w| w.reset()) class="self-start text-sm underline underline-offset-4 hover:text-shadow-red">"重来"</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use jianying_state::workshop::{Pose, Workshop};

    use super::{limb_style, shadow_style};

    #[test]
    fn shadow_style_tracks_distance() {
        let mut workshop = Workshop::default();
        workshop.set_distance(0);
        assert_eq!(shadow_style(&workshop), "transform: scale(1.00); filter: blur(0.0px);");
        workshop.set_distance(60);
        assert_eq!(shadow_style(&workshop), "transform: scale(1.60); filter: blur(7.2px);");
    }

    #[test]
    fn limb_rotation() {
        assert_eq!(limb_style(Pose::RaisedArm.arm_deg()), "transform: rotate(-120deg);");
        assert_eq!(limb_style(Pose::Standing.leg_deg()), "transform: rotate(0deg);");
    }
}
