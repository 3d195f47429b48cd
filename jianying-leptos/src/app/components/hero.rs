use jianying_state::SectionId;
use leptos::*;

use crate::app::components::icons::ArrowDownIcon;
use crate::app::components::shadow_scene::ShadowScene;
use crate::app::global_state::GlobalState;

const CAPTIONS: [&str; 3] = ["距今近三百年", "四川省南部县", "国家级非物质文化遗产"];

#[component]
pub fn Hero() -> impl IntoView {
    let global_state = expect_context::<GlobalState>();

    view! {
        <header class="relative min-h-screen flex flex-col items-center justify-center pt-32 pb-12 overflow-hidden">
            <div class="absolute inset-0 z-0">
                <ShadowScene/>
            </div>
            <div class="absolute inset-0 z-0 bg-gradient-to-b from-paper/30 via-transparent to-paper/90 pointer-events-none"></div>

            <div class="relative z-10 container mx-auto px-6 text-center flex flex-col items-center flex-grow justify-center">
                <div class="flex flex-col items-center animate-rise">
                    <div class="flex gap-4 mb-6">
                        {
                            CAPTIONS
                                .into_iter()
                                .map(|caption| view! {
                                    <div class="writing-vertical-rl text-xs font-bold tracking-[0.3em] text-shadow-red border-l border-shadow-red/30 py-2">
                                        {caption}
                                    </div>
                                })
                                .collect_view()
                        }
                    </div>

                    <h1 class="font-calligraphy text-8xl md:text-9xl lg:text-[12rem] text-ink mb-6 drop-shadow-sm">"见 影"</h1>
                    <p class="font-serif text-2xl md:text-3xl text-shadow-brown italic tracking-widest mb-4">"马王皮影的数字重生"</p>
                    <div class="w-16 h-1 bg-shadow-red mb-8"></div>
                    <p class="max-w-xl mx-auto text-lg text-ink-light font-light leading-loose mb-12 bg-paper/60 backdrop-blur-sm p-6 rounded-sm border border-shadow-gold/20">
                        "“原来，马王皮影从来没有消失，"<br/>"它只是等待重新被看见。”"
                    </p>
                </div>
            </div>

            <div class="relative z-10 mt-8 mb-4 animate-fade-in-late">
                <button on:click=move |_| global_state.jump_to(SectionId::History) class="flex flex-col items-center gap-2 text-sm font-medium text-shadow-brown hover:text-ink transition-colors animate-bounce">
                    <span class="tracking-[0.2em] uppercase text-xs">"开启寻根之旅"</span>
                    <ArrowDownIcon size=20/>
                </button>
            </div>
        </header>
    }
}
