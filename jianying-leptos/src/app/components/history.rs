use jianying_state::history::TIMELINE;
use leptos::*;

#[component]
pub fn HistorySection() -> impl IntoView {
    view! {
        <div class="container mx-auto px-6 py-24">
            <div class="text-center mb-16">
                <div class="inline-block px-4 py-1 border border-shadow-red text-shadow-red text-xs tracking-widest mb-4">"溯源"</div>
                <h2 class="font-serif text-4xl md:text-5xl mb-4">"溯源 · 历史"</h2>
                <p class="text-ink-light max-w-lg mx-auto font-light">"一盏灯，一方亮子，三百年的光影从川北走来。"</p>
            </div>
            <ol class="relative max-w-3xl mx-auto border-l-2 border-shadow-red/30">
                {
                    TIMELINE
                        .iter()
                        .map(|era| view! {
                            <li class="mb-12 ml-8">
                                <span class="absolute -left-[9px] mt-2 w-4 h-4 rounded-full bg-shadow-red border-2 border-paper"></span>
                                <p class="text-xs tracking-[0.3em] text-shadow-brown mb-2">{era.period}</p>
                                <h3 class="font-serif text-2xl mb-2">{era.title}</h3>
                                <p class="text-ink-light leading-loose">{era.text}</p>
                            </li>
                        })
                        .collect_view()
                }
            </ol>
        </div>
    }
}
