use jianying_state::SectionId;
use leptos::*;

use crate::app::components::footer::Footer;
use crate::app::components::hero::Hero;
use crate::app::components::history::HistorySection;
use crate::app::components::mobile_menu::MobileMenu;
use crate::app::components::navbar::Navbar;
use crate::app::components::story_reader::StoryReader;
use crate::app::components::workshop::ShadowWorkshop;
use crate::app::global_state::GlobalState;
use crate::app::hooks::use_scroll_tracker::use_scroll_tracker;

#[component]
pub fn HomePage() -> impl IntoView {
    let global_state = expect_context::<GlobalState>();
    use_scroll_tracker(global_state);

    view! {
        <div class="min-h-screen bg-paper text-ink selection:bg-shadow-gold selection:text-white font-serif relative overflow-x-hidden">
            // paper grain
            <div class="fixed inset-0 z-[1] bg-grain opacity-50 pointer-events-none"></div>

            <Navbar/>
            <Show when=move || global_state.menu_open()>
                <MobileMenu/>
            </Show>
            <Hero/>

            <main class="relative z-10">
                <div id=SectionId::History.anchor() class="bg-paper relative">
                    <HistorySection/>
                </div>

                <section id=SectionId::Story.anchor() class="py-24 bg-ink text-paper relative overflow-hidden">
                    <div class="container mx-auto px-6 mb-12 text-center">
                        <div class="inline-block px-4 py-1 border border-shadow-gold text-shadow-gold text-xs tracking-widest mb-4">"绘本阅读"</div>
                        <h2 class="font-serif text-4xl md:text-5xl mb-4 text-paper">{SectionId::Story.label()}</h2>
                        <p class="text-stone-400 max-w-lg mx-auto font-light">"向右滑动，翻阅属于马王皮影的记忆篇章。"</p>
                    </div>
                    <StoryReader/>
                </section>

                <section id=SectionId::Workshop.anchor() class="py-24 bg-shadow-gold/10 relative">
                    <div class="container mx-auto px-6">
                        <ShadowWorkshop/>
                    </div>
                </section>
            </main>

            <Footer/>
        </div>
    }
}
