use leptos::*;

const LINKS: [&str; 3] = ["关于项目", "联系传承人", "捐赠支持"];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-ink text-paper/60 py-12 border-t border-white/10">
            <div class="container mx-auto px-6 flex flex-col md:flex-row justify-between items-center gap-8">
                <div class="text-center md:text-left">
                    <div class="font-calligraphy text-2xl text-paper mb-2">"见影"</div>
                    <p class="text-xs tracking-wider">"光影寻根 · 马王皮影数字保护计划"</p>
                </div>
                <div class="flex gap-6 text-sm">
                    {
                        LINKS
                            .into_iter()
                            .map(|link| view! { <a href="#" class="hover:text-white transition-colors">{link}</a> })
                            .collect_view()
                    }
                </div>
            </div>
            <div class="text-center mt-12 text-xs font-serif opacity-40">"见影项目组 © 2025"</div>
        </footer>
    }
}
