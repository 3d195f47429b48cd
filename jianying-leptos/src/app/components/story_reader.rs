use jianying_state::story::{StoryBook, STORY_PAGES};
use leptos::html::Div;
use leptos::*;
use tracing::trace;
use web_sys::{Event, MouseEvent, ScrollBehavior, ScrollToOptions};

/// Page currently filling a horizontal strip of `width` px wide pages.
pub fn page_at(scroll_left: i32, width: i32) -> usize {
    if width <= 0 {
        return 0;
    }
    (f64::from(scroll_left) / f64::from(width)).round().max(0.0) as usize
}

#[component]
pub fn StoryReader() -> impl IntoView {
    let book = create_rw_signal(StoryBook::default());
    let strip = create_node_ref::<Div>();

    let on_scroll = move |_: Event| {
        let Some(strip) = strip.get_untracked() else {
            return;
        };
        let page = page_at(strip.scroll_left(), strip.client_width());
        if book.with_untracked(|book| book.page() != page) {
            book.update(|book| book.go_to(page));
        }
    };

    let turn_to = move |page: usize| {
        let Some(strip) = strip.get_untracked() else {
            return;
        };
        trace!("story: turning to page {}", page);
        let options = ScrollToOptions::new();
        options.set_left(f64::from(strip.client_width()) * page as f64);
        options.set_behavior(ScrollBehavior::Smooth);
        strip.scroll_to_with_scroll_to_options(&options);
    };

    let on_prev = move |_: MouseEvent| {
        let mut target = book.get_untracked();
        if target.prev() {
            turn_to(target.page());
        }
    };

    let on_next = move |_: MouseEvent| {
        let mut target = book.get_untracked();
        if target.next() {
            turn_to(target.page());
        }
    };

    view! {
        <div class="relative container mx-auto px-6">
            <div node_ref=strip on:scroll=on_scroll class="flex overflow-x-auto snap-x snap-mandatory scroll-smooth no-scrollbar rounded-sm border border-shadow-gold/30">
                {
                    STORY_PAGES
                        .iter()
                        .enumerate()
                        .map(|(i, page)| view! {
                            <article class="snap-center shrink-0 w-full min-h-[28rem] grid md:grid-cols-2 bg-paper text-ink">
                                <div class="flex items-center justify-center bg-shadow-gold/20 relative overflow-hidden">
                                    <span class="font-calligraphy text-[12rem] text-ink/80 drop-shadow-[12px_12px_8px_rgba(26,26,26,0.35)]">{page.glyph}</span>
                                    <span class="absolute top-4 left-4 text-xs tracking-widest text-shadow-brown">{format!("{} / {}", i + 1, STORY_PAGES.len())}</span>
                                </div>
                                <div class="p-10 flex flex-col justify-center gap-4">
                                    <p class="text-xs tracking-[0.3em] text-shadow-red">{page.chapter}</p>
                                    <h3 class="font-serif text-3xl">{page.title}</h3>
                                    <p class="leading-loose text-ink-light">{page.text}</p>
                                </div>
                            </article>
                        })
                        .collect_view()
                }
            </div>

            <div class="flex items-center justify-between mt-8">
                <button on:click=on_prev disabled=move || book.with(|book| book.is_first()) class="px-4 py-2 border border-shadow-gold text-shadow-gold disabled:opacity-30 transition-opacity">"上一页"</button>
                <div class="flex gap-3">
                    {
                        (0..STORY_PAGES.len())
                            .map(|i| view! {
                                <button
                                    on:click=move |_| turn_to(i)
                                    aria-label=format!("第{}页", i + 1)
                                    class=move || format!("w-2 h-2 rounded-full transition-colors {}", if book.with(|book| book.page() == i) { "bg-shadow-gold" } else { "bg-paper/30" })
                                ></button>
                            })
                            .collect_view()
                    }
                </div>
                <button on:click=on_next disabled=move || book.with(|book| book.is_last()) class="px-4 py-2 border border-shadow-gold text-shadow-gold disabled:opacity-30 transition-opacity">"下一页"</button>
            </div>
            <div class="mt-4 h-px bg-paper/10">
                <div class="h-px bg-shadow-gold transition-all duration-500" style=move || format!("width: {:.0}%", book.with(|book| book.progress()) * 100.0)></div>
            </div>
        </div>
    }
}
