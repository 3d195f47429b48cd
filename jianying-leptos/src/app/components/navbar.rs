use jianying_state::SectionId;
use leptos::*;
use strum::IntoEnumIterator;
use web_sys::MouseEvent;

use crate::app::components::icons::{CloseIcon, MenuIcon};
use crate::app::global_state::GlobalState;

const NAV_BASE: &str = "fixed top-0 left-0 right-0 z-50 transition-all duration-500";

pub fn nav_class(scrolled: bool) -> String {
    format!(
        "{} {}",
        NAV_BASE,
        if scrolled {
            "bg-paper/90 backdrop-blur-md shadow-sm py-3"
        } else {
            "bg-transparent py-6"
        }
    )
}

pub fn brand_class(scrolled: bool) -> String {
    format!(
        "font-serif font-bold text-xl tracking-widest transition-opacity {}",
        if scrolled { "opacity-100" } else { "opacity-80" }
    )
}

#[component]
pub fn Navbar() -> impl IntoView {
    let global_state = expect_context::<GlobalState>();

    let on_menu_click = move |_: MouseEvent| {
        global_state.toggle_menu();
    };

    view! {
        <nav class=move || nav_class(global_state.scrolled())>
            <div class="container mx-auto px-6 flex justify-between items-center">
                <div class="flex items-center gap-3 cursor-pointer group" on:click=move |_| global_state.jump_to_top()>
                    <div class="w-10 h-10 border-2 border-ink flex items-center justify-center rounded-md bg-shadow-red text-paper shadow-[4px_4px_0px_0px_rgba(26,26,26,1)] transition-transform group-hover:translate-x-1 group-hover:translate-y-1 group-hover:shadow-none">
                        <span class="font-calligraphy text-2xl">"影"</span>
                    </div>
                    <span class=move || brand_class(global_state.scrolled())>"马王皮影"</span>
                </div>

                <div class="hidden md:flex items-center gap-8 text-sm font-medium tracking-widest text-ink-light">
                    {
                        SectionId::iter()
                            .map(|section| view! {
                                <button on:click=move |_| global_state.jump_to(section) class="hover:text-shadow-red transition-colors uppercase">
                                    {section.label()}
                                </button>
                            })
                            .collect_view()
                    }
                    <button on:click=move |_| global_state.jump_to(SectionId::Workshop) class="px-6 py-2 bg-ink text-paper rounded-full hover:bg-shadow-red transition-colors shadow-lg">
                        "体验皮影"
                    </button>
                </div>

                <button class="md:hidden text-ink p-2" aria-label="菜单" aria-expanded=move || global_state.menu_open().to_string() on:click=on_menu_click>
                    {
                        move || if global_state.menu_open() {
                            view! { <CloseIcon/> }.into_view()
                        } else {
                            view! { <MenuIcon/> }.into_view()
                        }
                    }
                </button>
            </div>
        </nav>
    }
}
