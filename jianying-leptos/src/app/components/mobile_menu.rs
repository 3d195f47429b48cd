use jianying_state::SectionId;
use leptos::*;
use strum::IntoEnumIterator;

use crate::app::global_state::GlobalState;

/// Full-screen overlay, only mounted while the menu is open.
#[component]
pub fn MobileMenu() -> impl IntoView {
    let global_state = expect_context::<GlobalState>();

    view! {
        <div class="fixed inset-0 z-40 bg-paper flex flex-col items-center justify-center gap-8 text-xl font-serif animate-fade-in">
            {
                SectionId::iter()
                    .map(|section| view! {
                        <button on:click=move |_| global_state.jump_to(section) class="hover:text-shadow-red transition-colors">
                            {section.label()}
                        </button>
                    })
                    .collect_view()
            }
        </div>
    }
}
