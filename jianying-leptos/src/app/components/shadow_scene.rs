use leptos::*;

struct Silhouette {
    glyph: &'static str,
    class: &'static str,
}

static SILHOUETTES: [Silhouette; 3] = [
    Silhouette {
        glyph: "将",
        class: "left-[8%] bottom-[12%] text-[14rem] animate-sway",
    },
    Silhouette {
        glyph: "旦",
        class: "right-[10%] bottom-[18%] text-[11rem] animate-sway-slow",
    },
    Silhouette {
        glyph: "生",
        class: "left-[42%] top-[10%] text-[8rem] opacity-40 animate-drift",
    },
];

/// Decorative backdrop: a lamp glow behind a paper screen with puppet
/// silhouettes drifting across it.
#[component]
pub fn ShadowScene() -> impl IntoView {
    view! {
        <div class="relative w-full h-full overflow-hidden pointer-events-none select-none" aria-hidden="true">
            <div class="absolute left-1/2 top-1/3 -translate-x-1/2 -translate-y-1/2 w-[40rem] h-[40rem] rounded-full bg-shadow-gold/25 blur-3xl animate-flicker"></div>
            <div class="absolute inset-x-[6%] inset-y-[14%] border border-shadow-brown/10 bg-paper/20"></div>
            {
                SILHOUETTES
                    .iter()
                    .map(|silhouette| view! {
                        <span class=format!("absolute font-calligraphy text-ink/15 blur-[2px] {}", silhouette.class)>
                            {silhouette.glyph}
                        </span>
                    })
                    .collect_view()
            }
        </div>
    }
}
