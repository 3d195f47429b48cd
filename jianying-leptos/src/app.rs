use global_state::GlobalState;
use leptos::*;
use leptos_meta::*;
use pages::home::HomePage;

pub mod components;
pub mod dom;
pub mod global_state;
pub mod hooks;
pub mod pages;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(GlobalState::new());

    let global_state = expect_context::<GlobalState>();

    view! {
        <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
        <meta name="description" content="见影 · 马王皮影的数字重生。四川省南部县国家级非物质文化遗产马王皮影数字保护计划。"/>
        <meta name="keywords" content="马王皮影,皮影戏,南部县,非物质文化遗产,见影"/>
        <meta name="twitter:title" content="见影 · 马王皮影"/>
        <meta name="twitter:description" content="马王皮影的数字重生"/>
        <meta name="twitter:card" content="summary_large_image"/>

        <Stylesheet id="leptos" href="/pkg/jianying.css"/>
        <Title text="见影 · 马王皮影"/>
        <Body class=move || format!("bg-paper text-ink font-serif {}", if global_state.menu_open() { "overflow-hidden" } else { "" })/>
        <HomePage/>
    }
}
