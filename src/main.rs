use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

mod chat {
    pub mod flow;
    pub mod modal;
}
mod components {
    pub mod chat_launcher;
}
mod pages {
    pub mod home;
}

use chat::modal::ChatModal;
use components::chat_launcher::{FloatingChatButton, MobileChatBar};
use pages::home::Home;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_open_chat: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 50.0);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let nav_items = [
        ("Diensten", "#diensten"),
        ("Tarieven", "#tarieven"),
        ("Werkgebied", "#werkgebied"),
        ("FAQ", "#faq"),
    ];

    let open_chat = {
        let on_open_chat = props.on_open_chat.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_open_chat.emit(());
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <>
            <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
                <div class="nav-content">
                    <a href="#" class="nav-logo">
                        {"UBERAIRCO"}
                        <span class="nav-logo-sub">{"Airco & Pomp Specialist"}</span>
                    </a>

                    <div class="nav-links">
                        { for nav_items.iter().map(|(label, href)| html! {
                            <a href={*href} class="nav-link">{label}</a>
                        }) }
                        <button class="nav-cta" onclick={open_chat.clone()}>
                            {"Plan Afspraak"}
                        </button>
                    </div>

                    <button class="burger-menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>

            <div
                class={classes!("mobile-menu-overlay", (*menu_open).then_some("open"))}
                onclick={close_menu.clone()}
            ></div>
            <div class={classes!("mobile-menu", (*menu_open).then_some("open"))}>
                <div class="mobile-menu-header">
                    <span>{"Menu"}</span>
                    <button onclick={close_menu.clone()}>{"✕"}</button>
                </div>
                <nav class="mobile-menu-links">
                    { for nav_items.iter().map(|(label, href)| html! {
                        <a href={*href} onclick={close_menu.clone()}>{label}</a>
                    }) }
                </nav>
                <button class="nav-cta mobile" onclick={open_chat}>
                    {"Plan Afspraak"}
                </button>
            </div>

            <style>
                {NAV_STYLE}
            </style>
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    // The chat's visibility lives here; every trigger gets a callback
    // instead of reaching for shared state.
    let chat_open = use_state(|| false);

    let open_chat = {
        let chat_open = chat_open.clone();
        Callback::from(move |_| {
            chat_open.set(true);
        })
    };

    let close_chat = {
        let chat_open = chat_open.clone();
        Callback::from(move |_| {
            chat_open.set(false);
        })
    };

    html! {
        <>
            <Nav on_open_chat={open_chat.clone()} />
            <main>
                <Home on_open_chat={open_chat.clone()} />
            </main>
            <FloatingChatButton on_click={open_chat.clone()} />
            <MobileChatBar on_click={open_chat} />
            <ChatModal is_open={*chat_open} on_close={close_chat} />
        </>
    }
}

const NAV_STYLE: &str = r#"
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 60;
    transition: background 0.3s ease, box-shadow 0.3s ease;
    background: transparent;
}

.top-nav.scrolled {
    background: rgba(255, 255, 255, 0.92);
    backdrop-filter: blur(10px);
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
}

.nav-content {
    max-width: 1160px;
    margin: 0 auto;
    padding: 0 1.5rem;
    height: 72px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo {
    font-family: 'Sora', sans-serif;
    font-weight: 700;
    font-size: 1.3rem;
    color: #fff;
    text-decoration: none;
    display: flex;
    align-items: baseline;
    gap: 0.5rem;
    transition: color 0.3s ease;
}

.top-nav.scrolled .nav-logo {
    color: #1565c0;
}

.nav-logo-sub {
    font-family: 'Inter', sans-serif;
    font-size: 0.7rem;
    font-weight: 500;
    color: #fb923c;
}

.nav-links {
    display: none;
    align-items: center;
    gap: 2rem;
}

@media (min-width: 768px) {
    .nav-links {
        display: flex;
    }
}

.nav-link {
    font-size: 0.92rem;
    font-weight: 500;
    color: rgba(255, 255, 255, 0.9);
    text-decoration: none;
    transition: color 0.3s ease;
}

.top-nav.scrolled .nav-link {
    color: #374151;
}

.nav-link:hover {
    color: #f97316;
}

.nav-cta {
    background: linear-gradient(90deg, #f97316, #ea580c);
    color: #fff;
    border: none;
    border-radius: 10px;
    padding: 0.6rem 1.25rem;
    font-size: 0.92rem;
    font-weight: 600;
    cursor: pointer;
    transition: transform 0.2s ease;
}

.nav-cta:hover {
    transform: translateY(-1px);
}

.nav-cta.mobile {
    width: 100%;
    margin-top: 2rem;
    padding: 0.9rem;
}

.burger-menu {
    display: flex;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    padding: 0.5rem;
    cursor: pointer;
}

@media (min-width: 768px) {
    .burger-menu {
        display: none;
    }
}

.burger-menu span {
    width: 24px;
    height: 2px;
    background: #fff;
    transition: background 0.3s ease;
}

.top-nav.scrolled .burger-menu span {
    background: #374151;
}

.mobile-menu-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.5);
    z-index: 70;
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.3s ease;
}

.mobile-menu-overlay.open {
    opacity: 1;
    pointer-events: auto;
}

.mobile-menu {
    position: fixed;
    top: 0;
    right: 0;
    height: 100%;
    width: 300px;
    background: #fff;
    z-index: 75;
    padding: 1.5rem;
    transform: translateX(100%);
    transition: transform 0.3s ease-out;
    box-shadow: -16px 0 32px rgba(0, 0, 0, 0.15);
}

.mobile-menu.open {
    transform: translateX(0);
}

.mobile-menu-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 2rem;
    font-family: 'Sora', sans-serif;
    font-weight: 700;
    font-size: 1.2rem;
    color: #1565c0;
}

.mobile-menu-header button {
    background: none;
    border: none;
    font-size: 1.1rem;
    padding: 0.5rem;
    cursor: pointer;
    color: #374151;
}

.mobile-menu-links {
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
}

.mobile-menu-links a {
    padding: 0.9rem 1rem;
    border-radius: 12px;
    color: #374151;
    font-weight: 500;
    text-decoration: none;
    transition: background 0.2s ease, color 0.2s ease;
}

.mobile-menu-links a:hover {
    background: #e3f2fd;
    color: #1565c0;
}
"#;

fn main() {
    // Better panic messages in the browser console
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
