use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChatLauncherProps {
    pub on_click: Callback<()>,
}

/// Round chat button pinned bottom-right, hidden on small screens where
/// the bottom bar takes over.
#[function_component(FloatingChatButton)]
pub fn floating_chat_button(props: &ChatLauncherProps) -> Html {
    let on_click = props.on_click.clone();
    let onclick = Callback::from(move |_: MouseEvent| on_click.emit(()));

    html! {
        <>
            <button class="floating-chat" {onclick}>
                {"💬"}
                <span class="floating-chat-dot"></span>
            </button>
            <style>
                {r#"
                .floating-chat {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 80;
                    width: 64px;
                    height: 64px;
                    border: none;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #f97316, #ea580c);
                    color: #fff;
                    font-size: 1.6rem;
                    cursor: pointer;
                    box-shadow: 0 12px 24px rgba(249, 115, 22, 0.35);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .floating-chat:hover {
                    transform: scale(1.1);
                    box-shadow: 0 16px 32px rgba(249, 115, 22, 0.45);
                }

                .floating-chat-dot {
                    position: absolute;
                    top: 2px;
                    right: 2px;
                    width: 14px;
                    height: 14px;
                    background: #22c55e;
                    border: 2px solid #fff;
                    border-radius: 50%;
                    animation: chat-pulse 2s infinite;
                }

                @keyframes chat-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.4; }
                }

                @media (max-width: 767px) {
                    .floating-chat {
                        display: none;
                    }
                }
                "#}
            </style>
        </>
    }
}

/// Full-width call-to-action bar stuck to the bottom edge on mobile.
#[function_component(MobileChatBar)]
pub fn mobile_chat_bar(props: &ChatLauncherProps) -> Html {
    let on_click = props.on_click.clone();
    let onclick = Callback::from(move |_: MouseEvent| on_click.emit(()));

    html! {
        <>
            <button class="mobile-chat-bar" {onclick}>
                <span>{"💬"}</span>
                <span class="mobile-chat-label">{"Plan een afspraak"}</span>
                <span class="mobile-chat-dot"></span>
            </button>
            <style>
                {r#"
                .mobile-chat-bar {
                    display: none;
                }

                @media (max-width: 767px) {
                    .mobile-chat-bar {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                        position: fixed;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        z-index: 80;
                        padding: 1rem;
                        border: none;
                        background: linear-gradient(90deg, #f97316, #ea580c);
                        color: #fff;
                        font-size: 1rem;
                        cursor: pointer;
                        box-shadow: 0 -8px 16px rgba(0, 0, 0, 0.15);
                    }

                    .mobile-chat-label {
                        font-weight: 600;
                    }

                    .mobile-chat-dot {
                        width: 10px;
                        height: 10px;
                        background: #4ade80;
                        border-radius: 50%;
                        animation: chat-pulse 2s infinite;
                    }
                }
                "#}
            </style>
        </>
    }
}
