use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{Element, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use super::flow::{BotReply, ChatFlow, ChatOption, ChatStep, ScheduledReply, Sender};

#[derive(Properties, PartialEq)]
pub struct ChatModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

pub enum ChatModalMsg {
    Select(ChatStep, ChatOption),
    SetInput(String),
    Submit,
    Reply(BotReply),
}

/// The appointment chat. Stays mounted while hidden so the conversation
/// survives closing and reopening; a fresh session starts on page load.
pub struct ChatModal {
    flow: ChatFlow,
    input: String,
    scroll_ref: NodeRef,
}

impl Component for ChatModal {
    type Message = ChatModalMsg;
    type Properties = ChatModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut modal = Self {
            flow: ChatFlow::new(),
            input: String::new(),
            scroll_ref: NodeRef::default(),
        };
        if ctx.props().is_open {
            let pending = modal.flow.open();
            modal.schedule(ctx, pending);
        }
        modal
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().is_open && !old_props.is_open {
            let pending = self.flow.open();
            self.schedule(ctx, pending);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatModalMsg::Select(step, option) => {
                let pending = self.flow.select_option(step, &option);
                self.schedule(ctx, pending);
                true
            }
            ChatModalMsg::SetInput(value) => {
                self.input = value;
                true
            }
            ChatModalMsg::Submit => {
                let pending = self.flow.submit_postcode(&self.input);
                if !pending.is_empty() {
                    self.input.clear();
                }
                self.schedule(ctx, pending);
                true
            }
            ChatModalMsg::Reply(reply) => {
                let was_done = self.flow.step() == ChatStep::Done;
                let pending = self.flow.deliver(reply);
                self.schedule(ctx, pending);
                if !was_done && self.flow.step() == ChatStep::Done {
                    info!(
                        "service request completed: {}",
                        serde_json::to_string(self.flow.request()).unwrap_or_default()
                    );
                }
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // Keep the newest message in view.
        if let Some(list) = self.scroll_ref.cast::<Element>() {
            list.set_scroll_top(list.scroll_height());
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let is_open = ctx.props().is_open;
        let on_close = ctx.props().on_close.clone();
        let close = Callback::from(move |_: MouseEvent| on_close.emit(()));

        let overlay_class = if is_open {
            "chat-overlay open"
        } else {
            "chat-overlay"
        };
        let modal_class = if is_open { "chat-modal open" } else { "chat-modal" };

        html! {
            <>
                <div class={overlay_class} onclick={close.clone()}></div>
                <div class={modal_class}>
                    <div class="chat-window">
                        <div class="chat-header">
                            <div>
                                <h3>{"UberAirco Assistent"}</h3>
                                <p>{"Online — antwoordt direct"}</p>
                            </div>
                            <button class="chat-close" onclick={close}>{"✕"}</button>
                        </div>

                        <div class="chat-messages" ref={self.scroll_ref.clone()}>
                            { for self.flow.messages().iter().map(|msg| {
                                let bubble = match msg.sender {
                                    Sender::User => "chat-bubble user",
                                    Sender::Bot => "chat-bubble bot",
                                };
                                html! {
                                    <div class={classes!("chat-row", (msg.sender == Sender::User).then_some("from-user"))}>
                                        <div class={bubble}>{ &msg.text }</div>
                                    </div>
                                }
                            }) }

                            { self.render_options(ctx) }
                        </div>

                        { self.render_input(ctx) }
                    </div>
                </div>
                <style>
                    {r#"
                    .chat-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.5);
                        z-index: 90;
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.3s ease;
                    }

                    .chat-overlay.open {
                        opacity: 1;
                        pointer-events: auto;
                    }

                    .chat-modal {
                        position: fixed;
                        z-index: 95;
                        inset: 1rem;
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.4s ease, transform 0.4s ease;
                        transform: translateY(20px);
                    }

                    .chat-modal.open {
                        opacity: 1;
                        pointer-events: auto;
                        transform: translateY(0);
                    }

                    @media (min-width: 768px) {
                        .chat-modal {
                            inset: auto;
                            right: 1.5rem;
                            bottom: 1.5rem;
                            width: 420px;
                            height: 600px;
                        }
                    }

                    .chat-window {
                        background: #fff;
                        border-radius: 16px;
                        box-shadow: 0 24px 48px rgba(0, 0, 0, 0.25);
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        overflow: hidden;
                    }

                    .chat-header {
                        background: linear-gradient(90deg, #1565c0, #0d47a1);
                        color: #fff;
                        padding: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .chat-header h3 {
                        margin: 0;
                        font-family: 'Sora', sans-serif;
                        font-size: 1rem;
                    }

                    .chat-header p {
                        margin: 0;
                        font-size: 0.85rem;
                        color: rgba(255, 255, 255, 0.7);
                    }

                    .chat-close {
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.1rem;
                        padding: 0.5rem;
                        border-radius: 8px;
                        cursor: pointer;
                    }

                    .chat-close:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }

                    .chat-messages {
                        flex: 1;
                        overflow-y: auto;
                        padding: 1rem;
                        background: #f7f8fa;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }

                    .chat-row {
                        display: flex;
                        justify-content: flex-start;
                    }

                    .chat-row.from-user {
                        justify-content: flex-end;
                    }

                    .chat-bubble {
                        max-width: 80%;
                        padding: 0.75rem 1rem;
                        border-radius: 16px;
                        font-size: 0.95rem;
                        line-height: 1.4;
                    }

                    .chat-bubble.bot {
                        background: #fff;
                        border: 1px solid #e3e6ea;
                        border-bottom-left-radius: 6px;
                        color: #1f2933;
                    }

                    .chat-bubble.user {
                        background: #1565c0;
                        color: #fff;
                        border-bottom-right-radius: 6px;
                    }

                    .chat-options {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }

                    .chat-option {
                        width: 100%;
                        text-align: left;
                        padding: 0.9rem 1rem;
                        background: #fff;
                        border: 2px solid #bbdefb;
                        border-radius: 12px;
                        font-size: 0.95rem;
                        font-weight: 500;
                        color: #1f2933;
                        cursor: pointer;
                        transition: border-color 0.2s ease, background 0.2s ease;
                    }

                    .chat-option:hover {
                        border-color: #1565c0;
                        background: #e3f2fd;
                    }

                    .chat-input-row {
                        display: flex;
                        gap: 0.5rem;
                        padding: 1rem;
                        border-top: 1px solid #e3e6ea;
                        background: #fff;
                    }

                    .chat-input-row input {
                        flex: 1;
                        padding: 0.75rem 1rem;
                        border: 2px solid #e3e6ea;
                        border-radius: 12px;
                        font-size: 0.95rem;
                        outline: none;
                        transition: border-color 0.2s ease;
                    }

                    .chat-input-row input:focus {
                        border-color: #1565c0;
                    }

                    .chat-send {
                        padding: 0.75rem 1.5rem;
                        background: #f97316;
                        color: #fff;
                        border: none;
                        border-radius: 12px;
                        font-weight: 600;
                        cursor: pointer;
                        transition: background 0.2s ease;
                    }

                    .chat-send:hover {
                        background: #ea580c;
                    }
                    "#}
                </style>
            </>
        }
    }
}

impl ChatModal {
    /// Arm one single-shot timer per scheduled reply. Timers are never
    /// cancelled: a reply scheduled before the modal closes still lands.
    fn schedule(&self, ctx: &Context<Self>, pending: Vec<ScheduledReply>) {
        for scheduled in pending {
            let link = ctx.link().clone();
            let timeout = Timeout::new(scheduled.delay_ms, move || {
                link.send_message(ChatModalMsg::Reply(scheduled.reply));
            });
            timeout.forget();
        }
    }

    fn render_options(&self, ctx: &Context<Self>) -> Html {
        let options = self.flow.current_options();
        if options.is_empty() {
            return html! {};
        }
        let step = self.flow.step();
        html! {
            <div class="chat-options">
                { for options.iter().map(|option| {
                    let option = *option;
                    let onclick = ctx
                        .link()
                        .callback(move |_| ChatModalMsg::Select(step, option));
                    html! {
                        <button class="chat-option" {onclick}>{ option.label }</button>
                    }
                }) }
            </div>
        }
    }

    fn render_input(&self, ctx: &Context<Self>) -> Html {
        if !self.flow.is_input_active() {
            return html! {};
        }
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ChatModalMsg::SetInput(input.value())
        });
        let onkeypress = ctx.link().batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then_some(ChatModalMsg::Submit)
        });
        let onclick = ctx.link().callback(|_| ChatModalMsg::Submit);
        html! {
            <div class="chat-input-row">
                <input
                    type="text"
                    placeholder="Bijv. 3011AB"
                    value={self.input.clone()}
                    {oninput}
                    {onkeypress}
                />
                <button class="chat-send" {onclick}>{"Verstuur"}</button>
            </div>
        }
    }
}
