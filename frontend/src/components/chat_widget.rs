use web_sys::{Element, HtmlTextAreaElement, InputEvent, KeyboardEvent};
use yew::prelude::*;

use crate::chat::{key_intent, ChatMessage, ChatSession, KeyIntent, Sender};
use crate::config;
use crate::content::ChatContent;

#[derive(Properties, PartialEq)]
pub struct ChatWidgetProps {
    pub chat: ChatContent,
}

pub enum ChatWidgetMsg {
    Toggle,
    Close,
    SetDraft(String),
    Submit,
}

/// Floating chat button and panel. Messages are echoed locally and never sent
/// anywhere.
pub struct ChatWidget {
    session: ChatSession,
    list_ref: NodeRef,
    scroll_pending: bool,
}

impl Component for ChatWidget {
    type Message = ChatWidgetMsg;
    type Properties = ChatWidgetProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            session: ChatSession::new(&ctx.props().chat.seed),
            list_ref: NodeRef::default(),
            scroll_pending: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatWidgetMsg::Toggle => {
                self.session.toggle();
                self.scroll_pending = self.session.is_open();
                true
            }
            ChatWidgetMsg::Close => {
                self.session.close();
                true
            }
            ChatWidgetMsg::SetDraft(draft) => {
                self.session.set_draft(draft);
                true
            }
            ChatWidgetMsg::Submit => match self.session.submit() {
                Some(message) => {
                    log::debug!("Chat message {} appended at {}", message.id, message.time);
                    self.scroll_pending = true;
                    true
                }
                None => false,
            },
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if !self.scroll_pending {
            return;
        }
        if let Some(list) = self.list_ref.cast::<Element>() {
            list.set_scroll_top(list.scroll_height());
        }
        self.scroll_pending = false;
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let chat = &ctx.props().chat;
        let toggle = ctx.link().callback(|_| ChatWidgetMsg::Toggle);
        let panel_style = format!(
            "width: {}px; height: {}px;",
            config::CHAT_PANEL_WIDTH_PX,
            config::CHAT_PANEL_HEIGHT_PX
        );

        html! {
            <>
                if self.session.is_open() {
                    <div class="chat-panel glass" style={panel_style}>
                        <div class="chat-header">
                            <div class="chat-agent">
                                <div class="chat-avatar">{ chat.agent_initial() }</div>
                                <div>
                                    <h3>{ &chat.agent_name }</h3>
                                    <p class="chat-presence">
                                        <span class="presence-dot"></span>
                                        { &chat.presence }
                                    </p>
                                </div>
                            </div>
                            <button
                                class="chat-close"
                                onclick={ctx.link().callback(|_| ChatWidgetMsg::Close)}
                            >
                                { "✕" }
                            </button>
                        </div>

                        <div class="chat-messages" ref={self.list_ref.clone()}>
                            { for self.session.messages().iter().map(render_message) }
                        </div>

                        <div class="chat-input">
                            <textarea
                                rows="1"
                                placeholder={chat.placeholder.clone()}
                                value={self.session.draft().to_string()}
                                oninput={ctx.link().callback(|e: InputEvent| {
                                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                                    ChatWidgetMsg::SetDraft(input.value())
                                })}
                                onkeydown={ctx.link().batch_callback(|e: KeyboardEvent| {
                                    match key_intent(&e.key(), e.shift_key()) {
                                        KeyIntent::Submit => {
                                            e.prevent_default();
                                            Some(ChatWidgetMsg::Submit)
                                        }
                                        KeyIntent::PassThrough => None,
                                    }
                                })}
                            />
                            <button
                                class="chat-send"
                                onclick={ctx.link().callback(|_| ChatWidgetMsg::Submit)}
                            >
                                { "➤" }
                            </button>
                        </div>
                    </div>
                }

                <button class="chat-toggle glow" onclick={toggle}>
                    if self.session.is_open() {
                        { "✕" }
                    } else {
                        { "💬" }
                    }
                </button>
            </>
        }
    }
}

fn render_message(message: &ChatMessage) -> Html {
    let side = match message.sender {
        Sender::Visitor => "from-self",
        Sender::Agent => "from-other",
    };

    html! {
        <div key={message.id} class={classes!("chat-row", side)}>
            <div class="chat-bubble">
                <p class="chat-text">{ &message.text }</p>
                <p class="chat-time">{ &message.time }</p>
            </div>
        </div>
    }
}
