use crate::media::{SpeechError, SpeechRecognizer, UnsupportedSpeech};
use crate::session::Messenger;
use crate::types::{BubbleKind, BubbleMessage, Sender};
use crate::ui::{Toast, ToastLevel, push_toast};
use crate::views::shared::{format_message_time, format_relative, format_voice_duration};
use dioxus::events::Key;
use dioxus::prelude::*;
use time::OffsetDateTime;

struct NullSpeechEvents;

impl crate::media::SpeechEvents for NullSpeechEvents {
    fn on_transcript(&mut self, _transcript: crate::media::Transcript) {}
    fn on_error(&mut self, _error: SpeechError) {}
    fn on_end(&mut self) {}
}

#[component]
pub fn MessengerView(toasts: Signal<Vec<Toast>>) -> Element {
    let messenger = use_signal(Messenger::seeded);
    let active_chat = use_signal(|| 1_u64);
    let draft = use_signal(String::new);

    rsx! {
        div { class: "messenger",
            SessionList { messenger, active_chat }
            div { class: "messenger-main",
                TranscriptPane { messenger, active_chat }
                MessageInput { toasts, messenger, active_chat, draft }
            }
        }
    }
}

#[component]
fn SessionList(messenger: Signal<Messenger>, active_chat: Signal<u64>) -> Element {
    let mut active_chat = active_chat;
    let sessions = messenger.with(|m| m.sessions().to_vec());
    let now = OffsetDateTime::now_utc();

    rsx! {
        div { class: "session-list",
            div { class: "session-list-header", h2 { "Chats" } }
            for session in sessions.iter() {
                {
                    let id = session.id;
                    let selected = if active_chat() == id { "session-row active" } else { "session-row" };
                    rsx! {
                        div {
                            key: "{id}",
                            class: selected,
                            onclick: move |_| active_chat.set(id),
                            div { class: "session-avatar",
                                img { src: "{session.avatar}", alt: "{session.name}", loading: "lazy" }
                                if session.online {
                                    span { class: "online-dot" }
                                }
                            }
                            div { class: "session-body",
                                div { class: "session-top",
                                    span { class: "session-name", "{session.name}" }
                                    span { class: "session-time",
                                        "{format_relative(session.last_activity, now)}"
                                    }
                                }
                                div { class: "session-bottom",
                                    span { class: "session-preview", "{session.last_message}" }
                                    if session.unread > 0 {
                                        span { class: "unread-badge", "{session.unread}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TranscriptPane(messenger: Signal<Messenger>, active_chat: Signal<u64>) -> Element {
    let chat_id = active_chat();
    let (name, online) = messenger.with(|m| {
        m.session(chat_id)
            .map(|s| (s.name.clone(), s.online))
            .unwrap_or_default()
    });
    let bubbles: Vec<BubbleMessage> =
        messenger.with(|m| m.messages_for(chat_id).cloned().collect());

    rsx! {
        div { class: "transcript-header",
            span { class: "session-name", "{name}" }
            span { class: "text-muted",
                if online { "Online" } else { "Offline" }
            }
        }
        div { class: "transcript",
            if bubbles.is_empty() {
                p { class: "text-muted center", "No messages yet. Say hello!" }
            }
            for bubble in bubbles.iter() {
                MessageBubble { key: "{bubble.id}", bubble: bubble.clone() }
            }
        }
    }
}

#[component]
fn MessageBubble(bubble: BubbleMessage) -> Element {
    let row_class = match bubble.sender {
        Sender::Me => "bubble-row me",
        Sender::Peer => "bubble-row peer",
    };

    rsx! {
        div { class: row_class,
            div { class: "message-stack",
                {match bubble.kind {
                    BubbleKind::Text => rsx! {
                        div { class: "bubble", "{bubble.content}" }
                    },
                    BubbleKind::Voice { duration_secs } => rsx! {
                        div { class: "bubble voice",
                            span { class: "voice-glyph", "🎤" }
                            span { "{format_voice_duration(duration_secs)}" }
                        }
                    },
                    BubbleKind::Image => rsx! {
                        div { class: "bubble image",
                            img { src: "{bubble.content}", alt: "Shared image", loading: "lazy" }
                        }
                    },
                }}
                span { class: "message-timestamp", "{format_message_time(bubble.sent_at)}" }
            }
        }
    }
}

#[component]
fn MessageInput(
    toasts: Signal<Vec<Toast>>,
    messenger: Signal<Messenger>,
    active_chat: Signal<u64>,
    draft: Signal<String>,
) -> Element {
    let mut draft = draft;

    let mut send_text = {
        let mut messenger = messenger;
        move || {
            let text = draft().trim().to_string();
            if text.is_empty() {
                return;
            }
            messenger.with_mut(|m| m.send(active_chat(), BubbleKind::Text, &text));
            draft.set(String::new());
        }
    };

    let start_voice = move |_| {
        let mut recognizer = UnsupportedSpeech;
        if let Err(err) = recognizer.start(Box::new(NullSpeechEvents)) {
            push_toast(toasts, ToastLevel::Error, err.to_string());
        }
    };

    let attach_image = move |_| {
        push_toast(
            toasts,
            ToastLevel::Info,
            "Image attachments are not available in this build.",
        );
    };

    rsx! {
        div { class: "composer",
            div { class: "composer-inner",
                button { class: "action-btn", title: "Voice message", onclick: start_voice, "🎤" }
                button { class: "action-btn", title: "Send image", onclick: attach_image, "🖼" }
                textarea {
                    rows: "1",
                    placeholder: "Type a message...",
                    value: "{draft}",
                    oninput: move |ev| draft.set(ev.value()),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter && !ev.modifiers().shift() {
                            ev.prevent_default();
                            send_text();
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    disabled: draft().trim().is_empty(),
                    onclick: move |_| send_text(),
                    "Send"
                }
            }
        }
    }
}
