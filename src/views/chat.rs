use crate::assist::{self, MockAnalyzer, ScreenAnalyzer, compose_screen_analysis_answer};
use crate::assist::{DemoClient, wants_demonstration};
use crate::config::Config;
use crate::media::{CaptureError, ScreenCapture};
use crate::session::{Conversation, RESPONSE_DELAY, copy_solution_text};
use crate::types::{AnswerRecord, ConversationMessage, MessageContent, Role};
use crate::ui::{Toast, ToastLevel, push_toast};
use crate::views::shared::{
    DEVICE_MODELS, device_label, format_message_time, markdown_to_html,
};
use dioxus::events::Key;
use dioxus::prelude::*;
use std::time::Duration;

/// Extra wait after a successful capture, imitating an analysis pass.
const ANALYSIS_DELAY: Duration = Duration::from_secs(2);

const SUGGESTED_QUESTIONS: &[&str] = &[
    "Can you explain step 3 in more detail?",
    "What if this doesn't work?",
    "How long will this take?",
    "Is this a common issue?",
];

const STEPS_PREVIEW_LIMIT: usize = 5;

/// The question a screen-analysis exchange is logged under.
const ANALYSIS_QUESTION: &str = "Screen Analysis Results";

fn question_for(messages: &[ConversationMessage], assistant_index: usize) -> String {
    messages[..assistant_index]
        .iter()
        .rev()
        .find_map(|msg| match (&msg.role, &msg.content) {
            (Role::User, MessageContent::Text(text)) => Some(text.clone()),
            _ => None,
        })
        .unwrap_or_default()
}

#[component]
pub fn ChatView(toasts: Signal<Vec<Toast>>) -> Element {
    let conversation = use_signal(Conversation::new);
    let device_model = use_signal(String::new);
    let question_draft = use_signal(String::new);
    let input = use_signal(String::new);
    let sending = use_signal(|| false);
    let capturing = use_signal(|| false);

    let has_messages = conversation.with(|c| !c.messages().is_empty());

    // Both handlers live in this scope, not the form's. The first submit
    // swaps the form out for the chat log, and a task spawned inside the
    // form would be cancelled with it before the answer resolves.
    let submit_question = {
        let mut conversation = conversation;
        let mut sending = sending;
        let mut question_draft = question_draft;
        move |_: ()| {
            let question = question_draft().trim().to_string();
            if question.is_empty() {
                push_toast(toasts, ToastLevel::Error, "Please enter your question");
                return;
            }
            if device_model().is_empty() {
                push_toast(toasts, ToastLevel::Error, "Please select your device model");
                return;
            }
            if sending() || capturing() {
                return;
            }

            sending.set(true);
            conversation.with_mut(|c| c.submit(&question));
            question_draft.set(String::new());

            spawn(async move {
                tokio::time::sleep(RESPONSE_DELAY).await;
                let answer = assist::answer_question(&question).clone();
                conversation.with_mut(|c| c.resolve(answer, false));
                sending.set(false);
                push_toast(toasts, ToastLevel::Success, "Solution generated successfully!");
            });
        }
    };

    let capture_screen = {
        let mut conversation = conversation;
        let mut capturing = capturing;
        move |_: ()| {
            if device_model().is_empty() {
                push_toast(
                    toasts,
                    ToastLevel::Error,
                    "Please select your device model first",
                );
                return;
            }
            if sending() || capturing() {
                return;
            }

            capturing.set(true);
            push_toast(
                toasts,
                ToastLevel::Info,
                "Select the screen or window you want to share...",
            );
            let model = device_label(&device_model()).to_string();

            spawn(async move {
                #[cfg(feature = "simulated-capture")]
                let capture = crate::media::SimulatedCapture;
                #[cfg(not(feature = "simulated-capture"))]
                let capture = crate::media::UnsupportedCapture;
                match capture.capture().await {
                    Ok(frame) => {
                        push_toast(toasts, ToastLevel::Success, "Screen captured! Analyzing...");
                        tokio::time::sleep(ANALYSIS_DELAY).await;

                        let analyzer = MockAnalyzer::new();
                        let result = analyzer.analyze(&frame.screenshot, &model).await;
                        let answer = compose_screen_analysis_answer(&result, &model);
                        conversation.with_mut(|c| {
                            c.submit(ANALYSIS_QUESTION);
                            c.resolve(answer, false);
                        });
                        push_toast(toasts, ToastLevel::Success, "Screen analysis complete!");
                    }
                    Err(err) => {
                        let level = match err {
                            CaptureError::Cancelled => ToastLevel::Info,
                            _ => ToastLevel::Error,
                        };
                        push_toast(toasts, level, err.to_string());
                    }
                }
                capturing.set(false);
            });
        }
    };

    rsx! {
        div { class: "main-container",
            if has_messages {
                ChatLog {
                    toasts,
                    conversation,
                    device_model,
                    input,
                    sending,
                }
            } else {
                TroubleshootForm {
                    device_model,
                    question_draft,
                    sending,
                    capturing,
                    on_submit: submit_question,
                    on_capture: capture_screen,
                }
            }
        }
    }
}

#[component]
fn TroubleshootForm(
    device_model: Signal<String>,
    question_draft: Signal<String>,
    sending: Signal<bool>,
    capturing: Signal<bool>,
    on_submit: EventHandler<()>,
    on_capture: EventHandler<()>,
) -> Element {
    let mut device_model = device_model;
    let mut question_draft = question_draft;

    rsx! {
        div { class: "troubleshoot-form",
            div { class: "form-intro",
                h2 { "Describe Your Issue" }
                p { class: "text-muted",
                    "Tell us what's wrong or share your screen for instant analysis"
                }
            }

            label { class: "form-label", "Device/Phone Model" }
            select {
                class: "form-select",
                value: "{device_model}",
                onchange: move |ev| device_model.set(ev.value()),
                option { value: "", disabled: true, selected: device_model().is_empty(),
                    "Select your device model"
                }
                for (value, label) in DEVICE_MODELS.iter() {
                    option { key: "{value}", value: "{value}", "{label}" }
                }
            }

            label { class: "form-label", "What problem are you experiencing?" }
            textarea {
                class: "form-textarea",
                rows: "6",
                placeholder: "Example: My phone's battery drains quickly even when not in use. It used to last all day but now dies by afternoon...",
                value: "{question_draft}",
                oninput: move |ev| question_draft.set(ev.value()),
            }
            p { class: "form-hint",
                "Be as specific as possible. Include error messages, when it started, and what you've already tried."
            }

            button {
                class: "btn btn-primary btn-block",
                disabled: sending() || capturing(),
                onclick: move |_| on_submit.call(()),
                if sending() { "Analyzing..." } else { "Find Solution" }
            }

            div { class: "form-divider", span { "OR" } }

            div { class: "capture-panel",
                h3 { "Screen Analysis" }
                p { class: "text-muted",
                    "Share your screen and let us automatically detect issues. Perfect for error messages, visual glitches, or performance problems."
                }
                p { class: "form-hint",
                    "Your screenshot is processed locally. We recommend closing sensitive windows before sharing."
                }
                button {
                    class: "btn btn-block",
                    disabled: sending() || capturing(),
                    onclick: move |_| on_capture.call(()),
                    if capturing() { "Analyzing Screen..." } else { "Share Screen for Analysis" }
                }
            }
        }
    }
}

#[component]
fn ChatLog(
    toasts: Signal<Vec<Toast>>,
    conversation: Signal<Conversation>,
    device_model: Signal<String>,
    input: Signal<String>,
    sending: Signal<bool>,
) -> Element {
    let mut input = input;

    let mut send_message = {
        let mut conversation = conversation;
        let mut sending = sending;
        let mut input = input;
        move |text: String| {
            let trimmed = text.trim().to_string();
            if trimmed.is_empty() || sending() {
                return;
            }

            sending.set(true);
            conversation.with_mut(|c| c.submit(&trimmed));
            input.set(String::new());

            spawn(async move {
                if wants_demonstration(&trimmed) {
                    match DemoClient::new(&Config::from_env()) {
                        Ok(client) => match client.demonstrate(&trimmed).await {
                            Ok(answer) => {
                                conversation.with_mut(|c| c.resolve(answer, true));
                                sending.set(false);
                                push_toast(
                                    toasts,
                                    ToastLevel::Success,
                                    "Live demonstration captured!",
                                );
                                return;
                            }
                            Err(err) => {
                                // Silent degradation: the user only ever sees
                                // the standard answer arrive.
                                tracing::warn!(error = %err, "demonstration backend unavailable, using canned answer");
                            }
                        },
                        Err(err) => {
                            tracing::warn!(error = %err, "could not build demonstration client");
                        }
                    }
                }

                tokio::time::sleep(RESPONSE_DELAY).await;
                let answer = assist::answer_question(&trimmed).clone();
                conversation.with_mut(|c| c.resolve(answer, false));
                sending.set(false);
                push_toast(toasts, ToastLevel::Success, "Response generated!");
            });
        }
    };

    let messages_snapshot = conversation.with(|c| c.messages().to_vec());
    let device = device_label(&device_model()).to_string();

    rsx! {
        div { class: "chat-wrap",
            div { class: "chat-header",
                span { class: "chat-title", "TechFix Assistant" }
                span { class: "chat-device-badge", "{device}" }
            }

            div { id: "chat-list", class: "chat-list",
                for (i, msg) in messages_snapshot.iter().enumerate() {
                    div {
                        key: "{msg.id}",
                        class: format_args!(
                            "message-row {}",
                            match msg.role { Role::User => "user", Role::Assistant => "assistant" },
                        ),
                        if matches!(msg.role, Role::Assistant) {
                            div { class: "avatar assistant", "T" }
                        }
                        div { class: "message-stack",
                            {match &msg.content {
                                MessageContent::Text(text) => rsx! {
                                    div { class: "bubble user", "{text}" }
                                },
                                MessageContent::Answer(answer) => rsx! {
                                    div { class: "bubble assistant",
                                        AnswerBubble {
                                            toasts,
                                            answer: answer.clone(),
                                            show_visual_guide: msg.show_visual_guide,
                                            has_browser_demo: msg.has_browser_demo,
                                            question: question_for(&messages_snapshot, i),
                                            device: device.clone(),
                                        }
                                    }
                                },
                            }}
                            div { class: "message-meta",
                                span { class: "message-timestamp",
                                    "{format_message_time(msg.created_at)}"
                                }
                                if matches!(msg.role, Role::Assistant) {
                                    FeedbackButtons { toasts }
                                }
                            }
                        }
                    }
                }

                if sending() {
                    div { class: "message-row assistant",
                        div { class: "avatar assistant", "T" }
                        div { class: "bubble assistant",
                            span { class: "shimmer-text", "Analyzing your question..." }
                        }
                    }
                }
            }

            if !sending() {
                div { class: "suggested-row",
                    p { class: "form-hint", "Quick questions you might ask:" }
                    for (idx, q) in SUGGESTED_QUESTIONS.iter().enumerate() {
                        button {
                            key: "{idx}",
                            class: "suggested-chip",
                            onclick: move |_| input.set(q.to_string()),
                            "{q}"
                        }
                    }
                }
            }

            form { class: "composer",
                div { class: "composer-inner",
                    textarea {
                        rows: "1",
                        placeholder: "Ask a follow-up question or describe another issue...",
                        value: "{input}",
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                ev.prevent_default();
                                let text = input();
                                send_message(text);
                            }
                        },
                        disabled: sending(),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: sending() || input().trim().is_empty(),
                        onclick: move |_| {
                            let text = input();
                            send_message(text);
                        },
                        "Send"
                    }
                }
                p { class: "form-hint center",
                    "Tip: Ask follow-up questions or describe new issues - I'll remember our conversation!"
                }
            }
        }
    }
}

#[component]
fn AnswerBubble(
    toasts: Signal<Vec<Toast>>,
    answer: AnswerRecord,
    show_visual_guide: bool,
    has_browser_demo: bool,
    question: String,
    device: String,
) -> Element {
    let explanation_html = markdown_to_html(&answer.explanation);
    let copy_payload = copy_solution_text(&question, &device, &answer);
    let on_copy = move |_| {
        crate::views::shared::copy_to_clipboard(&copy_payload);
        push_toast(toasts, ToastLevel::Success, "Solution copied to clipboard!");
    };

    let hidden_steps = answer.steps.len().saturating_sub(STEPS_PREVIEW_LIMIT);

    rsx! {
        div { class: "bubble-controls",
            button { class: "action-btn", title: "Copy solution", onclick: on_copy, "Copy" }
        }

        div { class: "md", dangerous_inner_html: "{explanation_html}" }

        if show_visual_guide {
            if let Some(guide) = answer.visual_guide.as_ref() {
                div { class: "visual-guide",
                    div { class: "visual-guide-header", "{guide.title}" }
                    img { src: "{guide.image}", alt: "{guide.title}", loading: "lazy" }
                    div { class: "visual-guide-steps",
                        for step in guide.steps.iter() {
                            div { key: "{step.number}", class: "visual-guide-step",
                                span { class: "step-number", "{step.number}" }
                                span { class: "step-icon", "{step.icon}" }
                                span { class: "step-text", "{step.text}" }
                            }
                        }
                    }
                }
            }
        }

        if has_browser_demo {
            if let Some(screenshot) = answer.browser_screenshot.as_ref() {
                div { class: "browser-demo",
                    div { class: "browser-demo-header", "Live Browser Demonstration" }
                    img { src: "{screenshot}", alt: "Browser demonstration screenshot", loading: "lazy" }
                    if let Some(url) = answer.browser_url.as_ref() {
                        p { class: "form-hint", strong { "URL: " } "{url}" }
                    }
                }
            }
        }

        if !answer.steps.is_empty() {
            div { class: "steps-block",
                p { class: "steps-title", "Step-by-Step Solution:" }
                for (idx, step) in answer.steps.iter().take(STEPS_PREVIEW_LIMIT).enumerate() {
                    div { key: "{idx}", class: "step-row",
                        span { class: "step-number", "{idx + 1}" }
                        span { class: "step-text", "{step}" }
                    }
                }
                if hidden_steps > 0 {
                    p { class: "form-hint", "+ {hidden_steps} more steps" }
                }
            }
        }
    }
}

#[component]
fn FeedbackButtons(toasts: Signal<Vec<Toast>>) -> Element {
    rsx! {
        button {
            class: "action-btn",
            title: "Helpful",
            onclick: move |_| push_toast(toasts, ToastLevel::Success, "Thanks for your feedback!"),
            "👍"
        }
        button {
            class: "action-btn",
            title: "Not helpful",
            onclick: move |_| push_toast(
                toasts,
                ToastLevel::Info,
                "Sorry this wasn't helpful. Try asking a more specific question.",
            ),
            "👎"
        }
    }
}
