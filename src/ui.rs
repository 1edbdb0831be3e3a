use crate::theme::theme_definition;
use crate::types::ThemeMode;
use dioxus::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

const TECHFIX_CSS: Asset = asset!("/assets/techfix.css");
const TOAST_DISMISS: Duration = Duration::from_secs(3);

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Error,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Info => "toast toast-info",
            ToastLevel::Error => "toast toast-error",
        }
    }
}

/// A transient, dismissible notice. Every failure in the app degrades to one
/// of these; nothing is fatal.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub text: String,
}

/// Show a toast and schedule its removal. The dismiss timer lives in a
/// scoped task, so it dies with the app root rather than dangling.
pub fn push_toast(mut toasts: Signal<Vec<Toast>>, level: ToastLevel, text: impl Into<String>) {
    let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
    toasts.with_mut(|list| {
        list.push(Toast {
            id,
            level,
            text: text.into(),
        })
    });
    spawn(async move {
        tokio::time::sleep(TOAST_DISMISS).await;
        toasts.with_mut(|list| list.retain(|toast| toast.id != id));
    });
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AppTab {
    Assistant,
    Messages,
    Settings,
}

#[component]
pub fn App() -> Element {
    let active_tab = use_signal(|| AppTab::Assistant);
    let theme = use_signal(|| ThemeMode::Dark);
    let toasts = use_signal(Vec::<Toast>::new);

    rsx! {
        ThemeStyles { theme }
        AppHeader { active_tab }
        div { class: "tab-panels",
            TabPanel {
                active_tab,
                tab: AppTab::Assistant,
                children: rsx!( crate::views::ChatView { toasts } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Messages,
                children: rsx!( crate::views::MessengerView { toasts } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Settings,
                children: rsx!( crate::views::SettingsView { theme } ),
            }
        }
        ToastHost { toasts }
    }
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: TECHFIX_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn AppHeader(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "header",
            div { class: "header-content",
                div { class: "header-brand",
                    span { class: "brand-mark", "TechFix" }
                    span { class: "brand-status",
                        span { class: "online-dot" }
                        "Online • Always here to help"
                    }
                }
                div { class: "tabs",
                    TabButton { active_tab, tab: AppTab::Assistant, label: "Assistant" }
                    TabButton { active_tab, tab: AppTab::Messages, label: "Messages" }
                    TabButton { active_tab, tab: AppTab::Settings, label: "Settings" }
                }
            }
        }
    }
}

#[component]
fn TabButton(active_tab: Signal<AppTab>, tab: AppTab, label: &'static str) -> Element {
    let mut active_tab = active_tab;
    let class = if active_tab() == tab {
        "tab active"
    } else {
        "tab"
    };
    rsx! {
        h1 {
            class: class,
            onclick: move |_| active_tab.set(tab),
            "{label}"
        }
    }
}

#[component]
fn TabPanel(active_tab: Signal<AppTab>, tab: AppTab, children: Element) -> Element {
    let is_active = active_tab() == tab;
    let class_suffix = if is_active { "active" } else { "" };
    rsx! {
        div {
            class: format_args!("tab-panel {}", class_suffix),
            aria_hidden: (!is_active).to_string(),
            {children}
        }
    }
}

#[component]
fn ToastHost(toasts: Signal<Vec<Toast>>) -> Element {
    let snapshot = toasts();
    rsx! {
        div { class: "toast-stack", aria_live: "polite",
            for toast in snapshot.iter() {
                div { key: "{toast.id}", class: toast.level.class(), "{toast.text}" }
            }
        }
    }
}
