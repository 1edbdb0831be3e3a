use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition { css: DARK_THEME },
        ThemeMode::Light => ThemeDefinition { css: LIGHT_THEME },
    }
}

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0b0f14;
    --color-bg-secondary: #11161d;
    --color-text-primary: #f4f6f8;
    --color-text-muted: #9aa7b2;
    --color-border: #273340;
    --color-surface-muted: #1a222c;
    --color-input-border: #2e3c4a;
    --color-input-bg: #0b0f14;
    --color-accent: #3b82f6;
    --color-accent-soft: rgba(59, 130, 246, 0.15);
    --color-chat-user-bg: #3b82f6;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #141b23;
    --color-chat-assistant-text: #f4f6f8;
    --color-online: #22c55e;
    --color-danger: #ef4444;
    --color-unread: #ef4444;
    --color-timestamp: #7b8794;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.btn:hover { background: var(--color-surface-muted); }
.composer textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.composer textarea:focus { border-color: var(--color-accent); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-secondary: #f4f6f8;
    --color-text-primary: #10151b;
    --color-text-muted: #5b6672;
    --color-border: #d7dee5;
    --color-surface-muted: #e9eef3;
    --color-input-border: #c3ccd5;
    --color-input-bg: #ffffff;
    --color-accent: #2563eb;
    --color-accent-soft: rgba(37, 99, 235, 0.1);
    --color-chat-user-bg: #2563eb;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #f4f6f8;
    --color-chat-assistant-text: #10151b;
    --color-online: #16a34a;
    --color-danger: #dc2626;
    --color-unread: #dc2626;
    --color-timestamp: #6e7a86;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.btn:hover { background: var(--color-surface-muted); }
.composer textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.composer textarea:focus { border-color: var(--color-accent); }
"#;
