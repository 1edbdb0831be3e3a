use comrak::plugins::syntect::SyntectAdapter;
use comrak::{ComrakOptions, ComrakPlugins, markdown_to_html_with_plugins};
use once_cell::sync::Lazy;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options
});

pub fn markdown_to_html(md: &str) -> String {
    let adapter = SyntectAdapter::new(Some("base16-ocean.dark"));
    let mut plugins = ComrakPlugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&adapter);
    markdown_to_html_with_plugins(md, &MARKDOWN_OPTIONS, &plugins)
}

/// Device options for the troubleshoot form, value/label pairs.
pub const DEVICE_MODELS: &[(&str, &str)] = &[
    ("iphone-15-pro", "iPhone 15 Pro"),
    ("iphone-14", "iPhone 14"),
    ("iphone-13", "iPhone 13"),
    ("samsung-s24", "Samsung Galaxy S24"),
    ("samsung-s23", "Samsung Galaxy S23"),
    ("pixel-8-pro", "Google Pixel 8 Pro"),
    ("pixel-7", "Google Pixel 7"),
    ("oneplus-12", "OnePlus 12"),
    ("windows-laptop", "Windows Laptop"),
    ("macbook", "MacBook"),
    ("ipad", "iPad"),
    ("other", "Other Device"),
];

pub fn device_label(value: &str) -> &str {
    DEVICE_MODELS
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:none]:[minute padding:zero] [period case:upper]");

const SHORT_DATE_FORMAT: &[FormatItem<'static>] = format_description!("[month repr:short] [day]");

/// Clock-style timestamp for a message bubble, in local time when the
/// offset is known.
pub fn format_message_time(timestamp: OffsetDateTime) -> String {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime
        .format(MESSAGE_TIME_FORMAT)
        .unwrap_or_else(|_| String::new())
}

/// Compact relative timestamp for the session list: "Just now", "5m", "3h",
/// "2d", then a short date.
pub fn format_relative(timestamp: OffsetDateTime, now: OffsetDateTime) -> String {
    let elapsed = now - timestamp;
    let seconds = elapsed.whole_seconds().max(0);

    if seconds < 60 {
        return "Just now".to_string();
    }
    if seconds < 3_600 {
        return format!("{}m", seconds / 60);
    }
    if seconds < 86_400 {
        return format!("{}h", seconds / 3_600);
    }
    if seconds < 604_800 {
        return format!("{}d", seconds / 86_400);
    }
    timestamp
        .format(SHORT_DATE_FORMAT)
        .unwrap_or_else(|_| String::new())
}

/// "45s" under a minute, "m:ss" after.
pub fn format_voice_duration(seconds: u32) -> String {
    if seconds < 60 {
        return format!("{seconds}s");
    }
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Put text on the system clipboard. Quietly does nothing when no clipboard
/// backend is available.
pub fn copy_to_clipboard(text: &str) {
    #[cfg(any(feature = "desktop", feature = "mobile"))]
    {
        if let Ok(mut clipboard) = arboard::Clipboard::new() {
            let _ = clipboard.set_text(text.to_string());
        }
    }
    #[cfg(not(any(feature = "desktop", feature = "mobile")))]
    {
        let _ = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn base() -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap()
    }

    #[test]
    fn test_relative_buckets() {
        let now = base();
        assert_eq!(format_relative(now, now), "Just now");
        assert_eq!(format_relative(now - Duration::from_secs(59), now), "Just now");
        assert_eq!(format_relative(now - Duration::from_secs(300), now), "5m");
        assert_eq!(format_relative(now - Duration::from_secs(7_200), now), "2h");
        assert_eq!(format_relative(now - Duration::from_secs(172_800), now), "2d");
    }

    #[test]
    fn test_relative_falls_back_to_short_date() {
        let now = base();
        let old = now - Duration::from_secs(30 * 86_400);
        let formatted = format_relative(old, now);
        assert!(!formatted.ends_with('d'), "old timestamps render as a date");
        assert!(formatted.contains(' '));
    }

    #[test]
    fn test_voice_duration_formats() {
        assert_eq!(format_voice_duration(8), "8s");
        assert_eq!(format_voice_duration(59), "59s");
        assert_eq!(format_voice_duration(60), "1:00");
        assert_eq!(format_voice_duration(125), "2:05");
    }

    #[test]
    fn test_device_label_lookup() {
        assert_eq!(device_label("macbook"), "MacBook");
        assert_eq!(device_label("unknown-value"), "unknown-value");
    }

    #[test]
    fn test_markdown_renders_paragraphs() {
        let html = markdown_to_html("first paragraph\n\nsecond paragraph");
        assert!(html.contains("<p>first paragraph</p>"));
        assert!(html.contains("<p>second paragraph</p>"));
    }
}
