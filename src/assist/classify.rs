use crate::types::IssueCategory;

/// Keyword groups in priority order. First group with a hit wins, so a
/// question mentioning both "battery" and "wifi" classifies as battery.
/// The ordering is part of the behavioral contract; do not reorder.
const KEYWORD_GROUPS: &[(IssueCategory, &[&str])] = &[
    (IssueCategory::Battery, &["battery", "charge", "drain", "power"]),
    (
        IssueCategory::Wifi,
        &["wifi", "wi-fi", "internet", "network", "connection"],
    ),
    (
        IssueCategory::Slow,
        &["slow", "lag", "freeze", "performance", "hang"],
    ),
    (
        IssueCategory::Storage,
        &["storage", "space", "memory", "full"],
    ),
    (
        IssueCategory::Screen,
        &["screen", "display", "brightness", "touch"],
    ),
    (
        IssueCategory::App,
        &["app", "application", "crash", "install"],
    ),
    (
        IssueCategory::Audio,
        &["sound", "audio", "speaker", "volume"],
    ),
];

/// Map a free-text question to an issue category by ordered substring
/// matching. Total: unrecognized input falls through to `General`.
pub fn classify(question: &str) -> IssueCategory {
    let lowered = question.to_lowercase();

    for (category, keywords) in KEYWORD_GROUPS {
        if keywords.iter().any(|kw| lowered.contains(kw)) {
            return *category;
        }
    }

    IssueCategory::General
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_keyword_per_group() {
        assert_eq!(classify("My battery dies fast"), IssueCategory::Battery);
        assert_eq!(classify("phone won't charge"), IssueCategory::Battery);
        assert_eq!(classify("no internet on my phone"), IssueCategory::Wifi);
        assert_eq!(classify("Wi-Fi drops constantly"), IssueCategory::Wifi);
        assert_eq!(classify("everything is so slow"), IssueCategory::Slow);
        assert_eq!(classify("apps freeze all the time"), IssueCategory::Slow);
        assert_eq!(classify("storage is almost gone"), IssueCategory::Storage);
        assert_eq!(classify("display flickers"), IssueCategory::Screen);
        assert_eq!(classify("application keeps crashing"), IssueCategory::App);
        assert_eq!(classify("speaker makes no sound"), IssueCategory::Audio);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("BATTERY PROBLEM"), IssueCategory::Battery);
        assert_eq!(classify("WiFi Keeps Disconnecting"), IssueCategory::Wifi);
    }

    #[test]
    fn test_priority_order_breaks_ties() {
        // Battery group outranks wifi group.
        assert_eq!(classify("battery and wifi problem"), IssueCategory::Battery);
        // Wifi group outranks slow group.
        assert_eq!(classify("slow internet"), IssueCategory::Wifi);
        // Slow group outranks storage group.
        assert_eq!(classify("laggy and storage full"), IssueCategory::Slow);
        // Screen group outranks app group.
        assert_eq!(classify("app covers the screen"), IssueCategory::Screen);
    }

    #[test]
    fn test_unrecognized_falls_back_to_general() {
        assert_eq!(classify("asdkjasd random text"), IssueCategory::General);
        assert_eq!(classify(""), IssueCategory::General);
        assert_eq!(classify("how do I check in for my flight"), IssueCategory::General);
    }

    #[test]
    fn test_substring_matching_is_literal() {
        // "app" matches as a substring, mirroring the original behavior.
        assert_eq!(classify("I'm happy with it"), IssueCategory::App);
    }
}
