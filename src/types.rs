use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Issue buckets recognized by the keyword classifier. `General` is the
/// fallback for questions that match no keyword group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Battery,
    Wifi,
    Storage,
    Slow,
    Screen,
    App,
    Audio,
    General,
}

impl IssueCategory {
    pub const ALL: [IssueCategory; 8] = [
        IssueCategory::Battery,
        IssueCategory::Wifi,
        IssueCategory::Storage,
        IssueCategory::Slow,
        IssueCategory::Screen,
        IssueCategory::App,
        IssueCategory::Audio,
        IssueCategory::General,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IssueCategory::Battery => "battery",
            IssueCategory::Wifi => "wifi",
            IssueCategory::Storage => "storage",
            IssueCategory::Slow => "slow",
            IssueCategory::Screen => "screen",
            IssueCategory::App => "app",
            IssueCategory::Audio => "audio",
            IssueCategory::General => "general",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub description: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedIssue {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideStep {
    pub number: u8,
    pub icon: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualGuide {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<GuideStep>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

/// One simulated finding from the screen-analysis stub.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisFinding {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub confidence: Confidence,
    pub findings: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScreenAnalysisResult {
    pub analyzed: bool,
    pub device_model: String,
    pub timestamp: OffsetDateTime,
    pub issues: Vec<AnalysisFinding>,
}

/// A canned solution. The repository guarantees one of these per category;
/// the optional fields are only populated on specific paths (visual guide on
/// curated categories, screenshot/url on the browser-demo path, detected
/// issues on the screen-analysis path).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub explanation: String,
    pub steps: Vec<String>,
    pub tips: Vec<String>,
    pub resources: Vec<Resource>,
    #[serde(rename = "relatedIssues")]
    pub related_issues: Vec<RelatedIssue>,
    #[serde(rename = "visualGuide", skip_serializing_if = "Option::is_none")]
    pub visual_guide: Option<VisualGuide>,
    #[serde(
        rename = "detectedIssues",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub detected_issues: Vec<AnalysisFinding>,
    #[serde(rename = "browserScreenshot", skip_serializing_if = "Option::is_none")]
    pub browser_screenshot: Option<String>,
    #[serde(rename = "browserUrl", skip_serializing_if = "Option::is_none")]
    pub browser_url: Option<String>,
}

impl AnswerRecord {
    pub fn text_only(explanation: impl Into<String>, steps: Vec<String>) -> Self {
        Self {
            explanation: explanation.into(),
            steps,
            tips: Vec::new(),
            resources: Vec::new(),
            related_issues: Vec::new(),
            visual_guide: None,
            detected_issues: Vec::new(),
            browser_screenshot: None,
            browser_url: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MessageContent {
    Text(String),
    Answer(AnswerRecord),
}

/// One entry in the assistant conversation log. Immutable once appended.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversationMessage {
    pub id: u64,
    pub role: Role,
    pub created_at: OffsetDateTime,
    pub content: MessageContent,
    pub show_visual_guide: bool,
    pub has_browser_demo: bool,
}

// ---- Messenger (WeChat-style) model ----

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    Me,
    Peer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleKind {
    Text,
    Voice { duration_secs: u32 },
    Image,
}

impl BubbleKind {
    /// Placeholder shown in the session list for non-text messages.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            BubbleKind::Text => None,
            BubbleKind::Voice { .. } => Some("[voice]"),
            BubbleKind::Image => Some("[image]"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BubbleMessage {
    pub id: u64,
    pub chat_id: u64,
    pub sender: Sender,
    pub kind: BubbleKind,
    pub content: String,
    pub sent_at: OffsetDateTime,
    pub read: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    pub id: u64,
    pub name: String,
    pub avatar: String,
    pub last_message: String,
    pub last_activity: OffsetDateTime,
    pub unread: u32,
    pub online: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_record_wire_shape_is_camel_case() {
        let mut answer = AnswerRecord::text_only("explanation", vec!["step one".to_string()]);
        answer.related_issues.push(RelatedIssue {
            question: "q".to_string(),
            answer: "a".to_string(),
        });
        answer.browser_screenshot = Some("data:image/png;base64,abc".to_string());

        let json = serde_json::to_value(&answer).unwrap();
        assert!(json.get("relatedIssues").is_some());
        assert!(json.get("browserScreenshot").is_some());
        assert!(json.get("visualGuide").is_none(), "absent options are omitted");
        assert!(json.get("detectedIssues").is_none(), "empty lists are omitted");
    }

    #[test]
    fn test_finding_kind_serializes_as_type() {
        let finding = AnalysisFinding {
            kind: "error_detected".to_string(),
            title: "Error Messages Detected".to_string(),
            confidence: Confidence::High,
            findings: vec![],
        };
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["type"], "error_detected");
        assert_eq!(json["confidence"], "high");
    }

    #[test]
    fn test_bubble_placeholders() {
        assert_eq!(BubbleKind::Text.placeholder(), None);
        assert_eq!(
            BubbleKind::Voice { duration_secs: 3 }.placeholder(),
            Some("[voice]")
        );
        assert_eq!(BubbleKind::Image.placeholder(), Some("[image]"));
    }
}
