//! Screen-analysis stub. The shipped analyzer does not inspect pixel data;
//! it draws 1-2 canned findings to simulate a vision backend. `ScreenAnalyzer`
//! is the seam where a real analyzer can be substituted without touching
//! callers.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use rand::Rng;
use time::OffsetDateTime;

use crate::types::{
    AnalysisFinding, AnswerRecord, Confidence, RelatedIssue, Resource, ScreenAnalysisResult,
};

#[async_trait]
pub trait ScreenAnalyzer: Send + Sync {
    /// Produce an analysis result for a captured screenshot. `screenshot` is
    /// base64 image data; the mock implementation ignores it.
    async fn analyze(&self, screenshot: &str, device_model: &str) -> ScreenAnalysisResult;
}

/// The fixed finding list the mock draws from, in draw order.
pub fn canned_findings() -> &'static [AnalysisFinding] {
    &CANNED_FINDINGS
}

static CANNED_FINDINGS: Lazy<Vec<AnalysisFinding>> = Lazy::new(|| {
    vec![
        AnalysisFinding {
            kind: "error_detected".to_string(),
            title: "Error Messages Detected".to_string(),
            confidence: Confidence::High,
            findings: vec![
                "Application error dialog visible".to_string(),
                "System notification indicating a problem".to_string(),
                "Warning icons in system tray".to_string(),
            ],
        },
        AnalysisFinding {
            kind: "performance".to_string(),
            title: "Performance Indicators".to_string(),
            confidence: Confidence::Medium,
            findings: vec![
                "Multiple applications running simultaneously".to_string(),
                "System resource usage appears elevated".to_string(),
                "Potential memory-intensive processes active".to_string(),
            ],
        },
        AnalysisFinding {
            kind: "ui_issues".to_string(),
            title: "User Interface Issues".to_string(),
            confidence: Confidence::Low,
            findings: vec![
                "Window responsiveness appears normal".to_string(),
                "No obvious visual glitches detected".to_string(),
                "Display rendering functioning correctly".to_string(),
            ],
        },
    ]
});

/// Placeholder analyzer: selects a contiguous prefix of 1 or 2 canned
/// findings by uniform random draw, independent of the image content.
#[derive(Default)]
pub struct MockAnalyzer;

impl MockAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ScreenAnalyzer for MockAnalyzer {
    async fn analyze(&self, _screenshot: &str, device_model: &str) -> ScreenAnalysisResult {
        let count = rand::thread_rng().gen_range(1..=2);
        ScreenAnalysisResult {
            analyzed: true,
            device_model: device_model.to_string(),
            timestamp: OffsetDateTime::now_utc(),
            issues: CANNED_FINDINGS[..count].to_vec(),
        }
    }
}

/// Turn an analysis result into the same answer shape the classifier path
/// produces. Empty findings get the proactive-maintenance variant; otherwise
/// the explanation interpolates the first finding's title, the indicator
/// count, and the confidence level, and all findings ride along as
/// `detected_issues`.
pub fn compose_screen_analysis_answer(
    result: &ScreenAnalysisResult,
    device_model: &str,
) -> AnswerRecord {
    let Some(primary) = result.issues.first() else {
        return no_issues_answer(device_model);
    };

    AnswerRecord {
        explanation: format!(
            "Our screen analysis of your {device_model} has identified several potential issues that may be affecting your device's performance. Based on the visual indicators detected, here's what we found and how to address them.\n\n{}: We detected {} indicators with {} confidence level. These findings suggest there may be underlying issues that need attention.",
            primary.title,
            primary.findings.len(),
            primary.confidence.as_str(),
        ),
        steps: vec![
            "Take note of any error messages or codes visible on your screen for future reference".to_string(),
            "Close all unnecessary applications to reduce system load and isolate the problem".to_string(),
            "Open Task Manager (Windows) or Activity Monitor (Mac) to identify resource-heavy processes".to_string(),
            "Force quit any unresponsive applications that may be causing system instability".to_string(),
            "Check system logs for error entries related to the time of the screenshot".to_string(),
            "Perform a clean restart of your device to clear temporary issues".to_string(),
            "Update all affected applications to their latest versions".to_string(),
            "If specific error codes were detected, search for them in official support documentation".to_string(),
        ],
        tips: vec![
            "Screenshot error messages immediately when they appear - they contain valuable diagnostic info".to_string(),
            "Keep a log of when issues occur to identify patterns or triggers".to_string(),
            "Multiple open applications can compound performance issues".to_string(),
            "System warnings should never be ignored - address them promptly".to_string(),
            "Regular software updates often contain fixes for detected issues".to_string(),
        ],
        resources: vec![
            Resource {
                title: "Error Code Database".to_string(),
                description: "Look up specific error messages and their solutions".to_string(),
                url: "https://support.microsoft.com/en-us/windows".to_string(),
            },
            Resource {
                title: "Performance Troubleshooting Guide".to_string(),
                description: "Comprehensive guide to diagnosing system slowdowns".to_string(),
                url: "https://support.apple.com/mac/performance".to_string(),
            },
            Resource {
                title: "Application Crash Reports".to_string(),
                description: "How to read and interpret crash logs".to_string(),
                url: "https://developer.android.com/topic/performance/vitals/crash".to_string(),
            },
        ],
        related_issues: vec![
            RelatedIssue {
                question: "What if the issue doesn't appear in my screenshot?".to_string(),
                answer: "For intermittent issues, try capturing multiple screenshots when the problem occurs. Alternatively, use the text description method to explain the problem in detail, including when and how often it happens.".to_string(),
            },
            RelatedIssue {
                question: "How accurate is the automated screen analysis?".to_string(),
                answer: "Screen analysis provides a general assessment based on visual indicators. For the most accurate diagnosis, combine screen sharing with a detailed text description of your problem.".to_string(),
            },
            RelatedIssue {
                question: "Should I share my entire screen or just one window?".to_string(),
                answer: "Share only the window or area showing the problem. This protects your privacy and helps the analysis focus on relevant information. You can choose what to share when prompted by your browser.".to_string(),
            },
        ],
        visual_guide: None,
        detected_issues: result.issues.clone(),
        browser_screenshot: None,
        browser_url: None,
    }
}

fn no_issues_answer(device_model: &str) -> AnswerRecord {
    AnswerRecord {
        explanation: format!(
            "Based on the screen capture from your {device_model}, our automated analysis didn't detect any obvious critical issues. However, here are some proactive maintenance steps you can take to ensure optimal performance.\n\nScreen analysis is most effective when error messages or visual indicators are present. If you're experiencing a specific problem that wasn't captured in the screenshot, try describing it using the text form for more targeted assistance.",
        ),
        steps: vec![
            "Review running applications and close any unnecessary programs to free up system resources".to_string(),
            "Check for system updates in your device settings and install any pending updates".to_string(),
            "Clear browser cache and temporary files to improve performance".to_string(),
            "Restart your device to refresh system processes and clear memory".to_string(),
            "Monitor battery usage and disable power-intensive features if needed".to_string(),
            "Verify all important apps are updated to their latest versions".to_string(),
            "If issues persist, use the text form to describe your specific problem in detail".to_string(),
        ],
        tips: vec![
            "Regular device restarts help maintain optimal performance".to_string(),
            "Keep your device storage above 20% free space for smooth operation".to_string(),
            "Screen sharing works best when the error or issue is actively displayed".to_string(),
            "For privacy, the screenshot is processed locally and not stored permanently".to_string(),
            "Consider using text descriptions for intermittent or hard-to-capture issues".to_string(),
        ],
        resources: vec![
            Resource {
                title: "Screen Recording Best Practices".to_string(),
                description: "How to effectively capture technical issues for troubleshooting".to_string(),
                url: "https://support.google.com/youtube/answer/9228389".to_string(),
            },
            Resource {
                title: "System Performance Monitoring".to_string(),
                description: "Learn to identify performance bottlenecks on your device".to_string(),
                url: "https://support.apple.com/guide/activity-monitor/welcome/mac".to_string(),
            },
            Resource {
                title: "Privacy & Screen Sharing".to_string(),
                description: "Understanding what gets shared during screen capture".to_string(),
                url: "https://support.mozilla.org/en-US/kb/screen-sharing-firefox".to_string(),
            },
        ],
        related_issues: vec![
            RelatedIssue {
                question: "What information is captured during screen sharing?".to_string(),
                answer: "Screen sharing captures a single screenshot of your selected window or screen. The image is processed locally in your browser for analysis. We recommend closing any windows with sensitive information before sharing.".to_string(),
            },
            RelatedIssue {
                question: "Why didn't the analysis detect my problem?".to_string(),
                answer: "Screen analysis works best for visible issues like error messages, UI glitches, or performance indicators. Intermittent problems or issues not visible on screen may require text-based description for accurate diagnosis.".to_string(),
            },
            RelatedIssue {
                question: "Can I share my screen multiple times?".to_string(),
                answer: "Yes! You can capture your screen as many times as needed. Try capturing when the problem is actively occurring for the most accurate analysis.".to_string(),
            },
        ],
        visual_guide: None,
        detected_issues: Vec::new(),
        browser_screenshot: None,
        browser_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(count: usize) -> ScreenAnalysisResult {
        ScreenAnalysisResult {
            analyzed: true,
            device_model: "MacBook".to_string(),
            timestamp: OffsetDateTime::now_utc(),
            issues: CANNED_FINDINGS[..count].to_vec(),
        }
    }

    #[tokio::test]
    async fn test_mock_analyzer_draws_one_or_two_findings() {
        let analyzer = MockAnalyzer::new();
        for _ in 0..32 {
            let result = analyzer.analyze("data:image/jpeg;base64,...", "iPad").await;
            assert!(result.analyzed);
            assert_eq!(result.device_model, "iPad");
            assert!(
                (1..=2).contains(&result.issues.len()),
                "draw size stays in 1..=2"
            );
            // Prefix selection: the first finding is always the high-confidence one.
            assert_eq!(result.issues[0].kind, "error_detected");
        }
    }

    #[test]
    fn test_compose_with_findings_interpolates_primary() {
        let result = result_with(2);
        let answer = compose_screen_analysis_answer(&result, "MacBook");

        assert!(answer.explanation.contains("MacBook"));
        assert!(answer.explanation.contains("Error Messages Detected"));
        assert!(answer.explanation.contains("3 indicators"));
        assert!(answer.explanation.contains("high confidence"));
        assert_eq!(answer.detected_issues.len(), 2);
    }

    #[test]
    fn test_compose_without_findings_uses_maintenance_variant() {
        let empty = ScreenAnalysisResult {
            analyzed: true,
            device_model: "Windows Laptop".to_string(),
            timestamp: OffsetDateTime::now_utc(),
            issues: Vec::new(),
        };
        let answer = compose_screen_analysis_answer(&empty, "Windows Laptop");

        assert!(
            answer
                .explanation
                .contains("didn't detect any obvious critical issues")
        );
        assert!(answer.detected_issues.is_empty());
        assert!(answer.steps[0].starts_with("Review running applications"));
    }
}
