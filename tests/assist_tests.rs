//! Integration tests for the TechFix assistant core
//!
//! Exercises the classify -> lookup pipeline, the screen-analysis answer
//! composition, and the conversation/messenger state machines end to end.

use techfix::assist::{self, MockAnalyzer, ScreenAnalyzer, compose_screen_analysis_answer};
use techfix::session::{Conversation, Messenger, copy_solution_text};
use techfix::types::{BubbleKind, IssueCategory, MessageContent, Role};

mod classification_tests {
    use super::*;

    #[test]
    fn test_every_category_resolves_to_an_answer() {
        for category in IssueCategory::ALL {
            let answer = assist::lookup(category);
            assert!(
                !answer.explanation.is_empty(),
                "{} has an explanation",
                category.as_str()
            );
            assert!(
                !answer.steps.is_empty(),
                "{} has steps",
                category.as_str()
            );
        }
    }

    #[test]
    fn test_full_pipeline_routes_known_topics() {
        let battery = assist::answer_question("My battery drains overnight");
        assert_eq!(battery, assist::lookup(IssueCategory::Battery));

        let wifi = assist::answer_question("wifi keeps dropping");
        assert!(
            wifi.explanation
                .starts_with("WiFi connectivity issues can stem from")
        );
    }

    #[test]
    fn test_unmatched_questions_fall_back_to_general() {
        let answer = assist::answer_question("how do I check in for my flight?");
        assert_eq!(answer, assist::lookup(IssueCategory::General));
        assert!(
            answer.steps[0]
                .starts_with("For flight check-in: Visit your airline's official website")
        );
    }

    #[test]
    fn test_repeated_questions_are_deterministic() {
        let first = assist::answer_question("storage is full");
        let second = assist::answer_question("storage is full");
        assert_eq!(first, second);
    }
}

mod analysis_tests {
    use super::*;

    #[tokio::test]
    async fn test_capture_to_answer_pipeline() {
        let analyzer = MockAnalyzer::new();
        let result = analyzer
            .analyze("data:image/jpeg;base64,ZmFrZQ==", "Google Pixel 8 Pro")
            .await;
        let answer = compose_screen_analysis_answer(&result, "Google Pixel 8 Pro");

        assert!(answer.explanation.contains("Google Pixel 8 Pro"));
        assert_eq!(answer.detected_issues.len(), result.issues.len());
        assert!(answer.visual_guide.is_none());
        assert!(answer.browser_screenshot.is_none());
    }
}

mod conversation_tests {
    use super::*;

    #[test]
    fn test_exchange_appends_question_then_answer() {
        let mut conversation = Conversation::new();
        assert!(conversation.submit("my screen is cracked"));
        conversation.resolve(
            assist::answer_question("my screen is cracked").clone(),
            false,
        );

        let messages = conversation.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[1].role, Role::Assistant);
        assert!(matches!(messages[1].content, MessageContent::Answer(_)));
        assert!(messages[1].show_visual_guide);
    }

    #[test]
    fn test_demo_resolution_swaps_guide_for_screenshot_block() {
        let mut conversation = Conversation::new();
        conversation.submit("show me how to update");

        let mut answer = assist::answer_question("show me how to update").clone();
        answer.browser_screenshot = Some("data:image/png;base64,abc".to_string());
        conversation.resolve(answer, true);

        let assistant = &conversation.messages()[1];
        assert!(assistant.has_browser_demo);
        assert!(!assistant.show_visual_guide);
    }

    #[test]
    fn test_copy_payload_shape() {
        let question = "My apps keep crashing";
        let answer = assist::answer_question(question);
        let text = copy_solution_text(question, "iPhone 14", answer);

        assert!(text.starts_with(&format!("Question: {question}\n\n")));
        assert!(text.contains("Device: iPhone 14\n\n"));
        assert!(text.contains(&format!("Solution: {}", answer.explanation)));
    }
}

mod messenger_tests {
    use super::*;

    #[test]
    fn test_seeded_roster_and_transcript() {
        let messenger = Messenger::seeded();
        assert_eq!(messenger.sessions().len(), 5);
        assert!(messenger.messages_for(1).count() > 0);
        assert_eq!(messenger.messages_for(999).count(), 0);
    }

    #[test]
    fn test_send_flow_updates_roster_row() {
        let mut messenger = Messenger::seeded();
        messenger.send(1, BubbleKind::Text, "My speaker stopped working");

        let session = messenger.session(1).expect("active session exists");
        assert_eq!(session.last_message, "My speaker stopped working");
        assert_eq!(session.unread, 0);

        messenger.send(1, BubbleKind::Voice { duration_secs: 12 }, "Voice message");
        assert_eq!(messenger.session(1).unwrap().last_message, "[voice]");
    }
}
