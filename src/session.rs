//! In-memory conversation and messenger state. Nothing here survives a
//! restart; the page-session lifetime is the whole story.

use std::time::Duration;
use time::OffsetDateTime;

use crate::types::{
    AnswerRecord, BubbleKind, BubbleMessage, ChatSession, ConversationMessage, MessageContent,
    Role, Sender,
};

/// Simulated think-time before an assistant reply is appended.
pub const RESPONSE_DELAY: Duration = Duration::from_millis(1500);

/// Per-exchange state. Only one exchange is in flight at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExchangeState {
    #[default]
    Idle,
    AwaitingResponse,
}

/// Append-only log of messages for the assistant chat. Messages are
/// immutable once appended; submissions are rejected while a response is
/// pending.
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<ConversationMessage>,
    next_id: u64,
    state: ExchangeState,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the log with the question/answer pair that opened the chat, the
    /// way the chat view is entered from the troubleshoot form.
    pub fn with_opening(question: &str, answer: AnswerRecord) -> Self {
        let mut conversation = Self::new();
        conversation.push(Role::User, MessageContent::Text(question.to_string()), false);
        conversation.push(Role::Assistant, MessageContent::Answer(answer), false);
        conversation
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn state(&self) -> ExchangeState {
        self.state
    }

    pub fn is_awaiting(&self) -> bool {
        self.state == ExchangeState::AwaitingResponse
    }

    /// Append a user message and transition to `AwaitingResponse`. Returns
    /// false (and appends nothing) for blank input or while an exchange is
    /// already in flight.
    pub fn submit(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.is_awaiting() {
            return false;
        }
        self.push(Role::User, MessageContent::Text(trimmed.to_string()), false);
        self.state = ExchangeState::AwaitingResponse;
        true
    }

    /// Append the assistant's answer and return to `Idle`. Demo answers hide
    /// the visual guide and flag the browser screenshot block instead.
    pub fn resolve(&mut self, answer: AnswerRecord, has_browser_demo: bool) {
        self.push(
            Role::Assistant,
            MessageContent::Answer(answer),
            has_browser_demo,
        );
        self.state = ExchangeState::Idle;
    }

    fn push(&mut self, role: Role, content: MessageContent, has_browser_demo: bool) {
        self.next_id += 1;
        self.messages.push(ConversationMessage {
            id: self.next_id,
            role,
            created_at: OffsetDateTime::now_utc(),
            content,
            show_visual_guide: role == Role::Assistant && !has_browser_demo,
            has_browser_demo,
        });
    }
}

/// Clipboard payload for the "copy solution" action.
pub fn copy_solution_text(question: &str, device_model: &str, answer: &AnswerRecord) -> String {
    format!(
        "Question: {question}\n\nDevice: {device_model}\n\nSolution: {}",
        answer.explanation
    )
}

// ---- Messenger state ----

/// Session roster plus the shared transcript for the messenger view.
#[derive(Debug, Default)]
pub struct Messenger {
    sessions: Vec<ChatSession>,
    transcript: Vec<BubbleMessage>,
    next_id: u64,
}

impl Messenger {
    /// Demo roster and transcript, freshly timestamped relative to now.
    pub fn seeded() -> Self {
        let now = OffsetDateTime::now_utc();
        let mut messenger = Self {
            sessions: seed_sessions(now),
            transcript: Vec::new(),
            next_id: 0,
        };
        for (offset_secs, sender, kind, content) in seed_transcript() {
            messenger.next_id += 1;
            messenger.transcript.push(BubbleMessage {
                id: messenger.next_id,
                chat_id: 1,
                sender,
                kind,
                content: content.to_string(),
                sent_at: now - Duration::from_secs(offset_secs),
                read: true,
            });
        }
        messenger
    }

    pub fn sessions(&self) -> &[ChatSession] {
        &self.sessions
    }

    pub fn session(&self, chat_id: u64) -> Option<&ChatSession> {
        self.sessions.iter().find(|s| s.id == chat_id)
    }

    pub fn messages_for(&self, chat_id: u64) -> impl Iterator<Item = &BubbleMessage> {
        self.transcript.iter().filter(move |m| m.chat_id == chat_id)
    }

    /// Append an outgoing message and mutate the session row: last message
    /// (or a `[voice]`/`[image]` placeholder), activity timestamp, and an
    /// unread reset for the active chat.
    pub fn send(&mut self, chat_id: u64, kind: BubbleKind, content: &str) {
        let now = OffsetDateTime::now_utc();
        self.next_id += 1;
        self.transcript.push(BubbleMessage {
            id: self.next_id,
            chat_id,
            sender: Sender::Me,
            kind,
            content: content.to_string(),
            sent_at: now,
            read: true,
        });

        if let Some(session) = self.sessions.iter_mut().find(|s| s.id == chat_id) {
            session.last_message = match kind.placeholder() {
                Some(placeholder) => placeholder.to_string(),
                None => content.to_string(),
            };
            session.last_activity = now;
            session.unread = 0;
        }
    }
}

fn seed_sessions(now: OffsetDateTime) -> Vec<ChatSession> {
    let avatar = |seed: &str| format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}");
    vec![
        ChatSession {
            id: 1,
            name: "Tech Support".to_string(),
            avatar: avatar("tech"),
            last_message: "How can I help you today?".to_string(),
            last_activity: now,
            unread: 2,
            online: true,
        },
        ChatSession {
            id: 2,
            name: "Sarah Chen".to_string(),
            avatar: avatar("sarah"),
            last_message: "Thanks for the help!".to_string(),
            last_activity: now - Duration::from_secs(3_600),
            unread: 0,
            online: true,
        },
        ChatSession {
            id: 3,
            name: "John Smith".to_string(),
            avatar: avatar("john"),
            last_message: "[voice]".to_string(),
            last_activity: now - Duration::from_secs(7_200),
            unread: 1,
            online: false,
        },
        ChatSession {
            id: 4,
            name: "Emma Wilson".to_string(),
            avatar: avatar("emma"),
            last_message: "See you tomorrow!".to_string(),
            last_activity: now - Duration::from_secs(86_400),
            unread: 0,
            online: false,
        },
        ChatSession {
            id: 5,
            name: "Mike Johnson".to_string(),
            avatar: avatar("mike"),
            last_message: "[image]".to_string(),
            last_activity: now - Duration::from_secs(172_800),
            unread: 0,
            online: false,
        },
    ]
}

type SeedMessage = (u64, Sender, BubbleKind, &'static str);

fn seed_transcript() -> Vec<SeedMessage> {
    vec![
        (
            600,
            Sender::Peer,
            BubbleKind::Text,
            "Hello! Welcome to TechFix support. How can I help you today?",
        ),
        (
            540,
            Sender::Me,
            BubbleKind::Text,
            "Hi! My phone battery is draining really fast.",
        ),
        (
            480,
            Sender::Peer,
            BubbleKind::Text,
            "I understand that can be frustrating. Let me ask you a few questions to help diagnose the issue.",
        ),
        (
            420,
            Sender::Peer,
            BubbleKind::Voice { duration_secs: 8 },
            "Voice message",
        ),
        (
            360,
            Sender::Me,
            BubbleKind::Voice { duration_secs: 15 },
            "Voice message",
        ),
        (
            300,
            Sender::Peer,
            BubbleKind::Text,
            "Thanks for that information. Can you share a screenshot of your battery settings?",
        ),
        (
            240,
            Sender::Me,
            BubbleKind::Image,
            "https://images.unsplash.com/photo-1556656793-08538906a9f8?w=400&h=300&fit=crop",
        ),
        (
            120,
            Sender::Peer,
            BubbleKind::Text,
            "Perfect! I can see the issue. Here are some steps to fix it:\n\n1. Turn off background app refresh\n2. Reduce screen brightness\n3. Close unused apps\n\nLet me know if you need more help!",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assist;

    #[test]
    fn test_log_holds_two_messages_per_exchange() {
        let mut conversation = Conversation::new();
        for i in 0..5 {
            assert!(conversation.submit(&format!("question {i} about my battery")));
            let answer = assist::answer_question("battery").clone();
            conversation.resolve(answer, false);
        }

        let messages = conversation.messages();
        assert_eq!(messages.len(), 10);
        for pair in messages.chunks(2) {
            assert_eq!(pair[0].role, Role::User);
            assert_eq!(pair[1].role, Role::Assistant);
        }
    }

    #[test]
    fn test_log_is_chronological_with_unique_ids() {
        let mut conversation = Conversation::new();
        conversation.submit("wifi is down");
        conversation.resolve(assist::answer_question("wifi is down").clone(), false);
        conversation.submit("still down");
        conversation.resolve(assist::answer_question("still down").clone(), false);

        let messages = conversation.messages();
        for window in messages.windows(2) {
            assert!(window[0].id < window[1].id);
            assert!(window[0].created_at <= window[1].created_at);
        }
    }

    #[test]
    fn test_submit_rejected_while_awaiting() {
        let mut conversation = Conversation::new();
        assert!(conversation.submit("first question"));
        assert!(conversation.is_awaiting());
        assert!(!conversation.submit("second question while pending"));
        assert_eq!(conversation.messages().len(), 1);
    }

    #[test]
    fn test_blank_input_rejected() {
        let mut conversation = Conversation::new();
        assert!(!conversation.submit("   "));
        assert!(conversation.messages().is_empty());
        assert_eq!(conversation.state(), ExchangeState::Idle);
    }

    #[test]
    fn test_demo_answers_hide_visual_guide() {
        let mut conversation = Conversation::new();
        conversation.submit("show me how");
        conversation.resolve(AnswerRecord::text_only("demo", vec![]), true);

        let assistant = &conversation.messages()[1];
        assert!(assistant.has_browser_demo);
        assert!(!assistant.show_visual_guide);
    }

    #[test]
    fn test_copy_round_trip_contains_question_and_explanation() {
        let question = "My WiFi keeps disconnecting";
        let answer = assist::answer_question(question);
        let text = copy_solution_text(question, "Pixel 8 Pro", answer);

        assert!(text.contains(question));
        assert!(text.contains(&answer.explanation));
        assert!(text.contains("Pixel 8 Pro"));
    }

    #[test]
    fn test_messenger_send_updates_session_row() {
        let mut messenger = Messenger::seeded();
        let before = messenger.messages_for(1).count();

        messenger.send(1, BubbleKind::Text, "Is my battery dying?");

        assert_eq!(messenger.messages_for(1).count(), before + 1);
        let session = messenger.session(1).unwrap();
        assert_eq!(session.last_message, "Is my battery dying?");
        assert_eq!(session.unread, 0);
    }

    #[test]
    fn test_messenger_placeholders_for_media() {
        let mut messenger = Messenger::seeded();
        messenger.send(1, BubbleKind::Voice { duration_secs: 4 }, "Voice message");
        assert_eq!(messenger.session(1).unwrap().last_message, "[voice]");

        messenger.send(1, BubbleKind::Image, "data:image/png;base64,xyz");
        assert_eq!(messenger.session(1).unwrap().last_message, "[image]");
    }

    #[test]
    fn test_messenger_send_only_touches_target_session() {
        let mut messenger = Messenger::seeded();
        let sarah_before = messenger.session(2).unwrap().clone();
        messenger.send(1, BubbleKind::Text, "hello");
        assert_eq!(messenger.session(2).unwrap(), &sarah_before);
    }
}
