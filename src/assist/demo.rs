//! Client for the browser-automation backend used by the "show me" path.
//! Every failure here is non-fatal: callers fall back to the canned-answer
//! path and surface nothing more than a toast.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;
use crate::types::AnswerRecord;

const DEMO_TARGET_URL: &str = "https://support.google.com";

/// Phrases that route a question through the live-demonstration sub-path.
const DEMO_PHRASES: &[&str] = &["show me", "demonstrate", "can you navigate"];

pub fn wants_demonstration(question: &str) -> bool {
    let lowered = question.to_lowercase();
    DEMO_PHRASES.iter().any(|phrase| lowered.contains(phrase))
}

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("demo backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("demo backend returned {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Serialize)]
struct BrowserActionRequest<'a> {
    url: &'a str,
    action: &'a str,
    instruction: &'a str,
}

#[derive(Deserialize)]
struct BrowserActionResponse {
    data: Option<BrowserActionData>,
}

#[derive(Deserialize)]
struct BrowserActionData {
    screenshot: Option<String>,
    url: Option<String>,
}

pub struct DemoClient {
    client: reqwest::Client,
    endpoint: String,
}

impl DemoClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.demo_timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/api/browser/action", config.backend_url),
        })
    }

    /// Ask the backend to capture a live screenshot for `instruction` and
    /// wrap it in the standard answer shape.
    pub async fn demonstrate(&self, instruction: &str) -> Result<AnswerRecord, DemoError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&BrowserActionRequest {
                url: DEMO_TARGET_URL,
                action: "screenshot",
                instruction,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DemoError::Status(status));
        }

        let parsed: BrowserActionResponse = response.json().await?;
        Ok(demo_answer(parsed.data))
    }
}

fn demo_answer(data: Option<BrowserActionData>) -> AnswerRecord {
    let mut answer = AnswerRecord::text_only(
        "I've captured a live screenshot to demonstrate. Here's what you'll see when you navigate to the support page.",
        vec![
            "Open your browser and navigate to the support page".to_string(),
            "Look for the settings or help section as shown in the screenshot".to_string(),
            "Follow the visual guide to complete your task".to_string(),
        ],
    );
    if let Some(data) = data {
        answer.browser_screenshot = data.screenshot;
        answer.browser_url = data.url;
    }
    answer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_phrase_detection() {
        assert!(wants_demonstration("Can you show me how to reset it?"));
        assert!(wants_demonstration("Please DEMONSTRATE the steps"));
        assert!(wants_demonstration("can you navigate to settings"));
        assert!(!wants_demonstration("my battery drains fast"));
        assert!(!wants_demonstration(""));
    }

    #[test]
    fn test_demo_answer_carries_screenshot_payload() {
        let answer = demo_answer(Some(BrowserActionData {
            screenshot: Some("data:image/png;base64,abc".to_string()),
            url: Some("https://support.google.com/settings".to_string()),
        }));
        assert_eq!(answer.steps.len(), 3);
        assert_eq!(
            answer.browser_screenshot.as_deref(),
            Some("data:image/png;base64,abc")
        );
        assert_eq!(
            answer.browser_url.as_deref(),
            Some("https://support.google.com/settings")
        );
    }

    #[test]
    fn test_demo_answer_without_payload() {
        let answer = demo_answer(None);
        assert!(answer.browser_screenshot.is_none());
        assert!(answer.browser_url.is_none());
    }

    #[test]
    fn test_endpoint_built_from_config() {
        let client = DemoClient::new(&Config::default()).expect("client builds");
        assert_eq!(client.endpoint, "http://localhost:8001/api/browser/action");
    }
}
