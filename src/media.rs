//! Contracts for the device-media collaborators (screen capture and speech
//! recognition). The shipped implementations are platform stubs; the traits
//! are the seam a real backend plugs into. Acquired device resources must be
//! released on completion, error, or teardown, so the speech side exposes an
//! RAII session wrapper.

use async_trait::async_trait;
use thiserror::Error;

// ---- Screen capture ----

#[derive(Clone, Debug, PartialEq)]
pub struct CapturedFrame {
    /// Base64-encoded JPEG data URL.
    pub screenshot: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Error, PartialEq)]
pub enum CaptureError {
    #[error("Screen sharing permission denied")]
    PermissionDenied,

    #[error("Screen sharing cancelled")]
    Cancelled,

    #[error("Screen capture is not supported on this platform")]
    Unsupported,

    #[error("Failed to capture screen: {0}")]
    Failed(String),
}

#[async_trait]
pub trait ScreenCapture: Send + Sync {
    /// Acquire the display stream, grab one frame, and release the stream
    /// before returning.
    async fn capture(&self) -> Result<CapturedFrame, CaptureError>;
}

/// Stub used where no display-capture backend exists.
#[derive(Default)]
pub struct UnsupportedCapture;

#[async_trait]
impl ScreenCapture for UnsupportedCapture {
    async fn capture(&self) -> Result<CapturedFrame, CaptureError> {
        Err(CaptureError::Unsupported)
    }
}

/// One transparent pixel, enough to feed the analysis pipeline.
const SIMULATED_FRAME: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

/// Canned capture backend, enabled with the `simulated-capture` feature so
/// the analysis flow is runnable without real display access.
#[derive(Default)]
pub struct SimulatedCapture;

#[async_trait]
impl ScreenCapture for SimulatedCapture {
    async fn capture(&self) -> Result<CapturedFrame, CaptureError> {
        tokio::time::sleep(std::time::Duration::from_millis(300)).await;
        Ok(CapturedFrame {
            screenshot: SIMULATED_FRAME.to_string(),
            width: 1,
            height: 1,
        })
    }
}

// ---- Speech recognition ----

/// One increment from a streaming recognizer. `finalized` accumulates
/// committed text; `interim` is the in-flight hypothesis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    pub interim: String,
    pub finalized: String,
}

impl Transcript {
    pub fn is_final(&self) -> bool {
        !self.finalized.is_empty()
    }

    /// The best text available right now.
    pub fn best(&self) -> &str {
        if self.is_final() {
            &self.finalized
        } else {
            &self.interim
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SpeechError {
    #[error("No speech detected. Please try again.")]
    NoSpeech,

    #[error("Microphone not found or permission denied.")]
    AudioCapture,

    #[error("Microphone access denied. Please allow microphone access in your browser settings.")]
    NotAllowed,

    #[error("Network error occurred. Please check your connection.")]
    Network,

    #[error("Voice recognition was aborted.")]
    Aborted,

    #[error("Speech recognition is not supported in your browser. Please use Chrome, Edge, or Safari.")]
    Unsupported,

    #[error("Error: {0}")]
    Other(String),
}

/// Callbacks a recognizer delivers while running.
pub trait SpeechEvents: Send {
    fn on_transcript(&mut self, transcript: Transcript);
    fn on_error(&mut self, error: SpeechError);
    fn on_end(&mut self);
}

pub trait SpeechRecognizer: Send {
    /// Begin streaming recognition, delivering increments to `events` until
    /// stopped or an error ends the stream.
    fn start(&mut self, events: Box<dyn SpeechEvents>) -> Result<(), SpeechError>;

    /// Release the microphone. Must be safe to call repeatedly.
    fn stop(&mut self);
}

/// RAII wrapper: stops (and thereby releases) the recognizer when dropped,
/// so a torn-down view cannot leak a live microphone.
pub struct SpeechSession {
    recognizer: Box<dyn SpeechRecognizer>,
}

impl SpeechSession {
    pub fn start(
        mut recognizer: Box<dyn SpeechRecognizer>,
        events: Box<dyn SpeechEvents>,
    ) -> Result<Self, SpeechError> {
        recognizer.start(events)?;
        Ok(Self { recognizer })
    }

    pub fn stop(mut self) {
        self.recognizer.stop();
    }
}

impl Drop for SpeechSession {
    fn drop(&mut self) {
        self.recognizer.stop();
    }
}

/// Stub used where no speech backend exists.
#[derive(Default)]
pub struct UnsupportedSpeech;

impl SpeechRecognizer for UnsupportedSpeech {
    fn start(&mut self, _events: Box<dyn SpeechEvents>) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported)
    }

    fn stop(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

    struct CountingRecognizer {
        stops: Arc<AtomicU32>,
        started: Arc<AtomicBool>,
    }

    impl SpeechRecognizer for CountingRecognizer {
        fn start(&mut self, _events: Box<dyn SpeechEvents>) -> Result<(), SpeechError> {
            self.started.store(true, Ordering::SeqCst);
            Ok(())
        }

        fn stop(&mut self) {
            self.stops.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct NullEvents;

    impl SpeechEvents for NullEvents {
        fn on_transcript(&mut self, _transcript: Transcript) {}
        fn on_error(&mut self, _error: SpeechError) {}
        fn on_end(&mut self) {}
    }

    #[tokio::test]
    async fn test_unsupported_capture_reports_unsupported() {
        let capture = UnsupportedCapture;
        assert_eq!(capture.capture().await, Err(CaptureError::Unsupported));
    }

    #[tokio::test]
    async fn test_simulated_capture_yields_a_data_url_frame() {
        let frame = SimulatedCapture.capture().await.unwrap();
        assert!(frame.screenshot.starts_with("data:image/png;base64,"));
        assert!(frame.width > 0 && frame.height > 0);
    }

    #[test]
    fn test_unsupported_speech_names_supported_browsers() {
        let message = SpeechError::Unsupported.to_string();
        assert!(message.contains("Chrome"));
        assert!(message.contains("Safari"));
    }

    #[test]
    fn test_permission_error_is_distinct_from_generic_failure() {
        assert_ne!(
            CaptureError::PermissionDenied.to_string(),
            CaptureError::Failed("display gone".to_string()).to_string()
        );
    }

    #[test]
    fn test_session_releases_on_drop() {
        let stops = Arc::new(AtomicU32::new(0));
        let started = Arc::new(AtomicBool::new(false));
        let recognizer = CountingRecognizer {
            stops: stops.clone(),
            started: started.clone(),
        };

        let session = SpeechSession::start(Box::new(recognizer), Box::new(NullEvents)).unwrap();
        assert!(started.load(Ordering::SeqCst));
        drop(session);
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_transcript_prefers_finalized_text() {
        let transcript = Transcript {
            interim: "my batt".to_string(),
            finalized: "my battery drains fast ".to_string(),
        };
        assert!(transcript.is_final());
        assert_eq!(transcript.best(), "my battery drains fast ");
    }
}
