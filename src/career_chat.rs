//! Scripted career advisor.
//!
//! Replies are picked by keyword and appended after a short artificial delay.
//! Dropping the session cancels any reply that has not landed yet.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::PortalError;
use crate::models::Message;
use crate::transcript::Transcript;

pub const GREETING: &str = "Hello! I'm your AI Career Advisor. I'm here to help you discover career paths that align with your interests, skills, and goals. What would you like to explore today?";

pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "What career options are available in technology?",
    "I'm interested in healthcare. What should I study?",
    "What skills do I need for a career in finance?",
    "Tell me about creative career paths",
    "What are the highest paying careers right now?",
];

pub const TECHNOLOGY_REPLY: &str = "Great choice! Technology offers diverse career paths:\n\n• Software Development - Build applications and systems\n• Data Science - Analyze data to drive decisions\n• Cybersecurity - Protect digital assets\n• AI/ML Engineering - Create intelligent systems\n• UX/UI Design - Design user experiences\n\nEach path has different educational requirements. Which area interests you most?";

pub const HEALTHCARE_REPLY: &str = "Healthcare is a rewarding field with many opportunities:\n\n• Medicine (MBBS) - Become a doctor\n• Nursing - Direct patient care\n• Pharmacy - Medication expertise\n• Physiotherapy - Rehabilitation therapy\n• Medical Research - Advance medical knowledge\n\nMost healthcare careers require specific degrees and licensing. What aspect of healthcare appeals to you?";

pub const FINANCE_REPLY: &str = "Finance offers excellent career prospects:\n\n• Investment Banking - Deal with mergers and acquisitions\n• Financial Planning - Help clients manage wealth\n• Accounting - Manage financial records\n• Risk Management - Assess and mitigate risks\n• Corporate Finance - Manage company finances\n\nKey skills include analytical thinking, attention to detail, and strong math abilities. Would you like to know about specific educational paths?";

pub const FALLBACK_REPLY: &str = "That's an interesting question! Based on your interests, I'd recommend exploring these steps:\n\n1. Assess your strengths and interests\n2. Research educational requirements\n3. Look into job market trends\n4. Consider speaking with professionals in the field\n5. Explore internship opportunities\n\nWould you like me to help you dive deeper into any specific area?";

/// Checked in order; the first branch with a matching keyword wins.
const BRANCHES: &[(&[&str], &str)] = &[
    (&["technology", "tech"], TECHNOLOGY_REPLY),
    (&["healthcare", "medical"], HEALTHCARE_REPLY),
    (&["finance", "banking"], FINANCE_REPLY),
];

pub fn respond(user_text: &str) -> &'static str {
    let text = user_text.to_lowercase();
    BRANCHES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK_REPLY)
}

#[derive(Debug)]
struct ChatState {
    transcript: Transcript,
    pending: Option<CancellationToken>,
}

pub struct CareerChat {
    state: Arc<Mutex<ChatState>>,
    replied: Arc<Notify>,
    teardown: CancellationToken,
    reply_delay: Duration,
}

impl CareerChat {
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(ChatState {
                transcript: Transcript::new(GREETING),
                pending: None,
            })),
            replied: Arc::new(Notify::new()),
            teardown: CancellationToken::new(),
            reply_delay,
        }
    }

    /// Appends the user's message and schedules the canned reply.
    ///
    /// Returns `Ok(false)` for blank input. Must be called inside a Tokio
    /// runtime.
    pub fn send(&self, user_text: &str) -> Result<bool, PortalError> {
        if user_text.trim().is_empty() {
            return Ok(false);
        }

        let token = self.teardown.child_token();
        {
            let mut state = self.state.lock();
            if state.pending.is_some() {
                return Err(PortalError::Busy);
            }
            state.transcript.append(Message::user(user_text));
            state.pending = Some(token.clone());
        }

        let reply = respond(user_text);
        let state = Arc::clone(&self.state);
        let replied = Arc::clone(&self.replied);
        let delay = self.reply_delay;

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("career reply cancelled before delivery");
                }
                _ = tokio::time::sleep(delay) => {
                    let mut state = state.lock();
                    if token.is_cancelled() {
                        return;
                    }
                    state.transcript.append(Message::ai(reply));
                    state.pending = None;
                    drop(state);
                    replied.notify_waiters();
                }
            }
        });

        Ok(true)
    }

    pub fn is_composing(&self) -> bool {
        self.state.lock().pending.is_some()
    }

    /// Resolves once no reply is pending.
    pub async fn wait_for_reply(&self) {
        loop {
            let notified = self.replied.notified();
            if !self.is_composing() {
                return;
            }
            notified.await;
        }
    }

    pub fn transcript(&self) -> Transcript {
        self.state.lock().transcript.clone()
    }

    /// Drops any pending reply and returns to the greeting.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        if let Some(token) = state.pending.take() {
            token.cancel();
        }
        state.transcript.reset();
        drop(state);
        self.replied.notify_waiters();
    }
}

impl Drop for CareerChat {
    fn drop(&mut self) {
        let _state = self.state.lock();
        self.teardown.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sender;

    #[test]
    fn technology_keywords_pick_technology_reply() {
        assert_eq!(
            respond("What career options are available in technology?"),
            TECHNOLOGY_REPLY
        );
        assert_eq!(respond("I LOVE TECH"), TECHNOLOGY_REPLY);
    }

    #[test]
    fn branch_priority_is_fixed() {
        assert_eq!(respond("medical technology"), TECHNOLOGY_REPLY);
        assert_eq!(respond("banking for healthcare"), HEALTHCARE_REPLY);
        assert_eq!(respond("Finance and Banking"), FINANCE_REPLY);
    }

    #[test]
    fn unmatched_input_falls_back() {
        assert_eq!(respond("Tell me about creative career paths"), FALLBACK_REPLY);
        assert_eq!(respond(""), FALLBACK_REPLY);
    }

    #[tokio::test(start_paused = true)]
    async fn reply_lands_after_delay() {
        let chat = CareerChat::new(Duration::from_millis(1500));
        assert!(chat.send("I'm interested in healthcare").unwrap());

        let transcript = chat.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.last().map(|m| m.sender), Some(Sender::User));
        assert!(chat.is_composing());

        chat.wait_for_reply().await;

        let transcript = chat.transcript();
        assert_eq!(transcript.len(), 3);
        let last = transcript.last().unwrap();
        assert_eq!(last.sender, Sender::Ai);
        assert_eq!(last.text, HEALTHCARE_REPLY);
        assert!(!chat.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn blank_input_is_ignored() {
        let chat = CareerChat::new(Duration::from_millis(1500));
        assert!(!chat.send("   ").unwrap());
        assert_eq!(chat.transcript().len(), 1);
        assert!(!chat.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn second_send_while_composing_is_rejected() {
        let chat = CareerChat::new(Duration::from_millis(1500));
        chat.send("tech").unwrap();
        assert_eq!(chat.send("finance"), Err(PortalError::Busy));
        assert_eq!(chat.transcript().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_cancels_pending_reply() {
        let chat = CareerChat::new(Duration::from_millis(1500));
        chat.send("tech").unwrap();
        let state = Arc::clone(&chat.state);
        drop(chat);

        tokio::time::sleep(Duration::from_millis(5000)).await;

        let state = state.lock();
        assert_eq!(state.transcript.len(), 2);
        assert_eq!(state.transcript.last().map(|m| m.sender), Some(Sender::User));
    }

    #[tokio::test(start_paused = true)]
    async fn reset_discards_pending_reply() {
        let chat = CareerChat::new(Duration::from_millis(1500));
        chat.send("finance").unwrap();
        chat.reset();
        assert!(!chat.is_composing());

        tokio::time::sleep(Duration::from_millis(5000)).await;
        let transcript = chat.transcript();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.last().map(|m| m.text.as_str()), Some(GREETING));
    }
}
