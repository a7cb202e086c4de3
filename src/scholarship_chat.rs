//! Scholarship assistant backed by a hosted chat-completion endpoint.
//!
//! Each question is sent on its own: the visible history stays local and only
//! the latest user text goes over the wire.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info, warn};

use crate::config::ChatSettings;
use crate::error::ChatError;
use crate::models::Message;
use crate::transcript::Transcript;

pub const GREETING: &str = "Hi! I'm your Scholarship AI assistant. I can help you find scholarships, understand eligibility requirements, and guide you through the application process. What would you like to know?";

pub const SYSTEM_PROMPT: &str = "You are a helpful scholarship advisor AI. Help students find scholarships, understand eligibility requirements, and provide guidance on applications. Be concise and actionable in your responses.";

pub const ERROR_REPLY: &str =
    "I'm sorry, I encountered an error. Please check your API key and try again.";

pub const EMPTY_REPLY: &str = "I'm sorry, I couldn't process your request right now.";

const TEMPERATURE: f32 = 0.2;
const TOP_P: f32 = 0.9;
const MAX_TOKENS: u32 = 1000;
const FREQUENCY_PENALTY: f32 = 1.0;
const PRESENCE_PENALTY: f32 = 0.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<WireMessage>,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
    pub return_images: bool,
    pub return_related_questions: bool,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

impl ChatRequest {
    pub fn for_question(model: &str, question: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                WireMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                WireMessage {
                    role: "user".to_string(),
                    content: question.to_string(),
                },
            ],
            temperature: TEMPERATURE,
            top_p: TOP_P,
            max_tokens: MAX_TOKENS,
            return_images: false,
            return_related_questions: false,
            frequency_penalty: FREQUENCY_PENALTY,
            presence_penalty: PRESENCE_PENALTY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    /// `null` is accepted; a missing field is not.
    #[serde(deserialize_with = "nullable")]
    pub content: Option<String>,
}

fn nullable<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Option::deserialize(deserializer)
}

impl ChatResponse {
    /// Content of the first choice, or the apology text when it is absent,
    /// null or blank.
    pub fn into_reply(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .unwrap_or_else(|| EMPTY_REPLY.to_string())
    }
}

/// One round trip to a chat-completion service.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<String, ChatError>;
}

pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(settings: &ChatSettings) -> Result<Self, ChatError> {
        let mut builder = Client::builder().timeout(settings.request_timeout);
        if is_loopback(&settings.endpoint) {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
        })
    }
}

fn is_loopback(endpoint: &str) -> bool {
    Url::parse(endpoint)
        .ok()
        .and_then(|url| url.host_str().map(str::to_owned))
        .is_some_and(|host| matches!(host.as_str(), "localhost" | "127.0.0.1" | "[::1]"))
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<String, ChatError> {
        let mut headers = HeaderMap::new();
        let auth = format!("Bearer {}", api_key.trim());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth)
                .map_err(|_| ChatError::Malformed("API key is not a valid header value".into()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let resp = self
            .client
            .post(&self.endpoint)
            .headers(headers)
            .json(request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(ChatError::Status { status, body });
        }

        let body = resp.text().await?;
        parse_reply(&body)
    }
}

pub fn parse_reply(body: &str) -> Result<String, ChatError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|err| ChatError::Malformed(err.to_string()))?;
    Ok(parsed.into_reply())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input; nothing happened.
    Ignored,
    /// No API key yet; the settings panel should be shown.
    NeedsApiKey,
    /// The assistant's reply was appended.
    Answered,
    /// The call failed and the apology was appended.
    Failed,
}

pub struct ScholarshipChat<T: ChatTransport> {
    transport: T,
    model: String,
    api_key: String,
    transcript: Transcript,
    loading: bool,
}

impl<T: ChatTransport> ScholarshipChat<T> {
    pub fn new(transport: T, model: impl Into<String>) -> Self {
        Self {
            transport,
            model: model.into(),
            api_key: String::new(),
            transcript: Transcript::new(GREETING),
            loading: false,
        }
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Sends one question. Taking `&mut self` keeps a single request in flight.
    pub async fn send(&mut self, user_text: &str) -> SendOutcome {
        if user_text.trim().is_empty() {
            return SendOutcome::Ignored;
        }
        if !self.has_api_key() {
            info!("scholarship chat needs an API key before sending");
            return SendOutcome::NeedsApiKey;
        }

        self.transcript.append(Message::user(user_text));

        let request = ChatRequest::for_question(&self.model, user_text);
        let result = {
            let _loading = Loading::start(&mut self.loading);
            self.transport.complete(&self.api_key, &request).await
        };

        let outcome = match result {
            Ok(reply) => {
                self.transcript.append(Message::ai(reply));
                SendOutcome::Answered
            }
            Err(err) => {
                warn!(error = %err, "scholarship chat request failed");
                self.transcript.append(Message::ai(ERROR_REPLY));
                SendOutcome::Failed
            }
        };
        debug!(messages = self.transcript.len(), ?outcome, "scholarship chat turn finished");
        outcome
    }
}

/// Holds the loading flag for the duration of a request, including one that
/// is dropped mid-flight.
struct Loading<'a>(&'a mut bool);

impl<'a> Loading<'a> {
    fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for Loading<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sender;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    struct FakeTransport {
        calls: Arc<AtomicUsize>,
        last_request: Arc<parking_lot::Mutex<Option<ChatRequest>>>,
        reply: fn() -> Result<String, ChatError>,
    }

    impl FakeTransport {
        fn new(reply: fn() -> Result<String, ChatError>) -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                last_request: Arc::new(parking_lot::Mutex::new(None)),
                reply,
            }
        }
    }

    #[async_trait]
    impl ChatTransport for FakeTransport {
        async fn complete(
            &self,
            _api_key: &str,
            request: &ChatRequest,
        ) -> Result<String, ChatError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock() = Some(request.clone());
            (self.reply)()
        }
    }

    fn ok_reply() -> Result<String, ChatError> {
        Ok("Try the Merit Excellence Scholarship.".to_string())
    }

    fn server_error() -> Result<String, ChatError> {
        Err(ChatError::Status {
            status: 401,
            body: "unauthorized".to_string(),
        })
    }

    #[tokio::test]
    async fn missing_key_skips_the_call() {
        let transport = FakeTransport::new(ok_reply);
        let calls = Arc::clone(&transport.calls);
        let mut chat = ScholarshipChat::new(transport, "model");

        let outcome = chat.send("Any STEM scholarships?").await;
        assert_eq!(outcome, SendOutcome::NeedsApiKey);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(chat.transcript().len(), 1);

        chat.set_api_key("   ");
        assert_eq!(
            chat.send("Any STEM scholarships?").await,
            SendOutcome::NeedsApiKey
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn successful_reply_is_appended() {
        let transport = FakeTransport::new(ok_reply);
        let calls = Arc::clone(&transport.calls);
        let mut chat = ScholarshipChat::new(transport, "model");
        chat.set_api_key("pplx-test");

        let outcome = chat.send("Any STEM scholarships?").await;
        assert_eq!(outcome, SendOutcome::Answered);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let messages = chat.transcript().messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[2].sender, Sender::Ai);
        assert_eq!(messages[2].text, "Try the Merit Excellence Scholarship.");
        assert!(!chat.is_loading());
    }

    #[tokio::test]
    async fn failure_appends_exactly_one_apology() {
        let mut chat = ScholarshipChat::new(FakeTransport::new(server_error), "model");
        chat.set_api_key("bad-key");

        let outcome = chat.send("Deadlines in April?").await;
        assert_eq!(outcome, SendOutcome::Failed);

        let transcript = chat.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.count_from(Sender::Ai), 2);
        assert_eq!(transcript.last().map(|m| m.text.as_str()), Some(ERROR_REPLY));
        assert!(!chat.is_loading());
    }

    #[tokio::test]
    async fn only_latest_question_is_sent() {
        let transport = FakeTransport::new(ok_reply);
        let last_request = Arc::clone(&transport.last_request);
        let mut chat = ScholarshipChat::new(transport, "llama-test");
        chat.set_api_key("pplx-test");

        chat.send("first question").await;
        chat.send("second question").await;

        let request = last_request.lock().clone().unwrap();
        assert_eq!(request.model, "llama-test");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[0].content, SYSTEM_PROMPT);
        assert_eq!(request.messages[1].role, "user");
        assert_eq!(request.messages[1].content, "second question");
    }

    #[test]
    fn request_body_carries_fixed_parameters() {
        let request = ChatRequest::for_question("m", "q");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["max_tokens"], 1000);
        assert_eq!(value["return_images"], false);
        assert_eq!(value["return_related_questions"], false);
        assert_eq!(value["frequency_penalty"], 1.0);
        assert_eq!(value["presence_penalty"], 0.0);
    }

    #[test]
    fn parse_reply_handles_shapes() {
        let body = r#"{"choices":[{"message":{"content":"hello"}},{"message":{"content":"ignored"}}]}"#;
        assert_eq!(parse_reply(body).unwrap(), "hello");

        assert_eq!(parse_reply(r#"{"choices":[]}"#).unwrap(), EMPTY_REPLY);
        assert_eq!(
            parse_reply(r#"{"choices":[{"message":{"content":""}}]}"#).unwrap(),
            EMPTY_REPLY
        );
        assert_eq!(
            parse_reply(r#"{"choices":[{"message":{"content":"  \n"}}]}"#).unwrap(),
            EMPTY_REPLY
        );
        assert_eq!(
            parse_reply(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap(),
            EMPTY_REPLY
        );

        assert!(matches!(
            parse_reply(r#"{"choices":[{"message":{}}]}"#),
            Err(ChatError::Malformed(_))
        ));
        assert!(matches!(parse_reply("not json"), Err(ChatError::Malformed(_))));
    }

    async fn serve_once(listener: &TcpListener, status: &str, body: &str) -> String {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&request).to_lowercase();
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|value| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if request.len() >= end + 4 + length {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    }

    #[tokio::test]
    async fn http_transport_posts_json_and_maps_status() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let mut requests = Vec::new();
            requests.push(serve_once(&listener, "401 Unauthorized", r#"{"error":"bad key"}"#).await);
            requests.push(serve_once(&listener, "401 Unauthorized", r#"{"error":"bad key"}"#).await);
            requests.push(
                serve_once(&listener, "200 OK", r#"{"choices":[{"message":{"content":"hi"}}]}"#)
                    .await,
            );
            requests
        });

        let settings = ChatSettings::default()
            .with_endpoint(Some(format!("http://{addr}/chat/completions")));
        let transport = HttpTransport::new(&settings).unwrap();

        let request = ChatRequest::for_question(&settings.model, "direct");
        match transport.complete("pplx-test", &request).await {
            Err(ChatError::Status { status, body }) => {
                assert_eq!(status, 401);
                assert!(body.contains("bad key"));
            }
            other => panic!("expected a status error, got {other:?}"),
        }

        let mut chat = ScholarshipChat::new(transport, settings.model.clone());
        chat.set_api_key("pplx-test");
        assert_eq!(chat.send("Any STEM scholarships?").await, SendOutcome::Failed);
        assert_eq!(
            chat.transcript().last().map(|m| m.text.as_str()),
            Some(ERROR_REPLY)
        );
        assert_eq!(chat.send("Any STEM scholarships?").await, SendOutcome::Answered);
        assert_eq!(chat.transcript().last().map(|m| m.text.as_str()), Some("hi"));

        let requests = server.await.unwrap();
        let first = requests[0].to_lowercase();
        assert!(first.starts_with("post /chat/completions http/1.1"));
        assert!(first.contains("authorization: bearer pplx-test"));
        assert!(first.contains("content-type: application/json"));
        assert!(requests[2].contains(r#""content":"Any STEM scholarships?""#));
        assert!(requests[2].contains(r#""max_tokens":1000"#));
    }
}
