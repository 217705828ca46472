#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use parking_lot::Mutex;
use rakugaki_server::api::build_app;
use rakugaki_server::notification::{NotificationError, OutgoingEmail};
use rakugaki_server::{Config, InMemoryReservationStore, Mailer, NotificationService, ServerState};
use serde_json::Value;
use tower::ServiceExt;

/// Records every email it is asked to send
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<OutgoingEmail>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), NotificationError> {
        self.sent.lock().push(email);
        Ok(())
    }
}

/// Takes `delay` per email before recording it
pub struct SlowMailer {
    pub delay: Duration,
    pub sent: Mutex<Vec<OutgoingEmail>>,
}

impl SlowMailer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            sent: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Mailer for SlowMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), NotificationError> {
        tokio::time::sleep(self.delay).await;
        self.sent.lock().push(email);
        Ok(())
    }
}

/// Fails every send, counting attempts
#[derive(Default)]
pub struct FailingMailer {
    pub attempts: Mutex<usize>,
}

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: OutgoingEmail) -> Result<(), NotificationError> {
        *self.attempts.lock() += 1;
        Err(NotificationError::Transport("535 authentication failed".into()))
    }
}

pub fn test_config() -> Config {
    Config::with_overrides(std::env::temp_dir().join("rakugaki-no-static"), 0)
}

/// App without email credentials configured
pub fn app() -> Router {
    app_with_state(ServerState::new(
        test_config(),
        Arc::new(InMemoryReservationStore::new()),
        None,
    ))
}

pub fn app_with_state(state: ServerState) -> Router {
    build_app(state)
}

/// State wired to a notification worker using `mailer`
pub fn state_with_mailer(
    mailer: Arc<dyn Mailer>,
) -> (ServerState, tokio::task::JoinHandle<()>) {
    let (notifications, worker) = NotificationService::spawn(mailer, "info@rakugaki.com", 16);
    let state = ServerState::new(
        test_config(),
        Arc::new(InMemoryReservationStore::new()),
        Some(notifications),
    );
    (state, worker)
}

pub fn taro() -> Value {
    serde_json::json!({
        "name": "Taro",
        "email": "taro@example.com",
        "date": "2099-01-01",
        "time": "18:00",
        "guests": 2
    })
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.expect("router is infallible")
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = send(app, request).await;
    let status = response.status();
    (status, json_body(response).await)
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = get(app, uri).await;
    let status = response.status();
    (status, json_body(response).await)
}

pub async fn text_body(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}
