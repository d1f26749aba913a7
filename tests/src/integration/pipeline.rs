//! Full pipeline scenarios over a locally-registered route.
//!
//! These build their own registries rather than reusing the runtime's
//! wiring, so the scenarios control exactly which variants and handlers
//! exist.

#![cfg(test)]

use std::any::Any;
use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use signet_message::{
    error_kind, AppIdentity, InboundEnvelope, Message, MessageRegistryBuilder, OutboundResponse,
    SenderMeta, ValidationError,
};
use signet_router::{
    ApprovalGate, Handler, HandlerFailure, HandlerRegistryBuilder, MessagePipeline,
};
use uuid::Uuid;

thread_local! {
    /// How often a `GetKeyMsg` approval predicate ran on this test's thread.
    static APPROVE_CALLS: Cell<usize> = const { Cell::new(0) };
}

const APP_ID: &str = "abcdefghijklmnop";

#[derive(Debug, Deserialize)]
struct GetKeyMsg {}

impl Message for GetKeyMsg {
    fn route(&self) -> &'static str {
        "keyring"
    }
    fn msg_type(&self) -> &'static str {
        "get-key"
    }
    fn validate_basic(&self) -> Result<(), ValidationError> {
        Ok(())
    }
    fn approve_external(&self, sender: &SenderMeta, app: &AppIdentity) -> bool {
        APPROVE_CALLS.with(|calls| calls.set(calls.get() + 1));
        let Some(origin) = sender.origin() else {
            return false;
        };
        origin == app.origin() && sender.application_id == app.application_id
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Deserialize)]
struct RenameMsg {
    name: String,
}

impl Message for RenameMsg {
    fn route(&self) -> &'static str {
        "keyring"
    }
    fn msg_type(&self) -> &'static str {
        "rename"
    }
    fn validate_basic(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::new("name must not be empty"));
        }
        Ok(())
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Registered under a route that has no handler.
#[derive(Debug, Deserialize)]
struct OrphanMsg {}

impl Message for OrphanMsg {
    fn route(&self) -> &'static str {
        "orphan"
    }
    fn msg_type(&self) -> &'static str {
        "noop"
    }
    fn validate_basic(&self) -> Result<(), ValidationError> {
        Ok(())
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct NoopKeyHandler {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl Handler for NoopKeyHandler {
    async fn handle(&self, _msg: &dyn Message) -> Result<serde_json::Value, HandlerFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(json!({"key": "abc"}))
    }
}

fn build_pipeline() -> (MessagePipeline, Arc<AtomicUsize>) {
    let mut messages = MessageRegistryBuilder::new();
    messages.register_json::<GetKeyMsg>("keyring", "get-key").unwrap();
    messages.register_json::<RenameMsg>("keyring", "rename").unwrap();
    messages.register_json::<OrphanMsg>("orphan", "noop").unwrap();

    let calls = Arc::new(AtomicUsize::new(0));
    let mut handlers = HandlerRegistryBuilder::new();
    handlers
        .register(
            "keyring",
            Arc::new(NoopKeyHandler {
                calls: calls.clone(),
            }),
        )
        .unwrap();

    let gate = ApprovalGate::new(AppIdentity::new("chrome-extension", APP_ID));
    (
        MessagePipeline::new(Arc::new(messages.build()), gate, Arc::new(handlers.build())),
        calls,
    )
}

fn envelope(route: &str, msg_type: &str, payload: serde_json::Value, origin: &str) -> InboundEnvelope {
    InboundEnvelope {
        request_id: Uuid::new_v4(),
        route: route.to_string(),
        msg_type: msg_type.to_string(),
        payload,
        sender: SenderMeta {
            origin_url: Some(origin.to_string()),
            application_id: APP_ID.to_string(),
        },
    }
}

fn own_origin() -> String {
    format!("chrome-extension://{APP_ID}/popup.html")
}

#[tokio::test]
async fn own_origin_get_key_completes_with_one_invocation() {
    let (pipeline, calls) = build_pipeline();
    let response = pipeline
        .process(envelope("keyring", "get-key", json!({}), &own_origin()))
        .await;

    match response {
        OutboundResponse::Result { result, .. } => assert_eq!(result, json!({"key": "abc"})),
        OutboundResponse::Failure {
            error_kind,
            message,
            ..
        } => panic!("expected success, got {error_kind}: {message}"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn foreign_origin_is_rejected_before_any_handler_runs() {
    let (pipeline, calls) = build_pipeline();
    let response = pipeline
        .process(envelope(
            "keyring",
            "get-key",
            json!({}),
            "https://evil.example",
        ))
        .await;

    assert_eq!(response.error_kind(), Some(error_kind::NOT_PERMITTED));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unknown_discriminant_fails_before_the_gate() {
    let (pipeline, calls) = build_pipeline();
    let before = APPROVE_CALLS.with(Cell::get);

    let response = pipeline
        .process(envelope(
            "keyring",
            "does-not-exist",
            json!({}),
            &own_origin(),
        ))
        .await;

    assert_eq!(response.error_kind(), Some(error_kind::UNKNOWN_MESSAGE));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    // Deserialization failed, so no approval predicate ever ran.
    assert_eq!(APPROVE_CALLS.with(Cell::get), before);
}

#[tokio::test]
async fn validation_failure_reports_reason_and_skips_handler() {
    let (pipeline, calls) = build_pipeline();
    let response = pipeline
        .process(envelope(
            "keyring",
            "rename",
            json!({"name": ""}),
            &own_origin(),
        ))
        .await;

    assert_eq!(response.error_kind(), Some(error_kind::VALIDATION));
    match &response {
        OutboundResponse::Failure { message, .. } => {
            assert!(message.contains("name must not be empty"));
        }
        OutboundResponse::Result { .. } => panic!("expected failure"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unknown_route_is_indistinguishable_from_gate_rejection() {
    let (pipeline, _) = build_pipeline();

    // Approved and validated, but no handler serves "orphan".
    let missing_route = pipeline
        .process(envelope("orphan", "noop", json!({}), &own_origin()))
        .await;

    // Same registrations, rejected by the gate instead.
    let denied = pipeline
        .process(envelope(
            "keyring",
            "get-key",
            json!({}),
            "https://evil.example",
        ))
        .await;

    assert_eq!(missing_route.error_kind(), denied.error_kind());
    let (OutboundResponse::Failure { message: a, .. }, OutboundResponse::Failure { message: b, .. }) =
        (&missing_route, &denied)
    else {
        panic!("expected two failures");
    };
    assert_eq!(a, b);
}

#[tokio::test]
async fn malformed_payload_is_classified_distinctly() {
    let (pipeline, calls) = build_pipeline();
    let response = pipeline
        .process(envelope(
            "keyring",
            "rename",
            json!({"unexpected": 1}),
            &own_origin(),
        ))
        .await;

    assert_eq!(response.error_kind(), Some(error_kind::MALFORMED_PAYLOAD));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn concurrent_messages_are_independent() {
    let (pipeline, calls) = build_pipeline();
    let pipeline = Arc::new(pipeline);

    let mut joins = Vec::new();
    for i in 0..32 {
        let pipeline = pipeline.clone();
        let origin = if i % 2 == 0 {
            own_origin()
        } else {
            "https://evil.example".to_string()
        };
        joins.push(tokio::spawn(async move {
            pipeline
                .process(envelope("keyring", "get-key", json!({}), &origin))
                .await
        }));
    }

    let mut completed = 0;
    let mut rejected = 0;
    for join in joins {
        match join.await.unwrap() {
            OutboundResponse::Result { .. } => completed += 1,
            OutboundResponse::Failure { .. } => rejected += 1,
        }
    }
    assert_eq!(completed, 16);
    assert_eq!(rejected, 16);
    assert_eq!(calls.load(Ordering::SeqCst), 16);
}
