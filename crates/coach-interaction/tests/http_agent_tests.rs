use std::sync::Arc;

use coach_core::Intent;
use coach_core::conversation::ConversationState;
use coach_core::credit::CreditLedger;
use coach_interaction::{
    AgentRequest, CoachAgent, HttpCoachAgent, InteractionController, InteractionEvent,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Serves exactly one HTTP response and hands back the raw request.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/api/v1", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            if request_complete(&raw) {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&raw).into_owned()
    });

    (base_url, handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..header_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    raw.len() >= header_end + 4 + content_length
}

fn request(message: &str) -> AgentRequest {
    AgentRequest {
        conversation_id: "local-1".into(),
        message: message.into(),
    }
}

#[tokio::test]
async fn test_reply_is_parsed_and_classified_from_agent_type() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"message":"Here is your plan","agent_type":"Revenue Tracking","conversation_id":"srv-9","credits_used":1}"#,
    )
    .await;

    let agent = HttpCoachAgent::new(&base_url);
    let reply = agent.respond(request("grow my revenue")).await.unwrap();

    assert_eq!(reply.content, "Here is your plan");
    assert_eq!(reply.intent, Intent::MonetizationStrategy);
    assert_eq!(reply.conversation_id.as_deref(), Some("srv-9"));

    let raw = server.await.unwrap();
    assert!(raw.starts_with("POST /api/v1/chat/message"));
    assert!(raw.contains(r#""message":"grow my revenue""#));
    assert!(raw.contains(r#""conversation_id":"local-1""#));
}

#[tokio::test]
async fn test_error_detail_is_surfaced() {
    let (base_url, server) =
        serve_once("422 Unprocessable Entity", r#"{"detail":"Message too long"}"#).await;

    let err = HttpCoachAgent::new(&base_url)
        .respond(request("hi"))
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.user_message(), "Message too long");
    server.await.unwrap();
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = HttpCoachAgent::new(format!("http://{addr}"))
        .respond(request("hi"))
        .await
        .unwrap_err();

    assert!(err.is_transport());
}

#[tokio::test]
async fn test_controller_adopts_backend_conversation_id() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"content":"Welcome back","agentType":"AI Coach","conversation_id":"srv-42"}"#,
    )
    .await;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let controller = InteractionController::new(
        ConversationState::with_id("local-1"),
        Arc::new(CreditLedger::new(5).unwrap()),
        Arc::new(HttpCoachAgent::new(&base_url)),
    )
    .with_event_sender(tx);

    controller.submit("hello").unwrap();
    controller.wait_idle().await;
    server.await.unwrap();

    assert_eq!(controller.conversation_id(), "srv-42");
    let messages = controller.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].intent, Some(Intent::Router));
    assert_eq!(controller.ledger().remaining(), 4);

    let mut saw_credit_change = false;
    while let Ok(event) = rx.try_recv() {
        if event == (InteractionEvent::CreditsChanged { remaining: 4 }) {
            saw_credit_change = true;
        }
    }
    assert!(saw_credit_change);
}

#[tokio::test]
async fn test_backend_validation_list_is_surfaced() {
    let (base_url, server) = serve_once(
        "422 Unprocessable Entity",
        r#"{"detail":[{"type":"string_too_long","loc":["body","message"],"msg":"String should have at most 10000 characters"}]}"#,
    )
    .await;

    let err = HttpCoachAgent::new(&base_url)
        .respond(request("hi"))
        .await
        .unwrap_err();

    assert_eq!(
        err.user_message(),
        "String should have at most 10000 characters"
    );
    server.await.unwrap();
}

#[tokio::test]
async fn test_reported_charge_does_not_change_local_spend() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"message":"Here is a content calendar","agent_type":"Content Creation","credits_used":3}"#,
    )
    .await;

    let controller = InteractionController::new(
        ConversationState::with_id("local-1"),
        Arc::new(CreditLedger::new(5).unwrap()),
        Arc::new(HttpCoachAgent::new(&base_url)),
    );

    controller.submit("plan my posts").unwrap();
    controller.wait_idle().await;
    server.await.unwrap();

    assert_eq!(controller.messages().len(), 2);
    assert_eq!(controller.ledger().remaining(), 4);
}
