mod common;

use common::{call, connect, done_with_element, element, pending, result_text, server_with, FakeClient};
use macos_use_mcp::config::Config;
use macos_use_mcp::poller::{OperationPoller, PollError, PollState};
use macos_use_sdk::proto::{operation, Operation};
use macos_use_sdk::Status;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

fn wait_args() -> Value {
    json!({
        "parent": "applications/501",
        "selector": {"role": "AXButton", "text": "OK"}
    })
}

#[tokio::test(start_paused = true)]
async fn test_wait_element_polls_until_done() {
    let fake = Arc::new(FakeClient::default());
    fake.push_poll(Ok(pending("operations/wait-1")));
    fake.push_poll(Ok(done_with_element(
        "operations/wait-1",
        element("el-42", "AXButton", "OK"),
    )));
    let client = connect(server_with(Arc::clone(&fake), Config::default())).await;

    let result = call(&client, "wait_element", wait_args()).await.unwrap();

    assert_eq!(result.is_error, Some(false));
    let text = result_text(&result);
    assert!(text.starts_with("Element found:"), "{text}");
    assert!(text.contains("[el-42] AXButton \"OK\""));
    assert_eq!(fake.polls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_wait_element_sends_default_wait_parameters() {
    let fake = Arc::new(FakeClient::default());
    fake.start_operation(done_with_element("operations/wait-1", element("el-1", "AXButton", "OK")));
    let client = connect(server_with(Arc::clone(&fake), Config::default())).await;

    call(&client, "wait_element", wait_args()).await.unwrap();

    let request = fake.last_wait_request.lock().unwrap().clone().unwrap();
    assert_eq!(request.timeout, 30.0);
    assert_eq!(request.poll_interval, 0.5);
    assert_eq!(request.parent, "applications/501");
    // Already done: no GetOperation round trips.
    assert_eq!(fake.polls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_wait_element_times_out_at_request_deadline() {
    let fake = Arc::new(FakeClient::default());
    let config = Config {
        request_timeout: 2,
        ..Config::default()
    };
    let client = connect(server_with(Arc::clone(&fake), config)).await;

    let started = Instant::now();
    let result = call(&client, "wait_element", wait_args()).await.unwrap();

    assert_eq!(result.is_error, Some(true));
    assert_eq!(
        result_text(&result),
        "Error in wait_element: timed out waiting for operation operations/wait-1"
    );
    assert!(started.elapsed() >= Duration::from_secs(2));
    assert!(fake.polls() >= 3);
}

#[tokio::test(start_paused = true)]
async fn test_fetch_failure_is_formatted_as_remote_error() {
    let fake = Arc::new(FakeClient::default());
    fake.push_poll(Err(Status::unavailable("connection reset")));
    let client = connect(server_with(Arc::clone(&fake), Config::default())).await;

    let result = call(&client, "wait_element", wait_args()).await.unwrap();

    assert_eq!(result.is_error, Some(true));
    let text = result_text(&result);
    assert!(
        text.starts_with("Error in wait_element: Unavailable - connection reset\nSuggestion: "),
        "{text}"
    );
    assert_eq!(fake.polls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_operation_error_is_reported() {
    let fake = Arc::new(FakeClient::default());
    fake.push_poll(Ok(Operation {
        name: "operations/wait-1".into(),
        done: true,
        result: Some(operation::Result::Error(macos_use_sdk::proto::Status {
            code: 5,
            message: "element vanished".into(),
            ..Default::default()
        })),
        ..Default::default()
    }));
    let client = connect(server_with(Arc::clone(&fake), Config::default())).await;

    let result = call(&client, "wait_element", wait_args()).await.unwrap();

    assert_eq!(result.is_error, Some(true));
    assert_eq!(
        result_text(&result),
        "Error in wait_element: operation operations/wait-1 failed: element vanished"
    );
}

#[tokio::test(start_paused = true)]
async fn test_done_without_response_is_an_error() {
    let fake = Arc::new(FakeClient::default());
    fake.push_poll(Ok(Operation {
        name: "operations/wait-1".into(),
        done: true,
        ..Default::default()
    }));
    let client = connect(server_with(Arc::clone(&fake), Config::default())).await;

    let result = call(&client, "wait_element", wait_args()).await.unwrap();

    assert_eq!(result.is_error, Some(true));
    assert!(result_text(&result).contains("completed without an element"));
}

#[tokio::test(start_paused = true)]
async fn test_wait_element_state_uses_same_poller() {
    let fake = Arc::new(FakeClient::default());
    fake.push_poll(Ok(done_with_element(
        "operations/wait-1",
        element("el-7", "AXButton", "Submit"),
    )));
    let client = connect(server_with(Arc::clone(&fake), Config::default())).await;

    let result = call(
        &client,
        "wait_element_state",
        json!({
            "parent": "applications/501",
            "element_id": "el-7",
            "condition": {"enabled": true}
        }),
    )
    .await
    .unwrap();

    assert_eq!(result.is_error, Some(false));
    assert!(result_text(&result).contains("[el-7]"));
    assert_eq!(fake.polls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_poller_tracks_state_and_attempts() {
    let fake = FakeClient::default();
    fake.push_poll(Ok(pending("operations/9")));
    fake.push_poll(Ok(pending("operations/9")));
    fake.push_poll(Ok(Operation {
        name: "operations/9".into(),
        done: true,
        ..Default::default()
    }));

    let mut poller = OperationPoller::new(&fake, Instant::now() + Duration::from_secs(10));
    assert_eq!(poller.state(), PollState::Pending);

    let started = Instant::now();
    let operation = poller.run(pending("operations/9")).await.unwrap();

    assert!(operation.done);
    assert_eq!(poller.state(), PollState::Done);
    assert_eq!(poller.polls(), 3);
    assert_eq!(started.elapsed(), Duration::from_millis(1500));
}

#[tokio::test(start_paused = true)]
async fn test_poller_stops_on_deadline() {
    let fake = FakeClient::default();
    let mut poller = OperationPoller::new(&fake, Instant::now() + Duration::from_millis(1200));

    let err = poller.run(pending("operations/slow")).await.unwrap_err();

    assert!(matches!(err, PollError::TimedOut { ref name } if name == "operations/slow"));
    assert_eq!(poller.state(), PollState::TimedOut);
    assert_eq!(poller.polls(), 2);
}
