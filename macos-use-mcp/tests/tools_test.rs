mod common;

use common::{call, connect, element, result_text, server_with, Client, FakeClient};
use macos_use_mcp::audit::AuditLogger;
use macos_use_mcp::config::Config;
use macos_use_mcp::MacosUseServer;
use macos_use_sdk::proto::*;
use macos_use_sdk::Status;
use serde_json::{json, Value};
use std::sync::Arc;

fn default_server(fake: Arc<FakeClient>) -> MacosUseServer {
    server_with(fake, Config::default())
}

async fn client_for(fake: Arc<FakeClient>) -> Client {
    connect(default_server(fake)).await
}

/// Asserts an `isError` result with exactly `expected` as its text.
async fn assert_tool_error(client: &Client, tool: &str, args: Value, expected: &str) {
    let result = call(client, tool, args).await.unwrap();
    assert_eq!(result.is_error, Some(true), "{tool} should report an error");
    assert_eq!(result_text(&result), expected);
}

#[tokio::test]
async fn test_find_elements_lists_every_match() {
    let fake = Arc::new(FakeClient::with_elements(vec![
        element("el-1", "AXButton", "Save"),
        element("el-2", "AXButton", "Cancel"),
    ]));
    let client = client_for(fake).await;

    let result = call(&client, "find_elements", json!({"selector": {"role": "AXButton"}}))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(false));
    let text = result_text(&result);
    assert!(text.starts_with("Found 2 elements:"), "{text}");
    assert!(text.contains("[el-1] AXButton \"Save\""));
    assert!(text.contains("[el-2] AXButton \"Cancel\""));
}

#[tokio::test]
async fn test_find_elements_without_matches_is_not_an_error() {
    let client = client_for(Arc::new(FakeClient::default())).await;

    let result = call(
        &client,
        "find_elements",
        json!({"selector": {"text_contains": "Nope"}, "parent": "applications/42"}),
    )
    .await
    .unwrap();

    assert_eq!(result.is_error, Some(false));
    assert_eq!(result_text(&result), "No elements found matching selector");
}

#[tokio::test]
async fn test_bad_selector_is_a_tool_error() {
    let client = client_for(Arc::new(FakeClient::default())).await;

    let result = call(&client, "find_elements", json!({"selector": {}}))
        .await
        .unwrap();
    assert_eq!(result.is_error, Some(true));
    assert!(result_text(&result).contains("invalid selector"));

    let result = call(&client, "find_elements", json!({"selector": {"colour": "red"}}))
        .await
        .unwrap();
    assert_eq!(result.is_error, Some(true));
    assert!(result_text(&result).starts_with("Invalid arguments for find_elements:"));
}

#[tokio::test]
async fn test_remote_error_is_formatted_with_suggestion() {
    let fake = Arc::new(FakeClient::default());
    *fake.window_error.lock().unwrap() = Some(Status::not_found("window 9"));
    let client = client_for(fake).await;

    assert_tool_error(
        &client,
        "get_window",
        json!({"name": "applications/1/windows/9"}),
        "Error in get_window: NotFound - window 9\nSuggestion: Verify the resource exists and the name/ID is correct",
    )
    .await;
}

#[tokio::test]
async fn test_unimplemented_rpc_surfaces_as_tool_error() {
    let client = client_for(Arc::new(FakeClient::default())).await;

    let result = call(&client, "get_clipboard", Value::Null).await.unwrap();

    assert_eq!(result.is_error, Some(true));
    assert!(result_text(&result).starts_with("Error in get_clipboard: Unimplemented - "));
}

#[tokio::test]
async fn test_failed_element_click_reports_remote_reason() {
    let fake = Arc::new(FakeClient::default());
    *fake.click_response.lock().unwrap() = ClickElementResponse {
        success: false,
        error: "element is disabled".into(),
        element: None,
    };
    let client = client_for(fake).await;

    assert_tool_error(
        &client,
        "click_element",
        json!({"parent": "applications/1", "element_id": "el-1"}),
        "Error in click_element: element is disabled",
    )
    .await;
}

#[tokio::test]
async fn test_rejected_clipboard_write_is_a_tool_error() {
    let fake = Arc::new(FakeClient::default());
    *fake.clipboard_write.lock().unwrap() = WriteClipboardResponse {
        success: false,
        content_type: ContentType::Text as i32,
    };
    let client = client_for(fake).await;

    assert_tool_error(
        &client,
        "write_clipboard",
        json!({"text": "hello"}),
        "Error in write_clipboard: the clipboard was not updated",
    )
    .await;
}

#[tokio::test]
async fn test_file_dialog_failures_carry_remote_reason() {
    let fake = Arc::new(FakeClient::default());
    *fake.open_dialog.lock().unwrap() = AutomateOpenFileDialogResponse {
        success: false,
        selected_paths: vec![],
        error: "no dialog is open".into(),
    };
    *fake.file_selection.lock().unwrap() = SelectFileResponse {
        success: false,
        selected_path: String::new(),
        error: String::new(),
    };
    let client = client_for(fake).await;

    assert_tool_error(
        &client,
        "automate_open_file_dialog",
        json!({"application": "applications/7", "file_path": "/tmp/a.txt"}),
        "Error in automate_open_file_dialog: no dialog is open",
    )
    .await;
    assert_tool_error(
        &client,
        "select_file",
        json!({"application": "applications/7", "file_path": "/tmp/a.txt"}),
        "Error in select_file: dialog automation failed",
    )
    .await;
}

#[tokio::test]
async fn test_file_dialog_success_lists_selection() {
    let fake = Arc::new(FakeClient::default());
    *fake.open_dialog.lock().unwrap() = AutomateOpenFileDialogResponse {
        success: true,
        selected_paths: vec!["/tmp/a.txt".into(), "/tmp/b.txt".into()],
        error: String::new(),
    };
    *fake.file_selection.lock().unwrap() = SelectFileResponse {
        success: true,
        selected_path: "/tmp/a.txt".into(),
        error: String::new(),
    };
    let client = client_for(fake).await;

    let result = call(
        &client,
        "automate_open_file_dialog",
        json!({"application": "applications/7", "allow_multiple": true}),
    )
    .await
    .unwrap();
    assert_eq!(result.is_error, Some(false));
    assert_eq!(result_text(&result), "Selected 2 file(s):\n/tmp/a.txt\n/tmp/b.txt");

    let result = call(
        &client,
        "select_file",
        json!({"application": "applications/7", "file_path": "/tmp/a.txt"}),
    )
    .await
    .unwrap();
    assert_eq!(result_text(&result), "Selected /tmp/a.txt");
}

#[tokio::test]
async fn test_failed_macro_run_reports_reason_and_progress() {
    let fake = Arc::new(FakeClient::default());
    *fake.macro_run.lock().unwrap() = ExecuteMacroResponse {
        success: false,
        actions_executed: 2,
        error: "step 3: element not found".into(),
    };
    let client = client_for(fake).await;

    assert_tool_error(
        &client,
        "execute_macro",
        json!({"name": "macros/login"}),
        "Error in execute_macro: step 3: element not found (after 2 actions)",
    )
    .await;
}

#[tokio::test]
async fn test_failed_apple_script_is_a_tool_error() {
    let fake = Arc::new(FakeClient::default());
    *fake.apple_script.lock().unwrap() = ExecuteAppleScriptResponse {
        success: false,
        output: String::new(),
        error: "Expected end of line but found identifier.".into(),
        execution_duration: None,
    };
    let client = client_for(fake).await;

    assert_tool_error(
        &client,
        "execute_apple_script",
        json!({"script": "tell app \"Finder\" to frobnicate"}),
        "Error in execute_apple_script: Expected end of line but found identifier.",
    )
    .await;
}

#[tokio::test]
async fn test_list_applications_formats_each_entry() {
    let fake = Arc::new(FakeClient::default());
    *fake.applications.lock().unwrap() = vec![
        Application {
            name: "applications/501".into(),
            pid: 501,
            display_name: "TextEdit".into(),
            bundle_id: "com.apple.TextEdit".into(),
        },
        Application {
            name: "applications/502".into(),
            pid: 502,
            ..Default::default()
        },
    ];
    let client = client_for(fake).await;

    let result = call(&client, "list_applications", json!({"page_size": 2}))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(false));
    assert_eq!(
        result_text(&result),
        "Found 2 applications:\n\
         applications/501: TextEdit (pid 501) [com.apple.TextEdit]\n\
         applications/502: (unnamed) (pid 502)\n\n\
         Next page token: page-2"
    );
}

#[tokio::test]
async fn test_list_displays_marks_the_main_display() {
    let fake = Arc::new(FakeClient::default());
    *fake.displays.lock().unwrap() = vec![Display {
        name: "displays/1".into(),
        display_id: 1,
        frame: Some(Bounds {
            x: 0.0,
            y: 0.0,
            width: 1440.0,
            height: 900.0,
        }),
        visible_frame: Some(Bounds {
            x: 0.0,
            y: 25.0,
            width: 1440.0,
            height: 875.0,
        }),
        is_main: true,
        scale: 2.0,
    }];
    let client = client_for(fake).await;

    let result = call(&client, "list_displays", Value::Null).await.unwrap();

    assert_eq!(result.is_error, Some(false));
    assert_eq!(
        result_text(&result),
        "Found 1 displays:\n\
         displays/1 (id 1): frame (0, 0) 1440x900, visible (0, 25) 1440x875, scale 2 [main]"
    );
}

#[tokio::test]
async fn test_shell_commands_refused_when_disabled() {
    let fake = Arc::new(FakeClient::default());
    let client = client_for(Arc::clone(&fake)).await;

    let result = call(&client, "execute_shell_command", json!({"command": "ls"}))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(true));
    assert!(result_text(&result).contains("disabled"));
    assert_eq!(fake.shell_calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_shell_commands_run_when_enabled() {
    let fake = Arc::new(FakeClient::default());
    let config = Config {
        shell_commands_enabled: true,
        ..Config::default()
    };
    let client = connect(server_with(Arc::clone(&fake), config)).await;

    let result = call(
        &client,
        "execute_shell_command",
        json!({"command": "echo", "args": ["hello"]}),
    )
    .await
    .unwrap();

    assert_eq!(result.is_error, Some(false));
    let text = result_text(&result);
    assert!(text.starts_with("Exit code: 0"));
    assert!(text.contains("hello"));
    assert_eq!(fake.shell_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_schema_violation_is_invalid_params() {
    let client = client_for(Arc::new(FakeClient::default())).await;

    let err = call(&client, "get_window", json!({})).await.unwrap_err();
    assert_eq!(err.code.0, -32602);
    assert_eq!(err.message, "missing required field: name");
    assert_eq!(err.data, Some(json!({"tool": "get_window"})));

    let err = call(&client, "click", json!({"x": 1, "y": 2, "button": "thumb"}))
        .await
        .unwrap_err();
    assert_eq!(err.message, "field button must be one of: left, right, middle");

    let err = call(&client, "list_windows", json!({"page_size": "ten"}))
        .await
        .unwrap_err();
    assert_eq!(err.message, "field page_size must be of type integer");
}

#[tokio::test]
async fn test_unknown_tool_is_invalid_params() {
    let client = client_for(Arc::new(FakeClient::default())).await;

    let err = call(&client, "launch_rocket", json!({})).await.unwrap_err();

    assert_eq!(err.code.0, -32602);
    assert_eq!(err.message, "Unknown tool: launch_rocket");
}

#[tokio::test]
async fn test_calls_are_audited_with_status() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audit.jsonl");
    let audit = AuditLogger::new(Some(&path)).unwrap();
    let server = MacosUseServer::new(Arc::new(FakeClient::default()), Config::default(), audit);
    let client = connect(server.clone()).await;

    call(&client, "find_elements", json!({"selector": {"role": "AXButton"}}))
        .await
        .unwrap();
    let _ = call(&client, "get_window", json!({})).await;
    call(
        &client,
        "execute_shell_command",
        json!({"command": "ls", "api_key": "k"}),
    )
    .await
    .unwrap();
    server.audit().close();

    let lines: Vec<Value> = std::fs::read_to_string(&path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let statuses: Vec<&str> = lines.iter().map(|l| l["status"].as_str().unwrap()).collect();
    assert_eq!(statuses, ["success", "invalid_params", "error"]);
    assert!(lines[2]["arguments"].as_str().unwrap().contains("[REDACTED]"));
}

#[tokio::test]
async fn test_every_listed_tool_dispatches() {
    let server = default_server(Arc::new(FakeClient::default()));
    let names: Vec<String> = server.registry().iter().map(|t| t.name.clone()).collect();
    let client = connect(server).await;

    // Calls without arguments either fail validation or reach a handler.
    for name in names {
        if let Err(err) = call(&client, &name, Value::Null).await {
            assert_eq!(err.code.0, -32602, "{name}: {}", err.message);
            assert!(
                !err.message.starts_with("Unknown tool"),
                "{name} is listed but not routed"
            );
        }
    }
}

#[tokio::test]
async fn test_listed_tools_match_the_registry() {
    let server = default_server(Arc::new(FakeClient::default()));
    let registry_names: Vec<String> = server.registry().iter().map(|t| t.name.clone()).collect();
    let client = connect(server).await;

    let tools = client.list_all_tools().await.unwrap();
    let listed: Vec<String> = tools.iter().map(|t| t.name.to_string()).collect();
    assert_eq!(listed, registry_names);
    let click = tools.iter().find(|t| t.name == "click").unwrap();
    assert_eq!(
        click.input_schema.get("type").and_then(Value::as_str),
        Some("object")
    );
}

#[test]
fn test_catalog_has_every_tool_once() {
    let server = default_server(Arc::new(FakeClient::default()));
    let registry = server.registry();

    assert_eq!(registry.len(), 74);
    let mut names: Vec<&str> = registry.iter().map(|t| t.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 74);
    for name in ["capture_screenshot", "wait_element_state", "execute_macro", "drag_files"] {
        assert!(registry.contains(name), "{name} missing");
    }
}
