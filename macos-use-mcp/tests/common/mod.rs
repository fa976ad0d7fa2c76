#![allow(dead_code)]

use async_trait::async_trait;
use macos_use_mcp::audit::AuditLogger;
use macos_use_mcp::config::Config;
use macos_use_mcp::MacosUseServer;
use macos_use_sdk::proto::*;
use macos_use_sdk::{MacosUseClient, Status};
use rmcp::model::{CallToolRequestParam, CallToolResult, RawContent};
use rmcp::service::RunningService;
use rmcp::{ErrorData, RoleClient, ServiceError, ServiceExt};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// In-process stand-in for the gRPC service. Only the RPCs the tests
/// exercise are overridden; the rest report `Unimplemented`.
#[derive(Default)]
pub struct FakeClient {
    pub elements: Mutex<Vec<Element>>,
    pub window_error: Mutex<Option<Status>>,
    pub initial_operation: Mutex<Option<Operation>>,
    pub operations: Mutex<VecDeque<Result<Operation, Status>>>,
    pub get_operation_calls: AtomicU32,
    pub shell_calls: AtomicU32,
    pub last_wait_request: Mutex<Option<WaitElementRequest>>,
    pub click_response: Mutex<ClickElementResponse>,
    pub clipboard_write: Mutex<WriteClipboardResponse>,
    pub open_dialog: Mutex<AutomateOpenFileDialogResponse>,
    pub file_selection: Mutex<SelectFileResponse>,
    pub macro_run: Mutex<ExecuteMacroResponse>,
    pub apple_script: Mutex<ExecuteAppleScriptResponse>,
    pub applications: Mutex<Vec<Application>>,
    pub displays: Mutex<Vec<Display>>,
}

impl FakeClient {
    pub fn with_elements(elements: Vec<Element>) -> Self {
        let fake = Self::default();
        *fake.elements.lock().unwrap() = elements;
        fake
    }

    pub fn start_operation(&self, operation: Operation) {
        *self.initial_operation.lock().unwrap() = Some(operation);
    }

    pub fn push_poll(&self, result: Result<Operation, Status>) {
        self.operations.lock().unwrap().push_back(result);
    }

    pub fn polls(&self) -> u32 {
        self.get_operation_calls.load(Ordering::SeqCst)
    }

    fn initial(&self) -> Operation {
        self.initial_operation
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| pending("operations/wait-1"))
    }
}

#[async_trait]
impl MacosUseClient for FakeClient {
    async fn find_elements(
        &self,
        _request: FindElementsRequest,
    ) -> Result<FindElementsResponse, Status> {
        Ok(FindElementsResponse {
            elements: self.elements.lock().unwrap().clone(),
            next_page_token: String::new(),
        })
    }

    async fn get_window(&self, request: GetWindowRequest) -> Result<Window, Status> {
        if let Some(status) = self.window_error.lock().unwrap().clone() {
            return Err(status);
        }
        Ok(Window {
            name: request.name,
            title: "Untitled".into(),
            visible: true,
            ..Default::default()
        })
    }

    async fn wait_element(&self, request: WaitElementRequest) -> Result<Operation, Status> {
        *self.last_wait_request.lock().unwrap() = Some(request);
        Ok(self.initial())
    }

    async fn wait_element_state(
        &self,
        _request: WaitElementStateRequest,
    ) -> Result<Operation, Status> {
        Ok(self.initial())
    }

    async fn get_operation(&self, request: GetOperationRequest) -> Result<Operation, Status> {
        self.get_operation_calls.fetch_add(1, Ordering::SeqCst);
        self.operations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(pending(&request.name)))
    }

    async fn click_element(
        &self,
        _request: ClickElementRequest,
    ) -> Result<ClickElementResponse, Status> {
        Ok(self.click_response.lock().unwrap().clone())
    }

    async fn write_clipboard(
        &self,
        _request: WriteClipboardRequest,
    ) -> Result<WriteClipboardResponse, Status> {
        Ok(self.clipboard_write.lock().unwrap().clone())
    }

    async fn automate_open_file_dialog(
        &self,
        _request: AutomateOpenFileDialogRequest,
    ) -> Result<AutomateOpenFileDialogResponse, Status> {
        Ok(self.open_dialog.lock().unwrap().clone())
    }

    async fn select_file(&self, _request: SelectFileRequest) -> Result<SelectFileResponse, Status> {
        Ok(self.file_selection.lock().unwrap().clone())
    }

    async fn execute_macro(
        &self,
        _request: ExecuteMacroRequest,
    ) -> Result<ExecuteMacroResponse, Status> {
        Ok(self.macro_run.lock().unwrap().clone())
    }

    async fn execute_apple_script(
        &self,
        _request: ExecuteAppleScriptRequest,
    ) -> Result<ExecuteAppleScriptResponse, Status> {
        Ok(self.apple_script.lock().unwrap().clone())
    }

    async fn list_applications(
        &self,
        _request: ListApplicationsRequest,
    ) -> Result<ListApplicationsResponse, Status> {
        Ok(ListApplicationsResponse {
            applications: self.applications.lock().unwrap().clone(),
            next_page_token: "page-2".into(),
        })
    }

    async fn list_displays(
        &self,
        _request: ListDisplaysRequest,
    ) -> Result<ListDisplaysResponse, Status> {
        Ok(ListDisplaysResponse {
            displays: self.displays.lock().unwrap().clone(),
        })
    }

    async fn execute_shell_command(
        &self,
        _request: ExecuteShellCommandRequest,
    ) -> Result<ExecuteShellCommandResponse, Status> {
        self.shell_calls.fetch_add(1, Ordering::SeqCst);
        Ok(ExecuteShellCommandResponse {
            success: true,
            stdout: "hello\n".into(),
            exit_code: 0,
            ..Default::default()
        })
    }
}

pub fn element(id: &str, role: &str, text: &str) -> Element {
    Element {
        element_id: id.into(),
        role: role.into(),
        text: Some(text.into()),
        x: Some(10.0),
        y: Some(20.0),
        width: Some(80.0),
        height: Some(24.0),
        ..Default::default()
    }
}

pub fn pending(name: &str) -> Operation {
    Operation {
        name: name.into(),
        done: false,
        ..Default::default()
    }
}

pub fn done_with_element(name: &str, element: Element) -> Operation {
    let response = WaitElementResponse {
        element: Some(element),
    };
    Operation {
        name: name.into(),
        done: true,
        result: Some(operation::Result::Response(pack_any(
            "macosusesdk.v1.WaitElementResponse",
            &response,
        ))),
        ..Default::default()
    }
}

pub fn server_with(fake: Arc<FakeClient>, config: Config) -> MacosUseServer {
    MacosUseServer::new(fake, config, AuditLogger::disabled())
}

pub type Client = RunningService<RoleClient, ()>;

/// Serves `server` over an in-memory pipe and returns an initialized client.
pub async fn connect(server: MacosUseServer) -> Client {
    let (server_io, client_io) = tokio::io::duplex(64 * 1024);
    tokio::spawn(async move {
        if let Ok(running) = server.serve(server_io).await {
            let _ = running.waiting().await;
        }
    });
    ().serve(client_io).await.unwrap()
}

/// Calls `name` with `args` (an object, or null for no arguments).
/// Protocol errors come back as `Err`; transport failures panic.
pub async fn call(client: &Client, name: &str, args: Value) -> Result<CallToolResult, ErrorData> {
    let arguments = match args {
        Value::Object(map) => Some(map),
        _ => None,
    };
    let request = CallToolRequestParam {
        name: name.to_string().into(),
        arguments,
    };
    match client.call_tool(request).await {
        Ok(result) => Ok(result),
        Err(ServiceError::McpError(err)) => Err(err),
        Err(other) => panic!("{name}: transport failure: {other}"),
    }
}

/// Concatenated text items of a result.
pub fn result_text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|content| match &content.raw {
            RawContent::Text(text) => Some(text.text.clone()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
