use crate::error::SdkError;
use crate::proto::*;
use async_trait::async_trait;
use std::time::Duration;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};
use tonic::Status;
use tracing::debug;

/// Expands `$callback!` with the full RPC table: method, gRPC path, request and response.
macro_rules! for_each_rpc {
    ($callback:ident) => {
        $callback! {
            // Screenshots
            capture_screenshot, "/macosusesdk.v1.MacosUse/CaptureScreenshot", CaptureScreenshotRequest, CaptureScreenshotResponse;
            capture_window_screenshot, "/macosusesdk.v1.MacosUse/CaptureWindowScreenshot", CaptureWindowScreenshotRequest, CaptureWindowScreenshotResponse;
            capture_region_screenshot, "/macosusesdk.v1.MacosUse/CaptureRegionScreenshot", CaptureRegionScreenshotRequest, CaptureRegionScreenshotResponse;
            capture_element_screenshot, "/macosusesdk.v1.MacosUse/CaptureElementScreenshot", CaptureElementScreenshotRequest, CaptureElementScreenshotResponse;
            // Input
            create_input, "/macosusesdk.v1.MacosUse/CreateInput", CreateInputRequest, Input;
            get_input, "/macosusesdk.v1.MacosUse/GetInput", GetInputRequest, Input;
            list_inputs, "/macosusesdk.v1.MacosUse/ListInputs", ListInputsRequest, ListInputsResponse;
            // Elements
            find_elements, "/macosusesdk.v1.MacosUse/FindElements", FindElementsRequest, FindElementsResponse;
            find_region_elements, "/macosusesdk.v1.MacosUse/FindRegionElements", FindRegionElementsRequest, FindRegionElementsResponse;
            get_element, "/macosusesdk.v1.MacosUse/GetElement", GetElementRequest, Element;
            click_element, "/macosusesdk.v1.MacosUse/ClickElement", ClickElementRequest, ClickElementResponse;
            write_element_value, "/macosusesdk.v1.MacosUse/WriteElementValue", WriteElementValueRequest, WriteElementValueResponse;
            perform_element_action, "/macosusesdk.v1.MacosUse/PerformElementAction", PerformElementActionRequest, PerformElementActionResponse;
            get_element_actions, "/macosusesdk.v1.MacosUse/GetElementActions", GetElementActionsRequest, ElementActions;
            traverse_accessibility, "/macosusesdk.v1.MacosUse/TraverseAccessibility", TraverseAccessibilityRequest, TraverseAccessibilityResponse;
            wait_element, "/macosusesdk.v1.MacosUse/WaitElement", WaitElementRequest, Operation;
            wait_element_state, "/macosusesdk.v1.MacosUse/WaitElementState", WaitElementStateRequest, Operation;
            // Windows and displays
            list_windows, "/macosusesdk.v1.MacosUse/ListWindows", ListWindowsRequest, ListWindowsResponse;
            get_window, "/macosusesdk.v1.MacosUse/GetWindow", GetWindowRequest, Window;
            focus_window, "/macosusesdk.v1.MacosUse/FocusWindow", FocusWindowRequest, Window;
            move_window, "/macosusesdk.v1.MacosUse/MoveWindow", MoveWindowRequest, Window;
            resize_window, "/macosusesdk.v1.MacosUse/ResizeWindow", ResizeWindowRequest, Window;
            minimize_window, "/macosusesdk.v1.MacosUse/MinimizeWindow", MinimizeWindowRequest, Window;
            restore_window, "/macosusesdk.v1.MacosUse/RestoreWindow", RestoreWindowRequest, Window;
            close_window, "/macosusesdk.v1.MacosUse/CloseWindow", CloseWindowRequest, CloseWindowResponse;
            get_window_state, "/macosusesdk.v1.MacosUse/GetWindowState", GetWindowStateRequest, WindowState;
            list_displays, "/macosusesdk.v1.MacosUse/ListDisplays", ListDisplaysRequest, ListDisplaysResponse;
            get_display, "/macosusesdk.v1.MacosUse/GetDisplay", GetDisplayRequest, Display;
            capture_cursor_position, "/macosusesdk.v1.MacosUse/CaptureCursorPosition", CaptureCursorPositionRequest, CaptureCursorPositionResponse;
            // Clipboard
            get_clipboard, "/macosusesdk.v1.MacosUse/GetClipboard", GetClipboardRequest, Clipboard;
            write_clipboard, "/macosusesdk.v1.MacosUse/WriteClipboard", WriteClipboardRequest, WriteClipboardResponse;
            clear_clipboard, "/macosusesdk.v1.MacosUse/ClearClipboard", ClearClipboardRequest, ClearClipboardResponse;
            get_clipboard_history, "/macosusesdk.v1.MacosUse/GetClipboardHistory", GetClipboardHistoryRequest, ClipboardHistory;
            // Applications
            open_application, "/macosusesdk.v1.MacosUse/OpenApplication", OpenApplicationRequest, OpenApplicationResponse;
            list_applications, "/macosusesdk.v1.MacosUse/ListApplications", ListApplicationsRequest, ListApplicationsResponse;
            get_application, "/macosusesdk.v1.MacosUse/GetApplication", GetApplicationRequest, Application;
            delete_application, "/macosusesdk.v1.MacosUse/DeleteApplication", DeleteApplicationRequest, ();
            // Scripting
            execute_apple_script, "/macosusesdk.v1.MacosUse/ExecuteAppleScript", ExecuteAppleScriptRequest, ExecuteAppleScriptResponse;
            execute_javascript, "/macosusesdk.v1.MacosUse/ExecuteJavaScript", ExecuteJavaScriptRequest, ExecuteJavaScriptResponse;
            execute_shell_command, "/macosusesdk.v1.MacosUse/ExecuteShellCommand", ExecuteShellCommandRequest, ExecuteShellCommandResponse;
            validate_script, "/macosusesdk.v1.MacosUse/ValidateScript", ValidateScriptRequest, ValidateScriptResponse;
            get_scripting_dictionaries, "/macosusesdk.v1.MacosUse/GetScriptingDictionaries", GetScriptingDictionariesRequest, ScriptingDictionaries;
            // Observations
            create_observation, "/macosusesdk.v1.MacosUse/CreateObservation", CreateObservationRequest, Observation;
            get_observation, "/macosusesdk.v1.MacosUse/GetObservation", GetObservationRequest, Observation;
            list_observations, "/macosusesdk.v1.MacosUse/ListObservations", ListObservationsRequest, ListObservationsResponse;
            cancel_observation, "/macosusesdk.v1.MacosUse/CancelObservation", CancelObservationRequest, Observation;
            // Sessions
            create_session, "/macosusesdk.v1.MacosUse/CreateSession", CreateSessionRequest, Session;
            get_session, "/macosusesdk.v1.MacosUse/GetSession", GetSessionRequest, Session;
            list_sessions, "/macosusesdk.v1.MacosUse/ListSessions", ListSessionsRequest, ListSessionsResponse;
            delete_session, "/macosusesdk.v1.MacosUse/DeleteSession", DeleteSessionRequest, ();
            begin_transaction, "/macosusesdk.v1.MacosUse/BeginTransaction", BeginTransactionRequest, BeginTransactionResponse;
            commit_transaction, "/macosusesdk.v1.MacosUse/CommitTransaction", CommitTransactionRequest, Transaction;
            rollback_transaction, "/macosusesdk.v1.MacosUse/RollbackTransaction", RollbackTransactionRequest, Transaction;
            get_session_snapshot, "/macosusesdk.v1.MacosUse/GetSessionSnapshot", GetSessionSnapshotRequest, SessionSnapshot;
            // Macros
            create_macro, "/macosusesdk.v1.MacosUse/CreateMacro", CreateMacroRequest, Macro;
            get_macro, "/macosusesdk.v1.MacosUse/GetMacro", GetMacroRequest, Macro;
            list_macros, "/macosusesdk.v1.MacosUse/ListMacros", ListMacrosRequest, ListMacrosResponse;
            update_macro, "/macosusesdk.v1.MacosUse/UpdateMacro", UpdateMacroRequest, Macro;
            delete_macro, "/macosusesdk.v1.MacosUse/DeleteMacro", DeleteMacroRequest, ();
            execute_macro, "/macosusesdk.v1.MacosUse/ExecuteMacro", ExecuteMacroRequest, ExecuteMacroResponse;
            // File dialogs
            automate_open_file_dialog, "/macosusesdk.v1.MacosUse/AutomateOpenFileDialog", AutomateOpenFileDialogRequest, AutomateOpenFileDialogResponse;
            automate_save_file_dialog, "/macosusesdk.v1.MacosUse/AutomateSaveFileDialog", AutomateSaveFileDialogRequest, AutomateSaveFileDialogResponse;
            select_file, "/macosusesdk.v1.MacosUse/SelectFile", SelectFileRequest, SelectFileResponse;
            select_directory, "/macosusesdk.v1.MacosUse/SelectDirectory", SelectDirectoryRequest, SelectDirectoryResponse;
            drag_files, "/macosusesdk.v1.MacosUse/DragFiles", DragFilesRequest, DragFilesResponse;
            // Long-running operations
            get_operation, "/google.longrunning.Operations/GetOperation", GetOperationRequest, Operation;
        }
    };
}

macro_rules! define_client_trait {
    ($($method:ident, $path:literal, $req:ty, $resp:ty;)*) => {
        /// The remote automation service.
        ///
        /// Every method defaults to `Unimplemented` so test doubles only
        /// override the calls they exercise.
        #[async_trait]
        pub trait MacosUseClient: Send + Sync {
            $(
                async fn $method(&self, request: $req) -> Result<$resp, Status> {
                    let _ = request;
                    Err(Status::unimplemented(concat!($path, " is not implemented")))
                }
            )*
        }
    };
}

for_each_rpc!(define_client_trait);

/// `MacosUseClient` over a tonic channel.
#[derive(Clone, Debug)]
pub struct GrpcMacosUseClient {
    inner: tonic::client::Grpc<Channel>,
}

impl GrpcMacosUseClient {
    /// Builds a client whose channel connects on first use.
    ///
    /// `addr` may omit the scheme, in which case plaintext `http://` is used.
    pub fn connect_lazy(addr: &str, connect_timeout: Duration) -> Result<Self, SdkError> {
        let uri = normalize_address(addr)?;
        let endpoint = Endpoint::from_shared(uri.clone())
            .map_err(|source| SdkError::InvalidAddress {
                addr: addr.to_string(),
                source,
            })?
            .connect_timeout(connect_timeout)
            .tcp_nodelay(true);

        debug!("Created lazy gRPC channel to {}", uri);
        Ok(Self::from_channel(endpoint.connect_lazy()))
    }

    pub fn from_channel(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    async fn unary<Req, Resp>(&self, path: &'static str, request: Req) -> Result<Resp, Status>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        let mut grpc = self.inner.clone();
        grpc.ready()
            .await
            .map_err(|e| Status::unavailable(format!("Service was not ready: {e}")))?;
        let codec = tonic::codec::ProstCodec::default();
        grpc.unary(
            tonic::Request::new(request),
            PathAndQuery::from_static(path),
            codec,
        )
        .await
        .map(tonic::Response::into_inner)
    }
}

macro_rules! impl_grpc_client {
    ($($method:ident, $path:literal, $req:ty, $resp:ty;)*) => {
        #[async_trait]
        impl MacosUseClient for GrpcMacosUseClient {
            $(
                async fn $method(&self, request: $req) -> Result<$resp, Status> {
                    self.unary($path, request).await
                }
            )*
        }
    };
}

for_each_rpc!(impl_grpc_client);

/// Prefixes `http://` when `addr` carries no scheme.
pub fn normalize_address(addr: &str) -> Result<String, SdkError> {
    let addr = addr.trim();
    if addr.is_empty() {
        return Err(SdkError::EmptyAddress);
    }
    if addr.contains("://") {
        Ok(addr.to_string())
    } else {
        Ok(format!("http://{addr}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_address() {
        assert_eq!(
            normalize_address("localhost:50051").unwrap(),
            "http://localhost:50051"
        );
        assert_eq!(
            normalize_address(" https://host:443 ").unwrap(),
            "https://host:443"
        );
        assert!(matches!(
            normalize_address("  "),
            Err(SdkError::EmptyAddress)
        ));
    }

    struct Nothing;
    impl MacosUseClient for Nothing {}

    #[tokio::test]
    async fn test_default_methods_are_unimplemented() {
        let err = Nothing
            .get_window(GetWindowRequest {
                name: "applications/1/windows/2".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), tonic::Code::Unimplemented);
        assert!(err.message().contains("GetWindow"));
    }
}
