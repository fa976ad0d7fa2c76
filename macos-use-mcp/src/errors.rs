use rmcp::model::{CallToolResult, Content, IntoContents};
use std::error::Error;
use thiserror::Error;
use tonic::{Code, Status};

/// Failure of a single tool call. Always reported to the client as an
/// `isError` result, never as a protocol error.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: String, message: String },

    /// Already formatted by [`format_grpc_error`].
    #[error("{0}")]
    Remote(String),

    #[error("{0}")]
    Failed(String),
}

impl ToolError {
    pub fn remote(err: &(dyn Error + 'static), tool: &str) -> Self {
        Self::Remote(format_grpc_error(Some(err), tool))
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

impl IntoContents for ToolError {
    fn into_contents(self) -> Vec<Content> {
        vec![Content::text(self.to_string())]
    }
}

impl From<ToolError> for CallToolResult {
    fn from(err: ToolError) -> Self {
        CallToolResult::error(vec![Content::text(err.to_string())])
    }
}

/// Remediation hint shown under the error for well-known status codes.
pub fn suggestion_for(code: Code) -> Option<&'static str> {
    let hint = match code {
        Code::PermissionDenied => {
            "Grant Accessibility and Screen Recording permissions to the MacosUse server in System Settings > Privacy & Security"
        }
        Code::NotFound => "Verify the resource exists and the name/ID is correct",
        Code::InvalidArgument => "Check the argument values against the tool's input schema",
        Code::Unavailable => {
            "Make sure the MacosUse server is running and reachable at the configured address"
        }
        Code::DeadlineExceeded => {
            "The operation took too long; increase the request timeout or narrow the request"
        }
        Code::Internal => "The automation server hit an internal error; check its logs and retry",
        Code::FailedPrecondition => {
            "The target is not in a state that allows this operation; focus or restore it first"
        }
        Code::AlreadyExists => "Use a different ID or reuse the existing resource",
        Code::ResourceExhausted => "The server is busy or rate limited; wait before retrying",
        Code::Unimplemented => "The connected MacosUse server does not support this operation",
        _ => return None,
    };
    Some(hint)
}

/// Finds the first `tonic::Status` in `err`'s source chain.
fn find_status<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a Status> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(status) = e.downcast_ref::<Status>() {
            return Some(status);
        }
        current = e.source();
    }
    None
}

/// Renders `err` for the client. Empty for `None`.
pub fn format_grpc_error(err: Option<&(dyn Error + 'static)>, tool: &str) -> String {
    let Some(err) = err else {
        return String::new();
    };

    let Some(status) = find_status(err) else {
        return format!("Error in {tool}: {err}");
    };

    let code = status.code();
    let mut message = format!("Error in {tool}: {code:?} - {}", status.message());
    if let Some(hint) = suggestion_for(code) {
        message.push_str("\nSuggestion: ");
        message.push_str(hint);
    }
    message
}

pub fn grpc_error_result(err: &(dyn Error + 'static), tool: &str) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format_grpc_error(Some(err), tool))])
}
