//! Tool handlers, one module per automation domain.
//!
//! Each module contributes a `#[tool_router]` block on [`MacosUseServer`];
//! [`MacosUseServer::tool_router`] combines them.

mod application;
mod clipboard;
mod display;
mod element;
mod file_dialog;
mod input;
mod macros;
mod observation;
mod screenshot;
mod scripting;
mod session;
mod window;

use crate::errors::ToolError;
use crate::helpers::{de, ToolReply};
use crate::server::MacosUseServer;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::{schemars, schemars::JsonSchema};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// `Err` becomes an `isError` result carrying the error's text.
pub(crate) type ToolOutcome = Result<ToolReply, ToolError>;

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct EmptyArgs {}

/// Pagination fields shared by the list tools.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct PageArgs {
    #[serde(default, deserialize_with = "de::opt_int")]
    #[schemars(description = "Maximum number of results to return")]
    pub page_size: Option<i32>,
    #[serde(default)]
    #[schemars(description = "Token from a previous call's 'Next page token'")]
    pub page_token: String,
}

pub(crate) mod prelude {
    pub(crate) use super::{EmptyArgs, PageArgs, ToolOutcome};
    pub(crate) use crate::errors::ToolError;
    pub(crate) use crate::helpers::{
        de, describe_element, format_bounds, format_element, format_timestamp, push_next_page,
        text_result, ToolReply,
    };
    pub(crate) use crate::server::MacosUseServer;
    pub(crate) use macos_use_sdk::proto::*;
    pub(crate) use rmcp::handler::server::wrapper::Parameters;
    pub(crate) use rmcp::model::Content;
    pub(crate) use rmcp::{schemars, schemars::JsonSchema, tool, tool_router};
    pub(crate) use serde::Deserialize;
    pub(crate) use std::fmt::Write as _;
}

impl MacosUseServer {
    /// Every tool the server exposes.
    pub fn tool_router() -> ToolRouter<Self> {
        Self::screenshot_router()
            + Self::input_router()
            + Self::element_router()
            + Self::window_router()
            + Self::display_router()
            + Self::clipboard_router()
            + Self::application_router()
            + Self::scripting_router()
            + Self::observation_router()
            + Self::session_router()
            + Self::macro_router()
            + Self::file_dialog_router()
    }
}

/// Converts JSON argument values to the string map used on the wire.
/// Strings pass through; anything else is carried as its JSON text.
pub(crate) fn stringify_values(map: Map<String, Value>) -> HashMap<String, String> {
    map.into_iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            (key, text)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_covers_every_tool() {
        let router = MacosUseServer::tool_router();
        let tools = router.list_all();
        assert_eq!(tools.len(), 74);
        for name in ["click", "wait_element", "execute_macro", "drag_files"] {
            assert!(router.has_route(name), "missing route for {name}");
        }
    }

    #[test]
    fn test_stringify_values() {
        let map = serde_json::json!({"a": "x", "b": 2, "c": true, "d": {"k": 1}});
        let Value::Object(map) = map else { unreachable!() };
        let out = stringify_values(map);
        assert_eq!(out["a"], "x");
        assert_eq!(out["b"], "2");
        assert_eq!(out["c"], "true");
        assert_eq!(out["d"], r#"{"k":1}"#);
    }
}
