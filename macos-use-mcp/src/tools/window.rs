use super::prelude::*;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct WindowNameArgs {
    #[schemars(description = "Window resource name (applications/{pid}/windows/{id})")]
    name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListWindowsArgs {
    #[serde(default)]
    #[schemars(description = "Application resource name (applications/{pid})")]
    parent: String,
    #[serde(flatten)]
    page: PageArgs,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct MoveWindowArgs {
    #[schemars(description = "Window resource name (applications/{pid}/windows/{id})")]
    name: String,
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ResizeWindowArgs {
    #[schemars(description = "Window resource name (applications/{pid}/windows/{id})")]
    name: String,
    width: f64,
    height: f64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CloseWindowArgs {
    #[schemars(description = "Window resource name (applications/{pid}/windows/{id})")]
    name: String,
    #[serde(default)]
    #[schemars(description = "Close without saving")]
    force: bool,
}

fn format_window(window: &Window) -> String {
    let title = if window.title.is_empty() {
        "(untitled)"
    } else {
        window.title.as_str()
    };
    let mut line = format!(
        "{}: \"{}\" {}",
        window.name,
        title,
        format_bounds(window.bounds.as_ref())
    );
    if !window.bundle_id.is_empty() {
        let _ = write!(line, " [{}]", window.bundle_id);
    }
    let _ = write!(line, " z={}", window.z_index);
    if !window.visible {
        line.push_str(" (hidden)");
    }
    line
}

/// `applications/1/windows/2` and `applications/1/windows/2/state` both
/// address the state resource.
fn state_name(name: &str) -> String {
    if name.ends_with("/state") {
        name.to_string()
    } else {
        format!("{}/state", name.trim_end_matches('/'))
    }
}

#[tool_router(router = window_router, vis = "pub(crate)")]
impl MacosUseServer {
    #[tool(
        description = "List the windows of an application, or of all applications when parent is omitted. Read-only."
    )]
    async fn list_windows(&self, Parameters(args): Parameters<ListWindowsArgs>) -> ToolOutcome {
        let request = ListWindowsRequest {
            parent: args.parent,
            page_size: args.page.page_size.unwrap_or_default(),
            page_token: args.page.page_token,
        };
        let response = self
            .call("list_windows", self.client().list_windows(request))
            .await?;

        if response.windows.is_empty() {
            return Ok(text_result("No windows found"));
        }
        let mut text = format!("Found {} windows:", response.windows.len());
        for window in &response.windows {
            let _ = write!(text, "\n{}", format_window(window));
        }
        push_next_page(&mut text, &response.next_page_token);
        Ok(text_result(text))
    }

    #[tool(description = "Get a window's title, bounds and visibility. Read-only.")]
    async fn get_window(&self, Parameters(args): Parameters<WindowNameArgs>) -> ToolOutcome {
        let window = self
            .call(
                "get_window",
                self.client().get_window(GetWindowRequest { name: args.name }),
            )
            .await?;
        Ok(text_result(format_window(&window)))
    }

    #[tool(description = "Bring a window to the front and give it keyboard focus.")]
    async fn focus_window(&self, Parameters(args): Parameters<WindowNameArgs>) -> ToolOutcome {
        let window = self
            .call(
                "focus_window",
                self.client()
                    .focus_window(FocusWindowRequest { name: args.name }),
            )
            .await?;
        Ok(text_result(format!("Focused {}", format_window(&window))))
    }

    #[tool(description = "Move a window's top-left corner to global screen coordinates.")]
    async fn move_window(&self, Parameters(args): Parameters<MoveWindowArgs>) -> ToolOutcome {
        let request = MoveWindowRequest {
            name: args.name,
            x: args.x,
            y: args.y,
        };
        let window = self
            .call("move_window", self.client().move_window(request))
            .await?;
        Ok(text_result(format!("Moved {}", format_window(&window))))
    }

    #[tool(description = "Resize a window.")]
    async fn resize_window(&self, Parameters(args): Parameters<ResizeWindowArgs>) -> ToolOutcome {
        const TOOL: &str = "resize_window";
        if args.width <= 0.0 || args.height <= 0.0 {
            return Err(ToolError::failed(format!(
                "Error in {TOOL}: width and height must be positive"
            )));
        }
        let request = ResizeWindowRequest {
            name: args.name,
            width: args.width,
            height: args.height,
        };
        let window = self
            .call(TOOL, self.client().resize_window(request))
            .await?;
        Ok(text_result(format!("Resized {}", format_window(&window))))
    }

    #[tool(description = "Minimize a window to the Dock.")]
    async fn minimize_window(&self, Parameters(args): Parameters<WindowNameArgs>) -> ToolOutcome {
        let window = self
            .call(
                "minimize_window",
                self.client()
                    .minimize_window(MinimizeWindowRequest { name: args.name }),
            )
            .await?;
        Ok(text_result(format!("Minimized {}", format_window(&window))))
    }

    #[tool(description = "Restore a minimized window.")]
    async fn restore_window(&self, Parameters(args): Parameters<WindowNameArgs>) -> ToolOutcome {
        let window = self
            .call(
                "restore_window",
                self.client()
                    .restore_window(RestoreWindowRequest { name: args.name }),
            )
            .await?;
        Ok(text_result(format!("Restored {}", format_window(&window))))
    }

    #[tool(description = "Close a window. With force, unsaved-changes prompts are dismissed.")]
    async fn close_window(&self, Parameters(args): Parameters<CloseWindowArgs>) -> ToolOutcome {
        let request = CloseWindowRequest {
            name: args.name.clone(),
            force: args.force,
        };
        self.call("close_window", self.client().close_window(request))
            .await?;
        Ok(text_result(format!("Closed window {}", args.name)))
    }

    #[tool(
        description = "Get a window's accessibility state: minimized, focused, modal, fullscreen and similar flags. Read-only."
    )]
    async fn get_window_state(
        &self,
        Parameters(args): Parameters<WindowNameArgs>,
    ) -> ToolOutcome {
        let state = self
            .call(
                "get_window_state",
                self.client().get_window_state(GetWindowStateRequest {
                    name: state_name(&args.name),
                }),
            )
            .await?;

        let flag = |set: bool| if set { "yes" } else { "no" };
        let fullscreen = match state.fullscreen {
            Some(true) => "yes",
            Some(false) => "no",
            None => "unknown",
        };
        let text = format!(
            "Window state for {}:\n  minimized: {}\n  focused: {}\n  fullscreen: {}\n  modal: {}\n  floating: {}\n  hidden: {}\n  resizable: {}\n  minimizable: {}\n  closable: {}",
            args.name,
            flag(state.minimized),
            flag(state.focused),
            fullscreen,
            flag(state.modal),
            flag(state.floating),
            flag(state.ax_hidden),
            flag(state.resizable),
            flag(state.minimizable),
            flag(state.closable),
        );
        Ok(text_result(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_name() {
        assert_eq!(state_name("applications/1/windows/2"), "applications/1/windows/2/state");
        assert_eq!(state_name("applications/1/windows/2/state"), "applications/1/windows/2/state");
    }

    #[test]
    fn test_format_window_untitled_hidden() {
        let window = Window {
            name: "applications/1/windows/2".into(),
            visible: false,
            ..Default::default()
        };
        let line = format_window(&window);
        assert!(line.contains("(untitled)"));
        assert!(line.ends_with("(hidden)"));
    }
}
