use super::prelude::*;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetDisplayArgs {
    #[schemars(description = "Display resource name")]
    name: String,
}

fn format_display(display: &Display) -> String {
    let mut line = format!(
        "{} (id {}): frame {}, visible {}, scale {}",
        display.name,
        display.display_id,
        format_bounds(display.frame.as_ref()),
        format_bounds(display.visible_frame.as_ref()),
        display.scale
    );
    if display.is_main {
        line.push_str(" [main]");
    }
    line
}

#[tool_router(router = display_router, vis = "pub(crate)")]
impl MacosUseServer {
    #[tool(description = "List connected displays with their frames and scale factors. Read-only.")]
    async fn list_displays(&self, Parameters(_args): Parameters<EmptyArgs>) -> ToolOutcome {
        let response = self
            .call(
                "list_displays",
                self.client().list_displays(ListDisplaysRequest {}),
            )
            .await?;

        if response.displays.is_empty() {
            return Ok(text_result("No displays found"));
        }
        let mut text = format!("Found {} displays:", response.displays.len());
        for display in &response.displays {
            let _ = write!(text, "\n{}", format_display(display));
        }
        Ok(text_result(text))
    }

    #[tool(description = "Get one display (displays/{id}). Read-only.")]
    async fn get_display(&self, Parameters(args): Parameters<GetDisplayArgs>) -> ToolOutcome {
        let display = self
            .call(
                "get_display",
                self.client()
                    .get_display(GetDisplayRequest { name: args.name }),
            )
            .await?;
        Ok(text_result(format_display(&display)))
    }

    #[tool(
        description = "Report the current mouse pointer position and the display it is on. Read-only."
    )]
    async fn cursor_position(&self, Parameters(_args): Parameters<EmptyArgs>) -> ToolOutcome {
        let position = self
            .call(
                "cursor_position",
                self.client()
                    .capture_cursor_position(CaptureCursorPositionRequest {}),
            )
            .await?;

        let mut text = format!("Cursor at ({}, {})", position.x, position.y);
        if !position.display.is_empty() {
            let _ = write!(text, " on {}", position.display);
        }
        Ok(text_result(text))
    }
}
