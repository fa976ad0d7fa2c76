use super::prelude::*;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct OpenApplicationArgs {
    #[schemars(description = "Bundle ID, application name or path to the .app")]
    id: String,
    #[serde(default)]
    #[schemars(description = "Launch without bringing it to the front")]
    background: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ApplicationNameArgs {
    #[schemars(description = "Application resource name")]
    name: String,
}

fn format_application(app: &Application) -> String {
    let display = if app.display_name.is_empty() {
        "(unnamed)"
    } else {
        app.display_name.as_str()
    };
    let mut line = format!("{}: {} (pid {})", app.name, display, app.pid);
    if !app.bundle_id.is_empty() {
        let _ = write!(line, " [{}]", app.bundle_id);
    }
    line
}

#[tool_router(router = application_router, vis = "pub(crate)")]
impl MacosUseServer {
    #[tool(
        description = "Launch or activate an application by bundle ID (com.apple.TextEdit), name (TextEdit) or path. Returns its resource name."
    )]
    async fn open_application(
        &self,
        Parameters(args): Parameters<OpenApplicationArgs>,
    ) -> ToolOutcome {
        const TOOL: &str = "open_application";

        if args.id.trim().is_empty() {
            return Err(ToolError::failed(format!("Error in {TOOL}: id must not be empty")));
        }
        let request = OpenApplicationRequest {
            id: args.id.clone(),
            background: args.background,
        };
        let response = self
            .call(TOOL, self.client().open_application(request))
            .await?;

        match response.application {
            Some(app) => Ok(text_result(format!(
                "Opened {}",
                format_application(&app)
            ))),
            None => Err(ToolError::failed(format!(
                "Error in {TOOL}: the server did not return an application for '{}'",
                args.id
            ))),
        }
    }

    #[tool(description = "List applications currently tracked by the automation server. Read-only.")]
    async fn list_applications(&self, Parameters(page): Parameters<PageArgs>) -> ToolOutcome {
        let request = ListApplicationsRequest {
            page_size: page.page_size.unwrap_or_default(),
            page_token: page.page_token,
        };
        let response = self
            .call("list_applications", self.client().list_applications(request))
            .await?;

        if response.applications.is_empty() {
            return Ok(text_result(
                "No tracked applications. Use open_application to start one.",
            ));
        }
        let mut text = format!("Found {} applications:", response.applications.len());
        for app in &response.applications {
            let _ = write!(text, "\n{}", format_application(app));
        }
        push_next_page(&mut text, &response.next_page_token);
        Ok(text_result(text))
    }

    #[tool(description = "Get one tracked application (applications/{pid}). Read-only.")]
    async fn get_application(
        &self,
        Parameters(args): Parameters<ApplicationNameArgs>,
    ) -> ToolOutcome {
        let app = self
            .call(
                "get_application",
                self.client()
                    .get_application(GetApplicationRequest { name: args.name }),
            )
            .await?;
        Ok(text_result(format_application(&app)))
    }

    #[tool(description = "Stop tracking an application. The application itself keeps running.")]
    async fn delete_application(
        &self,
        Parameters(args): Parameters<ApplicationNameArgs>,
    ) -> ToolOutcome {
        self.call(
            "delete_application",
            self.client().delete_application(DeleteApplicationRequest {
                name: args.name.clone(),
            }),
        )
        .await?;
        Ok(text_result(format!("Stopped tracking {}", args.name)))
    }
}
