use super::prelude::*;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct OpenDialogArgs {
    #[schemars(description = "Application showing the dialog (applications/{pid})")]
    application: String,
    #[serde(default)]
    #[schemars(description = "File to select")]
    file_path: String,
    #[serde(default)]
    #[schemars(description = "Directory to navigate to first")]
    default_directory: String,
    #[serde(default)]
    #[schemars(description = "Allowed extensions, e.g. [\"*.txt\"]")]
    file_filters: Vec<String>,
    #[serde(default)]
    allow_multiple: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SaveDialogArgs {
    #[schemars(description = "Application showing the dialog (applications/{pid})")]
    application: String,
    #[serde(default)]
    #[schemars(description = "Full destination path")]
    file_path: String,
    #[serde(default)]
    default_directory: String,
    #[serde(default)]
    default_filename: String,
    #[serde(default)]
    #[schemars(description = "Accept the replace prompt if the file exists")]
    confirm_overwrite: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SelectFileArgs {
    #[schemars(description = "Application showing the dialog (applications/{pid})")]
    application: String,
    file_path: String,
    #[serde(default)]
    reveal_finder: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SelectDirectoryArgs {
    #[schemars(description = "Application showing the dialog (applications/{pid})")]
    application: String,
    directory_path: String,
    #[serde(default)]
    #[schemars(description = "Create the directory if it does not exist")]
    create_missing: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DragFilesArgs {
    #[schemars(description = "Application owning the target element (applications/{pid})")]
    application: String,
    file_paths: Vec<String>,
    #[schemars(description = "Element that receives the drop")]
    target_element_id: String,
    #[serde(default)]
    #[schemars(description = "Drag duration in seconds")]
    duration: f64,
}

fn failure(tool: &str, error: &str) -> ToolError {
    let reason = if error.is_empty() { "dialog automation failed" } else { error };
    ToolError::failed(format!("Error in {tool}: {reason}"))
}

#[tool_router(router = file_dialog_router, vis = "pub(crate)")]
impl MacosUseServer {
    #[tool(
        description = "Drive an open-file dialog: navigate to a directory and pick one or more files."
    )]
    async fn automate_open_file_dialog(
        &self,
        Parameters(args): Parameters<OpenDialogArgs>,
    ) -> ToolOutcome {
        const TOOL: &str = "automate_open_file_dialog";
        let request = AutomateOpenFileDialogRequest {
            application: args.application,
            file_path: args.file_path,
            default_directory: args.default_directory,
            file_filters: args.file_filters,
            allow_multiple: args.allow_multiple,
        };
        let response = self
            .call(TOOL, self.client().automate_open_file_dialog(request))
            .await?;

        if !response.success {
            return Err(failure(TOOL, &response.error));
        }
        let mut text = format!("Selected {} file(s):", response.selected_paths.len());
        for path in &response.selected_paths {
            let _ = write!(text, "\n{path}");
        }
        Ok(text_result(text))
    }

    #[tool(description = "Drive a save dialog: choose a directory and file name, then confirm.")]
    async fn automate_save_file_dialog(
        &self,
        Parameters(args): Parameters<SaveDialogArgs>,
    ) -> ToolOutcome {
        const TOOL: &str = "automate_save_file_dialog";

        if args.file_path.is_empty() && args.default_filename.is_empty() {
            return Err(ToolError::failed(format!(
                "Error in {TOOL}: one of file_path or default_filename is required"
            )));
        }
        let request = AutomateSaveFileDialogRequest {
            application: args.application,
            file_path: args.file_path,
            default_directory: args.default_directory,
            default_filename: args.default_filename,
            confirm_overwrite: args.confirm_overwrite,
        };
        let response = self
            .call(TOOL, self.client().automate_save_file_dialog(request))
            .await?;

        if !response.success {
            return Err(failure(TOOL, &response.error));
        }
        Ok(text_result(format!("Saved to {}", response.saved_path)))
    }

    #[tool(
        description = "Select a file in the frontmost file dialog, optionally revealing it in Finder."
    )]
    async fn select_file(&self, Parameters(args): Parameters<SelectFileArgs>) -> ToolOutcome {
        const TOOL: &str = "select_file";
        let request = SelectFileRequest {
            application: args.application,
            file_path: args.file_path,
            reveal_finder: args.reveal_finder,
        };
        let response = self
            .call(TOOL, self.client().select_file(request))
            .await?;

        if !response.success {
            return Err(failure(TOOL, &response.error));
        }
        Ok(text_result(format!("Selected {}", response.selected_path)))
    }

    #[tool(description = "Select a directory in the frontmost file dialog.")]
    async fn select_directory(
        &self,
        Parameters(args): Parameters<SelectDirectoryArgs>,
    ) -> ToolOutcome {
        const TOOL: &str = "select_directory";
        let request = SelectDirectoryRequest {
            application: args.application,
            directory_path: args.directory_path,
            create_missing: args.create_missing,
        };
        let response = self
            .call(TOOL, self.client().select_directory(request))
            .await?;

        if !response.success {
            return Err(failure(TOOL, &response.error));
        }
        let created = if response.created { " (created)" } else { "" };
        Ok(text_result(format!(
            "Selected directory {}{created}",
            response.selected_path
        )))
    }

    #[tool(description = "Drag files from Finder onto an element.")]
    async fn drag_files(&self, Parameters(args): Parameters<DragFilesArgs>) -> ToolOutcome {
        const TOOL: &str = "drag_files";

        if args.file_paths.is_empty() {
            return Err(ToolError::failed(format!(
                "Error in {TOOL}: file_paths must not be empty"
            )));
        }
        let request = DragFilesRequest {
            application: args.application,
            file_paths: args.file_paths,
            target_element_id: args.target_element_id.clone(),
            duration: args.duration,
        };
        let response = self
            .call(TOOL, self.client().drag_files(request))
            .await?;

        if !response.success {
            return Err(failure(TOOL, &response.error));
        }
        Ok(text_result(format!(
            "Dropped {} file(s) onto {}",
            response.files_dropped, args.target_element_id
        )))
    }
}
