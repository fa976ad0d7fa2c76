use super::prelude::*;
use super::stringify_values;
use prost_types::FieldMask;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ActionSpec {
    #[schemars(description = "Tool to call")]
    tool: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    #[schemars(description = "Tool arguments; ${param} placeholders are substituted at execution")]
    arguments: Map<String, Value>,
}

impl From<ActionSpec> for MacroAction {
    fn from(spec: ActionSpec) -> Self {
        MacroAction {
            description: spec.description,
            tool: spec.tool,
            arguments: stringify_values(spec.arguments),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ParameterSpec {
    key: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    default_value: String,
    #[serde(default)]
    required: bool,
}

impl From<ParameterSpec> for MacroParameter {
    fn from(spec: ParameterSpec) -> Self {
        MacroParameter {
            key: spec.key,
            description: spec.description,
            default_value: spec.default_value,
            required: spec.required,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateMacroArgs {
    #[serde(default)]
    #[schemars(description = "Optional ID for the new macro")]
    macro_id: String,
    display_name: String,
    #[serde(default)]
    description: String,
    #[schemars(
        description = "Steps run in order. Each step names a tool and its arguments; ${param} placeholders are substituted at execution"
    )]
    actions: Vec<ActionSpec>,
    #[serde(default)]
    parameters: Vec<ParameterSpec>,
    #[serde(default)]
    tags: Vec<String>,
}

/// Fields an update may change. `None` means "not given".
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct MacroFields {
    display_name: Option<String>,
    description: Option<String>,
    actions: Option<Vec<ActionSpec>>,
    parameters: Option<Vec<ParameterSpec>>,
    tags: Option<Vec<String>>,
}

impl MacroFields {
    /// Fills `target` and returns the field paths that were set.
    fn apply(self, target: &mut Macro) -> Vec<String> {
        let mut paths = Vec::new();
        if let Some(display_name) = self.display_name {
            target.display_name = display_name;
            paths.push("display_name".to_string());
        }
        if let Some(description) = self.description {
            target.description = description;
            paths.push("description".to_string());
        }
        if let Some(actions) = self.actions {
            target.actions = actions.into_iter().map(MacroAction::from).collect();
            paths.push("actions".to_string());
        }
        if let Some(parameters) = self.parameters {
            target.parameters = parameters.into_iter().map(MacroParameter::from).collect();
            paths.push("parameters".to_string());
        }
        if let Some(tags) = self.tags {
            target.tags = tags;
            paths.push("tags".to_string());
        }
        paths
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateMacroArgs {
    #[schemars(description = "Macro resource name (macros/{id})")]
    name: String,
    #[serde(flatten)]
    fields: MacroFields,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct MacroNameArgs {
    #[schemars(description = "Macro resource name (macros/{id})")]
    name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListMacrosArgs {
    #[serde(default)]
    #[schemars(description = "Filter expression, e.g. tags:login")]
    filter: String,
    #[serde(flatten)]
    page: PageArgs,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ExecuteMacroArgs {
    #[schemars(description = "Macro resource name (macros/{id})")]
    name: String,
    #[serde(default)]
    #[schemars(description = "Values for the macro's parameters")]
    parameters: Map<String, Value>,
    #[serde(default)]
    #[schemars(description = "Seconds before the run is aborted")]
    timeout: f64,
}

/// Outcome of a macro run, with the remote reason on failure.
fn execution_result(tool: &str, name: &str, response: &ExecuteMacroResponse) -> ToolOutcome {
    if !response.success {
        let reason = if response.error.is_empty() {
            "macro failed"
        } else {
            response.error.as_str()
        };
        return Err(ToolError::failed(format!(
            "Error in {tool}: {reason} (after {} actions)",
            response.actions_executed
        )));
    }
    Ok(text_result(format!(
        "Executed macro {name} ({} actions)",
        response.actions_executed
    )))
}

fn format_macro(definition: &Macro, detailed: bool) -> String {
    let mut text = format!(
        "{}: \"{}\" ({} steps, used {} times)",
        definition.name,
        definition.display_name,
        definition.actions.len(),
        definition.usage_count
    );
    if !definition.tags.is_empty() {
        let _ = write!(text, " tags: {}", definition.tags.join(", "));
    }
    if !detailed {
        return text;
    }
    if !definition.description.is_empty() {
        let _ = write!(text, "\n{}", definition.description);
    }
    if !definition.parameters.is_empty() {
        text.push_str("\nParameters:");
        for param in &definition.parameters {
            let required = if param.required { " (required)" } else { "" };
            let _ = write!(text, "\n  {}{}", param.key, required);
            if !param.default_value.is_empty() {
                let _ = write!(text, " default={}", param.default_value);
            }
            if !param.description.is_empty() {
                let _ = write!(text, ": {}", param.description);
            }
        }
    }
    text.push_str("\nSteps:");
    for (i, action) in definition.actions.iter().enumerate() {
        let _ = write!(text, "\n  {}. {}", i + 1, action.tool);
        if !action.description.is_empty() {
            let _ = write!(text, " - {}", action.description);
        }
        if !action.arguments.is_empty() {
            let mut args: Vec<_> = action.arguments.iter().collect();
            args.sort();
            let args: Vec<String> = args.iter().map(|(k, v)| format!("{k}={v}")).collect();
            let _ = write!(text, " ({})", args.join(", "));
        }
    }
    let _ = write!(
        text,
        "\nCreated {}, updated {}",
        format_timestamp(definition.create_time.as_ref()),
        format_timestamp(definition.update_time.as_ref())
    );
    text
}

#[tool_router(router = macro_router, vis = "pub(crate)")]
impl MacosUseServer {
    #[tool(description = "Record a reusable sequence of tool calls.")]
    async fn create_macro(&self, Parameters(args): Parameters<CreateMacroArgs>) -> ToolOutcome {
        const TOOL: &str = "create_macro";

        if args.actions.is_empty() {
            return Err(ToolError::failed(format!(
                "Error in {TOOL}: a macro needs at least one action"
            )));
        }
        let definition = Macro {
            display_name: args.display_name,
            description: args.description,
            actions: args.actions.into_iter().map(MacroAction::from).collect(),
            parameters: args.parameters.into_iter().map(MacroParameter::from).collect(),
            tags: args.tags,
            ..Default::default()
        };
        let request = CreateMacroRequest {
            definition: Some(definition),
            macro_id: args.macro_id,
        };
        let created = self
            .call(TOOL, self.client().create_macro(request))
            .await?;
        Ok(text_result(format!("Created macro {}", format_macro(&created, false))))
    }

    #[tool(description = "Get a macro with its steps and parameters. Read-only.")]
    async fn get_macro(&self, Parameters(args): Parameters<MacroNameArgs>) -> ToolOutcome {
        let definition = self
            .call(
                "get_macro",
                self.client().get_macro(GetMacroRequest { name: args.name }),
            )
            .await?;
        Ok(text_result(format_macro(&definition, true)))
    }

    #[tool(description = "List macros. Read-only.")]
    async fn list_macros(&self, Parameters(args): Parameters<ListMacrosArgs>) -> ToolOutcome {
        let request = ListMacrosRequest {
            page_size: args.page.page_size.unwrap_or_default(),
            page_token: args.page.page_token,
            filter: args.filter,
        };
        let response = self
            .call("list_macros", self.client().list_macros(request))
            .await?;

        if response.macros.is_empty() {
            return Ok(text_result("No macros found"));
        }
        let mut text = format!("Found {} macros:", response.macros.len());
        for definition in &response.macros {
            let _ = write!(text, "\n{}", format_macro(definition, false));
        }
        push_next_page(&mut text, &response.next_page_token);
        Ok(text_result(text))
    }

    #[tool(description = "Update a macro. Only the fields given are changed.")]
    async fn update_macro(&self, Parameters(args): Parameters<UpdateMacroArgs>) -> ToolOutcome {
        const TOOL: &str = "update_macro";

        let mut definition = Macro {
            name: args.name,
            ..Default::default()
        };
        let paths = args.fields.apply(&mut definition);
        if paths.is_empty() {
            return Err(ToolError::failed(format!(
                "Error in {TOOL}: no fields to update"
            )));
        }
        let request = UpdateMacroRequest {
            definition: Some(definition),
            update_mask: Some(FieldMask { paths }),
        };
        let updated = self
            .call(TOOL, self.client().update_macro(request))
            .await?;
        Ok(text_result(format!("Updated macro {}", format_macro(&updated, false))))
    }

    #[tool(description = "Delete a macro.")]
    async fn delete_macro(&self, Parameters(args): Parameters<MacroNameArgs>) -> ToolOutcome {
        self.call(
            "delete_macro",
            self.client().delete_macro(DeleteMacroRequest {
                name: args.name.clone(),
            }),
        )
        .await?;
        Ok(text_result(format!("Deleted macro {}", args.name)))
    }

    #[tool(description = "Run a macro with parameter values.")]
    async fn execute_macro(&self, Parameters(args): Parameters<ExecuteMacroArgs>) -> ToolOutcome {
        const TOOL: &str = "execute_macro";
        let request = ExecuteMacroRequest {
            name: args.name.clone(),
            parameter_values: stringify_values(args.parameters),
            timeout: args.timeout.max(0.0),
        };
        let response = self
            .call(TOOL, self.client().execute_macro(request))
            .await?;

        execution_result(TOOL, &args.name, &response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_mask_lists_given_fields() {
        let fields: MacroFields = serde_json::from_value(json!({
            "description": "Log in",
            "tags": ["auth"]
        }))
        .unwrap();
        let mut definition = Macro::default();
        let paths = fields.apply(&mut definition);
        assert_eq!(paths, vec!["description", "tags"]);
        assert_eq!(definition.description, "Log in");
        assert!(definition.actions.is_empty());
    }

    #[test]
    fn test_action_arguments_are_stringified() {
        let spec: ActionSpec = serde_json::from_value(json!({
            "tool": "click",
            "arguments": {"x": 10, "y": 20.5}
        }))
        .unwrap();
        let action = MacroAction::from(spec);
        assert_eq!(action.arguments["x"], "10");
        assert_eq!(action.arguments["y"], "20.5");
    }

    #[test]
    fn test_failed_run_reports_progress() {
        let response = ExecuteMacroResponse {
            success: false,
            actions_executed: 2,
            error: "step 3: element not found".into(),
        };
        let err = execution_result("execute_macro", "macros/login", &response).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error in execute_macro: step 3: element not found (after 2 actions)"
        );
    }
}
