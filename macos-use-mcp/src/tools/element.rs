use super::prelude::*;
use crate::poller::{wait_parameters, OperationPoller};
use crate::selector::SelectorSpec;
use macos_use_sdk::proto::state_condition::Condition;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct FindElementsArgs {
    #[schemars(description = "Criteria the elements must match")]
    selector: SelectorSpec,
    #[serde(default)]
    #[schemars(description = "Application to search (applications/{pid}). Omit to search all applications")]
    parent: String,
    #[serde(flatten)]
    page: PageArgs,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct FindRegionElementsArgs {
    #[serde(default)]
    #[schemars(description = "Application to search (applications/{pid})")]
    parent: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    #[schemars(description = "Optional additional criteria")]
    selector: Option<SelectorSpec>,
    #[serde(flatten)]
    page: PageArgs,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ElementNameArgs {
    #[schemars(description = "Element resource name")]
    name: String,
}

#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ElementClick {
    Single,
    Double,
    Right,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ClickElementArgs {
    #[schemars(description = "Application resource name (applications/{pid})")]
    parent: String,
    element_id: String,
    #[schemars(description = "Default: single")]
    click_type: Option<ElementClick>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct WriteElementValueArgs {
    #[schemars(description = "Application resource name (applications/{pid})")]
    parent: String,
    element_id: String,
    #[schemars(description = "New value")]
    value: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PerformElementActionArgs {
    #[schemars(description = "Application resource name (applications/{pid})")]
    parent: String,
    element_id: String,
    #[schemars(description = "Action name from get_element_actions")]
    action: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TraverseArgs {
    #[schemars(description = "Application resource name (applications/{pid})")]
    name: String,
    #[serde(default)]
    #[schemars(description = "Skip elements that are not on screen")]
    visible_only: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct WaitElementArgs {
    #[schemars(description = "Application resource name (applications/{pid})")]
    parent: String,
    #[schemars(description = "Criteria the element must match")]
    selector: SelectorSpec,
    #[schemars(description = "Seconds to wait (default: 30)")]
    timeout: Option<f64>,
    #[schemars(description = "Seconds between checks on the automation server (default: 0.5)")]
    poll_interval: Option<f64>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ConditionSpec {
    enabled: Option<bool>,
    focused: Option<bool>,
    text_equals: Option<String>,
    text_contains: Option<String>,
    attribute: Option<AttributeSpec>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AttributeSpec {
    name: String,
    value: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct WaitElementStateArgs {
    #[schemars(description = "Application resource name (applications/{pid})")]
    parent: String,
    element_id: String,
    #[schemars(description = "Exactly one of the condition fields")]
    condition: ConditionSpec,
    #[schemars(description = "Seconds to wait (default: 30)")]
    timeout: Option<f64>,
    #[schemars(description = "Seconds between checks on the automation server (default: 0.5)")]
    poll_interval: Option<f64>,
}

fn parse_selector(tool: &str, spec: SelectorSpec) -> Result<ElementSelector, ToolError> {
    spec.into_proto()
        .map_err(|reason| ToolError::failed(format!("Error in {tool}: invalid selector: {reason}")))
}

fn element_list(elements: &[Element], next_page_token: &str) -> ToolReply {
    if elements.is_empty() {
        return text_result("No elements found matching selector");
    }
    let mut text = format!("Found {} elements:", elements.len());
    for element in elements {
        let _ = write!(text, "\n{}", format_element(element));
    }
    push_next_page(&mut text, next_page_token);
    text_result(text)
}

/// Shared formatting for the element mutation responses.
fn mutation_result(
    tool: &str,
    success: bool,
    error: &str,
    element: Option<&Element>,
    done: String,
) -> ToolOutcome {
    if !success {
        let reason = if error.is_empty() { "operation failed" } else { error };
        return Err(ToolError::failed(format!("Error in {tool}: {reason}")));
    }
    match element {
        Some(element) => Ok(text_result(format!("{done}\n{}", format_element(element)))),
        None => Ok(text_result(done)),
    }
}

/// Polls `operation` to completion and extracts the waited-for element.
async fn finish_wait<M, F>(
    server: &MacosUseServer,
    tool: &str,
    deadline: tokio::time::Instant,
    operation: Operation,
    element_of: F,
) -> ToolOutcome
where
    M: prost::Message + Default,
    F: FnOnce(M) -> Option<Element>,
{
    let mut poller = OperationPoller::new(server.client(), deadline);
    let operation = poller
        .run(operation)
        .await
        .map_err(|err| ToolError::remote(&err, tool))?;

    if let Some(status) = operation.error() {
        return Err(ToolError::failed(format!(
            "Error in {tool}: operation {} failed: {}",
            operation.name, status.message
        )));
    }

    let response = operation.unpack_response::<M>().map_err(|err| {
        ToolError::failed(format!("Error in {tool}: malformed operation response: {err}"))
    })?;

    match response.and_then(element_of) {
        Some(element) => Ok(text_result(format!(
            "Element found:\n{}",
            describe_element(&element)
        ))),
        None => Err(ToolError::failed(format!(
            "Error in {tool}: operation completed without an element"
        ))),
    }
}

impl ConditionSpec {
    /// Exactly one field must be set.
    fn into_proto(self) -> Result<StateCondition, String> {
        let mut conditions = Vec::new();
        if let Some(enabled) = self.enabled {
            conditions.push(Condition::Enabled(enabled));
        }
        if let Some(focused) = self.focused {
            conditions.push(Condition::Focused(focused));
        }
        if let Some(text) = self.text_equals {
            conditions.push(Condition::TextEquals(text));
        }
        if let Some(text) = self.text_contains {
            conditions.push(Condition::TextContains(text));
        }
        if let Some(attr) = self.attribute {
            conditions.push(Condition::Attribute(AttributeCondition {
                name: attr.name,
                value: attr.value,
            }));
        }
        match conditions.len() {
            0 => Err("condition must set one of enabled, focused, text_equals, text_contains, attribute".into()),
            1 => Ok(StateCondition {
                condition: conditions.pop(),
            }),
            n => Err(format!("condition must set exactly one field, got {n}")),
        }
    }
}

#[tool_router(router = element_router, vis = "pub(crate)")]
impl MacosUseServer {
    #[tool(
        description = "Find accessibility elements matching a selector. Each result line starts with the element_id used by the other element tools. Read-only."
    )]
    async fn find_elements(&self, Parameters(args): Parameters<FindElementsArgs>) -> ToolOutcome {
        const TOOL: &str = "find_elements";

        let request = FindElementsRequest {
            parent: args.parent,
            selector: Some(parse_selector(TOOL, args.selector)?),
            page_size: args.page.page_size.unwrap_or_default(),
            page_token: args.page.page_token,
        };
        let response = self
            .call(TOOL, self.client().find_elements(request))
            .await?;

        Ok(element_list(&response.elements, &response.next_page_token))
    }

    #[tool(
        description = "Find accessibility elements inside a screen region, optionally filtered by a selector. Read-only."
    )]
    async fn find_region_elements(
        &self,
        Parameters(args): Parameters<FindRegionElementsArgs>,
    ) -> ToolOutcome {
        const TOOL: &str = "find_region_elements";

        let selector = match args.selector {
            Some(spec) => Some(parse_selector(TOOL, spec)?),
            None => None,
        };
        let request = FindRegionElementsRequest {
            parent: args.parent,
            region: Some(Bounds {
                x: args.x,
                y: args.y,
                width: args.width,
                height: args.height,
            }),
            selector,
            page_size: args.page.page_size.unwrap_or_default(),
            page_token: args.page.page_token,
        };
        let response = self
            .call(TOOL, self.client().find_region_elements(request))
            .await?;

        Ok(element_list(&response.elements, &response.next_page_token))
    }

    #[tool(
        description = "Get one element with its actions and attributes (applications/{pid}/elements/{id}). Read-only."
    )]
    async fn get_element(&self, Parameters(args): Parameters<ElementNameArgs>) -> ToolOutcome {
        let element = self
            .call(
                "get_element",
                self.client()
                    .get_element(GetElementRequest { name: args.name }),
            )
            .await?;
        Ok(text_result(describe_element(&element)))
    }

    #[tool(description = "Click an element through the accessibility API.")]
    async fn click_element(&self, Parameters(args): Parameters<ClickElementArgs>) -> ToolOutcome {
        const TOOL: &str = "click_element";

        let click_type = match args.click_type {
            Some(ElementClick::Double) => ElementClickType::Double,
            Some(ElementClick::Right) => ElementClickType::Right,
            Some(ElementClick::Single) | None => ElementClickType::Single,
        };
        let done = format!("Clicked element {}", args.element_id);
        let request = ClickElementRequest {
            parent: args.parent,
            element_id: args.element_id,
            click_type: click_type as i32,
        };
        let response = self
            .call(TOOL, self.client().click_element(request))
            .await?;

        mutation_result(
            TOOL,
            response.success,
            &response.error,
            response.element.as_ref(),
            done,
        )
    }

    #[tool(description = "Set the value of an editable element such as a text field.")]
    async fn write_element_value(
        &self,
        Parameters(args): Parameters<WriteElementValueArgs>,
    ) -> ToolOutcome {
        const TOOL: &str = "write_element_value";

        let done = format!("Set value of element {}", args.element_id);
        let request = WriteElementValueRequest {
            parent: args.parent,
            element_id: args.element_id,
            value: args.value,
        };
        let response = self
            .call(TOOL, self.client().write_element_value(request))
            .await?;

        mutation_result(
            TOOL,
            response.success,
            &response.error,
            response.element.as_ref(),
            done,
        )
    }

    #[tool(
        description = "Perform a named accessibility action (e.g. AXPress, AXShowMenu) on an element."
    )]
    async fn perform_element_action(
        &self,
        Parameters(args): Parameters<PerformElementActionArgs>,
    ) -> ToolOutcome {
        const TOOL: &str = "perform_element_action";

        let done = format!("Performed {} on element {}", args.action, args.element_id);
        let request = PerformElementActionRequest {
            parent: args.parent,
            element_id: args.element_id,
            action: args.action,
        };
        let response = self
            .call(TOOL, self.client().perform_element_action(request))
            .await?;

        mutation_result(
            TOOL,
            response.success,
            &response.error,
            response.element.as_ref(),
            done,
        )
    }

    #[tool(description = "List the accessibility actions an element supports. Read-only.")]
    async fn get_element_actions(
        &self,
        Parameters(args): Parameters<ElementNameArgs>,
    ) -> ToolOutcome {
        let response = self
            .call(
                "get_element_actions",
                self.client()
                    .get_element_actions(GetElementActionsRequest {
                        name: args.name.clone(),
                    }),
            )
            .await?;

        if response.actions.is_empty() {
            return Ok(text_result(format!("Element {} supports no actions", args.name)));
        }
        Ok(text_result(format!(
            "Actions for {}: {}",
            args.name,
            response.actions.join(", ")
        )))
    }

    #[tool(description = "Walk the full accessibility tree of an application. Read-only.")]
    async fn traverse_accessibility(
        &self,
        Parameters(args): Parameters<TraverseArgs>,
    ) -> ToolOutcome {
        const TOOL: &str = "traverse_accessibility";

        let request = TraverseAccessibilityRequest {
            name: args.name.clone(),
            visible_only: args.visible_only,
        };
        let response = self
            .call(TOOL, self.client().traverse_accessibility(request))
            .await?;

        let app = if response.app.is_empty() {
            args.name.as_str()
        } else {
            response.app.as_str()
        };
        let mut text = format!("Accessibility tree for {app}");
        if let Some(stats) = &response.stats {
            let _ = write!(
                text,
                " ({} elements, {} visible, {} excluded)",
                stats.count, stats.visible_count, stats.excluded_count
            );
        }
        text.push(':');
        for element in &response.elements {
            let depth = element.path.len().saturating_sub(1);
            let _ = write!(text, "\n{}{}", "  ".repeat(depth), format_element(element));
        }
        Ok(text_result(text))
    }

    #[tool(
        description = "Wait until an element matching the selector appears. Blocks until found or the timeout elapses."
    )]
    async fn wait_element(&self, Parameters(args): Parameters<WaitElementArgs>) -> ToolOutcome {
        const TOOL: &str = "wait_element";
        let deadline = self.deadline();

        let (timeout, poll_interval) = wait_parameters(args.timeout, args.poll_interval);
        let request = WaitElementRequest {
            parent: args.parent,
            selector: Some(parse_selector(TOOL, args.selector)?),
            timeout,
            poll_interval,
        };
        let operation = self
            .call(TOOL, self.client().wait_element(request))
            .await?;

        finish_wait(self, TOOL, deadline, operation, |r: WaitElementResponse| {
            r.element
        })
        .await
    }

    #[tool(
        description = "Wait until an element reaches a state, e.g. becomes enabled or its text contains a value."
    )]
    async fn wait_element_state(
        &self,
        Parameters(args): Parameters<WaitElementStateArgs>,
    ) -> ToolOutcome {
        const TOOL: &str = "wait_element_state";
        let deadline = self.deadline();

        let condition = args
            .condition
            .into_proto()
            .map_err(|reason| ToolError::failed(format!("Error in {TOOL}: {reason}")))?;
        let (timeout, poll_interval) = wait_parameters(args.timeout, args.poll_interval);
        let request = WaitElementStateRequest {
            parent: args.parent,
            element_id: args.element_id,
            condition: Some(condition),
            timeout,
            poll_interval,
        };
        let operation = self
            .call(TOOL, self.client().wait_element_state(request))
            .await?;

        finish_wait(
            self,
            TOOL,
            deadline,
            operation,
            |r: WaitElementStateResponse| r.element,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_list_empty() {
        let reply = element_list(&[], "");
        assert_eq!(reply.text(), "No elements found matching selector");
    }

    #[test]
    fn test_mutation_failure_carries_remote_reason() {
        let err = mutation_result("click_element", false, "element is disabled", None, String::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "Error in click_element: element is disabled");

        let err = mutation_result("click_element", false, "", None, String::new()).unwrap_err();
        assert_eq!(err.to_string(), "Error in click_element: operation failed");
    }

    #[test]
    fn test_condition_requires_exactly_one_field() {
        assert!(ConditionSpec::default().into_proto().is_err());

        let both = ConditionSpec {
            enabled: Some(true),
            focused: Some(true),
            ..Default::default()
        };
        assert!(both.into_proto().unwrap_err().contains("exactly one"));

        let one = ConditionSpec {
            text_contains: Some("Done".into()),
            ..Default::default()
        };
        assert_eq!(
            one.into_proto().unwrap().condition,
            Some(Condition::TextContains("Done".into()))
        );
    }
}
