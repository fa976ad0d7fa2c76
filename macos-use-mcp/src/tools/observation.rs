use super::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ObservedChanges {
    ElementChanges,
    WindowChanges,
    ApplicationChanges,
    AttributeChanges,
    TreeChanges,
}

impl From<ObservedChanges> for ObservationType {
    fn from(kind: ObservedChanges) -> Self {
        match kind {
            ObservedChanges::ElementChanges => ObservationType::ElementChanges,
            ObservedChanges::WindowChanges => ObservationType::WindowChanges,
            ObservedChanges::ApplicationChanges => ObservationType::ApplicationChanges,
            ObservedChanges::AttributeChanges => ObservationType::AttributeChanges,
            ObservedChanges::TreeChanges => ObservationType::TreeChanges,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateObservationArgs {
    #[schemars(description = "Application resource name (applications/{pid})")]
    parent: String,
    #[serde(rename = "type")]
    #[schemars(description = "What to observe")]
    kind: ObservedChanges,
    #[serde(default)]
    #[schemars(description = "Optional ID for the new observation")]
    observation_id: String,
    #[serde(default)]
    #[schemars(description = "Seconds between checks (default: server default)")]
    poll_interval: f64,
    #[serde(default)]
    #[schemars(description = "Ignore elements that are not on screen")]
    visible_only: bool,
    #[serde(default)]
    #[schemars(description = "Attributes to watch, for attribute_changes")]
    attributes: Vec<String>,
    #[serde(default)]
    #[schemars(description = "Only report elements with these roles")]
    roles: Vec<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ObservationNameArgs {
    #[schemars(description = "Observation resource name")]
    name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListObservationsArgs {
    #[schemars(description = "Application resource name (applications/{pid})")]
    parent: String,
    #[serde(flatten)]
    page: PageArgs,
}

fn type_name(kind: i32) -> &'static str {
    match ObservationType::try_from(kind) {
        Ok(ObservationType::ElementChanges) => "element_changes",
        Ok(ObservationType::WindowChanges) => "window_changes",
        Ok(ObservationType::ApplicationChanges) => "application_changes",
        Ok(ObservationType::AttributeChanges) => "attribute_changes",
        Ok(ObservationType::TreeChanges) => "tree_changes",
        _ => "unspecified",
    }
}

fn state_name(state: i32) -> &'static str {
    match ObservationState::try_from(state) {
        Ok(ObservationState::Pending) => "pending",
        Ok(ObservationState::Active) => "active",
        Ok(ObservationState::Completed) => "completed",
        Ok(ObservationState::Cancelled) => "cancelled",
        Ok(ObservationState::Failed) => "failed",
        _ => "unspecified",
    }
}

fn format_observation(observation: &Observation) -> String {
    let mut text = format!(
        "{}: {} [{}]\n  created {}",
        observation.name,
        type_name(observation.observation_type),
        state_name(observation.state),
        format_timestamp(observation.create_time.as_ref()),
    );
    if observation.start_time.is_some() {
        let _ = write!(
            text,
            ", started {}",
            format_timestamp(observation.start_time.as_ref())
        );
    }
    if observation.end_time.is_some() {
        let _ = write!(
            text,
            ", ended {}",
            format_timestamp(observation.end_time.as_ref())
        );
    }
    if let Some(filter) = &observation.filter {
        if !filter.roles.is_empty() {
            let _ = write!(text, "\n  roles: {}", filter.roles.join(", "));
        }
        if !filter.attributes.is_empty() {
            let _ = write!(text, "\n  attributes: {}", filter.attributes.join(", "));
        }
    }
    text
}

#[tool_router(router = observation_router, vis = "pub(crate)")]
impl MacosUseServer {
    #[tool(
        description = "Start observing an application for UI changes. Poll get_observation for its state and cancel it when done."
    )]
    async fn create_observation(
        &self,
        Parameters(args): Parameters<CreateObservationArgs>,
    ) -> ToolOutcome {
        const TOOL: &str = "create_observation";
        let request = CreateObservationRequest {
            parent: args.parent,
            observation: Some(Observation {
                observation_type: ObservationType::from(args.kind) as i32,
                filter: Some(ObservationFilter {
                    poll_interval: args.poll_interval.max(0.0),
                    visible_only: args.visible_only,
                    attributes: args.attributes,
                    roles: args.roles,
                }),
                ..Default::default()
            }),
            observation_id: args.observation_id,
        };
        let observation = self
            .call(TOOL, self.client().create_observation(request))
            .await?;

        Ok(text_result(format!(
            "Created observation {}",
            format_observation(&observation)
        )))
    }

    #[tool(
        description = "Get an observation's state (applications/{pid}/observations/{id}). Read-only."
    )]
    async fn get_observation(
        &self,
        Parameters(args): Parameters<ObservationNameArgs>,
    ) -> ToolOutcome {
        let observation = self
            .call(
                "get_observation",
                self.client()
                    .get_observation(GetObservationRequest { name: args.name }),
            )
            .await?;
        Ok(text_result(format_observation(&observation)))
    }

    #[tool(description = "List observations of an application. Read-only.")]
    async fn list_observations(
        &self,
        Parameters(args): Parameters<ListObservationsArgs>,
    ) -> ToolOutcome {
        let request = ListObservationsRequest {
            parent: args.parent,
            page_size: args.page.page_size.unwrap_or_default(),
            page_token: args.page.page_token,
        };
        let response = self
            .call("list_observations", self.client().list_observations(request))
            .await?;

        if response.observations.is_empty() {
            return Ok(text_result("No observations found"));
        }
        let mut text = format!("Found {} observations:", response.observations.len());
        for observation in &response.observations {
            let _ = write!(text, "\n{}", format_observation(observation));
        }
        push_next_page(&mut text, &response.next_page_token);
        Ok(text_result(text))
    }

    #[tool(description = "Stop an active observation.")]
    async fn cancel_observation(
        &self,
        Parameters(args): Parameters<ObservationNameArgs>,
    ) -> ToolOutcome {
        let observation = self
            .call(
                "cancel_observation",
                self.client()
                    .cancel_observation(CancelObservationRequest { name: args.name }),
            )
            .await?;
        Ok(text_result(format!(
            "Cancelled observation {}",
            format_observation(&observation)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_round_trip() {
        for (name, kind) in [
            ("element_changes", ObservedChanges::ElementChanges),
            ("window_changes", ObservedChanges::WindowChanges),
            ("tree_changes", ObservedChanges::TreeChanges),
        ] {
            let parsed: ObservedChanges = serde_json::from_value(serde_json::json!(name)).unwrap();
            assert_eq!(parsed, kind);
            assert_eq!(type_name(ObservationType::from(kind) as i32), name);
        }
        assert!(serde_json::from_value::<ObservedChanges>(serde_json::json!("everything")).is_err());
    }
}
