use super::prelude::*;
use macos_use_sdk::proto::input_action::InputType;

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct Common {
    #[serde(default)]
    #[schemars(description = "Target application (applications/{pid}). Omit for desktop-wide input")]
    parent: String,
    #[serde(default)]
    #[schemars(description = "Visualize the input on screen")]
    show_animation: bool,
    #[serde(default)]
    #[schemars(description = "Visualization duration in seconds")]
    animation_duration: f64,
}

#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<MouseButton> for ClickType {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => ClickType::Left,
            MouseButton::Right => ClickType::Right,
            MouseButton::Middle => ClickType::Middle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    Pinch,
    Zoom,
    Rotate,
    Swipe,
}

#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SwipeTo {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ClickArgs {
    #[schemars(description = "X coordinate in global screen points")]
    x: f64,
    #[schemars(description = "Y coordinate in global screen points")]
    y: f64,
    #[schemars(description = "Mouse button (default: left)")]
    button: Option<MouseButton>,
    #[serde(default, deserialize_with = "de::opt_int")]
    #[schemars(description = "Number of clicks (default: 1)")]
    click_count: Option<i32>,
    #[serde(flatten)]
    common: Common,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PointArgs {
    #[schemars(description = "X coordinate in global screen points")]
    x: f64,
    #[schemars(description = "Y coordinate in global screen points")]
    y: f64,
    #[serde(flatten)]
    common: Common,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TypeTextArgs {
    #[schemars(description = "Text to type")]
    text: String,
    #[serde(default)]
    #[schemars(description = "Seconds between characters")]
    char_delay: f64,
    #[serde(default)]
    #[schemars(description = "Route text through the input method")]
    use_ime: bool,
    #[serde(flatten)]
    common: Common,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PressKeyArgs {
    #[schemars(description = "Key name such as 'return', 'tab', 'escape', 'a'")]
    key: String,
    #[serde(default)]
    #[schemars(
        description = "Modifier keys held during the press: command, option, control, shift, function, capslock"
    )]
    modifiers: Vec<String>,
    #[serde(flatten)]
    common: Common,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PointerArgs {
    #[schemars(description = "X coordinate in global screen points")]
    x: f64,
    #[schemars(description = "Y coordinate in global screen points")]
    y: f64,
    #[schemars(description = "Duration in seconds")]
    duration: Option<f64>,
    #[serde(flatten)]
    common: Common,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ScrollArgs {
    #[serde(default)]
    #[schemars(description = "Horizontal scroll amount (positive scrolls right)")]
    horizontal: f64,
    #[serde(default)]
    #[schemars(description = "Vertical scroll amount (positive scrolls down)")]
    vertical: f64,
    #[schemars(description = "X coordinate to scroll at")]
    x: Option<f64>,
    #[schemars(description = "Y coordinate to scroll at")]
    y: Option<f64>,
    #[serde(default)]
    #[schemars(description = "Scroll duration in seconds")]
    duration: f64,
    #[serde(flatten)]
    common: Common,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DragArgs {
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    #[schemars(description = "Mouse button (default: left)")]
    button: Option<MouseButton>,
    #[serde(default)]
    #[schemars(description = "Drag duration in seconds")]
    duration: f64,
    #[serde(flatten)]
    common: Common,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GestureArgs {
    gesture_type: GestureKind,
    center_x: f64,
    center_y: f64,
    #[serde(default)]
    #[schemars(description = "Scale factor for pinch/zoom")]
    scale: f64,
    #[serde(default)]
    #[schemars(description = "Rotation in degrees")]
    rotation: f64,
    #[serde(default, deserialize_with = "de::opt_int")]
    #[schemars(description = "Number of fingers (default: 2)")]
    finger_count: Option<i32>,
    #[schemars(description = "Swipe direction")]
    direction: Option<SwipeTo>,
    #[serde(flatten)]
    common: Common,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetInputArgs {
    #[schemars(description = "Input resource name")]
    name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListInputsArgs {
    #[serde(default)]
    #[schemars(description = "Application resource name (applications/{pid})")]
    parent: String,
    #[serde(default)]
    #[schemars(description = "Filter expression, e.g. state=COMPLETED")]
    filter: String,
    #[serde(flatten)]
    page: PageArgs,
}

fn input_state_name(state: i32) -> &'static str {
    match InputState::try_from(state) {
        Ok(InputState::Pending) => "pending",
        Ok(InputState::Executing) => "executing",
        Ok(InputState::Completed) => "completed",
        Ok(InputState::Failed) => "failed",
        _ => "unspecified",
    }
}

/// Submits one input action and reports the resulting input.
async fn submit(
    server: &MacosUseServer,
    tool: &str,
    common: Common,
    input_type: InputType,
    summary: String,
) -> ToolOutcome {
    let request = CreateInputRequest {
        parent: common.parent,
        input: Some(Input {
            action: Some(InputAction {
                input_type: Some(input_type),
                show_animation: common.show_animation,
                animation_duration: common.animation_duration,
            }),
            ..Default::default()
        }),
        input_id: String::new(),
    };
    let input = server
        .call(tool, server.client().create_input(request))
        .await?;

    if input.state == InputState::Failed as i32 {
        let reason = if input.error.is_empty() {
            "input failed"
        } else {
            input.error.as_str()
        };
        return Err(ToolError::failed(format!("Error in {tool}: {reason}")));
    }

    let mut text = summary;
    if !input.name.is_empty() {
        let _ = write!(text, " ({}, {})", input.name, input_state_name(input.state));
    }
    Ok(text_result(text))
}

async fn click_at(
    server: &MacosUseServer,
    tool: &str,
    (x, y): (f64, f64),
    common: Common,
    click_type: ClickType,
    click_count: i32,
) -> ToolOutcome {
    let verb = match (click_type, click_count) {
        (ClickType::Right, _) => "Right-clicked".to_string(),
        (_, 2) => "Double-clicked".to_string(),
        (_, 1) => "Clicked".to_string(),
        (_, n) => format!("Clicked {n} times"),
    };
    let summary = format!("{verb} at ({x}, {y})");
    let input_type = InputType::Click(MouseClick {
        position: Some(Point { x, y }),
        click_type: click_type as i32,
        click_count,
    });
    submit(server, tool, common, input_type, summary).await
}

fn parse_modifier(name: &str) -> Option<Modifier> {
    let modifier = match name.to_ascii_lowercase().as_str() {
        "command" | "cmd" => Modifier::Command,
        "option" | "alt" => Modifier::OptionKey,
        "control" | "ctrl" => Modifier::Control,
        "shift" => Modifier::Shift,
        "function" | "fn" => Modifier::Function,
        "capslock" | "caps_lock" => Modifier::CapsLock,
        _ => return None,
    };
    Some(modifier)
}

fn gesture_name(kind: GestureKind) -> &'static str {
    match kind {
        GestureKind::Pinch => "pinch",
        GestureKind::Zoom => "zoom",
        GestureKind::Rotate => "rotate",
        GestureKind::Swipe => "swipe",
    }
}

fn describe_action(action: Option<&InputAction>) -> String {
    match action.and_then(|a| a.input_type.as_ref()) {
        Some(InputType::Click(c)) => {
            let (x, y) = c.position.as_ref().map(|p| (p.x, p.y)).unwrap_or_default();
            format!("click x{} at ({x}, {y})", c.click_count.max(1))
        }
        Some(InputType::TypeText(t)) => format!("type_text ({} chars)", t.text.chars().count()),
        Some(InputType::PressKey(k)) => format!("press_key {}", k.key),
        Some(InputType::MoveMouse(_)) => "mouse_move".to_string(),
        Some(InputType::Scroll(_)) => "scroll".to_string(),
        Some(InputType::Drag(_)) => "drag".to_string(),
        Some(InputType::Hover(_)) => "hover".to_string(),
        Some(InputType::Gesture(_)) => "gesture".to_string(),
        None => "unknown action".to_string(),
    }
}

fn format_input(input: &Input) -> String {
    let mut line = format!(
        "{}: {} [{}] created {}",
        input.name,
        describe_action(input.action.as_ref()),
        input_state_name(input.state),
        format_timestamp(input.create_time.as_ref()),
    );
    if input.complete_time.is_some() {
        let _ = write!(
            line,
            ", completed {}",
            format_timestamp(input.complete_time.as_ref())
        );
    }
    if !input.error.is_empty() {
        let _ = write!(line, "\n  Error: {}", input.error);
    }
    line
}

#[tool_router(router = input_router, vis = "pub(crate)")]
impl MacosUseServer {
    #[tool(description = "Click at screen coordinates.")]
    async fn click(&self, Parameters(args): Parameters<ClickArgs>) -> ToolOutcome {
        let click_type = args.button.map(ClickType::from).unwrap_or(ClickType::Left);
        let count = args.click_count.filter(|c| *c > 0).unwrap_or(1);
        click_at(self, "click", (args.x, args.y), args.common, click_type, count).await
    }

    #[tool(description = "Double-click at screen coordinates.")]
    async fn double_click(&self, Parameters(args): Parameters<PointArgs>) -> ToolOutcome {
        click_at(self, "double_click", (args.x, args.y), args.common, ClickType::Left, 2).await
    }

    #[tool(description = "Right-click (context click) at screen coordinates.")]
    async fn right_click(&self, Parameters(args): Parameters<PointArgs>) -> ToolOutcome {
        click_at(self, "right_click", (args.x, args.y), args.common, ClickType::Right, 1).await
    }

    #[tool(description = "Type text into the focused element.")]
    async fn type_text(&self, Parameters(args): Parameters<TypeTextArgs>) -> ToolOutcome {
        let summary = format!("Typed {} characters", args.text.chars().count());
        let input_type = InputType::TypeText(TextInput {
            text: args.text,
            char_delay: args.char_delay,
            use_ime: args.use_ime,
        });
        submit(self, "type_text", args.common, input_type, summary).await
    }

    #[tool(
        description = "Press a key, optionally with modifiers, e.g. key 'c' with ['command']."
    )]
    async fn press_key(&self, Parameters(args): Parameters<PressKeyArgs>) -> ToolOutcome {
        const TOOL: &str = "press_key";

        let mut modifiers = Vec::with_capacity(args.modifiers.len());
        for name in &args.modifiers {
            match parse_modifier(name) {
                Some(modifier) => modifiers.push(modifier as i32),
                None => {
                    return Err(ToolError::failed(format!(
                        "Error in {TOOL}: unknown modifier '{name}'"
                    )))
                }
            }
        }

        let summary = if args.modifiers.is_empty() {
            format!("Pressed {}", args.key)
        } else {
            format!("Pressed {}+{}", args.modifiers.join("+"), args.key)
        };
        let input_type = InputType::PressKey(KeyPress {
            key: args.key,
            modifiers,
        });
        submit(self, TOOL, args.common, input_type, summary).await
    }

    #[tool(description = "Move the mouse pointer to screen coordinates.")]
    async fn mouse_move(&self, Parameters(args): Parameters<PointerArgs>) -> ToolOutcome {
        let summary = format!("Moved mouse to ({}, {})", args.x, args.y);
        let input_type = InputType::MoveMouse(MouseMove {
            position: Some(Point { x: args.x, y: args.y }),
            duration: args.duration.unwrap_or_default(),
        });
        submit(self, "mouse_move", args.common, input_type, summary).await
    }

    #[tool(description = "Scroll by the given amounts, optionally at a position.")]
    async fn scroll(&self, Parameters(args): Parameters<ScrollArgs>) -> ToolOutcome {
        const TOOL: &str = "scroll";

        if args.horizontal == 0.0 && args.vertical == 0.0 {
            return Err(ToolError::failed(format!(
                "Error in {TOOL}: at least one of horizontal or vertical must be non-zero"
            )));
        }

        let position = match (args.x, args.y) {
            (Some(x), Some(y)) => Some(Point { x, y }),
            _ => None,
        };
        let summary = format!(
            "Scrolled horizontal={} vertical={}",
            args.horizontal, args.vertical
        );
        let input_type = InputType::Scroll(Scroll {
            horizontal: args.horizontal,
            vertical: args.vertical,
            position,
            duration: args.duration,
        });
        submit(self, TOOL, args.common, input_type, summary).await
    }

    #[tool(description = "Press at a start point, move to an end point and release.")]
    async fn drag(&self, Parameters(args): Parameters<DragArgs>) -> ToolOutcome {
        let summary = format!(
            "Dragged from ({}, {}) to ({}, {})",
            args.start_x, args.start_y, args.end_x, args.end_y
        );
        let button = args.button.map(ClickType::from).unwrap_or(ClickType::Left);
        let input_type = InputType::Drag(MouseDrag {
            start: Some(Point {
                x: args.start_x,
                y: args.start_y,
            }),
            end: Some(Point {
                x: args.end_x,
                y: args.end_y,
            }),
            button: button as i32,
            duration: args.duration,
        });
        submit(self, "drag", args.common, input_type, summary).await
    }

    #[tool(
        description = "Move the pointer to a position and hold it there, e.g. to show a tooltip. Duration defaults to 1 second."
    )]
    async fn hover(&self, Parameters(args): Parameters<PointerArgs>) -> ToolOutcome {
        let duration = args.duration.unwrap_or(1.0);
        let summary = format!("Hovered at ({}, {}) for {duration}s", args.x, args.y);
        let input_type = InputType::Hover(Hover {
            position: Some(Point { x: args.x, y: args.y }),
            duration,
        });
        submit(self, "hover", args.common, input_type, summary).await
    }

    #[tool(
        description = "Perform a trackpad gesture (pinch, zoom, rotate, swipe) around a center point."
    )]
    async fn gesture(&self, Parameters(args): Parameters<GestureArgs>) -> ToolOutcome {
        const TOOL: &str = "gesture";

        let gesture_type = match args.gesture_type {
            GestureKind::Pinch => GestureType::Pinch,
            GestureKind::Zoom => GestureType::Zoom,
            GestureKind::Rotate => GestureType::Rotate,
            GestureKind::Swipe => GestureType::Swipe,
        };
        let direction = match args.direction {
            Some(SwipeTo::Up) => SwipeDirection::Up,
            Some(SwipeTo::Down) => SwipeDirection::Down,
            Some(SwipeTo::Left) => SwipeDirection::Left,
            Some(SwipeTo::Right) => SwipeDirection::Right,
            None => SwipeDirection::Unspecified,
        };
        if gesture_type == GestureType::Swipe && direction == SwipeDirection::Unspecified {
            return Err(ToolError::failed(format!(
                "Error in {TOOL}: swipe requires a direction"
            )));
        }

        let summary = format!(
            "Performed {} gesture at ({}, {})",
            gesture_name(args.gesture_type),
            args.center_x,
            args.center_y
        );
        let input_type = InputType::Gesture(Gesture {
            center: Some(Point {
                x: args.center_x,
                y: args.center_y,
            }),
            gesture_type: gesture_type as i32,
            scale: args.scale,
            rotation: args.rotation,
            finger_count: args.finger_count.unwrap_or(2),
            direction: direction as i32,
        });
        submit(self, TOOL, args.common, input_type, summary).await
    }

    #[tool(
        description = "Get the state of a previously submitted input (applications/{pid}/inputs/{id})."
    )]
    async fn get_input(&self, Parameters(args): Parameters<GetInputArgs>) -> ToolOutcome {
        let input = self
            .call(
                "get_input",
                self.client()
                    .get_input(GetInputRequest { name: args.name }),
            )
            .await?;
        Ok(text_result(format_input(&input)))
    }

    #[tool(description = "List inputs submitted to an application.")]
    async fn list_inputs(&self, Parameters(args): Parameters<ListInputsArgs>) -> ToolOutcome {
        let request = ListInputsRequest {
            parent: args.parent,
            page_size: args.page.page_size.unwrap_or_default(),
            page_token: args.page.page_token,
            filter: args.filter,
        };
        let response = self
            .call("list_inputs", self.client().list_inputs(request))
            .await?;

        if response.inputs.is_empty() {
            let mut text = "No inputs found".to_string();
            push_next_page(&mut text, &response.next_page_token);
            return Ok(text_result(text));
        }

        let mut text = format!("Found {} inputs:", response.inputs.len());
        for input in &response.inputs {
            let _ = write!(text, "\n{}", format_input(input));
        }
        push_next_page(&mut text, &response.next_page_token);
        Ok(text_result(text))
    }
}
