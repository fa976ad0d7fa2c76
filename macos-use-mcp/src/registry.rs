//! Tool definitions and the declarative input schemas checked before dispatch.

use rmcp::model::{JsonObject, Tool};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// JSON Schema primitive types understood by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

impl PropertyType {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "integer" => Some(Self::Integer),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            "array" => Some(Self::Array),
            "object" => Some(Self::Object),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySchema {
    /// `None` when the schema leaves the type open.
    pub kind: Option<PropertyType>,
    pub description: Option<String>,
    pub enum_values: Option<Vec<String>>,
    pub items: Option<Box<PropertySchema>>,
}

impl PropertySchema {
    pub fn of(kind: PropertyType) -> Self {
        Self {
            kind: Some(kind),
            ..Default::default()
        }
    }

    pub fn with_enum<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    fn from_json(value: &Value, definitions: Option<&JsonObject>) -> Self {
        let resolved = resolve(value, definitions);
        let kind = match resolved.get("type") {
            Some(Value::String(name)) => PropertyType::parse(name),
            // `["integer", "null"]` style unions: first concrete type wins.
            Some(Value::Array(names)) => names
                .iter()
                .filter_map(Value::as_str)
                .find_map(PropertyType::parse),
            _ => None,
        };

        Self {
            kind,
            description: value
                .get("description")
                .or_else(|| resolved.get("description"))
                .and_then(Value::as_str)
                .map(str::to_string),
            enum_values: resolved.get("enum").and_then(Value::as_array).map(|values| {
                values
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            }),
            items: resolved
                .get("items")
                .filter(|items| items.is_object())
                .map(|items| Box::new(Self::from_json(items, definitions))),
        }
    }
}

/// Upper bound on `$ref` and combinator hops followed for one property.
const MAX_RESOLVE_DEPTH: usize = 8;

fn is_null_schema(schema: &Value) -> bool {
    schema.get("type").and_then(Value::as_str) == Some("null")
        || schema.get("const").is_some_and(Value::is_null)
}

/// Follows `$ref` into the root definitions and unwraps `allOf`, `anyOf`
/// and `oneOf` to their first non-null branch, so `Option<Enum>` reads as
/// the enum itself.
fn resolve<'a>(mut value: &'a Value, definitions: Option<&'a JsonObject>) -> &'a Value {
    for _ in 0..MAX_RESOLVE_DEPTH {
        if let Some(target) = value.get("$ref").and_then(Value::as_str) {
            let key = target.rsplit('/').next().unwrap_or_default();
            match definitions.and_then(|defs| defs.get(key)) {
                Some(definition) => {
                    value = definition;
                    continue;
                }
                None => break,
            }
        }
        if value.get("type").is_some() {
            break;
        }
        let branch = ["allOf", "anyOf", "oneOf"]
            .iter()
            .find_map(|keyword| value.get(*keyword).and_then(Value::as_array))
            .and_then(|branches| branches.iter().find(|branch| !is_null_schema(branch)));
        match branch {
            Some(branch) => value = branch,
            None => break,
        }
    }
    value
}

/// Properties are kept in schema map order so the first violation reported is stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSchema {
    pub properties: Vec<(String, PropertySchema)>,
    pub required: Vec<String>,
}

impl InputSchema {
    /// Reads a loosely typed JSON schema. Non-string members of `required`
    /// and `enum` are ignored, as are unknown keywords. Property `$ref`s
    /// are resolved against the root `definitions` (or `$defs`).
    pub fn from_json(schema: &Value) -> Self {
        let definitions = schema
            .get("definitions")
            .or_else(|| schema.get("$defs"))
            .and_then(Value::as_object);
        let properties = schema
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| {
                props
                    .iter()
                    .map(|(name, prop)| {
                        (name.clone(), PropertySchema::from_json(prop, definitions))
                    })
                    .collect()
            })
            .unwrap_or_default();

        let required = schema
            .get("required")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            properties,
            required,
        }
    }

    pub fn property(&self, name: &str) -> Option<&PropertySchema> {
        self.properties
            .iter()
            .find(|(prop, _)| prop == name)
            .map(|(_, schema)| schema)
    }

    pub fn has_properties(&self) -> bool {
        !self.properties.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// Schema as advertised in `tools/list`.
    pub input_schema: Arc<JsonObject>,
    /// Parsed form used by the validator. `None` means any arguments are accepted.
    pub schema: Option<InputSchema>,
}

impl ToolDefinition {
    pub fn new(name: &str, description: &str, input_schema: Value) -> Self {
        let raw = match input_schema {
            Value::Object(map) => map,
            _ => JsonObject::new(),
        };
        let schema = Some(InputSchema::from_json(&Value::Object(raw.clone())));
        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema: Arc::new(raw),
            schema,
        }
    }

    /// Definition of a tool generated by the tool router.
    pub fn from_tool(tool: Tool) -> Self {
        let schema = Some(InputSchema::from_json(&Value::Object(
            tool.input_schema.as_ref().clone(),
        )));
        Self {
            name: tool.name.into_owned(),
            description: tool.description.map(|d| d.into_owned()).unwrap_or_default(),
            input_schema: tool.input_schema,
            schema,
        }
    }

    /// A tool that declares no schema at all.
    pub fn without_schema(name: &str, description: &str) -> Self {
        let mut raw = JsonObject::new();
        raw.insert("type".into(), Value::String("object".into()));
        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema: Arc::new(raw),
            schema: None,
        }
    }

    pub fn to_tool(&self) -> Tool {
        Tool::new(
            self.name.clone(),
            self.description.clone(),
            self.input_schema.clone(),
        )
    }
}

/// Read-only after construction; shared between requests behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new(tools: Vec<ToolDefinition>) -> Self {
        let index = tools
            .iter()
            .enumerate()
            .map(|(i, tool)| (tool.name.clone(), i))
            .collect();
        Self { tools, index }
    }

    /// Sorted by name so `tools/list` is stable across runs.
    pub fn from_tools(tools: Vec<Tool>) -> Self {
        let mut tools: Vec<ToolDefinition> =
            tools.into_iter().map(ToolDefinition::from_tool).collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        Self::new(tools)
    }

    /// Every tool this server implements.
    pub fn builtin() -> Self {
        Self::from_tools(crate::server::MacosUseServer::tool_router().list_all())
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn to_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(ToolDefinition::to_tool).collect()
    }
}
