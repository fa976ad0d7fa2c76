use prost_types::{FieldMask, Timestamp};
use std::collections::HashMap;

/// A recorded sequence of tool invocations, `macros/{macro_id}`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Macro {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub display_name: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(message, repeated, tag = "4")]
    pub actions: Vec<MacroAction>,
    #[prost(message, repeated, tag = "5")]
    pub parameters: Vec<MacroParameter>,
    #[prost(string, repeated, tag = "6")]
    pub tags: Vec<String>,
    #[prost(message, optional, tag = "7")]
    pub create_time: Option<Timestamp>,
    #[prost(message, optional, tag = "8")]
    pub update_time: Option<Timestamp>,
    #[prost(int64, tag = "9")]
    pub usage_count: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MacroAction {
    #[prost(string, tag = "1")]
    pub description: String,
    /// Tool to run, e.g. `click` or `type_text`.
    #[prost(string, tag = "2")]
    pub tool: String,
    /// Tool arguments. Non-string JSON values are carried in their JSON text form.
    #[prost(map = "string, string", tag = "3")]
    pub arguments: HashMap<String, String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MacroParameter {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(string, tag = "3")]
    pub default_value: String,
    #[prost(bool, tag = "4")]
    pub required: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateMacroRequest {
    #[prost(message, optional, tag = "1")]
    pub definition: Option<Macro>,
    #[prost(string, tag = "2")]
    pub macro_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMacroRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListMacrosRequest {
    #[prost(int32, tag = "1")]
    pub page_size: i32,
    #[prost(string, tag = "2")]
    pub page_token: String,
    #[prost(string, tag = "3")]
    pub filter: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListMacrosResponse {
    #[prost(message, repeated, tag = "1")]
    pub macros: Vec<Macro>,
    #[prost(string, tag = "2")]
    pub next_page_token: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateMacroRequest {
    #[prost(message, optional, tag = "1")]
    pub definition: Option<Macro>,
    #[prost(message, optional, tag = "2")]
    pub update_mask: Option<FieldMask>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteMacroRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExecuteMacroRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(map = "string, string", tag = "2")]
    pub parameter_values: HashMap<String, String>,
    /// Seconds.
    #[prost(double, tag = "3")]
    pub timeout: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExecuteMacroResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(int32, tag = "2")]
    pub actions_executed: i32,
    #[prost(string, tag = "3")]
    pub error: String,
}
