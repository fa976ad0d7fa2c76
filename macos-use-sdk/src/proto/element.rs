use super::{Bounds, Element, ElementSelector};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FindElementsRequest {
    /// `applications/{pid}`, or empty to search the whole desktop.
    #[prost(string, tag = "1")]
    pub parent: String,
    #[prost(message, optional, tag = "2")]
    pub selector: Option<ElementSelector>,
    #[prost(int32, tag = "3")]
    pub page_size: i32,
    #[prost(string, tag = "4")]
    pub page_token: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FindElementsResponse {
    #[prost(message, repeated, tag = "1")]
    pub elements: Vec<Element>,
    #[prost(string, tag = "2")]
    pub next_page_token: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FindRegionElementsRequest {
    #[prost(string, tag = "1")]
    pub parent: String,
    #[prost(message, optional, tag = "2")]
    pub region: Option<Bounds>,
    #[prost(message, optional, tag = "3")]
    pub selector: Option<ElementSelector>,
    #[prost(int32, tag = "4")]
    pub page_size: i32,
    #[prost(string, tag = "5")]
    pub page_token: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FindRegionElementsResponse {
    #[prost(message, repeated, tag = "1")]
    pub elements: Vec<Element>,
    #[prost(string, tag = "2")]
    pub next_page_token: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetElementRequest {
    /// `applications/{pid}/elements/{element_id}`
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClickElementRequest {
    #[prost(string, tag = "1")]
    pub parent: String,
    #[prost(string, tag = "2")]
    pub element_id: String,
    #[prost(enumeration = "ElementClickType", tag = "3")]
    pub click_type: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ElementClickType {
    Unspecified = 0,
    Single = 1,
    Double = 2,
    Right = 3,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClickElementResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub error: String,
    #[prost(message, optional, tag = "3")]
    pub element: Option<Element>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WriteElementValueRequest {
    #[prost(string, tag = "1")]
    pub parent: String,
    #[prost(string, tag = "2")]
    pub element_id: String,
    #[prost(string, tag = "3")]
    pub value: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WriteElementValueResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub error: String,
    #[prost(message, optional, tag = "3")]
    pub element: Option<Element>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PerformElementActionRequest {
    #[prost(string, tag = "1")]
    pub parent: String,
    #[prost(string, tag = "2")]
    pub element_id: String,
    /// Accessibility action name, e.g. `AXPress`.
    #[prost(string, tag = "3")]
    pub action: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PerformElementActionResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub error: String,
    #[prost(message, optional, tag = "3")]
    pub element: Option<Element>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetElementActionsRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ElementActions {
    #[prost(string, repeated, tag = "1")]
    pub actions: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TraverseAccessibilityRequest {
    /// `applications/{pid}`
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(bool, tag = "2")]
    pub visible_only: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TraverseAccessibilityResponse {
    #[prost(string, tag = "1")]
    pub app: String,
    #[prost(message, repeated, tag = "2")]
    pub elements: Vec<Element>,
    #[prost(message, optional, tag = "3")]
    pub stats: Option<TraversalStats>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct TraversalStats {
    #[prost(int32, tag = "1")]
    pub count: i32,
    #[prost(int32, tag = "2")]
    pub visible_count: i32,
    #[prost(int32, tag = "3")]
    pub excluded_count: i32,
}

/// Starts a long-running wait for an element matching `selector`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WaitElementRequest {
    #[prost(string, tag = "1")]
    pub parent: String,
    #[prost(message, optional, tag = "2")]
    pub selector: Option<ElementSelector>,
    /// Seconds.
    #[prost(double, tag = "3")]
    pub timeout: f64,
    /// Seconds.
    #[prost(double, tag = "4")]
    pub poll_interval: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WaitElementResponse {
    #[prost(message, optional, tag = "1")]
    pub element: Option<Element>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WaitElementStateRequest {
    #[prost(string, tag = "1")]
    pub parent: String,
    #[prost(string, tag = "2")]
    pub element_id: String,
    #[prost(message, optional, tag = "3")]
    pub condition: Option<StateCondition>,
    #[prost(double, tag = "4")]
    pub timeout: f64,
    #[prost(double, tag = "5")]
    pub poll_interval: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StateCondition {
    #[prost(oneof = "state_condition::Condition", tags = "1, 2, 3, 4, 5")]
    pub condition: Option<state_condition::Condition>,
}

pub mod state_condition {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Condition {
        #[prost(bool, tag = "1")]
        Enabled(bool),
        #[prost(bool, tag = "2")]
        Focused(bool),
        #[prost(string, tag = "3")]
        TextEquals(String),
        #[prost(string, tag = "4")]
        TextContains(String),
        #[prost(message, tag = "5")]
        Attribute(super::AttributeCondition),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AttributeCondition {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub value: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WaitElementStateResponse {
    #[prost(message, optional, tag = "1")]
    pub element: Option<Element>,
}
