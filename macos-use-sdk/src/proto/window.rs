use super::{Display, Window};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListWindowsRequest {
    /// `applications/{pid}`, or empty for all applications.
    #[prost(string, tag = "1")]
    pub parent: String,
    #[prost(int32, tag = "2")]
    pub page_size: i32,
    #[prost(string, tag = "3")]
    pub page_token: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListWindowsResponse {
    #[prost(message, repeated, tag = "1")]
    pub windows: Vec<Window>,
    #[prost(string, tag = "2")]
    pub next_page_token: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetWindowRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FocusWindowRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MoveWindowRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(double, tag = "2")]
    pub x: f64,
    #[prost(double, tag = "3")]
    pub y: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResizeWindowRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(double, tag = "2")]
    pub width: f64,
    #[prost(double, tag = "3")]
    pub height: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MinimizeWindowRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RestoreWindowRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CloseWindowRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(bool, tag = "2")]
    pub force: bool,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct CloseWindowResponse {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetWindowStateRequest {
    /// `applications/{pid}/windows/{window_id}/state`
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ListDisplaysRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListDisplaysResponse {
    #[prost(message, repeated, tag = "1")]
    pub displays: Vec<Display>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetDisplayRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct CaptureCursorPositionRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CaptureCursorPositionResponse {
    #[prost(double, tag = "1")]
    pub x: f64,
    #[prost(double, tag = "2")]
    pub y: f64,
    /// Display the cursor is on, `displays/{display_id}`.
    #[prost(string, tag = "3")]
    pub display: String,
}
