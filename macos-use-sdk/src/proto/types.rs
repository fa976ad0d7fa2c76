//! Shared resource messages of `macosusesdk.v1`.

use std::collections::HashMap;

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Point {
    #[prost(double, tag = "1")]
    pub x: f64,
    #[prost(double, tag = "2")]
    pub y: f64,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Bounds {
    #[prost(double, tag = "1")]
    pub x: f64,
    #[prost(double, tag = "2")]
    pub y: f64,
    #[prost(double, tag = "3")]
    pub width: f64,
    #[prost(double, tag = "4")]
    pub height: f64,
}

/// An accessibility element as reported by the automation engine.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Element {
    #[prost(string, tag = "1")]
    pub element_id: String,
    #[prost(string, tag = "2")]
    pub role: String,
    #[prost(string, optional, tag = "3")]
    pub text: Option<String>,
    #[prost(double, optional, tag = "4")]
    pub x: Option<f64>,
    #[prost(double, optional, tag = "5")]
    pub y: Option<f64>,
    #[prost(double, optional, tag = "6")]
    pub width: Option<f64>,
    #[prost(double, optional, tag = "7")]
    pub height: Option<f64>,
    #[prost(bool, optional, tag = "8")]
    pub enabled: Option<bool>,
    #[prost(bool, optional, tag = "9")]
    pub focused: Option<bool>,
    #[prost(map = "string, string", tag = "10")]
    pub attributes: HashMap<String, String>,
    #[prost(int32, repeated, tag = "11")]
    pub path: Vec<i32>,
    #[prost(string, repeated, tag = "12")]
    pub actions: Vec<String>,
}

/// Criteria used to locate elements. Exactly one criterion is set.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ElementSelector {
    #[prost(oneof = "element_selector::Criteria", tags = "1, 2, 3, 4, 5, 6, 7")]
    pub criteria: Option<element_selector::Criteria>,
}

pub mod element_selector {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Criteria {
        #[prost(string, tag = "1")]
        Role(String),
        #[prost(string, tag = "2")]
        Text(String),
        #[prost(string, tag = "3")]
        TextContains(String),
        #[prost(string, tag = "4")]
        TextRegex(String),
        #[prost(message, tag = "5")]
        Position(super::PositionSelector),
        #[prost(message, tag = "6")]
        Attributes(super::AttributeSelector),
        #[prost(message, tag = "7")]
        Compound(super::CompoundSelector),
    }
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct PositionSelector {
    #[prost(double, tag = "1")]
    pub x: f64,
    #[prost(double, tag = "2")]
    pub y: f64,
    #[prost(double, tag = "3")]
    pub tolerance: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AttributeSelector {
    #[prost(map = "string, string", tag = "1")]
    pub attributes: HashMap<String, String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CompoundSelector {
    #[prost(enumeration = "CompoundOperator", tag = "1")]
    pub operator: i32,
    #[prost(message, repeated, tag = "2")]
    pub selectors: Vec<ElementSelector>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CompoundOperator {
    Unspecified = 0,
    And = 1,
    Or = 2,
    Not = 3,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Window {
    /// `applications/{pid}/windows/{window_id}`
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(message, optional, tag = "3")]
    pub bounds: Option<Bounds>,
    #[prost(int32, tag = "4")]
    pub z_index: i32,
    #[prost(bool, tag = "5")]
    pub visible: bool,
    #[prost(string, tag = "6")]
    pub bundle_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WindowState {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(bool, tag = "2")]
    pub resizable: bool,
    #[prost(bool, tag = "3")]
    pub minimizable: bool,
    #[prost(bool, tag = "4")]
    pub closable: bool,
    #[prost(bool, tag = "5")]
    pub modal: bool,
    #[prost(bool, tag = "6")]
    pub floating: bool,
    #[prost(bool, tag = "7")]
    pub ax_hidden: bool,
    #[prost(bool, tag = "8")]
    pub minimized: bool,
    #[prost(bool, tag = "9")]
    pub focused: bool,
    #[prost(bool, optional, tag = "10")]
    pub fullscreen: Option<bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Display {
    /// `displays/{display_id}`
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(int64, tag = "2")]
    pub display_id: i64,
    #[prost(message, optional, tag = "3")]
    pub frame: Option<Bounds>,
    #[prost(message, optional, tag = "4")]
    pub visible_frame: Option<Bounds>,
    #[prost(bool, tag = "5")]
    pub is_main: bool,
    #[prost(double, tag = "6")]
    pub scale: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Application {
    /// `applications/{pid}`
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(int32, tag = "2")]
    pub pid: i32,
    #[prost(string, tag = "3")]
    pub display_name: String,
    #[prost(string, tag = "4")]
    pub bundle_id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ImageFormat {
    Unspecified = 0,
    Png = 1,
    Jpeg = 2,
    Tiff = 3,
}

impl ImageFormat {
    /// MIME type of the encoded image. Unspecified formats are PNG on the wire.
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Unspecified | ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Tiff => "image/tiff",
        }
    }
}
