use super::Point;
use prost_types::Timestamp;

/// A single synthesized input event.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InputAction {
    #[prost(oneof = "input_action::InputType", tags = "1, 2, 3, 4, 5, 6, 7, 8")]
    pub input_type: Option<input_action::InputType>,
    #[prost(bool, tag = "9")]
    pub show_animation: bool,
    #[prost(double, tag = "10")]
    pub animation_duration: f64,
}

pub mod input_action {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum InputType {
        #[prost(message, tag = "1")]
        Click(super::MouseClick),
        #[prost(message, tag = "2")]
        TypeText(super::TextInput),
        #[prost(message, tag = "3")]
        PressKey(super::KeyPress),
        #[prost(message, tag = "4")]
        MoveMouse(super::MouseMove),
        #[prost(message, tag = "5")]
        Scroll(super::Scroll),
        #[prost(message, tag = "6")]
        Drag(super::MouseDrag),
        #[prost(message, tag = "7")]
        Hover(super::Hover),
        #[prost(message, tag = "8")]
        Gesture(super::Gesture),
    }
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct MouseClick {
    #[prost(message, optional, tag = "1")]
    pub position: Option<Point>,
    #[prost(enumeration = "ClickType", tag = "2")]
    pub click_type: i32,
    #[prost(int32, tag = "3")]
    pub click_count: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ClickType {
    Unspecified = 0,
    Left = 1,
    Right = 2,
    Middle = 3,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TextInput {
    #[prost(string, tag = "1")]
    pub text: String,
    /// Seconds between characters.
    #[prost(double, tag = "2")]
    pub char_delay: f64,
    #[prost(bool, tag = "3")]
    pub use_ime: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeyPress {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(enumeration = "Modifier", repeated, tag = "2")]
    pub modifiers: Vec<i32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Modifier {
    Unspecified = 0,
    Command = 1,
    OptionKey = 2,
    Control = 3,
    Shift = 4,
    Function = 5,
    CapsLock = 6,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct MouseMove {
    #[prost(message, optional, tag = "1")]
    pub position: Option<Point>,
    #[prost(double, tag = "2")]
    pub duration: f64,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Scroll {
    #[prost(double, tag = "1")]
    pub horizontal: f64,
    #[prost(double, tag = "2")]
    pub vertical: f64,
    #[prost(message, optional, tag = "3")]
    pub position: Option<Point>,
    #[prost(double, tag = "4")]
    pub duration: f64,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct MouseDrag {
    #[prost(message, optional, tag = "1")]
    pub start: Option<Point>,
    #[prost(message, optional, tag = "2")]
    pub end: Option<Point>,
    #[prost(enumeration = "ClickType", tag = "3")]
    pub button: i32,
    #[prost(double, tag = "4")]
    pub duration: f64,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Hover {
    #[prost(message, optional, tag = "1")]
    pub position: Option<Point>,
    #[prost(double, tag = "2")]
    pub duration: f64,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Gesture {
    #[prost(message, optional, tag = "1")]
    pub center: Option<Point>,
    #[prost(enumeration = "GestureType", tag = "2")]
    pub gesture_type: i32,
    #[prost(double, tag = "3")]
    pub scale: f64,
    #[prost(double, tag = "4")]
    pub rotation: f64,
    #[prost(int32, tag = "5")]
    pub finger_count: i32,
    #[prost(enumeration = "SwipeDirection", tag = "6")]
    pub direction: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum GestureType {
    Unspecified = 0,
    Pinch = 1,
    Zoom = 2,
    Rotate = 3,
    Swipe = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SwipeDirection {
    Unspecified = 0,
    Up = 1,
    Down = 2,
    Left = 3,
    Right = 4,
}

/// A recorded input resource, `applications/{pid}/inputs/{input_id}` or `desktopInputs/{input_id}`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Input {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub action: Option<InputAction>,
    #[prost(enumeration = "InputState", tag = "3")]
    pub state: i32,
    #[prost(string, tag = "4")]
    pub error: String,
    #[prost(message, optional, tag = "5")]
    pub create_time: Option<Timestamp>,
    #[prost(message, optional, tag = "6")]
    pub complete_time: Option<Timestamp>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum InputState {
    Unspecified = 0,
    Pending = 1,
    Executing = 2,
    Completed = 3,
    Failed = 4,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateInputRequest {
    /// Empty for desktop-wide input.
    #[prost(string, tag = "1")]
    pub parent: String,
    #[prost(message, optional, tag = "2")]
    pub input: Option<Input>,
    #[prost(string, tag = "3")]
    pub input_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetInputRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListInputsRequest {
    #[prost(string, tag = "1")]
    pub parent: String,
    #[prost(int32, tag = "2")]
    pub page_size: i32,
    #[prost(string, tag = "3")]
    pub page_token: String,
    #[prost(string, tag = "4")]
    pub filter: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListInputsResponse {
    #[prost(message, repeated, tag = "1")]
    pub inputs: Vec<Input>,
    #[prost(string, tag = "2")]
    pub next_page_token: String,
}
