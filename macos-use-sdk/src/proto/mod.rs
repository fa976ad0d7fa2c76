//! Hand-maintained prost messages for `macosusesdk.v1`.
//!
//! Field tags match the service's `.proto` files; keep them in sync when the
//! service adds fields.

mod application;
mod clipboard;
mod element;
mod file_dialog;
mod input;
mod longrunning;
mod macros;
mod observation;
mod screenshot;
mod script;
mod session;
mod types;
mod window;

pub use application::*;
pub use clipboard::*;
pub use element::*;
pub use file_dialog::*;
pub use input::*;
pub use longrunning::*;
pub use macros::*;
pub use observation::*;
pub use screenshot::*;
pub use script::*;
pub use session::*;
pub use types::*;
pub use window::*;
