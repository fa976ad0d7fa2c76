pub mod audit;
pub mod config;
pub mod errors;
pub mod helpers;
pub mod poller;
pub mod prompt;
pub mod registry;
pub mod selector;
pub mod server;
pub mod tools;
pub mod utils;
pub mod validation;

pub use server::MacosUseServer;
