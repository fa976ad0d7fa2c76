//! Client SDK for the MacosUse automation service.
//!
//! The service runs on the Mac being automated and exposes accessibility,
//! input, window, clipboard and scripting primitives over gRPC. This crate
//! carries the protobuf messages and a [`MacosUseClient`] trait with a
//! tonic-backed implementation.

pub mod client;
pub mod error;
pub mod proto;

pub use client::{normalize_address, GrpcMacosUseClient, MacosUseClient};
pub use error::SdkError;
pub use tonic::{Code, Status};
