//! `google.longrunning` and `google.rpc` messages used by the wait RPCs.

use prost::Message;
use prost_types::Any;

/// A handle to a server-side long-running operation.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Operation {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub metadata: Option<Any>,
    #[prost(bool, tag = "3")]
    pub done: bool,
    #[prost(oneof = "operation::Result", tags = "4, 5")]
    pub result: Option<operation::Result>,
}

pub mod operation {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Result {
        #[prost(message, tag = "4")]
        Error(super::Status),
        #[prost(message, tag = "5")]
        Response(::prost_types::Any),
    }
}

/// `google.rpc.Status`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Status {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub message: String,
    #[prost(message, repeated, tag = "3")]
    pub details: Vec<Any>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

impl Operation {
    /// The embedded error, if the operation finished with one.
    pub fn error(&self) -> Option<&Status> {
        match &self.result {
            Some(operation::Result::Error(status)) => Some(status),
            _ => None,
        }
    }

    /// Decodes the packed response as `M`. `Ok(None)` when no response is attached.
    pub fn unpack_response<M: Message + Default>(&self) -> Result<Option<M>, prost::DecodeError> {
        match &self.result {
            Some(operation::Result::Response(any)) => M::decode(any.value.as_slice()).map(Some),
            _ => Ok(None),
        }
    }
}

/// Packs `message` into an `Any` with the given fully qualified type name.
pub fn pack_any<M: Message>(type_name: &str, message: &M) -> Any {
    Any {
        type_url: format!("type.googleapis.com/{type_name}"),
        value: message.encode_to_vec(),
    }
}
