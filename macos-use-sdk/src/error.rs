use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Invalid server address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: tonic::transport::Error,
    },

    #[error("Server address is empty")]
    EmptyAddress,

    #[error(transparent)]
    Status(#[from] tonic::Status),
}
