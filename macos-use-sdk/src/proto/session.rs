use prost_types::Timestamp;
use std::collections::HashMap;

/// `sessions/{session_id}`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Session {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub display_name: String,
    #[prost(enumeration = "SessionState", tag = "3")]
    pub state: i32,
    #[prost(message, optional, tag = "4")]
    pub create_time: Option<Timestamp>,
    #[prost(message, optional, tag = "5")]
    pub last_access_time: Option<Timestamp>,
    #[prost(message, optional, tag = "6")]
    pub expire_time: Option<Timestamp>,
    #[prost(string, tag = "7")]
    pub transaction_id: String,
    #[prost(map = "string, string", tag = "8")]
    pub metadata: HashMap<String, String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SessionState {
    Unspecified = 0,
    Active = 1,
    InTransaction = 2,
    Expired = 3,
    Failed = 4,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateSessionRequest {
    #[prost(message, optional, tag = "1")]
    pub session: Option<Session>,
    #[prost(string, tag = "2")]
    pub session_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetSessionRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListSessionsRequest {
    #[prost(int32, tag = "1")]
    pub page_size: i32,
    #[prost(string, tag = "2")]
    pub page_token: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListSessionsResponse {
    #[prost(message, repeated, tag = "1")]
    pub sessions: Vec<Session>,
    #[prost(string, tag = "2")]
    pub next_page_token: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteSessionRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(bool, tag = "2")]
    pub force: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BeginTransactionRequest {
    #[prost(string, tag = "1")]
    pub session: String,
    #[prost(enumeration = "IsolationLevel", tag = "2")]
    pub isolation_level: i32,
    /// Seconds before the transaction is rolled back automatically.
    #[prost(double, tag = "3")]
    pub timeout: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum IsolationLevel {
    Unspecified = 0,
    Serializable = 1,
    ReadCommitted = 2,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BeginTransactionResponse {
    #[prost(string, tag = "1")]
    pub transaction_id: String,
    #[prost(message, optional, tag = "2")]
    pub session: Option<Session>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CommitTransactionRequest {
    /// Session name.
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub transaction_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RollbackTransactionRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub transaction_id: String,
    /// Roll back to this revision instead of the transaction start.
    #[prost(string, tag = "3")]
    pub revision_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Transaction {
    #[prost(string, tag = "1")]
    pub transaction_id: String,
    #[prost(string, tag = "2")]
    pub session: String,
    #[prost(enumeration = "TransactionState", tag = "3")]
    pub state: i32,
    #[prost(message, optional, tag = "4")]
    pub start_time: Option<Timestamp>,
    #[prost(message, optional, tag = "5")]
    pub end_time: Option<Timestamp>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TransactionState {
    Unspecified = 0,
    Active = 1,
    Committed = 2,
    RolledBack = 3,
    Failed = 4,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetSessionSnapshotRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SessionSnapshot {
    #[prost(message, optional, tag = "1")]
    pub session: Option<Session>,
    #[prost(string, repeated, tag = "2")]
    pub applications: Vec<String>,
    #[prost(message, repeated, tag = "3")]
    pub history: Vec<OperationRecord>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OperationRecord {
    #[prost(string, tag = "1")]
    pub operation_type: String,
    #[prost(string, tag = "2")]
    pub resource: String,
    #[prost(message, optional, tag = "3")]
    pub operation_time: Option<Timestamp>,
    #[prost(bool, tag = "4")]
    pub success: bool,
    #[prost(string, tag = "5")]
    pub error: String,
}
