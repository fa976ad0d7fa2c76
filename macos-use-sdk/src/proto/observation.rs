use prost_types::Timestamp;

/// `applications/{pid}/observations/{observation_id}`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Observation {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(enumeration = "ObservationType", tag = "2")]
    pub observation_type: i32,
    #[prost(enumeration = "ObservationState", tag = "3")]
    pub state: i32,
    #[prost(message, optional, tag = "4")]
    pub filter: Option<ObservationFilter>,
    #[prost(message, optional, tag = "5")]
    pub create_time: Option<Timestamp>,
    #[prost(message, optional, tag = "6")]
    pub start_time: Option<Timestamp>,
    #[prost(message, optional, tag = "7")]
    pub end_time: Option<Timestamp>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ObservationType {
    Unspecified = 0,
    ElementChanges = 1,
    WindowChanges = 2,
    ApplicationChanges = 3,
    AttributeChanges = 4,
    TreeChanges = 5,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ObservationState {
    Unspecified = 0,
    Pending = 1,
    Active = 2,
    Completed = 3,
    Cancelled = 4,
    Failed = 5,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ObservationFilter {
    /// Seconds.
    #[prost(double, tag = "1")]
    pub poll_interval: f64,
    #[prost(bool, tag = "2")]
    pub visible_only: bool,
    #[prost(string, repeated, tag = "3")]
    pub attributes: Vec<String>,
    #[prost(string, repeated, tag = "4")]
    pub roles: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateObservationRequest {
    #[prost(string, tag = "1")]
    pub parent: String,
    #[prost(message, optional, tag = "2")]
    pub observation: Option<Observation>,
    #[prost(string, tag = "3")]
    pub observation_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetObservationRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListObservationsRequest {
    #[prost(string, tag = "1")]
    pub parent: String,
    #[prost(int32, tag = "2")]
    pub page_size: i32,
    #[prost(string, tag = "3")]
    pub page_token: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListObservationsResponse {
    #[prost(message, repeated, tag = "1")]
    pub observations: Vec<Observation>,
    #[prost(string, tag = "2")]
    pub next_page_token: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CancelObservationRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}
