use super::Application;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenApplicationRequest {
    /// Bundle identifier, application name, or absolute path to the `.app`.
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(bool, tag = "2")]
    pub background: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenApplicationResponse {
    #[prost(message, optional, tag = "1")]
    pub application: Option<Application>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListApplicationsRequest {
    #[prost(int32, tag = "1")]
    pub page_size: i32,
    #[prost(string, tag = "2")]
    pub page_token: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListApplicationsResponse {
    #[prost(message, repeated, tag = "1")]
    pub applications: Vec<Application>,
    #[prost(string, tag = "2")]
    pub next_page_token: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetApplicationRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteApplicationRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}
