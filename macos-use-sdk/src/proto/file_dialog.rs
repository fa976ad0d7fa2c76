#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AutomateOpenFileDialogRequest {
    /// `applications/{pid}` owning the dialog.
    #[prost(string, tag = "1")]
    pub application: String,
    #[prost(string, tag = "2")]
    pub file_path: String,
    #[prost(string, tag = "3")]
    pub default_directory: String,
    #[prost(string, repeated, tag = "4")]
    pub file_filters: Vec<String>,
    #[prost(bool, tag = "5")]
    pub allow_multiple: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AutomateOpenFileDialogResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, repeated, tag = "2")]
    pub selected_paths: Vec<String>,
    #[prost(string, tag = "3")]
    pub error: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AutomateSaveFileDialogRequest {
    #[prost(string, tag = "1")]
    pub application: String,
    #[prost(string, tag = "2")]
    pub file_path: String,
    #[prost(string, tag = "3")]
    pub default_directory: String,
    #[prost(string, tag = "4")]
    pub default_filename: String,
    #[prost(bool, tag = "5")]
    pub confirm_overwrite: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AutomateSaveFileDialogResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub saved_path: String,
    #[prost(string, tag = "3")]
    pub error: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SelectFileRequest {
    #[prost(string, tag = "1")]
    pub application: String,
    #[prost(string, tag = "2")]
    pub file_path: String,
    #[prost(bool, tag = "3")]
    pub reveal_finder: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SelectFileResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub selected_path: String,
    #[prost(string, tag = "3")]
    pub error: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SelectDirectoryRequest {
    #[prost(string, tag = "1")]
    pub application: String,
    #[prost(string, tag = "2")]
    pub directory_path: String,
    #[prost(bool, tag = "3")]
    pub create_missing: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SelectDirectoryResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub selected_path: String,
    #[prost(string, tag = "3")]
    pub error: String,
    #[prost(bool, tag = "4")]
    pub created: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DragFilesRequest {
    #[prost(string, tag = "1")]
    pub application: String,
    #[prost(string, repeated, tag = "2")]
    pub file_paths: Vec<String>,
    #[prost(string, tag = "3")]
    pub target_element_id: String,
    /// Seconds.
    #[prost(double, tag = "4")]
    pub duration: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DragFilesResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(int32, tag = "2")]
    pub files_dropped: i32,
    #[prost(string, tag = "3")]
    pub error: String,
}
