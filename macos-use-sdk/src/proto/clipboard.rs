use prost_types::Timestamp;

/// The system clipboard, always named `clipboard`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Clipboard {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub content: Option<ClipboardContent>,
    #[prost(enumeration = "ContentType", repeated, tag = "3")]
    pub available_types: Vec<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClipboardContent {
    #[prost(enumeration = "ContentType", tag = "1")]
    pub content_type: i32,
    #[prost(oneof = "clipboard_content::Content", tags = "2, 3, 4, 5, 6, 7")]
    pub content: Option<clipboard_content::Content>,
}

pub mod clipboard_content {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Content {
        #[prost(string, tag = "2")]
        Text(String),
        #[prost(bytes = "vec", tag = "3")]
        Rtf(Vec<u8>),
        #[prost(string, tag = "4")]
        Html(String),
        #[prost(bytes = "vec", tag = "5")]
        Image(Vec<u8>),
        #[prost(message, tag = "6")]
        Files(super::FilePaths),
        #[prost(string, tag = "7")]
        Url(String),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FilePaths {
    #[prost(string, repeated, tag = "1")]
    pub paths: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ContentType {
    Unspecified = 0,
    Text = 1,
    Rtf = 2,
    Html = 3,
    Image = 4,
    Files = 5,
    Url = 6,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetClipboardRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WriteClipboardRequest {
    #[prost(message, optional, tag = "1")]
    pub content: Option<ClipboardContent>,
    #[prost(bool, tag = "2")]
    pub clear_existing: bool,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct WriteClipboardResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(enumeration = "ContentType", tag = "2")]
    pub content_type: i32,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ClearClipboardRequest {}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ClearClipboardResponse {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetClipboardHistoryRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClipboardHistory {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, repeated, tag = "2")]
    pub entries: Vec<ClipboardHistoryEntry>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClipboardHistoryEntry {
    #[prost(message, optional, tag = "1")]
    pub copy_time: Option<Timestamp>,
    #[prost(message, optional, tag = "2")]
    pub content: Option<ClipboardContent>,
    #[prost(string, tag = "3")]
    pub source_application: String,
}
