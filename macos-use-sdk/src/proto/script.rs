use prost_types::Duration;
use std::collections::HashMap;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExecuteAppleScriptRequest {
    #[prost(string, tag = "1")]
    pub script: String,
    #[prost(message, optional, tag = "2")]
    pub timeout: Option<Duration>,
    #[prost(bool, tag = "3")]
    pub compile_only: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExecuteAppleScriptResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub output: String,
    #[prost(string, tag = "3")]
    pub error: String,
    #[prost(message, optional, tag = "4")]
    pub execution_duration: Option<Duration>,
}

/// JavaScript for Automation (JXA).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExecuteJavaScriptRequest {
    #[prost(string, tag = "1")]
    pub script: String,
    #[prost(message, optional, tag = "2")]
    pub timeout: Option<Duration>,
    #[prost(bool, tag = "3")]
    pub compile_only: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExecuteJavaScriptResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub output: String,
    #[prost(string, tag = "3")]
    pub error: String,
    #[prost(message, optional, tag = "4")]
    pub execution_duration: Option<Duration>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExecuteShellCommandRequest {
    #[prost(string, tag = "1")]
    pub command: String,
    #[prost(string, repeated, tag = "2")]
    pub args: Vec<String>,
    #[prost(string, tag = "3")]
    pub working_directory: String,
    #[prost(map = "string, string", tag = "4")]
    pub environment: HashMap<String, String>,
    #[prost(message, optional, tag = "5")]
    pub timeout: Option<Duration>,
    #[prost(string, tag = "6")]
    pub stdin: String,
    /// Shell used to run `command`, `/bin/zsh` when empty.
    #[prost(string, tag = "7")]
    pub shell: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExecuteShellCommandResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub stdout: String,
    #[prost(string, tag = "3")]
    pub stderr: String,
    #[prost(int32, tag = "4")]
    pub exit_code: i32,
    #[prost(string, tag = "5")]
    pub error: String,
    #[prost(message, optional, tag = "6")]
    pub execution_duration: Option<Duration>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValidateScriptRequest {
    #[prost(enumeration = "ScriptType", tag = "1")]
    pub script_type: i32,
    #[prost(string, tag = "2")]
    pub script: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ScriptType {
    Unspecified = 0,
    AppleScript = 1,
    JavaScript = 2,
    Shell = 3,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValidateScriptResponse {
    #[prost(bool, tag = "1")]
    pub valid: bool,
    #[prost(string, repeated, tag = "2")]
    pub errors: Vec<String>,
    #[prost(string, repeated, tag = "3")]
    pub warnings: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetScriptingDictionariesRequest {
    /// `scriptingDictionaries`
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScriptingDictionaries {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, repeated, tag = "2")]
    pub dictionaries: Vec<ScriptingDictionary>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScriptingDictionary {
    #[prost(string, tag = "1")]
    pub application: String,
    #[prost(string, tag = "2")]
    pub bundle_id: String,
    #[prost(string, repeated, tag = "3")]
    pub commands: Vec<String>,
    #[prost(string, repeated, tag = "4")]
    pub classes: Vec<String>,
}
