use super::prelude::*;
use crate::helpers::{duration_to_seconds, seconds_to_duration};
use std::collections::HashMap;
use tracing::warn;

pub(crate) const SHELL_DISABLED: &str = "Shell command execution is disabled on this server. Start it with --shell-commands-enabled (or MACOS_USE_SHELL_COMMANDS_ENABLED=true) to allow it.";

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ScriptArgs {
    #[schemars(description = "Script source")]
    script: String,
    #[schemars(description = "Seconds before the script is aborted (default: server default)")]
    timeout: Option<f64>,
    #[serde(default)]
    #[schemars(description = "Only compile the script, do not run it")]
    compile_only: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ShellArgs {
    #[schemars(description = "Executable or shell command line")]
    command: String,
    #[serde(default)]
    #[schemars(description = "Arguments passed to the command")]
    args: Vec<String>,
    #[serde(default)]
    working_directory: String,
    #[serde(default)]
    #[schemars(description = "Extra environment variables")]
    environment: HashMap<String, String>,
    #[schemars(description = "Seconds before the command is killed")]
    timeout: Option<f64>,
    #[serde(default)]
    #[schemars(description = "Data written to the command's standard input")]
    stdin: String,
    #[serde(default)]
    #[schemars(description = "Shell used to interpret command, e.g. /bin/zsh. Omit to exec directly")]
    shell: String,
}

#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScriptLanguage {
    AppleScript,
    JavaScript,
    Shell,
}

impl From<ScriptLanguage> for ScriptType {
    fn from(language: ScriptLanguage) -> Self {
        match language {
            ScriptLanguage::AppleScript => ScriptType::AppleScript,
            ScriptLanguage::JavaScript => ScriptType::JavaScript,
            ScriptLanguage::Shell => ScriptType::Shell,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ValidateScriptArgs {
    script_type: ScriptLanguage,
    script: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DictionariesArgs {
    #[schemars(description = "Application resource name (applications/{pid})")]
    name: String,
}

fn script_result(
    tool: &str,
    success: bool,
    output: &str,
    error: &str,
    duration: Option<&prost_types::Duration>,
) -> ToolOutcome {
    if !success {
        let reason = if error.is_empty() { "script failed" } else { error };
        return Err(ToolError::failed(format!("Error in {tool}: {reason}")));
    }
    let mut text = if output.is_empty() {
        "Script completed with no output".to_string()
    } else {
        output.to_string()
    };
    if duration.is_some() {
        let _ = write!(
            text,
            "\n\nExecution time: {:.3}s",
            duration_to_seconds(duration)
        );
    }
    Ok(text_result(text))
}

#[tool_router(router = scripting_router, vis = "pub(crate)")]
impl MacosUseServer {
    #[tool(description = "Run an AppleScript and return its result.")]
    async fn execute_apple_script(&self, Parameters(args): Parameters<ScriptArgs>) -> ToolOutcome {
        const TOOL: &str = "execute_apple_script";
        let request = ExecuteAppleScriptRequest {
            script: args.script,
            timeout: args.timeout.filter(|t| *t > 0.0).map(seconds_to_duration),
            compile_only: args.compile_only,
        };
        let response = self
            .call(TOOL, self.client().execute_apple_script(request))
            .await?;
        script_result(
            TOOL,
            response.success,
            &response.output,
            &response.error,
            response.execution_duration.as_ref(),
        )
    }

    #[tool(description = "Run a JavaScript for Automation (JXA) script and return its result.")]
    async fn execute_javascript(&self, Parameters(args): Parameters<ScriptArgs>) -> ToolOutcome {
        const TOOL: &str = "execute_javascript";
        let request = ExecuteJavaScriptRequest {
            script: args.script,
            timeout: args.timeout.filter(|t| *t > 0.0).map(seconds_to_duration),
            compile_only: args.compile_only,
        };
        let response = self
            .call(TOOL, self.client().execute_javascript(request))
            .await?;
        script_result(
            TOOL,
            response.success,
            &response.output,
            &response.error,
            response.execution_duration.as_ref(),
        )
    }

    #[tool(
        description = "Run a command on the automation host. Only available when the server enables shell commands."
    )]
    async fn execute_shell_command(&self, Parameters(args): Parameters<ShellArgs>) -> ToolOutcome {
        const TOOL: &str = "execute_shell_command";
        if !self.config().shell_commands_enabled {
            warn!("Refused {}: shell commands are disabled", TOOL);
            return Err(ToolError::failed(format!("Error in {TOOL}: {SHELL_DISABLED}")));
        }

        let request = ExecuteShellCommandRequest {
            command: args.command,
            args: args.args,
            working_directory: args.working_directory,
            environment: args.environment,
            timeout: args.timeout.filter(|t| *t > 0.0).map(seconds_to_duration),
            stdin: args.stdin,
            shell: args.shell,
        };
        let response = self
            .call(TOOL, self.client().execute_shell_command(request))
            .await?;

        let mut text = format!("Exit code: {}", response.exit_code);
        if !response.stdout.is_empty() {
            let _ = write!(text, "\n\nstdout:\n{}", response.stdout);
        }
        if !response.stderr.is_empty() {
            let _ = write!(text, "\n\nstderr:\n{}", response.stderr);
        }
        if !response.error.is_empty() {
            let _ = write!(text, "\n\nError: {}", response.error);
        }

        if response.success {
            Ok(text_result(text))
        } else {
            Err(ToolError::failed(format!(
                "Error in {TOOL}: command failed\n{text}"
            )))
        }
    }

    #[tool(description = "Check a script for syntax errors without running it. Read-only.")]
    async fn validate_script(
        &self,
        Parameters(args): Parameters<ValidateScriptArgs>,
    ) -> ToolOutcome {
        let request = ValidateScriptRequest {
            script_type: ScriptType::from(args.script_type) as i32,
            script: args.script,
        };
        let response = self
            .call("validate_script", self.client().validate_script(request))
            .await?;

        // An invalid script is a successful validation.
        let mut text = if response.valid {
            "Script is valid".to_string()
        } else {
            "Script is invalid".to_string()
        };
        for error in &response.errors {
            let _ = write!(text, "\nError: {error}");
        }
        for warning in &response.warnings {
            let _ = write!(text, "\nWarning: {warning}");
        }
        Ok(text_result(text))
    }

    #[tool(
        description = "List the AppleScript commands and classes an application exposes. Read-only."
    )]
    async fn get_scripting_dictionaries(
        &self,
        Parameters(args): Parameters<DictionariesArgs>,
    ) -> ToolOutcome {
        let response = self
            .call(
                "get_scripting_dictionaries",
                self.client()
                    .get_scripting_dictionaries(GetScriptingDictionariesRequest {
                        name: args.name.clone(),
                    }),
            )
            .await?;

        if response.dictionaries.is_empty() {
            return Ok(text_result(format!(
                "{} exposes no scripting dictionary",
                args.name
            )));
        }
        let mut text = String::new();
        for dict in &response.dictionaries {
            if !text.is_empty() {
                text.push_str("\n\n");
            }
            let _ = write!(text, "{} [{}]", dict.application, dict.bundle_id);
            if !dict.commands.is_empty() {
                let _ = write!(text, "\nCommands: {}", dict.commands.join(", "));
            }
            if !dict.classes.is_empty() {
                let _ = write!(text, "\nClasses: {}", dict.classes.join(", "));
            }
        }
        Ok(text_result(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_script_is_error() {
        let err = script_result("execute_apple_script", false, "", "syntax error", None).unwrap_err();
        assert_eq!(err.to_string(), "Error in execute_apple_script: syntax error");
    }

    #[test]
    fn test_script_output_with_duration() {
        let duration = seconds_to_duration(0.25);
        let reply = script_result("execute_javascript", true, "42", "", Some(&duration)).unwrap();
        assert_eq!(reply.text(), "42\n\nExecution time: 0.250s");
    }

    #[test]
    fn test_script_language_names() {
        let language: ScriptLanguage = serde_json::from_str("\"applescript\"").unwrap();
        assert_eq!(ScriptType::from(language), ScriptType::AppleScript);
        assert!(serde_json::from_str::<ScriptLanguage>("\"python\"").is_err());
    }
}
