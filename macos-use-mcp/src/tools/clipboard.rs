use super::prelude::*;
use crate::helpers::image_content;
use macos_use_sdk::proto::clipboard_content::Content as ClipboardData;

/// The system clipboard resource.
const CLIPBOARD: &str = "clipboard";

#[derive(Debug, Clone, Copy, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardKind {
    #[default]
    Text,
    Html,
    Url,
    Files,
}

impl ClipboardKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Html => "html",
            Self::Url => "url",
            Self::Files => "files",
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct WriteClipboardArgs {
    #[schemars(description = "Kind of content to write (default: text)")]
    content_type: Option<ClipboardKind>,
    #[schemars(description = "Text, HTML or URL to write")]
    text: Option<String>,
    #[serde(default)]
    #[schemars(description = "Absolute file paths, for content_type=files")]
    files: Vec<String>,
    #[schemars(description = "Clear other representations first (default: true)")]
    clear_existing: Option<bool>,
}

fn content_type_name(content_type: i32) -> &'static str {
    match ContentType::try_from(content_type) {
        Ok(ContentType::Text) => "text",
        Ok(ContentType::Rtf) => "rtf",
        Ok(ContentType::Html) => "html",
        Ok(ContentType::Image) => "image",
        Ok(ContentType::Files) => "files",
        Ok(ContentType::Url) => "url",
        _ => "unspecified",
    }
}

/// Text rendering of clipboard data. Binary payloads are summarized.
fn describe_content(content: Option<&ClipboardContent>) -> String {
    match content.and_then(|c| c.content.as_ref()) {
        Some(ClipboardData::Text(text)) => text.clone(),
        Some(ClipboardData::Html(html)) => format!("HTML: {html}"),
        Some(ClipboardData::Url(url)) => format!("URL: {url}"),
        Some(ClipboardData::Files(files)) => format!("Files: {}", files.paths.join(", ")),
        Some(ClipboardData::Rtf(rtf)) => format!("RTF data ({} bytes)", rtf.len()),
        Some(ClipboardData::Image(image)) => format!("Image data ({} bytes)", image.len()),
        None => "(empty)".to_string(),
    }
}

fn build_content(args: WriteClipboardArgs) -> Result<(ClipboardContent, bool), String> {
    let kind = args.content_type.unwrap_or_default();
    let need_text = |text: Option<String>| {
        text.ok_or_else(|| format!("'text' is required for content_type={}", kind.as_str()))
    };

    let (content_type, data) = match kind {
        ClipboardKind::Text => (ContentType::Text, ClipboardData::Text(need_text(args.text)?)),
        ClipboardKind::Html => (ContentType::Html, ClipboardData::Html(need_text(args.text)?)),
        ClipboardKind::Url => (ContentType::Url, ClipboardData::Url(need_text(args.text)?)),
        ClipboardKind::Files => {
            if args.files.is_empty() {
                return Err("'files' must list at least one path for content_type=files".into());
            }
            (
                ContentType::Files,
                ClipboardData::Files(FilePaths { paths: args.files }),
            )
        }
    };

    Ok((
        ClipboardContent {
            content_type: content_type as i32,
            content: Some(data),
        },
        args.clear_existing.unwrap_or(true),
    ))
}

#[tool_router(router = clipboard_router, vis = "pub(crate)")]
impl MacosUseServer {
    #[tool(
        description = "Read the current clipboard contents. Images are returned as image content. Read-only."
    )]
    async fn get_clipboard(&self, Parameters(_args): Parameters<EmptyArgs>) -> ToolOutcome {
        let clipboard = self
            .call(
                "get_clipboard",
                self.client().get_clipboard(GetClipboardRequest {
                    name: CLIPBOARD.to_string(),
                }),
            )
            .await?;

        let available: Vec<&str> = clipboard
            .available_types
            .iter()
            .map(|t| content_type_name(*t))
            .collect();
        let mut header = String::from("Clipboard");
        if !available.is_empty() {
            let _ = write!(header, " (available types: {})", available.join(", "));
        }

        if let Some(ClipboardData::Image(image)) =
            clipboard.content.as_ref().and_then(|c| c.content.as_ref())
        {
            if !image.is_empty() {
                return Ok(ToolReply(vec![
                    Content::text(header),
                    image_content(image, ImageFormat::Png as i32),
                ]));
            }
        }

        Ok(text_result(format!(
            "{header}:\n{}",
            describe_content(clipboard.content.as_ref())
        )))
    }

    #[tool(description = "Write text, HTML, a URL or a list of file paths to the clipboard.")]
    async fn write_clipboard(
        &self,
        Parameters(args): Parameters<WriteClipboardArgs>,
    ) -> ToolOutcome {
        const TOOL: &str = "write_clipboard";

        let (content, clear_existing) =
            build_content(args).map_err(|reason| ToolError::failed(format!("Error in {TOOL}: {reason}")))?;
        let request = WriteClipboardRequest {
            content: Some(content),
            clear_existing,
        };
        let response = self
            .call(TOOL, self.client().write_clipboard(request))
            .await?;

        if !response.success {
            return Err(ToolError::failed(format!(
                "Error in {TOOL}: the clipboard was not updated"
            )));
        }
        Ok(text_result(format!(
            "Wrote {} content to the clipboard",
            content_type_name(response.content_type)
        )))
    }

    #[tool(description = "Remove everything from the clipboard.")]
    async fn clear_clipboard(&self, Parameters(_args): Parameters<EmptyArgs>) -> ToolOutcome {
        self.call(
            "clear_clipboard",
            self.client().clear_clipboard(ClearClipboardRequest {}),
        )
        .await?;
        Ok(text_result("Clipboard cleared"))
    }

    #[tool(description = "List recent clipboard entries with their source application. Read-only.")]
    async fn get_clipboard_history(
        &self,
        Parameters(_args): Parameters<EmptyArgs>,
    ) -> ToolOutcome {
        let history = self
            .call(
                "get_clipboard_history",
                self.client()
                    .get_clipboard_history(GetClipboardHistoryRequest {
                        name: format!("{CLIPBOARD}/history"),
                    }),
            )
            .await?;

        if history.entries.is_empty() {
            return Ok(text_result("Clipboard history is empty"));
        }
        let mut text = format!("Clipboard history ({} entries):", history.entries.len());
        for (i, entry) in history.entries.iter().enumerate() {
            let source = if entry.source_application.is_empty() {
                "unknown source"
            } else {
                entry.source_application.as_str()
            };
            let _ = write!(
                text,
                "\n{}. [{}] from {}: {}",
                i + 1,
                format_timestamp(entry.copy_time.as_ref()),
                source,
                describe_content(entry.content.as_ref())
            );
        }
        Ok(text_result(text))
    }
}
