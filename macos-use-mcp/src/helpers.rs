use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Utc};
use macos_use_sdk::proto::{Bounds, Element, ImageFormat};
use rmcp::model::{CallToolResult, Content, IntoContents};
use std::fmt::Write as _;

/// Content of a successful tool call.
#[derive(Debug, Clone)]
pub struct ToolReply(pub Vec<Content>);

impl ToolReply {
    /// The text items joined by newlines. Images are skipped.
    pub fn text(&self) -> String {
        self.0
            .iter()
            .filter_map(|c| c.as_text().map(|t| t.text.as_str()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl IntoContents for ToolReply {
    fn into_contents(self) -> Vec<Content> {
        self.0
    }
}

pub fn text_result(text: impl Into<String>) -> ToolReply {
    ToolReply(vec![Content::text(text.into())])
}

pub fn error_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(text.into())])
}

/// Image content item carrying base64 data and the MIME type of `format`.
pub fn image_content(data: &[u8], format: i32) -> Content {
    let format = ImageFormat::try_from(format).unwrap_or(ImageFormat::Png);
    Content::image(general_purpose::STANDARD.encode(data), format.mime_type())
}

/// Lenient integer decoding for fields the schema declares as `integer`:
/// whole floats such as `5.0` pass validation, so they must deserialize too.
pub mod de {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};

    fn whole<E: serde::de::Error>(number: serde_json::Number) -> Result<i64, E> {
        if let Some(i) = number.as_i64() {
            return Ok(i);
        }
        match number.as_f64() {
            Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                Ok(f as i64)
            }
            _ => Err(E::custom(format!("expected an integer, got {number}"))),
        }
    }

    pub fn int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: TryFrom<i64>,
    {
        let value = whole::<D::Error>(serde_json::Number::deserialize(deserializer)?)?;
        T::try_from(value).map_err(|_| D::Error::custom(format!("integer {value} is out of range")))
    }

    pub fn opt_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: TryFrom<i64>,
    {
        match Option::<serde_json::Number>::deserialize(deserializer)? {
            None => Ok(None),
            Some(number) => {
                let value = whole::<D::Error>(number)?;
                T::try_from(value)
                    .map(Some)
                    .map_err(|_| D::Error::custom(format!("integer {value} is out of range")))
            }
        }
    }
}

pub fn format_timestamp(ts: Option<&prost_types::Timestamp>) -> String {
    ts.and_then(|ts| DateTime::<Utc>::from_timestamp(ts.seconds, ts.nanos.max(0) as u32))
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_bounds(bounds: Option<&Bounds>) -> String {
    match bounds {
        Some(b) => format!("({}, {}) {}x{}", b.x, b.y, b.width, b.height),
        None => "(unknown bounds)".to_string(),
    }
}

/// One line per element, always including its `element_id`.
pub fn format_element(element: &Element) -> String {
    let mut line = format!("[{}] {}", element.element_id, element.role);
    if let Some(text) = element.text.as_deref().filter(|t| !t.is_empty()) {
        let _ = write!(line, " \"{text}\"");
    }
    if let (Some(x), Some(y)) = (element.x, element.y) {
        let _ = write!(line, " at ({x}, {y})");
    }
    if let (Some(w), Some(h)) = (element.width, element.height) {
        let _ = write!(line, " size {w}x{h}");
    }
    let mut flags = Vec::new();
    if element.enabled == Some(false) {
        flags.push("disabled");
    }
    if element.focused == Some(true) {
        flags.push("focused");
    }
    if !flags.is_empty() {
        let _ = write!(line, " ({})", flags.join(", "));
    }
    line
}

/// Longer form used by single-element tools.
pub fn describe_element(element: &Element) -> String {
    let mut out = format_element(element);
    if !element.actions.is_empty() {
        let _ = write!(out, "\nActions: {}", element.actions.join(", "));
    }
    if !element.attributes.is_empty() {
        let mut attrs: Vec<_> = element.attributes.iter().collect();
        attrs.sort();
        out.push_str("\nAttributes:");
        for (key, value) in attrs {
            let _ = write!(out, "\n  {key}: {value}");
        }
    }
    out
}

/// Appends the pagination footer when another page exists.
pub fn push_next_page(out: &mut String, token: &str) {
    if !token.is_empty() {
        let _ = write!(out, "\n\nNext page token: {token}");
    }
}

pub fn seconds_to_duration(seconds: f64) -> prost_types::Duration {
    let whole = seconds.trunc();
    prost_types::Duration {
        seconds: whole as i64,
        nanos: ((seconds - whole) * 1e9).round() as i32,
    }
}

pub fn duration_to_seconds(duration: Option<&prost_types::Duration>) -> f64 {
    duration
        .map(|d| d.seconds as f64 + f64::from(d.nanos) / 1e9)
        .unwrap_or_default()
}
