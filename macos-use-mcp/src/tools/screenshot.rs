use super::prelude::*;
use crate::helpers::image_content;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Png,
    Jpeg,
    Tiff,
}

impl From<Encoding> for ImageFormat {
    fn from(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Png => ImageFormat::Png,
            Encoding::Jpeg => ImageFormat::Jpeg,
            Encoding::Tiff => ImageFormat::Tiff,
        }
    }
}

fn wire_format(format: Option<Encoding>) -> i32 {
    ImageFormat::from(format.unwrap_or_default()) as i32
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CaptureScreenshotArgs {
    #[schemars(description = "Image encoding (default: png)")]
    format: Option<Encoding>,
    #[serde(default, deserialize_with = "de::opt_int")]
    #[schemars(description = "JPEG quality 1-100 (default: 85)")]
    quality: Option<i32>,
    #[serde(default, deserialize_with = "de::opt_int")]
    #[schemars(description = "Display ID to capture (default: main display)")]
    display: Option<i64>,
    #[serde(default)]
    #[schemars(description = "Also return OCR text of the image")]
    include_ocr_text: bool,
    #[serde(default, deserialize_with = "de::opt_int")]
    #[schemars(description = "Downscale so the width does not exceed this")]
    max_width: Option<i32>,
    #[serde(default, deserialize_with = "de::opt_int")]
    #[schemars(description = "Downscale so the height does not exceed this")]
    max_height: Option<i32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CaptureWindowScreenshotArgs {
    #[schemars(description = "Window resource name")]
    window: String,
    #[schemars(description = "Image encoding (default: png)")]
    format: Option<Encoding>,
    #[serde(default, deserialize_with = "de::opt_int")]
    #[schemars(description = "JPEG quality 1-100")]
    quality: Option<i32>,
    #[serde(default)]
    #[schemars(description = "Include the window shadow")]
    include_shadow: bool,
    #[serde(default)]
    #[schemars(description = "Also return OCR text of the image")]
    include_ocr_text: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CaptureRegionScreenshotArgs {
    #[schemars(description = "Left edge in points")]
    x: f64,
    #[schemars(description = "Top edge in points")]
    y: f64,
    #[schemars(description = "Width in points")]
    width: f64,
    #[schemars(description = "Height in points")]
    height: f64,
    #[serde(default, deserialize_with = "de::opt_int")]
    #[schemars(description = "Display ID the coordinates refer to")]
    display: Option<i64>,
    #[schemars(description = "Image encoding (default: png)")]
    format: Option<Encoding>,
    #[serde(default, deserialize_with = "de::opt_int")]
    #[schemars(description = "JPEG quality 1-100")]
    quality: Option<i32>,
    #[serde(default)]
    #[schemars(description = "Also return OCR text of the image")]
    include_ocr_text: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CaptureElementScreenshotArgs {
    #[schemars(description = "Application resource name (applications/{pid})")]
    parent: String,
    #[schemars(description = "Element ID from find_elements")]
    element_id: String,
    #[serde(default)]
    #[schemars(description = "Extra points captured around the element")]
    padding: f64,
    #[schemars(description = "Image encoding (default: png)")]
    format: Option<Encoding>,
    #[serde(default, deserialize_with = "de::opt_int")]
    #[schemars(description = "JPEG quality 1-100")]
    quality: Option<i32>,
    #[serde(default)]
    #[schemars(description = "Also return OCR text of the image")]
    include_ocr_text: bool,
}

/// Image first, then OCR text when there is any.
fn screenshot_result(
    tool: &str,
    image_data: &[u8],
    format: i32,
    ocr_text: &str,
) -> ToolOutcome {
    if image_data.is_empty() {
        return Err(ToolError::failed(format!(
            "Error in {tool}: the server returned no image data"
        )));
    }
    let mut content = vec![image_content(image_data, format)];
    if !ocr_text.is_empty() {
        content.push(Content::text(format!("OCR text:\n{ocr_text}")));
    }
    Ok(ToolReply(content))
}

#[tool_router(router = screenshot_router, vis = "pub(crate)")]
impl MacosUseServer {
    #[tool(
        description = "Capture the full screen. Returns the image and, with include_ocr_text, the recognized text. Read-only."
    )]
    async fn capture_screenshot(
        &self,
        Parameters(args): Parameters<CaptureScreenshotArgs>,
    ) -> ToolOutcome {
        const TOOL: &str = "capture_screenshot";
        let request = CaptureScreenshotRequest {
            format: wire_format(args.format),
            quality: args.quality.unwrap_or(85),
            display: args.display,
            include_ocr_text: args.include_ocr_text,
            max_width: args.max_width.unwrap_or_default(),
            max_height: args.max_height.unwrap_or_default(),
        };
        let response = self
            .call(TOOL, self.client().capture_screenshot(request))
            .await?;

        screenshot_result(TOOL, &response.image_data, response.format, &response.ocr_text)
    }

    #[tool(
        description = "Capture a single window by resource name (applications/{pid}/windows/{id}). Read-only."
    )]
    async fn capture_window_screenshot(
        &self,
        Parameters(args): Parameters<CaptureWindowScreenshotArgs>,
    ) -> ToolOutcome {
        const TOOL: &str = "capture_window_screenshot";
        let request = CaptureWindowScreenshotRequest {
            window: args.window,
            format: wire_format(args.format),
            quality: args.quality.unwrap_or(85),
            include_shadow: args.include_shadow,
            include_ocr_text: args.include_ocr_text,
        };
        let response = self
            .call(TOOL, self.client().capture_window_screenshot(request))
            .await?;

        screenshot_result(TOOL, &response.image_data, response.format, &response.ocr_text)
    }

    #[tool(description = "Capture a rectangular screen region in global coordinates. Read-only.")]
    async fn capture_region_screenshot(
        &self,
        Parameters(args): Parameters<CaptureRegionScreenshotArgs>,
    ) -> ToolOutcome {
        const TOOL: &str = "capture_region_screenshot";

        if args.width <= 0.0 || args.height <= 0.0 {
            return Err(ToolError::failed(format!(
                "Error in {TOOL}: width and height must be positive (got {}x{})",
                args.width, args.height
            )));
        }

        let request = CaptureRegionScreenshotRequest {
            region: Some(Bounds {
                x: args.x,
                y: args.y,
                width: args.width,
                height: args.height,
            }),
            display: args.display,
            format: wire_format(args.format),
            quality: args.quality.unwrap_or(85),
            include_ocr_text: args.include_ocr_text,
        };
        let response = self
            .call(TOOL, self.client().capture_region_screenshot(request))
            .await?;

        screenshot_result(TOOL, &response.image_data, response.format, &response.ocr_text)
    }

    #[tool(description = "Capture the on-screen bounds of an accessibility element. Read-only.")]
    async fn capture_element_screenshot(
        &self,
        Parameters(args): Parameters<CaptureElementScreenshotArgs>,
    ) -> ToolOutcome {
        const TOOL: &str = "capture_element_screenshot";
        let request = CaptureElementScreenshotRequest {
            parent: args.parent,
            element_id: args.element_id,
            padding: args.padding,
            format: wire_format(args.format),
            quality: args.quality.unwrap_or(85),
            include_ocr_text: args.include_ocr_text,
        };
        let response = self
            .call(TOOL, self.client().capture_element_screenshot(request))
            .await?;

        screenshot_result(TOOL, &response.image_data, response.format, &response.ocr_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_defaults_to_png() {
        assert_eq!(wire_format(None), ImageFormat::Png as i32);
        assert_eq!(wire_format(Some(Encoding::Jpeg)), ImageFormat::Jpeg as i32);
        assert_eq!(wire_format(Some(Encoding::Tiff)), ImageFormat::Tiff as i32);
    }

    #[test]
    fn test_empty_image_is_an_error() {
        let err = screenshot_result("capture_screenshot", &[], 1, "").unwrap_err();
        assert!(err.to_string().contains("no image data"));
    }

    #[test]
    fn test_ocr_text_follows_image() {
        let reply = screenshot_result("capture_screenshot", b"png", 1, "Hello").unwrap();
        assert_eq!(reply.0.len(), 2);
        assert_eq!(reply.text(), "OCR text:\nHello");
    }
}
