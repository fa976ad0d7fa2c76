use super::{Bounds, ImageFormat};

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct CaptureScreenshotRequest {
    #[prost(enumeration = "ImageFormat", tag = "1")]
    pub format: i32,
    /// JPEG quality, 1-100. Ignored for other formats.
    #[prost(int32, tag = "2")]
    pub quality: i32,
    #[prost(int64, optional, tag = "3")]
    pub display: Option<i64>,
    #[prost(bool, tag = "4")]
    pub include_ocr_text: bool,
    #[prost(int32, tag = "5")]
    pub max_width: i32,
    #[prost(int32, tag = "6")]
    pub max_height: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CaptureScreenshotResponse {
    #[prost(bytes = "vec", tag = "1")]
    pub image_data: Vec<u8>,
    #[prost(enumeration = "ImageFormat", tag = "2")]
    pub format: i32,
    #[prost(int32, tag = "3")]
    pub width: i32,
    #[prost(int32, tag = "4")]
    pub height: i32,
    #[prost(string, tag = "5")]
    pub ocr_text: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CaptureWindowScreenshotRequest {
    #[prost(string, tag = "1")]
    pub window: String,
    #[prost(enumeration = "ImageFormat", tag = "2")]
    pub format: i32,
    #[prost(int32, tag = "3")]
    pub quality: i32,
    #[prost(bool, tag = "4")]
    pub include_shadow: bool,
    #[prost(bool, tag = "5")]
    pub include_ocr_text: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CaptureWindowScreenshotResponse {
    #[prost(bytes = "vec", tag = "1")]
    pub image_data: Vec<u8>,
    #[prost(enumeration = "ImageFormat", tag = "2")]
    pub format: i32,
    #[prost(int32, tag = "3")]
    pub width: i32,
    #[prost(int32, tag = "4")]
    pub height: i32,
    #[prost(string, tag = "5")]
    pub ocr_text: String,
    #[prost(string, tag = "6")]
    pub window: String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct CaptureRegionScreenshotRequest {
    #[prost(message, optional, tag = "1")]
    pub region: Option<Bounds>,
    #[prost(int64, optional, tag = "2")]
    pub display: Option<i64>,
    #[prost(enumeration = "ImageFormat", tag = "3")]
    pub format: i32,
    #[prost(int32, tag = "4")]
    pub quality: i32,
    #[prost(bool, tag = "5")]
    pub include_ocr_text: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CaptureRegionScreenshotResponse {
    #[prost(bytes = "vec", tag = "1")]
    pub image_data: Vec<u8>,
    #[prost(enumeration = "ImageFormat", tag = "2")]
    pub format: i32,
    #[prost(int32, tag = "3")]
    pub width: i32,
    #[prost(int32, tag = "4")]
    pub height: i32,
    #[prost(string, tag = "5")]
    pub ocr_text: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CaptureElementScreenshotRequest {
    #[prost(string, tag = "1")]
    pub parent: String,
    #[prost(string, tag = "2")]
    pub element_id: String,
    /// Extra points captured around the element bounds.
    #[prost(double, tag = "3")]
    pub padding: f64,
    #[prost(enumeration = "ImageFormat", tag = "4")]
    pub format: i32,
    #[prost(int32, tag = "5")]
    pub quality: i32,
    #[prost(bool, tag = "6")]
    pub include_ocr_text: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CaptureElementScreenshotResponse {
    #[prost(bytes = "vec", tag = "1")]
    pub image_data: Vec<u8>,
    #[prost(enumeration = "ImageFormat", tag = "2")]
    pub format: i32,
    #[prost(int32, tag = "3")]
    pub width: i32,
    #[prost(int32, tag = "4")]
    pub height: i32,
    #[prost(string, tag = "5")]
    pub ocr_text: String,
    #[prost(string, tag = "6")]
    pub element_id: String,
}
