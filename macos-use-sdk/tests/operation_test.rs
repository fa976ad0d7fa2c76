use macos_use_sdk::proto::{
    operation, pack_any, Element, ImageFormat, Operation, Status, WaitElementResponse,
};
use macos_use_sdk::GrpcMacosUseClient;
use std::time::Duration;

fn element(id: &str) -> Element {
    Element {
        element_id: id.to_string(),
        role: "AXButton".to_string(),
        text: Some("OK".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_unpack_response_decodes_packed_message() {
    let response = WaitElementResponse {
        element: Some(element("el-42")),
    };
    let op = Operation {
        name: "operations/wait-1".into(),
        done: true,
        result: Some(operation::Result::Response(pack_any(
            "macosusesdk.v1.WaitElementResponse",
            &response,
        ))),
        ..Default::default()
    };

    let decoded: WaitElementResponse = op.unpack_response().unwrap().unwrap();
    assert_eq!(decoded.element.unwrap().element_id, "el-42");
    assert!(op.error().is_none());
}

#[test]
fn test_unpack_response_without_result_is_none() {
    let op = Operation {
        name: "operations/wait-2".into(),
        done: false,
        ..Default::default()
    };
    assert!(op.unpack_response::<WaitElementResponse>().unwrap().is_none());
}

#[test]
fn test_error_operation_exposes_status() {
    let op = Operation {
        name: "operations/wait-3".into(),
        done: true,
        result: Some(operation::Result::Error(Status {
            code: 5,
            message: "element vanished".into(),
            details: vec![],
        })),
        ..Default::default()
    };
    assert_eq!(op.error().unwrap().message, "element vanished");
    assert!(op.unpack_response::<WaitElementResponse>().unwrap().is_none());
}

#[test]
fn test_pack_any_type_url() {
    let any = pack_any("macosusesdk.v1.Element", &element("a"));
    assert_eq!(any.type_url, "type.googleapis.com/macosusesdk.v1.Element");
}

#[test]
fn test_image_format_mime_types() {
    assert_eq!(ImageFormat::Unspecified.mime_type(), "image/png");
    assert_eq!(ImageFormat::Png.mime_type(), "image/png");
    assert_eq!(ImageFormat::Jpeg.mime_type(), "image/jpeg");
    assert_eq!(ImageFormat::Tiff.mime_type(), "image/tiff");
}

#[tokio::test]
async fn test_connect_lazy_does_not_dial() {
    // Nothing listens on this port; a lazy channel must still be created.
    let client = GrpcMacosUseClient::connect_lazy("127.0.0.1:1", Duration::from_millis(50));
    assert!(client.is_ok());
}

#[tokio::test]
async fn test_connect_lazy_rejects_bad_uri() {
    let client = GrpcMacosUseClient::connect_lazy("http://bad host:50051", Duration::from_secs(1));
    assert!(client.is_err());
}
