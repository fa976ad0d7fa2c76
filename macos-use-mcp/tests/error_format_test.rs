use macos_use_mcp::errors::{format_grpc_error, grpc_error_result, suggestion_for};
use macos_use_mcp::poller::PollError;
use tonic::{Code, Status};

#[test]
fn test_not_found_carries_suggestion() {
    let status = Status::not_found("window 7 does not exist");
    assert_eq!(
        format_grpc_error(Some(&status), "get_window"),
        "Error in get_window: NotFound - window 7 does not exist\nSuggestion: Verify the resource exists and the name/ID is correct"
    );
}

#[test]
fn test_no_error_formats_empty() {
    assert_eq!(format_grpc_error(None, "get_window"), "");
}

#[test]
fn test_plain_error_has_no_code() {
    let err = std::io::Error::new(std::io::ErrorKind::Other, "socket closed");
    assert_eq!(
        format_grpc_error(Some(&err), "click"),
        "Error in click: socket closed"
    );
}

#[test]
fn test_status_found_through_source_chain() {
    let err = PollError::Fetch {
        name: "operations/1".into(),
        source: Status::unavailable("connection reset"),
    };
    let text = format_grpc_error(Some(&err), "wait_element");
    assert!(text.starts_with("Error in wait_element: Unavailable - connection reset\nSuggestion: "));
}

#[test]
fn test_codes_without_suggestion() {
    assert!(suggestion_for(Code::Cancelled).is_none());
    assert!(suggestion_for(Code::Unknown).is_none());

    let status = Status::cancelled("client went away");
    assert_eq!(
        format_grpc_error(Some(&status), "scroll"),
        "Error in scroll: Cancelled - client went away"
    );
}

#[test]
fn test_error_result_is_flagged() {
    let status = Status::permission_denied("accessibility access required");
    let result = grpc_error_result(&status, "click_element");
    assert_eq!(result.is_error, Some(true));
    assert_eq!(result.content.len(), 1);
}
