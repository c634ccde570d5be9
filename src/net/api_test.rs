use super::*;

#[test]
fn key_reset_endpoint_formats_id() {
    assert_eq!(key_reset_endpoint(42), "/api/keys/reset?id=42");
}

#[test]
fn statuses_above_399_fail() {
    assert!(is_success(200));
    assert!(is_success(399));
    assert!(!is_success(400));
    assert!(!is_success(500));
}

#[test]
fn user_message_prefers_server_text() {
    let err = ApiError::Status { status: 404, body: "User not found, check the email or password and try again.\n".to_owned() };
    assert_eq!(err.user_message(), "User not found, check the email or password and try again.");
    assert_eq!(err.status(), Some(404));
}

#[test]
fn user_message_falls_back_to_display() {
    let err = ApiError::Status { status: 500, body: "  ".to_owned() };
    assert_eq!(err.user_message(), "request failed with status 500");
    assert_eq!(ApiError::Network("offline".to_owned()).user_message(), "network error: offline");
    assert_eq!(ApiError::Unavailable.status(), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn calls_are_unavailable_natively() {
    let creds = Credentials { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    futures::executor::block_on(async {
        assert_eq!(fetch_current_user().await, Err(ApiError::Unavailable));
        assert_eq!(login(&creds).await, Err(ApiError::Unavailable));
        assert_eq!(reset_key(1).await, Err(ApiError::Unavailable));
        assert_eq!(fetch_random(RandomKind::Boolean).await, Err(ApiError::Unavailable));
        assert_eq!(fetch_key_ids().await, Err(ApiError::Unavailable));
    });
}
