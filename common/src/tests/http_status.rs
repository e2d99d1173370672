use crate::HttpStatusCode;

#[test]
fn given_status_codes_when_categorised_then_ranges_are_respected() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(204).is_success());
    assert!(!HttpStatusCode(301).is_success());

    assert!(HttpStatusCode::BAD_REQUEST.is_client_error());
    assert!(HttpStatusCode::TOO_MANY_REQUESTS.is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());

    assert!(HttpStatusCode(503).is_server_error());
    assert!(!HttpStatusCode(499).is_server_error());
}

#[test]
fn given_status_code_when_displayed_then_renders_number() {
    assert_eq!(HttpStatusCode::from(418).to_string(), "418");
    assert_eq!(HttpStatusCode::UNAUTHORIZED.as_u16(), 401);
}
