use authz_client::error::AppError;
use authz_client::prelude::*;
use mockito::Matcher;
use serde_json::json;

const TOKEN: &str = "Authorization:token:d6a6d699-b1dd-4c1e-bf92-1e9b184aade5";

fn client_for(server: &mockito::Server) -> AuthClient {
    let config = Config::with_values(server.url(), TOKEN);
    AuthClient::new(config).expect("failed to build client")
}

fn envelope(code: i64, data: serde_json::Value, msg: &str) -> String {
    json!({"code": code, "data": data, "msg": msg}).to_string()
}

#[tokio::test]
async fn check_interface_auth_encodes_query_parameters() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/checkInterfaceAuth")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("method".into(), "1".into()),
            Matcher::UrlEncoded("path".into(), "/projects".into()),
            Matcher::UrlEncoded("user_id".into(), "45".into()),
            Matcher::UrlEncoded("project_id".into(), "4".into()),
        ]))
        .match_header("authorization", TOKEN)
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body(envelope(2000, json!(true), "success"))
        .create_async()
        .await;

    let client = client_for(&server);
    let req = CheckInterfaceAuthRequest::new(AccessMethod::Get, "/projects", 45, 4);
    let allowed = client.check_interface_auth(&req).await.unwrap();

    assert!(allowed);
    mock.assert_async().await;
}

#[tokio::test]
async fn has_any_permission_posts_full_json_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/hasAnyPermission")
        .match_header("authorization", TOKEN)
        .match_body(Matcher::Json(json!({
            "user_id": 45,
            "project_id": 4,
            "permission_list": ["project:read", "project:write"],
        })))
        .with_status(200)
        .with_body(envelope(2000, json!(false), "success"))
        .create_async()
        .await;

    let client = client_for(&server);
    let req = CheckHasPermissionRequest::new(45, 4)
        .with_permission("project:read")
        .with_permission("project:write");
    let allowed = client.has_any_permission(&req).await.unwrap();

    assert!(!allowed);
    mock.assert_async().await;
}

#[tokio::test]
async fn has_any_role_posts_full_json_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/hasAnyRole")
        .match_header("authorization", TOKEN)
        .match_body(Matcher::Json(json!({
            "user_id": 7,
            "project_id": 12,
            "role_id_list": [3, 9],
        })))
        .with_status(200)
        .with_body(envelope(2000, json!(true), "success"))
        .create_async()
        .await;

    let client = client_for(&server);
    let req = CheckHasRoleRequest::new(7, 12).with_role(3).with_role(9);
    let allowed = client.has_any_role(&req).await.unwrap();

    assert!(allowed);
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_code_surfaces_code_and_message() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/hasAnyRole")
        .with_status(200)
        .with_body(envelope(4003, json!(null), "permission denied"))
        .create_async()
        .await;

    let client = client_for(&server);
    let req = CheckHasRoleRequest::new(7, 12).with_role(3);
    let err = client.has_any_role(&req).await.unwrap_err();

    match &err {
        AppError::UnexpectedCode { code, msg } => {
            assert_eq!(*code, 4003);
            assert_eq!(msg, "permission denied");
        }
        other => panic!("expected UnexpectedCode, got {other:?}"),
    }
    assert!(err.to_string().contains("4003"));
    assert!(err.to_string().contains("permission denied"));
}

#[tokio::test]
async fn non_boolean_data_is_a_type_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/hasAnyPermission")
        .with_status(200)
        .with_body(envelope(2000, json!("yes"), "success"))
        .create_async()
        .await;

    let client = client_for(&server);
    let req = CheckHasPermissionRequest::new(1, 1).with_permission("x");
    let err = client.has_any_permission(&req).await.unwrap_err();

    match &err {
        AppError::UnexpectedDataType(kind) => assert_eq!(kind, "string"),
        other => panic!("expected UnexpectedDataType, got {other:?}"),
    }
}

#[tokio::test]
async fn numeric_data_is_a_type_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/checkInterfaceAuth")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(envelope(2000, json!(1), "success"))
        .create_async()
        .await;

    let client = client_for(&server);
    let req = CheckInterfaceAuthRequest::new(AccessMethod::Post, "/x", 1, 1);
    let err = client.check_interface_auth(&req).await.unwrap_err();

    match &err {
        AppError::UnexpectedDataType(kind) => assert_eq!(kind, "number"),
        other => panic!("expected UnexpectedDataType, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/hasAnyRole")
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    let client = client_for(&server);
    let req = CheckHasRoleRequest::new(1, 1).with_role(2);
    let err = client.has_any_role(&req).await.unwrap_err();

    match err {
        AppError::Json(_) => (),
        other => panic!("expected Json, got {other:?}"),
    }
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/hasAnyPermission")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let client = client_for(&server);
    let req = CheckHasPermissionRequest::new(1, 1).with_permission("x");
    let err = client.has_any_permission(&req).await.unwrap_err();

    match err {
        AppError::Unexpected(status) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected Unexpected, got {other:?}"),
    }
}

#[tokio::test]
async fn base_url_trailing_slash_is_tolerated() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/checkInterfaceAuth")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(envelope(2000, json!(true), "success"))
        .create_async()
        .await;

    let config = Config::with_values(format!("{}/", server.url()), TOKEN);
    let client = AuthClient::new(config).unwrap();
    let req = CheckInterfaceAuthRequest::new(AccessMethod::Delete, "/x", 1, 1);
    assert!(client.check_interface_auth(&req).await.unwrap());
    mock.assert_async().await;
}

#[tokio::test]
async fn trait_object_dispatches_to_client() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/hasAnyRole")
        .with_status(200)
        .with_body(envelope(2000, json!(true), "success"))
        .create_async()
        .await;

    let service: Box<dyn AuthorizationService> = Box::new(client_for(&server));
    let req = CheckHasRoleRequest::new(7, 12).with_role(3);
    assert!(service.has_any_role(&req).await.unwrap());
}

#[test]
fn empty_base_url_is_rejected() {
    let config = Config::with_values("  ", TOKEN);
    match AuthClient::new(config) {
        Err(AppError::InvalidInput(msg)) => assert!(msg.contains("base URL")),
        other => panic!("expected InvalidInput, got {:?}", other.map(|_| ())),
    }
}
