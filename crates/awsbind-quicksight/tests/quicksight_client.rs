use awsbind_core::policy::{Policy, Statement};
use awsbind_core::{
    ClientError, ClientErrorKind, Credentials, HttpRequest, HttpResponse, HttpTransport, Method,
    RequestOptions, SdkError,
};
use awsbind_quicksight::*;
use mockall::mock;
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashSet};

mock! {
    pub Transport {}

    impl HttpTransport for Transport {
        fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ClientError>;
    }
}

const ACCOUNT: &str = "111122223333";

fn json_response(status: u16, body: Value) -> HttpResponse {
    let mut headers = BTreeMap::new();
    headers.insert("content-type".to_string(), "application/json".to_string());
    headers.insert("x-amzn-RequestId".to_string(), "req-qs-1".to_string());
    HttpResponse::new(status, headers, body.to_string().into_bytes())
}

fn client(transport: MockTransport) -> QuickSightClient {
    QuickSightClient::builder()
        .region("us-east-1")
        .credentials(Credentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY"))
        .transport(transport)
        .build()
        .unwrap()
}

#[test]
fn describe_user_binds_status_and_request_id() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| {
            req.method == Method::GET
                && req.url.as_str()
                    == "https://quicksight.us-east-1.amazonaws.com/accounts/111122223333/namespaces/default/users/ana"
                && req.body.is_empty()
                && req
                    .header("authorization")
                    .is_some_and(|a| a.contains("/us-east-1/quicksight/aws4_request"))
        })
        .times(1)
        .returning(|_| {
            Ok(json_response(
                200,
                json!({
                    "User": {
                        "Arn": "arn:aws:quicksight:us-east-1:111122223333:user/default/ana",
                        "UserName": "ana",
                        "Role": "AUTHOR",
                        "IdentityType": "QUICKSIGHT",
                        "Active": true
                    }
                }),
            ))
        });

    let out = client(transport)
        .describe_user(&DescribeUserRequest {
            aws_account_id: ACCOUNT.into(),
            namespace: "default".into(),
            user_name: "ana".into(),
        })
        .unwrap();
    assert_eq!(out.status, Some(200));
    assert_eq!(out.request_id.as_deref(), Some("req-qs-1"));
    let user = out.user.unwrap();
    assert_eq!(user.role, Some(UserRole::Author));
    assert_eq!(user.identity_type, Some(IdentityType::Quicksight));
}

#[test]
fn update_user_sends_put_with_body() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| {
            req.method == Method::PUT
                && req.url.path() == "/accounts/111122223333/namespaces/default/users/ana"
                && req.header("content-type") == Some("application/json")
                && serde_json::from_slice::<Value>(&req.body).unwrap()
                    == json!({"Email": "ana@example.com", "Role": "ADMIN"})
        })
        .times(1)
        .returning(|_| {
            Ok(json_response(
                200,
                json!({"User": {"UserName": "ana", "Role": "ADMIN"}, "RequestId": "body-rid", "Status": 200}),
            ))
        });

    let out = client(transport)
        .update_user(&UpdateUserRequest::new(
            ACCOUNT,
            "default",
            "ana",
            "ana@example.com",
            UserRole::Admin,
        ))
        .unwrap();
    assert_eq!(out.request_id.as_deref(), Some("body-rid"));
    assert_eq!(out.user.unwrap().role, Some(UserRole::Admin));
}

#[test]
fn list_users_pages_through_query() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| req.url.query() == Some("next-token=abc%3D&max-results=50"))
        .times(1)
        .returning(|_| {
            Ok(json_response(
                200,
                json!({"UserList": [{"UserName": "a"}, {"UserName": "b"}]}),
            ))
        });

    let out = client(transport)
        .list_users(&ListUsersRequest {
            aws_account_id: ACCOUNT.into(),
            namespace: "default".into(),
            next_token: Some("abc=".into()),
            max_results: Some(50),
        })
        .unwrap();
    assert_eq!(out.user_list.len(), 2);
    assert!(out.next_token.is_none());
}

#[test]
fn modeled_error_from_header() {
    let mut transport = MockTransport::new();
    transport.expect_send().returning(|_| {
        let mut headers = BTreeMap::new();
        headers.insert(
            "x-amzn-ErrorType".to_string(),
            "ResourceNotFoundException:http://internal.amazon.com/coral/com.amazonaws.quicksight/"
                .to_string(),
        );
        headers.insert("x-amzn-RequestId".to_string(), "req-404".to_string());
        Ok(HttpResponse::new(
            404,
            headers,
            br#"{"Message":"Dashboard d-1 not found"}"#.to_vec(),
        ))
    });

    let err = client(transport)
        .describe_dashboard(&DescribeDashboardRequest {
            aws_account_id: ACCOUNT.into(),
            dashboard_id: "d-1".into(),
            ..Default::default()
        })
        .unwrap_err();
    assert!(err.is_kind(QuickSightErrorKind::ResourceNotFound));
    assert_eq!(err.request_id(), Some("req-404"));
    let service = err.service_error().unwrap();
    assert_eq!(service.message, "Dashboard d-1 not found");
    assert_eq!(service.status_code, 404);
    assert_eq!(service.operation.as_deref(), Some("DescribeDashboard"));
}

#[test]
fn throttling_is_modeled_and_retryable() {
    let mut transport = MockTransport::new();
    transport.expect_send().returning(|_| {
        Ok(json_response(
            429,
            json!({"__type": "ThrottlingException", "Message": "Rate exceeded"}),
        ))
    });
    let err = client(transport)
        .list_dashboards(&ListDashboardsRequest {
            aws_account_id: ACCOUNT.into(),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(err.kind(), Some(QuickSightErrorKind::Throttling));
    assert!(err.service_error().unwrap().retryable);
}

#[test]
fn unknown_code_falls_back_to_generic_error() {
    let mut transport = MockTransport::new();
    transport.expect_send().returning(|_| {
        Ok(json_response(
            400,
            json!({"__type": "ServiceQuotaExceededException", "Message": "quota"}),
        ))
    });
    let err = client(transport)
        .list_groups(&ListGroupsRequest {
            aws_account_id: ACCOUNT.into(),
            namespace: "default".into(),
            ..Default::default()
        })
        .unwrap_err();
    match err {
        SdkError::Service(ref e) => {
            assert!(e.kind.is_none());
            assert_eq!(e.code, "ServiceQuotaExceededException");
            assert_eq!(e.message, "quota");
        }
        other => panic!("expected service error, got {:?}", other),
    }
}

#[test]
fn empty_label_never_reaches_transport() {
    let mut transport = MockTransport::new();
    transport.expect_send().times(0);
    let err = client(transport)
        .delete_group(&DeleteGroupRequest {
            aws_account_id: ACCOUNT.into(),
            namespace: "default".into(),
            group_name: String::new(),
        })
        .unwrap_err();
    assert_eq!(err.client_error().unwrap().kind, ClientErrorKind::Marshall);
}

#[test]
fn embed_url_query() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| {
            req.url.path() == "/accounts/111122223333/dashboards/sales/embed-url"
                && req.url.query()
                    == Some("creds-type=QUICKSIGHT&reset-disabled=true&user-arn=arn%3Aaws%3Aquicksight%3A%3A%3Auser%2Fana")
        })
        .returning(|_| {
            Ok(json_response(
                200,
                json!({"EmbedUrl": "https://us-east-1.quicksight.aws.amazon.com/embed/x", "Status": 200}),
            ))
        });
    let mut req = GetDashboardEmbedUrlRequest::new(ACCOUNT, "sales", EmbeddingIdentityType::Quicksight);
    req.reset_disabled = Some(true);
    req.user_arn = Some("arn:aws:quicksight:::user/ana".into());
    let out = client(transport).get_dashboard_embed_url(&req).unwrap();
    assert!(out.embed_url.unwrap().contains("/embed/"));
}

#[test]
fn concurrent_calls_keep_their_own_state() {
    let mut transport = MockTransport::new();
    transport.expect_send().times(6).returning(|req| {
        let namespace = req.url.path().split('/').nth(4).unwrap_or_default().to_string();
        let key = req
            .header("authorization")
            .and_then(|a| a.split("Credential=").nth(1))
            .and_then(|rest| rest.split('/').next())
            .unwrap_or_default()
            .to_string();
        let invocation_id = req.header("amz-sdk-invocation-id").unwrap_or_default();
        Ok(json_response(
            200,
            json!({
                "GroupList": [{"GroupName": namespace}],
                "NextToken": key,
                "RequestId": invocation_id
            }),
        ))
    });
    let client = client(transport);

    let request_ids: HashSet<String> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..6)
            .map(|i| {
                let client = client.clone();
                s.spawn(move || {
                    let namespace = format!("ns-{}", i);
                    let key = format!("AKIDTENANT{}", i);
                    let options =
                        RequestOptions::new().with_credentials(Credentials::new(&key, "secret"));
                    let out = client
                        .send_with(
                            &ListGroupsRequest {
                                aws_account_id: ACCOUNT.into(),
                                namespace: namespace.clone(),
                                ..Default::default()
                            },
                            &options,
                        )
                        .unwrap();
                    assert_eq!(out.group_list[0].group_name.as_deref(), Some(namespace.as_str()));
                    assert_eq!(out.next_token.as_deref(), Some(key.as_str()));
                    out.request_id.unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(request_ids.len(), 6);
}

#[test]
fn policy_with_quicksight_actions() {
    let policy = Policy::new().with_statement(
        Statement::allow()
            .with_actions([
                QuickSightActions::GetDashboardEmbedUrl,
                QuickSightActions::RegisterUser,
            ])
            .with_resource("*"),
    );
    let doc: Value = serde_json::from_str(&policy.to_json().unwrap()).unwrap();
    assert_eq!(
        doc["Statement"][0]["Action"],
        json!(["quicksight:GetDashboardEmbedUrl", "quicksight:RegisterUser"])
    );
}

#[test]
fn iam_policy_assignment_echo_round_trip() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| req.url.path() == "/accounts/111122223333/namespaces/default/iam-policy-assignments/")
        .returning(|req| {
            let body: Value = serde_json::from_slice(&req.body).unwrap();
            Ok(json_response(200, body))
        });

    let mut req = CreateIamPolicyAssignmentRequest::new(
        ACCOUNT,
        "default",
        "readers",
        AssignmentStatus::Enabled,
    );
    req.policy_arn = Some("arn:aws:iam::aws:policy/AmazonAthenaFullAccess".into());
    req.identities
        .insert("group".into(), vec!["analysts".into(), "finance".into()]);

    let out = client(transport).create_iam_policy_assignment(&req).unwrap();
    assert_eq!(out.assignment_name.as_deref(), Some("readers"));
    assert_eq!(out.assignment_status, Some(AssignmentStatus::Enabled));
    assert_eq!(out.policy_arn, req.policy_arn);
    assert_eq!(out.identities, req.identities);
    assert_eq!(out.status, Some(200));
    assert_eq!(out.request_id.as_deref(), Some("req-qs-1"));
}
