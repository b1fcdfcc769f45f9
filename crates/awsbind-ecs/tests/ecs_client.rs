use awsbind_core::policy::{Policy, Statement};
use awsbind_core::{
    ClientError, ClientErrorKind, Credentials, HttpRequest, HttpResponse, HttpTransport,
    RequestOptions, SdkError,
};
use awsbind_ecs::*;
use mockall::mock;
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};

mock! {
    pub Transport {}

    impl HttpTransport for Transport {
        fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ClientError>;
    }
}

fn json_response(status: u16, body: Value) -> HttpResponse {
    let mut headers = BTreeMap::new();
    headers.insert("content-type".to_string(), "application/x-amz-json-1.1".to_string());
    headers.insert("x-amzn-RequestId".to_string(), "req-1234".to_string());
    HttpResponse::new(status, headers, body.to_string().into_bytes())
}

fn client(transport: MockTransport) -> EcsClient {
    EcsClient::builder()
        .region("us-west-2")
        .credentials(Credentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY"))
        .transport(transport)
        .build()
        .unwrap()
}

fn body_of(request: &HttpRequest) -> Value {
    serde_json::from_slice(&request.body).unwrap()
}

/// Access key id from the `Credential=` part of the authorization header.
fn signing_key_id(request: &HttpRequest) -> String {
    request
        .header("authorization")
        .and_then(|a| a.split("Credential=").nth(1))
        .and_then(|rest| rest.split('/').next())
        .unwrap_or_default()
        .to_string()
}

#[test]
fn run_task_wire_shape_and_output() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| {
            req.method == awsbind_core::Method::POST
                && req.url.as_str() == "https://ecs.us-west-2.amazonaws.com/"
                && req.header("x-amz-target")
                    == Some("AmazonEC2ContainerServiceV20141113.RunTask")
                && req.header("content-type") == Some("application/x-amz-json-1.1")
                && req
                    .header("authorization")
                    .is_some_and(|a| a.contains("/us-west-2/ecs/aws4_request"))
                && body_of(req)
                    == json!({
                        "cluster": "prod",
                        "count": 1,
                        "launchType": "FARGATE",
                        "networkConfiguration": {
                            "awsvpcConfiguration": {
                                "subnets": ["subnet-1"],
                                "assignPublicIp": "DISABLED"
                            }
                        },
                        "taskDefinition": "web:7"
                    })
        })
        .times(1)
        .returning(|_| {
            Ok(json_response(
                200,
                json!({
                    "tasks": [{
                        "taskArn": "arn:aws:ecs:us-west-2:123456789012:task/prod/abc",
                        "lastStatus": "PROVISIONING",
                        "launchType": "FARGATE",
                        "createdAt": 1577836800.5
                    }],
                    "failures": []
                }),
            ))
        });

    let request = RunTaskRequest {
        cluster: Some("prod".into()),
        count: Some(1),
        launch_type: Some(LaunchType::Fargate),
        network_configuration: Some(NetworkConfiguration {
            awsvpc_configuration: Some(AwsVpcConfiguration {
                subnets: vec!["subnet-1".into()],
                assign_public_ip: Some(AssignPublicIp::Disabled),
                ..Default::default()
            }),
        }),
        task_definition: "web:7".into(),
        ..Default::default()
    };
    let out = client(transport).run_task(&request).unwrap();
    assert_eq!(out.tasks.len(), 1);
    let task = &out.tasks[0];
    assert_eq!(task.launch_type, Some(LaunchType::Fargate));
    assert_eq!(task.created_at.unwrap().timestamp_subsec_millis(), 500);
    assert!(out.failures.is_empty());
}

#[test]
fn modeled_error_maps_to_kind() {
    let mut transport = MockTransport::new();
    transport.expect_send().times(1).returning(|_| {
        Ok(json_response(
            400,
            json!({
                "__type": "com.amazonaws.ecs#ClusterNotFoundException",
                "message": "Cluster not found."
            }),
        ))
    });

    let err = client(transport)
        .describe_services(&DescribeServicesRequest {
            cluster: Some("missing".into()),
            services: vec!["api".into()],
            ..Default::default()
        })
        .unwrap_err();

    assert!(err.is_kind(EcsErrorKind::ClusterNotFound));
    let service = err.service_error().unwrap();
    assert_eq!(service.code, "ClusterNotFoundException");
    assert_eq!(service.message, "Cluster not found.");
    assert_eq!(service.status_code, 400);
    assert_eq!(service.request_id.as_deref(), Some("req-1234"));
    assert_eq!(service.operation.as_deref(), Some("DescribeServices"));
}

#[test]
fn server_exception_is_modeled() {
    let mut transport = MockTransport::new();
    transport.expect_send().returning(|_| {
        Ok(json_response(500, json!({"__type": "ServerException", "message": "boom"})))
    });
    let err = client(transport)
        .list_clusters(&ListClustersRequest::default())
        .unwrap_err();
    assert_eq!(err.kind(), Some(EcsErrorKind::Server));
    assert!(err.service_error().unwrap().retryable);
}

#[test]
fn unknown_code_falls_back_to_generic_error() {
    let mut transport = MockTransport::new();
    transport.expect_send().returning(|_| {
        Ok(json_response(
            400,
            json!({"__type": "ThrottlingException", "message": "Rate exceeded"}),
        ))
    });
    let err = client(transport)
        .list_tasks(&ListTasksRequest::default())
        .unwrap_err();
    match err {
        SdkError::Service(ref e) => {
            assert!(e.kind.is_none());
            assert!(!e.is_modeled());
            assert_eq!(e.code, "ThrottlingException");
            assert_eq!(e.message, "Rate exceeded");
        }
        other => panic!("expected service error, got {:?}", other),
    }
}

#[test]
fn error_code_from_header() {
    let mut transport = MockTransport::new();
    transport.expect_send().returning(|_| {
        let mut headers = BTreeMap::new();
        headers.insert(
            "x-amzn-errortype".to_string(),
            "AccessDeniedException:http://internal.amazon.com/coral/".to_string(),
        );
        Ok(HttpResponse::new(403, headers, b"{}".to_vec()))
    });
    let err = client(transport)
        .submit_container_state_change(&SubmitContainerStateChangeRequest::default())
        .unwrap_err();
    assert!(err.is_kind(EcsErrorKind::AccessDenied));
}

#[test]
fn transport_failure_is_client_error() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .times(1)
        .returning(|_| Err(ClientError::timeout("operation timed out")));
    let err = client(transport)
        .stop_task(&StopTaskRequest {
            task: "abc".into(),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(err.client_error().unwrap().kind, ClientErrorKind::Timeout);
    assert!(err.kind().is_none());
}

#[test]
fn per_call_credentials_and_headers() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| {
            req.header("x-amz-security-token") == Some("session")
                && req
                    .header("authorization")
                    .is_some_and(|a| a.contains("Credential=ASIAOVERRIDE/"))
                && req.header("x-trace") == Some("t-1")
        })
        .returning(|_| Ok(json_response(200, json!({"families": ["web"]}))));

    let options = RequestOptions::new()
        .with_credentials(Credentials::new_temporary("ASIAOVERRIDE", "s", "session", None))
        .with_header("X-Trace", "t-1");
    let out = client(transport)
        .send_with(&ListTaskDefinitionFamiliesRequest::default(), &options)
        .unwrap();
    assert_eq!(out.families, vec!["web".to_string()]);
}

#[test]
fn update_service_empty_list_reaches_wire() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| {
            body_of(req) == json!({"service": "api", "placementStrategy": [], "forceNewDeployment": true})
        })
        .returning(|_| {
            Ok(json_response(
                200,
                json!({"service": {"serviceName": "api", "enableECSManagedTags": true}}),
            ))
        });
    let out = client(transport)
        .update_service(&UpdateServiceRequest {
            service: "api".into(),
            placement_strategy: Some(vec![]),
            force_new_deployment: Some(true),
            ..Default::default()
        })
        .unwrap();
    let service = out.service.unwrap();
    assert_eq!(service.service_name.as_deref(), Some("api"));
    assert_eq!(service.enable_ecs_managed_tags, Some(true));
}

#[test]
fn concurrent_calls_keep_their_own_state() {
    let invocation_ids = Arc::new(Mutex::new(HashSet::new()));
    let seen = Arc::clone(&invocation_ids);
    let mut transport = MockTransport::new();
    transport.expect_send().times(8).returning(move |req| {
        let id = req.header("amz-sdk-invocation-id").unwrap().to_string();
        seen.lock().unwrap().insert(id);
        let cluster = body_of(req)["cluster"].as_str().unwrap().to_string();
        Ok(json_response(
            200,
            json!({
                "serviceArns": [format!("arn:aws:ecs:us-west-2:123456789012:service/{}/api", cluster)],
                "nextToken": signing_key_id(req)
            }),
        ))
    });
    let client = client(transport);

    std::thread::scope(|s| {
        for i in 0..8 {
            let client = client.clone();
            s.spawn(move || {
                let cluster = format!("cluster-{}", i);
                let key = format!("AKIDTHREAD{}", i);
                let options =
                    RequestOptions::new().with_credentials(Credentials::new(&key, "secret"));
                let out = client
                    .send_with(
                        &ListServicesRequest {
                            cluster: Some(cluster.clone()),
                            ..Default::default()
                        },
                        &options,
                    )
                    .unwrap();
                assert_eq!(
                    out.service_arns,
                    vec![format!("arn:aws:ecs:us-west-2:123456789012:service/{}/api", cluster)]
                );
                assert_eq!(out.next_token.as_deref(), Some(key.as_str()));
            });
        }
    });

    assert_eq!(invocation_ids.lock().unwrap().len(), 8);
}

#[test]
fn policy_with_ecs_actions() {
    let policy = Policy::new().with_statement(
        Statement::allow()
            .with_actions([EcsActions::RunTask, EcsActions::StopTask])
            .with_resource("*"),
    );
    let doc: Value = serde_json::from_str(&policy.to_json().unwrap()).unwrap();
    assert_eq!(
        doc["Statement"][0]["Action"],
        json!(["ecs:RunTask", "ecs:StopTask"])
    );
    assert_eq!("ecs:*".parse::<EcsActions>(), Ok(EcsActions::AllEcsActions));
}

#[test]
fn put_attributes_echo_round_trip() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .returning(|req| Ok(json_response(200, body_of(req))));

    let attributes = vec![
        Attribute {
            name: "stack".into(),
            value: Some("prod".into()),
            target_type: Some(TargetType::ContainerInstance),
            target_id: Some("arn:aws:ecs:us-west-2:123456789012:container-instance/abc".into()),
        },
        Attribute {
            name: "ecs.capability.gpu".into(),
            ..Default::default()
        },
    ];
    let out = client(transport)
        .put_attributes(&PutAttributesRequest {
            cluster: Some("prod".into()),
            attributes: attributes.clone(),
        })
        .unwrap();
    assert_eq!(out.attributes, attributes);
}
