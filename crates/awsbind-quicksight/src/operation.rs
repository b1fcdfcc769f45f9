//! Binds each request to its restJson1 route.
//!
//! Path labels are percent-encoded and must not be empty. Query members are
//! sent only when set. Requests that carry a body send their remaining
//! members as a JSON document.

use crate::request::*;
use crate::response::*;
use awsbind_core::operation::unmarshall_json;
use awsbind_core::protocol::encode_label;
use awsbind_core::{ClientError, HttpResponse, MarshalledRequest, Method, Operation};

/// Marker for operations that belong to QuickSight.
pub trait QuickSightOperation: Operation {}

macro_rules! add_query {
    ($req:ident, $this:ident, opt $wire:literal => $field:ident) => {
        $req.query_opt($wire, $this.$field.as_ref())
    };
    ($req:ident, $this:ident, req $wire:literal => $field:ident) => {
        $req.query($wire, &$this.$field)
    };
    ($req:ident, $this:ident, list $wire:literal => $field:ident) => {
        $req.query_list($wire, &$this.$field[..])
    };
}

macro_rules! add_body {
    ($req:ident, $this:ident, json) => {
        $req.json_body($this)?
    };
    ($req:ident, $this:ident, empty) => {
        $req
    };
}

macro_rules! rest_operations {
    (
        $(
            $name:literal : $request:ty => $response:ty {
                $method:ident $path:literal [ $( $label:ident ),* ]
                query [ $( $kind:ident $wire:literal => $field:ident ),* ]
                body $body:ident
            }
        ),+ $(,)?
    ) => {
        $(
            impl Operation for $request {
                const NAME: &'static str = $name;
                type Output = $response;

                fn marshall(&self) -> Result<MarshalledRequest, ClientError> {
                    let path = format!(
                        $path,
                        $( encode_label(stringify!($label), &self.$label.to_string())? ),*
                    );
                    let req = MarshalledRequest::rest(Method::$method, path);
                    $( let req = add_query!(req, self, $kind $wire => $field); )*
                    let req = add_body!(req, self, $body);
                    Ok(req)
                }

                fn unmarshall(response: &HttpResponse) -> Result<Self::Output, ClientError> {
                    let mut out: $response = unmarshall_json(response)?;
                    out.status = Some(i32::from(response.status));
                    if out.request_id.is_none() {
                        out.request_id = response.request_id().map(str::to_string);
                    }
                    Ok(out)
                }
            }

            impl QuickSightOperation for $request {}
        )+

        /// Wire names of every QuickSight operation.
        pub const OPERATION_NAMES: &[&str] = &[ $( $name ),+ ];
    };
}

rest_operations! {
    "CancelIngestion": CancelIngestionRequest => CancelIngestionResponse {
        DELETE "/accounts/{}/data-sets/{}/ingestions/{}" [aws_account_id, data_set_id, ingestion_id]
        query []
        body empty
    },
    "CreateDashboard": CreateDashboardRequest => CreateDashboardResponse {
        POST "/accounts/{}/dashboards/{}" [aws_account_id, dashboard_id]
        query []
        body json
    },
    "CreateDataSet": CreateDataSetRequest => CreateDataSetResponse {
        POST "/accounts/{}/data-sets" [aws_account_id]
        query []
        body json
    },
    "CreateDataSource": CreateDataSourceRequest => CreateDataSourceResponse {
        POST "/accounts/{}/data-sources" [aws_account_id]
        query []
        body json
    },
    "CreateGroup": CreateGroupRequest => CreateGroupResponse {
        POST "/accounts/{}/namespaces/{}/groups" [aws_account_id, namespace]
        query []
        body json
    },
    "CreateGroupMembership": CreateGroupMembershipRequest => CreateGroupMembershipResponse {
        PUT "/accounts/{}/namespaces/{}/groups/{}/members/{}" [aws_account_id, namespace, group_name, member_name]
        query []
        body empty
    },
    "CreateIAMPolicyAssignment": CreateIamPolicyAssignmentRequest => CreateIamPolicyAssignmentResponse {
        POST "/accounts/{}/namespaces/{}/iam-policy-assignments/" [aws_account_id, namespace]
        query []
        body json
    },
    "CreateIngestion": CreateIngestionRequest => CreateIngestionResponse {
        PUT "/accounts/{}/data-sets/{}/ingestions/{}" [aws_account_id, data_set_id, ingestion_id]
        query []
        body empty
    },
    "CreateTemplate": CreateTemplateRequest => CreateTemplateResponse {
        POST "/accounts/{}/templates/{}" [aws_account_id, template_id]
        query []
        body json
    },
    "CreateTemplateAlias": CreateTemplateAliasRequest => CreateTemplateAliasResponse {
        POST "/accounts/{}/templates/{}/aliases/{}" [aws_account_id, template_id, alias_name]
        query []
        body json
    },
    "DeleteDashboard": DeleteDashboardRequest => DeleteDashboardResponse {
        DELETE "/accounts/{}/dashboards/{}" [aws_account_id, dashboard_id]
        query [opt "version-number" => version_number]
        body empty
    },
    "DeleteDataSet": DeleteDataSetRequest => DeleteDataSetResponse {
        DELETE "/accounts/{}/data-sets/{}" [aws_account_id, data_set_id]
        query []
        body empty
    },
    "DeleteDataSource": DeleteDataSourceRequest => DeleteDataSourceResponse {
        DELETE "/accounts/{}/data-sources/{}" [aws_account_id, data_source_id]
        query []
        body empty
    },
    "DeleteGroup": DeleteGroupRequest => DeleteGroupResponse {
        DELETE "/accounts/{}/namespaces/{}/groups/{}" [aws_account_id, namespace, group_name]
        query []
        body empty
    },
    "DeleteGroupMembership": DeleteGroupMembershipRequest => DeleteGroupMembershipResponse {
        DELETE "/accounts/{}/namespaces/{}/groups/{}/members/{}" [aws_account_id, namespace, group_name, member_name]
        query []
        body empty
    },
    "DeleteIAMPolicyAssignment": DeleteIamPolicyAssignmentRequest => DeleteIamPolicyAssignmentResponse {
        DELETE "/accounts/{}/namespace/{}/iam-policy-assignments/{}" [aws_account_id, namespace, assignment_name]
        query []
        body empty
    },
    "DeleteTemplate": DeleteTemplateRequest => DeleteTemplateResponse {
        DELETE "/accounts/{}/templates/{}" [aws_account_id, template_id]
        query [opt "version-number" => version_number]
        body empty
    },
    "DeleteTemplateAlias": DeleteTemplateAliasRequest => DeleteTemplateAliasResponse {
        DELETE "/accounts/{}/templates/{}/aliases/{}" [aws_account_id, template_id, alias_name]
        query []
        body empty
    },
    "DeleteUser": DeleteUserRequest => DeleteUserResponse {
        DELETE "/accounts/{}/namespaces/{}/users/{}" [aws_account_id, namespace, user_name]
        query []
        body empty
    },
    "DeleteUserByPrincipalId": DeleteUserByPrincipalIdRequest => DeleteUserByPrincipalIdResponse {
        DELETE "/accounts/{}/namespaces/{}/user-principals/{}" [aws_account_id, namespace, principal_id]
        query []
        body empty
    },
    "DescribeDashboard": DescribeDashboardRequest => DescribeDashboardResponse {
        GET "/accounts/{}/dashboards/{}" [aws_account_id, dashboard_id]
        query [opt "version-number" => version_number, opt "alias-name" => alias_name]
        body empty
    },
    "DescribeDashboardPermissions": DescribeDashboardPermissionsRequest => DescribeDashboardPermissionsResponse {
        GET "/accounts/{}/dashboards/{}/permissions" [aws_account_id, dashboard_id]
        query []
        body empty
    },
    "DescribeDataSet": DescribeDataSetRequest => DescribeDataSetResponse {
        GET "/accounts/{}/data-sets/{}" [aws_account_id, data_set_id]
        query []
        body empty
    },
    "DescribeDataSetPermissions": DescribeDataSetPermissionsRequest => DescribeDataSetPermissionsResponse {
        GET "/accounts/{}/data-sets/{}/permissions" [aws_account_id, data_set_id]
        query []
        body empty
    },
    "DescribeDataSource": DescribeDataSourceRequest => DescribeDataSourceResponse {
        GET "/accounts/{}/data-sources/{}" [aws_account_id, data_source_id]
        query []
        body empty
    },
    "DescribeDataSourcePermissions": DescribeDataSourcePermissionsRequest => DescribeDataSourcePermissionsResponse {
        GET "/accounts/{}/data-sources/{}/permissions" [aws_account_id, data_source_id]
        query []
        body empty
    },
    "DescribeGroup": DescribeGroupRequest => DescribeGroupResponse {
        GET "/accounts/{}/namespaces/{}/groups/{}" [aws_account_id, namespace, group_name]
        query []
        body empty
    },
    "DescribeIAMPolicyAssignment": DescribeIamPolicyAssignmentRequest => DescribeIamPolicyAssignmentResponse {
        GET "/accounts/{}/namespaces/{}/iam-policy-assignments/{}" [aws_account_id, namespace, assignment_name]
        query []
        body empty
    },
    "DescribeIngestion": DescribeIngestionRequest => DescribeIngestionResponse {
        GET "/accounts/{}/data-sets/{}/ingestions/{}" [aws_account_id, data_set_id, ingestion_id]
        query []
        body empty
    },
    "DescribeTemplate": DescribeTemplateRequest => DescribeTemplateResponse {
        GET "/accounts/{}/templates/{}" [aws_account_id, template_id]
        query [opt "version-number" => version_number, opt "alias-name" => alias_name]
        body empty
    },
    "DescribeTemplateAlias": DescribeTemplateAliasRequest => DescribeTemplateAliasResponse {
        GET "/accounts/{}/templates/{}/aliases/{}" [aws_account_id, template_id, alias_name]
        query []
        body empty
    },
    "DescribeTemplatePermissions": DescribeTemplatePermissionsRequest => DescribeTemplatePermissionsResponse {
        GET "/accounts/{}/templates/{}/permissions" [aws_account_id, template_id]
        query []
        body empty
    },
    "DescribeUser": DescribeUserRequest => DescribeUserResponse {
        GET "/accounts/{}/namespaces/{}/users/{}" [aws_account_id, namespace, user_name]
        query []
        body empty
    },
    "GetDashboardEmbedUrl": GetDashboardEmbedUrlRequest => GetDashboardEmbedUrlResponse {
        GET "/accounts/{}/dashboards/{}/embed-url" [aws_account_id, dashboard_id]
        query [req "creds-type" => identity_type, opt "session-lifetime" => session_lifetime_in_minutes, opt "undo-redo-disabled" => undo_redo_disabled, opt "reset-disabled" => reset_disabled, opt "user-arn" => user_arn]
        body empty
    },
    "ListDashboardVersions": ListDashboardVersionsRequest => ListDashboardVersionsResponse {
        GET "/accounts/{}/dashboards/{}/versions" [aws_account_id, dashboard_id]
        query [opt "next-token" => next_token, opt "max-results" => max_results]
        body empty
    },
    "ListDashboards": ListDashboardsRequest => ListDashboardsResponse {
        GET "/accounts/{}/dashboards" [aws_account_id]
        query [opt "next-token" => next_token, opt "max-results" => max_results]
        body empty
    },
    "ListDataSets": ListDataSetsRequest => ListDataSetsResponse {
        GET "/accounts/{}/data-sets" [aws_account_id]
        query [opt "next-token" => next_token, opt "max-results" => max_results]
        body empty
    },
    "ListDataSources": ListDataSourcesRequest => ListDataSourcesResponse {
        GET "/accounts/{}/data-sources" [aws_account_id]
        query [opt "next-token" => next_token, opt "max-results" => max_results]
        body empty
    },
    "ListGroupMemberships": ListGroupMembershipsRequest => ListGroupMembershipsResponse {
        GET "/accounts/{}/namespaces/{}/groups/{}/members" [aws_account_id, namespace, group_name]
        query [opt "next-token" => next_token, opt "max-results" => max_results]
        body empty
    },
    "ListGroups": ListGroupsRequest => ListGroupsResponse {
        GET "/accounts/{}/namespaces/{}/groups" [aws_account_id, namespace]
        query [opt "next-token" => next_token, opt "max-results" => max_results]
        body empty
    },
    "ListIAMPolicyAssignments": ListIamPolicyAssignmentsRequest => ListIamPolicyAssignmentsResponse {
        GET "/accounts/{}/namespaces/{}/iam-policy-assignments" [aws_account_id, namespace]
        query [opt "next-token" => next_token, opt "max-results" => max_results]
        body json
    },
    "ListIAMPolicyAssignmentsForUser": ListIamPolicyAssignmentsForUserRequest => ListIamPolicyAssignmentsForUserResponse {
        GET "/accounts/{}/namespaces/{}/users/{}/iam-policy-assignments" [aws_account_id, namespace, user_name]
        query [opt "next-token" => next_token, opt "max-results" => max_results]
        body empty
    },
    "ListIngestions": ListIngestionsRequest => ListIngestionsResponse {
        GET "/accounts/{}/data-sets/{}/ingestions" [aws_account_id, data_set_id]
        query [opt "next-token" => next_token, opt "max-results" => max_results]
        body empty
    },
    "ListTagsForResource": ListTagsForResourceRequest => ListTagsForResourceResponse {
        GET "/resources/{}/tags" [resource_arn]
        query []
        body empty
    },
    "ListTemplateAliases": ListTemplateAliasesRequest => ListTemplateAliasesResponse {
        GET "/accounts/{}/templates/{}/aliases" [aws_account_id, template_id]
        query [opt "next-token" => next_token, opt "max-result" => max_results]
        body empty
    },
    "ListTemplateVersions": ListTemplateVersionsRequest => ListTemplateVersionsResponse {
        GET "/accounts/{}/templates/{}/versions" [aws_account_id, template_id]
        query [opt "next-token" => next_token, opt "max-results" => max_results]
        body empty
    },
    "ListTemplates": ListTemplatesRequest => ListTemplatesResponse {
        GET "/accounts/{}/templates" [aws_account_id]
        query [opt "next-token" => next_token, opt "max-result" => max_results]
        body empty
    },
    "ListUserGroups": ListUserGroupsRequest => ListUserGroupsResponse {
        GET "/accounts/{}/namespaces/{}/users/{}/groups" [aws_account_id, namespace, user_name]
        query [opt "next-token" => next_token, opt "max-results" => max_results]
        body empty
    },
    "ListUsers": ListUsersRequest => ListUsersResponse {
        GET "/accounts/{}/namespaces/{}/users" [aws_account_id, namespace]
        query [opt "next-token" => next_token, opt "max-results" => max_results]
        body empty
    },
    "RegisterUser": RegisterUserRequest => RegisterUserResponse {
        POST "/accounts/{}/namespaces/{}/users" [aws_account_id, namespace]
        query []
        body json
    },
    "SearchDashboards": SearchDashboardsRequest => SearchDashboardsResponse {
        POST "/accounts/{}/search/dashboards" [aws_account_id]
        query []
        body json
    },
    "TagResource": TagResourceRequest => TagResourceResponse {
        POST "/resources/{}/tags" [resource_arn]
        query []
        body json
    },
    "UntagResource": UntagResourceRequest => UntagResourceResponse {
        DELETE "/resources/{}/tags" [resource_arn]
        query [list "keys" => tag_keys]
        body empty
    },
    "UpdateDashboard": UpdateDashboardRequest => UpdateDashboardResponse {
        PUT "/accounts/{}/dashboards/{}" [aws_account_id, dashboard_id]
        query []
        body json
    },
    "UpdateDashboardPermissions": UpdateDashboardPermissionsRequest => UpdateDashboardPermissionsResponse {
        PUT "/accounts/{}/dashboards/{}/permissions" [aws_account_id, dashboard_id]
        query []
        body json
    },
    "UpdateDashboardPublishedVersion": UpdateDashboardPublishedVersionRequest => UpdateDashboardPublishedVersionResponse {
        PUT "/accounts/{}/dashboards/{}/versions/{}" [aws_account_id, dashboard_id, version_number]
        query []
        body empty
    },
    "UpdateDataSet": UpdateDataSetRequest => UpdateDataSetResponse {
        PUT "/accounts/{}/data-sets/{}" [aws_account_id, data_set_id]
        query []
        body json
    },
    "UpdateDataSetPermissions": UpdateDataSetPermissionsRequest => UpdateDataSetPermissionsResponse {
        POST "/accounts/{}/data-sets/{}/permissions" [aws_account_id, data_set_id]
        query []
        body json
    },
    "UpdateDataSource": UpdateDataSourceRequest => UpdateDataSourceResponse {
        PUT "/accounts/{}/data-sources/{}" [aws_account_id, data_source_id]
        query []
        body json
    },
    "UpdateDataSourcePermissions": UpdateDataSourcePermissionsRequest => UpdateDataSourcePermissionsResponse {
        POST "/accounts/{}/data-sources/{}/permissions" [aws_account_id, data_source_id]
        query []
        body json
    },
    "UpdateGroup": UpdateGroupRequest => UpdateGroupResponse {
        PUT "/accounts/{}/namespaces/{}/groups/{}" [aws_account_id, namespace, group_name]
        query []
        body json
    },
    "UpdateIAMPolicyAssignment": UpdateIamPolicyAssignmentRequest => UpdateIamPolicyAssignmentResponse {
        PUT "/accounts/{}/namespaces/{}/iam-policy-assignments/{}" [aws_account_id, namespace, assignment_name]
        query []
        body json
    },
    "UpdateTemplate": UpdateTemplateRequest => UpdateTemplateResponse {
        PUT "/accounts/{}/templates/{}" [aws_account_id, template_id]
        query []
        body json
    },
    "UpdateTemplateAlias": UpdateTemplateAliasRequest => UpdateTemplateAliasResponse {
        PUT "/accounts/{}/templates/{}/aliases/{}" [aws_account_id, template_id, alias_name]
        query []
        body json
    },
    "UpdateTemplatePermissions": UpdateTemplatePermissionsRequest => UpdateTemplatePermissionsResponse {
        PUT "/accounts/{}/templates/{}/permissions" [aws_account_id, template_id]
        query []
        body json
    },
    "UpdateUser": UpdateUserRequest => UpdateUserResponse {
        PUT "/accounts/{}/namespaces/{}/users/{}" [aws_account_id, namespace, user_name]
        query []
        body json
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use std::collections::{BTreeMap, HashSet};

    #[test]
    fn sixty_six_distinct_operations() {
        assert_eq!(OPERATION_NAMES.len(), 66);
        let unique: HashSet<_> = OPERATION_NAMES.iter().collect();
        assert_eq!(unique.len(), 66);
    }

    #[test]
    fn labels_fill_the_path() {
        let req = DescribeDashboardRequest {
            aws_account_id: "123456789012".into(),
            dashboard_id: "sales".into(),
            version_number: Some(3),
            ..Default::default()
        };
        let m = req.marshall().unwrap();
        assert_eq!(m.method, Method::GET);
        assert_eq!(m.path, "/accounts/123456789012/dashboards/sales");
        assert_eq!(m.query, vec![("version-number".to_string(), "3".to_string())]);
        assert!(m.body.is_empty());
    }

    #[test]
    fn labels_are_percent_encoded() {
        let req = ListTagsForResourceRequest {
            resource_arn: "arn:aws:quicksight:us-east-1:123:dashboard/a b".into(),
        };
        let m = req.marshall().unwrap();
        assert_eq!(
            m.path,
            "/resources/arn%3Aaws%3Aquicksight%3Aus-east-1%3A123%3Adashboard%2Fa%20b/tags"
        );
    }

    #[test]
    fn empty_label_is_rejected() {
        let req = DescribeDataSetRequest {
            aws_account_id: "123".into(),
            data_set_id: String::new(),
        };
        let err = req.marshall().unwrap_err();
        assert!(err.to_string().contains("data_set_id"));
    }

    #[test]
    fn body_excludes_path_and_query_members() {
        let req = CreateGroupRequest {
            aws_account_id: "123".into(),
            namespace: "default".into(),
            group_name: "analysts".into(),
            description: Some("BI team".into()),
        };
        let m = req.marshall().unwrap();
        assert_eq!(m.method, Method::POST);
        assert_eq!(m.path, "/accounts/123/namespaces/default/groups");
        let body: serde_json::Value = serde_json::from_slice(&m.body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"GroupName": "analysts", "Description": "BI team"})
        );
        assert_eq!(
            m.headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn required_and_list_query_members() {
        let mut req = GetDashboardEmbedUrlRequest::new("123", "d1", EmbeddingIdentityType::Iam);
        req.session_lifetime_in_minutes = Some(60);
        let m = req.marshall().unwrap();
        assert_eq!(
            m.query,
            vec![
                ("creds-type".to_string(), "IAM".to_string()),
                ("session-lifetime".to_string(), "60".to_string()),
            ]
        );

        let req = UntagResourceRequest {
            resource_arn: "arn:r".into(),
            tag_keys: vec!["env".into(), "team".into()],
        };
        let m = req.marshall().unwrap();
        assert_eq!(m.method, Method::DELETE);
        assert_eq!(m.query.len(), 2);
        assert!(m.query.iter().all(|(k, _)| k == "keys"));
    }

    #[test]
    fn assignment_status_filter_goes_in_body() {
        let req = ListIamPolicyAssignmentsRequest {
            aws_account_id: "123".into(),
            namespace: "default".into(),
            assignment_status: Some(AssignmentStatus::Enabled),
            max_results: Some(10),
            ..Default::default()
        };
        let m = req.marshall().unwrap();
        assert_eq!(m.method, Method::GET);
        assert_eq!(m.path, "/accounts/123/namespaces/default/iam-policy-assignments");
        assert_eq!(m.query, vec![("max-results".to_string(), "10".to_string())]);
        let body: serde_json::Value = serde_json::from_slice(&m.body).unwrap();
        assert_eq!(body, serde_json::json!({"AssignmentStatus": "ENABLED"}));
    }

    #[test]
    fn unmarshall_binds_status_and_header_request_id() {
        let mut headers = BTreeMap::new();
        headers.insert("x-amzn-RequestId".to_string(), "hdr-1".to_string());
        let resp = HttpResponse::new(
            201,
            headers,
            br#"{"Arn":"arn:g","GroupName":"g"}"#.to_vec(),
        );
        let out = CreateGroupRequest::unmarshall(&resp).unwrap();
        assert_eq!(out.status, Some(201));
        assert_eq!(out.request_id.as_deref(), Some("hdr-1"));
    }

    #[test]
    fn body_request_id_wins() {
        let mut headers = BTreeMap::new();
        headers.insert("x-amzn-requestid".to_string(), "hdr-1".to_string());
        let resp = HttpResponse::new(200, headers, br#"{"RequestId":"body-1"}"#.to_vec());
        let out = DeleteGroupRequest::unmarshall(&resp).unwrap();
        assert_eq!(out.request_id.as_deref(), Some("body-1"));
    }
}
