//! Response shapes, one per operation.
//!
//! Every response also carries the HTTP `status` and the `request_id`.

use crate::model::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

macro_rules! response {
    (
        $(#[$meta:meta])*
        $name:ident { $( $(#[$fmeta:meta])* $field:ident : $ty:ty ),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "PascalCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(default)]
                pub $field: $ty,
            )*
            /// Id of the request, from the body or the response headers.
            #[serde(default)]
            pub request_id: Option<String>,
            /// HTTP status of the response.
            #[serde(default)]
            pub status: Option<i32>,
        }
    };
}

response!(CancelIngestionResponse { arn: Option<String>, ingestion_id: Option<String> });
response!(CreateDashboardResponse {
    arn: Option<String>,
    version_arn: Option<String>,
    dashboard_id: Option<String>,
    creation_status: Option<ResourceStatus>,
});
response!(CreateDataSetResponse {
    arn: Option<String>,
    data_set_id: Option<String>,
    ingestion_arn: Option<String>,
    ingestion_id: Option<String>,
});
response!(CreateDataSourceResponse {
    arn: Option<String>,
    data_source_id: Option<String>,
    creation_status: Option<ResourceStatus>,
});
response!(CreateGroupResponse { group: Option<Group> });
response!(CreateGroupMembershipResponse { group_member: Option<GroupMember> });
response!(CreateIamPolicyAssignmentResponse {
    assignment_name: Option<String>,
    assignment_id: Option<String>,
    assignment_status: Option<AssignmentStatus>,
    policy_arn: Option<String>,
    identities: BTreeMap<String, Vec<String>>,
});
response!(CreateIngestionResponse {
    arn: Option<String>,
    ingestion_id: Option<String>,
    ingestion_status: Option<IngestionStatus>,
});
response!(CreateTemplateResponse {
    arn: Option<String>,
    version_arn: Option<String>,
    template_id: Option<String>,
    creation_status: Option<ResourceStatus>,
});
response!(CreateTemplateAliasResponse { template_alias: Option<TemplateAlias> });
response!(DeleteDashboardResponse { arn: Option<String>, dashboard_id: Option<String> });
response!(DeleteDataSetResponse { arn: Option<String>, data_set_id: Option<String> });
response!(DeleteDataSourceResponse { arn: Option<String>, data_source_id: Option<String> });
response!(DeleteGroupResponse {});
response!(DeleteGroupMembershipResponse {});
response!(DeleteIamPolicyAssignmentResponse { assignment_name: Option<String> });
response!(DeleteTemplateResponse { arn: Option<String>, template_id: Option<String> });
response!(DeleteTemplateAliasResponse {
    template_id: Option<String>,
    alias_name: Option<String>,
    arn: Option<String>,
});
response!(DeleteUserResponse {});
response!(DeleteUserByPrincipalIdResponse {});
response!(DescribeDashboardResponse { dashboard: Option<Dashboard> });
response!(DescribeDashboardPermissionsResponse {
    dashboard_id: Option<String>,
    dashboard_arn: Option<String>,
    permissions: Vec<ResourcePermission>,
});
response!(DescribeDataSetResponse { data_set: Option<DataSet> });
response!(DescribeDataSetPermissionsResponse {
    data_set_arn: Option<String>,
    data_set_id: Option<String>,
    permissions: Vec<ResourcePermission>,
});
response!(DescribeDataSourceResponse { data_source: Option<DataSource> });
response!(DescribeDataSourcePermissionsResponse {
    data_source_arn: Option<String>,
    data_source_id: Option<String>,
    permissions: Vec<ResourcePermission>,
});
response!(DescribeGroupResponse { group: Option<Group> });
response!(DescribeIamPolicyAssignmentResponse {
    #[serde(rename = "IAMPolicyAssignment")] iam_policy_assignment: Option<IamPolicyAssignment>,
});
response!(DescribeIngestionResponse { ingestion: Option<Ingestion> });
response!(DescribeTemplateResponse { template: Option<Template> });
response!(DescribeTemplateAliasResponse { template_alias: Option<TemplateAlias> });
response!(DescribeTemplatePermissionsResponse {
    template_id: Option<String>,
    template_arn: Option<String>,
    permissions: Vec<ResourcePermission>,
});
response!(DescribeUserResponse { user: Option<User> });
response!(GetDashboardEmbedUrlResponse { embed_url: Option<String> });
response!(ListDashboardVersionsResponse {
    dashboard_version_summary_list: Vec<DashboardVersionSummary>,
    next_token: Option<String>,
});
response!(ListDashboardsResponse {
    dashboard_summary_list: Vec<DashboardSummary>,
    next_token: Option<String>,
});
response!(ListDataSetsResponse {
    data_set_summaries: Vec<DataSetSummary>,
    next_token: Option<String>,
});
response!(ListDataSourcesResponse { data_sources: Vec<DataSource>, next_token: Option<String> });
response!(ListGroupMembershipsResponse {
    group_member_list: Vec<GroupMember>,
    next_token: Option<String>,
});
response!(ListGroupsResponse { group_list: Vec<Group>, next_token: Option<String> });
response!(ListIamPolicyAssignmentsResponse {
    #[serde(rename = "IAMPolicyAssignments")] iam_policy_assignments: Vec<IamPolicyAssignmentSummary>,
    next_token: Option<String>,
});
response!(ListIamPolicyAssignmentsForUserResponse {
    active_assignments: Vec<ActiveIamPolicyAssignment>,
    next_token: Option<String>,
});
response!(ListIngestionsResponse { ingestions: Vec<Ingestion>, next_token: Option<String> });
response!(ListTagsForResourceResponse { tags: Vec<Tag> });
response!(ListTemplateAliasesResponse {
    template_alias_list: Vec<TemplateAlias>,
    next_token: Option<String>,
});
response!(ListTemplateVersionsResponse {
    template_version_summary_list: Vec<TemplateVersionSummary>,
    next_token: Option<String>,
});
response!(ListTemplatesResponse {
    template_summary_list: Vec<TemplateSummary>,
    next_token: Option<String>,
});
response!(ListUserGroupsResponse { group_list: Vec<Group>, next_token: Option<String> });
response!(ListUsersResponse { user_list: Vec<User>, next_token: Option<String> });
response!(RegisterUserResponse { user: Option<User>, user_invitation_url: Option<String> });
response!(SearchDashboardsResponse {
    dashboard_summary_list: Vec<DashboardSummary>,
    next_token: Option<String>,
});
response!(TagResourceResponse {});
response!(UntagResourceResponse {});
response!(UpdateDashboardResponse {
    arn: Option<String>,
    version_arn: Option<String>,
    dashboard_id: Option<String>,
    creation_status: Option<ResourceStatus>,
});
response!(UpdateDashboardPermissionsResponse {
    dashboard_arn: Option<String>,
    dashboard_id: Option<String>,
    permissions: Vec<ResourcePermission>,
});
response!(UpdateDashboardPublishedVersionResponse {
    dashboard_id: Option<String>,
    dashboard_arn: Option<String>,
});
response!(UpdateDataSetResponse {
    arn: Option<String>,
    data_set_id: Option<String>,
    ingestion_arn: Option<String>,
    ingestion_id: Option<String>,
});
response!(UpdateDataSetPermissionsResponse {
    data_set_arn: Option<String>,
    data_set_id: Option<String>,
});
response!(UpdateDataSourceResponse {
    arn: Option<String>,
    data_source_id: Option<String>,
    update_status: Option<ResourceStatus>,
});
response!(UpdateDataSourcePermissionsResponse {
    data_source_arn: Option<String>,
    data_source_id: Option<String>,
});
response!(UpdateGroupResponse { group: Option<Group> });
response!(UpdateIamPolicyAssignmentResponse {
    assignment_name: Option<String>,
    assignment_id: Option<String>,
    policy_arn: Option<String>,
    identities: BTreeMap<String, Vec<String>>,
    assignment_status: Option<AssignmentStatus>,
});
response!(UpdateTemplateResponse {
    template_id: Option<String>,
    arn: Option<String>,
    version_arn: Option<String>,
    creation_status: Option<ResourceStatus>,
});
response!(UpdateTemplateAliasResponse { template_alias: Option<TemplateAlias> });
response!(UpdateTemplatePermissionsResponse {
    template_id: Option<String>,
    template_arn: Option<String>,
    permissions: Vec<ResourcePermission>,
});
response!(UpdateUserResponse { user: Option<User> });

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_and_request_id_from_body() {
        let out: DescribeUserResponse = serde_json::from_value(json!({
            "User": {"UserName": "ana", "Role": "ADMIN"},
            "RequestId": "r-1",
            "Status": 200
        }))
        .unwrap();
        assert_eq!(out.request_id.as_deref(), Some("r-1"));
        assert_eq!(out.status, Some(200));
        assert_eq!(out.user.unwrap().role, Some(UserRole::Admin));
    }

    #[test]
    fn iam_policy_assignment_wire_names() {
        let out: ListIamPolicyAssignmentsResponse = serde_json::from_value(json!({
            "IAMPolicyAssignments": [{"AssignmentName": "a", "AssignmentStatus": "DRAFT"}]
        }))
        .unwrap();
        assert_eq!(
            out.iam_policy_assignments[0].assignment_status,
            Some(AssignmentStatus::Draft)
        );

        let out: DescribeIamPolicyAssignmentResponse = serde_json::from_value(json!({
            "IAMPolicyAssignment": {"AssignmentId": "id-1", "Identities": {"user": ["ana"]}}
        }))
        .unwrap();
        let assignment = out.iam_policy_assignment.unwrap();
        assert_eq!(assignment.identities["user"], vec!["ana".to_string()]);
    }

    #[test]
    fn empty_response_has_only_envelope() {
        let out: DeleteGroupResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(out, DeleteGroupResponse::default());
    }
}
