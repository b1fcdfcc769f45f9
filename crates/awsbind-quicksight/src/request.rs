//! Request shapes, one per operation.
//!
//! Path labels and query parameters are `#[serde(skip)]`; the remaining
//! members form the PascalCase JSON body.

use crate::model::*;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CancelIngestionRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub data_set_id: String,
    #[serde(skip)]
    pub ingestion_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDashboardRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub dashboard_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Parameters>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<ResourcePermission>,
    pub source_entity: DashboardSourceEntity,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_publish_options: Option<DashboardPublishOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDataSetRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    pub data_set_id: String,
    pub name: String,
    pub physical_table_map: BTreeMap<String, PhysicalTable>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub logical_table_map: BTreeMap<String, LogicalTable>,
    pub import_mode: DataSetImportMode,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub column_groups: Vec<ColumnGroup>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<ResourcePermission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_level_permission_data_set: Option<RowLevelPermissionDataSet>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl CreateDataSetRequest {
    pub fn new(
        aws_account_id: impl Into<String>,
        data_set_id: impl Into<String>,
        name: impl Into<String>,
        physical_table_map: BTreeMap<String, PhysicalTable>,
        import_mode: DataSetImportMode,
    ) -> Self {
        Self {
            aws_account_id: aws_account_id.into(),
            data_set_id: data_set_id.into(),
            name: name.into(),
            physical_table_map,
            logical_table_map: BTreeMap::new(),
            import_mode,
            column_groups: Vec::new(),
            permissions: Vec::new(),
            row_level_permission_data_set: None,
            tags: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDataSourceRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    pub data_source_id: String,
    pub name: String,
    #[serde(rename = "Type")]
    pub data_source_type: DataSourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_parameters: Option<DataSourceParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<DataSourceCredentials>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<ResourcePermission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_connection_properties: Option<VpcConnectionProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_properties: Option<SslProperties>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl CreateDataSourceRequest {
    pub fn new(
        aws_account_id: impl Into<String>,
        data_source_id: impl Into<String>,
        name: impl Into<String>,
        data_source_type: DataSourceType,
    ) -> Self {
        Self {
            aws_account_id: aws_account_id.into(),
            data_source_id: data_source_id.into(),
            name: name.into(),
            data_source_type,
            data_source_parameters: None,
            credentials: None,
            permissions: Vec::new(),
            vpc_connection_properties: None,
            ssl_properties: None,
            tags: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGroupRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub namespace: String,
    pub group_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGroupMembershipRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub namespace: String,
    #[serde(skip)]
    pub group_name: String,
    #[serde(skip)]
    pub member_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateIamPolicyAssignmentRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub namespace: String,
    pub assignment_name: String,
    pub assignment_status: AssignmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub identities: BTreeMap<String, Vec<String>>,
}

impl CreateIamPolicyAssignmentRequest {
    pub fn new(
        aws_account_id: impl Into<String>,
        namespace: impl Into<String>,
        assignment_name: impl Into<String>,
        assignment_status: AssignmentStatus,
    ) -> Self {
        Self {
            aws_account_id: aws_account_id.into(),
            namespace: namespace.into(),
            assignment_name: assignment_name.into(),
            assignment_status,
            policy_arn: None,
            identities: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateIngestionRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub data_set_id: String,
    #[serde(skip)]
    pub ingestion_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTemplateRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub template_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<ResourcePermission>,
    pub source_entity: TemplateSourceEntity,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTemplateAliasRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub template_id: String,
    #[serde(skip)]
    pub alias_name: String,
    pub template_version_number: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDashboardRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub dashboard_id: String,
    #[serde(skip)]
    pub version_number: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDataSetRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub data_set_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDataSourceRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub data_source_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteGroupRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub namespace: String,
    #[serde(skip)]
    pub group_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteGroupMembershipRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub namespace: String,
    #[serde(skip)]
    pub group_name: String,
    #[serde(skip)]
    pub member_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteIamPolicyAssignmentRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub namespace: String,
    #[serde(skip)]
    pub assignment_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteTemplateRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub template_id: String,
    #[serde(skip)]
    pub version_number: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteTemplateAliasRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub template_id: String,
    #[serde(skip)]
    pub alias_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteUserRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub namespace: String,
    #[serde(skip)]
    pub user_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteUserByPrincipalIdRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub namespace: String,
    #[serde(skip)]
    pub principal_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDashboardRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub dashboard_id: String,
    #[serde(skip)]
    pub version_number: Option<i64>,
    #[serde(skip)]
    pub alias_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDashboardPermissionsRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub dashboard_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDataSetRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub data_set_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDataSetPermissionsRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub data_set_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDataSourceRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub data_source_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDataSourcePermissionsRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub data_source_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeGroupRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub namespace: String,
    #[serde(skip)]
    pub group_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeIamPolicyAssignmentRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub namespace: String,
    #[serde(skip)]
    pub assignment_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeIngestionRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub data_set_id: String,
    #[serde(skip)]
    pub ingestion_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTemplateRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub template_id: String,
    #[serde(skip)]
    pub version_number: Option<i64>,
    #[serde(skip)]
    pub alias_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTemplateAliasRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub template_id: String,
    #[serde(skip)]
    pub alias_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTemplatePermissionsRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub template_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub namespace: String,
    #[serde(skip)]
    pub user_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDashboardEmbedUrlRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub dashboard_id: String,
    #[serde(skip)]
    pub identity_type: EmbeddingIdentityType,
    #[serde(skip)]
    pub session_lifetime_in_minutes: Option<i64>,
    #[serde(skip)]
    pub undo_redo_disabled: Option<bool>,
    #[serde(skip)]
    pub reset_disabled: Option<bool>,
    #[serde(skip)]
    pub user_arn: Option<String>,
}

impl GetDashboardEmbedUrlRequest {
    pub fn new(
        aws_account_id: impl Into<String>,
        dashboard_id: impl Into<String>,
        identity_type: EmbeddingIdentityType,
    ) -> Self {
        Self {
            aws_account_id: aws_account_id.into(),
            dashboard_id: dashboard_id.into(),
            identity_type,
            session_lifetime_in_minutes: None,
            undo_redo_disabled: None,
            reset_disabled: None,
            user_arn: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDashboardVersionsRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub dashboard_id: String,
    #[serde(skip)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDashboardsRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDataSetsRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDataSourcesRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGroupMembershipsRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub namespace: String,
    #[serde(skip)]
    pub group_name: String,
    #[serde(skip)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGroupsRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub namespace: String,
    #[serde(skip)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListIamPolicyAssignmentsRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub namespace: String,
    /// Sent in the body even though the call is a GET.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_status: Option<AssignmentStatus>,
    #[serde(skip)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListIamPolicyAssignmentsForUserRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub namespace: String,
    #[serde(skip)]
    pub user_name: String,
    #[serde(skip)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListIngestionsRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub data_set_id: String,
    #[serde(skip)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceRequest {
    #[serde(skip)]
    pub resource_arn: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTemplateAliasesRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub template_id: String,
    #[serde(skip)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTemplateVersionsRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub template_id: String,
    #[serde(skip)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTemplatesRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUserGroupsRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub namespace: String,
    #[serde(skip)]
    pub user_name: String,
    #[serde(skip)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUsersRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub namespace: String,
    #[serde(skip)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterUserRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub namespace: String,
    pub identity_type: IdentityType,
    pub email: String,
    pub user_role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl RegisterUserRequest {
    pub fn new(
        aws_account_id: impl Into<String>,
        namespace: impl Into<String>,
        identity_type: IdentityType,
        email: impl Into<String>,
        user_role: UserRole,
    ) -> Self {
        Self {
            aws_account_id: aws_account_id.into(),
            namespace: namespace.into(),
            identity_type,
            email: email.into(),
            user_role,
            iam_arn: None,
            session_name: None,
            user_name: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchDashboardsRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    pub filters: Vec<DashboardSearchFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceRequest {
    #[serde(skip)]
    pub resource_arn: String,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UntagResourceRequest {
    #[serde(skip)]
    pub resource_arn: String,
    #[serde(skip)]
    pub tag_keys: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDashboardRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub dashboard_id: String,
    pub name: String,
    pub source_entity: DashboardSourceEntity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Parameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_publish_options: Option<DashboardPublishOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDashboardPermissionsRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub dashboard_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub grant_permissions: Vec<ResourcePermission>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub revoke_permissions: Vec<ResourcePermission>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDashboardPublishedVersionRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub dashboard_id: String,
    #[serde(skip)]
    pub version_number: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDataSetRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub data_set_id: String,
    pub name: String,
    pub physical_table_map: BTreeMap<String, PhysicalTable>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub logical_table_map: BTreeMap<String, LogicalTable>,
    pub import_mode: DataSetImportMode,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub column_groups: Vec<ColumnGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_level_permission_data_set: Option<RowLevelPermissionDataSet>,
}

impl UpdateDataSetRequest {
    pub fn new(
        aws_account_id: impl Into<String>,
        data_set_id: impl Into<String>,
        name: impl Into<String>,
        physical_table_map: BTreeMap<String, PhysicalTable>,
        import_mode: DataSetImportMode,
    ) -> Self {
        Self {
            aws_account_id: aws_account_id.into(),
            data_set_id: data_set_id.into(),
            name: name.into(),
            physical_table_map,
            logical_table_map: BTreeMap::new(),
            import_mode,
            column_groups: Vec::new(),
            row_level_permission_data_set: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDataSetPermissionsRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub data_set_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub grant_permissions: Vec<ResourcePermission>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub revoke_permissions: Vec<ResourcePermission>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDataSourceRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub data_source_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_parameters: Option<DataSourceParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<DataSourceCredentials>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_connection_properties: Option<VpcConnectionProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_properties: Option<SslProperties>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDataSourcePermissionsRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub data_source_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub grant_permissions: Vec<ResourcePermission>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub revoke_permissions: Vec<ResourcePermission>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateGroupRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub namespace: String,
    #[serde(skip)]
    pub group_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateIamPolicyAssignmentRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub namespace: String,
    #[serde(skip)]
    pub assignment_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_status: Option<AssignmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub identities: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTemplateRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub template_id: String,
    pub source_entity: TemplateSourceEntity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTemplateAliasRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub template_id: String,
    #[serde(skip)]
    pub alias_name: String,
    pub template_version_number: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTemplatePermissionsRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub template_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub grant_permissions: Vec<ResourcePermission>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub revoke_permissions: Vec<ResourcePermission>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserRequest {
    #[serde(skip)]
    pub aws_account_id: String,
    #[serde(skip)]
    pub namespace: String,
    #[serde(skip)]
    pub user_name: String,
    pub email: String,
    pub role: UserRole,
}

impl UpdateUserRequest {
    pub fn new(
        aws_account_id: impl Into<String>,
        namespace: impl Into<String>,
        user_name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            aws_account_id: aws_account_id.into(),
            namespace: namespace.into(),
            user_name: user_name.into(),
            email: email.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn labels_and_query_stay_out_of_body() {
        let req = CreateGroupRequest {
            aws_account_id: "111122223333".into(),
            namespace: "default".into(),
            group_name: "analysts".into(),
            description: Some("BI team".into()),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"GroupName": "analysts", "Description": "BI team"})
        );

        let req = DescribeDashboardRequest {
            aws_account_id: "1".into(),
            dashboard_id: "d".into(),
            version_number: Some(2),
            alias_name: None,
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({}));
    }

    #[test]
    fn data_source_type_wire_name() {
        let mut req = CreateDataSourceRequest::new("1", "ds-1", "Sales DB", DataSourceType::Rds);
        req.data_source_parameters = Some(DataSourceParameters::RdsParameters {
            instance_id: "db-1".into(),
            database: "sales".into(),
        });
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "DataSourceId": "ds-1",
                "Name": "Sales DB",
                "Type": "RDS",
                "DataSourceParameters": {"RdsParameters": {"InstanceId": "db-1", "Database": "sales"}}
            })
        );
    }

    #[test]
    fn register_user_body() {
        let mut req = RegisterUserRequest::new(
            "1",
            "default",
            IdentityType::Iam,
            "ana@example.com",
            UserRole::Reader,
        );
        req.iam_arn = Some("arn:aws:iam::1:role/Reader".into());
        req.session_name = Some("ana".into());
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "IdentityType": "IAM",
                "Email": "ana@example.com",
                "UserRole": "READER",
                "IamArn": "arn:aws:iam::1:role/Reader",
                "SessionName": "ana"
            })
        );
    }
}
