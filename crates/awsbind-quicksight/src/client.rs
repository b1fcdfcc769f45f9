//! The QuickSight client.

use crate::error::{QuickSightErrorKind, QuickSightResult};
use crate::operation::QuickSightOperation;
use crate::request::*;
use crate::response::*;
use awsbind_core::{
    ClientBuilder, ClientError, RequestOptions, ServiceBinding, ServiceClient, ServiceMetadata,
};

pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "quicksight",
    endpoint_prefix: "quicksight",
    signing_name: "quicksight",
    api_version: "2018-04-01",
};

/// Blocking client for Amazon QuickSight.
///
/// Every response carries the HTTP `status` and the service `request_id`.
///
/// ```no_run
/// use awsbind_quicksight::{ListDashboardsRequest, QuickSightClient};
///
/// let client = QuickSightClient::builder().region("us-east-1").build()?;
/// let page = client.list_dashboards(&ListDashboardsRequest {
///     aws_account_id: "123456789012".into(),
///     ..Default::default()
/// })?;
/// for summary in page.dashboard_summary_list {
///     println!("{:?}", summary.name);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct QuickSightClient {
    inner: ServiceClient<QuickSightErrorKind>,
}

impl ServiceBinding for QuickSightClient {
    type Kind = QuickSightErrorKind;
    const METADATA: ServiceMetadata = METADATA;

    fn from_service_client(inner: ServiceClient<QuickSightErrorKind>) -> Self {
        Self { inner }
    }
}

impl QuickSightClient {
    pub fn builder() -> ClientBuilder<Self> {
        ClientBuilder::new()
    }

    /// Client for `us-east-1` with credentials from the environment.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::builder().build()
    }

    pub fn service_client(&self) -> &ServiceClient<QuickSightErrorKind> {
        &self.inner
    }

    /// Send any QuickSight operation.
    pub fn send<O: QuickSightOperation>(&self, request: &O) -> QuickSightResult<O::Output> {
        self.inner.invoke(request, &RequestOptions::default())
    }

    pub fn send_with<O: QuickSightOperation>(
        &self,
        request: &O,
        options: &RequestOptions,
    ) -> QuickSightResult<O::Output> {
        self.inner.invoke(request, options)
    }

    // ── Operations ──────────────────────────────────────────────────────

    /// Cancel an in-progress ingestion of a data set.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `ResourceExists`, `InternalFailure`.
    pub fn cancel_ingestion(
        &self,
        request: &CancelIngestionRequest,
    ) -> QuickSightResult<CancelIngestionResponse> {
        self.send(request)
    }

    /// Create a dashboard from a template.
    ///
    /// Modeled errors: `ResourceNotFound`, `InvalidParameterValue`, `Throttling`, `ResourceExists`,
    /// `Conflict`, `UnsupportedUserEdition`, `InternalFailure`.
    pub fn create_dashboard(
        &self,
        request: &CreateDashboardRequest,
    ) -> QuickSightResult<CreateDashboardResponse> {
        self.send(request)
    }

    /// Create a data set.
    ///
    /// Modeled errors: `AccessDenied`, `Conflict`, `InvalidParameterValue`, `LimitExceeded`,
    /// `ResourceExists`, `ResourceNotFound`, `Throttling`, `UnsupportedUserEdition`,
    /// `InternalFailure`.
    pub fn create_data_set(
        &self,
        request: &CreateDataSetRequest,
    ) -> QuickSightResult<CreateDataSetResponse> {
        self.send(request)
    }

    /// Create a data source.
    ///
    /// Modeled errors: `AccessDenied`, `Conflict`, `InvalidParameterValue`, `LimitExceeded`,
    /// `ResourceNotFound`, `ResourceExists`, `Throttling`, `InternalFailure`.
    pub fn create_data_source(
        &self,
        request: &CreateDataSourceRequest,
    ) -> QuickSightResult<CreateDataSourceResponse> {
        self.send(request)
    }

    /// Create a group in a namespace.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceExists`,
    /// `ResourceNotFound`, `Throttling`, `PreconditionNotMet`, `LimitExceeded`, `InternalFailure`,
    /// `ResourceUnavailable`.
    pub fn create_group(
        &self,
        request: &CreateGroupRequest,
    ) -> QuickSightResult<CreateGroupResponse> {
        self.send(request)
    }

    /// Add a user to a group.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `PreconditionNotMet`, `InternalFailure`, `ResourceUnavailable`.
    pub fn create_group_membership(
        &self,
        request: &CreateGroupMembershipRequest,
    ) -> QuickSightResult<CreateGroupMembershipResponse> {
        self.send(request)
    }

    /// Assign an IAM policy to users and groups.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceExists`,
    /// `ResourceNotFound`, `Throttling`, `ConcurrentUpdating`, `InternalFailure`.
    pub fn create_iam_policy_assignment(
        &self,
        request: &CreateIamPolicyAssignmentRequest,
    ) -> QuickSightResult<CreateIamPolicyAssignmentResponse> {
        self.send(request)
    }

    /// Start a SPICE ingestion of a data set.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `LimitExceeded`, `ResourceExists`, `InternalFailure`.
    pub fn create_ingestion(
        &self,
        request: &CreateIngestionRequest,
    ) -> QuickSightResult<CreateIngestionResponse> {
        self.send(request)
    }

    /// Create a template from an analysis or another template.
    ///
    /// Modeled errors: `InvalidParameterValue`, `AccessDenied`, `ResourceExists`,
    /// `ResourceNotFound`, `Throttling`, `LimitExceeded`, `UnsupportedUserEdition`,
    /// `InternalFailure`.
    pub fn create_template(
        &self,
        request: &CreateTemplateRequest,
    ) -> QuickSightResult<CreateTemplateResponse> {
        self.send(request)
    }

    /// Point a named alias at a template version.
    ///
    /// Modeled errors: `Throttling`, `ResourceNotFound`, `Conflict`, `ResourceExists`,
    /// `LimitExceeded`, `UnsupportedUserEdition`, `InternalFailure`.
    pub fn create_template_alias(
        &self,
        request: &CreateTemplateAliasRequest,
    ) -> QuickSightResult<CreateTemplateAliasResponse> {
        self.send(request)
    }

    /// Delete a dashboard, or one version of it.
    ///
    /// Modeled errors: `Throttling`, `InvalidParameterValue`, `Conflict`, `ResourceNotFound`,
    /// `UnsupportedUserEdition`, `InternalFailure`.
    pub fn delete_dashboard(
        &self,
        request: &DeleteDashboardRequest,
    ) -> QuickSightResult<DeleteDashboardResponse> {
        self.send(request)
    }

    /// Delete a data set.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `Throttling`, `ResourceNotFound`,
    /// `InternalFailure`.
    pub fn delete_data_set(
        &self,
        request: &DeleteDataSetRequest,
    ) -> QuickSightResult<DeleteDataSetResponse> {
        self.send(request)
    }

    /// Delete a data source.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `Throttling`, `ResourceNotFound`,
    /// `InternalFailure`.
    pub fn delete_data_source(
        &self,
        request: &DeleteDataSourceRequest,
    ) -> QuickSightResult<DeleteDataSourceResponse> {
        self.send(request)
    }

    /// Delete a group.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `PreconditionNotMet`, `InternalFailure`, `ResourceUnavailable`.
    pub fn delete_group(
        &self,
        request: &DeleteGroupRequest,
    ) -> QuickSightResult<DeleteGroupResponse> {
        self.send(request)
    }

    /// Remove a user from a group.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `PreconditionNotMet`, `InternalFailure`, `ResourceUnavailable`.
    pub fn delete_group_membership(
        &self,
        request: &DeleteGroupMembershipRequest,
    ) -> QuickSightResult<DeleteGroupMembershipResponse> {
        self.send(request)
    }

    /// Delete an IAM policy assignment.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceExists`,
    /// `ResourceNotFound`, `Throttling`, `ConcurrentUpdating`, `InternalFailure`.
    pub fn delete_iam_policy_assignment(
        &self,
        request: &DeleteIamPolicyAssignmentRequest,
    ) -> QuickSightResult<DeleteIamPolicyAssignmentResponse> {
        self.send(request)
    }

    /// Delete a template, or one version of it.
    ///
    /// Modeled errors: `InvalidParameterValue`, `ResourceNotFound`, `Throttling`, `Conflict`,
    /// `LimitExceeded`, `UnsupportedUserEdition`, `InternalFailure`.
    pub fn delete_template(
        &self,
        request: &DeleteTemplateRequest,
    ) -> QuickSightResult<DeleteTemplateResponse> {
        self.send(request)
    }

    /// Delete a template alias.
    ///
    /// Modeled errors: `Throttling`, `ResourceNotFound`, `UnsupportedUserEdition`,
    /// `InternalFailure`.
    pub fn delete_template_alias(
        &self,
        request: &DeleteTemplateAliasRequest,
    ) -> QuickSightResult<DeleteTemplateAliasResponse> {
        self.send(request)
    }

    /// Delete a user by name.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `InternalFailure`, `ResourceUnavailable`.
    pub fn delete_user(&self, request: &DeleteUserRequest) -> QuickSightResult<DeleteUserResponse> {
        self.send(request)
    }

    /// Delete a user by principal id.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `InternalFailure`, `ResourceUnavailable`.
    pub fn delete_user_by_principal_id(
        &self,
        request: &DeleteUserByPrincipalIdRequest,
    ) -> QuickSightResult<DeleteUserByPrincipalIdResponse> {
        self.send(request)
    }

    /// Describe a dashboard.
    ///
    /// Modeled errors: `InvalidParameterValue`, `ResourceNotFound`, `AccessDenied`, `Throttling`,
    /// `UnsupportedUserEdition`, `InternalFailure`.
    pub fn describe_dashboard(
        &self,
        request: &DescribeDashboardRequest,
    ) -> QuickSightResult<DescribeDashboardResponse> {
        self.send(request)
    }

    /// Describe who can act on a dashboard.
    ///
    /// Modeled errors: `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `UnsupportedUserEdition`, `InternalFailure`.
    pub fn describe_dashboard_permissions(
        &self,
        request: &DescribeDashboardPermissionsRequest,
    ) -> QuickSightResult<DescribeDashboardPermissionsResponse> {
        self.send(request)
    }

    /// Describe a data set.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `Throttling`, `ResourceNotFound`,
    /// `InternalFailure`.
    pub fn describe_data_set(
        &self,
        request: &DescribeDataSetRequest,
    ) -> QuickSightResult<DescribeDataSetResponse> {
        self.send(request)
    }

    /// Describe who can act on a data set.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `Throttling`, `ResourceNotFound`,
    /// `InternalFailure`.
    pub fn describe_data_set_permissions(
        &self,
        request: &DescribeDataSetPermissionsRequest,
    ) -> QuickSightResult<DescribeDataSetPermissionsResponse> {
        self.send(request)
    }

    /// Describe a data source.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `Throttling`, `ResourceNotFound`,
    /// `InternalFailure`.
    pub fn describe_data_source(
        &self,
        request: &DescribeDataSourceRequest,
    ) -> QuickSightResult<DescribeDataSourceResponse> {
        self.send(request)
    }

    /// Describe who can act on a data source.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `Throttling`, `ResourceNotFound`,
    /// `InternalFailure`.
    pub fn describe_data_source_permissions(
        &self,
        request: &DescribeDataSourcePermissionsRequest,
    ) -> QuickSightResult<DescribeDataSourcePermissionsResponse> {
        self.send(request)
    }

    /// Describe a group.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `PreconditionNotMet`, `InternalFailure`, `ResourceUnavailable`.
    pub fn describe_group(
        &self,
        request: &DescribeGroupRequest,
    ) -> QuickSightResult<DescribeGroupResponse> {
        self.send(request)
    }

    /// Describe an IAM policy assignment.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `InvalidNextToken`, `InternalFailure`.
    pub fn describe_iam_policy_assignment(
        &self,
        request: &DescribeIamPolicyAssignmentRequest,
    ) -> QuickSightResult<DescribeIamPolicyAssignmentResponse> {
        self.send(request)
    }

    /// Describe an ingestion.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `ResourceExists`, `InternalFailure`.
    pub fn describe_ingestion(
        &self,
        request: &DescribeIngestionRequest,
    ) -> QuickSightResult<DescribeIngestionResponse> {
        self.send(request)
    }

    /// Describe a template.
    ///
    /// Modeled errors: `InvalidParameterValue`, `AccessDenied`, `ResourceExists`,
    /// `ResourceNotFound`, `Throttling`, `Conflict`, `UnsupportedUserEdition`, `InternalFailure`.
    pub fn describe_template(
        &self,
        request: &DescribeTemplateRequest,
    ) -> QuickSightResult<DescribeTemplateResponse> {
        self.send(request)
    }

    /// Describe a template alias.
    ///
    /// Modeled errors: `Throttling`, `ResourceNotFound`, `UnsupportedUserEdition`,
    /// `InternalFailure`.
    pub fn describe_template_alias(
        &self,
        request: &DescribeTemplateAliasRequest,
    ) -> QuickSightResult<DescribeTemplateAliasResponse> {
        self.send(request)
    }

    /// Describe who can act on a template.
    ///
    /// Modeled errors: `Throttling`, `InvalidParameterValue`, `Conflict`, `ResourceNotFound`,
    /// `UnsupportedUserEdition`, `InternalFailure`.
    pub fn describe_template_permissions(
        &self,
        request: &DescribeTemplatePermissionsRequest,
    ) -> QuickSightResult<DescribeTemplatePermissionsResponse> {
        self.send(request)
    }

    /// Describe a user.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `InternalFailure`, `ResourceUnavailable`.
    pub fn describe_user(
        &self,
        request: &DescribeUserRequest,
    ) -> QuickSightResult<DescribeUserResponse> {
        self.send(request)
    }

    /// Get a signed URL for embedding a dashboard. The URL is single-use and valid for five minutes.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceExists`,
    /// `ResourceNotFound`, `Throttling`, `DomainNotWhitelisted`, `QuickSightUserNotFound`,
    /// `IdentityTypeNotSupported`, `SessionLifetimeInMinutesInvalid`, `UnsupportedUserEdition`,
    /// `InternalFailure`.
    pub fn get_dashboard_embed_url(
        &self,
        request: &GetDashboardEmbedUrlRequest,
    ) -> QuickSightResult<GetDashboardEmbedUrlResponse> {
        self.send(request)
    }

    /// List the versions of a dashboard.
    ///
    /// Modeled errors: `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `InvalidNextToken`, `UnsupportedUserEdition`, `InternalFailure`.
    pub fn list_dashboard_versions(
        &self,
        request: &ListDashboardVersionsRequest,
    ) -> QuickSightResult<ListDashboardVersionsResponse> {
        self.send(request)
    }

    /// List dashboards in the account.
    ///
    /// Modeled errors: `Throttling`, `InvalidNextToken`, `UnsupportedUserEdition`,
    /// `InternalFailure`.
    pub fn list_dashboards(
        &self,
        request: &ListDashboardsRequest,
    ) -> QuickSightResult<ListDashboardsResponse> {
        self.send(request)
    }

    /// List data sets in the region.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `Throttling`, `InvalidNextToken`,
    /// `InternalFailure`.
    pub fn list_data_sets(
        &self,
        request: &ListDataSetsRequest,
    ) -> QuickSightResult<ListDataSetsResponse> {
        self.send(request)
    }

    /// List data sources in the region.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `Throttling`, `InvalidNextToken`,
    /// `InternalFailure`.
    pub fn list_data_sources(
        &self,
        request: &ListDataSourcesRequest,
    ) -> QuickSightResult<ListDataSourcesResponse> {
        self.send(request)
    }

    /// List the members of a group.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `InvalidNextToken`, `PreconditionNotMet`, `InternalFailure`, `ResourceUnavailable`.
    pub fn list_group_memberships(
        &self,
        request: &ListGroupMembershipsRequest,
    ) -> QuickSightResult<ListGroupMembershipsResponse> {
        self.send(request)
    }

    /// List groups in a namespace.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `InvalidNextToken`, `PreconditionNotMet`, `InternalFailure`, `ResourceUnavailable`.
    pub fn list_groups(&self, request: &ListGroupsRequest) -> QuickSightResult<ListGroupsResponse> {
        self.send(request)
    }

    /// List IAM policy assignments in a namespace.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `InvalidNextToken`, `InternalFailure`.
    pub fn list_iam_policy_assignments(
        &self,
        request: &ListIamPolicyAssignmentsRequest,
    ) -> QuickSightResult<ListIamPolicyAssignmentsResponse> {
        self.send(request)
    }

    /// List the IAM policy assignments that apply to a user.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceExists`,
    /// `ResourceNotFound`, `Throttling`, `ConcurrentUpdating`, `InternalFailure`.
    pub fn list_iam_policy_assignments_for_user(
        &self,
        request: &ListIamPolicyAssignmentsForUserRequest,
    ) -> QuickSightResult<ListIamPolicyAssignmentsForUserResponse> {
        self.send(request)
    }

    /// List the ingestions of a data set.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `ResourceExists`, `InvalidNextToken`, `InternalFailure`.
    pub fn list_ingestions(
        &self,
        request: &ListIngestionsRequest,
    ) -> QuickSightResult<ListIngestionsResponse> {
        self.send(request)
    }

    /// List tags on a resource.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `InternalFailure`.
    pub fn list_tags_for_resource(
        &self,
        request: &ListTagsForResourceRequest,
    ) -> QuickSightResult<ListTagsForResourceResponse> {
        self.send(request)
    }

    /// List the aliases of a template.
    ///
    /// Modeled errors: `Throttling`, `ResourceNotFound`, `UnsupportedUserEdition`,
    /// `InternalFailure`.
    pub fn list_template_aliases(
        &self,
        request: &ListTemplateAliasesRequest,
    ) -> QuickSightResult<ListTemplateAliasesResponse> {
        self.send(request)
    }

    /// List the versions of a template.
    ///
    /// Modeled errors: `Throttling`, `InvalidParameterValue`, `ResourceNotFound`,
    /// `InvalidNextToken`, `UnsupportedUserEdition`, `InternalFailure`.
    pub fn list_template_versions(
        &self,
        request: &ListTemplateVersionsRequest,
    ) -> QuickSightResult<ListTemplateVersionsResponse> {
        self.send(request)
    }

    /// List templates in the account.
    ///
    /// Modeled errors: `Throttling`, `InvalidParameterValue`, `ResourceNotFound`,
    /// `InvalidNextToken`, `UnsupportedUserEdition`, `InternalFailure`.
    pub fn list_templates(
        &self,
        request: &ListTemplatesRequest,
    ) -> QuickSightResult<ListTemplatesResponse> {
        self.send(request)
    }

    /// List the groups a user belongs to.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `InternalFailure`, `ResourceUnavailable`.
    pub fn list_user_groups(
        &self,
        request: &ListUserGroupsRequest,
    ) -> QuickSightResult<ListUserGroupsResponse> {
        self.send(request)
    }

    /// List users in a namespace.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `InvalidNextToken`, `InternalFailure`, `ResourceUnavailable`.
    pub fn list_users(&self, request: &ListUsersRequest) -> QuickSightResult<ListUsersResponse> {
        self.send(request)
    }

    /// Register a user with QuickSight.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `LimitExceeded`, `ResourceExists`, `PreconditionNotMet`, `InternalFailure`,
    /// `ResourceUnavailable`.
    pub fn register_user(
        &self,
        request: &RegisterUserRequest,
    ) -> QuickSightResult<RegisterUserResponse> {
        self.send(request)
    }

    /// Search dashboards by filter.
    ///
    /// Modeled errors: `Throttling`, `ResourceNotFound`, `InvalidParameterValue`,
    /// `UnsupportedUserEdition`, `InvalidNextToken`, `InternalFailure`.
    pub fn search_dashboards(
        &self,
        request: &SearchDashboardsRequest,
    ) -> QuickSightResult<SearchDashboardsResponse> {
        self.send(request)
    }

    /// Add or overwrite tags on a resource.
    ///
    /// Modeled errors: `LimitExceeded`, `AccessDenied`, `InvalidParameterValue`,
    /// `ResourceNotFound`, `Throttling`, `InternalFailure`.
    pub fn tag_resource(
        &self,
        request: &TagResourceRequest,
    ) -> QuickSightResult<TagResourceResponse> {
        self.send(request)
    }

    /// Remove tags from a resource.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `InternalFailure`.
    pub fn untag_resource(
        &self,
        request: &UntagResourceRequest,
    ) -> QuickSightResult<UntagResourceResponse> {
        self.send(request)
    }

    /// Create a new version of a dashboard.
    ///
    /// Modeled errors: `Throttling`, `InvalidParameterValue`, `ResourceNotFound`, `Conflict`,
    /// `LimitExceeded`, `UnsupportedUserEdition`, `InternalFailure`.
    pub fn update_dashboard(
        &self,
        request: &UpdateDashboardRequest,
    ) -> QuickSightResult<UpdateDashboardResponse> {
        self.send(request)
    }

    /// Grant or revoke permissions on a dashboard.
    ///
    /// Modeled errors: `Throttling`, `InvalidParameterValue`, `ResourceNotFound`,
    /// `UnsupportedUserEdition`, `Conflict`, `InternalFailure`.
    pub fn update_dashboard_permissions(
        &self,
        request: &UpdateDashboardPermissionsRequest,
    ) -> QuickSightResult<UpdateDashboardPermissionsResponse> {
        self.send(request)
    }

    /// Publish a version of a dashboard.
    ///
    /// Modeled errors: `InvalidParameterValue`, `Throttling`, `Conflict`, `ResourceNotFound`,
    /// `UnsupportedUserEdition`, `InternalFailure`.
    pub fn update_dashboard_published_version(
        &self,
        request: &UpdateDashboardPublishedVersionRequest,
    ) -> QuickSightResult<UpdateDashboardPublishedVersionResponse> {
        self.send(request)
    }

    /// Update a data set.
    ///
    /// Modeled errors: `AccessDenied`, `Conflict`, `InvalidParameterValue`, `LimitExceeded`,
    /// `Throttling`, `ResourceNotFound`, `UnsupportedUserEdition`, `InternalFailure`.
    pub fn update_data_set(
        &self,
        request: &UpdateDataSetRequest,
    ) -> QuickSightResult<UpdateDataSetResponse> {
        self.send(request)
    }

    /// Grant or revoke permissions on a data set.
    ///
    /// Modeled errors: `AccessDenied`, `Conflict`, `InvalidParameterValue`, `ResourceNotFound`,
    /// `Throttling`, `InternalFailure`.
    pub fn update_data_set_permissions(
        &self,
        request: &UpdateDataSetPermissionsRequest,
    ) -> QuickSightResult<UpdateDataSetPermissionsResponse> {
        self.send(request)
    }

    /// Update a data source.
    ///
    /// Modeled errors: `AccessDenied`, `Conflict`, `InvalidParameterValue`, `Throttling`,
    /// `ResourceNotFound`, `InternalFailure`.
    pub fn update_data_source(
        &self,
        request: &UpdateDataSourceRequest,
    ) -> QuickSightResult<UpdateDataSourceResponse> {
        self.send(request)
    }

    /// Grant or revoke permissions on a data source.
    ///
    /// Modeled errors: `AccessDenied`, `Conflict`, `InvalidParameterValue`, `ResourceNotFound`,
    /// `Throttling`, `InternalFailure`.
    pub fn update_data_source_permissions(
        &self,
        request: &UpdateDataSourcePermissionsRequest,
    ) -> QuickSightResult<UpdateDataSourcePermissionsResponse> {
        self.send(request)
    }

    /// Change a group's description.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `PreconditionNotMet`, `InternalFailure`, `ResourceUnavailable`.
    pub fn update_group(
        &self,
        request: &UpdateGroupRequest,
    ) -> QuickSightResult<UpdateGroupResponse> {
        self.send(request)
    }

    /// Update an IAM policy assignment.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceExists`,
    /// `ResourceNotFound`, `Throttling`, `ConcurrentUpdating`, `InternalFailure`.
    pub fn update_iam_policy_assignment(
        &self,
        request: &UpdateIamPolicyAssignmentRequest,
    ) -> QuickSightResult<UpdateIamPolicyAssignmentResponse> {
        self.send(request)
    }

    /// Create a new version of a template.
    ///
    /// Modeled errors: `InvalidParameterValue`, `ResourceExists`, `ResourceNotFound`, `Throttling`,
    /// `Conflict`, `LimitExceeded`, `UnsupportedUserEdition`, `InternalFailure`.
    pub fn update_template(
        &self,
        request: &UpdateTemplateRequest,
    ) -> QuickSightResult<UpdateTemplateResponse> {
        self.send(request)
    }

    /// Repoint a template alias.
    ///
    /// Modeled errors: `Throttling`, `ResourceNotFound`, `Conflict`, `UnsupportedUserEdition`,
    /// `InternalFailure`.
    pub fn update_template_alias(
        &self,
        request: &UpdateTemplateAliasRequest,
    ) -> QuickSightResult<UpdateTemplateAliasResponse> {
        self.send(request)
    }

    /// Grant or revoke permissions on a template.
    ///
    /// Modeled errors: `Throttling`, `InvalidParameterValue`, `Conflict`, `ResourceNotFound`,
    /// `UnsupportedUserEdition`, `InternalFailure`.
    pub fn update_template_permissions(
        &self,
        request: &UpdateTemplatePermissionsRequest,
    ) -> QuickSightResult<UpdateTemplatePermissionsResponse> {
        self.send(request)
    }

    /// Change a user's email or role.
    ///
    /// Modeled errors: `AccessDenied`, `InvalidParameterValue`, `ResourceNotFound`, `Throttling`,
    /// `InternalFailure`, `ResourceUnavailable`.
    pub fn update_user(&self, request: &UpdateUserRequest) -> QuickSightResult<UpdateUserResponse> {
        self.send(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use awsbind_core::Credentials;

    #[test]
    fn regional_endpoint() {
        let c = QuickSightClient::builder()
            .region("ap-southeast-2")
            .credentials(Credentials::new("AKIDEXAMPLE", "secret"))
            .build()
            .unwrap();
        assert_eq!(
            c.service_client().endpoint().as_str(),
            "https://quicksight.ap-southeast-2.amazonaws.com/"
        );
        assert_eq!(c.service_client().metadata().signing_name, "quicksight");
    }
}
