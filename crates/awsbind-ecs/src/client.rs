//! The ECS client.

use crate::error::{EcsErrorKind, EcsResult};
use crate::operation::EcsOperation;
use crate::request::*;
use crate::response::*;
use awsbind_core::{
    ClientBuilder, ClientError, RequestOptions, ServiceBinding, ServiceClient, ServiceMetadata,
};

pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "ecs",
    endpoint_prefix: "ecs",
    signing_name: "ecs",
    api_version: "2014-11-13",
};

/// Blocking client for Amazon ECS.
///
/// Every method sends exactly one request. Errors the service models come
/// back as [`SdkError::Service`](awsbind_core::SdkError::Service) with an
/// [`EcsErrorKind`]; unmodeled codes keep their code with no kind.
///
/// ```no_run
/// use awsbind_ecs::{EcsClient, ListClustersRequest};
///
/// let client = EcsClient::builder().region("eu-west-1").build()?;
/// let clusters = client.list_clusters(&ListClustersRequest::default())?;
/// for arn in clusters.cluster_arns {
///     println!("{}", arn);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct EcsClient {
    inner: ServiceClient<EcsErrorKind>,
}

impl ServiceBinding for EcsClient {
    type Kind = EcsErrorKind;
    const METADATA: ServiceMetadata = METADATA;

    fn from_service_client(inner: ServiceClient<EcsErrorKind>) -> Self {
        Self { inner }
    }
}

impl EcsClient {
    pub fn builder() -> ClientBuilder<Self> {
        ClientBuilder::new()
    }

    /// Client for `us-east-1` with credentials from the environment.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::builder().build()
    }

    pub fn service_client(&self) -> &ServiceClient<EcsErrorKind> {
        &self.inner
    }

    /// Send any ECS operation.
    pub fn send<O: EcsOperation>(&self, request: &O) -> EcsResult<O::Output> {
        self.inner.invoke(request, &RequestOptions::default())
    }

    /// Send with per-call credentials or headers.
    pub fn send_with<O: EcsOperation>(
        &self,
        request: &O,
        options: &RequestOptions,
    ) -> EcsResult<O::Output> {
        self.inner.invoke(request, options)
    }

    // ── Operations ──────────────────────────────────────────────────────

    /// Create a capacity provider backed by an Auto Scaling group.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `LimitExceeded`.
    pub fn create_capacity_provider(
        &self,
        request: &CreateCapacityProviderRequest,
    ) -> EcsResult<CreateCapacityProviderResponse> {
        self.send(request)
    }

    /// Create a cluster. With no name the cluster is called `default`.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`.
    pub fn create_cluster(
        &self,
        request: &CreateClusterRequest,
    ) -> EcsResult<CreateClusterResponse> {
        self.send(request)
    }

    /// Run and maintain a desired number of tasks from a task definition.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `ClusterNotFound`,
    /// `UnsupportedFeature`, `PlatformUnknown`, `PlatformTaskDefinitionIncompatibility`,
    /// `AccessDenied`.
    pub fn create_service(
        &self,
        request: &CreateServiceRequest,
    ) -> EcsResult<CreateServiceResponse> {
        self.send(request)
    }

    /// Create a task set in a service that uses the `EXTERNAL` deployment controller.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `ClusterNotFound`,
    /// `UnsupportedFeature`, `PlatformUnknown`, `PlatformTaskDefinitionIncompatibility`,
    /// `AccessDenied`, `ServiceNotFound`, `ServiceNotActive`.
    pub fn create_task_set(
        &self,
        request: &CreateTaskSetRequest,
    ) -> EcsResult<CreateTaskSetResponse> {
        self.send(request)
    }

    /// Reset an account setting for a user, role or the root user.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`.
    pub fn delete_account_setting(
        &self,
        request: &DeleteAccountSettingRequest,
    ) -> EcsResult<DeleteAccountSettingResponse> {
        self.send(request)
    }

    /// Delete custom attributes from a resource.
    ///
    /// Modeled errors: `ClusterNotFound`, `TargetNotFound`, `InvalidParameter`.
    pub fn delete_attributes(
        &self,
        request: &DeleteAttributesRequest,
    ) -> EcsResult<DeleteAttributesResponse> {
        self.send(request)
    }

    /// Delete an empty cluster.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `ClusterNotFound`,
    /// `ClusterContainsContainerInstances`, `ClusterContainsServices`, `ClusterContainsTasks`,
    /// `UpdateInProgress`.
    pub fn delete_cluster(
        &self,
        request: &DeleteClusterRequest,
    ) -> EcsResult<DeleteClusterResponse> {
        self.send(request)
    }

    /// Delete a service. Scale it to zero first unless `force` is set.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `ClusterNotFound`,
    /// `ServiceNotFound`.
    pub fn delete_service(
        &self,
        request: &DeleteServiceRequest,
    ) -> EcsResult<DeleteServiceResponse> {
        self.send(request)
    }

    /// Delete a task set from a service.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `ClusterNotFound`,
    /// `UnsupportedFeature`, `AccessDenied`, `ServiceNotFound`, `ServiceNotActive`,
    /// `TaskSetNotFound`.
    pub fn delete_task_set(
        &self,
        request: &DeleteTaskSetRequest,
    ) -> EcsResult<DeleteTaskSetResponse> {
        self.send(request)
    }

    /// Deregister a container instance from its cluster.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `ClusterNotFound`.
    pub fn deregister_container_instance(
        &self,
        request: &DeregisterContainerInstanceRequest,
    ) -> EcsResult<DeregisterContainerInstanceResponse> {
        self.send(request)
    }

    /// Mark a task definition revision `INACTIVE`.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`.
    pub fn deregister_task_definition(
        &self,
        request: &DeregisterTaskDefinitionRequest,
    ) -> EcsResult<DeregisterTaskDefinitionResponse> {
        self.send(request)
    }

    /// Describe one or more capacity providers.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`.
    pub fn describe_capacity_providers(
        &self,
        request: &DescribeCapacityProvidersRequest,
    ) -> EcsResult<DescribeCapacityProvidersResponse> {
        self.send(request)
    }

    /// Describe one or more clusters.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`.
    pub fn describe_clusters(
        &self,
        request: &DescribeClustersRequest,
    ) -> EcsResult<DescribeClustersResponse> {
        self.send(request)
    }

    /// Describe container instances in a cluster.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `ClusterNotFound`.
    pub fn describe_container_instances(
        &self,
        request: &DescribeContainerInstancesRequest,
    ) -> EcsResult<DescribeContainerInstancesResponse> {
        self.send(request)
    }

    /// Describe services in a cluster.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `ClusterNotFound`.
    pub fn describe_services(
        &self,
        request: &DescribeServicesRequest,
    ) -> EcsResult<DescribeServicesResponse> {
        self.send(request)
    }

    /// Describe a task definition by family, `family:revision` or ARN.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`.
    pub fn describe_task_definition(
        &self,
        request: &DescribeTaskDefinitionRequest,
    ) -> EcsResult<DescribeTaskDefinitionResponse> {
        self.send(request)
    }

    /// Describe task sets of a service.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `ClusterNotFound`,
    /// `UnsupportedFeature`, `AccessDenied`, `ServiceNotFound`, `ServiceNotActive`.
    pub fn describe_task_sets(
        &self,
        request: &DescribeTaskSetsRequest,
    ) -> EcsResult<DescribeTaskSetsResponse> {
        self.send(request)
    }

    /// Describe tasks in a cluster.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `ClusterNotFound`.
    pub fn describe_tasks(
        &self,
        request: &DescribeTasksRequest,
    ) -> EcsResult<DescribeTasksResponse> {
        self.send(request)
    }

    /// Return the endpoint the container agent polls. Agent use only.
    ///
    /// Modeled errors: `Server`, `Client`.
    pub fn discover_poll_endpoint(
        &self,
        request: &DiscoverPollEndpointRequest,
    ) -> EcsResult<DiscoverPollEndpointResponse> {
        self.send(request)
    }

    /// List account settings.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`.
    pub fn list_account_settings(
        &self,
        request: &ListAccountSettingsRequest,
    ) -> EcsResult<ListAccountSettingsResponse> {
        self.send(request)
    }

    /// List attributes of a target type in a cluster.
    ///
    /// Modeled errors: `ClusterNotFound`, `InvalidParameter`.
    pub fn list_attributes(
        &self,
        request: &ListAttributesRequest,
    ) -> EcsResult<ListAttributesResponse> {
        self.send(request)
    }

    /// List cluster ARNs.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`.
    pub fn list_clusters(&self, request: &ListClustersRequest) -> EcsResult<ListClustersResponse> {
        self.send(request)
    }

    /// List container instance ARNs in a cluster.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `ClusterNotFound`.
    pub fn list_container_instances(
        &self,
        request: &ListContainerInstancesRequest,
    ) -> EcsResult<ListContainerInstancesResponse> {
        self.send(request)
    }

    /// List service ARNs in a cluster.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `ClusterNotFound`.
    pub fn list_services(&self, request: &ListServicesRequest) -> EcsResult<ListServicesResponse> {
        self.send(request)
    }

    /// List tags on a resource.
    ///
    /// Modeled errors: `Server`, `Client`, `ClusterNotFound`, `InvalidParameter`.
    pub fn list_tags_for_resource(
        &self,
        request: &ListTagsForResourceRequest,
    ) -> EcsResult<ListTagsForResourceResponse> {
        self.send(request)
    }

    /// List task definition families.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`.
    pub fn list_task_definition_families(
        &self,
        request: &ListTaskDefinitionFamiliesRequest,
    ) -> EcsResult<ListTaskDefinitionFamiliesResponse> {
        self.send(request)
    }

    /// List task definition ARNs.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`.
    pub fn list_task_definitions(
        &self,
        request: &ListTaskDefinitionsRequest,
    ) -> EcsResult<ListTaskDefinitionsResponse> {
        self.send(request)
    }

    /// List task ARNs, filtered by the request members.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `ClusterNotFound`,
    /// `ServiceNotFound`.
    pub fn list_tasks(&self, request: &ListTasksRequest) -> EcsResult<ListTasksResponse> {
        self.send(request)
    }

    /// Modify an account setting for a user, role or the root user.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`.
    pub fn put_account_setting(
        &self,
        request: &PutAccountSettingRequest,
    ) -> EcsResult<PutAccountSettingResponse> {
        self.send(request)
    }

    /// Modify the default of an account setting for every principal.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`.
    pub fn put_account_setting_default(
        &self,
        request: &PutAccountSettingDefaultRequest,
    ) -> EcsResult<PutAccountSettingDefaultResponse> {
        self.send(request)
    }

    /// Create or update attributes on resources.
    ///
    /// Modeled errors: `ClusterNotFound`, `TargetNotFound`, `AttributeLimitExceeded`,
    /// `InvalidParameter`.
    pub fn put_attributes(
        &self,
        request: &PutAttributesRequest,
    ) -> EcsResult<PutAttributesResponse> {
        self.send(request)
    }

    /// Replace a cluster's capacity providers and default strategy.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `ClusterNotFound`, `ResourceInUse`,
    /// `UpdateInProgress`.
    pub fn put_cluster_capacity_providers(
        &self,
        request: &PutClusterCapacityProvidersRequest,
    ) -> EcsResult<PutClusterCapacityProvidersResponse> {
        self.send(request)
    }

    /// Register an instance with a cluster. Agent use only.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`.
    pub fn register_container_instance(
        &self,
        request: &RegisterContainerInstanceRequest,
    ) -> EcsResult<RegisterContainerInstanceResponse> {
        self.send(request)
    }

    /// Register a new task definition revision.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`.
    pub fn register_task_definition(
        &self,
        request: &RegisterTaskDefinitionRequest,
    ) -> EcsResult<RegisterTaskDefinitionResponse> {
        self.send(request)
    }

    /// Start new tasks from a task definition.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `ClusterNotFound`,
    /// `UnsupportedFeature`, `PlatformUnknown`, `PlatformTaskDefinitionIncompatibility`,
    /// `AccessDenied`, `Blocked`.
    pub fn run_task(&self, request: &RunTaskRequest) -> EcsResult<RunTaskResponse> {
        self.send(request)
    }

    /// Start a task on specific container instances.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `ClusterNotFound`.
    pub fn start_task(&self, request: &StartTaskRequest) -> EcsResult<StartTaskResponse> {
        self.send(request)
    }

    /// Stop a running task.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `ClusterNotFound`.
    pub fn stop_task(&self, request: &StopTaskRequest) -> EcsResult<StopTaskResponse> {
        self.send(request)
    }

    /// Report attachment state changes. Agent use only.
    ///
    /// Modeled errors: `Server`, `Client`, `AccessDenied`, `InvalidParameter`.
    pub fn submit_attachment_state_changes(
        &self,
        request: &SubmitAttachmentStateChangesRequest,
    ) -> EcsResult<SubmitAttachmentStateChangesResponse> {
        self.send(request)
    }

    /// Report a container state change. Agent use only.
    ///
    /// Modeled errors: `Server`, `Client`, `AccessDenied`.
    pub fn submit_container_state_change(
        &self,
        request: &SubmitContainerStateChangeRequest,
    ) -> EcsResult<SubmitContainerStateChangeResponse> {
        self.send(request)
    }

    /// Report a task state change. Agent use only.
    ///
    /// Modeled errors: `Server`, `Client`, `AccessDenied`, `InvalidParameter`.
    pub fn submit_task_state_change(
        &self,
        request: &SubmitTaskStateChangeRequest,
    ) -> EcsResult<SubmitTaskStateChangeResponse> {
        self.send(request)
    }

    /// Add tags to a resource.
    ///
    /// Modeled errors: `Server`, `Client`, `ClusterNotFound`, `ResourceNotFound`,
    /// `InvalidParameter`.
    pub fn tag_resource(&self, request: &TagResourceRequest) -> EcsResult<TagResourceResponse> {
        self.send(request)
    }

    /// Remove tags from a resource.
    ///
    /// Modeled errors: `Server`, `Client`, `ClusterNotFound`, `ResourceNotFound`,
    /// `InvalidParameter`.
    pub fn untag_resource(
        &self,
        request: &UntagResourceRequest,
    ) -> EcsResult<UntagResourceResponse> {
        self.send(request)
    }

    /// Modify cluster settings.
    ///
    /// Modeled errors: `Server`, `Client`, `ClusterNotFound`, `InvalidParameter`.
    pub fn update_cluster_settings(
        &self,
        request: &UpdateClusterSettingsRequest,
    ) -> EcsResult<UpdateClusterSettingsResponse> {
        self.send(request)
    }

    /// Update the container agent on a container instance.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `ClusterNotFound`,
    /// `UpdateInProgress`, `NoUpdateAvailable`, `MissingVersion`.
    pub fn update_container_agent(
        &self,
        request: &UpdateContainerAgentRequest,
    ) -> EcsResult<UpdateContainerAgentResponse> {
        self.send(request)
    }

    /// Set container instances to `ACTIVE` or `DRAINING`.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `ClusterNotFound`.
    pub fn update_container_instances_state(
        &self,
        request: &UpdateContainerInstancesStateRequest,
    ) -> EcsResult<UpdateContainerInstancesStateResponse> {
        self.send(request)
    }

    /// Modify the parameters of a service.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `ClusterNotFound`,
    /// `ServiceNotFound`, `ServiceNotActive`, `PlatformUnknown`,
    /// `PlatformTaskDefinitionIncompatibility`, `AccessDenied`.
    pub fn update_service(
        &self,
        request: &UpdateServiceRequest,
    ) -> EcsResult<UpdateServiceResponse> {
        self.send(request)
    }

    /// Promote a task set to primary.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `ClusterNotFound`,
    /// `UnsupportedFeature`, `ServiceNotFound`, `ServiceNotActive`, `TaskSetNotFound`,
    /// `AccessDenied`.
    pub fn update_service_primary_task_set(
        &self,
        request: &UpdateServicePrimaryTaskSetRequest,
    ) -> EcsResult<UpdateServicePrimaryTaskSetResponse> {
        self.send(request)
    }

    /// Modify a task set's scale.
    ///
    /// Modeled errors: `Server`, `Client`, `InvalidParameter`, `ClusterNotFound`,
    /// `UnsupportedFeature`, `AccessDenied`, `ServiceNotFound`, `ServiceNotActive`,
    /// `TaskSetNotFound`.
    pub fn update_task_set(
        &self,
        request: &UpdateTaskSetRequest,
    ) -> EcsResult<UpdateTaskSetResponse> {
        self.send(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use awsbind_core::Credentials;

    fn client() -> EcsClient {
        EcsClient::builder()
            .region("eu-west-1")
            .credentials(Credentials::new("AKIDEXAMPLE", "secret"))
            .build()
            .unwrap()
    }

    #[test]
    fn regional_endpoint() {
        let c = client();
        assert_eq!(c.service_client().endpoint().as_str(), "https://ecs.eu-west-1.amazonaws.com/");
        assert_eq!(c.service_client().metadata().api_version, "2014-11-13");
    }

    #[test]
    fn endpoint_override() {
        let c = EcsClient::builder()
            .endpoint_url("http://localhost:4566")
            .credentials(Credentials::new("AKIDEXAMPLE", "secret"))
            .build()
            .unwrap();
        assert_eq!(c.service_client().endpoint().host_str(), Some("localhost"));
    }
}
