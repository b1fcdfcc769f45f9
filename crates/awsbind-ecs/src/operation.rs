//! Binds each request to its awsJson 1.1 operation.

use crate::request::*;
use crate::response::*;
use awsbind_core::operation::unmarshall_json;
use awsbind_core::{ClientError, HttpResponse, MarshalledRequest, Operation};

/// Prefix of the `x-amz-target` header for every ECS call.
pub const TARGET_PREFIX: &str = "AmazonEC2ContainerServiceV20141113";

/// Marker for operations that belong to ECS.
pub trait EcsOperation: Operation {}

macro_rules! ecs_operations {
    ( $( $name:literal : $request:ty => $response:ty ),+ $(,)? ) => {
        $(
            impl Operation for $request {
                const NAME: &'static str = $name;
                type Output = $response;

                fn marshall(&self) -> Result<MarshalledRequest, ClientError> {
                    MarshalledRequest::aws_json(TARGET_PREFIX, Self::NAME, self)
                }

                fn unmarshall(response: &HttpResponse) -> Result<Self::Output, ClientError> {
                    unmarshall_json(response)
                }
            }

            impl EcsOperation for $request {}
        )+

        /// Wire names of every ECS operation.
        pub const OPERATION_NAMES: &[&str] = &[ $( $name ),+ ];
    };
}

ecs_operations! {
    "CreateCapacityProvider": CreateCapacityProviderRequest => CreateCapacityProviderResponse,
    "CreateCluster": CreateClusterRequest => CreateClusterResponse,
    "CreateService": CreateServiceRequest => CreateServiceResponse,
    "CreateTaskSet": CreateTaskSetRequest => CreateTaskSetResponse,
    "DeleteAccountSetting": DeleteAccountSettingRequest => DeleteAccountSettingResponse,
    "DeleteAttributes": DeleteAttributesRequest => DeleteAttributesResponse,
    "DeleteCluster": DeleteClusterRequest => DeleteClusterResponse,
    "DeleteService": DeleteServiceRequest => DeleteServiceResponse,
    "DeleteTaskSet": DeleteTaskSetRequest => DeleteTaskSetResponse,
    "DeregisterContainerInstance": DeregisterContainerInstanceRequest => DeregisterContainerInstanceResponse,
    "DeregisterTaskDefinition": DeregisterTaskDefinitionRequest => DeregisterTaskDefinitionResponse,
    "DescribeCapacityProviders": DescribeCapacityProvidersRequest => DescribeCapacityProvidersResponse,
    "DescribeClusters": DescribeClustersRequest => DescribeClustersResponse,
    "DescribeContainerInstances": DescribeContainerInstancesRequest => DescribeContainerInstancesResponse,
    "DescribeServices": DescribeServicesRequest => DescribeServicesResponse,
    "DescribeTaskDefinition": DescribeTaskDefinitionRequest => DescribeTaskDefinitionResponse,
    "DescribeTaskSets": DescribeTaskSetsRequest => DescribeTaskSetsResponse,
    "DescribeTasks": DescribeTasksRequest => DescribeTasksResponse,
    "DiscoverPollEndpoint": DiscoverPollEndpointRequest => DiscoverPollEndpointResponse,
    "ListAccountSettings": ListAccountSettingsRequest => ListAccountSettingsResponse,
    "ListAttributes": ListAttributesRequest => ListAttributesResponse,
    "ListClusters": ListClustersRequest => ListClustersResponse,
    "ListContainerInstances": ListContainerInstancesRequest => ListContainerInstancesResponse,
    "ListServices": ListServicesRequest => ListServicesResponse,
    "ListTagsForResource": ListTagsForResourceRequest => ListTagsForResourceResponse,
    "ListTaskDefinitionFamilies": ListTaskDefinitionFamiliesRequest => ListTaskDefinitionFamiliesResponse,
    "ListTaskDefinitions": ListTaskDefinitionsRequest => ListTaskDefinitionsResponse,
    "ListTasks": ListTasksRequest => ListTasksResponse,
    "PutAccountSetting": PutAccountSettingRequest => PutAccountSettingResponse,
    "PutAccountSettingDefault": PutAccountSettingDefaultRequest => PutAccountSettingDefaultResponse,
    "PutAttributes": PutAttributesRequest => PutAttributesResponse,
    "PutClusterCapacityProviders": PutClusterCapacityProvidersRequest => PutClusterCapacityProvidersResponse,
    "RegisterContainerInstance": RegisterContainerInstanceRequest => RegisterContainerInstanceResponse,
    "RegisterTaskDefinition": RegisterTaskDefinitionRequest => RegisterTaskDefinitionResponse,
    "RunTask": RunTaskRequest => RunTaskResponse,
    "StartTask": StartTaskRequest => StartTaskResponse,
    "StopTask": StopTaskRequest => StopTaskResponse,
    "SubmitAttachmentStateChanges": SubmitAttachmentStateChangesRequest => SubmitAttachmentStateChangesResponse,
    "SubmitContainerStateChange": SubmitContainerStateChangeRequest => SubmitContainerStateChangeResponse,
    "SubmitTaskStateChange": SubmitTaskStateChangeRequest => SubmitTaskStateChangeResponse,
    "TagResource": TagResourceRequest => TagResourceResponse,
    "UntagResource": UntagResourceRequest => UntagResourceResponse,
    "UpdateClusterSettings": UpdateClusterSettingsRequest => UpdateClusterSettingsResponse,
    "UpdateContainerAgent": UpdateContainerAgentRequest => UpdateContainerAgentResponse,
    "UpdateContainerInstancesState": UpdateContainerInstancesStateRequest => UpdateContainerInstancesStateResponse,
    "UpdateService": UpdateServiceRequest => UpdateServiceResponse,
    "UpdateServicePrimaryTaskSet": UpdateServicePrimaryTaskSetRequest => UpdateServicePrimaryTaskSetResponse,
    "UpdateTaskSet": UpdateTaskSetRequest => UpdateTaskSetResponse,
}
