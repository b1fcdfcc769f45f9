//! Response shapes, one per operation.
//!
//! Every member is optional on the wire; absent lists decode as empty.

use crate::model::*;
use serde::{Deserialize, Serialize};

macro_rules! response {
    (
        $(#[$meta:meta])*
        $name:ident { $( $(#[$fmeta:meta])* $field:ident : $ty:ty ),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(default)]
                pub $field: $ty,
            )*
        }
    };
}

response!(CreateCapacityProviderResponse { capacity_provider: Option<CapacityProvider> });
response!(CreateClusterResponse { cluster: Option<Cluster> });
response!(CreateServiceResponse { service: Option<Service> });
response!(CreateTaskSetResponse { task_set: Option<TaskSet> });
response!(DeleteAccountSettingResponse { setting: Option<Setting> });
response!(DeleteAttributesResponse { attributes: Vec<Attribute> });
response!(DeleteClusterResponse { cluster: Option<Cluster> });
response!(DeleteServiceResponse { service: Option<Service> });
response!(DeleteTaskSetResponse { task_set: Option<TaskSet> });
response!(DeregisterContainerInstanceResponse { container_instance: Option<ContainerInstance> });
response!(DeregisterTaskDefinitionResponse { task_definition: Option<TaskDefinition> });
response!(DescribeCapacityProvidersResponse {
    capacity_providers: Vec<CapacityProvider>,
    failures: Vec<Failure>,
    next_token: Option<String>,
});
response!(DescribeClustersResponse { clusters: Vec<Cluster>, failures: Vec<Failure> });
response!(DescribeContainerInstancesResponse {
    container_instances: Vec<ContainerInstance>,
    failures: Vec<Failure>,
});
response!(DescribeServicesResponse { services: Vec<Service>, failures: Vec<Failure> });
response!(DescribeTaskDefinitionResponse {
    task_definition: Option<TaskDefinition>,
    tags: Vec<Tag>,
});
response!(DescribeTaskSetsResponse { task_sets: Vec<TaskSet>, failures: Vec<Failure> });
response!(DescribeTasksResponse { tasks: Vec<Task>, failures: Vec<Failure> });
response!(DiscoverPollEndpointResponse {
    endpoint: Option<String>,
    telemetry_endpoint: Option<String>,
});
response!(ListAccountSettingsResponse { settings: Vec<Setting>, next_token: Option<String> });
response!(ListAttributesResponse { attributes: Vec<Attribute>, next_token: Option<String> });
response!(ListClustersResponse { cluster_arns: Vec<String>, next_token: Option<String> });
response!(ListContainerInstancesResponse {
    container_instance_arns: Vec<String>,
    next_token: Option<String>,
});
response!(ListServicesResponse { service_arns: Vec<String>, next_token: Option<String> });
response!(ListTagsForResourceResponse { tags: Vec<Tag> });
response!(ListTaskDefinitionFamiliesResponse { families: Vec<String>, next_token: Option<String> });
response!(ListTaskDefinitionsResponse {
    task_definition_arns: Vec<String>,
    next_token: Option<String>,
});
response!(ListTasksResponse { task_arns: Vec<String>, next_token: Option<String> });
response!(PutAccountSettingResponse { setting: Option<Setting> });
response!(PutAccountSettingDefaultResponse { setting: Option<Setting> });
response!(PutAttributesResponse { attributes: Vec<Attribute> });
response!(PutClusterCapacityProvidersResponse { cluster: Option<Cluster> });
response!(RegisterContainerInstanceResponse { container_instance: Option<ContainerInstance> });
response!(RegisterTaskDefinitionResponse {
    task_definition: Option<TaskDefinition>,
    tags: Vec<Tag>,
});
response!(RunTaskResponse { tasks: Vec<Task>, failures: Vec<Failure> });
response!(StartTaskResponse { tasks: Vec<Task>, failures: Vec<Failure> });
response!(StopTaskResponse { task: Option<Task> });
response!(SubmitAttachmentStateChangesResponse { acknowledgment: Option<String> });
response!(SubmitContainerStateChangeResponse { acknowledgment: Option<String> });
response!(SubmitTaskStateChangeResponse { acknowledgment: Option<String> });
response!(TagResourceResponse {});
response!(UntagResourceResponse {});
response!(UpdateClusterSettingsResponse { cluster: Option<Cluster> });
response!(UpdateContainerAgentResponse { container_instance: Option<ContainerInstance> });
response!(UpdateContainerInstancesStateResponse {
    container_instances: Vec<ContainerInstance>,
    failures: Vec<Failure>,
});
response!(UpdateServiceResponse { service: Option<Service> });
response!(UpdateServicePrimaryTaskSetResponse { task_set: Option<TaskSet> });
response!(UpdateTaskSetResponse { task_set: Option<TaskSet> });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_lists_decode_empty() {
        let out: RunTaskResponse = serde_json::from_str("{}").unwrap();
        assert!(out.tasks.is_empty());
        assert!(out.failures.is_empty());
    }

    #[test]
    fn run_task_with_failures() {
        let out: RunTaskResponse = serde_json::from_str(
            r#"{
                "tasks": [{"taskArn": "arn:aws:ecs:us-east-1:1:task/abc", "lastStatus": "PROVISIONING"}],
                "failures": [{"arn": "arn:x", "reason": "RESOURCE:MEMORY"}]
            }"#,
        )
        .unwrap();
        assert_eq!(out.tasks.len(), 1);
        assert_eq!(
            out.tasks[0].task_arn.as_deref(),
            Some("arn:aws:ecs:us-east-1:1:task/abc")
        );
        assert_eq!(out.failures[0].reason.as_deref(), Some("RESOURCE:MEMORY"));
    }

    #[test]
    fn poll_endpoint_fields() {
        let out: DiscoverPollEndpointResponse = serde_json::from_str(
            r#"{"endpoint":"https://ecs-a-1.us-east-1.amazonaws.com/","telemetryEndpoint":"https://ecs-t-1.us-east-1.amazonaws.com/"}"#,
        )
        .unwrap();
        assert!(out.telemetry_endpoint.unwrap().starts_with("https://ecs-t-1"));
    }
}
