//! IAM actions for ECS.

awsbind_core::define_actions! {
    /// ECS actions usable in IAM policies.
    pub enum EcsActions: "ecs" {
        /// Any ECS action.
        AllEcsActions => "*",
        CreateCapacityProvider => "CreateCapacityProvider",
        CreateCluster => "CreateCluster",
        CreateService => "CreateService",
        CreateTaskSet => "CreateTaskSet",
        DeleteAccountSetting => "DeleteAccountSetting",
        DeleteAttributes => "DeleteAttributes",
        DeleteCluster => "DeleteCluster",
        DeleteService => "DeleteService",
        DeleteTaskSet => "DeleteTaskSet",
        DeregisterContainerInstance => "DeregisterContainerInstance",
        DeregisterTaskDefinition => "DeregisterTaskDefinition",
        DescribeCapacityProviders => "DescribeCapacityProviders",
        DescribeClusters => "DescribeClusters",
        DescribeContainerInstances => "DescribeContainerInstances",
        DescribeServices => "DescribeServices",
        DescribeTaskDefinition => "DescribeTaskDefinition",
        DescribeTaskSets => "DescribeTaskSets",
        DescribeTasks => "DescribeTasks",
        DiscoverPollEndpoint => "DiscoverPollEndpoint",
        ListAccountSettings => "ListAccountSettings",
        ListAttributes => "ListAttributes",
        ListClusters => "ListClusters",
        ListContainerInstances => "ListContainerInstances",
        ListServices => "ListServices",
        ListTagsForResource => "ListTagsForResource",
        ListTaskDefinitionFamilies => "ListTaskDefinitionFamilies",
        ListTaskDefinitions => "ListTaskDefinitions",
        ListTasks => "ListTasks",
        PutAccountSetting => "PutAccountSetting",
        PutAccountSettingDefault => "PutAccountSettingDefault",
        PutAttributes => "PutAttributes",
        PutClusterCapacityProviders => "PutClusterCapacityProviders",
        RegisterContainerInstance => "RegisterContainerInstance",
        RegisterTaskDefinition => "RegisterTaskDefinition",
        RunTask => "RunTask",
        StartTask => "StartTask",
        StopTask => "StopTask",
        SubmitAttachmentStateChanges => "SubmitAttachmentStateChanges",
        SubmitContainerStateChange => "SubmitContainerStateChange",
        SubmitTaskStateChange => "SubmitTaskStateChange",
        TagResource => "TagResource",
        UntagResource => "UntagResource",
        UpdateClusterSettings => "UpdateClusterSettings",
        UpdateContainerAgent => "UpdateContainerAgent",
        UpdateContainerInstancesState => "UpdateContainerInstancesState",
        UpdateService => "UpdateService",
        UpdateServicePrimaryTaskSet => "UpdateServicePrimaryTaskSet",
        UpdateTaskSet => "UpdateTaskSet",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::OPERATION_NAMES;
    use awsbind_core::policy::Action;

    #[test]
    fn wildcard() {
        assert_eq!(EcsActions::AllEcsActions.action_name(), "ecs:*");
    }

    #[test]
    fn one_action_per_operation() {
        assert_eq!(EcsActions::ALL.len(), OPERATION_NAMES.len() + 1);
        for op in OPERATION_NAMES {
            let wire = format!("ecs:{}", op);
            assert!(wire.parse::<EcsActions>().is_ok(), "{}", wire);
        }
    }

    #[test]
    fn display_is_wire_string() {
        assert_eq!(EcsActions::RunTask.to_string(), "ecs:RunTask");
    }
}
