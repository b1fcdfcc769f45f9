//! IAM actions for QuickSight.

awsbind_core::define_actions! {
    /// QuickSight actions usable in IAM policies.
    pub enum QuickSightActions: "quicksight" {
        /// Any QuickSight action.
        AllQuickSightActions => "*",
        CancelIngestion => "CancelIngestion",
        CreateDashboard => "CreateDashboard",
        CreateDataSet => "CreateDataSet",
        CreateDataSource => "CreateDataSource",
        CreateGroup => "CreateGroup",
        CreateGroupMembership => "CreateGroupMembership",
        CreateIamPolicyAssignment => "CreateIAMPolicyAssignment",
        CreateIngestion => "CreateIngestion",
        CreateTemplate => "CreateTemplate",
        CreateTemplateAlias => "CreateTemplateAlias",
        DeleteDashboard => "DeleteDashboard",
        DeleteDataSet => "DeleteDataSet",
        DeleteDataSource => "DeleteDataSource",
        DeleteGroup => "DeleteGroup",
        DeleteGroupMembership => "DeleteGroupMembership",
        DeleteIamPolicyAssignment => "DeleteIAMPolicyAssignment",
        DeleteTemplate => "DeleteTemplate",
        DeleteTemplateAlias => "DeleteTemplateAlias",
        DeleteUser => "DeleteUser",
        DeleteUserByPrincipalId => "DeleteUserByPrincipalId",
        DescribeDashboard => "DescribeDashboard",
        DescribeDashboardPermissions => "DescribeDashboardPermissions",
        DescribeDataSet => "DescribeDataSet",
        DescribeDataSetPermissions => "DescribeDataSetPermissions",
        DescribeDataSource => "DescribeDataSource",
        DescribeDataSourcePermissions => "DescribeDataSourcePermissions",
        DescribeGroup => "DescribeGroup",
        DescribeIamPolicyAssignment => "DescribeIAMPolicyAssignment",
        DescribeIngestion => "DescribeIngestion",
        DescribeTemplate => "DescribeTemplate",
        DescribeTemplateAlias => "DescribeTemplateAlias",
        DescribeTemplatePermissions => "DescribeTemplatePermissions",
        DescribeUser => "DescribeUser",
        GetDashboardEmbedUrl => "GetDashboardEmbedUrl",
        ListDashboardVersions => "ListDashboardVersions",
        ListDashboards => "ListDashboards",
        ListDataSets => "ListDataSets",
        ListDataSources => "ListDataSources",
        ListGroupMemberships => "ListGroupMemberships",
        ListGroups => "ListGroups",
        ListIamPolicyAssignments => "ListIAMPolicyAssignments",
        ListIamPolicyAssignmentsForUser => "ListIAMPolicyAssignmentsForUser",
        ListIngestions => "ListIngestions",
        ListTagsForResource => "ListTagsForResource",
        ListTemplateAliases => "ListTemplateAliases",
        ListTemplateVersions => "ListTemplateVersions",
        ListTemplates => "ListTemplates",
        ListUserGroups => "ListUserGroups",
        ListUsers => "ListUsers",
        RegisterUser => "RegisterUser",
        SearchDashboards => "SearchDashboards",
        TagResource => "TagResource",
        UntagResource => "UntagResource",
        UpdateDashboard => "UpdateDashboard",
        UpdateDashboardPermissions => "UpdateDashboardPermissions",
        UpdateDashboardPublishedVersion => "UpdateDashboardPublishedVersion",
        UpdateDataSet => "UpdateDataSet",
        UpdateDataSetPermissions => "UpdateDataSetPermissions",
        UpdateDataSource => "UpdateDataSource",
        UpdateDataSourcePermissions => "UpdateDataSourcePermissions",
        UpdateGroup => "UpdateGroup",
        UpdateIamPolicyAssignment => "UpdateIAMPolicyAssignment",
        UpdateTemplate => "UpdateTemplate",
        UpdateTemplateAlias => "UpdateTemplateAlias",
        UpdateTemplatePermissions => "UpdateTemplatePermissions",
        UpdateUser => "UpdateUser",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use awsbind_core::policy::Action;

    #[test]
    fn wildcard_and_operations() {
        assert_eq!(QuickSightActions::ALL.len(), 67);
        assert_eq!(QuickSightActions::AllQuickSightActions.action_name(), "quicksight:*");
        assert_eq!(
            QuickSightActions::GetDashboardEmbedUrl.to_string(),
            "quicksight:GetDashboardEmbedUrl"
        );
    }

    #[test]
    fn iam_acronym_kept_on_the_wire() {
        assert_eq!(
            QuickSightActions::ListIamPolicyAssignmentsForUser.action_name(),
            "quicksight:ListIAMPolicyAssignmentsForUser"
        );
        assert_eq!(
            "quicksight:DeleteIAMPolicyAssignment".parse::<QuickSightActions>(),
            Ok(QuickSightActions::DeleteIamPolicyAssignment)
        );
    }

    #[test]
    fn names_match_operations() {
        for (action, op) in QuickSightActions::ALL[1..].iter().zip(crate::OPERATION_NAMES) {
            assert_eq!(action.action_name(), format!("quicksight:{}", op));
        }
    }
}
