crate::define_actions! {
    /// CloudWatch actions usable in IAM policies.
    pub enum CloudWatchActions: "cloudwatch" {
        /// Represents any action executed on CloudWatch.
        AllCloudWatchActions => "*",
        DeleteAlarms => "DeleteAlarms",
        DeleteAnomalyDetector => "DeleteAnomalyDetector",
        DeleteDashboards => "DeleteDashboards",
        DeleteInsightRules => "DeleteInsightRules",
        DescribeAlarmHistory => "DescribeAlarmHistory",
        DescribeAlarms => "DescribeAlarms",
        DescribeAlarmsForMetric => "DescribeAlarmsForMetric",
        DescribeAnomalyDetectors => "DescribeAnomalyDetectors",
        DescribeInsightRules => "DescribeInsightRules",
        DisableAlarmActions => "DisableAlarmActions",
        DisableInsightRules => "DisableInsightRules",
        EnableAlarmActions => "EnableAlarmActions",
        EnableInsightRules => "EnableInsightRules",
        GetDashboard => "GetDashboard",
        GetInsightRuleReport => "GetInsightRuleReport",
        GetMetricData => "GetMetricData",
        GetMetricStatistics => "GetMetricStatistics",
        GetMetricWidgetImage => "GetMetricWidgetImage",
        ListDashboards => "ListDashboards",
        ListMetrics => "ListMetrics",
        ListTagsForResource => "ListTagsForResource",
        PutAnomalyDetector => "PutAnomalyDetector",
        PutCompositeAlarm => "PutCompositeAlarm",
        PutDashboard => "PutDashboard",
        PutInsightRule => "PutInsightRule",
        PutMetricAlarm => "PutMetricAlarm",
        PutMetricData => "PutMetricData",
        SetAlarmState => "SetAlarmState",
        TagResource => "TagResource",
        UntagResource => "UntagResource",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Action;

    #[test]
    fn all_actions_wildcard() {
        assert_eq!(CloudWatchActions::AllCloudWatchActions.action_name(), "cloudwatch:*");
    }

    #[test]
    fn every_action_prefixed_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for action in CloudWatchActions::ALL {
            let name = action.action_name();
            assert!(name.starts_with("cloudwatch:"), "{}", name);
            assert!(seen.insert(name), "duplicate {}", name);
        }
        assert_eq!(CloudWatchActions::ALL.len(), 31);
    }

    #[test]
    fn known_wire_strings() {
        assert_eq!(CloudWatchActions::PutMetricData.action_name(), "cloudwatch:PutMetricData");
        assert_eq!(
            CloudWatchActions::DescribeAlarmsForMetric.to_string(),
            "cloudwatch:DescribeAlarmsForMetric"
        );
    }

    #[test]
    fn parse_from_wire_string() {
        assert_eq!(
            "cloudwatch:GetMetricData".parse::<CloudWatchActions>(),
            Ok(CloudWatchActions::GetMetricData)
        );
        assert!("cloudwatch:Nope".parse::<CloudWatchActions>().is_err());
        assert!("GetMetricData".parse::<CloudWatchActions>().is_err());
    }
}
