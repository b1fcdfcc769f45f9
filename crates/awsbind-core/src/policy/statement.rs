//! IAM policy documents.

use super::Action;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// The policy language version every document is written in.
pub const POLICY_VERSION: &str = "2012-10-17";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Effect {
    Allow,
    Deny,
}

/// Who a statement applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    /// Anyone (`"*"`).
    All,
    Aws(Vec<String>),
    Service(Vec<String>),
    Federated(Vec<String>),
}

impl Serialize for Principal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (key, ids) = match self {
            Self::All => return serializer.serialize_str("*"),
            Self::Aws(ids) => ("AWS", ids),
            Self::Service(ids) => ("Service", ids),
            Self::Federated(ids) => ("Federated", ids),
        };
        let mut map = serializer.serialize_map(Some(1))?;
        if ids.len() == 1 {
            map.serialize_entry(key, &ids[0])?;
        } else {
            map.serialize_entry(key, ids)?;
        }
        map.end()
    }
}

/// One `Statement` entry of a policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    #[serde(rename = "Sid", skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    #[serde(rename = "Effect")]
    pub effect: Effect,
    #[serde(rename = "Principal", skip_serializing_if = "Option::is_none")]
    pub principal: Option<Principal>,
    #[serde(rename = "Action")]
    pub actions: Vec<String>,
    #[serde(rename = "Resource", skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
}

impl Statement {
    pub fn new(effect: Effect) -> Self {
        Self {
            sid: None,
            effect,
            principal: None,
            actions: Vec::new(),
            resources: Vec::new(),
        }
    }

    pub fn allow() -> Self {
        Self::new(Effect::Allow)
    }

    pub fn deny() -> Self {
        Self::new(Effect::Deny)
    }

    pub fn with_id(mut self, sid: impl Into<String>) -> Self {
        self.sid = Some(sid.into());
        self
    }

    pub fn with_principal(mut self, principal: Principal) -> Self {
        self.principal = Some(principal);
        self
    }

    pub fn with_action(mut self, action: impl Action) -> Self {
        self.actions.push(action.action_name().to_string());
        self
    }

    pub fn with_actions<A: Action>(mut self, actions: impl IntoIterator<Item = A>) -> Self {
        self.actions
            .extend(actions.into_iter().map(|a| a.action_name().to_string()));
        self
    }

    pub fn with_resource(mut self, arn: impl Into<String>) -> Self {
        self.resources.push(arn.into());
        self
    }
}

/// A complete IAM policy document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Policy {
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Statement")]
    pub statements: Vec<Statement>,
}

impl Default for Policy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy {
    pub fn new() -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            id: None,
            statements: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_statement(mut self, statement: Statement) -> Self {
        self.statements.push(statement);
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::CloudWatchActions;
    use serde_json::json;

    #[test]
    fn policy_json_shape() {
        let policy = Policy::new().with_statement(
            Statement::allow()
                .with_id("metrics")
                .with_actions([
                    CloudWatchActions::PutMetricData,
                    CloudWatchActions::GetMetricData,
                ])
                .with_resource("*"),
        );
        let value: serde_json::Value = serde_json::from_str(&policy.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "Version": "2012-10-17",
                "Statement": [{
                    "Sid": "metrics",
                    "Effect": "Allow",
                    "Action": ["cloudwatch:PutMetricData", "cloudwatch:GetMetricData"],
                    "Resource": ["*"]
                }]
            })
        );
    }

    #[test]
    fn principal_forms() {
        assert_eq!(serde_json::to_value(Principal::All).unwrap(), json!("*"));
        assert_eq!(
            serde_json::to_value(Principal::Service(vec!["ecs-tasks.amazonaws.com".into()])).unwrap(),
            json!({"Service": "ecs-tasks.amazonaws.com"})
        );
        assert_eq!(
            serde_json::to_value(Principal::Aws(vec!["1".into(), "2".into()])).unwrap(),
            json!({"AWS": ["1", "2"]})
        );
    }

    #[test]
    fn deny_with_wildcard() {
        let st = Statement::deny()
            .with_principal(Principal::All)
            .with_action(CloudWatchActions::AllCloudWatchActions);
        let value = serde_json::to_value(&st).unwrap();
        assert_eq!(value["Effect"], "Deny");
        assert_eq!(value["Principal"], "*");
        assert_eq!(value["Action"], json!(["cloudwatch:*"]));
        assert!(value.get("Resource").is_none());
    }
}
