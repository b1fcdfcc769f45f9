//! Modeled ECS errors.

use awsbind_core::{ErrorKind, SdkError};
use std::fmt;

/// Every error code ECS documents, in unmarshalling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcsErrorKind {
    /// The caller lacks permission for the action.
    AccessDenied,
    /// Too many attributes on one resource.
    AttributeLimitExceeded,
    /// The account is blocked, usually for a billing problem.
    Blocked,
    /// The request is invalid for this caller or resource.
    Client,
    ClusterContainsContainerInstances,
    ClusterContainsServices,
    ClusterContainsTasks,
    ClusterNotFound,
    InvalidParameter,
    LimitExceeded,
    /// The container instance has no agent version information.
    MissingVersion,
    NoUpdateAvailable,
    PlatformTaskDefinitionIncompatibility,
    PlatformUnknown,
    ResourceInUse,
    ResourceNotFound,
    /// Server-side failure.
    Server,
    ServiceNotActive,
    ServiceNotFound,
    TargetNotFound,
    TaskSetNotFound,
    UnsupportedFeature,
    UpdateInProgress,
}

impl ErrorKind for EcsErrorKind {
    const CHAIN: &'static [(&'static str, Self)] = &[
        ("AccessDeniedException", Self::AccessDenied),
        ("AttributeLimitExceededException", Self::AttributeLimitExceeded),
        ("BlockedException", Self::Blocked),
        ("ClientException", Self::Client),
        (
            "ClusterContainsContainerInstancesException",
            Self::ClusterContainsContainerInstances,
        ),
        ("ClusterContainsServicesException", Self::ClusterContainsServices),
        ("ClusterContainsTasksException", Self::ClusterContainsTasks),
        ("ClusterNotFoundException", Self::ClusterNotFound),
        ("InvalidParameterException", Self::InvalidParameter),
        ("LimitExceededException", Self::LimitExceeded),
        ("MissingVersionException", Self::MissingVersion),
        ("NoUpdateAvailableException", Self::NoUpdateAvailable),
        (
            "PlatformTaskDefinitionIncompatibilityException",
            Self::PlatformTaskDefinitionIncompatibility,
        ),
        ("PlatformUnknownException", Self::PlatformUnknown),
        ("ResourceInUseException", Self::ResourceInUse),
        ("ResourceNotFoundException", Self::ResourceNotFound),
        ("ServerException", Self::Server),
        ("ServiceNotActiveException", Self::ServiceNotActive),
        ("ServiceNotFoundException", Self::ServiceNotFound),
        ("TargetNotFoundException", Self::TargetNotFound),
        ("TaskSetNotFoundException", Self::TaskSetNotFound),
        ("UnsupportedFeatureException", Self::UnsupportedFeature),
        ("UpdateInProgressException", Self::UpdateInProgress),
    ];
}

impl fmt::Display for EcsErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub type EcsError = SdkError<EcsErrorKind>;
pub type EcsResult<T> = Result<T, EcsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_covers_every_kind_once() {
        assert_eq!(EcsErrorKind::CHAIN.len(), 23);
        for (code, kind) in EcsErrorKind::CHAIN {
            assert!(code.ends_with("Exception"));
            assert_eq!(EcsErrorKind::from_code(code), Some(*kind));
            assert_eq!(kind.code(), *code);
        }
    }

    #[test]
    fn display_is_wire_code() {
        assert_eq!(EcsErrorKind::ClusterNotFound.to_string(), "ClusterNotFoundException");
        assert_eq!(EcsErrorKind::Server.to_string(), "ServerException");
    }

    #[test]
    fn unknown_code_has_no_kind() {
        assert_eq!(EcsErrorKind::from_code("ThrottlingException"), None);
    }
}
