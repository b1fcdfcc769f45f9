//! Modeled QuickSight errors.

use awsbind_core::{ErrorKind, SdkError};
use std::fmt;

/// Error codes QuickSight documents, in unmarshalling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickSightErrorKind {
    AccessDenied,
    /// Another update to the same resource is in flight.
    ConcurrentUpdating,
    /// Updating or deleting a resource can cause an inconsistent state.
    Conflict,
    /// The embedding domain is not on the account's allow list.
    DomainNotWhitelisted,
    /// Only IAM identities can be used with this operation.
    IdentityTypeNotSupported,
    InternalFailure,
    InvalidNextToken,
    InvalidParameterValue,
    LimitExceeded,
    /// A precondition on the account or namespace does not hold.
    PreconditionNotMet,
    /// The user is not registered with QuickSight.
    QuickSightUserNotFound,
    ResourceExists,
    ResourceNotFound,
    ResourceUnavailable,
    SessionLifetimeInMinutesInvalid,
    Throttling,
    /// The operation needs QuickSight Enterprise edition.
    UnsupportedUserEdition,
}

impl ErrorKind for QuickSightErrorKind {
    const CHAIN: &'static [(&'static str, Self)] = &[
        ("AccessDeniedException", Self::AccessDenied),
        ("ConcurrentUpdatingException", Self::ConcurrentUpdating),
        ("ConflictException", Self::Conflict),
        ("DomainNotWhitelistedException", Self::DomainNotWhitelisted),
        ("IdentityTypeNotSupportedException", Self::IdentityTypeNotSupported),
        ("InternalFailureException", Self::InternalFailure),
        ("InvalidNextTokenException", Self::InvalidNextToken),
        ("InvalidParameterValueException", Self::InvalidParameterValue),
        ("LimitExceededException", Self::LimitExceeded),
        ("PreconditionNotMetException", Self::PreconditionNotMet),
        ("QuickSightUserNotFoundException", Self::QuickSightUserNotFound),
        ("ResourceExistsException", Self::ResourceExists),
        ("ResourceNotFoundException", Self::ResourceNotFound),
        ("ResourceUnavailableException", Self::ResourceUnavailable),
        (
            "SessionLifetimeInMinutesInvalidException",
            Self::SessionLifetimeInMinutesInvalid,
        ),
        ("ThrottlingException", Self::Throttling),
        ("UnsupportedUserEditionException", Self::UnsupportedUserEdition),
    ];
}

impl fmt::Display for QuickSightErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub type QuickSightError = SdkError<QuickSightErrorKind>;
pub type QuickSightResult<T> = Result<T, QuickSightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seventeen_kinds_in_order() {
        assert_eq!(QuickSightErrorKind::CHAIN.len(), 17);
        assert_eq!(QuickSightErrorKind::CHAIN[0].1, QuickSightErrorKind::AccessDenied);
        assert_eq!(
            QuickSightErrorKind::CHAIN[16].1,
            QuickSightErrorKind::UnsupportedUserEdition
        );
        for (code, kind) in QuickSightErrorKind::CHAIN {
            assert_eq!(QuickSightErrorKind::from_code(code), Some(*kind));
        }
    }

    #[test]
    fn unknown_code() {
        assert_eq!(QuickSightErrorKind::from_code("ServerException"), None);
        assert_eq!(
            QuickSightErrorKind::Throttling.to_string(),
            "ThrottlingException"
        );
    }
}
