//! Access decision unit.
//!
//! Decides whether a caller may perform an operation on a kind of resource. Each resource
//! kind carries an ordered list of predicates which are evaluated in turn; the first deny
//! wins and no predicate after it runs. Everything here is pure: no I/O, no clocks, no
//! shared state.

use crate::server::error::auth::AuthError;

/// Operation requested on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Retrieve,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Safe operations never modify state.
    pub fn is_safe(self) -> bool {
        matches!(self, Self::List | Self::Retrieve)
    }
}

/// Access policy attached to a resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Open to everyone, anonymous writes included.
    Public,
    /// Readable by everyone, writable only by the owner.
    Owned,
    /// Every operation requires an authenticated caller.
    Gated,
}

/// Identity a valid token resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i32,
    pub username: String,
}

/// Credentials presented with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// No token was presented.
    Anonymous,
    /// A token was presented but did not resolve.
    Invalid,
    Authenticated(Identity),
}

impl Credentials {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    Unauthenticated,
    InvalidToken,
    NotOwner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    /// Converts a deny into the matching `AuthError`.
    pub fn into_result(self) -> Result<(), AuthError> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny(DenyReason::Unauthenticated) => Err(AuthError::Unauthenticated),
            Self::Deny(DenyReason::InvalidToken) => Err(AuthError::InvalidToken),
            Self::Deny(DenyReason::NotOwner) => Err(AuthError::NotOwner),
        }
    }
}

/// Everything a predicate may look at.
#[derive(Debug, Clone, Copy)]
pub struct AccessRequest<'a> {
    pub operation: Operation,
    /// Owner of the loaded instance; `None` for view-level checks and creation.
    pub owner: Option<i32>,
    pub credentials: &'a Credentials,
}

type Predicate = fn(&AccessRequest<'_>) -> Decision;

const PUBLIC_POLICY: &[Predicate] = &[valid_credentials];
const OWNED_POLICY: &[Predicate] = &[
    valid_credentials,
    authenticated_or_read_only,
    owner_or_read_only,
];
const GATED_POLICY: &[Predicate] = &[valid_credentials, authenticated];

impl ResourceKind {
    fn policy(self) -> &'static [Predicate] {
        match self {
            Self::Public => PUBLIC_POLICY,
            Self::Owned => OWNED_POLICY,
            Self::Gated => GATED_POLICY,
        }
    }
}

/// Decides an access request.
///
/// # Arguments
/// - `operation` - Operation being attempted
/// - `kind` - Access policy of the targeted resource type
/// - `owner` - Owner id of the loaded instance, `None` before the instance is loaded
/// - `credentials` - Credentials the caller presented
///
/// # Returns
/// - `Decision::Allow` - Every predicate of the kind's policy allowed
/// - `Decision::Deny(reason)` - Reason of the first predicate that denied
pub fn decide(
    operation: Operation,
    kind: ResourceKind,
    owner: Option<i32>,
    credentials: &Credentials,
) -> Decision {
    let request = AccessRequest {
        operation,
        owner,
        credentials,
    };

    kind.policy()
        .iter()
        .map(|predicate| predicate(&request))
        .find(|decision| *decision != Decision::Allow)
        .unwrap_or(Decision::Allow)
}

fn valid_credentials(request: &AccessRequest<'_>) -> Decision {
    match request.credentials {
        Credentials::Invalid => Decision::Deny(DenyReason::InvalidToken),
        _ => Decision::Allow,
    }
}

fn authenticated(request: &AccessRequest<'_>) -> Decision {
    match request.credentials.identity() {
        Some(_) => Decision::Allow,
        None => Decision::Deny(DenyReason::Unauthenticated),
    }
}

fn authenticated_or_read_only(request: &AccessRequest<'_>) -> Decision {
    if request.operation.is_safe() {
        return Decision::Allow;
    }

    authenticated(request)
}

fn owner_or_read_only(request: &AccessRequest<'_>) -> Decision {
    if request.operation.is_safe() {
        return Decision::Allow;
    }

    let Some(owner) = request.owner else {
        return Decision::Allow;
    };

    match request.credentials.identity() {
        Some(identity) if identity.user_id == owner => Decision::Allow,
        _ => Decision::Deny(DenyReason::NotOwner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_OPERATIONS: [Operation; 5] = [
        Operation::List,
        Operation::Retrieve,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
    ];

    fn user(id: i32) -> Credentials {
        Credentials::Authenticated(Identity {
            user_id: id,
            username: format!("user{}", id),
        })
    }

    #[test]
    fn invalid_token_is_denied_on_every_kind() {
        for kind in [ResourceKind::Public, ResourceKind::Owned, ResourceKind::Gated] {
            for operation in ALL_OPERATIONS {
                assert_eq!(
                    decide(operation, kind, None, &Credentials::Invalid),
                    Decision::Deny(DenyReason::InvalidToken),
                    "{:?} {:?}",
                    kind,
                    operation
                );
            }
        }
    }

    #[test]
    fn public_allows_anonymous_everything() {
        for operation in ALL_OPERATIONS {
            assert_eq!(
                decide(operation, ResourceKind::Public, Some(1), &Credentials::Anonymous),
                Decision::Allow
            );
        }
    }

    #[test]
    fn owned_allows_anonymous_reads() {
        for operation in [Operation::List, Operation::Retrieve] {
            assert_eq!(
                decide(operation, ResourceKind::Owned, Some(1), &Credentials::Anonymous),
                Decision::Allow
            );
        }
    }

    #[test]
    fn owned_denies_anonymous_writes() {
        for operation in [Operation::Create, Operation::Update, Operation::Delete] {
            assert_eq!(
                decide(operation, ResourceKind::Owned, None, &Credentials::Anonymous),
                Decision::Deny(DenyReason::Unauthenticated)
            );
            assert_eq!(
                decide(operation, ResourceKind::Owned, Some(1), &Credentials::Anonymous),
                Decision::Deny(DenyReason::Unauthenticated)
            );
        }
    }

    #[test]
    fn owned_view_level_write_allows_any_authenticated_caller() {
        assert_eq!(
            decide(Operation::Create, ResourceKind::Owned, None, &user(7)),
            Decision::Allow
        );
        assert_eq!(
            decide(Operation::Update, ResourceKind::Owned, None, &user(7)),
            Decision::Allow
        );
    }

    #[test]
    fn owned_object_level_write_requires_owner() {
        for operation in [Operation::Update, Operation::Delete] {
            assert_eq!(
                decide(operation, ResourceKind::Owned, Some(1), &user(2)),
                Decision::Deny(DenyReason::NotOwner)
            );
            assert_eq!(
                decide(operation, ResourceKind::Owned, Some(1), &user(1)),
                Decision::Allow
            );
        }
    }

    #[test]
    fn owned_reads_ignore_ownership() {
        assert_eq!(
            decide(Operation::Retrieve, ResourceKind::Owned, Some(1), &user(2)),
            Decision::Allow
        );
    }

    #[test]
    fn gated_denies_anonymous_reads_and_writes() {
        for operation in ALL_OPERATIONS {
            assert_eq!(
                decide(operation, ResourceKind::Gated, None, &Credentials::Anonymous),
                Decision::Deny(DenyReason::Unauthenticated)
            );
        }
    }

    #[test]
    fn gated_allows_authenticated_caller() {
        for operation in ALL_OPERATIONS {
            assert_eq!(
                decide(operation, ResourceKind::Gated, None, &user(3)),
                Decision::Allow
            );
        }
    }

    #[test]
    fn first_deny_wins() {
        // An anonymous update fails authentication before ownership is ever considered.
        assert_eq!(
            decide(Operation::Update, ResourceKind::Owned, Some(5), &Credentials::Anonymous),
            Decision::Deny(DenyReason::Unauthenticated)
        );
    }

    #[test]
    fn deny_reasons_map_to_auth_errors() {
        assert_eq!(Decision::Allow.into_result(), Ok(()));
        assert_eq!(
            Decision::Deny(DenyReason::Unauthenticated).into_result(),
            Err(AuthError::Unauthenticated)
        );
        assert_eq!(
            Decision::Deny(DenyReason::InvalidToken).into_result(),
            Err(AuthError::InvalidToken)
        );
        assert_eq!(
            Decision::Deny(DenyReason::NotOwner).into_result(),
            Err(AuthError::NotOwner)
        );
    }
}
