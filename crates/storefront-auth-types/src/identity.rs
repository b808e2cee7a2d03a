//! Gateway-injected identity headers extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

/// Authenticated actor injected by the gateway via `x-storefront-user-id`
/// and `x-storefront-user-staff` headers.
///
/// Returns 401 if either header is absent or cannot be parsed. Ownership
/// and staff enforcement (403) is done by handlers after extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub is_staff: bool,
}

/// Identity for endpoints that also serve anonymous callers.
///
/// `None` when the identity headers are absent; malformed headers are
/// treated as anonymous rather than rejected, since the endpoint does not
/// require authentication anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaybeIdentity(pub Option<Identity>);

fn parse_staff(value: &str) -> Option<bool> {
    match value {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

fn identity_from_parts(parts: &Parts) -> Option<Identity> {
    let user_id = parts
        .headers
        .get("x-storefront-user-id")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<Uuid>().ok())?;

    let is_staff = parts
        .headers
        .get("x-storefront-user-staff")
        .and_then(|v| v.to_str().ok())
        .and_then(parse_staff)?;

    Some(Identity { user_id, is_staff })
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = identity_from_parts(parts);
        async move { identity.ok_or(StatusCode::UNAUTHORIZED) }
    }
}

impl<S> FromRequestParts<S> for MaybeIdentity
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = identity_from_parts(parts);
        async move { Ok(Self(identity)) }
    }
}
