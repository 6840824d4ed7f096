use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{
    model::role::Role,
    server::error::{auth::AuthError, Error},
};

/// Header carrying the caller's club role, set by the authenticating gateway
pub static ROLE_HEADER: &str = "x-club-role";

/// Club role of the caller.
///
/// Read from the [`ROLE_HEADER`] header; a request without the header is treated as a
/// plain `user`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentRole(pub Role);

impl CurrentRole {
    /// Ensures the caller may perform an operation requiring `required`
    ///
    /// # Returns
    /// - `Ok(())` - The caller's role satisfies the requirement
    /// - `Err(Error::AuthError(AuthError::Forbidden))` - It does not
    pub fn require(&self, required: Role) -> Result<(), Error> {
        if !self.0.satisfies(required) {
            return Err(AuthError::Forbidden(required).into());
        }

        Ok(())
    }
}

impl<S> FromRequestParts<S> for CurrentRole
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(ROLE_HEADER) else {
            return Ok(Self(Role::default()));
        };

        let value = value
            .to_str()
            .map_err(|_| AuthError::MalformedRoleHeader)?;
        let role = value
            .trim()
            .to_lowercase()
            .parse::<Role>()
            .map_err(AuthError::InvalidRole)?;

        Ok(Self(role))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    async fn extract(header: Option<&str>) -> Result<CurrentRole, Error> {
        let mut builder = Request::builder();
        if let Some(value) = header {
            builder = builder.header(ROLE_HEADER, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();

        CurrentRole::from_request_parts(&mut parts, &()).await
    }

    /// Expect a request without the header to act as a plain user
    #[tokio::test]
    async fn defaults_to_user() {
        let role = extract(None).await.unwrap();

        assert_eq!(role, CurrentRole(Role::User));
    }

    /// Expect the header to be matched regardless of case
    #[tokio::test]
    async fn reads_role_header() {
        let role = extract(Some("Admin")).await.unwrap();

        assert_eq!(role, CurrentRole(Role::Admin));
    }

    /// Expect an unknown role to be rejected
    #[tokio::test]
    async fn rejects_unknown_role() {
        let result = extract(Some("umpire")).await;

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::InvalidRole(_)))
        ));
    }

    /// Expect admin to satisfy every requirement and other roles only their own
    #[test]
    fn require_role() {
        assert!(CurrentRole(Role::Admin).require(Role::Player).is_ok());
        assert!(CurrentRole(Role::Player).require(Role::Player).is_ok());
        assert!(matches!(
            CurrentRole(Role::User).require(Role::Player),
            Err(Error::AuthError(AuthError::Forbidden(Role::Player)))
        ));
    }
}
