use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use kernel::model::{id::UserId, user::User};
use registry::AppRegistry;
use shared::error::AppError;
use uuid::Uuid;

/// Header carrying the acting user's id, resolved by the identity provider
/// in front of this service. The id is opaque input here; display data comes
/// from the users table.
pub const USER_ID_HEADER: &str = "x-user-id";

pub struct AuthorizedUser {
    pub user: User,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.user.user_id
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::UnauthenticatedError)?;
        let user_id: UserId = raw
            .parse::<Uuid>()
            .map_err(|_| AppError::UnauthenticatedError)?
            .into();
        let user = registry
            .user_repository()
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;
        Ok(Self { user })
    }
}
