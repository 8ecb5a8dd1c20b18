use academia_models::{ParentLink, UserId, UserRecord};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("DATABASE_URL is not set")]
    MissingUrl,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read access to the persisted facts authorization depends on.
///
/// Implementations never cache across calls; every request sees current
/// state, so a removed link or a deactivated user takes effect immediately.
#[async_trait]
pub trait RelationshipStore: Send + Sync {
    /// The user with `id`, if any.
    async fn find_user(&self, id: UserId) -> StoreResult<Option<UserRecord>>;

    /// Every parent link whose parent account is `user_id`.
    async fn parent_links_for_user(&self, user_id: UserId) -> StoreResult<Vec<ParentLink>>;

    fn backend_name(&self) -> &'static str;
}
