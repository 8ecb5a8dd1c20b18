//! PostgreSQL-backed [`RelationshipStore`].

use crate::store::{RelationshipStore, StoreResult};
use academia_models::{ParentLink, UserId, UserRecord};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl RelationshipStore for PgStore {
    async fn find_user(&self, id: UserId) -> StoreResult<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            "SELECT id, email, role, is_active FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn parent_links_for_user(&self, user_id: UserId) -> StoreResult<Vec<ParentLink>> {
        let links = sqlx::query_as::<_, ParentLink>(
            "SELECT id, user_id, student_id, relationship_type FROM parents WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(links)
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
