//! In-memory [`RelationshipStore`].
//!
//! Not durable. Used by tests and local tooling where no database exists.

use crate::store::{RelationshipStore, StoreResult};
use academia_models::{ParentLink, StudentId, UserId, UserRecord};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    users: Arc<RwLock<HashMap<UserId, UserRecord>>>,
    parent_links: Arc<RwLock<Vec<ParentLink>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_user(&self, user: UserRecord) {
        self.users.write().await.insert(user.id, user);
    }

    pub async fn insert_parent_link(&self, link: ParentLink) {
        self.parent_links.write().await.push(link);
    }

    /// Remove every link between `user_id` and `student`.
    pub async fn remove_parent_link(&self, user_id: UserId, student: StudentId) {
        self.parent_links
            .write()
            .await
            .retain(|link| !(link.user_id == user_id && link.student_id == student));
    }

    pub async fn set_active(&self, id: UserId, is_active: bool) {
        if let Some(user) = self.users.write().await.get_mut(&id) {
            user.is_active = is_active;
        }
    }
}

#[async_trait]
impl RelationshipStore for InMemoryStore {
    async fn find_user(&self, id: UserId) -> StoreResult<Option<UserRecord>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn parent_links_for_user(&self, user_id: UserId) -> StoreResult<Vec<ParentLink>> {
        Ok(self
            .parent_links
            .read()
            .await
            .iter()
            .filter(|link| link.user_id == user_id)
            .cloned()
            .collect())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academia_models::ParentLinkId;

    fn user(id: i64, role: &str) -> UserRecord {
        UserRecord {
            id: UserId::new(id),
            email: format!("user{id}@example.com"),
            role: role.to_string(),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_find_user() {
        let store = InMemoryStore::new();
        store.insert_user(user(7, "parent")).await;

        assert_eq!(store.find_user(UserId::new(7)).await.unwrap(), Some(user(7, "parent")));
        assert_eq!(store.find_user(UserId::new(8)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_parent_links_are_filtered_by_user() {
        let store = InMemoryStore::new();
        for (id, user_id, student) in [(1, 7, 101), (2, 7, 102), (3, 8, 103)] {
            store
                .insert_parent_link(ParentLink::new(
                    ParentLinkId::new(id),
                    UserId::new(user_id),
                    StudentId::new(student),
                ))
                .await;
        }

        let links = store.parent_links_for_user(UserId::new(7)).await.unwrap();
        let students: Vec<StudentId> = links.iter().map(|l| l.student_id).collect();
        assert_eq!(students, vec![StudentId::new(101), StudentId::new(102)]);
    }

    #[tokio::test]
    async fn test_removed_link_is_not_returned() {
        let store = InMemoryStore::new();
        store
            .insert_parent_link(ParentLink::new(
                ParentLinkId::new(1),
                UserId::new(7),
                StudentId::new(101),
            ))
            .await;
        store.remove_parent_link(UserId::new(7), StudentId::new(101)).await;

        assert!(store.parent_links_for_user(UserId::new(7)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_set_active() {
        let store = InMemoryStore::new();
        store.insert_user(user(3, "teacher")).await;
        store.set_active(UserId::new(3), false).await;

        let found = store.find_user(UserId::new(3)).await.unwrap().unwrap();
        assert!(!found.is_active);
    }
}
